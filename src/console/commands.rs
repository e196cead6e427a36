//! Command tables and resolver
//!
//! Tables are `&'static [CommandEntry]` slices declared by the application.
//! An entry either runs a handler or opens a nested table (submenu). The
//! system table is always searched before the table currently in scope.

use core::fmt::{self, Write};

use super::menu::MenuStack;
use super::parser::Args;
use super::system::SYSTEM_COMMANDS;
use super::ConsoleError;
use crate::config::ConsoleConfig;

/// Command handler
pub type Handler = fn(&mut Context<'_>, &Args<'_>) -> Result<(), ConsoleError>;

/// What an entry does when matched
#[derive(Clone, Copy)]
pub enum Payload {
    /// Run a handler
    Function(Handler),
    /// Enter a nested command table
    Submenu(&'static [CommandEntry]),
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function"),
            Self::Submenu(table) => write!(f, "Submenu({} entries)", table.len()),
        }
    }
}

/// Entry kind, without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Function,
    Submenu,
}

/// Command descriptor
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    pub payload: Payload,
    /// Matched against the first token, ignoring ASCII case
    pub name: &'static str,
    /// One-line description shown by `help`
    pub brief: &'static str,
    /// Shown by `help <name>`
    pub help: Option<&'static str>,
}

impl CommandEntry {
    /// Entry running `handler`
    pub const fn command(name: &'static str, brief: &'static str, handler: Handler) -> Self {
        Self {
            payload: Payload::Function(handler),
            name,
            brief,
            help: None,
        }
    }

    /// Entry opening `table`
    pub const fn submenu(
        name: &'static str,
        brief: &'static str,
        table: &'static [CommandEntry],
    ) -> Self {
        Self {
            payload: Payload::Submenu(table),
            name,
            brief,
            help: None,
        }
    }

    /// Attach long help text
    pub const fn with_help(self, help: &'static str) -> Self {
        Self {
            help: Some(help),
            ..self
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self.payload {
            Payload::Function(_) => CommandKind::Function,
            Payload::Submenu(_) => CommandKind::Submenu,
        }
    }

    /// Nested table, for submenu entries
    pub fn table(&self) -> Option<&'static [CommandEntry]> {
        match self.payload {
            Payload::Submenu(table) => Some(table),
            Payload::Function(_) => None,
        }
    }

    /// Exact name match, ignoring ASCII case
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Declare a command entry.
///
/// ```ignore
/// static TABLE: &[CommandEntry] = &[
///     command!(cmd_led, "led", "Switch the LED", "led <on|off>\r\n"),
///     submenu!(NET_TABLE, "net", "Network settings"),
/// ];
/// ```
#[macro_export]
macro_rules! command {
    ($handler:expr, $name:expr, $brief:expr) => {
        $crate::console::CommandEntry::command($name, $brief, $handler)
    };
    ($handler:expr, $name:expr, $brief:expr, $help:expr) => {
        $crate::console::CommandEntry::command($name, $brief, $handler).with_help($help)
    };
}

/// Declare a submenu entry.
#[macro_export]
macro_rules! submenu {
    ($table:expr, $name:expr, $brief:expr) => {
        $crate::console::CommandEntry::submenu($name, $brief, $table)
    };
}

/// Look up `name` in the system table, then in `current`.
///
/// First match wins.
pub fn resolve(name: &str, current: &'static [CommandEntry]) -> Option<&'static CommandEntry> {
    SYSTEM_COMMANDS
        .iter()
        .chain(current.iter())
        .find(|entry| entry.matches(name))
}

/// Everything a handler may touch while it runs
pub struct Context<'a> {
    out: &'a mut dyn Write,
    menu: &'a mut MenuStack,
    config: &'a ConsoleConfig,
}

impl<'a> Context<'a> {
    pub fn new(out: &'a mut dyn Write, menu: &'a mut MenuStack, config: &'a ConsoleConfig) -> Self {
        Self { out, menu, config }
    }

    /// Table currently in scope (root or innermost submenu)
    pub fn current_table(&self) -> &'static [CommandEntry] {
        self.menu.current_table()
    }

    pub fn system_table(&self) -> &'static [CommandEntry] {
        SYSTEM_COMMANDS
    }

    /// Resolve a command name the same way the console does
    pub fn find(&self, name: &str) -> Option<&'static CommandEntry> {
        resolve(name, self.current_table())
    }

    pub fn config(&self) -> &ConsoleConfig {
        self.config
    }

    /// Submenu nesting depth
    pub fn depth(&self) -> usize {
        self.menu.depth()
    }

    /// Go up one submenu level, returning the entry that was left
    pub fn leave_menu(&mut self) -> Option<&'static CommandEntry> {
        self.menu.pop()
    }

    /// Write a string to the console output
    pub fn print(&mut self, s: &str) {
        let _ = self.out.write_str(s);
    }
}

impl Write for Context<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }
}
