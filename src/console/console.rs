//! Main console struct integrating all components
//!
//! Per received byte: escape decoder → line edit or history recall → on
//! Enter: tokenize → resolve → run handler or enter submenu → clear line
//! and reprint the prompt.

use core::fmt::{self, Write};

use super::commands::{resolve, CommandEntry, Context, Payload};
use super::completion::{complete, Completion};
use super::escape::{CursorKey, Decoded, EscapeDecoder};
use super::parser::{tokenize, Args};
use super::scratch::Scratch;
use super::system::print_listing;
use super::{ConsoleError, History, LineBuffer, MenuStack};
use crate::config::{
    ConsoleConfig, COMPLETION_COLUMNS, COMPLETION_WIDTH, MAX_CMDLINE, NEWLINE, SCRATCH_LEN,
};
use crate::log_globals::CONSOLE_LOG;
use crate::port::{Port, PortWriter};
use crate::{cli_debug, cli_info, cli_trace, cli_warn};

/// Raw input diversion: receives every byte instead of the line editor
pub type InputHook = fn(&[u8], &mut dyn Write);

/// What happened to a submitted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing but blanks
    Blank,
    /// Handler ran and succeeded
    Executed,
    /// Submenu entered
    Entered,
    /// First token matched no command
    Unknown,
    /// Handler ran and returned an error
    Failed(ConsoleError),
}

#[derive(Clone, Copy, PartialEq)]
enum LineState {
    Pending,
    Complete,
}

/// Console state machine
pub struct Console {
    line: LineBuffer,
    history: History,
    escape: EscapeDecoder,
    menu: MenuStack,
    /// Bounded buffer for engine-formatted messages
    scratch: Scratch<SCRATCH_LEN>,
    hook: Option<InputHook>,
    config: ConsoleConfig,
    initialized: bool,
}

impl Console {
    /// Create new console with default presentation
    pub const fn new() -> Self {
        Self::with_config(ConsoleConfig::new())
    }

    /// Create new console with custom banner, version or prompt marker
    pub const fn with_config(config: ConsoleConfig) -> Self {
        Self {
            line: LineBuffer::new(),
            history: History::new(),
            escape: EscapeDecoder::new(),
            menu: MenuStack::empty(),
            scratch: Scratch::new(),
            hook: None,
            config,
            initialized: false,
        }
    }

    /// Reset all state, install `root`, print banner and prompt
    pub fn initialize(&mut self, root: &'static [CommandEntry], out: &mut dyn Write) {
        *self = Self::with_config(self.config);
        self.menu.reset(root, self.config.prompt_marker);
        self.initialized = true;

        cli_info!(CONSOLE_LOG, "console ready, {} root commands", root.len());

        let _ = out.write_str(self.config.banner);
        self.print_prompt(out);
    }

    /// Feed received bytes.
    ///
    /// Stops at the first line terminator: at most one command runs per
    /// call and any bytes after the terminator are discarded. Returns
    /// `Ok(None)` while the line is still being edited.
    pub fn process_bytes(
        &mut self,
        bytes: &[u8],
        out: &mut dyn Write,
    ) -> Result<Option<Dispatch>, ConsoleError> {
        self.ensure_initialized()?;

        if let Some(hook) = self.hook {
            hook(bytes, out);
            return Ok(None);
        }

        for &byte in bytes {
            if self.process_byte(byte, out) == LineState::Complete {
                let line = self.line.clone();
                return self.execute_line(line.as_str(), out).map(Some);
            }
        }
        Ok(None)
    }

    /// Run a line directly, bypassing the editor.
    ///
    /// The edit line is cleared and the prompt reprinted whatever the
    /// outcome.
    pub fn execute_line(&mut self, text: &str, out: &mut dyn Write) -> Result<Dispatch, ConsoleError> {
        self.ensure_initialized()?;

        // Tokens borrow from a private copy, `text` is saved untouched
        let mut line = LineBuffer::new();
        line.set(text);
        let mut bytes = [0u8; MAX_CMDLINE];
        let copy = &mut bytes[..line.len()];
        copy.copy_from_slice(line.as_bytes());
        let args = tokenize(copy);

        let outcome = if args.is_empty() {
            Ok(Dispatch::Blank)
        } else {
            self.dispatch(text, &args, out)
        };

        self.line.clear();
        self.print_prompt(out);
        outcome
    }

    /// Print a string through the console output
    pub fn print_string(&self, text: &str, out: &mut dyn Write) {
        let _ = out.write_str(text);
    }

    /// Install (`Some`) or remove (`None`) the raw input hook.
    ///
    /// Returns the previously installed hook.
    pub fn set_input_hook(&mut self, hook: Option<InputHook>) -> Option<InputHook> {
        if hook.is_some() {
            cli_info!(CONSOLE_LOG, "input hook installed");
        } else if self.hook.is_some() {
            cli_info!(CONSOLE_LOG, "input hook removed");
        }
        core::mem::replace(&mut self.hook, hook)
    }

    /// Read once from `port` and process what arrived
    pub fn poll_port<P: Port + ?Sized>(
        &mut self,
        port: &mut P,
        buf: &mut [u8],
    ) -> Result<Option<Dispatch>, ConsoleError> {
        let len = port.read(buf).min(buf.len());
        if len == 0 {
            return Ok(None);
        }
        let mut out = PortWriter::new(port);
        self.process_bytes(&buf[..len], &mut out)
    }

    /// Print the prompt
    pub fn print_prompt(&self, out: &mut dyn Write) {
        let _ = out.write_str(self.menu.prompt());
    }

    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn menu(&self) -> &MenuStack {
        &self.menu
    }

    pub fn prompt(&self) -> &str {
        self.menu.prompt()
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn ensure_initialized(&self) -> Result<(), ConsoleError> {
        debug_assert!(self.initialized, "console used before initialize()");
        if self.initialized {
            Ok(())
        } else {
            Err(ConsoleError::NotInitialized)
        }
    }

    fn process_byte(&mut self, byte: u8, out: &mut dyn Write) -> LineState {
        let byte = match self.escape.feed(byte) {
            Decoded::Consumed => return LineState::Pending,
            Decoded::Key(key) => {
                self.handle_cursor_key(key, out);
                return LineState::Pending;
            }
            Decoded::Pass(byte) => byte,
        };

        match byte {
            // Enter
            b'\r' | b'\n' => {
                let _ = out.write_str(NEWLINE);
                return LineState::Complete;
            }

            // Backspace
            0x08 => {
                if self.line.delete_last().is_some() {
                    // Echo: backspace, space, backspace
                    let _ = out.write_str("\x08 \x08");
                }
            }

            // Tab
            b'\t' => self.handle_tab(out),

            // Printable character, DEL included
            0x20..=0x7F => {
                if self.line.push(byte) {
                    let _ = out.write_char(byte as char);
                } else {
                    cli_trace!(CONSOLE_LOG, "line full, dropped 0x{:02x}", byte);
                }
            }

            _ => {}
        }
        LineState::Pending
    }

    fn dispatch(&mut self, text: &str, args: &Args<'_>, out: &mut dyn Write) -> Result<Dispatch, ConsoleError> {
        let name = args.name();
        cli_debug!(CONSOLE_LOG, "line '{}' ({} args)", text, args.argc());

        let Some(entry) = resolve(name, self.menu.current_table()) else {
            cli_warn!(CONSOLE_LOG, "unknown command '{}'", name);
            self.emit(out, format_args!("\"{}\" is not a valid command{}", name, NEWLINE));
            return Ok(Dispatch::Unknown);
        };

        self.history.save(text);

        match entry.payload {
            Payload::Function(handler) => {
                let mut ctx = Context::new(out, &mut self.menu, &self.config);
                match handler(&mut ctx, args) {
                    Ok(()) => Ok(Dispatch::Executed),
                    Err(err) => {
                        cli_warn!(CONSOLE_LOG, "'{}' failed: {}", entry.name, err);
                        self.emit(out, format_args!("{}{}", err, NEWLINE));
                        Ok(Dispatch::Failed(err))
                    }
                }
            }
            Payload::Submenu(_) => {
                if let Some(evicted) = self.menu.push(entry)? {
                    cli_warn!(CONSOLE_LOG, "menu depth limit, replaced '{}'", evicted.name);
                }
                Ok(Dispatch::Entered)
            }
        }
    }

    fn handle_cursor_key(&mut self, key: CursorKey, out: &mut dyn Write) {
        let recalled = match key {
            CursorKey::Up => self.history.previous(),
            CursorKey::Down => self.history.next(),
        };
        if let Some(recalled) = recalled {
            Self::replace_line(&mut self.line, recalled, out);
        }
    }

    fn handle_tab(&mut self, out: &mut dyn Write) {
        match complete(self.line.as_str(), self.menu.current_table()) {
            Completion::Listing => {
                let _ = out.write_str(NEWLINE);
                let mut ctx = Context::new(out, &mut self.menu, &self.config);
                print_listing(&mut ctx);
                self.print_prompt(out);
            }
            Completion::NoMatch => {}
            Completion::Unique(name) => Self::replace_line(&mut self.line, name, out),
            Completion::Ambiguous(candidates) => {
                let _ = out.write_str(NEWLINE);
                for (i, name) in candidates.iter().enumerate() {
                    if (i + 1) % COMPLETION_COLUMNS == 0 {
                        self.emit(out, format_args!("{}{}", name, NEWLINE));
                    } else {
                        self.emit(out, format_args!("{:<width$}", name, width = COMPLETION_WIDTH));
                    }
                }
                let _ = out.write_str(NEWLINE);
                self.print_prompt(out);
                let _ = out.write_str(self.line.as_str());
            }
        }
    }

    /// Erase the echoed line and show `text` in its place
    fn replace_line(line: &mut LineBuffer, text: &str, out: &mut dyn Write) {
        if !line.is_empty() {
            // Cursor left by len, erase to end of line
            let _ = write!(out, "\x1b[{}D\x1b[J", line.len());
        }
        line.set(text);
        let _ = out.write_str(line.as_str());
    }

    /// Format into the scratch buffer (truncating), then write it out
    fn emit(&mut self, out: &mut dyn Write, args: fmt::Arguments<'_>) {
        let text = self.scratch.format(args);
        let _ = out.write_str(text);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
