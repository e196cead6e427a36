//! Module: config
//!
//! Purpose: Build-time capacities and presentation strings for the console.
//!
//! Architecture:
//! - Capacities are `const`s: every buffer in the engine is a fixed array
//!   sized from here, nothing grows at runtime.
//! - Presentation (banner, version, prompt marker) is a plain struct handed
//!   to `Console::with_config`.

/// Line buffer capacity in bytes, including the terminator slot.
///
/// At most `MAX_CMDLINE - 1` characters are accepted.
pub const MAX_CMDLINE: usize = 32;

/// Scratch buffer used for engine-formatted messages.
pub const SCRATCH_LEN: usize = 64;

/// Maximum number of tokens kept by the tokenizer (command name included).
pub const MAX_ARGS: usize = 6;

/// Prompt string capacity.
pub const MAX_PROMPT: usize = 32;

/// Number of history slots.
pub const HISTORY_COUNT: usize = 16;

/// Maximum submenu nesting depth.
pub const MENU_DEPTH: usize = 4;

/// Maximum number of autocomplete candidates shown, `...` marker included.
pub const AUTOCOMP_NUM: usize = 16;

/// Candidates per row in the autocomplete listing.
pub const COMPLETION_COLUMNS: usize = 4;

/// Column width in the autocomplete listing.
pub const COMPLETION_WIDTH: usize = 16;

/// Line terminator emitted on output.
pub const NEWLINE: &str = "\r\n";

/// Separator between submenu names in the prompt.
pub const PATH_SEPARATOR: &str = "\\";

/// Version text stamped by build.rs (includes git hash).
pub const VERSION: &str = env!("VERSION_STRING");

/// Default startup banner.
pub const DEFAULT_BANNER: &str = concat!(
    "\r\n**********************************************************",
    "\r\n*               MicroCli embedded console                *",
    "\r\n**********************************************************\r\n",
);

/// Console presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Printed on initialization and at the top of `help`.
    pub banner: &'static str,
    /// Printed by `ver`.
    pub version: &'static str,
    /// Appended to the prompt after the submenu path.
    pub prompt_marker: &'static str,
}

impl ConsoleConfig {
    /// Default settings, usable in `const` context.
    pub const fn new() -> Self {
        Self {
            banner: DEFAULT_BANNER,
            version: VERSION,
            prompt_marker: ">>",
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new()
    }
}
