//! Serial console: line editor, history, submenus, completion, dispatch
//!
//! Lazy polling - the caller feeds received bytes, nothing runs on its own.
//! Zero heap allocation - all buffers are fixed arrays sized in `config`.

pub mod commands;
pub mod completion;
#[allow(clippy::module_inception)]
pub mod console;
pub mod error;
pub mod escape;
pub mod history;
pub mod line_buffer;
pub mod menu;
pub mod parser;
pub mod ring;
pub mod scratch;
pub mod system;

pub use commands::{resolve, CommandEntry, CommandKind, Context, Handler, Payload};
pub use completion::{complete, Candidates, Completion, MORE_MARKER};
pub use console::{Console, Dispatch, InputHook};
pub use error::ConsoleError;
pub use escape::{CursorKey, Decoded, EscapeDecoder, EscapeState};
pub use history::History;
pub use line_buffer::LineBuffer;
pub use menu::MenuStack;
pub use parser::{parse_int, tokenize, Args};
pub use ring::RingIndex;
pub use scratch::Scratch;
pub use system::SYSTEM_COMMANDS;
