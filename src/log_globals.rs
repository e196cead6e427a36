//! Global log stream instance.
//!
//! Every console instance logs here; the main loop drains it to the port
//! (or anywhere else) between polls.

use crate::logging::LogStream;

/// Console engine log stream.
///
/// Producers: console instances. Single consumer: the main loop drain.
pub static CONSOLE_LOG: LogStream = LogStream::new();
