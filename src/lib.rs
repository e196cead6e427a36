//! # RustMicroCli
//!
//! Interactive command line for embedded serial consoles.
//!
//! ## Architecture
//!
//! Bytes flow one way through a single [`Console`]:
//! - Escape decoder picks out cursor keys, everything else edits the line
//! - Enter tokenizes the line and resolves the first token against the
//!   system table, then the table in scope
//! - Handlers run synchronously; submenu entries change the table in scope
//!
//! Commands are declared as `&'static` tables with [`command!`] and
//! [`submenu!`]. Output goes through `core::fmt::Write`, input comes from
//! whatever [`Port`] the application polls.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod log_globals;
pub mod logging;
pub mod port;

#[cfg(feature = "esp32")]
pub mod uart_port;

pub use config::ConsoleConfig;
pub use console::{Args, CommandEntry, Console, ConsoleError, Context, Dispatch};
pub use log_globals::CONSOLE_LOG;
pub use port::{Port, PortWriter};
