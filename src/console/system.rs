//! Built-in commands, always in scope

use core::fmt::Write;

use super::commands::{CommandEntry, CommandKind, Context};
use super::parser::Args;
use super::ConsoleError;
use crate::config::NEWLINE;

/// Terminal clear screen + cursor home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[0;0H";

/// System command table, searched before the user tables
pub static SYSTEM_COMMANDS: &[CommandEntry] = &[
    CommandEntry::command("..", "Return to the parent menu", cmd_up),
    CommandEntry::command("help", "List commands", cmd_help)
        .with_help("help [name]: list commands, or show help for one\r\n"),
    CommandEntry::command("ver", "Show version", cmd_ver),
    CommandEntry::command("cls", "Clear the screen", cmd_cls),
];

/// Print banner and one row per command in scope
pub fn print_listing(ctx: &mut Context<'_>) {
    let banner = ctx.config().banner;
    ctx.print(banner);
    let system = ctx.system_table();
    let current = ctx.current_table();
    for entry in system.iter().chain(current.iter()) {
        print_row(ctx, entry);
    }
}

fn print_row(ctx: &mut Context<'_>, entry: &CommandEntry) {
    let _ = write!(ctx, "{:<16} {}{}", entry.name, entry.brief, NEWLINE);
}

// --- Command Implementations ---

fn cmd_up(ctx: &mut Context<'_>, _args: &Args<'_>) -> Result<(), ConsoleError> {
    ctx.leave_menu();
    Ok(())
}

fn cmd_help(ctx: &mut Context<'_>, args: &Args<'_>) -> Result<(), ConsoleError> {
    let Some(name) = args.arg(0) else {
        print_listing(ctx);
        return Ok(());
    };

    // Only function entries carry help, submenus count as unknown here
    match ctx.find(name).filter(|entry| entry.kind() == CommandKind::Function) {
        Some(entry) => match entry.help {
            Some(help) => ctx.print(help),
            None => print_row(ctx, entry),
        },
        None => {
            let _ = write!(ctx, "\"{}\" is not a valid command{}", name, NEWLINE);
        }
    }
    Ok(())
}

fn cmd_ver(ctx: &mut Context<'_>, _args: &Args<'_>) -> Result<(), ConsoleError> {
    let version = ctx.config().version;
    let _ = write!(ctx, "{}{}", version, NEWLINE);
    Ok(())
}

fn cmd_cls(ctx: &mut Context<'_>, _args: &Args<'_>) -> Result<(), ConsoleError> {
    ctx.print(CLEAR_SCREEN);
    Ok(())
}
