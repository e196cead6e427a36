//! Tab completion tests

use rust_micro_cli::config::AUTOCOMP_NUM;
use rust_micro_cli::console::completion::{candidates, complete, is_prefix_match, Completion, MORE_MARKER};
use rust_micro_cli::console::{Args, CommandEntry, ConsoleError, Context};

fn cmd_nop(_ctx: &mut Context<'_>, _args: &Args<'_>) -> Result<(), ConsoleError> {
    Ok(())
}

static TEST_COMMANDS: &[CommandEntry] = &[
    CommandEntry::command("hello", "Say hello", cmd_nop),
    CommandEntry::command("history", "Show history", cmd_nop),
    CommandEntry::command("led", "Switch LED", cmd_nop),
];

macro_rules! many {
    ($($name:literal),*) => {
        &[$(CommandEntry::command($name, "", cmd_nop)),*]
    };
}

static MANY_COMMANDS: &[CommandEntry] = many!(
    "t00", "t01", "t02", "t03", "t04", "t05", "t06", "t07", "t08", "t09",
    "t10", "t11", "t12", "t13", "t14", "t15", "t16", "t17", "t18", "t19"
);

#[test]
fn test_prefix_match() {
    assert!(is_prefix_match("he", "help"));
    assert!(is_prefix_match("HE", "help"));
    assert!(is_prefix_match("help", "help"));
    assert!(!is_prefix_match("helpme", "help"));
    assert!(!is_prefix_match("x", "help"));
}

#[test]
fn test_empty_prefix_lists_commands() {
    assert_eq!(complete("", TEST_COMMANDS), Completion::Listing);
}

#[test]
fn test_no_match() {
    assert_eq!(complete("zz", TEST_COMMANDS), Completion::NoMatch);
}

#[test]
fn test_unique_match() {
    assert_eq!(complete("hi", TEST_COMMANDS), Completion::Unique("history"));
    assert_eq!(complete("L", TEST_COMMANDS), Completion::Unique("led"));
}

#[test]
fn test_exact_name_still_completes() {
    assert_eq!(complete("led", TEST_COMMANDS), Completion::Unique("led"));
}

#[test]
fn test_ambiguous_includes_system_commands() {
    let Completion::Ambiguous(found) = complete("he", TEST_COMMANDS) else {
        panic!("expected several candidates");
    };

    // System table is searched first
    assert_eq!(found.as_slice(), &["help", "hello"]);
    assert!(!found.is_truncated());
}

#[test]
fn test_truncated_candidates_end_with_marker() {
    let found = candidates("t", MANY_COMMANDS);

    assert_eq!(found.len(), AUTOCOMP_NUM);
    assert!(found.is_truncated());
    assert_eq!(found.as_slice().last(), Some(&MORE_MARKER));
    assert!(found.contains("t00"));
    assert!(found.contains("t14"));
    assert!(!found.contains("t15"));
}

#[test]
fn test_candidates_fit_exactly() {
    let found = candidates("t0", MANY_COMMANDS);

    assert_eq!(found.len(), 10);
    assert!(!found.is_truncated());
}
