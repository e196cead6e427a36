//! Submenu stack and prompt tests

use rust_micro_cli::config::MENU_DEPTH;
use rust_micro_cli::console::{Args, CommandEntry, ConsoleError, Context, MenuStack};

fn cmd_nop(_ctx: &mut Context<'_>, _args: &Args<'_>) -> Result<(), ConsoleError> {
    Ok(())
}

static LEAF: &[CommandEntry] = &[CommandEntry::command("leaf", "Leaf command", cmd_nop)];

static NET: &[CommandEntry] = &[
    CommandEntry::command("dhcp", "Toggle DHCP", cmd_nop),
    CommandEntry::submenu("wifi", "Wireless", LEAF),
];

static ROOT: &[CommandEntry] = &[
    CommandEntry::command("led", "Switch LED", cmd_nop),
    CommandEntry::submenu("net", "Network", NET),
];

fn entry(table: &'static [CommandEntry], name: &str) -> &'static CommandEntry {
    table.iter().find(|e| e.name == name).unwrap()
}

#[test]
fn test_root_prompt() {
    let stack = MenuStack::new(ROOT, ">>");

    assert_eq!(stack.prompt(), "\r\n>>");
    assert_eq!(stack.depth(), 0);
    assert!(core::ptr::eq(stack.current_table(), ROOT));
}

#[test]
fn test_push_changes_scope_and_prompt() {
    let mut stack = MenuStack::new(ROOT, ">>");

    assert!(matches!(stack.push(entry(ROOT, "net")), Ok(None)));
    assert!(core::ptr::eq(stack.current_table(), NET));
    assert_eq!(stack.prompt(), "\r\n\\net>>");

    stack.push(entry(NET, "wifi")).unwrap();
    assert!(core::ptr::eq(stack.current_table(), LEAF));
    assert_eq!(stack.prompt(), "\r\n\\net\\wifi>>");
}

#[test]
fn test_push_pop_symmetry() {
    let mut stack = MenuStack::new(ROOT, ">>");
    stack.push(entry(ROOT, "net")).unwrap();

    let prompt_before = stack.prompt().to_string();
    let table_before = stack.current_table();

    stack.push(entry(NET, "wifi")).unwrap();
    let popped = stack.pop().unwrap();

    assert_eq!(popped.name, "wifi");
    assert_eq!(stack.prompt(), prompt_before);
    assert!(core::ptr::eq(stack.current_table(), table_before));
}

#[test]
fn test_pop_empty_is_noop() {
    let mut stack = MenuStack::new(ROOT, ">>");

    assert!(stack.pop().is_none());
    assert_eq!(stack.prompt(), "\r\n>>");
    assert!(core::ptr::eq(stack.current_table(), ROOT));
}

#[test]
fn test_push_function_entry_rejected() {
    let mut stack = MenuStack::new(ROOT, ">>");
    let result = std::panic::catch_unwind(move || {
        let mut stack = MenuStack::new(ROOT, ">>");
        stack.push(entry(ROOT, "led"))
    });

    // Debug builds assert, release builds report the error
    match result {
        Ok(res) => assert_eq!(res.map(|e| e.map(|e| e.name)), Err(ConsoleError::InvalidState)),
        Err(_) => assert!(cfg!(debug_assertions)),
    }
    assert_eq!(stack.depth(), 0);
    assert!(stack.pop().is_none());
}

#[test]
fn test_overflow_replaces_innermost_frame() {
    let mut stack = MenuStack::new(ROOT, ">");
    let net = entry(ROOT, "net");
    let wifi = entry(NET, "wifi");

    for _ in 0..MENU_DEPTH {
        assert!(matches!(stack.push(net), Ok(None)));
    }
    assert_eq!(stack.depth(), MENU_DEPTH);

    // One more: innermost frame is evicted, depth stays at the limit
    let evicted = stack.push(wifi).unwrap();
    assert_eq!(evicted.map(|e| e.name), Some("net"));
    assert_eq!(stack.depth(), MENU_DEPTH);
    assert_eq!(stack.frames().last().map(|e| e.name), Some("wifi"));
    assert!(core::ptr::eq(stack.current_table(), LEAF));
}

#[test]
fn test_reset_clears_frames() {
    let mut stack = MenuStack::new(ROOT, ">>");
    stack.push(entry(ROOT, "net")).unwrap();

    stack.reset(NET, "$");

    assert_eq!(stack.depth(), 0);
    assert_eq!(stack.prompt(), "\r\n$");
    assert!(core::ptr::eq(stack.root(), NET));
}
