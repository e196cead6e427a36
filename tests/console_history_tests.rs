//! History buffer tests

use rust_micro_cli::config::HISTORY_COUNT;
use rust_micro_cli::console::history::History;

#[test]
fn test_history_empty() {
    let mut history = History::new();
    assert!(history.previous().is_none());
    assert!(history.next().is_none());
    assert!(history.is_empty());
}

#[test]
fn test_history_save_and_recall() {
    let mut history = History::new();

    history.save("help");
    history.save("show wpm");

    // Navigate back
    assert_eq!(history.previous(), Some("show wpm"));
    assert_eq!(history.previous(), Some("help"));
    assert_eq!(history.previous(), Some("help")); // stays at oldest

    // Navigate forward
    assert_eq!(history.next(), Some("show wpm"));
    assert_eq!(history.next(), Some("show wpm")); // stays at newest
}

#[test]
fn test_history_next_starts_at_oldest() {
    let mut history = History::new();

    history.save("cmd1");
    history.save("cmd2");
    history.save("cmd3");

    assert_eq!(history.next(), Some("cmd1"));
    assert_eq!(history.next(), Some("cmd2"));
}

#[test]
fn test_history_blank_lines_ignored() {
    let mut history = History::new();

    history.save("");
    history.save("   \t");

    assert!(history.is_empty());
    assert!(history.previous().is_none());
}

#[test]
fn test_history_dedup_consecutive() {
    let mut history = History::new();

    history.save("ver");
    history.save("ver");
    history.save("VER"); // case-insensitive

    assert_eq!(history.len(), 1);
    assert_eq!(history.iter().collect::<Vec<_>>(), ["ver"]);
}

#[test]
fn test_history_no_dedup_across_entries() {
    let mut history = History::new();

    history.save("a");
    history.save("b");
    history.save("a");

    assert_eq!(history.len(), 3);
    assert_eq!(history.iter().collect::<Vec<_>>(), ["a", "b", "a"]);
}

#[test]
fn test_history_wraparound() {
    let mut history = History::new();

    // One more than fits: cmd0 is evicted
    for i in 0..=HISTORY_COUNT {
        history.save(&format!("cmd{}", i));
    }
    assert_eq!(history.len(), HISTORY_COUNT);

    let mut seen = Vec::new();
    for _ in 0..HISTORY_COUNT {
        seen.push(history.previous().unwrap().to_string());
    }

    let expected: Vec<String> = (1..=HISTORY_COUNT).rev().map(|i| format!("cmd{}", i)).collect();
    assert_eq!(seen, expected);

    // Clamped at the oldest surviving entry
    assert_eq!(history.previous(), Some("cmd1"));
}

#[test]
fn test_history_wrapped_next_starts_at_oldest() {
    let mut history = History::new();

    for i in 0..HISTORY_COUNT + 3 {
        history.save(&format!("cmd{}", i));
    }

    assert_eq!(history.next(), Some("cmd3"));
}

#[test]
fn test_history_reset_on_save() {
    let mut history = History::new();

    history.save("cmd1");
    history.save("cmd2");

    // Navigate back
    history.previous();
    assert!(history.is_browsing());

    // Saving a new command resets navigation
    history.save("cmd3");
    assert!(!history.is_browsing());

    // Should start from newest
    assert_eq!(history.previous(), Some("cmd3"));
}

#[test]
fn test_history_duplicate_save_still_resets_browse() {
    let mut history = History::new();

    history.save("cmd1");
    history.save("cmd2");
    history.previous();
    history.previous();

    history.save("cmd2");

    assert_eq!(history.previous(), Some("cmd2"));
}
