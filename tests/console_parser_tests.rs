//! Tokenizer and integer parsing tests

use rust_micro_cli::config::MAX_ARGS;
use rust_micro_cli::console::parser::{parse_int, tokenize};
use rust_micro_cli::console::{Args, ConsoleError};

/// Tokenize a copy of `line`, tokens borrow from `buf`
fn split<'a>(buf: &'a mut Vec<u8>, line: &str) -> Args<'a> {
    buf.clear();
    buf.extend_from_slice(line.as_bytes());
    tokenize(buf)
}

#[test]
fn test_tokenize_simple_command() {
    let mut buf = Vec::new();
    let args = split(&mut buf, "help");
    assert_eq!(args.argc(), 1);
    assert_eq!(args.name(), "help");
    assert_eq!(args.arg(0), None);
}

#[test]
fn test_tokenize_with_args() {
    let mut buf = Vec::new();
    let args = split(&mut buf, "set rate 25");
    assert_eq!(args.as_slice(), &["set", "rate", "25"]);
    assert_eq!(args.arg(0), Some("rate"));
    assert_eq!(args.arg(1), Some("25"));
    assert_eq!(args.arg(2), None);
}

#[test]
fn test_tokenize_skips_blanks() {
    let mut buf = Vec::new();
    let args = split(&mut buf, " \t show \r  status\t");
    assert_eq!(args.as_slice(), &["show", "status"]);
}

#[test]
fn test_tokenize_empty_line() {
    let mut buf = Vec::new();
    assert!(split(&mut buf, "").is_empty());
    assert!(split(&mut buf, "  \t\r").is_empty());
    assert_eq!(split(&mut buf, "").name(), "");
}

#[test]
fn test_tokenize_quoted_argument() {
    let mut buf = Vec::new();
    let args = split(&mut buf, "cmd \"arg one\" arg2");
    assert_eq!(args.as_slice(), &["cmd", "arg one", "arg2"]);
}

#[test]
fn test_tokenize_unterminated_quote() {
    let mut buf = Vec::new();
    let args = split(&mut buf, "cmd \"oops");
    assert_eq!(args.as_slice(), &["cmd", "oops"]);
}

#[test]
fn test_tokenize_quote_inside_token_groups() {
    let mut buf = Vec::new();
    let args = split(&mut buf, "set name=\"a b\" x");
    assert_eq!(args.as_slice(), &["set", "name=a b", "x"]);
}

#[test]
fn test_tokenize_quote_then_text_is_one_token() {
    let mut buf = Vec::new();
    let args = split(&mut buf, "say \"x y\"z");
    assert_eq!(args.as_slice(), &["say", "x yz"]);
}

#[test]
fn test_tokenize_empty_quotes() {
    let mut buf = Vec::new();
    let args = split(&mut buf, "a \"\" b");
    assert_eq!(args.as_slice(), &["a", "", "b"]);
}

#[test]
fn test_tokenize_multibyte_in_quotes() {
    let mut buf = Vec::new();
    let args = split(&mut buf, "\u{e9}cho \"\u{fc} x\"");
    assert_eq!(args.as_slice(), &["\u{e9}cho", "\u{fc} x"]);
}

#[test]
fn test_tokenize_caps_token_count() {
    let mut buf = Vec::new();
    let args = split(&mut buf, "a b c d e f g h");
    assert_eq!(args.argc(), MAX_ARGS);
    assert_eq!(args.get(MAX_ARGS - 1), Some("f"));
    assert_eq!(args.get(MAX_ARGS), None);
}

#[test]
fn test_parse_int_decimal() {
    assert_eq!(parse_int("0"), Some(0));
    assert_eq!(parse_int("42"), Some(42));
    assert_eq!(parse_int("-17"), Some(-17));
    assert_eq!(parse_int("+8"), Some(8));
    assert_eq!(parse_int("  99"), Some(99));
}

#[test]
fn test_parse_int_prefixes() {
    assert_eq!(parse_int("0x1F"), Some(31));
    assert_eq!(parse_int("0XfF"), Some(255));
    assert_eq!(parse_int("0b101"), Some(5));
    assert_eq!(parse_int("017"), Some(15));
    assert_eq!(parse_int("-0x10"), Some(-16));
}

#[test]
fn test_parse_int_limits() {
    assert_eq!(parse_int("2147483647"), Some(i32::MAX));
    assert_eq!(parse_int("-2147483648"), Some(i32::MIN));
    assert_eq!(parse_int("2147483648"), None);
    assert_eq!(parse_int("0xFFFFFFFFF"), None);
}

#[test]
fn test_parse_int_rejects_garbage() {
    assert_eq!(parse_int(""), None);
    assert_eq!(parse_int("-"), None);
    assert_eq!(parse_int("0x"), None);
    assert_eq!(parse_int("12a"), None);
    assert_eq!(parse_int("08"), None);
    assert_eq!(parse_int("0b2"), None);
}

#[test]
fn test_args_int() {
    let mut buf = Vec::new();
    let args = split(&mut buf, "int 0x20 nope");
    assert_eq!(args.int(0), Ok(32));
    assert_eq!(args.int(1), Err(ConsoleError::InvalidValue));
    assert_eq!(args.int(2), Err(ConsoleError::MissingArg));
}

#[test]
fn test_args_parse() {
    let mut buf = Vec::new();
    let args = split(&mut buf, "set 25 x");
    assert_eq!(args.parse::<u8>(0), Ok(25));
    assert_eq!(args.parse::<u8>(1), Err(ConsoleError::InvalidValue));
    assert_eq!(args.parse::<u8>(2), Err(ConsoleError::MissingArg));
}

#[test]
fn test_args_int_in_range() {
    let mut buf = Vec::new();
    let args = split(&mut buf, "baud 3 0x10 -1 x");
    assert_eq!(args.int_in(0, 0..=15), Ok(3));
    assert_eq!(args.int_in(1, 0..=15), Err(ConsoleError::OutOfRange));
    assert_eq!(args.int_in(2, 0..=15), Err(ConsoleError::OutOfRange));
    assert_eq!(args.int_in(3, 0..=15), Err(ConsoleError::InvalidValue));
    assert_eq!(args.int_in(4, 0..=15), Err(ConsoleError::MissingArg));
}
