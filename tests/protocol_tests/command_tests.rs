//! Tests for request line parsing

use fakenut::protocol::{parse_line, CommandType};

// =============================================================================
// Tokenizing
// =============================================================================

#[test]
fn test_parse_command_only() {
    let cmd = parse_line("VER");
    assert_eq!(cmd.command, "VER");
    assert_eq!(cmd.subcommand(), "");
    assert_eq!(cmd.arg(1), "");
    assert_eq!(cmd.arg(2), "");
}

#[test]
fn test_parse_all_positionals() {
    let cmd = parse_line("GET CMDDESC FakeUPS beeper.on");
    assert_eq!(cmd.command, "GET");
    assert_eq!(cmd.subcommand(), "CMDDESC");
    assert_eq!(cmd.arg(1), "FakeUPS");
    assert_eq!(cmd.arg(2), "beeper.on");
}

#[test]
fn test_parse_drops_tokens_past_fourth() {
    let cmd = parse_line("SET VAR FakeUPS ups.delay.start 60");
    assert_eq!(cmd.args, ["VAR", "FakeUPS", "ups.delay.start"]);
}

#[test]
fn test_parse_consecutive_spaces_yield_empty_tokens() {
    let cmd = parse_line("LIST  VAR FakeUPS");
    assert_eq!(cmd.command, "LIST");
    assert_eq!(cmd.subcommand(), "");
    assert_eq!(cmd.arg(1), "VAR");
    assert_eq!(cmd.arg(2), "FakeUPS");
}

#[test]
fn test_parse_empty_line() {
    let cmd = parse_line("");
    assert_eq!(cmd.command, "");
    assert!(cmd.args.iter().all(String::is_empty));
    assert_eq!(cmd.command_type(), None);
}

#[test]
fn test_parse_out_of_range_arg_is_empty() {
    let cmd = parse_line("LIST UPS");
    assert_eq!(cmd.arg(7), "");
}

// =============================================================================
// Command Recognition
// =============================================================================

#[test]
fn test_command_type_is_case_sensitive() {
    assert_eq!(parse_line("HELP").command_type(), Some(CommandType::Help));
    assert_eq!(parse_line("help").command_type(), None);
    assert_eq!(parse_line("Help").command_type(), None);
}

#[test]
fn test_every_command_token_round_trips() {
    for command in CommandType::ALL {
        assert_eq!(CommandType::from_token(command.as_str()), Some(command));
    }
}
