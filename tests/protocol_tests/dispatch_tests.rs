//! Tests for the command dispatcher
//!
//! These tests verify:
//! - Exact reply text for every command in the dispatch table
//! - Argument validation (`ERR INVALID-ARGUMENT`)
//! - The fixed refusals for SET, INSTCMD and STARTTLS
//! - Absence of session state

use fakenut::device::{DeviceModel, DeviceRegistry};
use fakenut::protocol::{dispatch, parse_line, Response, INSTANT_COMMANDS};

// =============================================================================
// Helper Functions
// =============================================================================

fn run(line: &str) -> String {
    run_with(line, &DeviceRegistry::default_registry())
}

fn run_with(line: &str, registry: &DeviceRegistry) -> String {
    dispatch(&parse_line(line), registry).text().into_owned()
}

// =============================================================================
// Simple Commands
// =============================================================================

#[test]
fn test_help_lists_all_commands() {
    assert_eq!(
        run("HELP"),
        "Commands: HELP VER GET LIST SET INSTCMD LOGIN LOGOUT USERNAME PASSWORD STARTTLS\n"
    );
}

#[test]
fn test_ver() {
    assert_eq!(run("VER"), "Fake UPS Server\n");
}

#[test]
fn test_unknown_commands() {
    for line in ["", "help", "NETVER", "UPS FakeUPS", "FOO BAR BAZ QUX", "list ups"] {
        assert_eq!(run(line), "ERR UNKNOWN-COMMAND\n", "line {:?}", line);
    }
}

#[test]
fn test_set_always_refused_with_space_literal() {
    for line in ["SET", "SET VAR FakeUPS ups.delay.start", "SET anything"] {
        assert_eq!(run(line), "ERR INVALID ARGUMENT\n", "line {:?}", line);
    }
}

#[test]
fn test_instcmd_always_requires_username() {
    assert_eq!(run("INSTCMD"), "ERR USERNAME-REQUIRED\n");
    assert_eq!(run("INSTCMD FakeUPS beeper.on"), "ERR USERNAME-REQUIRED\n");
}

#[test]
fn test_credentials_accepted() {
    for line in ["LOGIN", "LOGIN FakeUPS", "LOGOUT", "USERNAME admin", "PASSWORD secret"] {
        assert_eq!(run(line), "OK\n", "line {:?}", line);
    }
}

#[test]
fn test_starttls_refused() {
    assert_eq!(run("STARTTLS"), "ERR FEATURE-NOT-CONFIGURED\n");
}

#[test]
fn test_login_does_not_unlock_instcmd() {
    let registry = DeviceRegistry::default_registry();
    for line in ["LOGIN FakeUPS", "USERNAME admin", "PASSWORD secret"] {
        assert_eq!(run_with(line, &registry), "OK\n");
    }
    assert_eq!(run_with("INSTCMD FakeUPS beeper.on", &registry), "ERR USERNAME-REQUIRED\n");
}

// =============================================================================
// GET
// =============================================================================

#[test]
fn test_get_numlogins() {
    assert_eq!(run("GET NUMLOGINS FakeUPS"), "NUMLOGINS FakeUPS 1\n");
    assert_eq!(run("GET NUMLOGINS"), "ERR INVALID-ARGUMENT\n");
}

#[test]
fn test_get_cmddesc() {
    assert_eq!(
        run("GET CMDDESC FakeUPS beeper.on"),
        "CMDDESC FakeUPS beeper.on \"Description unavailable\"\n"
    );
    assert_eq!(run("GET CMDDESC FakeUPS"), "ERR INVALID-ARGUMENT\n");
    assert_eq!(run("GET CMDDESC"), "ERR INVALID-ARGUMENT\n");
}

#[test]
fn test_get_upsdesc() {
    assert_eq!(run("GET UPSDESC FakeUPS"), "UPSDESC FakeUPS \"Fake UPS Device\"\n");
    assert_eq!(run("GET UPSDESC"), "ERR INVALID-ARGUMENT\n");
}

#[test]
fn test_get_other_falls_back_to_numlogins() {
    assert_eq!(run("GET VAR FakeUPS"), "NUMLOGINS FakeUPS 1\n");
    assert_eq!(run("GET VAR"), "ERR INVALID-ARGUMENT\n");
    assert_eq!(run("GET"), "ERR INVALID-ARGUMENT\n");
}

#[test]
fn test_get_does_not_check_registry() {
    assert_eq!(run("GET UPSDESC Nonexistent"), "UPSDESC Nonexistent \"Fake UPS Device\"\n");
}

// =============================================================================
// LIST
// =============================================================================

#[test]
fn test_list_ups_default_registry() {
    assert_eq!(
        run("LIST UPS"),
        "BEGIN LIST UPS\nUPS FakeUPS \"Description unavailable\"\nEND LIST UPS\n"
    );
}

#[test]
fn test_list_ups_sorted_by_name() {
    let registry = DeviceRegistry::builder()
        .device("zeta", DeviceModel::default())
        .device("alpha", DeviceModel::default())
        .build();

    assert_eq!(
        run_with("LIST UPS", &registry),
        "BEGIN LIST UPS\n\
         UPS alpha \"Description unavailable\"\n\
         UPS zeta \"Description unavailable\"\n\
         END LIST UPS\n"
    );
}

#[test]
fn test_list_ups_empty_registry() {
    assert_eq!(
        run_with("LIST UPS", &DeviceRegistry::default()),
        "BEGIN LIST UPS\nEND LIST UPS\n"
    );
}

#[test]
fn test_list_client() {
    assert_eq!(
        run("LIST CLIENT FakeUPS"),
        "BEGIN LIST CLIENT FakeUPS\nCLIENT FakeUPS 127.0.0.1\nEND LIST CLIENT FakeUPS\n"
    );
    assert_eq!(run("LIST CLIENT"), "ERR INVALID-ARGUMENT\n");
}

#[test]
fn test_list_cmd_catalog() {
    let reply = run("LIST CMD AnyName");
    let lines: Vec<&str> = reply.lines().collect();

    assert_eq!(lines.len(), INSTANT_COMMANDS.len() + 2);
    assert_eq!(lines[0], "BEGIN LIST CMD AnyName");
    assert_eq!(lines[1], "CMD AnyName beeper.disable");
    assert_eq!(lines[15], "CMD AnyName test.battery.stop");
    assert_eq!(lines[16], "END LIST CMD AnyName");
    assert_eq!(run("LIST CMD"), "ERR INVALID-ARGUMENT\n");
}

#[test]
fn test_list_var_default_device() {
    let model = DeviceModel::default();
    let reply = run("LIST VAR FakeUPS");
    let lines: Vec<&str> = reply.lines().collect();

    assert_eq!(lines.len(), model.len() + 2);
    assert_eq!(lines.first(), Some(&"BEGIN LIST VAR FakeUPS"));
    assert_eq!(lines.last(), Some(&"END LIST VAR FakeUPS"));

    for (line, var) in lines[1..lines.len() - 1].iter().zip(model.variables()) {
        assert_eq!(*line, format!("VAR FakeUPS {} \"{}\"", var.name, var.value));
    }
}

#[test]
fn test_list_var_formats_values() {
    let reply = run("LIST VAR FakeUPS");
    assert!(reply.contains("VAR FakeUPS battery.charge \"100\"\n"));
    assert!(reply.contains("VAR FakeUPS input.frequency \"50.0\"\n"));
    assert!(reply.contains("VAR FakeUPS input.voltage \"232.6\"\n"));
    assert!(reply.contains("VAR FakeUPS ups.timer.start \"-60\"\n"));
    assert!(reply.contains("VAR FakeUPS driver.version.usb \"libusb-1.0.0 (API: 0x1000102)\"\n"));
    assert!(reply.contains("VAR FakeUPS ups.status \"OL\"\n"));
}

#[test]
fn test_list_var_unknown_device() {
    assert_eq!(
        run("LIST VAR Nonexistent"),
        "BEGIN LIST VAR Nonexistent\nERR NOSUCHCMD Nonexistent\nEND LIST VAR Nonexistent\n"
    );
}

#[test]
fn test_list_var_missing_device() {
    assert_eq!(run("LIST VAR"), "ERR INVALID-ARGUMENT\n");
}

#[test]
fn test_list_other_subcommands_rejected() {
    for line in ["LIST", "LIST RW FakeUPS", "LIST ENUM FakeUPS ups.status", "LIST ups"] {
        assert_eq!(run(line), "ERR INVALID-ARGUMENT\n", "line {:?}", line);
    }
}

// =============================================================================
// Response Shape
// =============================================================================

#[test]
fn test_every_reply_is_newline_terminated() {
    let registry = DeviceRegistry::default_registry();
    for line in ["HELP", "VER", "LIST VAR FakeUPS", "LIST VAR x", "SET", "nope"] {
        let response: Response = dispatch(&parse_line(line), &registry);
        assert!(response.as_bytes().ends_with(b"\n"), "line {:?}", line);
    }
}

#[test]
fn test_is_error() {
    let registry = DeviceRegistry::default_registry();
    assert!(dispatch(&parse_line("STARTTLS"), &registry).is_error());
    assert!(!dispatch(&parse_line("LOGIN"), &registry).is_error());
    // The error sits inside the block, not at its head
    assert!(!dispatch(&parse_line("LIST VAR x"), &registry).is_error());
}
