//! Command dispatcher
//!
//! Pure mapping from a parsed request to its response. No I/O and no
//! session state: LOGIN/USERNAME/PASSWORD are acknowledged but do not change
//! the outcome of anything sent afterwards.

use crate::device::DeviceRegistry;

use super::response::{
    ERR_FEATURE_NOT_CONFIGURED, ERR_INVALID_ARGUMENT, ERR_NOSUCHCMD, ERR_SET_INVALID_ARGUMENT,
    ERR_UNKNOWN_COMMAND, ERR_USERNAME_REQUIRED, OK,
};
use super::{CommandType, ParsedCommand, Response};

/// VER reply
pub const SERVER_VERSION: &str = "Fake UPS Server";

/// GET UPSDESC reply text
pub const UPS_DESCRIPTION: &str = "Fake UPS Device";

/// Placeholder description for UPS and instant-command listings
pub const DESCRIPTION_UNAVAILABLE: &str = "Description unavailable";

/// LIST CMD catalog, identical for every device
pub const INSTANT_COMMANDS: [&str; 15] = [
    "beeper.disable",
    "beeper.enable",
    "beeper.mute",
    "beeper.off",
    "beeper.on",
    "load.off",
    "load.off.delay",
    "load.on",
    "load.on.delay",
    "shutdown.return",
    "shutdown.stayoff",
    "shutdown.stop",
    "test.battery.start.deep",
    "test.battery.start.quick",
    "test.battery.stop",
];

/// Produce the reply for one request line
pub fn dispatch(cmd: &ParsedCommand, registry: &DeviceRegistry) -> Response {
    let Some(command) = cmd.command_type() else {
        return Response::line(ERR_UNKNOWN_COMMAND);
    };

    match command {
        CommandType::Help => help(),
        CommandType::Ver => Response::line(SERVER_VERSION),
        CommandType::Get => get(cmd),
        CommandType::List => list(cmd, registry),
        CommandType::Set => Response::line(ERR_SET_INVALID_ARGUMENT),
        CommandType::InstCmd => Response::line(ERR_USERNAME_REQUIRED),
        CommandType::Login
        | CommandType::Logout
        | CommandType::Username
        | CommandType::Password => Response::line(OK),
        CommandType::StartTls => Response::line(ERR_FEATURE_NOT_CONFIGURED),
    }
}

// =============================================================================
// HELP
// =============================================================================

fn help() -> Response {
    let names: Vec<&str> = CommandType::ALL.iter().map(CommandType::as_str).collect();
    Response::line(&format!("Commands: {}", names.join(" ")))
}

// =============================================================================
// GET
// =============================================================================

fn get(cmd: &ParsedCommand) -> Response {
    let device = cmd.arg(1);
    if device.is_empty() {
        return Response::line(ERR_INVALID_ARGUMENT);
    }

    match cmd.subcommand() {
        "CMDDESC" => {
            let instcmd = cmd.arg(2);
            if instcmd.is_empty() {
                return Response::line(ERR_INVALID_ARGUMENT);
            }
            Response::line(&format!(
                "CMDDESC {} {} \"{}\"",
                device, instcmd, DESCRIPTION_UNAVAILABLE
            ))
        }
        "UPSDESC" => Response::line(&format!("UPSDESC {} \"{}\"", device, UPS_DESCRIPTION)),
        // NUMLOGINS, and every other GET target, reports a single login
        _ => Response::line(&format!("NUMLOGINS {} 1", device)),
    }
}

// =============================================================================
// LIST
// =============================================================================

fn list(cmd: &ParsedCommand, registry: &DeviceRegistry) -> Response {
    let subcommand = cmd.subcommand();
    if subcommand == "UPS" {
        return list_ups(registry);
    }
    if !matches!(subcommand, "CLIENT" | "CMD" | "VAR") {
        return Response::line(ERR_INVALID_ARGUMENT);
    }

    let device = cmd.arg(1);
    if device.is_empty() {
        return Response::line(ERR_INVALID_ARGUMENT);
    }

    let mut response = Response::new();
    response.begin_list(subcommand, Some(device));
    match subcommand {
        "CLIENT" => {
            response.push_line(&format!("CLIENT {} 127.0.0.1", device));
        }
        "CMD" => {
            for name in INSTANT_COMMANDS {
                response.push_line(&format!("CMD {} {}", device, name));
            }
        }
        _ => match registry.lookup(device) {
            Some(model) => {
                for var in model.variables() {
                    response.push_line(&format!("VAR {} {} \"{}\"", device, var.name, var.value));
                }
            }
            // Unknown device: error line inside the block, no data lines
            None => {
                tracing::debug!("LIST VAR for unknown device {}", device);
                response.push_line(&format!("{} {}", ERR_NOSUCHCMD, device));
            }
        },
    }
    response.end_list(subcommand, Some(device));
    response
}

fn list_ups(registry: &DeviceRegistry) -> Response {
    let mut response = Response::new();
    response.begin_list("UPS", None);
    for name in registry.names() {
        response.push_line(&format!("UPS {} \"{}\"", name, DESCRIPTION_UNAVAILABLE));
    }
    response.end_list("UPS", None);
    response
}
