//! Protocol Module
//!
//! The NUT `upsd` text protocol as served by FakeNUT.
//!
//! ## Request Format
//! ```text
//! <COMMAND> [<arg1> [<arg2> [<arg3>]]]\n
//! ```
//! Tokens are separated by single ASCII spaces. Matching is case-sensitive.
//!
//! ## Response Format
//! One or more `\n`-terminated lines per request, written as one block.
//! List replies are bracketed:
//! ```text
//! BEGIN LIST VAR FakeUPS
//! VAR FakeUPS battery.charge "100"
//! ...
//! END LIST VAR FakeUPS
//! ```

mod command;
mod response;
mod dispatch;
mod codec;

pub use command::{parse_line, CommandType, ParsedCommand, MAX_ARGS};
pub use response::{
    Response, ERR_FEATURE_NOT_CONFIGURED, ERR_INVALID_ARGUMENT, ERR_NOSUCHCMD,
    ERR_SET_INVALID_ARGUMENT, ERR_UNKNOWN_COMMAND, ERR_USERNAME_REQUIRED, OK,
};
pub use dispatch::{dispatch, DESCRIPTION_UNAVAILABLE, INSTANT_COMMANDS, SERVER_VERSION, UPS_DESCRIPTION};
pub use codec::{read_line, read_reply, write_command, write_response};
