//! Command definitions
//!
//! Splits one request line into a command token and positional arguments.

/// Number of positional arguments kept after the command token
pub const MAX_ARGS: usize = 3;

/// Primary commands understood by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Help,
    Ver,
    Get,
    List,
    Set,
    InstCmd,
    Login,
    Logout,
    Username,
    Password,
    StartTls,
}

impl CommandType {
    /// Every command, in the order HELP advertises them
    pub const ALL: [CommandType; 11] = [
        CommandType::Help,
        CommandType::Ver,
        CommandType::Get,
        CommandType::List,
        CommandType::Set,
        CommandType::InstCmd,
        CommandType::Login,
        CommandType::Logout,
        CommandType::Username,
        CommandType::Password,
        CommandType::StartTls,
    ];

    /// Wire token for this command
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Help => "HELP",
            CommandType::Ver => "VER",
            CommandType::Get => "GET",
            CommandType::List => "LIST",
            CommandType::Set => "SET",
            CommandType::InstCmd => "INSTCMD",
            CommandType::Login => "LOGIN",
            CommandType::Logout => "LOGOUT",
            CommandType::Username => "USERNAME",
            CommandType::Password => "PASSWORD",
            CommandType::StartTls => "STARTTLS",
        }
    }

    /// Exact, case-sensitive token match
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == token)
    }
}

/// A parsed request line
///
/// Missing positionals are empty strings, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token, as received
    pub command: String,

    /// Tokens 2..=4
    pub args: [String; MAX_ARGS],
}

impl ParsedCommand {
    /// Recognized command, if any
    pub fn command_type(&self) -> Option<CommandType> {
        CommandType::from_token(&self.command)
    }

    /// Positional argument `index` (0-based), or `""`
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(String::as_str).unwrap_or("")
    }

    /// Second token, e.g. `VAR` in `LIST VAR FakeUPS`
    pub fn subcommand(&self) -> &str {
        self.arg(0)
    }
}

/// Split `line` on single ASCII spaces
///
/// Never fails. Consecutive spaces yield empty tokens and tokens past the
/// fourth are dropped. No quoting or case folding is applied.
pub fn parse_line(line: &str) -> ParsedCommand {
    let mut tokens = line.split(' ');

    let command = tokens.next().unwrap_or("").to_string();
    let mut args: [String; MAX_ARGS] = Default::default();
    for (slot, token) in args.iter_mut().zip(tokens) {
        *slot = token.to_string();
    }

    ParsedCommand { command, args }
}
