//! FakeNUT CLI Client
//!
//! Sends a single request to a NUT server and prints the reply.

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;

use clap::{Parser, Subcommand};
use fakenut::protocol::{read_reply, write_command};
use fakenut::Result;

/// FakeNUT CLI
#[derive(Parser, Debug)]
#[command(name = "fakenut-cli")]
#[command(about = "Query a NUT server over the upsd line protocol")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:3493")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Server identification
    Ver,

    /// Supported commands
    Help,

    /// List known UPS devices
    ListUps,

    /// List a device's variables
    ListVar {
        /// UPS name
        ups: String,
    },

    /// List a device's instant commands
    ListCmd {
        /// UPS name
        ups: String,
    },

    /// List clients attached to a device
    ListClient {
        /// UPS name
        ups: String,
    },

    /// Send an arbitrary request line
    Raw {
        /// Tokens, joined with single spaces
        #[arg(required = true, num_args = 1..)]
        tokens: Vec<String>,
    },
}

impl Commands {
    fn request_line(&self) -> String {
        match self {
            Commands::Ver => "VER".to_string(),
            Commands::Help => "HELP".to_string(),
            Commands::ListUps => "LIST UPS".to_string(),
            Commands::ListVar { ups } => format!("LIST VAR {}", ups),
            Commands::ListCmd { ups } => format!("LIST CMD {}", ups),
            Commands::ListClient { ups } => format!("LIST CLIENT {}", ups),
            Commands::Raw { tokens } => tokens.join(" "),
        }
    }
}

fn query(server: &str, line: &str) -> Result<Vec<String>> {
    let stream = TcpStream::connect(server)?;
    let mut writer = BufWriter::new(stream.try_clone()?);
    let mut reader = BufReader::new(stream);

    write_command(&mut writer, line)?;
    read_reply(&mut reader)
}

fn main() {
    let args = Args::parse();
    let line = args.command.request_line();

    match query(&args.server, &line) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("{}: {}", args.server, e);
            std::process::exit(1);
        }
    }
}
