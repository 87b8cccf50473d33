//! FakeNUT Server Binary
//!
//! Starts a fake upsd serving the default `FakeUPS` device.

use clap::Parser;
use fakenut::{Config, DeviceRegistry, Server};
use tracing_subscriber::{fmt, EnvFilter};

/// FakeNUT Server
#[derive(Parser, Debug)]
#[command(name = "fakenut-server")]
#[command(about = "Fake Network UPS Tools server for testing NUT clients")]
#[command(version)]
struct Args {
    /// Listen host (overrides NUT_SERVER)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides NUT_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log every received command
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fakenut=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("FakeNUT Server v{}", fakenut::VERSION);

    // Defaults, then environment, then flags
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid environment: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.verbose = args.verbose;

    let server = match Server::bind(config, DeviceRegistry::default_registry()) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
