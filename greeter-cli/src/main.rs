//! Greeter CLI - service entry point
//!
//! Serves on 0.0.0.0:8000. Command-line arguments are not read.
//! Log verbosity follows `RUST_LOG` (default `info`).

mod server;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    server::run()
}
