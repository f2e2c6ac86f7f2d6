//! Server command - start the greeter HTTP service
//!
//! ## Architecture
//!
//! - run() - orchestration
//! - configure_server(), start_server() - phases
//! - serving itself is delegated to the greeter-server crate

use anyhow::Result;

use greeter_server::{run_server, ServerConfig};

// ============================================================================
// ORCHESTRATION
// ============================================================================

/// Run server command
pub fn run() -> Result<()> {
    let config = configure_server()?;

    tracing::info!("Starting greeter server on {}:{}", config.host, config.port);

    start_server(config)
}

// ============================================================================
// PHASES
// ============================================================================

/// Fixed server configuration; nothing is taken from argv or the environment
fn configure_server() -> Result<ServerConfig> {
    let config = ServerConfig::default();

    // Fail before spinning up a runtime
    config.bind_addr()?;

    Ok(config)
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(run_server(config))
}

// ============================================================================
// TESTS
// ============================================================================
