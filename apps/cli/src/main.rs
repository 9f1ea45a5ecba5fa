//! # Roommates Console Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         roommates (binary)                              │
//! │                                                                         │
//! │  stdin/stdout ──► Shell ──► Room / Chore / Roommate repositories       │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                      ConnectionProvider (one connection per call)       │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                              SQLite database file                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Setup lives in lib.rs so it can be tested.

use clap::Parser;
use roommates_cli::Cli;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    roommates_cli::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = roommates_cli::run(cli).await {
        error!(error = %e, "Shell stopped");
        return Err(e.into());
    }

    Ok(())
}
