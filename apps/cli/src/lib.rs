//! # Roommates Console Library
//!
//! Startup wiring for the `roommates` shell.
//!
//! ## Module Organization
//! ```text
//! roommates_cli/
//! ├── lib.rs      ◄─── You are here (flags, logging, startup)
//! ├── config.rs   ◄─── ShellConfig: file, environment, defaults
//! ├── menu.rs     ◄─── Numbered menu options
//! ├── shell.rs    ◄─── Prompt loop and actions
//! └── error.rs    ◄─── ShellError / ConfigError
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod shell;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use roommates_db::Database;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ShellConfig;
use error::ShellResult;
use shell::Shell;

/// Command line flags. These override the config file and environment.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "roommates", about = "Manage a shared household's rooms, chores and roommates")]
pub struct Cli {
    /// Path to a roommates.toml config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Database connection string, e.g. sqlite://house.db?mode=rwc
    #[arg(long)]
    pub database_url: Option<String>,

    /// Don't create missing tables at startup
    #[arg(long)]
    pub no_init_schema: bool,
}

impl Cli {
    /// Resolves the full configuration, flags applied last.
    pub fn resolve_config(&self) -> ShellResult<ShellConfig> {
        let mut config = ShellConfig::load(self.config.clone())?;

        if let Some(url) = &self.database_url {
            config.database.connection_string = url.clone();
        }
        if self.no_init_schema {
            config.database.init_schema = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Runs the shell over stdin/stdout.
///
/// ## Startup Sequence
/// 1. Resolve configuration (defaults, file, environment, flags)
/// 2. Build the connection provider and bootstrap the schema
/// 3. Loop on the menu until Exit or end of input
pub async fn run(cli: Cli) -> ShellResult<()> {
    let config = cli.resolve_config()?;
    info!(
        database = %config.database.connection_string,
        init_schema = config.database.init_schema,
        "Configuration loaded"
    );

    let db = Database::new(config.db_config()).await?;

    let stdin = io::stdin();
    let mut shell = Shell::new(&db, stdin.lock(), io::stdout());
    shell.run().await
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with the menu on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every statement the repositories run
/// - Default: warnings, plus startup info from the roommates crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,roommates=info,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
