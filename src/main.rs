use clap::Parser;
use std::process::ExitCode;

// Loan record table and statistics
mod data;

// Chart builders
mod charts;

// Page structure and reactive bindings
mod bindings;
mod layout;

// HTTP server
mod server;

// Application constants
mod constants;

// Configuration, logging and error handling
mod config;
mod error;
mod logging;
mod perf;

use config::Config;
use data::RecordTable;
use error::Result;

/// Interactive dashboard over the loan records dataset
#[derive(Parser, Debug)]
#[command(name = "loan-dashboard", version, about, long_about = None)]
struct Cli {
    /// Address to bind, overrides the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides the config file
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("{}", e.user_message());
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}: {}", e.title(), e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&std::env::current_dir()?)?.with_overrides(cli.host, cli.port);

    let separator = config.data.separator_byte()?;
    let table = timed!("load records", RecordTable::load(&config.data.path, separator))?;
    tracing::info!(
        "Loaded {} rows x {} columns from {}",
        table.height(),
        table.width(),
        table.source_path().unwrap_or(config.data.path.as_path()).display()
    );
    tracing::debug!(columns = ?table.column_names(), "record table schema");

    server::serve(&config.server, server::AppState::new(table)).await
}
