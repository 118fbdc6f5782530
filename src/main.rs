use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod actuator;
mod catalog;
mod cli;
mod config;
mod error;
mod output;
mod planner;
mod playback;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("choreoplan=debug")
    } else {
        EnvFilter::new("choreoplan=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Plan(args) => cli::plan::execute(args),
        Commands::Run(args) => cli::run::execute(args).await,
        Commands::Init(args) => cli::init::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
