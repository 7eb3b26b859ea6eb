mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use figma_mcp::Config;
use output::{OutputFormat, Verbosity};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Table };
    let verbosity = match (cli.quiet, cli.verbose) {
        (true, _) => Verbosity::Quiet,
        (false, 0) => Verbosity::Normal,
        (false, _) => Verbosity::Verbose,
    };
    output::init(format, verbosity, !cli.no_color);
    init_tracing(log_level(cli.quiet, cli.verbose));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Status => commands::status::run(&config),
        Commands::Components(args) => commands::library::components(&config, args).await,
        Commands::Variables(args) => commands::library::variables(&config, args).await,
        Commands::Styles(args) => commands::library::styles(&config, args).await,
        Commands::Images(args) => commands::images::run(&config, args).await,
        Commands::Tree(args) => commands::tree::run(&config, args).await,
        Commands::Sync(args) => commands::sync::run(&config, args).await,
    }
}

fn log_level(quiet: bool, verbose: u8) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Logs go to stderr so JSON output on stdout stays clean
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
