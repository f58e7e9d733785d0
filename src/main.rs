use anyhow::Result;
use clap::Parser;
use log::info;

use refute::ExplorerConfig;

mod cli;
use cli::{ RefuteCli, Commands };

fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = RefuteCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // Load configuration, falling back to defaults
    let config = match &cli.config {
        Some(path) => ExplorerConfig::load_from_file(path)?,
        None => ExplorerConfig::default(),
    };

    // Display a welcome message
    println!("Refute - Dispute Game Explorer for Optimistic Verification");

    // Handle commands
    match &cli.command {
        Commands::Explore {
            property,
            strategy,
            max_depth,
            output,
            interactive,
        } => {
            cli::commands::explore::execute(
                &config,
                property,
                strategy.as_deref(),
                *max_depth,
                output.as_deref(),
                *interactive,
            )?;
        }

        Commands::Compare {
            property,
            max_depth,
            save,
        } => {
            cli::commands::compare::execute(&config, property, *max_depth, *save)?;
        }

        Commands::Check { property } => {
            cli::commands::check::execute(property)?;
        }

        Commands::Strategies => {
            cli::commands::strategies::execute();
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
