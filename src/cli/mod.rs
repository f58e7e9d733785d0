use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "refute",
    about = "A dispute game explorer for optimistic verification protocols",
    version,
    author,
    long_about = None
)]
pub struct RefuteCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Explore and print the challenge tree for an asserted property
    Explore {
        /// Path to the property file (JSON, from the quantifier-expansion step)
        #[arg(short, long)]
        property: PathBuf,

        /// Challenge strategy to apply (naive, short-circuit)
        #[arg(short, long)]
        strategy: Option<String>,

        /// Maximum unfolding depth
        #[arg(short, long)]
        max_depth: Option<usize>,

        /// Output file for the rendered tree
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Select the strategy interactively
        #[arg(short, long, default_value = "false")]
        interactive: bool,
    },

    /// Unfold the game under both strategies and compare the results
    Compare {
        /// Path to the property file
        #[arg(short, long)]
        property: PathBuf,

        /// Maximum unfolding depth
        #[arg(short, long)]
        max_depth: Option<usize>,

        /// Save a comparison report under reports/
        #[arg(short, long, default_value = "false")]
        save: bool,
    },

    /// Check a property file against the input contract
    Check {
        /// Path to the property file
        #[arg(short, long)]
        property: PathBuf,
    },

    /// List available challenge strategies
    Strategies,
}
