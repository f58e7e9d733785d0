use anyhow::Result;
use log::info;
use std::fs;
use std::io;
use std::path::Path;

use refute::{strategy_for, ExplorerConfig, GameTreeExplorer, StrategyKind};

use crate::cli::commands::load_property;
use crate::cli::ui;

/// Game tree exploration command
pub fn execute(
    config: &ExplorerConfig,
    property_path: &Path,
    strategy_selector: Option<&str>,
    max_depth: Option<usize>,
    output_path: Option<&Path>,
    interactive: bool,
) -> Result<()> {
    ui::print_header("Exploring Dispute Game Tree");

    let property = load_property(property_path)?;

    // Resolve the strategy: explicit flag, interactive pick, or config default
    let kind = if interactive {
        ui::select_strategy()?
    } else {
        match strategy_selector {
            Some(selector) => StrategyKind::parse(selector)?,
            None => {
                ui::print_info(
                    format!("No strategy selected, using {}", config.default_strategy).as_str(),
                );
                config.default_strategy
            }
        }
    };
    let strategy = strategy_for(kind);
    info!("Using challenge strategy '{}'", strategy.name());

    let explorer = GameTreeExplorer::new(max_depth.unwrap_or(config.max_depth));

    ui::print_result("Root claim", &property.to_string());
    ui::print_result("Strategy", strategy.name());
    println!();

    match output_path {
        Some(output_path) => {
            // Unfold once so the saved rendering matches what is printed
            let tree = explorer.unfold(&property, strategy.as_ref())?;
            let rendering = tree.render_to_string();
            print!("{}", rendering);
            fs::write(output_path, &rendering)?;
            ui::print_success(
                format!("Game tree saved to {}", output_path.display()).as_str(),
            );
        }
        None => {
            let stdout = io::stdout();
            explorer.explore(&property, strategy.as_ref(), &mut stdout.lock())?;
        }
    }

    Ok(())
}
