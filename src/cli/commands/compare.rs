use anyhow::Result;
use log::info;
use std::fs;
use std::path::Path;

use refute::{strategy_for, ExplorerConfig, GameTree, GameTreeExplorer, StrategyKind};

use crate::cli::commands::load_property;
use crate::cli::ui;

/// Strategy comparison command: unfold the same root under both rules
pub fn execute(
    config: &ExplorerConfig,
    property_path: &Path,
    max_depth: Option<usize>,
    save: bool,
) -> Result<()> {
    ui::print_header("Comparing Challenge Strategies");

    let property = load_property(property_path)?;
    let explorer = GameTreeExplorer::new(max_depth.unwrap_or(config.max_depth));

    let spinner = ui::spinner_with_message("Unfolding game trees...");
    let naive_tree = explorer.unfold(&property, strategy_for(StrategyKind::Naive).as_ref())?;
    let short_tree =
        explorer.unfold(&property, strategy_for(StrategyKind::ShortCircuit).as_ref())?;
    spinner.finish_with_message("Unfolded both game trees");

    ui::print_header("Naive (V1)");
    print!("{}", naive_tree.render_to_string());

    ui::print_header("Short-circuit (V2)");
    print!("{}", short_tree.render_to_string());

    ui::print_header("Comparison");
    ui::print_result(
        "Naive",
        &format!(
            "{} nodes, depth {}",
            naive_tree.node_count(),
            naive_tree.depth()
        ),
    );
    ui::print_result(
        "Short-circuit",
        &format!(
            "{} nodes, depth {}",
            short_tree.node_count(),
            short_tree.depth()
        ),
    );

    // Shapes may differ; the terminal claims must not
    let mut naive_leaves = naive_tree.atomic_leaves();
    let mut short_leaves = short_tree.atomic_leaves();
    naive_leaves.sort();
    short_leaves.sort();

    if naive_leaves == short_leaves {
        ui::print_success(
            format!(
                "Both strategies reach the same {} terminal claims",
                naive_leaves.len()
            )
            .as_str(),
        );
    } else {
        ui::print_error("Strategies disagree on the reachable terminal claims");
        ui::print_result("Naive terminals", &naive_leaves.join(", "));
        ui::print_result("Short-circuit terminals", &short_leaves.join(", "));
    }

    if save {
        let report = build_report(&property_path.display().to_string(), &naive_tree, &short_tree);
        let report_dir = Path::new("reports");
        fs::create_dir_all(report_dir)?;
        let report_path =
            report_dir.join(format!("compare_{}.txt", chrono::Utc::now().timestamp()));
        fs::write(&report_path, report)?;
        ui::print_success(format!("Report saved to {}", report_path.display()).as_str());
        info!("Comparison report written to {}", report_path.display());
    }

    Ok(())
}

fn build_report(property_source: &str, naive_tree: &GameTree, short_tree: &GameTree) -> String {
    let mut report = String::new();
    report.push_str("Challenge strategy comparison\n");
    report.push_str(&format!("Property file: {}\n", property_source));
    report.push_str(&format!("Generated: {}\n\n", chrono::Utc::now().to_rfc3339()));
    report.push_str("=== Naive (V1) ===\n");
    report.push_str(&naive_tree.render_to_string());
    report.push_str("\n=== Short-circuit (V2) ===\n");
    report.push_str(&short_tree.render_to_string());
    report.push_str(&format!(
        "\nNaive: {} nodes, depth {}\n",
        naive_tree.node_count(),
        naive_tree.depth()
    ));
    report.push_str(&format!(
        "Short-circuit: {} nodes, depth {}\n",
        short_tree.node_count(),
        short_tree.depth()
    ));
    report
}
