use refute::implementations::all_strategies;

use crate::cli::ui;

/// Strategy listing command
pub fn execute() {
    ui::print_header("Available Challenge Strategies");

    for strategy in all_strategies() {
        ui::print_result("Strategy", strategy.name());
        ui::print_text(strategy.describe());
        println!();
    }
}
