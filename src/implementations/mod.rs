pub mod naive;
pub mod short_circuit;
pub mod explorer;

use crate::config::StrategyKind;
use crate::traits::challenge_strategy::ChallengeStrategy;

pub use explorer::GameTreeExplorer;
pub use naive::NaiveStrategy;
pub use short_circuit::ShortCircuitStrategy;

/// Instantiate the challenge strategy selected by configuration
pub fn strategy_for(kind: StrategyKind) -> Box<dyn ChallengeStrategy> {
    match kind {
        StrategyKind::Naive => Box::new(NaiveStrategy),
        StrategyKind::ShortCircuit => Box::new(ShortCircuitStrategy),
    }
}

/// All strategies, in listing order
pub fn all_strategies() -> Vec<Box<dyn ChallengeStrategy>> {
    vec![Box::new(NaiveStrategy), Box::new(ShortCircuitStrategy)]
}
