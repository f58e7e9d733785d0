use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{RefuteError, RefuteResult};

/// Depth ceiling applied when no configuration overrides it. Generous for
/// any realistic property: unfolding consumes at least one connective
/// layer per round.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// The two interchangeable challenge rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Naive,
    ShortCircuit,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Naive => write!(f, "naive"),
            StrategyKind::ShortCircuit => write!(f, "short-circuit"),
        }
    }
}

impl StrategyKind {
    /// Parse a strategy selector as given on the command line
    pub fn parse(selector: &str) -> RefuteResult<Self> {
        match selector.to_lowercase().as_str() {
            "naive" | "v1" => Ok(StrategyKind::Naive),
            "short-circuit" | "shortcircuit" | "v2" => Ok(StrategyKind::ShortCircuit),
            _ => Err(RefuteError::UnknownStrategy(selector.to_string())),
        }
    }
}

/// Configuration for the game tree explorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Strategy used when the command line does not select one
    pub default_strategy: StrategyKind,

    /// Hard ceiling on unfolding depth
    pub max_depth: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            default_strategy: StrategyKind::ShortCircuit,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file(path: &Path) -> RefuteResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
