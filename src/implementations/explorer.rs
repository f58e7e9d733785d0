use std::io::Write;

use log::debug;

use crate::errors::{RefuteError, RefuteResult};
use crate::models::game_tree::GameTree;
use crate::models::property::Property;
use crate::traits::challenge_strategy::ChallengeStrategy;

/// Depth-first driver that applies a challenge strategy recursively from
/// a root claim.
///
/// Every strategy rule strictly reduces structural depth, so unfolding a
/// finite tree always terminates; the depth ceiling is a safety net that
/// turns any future non-terminating rule into a hard error instead of a
/// hang.
pub struct GameTreeExplorer {
    max_depth: usize,
}

impl GameTreeExplorer {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Print the whole challenge tree, one claim per line, indented by
    /// traversal depth. Children are visited left to right in the order
    /// the strategy produced them.
    pub fn explore<W: Write>(
        &self,
        root: &Property,
        strategy: &dyn ChallengeStrategy,
        out: &mut W,
    ) -> RefuteResult<()> {
        debug!("exploring game tree with strategy '{}'", strategy.name());
        self.explore_at(root, strategy, 0, out)
    }

    fn explore_at<W: Write>(
        &self,
        property: &Property,
        strategy: &dyn ChallengeStrategy,
        depth: usize,
        out: &mut W,
    ) -> RefuteResult<()> {
        if depth >= self.max_depth {
            return Err(RefuteError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        writeln!(out, "{}{}", "  ".repeat(depth), property)?;
        for challenge in strategy.challenge(property) {
            self.explore_at(&challenge, strategy, depth + 1, out)?;
        }
        Ok(())
    }

    /// Unfold the challenge tree into a value, for comparing strategy
    /// runs. Rendering the result equals the `explore` output.
    pub fn unfold(
        &self,
        root: &Property,
        strategy: &dyn ChallengeStrategy,
    ) -> RefuteResult<GameTree> {
        debug!("unfolding game tree with strategy '{}'", strategy.name());
        self.unfold_at(root, strategy, 0)
    }

    fn unfold_at(
        &self,
        property: &Property,
        strategy: &dyn ChallengeStrategy,
        depth: usize,
    ) -> RefuteResult<GameTree> {
        if depth >= self.max_depth {
            return Err(RefuteError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        let challenges = strategy
            .challenge(property)
            .into_iter()
            .map(|challenge| self.unfold_at(&challenge, strategy, depth + 1))
            .collect::<RefuteResult<Vec<_>>>()?;
        Ok(GameTree {
            claim: property.clone(),
            challenges,
        })
    }
}

impl Default for GameTreeExplorer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_DEPTH)
    }
}
