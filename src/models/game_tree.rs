use std::io::{self, Write};

use crate::models::property::Property;

/// A fully unfolded dispute game: a claim and the challenges a disputer
/// may answer it with, recursively down to terminal claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTree {
    pub claim: Property,
    pub challenges: Vec<GameTree>,
}

impl GameTree {
    /// A claim nobody can unfold further; resolution is up to the oracle
    pub fn is_terminal(&self) -> bool {
        self.challenges.is_empty()
    }

    /// Longest claim-to-terminal path, counting this node
    pub fn depth(&self) -> usize {
        1 + self
            .challenges
            .iter()
            .map(GameTree::depth)
            .max()
            .unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        1 + self.challenges.iter().map(GameTree::node_count).sum::<usize>()
    }

    /// Labels of every terminal claim, left to right.
    ///
    /// Two strategies exploring the same root must agree on this multiset
    /// (after sorting) even when the trees differ in shape.
    pub fn atomic_leaves(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, leaves: &mut Vec<String>) {
        if self.is_terminal() {
            leaves.push(self.claim.to_string());
            return;
        }
        for challenge in &self.challenges {
            challenge.collect_leaves(leaves);
        }
    }

    /// Write the indented depth-first rendering, one line per claim.
    ///
    /// The output is identical to a streaming `GameTreeExplorer::explore`
    /// over the same root and strategy.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.render_at(out, 0)
    }

    fn render_at<W: Write>(&self, out: &mut W, depth: usize) -> io::Result<()> {
        writeln!(out, "{}{}", "  ".repeat(depth), self.claim)?;
        for challenge in &self.challenges {
            challenge.render_at(out, depth + 1)?;
        }
        Ok(())
    }

    /// Convenience for reports and tests
    pub fn render_to_string(&self) -> String {
        let mut buf = Vec::new();
        self.render(&mut buf).expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("labels are valid UTF-8")
    }
}
