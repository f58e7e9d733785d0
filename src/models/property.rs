use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{RefuteError, RefuteResult};

/// A node in the logical formula tree being disputed.
///
/// Quantifier nodes carry their bound-variable and range descriptors as
/// opaque tokens produced by the external quantifier-expansion step; both
/// may be empty on nodes synthesized during challenge generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Property {
    /// Universal claim over the candidates described by the range token
    ForAll {
        variable: String,
        range: String,
        body: Box<Property>,
    },
    /// Existential claim over the candidates described by the range token
    Exists {
        variable: String,
        range: String,
        body: Box<Property>,
    },
    /// Conjunction of two or more operands, order-significant
    And(Vec<Property>),
    /// Disjunction of two or more operands, order-significant
    Or(Vec<Property>),
    Not(Box<Property>),
    /// Leaf predicate decided by an external oracle, never decomposed
    Atomic {
        predicate: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl Property {
    pub fn forall(variable: impl Into<String>, range: impl Into<String>, body: Property) -> Self {
        Property::ForAll {
            variable: variable.into(),
            range: range.into(),
            body: Box::new(body),
        }
    }

    pub fn exists(variable: impl Into<String>, range: impl Into<String>, body: Property) -> Self {
        Property::Exists {
            variable: variable.into(),
            range: range.into(),
            body: Box::new(body),
        }
    }

    pub fn and(operands: Vec<Property>) -> Self {
        Property::And(operands)
    }

    pub fn or(operands: Vec<Property>) -> Self {
        Property::Or(operands)
    }

    pub fn not(operand: Property) -> Self {
        Property::Not(Box::new(operand))
    }

    pub fn atomic(predicate: impl Into<String>) -> Self {
        Property::Atomic {
            predicate: predicate.into(),
            args: Vec::new(),
        }
    }

    pub fn atomic_with_args(predicate: impl Into<String>, args: Vec<String>) -> Self {
        Property::Atomic {
            predicate: predicate.into(),
            args,
        }
    }

    /// Name of the connective, for labels and log output
    pub fn kind(&self) -> &'static str {
        match self {
            Property::ForAll { .. } => "ForAll",
            Property::Exists { .. } => "Exists",
            Property::And(_) => "And",
            Property::Or(_) => "Or",
            Property::Not(_) => "Not",
            Property::Atomic { .. } => "Atomic",
        }
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, Property::Atomic { .. })
    }

    /// Total number of nodes in the tree, counting this one
    pub fn node_count(&self) -> usize {
        match self {
            Property::ForAll { body, .. } | Property::Exists { body, .. } => 1 + body.node_count(),
            Property::And(operands) | Property::Or(operands) => {
                1 + operands.iter().map(Property::node_count).sum::<usize>()
            }
            Property::Not(operand) => 1 + operand.node_count(),
            Property::Atomic { .. } => 1,
        }
    }

    /// Check the well-formedness contract of an externally supplied tree.
    ///
    /// Quantifier and negation arity is enforced by construction, so the
    /// only violation expressible in this representation is a conjunction
    /// or disjunction with fewer than two operands. Challenge strategies
    /// assume this has been called at the input boundary.
    pub fn validate(&self) -> RefuteResult<()> {
        match self {
            Property::ForAll { body, .. } | Property::Exists { body, .. } => body.validate(),
            Property::And(operands) | Property::Or(operands) => {
                if operands.len() < 2 {
                    return Err(RefuteError::MalformedProperty(format!(
                        "{} node has {} operand(s), expected at least 2",
                        self.kind(),
                        operands.len()
                    )));
                }
                for operand in operands {
                    operand.validate()?;
                }
                Ok(())
            }
            Property::Not(operand) => operand.validate(),
            Property::Atomic { .. } => Ok(()),
        }
    }
}

/// Renders the human-readable game tree label for a property.
///
/// Binder tokens of quantifiers are intentionally omitted: after a
/// challenge synthesizes a quantifier they may be empty, and the game is
/// decided on body structure alone.
impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::ForAll { body, .. } => write!(f, "ForAll({})", body),
            Property::Exists { body, .. } => write!(f, "Exists({})", body),
            Property::And(operands) => write!(f, "And({})", join_labels(operands)),
            Property::Or(operands) => write!(f, "Or({})", join_labels(operands)),
            Property::Not(operand) => write!(f, "Not({})", operand),
            Property::Atomic { predicate, .. } => write!(f, "{}", predicate),
        }
    }
}

fn join_labels(operands: &[Property]) -> String {
    operands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
