use crate::models::property::Property;
use crate::traits::challenge_strategy::ChallengeStrategy;

/// The search-optimized challenge rule: fuses consecutive unfolding steps
/// whenever the inner structure already yields a concrete challenge,
/// shortening game paths without changing the terminal claims they reach.
pub struct ShortCircuitStrategy;

impl ChallengeStrategy for ShortCircuitStrategy {
    fn name(&self) -> &'static str {
        "short-circuit"
    }

    fn describe(&self) -> &'static str {
        "Applies the same dispute rules as the naive strategy but digs through \
         nested structure eagerly: challenging a universal claim promotes the \
         challenges of its body when the body has any, and challenging a \
         conjunction replaces each negated operand with that operand's own first \
         challenge where one exists. Paths through the game tree get shorter, \
         skipping redundant double-negation rounds, while every reachable \
         terminal claim stays the same."
    }

    fn challenge(&self, property: &Property) -> Vec<Property> {
        match property {
            Property::ForAll { body, .. } => {
                // Skip the Not wrapper when the body already unfolds;
                // each recursive call consumes one layer of the input
                // tree, so the search bottoms out.
                let inner = self.challenge(body);
                if inner.is_empty() {
                    vec![Property::not((**body).clone())]
                } else {
                    inner
                }
            }
            Property::Exists { body, .. } => {
                vec![Property::forall("", "", Property::not((**body).clone()))]
            }
            Property::And(operands) => operands
                .iter()
                .map(|operand| {
                    let mut inner = self.challenge(operand);
                    if inner.is_empty() {
                        Property::not(operand.clone())
                    } else {
                        // One entry per operand, same as naive, but dug
                        // one level deeper.
                        inner.swap_remove(0)
                    }
                })
                .collect(),
            Property::Or(operands) => vec![Property::and(
                operands
                    .iter()
                    .map(|operand| Property::not(operand.clone()))
                    .collect(),
            )],
            Property::Not(operand) => vec![(**operand).clone()],
            Property::Atomic { .. } => Vec::new(),
        }
    }
}
