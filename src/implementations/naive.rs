use crate::models::property::Property;
use crate::traits::challenge_strategy::ChallengeStrategy;

/// The original challenge rule: every connective is disputed by exactly
/// one unfolding step, and further decomposition is left to the next
/// round of the game.
pub struct NaiveStrategy;

impl ChallengeStrategy for NaiveStrategy {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn describe(&self) -> &'static str {
        "Disputes each connective with a single unfolding step: a universal claim \
         is challenged by negating its body, a conjunction by one negated \
         counter-claim per operand, a disjunction by the conjunction of all \
         negated operands, an existential by the universal closure of the negated \
         body, and a double negation by the inner claim. Deeper decomposition is \
         deferred to the following rounds, so the game tree grows one connective \
         layer at a time."
    }

    fn challenge(&self, property: &Property) -> Vec<Property> {
        match property {
            Property::ForAll { body, .. } => vec![Property::not((**body).clone())],
            // Disputing a witness claim asserts its universal refutation;
            // the synthesized quantifier carries empty binder tokens and
            // the game continues on body structure alone.
            Property::Exists { body, .. } => {
                vec![Property::forall("", "", Property::not((**body).clone()))]
            }
            Property::And(operands) => operands
                .iter()
                .map(|operand| Property::not(operand.clone()))
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
