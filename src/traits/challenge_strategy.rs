use crate::models::property::Property;

/// A rule for disputing a claim: maps a property to the ordered set of
/// counter-properties a disputer may assert against it.
///
/// Implementations must be pure and total over well-formed trees, and
/// every produced challenge must be a faithful logical negation of its
/// parent. A challenge never recurses into structure it just built, so
/// unfolding terminates on any finite tree.
pub trait ChallengeStrategy {
    /// Short identifier used in configuration and reports
    fn name(&self) -> &'static str;

    /// One-paragraph description of the rule, for the strategy listing
    fn describe(&self) -> &'static str;

    /// Compute the challenges against `property`, in dispute order.
    ///
    /// An empty result marks a terminal claim whose resolution is
    /// delegated to the external oracle.
    fn challenge(&self, property: &Property) -> Vec<Property>;
}
