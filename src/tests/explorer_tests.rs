#[cfg(test)]
mod tests {
    use crate::errors::{RefuteError, RefuteResult};
    use crate::implementations::explorer::GameTreeExplorer;
    use crate::implementations::naive::NaiveStrategy;
    use crate::implementations::short_circuit::ShortCircuitStrategy;
    use crate::models::property::Property;
    use crate::traits::challenge_strategy::ChallengeStrategy;

    fn atomic(name: &str) -> Property {
        Property::atomic(name)
    }

    /// The expanded shape of a nested claim: for every block there is a
    /// witnessed state satisfying a verification predicate and one of two
    /// exit conditions.
    fn nested_property() -> Property {
        Property::forall(
            "b",
            "range,NUMBER,0-10",
            Property::exists(
                "s",
                "su.block${b}",
                Property::and(vec![
                    atomic("Verified"),
                    Property::or(vec![atomic("Spent"), atomic("Withdrawn")]),
                ]),
            ),
        )
    }

    #[test]
    fn unfolds_conjunction_to_terminal_claims() -> RefuteResult<()> {
        let explorer = GameTreeExplorer::default();
        let property = Property::and(vec![atomic("P"), atomic("Q")]);

        let tree = explorer.unfold(&property, &NaiveStrategy)?;
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.atomic_leaves(), vec!["P".to_string(), "Q".to_string()]);
        Ok(())
    }

    #[test]
    fn explore_prints_preorder_with_depth_indentation() -> RefuteResult<()> {
        let explorer = GameTreeExplorer::default();
        let property = Property::and(vec![atomic("P"), atomic("Q")]);

        let mut out = Vec::new();
        explorer.explore(&property, &NaiveStrategy, &mut out)?;
        let output = String::from_utf8(out).expect("labels are valid UTF-8");

        assert_eq!(
            output,
            "And(P,Q)\n  Not(P)\n    P\n  Not(Q)\n    Q\n"
        );
        Ok(())
    }

    #[test]
    fn rendering_an_unfolded_tree_matches_streaming_exploration() -> RefuteResult<()> {
        let explorer = GameTreeExplorer::default();
        let property = nested_property();

        for strategy in [
            &NaiveStrategy as &dyn ChallengeStrategy,
            &ShortCircuitStrategy,
        ] {
            let mut streamed = Vec::new();
            explorer.explore(&property, strategy, &mut streamed)?;
            let tree = explorer.unfold(&property, strategy)?;
            assert_eq!(
                tree.render_to_string().into_bytes(),
                streamed,
                "strategy '{}' render/explore mismatch",
                strategy.name()
            );
        }
        Ok(())
    }

    #[test]
    fn strategies_agree_on_terminal_claims() -> RefuteResult<()> {
        let explorer = GameTreeExplorer::default();
        let property = nested_property();

        let naive_tree = explorer.unfold(&property, &NaiveStrategy)?;
        let short_tree = explorer.unfold(&property, &ShortCircuitStrategy)?;

        let mut naive_leaves = naive_tree.atomic_leaves();
        let mut short_leaves = short_tree.atomic_leaves();
        naive_leaves.sort();
        short_leaves.sort();

        assert_eq!(naive_leaves, short_leaves);
        assert_eq!(
            naive_leaves,
            vec![
                "Spent".to_string(),
                "Verified".to_string(),
                "Withdrawn".to_string(),
            ]
        );

        // The optimization shortens paths, never changes outcomes
        assert!(short_tree.depth() < naive_tree.depth());
        Ok(())
    }

    #[test]
    fn unfolding_depth_tracks_nesting_depth() -> RefuteResult<()> {
        // Wrapping one more connective layer grows the unfolded game by a
        // bounded number of rounds, not explosively
        let explorer = GameTreeExplorer::default();

        let shallow = Property::forall("x", "0-10", atomic("P"));
        let deep = Property::forall("x", "0-10", Property::not(Property::exists("y", "0-10", atomic("P"))));

        let shallow_tree = explorer.unfold(&shallow, &NaiveStrategy)?;
        let deep_tree = explorer.unfold(&deep, &NaiveStrategy)?;

        assert!(shallow_tree.depth() < deep_tree.depth());
        assert!(deep_tree.depth() <= shallow_tree.depth() + 6);
        Ok(())
    }

    #[test]
    fn depth_ceiling_is_a_hard_error() {
        let explorer = GameTreeExplorer::new(3);
        let property = nested_property();

        let err = explorer.unfold(&property, &NaiveStrategy).unwrap_err();
        assert!(matches!(
            err,
            RefuteError::DepthLimitExceeded { limit: 3 }
        ));

        let mut out = Vec::new();
        let err = explorer
            .explore(&property, &NaiveStrategy, &mut out)
            .unwrap_err();
        assert!(matches!(err, RefuteError::DepthLimitExceeded { limit: 3 }));
    }

    #[test]
    fn terminal_root_is_a_single_node_game() -> RefuteResult<()> {
        let explorer = GameTreeExplorer::default();
        let tree = explorer.unfold(&atomic("P"), &ShortCircuitStrategy)?;
        assert!(tree.is_terminal());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.atomic_leaves(), vec!["P".to_string()]);
        Ok(())
    }
}
