#[cfg(test)]
mod tests {
    use crate::errors::RefuteError;
    use crate::models::property::Property;

    fn atomic(name: &str) -> Property {
        Property::atomic(name)
    }

    #[test]
    fn display_omits_quantifier_binders() {
        let property = Property::forall("b", "range,NUMBER,0-10", atomic("P"));
        assert_eq!(property.to_string(), "ForAll(P)");

        let property = Property::exists("s", "su.block0", atomic("Q"));
        assert_eq!(property.to_string(), "Exists(Q)");
    }

    #[test]
    fn display_joins_operands_with_commas() {
        let property = Property::and(vec![atomic("P"), Property::not(atomic("Q"))]);
        assert_eq!(property.to_string(), "And(P,Not(Q))");

        let property = Property::or(vec![atomic("P"), atomic("Q"), atomic("R")]);
        assert_eq!(property.to_string(), "Or(P,Q,R)");
    }

    #[test]
    fn display_keeps_atomic_arguments_unexpanded() {
        let property = Property::atomic_with_args(
            "VerifyInclusion",
            vec!["leaf".to_string(), "range".to_string(), "proof".to_string()],
        );
        assert_eq!(property.to_string(), "VerifyInclusion");
    }

    #[test]
    fn display_nested() {
        let property = Property::forall(
            "b",
            "0-10",
            Property::and(vec![atomic("P"), Property::or(vec![atomic("Q"), atomic("R")])]),
        );
        assert_eq!(property.to_string(), "ForAll(And(P,Or(Q,R)))");
    }

    #[test]
    fn validate_accepts_well_formed_tree() {
        let property = Property::forall(
            "b",
            "0-10",
            Property::and(vec![
                atomic("P"),
                Property::not(Property::exists("s", "su", atomic("Q"))),
            ]),
        );
        assert!(property.validate().is_ok());
    }

    #[test]
    fn validate_rejects_undersized_conjunction() {
        let property = Property::and(vec![atomic("P")]);
        let err = property.validate().unwrap_err();
        assert!(matches!(err, RefuteError::MalformedProperty(_)));
        assert!(err.to_string().contains("And"));
    }

    #[test]
    fn validate_rejects_nested_empty_disjunction() {
        let property = Property::forall("b", "0-10", Property::not(Property::or(Vec::new())));
        let err = property.validate().unwrap_err();
        assert!(matches!(err, RefuteError::MalformedProperty(_)));
        assert!(err.to_string().contains("Or"));
    }

    #[test]
    fn deserializes_expanded_property_json() {
        let json = r#"
        {
            "ForAll": {
                "variable": "b",
                "range": "range,NUMBER,0-10",
                "body": {
                    "And": [
                        { "Atomic": { "predicate": "P" } },
                        { "Not": { "Atomic": { "predicate": "Q", "args": ["b"] } } }
                    ]
                }
            }
        }"#;

        let property: Property = serde_json::from_str(json).expect("valid property JSON");
        assert!(property.validate().is_ok());
        assert_eq!(property.kind(), "ForAll");
        assert_eq!(property.node_count(), 5);
        assert_eq!(property.to_string(), "ForAll(And(P,Not(Q)))");
    }

    #[test]
    fn counts_nodes() {
        let property = Property::and(vec![
            atomic("P"),
            Property::not(atomic("Q")),
            Property::exists("s", "su", atomic("R")),
        ]);
        assert_eq!(property.node_count(), 6);
    }
}
