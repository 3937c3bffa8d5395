//! Property-based tests for the deployment-descriptor scanner

use archcheck::core::services::topology::{declares_key, first_undeclared, parse_declaration};
use proptest::prelude::*;

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,15}"
}

proptest! {
    #[test]
    fn indented_bare_key_is_declared(key in key(), indent in 0usize..12, trailing in 0usize..4) {
        let text = format!("services:\n{}{key}:{}\n", " ".repeat(indent), " ".repeat(trailing));
        prop_assert!(declares_key(&text, &key));
    }

    #[test]
    fn inline_value_is_not_a_declaration(key in key(), value in "[a-z0-9]{1,10}") {
        let text = format!("services:\n  {key}: {value}\n");
        prop_assert!(!declares_key(&text, &key) || key == "services");
    }

    #[test]
    fn key_survives_leading_whitespace(key in key(), indent in 0usize..12) {
        let line = format!("{}{key}:", " ".repeat(indent));
        prop_assert_eq!(parse_declaration(&line), Some(key.as_str()));
    }

    #[test]
    fn first_undeclared_finds_the_dropped_key(
        keys in prop::collection::btree_set(key(), 1..8),
        dropped in any::<prop::sample::Index>(),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let full: String = keys.iter().map(|k| format!("  {k}:\n    image: x\n")).collect();
        prop_assert_eq!(first_undeclared(&full, &keys), None);

        let missing = dropped.get(&keys);
        let partial: String = keys
            .iter()
            .filter(|k| *k != missing)
            .map(|k| format!("  {k}:\n    image: x\n"))
            .collect();
        prop_assert_eq!(first_undeclared(&partial, &keys), Some(missing.as_str()));
    }
}
