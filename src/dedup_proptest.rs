//! Property-based tests for deduplication and URL set construction.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::config::{parse_remote, render};
    use crate::dedup::dedup;
    use crate::remote::RemoteUrlSet;
    use proptest::prelude::*;

    /// Small alphabet so that generated vectors actually contain duplicates.
    fn url_strategy() -> impl Strategy<Value = String> {
        "https://(a|b|c)\\.example/(x|y|z)\\.git"
    }

    proptest! {
        /// Property: dedup is idempotent
        #[test]
        fn dedup_is_idempotent(input in prop::collection::vec(0u8..8, 0..40)) {
            let once = dedup(input.clone());
            let twice = dedup(once.clone());
            prop_assert_eq!(once, twice);
        }

        /// Property: the output has no two equal elements
        #[test]
        fn dedup_output_is_unique(input in prop::collection::vec(0u8..8, 0..40)) {
            let result = dedup(input);
            for (i, a) in result.iter().enumerate() {
                prop_assert!(!result[i + 1..].contains(a));
            }
        }

        /// Property: the output is exactly the first occurrences, in input order
        #[test]
        fn dedup_matches_first_occurrences(input in prop::collection::vec(0u8..8, 0..40)) {
            let result = dedup(input.clone());
            let expected: Vec<u8> = input
                .iter()
                .enumerate()
                .filter(|(i, v)| input.iter().position(|x| x == *v) == Some(*i))
                .map(|(_, v)| *v)
                .collect();
            prop_assert_eq!(result, expected);
        }

        /// Property: no value is lost
        #[test]
        fn dedup_keeps_every_value(input in prop::collection::vec(0u8..8, 0..40)) {
            let result = dedup(input.clone());
            for value in &input {
                prop_assert!(result.contains(value));
            }
        }

        /// Property: rendering a set and parsing it back gives the same URLs
        #[test]
        fn render_then_parse_preserves_urls(urls in prop::collection::vec(url_strategy(), 1..10)) {
            let set = RemoteUrlSet::new(urls);
            let content = render(&set, "origin");
            let parsed = parse_remote(&content, "origin").unwrap();
            prop_assert_eq!(parsed, set);
        }
    }
}
