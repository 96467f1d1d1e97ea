//! Tokenizer properties.
//!
//! - Tokens are non-empty and only contain `[a-z0-9]`
//! - Normalization is idempotent
//! - Tokenizing is the same as splitting the normalized form
//! - Order is preserved for already-clean input

use folio::{is_token_char, normalize, tokenize};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: every token is non-empty and made of token characters.
    #[test]
    fn prop_tokens_are_clean(input in "\\PC{0,80}") {
        for token in tokenize(&input) {
            prop_assert!(!token.is_empty());
            prop_assert!(
                token.chars().all(is_token_char),
                "token {:?} from {:?} has a foreign character",
                token, input
            );
        }
    }

    /// Property: normalize(normalize(x)) == normalize(x).
    #[test]
    fn prop_normalize_idempotent(input in "\\PC{0,80}") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Property: normalized text has no leading, trailing or doubled spaces.
    #[test]
    fn prop_normalize_is_collapsed(input in "\\PC{0,80}") {
        let normalized = normalize(&input);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.contains("  "));
    }

    /// Property: tokens joined by spaces reproduce the normalized string.
    #[test]
    fn prop_tokens_join_to_normalized(input in "\\PC{0,80}") {
        prop_assert_eq!(tokenize(&input).join(" "), normalize(&input));
    }

    /// Property: clean lowercase words tokenize to themselves, in order.
    #[test]
    fn prop_clean_words_roundtrip(words in prop::collection::vec("[a-z0-9]{1,8}", 0..10)) {
        prop_assert_eq!(tokenize(&words.join(" ")), words);
    }

    /// Property: case never changes tokens.
    #[test]
    fn prop_case_insensitive(input in "[a-zA-Z0-9 ,.!-]{0,60}") {
        prop_assert_eq!(tokenize(&input.to_uppercase()), tokenize(&input.to_lowercase()));
    }
}
