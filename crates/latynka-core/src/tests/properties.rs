//! Property-based tests for the romanization pipeline.

use proptest::prelude::*;

use super::UKRAINIAN_ALPHABET;
use crate::mapsa::Mapsa;
use crate::{explain, romanize};

fn arb_char() -> impl Strategy<Value = char> {
    let cyrillic: Vec<char> = UKRAINIAN_ALPHABET.chars().collect();
    prop_oneof![
        6 => prop::sample::select(cyrillic),
        1 => prop::sample::select(vec![' ', '\n', '\'', '-', ',', '!']),
        1 => prop::char::range('a', 'z'),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_char(), 0..40).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn deterministic(text in arb_text()) {
        prop_assert_eq!(romanize(&text), romanize(&text));
    }

    #[test]
    fn ascii_is_identity(text in "[ -~\n]{0,60}") {
        prop_assert_eq!(romanize(&text), text);
    }

    #[test]
    fn no_soft_sign_survives(text in arb_text()) {
        let out = romanize(&text);
        prop_assert!(!out.contains(|c: char| c == 'ь' || c == 'Ь'), "{:?} -> {:?}", text, out);
    }

    #[test]
    fn no_cyrillic_letter_survives(text in arb_text()) {
        let out = romanize(&text);
        prop_assert!(
            !out.chars().any(|c| UKRAINIAN_ALPHABET.contains(c)),
            "{:?} -> {:?}",
            text,
            out
        );
    }

    #[test]
    fn doubled_sibilant_uses_doubles_rendering(
        prefix in "[a-z ]{0,8}",
        suffix in "[a-z ]{0,8}",
        pair in prop::sample::select(vec![
            ("жж", "zhh"),
            ("шш", "shh"),
            ("чч", "jj"),
            ("ЖЖ", "ZHH"),
            ("ШШ", "SHH"),
            ("ЧЧ", "JJ"),
        ]),
    ) {
        let (cluster, rendering) = pair;
        let out = romanize(&format!("{prefix}{cluster}{suffix}"));
        prop_assert_eq!(out, format!("{prefix}{rendering}{suffix}"));
    }

    #[test]
    fn explain_agrees_with_romanize(text in arb_text()) {
        let r = explain(Mapsa::global(), &text);
        prop_assert_eq!(r.output, romanize(&text));
    }
}
