#[cfg(test)]
mod prop_tests {
    use crate::{
        NormalizeOptions, normalize, normalize_for_dedup, normalize_spacing_for_tok,
        remove_non_printing_char, remove_unicode_punct, slow_normalize_for_dedup,
        unicode::{is_non_printing, is_unicode_punct},
    };
    use proptest::prelude::*;

    fn options() -> impl Strategy<Value = NormalizeOptions> {
        (0..NormalizeOptions::COMBINATIONS).prop_map(NormalizeOptions::from_index)
    }

    // Mixes ASCII with table punctuation, controls, marks and CJK.
    fn noisy_line() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ,.()%:;\"'`\t\r\n\u{0007}\u{0085}。、，「」“”«»…—–％（）\u{0301}éこ中１]{0,80}"
    }

    proptest! {
        #[test]
        fn remove_unicode_punct_idempotent(s in any::<String>()) {
            let once = remove_unicode_punct(&s);
            prop_assert_eq!(remove_unicode_punct(&once), once.clone());
            prop_assert!(!once.chars().any(is_unicode_punct));
        }

        #[test]
        fn dedup_strategies_agree(s in noisy_line()) {
            prop_assert_eq!(normalize_for_dedup(&s), slow_normalize_for_dedup(&s));
        }

        #[test]
        fn dedup_strategies_agree_on_arbitrary_input(s in any::<String>()) {
            prop_assert_eq!(normalize_for_dedup(&s), slow_normalize_for_dedup(&s));
        }

        #[test]
        fn normalize_never_leaves_controls(s in noisy_line(), opts in options()) {
            let out = normalize(&s, &opts);
            prop_assert!(!out.chars().any(is_non_printing), "{:?}", out);
        }

        #[test]
        fn collapsed_digits_are_zero(s in noisy_line()) {
            let out = normalize(&s, &NormalizeOptions::new().numbers(true));
            prop_assert!(!out.chars().any(|c| ('1'..='9').contains(&c)), "{:?}", out);
        }

        #[test]
        fn line_feeds_survive_control_filter(s in noisy_line()) {
            let out = remove_non_printing_char(&s);
            prop_assert_eq!(out.matches('\n').count(), s.matches('\n').count());
        }

        #[test]
        fn spacing_never_panics(
            s in any::<String>(),
            lang in prop::sample::select(vec!["en", "de", "cs", "cz", "fr", "ja", "xx", ""]),
        ) {
            let _ = normalize_spacing_for_tok(&s, lang);
        }

        #[test]
        fn spacing_drops_carriage_returns(s in noisy_line()) {
            prop_assert!(!normalize_spacing_for_tok(&s, "en").contains('\r'));
        }
    }
}
