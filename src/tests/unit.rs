#[cfg(test)]
mod unit_tests {
    use crate::{
        NormalizeOptions, PunctMode, normalize, normalize_for_dedup, normalize_spacing_for_tok,
        remove_non_printing_char, remove_unicode_punct, replace_unicode_punct,
        slow_normalize_for_dedup, strip_accents,
    };

    #[test]
    fn default_policy_trims_and_drops_controls() {
        let out = normalize("  Hello\u{0007} World  ", &NormalizeOptions::default());
        assert_eq!(out, "Hello World");
    }

    #[test]
    fn whitespace_only_line_is_empty() {
        for i in 0..NormalizeOptions::COMBINATIONS {
            let opts = NormalizeOptions::from_index(i);
            assert_eq!(normalize("   ", &opts), "");
            assert_eq!(normalize("\t\n \u{3000}", &opts), "");
        }
        assert_eq!(normalize_for_dedup(" \u{001F} "), "");
    }

    #[test]
    fn digits_collapse_to_zero() {
        let opts = NormalizeOptions::new().numbers(true);
        assert_eq!(normalize("room 204", &opts), "room 000");
        assert_eq!(normalize("room 204", &NormalizeOptions::default()), "room 204");
    }

    #[test]
    fn case_switch_lowercases() {
        let opts = NormalizeOptions::new().case(true);
        assert_eq!(normalize("ÉCOLE Normale", &opts), "école normale");
    }

    #[test]
    fn punct_modes() {
        let line = "“Hi”… これは、ペンです。";
        let none = NormalizeOptions::new().accent(false);
        assert_eq!(normalize(line, &none), line);
        assert_eq!(
            normalize(line, &none.punct(PunctMode::Replace)),
            "\"Hi\"... これは、ペンです。"
        );
        assert_eq!(
            normalize(line, &none.punct(PunctMode::Remove)),
            "Hi これはペンです"
        );
    }

    #[test]
    fn controls_are_removed_after_punctuation() {
        let opts = NormalizeOptions::new().punct(PunctMode::Replace);
        assert_eq!(normalize("a\u{0085}—b", &opts), "a - b");
    }

    #[test]
    fn replace_maps_table_entries() {
        assert_eq!(replace_unicode_punct("１"), "\"");
        assert_eq!(replace_unicode_punct("（注）"), "(注)");
        assert_eq!(replace_unicode_punct("50％"), "50%");
        assert_eq!(replace_unicode_punct("plain"), "plain");
    }

    #[test]
    fn remove_is_idempotent_on_example() {
        let once = remove_unicode_punct("«Bonjour» — dit-il…");
        assert_eq!(once, "Bonjour  dit-il");
        assert_eq!(remove_unicode_punct(&once), once);
    }

    #[test]
    fn newline_survives_control_filter() {
        assert_eq!(remove_non_printing_char("a\nb\tc\r"), "a\nbc");
        assert_eq!(remove_non_printing_char("x\u{0007}y"), "xy");
    }

    #[test]
    fn strip_accents_folds_width() {
        assert_eq!(strip_accents("（１）ＡＢＣ"), "(1)ABC");
        assert_eq!(strip_accents("a\u{0301}"), "\u{e1}");
        assert_eq!(strip_accents("q\u{0301}"), "q");
    }

    #[test]
    fn dedup_fingerprint() {
        let line = "  The Year 1999 — «END»!  ";
        assert_eq!(normalize_for_dedup(line), "the year 0000  end!");
        assert_eq!(slow_normalize_for_dedup(line), "the year 0000  end!");
    }

    #[test]
    fn dedup_keeps_accents() {
        assert_eq!(normalize_for_dedup("Déjà Vu"), "déjà vu");
    }

    #[test]
    fn spacing_examples() {
        assert_eq!(
            normalize_spacing_for_tok("Hello ( world ) .", "en"),
            "Hello (world)."
        );
        assert_eq!(normalize_spacing_for_tok("50 %", "en"), "50%");
        assert_eq!(normalize_spacing_for_tok("„Hallo“", "de"), "\"Hallo\"");
    }

    #[test]
    fn spacing_language_fallback() {
        assert_eq!(normalize_spacing_for_tok("1 000", "en"), "1.000");
        assert_eq!(normalize_spacing_for_tok("1 000", "xx"), "1.000");
        assert_eq!(normalize_spacing_for_tok("1 000", "cz"), "1,000");
        assert_eq!(normalize_spacing_for_tok("1 000", "fr"), "1,000");
        assert_eq!(normalize_spacing_for_tok("1 000", "FR"), "1.000");
    }

    #[test]
    fn uppercase_tag_is_not_english() {
        assert_eq!(
            normalize_spacing_for_tok("\"yes\". x", "en"),
            "\"yes.\" x"
        );
        assert_eq!(
            normalize_spacing_for_tok("\"yes\". x", "EN"),
            "\"yes\". x"
        );
    }
}
