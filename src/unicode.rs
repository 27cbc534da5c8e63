//! Static character data: the punctuation equivalence table, the control
//! ranges, and the character-class patterns derived from them.
//!
//! The patterns are pure functions of [`UNICODE_PUNCT`] and
//! [`NON_PRINTING_RANGES`]. Never edit a pattern by hand; change the table and
//! let the builders regenerate it.

use icu_properties::{CodePointMapData, CodePointMapDataBorrowed, props::GeneralCategory};
use phf::{Map, phf_map};
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

/// Unicode punctuation → ASCII (or simplified) replacement.
///
/// `。` and `、` map to themselves: the replace path keeps Japanese sentence
/// punctuation while the remove path still deletes it. `１` (FULLWIDTH DIGIT
/// ONE) mapping to `"` is historical corpus data and is kept as is so that
/// existing fingerprints stay stable.
pub static UNICODE_PUNCT: Map<char, &'static str> = phf_map! {
    '。' => "。",
    '、' => "、",
    '，' => "、",
    '„' => "\"",
    '”' => "\"",
    '“' => "\"",
    '«' => "\"",
    '»' => "\"",
    '１' => "\"",
    '」' => "\"",
    '「' => "\"",
    '《' => "\"",
    '》' => "\"",
    '´' => "'",
    '∶' => ":",
    '：' => ":",
    '？' => "?",
    '！' => "!",
    '（' => "(",
    '）' => ")",
    '；' => ";",
    '–' => "-",
    '—' => " - ",
    '．' => ". ",
    '～' => "~",
    '’' => "'",
    '…' => "...",
    '━' => "-",
    '〈' => "<",
    '〉' => ">",
    '【' => "[",
    '】' => "]",
    '％' => "%",
    '►' => "-",
};

/// C0 and C1 controls, except LF which carries paragraph structure.
pub const NON_PRINTING_RANGES: [RangeInclusive<char>; 3] = [
    '\u{0000}'..='\u{0009}',
    '\u{000B}'..='\u{001F}',
    '\u{007F}'..='\u{009F}',
];

/// Replacement used when collapsing digits.
pub const DIGIT_REPLACEMENT: &str = "0";

#[inline(always)]
pub fn is_non_printing(c: char) -> bool {
    let cp = c as u32;
    (cp <= 0x9F) && NON_PRINTING_RANGES.iter().any(|r| r.contains(&c))
}

#[inline(always)]
pub fn is_unicode_punct(c: char) -> bool {
    UNICODE_PUNCT.contains_key(&c)
}

/// Table replacement for `c`, or `None` when `c` is not a key.
#[inline(always)]
pub fn unicode_punct_replacement(c: char) -> Option<&'static str> {
    UNICODE_PUNCT.get(&c).copied()
}

/// Whitespace for line stripping: Unicode `White_Space` plus the C0
/// information separators U+001C..=U+001F, which line-oriented corpora use as
/// record and field breaks.
#[inline(always)]
pub fn is_line_edge_whitespace(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{001C}'..='\u{001F}')
}

static GENERAL_CATEGORY: LazyLock<CodePointMapDataBorrowed<'static, GeneralCategory>> =
    LazyLock::new(CodePointMapData::<GeneralCategory>::new);

/// General category `Mn` (non-spacing combining mark).
#[inline]
pub fn is_nonspacing_mark(c: char) -> bool {
    // Every Mn code point is outside ASCII.
    !c.is_ascii() && GENERAL_CATEGORY.get(c) == GeneralCategory::NonspacingMark
}

// ── Derived character classes ──────────────────────────────────────────────

/// Body of a character class (without brackets) matching every table key.
/// Keys are escaped so that `-`, `[`, `]`, `^` or `\` in the table can never
/// change the meaning of the class.
fn punct_class_body() -> String {
    let mut keys: Vec<char> = UNICODE_PUNCT.keys().copied().collect();
    keys.sort_unstable();
    let mut body = String::with_capacity(keys.len() * 4);
    let mut buf = [0u8; 4];
    for c in keys {
        body.push_str(&regex::escape(c.encode_utf8(&mut buf)));
    }
    body
}

/// Body of a character class matching [`NON_PRINTING_RANGES`].
fn non_printing_class_body() -> String {
    NON_PRINTING_RANGES
        .iter()
        .map(|r| format!("\\x{{{:X}}}-\\x{{{:X}}}", *r.start() as u32, *r.end() as u32))
        .collect()
}

fn compile_class(body: &str) -> Regex {
    Regex::new(&format!("[{body}]")).expect("character class built from static data is valid")
}

/// Any key of [`UNICODE_PUNCT`].
pub static UNICODE_PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| compile_class(&punct_class_body()));

/// Any non-printing control character, LF excluded.
pub static NON_PRINTING_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_class(&non_printing_class_body()));

/// Union of [`UNICODE_PUNCT_RE`] and [`NON_PRINTING_CHARS_RE`], for single-pass removal.
pub static PUNCT_OR_NON_PRINTING_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_class(&format!("{}{}", punct_class_body(), non_printing_class_body()))
});

/// A single Unicode decimal digit.
pub static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern is valid"));

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chars() -> impl Iterator<Item = char> {
        (0u32..=0x3100).filter_map(char::from_u32).chain(UNICODE_PUNCT.keys().copied())
    }

    #[test]
    fn punct_pattern_matches_exactly_the_table_keys() {
        for c in sample_chars() {
            let mut buf = [0u8; 4];
            assert_eq!(
                UNICODE_PUNCT_RE.is_match(c.encode_utf8(&mut buf)),
                is_unicode_punct(c),
                "U+{:04X}",
                c as u32
            );
        }
    }

    #[test]
    fn non_printing_pattern_agrees_with_predicate() {
        for c in sample_chars() {
            let mut buf = [0u8; 4];
            assert_eq!(
                NON_PRINTING_CHARS_RE.is_match(c.encode_utf8(&mut buf)),
                is_non_printing(c),
                "U+{:04X}",
                c as u32
            );
        }
    }

    #[test]
    fn union_pattern_is_the_union() {
        for c in sample_chars() {
            let mut buf = [0u8; 4];
            assert_eq!(
                PUNCT_OR_NON_PRINTING_CHARS_RE.is_match(c.encode_utf8(&mut buf)),
                is_unicode_punct(c) || is_non_printing(c),
                "U+{:04X}",
                c as u32
            );
        }
    }

    #[test]
    fn line_feed_is_printing() {
        assert!(!is_non_printing('\n'));
        assert!(is_non_printing('\t'));
        assert!(is_non_printing('\r'));
        assert!(is_non_printing('\u{0007}'));
        assert!(is_non_printing('\u{007F}'));
        assert!(is_non_printing('\u{009F}'));
        assert!(!is_non_printing('\u{00A0}'));
        assert!(!is_non_printing(' '));
    }

    #[test]
    fn escaping_keeps_class_metacharacters_literal() {
        // A body built from metacharacters must still match only those characters.
        let mut body = String::new();
        for c in ['-', ']', '[', '^', '\\'] {
            let mut buf = [0u8; 4];
            body.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
        let re = compile_class(&body);
        for c in ['-', ']', '[', '^', '\\'] {
            let mut buf = [0u8; 4];
            assert!(re.is_match(c.encode_utf8(&mut buf)), "{c}");
        }
        assert!(!re.is_match("a"));
        assert!(!re.is_match("Z"));
    }

    #[test]
    fn table_has_single_code_point_keys_and_expanding_values() {
        assert_eq!(UNICODE_PUNCT.len(), 34);
        assert_eq!(unicode_punct_replacement('…'), Some("..."));
        assert_eq!(unicode_punct_replacement('—'), Some(" - "));
        assert_eq!(unicode_punct_replacement('。'), Some("。"));
        assert_eq!(unicode_punct_replacement('a'), None);
    }

    #[test]
    fn nonspacing_marks() {
        assert!(is_nonspacing_mark('\u{0301}')); // combining acute
        assert!(is_nonspacing_mark('\u{3099}')); // combining kana voiced mark
        assert!(!is_nonspacing_mark('e'));
        assert!(!is_nonspacing_mark('\u{0903}')); // Devanagari visarga is Mc
    }

    #[test]
    fn digit_pattern_is_unicode_aware() {
        assert!(DIGIT_RE.is_match("7"));
        assert!(DIGIT_RE.is_match("٣")); // Arabic-Indic three
        assert!(DIGIT_RE.is_match("１"));
        assert!(!DIGIT_RE.is_match("½"));
    }

    #[test]
    fn information_separators_are_edge_whitespace() {
        assert!(is_line_edge_whitespace('\u{001C}'));
        assert!(is_line_edge_whitespace('\u{3000}'));
        assert!(!is_line_edge_whitespace('\u{0007}'));
    }
}
