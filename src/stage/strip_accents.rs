//! src/stage/strip_accents.rs
//!
//! Compatibility normalization (NFKC) followed by removal of every
//! non-spacing combining mark.

use crate::{
    context::Context,
    lang::Lang,
    stage::Stage,
    testing::stage_contract::StageTestConfig,
    unicode::is_nonspacing_mark,
};
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use std::{borrow::Cow, sync::LazyLock};

static ICU4X_NFKC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfkc);

/// Fold compatibility variants and drop diacritics.
///
/// # Normalization Form
///
/// Uses **NFKC**, then deletes General Category `Mn`:
/// - Full-width forms folded: `（`→`(`, `１２３`→`123`, `ＡＢＣ`→`ABC`
/// - Half-width katakana widened: `ｶ`→`カ`
/// - Ligatures expanded: `ﬁ`→`fi`
/// - Marks that survive composition removed: `q` + U+0301 → `q`
///
/// Precomposed letters stay composed under NFKC, so `é` is kept as `é`.
/// Marks are only dropped where they remain separate code points after
/// composition. That keeps CJK text (where the stage matters most) intact
/// while still cleaning stray combining sequences.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripAccents;

impl Stage for StripAccents {
    fn name(&self) -> &'static str {
        "strip_accents"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        if text.is_ascii() {
            return false;
        }
        !ICU4X_NFKC.is_normalized(text) || text.chars().any(is_nonspacing_mark)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let composed = ICU4X_NFKC.normalize(text.as_ref());
        Cow::Owned(composed.chars().filter(|&c| !is_nonspacing_mark(c)).collect())
    }
}

impl StageTestConfig for StripAccents {
    fn samples(_lang: Lang) -> &'static [&'static str] {
        &["caf\u{e9}", "e\u{0301}", "ﬁle", "①②③", "（ＡＢＣ）", "ｶﾞｷﾞ", "Hà Nội", ""]
    }

    fn should_pass_through(_lang: Lang) -> &'static [&'static str] {
        &["hello", "caf\u{e9}", "日本語のテキスト", ""]
    }

    fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
        &[
            ("ﬁle", "file"),
            ("（ＡＢＣ）１２３", "(ABC)123"),
            ("①②③", "123"),
            ("n\u{0300}\u{0303}", "\u{01F9}"),
            ("q\u{0301}", "q"),
        ]
    }
}
