//! Free-function entry points. Each takes one line and returns a new string.
//!
//! Profiles for every switch combination are compiled once, on first use.
use crate::{
    context::Context,
    options::{NormalizeOptions, Strategy},
    profile::preset::{self, LineProfile, TokenizationProfile},
    stage::{
        Stage, remove_non_printing::RemoveNonPrinting, strip_accents::StripAccents,
        unicode_punct::{RemoveUnicodePunct, ReplaceUnicodePunct},
    },
};
use std::{borrow::Cow, sync::LazyLock};

static POLICIES: LazyLock<Vec<LineProfile>> = LazyLock::new(|| {
    (0..NormalizeOptions::COMBINATIONS)
        .map(|i| {
            preset::from_options(
                "normalize",
                NormalizeOptions::from_index(i),
                Strategy::Staged,
            )
        })
        .collect()
});

pub(crate) static DEDUP: LazyLock<LineProfile> = LazyLock::new(preset::dedup);

pub(crate) static DEDUP_STAGED: LazyLock<LineProfile> = LazyLock::new(preset::dedup_staged);

pub(crate) static TOKENIZATION: LazyLock<TokenizationProfile> = LazyLock::new(preset::tokenization);

#[inline]
fn run_stage<S: Stage>(stage: S, text: &str, ctx: &Context) -> String {
    if stage.needs_apply(text, ctx) {
        stage.apply(Cow::Borrowed(text), ctx).into_owned()
    } else {
        text.to_owned()
    }
}

/// The configurable line policy.
///
/// Trims the line, returns early when nothing is left, then applies the
/// enabled stages and always removes control characters last.
pub fn normalize(line: &str, options: &NormalizeOptions) -> String {
    POLICIES[options.index()]
        .run_str(line, &Context::default())
        .into_owned()
}

/// Dedup fingerprint: trimmed, lowercased, digits collapsed, punctuation and
/// control characters removed in one pass. Accents are kept.
pub fn normalize_for_dedup(line: &str) -> String {
    DEDUP.run_str(line, &Context::default()).into_owned()
}

/// Same result as [`normalize_for_dedup`], going through [`normalize`].
pub fn slow_normalize_for_dedup(line: &str) -> String {
    DEDUP_STAGED.run_str(line, &Context::default()).into_owned()
}

pub fn replace_unicode_punct(text: &str) -> String {
    run_stage(ReplaceUnicodePunct, text, &Context::default())
}

pub fn remove_unicode_punct(text: &str) -> String {
    run_stage(RemoveUnicodePunct, text, &Context::default())
}

/// NFKC, then drop every nonspacing combining mark.
pub fn strip_accents(text: &str) -> String {
    run_stage(StripAccents, text, &Context::default())
}

pub fn remove_non_printing_char(text: &str) -> String {
    run_stage(RemoveNonPrinting, text, &Context::default())
}

/// Tokenization spacing cleanup with locale rules picked by `language`.
/// Unknown tags get the generic rules.
pub fn normalize_spacing_for_tok(text: &str, language: &str) -> String {
    TOKENIZATION
        .run_str(text, &Context::from_code(language))
        .into_owned()
}
