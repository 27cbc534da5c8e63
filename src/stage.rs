//! Core normalization stage abstraction.
//!
//! A stage is one rewrite of a line of text. Every stage is total: any valid
//! `&str` goes in, a `Cow<str>` comes out, and a non-match is a no-op. Stages
//! hand back the input `Cow` untouched when nothing changes, so a pipeline of
//! stages allocates only where a rewrite actually happens.

pub mod collapse_digits;
pub mod lower_case;
pub mod remove_non_printing;
pub mod remove_punct_or_non_printing;
pub mod spacing_for_tok;
pub mod strip_accents;
pub mod trim;
pub mod unicode_punct;

use crate::context::Context;
use memchr::memmem;
use regex::{Regex, Replacer};
use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and test failure messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` means `apply` would return its input
    /// unchanged, so the pipeline skips the stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// The transformation. Must be correct even when `needs_apply` is false.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

/// `Regex::replace_all` over a `Cow`, keeping the input (and its allocation,
/// or lack of one) when the pattern does not match.
pub(crate) fn replace_all_cow<'a, R: Replacer>(
    re: &Regex,
    text: Cow<'a, str>,
    rep: R,
) -> Cow<'a, str> {
    let replaced = match re.replace_all(&text, rep) {
        Cow::Borrowed(_) => None,
        Cow::Owned(s) => Some(s),
    };
    match replaced {
        Some(s) => Cow::Owned(s),
        None => text,
    }
}

#[inline(always)]
pub(crate) fn contains_literal(text: &str, needle: &str) -> bool {
    memmem::find(text.as_bytes(), needle.as_bytes()).is_some()
}

/// `str::replace` over a `Cow`, zero-copy when `from` does not occur.
pub(crate) fn replace_literal_cow<'a>(text: Cow<'a, str>, from: &str, to: &str) -> Cow<'a, str> {
    if contains_literal(&text, from) {
        Cow::Owned(text.replace(from, to))
    } else {
        text
    }
}
