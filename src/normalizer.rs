use crate::{
    context::Context,
    lang::Lang,
    options::{NormalizeOptions, Strategy},
    policy::{DEDUP, DEDUP_STAGED, TOKENIZATION},
    profile::preset::{self, LineProfile},
};
use std::borrow::Cow;

/// Reusable normalizer bound to one language and one switch set.
///
/// Unlike the free functions, every method borrows the input and returns it
/// untouched (`Cow::Borrowed`) when no stage applies.
pub struct Normalizer {
    ctx: Context,
    options: NormalizeOptions,
    policy: LineProfile,
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    pub fn lang(&self) -> Lang {
        self.ctx.lang
    }

    pub fn options(&self) -> NormalizeOptions {
        self.options
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.policy.stage_names()
    }

    pub fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.policy.run_str(line, &self.ctx)
    }

    pub fn normalize_for_dedup<'a>(&self, line: &'a str) -> Cow<'a, str> {
        DEDUP.run_str(line, &self.ctx)
    }

    pub fn slow_normalize_for_dedup<'a>(&self, line: &'a str) -> Cow<'a, str> {
        DEDUP_STAGED.run_str(line, &self.ctx)
    }

    pub fn normalize_spacing_for_tok<'a>(&self, text: &'a str) -> Cow<'a, str> {
        TOKENIZATION.run_str(text, &self.ctx)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizerBuilder {
    lang: Lang,
    options: NormalizeOptions,
    strategy: Strategy,
}

impl NormalizerBuilder {
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Lenient: unknown tags select the generic locale rules.
    pub fn lang_code(mut self, code: &str) -> Self {
        self.lang = Lang::from_code(code);
        self
    }

    pub fn options(mut self, options: NormalizeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn build(self) -> Normalizer {
        log::debug!(
            "normalizer for {} (`{}`), {:?} strategy",
            self.lang.name(),
            self.lang.code(),
            self.strategy
        );
        Normalizer {
            ctx: Context::new(self.lang),
            options: self.options,
            policy: preset::from_options("normalizer", self.options, self.strategy),
        }
    }
}
