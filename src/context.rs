// src/context.rs
// Tiny, Copy, and 'static only: it is passed by reference into every stage.

use crate::lang::{DEFAULT_LANG, Lang};

/// Runtime context passed to every normalization stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub lang: Lang,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_LANG)
    }
}

impl Context {
    #[inline(always)]
    pub const fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// Context for a raw language tag; unknown tags get the default locale rules.
    #[inline]
    pub fn from_code(code: &str) -> Self {
        Self::new(Lang::from_code(code))
    }
}
