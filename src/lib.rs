//! Line-level text normalization for corpus cleaning, deduplication
//! fingerprints and pre-tokenization spacing.
//!
//! The free functions in [`policy`] cover the common cases. [`Normalizer`]
//! and [`Profile`] expose the same pipelines with zero-copy `Cow` output.

pub mod context;
pub mod error;
pub mod lang;
pub mod normalizer;
pub mod options;
pub mod policy;
pub mod process;
pub mod profile;
pub mod stage;
#[doc(hidden)]
pub mod testing;
pub mod unicode;

pub use context::Context;
pub use error::CorpusNormError;
pub use lang::{
    ALL_LANGS, CES, DEU, ENG, FRA, ITA, JPN, KOR, Lang, LocaleClass, NLD, POR, SPA, UND, ZHO,
};
pub use normalizer::{Normalizer, NormalizerBuilder};
pub use options::{NormalizeOptions, PunctMode, Strategy};
pub use policy::{
    normalize, normalize_for_dedup, normalize_spacing_for_tok, remove_non_printing_char,
    remove_unicode_punct, replace_unicode_punct, slow_normalize_for_dedup, strip_accents,
};
pub use profile::{Profile, preset};
pub use stage::{
    Stage, collapse_digits::CollapseDigits, lower_case::LowerCase,
    remove_non_printing::RemoveNonPrinting, remove_punct_or_non_printing::RemovePunctOrNonPrinting,
    spacing_for_tok::NormalizeSpacingForTok, strip_accents::StripAccents, trim::Trim,
    unicode_punct::{RemoveUnicodePunct, ReplaceUnicodePunct},
};
