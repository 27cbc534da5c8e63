use thiserror::Error;

/// Errors from the strict configuration parsers.
///
/// Normalization itself is total and never fails; only callers that opt into
/// strict parsing of switches and language tags can see these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusNormError {
    #[error("unsupported punctuation mode `{0}` (expected 0, 1 or 2)")]
    UnknownPunctMode(u8),

    #[error("unknown language tag `{0}`")]
    UnknownLang(String),
}
