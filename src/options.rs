//! Switches for the line policies.
use crate::error::CorpusNormError;

/// What to do with characters from the punctuation table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctMode {
    #[default]
    None,
    /// Map through the table.
    Replace,
    /// Delete every table key.
    Remove,
}

impl PunctMode {
    /// Lenient conversion from the numeric level (0, 1, 2).
    /// Anything else behaves like [`PunctMode::None`].
    pub const fn from_level(level: u8) -> Self {
        match level {
            1 => Self::Replace,
            2 => Self::Remove,
            _ => Self::None,
        }
    }

    pub const fn level(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Replace => 1,
            Self::Remove => 2,
        }
    }
}

impl TryFrom<u8> for PunctMode {
    type Error = CorpusNormError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Self::None),
            1 => Ok(Self::Replace),
            2 => Ok(Self::Remove),
            other => Err(CorpusNormError::UnknownPunctMode(other)),
        }
    }
}

/// How a policy's stage list is executed.
///
/// `Fused` merges the trailing punctuation deletion and control-character
/// deletion into one scan over the union class. Output is identical.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    #[default]
    Staged,
    Fused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizeOptions {
    pub accent: bool,
    pub case: bool,
    pub numbers: bool,
    pub punct: PunctMode,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::CORPUS
    }
}

impl NormalizeOptions {
    /// Accent stripping only; case, digits and punctuation kept.
    pub const CORPUS: Self = Self {
        accent: true,
        case: false,
        numbers: false,
        punct: PunctMode::None,
    };

    /// Fingerprint form used for deduplication.
    pub const DEDUP: Self = Self {
        accent: false,
        case: true,
        numbers: true,
        punct: PunctMode::Remove,
    };

    pub const fn new() -> Self {
        Self::CORPUS
    }

    pub const fn accent(mut self, on: bool) -> Self {
        self.accent = on;
        self
    }

    pub const fn case(mut self, on: bool) -> Self {
        self.case = on;
        self
    }

    pub const fn numbers(mut self, on: bool) -> Self {
        self.numbers = on;
        self
    }

    pub const fn punct(mut self, mode: PunctMode) -> Self {
        self.punct = mode;
        self
    }

    /// Dense index over every switch combination, `0..Self::COMBINATIONS`.
    pub(crate) const fn index(self) -> usize {
        (self.accent as usize)
            | (self.case as usize) << 1
            | (self.numbers as usize) << 2
            | (self.punct.level() as usize) << 3
    }

    pub(crate) const COMBINATIONS: usize = 24;

    pub(crate) const fn from_index(index: usize) -> Self {
        Self {
            accent: index & 1 != 0,
            case: index & 2 != 0,
            numbers: index & 4 != 0,
            punct: PunctMode::from_level((index >> 3) as u8),
        }
    }
}
