use crate::error::CorpusNormError;
use phf::{Map, phf_map};
use std::str::FromStr;

/// Locale classes that the tokenization spacing rules distinguish.
///
/// Resolved once per call from the language tag; every locale-dependent rule
/// dispatches on this enum instead of comparing tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleClass {
    /// `"quotation,"` style, period digit grouping.
    English,
    /// Quote placement is left alone, comma digit grouping.
    Czech,
    /// `"quotation",` style, comma digit grouping (German, Spanish, French).
    Continental,
    /// `"quotation",` style, period digit grouping. Also used for unknown tags.
    Other,
}

/// Separator inserted between two digits that are split by a single space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitGroupSeparator {
    Comma,
    Period,
}

/// Where punctuation goes relative to a closing double quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotePunctStyle {
    /// Move `,` / `.` that follow a quote in front of it.
    Inside,
    /// Move `,` / `.` that precede a quote behind it.
    Outside,
    /// Leave as is.
    Untouched,
}

impl LocaleClass {
    pub const ALL: [LocaleClass; 4] = [
        LocaleClass::English,
        LocaleClass::Czech,
        LocaleClass::Continental,
        LocaleClass::Other,
    ];

    /// Position in [`LocaleClass::ALL`].
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            LocaleClass::English => 0,
            LocaleClass::Czech => 1,
            LocaleClass::Continental => 2,
            LocaleClass::Other => 3,
        }
    }

    #[inline(always)]
    pub const fn digit_group_separator(self) -> DigitGroupSeparator {
        match self {
            LocaleClass::Czech | LocaleClass::Continental => DigitGroupSeparator::Comma,
            LocaleClass::English | LocaleClass::Other => DigitGroupSeparator::Period,
        }
    }

    #[inline(always)]
    pub const fn quote_punct_style(self) -> QuotePunctStyle {
        match self {
            LocaleClass::English => QuotePunctStyle::Inside,
            LocaleClass::Czech => QuotePunctStyle::Untouched,
            LocaleClass::Continental | LocaleClass::Other => QuotePunctStyle::Outside,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
    pub class: LocaleClass,
}

macro_rules! define_languages {
    ($( $id:ident, $code:literal, $name:literal, $class:ident );* $(;)?) => {
        $(
            pub const $id: Lang = Lang {
                code: $code,
                name: $name,
                class: LocaleClass::$class,
            };
        )*

        /// Every language constant known to the crate.
        pub const ALL_LANGS: &[Lang] = &[$($id),*];
    };
}

define_languages! {
    ENG, "en", "English", English;
    CES, "cs", "Czech", Czech;
    DEU, "de", "German", Continental;
    SPA, "es", "Spanish", Continental;
    FRA, "fr", "French", Continental;
    ITA, "it", "Italian", Other;
    NLD, "nl", "Dutch", Other;
    POR, "pt", "Portuguese", Other;
    JPN, "ja", "Japanese", Other;
    ZHO, "zh", "Chinese", Other;
    KOR, "ko", "Korean", Other;
    UND, "und", "Undetermined", Other;
}

pub const DEFAULT_LANG: Lang = ENG;

/// Accepted tags, aliases included. `cz` is the country code but shows up as
/// a language tag in real corpora often enough to honour it.
static LANG_TABLE: Map<&'static str, Lang> = phf_map! {
    "en" => ENG,
    "cs" => CES,
    "cz" => CES,
    "de" => DEU,
    "es" => SPA,
    "fr" => FRA,
    "it" => ITA,
    "nl" => NLD,
    "pt" => POR,
    "ja" => JPN,
    "zh" => ZHO,
    "ko" => KOR,
    "und" => UND,
};

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub const fn class(&self) -> LocaleClass {
        self.class
    }

    /// Strict lookup. Tags are matched exactly: `EN` is not `en`.
    pub fn lookup(code: &str) -> Option<Lang> {
        LANG_TABLE.get(code).copied()
    }

    /// Lenient lookup: unknown tags degrade to [`UND`], which carries the
    /// default locale rules.
    pub fn from_code(code: &str) -> Lang {
        Self::lookup(code).unwrap_or_else(|| {
            log::debug!("unknown language tag `{code}`, falling back to default locale rules");
            UND
        })
    }
}

impl Default for Lang {
    fn default() -> Self {
        DEFAULT_LANG
    }
}

impl FromStr for Lang {
    type Err = CorpusNormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| CorpusNormError::UnknownLang(s.to_owned()))
    }
}
