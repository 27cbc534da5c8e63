//! stage/remove_non_printing.rs
//! Remove C0 and C1 control characters except LF (BEL, ESC, DEL, CR, TAB, ...).
//! Very common in crawled data.

use crate::{
    context::Context,
    lang::Lang,
    stage::{Stage, replace_all_cow},
    testing::stage_contract::StageTestConfig,
    unicode::{NON_PRINTING_CHARS_RE, is_non_printing},
};
use std::borrow::Cow;

/// Line feeds survive: they mark paragraph boundaries in the target text.
/// Tabs and carriage returns do not.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveNonPrinting;

impl Stage for RemoveNonPrinting {
    fn name(&self) -> &'static str {
        "remove_non_printing"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        text.chars().any(is_non_printing)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        replace_all_cow(&NON_PRINTING_CHARS_RE, text, "")
    }
}

impl StageTestConfig for RemoveNonPrinting {
    fn samples(_lang: Lang) -> &'static [&'static str] {
        &["a\u{0007}b", "line\nbreak", "tab\there", "\u{0000}\u{009F}", "clean", ""]
    }

    fn should_pass_through(_lang: Lang) -> &'static [&'static str] {
        &["a\nb", "hello world", "\u{00A0}nbsp", ""]
    }

    fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
        &[
            ("a\u{0007}b", "ab"),
            ("tab\there", "tabhere"),
            ("crlf\r\n", "crlf\n"),
            ("\u{001B}[0m", "[0m"),
            ("end\u{007F}\u{0085}", "end"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(RemoveNonPrinting);
    }
}
