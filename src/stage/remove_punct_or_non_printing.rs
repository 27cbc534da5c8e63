use crate::{
    context::Context,
    lang::Lang,
    stage::{Stage, replace_all_cow},
    testing::stage_contract::StageTestConfig,
    unicode::{PUNCT_OR_NON_PRINTING_CHARS_RE, is_non_printing, is_unicode_punct},
};
use std::borrow::Cow;

/// [`RemoveUnicodePunct`](super::unicode_punct::RemoveUnicodePunct) and
/// [`RemoveNonPrinting`](super::remove_non_printing::RemoveNonPrinting) fused
/// into a single scan over the union character class.
///
/// Both are pure deletions of disjoint character sets, so one pass over the
/// union gives the same result as the two passes in either order.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemovePunctOrNonPrinting;

impl Stage for RemovePunctOrNonPrinting {
    fn name(&self) -> &'static str {
        "remove_punct_or_non_printing"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        text.chars().any(|c| is_non_printing(c) || is_unicode_punct(c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        replace_all_cow(&PUNCT_OR_NON_PRINTING_CHARS_RE, text, "")
    }
}

impl StageTestConfig for RemovePunctOrNonPrinting {
    fn samples(_lang: Lang) -> &'static [&'static str] {
        &["“a”\u{0007}", "これは、ペンです。\n", "tab\t…", "plain", ""]
    }

    fn should_pass_through(_lang: Lang) -> &'static [&'static str] {
        &["hello \"world\"", "a\nb", ""]
    }

    fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
        &[
            ("“a”\u{0007}", "a"),
            ("これは、ペンです。\n", "これはペンです\n"),
            ("tab\t…", "tab"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(RemovePunctOrNonPrinting);
    }
}
