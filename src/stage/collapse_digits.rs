use crate::{
    context::Context,
    lang::Lang,
    stage::{Stage, replace_all_cow},
    testing::stage_contract::StageTestConfig,
    unicode::{DIGIT_RE, DIGIT_REPLACEMENT},
};
use regex::NoExpand;
use std::borrow::Cow;

/// Replace every Unicode decimal digit with `0`.
///
/// Exact numeric values are noise for fingerprinting: `room 204` and
/// `room 315` collapse to the same `room 000`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollapseDigits;

impl Stage for CollapseDigits {
    fn name(&self) -> &'static str {
        "collapse_digits"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        // Already-collapsed text is a fixed point.
        DIGIT_RE
            .find_iter(text)
            .any(|m| m.as_str() != DIGIT_REPLACEMENT)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        replace_all_cow(&DIGIT_RE, text, NoExpand(DIGIT_REPLACEMENT))
    }
}

impl StageTestConfig for CollapseDigits {
    fn samples(_lang: Lang) -> &'static [&'static str] {
        &["room 204", "٣ apples", "１２３", "000", "v1.2.3", ""]
    }

    fn should_pass_through(_lang: Lang) -> &'static [&'static str] {
        &["hello", "no digits here", "000", "½ ①", ""]
    }

    fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
        &[
            ("room 204", "room 000"),
            ("v1.2.3", "v0.0.0"),
            ("٣ apples", "0 apples"),
            ("１２３", "000"),
        ]
    }
}
