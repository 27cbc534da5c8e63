use crate::{context::Context, lang::Lang, stage::Stage, testing::stage_contract::StageTestConfig};
use std::borrow::Cow;

/// Full Unicode lowercasing (`str::to_lowercase`, final sigma included).
///
/// Zero-copy when no character has a lowercase mapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCase;

#[inline(always)]
fn needs_lowercase(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    let mut lower = c.to_lowercase();
    lower.next() != Some(c) || lower.next().is_some()
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        text.chars().any(needs_lowercase)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(text.to_lowercase())
    }
}

impl StageTestConfig for LowerCase {
    fn samples(_lang: Lang) -> &'static [&'static str] {
        &["HELLO World", "ΟΔΟΣ", "İstanbul", "Straße", "ＡＢＣ", ""]
    }

    fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
        &[
            ("HELLO World", "hello world"),
            ("ΟΔΟΣ", "οδος"),
            ("ＡＢＣ", "ａｂｃ"),
            ("Straße", "straße"),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_lower_is_borrowed() {
        let input = "already lower 世界";
        let out = LowerCase.apply(Cow::Borrowed(input), &Context::default());
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn dotted_capital_i_expands() {
        let out = LowerCase.apply(Cow::Borrowed("İ"), &Context::default());
        assert_eq!(out, "i\u{0307}");
    }
}
