use crate::{
    context::Context,
    lang::Lang,
    stage::{Stage, replace_all_cow},
    testing::stage_contract::StageTestConfig,
    unicode::{UNICODE_PUNCT_RE, unicode_punct_replacement},
};
use std::borrow::Cow;

/// Map every character through the punctuation equivalence table.
///
/// | Unicode | Replacement |
/// |---------|-------------|
/// | `„` `“` `”` `«` `»` `「` `」` `《` `》` | `"` |
/// | `´` `’` | `'` |
/// | `∶` `：` | `:` |
/// | `？` `！` `（` `）` `；` `％` `～` | ASCII counterpart |
/// | `–` `━` `►` | `-` |
/// | `—` | ` - ` |
/// | `．` | `. ` |
/// | `…` | `...` |
/// | `〈` `〉` `【` `】` | `<` `>` `[` `]` |
/// | `，` | `、` |
/// | `。` `、` | unchanged |
///
/// Characters outside the table pass through.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReplaceUnicodePunct;

#[inline(always)]
fn changes_under_table(c: char) -> bool {
    unicode_punct_replacement(c).is_some_and(|to| {
        let mut chars = to.chars();
        !(chars.next() == Some(c) && chars.next().is_none())
    })
}

impl Stage for ReplaceUnicodePunct {
    fn name(&self) -> &'static str {
        "replace_unicode_punct"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !text.is_ascii() && text.chars().any(changes_under_table)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match unicode_punct_replacement(c) {
                Some(to) => out.push_str(to),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}

/// Delete every character that is a key of the punctuation table.
///
/// Not the same as [`ReplaceUnicodePunct`] followed by a strip: the identity
/// entries `。` and `、` survive replacement but are deleted here.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveUnicodePunct;

impl Stage for RemoveUnicodePunct {
    fn name(&self) -> &'static str {
        "remove_unicode_punct"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !text.is_ascii() && UNICODE_PUNCT_RE.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        replace_all_cow(&UNICODE_PUNCT_RE, text, "")
    }
}

impl StageTestConfig for ReplaceUnicodePunct {
    fn samples(_lang: Lang) -> &'static [&'static str] {
        &["“Hello”", "これは、ペンです。", "（注）", "50％", "【重要】", "Wait…", ""]
    }

    fn should_pass_through(_lang: Lang) -> &'static [&'static str] {
        &["hello \"world\"", "it's", "これは、ペンです。", ""]
    }

    fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
        &[
            ("“Hello”", "\"Hello\""),
            ("Wait…", "Wait..."),
            ("a—b", "a - b"),
            ("１．５", "\". ５"),
            ("はい，いいえ", "はい、いいえ"),
            ("〈tag〉【x】", "<tag>[x]"),
        ]
    }
}

impl StageTestConfig for RemoveUnicodePunct {
    fn samples(_lang: Lang) -> &'static [&'static str] {
        &["“Hello”", "これは、ペンです。", "（注）", "50％", "plain", ""]
    }

    fn should_pass_through(_lang: Lang) -> &'static [&'static str] {
        &["hello \"world\"", "it's - fine", "日本語", ""]
    }

    fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
        &[
            ("“Hello”", "Hello"),
            ("これは、ペンです。", "これはペンです"),
            ("（注）", "注"),
            ("a—b…", "ab"),
        ]
    }
}
