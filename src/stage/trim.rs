use crate::{
    context::Context,
    lang::Lang,
    stage::Stage,
    testing::stage_contract::StageTestConfig,
    unicode::is_line_edge_whitespace,
};
use std::borrow::Cow;

/// Strip leading and trailing whitespace from a line.
///
/// Whitespace here is Unicode `White_Space` plus the C0 information
/// separators (see [`is_line_edge_whitespace`]). Interior whitespace is never
/// touched.
#[derive(Debug, Default, Clone, Copy)]
pub struct Trim;

impl Stage for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> bool {
        let bytes = text.as_bytes();
        // Fast ASCII path: check first/last byte
        if bytes.first().is_some_and(u8::is_ascii_whitespace)
            || bytes.last().is_some_and(u8::is_ascii_whitespace)
        {
            return true;
        }
        text.starts_with(is_line_edge_whitespace) || text.ends_with(is_line_edge_whitespace)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let end = text.trim_end_matches(is_line_edge_whitespace).len();
        let start = end - text[..end].trim_start_matches(is_line_edge_whitespace).len();
        if start == 0 && end == text.len() {
            return text;
        }
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(&s[start..end]),
            Cow::Owned(mut s) => {
                s.truncate(end);
                s.drain(..start);
                Cow::Owned(s)
            }
        }
    }
}

impl StageTestConfig for Trim {
    fn samples(_lang: Lang) -> &'static [&'static str] {
        &["  hello ", "\t\n", "　こんにちは　", "\u{001C}record\u{001F}", "", "mid  dle"]
    }

    fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
        &[
            (" \t hello \r\n ", "hello"),
            ("　こんにちは　", "こんにちは"),
            ("\u{001E}x\u{001D}", "x"),
            ("   ", ""),
        ]
    }
}
