//! src/stage/spacing_for_tok.rs
//!
//! Spacing and quotation canonicalization ahead of tokenization.
//!
//! The rewrite is an ordered list of [`RuleStep`]s. Order matters: quote
//! unification (step 8) must have run before the locale quote rule (step 11)
//! looks for `"`, and parenthesis spacing (step 2) must run before the
//! paren/punctuation attachment (step 3) can see `) .`.

use crate::{
    context::Context,
    lang::{DigitGroupSeparator, Lang, LocaleClass, QuotePunctStyle},
    stage::{Stage, contains_literal, replace_all_cow, replace_literal_cow},
    testing::stage_contract::StageTestConfig,
};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// One rewrite: a matcher plus its replacement.
#[derive(Debug)]
pub enum Rule {
    /// Replace every occurrence of a literal string.
    Literal { from: &'static str, to: &'static str },
    /// Replace every match of a pattern; `to` may reference groups as `${n}`.
    Pattern { re: Regex, to: &'static str },
}

impl Rule {
    const fn literal(from: &'static str, to: &'static str) -> Self {
        Rule::Literal { from, to }
    }

    fn pattern(re: &str, to: &'static str) -> Self {
        Rule::Pattern {
            re: Regex::new(re).expect("spacing rule pattern is valid"),
            to,
        }
    }

    /// Whether this rule would find anything to rewrite in `text`.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Rule::Literal { from, .. } => contains_literal(text, from),
            Rule::Pattern { re, .. } => re.is_match(text),
        }
    }

    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match self {
            Rule::Literal { from, to } => replace_literal_cow(text, from, to),
            Rule::Pattern { re, to } => replace_all_cow(re, text, *to),
        }
    }
}

/// A named, ordered group of rules: one step of the pipeline.
#[derive(Debug)]
pub struct RuleStep {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

impl RuleStep {
    fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.rules.iter().any(|r| r.matches(text))
    }

    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        self.rules.iter().fold(text, |acc, rule| rule.apply(acc))
    }
}

const COLLAPSE_SPACES: &str = " {2,}";

/// Steps 1–10, shared by every locale.
static COMMON_STEPS: LazyLock<[RuleStep; 10]> = LazyLock::new(|| {
    [
        RuleStep::new("strip_carriage_returns", vec![Rule::literal("\r", "")]),
        RuleStep::new(
            "space_parentheses",
            vec![
                Rule::literal("(", " ("),
                Rule::literal(")", ") "),
                Rule::pattern(COLLAPSE_SPACES, " "),
            ],
        ),
        RuleStep::new(
            "attach_punct_to_paren",
            vec![Rule::pattern(r"\) ([.!:?;,])", ")${1}")],
        ),
        RuleStep::new(
            "trim_inside_parentheses",
            vec![Rule::literal("( ", "("), Rule::literal(" )", ")")],
        ),
        RuleStep::new("attach_percent", vec![Rule::pattern(r"(\d) %", "${1}%")]),
        RuleStep::new(
            "attach_colon_semicolon",
            vec![Rule::literal(" :", ":"), Rule::literal(" ;", ";")],
        ),
        RuleStep::new(
            "unify_backticks",
            vec![Rule::literal("`", "'"), Rule::literal("''", " \" ")],
        ),
        RuleStep::new(
            "fold_unicode_quotes",
            vec![
                Rule::literal("„", "\""),
                Rule::literal("“", "\""),
                Rule::literal("”", "\""),
                Rule::literal("–", "-"),
                Rule::literal("—", " - "),
                Rule::pattern(COLLAPSE_SPACES, " "),
                Rule::literal("´", "'"),
                Rule::literal("‘", "\""),
                Rule::literal("‚", "\""),
                Rule::literal("’", "\""),
                Rule::literal("''", "\""),
                Rule::literal("…", "..."),
            ],
        ),
        RuleStep::new(
            "french_guillemets",
            vec![
                Rule::literal(" « ", " \""),
                Rule::literal("« ", "\""),
                Rule::literal("«", "\""),
                Rule::literal(" » ", "\" "),
                Rule::literal(" »", "\""),
                Rule::literal("»", "\""),
            ],
        ),
        // Typeset text puts NO-BREAK SPACE where an ASCII space would be dropped.
        RuleStep::new(
            "pseudo_spaces",
            vec![
                Rule::pattern("[ \u{A0}]%", "%"),
                Rule::literal("nº\u{A0}", "nº "),
                Rule::pattern("[ \u{A0}]:", ":"),
                Rule::literal("\u{A0}ºC", " ºC"),
                Rule::literal("\u{A0}cm", " cm"),
                Rule::pattern("[ \u{A0}]\\?", "?"),
                Rule::pattern("[ \u{A0}]!", "!"),
                Rule::pattern("[ \u{A0}];", ";"),
                Rule::literal(",\u{A0}", ", "),
                Rule::pattern(COLLAPSE_SPACES, " "),
                Rule::literal("．", ". "),
            ],
        ),
    ]
});

static QUOTE_PUNCT_INSIDE: LazyLock<RuleStep> = LazyLock::new(|| {
    RuleStep::new(
        "quote_punct_inside",
        vec![Rule::pattern(r#""([,.]+)"#, "${1}\"")],
    )
});

static QUOTE_PUNCT_OUTSIDE: LazyLock<RuleStep> = LazyLock::new(|| {
    RuleStep::new(
        "quote_punct_outside",
        vec![
            Rule::literal(",\"", "\","),
            // A period right before the closing quote at the very end of the
            // text (or before markup) is a sentence end and stays put.
            Rule::pattern(r#"(\.+)"(\s*[^<])"#, "\"${1}${2}"),
        ],
    )
});

static DIGIT_GROUP_COMMA: LazyLock<RuleStep> = LazyLock::new(|| {
    RuleStep::new("digit_group_comma", vec![Rule::pattern(r"(\d) (\d)", "${1},${2}")])
});

static DIGIT_GROUP_PERIOD: LazyLock<RuleStep> = LazyLock::new(|| {
    RuleStep::new("digit_group_period", vec![Rule::pattern(r"(\d) (\d)", "${1}.${2}")])
});

fn build_steps(class: LocaleClass) -> Vec<&'static RuleStep> {
    let mut steps: Vec<&'static RuleStep> = COMMON_STEPS.iter().collect();
    match class.quote_punct_style() {
        QuotePunctStyle::Inside => steps.push(&*QUOTE_PUNCT_INSIDE),
        QuotePunctStyle::Outside => steps.push(&*QUOTE_PUNCT_OUTSIDE),
        QuotePunctStyle::Untouched => {}
    }
    steps.push(match class.digit_group_separator() {
        DigitGroupSeparator::Comma => &*DIGIT_GROUP_COMMA,
        DigitGroupSeparator::Period => &*DIGIT_GROUP_PERIOD,
    });
    steps
}

static STEPS_BY_CLASS: LazyLock<[Vec<&'static RuleStep>; 4]> =
    LazyLock::new(|| LocaleClass::ALL.map(build_steps));

/// The full ordered step list for a locale class.
#[inline]
pub fn rule_steps(class: LocaleClass) -> &'static [&'static RuleStep] {
    &STEPS_BY_CLASS[class.index()]
}

/// Canonicalize spacing around parentheses, punctuation, percent signs,
/// quotation marks and digit groups, following the locale of the context.
///
/// Not idempotent: digit grouping rewrites `1 2 3` to `1.2 3` on the first
/// pass and to `1.2.3` on the second.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeSpacingForTok;

impl Stage for NormalizeSpacingForTok {
    fn name(&self) -> &'static str {
        "normalize_spacing_for_tok"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        // If no rule matches the input, no rule ever fires.
        rule_steps(ctx.lang.class())
            .iter()
            .any(|step| step.matches(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let mut current = text;
        for &step in rule_steps(ctx.lang.class()) {
            if !step.matches(&current) {
                continue;
            }
            current = step.apply(current);
            log::trace!("spacing step `{}` applied ({})", step.name, ctx.lang.code());
        }
        current
    }
}

impl StageTestConfig for NormalizeSpacingForTok {
    fn samples(_lang: Lang) -> &'static [&'static str] {
        &[
            "Hello ( world ) .",
            "50 %",
            "“Hello”, she said.",
            "Il a dit « bonjour » à tous",
            "a\r\nb",
            "",
        ]
    }

    fn should_pass_through(_lang: Lang) -> &'static [&'static str] {
        &["hello world", "50%", "a\nb", "it's fine", ""]
    }

    fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
        &[
            ("Hello ( world ) .", "Hello (world)."),
            ("50 %", "50%"),
            ("a\r\nb", "a\nb"),
            ("Note : ceci ; cela", "Note: ceci; cela"),
            ("a–b—c", "a-b - c"),
            ("don’t stop", "don\"t stop"),
            ("Wow !", "Wow!"),
        ]
    }

    fn idempotent() -> bool {
        false
    }

    fn exact_needs_apply() -> bool {
        false
    }
}
