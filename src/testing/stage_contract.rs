use crate::{lang::Lang, stage::Stage};

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples(_lang: Lang) -> &'static [&'static str] {
        &["Hello World", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must come back unchanged and without allocation.
    fn should_pass_through(_lang: Lang) -> &'static [&'static str] {
        &["hello", "world", "abc def", ""]
    }

    /// Input/output pairs that pin the transformation down.
    fn should_transform(_lang: Lang) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Whether applying the stage twice equals applying it once.
    fn idempotent() -> bool {
        true
    }

    /// Whether `needs_apply` predicts a change exactly, rather than
    /// conservatively (never false when `apply` would change the text).
    fn exact_needs_apply() -> bool {
        true
    }
}

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `pass_through_is_zero_copy`: clean input is returned borrowed, same pointer
/// 2. `transforms_as_expected`: pinned input/output pairs hold
/// 3. `stage_is_idempotent`: applying twice equals applying once (when declared)
/// 4. `needs_apply_is_sound`: `needs_apply == false` implies no change, and
///    exactness when declared
/// 5. `handles_empty_string`: empty in, empty out
/// 6. `no_panic_on_mixed_scripts`: survives pathological real-world input
///
/// Every check runs for every language in [`crate::lang::ALL_LANGS`].
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::pass_through_is_zero_copy(&$stage);
        $crate::testing::stage_contract::transforms_as_expected(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_sound(&$stage);
        $crate::testing::stage_contract::handles_empty_string(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

#[cfg(test)]
use crate::{context::Context, lang::ALL_LANGS};
#[cfg(test)]
use std::borrow::Cow;

#[cfg(test)]
pub fn pass_through_is_zero_copy<S: StageTestConfig>(stage: &S) {
    for &lang in ALL_LANGS {
        let ctx = Context::new(lang);
        for &input in S::should_pass_through(lang) {
            assert!(
                !stage.needs_apply(input, &ctx),
                "needs_apply() true on pass-through sample for `{}` ({}): {input:?}",
                stage.name(),
                lang.code()
            );
            let out = stage.apply(Cow::Borrowed(input), &ctx);
            assert_eq!(out.as_ref(), input);
            assert!(
                matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
                "zero-copy violated for `{}` ({}): {input:?}",
                stage.name(),
                lang.code()
            );
        }
    }
}

#[cfg(test)]
pub fn transforms_as_expected<S: StageTestConfig>(stage: &S) {
    for &lang in ALL_LANGS {
        let ctx = Context::new(lang);
        for &(input, expected) in S::should_transform(lang) {
            let out = stage.apply(Cow::Borrowed(input), &ctx);
            assert_eq!(
                out.as_ref(),
                expected,
                "`{}` ({}) on {input:?}",
                stage.name(),
                lang.code()
            );
        }
    }
}

#[cfg(test)]
pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    if !S::idempotent() {
        return;
    }
    for &lang in ALL_LANGS {
        let ctx = Context::new(lang);
        for &input in S::samples(lang) {
            let once = stage.apply(Cow::Borrowed(input), &ctx).into_owned();
            let twice = stage.apply(Cow::Borrowed(once.as_str()), &ctx);
            assert_eq!(
                once,
                twice.as_ref(),
                "`{}` not idempotent in {} on {input:?}",
                stage.name(),
                lang.code()
            );
        }
    }
}

#[cfg(test)]
pub fn needs_apply_is_sound<S: StageTestConfig>(stage: &S) {
    for &lang in ALL_LANGS {
        let ctx = Context::new(lang);
        let inputs = S::samples(lang)
            .iter()
            .chain(S::should_pass_through(lang))
            .copied()
            .chain(S::should_transform(lang).iter().map(|&(i, _)| i));
        for input in inputs {
            let predicted = stage.needs_apply(input, &ctx);
            // Owned input so that stages which always allocate are not penalised.
            let output = stage.apply(Cow::Owned(input.to_owned()), &ctx);
            let changed = output != input;
            if S::exact_needs_apply() {
                assert_eq!(
                    predicted,
                    changed,
                    "needs_apply() mismatch for `{}` in {} on {input:?} (output = {output:?})",
                    stage.name(),
                    lang.code()
                );
            } else {
                assert!(
                    predicted || !changed,
                    "needs_apply() missed a change for `{}` in {} on {input:?} (output = {output:?})",
                    stage.name(),
                    lang.code()
                );
            }
        }
    }
}

#[cfg(test)]
pub fn handles_empty_string<S: StageTestConfig>(stage: &S) {
    for &lang in ALL_LANGS {
        let ctx = Context::new(lang);
        assert!(!stage.needs_apply("", &ctx), "`{}` wants to touch \"\"", stage.name());
        assert_eq!(stage.apply(Cow::Borrowed(""), &ctx), "");
    }
}

#[cfg(test)]
pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for input in [
        "Hello 世界 русский Türkçe العربية 简体中文",
        "\u{0000}\u{FEFF}\r\n\u{0301}«»“”…",
        "((( ))) \"\" '' `` 1 2 3 % : ; ?",
        "e\u{0301}\u{0302}\u{0303}",
    ] {
        let _ = stage.needs_apply(input, &ctx);
        let _ = stage.apply(Cow::Borrowed(input), &ctx);
    }
}
