use crate::{
    options::{NormalizeOptions, PunctMode, Strategy},
    process::{ChainedProcess, DynamicProcess, EmptyProcess, TrimmedLine},
    profile::Profile,
    stage::{
        collapse_digits::CollapseDigits, lower_case::LowerCase,
        remove_non_printing::RemoveNonPrinting,
        remove_punct_or_non_printing::RemovePunctOrNonPrinting,
        spacing_for_tok::NormalizeSpacingForTok,
        strip_accents::StripAccents,
        unicode_punct::{RemoveUnicodePunct, ReplaceUnicodePunct},
    },
};

pub type LineProfile = Profile<TrimmedLine<DynamicProcess>>;

pub type TokenizationProfile = Profile<ChainedProcess<NormalizeSpacingForTok, EmptyProcess>>;

/// Compile a switch set into a line profile.
///
/// Stage order: lowercase, strip accents, collapse digits, punctuation,
/// control characters. Under [`Strategy::Fused`] a `Remove` punctuation mode
/// and the control filter share one stage.
pub fn from_options(
    name: &'static str,
    options: NormalizeOptions,
    strategy: Strategy,
) -> LineProfile {
    let builder = Profile::plugin_builder(name)
        .add_stage_if(options.case, LowerCase)
        .add_stage_if(options.accent, StripAccents)
        .add_stage_if(options.numbers, CollapseDigits);
    let builder = match (options.punct, strategy) {
        (PunctMode::None, _) => builder.add_stage(RemoveNonPrinting),
        (PunctMode::Replace, _) => builder
            .add_stage(ReplaceUnicodePunct)
            .add_stage(RemoveNonPrinting),
        (PunctMode::Remove, Strategy::Staged) => builder
            .add_stage(RemoveUnicodePunct)
            .add_stage(RemoveNonPrinting),
        (PunctMode::Remove, Strategy::Fused) => builder.add_stage(RemovePunctOrNonPrinting),
    };
    builder.build_line()
}

/// Corpus cleaning: accents stripped, everything else kept.
pub fn corpus() -> LineProfile {
    from_options("corpus", NormalizeOptions::CORPUS, Strategy::Staged)
}

/// Dedup fingerprint, single deletion pass.
pub fn dedup() -> LineProfile {
    from_options("dedup", NormalizeOptions::DEDUP, Strategy::Fused)
}

/// Dedup fingerprint, one stage per concern. Reference for [`dedup`].
pub fn dedup_staged() -> LineProfile {
    from_options("dedup_staged", NormalizeOptions::DEDUP, Strategy::Staged)
}

/// Spacing cleanup before tokenization. Not a line policy: no trimming.
pub fn tokenization() -> TokenizationProfile {
    Profile::builder("tokenization")
        .add_stage(NormalizeSpacingForTok)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_stage_order() {
        assert_eq!(
            corpus().stage_names(),
            ["trim", "strip_accents", "remove_non_printing"]
        );
    }

    #[test]
    fn dedup_strategies_differ_only_in_the_tail() {
        assert_eq!(
            dedup().stage_names(),
            ["trim", "lower_case", "collapse_digits", "remove_punct_or_non_printing"]
        );
        assert_eq!(
            dedup_staged().stage_names(),
            [
                "trim",
                "lower_case",
                "collapse_digits",
                "remove_unicode_punct",
                "remove_non_printing"
            ]
        );
    }

    #[test]
    fn fusion_only_touches_remove_mode() {
        let opts = NormalizeOptions::new().punct(PunctMode::Replace);
        assert_eq!(
            from_options("a", opts, Strategy::Fused).stage_names(),
            from_options("b", opts, Strategy::Staged).stage_names()
        );
    }

    #[test]
    fn every_profile_ends_with_control_filter() {
        for i in 0..NormalizeOptions::COMBINATIONS {
            for strategy in [Strategy::Staged, Strategy::Fused] {
                let names =
                    from_options("p", NormalizeOptions::from_index(i), strategy).stage_names();
                let last = *names.last().unwrap();
                assert!(
                    last == "remove_non_printing" || last == "remove_punct_or_non_printing",
                    "{names:?}"
                );
            }
        }
    }

    #[test]
    fn tokenization_has_single_stage() {
        assert_eq!(tokenization().stage_names(), ["normalize_spacing_for_tok"]);
    }
}
