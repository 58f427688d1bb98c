//! Merging two declarations of the same program from different sources.
//!
//! Per category:
//! - A value equal to the category default is silence; the other side wins.
//! - Two non-default values are ORed, so capability bits accumulate.
//! - The OR is then post-processed by the category's [`MergeRule`]: video
//!   standards are demoted off `Requires`, General and the Super Video Arcade
//!   keep the raw OR, and every other category drops the `Tolerates` bit when
//!   one side tolerated and the other enhanced (`1 | 2` would read as `Requires`).
//!
//! The version floor takes the higher of the two. The merge is commutative.

use crate::{
    category::{COMPATIBILITY_MASK, CompatibilityLevel},
    declaration::{FeatureDeclaration, coerce_video_standard},
    layout::{CategoryLayout, LAYOUT, MergeRule},
};

/// Merge two optional declarations.
///
/// One missing side yields a copy of the other; both missing yields the
/// "unrecognized ROM" default.
pub fn combine(
    first: Option<&FeatureDeclaration>,
    second: Option<&FeatureDeclaration>,
) -> FeatureDeclaration {
    match (first, second) {
        (Some(first), Some(second)) => first.combine(second),
        (Some(present), None) | (None, Some(present)) => present.clone(),
        (None, None) => FeatureDeclaration::default(),
    }
}

/// Fold any number of declarations through pairwise [`combine`].
pub fn combine_all<'a, I>(declarations: I) -> FeatureDeclaration
where
    I: IntoIterator<Item = &'a FeatureDeclaration>,
{
    let mut merged: Option<FeatureDeclaration> = None;
    for declaration in declarations {
        merged = Some(combine(merged.as_ref(), Some(declaration)));
    }
    merged.unwrap_or_default()
}

impl FeatureDeclaration {
    /// Merge `other` into a copy of `self`. See the module docs for the rules.
    pub fn combine(&self, other: &Self) -> Self {
        let mut merged = Self::empty();
        for row in &LAYOUT {
            let value = combine_value(row, self.get(row.category), other.get(row.category));
            merged.set(row.category, value);
        }
        merged.set_jlp_version(self.jlp_version().max(other.jlp_version()));
        merged
    }
}

fn combine_value(row: &CategoryLayout, first: u32, second: u32) -> u32 {
    let default = row.default_value;
    match (first == default, second == default) {
        (true, true) => default,
        (true, false) => second,
        (false, true) => first,
        (false, false) => {
            let merged = first | second;
            match row.merge {
                MergeRule::VideoStandard => coerce_video_standard(merged),
                MergeRule::Union => merged,
                MergeRule::CorrectHazard => correct_hazard(row, first, second, merged),
            }
        }
    }
}

fn correct_hazard(row: &CategoryLayout, first: u32, second: u32, merged: u32) -> u32 {
    let first_level = first & COMPATIBILITY_MASK;
    let second_level = second & COMPATIBILITY_MASK;
    if first_level != 0
        && second_level != 0
        && first_level ^ second_level == CompatibilityLevel::Requires.bits()
    {
        tracing::trace!(
            category = %row.category,
            first,
            second,
            "tolerates merged with enhances; keeping enhances"
        );
        merged & !CompatibilityLevel::Tolerates.bits()
    } else {
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        category::FeatureCategory,
        features::{
            CategoryFeatures, EcsFeatures, GeneralFeatures, JlpFeatures, JlpHardwareVersion,
        },
        layout::layout,
    };

    fn with_level(category: FeatureCategory, level: CompatibilityLevel) -> FeatureDeclaration {
        let mut decl = FeatureDeclaration::default();
        decl.set_level(category, level);
        decl
    }

    #[test]
    fn declared_opinion_beats_silence() {
        let jlp = with_level(FeatureCategory::Jlp, CompatibilityLevel::Requires);
        let merged = jlp.combine(&FeatureDeclaration::default());
        assert_eq!(merged, jlp);
        assert_eq!(merged.level(FeatureCategory::Jlp), CompatibilityLevel::Requires);
    }

    #[test]
    fn tolerates_plus_enhances_is_enhances() {
        let mut a = FeatureDeclaration::default();
        a.set_features(EcsFeatures::from_value(1) | EcsFeatures::TAPE);
        let mut b = FeatureDeclaration::default();
        b.set_features(EcsFeatures::from_value(2) | EcsFeatures::PRINTER);

        let merged = a.combine(&b);
        let ecs = merged.features::<EcsFeatures>();
        assert_eq!(ecs.level(), CompatibilityLevel::Enhances);
        assert!(ecs.contains(EcsFeatures::TAPE | EcsFeatures::PRINTER));
    }

    #[test]
    fn plain_tolerates_is_silence_against_enhances() {
        let a = with_level(FeatureCategory::Ecs, CompatibilityLevel::Tolerates);
        let b = with_level(FeatureCategory::Ecs, CompatibilityLevel::Enhances);
        assert_eq!(
            a.combine(&b).level(FeatureCategory::Ecs),
            CompatibilityLevel::Enhances
        );
    }

    #[test]
    fn video_standards_never_merge_to_requires() {
        let mut a = FeatureDeclaration::default();
        a.set_level(FeatureCategory::Ntsc, CompatibilityLevel::Tolerates);
        let mut b = FeatureDeclaration::default();
        b.set_level(FeatureCategory::Ntsc, CompatibilityLevel::Incompatible);
        assert_eq!(
            a.combine(&b).level(FeatureCategory::Ntsc),
            CompatibilityLevel::Tolerates
        );

        let ntsc = layout(FeatureCategory::Ntsc);
        assert_eq!(combine_value(ntsc, 0b01, 0b11), 0b10);
    }

    #[test]
    fn video_default_is_silence() {
        let mut pal = FeatureDeclaration::default();
        pal.set_level(FeatureCategory::Pal, CompatibilityLevel::Tolerates);
        assert_eq!(
            pal.combine(&FeatureDeclaration::default())
                .level(FeatureCategory::Pal),
            CompatibilityLevel::Tolerates
        );
    }

    #[test]
    fn general_keeps_raw_union() {
        let mut a = FeatureDeclaration::default();
        a.set_features(GeneralFeatures::PAGE_FLIPPING);
        let mut b = FeatureDeclaration::default();
        b.set_features(GeneralFeatures::UNRECOGNIZED_ROM | GeneralFeatures::ONBOARD_RAM);

        let merged = a.combine(&b).features::<GeneralFeatures>();
        assert_eq!(
            merged,
            GeneralFeatures::UNRECOGNIZED_ROM
                | GeneralFeatures::PAGE_FLIPPING
                | GeneralFeatures::ONBOARD_RAM
        );
    }

    #[test]
    fn super_video_arcade_is_not_corrected() {
        // Level-only categories default to Tolerates, so the hazard only shows
        // up with raw values carrying extra bits.
        let sva = layout(FeatureCategory::SuperVideoArcade);
        assert_eq!(combine_value(sva, 0b101, 0b010) & COMPATIBILITY_MASK, 0b11);

        let voice = layout(FeatureCategory::Intellivoice);
        assert_eq!(combine_value(voice, 0b101, 0b010) & COMPATIBILITY_MASK, 0b10);
    }

    #[test]
    fn capability_bits_accumulate() {
        let mut a = FeatureDeclaration::default();
        a.set_features(JlpFeatures::COMPATIBILITY | JlpFeatures::SAVE_DATA_OPTIONAL);
        let mut b = FeatureDeclaration::default();
        b.set_features(JlpFeatures::COMPATIBILITY | JlpFeatures::USES_LEDS);

        let jlp = a.combine(&b).features::<JlpFeatures>();
        assert_eq!(jlp.level(), CompatibilityLevel::Requires);
        assert!(jlp.contains(JlpFeatures::SAVE_DATA_OPTIONAL | JlpFeatures::USES_LEDS));
    }

    #[test]
    fn version_floor_takes_the_higher() {
        let mut a = FeatureDeclaration::default();
        a.set_jlp_version(JlpHardwareVersion::Jlp04);
        let mut b = FeatureDeclaration::default();
        b.set_jlp_version(JlpHardwareVersion::Jlp03);

        assert_eq!(a.combine(&b).jlp_version(), JlpHardwareVersion::Jlp04);
        assert_eq!(b.combine(&a).jlp_version(), JlpHardwareVersion::Jlp04);
        assert_eq!(
            a.combine(&FeatureDeclaration::default()).jlp_version(),
            JlpHardwareVersion::Jlp04
        );
    }

    #[test]
    fn missing_sides() {
        let jlp = with_level(FeatureCategory::Jlp, CompatibilityLevel::Requires);
        assert_eq!(combine(Some(&jlp), None), jlp);
        assert_eq!(combine(None, Some(&jlp)), jlp);
        assert_eq!(combine(None, None), FeatureDeclaration::default());
    }

    #[test]
    fn combine_all_folds_pairwise() {
        let ecs = with_level(FeatureCategory::Ecs, CompatibilityLevel::Requires);
        let voice = with_level(FeatureCategory::Intellivoice, CompatibilityLevel::Enhances);
        let mut newer = FeatureDeclaration::default();
        newer.set_jlp_version(JlpHardwareVersion::Jlp05);

        let merged = combine_all([&ecs, &voice, &newer]);
        assert_eq!(merged.level(FeatureCategory::Ecs), CompatibilityLevel::Requires);
        assert_eq!(
            merged.level(FeatureCategory::Intellivoice),
            CompatibilityLevel::Enhances
        );
        assert_eq!(merged.jlp_version(), JlpHardwareVersion::Jlp05);
        assert_eq!(
            combine_all(Vec::<&FeatureDeclaration>::new()),
            FeatureDeclaration::default()
        );
    }
}
