//! Condensed incompatibility summary.
//!
//! One bit per category that is flatly `Incompatible`, plus an "altered" bit
//! for the two console revisions whose level is `Enhances`. Filtering code
//! can test a program against attached hardware with a single mask instead of
//! walking a full declaration. The projection is lossy: everything that is
//! not flagged reads back as `Tolerates`.

use bitflags::bitflags;

use crate::{
    category::CompatibilityLevel,
    declaration::FeatureDeclaration,
    layout::LAYOUT,
};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct IncompatibilityFlags: u16 {
        const NTSC                       = 1 << 0;
        const PAL                        = 1 << 1;
        const KEYBOARD_COMPONENT         = 1 << 2;
        const SUPER_VIDEO_ARCADE         = 1 << 3;
        /// Runs on the Super Video Arcade, but behaves differently.
        const SUPER_VIDEO_ARCADE_ALTERED = 1 << 4;
        const INTELLIVOICE               = 1 << 5;
        const INTELLIVISION_II           = 1 << 6;
        /// Runs on the Intellivision II, but behaves differently.
        const INTELLIVISION_II_ALTERED   = 1 << 7;
        const ECS                        = 1 << 8;
        const TUTORVISION                = 1 << 9;
        const INTELLICART                = 1 << 10;
        const CUTTLE_CART_3              = 1 << 11;
        const JLP                        = 1 << 12;
        const LTO_FLASH                  = 1 << 13;
        const BEE3                       = 1 << 14;
        const HIVE                       = 1 << 15;
    }
}

impl IncompatibilityFlags {
    /// Summarize `features`.
    pub fn from_declaration(features: &FeatureDeclaration) -> Self {
        let mut flags = Self::empty();
        for row in &LAYOUT {
            match features.level(row.category) {
                CompatibilityLevel::Incompatible => {
                    flags |= row.incompatible_flag.unwrap_or_default();
                }
                CompatibilityLevel::Enhances => flags |= row.altered_flag.unwrap_or_default(),
                CompatibilityLevel::Tolerates | CompatibilityLevel::Requires => {}
            }
        }
        flags
    }

    /// Force the flagged categories of `features`: `Incompatible` for each
    /// incompatibility bit, `Enhances` for each altered bit. Unflagged
    /// categories keep whatever the caller seeded. If both bits of a console
    /// revision are set, `Incompatible` wins.
    pub fn apply_to(self, features: &mut FeatureDeclaration) {
        for row in &LAYOUT {
            if row.altered_flag.is_some_and(|flag| self.contains(flag)) {
                features.set_level(row.category, CompatibilityLevel::Enhances);
            }
            if row.incompatible_flag.is_some_and(|flag| self.contains(flag)) {
                features.set_level(row.category, CompatibilityLevel::Incompatible);
            }
        }
    }

    /// Rebuild a declaration from the summary alone, starting from
    /// [`FeatureDeclaration::tolerant`].
    pub fn to_declaration(self) -> FeatureDeclaration {
        let mut features = FeatureDeclaration::tolerant();
        self.apply_to(&mut features);
        features
    }
}

impl From<&FeatureDeclaration> for IncompatibilityFlags {
    fn from(features: &FeatureDeclaration) -> Self {
        Self::from_declaration(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::FeatureCategory;

    #[test]
    fn default_declaration_has_no_flags() {
        let flags = IncompatibilityFlags::from_declaration(&FeatureDeclaration::default());
        assert_eq!(flags, IncompatibilityFlags::empty());
    }

    #[test]
    fn empty_declaration_flags_every_incompatible_bit() {
        let flags = IncompatibilityFlags::from_declaration(&FeatureDeclaration::empty());
        let altered = IncompatibilityFlags::SUPER_VIDEO_ARCADE_ALTERED
            | IncompatibilityFlags::INTELLIVISION_II_ALTERED;
        assert_eq!(flags, IncompatibilityFlags::all() - altered);
    }

    #[test]
    fn console_revision_enhances_is_altered_not_incompatible() {
        let mut decl = FeatureDeclaration::default();
        decl.set_level(FeatureCategory::IntellivisionII, CompatibilityLevel::Enhances);
        decl.set_level(FeatureCategory::Ecs, CompatibilityLevel::Enhances);

        let flags = IncompatibilityFlags::from(&decl);
        assert_eq!(flags, IncompatibilityFlags::INTELLIVISION_II_ALTERED);
    }

    #[test]
    fn apply_forces_only_flagged_categories() {
        let mut decl = FeatureDeclaration::default();
        decl.set_level(FeatureCategory::Jlp, CompatibilityLevel::Requires);
        let flags = IncompatibilityFlags::ECS | IncompatibilityFlags::SUPER_VIDEO_ARCADE_ALTERED;
        flags.apply_to(&mut decl);

        assert_eq!(decl.level(FeatureCategory::Ecs), CompatibilityLevel::Incompatible);
        assert_eq!(
            decl.level(FeatureCategory::SuperVideoArcade),
            CompatibilityLevel::Enhances
        );
        assert_eq!(decl.level(FeatureCategory::Jlp), CompatibilityLevel::Requires);
        assert_eq!(decl.level(FeatureCategory::Ntsc), CompatibilityLevel::Enhances);
    }

    #[test]
    fn incompatible_beats_altered() {
        let flags =
            IncompatibilityFlags::INTELLIVISION_II | IncompatibilityFlags::INTELLIVISION_II_ALTERED;
        let decl = flags.to_declaration();
        assert_eq!(
            decl.level(FeatureCategory::IntellivisionII),
            CompatibilityLevel::Incompatible
        );
    }

    #[test]
    fn round_trip_loses_enhances_and_requires() {
        let mut decl = FeatureDeclaration::tolerant();
        decl.set_level(FeatureCategory::Intellivoice, CompatibilityLevel::Requires);
        decl.set_level(FeatureCategory::Ecs, CompatibilityLevel::Enhances);

        let rebuilt = IncompatibilityFlags::from(&decl).to_declaration();
        assert_ne!(rebuilt, decl);
        assert_eq!(
            rebuilt.level(FeatureCategory::Intellivoice),
            CompatibilityLevel::Tolerates
        );
        assert_eq!(rebuilt.level(FeatureCategory::Ecs), CompatibilityLevel::Tolerates);
    }

    #[test]
    fn round_trip_keeps_altered_console_revisions() {
        let mut decl = FeatureDeclaration::tolerant();
        decl.set_level(FeatureCategory::SuperVideoArcade, CompatibilityLevel::Enhances);
        decl.set_level(FeatureCategory::Tutorvision, CompatibilityLevel::Incompatible);

        let rebuilt = IncompatibilityFlags::from(&decl).to_declaration();
        assert_eq!(rebuilt, decl);
    }
}
