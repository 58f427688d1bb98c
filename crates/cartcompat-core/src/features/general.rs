use bitflags::bitflags;

use crate::category::{CompatibilityLevel, FeatureCategory};

use super::CategoryFeatures;

bitflags! {
    /// General ROM properties. These are not a compatibility level; bit 0
    /// marks a ROM no database recognized.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GeneralFeatures: u32 {
        const UNRECOGNIZED_ROM = 1 << 0;
        const PAGE_FLIPPING    = 1 << 1;
        const ONBOARD_RAM      = 1 << 2;
        const SYSTEM_ROM       = 1 << 3;
    }
}

// The low bits are properties, so there is no level to read or replace.
impl CategoryFeatures for GeneralFeatures {
    const CATEGORY: FeatureCategory = FeatureCategory::General;

    fn from_value(value: u32) -> Self {
        Self::from_bits_truncate(value)
    }

    fn value(self) -> u32 {
        self.bits()
    }

    fn level(self) -> CompatibilityLevel {
        CompatibilityLevel::Tolerates
    }

    fn with_level(self, _level: CompatibilityLevel) -> Self {
        self
    }
}
