use bitflags::bitflags;

use crate::category::FeatureCategory;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyboardComponentFeatures: u32 {
        const COMPATIBILITY      = 0b11;
        const MICROPHONE         = 1 << 2;
        const TAPE_OPTIONAL      = 1 << 3;
        const TAPE_REQUIRED      = 1 << 4;
        /// Needs the Microsoft BASIC cartridge.
        const BASIC_REQUIRED     = 1 << 5;
        const BASIC_INCOMPATIBLE = 1 << 6;
        const PRINTER            = 1 << 7;
    }
}

category_features!(KeyboardComponentFeatures, FeatureCategory::KeyboardComponent);
