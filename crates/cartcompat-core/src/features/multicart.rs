use bitflags::bitflags;

use crate::category::FeatureCategory;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IntellicartFeatures: u32 {
        const COMPATIBILITY        = 0b11;
        const BANKSWITCHING        = 1 << 2;
        const SIXTEEN_BIT_RAM      = 1 << 3;
        const SERIAL_PORT_ENHANCED = 1 << 4;
        const SERIAL_PORT_REQUIRED = 1 << 5;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CuttleCart3Features: u32 {
        const COMPATIBILITY        = 0b11;
        const BANKSWITCHING        = 1 << 2;
        const SIXTEEN_BIT_RAM      = 1 << 3;
        const SERIAL_PORT_ENHANCED = 1 << 4;
        const SERIAL_PORT_REQUIRED = 1 << 5;
        const EIGHT_BIT_RAM        = 1 << 6;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Bee3Features: u32 {
        const COMPATIBILITY      = 0b11;
        const SAVE_DATA_OPTIONAL = 1 << 2;
        const SAVE_DATA_REQUIRED = 1 << 3;
        const SIXTEEN_BIT_RAM    = 1 << 4;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HiveFeatures: u32 {
        const COMPATIBILITY      = 0b11;
        const SAVE_DATA_OPTIONAL = 1 << 2;
        const SAVE_DATA_REQUIRED = 1 << 3;
        const SIXTEEN_BIT_RAM    = 1 << 4;
    }
}

category_features!(IntellicartFeatures, FeatureCategory::Intellicart);
category_features!(CuttleCart3Features, FeatureCategory::CuttleCart3);
category_features!(Bee3Features, FeatureCategory::Bee3);
category_features!(HiveFeatures, FeatureCategory::Hive);
