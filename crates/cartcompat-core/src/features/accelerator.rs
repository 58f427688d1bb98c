use bitflags::bitflags;
use strum::FromRepr;

use crate::{category::FeatureCategory, flash::FLASH_SECTOR_MASK};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct JlpFeatures: u32 {
        const COMPATIBILITY        = 0b11;
        const SAVE_DATA_OPTIONAL   = 1 << 2;
        const SAVE_DATA_REQUIRED   = 1 << 3;
        const BANKSWITCHING        = 1 << 4;
        const SIXTEEN_BIT_RAM      = 1 << 5;
        const SERIAL_PORT_ENHANCED = 1 << 6;
        const SERIAL_PORT_REQUIRED = 1 << 7;
        const USES_LEDS            = 1 << 8;
        /// Minimum flash sectors, see [`crate::flash`].
        const FLASH_SECTORS        = FLASH_SECTOR_MASK;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LtoFlashFeatures: u32 {
        const COMPATIBILITY        = 0b11;
        const SAVE_DATA_OPTIONAL   = 1 << 2;
        const SAVE_DATA_REQUIRED   = 1 << 3;
        const BANKSWITCHING        = 1 << 4;
        const SIXTEEN_BIT_RAM      = 1 << 5;
        const SERIAL_PORT_ENHANCED = 1 << 6;
        const SERIAL_PORT_REQUIRED = 1 << 7;
        const USES_LEDS            = 1 << 8;
        /// Talks to the cartridge through its memory-mapped registers.
        const MEMORY_MAPPED        = 1 << 9;
        /// Minimum flash sectors, see [`crate::flash`].
        const FLASH_SECTORS        = FLASH_SECTOR_MASK;
    }
}

category_features!(JlpFeatures, FeatureCategory::Jlp);
category_features!(LtoFlashFeatures, FeatureCategory::LtoFlash);

/// Oldest accelerator hardware revision able to run a program.
///
/// Later revisions are supersets of earlier ones, so merging keeps the higher
/// of two floors.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, FromRepr)]
#[cfg_attr(feature = "record-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JlpHardwareVersion {
    #[default]
    None = 0,
    Jlp03 = 1,
    Jlp04 = 2,
    Jlp05 = 3,
}
