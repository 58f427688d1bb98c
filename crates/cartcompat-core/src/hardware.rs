//! Packed feature flags read by flash-storage cartridges at run time.
//!
//! Layout (bit offsets into a little-endian `u64`, i.e. two 32-bit words):
//! - 0..=1   Intellivoice
//! - 2..=3   ECS
//! - 4..=5   Intellivision II
//! - 6..=7   Keyboard Component
//! - 8..=9   Tutorvision
//! - 10      extended peripheral sub-version present
//! - 14..=15 JLP
//! - 22..=31 JLP flash sectors
//! - 32..=33 LTO Flash!
//! - 40..=49 LTO Flash! flash sectors
//!
//! Categories without a slot in [`crate::layout::LAYOUT`] are dropped. The
//! conversion is one-way.

use crate::{
    category::{COMPATIBILITY_MASK, CompatibilityLevel, FeatureCategory},
    declaration::FeatureDeclaration,
    flash::{MAX_FLASH_SECTORS, unpack_sector_count},
    layout::{LAYOUT, layout},
};

/// Set whenever the Tutorvision bits are encoded, announcing the extended
/// peripheral sub-version scheme.
pub const EXTENDED_PERIPHERAL_BITS: u64 = 1 << 10;

/// Size of the encoded block in bytes.
pub const HARDWARE_FLAGS_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HardwareFlagBlock(u64);

impl HardwareFlagBlock {
    /// Pack the categories the hardware consults.
    pub fn from_declaration(features: &FeatureDeclaration) -> Self {
        let mut bits = 0u64;
        for row in &LAYOUT {
            let Some(slot) = row.hardware else {
                continue;
            };
            let value = features.get(row.category);
            bits |= u64::from(value & COMPATIBILITY_MASK) << slot.level_offset;
            if let Some(offset) = slot.sector_offset {
                bits |= u64::from(unpack_sector_count(value)) << offset;
            }
            bits |= slot.extra_bits;
        }
        Self(bits)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    /// The block as `[low word, high word]`.
    pub const fn words(self) -> [u32; 2] {
        [self.0 as u32, (self.0 >> 32) as u32]
    }

    pub const fn to_le_bytes(self) -> [u8; HARDWARE_FLAGS_LEN] {
        self.0.to_le_bytes()
    }

    /// Encoded level for `category`, or `None` if the format has no slot for it.
    pub fn level(self, category: FeatureCategory) -> Option<CompatibilityLevel> {
        let slot = layout(category).hardware?;
        let bits = (self.0 >> slot.level_offset) as u32;
        Some(CompatibilityLevel::from_bits(bits))
    }

    /// Encoded flash sector count for JLP / LTO Flash!.
    pub fn flash_sectors(self, category: FeatureCategory) -> Option<u16> {
        let offset = layout(category).hardware?.sector_offset?;
        Some(((self.0 >> offset) as u16) & MAX_FLASH_SECTORS)
    }

    pub const fn has_extended_peripheral_bits(self) -> bool {
        self.0 & EXTENDED_PERIPHERAL_BITS != 0
    }
}

impl From<&FeatureDeclaration> for HardwareFlagBlock {
    fn from(features: &FeatureDeclaration) -> Self {
        Self::from_declaration(features)
    }
}
