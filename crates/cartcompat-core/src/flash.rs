//! Flash sector count sub-field carried by the JLP and LTO Flash! categories.
//!
//! The count lives in bits 22..=31 of the owning category value, well clear of
//! the capability bits below it.

use crate::{category::FeatureCategory, error::FeatureError};

/// Bit offset of the sector count inside a JLP / LTO Flash! category value.
pub const FLASH_SECTOR_OFFSET: u32 = 22;

/// Width of the sector count field.
pub const FLASH_SECTOR_BITS: u32 = 10;

/// Largest sector count the field can hold.
pub const MAX_FLASH_SECTORS: u16 = (1 << FLASH_SECTOR_BITS) - 1;

/// Sector count field, in place.
pub const FLASH_SECTOR_MASK: u32 = (MAX_FLASH_SECTORS as u32) << FLASH_SECTOR_OFFSET;

/// Shift a sector count into its place in a category value.
pub fn pack_sector_count(category: FeatureCategory, count: u16) -> Result<u32, FeatureError> {
    if count > MAX_FLASH_SECTORS {
        return Err(FeatureError::SectorCountOutOfRange { category, count });
    }
    Ok(u32::from(count) << FLASH_SECTOR_OFFSET)
}

/// Read the sector count out of a category value.
pub const fn unpack_sector_count(value: u32) -> u16 {
    ((value & FLASH_SECTOR_MASK) >> FLASH_SECTOR_OFFSET) as u16
}
