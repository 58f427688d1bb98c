//! The closed set of hardware categories a program can declare support for,
//! and the four-level compatibility scale every category value starts with.
//!
//! A category value is a `u32`. Its two lowest bits always hold a
//! [`CompatibilityLevel`]; categories with richer support (the keyboard
//! component, the ECS, the multi-carts and the flash accelerators) layer
//! capability bits above those two. See [`crate::layout`] for the per-category
//! masks and offsets.

use std::str::FromStr;

use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::error::FeatureError;

/// Mask selecting the base compatibility level from a category value.
pub const COMPATIBILITY_MASK: u32 = 0b11;

/// One hardware peripheral, console revision or cartridge family tracked by a
/// [`crate::FeatureDeclaration`].
///
/// The discriminant is the registry order: declarations store their values in
/// this order and compare lexicographically in it.
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumCount,
    EnumIter,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "record-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeatureCategory {
    /// NTSC (60Hz) video standard.
    Ntsc = 0,
    /// PAL (50Hz) video standard.
    Pal = 1,
    /// General ROM properties (not a peripheral).
    General = 2,
    /// Keyboard Component add-on.
    KeyboardComponent = 3,
    /// Sears Super Video Arcade console revision.
    SuperVideoArcade = 4,
    /// Intellivoice speech module.
    Intellivoice = 5,
    /// Intellivision II console revision.
    IntellivisionII = 6,
    /// Entertainment Computer System (BASIC / ECS expansion).
    Ecs = 7,
    /// Tutorvision console revision.
    Tutorvision = 8,
    /// Intellicart multi-cart.
    Intellicart = 9,
    /// Cuttle Cart 3 multi-cart.
    #[strum(serialize = "cuttle-cart-3")]
    CuttleCart3 = 10,
    /// JLP flash-storage accelerator.
    Jlp = 11,
    /// LTO Flash! cartridge.
    LtoFlash = 12,
    /// Bee3 multi-cart.
    Bee3 = 13,
    /// Hive multi-cart.
    Hive = 14,
}

impl FeatureCategory {
    /// Numeric id of this category (its registry position).
    pub const fn id(self) -> u8 {
        self as u8
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Parse a kebab-case category name (`"lto-flash"`, `"cuttle-cart-3"`, ...).
    pub fn from_name(name: &str) -> Result<Self, FeatureError> {
        Self::from_str(name).map_err(|_| FeatureError::UnknownCategoryName(name.to_string()))
    }

    pub const fn is_video_standard(self) -> bool {
        matches!(self, Self::Ntsc | Self::Pal)
    }

    /// Whether this category carries the 10-bit flash sector sub-field.
    pub const fn has_flash_sectors(self) -> bool {
        matches!(self, Self::Jlp | Self::LtoFlash)
    }
}

impl TryFrom<u8> for FeatureCategory {
    type Error = FeatureError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or(FeatureError::UnknownCategory(value))
    }
}

impl std::fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        f.write_str(name)
    }
}

/// Ordinal support level shared by the low two bits of every category value.
///
/// Numerically `Tolerates | Enhances == Requires`. Code that ORs two values
/// together must account for that (see [`crate::combine`]).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, FromRepr)]
#[cfg_attr(feature = "record-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompatibilityLevel {
    /// The program does not run with this hardware present.
    Incompatible = 0,
    /// The program runs with or without this hardware.
    #[default]
    Tolerates = 1,
    /// The program uses this hardware when present. For video standards this
    /// also means "unknown".
    Enhances = 2,
    /// The program needs this hardware.
    Requires = 3,
}

impl CompatibilityLevel {
    /// Extract the level from the low two bits of a category value.
    pub fn from_bits(bits: u32) -> Self {
        match bits & COMPATIBILITY_MASK {
            0 => Self::Incompatible,
            1 => Self::Tolerates,
            2 => Self::Enhances,
            3 => Self::Requires,
            _ => unreachable!("masked to 2 bits"),
        }
    }

    pub const fn bits(self) -> u32 {
        self as u32
    }
}
