use strum::{EnumCount, IntoEnumIterator};

use crate::{
    category::{COMPATIBILITY_MASK, CompatibilityLevel, FeatureCategory},
    error::FeatureError,
    features::{CategoryFeatures, JlpHardwareVersion},
    flash::{FLASH_SECTOR_MASK, pack_sector_count, unpack_sector_count},
    layout::{LAYOUT, layout},
};

/// Per-category support declared for one program.
///
/// Holds exactly one value per [`FeatureCategory`] plus the accelerator
/// hardware-version floor. Values only change through the setters below, which
/// mask each value to its category and keep video standards off `Requires`.
///
/// Ordering is by version floor first, then by category values in registry
/// order. It exists for de-duplication and sorting, not to rank programs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "record-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureDeclaration {
    // Field order drives the derived `Ord`.
    jlp_version: JlpHardwareVersion,
    values: [u32; FeatureCategory::COUNT],
}

impl FeatureDeclaration {
    /// Every category `Incompatible`. Seed value for accumulating merges.
    pub fn empty() -> Self {
        Self {
            jlp_version: JlpHardwareVersion::None,
            values: [0; FeatureCategory::COUNT],
        }
    }

    /// Every category (General included) set to `Tolerates`'s bit pattern.
    ///
    /// This is what a condensed incompatibility summary assumes for every
    /// category it does not flag.
    pub fn tolerant() -> Self {
        Self {
            jlp_version: JlpHardwareVersion::None,
            values: [CompatibilityLevel::Tolerates.bits(); FeatureCategory::COUNT],
        }
    }

    /// Raw value stored for `category`.
    pub fn get(&self, category: FeatureCategory) -> u32 {
        self.values[category.index()]
    }

    /// Store `value` for `category`, dropping bits the category does not
    /// define. A video standard given `Requires` stores `Enhances`.
    pub fn set(&mut self, category: FeatureCategory, value: u32) {
        let row = layout(category);
        let mut value = value & row.valid_mask;
        if category.is_video_standard() {
            value = coerce_video_standard(value);
        }
        self.values[category.index()] = value;
    }

    /// Store a value addressed by numeric category id.
    pub fn set_by_id(&mut self, id: u8, value: u32) -> Result<(), FeatureError> {
        let category = FeatureCategory::try_from(id)?;
        self.set(category, value);
        Ok(())
    }

    pub fn level(&self, category: FeatureCategory) -> CompatibilityLevel {
        CompatibilityLevel::from_bits(self.get(category))
    }

    /// Replace the base level of `category`, keeping its capability bits.
    pub fn set_level(&mut self, category: FeatureCategory, level: CompatibilityLevel) {
        let value = (self.get(category) & !COMPATIBILITY_MASK) | level.bits();
        self.set(category, value);
    }

    /// Typed view of one category, e.g. `decl.features::<JlpFeatures>()`.
    pub fn features<T: CategoryFeatures>(&self) -> T {
        T::from_value(self.get(T::CATEGORY))
    }

    pub fn set_features<T: CategoryFeatures>(&mut self, features: T) {
        self.set(T::CATEGORY, features.value());
    }

    /// Minimum flash sectors declared on the JLP or LTO Flash! category.
    pub fn flash_sectors(&self, category: FeatureCategory) -> Result<u16, FeatureError> {
        if !category.has_flash_sectors() {
            return Err(FeatureError::NoSectorField(category));
        }
        Ok(unpack_sector_count(self.get(category)))
    }

    /// Set the minimum flash sectors on the JLP or LTO Flash! category.
    ///
    /// Counts above [`crate::flash::MAX_FLASH_SECTORS`] are rejected, never clamped.
    pub fn set_flash_sectors(
        &mut self,
        category: FeatureCategory,
        count: u16,
    ) -> Result<(), FeatureError> {
        if !category.has_flash_sectors() {
            return Err(FeatureError::NoSectorField(category));
        }
        let packed = pack_sector_count(category, count)?;
        let value = (self.get(category) & !FLASH_SECTOR_MASK) | packed;
        self.set(category, value);
        Ok(())
    }

    pub fn jlp_version(&self) -> JlpHardwareVersion {
        self.jlp_version
    }

    pub fn set_jlp_version(&mut self, version: JlpHardwareVersion) {
        self.jlp_version = version;
    }

    /// Category values in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureCategory, u32)> + '_ {
        FeatureCategory::iter().map(|category| (category, self.get(category)))
    }

    /// Whether `category` holds its "unrecognized ROM" default.
    pub fn is_default(&self, category: FeatureCategory) -> bool {
        self.get(category) == layout(category).default_value
    }

    /// Re-run every stored value through [`Self::set`].
    ///
    /// Values that arrive by other means than the setters (deserialized
    /// records) are brought back under the declaration invariants.
    pub fn normalize(&mut self) {
        for category in FeatureCategory::iter() {
            self.set(category, self.get(category));
        }
    }
}

/// The "unrecognized ROM" declaration: video standards `Enhances` (unknown),
/// General marked unrecognized, every other category `Tolerates`.
impl Default for FeatureDeclaration {
    fn default() -> Self {
        let mut values = [0; FeatureCategory::COUNT];
        for row in &LAYOUT {
            values[row.category.index()] = row.default_value;
        }
        Self {
            jlp_version: JlpHardwareVersion::None,
            values,
        }
    }
}

/// Video standards use `Enhances` for "unknown" and never carry `Requires`.
pub(crate) fn coerce_video_standard(value: u32) -> u32 {
    if CompatibilityLevel::from_bits(value) == CompatibilityLevel::Requires {
        tracing::trace!(value, "video standard cannot require; demoted to enhances");
        (value & !COMPATIBILITY_MASK) | CompatibilityLevel::Enhances.bits()
    } else {
        value
    }
}
