//! Typed views of the category values that carry more than a bare
//! compatibility level.
//!
//! Every type here is a `bitflags` set over the raw `u32` category value.
//! The low two bits are the [`CompatibilityLevel`] (exposed as the multi-bit
//! `COMPATIBILITY` flag); the remaining flags are category capabilities.

use crate::category::{COMPATIBILITY_MASK, CompatibilityLevel, FeatureCategory};

macro_rules! category_features {
    ($ty:ty, $category:expr) => {
        impl $crate::features::CategoryFeatures for $ty {
            const CATEGORY: $crate::category::FeatureCategory = $category;

            fn from_value(value: u32) -> Self {
                Self::from_bits_truncate(value)
            }

            fn value(self) -> u32 {
                self.bits()
            }
        }
    };
}

pub mod accelerator;
pub mod ecs;
pub mod general;
pub mod keyboard;
pub mod multicart;

pub use accelerator::{JlpFeatures, JlpHardwareVersion, LtoFlashFeatures};
pub use ecs::EcsFeatures;
pub use general::GeneralFeatures;
pub use keyboard::KeyboardComponentFeatures;
pub use multicart::{Bee3Features, CuttleCart3Features, HiveFeatures, IntellicartFeatures};

/// A typed category value, bound to the category it describes.
pub trait CategoryFeatures: Copy {
    const CATEGORY: FeatureCategory;

    /// Build from a raw category value, dropping bits the category does not define.
    fn from_value(value: u32) -> Self;

    fn value(self) -> u32;

    /// Base level held in the low two bits. [`GeneralFeatures`] has none and
    /// always reports `Tolerates`.
    fn level(self) -> CompatibilityLevel {
        CompatibilityLevel::from_bits(self.value())
    }

    /// Replace the base level, keeping capability bits. A no-op for
    /// [`GeneralFeatures`].
    fn with_level(self, level: CompatibilityLevel) -> Self {
        Self::from_value((self.value() & !COMPATIBILITY_MASK) | level.bits())
    }
}
