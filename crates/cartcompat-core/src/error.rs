use thiserror::Error;

use crate::category::FeatureCategory;

#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("{category} flash sector count {count} exceeds {max}", max = crate::flash::MAX_FLASH_SECTORS)]
    SectorCountOutOfRange {
        category: FeatureCategory,
        count: u16,
    },

    #[error("{0} has no flash sector field")]
    NoSectorField(FeatureCategory),

    #[error("unknown feature category id: {0}")]
    UnknownCategory(u8),

    #[error("unknown feature category name: {0}")]
    UnknownCategoryName(String),

    #[cfg(feature = "record-postcard")]
    #[error("feature record codec error: {0}")]
    Record(#[from] postcard::Error),
}
