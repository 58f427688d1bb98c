//! Where a declaration came from.
//!
//! Program databases, user edits and ROM-embedded metadata each produce a
//! declaration; databases and some ROM formats also carry a catalog code.
//! Every variant carries the same two fields, so callers can read the catalog
//! code without caring which source produced it.

use crate::{combine::combine_all, declaration::FeatureDeclaration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureSource {
    /// An entry from a curated program database.
    Database {
        catalog_code: Option<String>,
        features: FeatureDeclaration,
    },
    /// A declaration the user edited by hand.
    UserEdited {
        catalog_code: Option<String>,
        features: FeatureDeclaration,
    },
    /// Metadata embedded in the ROM file.
    RomMetadata {
        catalog_code: Option<String>,
        features: FeatureDeclaration,
    },
}

impl FeatureSource {
    pub fn features(&self) -> &FeatureDeclaration {
        match self {
            Self::Database { features, .. }
            | Self::UserEdited { features, .. }
            | Self::RomMetadata { features, .. } => features,
        }
    }

    pub fn catalog_code(&self) -> Option<&str> {
        match self {
            Self::Database { catalog_code, .. }
            | Self::UserEdited { catalog_code, .. }
            | Self::RomMetadata { catalog_code, .. } => catalog_code.as_deref(),
        }
    }
}

/// Result of merging several sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedFeatures {
    pub features: FeatureDeclaration,
    /// First catalog code found, in input order.
    pub catalog_code: Option<String>,
}

/// Merge the declarations of `sources` pairwise, in order.
pub fn combine_sources(sources: &[FeatureSource]) -> MergedFeatures {
    MergedFeatures {
        features: combine_all(sources.iter().map(FeatureSource::features)),
        catalog_code: sources
            .iter()
            .find_map(FeatureSource::catalog_code)
            .map(str::to_string),
    }
}
