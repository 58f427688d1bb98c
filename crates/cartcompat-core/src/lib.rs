//! Feature compatibility model for cartridge programs.
//!
//! A [`FeatureDeclaration`] records, for one program, how it behaves with each
//! optional peripheral, console revision and cartridge family in the
//! [`FeatureCategory`] registry. Declarations from different sources are
//! reconciled with [`combine`], summarized into [`IncompatibilityFlags`] for
//! fast filtering, and packed into a [`HardwareFlagBlock`] for flash-storage
//! cartridges.

pub mod category;
pub mod combine;
pub mod declaration;
pub mod error;
pub mod features;
pub mod flash;
pub mod hardware;
pub mod incompatibility;
pub mod layout;
#[cfg(feature = "record-postcard")]
pub mod record;
pub mod source;

pub use category::{CompatibilityLevel, FeatureCategory};
pub use combine::{combine, combine_all};
pub use declaration::FeatureDeclaration;
pub use error::FeatureError as Error;
pub use features::{CategoryFeatures, JlpHardwareVersion};
pub use hardware::HardwareFlagBlock;
pub use incompatibility::IncompatibilityFlags;
pub use source::{FeatureSource, MergedFeatures, combine_sources};
