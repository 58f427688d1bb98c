//! Binary persistence records for declarations.
//!
//! Records are postcard-encoded. Decoding runs every value back through the
//! masking setters, so a damaged or hand-edited record cannot produce a
//! declaration that breaks its invariants.

use crate::{declaration::FeatureDeclaration, error::FeatureError};

/// Encode a declaration as a persistence record.
pub fn encode_record(features: &FeatureDeclaration) -> Result<Vec<u8>, FeatureError> {
    Ok(postcard::to_allocvec(features)?)
}

/// Decode a persistence record and normalize it.
pub fn decode_record(bytes: &[u8]) -> Result<FeatureDeclaration, FeatureError> {
    let mut features: FeatureDeclaration = postcard::from_bytes(bytes)?;
    features.normalize();
    Ok(features)
}
