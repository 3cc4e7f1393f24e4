//! Content-based fingerprint of a model spec.

use pk_models::ModelSpec;
use sha2::{Digest, Sha256};

/// Hex SHA-256 of the JSON form of `spec`. Equal specs give equal fingerprints.
pub fn fingerprint(spec: &ModelSpec) -> String {
    let mut hasher = Sha256::new();
    let spec_json = serde_json::to_string(spec).unwrap_or_default();
    hasher.update(spec_json.as_bytes());
    format!("{:x}", hasher.finalize())
}
