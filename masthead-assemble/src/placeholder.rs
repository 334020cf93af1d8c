//! Placeholder markers for deferred section slots.

use masthead_core::types::SectionKind;
use sha2::{Digest, Sha256};

/// Synthetic self-closing marker for `kind`, keyed by a salted hash.
///
/// The id is the first 16 bytes of `SHA-256(salt ‖ name)` hex-encoded — 32
/// characters, stable for a given salt. Soft-unique: it cannot collide with
/// real markup, and it is only meaningful within the render pass that
/// embedded it.
pub fn marker(salt: &str, kind: SectionKind) -> String {
    let digest = {
        let mut h = Sha256::new();
        h.update(salt.as_bytes());
        h.update(kind.name().as_bytes());
        h.finalize()
    };
    format!("<{} id=\"{}\" />", kind.name(), hex::encode(&digest[..16]))
}
