//! Checksum validation for migrations
//!
//! An applied migration whose SQL later changes is refused at startup

use sha2::{Digest, Sha256};

/// Compute the hex-encoded SHA256 checksum of migration SQL
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
