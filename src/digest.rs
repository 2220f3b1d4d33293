use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the UTF-8 bytes of `content`.
pub fn sha256_hex(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
