use sha2::{Digest, Sha256};

/// Stable identifier for a genre label: the first 8 bytes of its SHA-256, hex encoded.
pub fn genre_id(name: &str) -> String {
    let hash = Sha256::digest(name.as_bytes());
    hex::encode(&hash[..8])
}
