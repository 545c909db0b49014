use sha2::{Digest, Sha256};

/// Computes a stable SHA-256 fingerprint over a list of strings.
///
/// Every part is hashed behind its length, so no choice of separators or
/// embedded newlines can make two different part lists collide.
pub fn sha256_of(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update((part.len() as u64).to_be_bytes());
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}
