//! Content hashing (SHA-256)

use sha2::{Digest, Sha256};

/// Hex SHA-256 over the concatenation of `parts`
pub fn content_hash<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_ref().as_bytes());
    }
    format!("{:x}", hasher.finalize())
}
