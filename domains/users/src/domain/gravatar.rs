//! Gravatar avatar URLs

use sha2::{Digest, Sha256};

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

/// 200px, PG-rated, "mystery person" fallback
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());

    format!("{}/{}?s=200&r=pg&d=mm", GRAVATAR_BASE, hex::encode(digest))
}
