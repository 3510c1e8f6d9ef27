// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const TOKEN_BYTES: usize = 32;

/// A fresh session token from the OS RNG.
pub fn generate() -> String {
    let mut rng = OsRng;
    generate_with(&mut rng, TOKEN_BYTES)
}

/// URL-safe Base64 (no padding) over `nbytes` random bytes, so tokens can
/// ride in cookies and query strings without encoding. 32 bytes -> ~43 chars.
pub fn generate_with<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// SHA-256 of the raw token. Only this goes in the database.
pub fn hash(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}
