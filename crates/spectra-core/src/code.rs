//! Screening code generation and validation.
//!
//! A screening code is the public 6-character lookup token for a session,
//! drawn uniformly from `[A-Z0-9]` (36^6 possible codes). Uniqueness is
//! the storage layer's concern, not this module's.

use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every screening code.
pub const CODE_LEN: usize = 6;

/// Generate a fresh screening code.
pub fn generate() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Whether `code` is exactly six characters from `[A-Z0-9]`.
/// Case-sensitive: normalize first when handling user input.
pub fn is_valid(code: &str) -> bool {
    code.len() == CODE_LEN
        && code
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Uppercase a user-entered code for validation and lookup.
pub fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
