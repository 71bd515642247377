//! Caesar Cipher
//!
//! Shifts every letter forward by a fixed offset, wrapping within the
//! alphabet. Only `key % 26` matters, so any non-negative key behaves like
//! its residue. Non-alphabetic characters pass through in place; letters
//! come out uppercase.

use crate::alphabet::{letter_from_value, letter_value, ALPHABET_LEN};

/// Encrypt by shifting each letter forward `key % 26` positions.
pub fn encrypt(text: &str, key: u32) -> String {
    let shift = key % ALPHABET_LEN;
    text.chars()
        .map(|c| match letter_value(c) {
            Some(v) => letter_from_value(v + shift),
            None => c,
        })
        .collect()
}

/// Decrypt by shifting each letter backward `key % 26` positions.
///
/// Implemented as encryption with the complementary shift, so the two
/// directions cannot drift apart.
pub fn decrypt(text: &str, key: u32) -> String {
    encrypt(text, ALPHABET_LEN - key % ALPHABET_LEN)
}
