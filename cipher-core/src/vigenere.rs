//! Vigenère Cipher
//!
//! Shifts the i-th letter of the text by the value of the (i mod n)-th
//! letter of an n-letter keyword. The keyword contributes only its letters;
//! its case and punctuation are ignored. Non-alphabetic text characters
//! pass through in place and do not consume a key position, the classical
//! convention, so `VIGENERE("AT TACK", key)` and `VIGENERE("ATTACK", key)`
//! agree letter for letter.

use crate::alphabet::{letter_from_value, letter_value, ALPHABET_LEN};

/// Encrypt by adding the cycled key letters to the text letters.
pub fn encrypt(text: &str, key: &str) -> String {
    transform(text, key, true)
}

/// Decrypt by subtracting the cycled key letters, using the identical
/// key-index progression as [`encrypt`].
pub fn decrypt(text: &str, key: &str) -> String {
    transform(text, key, false)
}

fn transform(text: &str, key: &str, forward: bool) -> String {
    let key_values: Vec<u32> = key.chars().filter_map(letter_value).collect();
    if key_values.is_empty() {
        // A key without letters shifts by nothing; degrade to the
        // canonical form of the text instead of failing.
        return text.to_ascii_uppercase();
    }

    let mut key_index = 0;
    text.chars()
        .map(|c| match letter_value(c) {
            Some(v) => {
                let k = key_values[key_index % key_values.len()];
                key_index += 1;
                let shifted = if forward { v + k } else { v + ALPHABET_LEN - k };
                letter_from_value(shifted)
            }
            None => c,
        })
        .collect()
}
