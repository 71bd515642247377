//! Rail Fence Cipher
//!
//! Characters are written along a zig-zag over a fixed number of rails —
//! the rail index runs 0 to rails−1 and back, reversing direction at the
//! top and bottom rails — and the ciphertext is the rails concatenated top
//! to bottom. Both directions derive the rail sequence from the same
//! generator, so decryption replays exactly the pattern encryption wrote.
//!
//! Like the columnar transposition, this is a pure permutation: every
//! character participates, the text is uppercased, nothing is stripped.

/// Encrypt by bucketing characters onto rails along the zig-zag and
/// concatenating the rails.
///
/// Rail counts of 0 and 1 cannot zig-zag and degrade to identity; a count
/// at least the text length puts one character per rail, which reads back
/// in original order.
pub fn encrypt(text: &str, rails: usize) -> String {
    let chars: Vec<char> = text.to_ascii_uppercase().chars().collect();
    if rails <= 1 {
        return chars.into_iter().collect();
    }

    let mut rows = vec![String::new(); rails];
    for (c, rail) in chars.iter().zip(zigzag(rails)) {
        rows[rail].push(*c);
    }
    rows.concat()
}

/// Decrypt by slicing the ciphertext into per-rail segments and replaying
/// the zig-zag, drawing each position's character from its rail's segment.
pub fn decrypt(text: &str, rails: usize) -> String {
    let chars: Vec<char> = text.to_ascii_uppercase().chars().collect();
    if rails <= 1 {
        return chars.into_iter().collect();
    }

    let pattern: Vec<usize> = zigzag(rails).take(chars.len()).collect();

    let mut counts = vec![0usize; rails];
    for &rail in &pattern {
        counts[rail] += 1;
    }

    // `cursor[r]` walks rail r's segment of the ciphertext.
    let mut cursor = vec![0usize; rails];
    let mut start = 0;
    for rail in 0..rails {
        cursor[rail] = start;
        start += counts[rail];
    }

    let mut out = String::with_capacity(chars.len());
    for rail in pattern {
        out.push(chars[cursor[rail]]);
        cursor[rail] += 1;
    }
    out
}

/// The infinite rail sequence 0, 1, …, rails−1, rails−2, …, 1, 0, 1, …
///
/// Callers guarantee `rails >= 2`, so the cycle length `2·rails − 2` is
/// never zero.
fn zigzag(rails: usize) -> impl Iterator<Item = usize> {
    let cycle = 2 * rails - 2;
    (0..).map(move |i: usize| {
        let phase = i % cycle;
        if phase < rails {
            phase
        } else {
            cycle - phase
        }
    })
}
