//! Playfair Cipher
//!
//! This module implements the Playfair digraph substitution cipher: a 5×5
//! letter matrix is derived from a keyword (J merged into I), the text is
//! split into two-letter digraphs, and each digraph is substituted by the
//! row/column/rectangle rules. The matrix is a pure function of the key and
//! is rebuilt per call; nothing is shared or mutated across calls, so
//! concurrent use on separate inputs needs no synchronization.
//!
//! Padding is the classical compromise: a letter inserted to split a
//! doubled pair is indistinguishable from content on decrypt and stays in
//! the output, while the single pad closing an odd-length text is stripped.

use std::fmt;
use thiserror::Error;
use tracing::trace;

/// Side length of the Playfair matrix.
pub const MATRIX_SIZE: usize = 5;

/// Pad letter inserted between doubled letters and after an odd final one.
const FILLER: char = 'X';

/// Fallback pad used when the letter being padded is itself the filler;
/// without it a doubled `X` would produce the identical-letter digraph the
/// substitution rules cannot accept.
const ALT_FILLER: char = 'Q';

/// The 5×5 key matrix: 25 unique uppercase letters, J merged into I.
///
/// A matrix built by [`PlayfairMatrix::from_key`] always covers the whole
/// 25-letter alphabet. [`PlayfairMatrix::from_cells`] accepts whatever grid
/// the caller hands back (e.g. one previously exported via [`rows`]), so
/// lookups on such a matrix can miss — that case surfaces as
/// [`PlayfairError::LetterNotInMatrix`].
///
/// [`rows`]: PlayfairMatrix::rows
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayfairMatrix {
    cells: [[char; MATRIX_SIZE]; MATRIX_SIZE],
}

impl PlayfairMatrix {
    /// Build the matrix for a key: uppercase, J→I, deduplicate keeping the
    /// first occurrence, then append the rest of the 25-letter alphabet in
    /// order. Deterministic — the same key always yields the same matrix.
    pub fn from_key(key: &str) -> Self {
        let mut seen = [false; 26];
        let mut letters = Vec::with_capacity(MATRIX_SIZE * MATRIX_SIZE);

        let key_letters = normalize(key);
        for c in key_letters.chars().chain(('A'..='Z').filter(|&c| c != 'J')) {
            let index = (c as u8 - b'A') as usize;
            if !seen[index] {
                seen[index] = true;
                letters.push(c);
            }
        }

        let mut cells = [['A'; MATRIX_SIZE]; MATRIX_SIZE];
        for (i, c) in letters.into_iter().enumerate() {
            cells[i / MATRIX_SIZE][i % MATRIX_SIZE] = c;
        }

        trace!(
            "playfair matrix built, {} key letters",
            key_letters.len()
        );
        PlayfairMatrix { cells }
    }

    /// Wrap a raw grid, e.g. one a caller previously exported with
    /// [`rows`](PlayfairMatrix::rows) and carried across the API boundary.
    /// The grid is not validated; a letter missing from it is reported by
    /// the encrypt/decrypt call that trips over it.
    pub fn from_cells(cells: [[char; MATRIX_SIZE]; MATRIX_SIZE]) -> Self {
        PlayfairMatrix { cells }
    }

    /// The grid, row by row.
    pub fn rows(&self) -> &[[char; MATRIX_SIZE]; MATRIX_SIZE] {
        &self.cells
    }

    /// Locate a letter in the matrix. J is looked up as I.
    ///
    /// Positions are unique: `from_key` never places a letter twice.
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        let target = match letter.to_ascii_uppercase() {
            'J' => 'I',
            c => c,
        };
        self.cells.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|&c| c == target).map(|c| (r, c))
        })
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> char {
        self.cells[row % MATRIX_SIZE][col % MATRIX_SIZE]
    }
}

impl fmt::Display for PlayfairMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, c) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// Encrypt `text` against a key matrix.
///
/// The text is reduced to uppercase letters (J→I), split into digraphs with
/// doubled letters separated by a pad, and each digraph substituted:
/// same row → right neighbor, same column → lower neighbor (both wrapping),
/// otherwise each letter moves to the other letter's column within its own
/// row. Output length is always even; text without letters yields an empty
/// string.
pub fn encrypt(text: &str, matrix: &PlayfairMatrix) -> Result<String, PlayfairError> {
    substitute(&split_digraphs(&normalize(text)), matrix, 1)
}

/// Decrypt `text` against a key matrix.
///
/// Ciphertext pairs are taken as-is (no doubled-letter splitting) and the
/// inverse rules applied: left neighbor, upper neighbor, and the
/// self-inverse rectangle rule. One trailing pad letter is stripped — the
/// pad closing an odd-length plaintext is removed, at the classical price
/// that a genuine trailing `X` is removed with it. Pads inserted between
/// doubled letters are indistinguishable from content and remain.
pub fn decrypt(text: &str, matrix: &PlayfairMatrix) -> Result<String, PlayfairError> {
    let mut plain = substitute(&chunk_pairs(&normalize(text)), matrix, MATRIX_SIZE - 1)?;
    if plain.ends_with(FILLER) {
        plain.pop();
    }
    Ok(plain)
}

/// Uppercase letters only, J merged into I.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| match c.to_ascii_uppercase() {
            'J' => 'I',
            c => c,
        })
        .collect()
}

/// Split normalized plaintext into digraphs, never pairing a letter with
/// itself: a doubled letter is split by a pad and the second of the pair is
/// re-examined, and an odd final letter is closed with a pad.
fn split_digraphs(letters: &str) -> Vec<(char, char)> {
    let letters: Vec<char> = letters.chars().collect();
    let mut digraphs = Vec::with_capacity(letters.len() / 2 + 1);

    let mut i = 0;
    while i < letters.len() {
        let a = letters[i];
        match letters.get(i + 1) {
            Some(&b) if b != a => {
                digraphs.push((a, b));
                i += 2;
            }
            _ => {
                digraphs.push((a, filler_for(a)));
                i += 1;
            }
        }
    }

    trace!("split {} letters into {} digraphs", letters.len(), digraphs.len());
    digraphs
}

/// Chunk normalized ciphertext into plain pairs. Well-formed ciphertext is
/// even-length; a malformed odd tail is closed with a pad rather than
/// rejected.
fn chunk_pairs(letters: &str) -> Vec<(char, char)> {
    let letters: Vec<char> = letters.chars().collect();
    letters
        .chunks(2)
        .map(|pair| match pair {
            &[a, b] => (a, b),
            &[a] => (a, filler_for(a)),
            _ => unreachable!("chunks(2) yields one- or two-letter slices"),
        })
        .collect()
}

fn filler_for(letter: char) -> char {
    if letter == FILLER {
        ALT_FILLER
    } else {
        FILLER
    }
}

/// Apply the substitution rules to every digraph. `shift` is 1 for
/// encryption and 4 (≡ −1 mod 5) for decryption; the rectangle rule is its
/// own inverse and ignores the shift.
fn substitute(
    digraphs: &[(char, char)],
    matrix: &PlayfairMatrix,
    shift: usize,
) -> Result<String, PlayfairError> {
    let mut out = String::with_capacity(digraphs.len() * 2);
    for &(a, b) in digraphs {
        let (row_a, col_a) = matrix
            .position(a)
            .ok_or(PlayfairError::LetterNotInMatrix(a))?;
        let (row_b, col_b) = matrix
            .position(b)
            .ok_or(PlayfairError::LetterNotInMatrix(b))?;

        let (x, y) = if row_a == row_b {
            (
                matrix.at(row_a, col_a + shift),
                matrix.at(row_b, col_b + shift),
            )
        } else if col_a == col_b {
            (
                matrix.at(row_a + shift, col_a),
                matrix.at(row_b + shift, col_b),
            )
        } else {
            (matrix.at(row_a, col_b), matrix.at(row_b, col_a))
        };
        out.push(x);
        out.push(y);
    }
    Ok(out)
}

/// Playfair substitution errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayfairError {
    /// A digraph letter has no position in the matrix. Unreachable with a
    /// matrix from [`PlayfairMatrix::from_key`]; indicates a caller-supplied
    /// grid that does not cover the 25-letter alphabet.
    #[error("letter '{0}' does not appear in the 5x5 matrix")]
    LetterNotInMatrix(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_from_classical_key() {
        let matrix = PlayfairMatrix::from_key("PLAYFAIR EXAMPLE");
        let expected = [
            ['P', 'L', 'A', 'Y', 'F'],
            ['I', 'R', 'E', 'X', 'M'],
            ['B', 'C', 'D', 'G', 'H'],
            ['K', 'N', 'O', 'Q', 'S'],
            ['T', 'U', 'V', 'W', 'Z'],
        ];
        assert_eq!(matrix.rows(), &expected);
    }

    #[test]
    fn test_matrix_has_25_unique_letters_no_j() {
        let matrix = PlayfairMatrix::from_key("jazz monkey");
        let mut seen = std::collections::HashSet::new();
        for row in matrix.rows() {
            for &c in row {
                assert_ne!(c, 'J');
                assert!(seen.insert(c), "duplicate letter {}", c);
            }
        }
        assert_eq!(seen.len(), 25);
    }

    #[test]
    fn test_matrix_from_empty_key_is_plain_alphabet() {
        let matrix = PlayfairMatrix::from_key("");
        assert_eq!(matrix.rows()[0], ['A', 'B', 'C', 'D', 'E']);
        assert_eq!(matrix.rows()[4], ['V', 'W', 'X', 'Y', 'Z']);
    }

    #[test]
    fn test_matrix_is_deterministic() {
        assert_eq!(
            PlayfairMatrix::from_key("MONARCHY"),
            PlayfairMatrix::from_key("monarchy")
        );
    }

    #[test]
    fn test_position_lookup() {
        let matrix = PlayfairMatrix::from_key("PLAYFAIR EXAMPLE");
        assert_eq!(matrix.position('P'), Some((0, 0)));
        assert_eq!(matrix.position('Z'), Some((4, 4)));
        assert_eq!(matrix.position('j'), matrix.position('I'));
    }

    #[test]
    fn test_split_doubled_letter() {
        assert_eq!(
            split_digraphs("HELLO"),
            vec![('H', 'E'), ('L', 'X'), ('L', 'O')]
        );
    }

    #[test]
    fn test_split_odd_length_pads() {
        assert_eq!(split_digraphs("CAT"), vec![('C', 'A'), ('T', 'X')]);
    }

    #[test]
    fn test_split_doubled_x_uses_alternate_filler() {
        assert_eq!(split_digraphs("XX"), vec![('X', 'Q'), ('X', 'Q')]);
    }

    #[test]
    fn test_split_never_produces_identical_pair() {
        for text in ["AABBCC", "XXXX", "MISSISSIPPI", "BOOKKEEPER"] {
            for (a, b) in split_digraphs(&normalize(text)) {
                assert_ne!(a, b, "identical digraph from {}", text);
            }
        }
    }

    #[test]
    fn test_classical_vector() {
        let matrix = PlayfairMatrix::from_key("PLAYFAIR EXAMPLE");
        let cipher = encrypt("Hide the gold in the tree stump", &matrix).unwrap();
        assert_eq!(cipher, "BMODZBXDNABEKUDMUIXMMOUVIF");
    }

    #[test]
    fn test_classical_vector_decrypts() {
        let matrix = PlayfairMatrix::from_key("PLAYFAIR EXAMPLE");
        let plain = decrypt("BMODZBXDNABEKUDMUIXMMOUVIF", &matrix).unwrap();
        // The pad splitting the doubled E remains; that is the classical
        // limitation, not a defect.
        assert_eq!(plain, "HIDETHEGOLDINTHETREXESTUMP");
    }

    #[test]
    fn test_same_row_rule_wraps() {
        let matrix = PlayfairMatrix::from_key("");
        // A and E share row 0 of the plain-alphabet matrix; E wraps to A.
        assert_eq!(encrypt("AE", &matrix).unwrap(), "BA");
    }

    #[test]
    fn test_same_column_rule_wraps() {
        let matrix = PlayfairMatrix::from_key("");
        // A and V share column 0; V wraps back to A.
        assert_eq!(encrypt("AV", &matrix).unwrap(), "FA");
    }

    #[test]
    fn test_rectangle_rule_is_self_inverse() {
        let matrix = PlayfairMatrix::from_key("MONARCHY");
        // M (0,0) and H (1,1) span a rectangle: each takes the other's column.
        assert_eq!(encrypt("MH", &matrix).unwrap(), "OC");
        assert_eq!(decrypt("OC", &matrix).unwrap(), "MH");
    }

    #[test]
    fn test_odd_length_roundtrip_strips_pad() {
        let matrix = PlayfairMatrix::from_key("KEYWORD");
        let cipher = encrypt("CAT", &matrix).unwrap();
        assert_eq!(cipher.len(), 4);
        assert_eq!(decrypt(&cipher, &matrix).unwrap(), "CAT");
    }

    #[test]
    fn test_output_length_is_even() {
        let matrix = PlayfairMatrix::from_key("SECRET");
        for text in ["A", "AB", "HELLO", "BALLOON", "QUEUE"] {
            assert_eq!(encrypt(text, &matrix).unwrap().len() % 2, 0);
        }
    }

    #[test]
    fn test_j_is_encrypted_as_i() {
        let matrix = PlayfairMatrix::from_key("SECRET");
        assert_eq!(
            encrypt("JUMP", &matrix).unwrap(),
            encrypt("IUMP", &matrix).unwrap()
        );
    }

    #[test]
    fn test_letterless_text_is_empty() {
        let matrix = PlayfairMatrix::from_key("SECRET");
        assert_eq!(encrypt("123 !?", &matrix).unwrap(), "");
        assert_eq!(decrypt("", &matrix).unwrap(), "");
    }

    #[test]
    fn test_incomplete_grid_reports_missing_letter() {
        let matrix = PlayfairMatrix::from_cells([['A'; MATRIX_SIZE]; MATRIX_SIZE]);
        assert_eq!(
            encrypt("AB", &matrix),
            Err(PlayfairError::LetterNotInMatrix('B'))
        );
    }

    #[test]
    fn test_display_renders_five_rows() {
        let matrix = PlayfairMatrix::from_key("");
        let rendered = format!("{}", matrix);
        assert_eq!(rendered.lines().count(), 5);
        assert_eq!(rendered.lines().next(), Some("A B C D E"));
    }
}
