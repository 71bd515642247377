//! Columnar Transposition Cipher
//!
//! The text is written left-to-right, top-to-bottom into a grid with a
//! fixed number of columns and read back column by column in natural index
//! order (the simplest columnar variant — no keyword-derived permutation).
//! A permutation cipher rearranges rather than substitutes, so every
//! character participates; the text is uppercased and nothing is stripped.

use tracing::trace;

/// Encrypt by reading the column-major traversal of the row-major grid.
///
/// The final row may be partial; its empty cells are skipped. A column
/// count of zero, or one at least as large as the text, leaves the text in
/// its original order.
pub fn encrypt(text: &str, columns: usize) -> String {
    let chars: Vec<char> = text.to_ascii_uppercase().chars().collect();
    if columns == 0 {
        return chars.into_iter().collect();
    }

    let mut out = String::with_capacity(chars.len());
    for col in 0..columns {
        let mut index = col;
        while index < chars.len() {
            out.push(chars[index]);
            index += columns;
        }
    }
    out
}

/// Decrypt by rebuilding the grid column by column and reading it row by
/// row.
///
/// With `len` characters and `columns` columns the grid has
/// `len / columns` full rows; the first `len % columns` columns carry one
/// character of the partial final row. Those heights determine how the
/// ciphertext slices back into columns.
pub fn decrypt(text: &str, columns: usize) -> String {
    let chars: Vec<char> = text.to_ascii_uppercase().chars().collect();
    if columns == 0 || chars.is_empty() {
        return chars.into_iter().collect();
    }

    let full_rows = chars.len() / columns;
    let long_columns = chars.len() % columns;
    trace!(
        "rebuilding grid: {} columns, {} full rows, {} long columns",
        columns,
        full_rows,
        long_columns
    );

    let mut grid = vec!['\0'; chars.len()];
    let mut source = chars.iter();
    for col in 0..columns {
        let height = full_rows + usize::from(col < long_columns);
        for row in 0..height {
            // Every cell with row*columns+col < len is written exactly once.
            if let Some(&c) = source.next() {
                grid[row * columns + col] = c;
            }
        }
    }
    grid.into_iter().collect()
}
