//! Letter <-> index conversion for the 26-letter Latin alphabet.
//!
//! `A` maps to 0 and `Z` to 25. Lookups return an explicit error for any
//! character outside the alphabet instead of a sentinel index.

use crate::error::HillCryptError;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Maps an ASCII letter (either case) to its alphabet index.
///
/// # Parameters
/// - `c`: Character to convert.
/// - `position`: Position of `c` in the caller's input, reported on error.
///
/// # Errors
/// Returns [`HillCryptError::InvalidCharacter`] if `c` is not an ASCII letter.
pub fn letter_to_index(c: char, position: usize) -> Result<u8, HillCryptError> {
    if c.is_ascii_alphabetic() {
        Ok(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        Err(HillCryptError::InvalidCharacter {
            character: c,
            position,
        })
    }
}

/// Maps an alphabet index back to its uppercase letter.
///
/// Indices of 26 and above wrap around.
pub fn index_to_letter(index: u8) -> char {
    (b'A' + index % ALPHABET_LEN) as char
}

/// Converts text to alphabet indices, skipping whitespace.
///
/// # Parameters
/// - `text`: Input containing ASCII letters and whitespace.
///
/// # Returns
/// One index per letter, in input order.
///
/// # Errors
/// Returns [`HillCryptError::InvalidCharacter`] for the first character that
/// is neither a letter nor whitespace. `position` is the character offset
/// (not the byte offset) in `text`.
pub fn text_to_indices(text: &str) -> Result<Vec<u8>, HillCryptError> {
    let mut output = Vec::with_capacity(text.len());
    for (position, c) in text.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        output.push(letter_to_index(c, position)?);
    }
    Ok(output)
}

/// Converts alphabet indices to an uppercase string.
pub fn indices_to_text(indices: &[u8]) -> String {
    indices.iter().map(|&i| index_to_letter(i)).collect()
}
