//! Error types for the hillcrypt library.

use thiserror::Error;

/// Errors produced by the hillcrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HillCryptError {
    /// A matrix is not square, does not match the declared size, or a
    /// vector/text length disagrees with the block size.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// Key size is outside the supported range.
    #[error("Key size {0} is outside the supported range [2, 8]")]
    UnsupportedDimension(usize),
    /// The key determinant shares a factor with 26.
    #[error("Key matrix is not invertible mod 26 (determinant {determinant})")]
    NotInvertible { determinant: i64 },
    /// Text contains a character that is neither an ASCII letter nor whitespace.
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    /// A padded ciphertext declares more filler than a block can hold.
    #[error("Padding {padding} is invalid for block size {block_size}")]
    InvalidPadding { padding: usize, block_size: usize },
    /// Random key sampling gave up before finding an invertible matrix.
    #[error("No invertible key found after {attempts} attempts")]
    KeyGenerationExhausted { attempts: u32 },
    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Configuration text could not be parsed.
    #[error("Parse failure: {0}")]
    ParseFailure(String),
}
