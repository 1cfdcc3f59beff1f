//! BlockCodec: text normalization, block partition and the matrix transform.
//!
//! Text is uppercased, stripped of whitespace and right-padded with a filler
//! letter to a multiple of the block size. Each block of n indices is then
//! multiplied by a key matrix modulo 26.

use crate::config::BlockOrientation;
use crate::error::HillCryptError;
use crate::utils::alphabet;
use crate::utils::matrix::SquareMatrix;
use crate::utils::modular::{reduce, MODULUS};

/// Input text reduced to alphabet indices and padded to whole blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    indices: Vec<u8>,
    padding: usize,
}

impl NormalizedText {
    /// Alphabet indices, including padding. Length is a multiple of the block size.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Number of filler letters appended, in `[0, n-1]`.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// The normalized text as uppercase letters.
    pub fn to_text(&self) -> String {
        alphabet::indices_to_text(&self.indices)
    }
}

/// Splits text into n-letter blocks and runs each through a key matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCodec {
    block_size: usize,
    filler: u8,
    orientation: BlockOrientation,
}

impl BlockCodec {
    /// Creates a codec for blocks of `block_size` letters.
    ///
    /// # Parameters
    /// - `block_size`: Letters per block (the key dimension), at least 1.
    /// - `filler`: Padding letter, either case.
    /// - `orientation`: Vector orientation for the transform.
    ///
    /// # Errors
    /// - [`HillCryptError::InvalidCharacter`] if `filler` is not an ASCII letter.
    /// - [`HillCryptError::UnsupportedDimension`] if `block_size` is 0.
    pub fn new(
        block_size: usize,
        filler: char,
        orientation: BlockOrientation,
    ) -> Result<Self, HillCryptError> {
        if block_size == 0 {
            return Err(HillCryptError::UnsupportedDimension(block_size));
        }
        let filler = alphabet::letter_to_index(filler, 0)?;
        Ok(BlockCodec {
            block_size,
            filler,
            orientation,
        })
    }

    /// Letters per block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// The padding letter.
    pub fn filler(&self) -> char {
        alphabet::index_to_letter(self.filler)
    }

    /// Uppercases, strips whitespace and pads `text` to whole blocks.
    ///
    /// # Errors
    /// Returns [`HillCryptError::InvalidCharacter`] if `text` contains
    /// anything other than ASCII letters and whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::block_codec::BlockCodec;
    /// use hillcrypt::config::BlockOrientation;
    ///
    /// let codec = BlockCodec::new(3, 'X', BlockOrientation::Column).unwrap();
    /// let text = codec.normalize("hel lo").unwrap();
    /// assert_eq!(text.to_text(), "HELLOX");
    /// assert_eq!(text.padding(), 1);
    /// ```
    pub fn normalize(&self, text: &str) -> Result<NormalizedText, HillCryptError> {
        let mut indices = alphabet::text_to_indices(text)?;
        let remainder = indices.len() % self.block_size;
        let padding = if remainder == 0 {
            0
        } else {
            self.block_size - remainder
        };
        indices.resize(indices.len() + padding, self.filler);
        Ok(NormalizedText { indices, padding })
    }

    /// Uppercases and strips whitespace without padding.
    ///
    /// # Errors
    /// - [`HillCryptError::InvalidCharacter`] for characters outside the alphabet.
    /// - [`HillCryptError::DimensionMismatch`] if the letter count is not a
    ///   multiple of the block size; `found` is the length of the ragged
    ///   final block.
    pub fn blocks_exact(&self, text: &str) -> Result<Vec<u8>, HillCryptError> {
        let indices = alphabet::text_to_indices(text)?;
        let remainder = indices.len() % self.block_size;
        if remainder != 0 {
            return Err(HillCryptError::DimensionMismatch {
                expected: self.block_size,
                found: remainder,
            });
        }
        Ok(indices)
    }

    /// Transforms every block of `indices` by `matrix`.
    ///
    /// # Errors
    /// Returns [`HillCryptError::DimensionMismatch`] if `indices` does not
    /// split into whole blocks matching the matrix dimension.
    pub fn apply(&self, indices: &[u8], matrix: &SquareMatrix) -> Result<Vec<u8>, HillCryptError> {
        let mut output = Vec::with_capacity(indices.len());
        for block in indices.chunks(self.block_size) {
            output.extend(transform(block, matrix, self.orientation)?);
        }
        Ok(output)
    }

    /// Removes every trailing filler letter.
    ///
    /// Lexical: a message that really ends in the filler letter loses it.
    pub fn strip_filler<'a>(&self, text: &'a str) -> &'a str {
        text.trim_end_matches(self.filler())
    }
}

/// Multiplies one block vector by `matrix` modulo 26.
///
/// With [`BlockOrientation::Column`], `result[i] = Σ_j vector[j] * matrix[i][j]`;
/// with [`BlockOrientation::Row`], `result[i] = Σ_j vector[j] * matrix[j][i]`.
/// Every result entry is in `[0, 25]`.
///
/// # Errors
/// Returns [`HillCryptError::DimensionMismatch`] if `vector.len()` differs
/// from the matrix dimension.
///
/// # Examples
///
/// ```
/// use hillcrypt::block_codec::transform;
/// use hillcrypt::config::BlockOrientation;
/// use hillcrypt::utils::matrix::SquareMatrix;
///
/// let key = SquareMatrix::from_rows(&[[3, 3], [2, 5]]).unwrap();
/// assert_eq!(transform(&[7, 4], &key, BlockOrientation::Row).unwrap(), vec![3, 15]);
/// assert_eq!(transform(&[7, 4], &key, BlockOrientation::Column).unwrap(), vec![7, 8]);
/// ```
pub fn transform(
    vector: &[u8],
    matrix: &SquareMatrix,
    orientation: BlockOrientation,
) -> Result<Vec<u8>, HillCryptError> {
    let n = matrix.dimension();
    if vector.len() != n {
        return Err(HillCryptError::DimensionMismatch {
            expected: n,
            found: vector.len(),
        });
    }
    let mut result = Vec::with_capacity(n);
    for i in 0..n {
        let mut sum = 0i64;
        for (j, &v) in vector.iter().enumerate() {
            let entry = match orientation {
                BlockOrientation::Column => matrix.get(i, j),
                BlockOrientation::Row => matrix.get(j, i),
            };
            sum += i64::from(v) * entry;
        }
        // reduce() keeps the value in [0, 26), so the cast is lossless
        result.push(reduce(sum, MODULUS) as u8);
    }
    Ok(result)
}
