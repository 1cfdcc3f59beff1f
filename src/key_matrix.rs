//! KeyMatrix: validated Hill key with its cached modular inverse.
//!
//! A key is accepted only if its determinant is coprime with 26. The inverse
//! is derived once, at construction, by the adjugate method.

use log::{debug, trace};
use rand::Rng;

use crate::error::HillCryptError;
use crate::utils::matrix::{self, SquareMatrix};
use crate::utils::modular::{self, MODULUS};

/// Smallest supported key size.
pub const MIN_DIMENSION: usize = 2;

/// Largest supported key size. Keeps the `O(n!)` determinant cheap and the
/// raw `i64` determinant of a `[0, 25]` matrix far from overflow.
pub const MAX_DIMENSION: usize = 8;

/// An n×n key matrix that is invertible modulo 26, plus its inverse.
///
/// Immutable once built; a different key needs a new `KeyMatrix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    key: SquareMatrix,
    inverse: SquareMatrix,
    determinant: i64,
}

impl KeyMatrix {
    /// Validates a key given as rows.
    ///
    /// Entries are reduced into `[0, 25]` before validation.
    ///
    /// # Parameters
    /// - `size`: Declared dimension n.
    /// - `rows`: n rows of n entries each.
    ///
    /// # Errors
    /// - [`HillCryptError::UnsupportedDimension`] if `size` is outside `[2, 8]`.
    /// - [`HillCryptError::DimensionMismatch`] if the rows are not n×n.
    /// - [`HillCryptError::NotInvertible`] if `gcd(det mod 26, 26) != 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::key_matrix::KeyMatrix;
    ///
    /// let key = KeyMatrix::new(2, &[[3, 3], [2, 5]]).unwrap();
    /// assert_eq!(key.determinant(), 9);
    /// assert_eq!(key.inverse().to_rows(), vec![vec![15, 17], vec![20, 9]]);
    ///
    /// assert!(KeyMatrix::new(2, &[[2, 4], [1, 2]]).is_err());
    /// ```
    pub fn new<R: AsRef<[i64]>>(size: usize, rows: &[R]) -> Result<Self, HillCryptError> {
        check_dimension(size)?;
        if rows.len() != size {
            return Err(HillCryptError::DimensionMismatch {
                expected: size,
                found: rows.len(),
            });
        }
        let matrix = SquareMatrix::from_rows(rows)?;
        Self::from_matrix(matrix)
    }

    /// Validates an already-built square matrix.
    ///
    /// # Errors
    /// Same as [`new`](Self::new), with the matrix's own dimension as n.
    pub fn from_matrix(matrix: SquareMatrix) -> Result<Self, HillCryptError> {
        check_dimension(matrix.dimension())?;
        let key = matrix.reduced(MODULUS);
        let determinant = matrix::determinant(&key);
        if !modular::invertible(determinant, MODULUS) {
            return Err(HillCryptError::NotInvertible { determinant });
        }
        let inverse = matrix::inverse_mod(&key, MODULUS)?;

        debug!(
            "Accepted {n}x{n} key: determinant {determinant}, inverse determinant {:?}",
            modular::modular_inverse(determinant, MODULUS),
            n = key.dimension(),
        );
        debug!("Inverse key matrix: {:?}", inverse.to_rows());

        Ok(KeyMatrix {
            key,
            inverse,
            determinant,
        })
    }

    /// Samples random keys until one is invertible.
    ///
    /// Entries are drawn uniformly from `[1, 25]`.
    ///
    /// # Parameters
    /// - `size`: Key dimension n.
    /// - `rng`: Random source; pass a seeded generator for reproducible keys.
    /// - `max_attempts`: Number of candidates to try before giving up.
    ///
    /// # Errors
    /// - [`HillCryptError::UnsupportedDimension`] if `size` is outside `[2, 8]`.
    /// - [`HillCryptError::KeyGenerationExhausted`] if no candidate within
    ///   `max_attempts` is invertible.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::key_matrix::KeyMatrix;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let key = KeyMatrix::generate(3, &mut rng, 10_000).unwrap();
    /// assert_eq!(key.size(), 3);
    /// ```
    pub fn generate<G: Rng + ?Sized>(
        size: usize,
        rng: &mut G,
        max_attempts: u32,
    ) -> Result<Self, HillCryptError> {
        check_dimension(size)?;
        for attempt in 1..=max_attempts {
            let candidate = SquareMatrix::from_fn(size, |_, _| rng.gen_range(1..MODULUS));
            let det = matrix::determinant(&candidate);
            if modular::invertible(det, MODULUS) {
                debug!("Generated {size}x{size} key after {attempt} attempt(s)");
                return Self::from_matrix(candidate);
            }
            trace!("Rejected random candidate {attempt} with determinant {det}");
        }
        Err(HillCryptError::KeyGenerationExhausted {
            attempts: max_attempts,
        })
    }

    /// Key dimension n.
    pub fn size(&self) -> usize {
        self.key.dimension()
    }

    /// The validated key, entries in `[0, 25]`.
    pub fn matrix(&self) -> &SquareMatrix {
        &self.key
    }

    /// The cached inverse key, entries in `[0, 25]`.
    pub fn inverse(&self) -> &SquareMatrix {
        &self.inverse
    }

    /// Raw determinant of the validated key.
    pub fn determinant(&self) -> i64 {
        self.determinant
    }
}

fn check_dimension(size: usize) -> Result<(), HillCryptError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&size) {
        Ok(())
    } else {
        Err(HillCryptError::UnsupportedDimension(size))
    }
}
