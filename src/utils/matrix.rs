//! Square integer matrices and the linear algebra the Hill cipher needs.
//!
//! Matrices are stored row-major in a flat `Vec<i64>`. Determinants are
//! computed by recursive cofactor expansion, which is `O(n!)` and intended
//! only for the small key sizes the cipher supports.

use crate::error::HillCryptError;
use crate::utils::modular::{self, reduce};

/// An n×n integer matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SquareMatrix {
    n: usize,
    cells: Vec<i64>,
}

impl SquareMatrix {
    /// Builds a matrix from a slice of rows.
    ///
    /// # Parameters
    /// - `rows`: Row slices; every row must have as many entries as there are rows.
    ///
    /// # Errors
    /// Returns [`HillCryptError::DimensionMismatch`] if any row length differs
    /// from the number of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::utils::matrix::SquareMatrix;
    ///
    /// let m = SquareMatrix::from_rows(&[[3, 3], [2, 5]]).unwrap();
    /// assert_eq!(m.dimension(), 2);
    /// assert_eq!(m.get(1, 0), 2);
    ///
    /// assert!(SquareMatrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, HillCryptError> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(HillCryptError::DimensionMismatch {
                    expected: n,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(SquareMatrix { n, cells })
    }

    /// Builds an n×n matrix whose entry `(row, col)` is `f(row, col)`.
    pub fn from_fn<F: FnMut(usize, usize) -> i64>(n: usize, mut f: F) -> Self {
        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                cells.push(f(row, col));
            }
        }
        SquareMatrix { n, cells }
    }

    /// The n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, |row, col| i64::from(row == col))
    }

    /// Number of rows (and columns).
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below [`dimension`](Self::dimension).
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.n + col]
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        // chunks(0) panics; an empty matrix has no rows anyway
        self.cells.chunks(self.n.max(1))
    }

    /// Copies the matrix out as nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.rows().map(<[i64]>::to_vec).collect()
    }

    /// Returns a copy with every entry reduced into `[0, modulus)`.
    pub fn reduced(&self, modulus: i64) -> Self {
        SquareMatrix {
            n: self.n,
            cells: self.cells.iter().map(|&v| reduce(v, modulus)).collect(),
        }
    }
}

/// Deletes one row and one column, keeping the remaining entries in order.
///
/// # Parameters
/// - `matrix`: Source matrix of dimension n ≥ 1.
/// - `exclude_row`: Row to drop.
/// - `exclude_col`: Column to drop.
///
/// # Returns
/// The (n-1)×(n-1) minor matrix.
pub fn submatrix(matrix: &SquareMatrix, exclude_row: usize, exclude_col: usize) -> SquareMatrix {
    let n = matrix.n;
    let mut cells = Vec::with_capacity(n.saturating_sub(1).pow(2));
    for (row, values) in matrix.rows().enumerate() {
        if row == exclude_row {
            continue;
        }
        for (col, &value) in values.iter().enumerate() {
            if col != exclude_col {
                cells.push(value);
            }
        }
    }
    SquareMatrix {
        n: n.saturating_sub(1),
        cells,
    }
}

/// Raw integer determinant by cofactor expansion along the first row.
///
/// No modulus is applied. Entries are expected to be small (the cipher
/// keeps them in `[0, 25]` with n ≤ 8); arbitrary large entries can
/// overflow `i64`.
///
/// # Examples
///
/// ```
/// use hillcrypt::utils::matrix::{determinant, SquareMatrix};
///
/// let m = SquareMatrix::from_rows(&[[6, 24, 1], [13, 16, 10], [20, 17, 15]]).unwrap();
/// assert_eq!(determinant(&m), 441);
/// ```
pub fn determinant(matrix: &SquareMatrix) -> i64 {
    match matrix.n {
        0 => 1,
        1 => matrix.get(0, 0),
        2 => matrix.get(0, 0) * matrix.get(1, 1) - matrix.get(0, 1) * matrix.get(1, 0),
        n => {
            let mut det = 0;
            for col in 0..n {
                let entry = matrix.get(0, col);
                if entry == 0 {
                    continue;
                }
                let sign = if col % 2 == 0 { 1 } else { -1 };
                det += sign * entry * determinant(&submatrix(matrix, 0, col));
            }
            det
        }
    }
}

/// Adjugate (transposed cofactor matrix) reduced into `[0, modulus)`.
///
/// Cofactor `(i, j)` is `(-1)^(i+j) * det(submatrix(i, j))` and is written to
/// position `(j, i)`.
pub fn adjugate(matrix: &SquareMatrix, modulus: i64) -> SquareMatrix {
    let n = matrix.n;
    let mut cells = vec![0i64; n * n];
    for i in 0..n {
        for j in 0..n {
            let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
            let cofactor = sign * determinant(&submatrix(matrix, i, j));
            cells[j * n + i] = reduce(cofactor, modulus);
        }
    }
    SquareMatrix { n, cells }
}

/// Inverse of `matrix` modulo `modulus`, computed as `det⁻¹ · adj(matrix)`.
///
/// # Errors
/// Returns [`HillCryptError::NotInvertible`] if the determinant has no
/// inverse modulo `modulus`.
pub fn inverse_mod(matrix: &SquareMatrix, modulus: i64) -> Result<SquareMatrix, HillCryptError> {
    let det = determinant(matrix);
    let det_inv = modular::modular_inverse(det, modulus)
        .ok_or(HillCryptError::NotInvertible { determinant: det })?;
    let adj = adjugate(matrix, modulus);
    Ok(SquareMatrix {
        n: adj.n,
        cells: adj
            .cells
            .iter()
            .map(|&v| reduce(v * det_inv, modulus))
            .collect(),
    })
}

/// Matrix product `a × b` with entries reduced into `[0, modulus)`.
///
/// # Errors
/// Returns [`HillCryptError::DimensionMismatch`] if the matrices differ in size.
pub fn mul_mod(
    a: &SquareMatrix,
    b: &SquareMatrix,
    modulus: i64,
) -> Result<SquareMatrix, HillCryptError> {
    if a.n != b.n {
        return Err(HillCryptError::DimensionMismatch {
            expected: a.n,
            found: b.n,
        });
    }
    let n = a.n;
    Ok(SquareMatrix::from_fn(n, |row, col| {
        let sum: i64 = (0..n).map(|k| a.get(row, k) * b.get(k, col)).sum();
        reduce(sum, modulus)
    }))
}
