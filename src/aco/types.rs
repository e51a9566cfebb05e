//! Problem input and error types for the Ant Colony solver.

use thiserror::Error;

/// Errors raised while building a solver.
///
/// Every variant is a construction-time failure: once an [`AcoSolver`]
/// exists, solving cannot fail.
///
/// [`AcoSolver`]: super::AcoSolver
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// The matrix describes fewer than two cities.
    #[error("distance matrix needs at least 2 cities, got {0}")]
    TooFewCities(usize),

    /// A row length differs from the number of rows.
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// An entry is NaN or infinite.
    #[error("distance from {from} to {to} is not finite: {value}")]
    NonFiniteDistance {
        from: usize,
        to: usize,
        value: f64,
    },

    /// An off-diagonal entry is zero or negative, or a diagonal entry is negative.
    #[error("distance from {from} to {to} must be positive, got {value}")]
    NonPositiveDistance {
        from: usize,
        to: usize,
        value: f64,
    },

    /// The solver configuration failed validation.
    #[error("invalid AcoConfig: {0}")]
    InvalidConfig(String),
}

/// An immutable N×N table of inter-city distances.
///
/// Entries are stored row-major. Symmetry is not enforced; the solver
/// only ever reads `distance(from, to)` in the direction an ant travels.
///
/// # Examples
///
/// ```
/// use u_aco::aco::DistanceMatrix;
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 6.0],
///     vec![9.0, 6.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(matrix.len(), 3);
/// assert_eq!(matrix.get(1, 2), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows, rejecting anything the solver cannot use.
    ///
    /// # Errors
    ///
    /// - [`AcoError::TooFewCities`] for fewer than 2 rows
    /// - [`AcoError::NotSquare`] if any row length differs from the row count
    /// - [`AcoError::NonFiniteDistance`] for NaN or infinite entries
    /// - [`AcoError::NonPositiveDistance`] for zero or negative off-diagonal
    ///   entries (their visibility `1 / d` is undefined) and negative diagonals
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AcoError> {
        let n = rows.len();
        if n < 2 {
            return Err(AcoError::TooFewCities(n));
        }

        let mut data = Vec::with_capacity(n * n);
        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(AcoError::NotSquare {
                    row: from,
                    len: row.len(),
                    expected: n,
                });
            }
            for (to, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(AcoError::NonFiniteDistance { from, to, value });
                }
                let invalid = if from == to { value < 0.0 } else { value <= 0.0 };
                if invalid {
                    return Err(AcoError::NonPositiveDistance { from, to, value });
                }
            }
            data.extend(row);
        }

        Ok(Self { n, data })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: a valid matrix has at least two cities.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance travelled from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.n && to < self.n, "city index out of bounds");
        self.data[from * self.n + to]
    }

    /// The distances from `from` to every city.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.n..(from + 1) * self.n]
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = AcoError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.data.chunks(matrix.n).map(<[f64]>::to_vec).collect()
    }
}
