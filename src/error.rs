//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Result alias using the crate [`enum@Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from matrix construction, arithmetic and the reduction algorithms.
///
/// Every check runs before a derived value is built, so a failed call leaves
/// its inputs untouched.
///
/// ```
/// use rowspace::{Error, Matrix};
///
/// let a = Matrix::from_ints(2, 2, &[1, 2, 2, 4]).unwrap();
/// assert_eq!(a.inverse().unwrap_err(), Error::Singular);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch in {op}: {}x{} vs {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        /// Operation name.
        op: &'static str,
        /// Left operand shape `(rows, cols)`.
        lhs: (usize, usize),
        /// Right operand shape `(rows, cols)`.
        rhs: (usize, usize),
    },

    /// A row, column or vector index is outside the valid range.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of valid positions.
        len: usize,
    },

    /// An argument violates a precondition of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A square matrix was required.
    #[error("matrix is not square: {nrows}x{ncols}")]
    NonSquare {
        /// Row count.
        nrows: usize,
        /// Column count.
        ncols: usize,
    },

    /// The matrix has a zero determinant.
    #[error("matrix is singular")]
    Singular,

    /// The columns are not a basis of their own column space.
    #[error("columns are not a basis of their column space")]
    IncompatibleBasis,

    /// Division by an exact or floating zero.
    #[error("division by zero")]
    DivisionByZero,

    /// QR iteration did not reach triangular form within its budget.
    #[error("QR iteration did not converge after {iterations} iterations")]
    ConvergenceFailure {
        /// Iterations performed before giving up.
        iterations: usize,
    },
}
