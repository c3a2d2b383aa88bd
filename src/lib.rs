//! # rowspace
//!
//! Exact linear algebra by row reduction. Scalars are arbitrary-precision
//! rationals or floats; a single reduction engine produces echelon and
//! reduced echelon forms together with the row operations that got there,
//! and every other query (determinant, rank, inverse, subspace bases,
//! independence, QR, eigenspaces) is read off or replayed from it.
//!
//! ## Quick start
//!
//! ```
//! use rowspace::{inverse, null_space, rref, Matrix, Scalar};
//!
//! let a = Matrix::from_ints(2, 2, &[2, 0, 0, 2]).unwrap();
//! let inv = inverse(&a).unwrap();
//! assert_eq!(inv[(0, 0)], Scalar::ratio(1, 2).unwrap());
//!
//! let b = Matrix::from_ints(2, 3, &[1, 2, 3, 2, 4, 6]).unwrap();
//! let done = rref(&b);
//! assert_eq!(done.to_string(), "[ 1 2 3\n| 0 0 0\n]");
//! assert_eq!(null_space(&done).unwrap().len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`scalar`]: [`Scalar`], either an exact `BigRational` or an `f64`.
//!   Mixing the two promotes the float to an exact rational.
//!
//! - [`matrix`]: Heap-allocated [`Matrix`] with runtime dimensions and
//!   row-major storage, plus [`Vector`] (a matrix with one degenerate
//!   dimension and an [`Orientation`]) and [`VectorList`]. Arithmetic,
//!   block operations (augment, partition, transpose) and display.
//!
//! - [`linalg`]: The row-reduction engine ([`ef`], [`rref`],
//!   [`RowReductionResult`], [`RowOperation`]) and the queries built on
//!   it. All queries accept a matrix or a cached reduction via
//!   [`Reducible`].
//!
//! - [`value`]: [`Value`], the closed set of printable results.
//!
//! - [`traits`]: [`MatrixRef`], read-only matrix access shared by
//!   `Matrix` and `Vector`.
//!
//! ## Errors
//!
//! Fallible operations return [`Result`] with a single [`Error`] enum.
//! Arithmetic operators (`+`, `-`, `*`) panic on a shape mismatch; the
//! `try_*` methods return the error instead.
//!
//! ## Logging
//!
//! Row operations are traced through the [`log`] facade at `trace` level,
//! stage summaries at `debug`, and non-convergence at `warn`. Nothing is
//! printed unless the caller installs a logger.

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod scalar;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use linalg::{
    column_space, determinant, ef, eigenspace, gram_schmidt, independent_subset, inverse,
    is_basis, is_consistent, is_eigen_value, is_eigen_vector, is_linearly_independent,
    null_space, nullity, qr_algorithm, qr_algorithm_with, qr_factorize, rank, replay, row_space,
    rref, spans, within_span, QrFactorization, QrIterationSettings, Reducible, RowOperation,
    RowReductionResult,
};
pub use matrix::vector::{Orientation, Vector};
pub use matrix::vector_list::VectorList;
pub use matrix::Matrix;
pub use scalar::{Scalar, DEFAULT_EPSILON};
pub use traits::MatrixRef;
pub use value::Value;
