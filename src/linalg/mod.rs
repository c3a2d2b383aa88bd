//! Row reduction and the queries built on it.
//!
//! Everything here starts from [`ef`]: the echelon form and its recorded
//! [`RowOperation`]s. The reduced form, determinant, rank, inverse and the
//! subspace bases are read off or replayed from that log. Queries take any
//! [`Reducible`], so a cached [`RowReductionResult`] can stand in for its
//! matrix.
//!
//! ```
//! use rowspace::{rank, rref, Matrix};
//!
//! let a = Matrix::from_ints(3, 3, &[1, 2, 3, 2, 4, 6, 1, 0, 1]).unwrap();
//! let done = rref(&a);
//! assert_eq!(rank(&done), 2);
//! assert!(done.determinant().unwrap().is_zero());
//! ```

pub(crate) mod eigen;
pub(crate) mod independence;
pub(crate) mod qr;
pub(crate) mod reduction;
pub(crate) mod row_op;
pub(crate) mod structure;
pub(crate) mod subspace;


pub use eigen::{eigenspace, is_eigen_value, is_eigen_vector};
pub use independence::{independent_subset, is_basis, is_linearly_independent, spans, within_span};
pub use qr::{
    gram_schmidt, qr_algorithm, qr_algorithm_with, qr_factorize, QrFactorization,
    QrIterationSettings,
};
pub use reduction::{ef, rref, Reducible, RowReductionResult};
pub use row_op::{replay, RowOperation};
pub use structure::{determinant, inverse, is_consistent, nullity, rank};
pub use subspace::{column_space, null_space, row_space};
