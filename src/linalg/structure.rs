use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::scalar::Scalar;

use super::reduction::{Reducible, RowReductionResult};
use super::row_op::replay;

/// Determinant of a square matrix.
///
/// Read off the echelon stage, so passing a [`RowReductionResult`] costs
/// nothing extra.
///
/// ```
/// use rowspace::{determinant, Matrix};
///
/// let a = Matrix::from_ints(3, 3, &[2, 0, 1, 1, 1, 1, 1, 0, 1]).unwrap();
/// assert_eq!(determinant(&a).unwrap(), 1);
/// assert!(determinant(&Matrix::zeros(2, 3)).is_err());
/// ```
pub fn determinant<R: Reducible + ?Sized>(input: &R) -> Result<Scalar> {
    let m = input.matrix();
    if !m.is_square() {
        return Err(non_square(m));
    }
    let stage = input.echelon_form();
    stage.determinant().cloned().ok_or_else(|| non_square(m))
}

/// Number of pivot rows in the echelon form.
pub fn rank<R: Reducible + ?Sized>(input: &R) -> usize {
    input.echelon_form().pivot_columns().count()
}

/// Columns without a pivot: `ncols - rank`.
pub fn nullity<R: Reducible + ?Sized>(input: &R) -> usize {
    input.matrix().ncols() - rank(input)
}

/// Whether the matrix, read as an augmented system `[A | b]`, has a
/// solution.
///
/// Inconsistent exactly when some echelon row pivots in the last column.
/// A matrix with no columns is consistent.
///
/// ```
/// use rowspace::{is_consistent, Matrix};
///
/// let solvable = Matrix::from_ints(2, 3, &[1, 1, 2, 1, -1, 0]).unwrap();
/// assert!(is_consistent(&solvable));
/// let parallel = Matrix::from_ints(2, 3, &[1, 1, 2, 1, 1, 3]).unwrap();
/// assert!(!is_consistent(&parallel));
/// ```
pub fn is_consistent<R: Reducible + ?Sized>(input: &R) -> bool {
    let width = input.matrix().ncols();
    if width == 0 {
        return true;
    }
    let stage = input.echelon_form();
    let consistent = stage.pivot_columns().all(|p| p != width - 1);
    consistent
}

/// Inverse of a square non-singular matrix.
///
/// Replays the reduction to the identity on an identity matrix. Fails with
/// [`Error::NonSquare`] or [`Error::Singular`].
///
/// ```
/// use rowspace::{inverse, Matrix};
///
/// let a = Matrix::from_ints(2, 2, &[2, 1, 1, 1]).unwrap();
/// let inv = inverse(&a).unwrap();
/// assert_eq!(inv, Matrix::from_ints(2, 2, &[1, -1, -1, 2]).unwrap());
/// assert_eq!(&a * &inv, Matrix::identity(2));
/// ```
pub fn inverse<R: Reducible + ?Sized>(input: &R) -> Result<Matrix> {
    let m = input.matrix();
    if !m.is_square() {
        return Err(non_square(m));
    }
    let stage = input.reduced_form();
    if stage.determinant().map_or(true, Scalar::is_zero) {
        return Err(Error::Singular);
    }
    let inv = replay(stage.echelon_operations(), &m.identity_like(m.nrows()))?;
    replay(stage.reduced_operations().unwrap_or_default(), &inv)
}

fn non_square(m: &Matrix) -> Error {
    Error::NonSquare {
        nrows: m.nrows(),
        ncols: m.ncols(),
    }
}

// ── Convenience methods ─────────────────────────────────────────────

impl Matrix {
    /// Echelon-stage reduction. See [`ef`](super::ef).
    pub fn ef(&self) -> RowReductionResult {
        super::reduction::ef(self)
    }

    /// Reduced-stage reduction. See [`rref`](super::rref).
    pub fn rref(&self) -> RowReductionResult {
        super::reduction::rref(self)
    }

    /// Determinant. See [`determinant`].
    pub fn det(&self) -> Result<Scalar> {
        determinant(self)
    }

    pub fn rank(&self) -> usize {
        rank(self)
    }

    pub fn nullity(&self) -> usize {
        nullity(self)
    }

    /// Inverse. See [`inverse`].
    ///
    /// ```
    /// use rowspace::{Error, Matrix};
    /// let singular = Matrix::from_ints(2, 2, &[1, 2, 2, 4]).unwrap();
    /// assert_eq!(singular.inverse().unwrap_err(), Error::Singular);
    /// ```
    pub fn inverse(&self) -> Result<Matrix> {
        inverse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::reduction::{ef, rref};

    fn m(rows: usize, cols: usize, v: &[i64]) -> Matrix {
        Matrix::from_ints(rows, cols, v).unwrap()
    }

    #[test]
    fn determinant_values() {
        assert_eq!(determinant(&m(2, 2, &[1, 2, 3, 4])).unwrap(), -2);
        assert_eq!(determinant(&m(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9])).unwrap(), 0);
        assert_eq!(determinant(&Matrix::zeros(0, 0)).unwrap(), 1);
        assert_eq!(
            determinant(&m(1, 2, &[1, 2])).unwrap_err(),
            Error::NonSquare { nrows: 1, ncols: 2 }
        );
    }

    #[test]
    fn determinant_from_cached_stage() {
        let a = m(3, 3, &[0, 1, 2, 1, 0, 3, 4, -3, 8]);
        let stage = ef(&a);
        assert_eq!(determinant(&stage).unwrap(), determinant(&a).unwrap());
        assert_eq!(determinant(&a).unwrap(), -2);
    }

    #[test]
    fn rank_and_nullity() {
        let a = m(3, 4, &[1, 2, 0, 1, 2, 4, 1, 3, 3, 6, 1, 4]);
        assert_eq!(rank(&a), 2);
        assert_eq!(nullity(&a), 2);
        assert_eq!(a.rank() + a.nullity(), a.ncols());

        assert_eq!(rank(&Matrix::zeros(3, 3)), 0);
        assert_eq!(nullity(&Matrix::zeros(3, 3)), 3);
    }

    #[test]
    fn consistency() {
        assert!(is_consistent(&Matrix::zeros(2, 0)));
        assert!(is_consistent(&Matrix::zeros(2, 2)));
        assert!(!is_consistent(&m(1, 1, &[5])));
        let stage = ef(&m(3, 3, &[1, 0, 1, 0, 1, 1, 1, 1, 3]));
        assert!(!is_consistent(&stage));
        let solvable = ef(&m(2, 3, &[1, 1, 2, 1, -1, 0]));
        assert!(is_consistent(&solvable));
        assert!(is_consistent(&rref(&solvable)));
    }

    #[test]
    fn inverse_round_trip() {
        let a = m(3, 3, &[2, 0, 1, 1, 1, 1, 1, 0, 1]);
        let inv = inverse(&a).unwrap();
        assert_eq!(a.try_mul(&inv).unwrap(), Matrix::identity(3));
        assert_eq!(inv.try_mul(&a).unwrap(), Matrix::identity(3));
    }

    #[test]
    fn inverse_errors() {
        assert_eq!(
            inverse(&Matrix::zeros(2, 3)).unwrap_err(),
            Error::NonSquare { nrows: 2, ncols: 3 }
        );
        assert_eq!(inverse(&m(2, 2, &[1, 2, 2, 4])).unwrap_err(), Error::Singular);
    }

    #[test]
    fn inverse_of_floating_matrix_is_floating() {
        let a = Matrix::from_f64s(2, 2, &[4.0, 7.0, 2.0, 6.0]).unwrap();
        let inv = inverse(&a).unwrap();
        assert!(inv.as_slice().iter().all(|s| !s.is_exact()));
        let expected = [0.6, -0.7, -0.2, 0.4];
        for (got, want) in inv.as_slice().iter().zip(expected) {
            assert!((got.to_f64() - want).abs() < 1e-12);
        }
    }

    #[test]
    fn inverse_of_empty() {
        assert_eq!(inverse(&Matrix::zeros(0, 0)).unwrap().shape(), (0, 0));
    }
}
