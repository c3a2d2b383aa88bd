use crate::error::{Error, Result};
use crate::matrix::vector::{Orientation, Vector};
use crate::matrix::vector_list::VectorList;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

use super::independence::is_linearly_independent;
use super::reduction::Reducible;
use super::subspace::null_space;

/// Basis of the eigenspace of `λ`: the null space of `A - λI`.
///
/// Empty when `λ` is not an eigenvalue.
///
/// ```
/// use rowspace::{eigenspace, Matrix, Scalar};
///
/// let a = Matrix::from_ints(2, 2, &[2, 0, 0, 3]).unwrap();
/// let space = eigenspace(&a, &Scalar::int(3)).unwrap();
/// assert_eq!(space.len(), 1);
/// assert_eq!(space[0][1], 1);
/// assert!(eigenspace(&a, &Scalar::int(5)).unwrap().is_empty());
/// ```
pub fn eigenspace<R: Reducible + ?Sized>(input: &R, lambda: &Scalar) -> Result<VectorList> {
    null_space(&input.matrix().sub_scaled_identity(lambda)?)
}

/// Whether `v` is an eigenvector of `A`: `v` and `Av` are dependent.
///
/// The zero vector counts, since any list holding it is dependent.
pub fn is_eigen_vector<R: Reducible + ?Sized>(v: &Vector, input: &R) -> Result<bool> {
    let a = input.matrix();
    if !a.is_square() {
        return Err(Error::NonSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }
    let image = a.mul_vector(v)?;
    let pair = VectorList::new(vec![v.with_orientation(Orientation::Column), image])?;
    Ok(!is_linearly_independent(&pair))
}

/// Whether `λ` is an eigenvalue of `A`: its eigenspace is non-trivial.
///
/// ```
/// use rowspace::{is_eigen_value, Matrix, Scalar};
///
/// let a = Matrix::from_ints(2, 2, &[4, 1, 2, 3]).unwrap();
/// assert!(is_eigen_value(&Scalar::int(5), &a).unwrap());
/// assert!(is_eigen_value(&Scalar::int(2), &a).unwrap());
/// assert!(!is_eigen_value(&Scalar::int(3), &a).unwrap());
/// ```
pub fn is_eigen_value<R: Reducible + ?Sized>(lambda: &Scalar, input: &R) -> Result<bool> {
    Ok(is_linearly_independent(&eigenspace(input, lambda)?))
}

impl Matrix {
    /// Eigenspace of `lambda`. See [`eigenspace`].
    pub fn eigenspace(&self, lambda: &Scalar) -> Result<VectorList> {
        eigenspace(self, lambda)
    }
}
