use crate::error::Result;
use crate::matrix::vector::{Orientation, Vector};
use crate::matrix::vector_list::VectorList;
use crate::matrix::Matrix;

use super::reduction::{ef, Reducible};
use super::row_op::replay;

/// Basis of the column space: the original columns at the pivot positions.
///
/// ```
/// use rowspace::{column_space, Matrix};
///
/// let a = Matrix::from_ints(2, 3, &[1, 2, 1, 2, 4, 0]).unwrap();
/// let basis = column_space(&a);
/// assert_eq!(basis.len(), 2);
/// assert_eq!(basis[1], a.column(2).unwrap());
/// ```
pub fn column_space<R: Reducible + ?Sized>(input: &R) -> VectorList {
    let stage = input.echelon_form();
    let original = stage.original();
    let columns = stage.pivot_columns().map(|p| original.col_vector(p)).collect();
    VectorList::from_parts(columns, original.nrows())
}

/// Basis of the row space: the non-zero rows of the echelon form.
pub fn row_space<R: Reducible + ?Sized>(input: &R) -> VectorList {
    let stage = input.echelon_form();
    let echelon = stage.echelon();
    let rows = (0..stage.pivot_columns().count())
        .map(|i| Vector::new(echelon.row_slice(i).to_vec(), Orientation::Row))
        .collect();
    VectorList::from_parts(rows, echelon.ncols())
}

/// Basis of the null space `{x : Ax = 0}`.
///
/// Reduces `Aᵀ` while tracking the operations on `[Aᵀ | I]`. Each row of
/// `Aᵀ` that reduces to zero leaves behind, in the identity block, a
/// combination of the columns of `A` that vanishes. An injective map gives
/// an empty list.
///
/// ```
/// use rowspace::{null_space, Matrix};
///
/// let a = Matrix::from_ints(1, 2, &[1, 1]).unwrap();
/// let basis = null_space(&a).unwrap();
/// assert_eq!(basis.len(), 1);
/// assert!(a.mul_vector(&basis[0]).unwrap().is_zero());
/// ```
pub fn null_space<R: Reducible + ?Sized>(input: &R) -> Result<VectorList> {
    let a = input.matrix();
    let at = a.transpose();
    let n = at.nrows();
    let reduction = ef(&at);
    let tracked = replay(
        reduction.echelon_operations(),
        &at.augment_cols(&a.identity_like(n))?,
    )?;
    let (left, right) = tracked.partition_cols(at.ncols())?;

    let mut basis = Vec::new();
    for row in (0..n).rev() {
        if left.pivot_position(row) < left.ncols() {
            break;
        }
        basis.push(Vector::new(right.row_slice(row).to_vec(), Orientation::Column));
    }
    basis.reverse();
    log::debug!("null space of {}x{} matrix has dimension {}", a.nrows(), a.ncols(), basis.len());
    Ok(VectorList::from_parts(basis, n))
}

impl Matrix {
    /// Column space basis. See [`column_space`].
    pub fn column_space(&self) -> VectorList {
        column_space(self)
    }

    /// Row space basis. See [`row_space`].
    pub fn row_space(&self) -> VectorList {
        row_space(self)
    }

    /// Null space basis. See [`null_space`].
    pub fn null_space(&self) -> Result<VectorList> {
        null_space(self)
    }
}
