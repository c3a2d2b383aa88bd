use core::fmt;

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// One elementary row operation, as recorded by the reduction engine.
///
/// Rows are 0-based. `Replace` adds `factor` times the source row to the
/// target row, so eliminating an entry records a negative factor.
///
/// ```
/// use rowspace::{Matrix, RowOperation, Scalar};
///
/// let a = Matrix::from_ints(2, 2, &[1, 2, 3, 4]).unwrap();
/// let op = RowOperation::Replace { target: 1, source: 0, factor: Scalar::int(-3) };
/// let b = op.apply(&a).unwrap();
/// assert_eq!(b, Matrix::from_ints(2, 2, &[1, 2, 0, -2]).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RowOperation {
    /// Exchange two rows.
    Swap { first: usize, second: usize },
    /// Multiply a row by a non-zero factor.
    Scale { row: usize, factor: Scalar },
    /// `target += factor * source`, with `target != source`.
    Replace {
        target: usize,
        source: usize,
        factor: Scalar,
    },
}

impl RowOperation {
    /// Apply to a copy of `m`, leaving `m` untouched.
    ///
    /// Fails with [`Error::OutOfBounds`] for a row index past `m.nrows()`,
    /// and with [`Error::InvalidArgument`] for a zero scale factor or a
    /// replacement whose target and source coincide.
    pub fn apply(&self, m: &Matrix) -> Result<Matrix> {
        self.validate(m.nrows())?;
        let mut out = m.clone();
        self.apply_in_place(&mut out);
        Ok(out)
    }

    /// Row indices this operation touches.
    pub fn rows(&self) -> (usize, usize) {
        match *self {
            RowOperation::Swap { first, second } => (first, second),
            RowOperation::Scale { row, .. } => (row, row),
            RowOperation::Replace { target, source, .. } => (target, source),
        }
    }

    pub(crate) fn validate(&self, nrows: usize) -> Result<()> {
        let (a, b) = self.rows();
        for index in [a, b] {
            if index >= nrows {
                return Err(Error::OutOfBounds { index, len: nrows });
            }
        }
        match self {
            RowOperation::Scale { factor, .. } if factor.is_zero() => {
                Err(Error::InvalidArgument("row scale factor must be non-zero"))
            }
            RowOperation::Replace { target, source, .. } if target == source => {
                Err(Error::InvalidArgument("row replacement needs two distinct rows"))
            }
            _ => Ok(()),
        }
    }

    /// Apply without validation. Indices must already be in bounds.
    pub(crate) fn apply_in_place(&self, m: &mut Matrix) {
        match self {
            RowOperation::Swap { first, second } => m.swap_rows(*first, *second),
            RowOperation::Scale { row, factor } => {
                for x in m.row_slice_mut(*row) {
                    *x = &*x * factor;
                }
            }
            RowOperation::Replace {
                target,
                source,
                factor,
            } => {
                let src: Vec<Scalar> = m.row_slice(*source).iter().map(|s| s * factor).collect();
                for (t, s) in m.row_slice_mut(*target).iter_mut().zip(src) {
                    *t = &*t + &s;
                }
            }
        }
    }
}

/// Replay a recorded sequence of operations on `m`, in order.
///
/// Every operation is checked against `m` before any is applied, so a bad
/// log fails without doing partial work. Used to carry a reduction over to
/// an augmented or identity matrix of the same height.
///
/// ```
/// use rowspace::{ef, replay, Matrix};
///
/// let a = Matrix::from_ints(2, 2, &[0, 1, 1, 0]).unwrap();
/// let stage = ef(&a);
/// let moved = replay(stage.echelon_operations(), &Matrix::identity(2)).unwrap();
/// assert_eq!(moved, a);
/// ```
pub fn replay(ops: &[RowOperation], m: &Matrix) -> Result<Matrix> {
    for op in ops {
        op.validate(m.nrows())?;
    }
    let mut out = m.clone();
    for op in ops {
        op.apply_in_place(&mut out);
    }
    Ok(out)
}

impl fmt::Display for RowOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOperation::Swap { first, second } => write!(f, "R{first} <-> R{second}"),
            RowOperation::Scale { row, factor } => write!(f, "R{row} <- {factor} * R{row}"),
            RowOperation::Replace {
                target,
                source,
                factor,
            } => write!(f, "R{target} <- R{target} + {factor} * R{source}"),
        }
    }
}
