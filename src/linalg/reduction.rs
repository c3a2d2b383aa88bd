use core::fmt;
use std::borrow::Cow;

use crate::matrix::Matrix;
use crate::scalar::Scalar;

use super::row_op::RowOperation;

/// Outcome of row-reducing a matrix.
///
/// Always holds the original matrix, its echelon form and the operations
/// that produced it. Once [`into_reduced`](Self::into_reduced) has run it
/// also holds the reduced echelon form with its own operation log, which
/// continues from the echelon form. Square inputs carry their determinant.
///
/// Every query in [`linalg`](crate::linalg) accepts either a [`Matrix`] or
/// a `RowReductionResult` through [`Reducible`], so a reduction can be
/// computed once and shared.
///
/// ```
/// use rowspace::{ef, rank, Matrix};
///
/// let a = Matrix::from_ints(2, 2, &[1, 2, 3, 4]).unwrap();
/// let stage = ef(&a);
/// assert_eq!(*stage.determinant().unwrap(), -2);
/// assert_eq!(rank(&stage), 2);
/// assert!(stage.reduced().is_none());
///
/// let done = stage.into_reduced();
/// assert_eq!(done.reduced().unwrap(), &Matrix::identity(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RowReductionResult {
    original: Matrix,
    echelon: Matrix,
    echelon_ops: Vec<RowOperation>,
    reduced: Option<ReducedStage>,
    determinant: Option<Scalar>,
}

#[derive(Debug, Clone, PartialEq)]
struct ReducedStage {
    matrix: Matrix,
    ops: Vec<RowOperation>,
}

impl RowReductionResult {
    /// The matrix that was reduced.
    #[inline]
    pub fn original(&self) -> &Matrix {
        &self.original
    }

    /// Row echelon form.
    #[inline]
    pub fn echelon(&self) -> &Matrix {
        &self.echelon
    }

    /// Operations taking the original to the echelon form.
    #[inline]
    pub fn echelon_operations(&self) -> &[RowOperation] {
        &self.echelon_ops
    }

    /// Reduced row echelon form, if computed.
    pub fn reduced(&self) -> Option<&Matrix> {
        self.reduced.as_ref().map(|s| &s.matrix)
    }

    /// Operations taking the echelon form to the reduced form, if computed.
    pub fn reduced_operations(&self) -> Option<&[RowOperation]> {
        self.reduced.as_ref().map(|s| s.ops.as_slice())
    }

    /// Determinant, present exactly when the original is square.
    #[inline]
    pub fn determinant(&self) -> Option<&Scalar> {
        self.determinant.as_ref()
    }

    /// The most-derived matrix held: reduced form if present, else echelon.
    pub fn latest(&self) -> &Matrix {
        self.reduced().unwrap_or(&self.echelon)
    }

    /// Pivot column of each non-zero echelon row, top to bottom.
    pub fn pivot_columns(&self) -> impl Iterator<Item = usize> + '_ {
        let width = self.echelon.ncols();
        (0..self.echelon.nrows())
            .map(|i| self.echelon.pivot_position(i))
            .take_while(move |&p| p < width)
    }

    /// Extend with the reduced echelon form. A no-op if already present.
    pub fn into_reduced(mut self) -> Self {
        if self.reduced.is_none() {
            self.reduced = Some(reduce_echelon(&self.echelon));
        }
        self
    }

    /// Consume into the reduced echelon matrix, computing it if needed.
    pub fn into_reduced_matrix(self) -> Matrix {
        let done = self.into_reduced();
        match done.reduced {
            Some(stage) => stage.matrix,
            None => done.echelon,
        }
    }
}

/// Shows the most-derived stage.
impl fmt::Display for RowReductionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.latest(), f)
    }
}

// ── Reducible ───────────────────────────────────────────────────────

/// Something the linear-algebra queries can run on.
///
/// Implemented by [`Matrix`], which reduces on demand, and by
/// [`RowReductionResult`], which hands back its cached stages.
pub trait Reducible {
    /// The matrix being analysed.
    fn matrix(&self) -> &Matrix;

    /// Echelon-stage result; may also hold the reduced stage.
    fn echelon_form(&self) -> Cow<'_, RowReductionResult>;

    /// Result whose reduced stage is guaranteed present.
    fn reduced_form(&self) -> Cow<'_, RowReductionResult> {
        match self.echelon_form() {
            Cow::Borrowed(stage) if stage.reduced.is_some() => Cow::Borrowed(stage),
            stage => Cow::Owned(stage.into_owned().into_reduced()),
        }
    }
}

impl Reducible for Matrix {
    #[inline]
    fn matrix(&self) -> &Matrix {
        self
    }

    fn echelon_form(&self) -> Cow<'_, RowReductionResult> {
        Cow::Owned(ef(self))
    }
}

impl Reducible for RowReductionResult {
    #[inline]
    fn matrix(&self) -> &Matrix {
        &self.original
    }

    fn echelon_form(&self) -> Cow<'_, RowReductionResult> {
        Cow::Borrowed(self)
    }
}

// ── Engine ──────────────────────────────────────────────────────────

/// Row echelon form of `m`.
///
/// Rows whose pivots share a column are combined until every non-zero row
/// owns a distinct pivot column; the rows are then ordered by pivot with
/// adjacent swaps. For square inputs the determinant is the swap sign
/// times the product of the echelon diagonal.
///
/// Entries are exact or floating according to the input; a matrix with
/// any exact entry reduces exactly.
///
/// ```
/// use rowspace::{ef, Matrix};
///
/// let a = Matrix::from_ints(3, 3, &[0, 0, 1, 1, 2, 3, 2, 4, 7]).unwrap();
/// let stage = ef(&a);
/// assert!(stage.echelon().is_upper_triangular());
/// assert_eq!(*stage.determinant().unwrap(), 0);
/// ```
pub fn ef(m: &Matrix) -> RowReductionResult {
    let mut work = m.clone();
    let mut ops = Vec::new();

    while let Some((target, source, col)) = pivot_collision(&work) {
        let Some(ratio) = work[(target, col)].checked_div(&work[(source, col)]) else {
            // A floating pivot that promotes to exact zero is no pivot.
            let zero = work[(source, col)].zero_like();
            work.set(source, col, zero);
            continue;
        };
        let factor = -ratio;
        let op = RowOperation::Replace {
            target,
            source,
            factor,
        };
        op.apply_in_place(&mut work);
        // Everything up to the old pivot is zero now; drop rounding residue.
        for j in 0..=col {
            let zero = work[(target, j)].zero_like();
            work.set(target, j, zero);
        }
        log::trace!("echelon: {op}");
        ops.push(op);
    }

    let mut sign = if m.is_floating() {
        Scalar::float(1.0)
    } else {
        Scalar::one()
    };
    let mut pivots: Vec<usize> = (0..work.nrows()).map(|i| work.pivot_position(i)).collect();
    for row in 1..pivots.len() {
        let mut k = row;
        while k > 0 && pivots[k - 1] > pivots[k] {
            let op = RowOperation::Swap {
                first: k - 1,
                second: k,
            };
            op.apply_in_place(&mut work);
            pivots.swap(k - 1, k);
            sign = -sign;
            log::trace!("echelon: {op}");
            ops.push(op);
            k -= 1;
        }
    }

    let determinant = m.is_square().then(|| match work.diagonal_product() {
        Some(d) => sign * d,
        None => sign,
    });
    log::debug!(
        "echelon form of {}x{} matrix in {} operations",
        m.nrows(),
        m.ncols(),
        ops.len()
    );

    RowReductionResult {
        original: m.clone(),
        echelon: work,
        echelon_ops: ops,
        reduced: None,
        determinant,
    }
}

/// Reduced row echelon form.
///
/// A [`Matrix`] is reduced from scratch; a [`RowReductionResult`] reuses
/// its echelon stage and is returned as-is if already reduced.
///
/// ```
/// use rowspace::{ef, rref, Matrix};
///
/// let a = Matrix::from_ints(2, 3, &[1, 2, 3, 2, 4, 7]).unwrap();
/// let expected = Matrix::from_ints(2, 3, &[1, 2, 0, 0, 0, 1]).unwrap();
/// assert_eq!(rref(&a).reduced().unwrap(), &expected);
///
/// let stage = ef(&a);
/// assert_eq!(rref(&stage).echelon_operations(), stage.echelon_operations());
/// ```
pub fn rref<R: Reducible + ?Sized>(input: &R) -> RowReductionResult {
    input.reduced_form().into_owned()
}

/// First pair of non-zero rows sharing a pivot column, as
/// `(later row, earlier row, column)`.
fn pivot_collision(m: &Matrix) -> Option<(usize, usize, usize)> {
    let width = m.ncols();
    let mut owner: Vec<Option<usize>> = vec![None; width];
    for row in 0..m.nrows() {
        let p = m.pivot_position(row);
        if p == width {
            continue;
        }
        match owner[p] {
            Some(earlier) => return Some((row, earlier, p)),
            None => owner[p] = Some(row),
        }
    }
    None
}

/// Scale each pivot to one, then clear the entries above it.
fn reduce_echelon(echelon: &Matrix) -> ReducedStage {
    let mut work = echelon.clone();
    let mut ops = Vec::new();
    let width = work.ncols();

    for row in 0..work.nrows() {
        let col = work.pivot_position(row);
        if col == width {
            continue;
        }
        // `pivot_position` skips zeros, so the pivot is invertible.
        let factor = work[(row, col)].recip_nonzero();
        let op = RowOperation::Scale { row, factor };
        op.apply_in_place(&mut work);
        let one = work[(row, col)].one_like();
        work.set(row, col, one);
        log::trace!("reduced: {op}");
        ops.push(op);

        for target in (0..row).rev() {
            let entry = &work[(target, col)];
            if entry.is_zero() {
                let zero = entry.zero_like();
                work.set(target, col, zero);
                continue;
            }
            let op = RowOperation::Replace {
                target,
                source: row,
                factor: -entry,
            };
            op.apply_in_place(&mut work);
            let zero = work[(target, col)].zero_like();
            work.set(target, col, zero);
            log::trace!("reduced: {op}");
            ops.push(op);
        }
    }
    log::debug!("reduced echelon form in {} operations", ops.len());

    ReducedStage { matrix: work, ops }
}
