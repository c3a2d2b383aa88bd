mod block;
mod ops;
mod square;
mod util;
pub mod vector;
pub mod vector_list;

use core::ops::Index;

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::traits::MatrixRef;

use vector::{Orientation, Vector};
use vector_list::VectorList;

/// Dense immutable matrix of [`Scalar`] entries.
///
/// Row-major `Vec<Scalar>` storage with `nrows * ncols` entries. Every
/// operation returns a fresh matrix; there is no public way to mutate one
/// in place, so a matrix can be shared freely between queries.
///
/// # Examples
///
/// ```
/// use rowspace::Matrix;
///
/// let a = Matrix::from_ints(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(a[(1, 0)], 4);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 3);
///
/// let id = Matrix::identity(3);
/// assert_eq!(id[(1, 1)], 1);
/// assert_eq!(id[(0, 2)], 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<Scalar>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl Matrix {
    /// Create a matrix from row-major values.
    ///
    /// Fails with [`Error::InvalidArgument`] if `data.len() != nrows * ncols`.
    pub fn new(nrows: usize, ncols: usize, data: Vec<Scalar>) -> Result<Self> {
        if data.len() != nrows * ncols {
            return Err(Error::InvalidArgument("value count does not match matrix dimensions"));
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Exact matrix from row-major integers.
    ///
    /// ```
    /// use rowspace::Matrix;
    /// let m = Matrix::from_ints(2, 2, &[1, 2, 3, 4]).unwrap();
    /// assert!(m.is_exact());
    /// assert!(Matrix::from_ints(2, 2, &[1, 2, 3]).is_err());
    /// ```
    pub fn from_ints(nrows: usize, ncols: usize, values: &[i64]) -> Result<Self> {
        Self::new(nrows, ncols, values.iter().map(|&n| Scalar::int(n)).collect())
    }

    /// Floating matrix from row-major values.
    pub fn from_f64s(nrows: usize, ncols: usize, values: &[f64]) -> Result<Self> {
        Self::new(nrows, ncols, values.iter().map(|&x| Scalar::float(x)).collect())
    }

    /// Create an `nrows x ncols` matrix of exact zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![Scalar::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` exact identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { Scalar::one() } else { Scalar::zero() })
    }

    /// Create a matrix by calling `f(row, col)` for each entry.
    ///
    /// ```
    /// use rowspace::{Matrix, Scalar};
    /// let m = Matrix::from_fn(2, 2, |i, j| Scalar::int((i * 2 + j) as i64));
    /// assert_eq!(m[(1, 1)], 3);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> Scalar) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Build a matrix whose columns are the vectors of `list`, in order.
    ///
    /// ```
    /// use rowspace::{Matrix, Orientation, Vector, VectorList};
    /// let list = VectorList::new(vec![
    ///     Vector::from_ints(&[1, 2], Orientation::Column),
    ///     Vector::from_ints(&[3, 4], Orientation::Column),
    /// ])
    /// .unwrap();
    /// let m = Matrix::from_columns(&list);
    /// assert_eq!(m, Matrix::from_ints(2, 2, &[1, 3, 2, 4]).unwrap());
    /// ```
    pub fn from_columns(list: &VectorList) -> Self {
        Self::from_fn(list.dim(), list.len(), |i, j| list[j][i].clone())
    }

    /// Copy any matrix-like value into a `Matrix`.
    pub fn from_ref(m: &impl MatrixRef) -> Self {
        Self::from_fn(m.nrows(), m.ncols(), |i, j| m.get(i, j).clone())
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl Matrix {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Bounds-checked entry access.
    pub fn entry(&self, row: usize, col: usize) -> Result<&Scalar> {
        if row >= self.nrows {
            return Err(Error::OutOfBounds { index: row, len: self.nrows });
        }
        if col >= self.ncols {
            return Err(Error::OutOfBounds { index: col, len: self.ncols });
        }
        Ok(&self.data[row * self.ncols + col])
    }

    /// Row `i` as a row vector.
    pub fn row(&self, i: usize) -> Result<Vector> {
        if i >= self.nrows {
            return Err(Error::OutOfBounds { index: i, len: self.nrows });
        }
        Ok(Vector::new(self.row_slice(i).to_vec(), Orientation::Row))
    }

    /// Column `j` as a column vector.
    pub fn column(&self, j: usize) -> Result<Vector> {
        if j >= self.ncols {
            return Err(Error::OutOfBounds { index: j, len: self.ncols });
        }
        Ok(self.col_vector(j))
    }

    /// Column `j` as a column vector; panics if out of bounds.
    pub(crate) fn col_vector(&self, j: usize) -> Vector {
        let data = (0..self.nrows).map(|i| self[(i, j)].clone()).collect();
        Vector::new(data, Orientation::Column)
    }

    /// Every column, in order, as a list of `nrows`-dimensional vectors.
    pub fn columns(&self) -> VectorList {
        VectorList::from_parts((0..self.ncols).map(|j| self.col_vector(j)).collect(), self.nrows)
    }

    /// Entries in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    #[inline]
    pub(crate) fn row_slice(&self, i: usize) -> &[Scalar] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    #[inline]
    pub(crate) fn row_slice_mut(&mut self, i: usize) -> &mut [Scalar] {
        let n = self.ncols;
        &mut self.data[i * n..(i + 1) * n]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Scalar) {
        self.data[row * self.ncols + col] = value;
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            let n = self.ncols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
    }

    /// Non-empty with no exact entries.
    pub(crate) fn is_floating(&self) -> bool {
        !self.data.is_empty() && self.data.iter().all(|s| !s.is_exact())
    }

    /// `n x n` identity of the same scalar kind as `self`.
    pub(crate) fn identity_like(&self, n: usize) -> Matrix {
        let id = Matrix::identity(n);
        if self.is_floating() {
            id.to_inexact()
        } else {
            id
        }
    }

    /// Index of the first non-zero entry of row `i`, or `ncols` for a
    /// zero row. Zero tests use each scalar's own equality.
    pub fn pivot_position(&self, i: usize) -> usize {
        self.row_slice(i)
            .iter()
            .position(|s| !s.is_zero())
            .unwrap_or(self.ncols)
    }
}

// ── MatrixRef ───────────────────────────────────────────────────────

impl MatrixRef for Matrix {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &Scalar {
        &self[(row, col)]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Scalar;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Scalar {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols,
        );
        &self.data[row * self.ncols + col]
    }
}
