use crate::error::{Error, Result};

use super::Matrix;

impl Matrix {
    /// Transpose.
    ///
    /// ```
    /// use rowspace::Matrix;
    /// let m = Matrix::from_ints(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6);
    /// ```
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.ncols(), self.nrows(), |i, j| self[(j, i)].clone())
    }

    /// Place `rhs` to the right of `self`; heights must match.
    ///
    /// ```
    /// use rowspace::Matrix;
    /// let a = Matrix::from_ints(2, 1, &[1, 2]).unwrap();
    /// let b = Matrix::identity(2);
    /// let ab = a.augment_cols(&b).unwrap();
    /// assert_eq!(ab, Matrix::from_ints(2, 3, &[1, 1, 0, 2, 0, 1]).unwrap());
    /// ```
    pub fn augment_cols(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.nrows() != rhs.nrows() {
            return Err(Error::DimensionMismatch {
                op: "augment columns",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let split = self.ncols();
        Ok(Matrix::from_fn(self.nrows(), split + rhs.ncols(), |i, j| {
            if j < split {
                self[(i, j)].clone()
            } else {
                rhs[(i, j - split)].clone()
            }
        }))
    }

    /// Place `rhs` below `self`; widths must match.
    pub fn augment_rows(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.ncols() != rhs.ncols() {
            return Err(Error::DimensionMismatch {
                op: "augment rows",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let mut data = Vec::with_capacity(self.as_slice().len() + rhs.as_slice().len());
        data.extend_from_slice(self.as_slice());
        data.extend_from_slice(rhs.as_slice());
        Matrix::new(self.nrows() + rhs.nrows(), self.ncols(), data)
    }

    /// Split into columns `[0, at)` and `[at, ncols)`.
    ///
    /// Either side may be empty (zero columns).
    ///
    /// ```
    /// use rowspace::Matrix;
    /// let m = Matrix::from_ints(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// let (l, r) = m.partition_cols(1).unwrap();
    /// assert_eq!(l, Matrix::from_ints(2, 1, &[1, 4]).unwrap());
    /// assert_eq!(r, Matrix::from_ints(2, 2, &[2, 3, 5, 6]).unwrap());
    /// assert!(m.partition_cols(4).is_err());
    /// ```
    pub fn partition_cols(&self, at: usize) -> Result<(Matrix, Matrix)> {
        if at > self.ncols() {
            return Err(Error::OutOfBounds {
                index: at,
                len: self.ncols() + 1,
            });
        }
        let left = Matrix::from_fn(self.nrows(), at, |i, j| self[(i, j)].clone());
        let right = Matrix::from_fn(self.nrows(), self.ncols() - at, |i, j| {
            self[(i, j + at)].clone()
        });
        Ok((left, right))
    }

    /// Split into rows `[0, at)` and `[at, nrows)`.
    pub fn partition_rows(&self, at: usize) -> Result<(Matrix, Matrix)> {
        if at > self.nrows() {
            return Err(Error::OutOfBounds {
                index: at,
                len: self.nrows() + 1,
            });
        }
        let (top, bottom) = self.as_slice().split_at(at * self.ncols());
        Ok((
            Matrix::new(at, self.ncols(), top.to_vec())?,
            Matrix::new(self.nrows() - at, self.ncols(), bottom.to_vec())?,
        ))
    }
}
