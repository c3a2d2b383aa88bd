use crate::error::{Error, Result};
use crate::scalar::Scalar;

use super::Matrix;

impl Matrix {
    /// Whether every entry strictly below the main diagonal is zero.
    ///
    /// Defined for rectangular matrices too.
    ///
    /// ```
    /// use rowspace::Matrix;
    /// let u = Matrix::from_ints(2, 2, &[1, 2, 0, 3]).unwrap();
    /// assert!(u.is_upper_triangular());
    /// assert!(!u.is_lower_triangular());
    /// ```
    pub fn is_upper_triangular(&self) -> bool {
        self.below_diagonal().all(|s| s.is_zero())
    }

    /// Whether every entry strictly above the main diagonal is zero.
    pub fn is_lower_triangular(&self) -> bool {
        self.above_diagonal().all(|s| s.is_zero())
    }

    /// Whether the matrix is upper or lower triangular.
    ///
    /// ```
    /// use rowspace::Matrix;
    /// let l = Matrix::from_ints(2, 2, &[1, 0, 2, 3]).unwrap();
    /// assert!(l.is_triangular());
    /// assert!(!Matrix::from_ints(2, 2, &[1, 2, 3, 4]).unwrap().is_triangular());
    /// ```
    pub fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    /// Whether the matrix is both upper and lower triangular.
    pub fn is_diagonal(&self) -> bool {
        self.is_upper_triangular() && self.is_lower_triangular()
    }

    /// Upper-triangular test treating entries within `eps` of zero as zero.
    ///
    /// ```
    /// use rowspace::Matrix;
    /// let a = Matrix::from_f64s(2, 2, &[3.0, 1.0, 1e-8, 1.0]).unwrap();
    /// assert!(!a.is_upper_triangular());
    /// assert!(a.is_upper_triangular_within(1e-6));
    /// ```
    pub fn is_upper_triangular_within(&self, eps: f64) -> bool {
        let zero = Scalar::zero();
        self.below_diagonal().all(|s| s.eq_within(&zero, eps))
    }

    /// Lower-triangular test treating entries within `eps` of zero as zero.
    pub fn is_lower_triangular_within(&self, eps: f64) -> bool {
        let zero = Scalar::zero();
        self.above_diagonal().all(|s| s.eq_within(&zero, eps))
    }

    /// Triangular test (either side) treating entries within `eps` of zero
    /// as zero.
    pub fn is_triangular_within(&self, eps: f64) -> bool {
        self.is_upper_triangular_within(eps) || self.is_lower_triangular_within(eps)
    }

    /// Diagonal test treating entries within `eps` of zero as zero.
    pub fn is_diagonal_within(&self, eps: f64) -> bool {
        self.is_upper_triangular_within(eps) && self.is_lower_triangular_within(eps)
    }

    /// `self - λI` for a square matrix.
    ///
    /// ```
    /// use rowspace::{Matrix, Scalar};
    /// let a = Matrix::from_ints(2, 2, &[2, 1, 0, 3]).unwrap();
    /// let shifted = a.sub_scaled_identity(&Scalar::int(2)).unwrap();
    /// assert_eq!(shifted, Matrix::from_ints(2, 2, &[0, 1, 0, 1]).unwrap());
    /// ```
    pub fn sub_scaled_identity(&self, lambda: &Scalar) -> Result<Matrix> {
        if !self.is_square() {
            return Err(Error::NonSquare {
                nrows: self.nrows(),
                ncols: self.ncols(),
            });
        }
        Ok(Matrix::from_fn(self.nrows(), self.ncols(), |i, j| {
            if i == j {
                &self[(i, j)] - lambda
            } else {
                self[(i, j)].clone()
            }
        }))
    }

    /// Product of the main-diagonal entries.
    pub(crate) fn diagonal_product(&self) -> Option<Scalar> {
        let n = self.nrows().min(self.ncols());
        (0..n).map(|i| self[(i, i)].clone()).reduce(|acc, d| acc * d)
    }

    fn below_diagonal(&self) -> impl Iterator<Item = &Scalar> + '_ {
        (1..self.nrows()).flat_map(move |i| {
            self.row_slice(i)[..i.min(self.ncols())].iter()
        })
    }

    fn above_diagonal(&self) -> impl Iterator<Item = &Scalar> + '_ {
        (0..self.nrows()).flat_map(move |i| {
            let row = self.row_slice(i);
            row[(i + 1).min(row.len())..].iter()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangularity() {
        let l = Matrix::from_ints(3, 3, &[1, 0, 0, 2, 3, 0, 4, 5, 6]).unwrap();
        assert!(l.is_lower_triangular());
        assert!(!l.is_upper_triangular());
        assert!(!l.is_diagonal());

        let d = Matrix::from_ints(2, 2, &[4, 0, 0, 5]).unwrap();
        assert!(d.is_diagonal());
        assert!(d.is_diagonal_within(1e-9));
    }

    #[test]
    fn rectangular_triangularity() {
        let wide = Matrix::from_ints(2, 3, &[1, 2, 3, 0, 4, 5]).unwrap();
        assert!(wide.is_upper_triangular());
        let tall = Matrix::from_ints(3, 2, &[1, 0, 2, 3, 4, 5]).unwrap();
        assert!(tall.is_lower_triangular());
        assert!(!tall.is_upper_triangular());
    }

    #[test]
    fn tolerant_lower() {
        let a = Matrix::from_f64s(2, 2, &[1.0, 2e-7, 3.0, 4.0]).unwrap();
        assert!(!a.is_lower_triangular());
        assert!(a.is_lower_triangular_within(1e-6));
    }

    #[test]
    fn either_triangle() {
        let u = Matrix::from_ints(2, 2, &[1, 2, 0, 3]).unwrap();
        let l = u.transpose();
        assert!(u.is_triangular());
        assert!(l.is_triangular());
        assert!(Matrix::zeros(0, 0).is_triangular());
        assert!(!Matrix::from_ints(3, 3, &[1, 2, 0, 0, 1, 0, 4, 0, 1]).unwrap().is_triangular());

        let nearly = Matrix::from_f64s(2, 2, &[1.0, 5.0, 3e-7, 2.0]).unwrap();
        assert!(!nearly.is_triangular());
        assert!(nearly.is_triangular_within(1e-6));
        assert!(!nearly.is_triangular_within(1e-8));
    }

    #[test]
    fn diagonal_product() {
        let a = Matrix::from_ints(3, 3, &[2, 9, 9, 0, 3, 9, 0, 0, 4]).unwrap();
        assert_eq!(a.diagonal_product().unwrap(), 24);
        assert!(Matrix::zeros(0, 0).diagonal_product().is_none());
    }

    #[test]
    fn shift_requires_square() {
        let a = Matrix::zeros(2, 3);
        assert_eq!(
            a.sub_scaled_identity(&Scalar::one()).unwrap_err(),
            Error::NonSquare { nrows: 2, ncols: 3 }
        );
    }
}
