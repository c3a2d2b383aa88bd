use core::ops::{Add, Mul, Neg, Sub};

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::traits::MatrixRef;

use super::vector::{Orientation, Vector};
use super::Matrix;

// ── Scalar multiply / divide ────────────────────────────────────────

impl Matrix {
    /// Multiply every entry by `s`.
    ///
    /// ```
    /// use rowspace::{Matrix, Scalar};
    /// let m = Matrix::from_ints(1, 2, &[1, 2]).unwrap();
    /// let h = m.scale(&Scalar::ratio(1, 2).unwrap());
    /// assert_eq!(h.to_string(), "[ 1/2 1\n]");
    /// ```
    pub fn scale(&self, s: &Scalar) -> Matrix {
        self.map(|x| x * s)
    }

    /// Divide every entry by `s`.
    pub fn div_scalar(&self, s: &Scalar) -> Result<Matrix> {
        let inv = s.recip()?;
        Ok(self.scale(&inv))
    }
}

// ── Element-wise add / subtract ─────────────────────────────────────

impl Matrix {
    fn zip_with(
        &self,
        rhs: &Matrix,
        op: &'static str,
        f: impl Fn(&Scalar, &Scalar) -> Scalar,
    ) -> Result<Matrix> {
        if self.shape() != rhs.shape() {
            return Err(Error::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let data = self
            .as_slice()
            .iter()
            .zip(rhs.as_slice())
            .map(|(a, b)| f(a, b))
            .collect();
        Matrix::new(self.nrows(), self.ncols(), data)
    }

    /// Element-wise sum; shapes must be identical.
    pub fn try_add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }

    /// Element-wise difference; shapes must be identical.
    pub fn try_sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "subtract", |a, b| a - b)
    }
}

// ── Matrix multiply ─────────────────────────────────────────────────

impl Matrix {
    /// Matrix product `self * rhs`.
    ///
    /// `rhs` may be any matrix-like value, including a [`Vector`] viewed in
    /// its own orientation. Inner dimensions must agree.
    ///
    /// ```
    /// use rowspace::Matrix;
    /// let a = Matrix::from_ints(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// let b = Matrix::from_ints(3, 2, &[7, 8, 9, 10, 11, 12]).unwrap();
    /// let c = a.try_mul(&b).unwrap();
    /// assert_eq!(c, Matrix::from_ints(2, 2, &[58, 64, 139, 154]).unwrap());
    /// assert!(a.try_mul(&a).is_err());
    /// ```
    pub fn try_mul(&self, rhs: &impl MatrixRef) -> Result<Matrix> {
        if self.ncols() != rhs.nrows() {
            return Err(Error::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: (rhs.nrows(), rhs.ncols()),
            });
        }
        Ok(Matrix::from_fn(self.nrows(), rhs.ncols(), |i, j| {
            self.row_slice(i)
                .iter()
                .enumerate()
                .map(|(k, a)| a * rhs.get(k, j))
                .reduce(|acc, x| acc + x)
                .unwrap_or_else(Scalar::zero)
        }))
    }

    /// Product `self * v` as a column vector.
    pub fn mul_vector(&self, v: &Vector) -> Result<Vector> {
        if self.ncols() != v.dim() {
            return Err(Error::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: (v.dim(), 1),
            });
        }
        let product = self.try_mul(&v.with_orientation(Orientation::Column))?;
        Ok(Vector::new(product.as_slice().to_vec(), Orientation::Column))
    }
}

// ── Operators ───────────────────────────────────────────────────────
//
// The operator forms panic on a shape mismatch; the `try_*` methods
// return the error instead.

fn unwrap_shape(result: Result<Matrix>) -> Matrix {
    match result {
        Ok(m) => m,
        Err(e) => panic!("{e}"),
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;
    fn add(self, rhs: &Matrix) -> Matrix {
        unwrap_shape(self.try_add(rhs))
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;
    fn sub(self, rhs: &Matrix) -> Matrix {
        unwrap_shape(self.try_sub(rhs))
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        unwrap_shape(self.try_mul(rhs))
    }
}

impl Mul<&Scalar> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Scalar) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<&Matrix> for &Scalar {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        self.map(|x| -x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(nrows: usize, ncols: usize, v: &[i64]) -> Matrix {
        Matrix::from_ints(nrows, ncols, v).unwrap()
    }

    #[test]
    fn add_sub() {
        let a = m(2, 2, &[1, 2, 3, 4]);
        let b = m(2, 2, &[4, 3, 2, 1]);
        assert_eq!(&a + &b, m(2, 2, &[5, 5, 5, 5]));
        assert_eq!(&a - &b, m(2, 2, &[-3, -1, 1, 3]));
    }

    #[test]
    fn add_shape_mismatch() {
        let a = m(2, 2, &[1, 2, 3, 4]);
        let b = m(1, 2, &[1, 2]);
        assert_eq!(
            a.try_add(&b).unwrap_err(),
            Error::DimensionMismatch { op: "add", lhs: (2, 2), rhs: (1, 2) }
        );
        assert!(a.try_sub(&b).is_err());
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn operator_panics_on_mismatch() {
        let _ = &m(2, 2, &[1, 2, 3, 4]) * &m(3, 1, &[1, 2, 3]);
    }

    #[test]
    fn multiply_identity() {
        let a = m(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(&Matrix::identity(2) * &a, a);
        assert_eq!(&a * &Matrix::identity(3), a);
    }

    #[test]
    fn multiply_keeps_floating_kind() {
        let a = Matrix::from_f64s(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let p = &a * &a;
        assert!(!p[(0, 0)].is_exact());
        assert_eq!(p, Matrix::from_f64s(2, 2, &[7.0, 10.0, 15.0, 22.0]).unwrap());
    }

    #[test]
    fn scalar_multiply_and_divide() {
        let a = m(2, 2, &[2, 4, 6, 8]);
        let half = Scalar::ratio(1, 2).unwrap();
        assert_eq!(&a * &half, m(2, 2, &[1, 2, 3, 4]));
        assert_eq!(a.div_scalar(&Scalar::int(2)).unwrap(), m(2, 2, &[1, 2, 3, 4]));
        assert_eq!(a.div_scalar(&Scalar::zero()).unwrap_err(), Error::DivisionByZero);
        assert_eq!(-&a, m(2, 2, &[-2, -4, -6, -8]));
    }

    #[test]
    fn matrix_vector_product() {
        let a = m(2, 2, &[1, 2, 3, 4]);
        let v = Vector::from_ints(&[1, 1], Orientation::Row);
        let av = a.mul_vector(&v).unwrap();
        assert_eq!(av, Vector::from_ints(&[3, 7], Orientation::Column));
        assert!(a.mul_vector(&Vector::from_ints(&[1], Orientation::Column)).is_err());
    }
}
