use core::fmt;
use core::ops::{Index, Neg};

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::traits::MatrixRef;

use super::Matrix;

/// Storage orientation of a [`Vector`] when viewed as a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `1 x n`.
    Row,
    /// `n x 1`.
    Column,
}

/// A matrix degenerate in one dimension.
///
/// Entries are addressed by a single index regardless of orientation, and
/// equality ignores orientation. Through [`MatrixRef`] the vector can be
/// used wherever a matrix view is accepted without copying.
///
/// ```
/// use rowspace::{Orientation, Vector};
///
/// let v = Vector::from_ints(&[1, 2, 3], Orientation::Column);
/// assert_eq!(v.dim(), 3);
/// assert_eq!(v[1], 2);
/// assert_eq!(v.dot(&v).unwrap(), 14);
/// assert_eq!(v.to_string(), "<1, 2, 3>");
/// ```
#[derive(Debug, Clone)]
pub struct Vector {
    data: Vec<Scalar>,
    orientation: Orientation,
}

impl Vector {
    /// Create a vector from its entries.
    pub fn new(data: Vec<Scalar>, orientation: Orientation) -> Self {
        Self { data, orientation }
    }

    /// Exact vector from integers.
    pub fn from_ints(values: &[i64], orientation: Orientation) -> Self {
        Self::new(values.iter().map(|&n| Scalar::int(n)).collect(), orientation)
    }

    /// Floating vector.
    pub fn from_f64s(values: &[f64], orientation: Orientation) -> Self {
        Self::new(values.iter().map(|&x| Scalar::float(x)).collect(), orientation)
    }

    /// Exact zero vector of dimension `dim`.
    pub fn zeros(dim: usize, orientation: Orientation) -> Self {
        Self::new(vec![Scalar::zero(); dim], orientation)
    }

    /// View a `1 x n` or `n x 1` matrix as a vector.
    ///
    /// A `1 x 1` matrix becomes a column vector.
    pub fn from_matrix(m: &Matrix) -> Result<Self> {
        let orientation = if m.ncols() == 1 {
            Orientation::Column
        } else if m.nrows() == 1 {
            Orientation::Row
        } else {
            return Err(Error::InvalidArgument("matrix is not a row or column vector"));
        };
        Ok(Self::new(m.as_slice().to_vec(), orientation))
    }

    /// Number of entries.
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Same entries in the given orientation.
    pub fn with_orientation(&self, orientation: Orientation) -> Vector {
        Self::new(self.data.clone(), orientation)
    }

    /// Bounds-checked entry access.
    pub fn entry(&self, i: usize) -> Result<&Scalar> {
        self.data.get(i).ok_or(Error::OutOfBounds {
            index: i,
            len: self.dim(),
        })
    }

    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Scalar> {
        self.data.iter()
    }

    /// Copy into a `1 x n` or `n x 1` matrix according to orientation.
    pub fn to_matrix(&self) -> Matrix {
        Matrix::from_ref(self)
    }

    /// Whether every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Scalar::is_zero)
    }

    /// Multiply every entry by `s`.
    pub fn scale(&self, s: &Scalar) -> Vector {
        Self::new(self.data.iter().map(|x| x * s).collect(), self.orientation)
    }

    fn check_dim(&self, rhs: &Vector, op: &'static str) -> Result<()> {
        if self.dim() != rhs.dim() {
            return Err(Error::DimensionMismatch {
                op,
                lhs: (self.dim(), 1),
                rhs: (rhs.dim(), 1),
            });
        }
        Ok(())
    }

    /// Entry-wise sum; keeps `self`'s orientation.
    pub fn try_add(&self, rhs: &Vector) -> Result<Vector> {
        self.check_dim(rhs, "vector add")?;
        let data = self.data.iter().zip(&rhs.data).map(|(a, b)| a + b).collect();
        Ok(Self::new(data, self.orientation))
    }

    /// Entry-wise difference; keeps `self`'s orientation.
    pub fn try_sub(&self, rhs: &Vector) -> Result<Vector> {
        self.check_dim(rhs, "vector subtract")?;
        let data = self.data.iter().zip(&rhs.data).map(|(a, b)| a - b).collect();
        Ok(Self::new(data, self.orientation))
    }

    /// Dot product.
    pub fn dot(&self, rhs: &Vector) -> Result<Scalar> {
        self.check_dim(rhs, "dot")?;
        Ok(self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| a * b)
            .reduce(|acc, x| acc + x)
            .unwrap_or_else(Scalar::zero))
    }

    /// Projection of `other` onto the line through `self`:
    /// `(self·other / self·self) · self`.
    ///
    /// ```
    /// use rowspace::{Orientation, Vector};
    /// let x = Vector::from_ints(&[2, 0], Orientation::Column);
    /// let v = Vector::from_ints(&[3, 4], Orientation::Column);
    /// assert_eq!(x.project(&v).unwrap(), Vector::from_ints(&[3, 0], Orientation::Column));
    /// ```
    pub fn project(&self, other: &Vector) -> Result<Vector> {
        let coeff = self.dot(other)?.try_div(&self.dot(self)?)?;
        Ok(self.scale(&coeff))
    }

    /// Unit vector in the direction of `self`.
    pub fn normalize(&self) -> Result<Vector> {
        let norm = self.dot(self)?.sqrt()?;
        if norm.is_zero() {
            return Err(Error::InvalidArgument("cannot normalize a zero vector"));
        }
        let inv = norm.recip()?;
        Ok(self.scale(&inv))
    }
}

// ── Index / MatrixRef ───────────────────────────────────────────────

impl Index<usize> for Vector {
    type Output = Scalar;

    #[inline]
    fn index(&self, i: usize) -> &Scalar {
        &self.data[i]
    }
}

impl MatrixRef for Vector {
    #[inline]
    fn nrows(&self) -> usize {
        match self.orientation {
            Orientation::Row => 1,
            Orientation::Column => self.dim(),
        }
    }

    #[inline]
    fn ncols(&self) -> usize {
        match self.orientation {
            Orientation::Row => self.dim(),
            Orientation::Column => 1,
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &Scalar {
        &self.data[row + col]
    }
}

// ── Operators / equality ────────────────────────────────────────────

impl Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(self.data.iter().map(|x| -x).collect(), self.orientation)
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool {
        self.data == other.data
    }
}

impl From<Vector> for Matrix {
    fn from(v: Vector) -> Self {
        v.to_matrix()
    }
}

impl TryFrom<&Matrix> for Vector {
    type Error = Error;

    fn try_from(m: &Matrix) -> Result<Self> {
        Vector::from_matrix(m)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, s) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{s}")?;
        }
        write!(f, ">")
    }
}
