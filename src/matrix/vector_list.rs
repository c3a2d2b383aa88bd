use core::fmt;
use core::ops::Index;

use crate::error::{Error, Result};

use super::vector::Vector;
use super::Matrix;

/// Ordered sequence of vectors sharing one dimension.
///
/// Lists built by callers are non-empty; the subspace queries may return an
/// empty list (for example the null space of an injective map), which still
/// records its dimension.
///
/// ```
/// use rowspace::{Orientation, Vector, VectorList};
///
/// let list = VectorList::new(vec![
///     Vector::from_ints(&[1, 0], Orientation::Column),
///     Vector::from_ints(&[0, 1], Orientation::Column),
/// ])
/// .unwrap();
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.dim(), 2);
/// assert_eq!(list.to_string(), "{ <1, 0>,\n  <0, 1> }");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VectorList {
    vectors: Vec<Vector>,
    dim: usize,
}

impl VectorList {
    /// Create a list from at least one vector, all of equal dimension.
    pub fn new(vectors: Vec<Vector>) -> Result<Self> {
        let Some(first) = vectors.first() else {
            return Err(Error::InvalidArgument("vector list cannot be empty"));
        };
        let dim = first.dim();
        if vectors.iter().any(|v| v.dim() != dim) {
            return Err(Error::InvalidArgument("vectors in a list must share one dimension"));
        }
        Ok(Self { vectors, dim })
    }

    /// An empty list of `dim`-dimensional vectors.
    pub fn empty(dim: usize) -> Self {
        Self {
            vectors: Vec::new(),
            dim,
        }
    }

    /// Build from vectors already known to have dimension `dim`.
    pub(crate) fn from_parts(vectors: Vec<Vector>, dim: usize) -> Self {
        debug_assert!(vectors.iter().all(|v| v.dim() == dim));
        Self { vectors, dim }
    }

    /// Number of vectors.
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Shared dimension of the vectors.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Bounds-checked vector access.
    pub fn entry(&self, i: usize) -> Result<&Vector> {
        self.vectors.get(i).ok_or(Error::OutOfBounds {
            index: i,
            len: self.len(),
        })
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Vector> {
        self.vectors.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vector] {
        &self.vectors
    }

    /// Matrix with one column per vector (`dim x len`).
    pub fn to_matrix(&self) -> Matrix {
        Matrix::from_columns(self)
    }

    /// Every vector scaled to unit length.
    ///
    /// Fails if any vector is zero.
    pub fn normalize(&self) -> Result<VectorList> {
        let vectors = self
            .vectors
            .iter()
            .map(Vector::normalize)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_parts(vectors, self.dim))
    }
}

impl Index<usize> for VectorList {
    type Output = Vector;

    #[inline]
    fn index(&self, i: usize) -> &Vector {
        &self.vectors[i]
    }
}

impl<'a> IntoIterator for &'a VectorList {
    type Item = &'a Vector;
    type IntoIter = core::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

/// One vector per line inside `"{ ... }"`, entries aligned by position.
impl fmt::Display for VectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{{ }}");
        }
        let cells: Vec<Vec<String>> = self
            .vectors
            .iter()
            .map(|v| v.iter().map(ToString::to_string).collect())
            .collect();
        let mut widths = vec![0usize; self.dim];
        for row in &cells {
            for (d, cell) in row.iter().enumerate() {
                widths[d] = widths[d].max(cell.len());
            }
        }

        for (k, row) in cells.iter().enumerate() {
            write!(f, "{}<", if k == 0 { "{ " } else { "  " })?;
            for (d, cell) in row.iter().enumerate() {
                if d > 0 {
                    write!(f, ", ")?;
                }
                if d + 1 == row.len() {
                    write!(f, "{cell}")?;
                } else {
                    write!(f, "{cell:<width$}", width = widths[d])?;
                }
            }
            if k + 1 == cells.len() {
                write!(f, "> }}")?;
            } else {
                writeln!(f, ">,")?;
            }
        }
        Ok(())
    }
}
