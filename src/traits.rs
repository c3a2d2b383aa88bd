use crate::scalar::Scalar;

/// Read-only access to a matrix-like value.
///
/// Lets algorithms treat a [`Matrix`](crate::Matrix) and a
/// [`Vector`](crate::Vector) uniformly: a vector reports a `1×n` or `n×1`
/// shape depending on its orientation without copying its entries.
pub trait MatrixRef {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &Scalar;

    /// Whether every entry is an exact rational.
    fn is_exact(&self) -> bool {
        (0..self.nrows()).all(|i| (0..self.ncols()).all(|j| self.get(i, j).is_exact()))
    }
}
