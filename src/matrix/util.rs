use core::fmt;

use crate::scalar::Scalar;

use super::Matrix;

// ── Map / conversion ────────────────────────────────────────────────

impl Matrix {
    /// Apply a function to every entry, producing a new matrix.
    pub fn map(&self, f: impl Fn(&Scalar) -> Scalar) -> Matrix {
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| f(&self[(i, j)]))
    }

    /// Copy with every entry converted to an exact rational.
    ///
    /// ```
    /// use rowspace::Matrix;
    /// let m = Matrix::from_f64s(1, 2, &[0.5, 0.25]).unwrap().to_exact();
    /// assert!(m.is_exact());
    /// assert_eq!(m.to_string(), "[ 1/2 1/4\n]");
    /// ```
    pub fn to_exact(&self) -> Matrix {
        self.map(Scalar::to_exact)
    }

    /// Copy with every entry converted to floating point.
    pub fn to_inexact(&self) -> Matrix {
        self.map(Scalar::to_inexact)
    }

    /// Whether every entry is exact.
    pub fn is_exact(&self) -> bool {
        self.as_slice().iter().all(Scalar::is_exact)
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Renders one row per line, the first prefixed `"[ "` and the rest
/// `"| "`, columns left-aligned to their widest entry, closed by `"]"`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nrows() == 0 {
            return write!(f, "[ ]");
        }
        let cells: Vec<String> = self.as_slice().iter().map(ToString::to_string).collect();
        let n = self.ncols();
        let mut widths = vec![0usize; n];
        for (k, cell) in cells.iter().enumerate() {
            widths[k % n] = widths[k % n].max(cell.len());
        }

        for i in 0..self.nrows() {
            write!(f, "{}", if i == 0 { "[ " } else { "| " })?;
            for j in 0..n {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:<width$}", cells[i * n + j], width = widths[j])?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
