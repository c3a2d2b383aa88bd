use crate::error::{Error, Result};
use crate::matrix::vector::Vector;
use crate::matrix::vector_list::VectorList;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

use super::independence::is_linearly_independent;
use super::reduction::{ef, Reducible};

/// Orthogonalize a list of vectors (classical Gram-Schmidt).
///
/// Output vector `k` is input `k` minus its projections onto the outputs
/// before it. Zero outputs are skipped as projection targets, so a
/// dependent input yields a zero vector in its slot rather than an error.
/// The result is orthogonal but not normalized.
///
/// ```
/// use rowspace::{gram_schmidt, Orientation, Vector, VectorList};
///
/// let e = |v: &[i64]| Vector::from_ints(v, Orientation::Column);
/// let list = VectorList::new(vec![e(&[1, 1]), e(&[1, 0])]).unwrap();
/// let ortho = gram_schmidt(&list).unwrap();
/// assert_eq!(ortho[0].dot(&ortho[1]).unwrap(), 0);
/// ```
pub fn gram_schmidt(list: &VectorList) -> Result<VectorList> {
    let mut out: Vec<Vector> = Vec::with_capacity(list.len());
    for v in list {
        let mut u = v.clone();
        for earlier in &out {
            if earlier.is_zero() {
                continue;
            }
            u = u.try_sub(&earlier.project(v)?)?;
        }
        out.push(u);
    }
    Ok(VectorList::from_parts(out, list.dim()))
}

// ── QR factorization ────────────────────────────────────────────────

/// `A = QR` with orthonormal columns in `Q` and upper-triangular `R`.
///
/// Built from Gram-Schmidt rather than reflections, so exact input gives
/// an exact factorization: `Q * R` reproduces `A` entry for entry. When a
/// column norm is irrational, `Q` holds the nearest rational and is
/// orthonormal only to within that approximation.
///
/// # Example
///
/// ```
/// use rowspace::{qr_factorize, Matrix};
///
/// let a = Matrix::from_ints(2, 2, &[3, 1, 4, 2]).unwrap();
/// let qr = qr_factorize(&a).unwrap();
/// assert_eq!(qr.r()[(0, 0)], 5);
/// assert!(qr.r().is_upper_triangular());
/// assert_eq!(qr.q() * qr.r(), a);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QrFactorization {
    q: Matrix,
    r: Matrix,
}

impl QrFactorization {
    /// Factor `a`, whose columns must be linearly independent.
    pub fn new(a: &Matrix) -> Result<Self> {
        let columns = a.columns();
        if !is_linearly_independent(&columns) {
            return Err(Error::IncompatibleBasis);
        }
        let q = gram_schmidt(&columns)?.normalize()?.to_matrix();
        let n = a.ncols();
        let floating = a.is_floating();

        let mut coefficients: Vec<Vec<Scalar>> = Vec::with_capacity(n);
        for (k, a_k) in columns.iter().enumerate() {
            let column = if floating {
                // r_ik = q_i · a_k; rounding in q never reaches a pivot test.
                (0..=k)
                    .map(|i| q.col_vector(i).dot(a_k))
                    .collect::<Result<Vec<_>>>()?
            } else {
                // Solve [q_0 .. q_k] x = a_k so that Q * R reproduces A
                // exactly even when Q holds rounded norms.
                let (basis, _) = q.partition_cols(k + 1)?;
                let system = basis.augment_cols(&a_k.to_matrix())?;
                let solved = ef(&system).into_reduced_matrix();
                (0..=k).map(|i| solved[(i, k + 1)].clone()).collect()
            };
            coefficients.push(column);
        }
        let zero = if floating {
            Scalar::float(0.0)
        } else {
            Scalar::zero()
        };
        let r = Matrix::from_fn(n, n, |i, k| {
            if i <= k {
                coefficients[k][i].clone()
            } else {
                zero.clone()
            }
        });
        Ok(Self { q, r })
    }

    /// The orthonormal factor (`nrows x ncols`).
    #[inline]
    pub fn q(&self) -> &Matrix {
        &self.q
    }

    /// The upper-triangular factor (`ncols x ncols`).
    #[inline]
    pub fn r(&self) -> &Matrix {
        &self.r
    }

    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.q, self.r)
    }
}

/// QR factorization. Fails with [`Error::IncompatibleBasis`] when the
/// columns are linearly dependent.
pub fn qr_factorize<R: Reducible + ?Sized>(input: &R) -> Result<QrFactorization> {
    QrFactorization::new(input.matrix())
}

// ── QR algorithm ────────────────────────────────────────────────────

/// Settings for the unshifted QR eigenvalue iteration.
#[derive(Debug, Clone, Copy)]
pub struct QrIterationSettings {
    /// Largest sub-diagonal magnitude accepted as converged.
    pub tol: f64,
    /// Maximum number of `A <- RQ` steps.
    pub max_iter: usize,
}

impl Default for QrIterationSettings {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iter: 500,
        }
    }
}

/// Upper-triangular matrix similar to `a`, with the eigenvalues of `a` on
/// its diagonal, using default settings.
///
/// ```
/// use rowspace::{qr_algorithm, Matrix};
///
/// let a = Matrix::from_ints(2, 2, &[2, 1, 1, 2]).unwrap();
/// let t = qr_algorithm(&a).unwrap();
/// assert!(t.is_upper_triangular());
/// assert!((t[(0, 0)].to_f64() - 3.0).abs() < 1e-5);
/// assert!((t[(1, 1)].to_f64() - 1.0).abs() < 1e-5);
/// ```
pub fn qr_algorithm<R: Reducible + ?Sized>(input: &R) -> Result<Matrix> {
    qr_algorithm_with(input, &QrIterationSettings::default())
}

/// QR iteration with explicit settings.
///
/// Iterates in floating point until everything below the diagonal is
/// within `settings.tol` of zero, then clears the sub-diagonal and returns
/// an exact matrix.
///
/// Fails with [`Error::NonSquare`], with [`Error::ConvergenceFailure`]
/// after `settings.max_iter` steps (complex eigenvalues never converge),
/// and with [`Error::IncompatibleBasis`] if an iterate is singular.
pub fn qr_algorithm_with<R: Reducible + ?Sized>(
    input: &R,
    settings: &QrIterationSettings,
) -> Result<Matrix> {
    let a = input.matrix();
    if !a.is_square() {
        return Err(Error::NonSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }

    let mut current = a.to_inexact();
    let mut iterations = 0;
    while !current.is_upper_triangular_within(settings.tol) {
        if iterations == settings.max_iter {
            log::warn!("QR iteration gave up after {iterations} iterations");
            return Err(Error::ConvergenceFailure { iterations });
        }
        let qr = QrFactorization::new(&current)?;
        current = qr.r().try_mul(qr.q())?;
        iterations += 1;
    }
    log::debug!("QR iteration converged after {iterations} iterations");

    let n = current.nrows();
    Ok(Matrix::from_fn(n, n, |i, j| {
        if i > j {
            Scalar::zero()
        } else {
            current[(i, j)].to_exact()
        }
    }))
}

impl Matrix {
    /// QR factorization. See [`QrFactorization`].
    pub fn qr(&self) -> Result<QrFactorization> {
        QrFactorization::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::vector::Orientation;
    use approx::assert_abs_diff_eq;

    fn col(v: &[i64]) -> Vector {
        Vector::from_ints(v, Orientation::Column)
    }

    fn m(rows: usize, cols: usize, v: &[i64]) -> Matrix {
        Matrix::from_ints(rows, cols, v).unwrap()
    }

    #[test]
    fn gram_schmidt_is_orthogonal() {
        let list = VectorList::new(vec![col(&[1, 1, 0]), col(&[1, 0, 1]), col(&[0, 1, 1])]).unwrap();
        let ortho = gram_schmidt(&list).unwrap();
        assert_eq!(ortho[0], col(&[1, 1, 0]));
        for i in 0..3 {
            for j in 0..i {
                assert_eq!(ortho[i].dot(&ortho[j]).unwrap(), 0);
            }
        }
    }

    #[test]
    fn gram_schmidt_dependent_input_gives_zero() {
        let list = VectorList::new(vec![col(&[1, 2]), col(&[2, 4]), col(&[0, 1])]).unwrap();
        let ortho = gram_schmidt(&list).unwrap();
        assert!(ortho[1].is_zero());
        assert!(!ortho[2].is_zero());
        assert_eq!(ortho[0].dot(&ortho[2]).unwrap(), 0);
    }

    #[test]
    fn qr_exact_factors() {
        let a = m(2, 2, &[3, 1, 4, 2]);
        let qr = qr_factorize(&a).unwrap();
        let fifth = |n| Scalar::ratio(n, 5).unwrap();
        assert_eq!(
            qr.q(),
            &Matrix::new(2, 2, vec![fifth(3), fifth(-4), fifth(4), fifth(3)]).unwrap()
        );
        assert_eq!(
            qr.r(),
            &Matrix::new(2, 2, vec![Scalar::int(5), fifth(11), Scalar::zero(), fifth(2)]).unwrap()
        );
    }

    #[test]
    fn qr_tall_matrix() {
        let a = m(3, 2, &[1, 1, 0, 1, 1, 0]);
        let qr = a.qr().unwrap();
        assert_eq!(qr.q().shape(), (3, 2));
        assert_eq!(qr.r().shape(), (2, 2));
        assert!(qr.r().is_upper_triangular());
        assert_eq!(qr.q().try_mul(qr.r()).unwrap(), a);
    }

    #[test]
    fn qr_floating_reconstructs() {
        let a = Matrix::from_f64s(3, 3, &[12.0, -51.0, 4.0, 6.0, 167.0, -68.0, -4.0, 24.0, -41.0])
            .unwrap();
        let (q, r) = qr_factorize(&a).unwrap().into_parts();
        let back = q.try_mul(&r).unwrap();
        for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
            assert_abs_diff_eq!(x.to_f64(), y.to_f64(), epsilon = 1e-9);
        }
        assert_abs_diff_eq!(r[(0, 0)].to_f64(), 14.0, epsilon = 1e-9);
        let qtq = q.transpose().try_mul(&q).unwrap();
        let off = qtq.sub_scaled_identity(&Scalar::float(1.0)).unwrap();
        assert!(off.as_slice().iter().all(Scalar::is_zero));
    }

    #[test]
    fn qr_floating_large_magnitude() {
        let a = Matrix::from_f64s(3, 2, &[1e7, 2e7, 3e7, 5e7, 7e7, 11e7]).unwrap();
        let qr = qr_factorize(&a).unwrap();
        assert!(qr.r()[(0, 0)].to_f64() > 0.0);
        assert!(qr.r()[(1, 1)].to_f64() > 0.0);
        let back = qr.q().try_mul(qr.r()).unwrap();
        for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
            assert_abs_diff_eq!(x.to_f64() / 1e7, y.to_f64() / 1e7, epsilon = 1e-9);
        }
    }

    #[test]
    fn qr_floating_repeated_factorization() {
        // A <- RQ keeps Q * R = A at every step.
        let mut current = m(3, 3, &[2, -1, 0, -1, 2, -1, 0, -1, 2]).to_inexact();
        for _ in 0..40 {
            let (q, r) = qr_factorize(&current).unwrap().into_parts();
            let back = q.try_mul(&r).unwrap();
            for (x, y) in back.as_slice().iter().zip(current.as_slice()) {
                assert_abs_diff_eq!(x.to_f64(), y.to_f64(), epsilon = 1e-9);
            }
            current = r.try_mul(&q).unwrap();
        }
    }

    #[test]
    fn qr_algorithm_floating_input() {
        let a = m(3, 3, &[2, -1, 0, -1, 2, -1, 0, -1, 2]).to_inexact();
        let t = qr_algorithm(&a).unwrap();
        let s = 2f64.sqrt();
        for (i, want) in [2.0 + s, 2.0, 2.0 - s].into_iter().enumerate() {
            assert_abs_diff_eq!(t[(i, i)].to_f64(), want, epsilon = 1e-5);
        }
    }

    #[test]
    fn qr_algorithm_large_entries() {
        let a = m(2, 2, &[40_000, 10_000, 20_000, 30_000]);
        let t = qr_algorithm(&a).unwrap();
        assert!(t.is_upper_triangular());
        assert_abs_diff_eq!(t[(0, 0)].to_f64(), 50_000.0, epsilon = 1e-3);
        assert_abs_diff_eq!(t[(1, 1)].to_f64(), 20_000.0, epsilon = 1e-3);
    }

    #[test]
    fn qr_dependent_columns() {
        let a = m(2, 2, &[1, 2, 2, 4]);
        assert_eq!(qr_factorize(&a).unwrap_err(), Error::IncompatibleBasis);
        assert_eq!(m(2, 3, &[1, 0, 0, 0, 1, 0]).qr().unwrap_err(), Error::IncompatibleBasis);
    }

    #[test]
    fn qr_algorithm_symmetric() {
        let a = m(3, 3, &[2, -1, 0, -1, 2, -1, 0, -1, 2]);
        let t = qr_algorithm(&a).unwrap();
        assert!(t.is_exact());
        assert!(t.is_upper_triangular());
        let mut eig: Vec<f64> = (0..3).map(|i| t[(i, i)].to_f64()).collect();
        eig.sort_by(|x, y| x.total_cmp(y));
        let s = 2f64.sqrt();
        for (got, want) in eig.iter().zip([2.0 - s, 2.0, 2.0 + s]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-5);
        }
    }

    #[test]
    fn qr_algorithm_already_triangular() {
        let a = m(2, 2, &[4, 1, 0, 3]);
        assert_eq!(qr_algorithm(&a).unwrap(), a);
    }

    #[test]
    fn qr_algorithm_rotation_does_not_converge() {
        let rotation = m(2, 2, &[0, -1, 1, 0]);
        let settings = QrIterationSettings {
            max_iter: 20,
            ..Default::default()
        };
        assert_eq!(
            qr_algorithm_with(&rotation, &settings).unwrap_err(),
            Error::ConvergenceFailure { iterations: 20 }
        );
    }

    #[test]
    fn qr_algorithm_errors() {
        assert!(matches!(
            qr_algorithm(&Matrix::zeros(2, 3)),
            Err(Error::NonSquare { .. })
        ));
        let singular = m(2, 2, &[1, 1, 1, 1]);
        assert_eq!(qr_algorithm(&singular).unwrap_err(), Error::IncompatibleBasis);
    }
}
