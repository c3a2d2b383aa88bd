use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};

use crate::error::{Error, Result};

/// Comparison tolerance of inexact scalars.
///
/// Two floating values at most this far apart compare equal, and a float is
/// promoted to the simplest rational within this distance of it.
pub const DEFAULT_EPSILON: f64 = 1e-9;

const MAX_CONTINUED_FRACTION_TERMS: usize = 64;

/// A matrix element: an exact reduced fraction or a floating value.
///
/// Exactness is dominant. Combining an `Exact` and an `Inexact` operand
/// promotes the floating side to its rational equivalent and produces an
/// `Exact` result; only `Inexact ⊗ Inexact` stays floating.
///
/// ```
/// use rowspace::Scalar;
///
/// let third = Scalar::ratio(1, 3).unwrap();
/// let half = Scalar::float(0.5);
/// let sum = &third + &half;
/// assert!(sum.is_exact());
/// assert_eq!(sum, Scalar::ratio(5, 6).unwrap());
/// assert_eq!(sum.to_string(), "5/6");
/// ```
#[derive(Debug, Clone)]
pub enum Scalar {
    /// Reduced numerator/denominator pair.
    Exact(BigRational),
    /// Floating value compared within [`DEFAULT_EPSILON`].
    Inexact(f64),
}

// ── Constructors ────────────────────────────────────────────────────

impl Scalar {
    /// Exact integer.
    pub fn int(n: i64) -> Self {
        Scalar::Exact(BigRational::from_integer(BigInt::from(n)))
    }

    /// Exact fraction `num / den`, reduced.
    ///
    /// ```
    /// use rowspace::Scalar;
    /// assert_eq!(Scalar::ratio(2, -4).unwrap().to_string(), "-1/2");
    /// assert!(Scalar::ratio(1, 0).is_err());
    /// ```
    pub fn ratio(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Scalar::Exact(BigRational::new(
            BigInt::from(num),
            BigInt::from(den),
        )))
    }

    /// Floating scalar.
    pub fn float(x: f64) -> Self {
        Scalar::Inexact(x)
    }

    /// Exact scalar approximating `x` within [`DEFAULT_EPSILON`].
    ///
    /// ```
    /// use rowspace::Scalar;
    /// assert_eq!(Scalar::exact_from_f64(0.75).to_string(), "3/4");
    /// assert_eq!(Scalar::exact_from_f64(0.1).to_string(), "1/10");
    /// ```
    pub fn exact_from_f64(x: f64) -> Self {
        Scalar::Exact(rational_from_f64(x, DEFAULT_EPSILON))
    }

    /// Exact zero.
    pub fn zero() -> Self {
        Scalar::Exact(BigRational::zero())
    }

    /// Exact one.
    pub fn one() -> Self {
        Scalar::Exact(BigRational::one())
    }

    /// Zero of the same kind as `self`.
    pub fn zero_like(&self) -> Self {
        match self {
            Scalar::Exact(_) => Scalar::zero(),
            Scalar::Inexact(_) => Scalar::Inexact(0.0),
        }
    }

    /// One of the same kind as `self`.
    pub fn one_like(&self) -> Self {
        match self {
            Scalar::Exact(_) => Scalar::one(),
            Scalar::Inexact(_) => Scalar::Inexact(1.0),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::int(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::int(i64::from(n))
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Inexact(x)
    }
}

impl From<BigRational> for Scalar {
    fn from(r: BigRational) -> Self {
        Scalar::Exact(r)
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::zero()
    }
}

// ── Queries and conversions ─────────────────────────────────────────

impl Scalar {
    /// Whether this is an exact rational.
    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Scalar::Exact(_))
    }

    /// Zero test using the scalar's own equality semantics.
    pub fn is_zero(&self) -> bool {
        match self {
            Scalar::Exact(r) => r.is_zero(),
            Scalar::Inexact(x) => x.abs() <= DEFAULT_EPSILON,
        }
    }

    /// One test using the scalar's own equality semantics.
    pub fn is_one(&self) -> bool {
        match self {
            Scalar::Exact(r) => r.is_one(),
            Scalar::Inexact(x) => (x - 1.0).abs() <= DEFAULT_EPSILON,
        }
    }

    /// Nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        match self {
            Scalar::Exact(r) => ratio_to_f64(r),
            Scalar::Inexact(x) => *x,
        }
    }

    /// The rational value, promoting a floating scalar.
    pub fn exact_value(&self) -> BigRational {
        match self {
            Scalar::Exact(r) => r.clone(),
            Scalar::Inexact(x) => rational_from_f64(*x, DEFAULT_EPSILON),
        }
    }

    /// Exact copy of this scalar.
    pub fn to_exact(&self) -> Scalar {
        Scalar::Exact(self.exact_value())
    }

    /// Floating copy of this scalar.
    pub fn to_inexact(&self) -> Scalar {
        Scalar::Inexact(self.to_f64())
    }

    /// Equality within `eps` for floating operands; exact pairs also
    /// accept a difference below `eps`.
    pub fn eq_within(&self, other: &Scalar, eps: f64) -> bool {
        match (self, other) {
            (Scalar::Exact(a), Scalar::Exact(b)) => a == b || ratio_to_f64(&(a - b)).abs() < eps,
            _ => (self.to_f64() - other.to_f64()).abs() < eps,
        }
    }

    /// Equality to a literal integer.
    ///
    /// ```
    /// use rowspace::Scalar;
    /// assert!(Scalar::ratio(4, 2).unwrap().eq_int(2));
    /// assert!(Scalar::float(2.0 + 1e-12).eq_int(2));
    /// ```
    pub fn eq_int(&self, n: i64) -> bool {
        match self {
            Scalar::Exact(r) => r.is_integer() && *r.numer() == BigInt::from(n),
            Scalar::Inexact(x) => (x - n as f64).abs() <= DEFAULT_EPSILON,
        }
    }

    /// Equality to a literal integer within `eps` for floating scalars.
    pub fn eq_int_within(&self, n: i64, eps: f64) -> bool {
        match self {
            Scalar::Exact(_) => self.eq_int(n),
            Scalar::Inexact(x) => (x - n as f64).abs() < eps,
        }
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl Scalar {
    fn combine(
        &self,
        rhs: &Scalar,
        exact: impl FnOnce(&BigRational, &BigRational) -> BigRational,
        float: impl FnOnce(f64, f64) -> f64,
    ) -> Scalar {
        match (self, rhs) {
            (Scalar::Exact(a), Scalar::Exact(b)) => Scalar::Exact(exact(a, b)),
            (Scalar::Inexact(a), Scalar::Inexact(b)) => Scalar::Inexact(float(*a, *b)),
            (Scalar::Exact(a), Scalar::Inexact(b)) => {
                Scalar::Exact(exact(a, &rational_from_f64(*b, DEFAULT_EPSILON)))
            }
            (Scalar::Inexact(a), Scalar::Exact(b)) => {
                Scalar::Exact(exact(&rational_from_f64(*a, DEFAULT_EPSILON), b))
            }
        }
    }

    /// Division, or `None` when the divisor is zero.
    ///
    /// A floating divisor paired with an exact dividend is promoted first,
    /// so a float within [`DEFAULT_EPSILON`] of zero is rejected there.
    pub fn checked_div(&self, rhs: &Scalar) -> Option<Scalar> {
        match (self, rhs) {
            (Scalar::Inexact(a), Scalar::Inexact(b)) => {
                (*b != 0.0).then(|| Scalar::Inexact(a / b))
            }
            _ => {
                let den = rhs.exact_value();
                if den.is_zero() {
                    None
                } else {
                    Some(Scalar::Exact(self.exact_value() / den))
                }
            }
        }
    }

    /// Division returning [`Error::DivisionByZero`] for a zero divisor.
    pub fn try_div(&self, rhs: &Scalar) -> Result<Scalar> {
        self.checked_div(rhs).ok_or(Error::DivisionByZero)
    }

    /// Multiplicative inverse.
    pub fn recip(&self) -> Result<Scalar> {
        self.one_like().try_div(self)
    }

    /// Inverse of a scalar the caller has already tested with `is_zero`.
    pub(crate) fn recip_nonzero(&self) -> Scalar {
        debug_assert!(!self.is_zero(), "reciprocal of a zero scalar");
        match self {
            Scalar::Exact(r) => Scalar::Exact(r.recip()),
            Scalar::Inexact(x) => Scalar::Inexact(x.recip()),
        }
    }

    /// Square root.
    ///
    /// Exact perfect squares stay exact; other exact values are promoted
    /// back from the floating root, so the result is still `Exact`.
    ///
    /// ```
    /// use rowspace::Scalar;
    /// assert_eq!(Scalar::ratio(9, 4).unwrap().sqrt().unwrap().to_string(), "3/2");
    /// assert!(Scalar::int(-1).sqrt().is_err());
    /// ```
    pub fn sqrt(&self) -> Result<Scalar> {
        match self {
            Scalar::Inexact(x) => {
                if *x < 0.0 && x.abs() > DEFAULT_EPSILON {
                    return Err(Error::InvalidArgument("square root of a negative scalar"));
                }
                Ok(Scalar::Inexact(x.max(0.0).sqrt()))
            }
            Scalar::Exact(r) => {
                if r.is_negative() {
                    return Err(Error::InvalidArgument("square root of a negative scalar"));
                }
                let num_root = r.numer().sqrt();
                let den_root = r.denom().sqrt();
                if &num_root * &num_root == *r.numer() && &den_root * &den_root == *r.denom() {
                    return Ok(Scalar::Exact(BigRational::new(num_root, den_root)));
                }
                let root = ratio_to_f64(r).sqrt();
                Ok(Scalar::Exact(rational_from_f64(
                    root,
                    f64::EPSILON * root.max(1.0),
                )))
            }
        }
    }
}

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $exact:expr, $float:expr) => {
        impl $trait<&Scalar> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                self.combine(rhs, $exact, $float)
            }
        }

        impl $trait<Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                (&self).$method(rhs)
            }
        }

        impl $trait<Scalar> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                self.$method(&rhs)
            }
        }
    };
}

impl_scalar_binop!(Add, add, |a, b| a + b, |a, b| a + b);
impl_scalar_binop!(Sub, sub, |a, b| a - b, |a, b| a - b);
impl_scalar_binop!(Mul, mul, |a, b| a * b, |a, b| a * b);

impl Div<&Scalar> for &Scalar {
    type Output = Scalar;

    /// Panics on a zero divisor; see [`Scalar::try_div`].
    fn div(self, rhs: &Scalar) -> Scalar {
        match self.checked_div(rhs) {
            Some(q) => q,
            None => panic!("attempt to divide a scalar by zero"),
        }
    }
}

impl Div<Scalar> for Scalar {
    type Output = Scalar;
    fn div(self, rhs: Scalar) -> Scalar {
        &self / &rhs
    }
}

impl Neg for &Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        match self {
            Scalar::Exact(r) => Scalar::Exact(-r),
            Scalar::Inexact(x) => Scalar::Inexact(-x),
        }
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        -&self
    }
}

// ── Equality ────────────────────────────────────────────────────────

impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Exact(a), Scalar::Exact(b)) => a == b,
            (Scalar::Inexact(a), Scalar::Inexact(b)) => (a - b).abs() <= DEFAULT_EPSILON,
            (Scalar::Exact(a), Scalar::Inexact(b)) | (Scalar::Inexact(b), Scalar::Exact(a)) => {
                *a == rational_from_f64(*b, DEFAULT_EPSILON)
            }
        }
    }
}

impl PartialEq<i64> for Scalar {
    fn eq(&self, other: &i64) -> bool {
        self.eq_int(*other)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scalar::Exact(r) if r.numer().is_zero() => "0".to_string(),
            Scalar::Exact(r) if r.denom().is_one() => r.numer().to_string(),
            Scalar::Exact(r) => format!("{}/{}", r.numer(), r.denom()),
            Scalar::Inexact(x) => format!("{x:?}"),
        };
        f.pad(&s)
    }
}

// ── Float ↔ rational ────────────────────────────────────────────────

pub(crate) fn ratio_to_f64(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

/// Simplest continued-fraction convergent of `x` within `tol`.
pub(crate) fn rational_from_f64(x: f64, tol: f64) -> BigRational {
    if !x.is_finite() {
        log::warn!("non-finite value {x} promoted to exact zero");
        return BigRational::zero();
    }
    let target = x.abs();
    let (mut h_prev, mut h) = (BigInt::zero(), BigInt::one());
    let (mut k_prev, mut k) = (BigInt::one(), BigInt::zero());
    let mut rem = target;
    for _ in 0..MAX_CONTINUED_FRACTION_TERMS {
        let whole = rem.floor();
        let Some(a) = BigInt::from_f64(whole) else {
            break;
        };
        let h_next = &a * &h + &h_prev;
        let k_next = &a * &k + &k_prev;
        h_prev = core::mem::replace(&mut h, h_next);
        k_prev = core::mem::replace(&mut k, k_next);

        let approx = ratio_to_f64(&BigRational::new(h.clone(), k.clone()));
        let frac = rem - whole;
        if (approx - target).abs() <= tol || frac == 0.0 {
            break;
        }
        rem = 1.0 / frac;
    }
    if k.is_zero() {
        return BigRational::zero();
    }
    let r = BigRational::new(h, k);
    if x < 0.0 {
        -r
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Scalar {
        Scalar::ratio(n, d).unwrap()
    }

    #[test]
    fn exact_arithmetic_reduces() {
        assert_eq!(&q(1, 2) + &q(1, 3), q(5, 6));
        assert_eq!(&q(1, 2) - &q(1, 3), q(1, 6));
        assert_eq!(&q(2, 3) * &q(3, 4), q(1, 2));
        assert_eq!(&q(2, 3) / &q(4, 3), q(1, 2));
        assert_eq!(-q(2, 3), q(-2, 3));
    }

    #[test]
    fn inexact_stays_inexact() {
        let s = Scalar::float(0.25) * Scalar::float(4.0);
        assert!(!s.is_exact());
        assert!(s.is_one());
    }

    #[test]
    fn exactness_is_dominant() {
        let cases = [
            &q(1, 2) + &Scalar::float(0.25),
            &Scalar::float(0.25) - &q(1, 2),
            &q(1, 2) * &Scalar::float(0.5),
            &Scalar::float(1.5) / &q(1, 2),
        ];
        for c in &cases {
            assert!(c.is_exact(), "{c:?}");
        }
        assert_eq!(cases[0], q(3, 4));
        assert_eq!(cases[1], q(-1, 4));
        assert_eq!(cases[2], q(1, 4));
        assert_eq!(cases[3], q(3, 1));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(q(1, 2).try_div(&Scalar::zero()), Err(Error::DivisionByZero));
        assert!(q(1, 2).checked_div(&Scalar::float(1e-12)).is_none());
        assert!(Scalar::float(1.0).checked_div(&Scalar::float(0.0)).is_none());
        assert!(Scalar::zero().recip().is_err());
        assert_eq!(q(-2, 3).recip().unwrap(), q(-3, 2));
    }

    #[test]
    fn zero_test_agrees_with_promotion() {
        let edge = Scalar::float(DEFAULT_EPSILON);
        assert!(edge.is_zero());
        assert_eq!(edge, Scalar::zero());
        assert!(q(1, 1).checked_div(&edge).is_none());

        let above = Scalar::float(2.0 * DEFAULT_EPSILON);
        assert!(!above.is_zero());
        let ratio = q(1, 1).checked_div(&above).unwrap();
        assert!(ratio.is_exact());
        assert!((ratio.to_f64() - 5e8).abs() < 1.0);
        assert!((above.recip_nonzero().to_f64() - 5e8).abs() < 1.0);
    }

    #[test]
    #[should_panic(expected = "divide a scalar by zero")]
    fn div_operator_panics() {
        let _ = q(1, 1) / Scalar::zero();
    }

    #[test]
    fn equality_semantics() {
        assert_eq!(Scalar::float(0.1 + 0.2), Scalar::float(0.3));
        assert_ne!(Scalar::float(0.1), Scalar::float(0.1 + 1e-6));
        assert_eq!(Scalar::float(0.5), q(1, 2));
        assert_eq!(q(6, 3), 2);
        assert!(!q(5, 3).eq_int(1));
        assert!(Scalar::float(1.0005).eq_int_within(1, 1e-3));
        assert!(Scalar::float(1.0).eq_within(&Scalar::float(1.0 + 1e-7), 1e-6));
        assert!(q(1, 1_000_000_000).eq_within(&Scalar::zero(), 1e-6));
    }

    #[test]
    fn zero_and_one_like() {
        assert!(Scalar::float(3.0).zero_like().is_zero());
        assert!(!Scalar::float(3.0).one_like().is_exact());
        assert!(q(3, 7).one_like().is_exact());
    }

    #[test]
    fn sqrt_values() {
        assert_eq!(q(16, 9).sqrt().unwrap(), q(4, 3));
        let r2 = Scalar::int(2).sqrt().unwrap();
        assert!(r2.is_exact());
        assert!((r2.to_f64() - 2f64.sqrt()).abs() < 1e-12);
        assert!((Scalar::float(2.0).sqrt().unwrap().to_f64() - 2f64.sqrt()).abs() < 1e-15);
        assert!(Scalar::float(-4.0).sqrt().is_err());
        assert!(Scalar::float(-1e-12).sqrt().unwrap().is_zero());
    }

    #[test]
    fn float_promotion() {
        assert_eq!(rational_from_f64(0.5, DEFAULT_EPSILON), BigRational::new(1.into(), 2.into()));
        assert_eq!(rational_from_f64(-2.0, DEFAULT_EPSILON), BigRational::from_integer((-2).into()));
        assert_eq!(rational_from_f64(1.0 / 3.0, DEFAULT_EPSILON), BigRational::new(1.into(), 3.into()));
        assert!(rational_from_f64(1e-12, DEFAULT_EPSILON).is_zero());
        assert!(rational_from_f64(f64::NAN, DEFAULT_EPSILON).is_zero());
        let pi = rational_from_f64(core::f64::consts::PI, DEFAULT_EPSILON);
        assert!((ratio_to_f64(&pi) - core::f64::consts::PI).abs() <= DEFAULT_EPSILON);
    }

    #[test]
    fn display() {
        assert_eq!(Scalar::zero().to_string(), "0");
        assert_eq!(Scalar::int(-7).to_string(), "-7");
        assert_eq!(q(3, 9).to_string(), "1/3");
        assert_eq!(Scalar::float(2.0).to_string(), "2.0");
        assert_eq!(format!("{:>4}", Scalar::int(5)), "   5");
    }
}
