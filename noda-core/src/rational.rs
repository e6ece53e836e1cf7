//! Exact rational numbers used as dimension exponents.
//!
//! Arithmetic follows plain cross-multiplication and does **not** reduce its result: `1/2 + 3/4` is
//! `10/8` until [`Rational::simplify`] is applied. Every operation is a `const fn` so that the
//! dimension algebra can run during constant evaluation.
//!
//! ```rust
//! use noda_core::Rational;
//!
//! let sum = Rational::new(1, 2).add(Rational::new(3, 4));
//! assert_eq!(sum, Rational::new(10, 8));
//! assert_eq!(sum.simplify(), Rational::new(5, 4));
//! ```

use crate::error::{DimensionError, Result};
use core::cmp::Ordering;
use core::fmt;
use core::ops;

/// Greatest common divisor of `|a|` and `|b|` (Euclidean algorithm).
///
/// `gcd(0, b)` is `|b|`, which makes `0/b` simplify to `0/1`. A result of `2^63` (only possible
/// when each input is `0` or `i64::MIN`) does not fit and is reported as
/// [`DimensionError::Overflow`].
///
/// ```rust
/// use noda_core::{gcd, DimensionError};
///
/// assert_eq!(gcd(10, 8), Ok(2));
/// assert_eq!(gcd(0, 5), Ok(5));
/// assert_eq!(gcd(0, 0), Err(DimensionError::UndefinedGcd));
/// assert_eq!(gcd(0, i64::MIN), Err(DimensionError::Overflow));
/// ```
pub const fn gcd(a: i64, b: i64) -> Result<i64> {
    if a == 0 && b == 0 {
        return Err(DimensionError::UndefinedGcd);
    }
    let mut x = a.unsigned_abs();
    let mut y = b.unsigned_abs();
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    if x > i64::MAX as u64 {
        return Err(DimensionError::Overflow);
    }
    Ok(x as i64)
}

/// A fraction `num / den` with 64-bit signed parts.
///
/// `==` is exact: `Rational::new(2, 4) != Rational::new(1, 2)`. Use [`Rational::equivalent`] (or
/// simplify both sides first) to compare by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawRational")
)]
pub struct Rational {
    num: i64,
    den: i64,
}

// Deserialized parts, validated through `Rational::try_new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRational {
    num: i64,
    den: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRational> for Rational {
    type Error = DimensionError;

    fn try_from(raw: RawRational) -> Result<Self> {
        Self::try_new(raw.num, raw.den)
    }
}

impl Rational {
    /// `0/1`.
    pub const ZERO: Self = Self::integer(0);
    /// `1/1`.
    pub const ONE: Self = Self::integer(1);
    /// `1/2`, the exponent of a square root.
    pub const HALF: Self = Self::new(1, 2);

    /// Creates `num / den` as given, without reducing it.
    ///
    /// # Panics
    ///
    /// Panics if `den == 0`. In constant evaluation this is a compile error.
    #[inline]
    pub const fn new(num: i64, den: i64) -> Self {
        match Self::try_new(num, den) {
            Ok(r) => r,
            Err(e) => panic!("{}", e.summary()),
        }
    }

    /// Fallible form of [`Rational::new`].
    #[inline]
    pub const fn try_new(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            return Err(DimensionError::ZeroDenominator);
        }
        Ok(Self { num, den })
    }

    /// Creates `n / 1`.
    #[inline]
    pub const fn integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Numerator as stored.
    #[inline]
    pub const fn numer(&self) -> i64 {
        self.num
    }

    /// Denominator as stored.
    #[inline]
    pub const fn denom(&self) -> i64 {
        self.den
    }

    /// `a/b + c/d = (ad + cb) / bd`, unreduced.
    #[inline]
    pub const fn add(self, rhs: Self) -> Self {
        Self {
            num: self.num * rhs.den + rhs.num * self.den,
            den: self.den * rhs.den,
        }
    }

    /// `a/b - c/d = (ad - cb) / bd`, unreduced.
    #[inline]
    pub const fn sub(self, rhs: Self) -> Self {
        Self {
            num: self.num * rhs.den - rhs.num * self.den,
            den: self.den * rhs.den,
        }
    }

    /// `a/b * c/d = ac / bd`, unreduced.
    #[inline]
    pub const fn mul(self, rhs: Self) -> Self {
        Self {
            num: self.num * rhs.num,
            den: self.den * rhs.den,
        }
    }

    /// `(a/b) / (c/d) = ad / bc`, unreduced.
    ///
    /// Dividing by a zero rational yields a zero denominator, which [`Rational::try_simplify`]
    /// reports as an error.
    #[inline]
    pub const fn div(self, rhs: Self) -> Self {
        Self {
            num: self.num * rhs.den,
            den: self.den * rhs.num,
        }
    }

    /// `-(a/b) = (-a)/b`.
    #[inline]
    pub const fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }

    /// Reduces to lowest terms with a positive denominator.
    ///
    /// ```rust
    /// use noda_core::Rational;
    ///
    /// assert_eq!(Rational::new(-2, 4).try_simplify(), Ok(Rational::new(-1, 2)));
    /// assert_eq!(Rational::new(10, 5).try_simplify(), Ok(Rational::new(2, 1)));
    /// assert_eq!(Rational::new(3, -6).try_simplify(), Ok(Rational::new(-1, 2)));
    /// ```
    pub const fn try_simplify(self) -> Result<Self> {
        if self.den == 0 {
            return if self.num == 0 {
                Err(DimensionError::UndefinedGcd)
            } else {
                Err(DimensionError::ZeroDenominator)
            };
        }
        let g = match gcd(self.num, self.den) {
            Ok(g) => g,
            Err(e) => return Err(e),
        };
        let num = self.num / g;
        let den = self.den / g;
        if den > 0 {
            return Ok(Self { num, den });
        }
        match (num.checked_neg(), den.checked_neg()) {
            (Some(num), Some(den)) => Ok(Self { num, den }),
            _ => Err(DimensionError::Overflow),
        }
    }

    /// Infallible form of [`Rational::try_simplify`].
    ///
    /// # Panics
    ///
    /// Panics on a zero denominator (including `0/0`) or when the sign cannot be normalized
    /// within `i64`.
    #[inline]
    pub const fn simplify(self) -> Self {
        match self.try_simplify() {
            Ok(r) => r,
            Err(e) => panic!("{}", e.summary()),
        }
    }

    /// `true` if already in lowest terms with a positive denominator.
    pub const fn is_simplified(&self) -> bool {
        match gcd(self.num, self.den) {
            Ok(g) => g == 1 && self.den > 0,
            Err(_) => false,
        }
    }

    /// `true` for any `0/d`.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// `true` when the value is a whole number.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.den != 0 && self.num % self.den == 0
    }

    /// Value equality, independent of how either side is reduced.
    ///
    /// ```rust
    /// use noda_core::Rational;
    ///
    /// assert!(Rational::new(2, 4).equivalent(&Rational::new(-1, -2)));
    /// assert!(!Rational::new(2, 4).equivalent(&Rational::new(1, 3)));
    /// ```
    #[inline]
    pub const fn equivalent(&self, other: &Self) -> bool {
        (self.num as i128) * (other.den as i128) == (other.num as i128) * (self.den as i128)
    }

    /// Orders two rationals by value.
    pub const fn cmp_value(&self, other: &Self) -> Ordering {
        let mut lhs = (self.num as i128) * (other.den as i128);
        let mut rhs = (other.num as i128) * (self.den as i128);
        // Cross-multiplication flips the inequality for each negative denominator.
        if (self.den < 0) != (other.den < 0) {
            lhs = -lhs;
            rhs = -rhs;
        }
        if lhs < rhs {
            Ordering::Less
        } else if lhs > rhs {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Floating-point value, used for fractional exponentiation.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations (unreduced, like the inherent methods)
// ─────────────────────────────────────────────────────────────────────────────

impl ops::Add for Rational {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Rational::add(self, rhs)
    }
}

impl ops::Sub for Rational {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Rational::sub(self, rhs)
    }
}

impl ops::Mul for Rational {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Rational::mul(self, rhs)
    }
}

impl ops::Div for Rational {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Rational::div(self, rhs)
    }
}

impl ops::Neg for Rational {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Rational::neg(self)
    }
}
