//! Floating-point payloads that support roots and rational powers.

use crate::rational::Rational;
use core::ops::{Div, Mul};

/// Scalar payloads for [`Quantity::sqrt`](crate::Quantity::sqrt) and
/// [`Quantity::pow`](crate::Quantity::pow).
///
/// Implemented for `f64` and `f32`. With the `std` feature the inherent float methods are used;
/// without it the `libm` equivalents are.
pub trait Real: Copy {
    /// Square root.
    fn sqrt(self) -> Self;

    /// Raises `self` to a rational power.
    fn powr(self, exponent: Rational) -> Self;
}

impl Real for f64 {
    #[inline]
    fn sqrt(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::sqrt(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrt(self)
        }
    }

    #[inline]
    fn powr(self, exponent: Rational) -> Self {
        if exponent.is_integer() {
            return powi(self, exponent.numer() / exponent.denom(), 1.0);
        }
        #[cfg(feature = "std")]
        {
            self.powf(exponent.to_f64())
        }
        #[cfg(not(feature = "std"))]
        {
            libm::pow(self, exponent.to_f64())
        }
    }
}

impl Real for f32 {
    #[inline]
    fn sqrt(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::sqrt(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrtf(self)
        }
    }

    #[inline]
    fn powr(self, exponent: Rational) -> Self {
        if exponent.is_integer() {
            return powi(self, exponent.numer() / exponent.denom(), 1.0);
        }
        let e = exponent.to_f64() as f32;
        #[cfg(feature = "std")]
        {
            self.powf(e)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::powf(self, e)
        }
    }
}

// Integer exponents go through repeated squaring so `pow(x, 2)` is exact for exact inputs.
fn powi<F>(base: F, exp: i64, one: F) -> F
where
    F: Copy + Mul<Output = F> + Div<Output = F>,
{
    let mut result = one;
    let mut b = base;
    let mut e = exp.unsigned_abs();
    while e > 0 {
        if e & 1 == 1 {
            result = result * b;
        }
        b = b * b;
        e >>= 1;
    }
    if exp < 0 {
        one / result
    } else {
        result
    }
}
