//! Fixed-capacity exponent vectors and their elementwise combinators.

use crate::error::{DimensionError, Result};
use crate::rational::Rational;
use core::fmt;
use core::ops::Index;

/// Maximum number of base axes a [`DimensionVector`] can hold.
pub const MAX_AXES: usize = 8;

/// Ordered exponents of a dimension, one [`Rational`] per base axis.
///
/// The built-in dimensions use three axes in the order *mass, length, time*. Applications may use
/// more (up to [`MAX_AXES`]) as long as every vector they combine has the same length.
///
/// Equality is dimension equality: same length and pairwise [`Rational::equivalent`] exponents, so
/// `[2/4]` and `[1/2]` compare equal.
#[derive(Clone, Copy)]
pub struct DimensionVector {
    exponents: [Rational; MAX_AXES],
    len: usize,
}

/// Binary operation applied per axis by [`DimensionVector::zip_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// `lhs + rhs`
    Add,
    /// `lhs - rhs`
    Sub,
    /// `lhs * rhs`
    Mul,
}

/// Unary operation applied per axis by [`DimensionVector::map`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-x`
    Negate,
    /// `x * r`
    Scale(Rational),
    /// `x` reduced to lowest terms.
    Simplify,
}

impl BinaryOp {
    const fn apply(self, lhs: Rational, rhs: Rational) -> Rational {
        match self {
            BinaryOp::Add => lhs.add(rhs),
            BinaryOp::Sub => lhs.sub(rhs),
            BinaryOp::Mul => lhs.mul(rhs),
        }
    }
}

impl UnaryOp {
    const fn apply(self, x: Rational) -> Result<Rational> {
        match self {
            UnaryOp::Negate => Ok(x.neg()),
            UnaryOp::Scale(r) => Ok(x.mul(r)),
            UnaryOp::Simplify => x.try_simplify(),
        }
    }
}

impl DimensionVector {
    /// The vector with no axes.
    pub const EMPTY: Self = Self {
        exponents: [Rational::ZERO; MAX_AXES],
        len: 0,
    };

    /// Builds a vector from rational exponents, keeping them as given.
    pub const fn try_from_rationals(exponents: &[Rational]) -> Result<Self> {
        if exponents.len() > MAX_AXES {
            return Err(DimensionError::TooManyAxes {
                len: exponents.len(),
                max: MAX_AXES,
            });
        }
        let mut out = Self::EMPTY;
        let mut i = 0;
        while i < exponents.len() {
            out.exponents[i] = exponents[i];
            i += 1;
        }
        out.len = exponents.len();
        Ok(out)
    }

    /// Infallible form of [`DimensionVector::try_from_rationals`].
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_AXES`] exponents are given.
    pub const fn from_rationals(exponents: &[Rational]) -> Self {
        match Self::try_from_rationals(exponents) {
            Ok(v) => v,
            Err(e) => panic!("{}", e.summary()),
        }
    }

    /// Builds a vector from integer exponents.
    ///
    /// ```rust
    /// use noda_core::{DimensionVector, Rational};
    ///
    /// const FORCE: DimensionVector = DimensionVector::from_ints(&[1, 1, -2]);
    /// assert_eq!(FORCE[2], Rational::integer(-2));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_AXES`] exponents are given.
    pub const fn from_ints(exponents: &[i64]) -> Self {
        if exponents.len() > MAX_AXES {
            let e = DimensionError::TooManyAxes {
                len: exponents.len(),
                max: MAX_AXES,
            };
            panic!("{}", e.summary());
        }
        let mut out = Self::EMPTY;
        let mut i = 0;
        while i < exponents.len() {
            out.exponents[i] = Rational::integer(exponents[i]);
            i += 1;
        }
        out.len = exponents.len();
        out
    }

    /// All-zero vector of `len` axes.
    ///
    /// # Panics
    ///
    /// Panics if `len > MAX_AXES`.
    pub const fn dimensionless(len: usize) -> Self {
        if len > MAX_AXES {
            let e = DimensionError::TooManyAxes { len, max: MAX_AXES };
            panic!("{}", e.summary());
        }
        Self {
            exponents: [Rational::ZERO; MAX_AXES],
            len,
        }
    }

    /// Number of axes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` for the zero-axis vector.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Exponent of axis `i`, if present.
    #[inline]
    pub const fn get(&self, i: usize) -> Option<Rational> {
        if i < self.len {
            Some(self.exponents[i])
        } else {
            None
        }
    }

    /// The exponents as a slice of length [`len`](Self::len).
    #[inline]
    pub const fn as_slice(&self) -> &[Rational] {
        self.exponents.split_at(self.len).0
    }

    /// Iterates over the exponents in axis order.
    pub fn iter(&self) -> core::slice::Iter<'_, Rational> {
        self.as_slice().iter()
    }

    /// `true` if every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < self.len {
            if !self.exponents[i].is_zero() {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Dimension equality: same length and pairwise equivalent exponents.
    pub const fn dim_eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut i = 0;
        while i < self.len {
            if !self.exponents[i].equivalent(&other.exponents[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Combines two vectors axis by axis.
    ///
    /// Fails with [`DimensionError::LengthMismatch`] instead of truncating when the lengths differ.
    pub const fn zip_with(&self, rhs: &Self, op: BinaryOp) -> Result<Self> {
        if self.len != rhs.len {
            return Err(DimensionError::LengthMismatch {
                expected: self.len,
                found: rhs.len,
            });
        }
        let mut out = *self;
        let mut i = 0;
        while i < self.len {
            out.exponents[i] = op.apply(self.exponents[i], rhs.exponents[i]);
            i += 1;
        }
        Ok(out)
    }

    /// Applies `op` to every axis.
    pub const fn map(&self, op: UnaryOp) -> Result<Self> {
        let mut out = *self;
        let mut i = 0;
        while i < self.len {
            out.exponents[i] = match op.apply(self.exponents[i]) {
                Ok(r) => r,
                Err(e) => return Err(e),
            };
            i += 1;
        }
        Ok(out)
    }
}

/// N-ary elementwise combinator.
///
/// For every axis `i`, `op` receives the `i`-th exponent of each input (in input order) and returns
/// the `i`-th exponent of the result. All inputs must have the length of the first one.
///
/// ```rust
/// use noda_core::{elementwise, DimensionError, DimensionVector, Rational};
///
/// let a = DimensionVector::from_ints(&[1, 2, 3]);
/// let b = DimensionVector::from_ints(&[10, 20, 30]);
/// let sum = elementwise([&a, &b], |[x, y]| x.add(y)).unwrap();
/// assert_eq!(sum, DimensionVector::from_ints(&[11, 22, 33]));
///
/// let short = DimensionVector::from_ints(&[1, 2]);
/// assert_eq!(
///     elementwise([&a, &short], |[x, y]| x.add(y)),
///     Err(DimensionError::LengthMismatch { expected: 3, found: 2 }),
/// );
/// ```
pub fn elementwise<const N: usize, F>(
    vectors: [&DimensionVector; N],
    mut op: F,
) -> Result<DimensionVector>
where
    F: FnMut([Rational; N]) -> Rational,
{
    let () = NonEmpty::<N>::CHECK;
    let len = vectors[0].len;
    if let Some(bad) = vectors.iter().find(|v| v.len != len) {
        return Err(DimensionError::LengthMismatch {
            expected: len,
            found: bad.len,
        });
    }
    let mut out = DimensionVector::dimensionless(len);
    for i in 0..len {
        out.exponents[i] = op(core::array::from_fn(|k| vectors[k].exponents[i]));
    }
    Ok(out)
}

struct NonEmpty<const N: usize>;

impl<const N: usize> NonEmpty<N> {
    const CHECK: () = assert!(N > 0, "elementwise needs at least one input vector");
}

impl PartialEq for DimensionVector {
    fn eq(&self, other: &Self) -> bool {
        self.dim_eq(other)
    }
}

impl Eq for DimensionVector {}

impl Index<usize> for DimensionVector {
    type Output = Rational;

    fn index(&self, index: usize) -> &Rational {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a DimensionVector {
    type Item = &'a Rational;
    type IntoIter = core::slice::Iter<'a, Rational>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[e0, e1, ..., end]`.
impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for r in self {
            write!(f, "{}, ", r)?;
        }
        f.write_str("end]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn from_ints_sets_length_and_values() {
        let v = DimensionVector::from_ints(&[1, 1, -2]);
        assert_eq!(v.len(), 3);
        assert_eq!(v[0], Rational::integer(1));
        assert_eq!(v[2], Rational::integer(-2));
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn try_from_rationals_rejects_overflow() {
        let many = [Rational::ONE; MAX_AXES + 1];
        assert_eq!(
            DimensionVector::try_from_rationals(&many),
            Err(DimensionError::TooManyAxes {
                len: MAX_AXES + 1,
                max: MAX_AXES
            })
        );
    }

    #[test]
    fn dimensionless_is_all_zero() {
        let d = DimensionVector::dimensionless(3);
        assert_eq!(d.len(), 3);
        assert!(d.is_dimensionless());
        assert!(d.iter().all(|r| r.is_zero()));
    }

    #[test]
    fn empty_vector() {
        assert!(DimensionVector::EMPTY.is_empty());
        assert!(DimensionVector::EMPTY.is_dimensionless());
        assert!(DimensionVector::EMPTY.as_slice().is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Equality
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality_uses_simplified_values() {
        let a = DimensionVector::from_rationals(&[Rational::new(2, 4), Rational::new(0, 5)]);
        let b = DimensionVector::from_rationals(&[Rational::new(1, 2), Rational::ZERO]);
        assert_eq!(a, b);
    }

    #[test]
    fn different_lengths_are_never_equal() {
        let a = DimensionVector::from_ints(&[0, 1]);
        let b = DimensionVector::from_ints(&[0, 1, 0]);
        assert_ne!(a, b);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Combinators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn zip_with_combines_pairwise() {
        let a = DimensionVector::from_ints(&[1, 2, 3]);
        let b = DimensionVector::from_ints(&[2, 4, 6]);
        let sum = a.zip_with(&b, BinaryOp::Add).unwrap();
        assert_eq!(sum, DimensionVector::from_ints(&[3, 6, 9]));
        let diff = a.zip_with(&b, BinaryOp::Sub).unwrap();
        assert_eq!(diff, DimensionVector::from_ints(&[-1, -2, -3]));
        let prod = a.zip_with(&b, BinaryOp::Mul).unwrap();
        assert_eq!(prod, DimensionVector::from_ints(&[2, 8, 18]));
    }

    // The naive recursive port stopped at the end of the first list; unequal lengths now fail.
    #[test]
    fn zip_with_rejects_unequal_lengths() {
        let a = DimensionVector::from_ints(&[1, 2, 3]);
        let b = DimensionVector::from_ints(&[1, 2]);
        assert_eq!(
            a.zip_with(&b, BinaryOp::Add),
            Err(DimensionError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            b.zip_with(&a, BinaryOp::Add),
            Err(DimensionError::LengthMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn map_negate_and_scale() {
        let v = DimensionVector::from_ints(&[1, -2, 0]);
        assert_eq!(
            v.map(UnaryOp::Negate).unwrap(),
            DimensionVector::from_ints(&[-1, 2, 0])
        );
        let half = v.map(UnaryOp::Scale(Rational::HALF)).unwrap();
        assert_eq!(half[1], Rational::new(-2, 2));
    }

    #[test]
    fn map_simplify_reduces_each_axis() {
        let v = DimensionVector::from_rationals(&[Rational::new(4, -8), Rational::new(6, 3)]);
        let s = v.map(UnaryOp::Simplify).unwrap();
        assert_eq!(s.as_slice(), &[Rational::new(-1, 2), Rational::new(2, 1)]);
    }

    #[test]
    fn map_simplify_propagates_errors() {
        let bad = DimensionVector::from_rationals(&[Rational::ONE.div(Rational::ZERO)]);
        assert_eq!(
            bad.map(UnaryOp::Simplify),
            Err(DimensionError::ZeroDenominator)
        );
    }

    #[test]
    fn elementwise_three_inputs() {
        let a = DimensionVector::from_ints(&[1, 0, 0]);
        let b = DimensionVector::from_ints(&[0, 1, 0]);
        let c = DimensionVector::from_ints(&[0, 0, 1]);
        let v = elementwise([&a, &b, &c], |[x, y, z]| x.add(y).add(z)).unwrap();
        assert_eq!(v, DimensionVector::from_ints(&[1, 1, 1]));
    }

    #[test]
    fn elementwise_single_input() {
        let a = DimensionVector::from_ints(&[1, -1]);
        let v = elementwise([&a], |[x]| x.neg()).unwrap();
        assert_eq!(v, DimensionVector::from_ints(&[-1, 1]));
    }

    #[test]
    fn elementwise_rejects_any_unequal_input() {
        let a = DimensionVector::from_ints(&[1, 2, 3]);
        let b = DimensionVector::from_ints(&[1, 2, 3]);
        let c = DimensionVector::from_ints(&[1, 2, 3, 4]);
        assert_eq!(
            elementwise([&a, &b, &c], |[x, _, _]| x),
            Err(DimensionError::LengthMismatch {
                expected: 3,
                found: 4
            })
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_with_end_marker() {
        let v = DimensionVector::from_ints(&[1, 1, -2]);
        assert_eq!(v.to_string(), "[1/1, 1/1, -2/1, end]");
        assert_eq!(DimensionVector::EMPTY.to_string(), "[end]");
    }

    #[test]
    fn debug_lists_exponents() {
        let v = DimensionVector::from_rationals(&[Rational::HALF]);
        assert_eq!(format!("{:?}", v), "[Rational { num: 1, den: 2 }]");
    }
}
