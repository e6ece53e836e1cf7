//! Dimension algebra: multiply, divide, invert, power and square root of exponent vectors.
//!
//! Every result is reduced axis by axis, so two vectors produced by different routes to the same
//! dimension are structurally identical as well as equal.
//!
//! ```rust
//! use noda_core::{DimensionVector, Rational};
//!
//! let area = DimensionVector::from_ints(&[0, 2, 0]);
//! let length = DimensionVector::from_ints(&[0, 1, 0]);
//! assert_eq!(area.power(Rational::new(1, 2)), Ok(length));
//! assert_eq!(area.sqrt(), Ok(length));
//! ```

use crate::error::Result;
use crate::rational::Rational;
use crate::vector::{BinaryOp, DimensionVector, UnaryOp};

/// Unwraps an algebra result during constant evaluation.
///
/// The error summary becomes the compile error when this runs inside an associated constant.
pub(crate) const fn expect_vector(result: Result<DimensionVector>) -> DimensionVector {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{}", e.summary()),
    }
}

const fn reduced(result: Result<DimensionVector>) -> Result<DimensionVector> {
    match result {
        Ok(v) => v.map(UnaryOp::Simplify),
        Err(e) => Err(e),
    }
}

impl DimensionVector {
    /// Dimension of a product: exponents add.
    pub const fn multiply(&self, rhs: &Self) -> Result<Self> {
        reduced(self.zip_with(rhs, BinaryOp::Add))
    }

    /// Dimension of a reciprocal: exponents negate.
    pub const fn invert(&self) -> Result<Self> {
        reduced(self.map(UnaryOp::Negate))
    }

    /// Dimension of a quotient, `multiply(self, invert(rhs))`.
    pub const fn divide(&self, rhs: &Self) -> Result<Self> {
        match rhs.invert() {
            Ok(inv) => self.multiply(&inv),
            Err(e) => Err(e),
        }
    }

    /// Dimension raised to a rational power: exponents scale by `exponent`.
    pub const fn power(&self, exponent: Rational) -> Result<Self> {
        reduced(self.map(UnaryOp::Scale(exponent)))
    }

    /// Dimension of a square root, `power(self, 1/2)`.
    pub const fn sqrt(&self) -> Result<Self> {
        self.power(Rational::HALF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DimensionError;
    use proptest::prelude::*;

    const NUMBER: DimensionVector = DimensionVector::from_ints(&[0, 0, 0]);
    const LENGTH: DimensionVector = DimensionVector::from_ints(&[0, 1, 0]);
    const AREA: DimensionVector = DimensionVector::from_ints(&[0, 2, 0]);
    const VOLUME: DimensionVector = DimensionVector::from_ints(&[0, 3, 0]);
    const TIME: DimensionVector = DimensionVector::from_ints(&[0, 0, 1]);
    const VELOCITY: DimensionVector = DimensionVector::from_ints(&[0, 1, -1]);
    const FORCE: DimensionVector = DimensionVector::from_ints(&[1, 1, -2]);
    const WORK: DimensionVector = DimensionVector::from_ints(&[1, 2, -2]);
    const FREQUENCY: DimensionVector = DimensionVector::from_ints(&[0, 0, -1]);

    #[test]
    fn multiply_adds_exponents() {
        assert_eq!(LENGTH.multiply(&FORCE), Ok(WORK));
        assert_eq!(LENGTH.multiply(&LENGTH), Ok(AREA));
    }

    #[test]
    fn divide_subtracts_exponents() {
        assert_eq!(LENGTH.divide(&TIME), Ok(VELOCITY));
        assert_eq!(NUMBER.divide(&TIME), Ok(FREQUENCY));
    }

    #[test]
    fn invert_negates() {
        assert_eq!(TIME.invert(), Ok(FREQUENCY));
        assert_eq!(NUMBER.invert(), Ok(NUMBER));
    }

    #[test]
    fn power_with_fractions() {
        assert_eq!(AREA.power(Rational::new(1, 2)), Ok(LENGTH));
        assert_eq!(LENGTH.power(Rational::integer(3)), Ok(VOLUME));
        assert_eq!(VOLUME.power(Rational::new(2, 3)), Ok(AREA));
    }

    #[test]
    fn sqrt_of_length_is_half_exponent() {
        let root = LENGTH.sqrt().unwrap();
        assert_eq!(root[1], Rational::new(1, 2));
        assert!(root.iter().all(|r| r.is_simplified()));
    }

    #[test]
    fn results_are_reduced() {
        let v = DimensionVector::from_rationals(&[Rational::new(2, 4), Rational::new(-3, -6)]);
        let doubled = v.multiply(&v).unwrap();
        assert_eq!(doubled.as_slice(), &[Rational::ONE, Rational::ONE]);
    }

    #[test]
    fn multiply_rejects_unequal_lengths() {
        let two = DimensionVector::from_ints(&[0, 1]);
        assert_eq!(
            LENGTH.multiply(&two),
            Err(DimensionError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn algebra_runs_in_const_context() {
        const W: DimensionVector = expect_vector(LENGTH.multiply(&FORCE));
        assert_eq!(W, WORK);
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (-12i64..12, 1i64..12).prop_map(|(n, d)| Rational::new(n, d))
    }

    fn vector() -> impl Strategy<Value = DimensionVector> {
        proptest::collection::vec(rational(), 0..=crate::MAX_AXES)
            .prop_map(|exps| DimensionVector::from_rationals(&exps))
    }

    fn vector_pair() -> impl Strategy<Value = (DimensionVector, DimensionVector)> {
        (0..=crate::MAX_AXES).prop_flat_map(|n| {
            (
                proptest::collection::vec(rational(), n),
                proptest::collection::vec(rational(), n),
            )
                .prop_map(|(a, b)| {
                    (
                        DimensionVector::from_rationals(&a),
                        DimensionVector::from_rationals(&b),
                    )
                })
        })
    }

    proptest! {
        #[test]
        fn prop_product_with_inverse_is_dimensionless(d in vector()) {
            let inv = d.invert().unwrap();
            let product = d.multiply(&inv).unwrap();
            prop_assert_eq!(product, DimensionVector::dimensionless(d.len()));
            prop_assert!(product.is_dimensionless());
        }

        #[test]
        fn prop_sqrt_then_square_roundtrips(d in vector()) {
            let back = d.sqrt().unwrap().power(Rational::integer(2)).unwrap();
            prop_assert_eq!(back, d);
        }

        #[test]
        fn prop_multiply_commutes((a, b) in vector_pair()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }
    }
}
