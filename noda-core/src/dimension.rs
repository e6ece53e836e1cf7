//! Compile-time dimension tags and their type-level combinators.

use crate::algebra::expect_vector;
use crate::error::{DimensionError, Result};
use crate::rational::Rational;
use crate::vector::{DimensionVector, MAX_AXES};
use core::marker::PhantomData;

/// Marker trait for **dimensions** (length, force, work …).
///
/// A dimension is a zero-sized type whose exponent vector is known at compile time. You usually
/// model a named dimension as an empty enum:
///
/// ```rust
/// use noda_core::{Dimension, DimensionVector};
///
/// /// Mass per unit length.
/// pub enum LinearDensity {}
/// impl Dimension for LinearDensity {
///     const VECTOR: DimensionVector = DimensionVector::from_ints(&[1, -1, 0]);
/// }
/// ```
///
/// Two dimension types are interchangeable whenever their vectors are equal, no matter how they
/// were built: `Product<Length, Force>` and `Work` describe the same dimension.
pub trait Dimension: 'static {
    /// Exponent per base axis.
    const VECTOR: DimensionVector;
}

/// Marker trait for type-level rational exponents.
pub trait Exponent: 'static {
    /// The exponent's value.
    const RATIONAL: Rational;
}

/// Type-level rational exponent `N / D`.
///
/// Also usable as a value, e.g. `pow(length, Ratio::<3>)`.
///
/// ```compile_fail
/// use noda_core::{Exponent, Ratio};
///
/// // Zero denominators are rejected at compile time.
/// let _ = <Ratio<1, 0> as Exponent>::RATIONAL;
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ratio<const N: i64, const D: i64 = 1>;

impl<const N: i64, const D: i64> Exponent for Ratio<N, D> {
    const RATIONAL: Rational = Rational::new(N, D);
}

/// Dimension of `A * B`.
pub struct Product<A, B>(PhantomData<(A, B)>);

impl<A: Dimension, B: Dimension> Dimension for Product<A, B> {
    const VECTOR: DimensionVector = expect_vector(A::VECTOR.multiply(&B::VECTOR));
}

/// Dimension of `1 / A`.
pub struct Inverse<A>(PhantomData<A>);

impl<A: Dimension> Dimension for Inverse<A> {
    const VECTOR: DimensionVector = expect_vector(A::VECTOR.invert());
}

/// Dimension of `A ^ R`.
pub struct Power<A, R>(PhantomData<(A, R)>);

impl<A: Dimension, R: Exponent> Dimension for Power<A, R> {
    const VECTOR: DimensionVector = expect_vector(A::VECTOR.power(R::RATIONAL));
}

/// Dimension of `A / B`.
pub type Quotient<A, B> = Product<A, Inverse<B>>;

/// Dimension of `sqrt(A)`.
pub type Root<A> = Power<A, Ratio<1, 2>>;

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time guards
//
// Each `CHECK` is evaluated when a function mentioning it is monomorphized, so a violation stops
// the build instead of producing a value.
// ─────────────────────────────────────────────────────────────────────────────

/// Asserts at compile time that `A` and `B` are the same dimension.
pub struct SameDimension<A, B>(PhantomData<(A, B)>);

impl<A: Dimension, B: Dimension> SameDimension<A, B> {
    /// Fails constant evaluation on a mismatch.
    pub const CHECK: () = assert!(
        A::VECTOR.dim_eq(&B::VECTOR),
        "dimension mismatch: operands carry different dimensions"
    );
}

/// Asserts at compile time that `B` is dimensionless with as many axes as `A`.
pub struct DimensionlessFor<A, B>(PhantomData<(A, B)>);

impl<A: Dimension, B: Dimension> DimensionlessFor<A, B> {
    /// Fails constant evaluation if `B` is not the dimensionless vector for `A`.
    pub const CHECK: () = assert!(
        B::VECTOR.dim_eq(&DimensionVector::dimensionless(A::VECTOR.len())),
        "right-hand side of a compound multiply/divide must be dimensionless"
    );
}

/// Forces evaluation of `A::VECTOR`, surfacing algebra errors (such as unequal axis counts in a
/// `Product`) at the point a derived dimension is created.
pub struct WellFormed<A>(PhantomData<A>);

impl<A: Dimension> WellFormed<A> {
    /// Fails constant evaluation if `A::VECTOR` cannot be computed.
    pub const CHECK: () = assert!(A::VECTOR.len() <= MAX_AXES);
}

/// Runtime form of [`SameDimension`].
pub fn check_same<A: Dimension, B: Dimension>() -> Result<()> {
    if A::VECTOR.dim_eq(&B::VECTOR) {
        Ok(())
    } else {
        Err(DimensionError::DimensionMismatch {
            expected: A::VECTOR,
            found: B::VECTOR,
        })
    }
}

/// Runtime form of [`DimensionlessFor`].
pub fn check_dimensionless_for<A: Dimension, B: Dimension>() -> Result<()> {
    if B::VECTOR.dim_eq(&DimensionVector::dimensionless(A::VECTOR.len())) {
        Ok(())
    } else {
        Err(DimensionError::NotDimensionless { found: B::VECTOR })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Length {}
    impl Dimension for Length {
        const VECTOR: DimensionVector = DimensionVector::from_ints(&[0, 1, 0]);
    }

    enum Time {}
    impl Dimension for Time {
        const VECTOR: DimensionVector = DimensionVector::from_ints(&[0, 0, 1]);
    }

    enum Area {}
    impl Dimension for Area {
        const VECTOR: DimensionVector = DimensionVector::from_ints(&[0, 2, 0]);
    }

    enum Scalar {}
    impl Dimension for Scalar {
        const VECTOR: DimensionVector = DimensionVector::dimensionless(3);
    }

    enum Planar {}
    impl Dimension for Planar {
        const VECTOR: DimensionVector = DimensionVector::from_ints(&[0, 1]);
    }

    #[test]
    fn product_vector() {
        assert_eq!(<Product<Length, Length>>::VECTOR, Area::VECTOR);
    }

    #[test]
    fn quotient_vector() {
        assert_eq!(
            <Quotient<Length, Time>>::VECTOR,
            DimensionVector::from_ints(&[0, 1, -1])
        );
    }

    #[test]
    fn inverse_of_inverse() {
        assert_eq!(<Inverse<Inverse<Time>>>::VECTOR, Time::VECTOR);
    }

    #[test]
    fn root_of_area_is_length() {
        assert_eq!(<Root<Area>>::VECTOR, Length::VECTOR);
    }

    #[test]
    fn power_by_ratio() {
        assert_eq!(
            <Power<Length, Ratio<3>>>::VECTOR,
            DimensionVector::from_ints(&[0, 3, 0])
        );
        assert_eq!(
            <Power<Area, Ratio<-3, 2>>>::VECTOR,
            DimensionVector::from_ints(&[0, -3, 0])
        );
    }

    #[test]
    fn ratio_exponent_value() {
        assert_eq!(<Ratio<2, 4>>::RATIONAL, Rational::new(2, 4));
        assert_eq!(<Ratio<5>>::RATIONAL, Rational::integer(5));
    }

    #[test]
    fn guards_pass_for_valid_pairs() {
        let () = SameDimension::<Product<Length, Length>, Area>::CHECK;
        let () = DimensionlessFor::<Length, Scalar>::CHECK;
        let () = DimensionlessFor::<Length, Quotient<Time, Time>>::CHECK;
        let () = WellFormed::<Root<Area>>::CHECK;
    }

    #[test]
    fn runtime_same_dimension() {
        assert_eq!(check_same::<Root<Area>, Length>(), Ok(()));
        assert_eq!(
            check_same::<Length, Time>(),
            Err(DimensionError::DimensionMismatch {
                expected: Length::VECTOR,
                found: Time::VECTOR
            })
        );
    }

    #[test]
    fn runtime_dimensionless_requires_matching_length() {
        assert_eq!(check_dimensionless_for::<Length, Scalar>(), Ok(()));
        assert_eq!(
            check_dimensionless_for::<Length, Time>(),
            Err(DimensionError::NotDimensionless {
                found: Time::VECTOR
            })
        );
        assert_eq!(
            check_dimensionless_for::<Planar, Scalar>(),
            Err(DimensionError::NotDimensionless {
                found: Scalar::VECTOR
            })
        );
    }
}
