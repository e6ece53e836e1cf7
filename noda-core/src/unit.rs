//! Values tagged with a dimension and a unit system.

use crate::conversion::composed_factor;
use crate::dimension::{check_same, Dimension, Product, Quotient, SameDimension, WellFormed};
use crate::error::Result;
use crate::quantity::Quantity;
use crate::system::{same_base_units, UnitSystem};
use crate::vector::DimensionVector;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value of dimension `D` expressed in the base units of system `S`.
///
/// Converting between systems multiplies by the composed factor of `D` (see
/// [`composed_factor`]). Binary operations between two systems convert the right operand into the
/// left operand's system first, so the result is always in the left system.
///
/// ```rust
/// use noda_core::units::{CENTIMETER, METER};
/// use noda_core::system::Imperial;
///
/// let area = 4.0 * METER * (1.0 * CENTIMETER);
/// assert!((area.value() - 0.04).abs() < 1e-12);
///
/// let sq_ft = area.to::<Imperial>();
/// assert!((sq_ft.value() - 0.04 / (0.3048 * 0.3048)).abs() < 1e-12);
/// ```
///
/// ```compile_fail
/// use noda_core::units::{KILOGRAM, METER};
///
/// let _ = METER + KILOGRAM;
/// ```
#[repr(transparent)]
pub struct Unit<D: Dimension, S: UnitSystem, T = f64> {
    value: T,
    tags: PhantomData<fn() -> (D, S)>,
}

// Base units match, so no table lookup or scaling is needed.
struct SameSystem<S1, S2>(PhantomData<(S1, S2)>);

impl<S1: UnitSystem, S2: UnitSystem> SameSystem<S1, S2> {
    const VALUE: bool = same_base_units(S1::BASE_UNITS, S2::BASE_UNITS);
}

fn convert<D, S1, S2, T>(value: T) -> T
where
    D: Dimension,
    S1: UnitSystem,
    S2: UnitSystem,
    T: Mul<f64, Output = T>,
{
    if SameSystem::<S1, S2>::VALUE {
        value
    } else {
        value * composed_factor::<D, S1, S2>()
    }
}

impl<D: Dimension, S: UnitSystem, T> Unit<D, S, T> {
    /// Wraps a raw value already expressed in `S`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            tags: PhantomData,
        }
    }

    /// Borrows the raw value.
    #[inline]
    pub const fn as_value(&self) -> &T {
        &self.value
    }

    /// Unwraps the raw value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Drops both tags.
    #[inline]
    pub fn discard_dims(self) -> T {
        self.value
    }

    /// Exponent vector of `D`.
    #[inline]
    pub const fn dimension(&self) -> DimensionVector {
        D::VECTOR
    }

    /// Name of `S`.
    #[inline]
    pub const fn system(&self) -> &'static str {
        S::NAME
    }

    /// Drops the system tag; the value is unchanged.
    #[inline]
    pub fn into_quantity(self) -> Quantity<D, T> {
        Quantity::new(self.value)
    }

    /// Retags with another dimension type of the same dimension, staying in `S`.
    #[inline]
    pub fn retag<D2: Dimension>(self) -> Unit<D2, S, T> {
        let () = SameDimension::<D, D2>::CHECK;
        Unit::new(self.value)
    }

    /// Runtime-checked form of [`Unit::retag`].
    pub fn try_retag<D2: Dimension>(self) -> Result<Unit<D2, S, T>> {
        check_same::<D, D2>()?;
        Ok(Unit::new(self.value))
    }
}

impl<D: Dimension, S: UnitSystem, T: Copy> Unit<D, S, T> {
    /// Returns the raw value.
    #[inline]
    pub const fn value(self) -> T {
        self.value
    }
}

impl<D: Dimension, S: UnitSystem, T: Mul<f64, Output = T>> Unit<D, S, T> {
    /// Converts into system `S2`.
    ///
    /// ```rust
    /// use noda_core::units::POUND;
    /// use noda_core::system::Si;
    ///
    /// let kg = (2.0 * POUND).to::<Si>();
    /// assert!((kg.value() - 0.907184).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn to<S2: UnitSystem>(self) -> Unit<D, S2, T> {
        Unit::new(convert::<D, S, S2, T>(self.value))
    }

    /// Converts a value from system `S1` into `S`.
    #[inline]
    pub fn from_system<S1: UnitSystem>(other: Unit<D, S1, T>) -> Self {
        other.to::<S>()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived-like trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, S: UnitSystem, T: Clone> Clone for Unit<D, S, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<D: Dimension, S: UnitSystem, T: Copy> Copy for Unit<D, S, T> {}

impl<D: Dimension, S: UnitSystem, T: Default> Default for Unit<D, S, T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<D: Dimension, S: UnitSystem, T: fmt::Debug> fmt::Debug for Unit<D, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("value", &self.value)
            .field("dimension", &D::VECTOR)
            .field("system", &S::NAME)
            .finish()
    }
}

impl<D: Dimension, S: UnitSystem, T: fmt::Display> fmt::Display for Unit<D, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
//
// The right operand is converted into the left operand's system.
// ─────────────────────────────────────────────────────────────────────────────

impl<D, D2, S, S2, T, T2> Mul<Unit<D2, S2, T2>> for Unit<D, S, T>
where
    D: Dimension,
    D2: Dimension,
    S: UnitSystem,
    S2: UnitSystem,
    T: Mul<T2>,
    T2: Mul<f64, Output = T2>,
{
    type Output = Unit<Product<D, D2>, S, T::Output>;

    #[inline]
    fn mul(self, rhs: Unit<D2, S2, T2>) -> Self::Output {
        let () = WellFormed::<Product<D, D2>>::CHECK;
        Unit::new(self.value * convert::<D2, S2, S, T2>(rhs.value))
    }
}

impl<D, D2, S, S2, T, T2> Div<Unit<D2, S2, T2>> for Unit<D, S, T>
where
    D: Dimension,
    D2: Dimension,
    S: UnitSystem,
    S2: UnitSystem,
    T: Div<T2>,
    T2: Mul<f64, Output = T2>,
{
    type Output = Unit<Quotient<D, D2>, S, T::Output>;

    #[inline]
    fn div(self, rhs: Unit<D2, S2, T2>) -> Self::Output {
        let () = WellFormed::<Quotient<D, D2>>::CHECK;
        Unit::new(self.value / convert::<D2, S2, S, T2>(rhs.value))
    }
}

impl<D, D2, S, S2, T, T2> Add<Unit<D2, S2, T2>> for Unit<D, S, T>
where
    D: Dimension,
    D2: Dimension,
    S: UnitSystem,
    S2: UnitSystem,
    T: Add<T2>,
    T2: Mul<f64, Output = T2>,
{
    type Output = Unit<D, S, T::Output>;

    #[inline]
    fn add(self, rhs: Unit<D2, S2, T2>) -> Self::Output {
        let () = SameDimension::<D, D2>::CHECK;
        Unit::new(self.value + convert::<D2, S2, S, T2>(rhs.value))
    }
}

/// ```compile_fail
/// use noda_core::units::{FOOT, SECOND};
///
/// let _ = (3.0 * FOOT) - (1.0 * SECOND);
/// ```
impl<D, D2, S, S2, T, T2> Sub<Unit<D2, S2, T2>> for Unit<D, S, T>
where
    D: Dimension,
    D2: Dimension,
    S: UnitSystem,
    S2: UnitSystem,
    T: Sub<T2>,
    T2: Mul<f64, Output = T2>,
{
    type Output = Unit<D, S, T::Output>;

    #[inline]
    fn sub(self, rhs: Unit<D2, S2, T2>) -> Self::Output {
        let () = SameDimension::<D, D2>::CHECK;
        Unit::new(self.value - convert::<D2, S2, S, T2>(rhs.value))
    }
}

impl<D: Dimension, S: UnitSystem, T: Neg> Neg for Unit<D, S, T> {
    type Output = Unit<D, S, T::Output>;

    #[inline]
    fn neg(self) -> Self::Output {
        Unit::new(-self.value)
    }
}

/// Equality compares raw values within one system; convert first to compare across systems.
///
/// ```compile_fail
/// use noda_core::units::{METER, SECOND};
///
/// let _ = METER == SECOND;
/// ```
impl<D, D2, S, T, T2> PartialEq<Unit<D2, S, T2>> for Unit<D, S, T>
where
    D: Dimension,
    D2: Dimension,
    S: UnitSystem,
    T: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &Unit<D2, S, T2>) -> bool {
        let () = SameDimension::<D, D2>::CHECK;
        self.value == other.value
    }
}

/// ```compile_fail
/// use noda_core::units::{KILOGRAM, METER};
///
/// let _ = METER < KILOGRAM;
/// ```
impl<D, D2, S, T, T2> PartialOrd<Unit<D2, S, T2>> for Unit<D, S, T>
where
    D: Dimension,
    D2: Dimension,
    S: UnitSystem,
    T: PartialOrd<T2>,
{
    #[inline]
    fn partial_cmp(&self, other: &Unit<D2, S, T2>) -> Option<Ordering> {
        let () = SameDimension::<D, D2>::CHECK;
        self.value.partial_cmp(&other.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension, S: UnitSystem, T: Serialize> Serialize for Unit<D, S, T> {
    fn serialize<Ser>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension, S: UnitSystem, T: Deserialize<'de>> Deserialize<'de> for Unit<D, S, T> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Unit::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::{Area, Force, Length, Mass, Time, Velocity, Work};
    use crate::system::{Cgs, Imperial, Si};
    use crate::units::{CENTIMETER, FOOT, GRAM, KILOGRAM, METER, POUND, SECOND};
    use approx::assert_relative_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and accessors
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn constants_hold_one() {
        assert_eq!(METER.value(), 1.0);
        assert_eq!(KILOGRAM.system(), "SI");
        assert_eq!(GRAM.system(), "CGS");
        assert_eq!(FOOT.system(), "Imperial");
        assert_eq!(SECOND.dimension(), DimensionVector::from_ints(&[0, 0, 1]));
    }

    #[test]
    fn scalar_times_constant() {
        let d = 4.0 * METER;
        assert_eq!(d.value(), 4.0);
        let d = METER * 2.5;
        assert_eq!(d.value(), 2.5);
        let d = (10.0 * CENTIMETER) / 4.0;
        assert_eq!(d.value(), 2.5);
    }

    #[test]
    fn into_quantity_keeps_value() {
        let q: Quantity<Length> = (3.0 * FOOT).into_quantity();
        assert_eq!(q.value(), 3.0);
        let back = q.in_system::<Imperial>();
        assert_eq!(back, 3.0 * FOOT);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // System conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn same_system_is_a_copy() {
        let d = (1.5 * METER).to::<Si>();
        assert_eq!(d.value(), 1.5);
    }

    #[test]
    fn length_between_systems() {
        assert_relative_eq!((1.0 * METER).to::<Cgs>().value(), 100.0);
        assert_relative_eq!((1.0 * FOOT).to::<Si>().value(), 0.3048);
        assert_relative_eq!(
            (30.48 * CENTIMETER).to::<Imperial>().value(),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn mass_between_systems() {
        assert_relative_eq!((1.0 * POUND).to::<Cgs>().value(), 453.592);
        assert_relative_eq!((500.0 * GRAM).to::<Si>().value(), 0.5);
    }

    #[test]
    fn from_system_mirrors_to() {
        let a: Unit<Length, Cgs> = Unit::from_system(2.0 * METER);
        assert_relative_eq!(a.value(), 200.0);
    }

    #[test]
    fn derived_dimension_converts_per_axis() {
        let v: Unit<Velocity, Si> = Unit::new(1.0);
        assert_relative_eq!(v.to::<Imperial>().value(), 1.0 / 0.3048);

        let w: Unit<Work, Imperial> = Unit::new(1.0);
        assert_relative_eq!(
            w.to::<Si>().value(),
            0.453592 * 0.3048 * 0.3048,
            max_relative = 1e-12
        );
    }

    #[test]
    fn round_trip_returns_original() {
        let f: Unit<Force, Cgs> = Unit::new(12.5);
        let back = f.to::<Imperial>().to::<Si>().to::<Cgs>();
        assert_relative_eq!(back.value(), 12.5, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic across systems
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn product_is_in_left_system() {
        let area = 4.0 * METER * (1.0 * CENTIMETER);
        assert_eq!(area.system(), "SI");
        assert_relative_eq!(area.value(), 0.04);
        let area: Unit<Area, Si> = area.retag();
        assert_relative_eq!(area.value(), 0.04);

        let flipped = (1.0 * CENTIMETER) * (4.0 * METER);
        assert_eq!(flipped.system(), "CGS");
        assert_relative_eq!(flipped.value(), 400.0);
    }

    #[test]
    fn quotient_converts_rhs() {
        let v = (1.0 * FOOT) / (1.0 * SECOND);
        let v: Unit<Velocity, Imperial> = v.retag();
        assert_relative_eq!(v.value(), 1.0);

        let ratio = (1.0 * METER) / (1.0 * FOOT);
        assert!(ratio.dimension().is_dimensionless());
        assert_relative_eq!(ratio.value(), 1.0 / 0.3048);
    }

    #[test]
    fn sum_and_difference_convert_rhs() {
        let total = 1.0 * METER + 50.0 * CENTIMETER;
        assert_relative_eq!(total.value(), 1.5);
        let left = 1.0 * KILOGRAM - 1.0 * POUND;
        assert_relative_eq!(left.value(), 1.0 - 0.453592);
    }

    #[test]
    fn negation_and_comparison() {
        let a = 2.0 * METER;
        assert_eq!((-a).value(), -2.0);
        assert!(a > 1.0 * METER);
        assert!(a <= 2.0 * METER);
    }

    #[test]
    fn retag_mismatch_at_runtime() {
        let m: Unit<Mass, Si> = Unit::new(1.0);
        assert!(m.try_retag::<Time>().is_err());
        assert!(m.try_retag::<Mass>().is_ok());
    }

    #[test]
    fn display_and_debug() {
        let d = 2.5 * FOOT;
        assert_eq!(d.to_string(), "2.5");
        let dbg = format!("{:?}", d);
        assert!(dbg.contains("value: 2.5"));
        assert!(dbg.contains("system: \"Imperial\""));
    }

    #[test]
    fn compound_scalar_assign() {
        let mut d = 3.0 * METER;
        d *= 2.0;
        d /= 4.0;
        assert_eq!(d.value(), 1.5);
    }

    #[test]
    fn aggregate_payload_converts_componentwise() {
        #[derive(Clone, Copy, Debug, PartialEq)]
        struct Pair(f64, f64);
        impl Mul<f64> for Pair {
            type Output = Pair;
            fn mul(self, k: f64) -> Pair {
                Pair(self.0 * k, self.1 * k)
            }
        }

        let p: Unit<Length, Si, Pair> = Unit::new(Pair(1.0, 2.0));
        let cm = p.to::<Cgs>().into_value();
        assert_relative_eq!(cm.0, 100.0);
        assert_relative_eq!(cm.1, 200.0);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serialize_raw_value() {
            let json = serde_json::to_string(&(2.0 * METER)).unwrap();
            assert_eq!(json, "2.0");
            let back: Unit<Length, Si> = serde_json::from_str(&json).unwrap();
            assert_eq!(back, 2.0 * METER);
        }
    }
}
