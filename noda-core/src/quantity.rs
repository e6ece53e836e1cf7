//! Quantity type and its implementations.

use crate::dimension::{
    check_dimensionless_for, check_same, Dimension, DimensionlessFor, Exponent, Power, Product,
    Quotient, Root, SameDimension, WellFormed,
};
use crate::dimensions::Number;
use crate::error::Result;
use crate::real::Real;
use crate::system::UnitSystem;
use crate::unit::Unit;
use crate::vector::DimensionVector;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value tagged with a compile-time [`Dimension`].
///
/// `Quantity<D, T>` is a transparent wrapper around `T`: the dimension lives only in the type, so
/// dimension checks cost nothing at run time. Arithmetic derives the result dimension through the
/// type-level algebra, and operations that need equal dimensions refuse to build otherwise.
///
/// # Examples
///
/// ```rust
/// use noda_core::dimensions::{Force, Length, Work};
/// use noda_core::Quantity;
///
/// let d = Quantity::<Length>::new(1.0);
/// let f = Quantity::<Force>::new(2.0);
/// let w: Quantity<Work> = (d * f).to();
/// assert_eq!(w.value(), 2.0);
/// ```
///
/// Adding quantities of different dimensions does not compile:
///
/// ```compile_fail
/// use noda_core::dimensions::{Length, Mass};
/// use noda_core::Quantity;
///
/// let _ = Quantity::<Length>::new(1.0) + Quantity::<Mass>::new(1.0);
/// ```
///
/// Neither does retagging to an unrelated dimension:
///
/// ```compile_fail
/// use noda_core::dimensions::{Length, Time};
/// use noda_core::Quantity;
///
/// let _: Quantity<Time> = Quantity::<Length>::new(1.0).to();
/// ```
#[repr(transparent)]
pub struct Quantity<D: Dimension, T = f64> {
    value: T,
    dimension: PhantomData<fn() -> D>,
}

/// Euler's number as a dimensionless quantity.
pub const E: Quantity<Number> = Quantity::new(core::f64::consts::E);

/// π as a dimensionless quantity.
pub const PI: Quantity<Number> = Quantity::new(core::f64::consts::PI);

/// The golden ratio as a dimensionless quantity.
pub const PHI: Quantity<Number> = Quantity::new(1.618_033_988_749_895);

impl<D: Dimension, T> Quantity<D, T> {
    /// Wraps a raw value.
    ///
    /// ```rust
    /// use noda_core::dimensions::Time;
    /// use noda_core::Quantity;
    ///
    /// const T0: Quantity<Time> = Quantity::new(2.5);
    /// assert_eq!(T0.value(), 2.5);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            dimension: PhantomData,
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

    /// Drops the dimension and returns the raw value.
    ///
    /// This is the explicit escape hatch out of dimension checking.
    #[inline]
    pub fn discard_dims(self) -> T {
        self.value
    }

    /// Exponent vector of `D`.
    #[inline]
    pub const fn dimension(&self) -> DimensionVector {
        D::VECTOR
    }

    /// Retags the value with another dimension type of the same dimension.
    ///
    /// Dimensions built through the algebra are distinct types from the named ones, so
    /// `Quantity<Product<Length, Force>>` becomes `Quantity<Work>` through `to`.
    #[inline]
    pub fn to<D2: Dimension>(self) -> Quantity<D2, T> {
        let () = SameDimension::<D, D2>::CHECK;
        Quantity::new(self.value)
    }

    /// Runtime-checked form of [`Quantity::to`].
    ///
    /// ```rust
    /// use noda_core::dimensions::{Length, Mass};
    /// use noda_core::{DimensionError, Quantity};
    ///
    /// let q = Quantity::<Length>::new(1.0);
    /// assert!(matches!(
    ///     q.try_to::<Mass>(),
    ///     Err(DimensionError::DimensionMismatch { .. })
    /// ));
    /// ```
    pub fn try_to<D2: Dimension>(self) -> Result<Quantity<D2, T>> {
        check_same::<D, D2>()?;
        Ok(Quantity::new(self.value))
    }

    /// Projects one component of an aggregate payload, keeping the dimension.
    ///
    /// ```rust
    /// use noda_core::dimensions::Velocity;
    /// use noda_core::Quantity;
    ///
    /// let v = Quantity::<Velocity, [f64; 3]>::new([1.0, 2.0, 3.0]);
    /// let vy: Quantity<Velocity> = v.at(1);
    /// assert_eq!(vy.value(), 2.0);
    /// ```
    #[inline]
    pub fn at<I>(&self, index: I) -> Quantity<D, T::Output>
    where
        T: Index<I>,
        T::Output: Clone,
    {
        Quantity::new(self.value[index].clone())
    }

    /// Tags the value with a unit system, keeping the raw value as is.
    #[inline]
    pub fn in_system<S: UnitSystem>(self) -> Unit<D, S, T> {
        Unit::new(self.value)
    }

    /// Runtime-checked `self + rhs`.
    pub fn try_add<D2: Dimension, T2>(self, rhs: Quantity<D2, T2>) -> Result<Quantity<D, T::Output>>
    where
        T: Add<T2>,
    {
        check_same::<D, D2>()?;
        Ok(Quantity::new(self.value + rhs.value))
    }

    /// Runtime-checked `self - rhs`.
    pub fn try_sub<D2: Dimension, T2>(self, rhs: Quantity<D2, T2>) -> Result<Quantity<D, T::Output>>
    where
        T: Sub<T2>,
    {
        check_same::<D, D2>()?;
        Ok(Quantity::new(self.value - rhs.value))
    }

    /// Runtime-checked `self += rhs`. On error `self` is left untouched.
    pub fn try_add_assign<D2: Dimension, T2>(&mut self, rhs: Quantity<D2, T2>) -> Result<()>
    where
        T: AddAssign<T2>,
    {
        check_same::<D, D2>()?;
        self.value += rhs.value;
        Ok(())
    }

    /// Runtime-checked `self -= rhs`. On error `self` is left untouched.
    pub fn try_sub_assign<D2: Dimension, T2>(&mut self, rhs: Quantity<D2, T2>) -> Result<()>
    where
        T: SubAssign<T2>,
    {
        check_same::<D, D2>()?;
        self.value -= rhs.value;
        Ok(())
    }

    /// Runtime-checked `self *= rhs`; `rhs` must be dimensionless.
    pub fn try_mul_assign<D2: Dimension, T2>(&mut self, rhs: Quantity<D2, T2>) -> Result<()>
    where
        T: MulAssign<T2>,
    {
        check_dimensionless_for::<D, D2>()?;
        self.value *= rhs.value;
        Ok(())
    }

    /// Runtime-checked `self /= rhs`; `rhs` must be dimensionless.
    pub fn try_div_assign<D2: Dimension, T2>(&mut self, rhs: Quantity<D2, T2>) -> Result<()>
    where
        T: DivAssign<T2>,
    {
        check_dimensionless_for::<D, D2>()?;
        self.value /= rhs.value;
        Ok(())
    }

    /// Runtime-checked comparison.
    pub fn try_partial_cmp<D2: Dimension, T2>(
        &self,
        rhs: &Quantity<D2, T2>,
    ) -> Result<Option<Ordering>>
    where
        T: PartialOrd<T2>,
    {
        check_same::<D, D2>()?;
        Ok(self.value.partial_cmp(&rhs.value))
    }
}

impl<D: Dimension, T: Copy> Quantity<D, T> {
    /// Returns the raw value.
    ///
    /// ```rust
    /// use noda_core::dimensions::Mass;
    /// use noda_core::Quantity;
    ///
    /// assert_eq!(Quantity::<Mass>::new(3.0).value(), 3.0);
    /// ```
    #[inline]
    pub const fn value(self) -> T {
        self.value
    }
}

impl<D: Dimension, T: Real> Quantity<D, T> {
    /// Square root; the exponents halve.
    ///
    /// ```rust
    /// use noda_core::dimensions::{Area, Length};
    /// use noda_core::Quantity;
    ///
    /// let side: Quantity<Length> = Quantity::<Area>::new(4.0).sqrt().to();
    /// assert_eq!(side.value(), 2.0);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<Root<D>, T> {
        let () = WellFormed::<Root<D>>::CHECK;
        Quantity::new(self.value.sqrt())
    }

    /// Raises to the rational power `R`; the exponents scale by `R`.
    ///
    /// ```rust
    /// use noda_core::dimensions::{Length, Volume};
    /// use noda_core::{Quantity, Ratio};
    ///
    /// let v: Quantity<Volume> = Quantity::<Length>::new(2.0).pow::<Ratio<3>>().to();
    /// assert_eq!(v.value(), 8.0);
    /// ```
    #[inline]
    pub fn pow<R: Exponent>(self) -> Quantity<Power<D, R>, T> {
        let () = WellFormed::<Power<D, R>>::CHECK;
        Quantity::new(self.value.powr(R::RATIONAL))
    }
}

/// Free-function form of [`Quantity::sqrt`].
#[inline]
pub fn sqrt<D: Dimension, T: Real>(q: Quantity<D, T>) -> Quantity<Root<D>, T> {
    q.sqrt()
}

/// Free-function form of [`Quantity::pow`], taking the exponent as a value.
///
/// ```rust
/// use noda_core::dimensions::Length;
/// use noda_core::{pow, Quantity, Ratio};
///
/// let cube = pow(Quantity::<Length>::new(3.0), Ratio::<3>);
/// assert_eq!(cube.value(), 27.0);
/// ```
#[inline]
pub fn pow<D: Dimension, T: Real, R: Exponent>(
    q: Quantity<D, T>,
    _exponent: R,
) -> Quantity<Power<D, R>, T> {
    q.pow::<R>()
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived-like trait implementations
//
// Written by hand so the bounds fall on `T` only, never on the dimension tag.
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, T: Clone> Clone for Quantity<D, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<D: Dimension, T: Copy> Copy for Quantity<D, T> {}

impl<D: Dimension, T: Default> Default for Quantity<D, T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<D: Dimension, T: fmt::Debug> fmt::Debug for Quantity<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("dimension", &D::VECTOR)
            .finish()
    }
}

/// Renders the raw value only; format flags are forwarded.
impl<D: Dimension, T: fmt::Display> fmt::Display for Quantity<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

/// The product must be a valid dimension vector; multiplying across different axis counts does
/// not compile.
///
/// ```compile_fail
/// use noda_core::{Dimension, DimensionVector, Quantity};
///
/// enum Planar {}
/// impl Dimension for Planar {
///     const VECTOR: DimensionVector = DimensionVector::from_ints(&[0, 1]);
/// }
/// enum Spatial {}
/// impl Dimension for Spatial {
///     const VECTOR: DimensionVector = DimensionVector::from_ints(&[0, 1, 0]);
/// }
///
/// let _ = Quantity::<Planar>::new(1.0) * Quantity::<Spatial>::new(1.0);
/// ```
impl<D, D2, T, T2> Mul<Quantity<D2, T2>> for Quantity<D, T>
where
    D: Dimension,
    D2: Dimension,
    T: Mul<T2>,
{
    type Output = Quantity<Product<D, D2>, T::Output>;

    #[inline]
    fn mul(self, rhs: Quantity<D2, T2>) -> Self::Output {
        let () = WellFormed::<Product<D, D2>>::CHECK;
        Quantity::new(self.value * rhs.value)
    }
}

impl<D, D2, T, T2> Div<Quantity<D2, T2>> for Quantity<D, T>
where
    D: Dimension,
    D2: Dimension,
    T: Div<T2>,
{
    type Output = Quantity<Quotient<D, D2>, T::Output>;

    #[inline]
    fn div(self, rhs: Quantity<D2, T2>) -> Self::Output {
        let () = WellFormed::<Quotient<D, D2>>::CHECK;
        Quantity::new(self.value / rhs.value)
    }
}

impl<D, D2, T, T2> Add<Quantity<D2, T2>> for Quantity<D, T>
where
    D: Dimension,
    D2: Dimension,
    T: Add<T2>,
{
    type Output = Quantity<D, T::Output>;

    #[inline]
    fn add(self, rhs: Quantity<D2, T2>) -> Self::Output {
        let () = SameDimension::<D, D2>::CHECK;
        Quantity::new(self.value + rhs.value)
    }
}

/// ```compile_fail
/// use noda_core::dimensions::{Length, Time};
/// use noda_core::Quantity;
///
/// let _ = Quantity::<Length>::new(3.0) - Quantity::<Time>::new(1.0);
/// ```
impl<D, D2, T, T2> Sub<Quantity<D2, T2>> for Quantity<D, T>
where
    D: Dimension,
    D2: Dimension,
    T: Sub<T2>,
{
    type Output = Quantity<D, T::Output>;

    #[inline]
    fn sub(self, rhs: Quantity<D2, T2>) -> Self::Output {
        let () = SameDimension::<D, D2>::CHECK;
        Quantity::new(self.value - rhs.value)
    }
}

/// ```compile_fail
/// use noda_core::dimensions::{Length, Mass};
/// use noda_core::Quantity;
///
/// let mut q = Quantity::<Length>::new(1.0);
/// q += Quantity::<Mass>::new(1.0);
/// ```
impl<D, D2, T, T2> AddAssign<Quantity<D2, T2>> for Quantity<D, T>
where
    D: Dimension,
    D2: Dimension,
    T: AddAssign<T2>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<D2, T2>) {
        let () = SameDimension::<D, D2>::CHECK;
        self.value += rhs.value;
    }
}

/// ```compile_fail
/// use noda_core::dimensions::{Length, Mass};
/// use noda_core::Quantity;
///
/// let mut q = Quantity::<Length>::new(1.0);
/// q -= Quantity::<Mass>::new(1.0);
/// ```
impl<D, D2, T, T2> SubAssign<Quantity<D2, T2>> for Quantity<D, T>
where
    D: Dimension,
    D2: Dimension,
    T: SubAssign<T2>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<D2, T2>) {
        let () = SameDimension::<D, D2>::CHECK;
        self.value -= rhs.value;
    }
}

/// `q *= r` keeps the dimension of `q`, so `r` must be dimensionless.
///
/// ```compile_fail
/// use noda_core::dimensions::{Length, Time};
/// use noda_core::Quantity;
///
/// let mut q = Quantity::<Length>::new(1.0);
/// q *= Quantity::<Time>::new(2.0);
/// ```
impl<D, D2, T, T2> MulAssign<Quantity<D2, T2>> for Quantity<D, T>
where
    D: Dimension,
    D2: Dimension,
    T: MulAssign<T2>,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Quantity<D2, T2>) {
        let () = DimensionlessFor::<D, D2>::CHECK;
        self.value *= rhs.value;
    }
}

/// Like `*=`, the divisor must be dimensionless.
///
/// ```compile_fail
/// use noda_core::dimensions::{Length, Time};
/// use noda_core::Quantity;
///
/// let mut q = Quantity::<Length>::new(1.0);
/// q /= Quantity::<Time>::new(2.0);
/// ```
impl<D, D2, T, T2> DivAssign<Quantity<D2, T2>> for Quantity<D, T>
where
    D: Dimension,
    D2: Dimension,
    T: DivAssign<T2>,
{
    #[inline]
    fn div_assign(&mut self, rhs: Quantity<D2, T2>) {
        let () = DimensionlessFor::<D, D2>::CHECK;
        self.value /= rhs.value;
    }
}

impl<D: Dimension, T: Neg> Neg for Quantity<D, T> {
    type Output = Quantity<D, T::Output>;

    #[inline]
    fn neg(self) -> Self::Output {
        Quantity::new(-self.value)
    }
}

/// Comparing values of different dimensions does not compile.
///
/// ```compile_fail
/// use noda_core::dimensions::{Length, Mass};
/// use noda_core::Quantity;
///
/// let _ = Quantity::<Length>::new(1.0) == Quantity::<Mass>::new(1.0);
/// ```
impl<D, D2, T, T2> PartialEq<Quantity<D2, T2>> for Quantity<D, T>
where
    D: Dimension,
    D2: Dimension,
    T: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &Quantity<D2, T2>) -> bool {
        let () = SameDimension::<D, D2>::CHECK;
        self.value == other.value
    }
}

/// ```compile_fail
/// use noda_core::dimensions::{Length, Time};
/// use noda_core::Quantity;
///
/// let _ = Quantity::<Length>::new(1.0) < Quantity::<Time>::new(2.0);
/// ```
impl<D, D2, T, T2> PartialOrd<Quantity<D2, T2>> for Quantity<D, T>
where
    D: Dimension,
    D2: Dimension,
    T: PartialOrd<T2>,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<D2, T2>) -> Option<Ordering> {
        let () = SameDimension::<D, D2>::CHECK;
        self.value.partial_cmp(&other.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension, T: Serialize> Serialize for Quantity<D, T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension, T: Deserialize<'de>> Deserialize<'de> for Quantity<D, T> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Quantity::new)
    }
}
