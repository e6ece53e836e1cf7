//! Named dimensions over the three built-in axes: *mass, length, time*.
//!
//! Each dimension is an uninhabited enum whose exponent vector is declared with
//! `#[derive(Dimension)]`. Derived results such as `Product<Length, Force>` are interchangeable with
//! the named dimension of the same vector (here [`Work`]) through [`Quantity::to`](crate::Quantity::to).
//!
//! ```rust
//! use noda_core::dimensions::{Force, Length, Work};
//! use noda_core::{Dimension, Product};
//!
//! assert_eq!(<Product<Length, Force>>::VECTOR, Work::VECTOR);
//! ```

use noda_derive::Dimension;

/// Number of base axes used by the built-in dimensions and unit systems.
pub const AXES: usize = 3;

/// Pure number (all exponents zero).
#[derive(Dimension)]
#[dimension(exponents = [0, 0, 0])]
pub enum Number {}

/// Mass, `M`.
#[derive(Dimension)]
#[dimension(exponents = [1, 0, 0])]
pub enum Mass {}

/// Length, `L`.
#[derive(Dimension)]
#[dimension(exponents = [0, 1, 0])]
pub enum Length {}

/// Time, `T`.
#[derive(Dimension)]
#[dimension(exponents = [0, 0, 1])]
pub enum Time {}

/// Velocity, `L T^-1`.
#[derive(Dimension)]
#[dimension(exponents = [0, 1, -1])]
pub enum Velocity {}

/// Acceleration, `L T^-2`.
#[derive(Dimension)]
#[dimension(exponents = [0, 1, -2])]
pub enum Acceleration {}

/// Force, `M L T^-2`.
#[derive(Dimension)]
#[dimension(exponents = [1, 1, -2])]
pub enum Force {}

/// Work (energy), `M L^2 T^-2`.
#[derive(Dimension)]
#[dimension(exponents = [1, 2, -2])]
pub enum Work {}

/// Area, `L^2`.
#[derive(Dimension)]
#[dimension(exponents = [0, 2, 0])]
pub enum Area {}

/// Volume, `L^3`.
#[derive(Dimension)]
#[dimension(exponents = [0, 3, 0])]
pub enum Volume {}

/// Frequency, `T^-1`.
#[derive(Dimension)]
#[dimension(exponents = [0, 0, -1])]
pub enum Frequency {}

/// Power, `M L^2 T^-3`.
#[derive(Dimension)]
#[dimension(exponents = [1, 2, -3])]
pub enum Power {}

/// Pressure, `M L^-1 T^-2`.
#[derive(Dimension)]
#[dimension(exponents = [1, -1, -2])]
pub enum Pressure {}

/// Momentum, `M L T^-1`.
#[derive(Dimension)]
#[dimension(exponents = [1, 1, -1])]
pub enum Momentum {}

/// Mass density, `M L^-3`.
#[derive(Dimension)]
#[dimension(exponents = [1, -3, 0])]
pub enum Density {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dimension, DimensionVector, Inverse, Product, Quotient, Root};

    #[test]
    fn every_named_dimension_uses_three_axes() {
        let vectors = [
            Number::VECTOR,
            Mass::VECTOR,
            Length::VECTOR,
            Time::VECTOR,
            Velocity::VECTOR,
            Acceleration::VECTOR,
            Force::VECTOR,
            Work::VECTOR,
            Area::VECTOR,
            Volume::VECTOR,
            Frequency::VECTOR,
            Power::VECTOR,
            Pressure::VECTOR,
            Momentum::VECTOR,
            Density::VECTOR,
        ];
        assert!(vectors.iter().all(|v| v.len() == AXES));
    }

    #[test]
    fn number_is_dimensionless() {
        assert_eq!(Number::VECTOR, DimensionVector::dimensionless(AXES));
    }

    #[test]
    fn derived_relations_hold() {
        assert_eq!(<Quotient<Length, Time>>::VECTOR, Velocity::VECTOR);
        assert_eq!(<Quotient<Velocity, Time>>::VECTOR, Acceleration::VECTOR);
        assert_eq!(<Product<Mass, Acceleration>>::VECTOR, Force::VECTOR);
        assert_eq!(<Product<Force, Length>>::VECTOR, Work::VECTOR);
        assert_eq!(<Quotient<Work, Time>>::VECTOR, Power::VECTOR);
        assert_eq!(<Quotient<Force, Area>>::VECTOR, Pressure::VECTOR);
        assert_eq!(<Product<Mass, Velocity>>::VECTOR, Momentum::VECTOR);
        assert_eq!(<Quotient<Mass, Volume>>::VECTOR, Density::VECTOR);
        assert_eq!(<Inverse<Time>>::VECTOR, Frequency::VECTOR);
        assert_eq!(<Root<Area>>::VECTOR, Length::VECTOR);
    }
}
