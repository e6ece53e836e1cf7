//! Error type shared by every fallible operation in the crate.

use crate::vector::DimensionVector;

/// Result type for dimension algebra and unit conversion.
pub type Result<T> = core::result::Result<T, DimensionError>;

/// Everything that can go wrong while combining dimensions, rationals or unit systems.
///
/// These are structural errors: they describe a programming mistake at the call site, never a
/// transient condition. Typed operators on [`Quantity`](crate::Quantity) and [`Unit`](crate::Unit)
/// surface them at compile time; the `try_*` methods and the runtime conversion API return them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    /// Operands that must share a dimension carry different ones.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension of the left-hand (or target) side.
        expected: DimensionVector,
        /// Dimension that was supplied.
        found: DimensionVector,
    },

    /// A compound `*=` or `/=` was given a dimensioned right-hand side.
    #[error("right-hand side must be dimensionless, found {found}")]
    NotDimensionless {
        /// Dimension of the offending right-hand side.
        found: DimensionVector,
    },

    /// Both operands of `gcd` were zero.
    #[error("gcd(0, 0) is undefined")]
    UndefinedGcd,

    /// A `gcd` or sign normalization does not fit in `i64` (only reachable through `i64::MIN`).
    #[error("rational arithmetic overflowed i64")]
    Overflow,

    /// A rational was built (or simplified) with a zero denominator.
    #[error("rational with a zero denominator")]
    ZeroDenominator,

    /// Neither direction of a base-unit pair is present in the conversion tables.
    #[error("no conversion between base units `{from}` and `{to}`")]
    UnknownConversion {
        /// Symbol of the source base unit.
        from: &'static str,
        /// Symbol of the target base unit.
        to: &'static str,
    },

    /// An elementwise operation received sequences of different lengths.
    #[error("length mismatch: expected {expected} axes, found {found}")]
    LengthMismatch {
        /// Length of the first operand.
        expected: usize,
        /// Length of the operand that disagreed.
        found: usize,
    },

    /// More exponents were supplied than a [`DimensionVector`] can hold.
    #[error("{len} axes exceed the capacity of {max}")]
    TooManyAxes {
        /// Number of exponents supplied.
        len: usize,
        /// Capacity, [`MAX_AXES`](crate::MAX_AXES).
        max: usize,
    },
}

impl DimensionError {
    /// Static description of the error kind.
    ///
    /// This is the message used when an error is hit during constant evaluation, where the
    /// formatted `Display` output is unavailable.
    pub const fn summary(&self) -> &'static str {
        match self {
            DimensionError::DimensionMismatch { .. } => "dimension mismatch",
            DimensionError::NotDimensionless { .. } => "right-hand side is not dimensionless",
            DimensionError::UndefinedGcd => "gcd(0, 0) is undefined",
            DimensionError::Overflow => "rational arithmetic overflowed i64",
            DimensionError::ZeroDenominator => "rational with a zero denominator",
            DimensionError::UnknownConversion { .. } => "no conversion between base units",
            DimensionError::LengthMismatch { .. } => "dimension vectors have different lengths",
            DimensionError::TooManyAxes { .. } => "too many dimension axes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_length_mismatch() {
        let err = DimensionError::LengthMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "length mismatch: expected 3 axes, found 2");
    }

    #[test]
    fn display_unknown_conversion() {
        let err = DimensionError::UnknownConversion {
            from: "furlong",
            to: "m",
        };
        assert_eq!(
            err.to_string(),
            "no conversion between base units `furlong` and `m`"
        );
    }

    #[test]
    fn display_dimension_mismatch_renders_vectors() {
        let err = DimensionError::DimensionMismatch {
            expected: DimensionVector::from_ints(&[0, 1, 0]),
            found: DimensionVector::from_ints(&[1, 0, 0]),
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected [0/1, 1/1, 0/1, end], found [1/1, 0/1, 0/1, end]"
        );
    }

    #[test]
    fn summary_is_static() {
        assert_eq!(DimensionError::UndefinedGcd.summary(), "gcd(0, 0) is undefined");
        assert_eq!(
            DimensionError::NotDimensionless {
                found: DimensionVector::from_ints(&[0, 1, 0])
            }
            .summary(),
            "right-hand side is not dimensionless"
        );
    }
}
