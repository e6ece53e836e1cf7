//! Conversion factors between base units and their composition over a dimension.
//!
//! A [`Conversion`] states that one `from` equals `factor` `to`. To convert a value of dimension
//! `D` from system `S1` to system `S2`, each axis contributes the base factor between the two
//! systems' units on that axis, raised to the axis exponent:
//!
//! ```text
//! factor = Π_i base_factor(S2[i], S1[i]) ^ D[i]
//! ```
//!
//! Lookups are resolved during constant evaluation for the typed API ([`composed_factor`]); only
//! the floating-point exponentiation happens at run time.
//!
//! ```rust
//! use noda_core::dimensions::Area;
//! use noda_core::system::{Cgs, Si};
//! use noda_core::composed_factor;
//!
//! // 1 m² = 10 000 cm²
//! let f = composed_factor::<Area, Si, Cgs>();
//! assert!((f - 10_000.0).abs() < 1e-9);
//! ```

use crate::dimension::Dimension;
use crate::error::{DimensionError, Result};
use crate::rational::Rational;
use crate::real::Real;
use crate::system::{base, BaseUnit, UnitSystem};
use crate::vector::{DimensionVector, MAX_AXES};
use core::marker::PhantomData;

/// One table entry: `1 from == factor to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion {
    /// Target base unit.
    pub to: BaseUnit,
    /// Source base unit.
    pub from: BaseUnit,
    /// How many `to` make one `from`.
    pub factor: f64,
}

impl Conversion {
    /// Creates an entry stating `1 from == factor to`.
    pub const fn new(to: BaseUnit, from: BaseUnit, factor: f64) -> Self {
        Self { to, from, factor }
    }
}

const STANDARD_ENTRIES: [Conversion; 9] = [
    Conversion::new(base::KILOGRAM, base::GRAM, 0.001),
    Conversion::new(base::METER, base::CENTIMETER, 0.01),
    Conversion::new(base::KILOGRAM, base::POUND, 0.453592),
    Conversion::new(base::METER, base::FOOT, 0.3048),
    Conversion::new(base::GRAM, base::POUND, 453.592),
    Conversion::new(base::CENTIMETER, base::FOOT, 30.48),
    Conversion::new(base::METER, base::INCH, 0.0254),
    Conversion::new(base::CENTIMETER, base::INCH, 2.54),
    Conversion::new(base::INCH, base::FOOT, 12.0),
];

/// Factor between two base units, as stored in a table.
///
/// A reverse lookup keeps the stored factor and flags it, so the division is deferred to
/// [`BaseFactor::value`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseFactor {
    factor: f64,
    reciprocal: bool,
}

impl BaseFactor {
    /// Factor between a unit and itself.
    pub const IDENTITY: Self = Self {
        factor: 1.0,
        reciprocal: false,
    };

    /// Numeric factor.
    #[inline]
    pub fn value(self) -> f64 {
        if self.reciprocal {
            1.0 / self.factor
        } else {
            self.factor
        }
    }
}

/// An immutable list of conversions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConversionTable {
    entries: &'static [Conversion],
}

impl ConversionTable {
    /// A table with no entries.
    pub const EMPTY: Self = Self::new(&[]);

    /// The built-in table covering kilogram, gram, pound, meter, centimeter, foot and inch.
    pub const STANDARD: Self = Self::new(&STANDARD_ENTRIES);

    /// Wraps a static list of entries.
    pub const fn new(entries: &'static [Conversion]) -> Self {
        Self { entries }
    }

    /// The table's entries.
    #[inline]
    pub const fn entries(&self) -> &'static [Conversion] {
        self.entries
    }

    /// Finds the factor converting `from` into `to`.
    ///
    /// Same units need no entry. Otherwise a direct `(to, from)` entry wins over a reverse
    /// `(from, to)` one.
    pub const fn lookup(&self, to: &BaseUnit, from: &BaseUnit) -> Option<BaseFactor> {
        if to.same_as(from) {
            return Some(BaseFactor::IDENTITY);
        }
        let mut reverse = None;
        let mut i = 0;
        while i < self.entries.len() {
            let c = &self.entries[i];
            if c.to.same_as(to) && c.from.same_as(from) {
                return Some(BaseFactor {
                    factor: c.factor,
                    reciprocal: false,
                });
            }
            if reverse.is_none() && c.to.same_as(from) && c.from.same_as(to) {
                reverse = Some(BaseFactor {
                    factor: c.factor,
                    reciprocal: true,
                });
            }
            i += 1;
        }
        reverse
    }

    /// How many `to` make one `from`.
    ///
    /// ```rust
    /// use noda_core::system::base;
    /// use noda_core::{ConversionTable, DimensionError};
    ///
    /// let t = ConversionTable::STANDARD;
    /// assert_eq!(t.base_factor(&base::KILOGRAM, &base::GRAM), Ok(0.001));
    /// assert_eq!(t.base_factor(&base::GRAM, &base::KILOGRAM), Ok(1000.0));
    /// assert_eq!(t.base_factor(&base::SECOND, &base::SECOND), Ok(1.0));
    /// assert_eq!(
    ///     t.base_factor(&base::SECOND, &base::METER),
    ///     Err(DimensionError::UnknownConversion { from: "m", to: "s" }),
    /// );
    /// ```
    pub fn base_factor(&self, to: &BaseUnit, from: &BaseUnit) -> Result<f64> {
        self.lookup(to, from)
            .map(BaseFactor::value)
            .ok_or(DimensionError::UnknownConversion {
                from: from.symbol(),
                to: to.symbol(),
            })
    }

    /// Runtime conversion factor for a value of dimension `dim` from the `from` units to the `to`
    /// units, using this table only.
    pub fn composed_factor(
        &self,
        dim: &DimensionVector,
        from: &[BaseUnit],
        to: &[BaseUnit],
    ) -> Result<f64> {
        factor_from_tables(dim, from, to, &[*self])
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A resolved sequence of per-axis steps; the output of all table lookups for one conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConversionPlan {
    steps: [Step; MAX_AXES],
    len: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Step {
    base: BaseFactor,
    exponent: Rational,
}

const IDENTITY_STEP: Step = Step {
    base: BaseFactor::IDENTITY,
    exponent: Rational::ZERO,
};

impl ConversionPlan {
    /// Resolves every axis against `tables`, searched in order.
    ///
    /// Axes with a zero exponent need no lookup. Both unit lists must have one entry per axis of
    /// `dim`.
    pub const fn try_build(
        dim: &DimensionVector,
        from: &[BaseUnit],
        to: &[BaseUnit],
        tables: &[ConversionTable],
    ) -> Result<Self> {
        if from.len() != dim.len() {
            return Err(DimensionError::LengthMismatch {
                expected: dim.len(),
                found: from.len(),
            });
        }
        if to.len() != dim.len() {
            return Err(DimensionError::LengthMismatch {
                expected: dim.len(),
                found: to.len(),
            });
        }
        let mut plan = Self {
            steps: [IDENTITY_STEP; MAX_AXES],
            len: dim.len(),
        };
        let exponents = dim.as_slice();
        let mut i = 0;
        while i < exponents.len() {
            let exponent = exponents[i];
            if !exponent.is_zero() {
                let base = match find(tables, &to[i], &from[i]) {
                    Some(f) => f,
                    None => {
                        return Err(DimensionError::UnknownConversion {
                            from: from[i].symbol(),
                            to: to[i].symbol(),
                        })
                    }
                };
                plan.steps[i] = Step { base, exponent };
            }
            i += 1;
        }
        Ok(plan)
    }

    /// Number of axes covered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` for a plan over zero axes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Multiplies the per-axis factors, each raised to its exponent.
    pub fn factor(&self) -> f64 {
        self.steps[..self.len]
            .iter()
            .filter(|s| !s.exponent.is_zero())
            .map(|s| s.base.value().powr(s.exponent))
            .product()
    }
}

const fn find(tables: &[ConversionTable], to: &BaseUnit, from: &BaseUnit) -> Option<BaseFactor> {
    let mut t = 0;
    while t < tables.len() {
        if let Some(f) = tables[t].lookup(to, from) {
            return Some(f);
        }
        t += 1;
    }
    None
}

/// The conversion plan for dimension `D` from system `S1` to system `S2`.
///
/// `PLAN` searches `S2::CONVERSIONS`, then `S1::CONVERSIONS`, then the standard table. A missing
/// pair fails constant evaluation, so the conversion does not build:
///
/// ```compile_fail
/// use noda_core::dimensions::Length;
/// use noda_core::system::{base, Si};
/// use noda_core::{composed_factor, BaseUnit, UnitSystem};
///
/// pub enum Nautical {}
/// impl UnitSystem for Nautical {
///     const NAME: &'static str = "nautical";
///     const BASE_UNITS: &'static [BaseUnit] =
///         &[base::KILOGRAM, BaseUnit::new("nmi", "nautical mile"), base::SECOND];
/// }
///
/// let _ = composed_factor::<Length, Nautical, Si>();
/// ```
pub struct PlanFor<D, S1, S2>(PhantomData<(D, S1, S2)>);

impl<D: Dimension, S1: UnitSystem, S2: UnitSystem> PlanFor<D, S1, S2> {
    /// Plan resolved at compile time.
    pub const PLAN: ConversionPlan = match ConversionPlan::try_build(
        &D::VECTOR,
        S1::BASE_UNITS,
        S2::BASE_UNITS,
        &[S2::CONVERSIONS, S1::CONVERSIONS, ConversionTable::STANDARD],
    ) {
        Ok(plan) => plan,
        Err(e) => panic!("{}", e.summary()),
    };
}

/// Factor converting a value of dimension `D` from system `S1` to system `S2`.
///
/// Every table lookup happens at compile time.
#[inline]
pub fn composed_factor<D: Dimension, S1: UnitSystem, S2: UnitSystem>() -> f64 {
    PlanFor::<D, S1, S2>::PLAN.factor()
}

/// Runtime form of [`composed_factor`] for a dimension only known as a vector.
///
/// ```rust
/// use noda_core::dimensions::Work;
/// use noda_core::system::{Imperial, Si};
/// use noda_core::{try_composed_factor, Dimension};
///
/// let f = try_composed_factor::<Si, Imperial>(&Work::VECTOR).unwrap();
/// assert!((f - 1.0 / (0.453592 * 0.3048 * 0.3048)).abs() < 1e-9);
/// ```
pub fn try_composed_factor<S1: UnitSystem, S2: UnitSystem>(dim: &DimensionVector) -> Result<f64> {
    factor_from_tables(
        dim,
        S1::BASE_UNITS,
        S2::BASE_UNITS,
        &[S2::CONVERSIONS, S1::CONVERSIONS, ConversionTable::STANDARD],
    )
}

fn factor_from_tables(
    dim: &DimensionVector,
    from: &[BaseUnit],
    to: &[BaseUnit],
    tables: &[ConversionTable],
) -> Result<f64> {
    match ConversionPlan::try_build(dim, from, to, tables) {
        Ok(plan) => {
            let factor = plan.factor();
            log::trace!("composed factor for {} is {}", dim, factor);
            Ok(factor)
        }
        Err(e) => {
            log::debug!("cannot compose conversion for {}: {}", dim, e);
            Err(e)
        }
    }
}
