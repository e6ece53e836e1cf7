//! Base units and unit systems.
//!
//! A unit system names one [`BaseUnit`] per dimension axis. Three systems are predefined, all over
//! the *mass, length, time* axes:
//!
//! | System       | Mass     | Length     | Time   |
//! |--------------|----------|------------|--------|
//! | [`Si`]       | kilogram | meter      | second |
//! | [`Cgs`]      | gram     | centimeter | second |
//! | [`Imperial`] | pound    | foot       | second |
//!
//! New systems implement [`UnitSystem`] by hand:
//!
//! ```rust
//! use noda_core::system::base;
//! use noda_core::{BaseUnit, UnitSystem};
//!
//! pub enum Workshop {}
//! impl UnitSystem for Workshop {
//!     const NAME: &'static str = "workshop";
//!     const BASE_UNITS: &'static [BaseUnit] = &[base::KILOGRAM, base::INCH, base::SECOND];
//! }
//! ```

use crate::conversion::ConversionTable;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A named base unit, such as the kilogram or the foot.
///
/// Identity is the symbol: two base units with the same symbol are the same unit.
#[derive(Clone, Copy, Debug)]
pub struct BaseUnit {
    symbol: &'static str,
    name: &'static str,
}

impl BaseUnit {
    /// Creates a base unit.
    pub const fn new(symbol: &'static str, name: &'static str) -> Self {
        Self { symbol, name }
    }

    /// Short symbol, e.g. `"kg"`.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Long name, e.g. `"kilogram"`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Symbol equality, usable in constant evaluation.
    pub const fn same_as(&self, other: &Self) -> bool {
        let a = self.symbol.as_bytes();
        let b = other.symbol.as_bytes();
        if a.len() != b.len() {
            return false;
        }
        let mut i = 0;
        while i < a.len() {
            if a[i] != b[i] {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl PartialEq for BaseUnit {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for BaseUnit {}

impl Hash for BaseUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}

/// `true` if both lists name the same base units in the same order.
pub const fn same_base_units(a: &[BaseUnit], b: &[BaseUnit]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if !a[i].same_as(&b[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Predefined base units.
pub mod base {
    use super::BaseUnit;

    /// Kilogram.
    pub const KILOGRAM: BaseUnit = BaseUnit::new("kg", "kilogram");
    /// Gram.
    pub const GRAM: BaseUnit = BaseUnit::new("g", "gram");
    /// Avoirdupois pound.
    pub const POUND: BaseUnit = BaseUnit::new("lb", "pound");
    /// Meter.
    pub const METER: BaseUnit = BaseUnit::new("m", "meter");
    /// Centimeter.
    pub const CENTIMETER: BaseUnit = BaseUnit::new("cm", "centimeter");
    /// International foot.
    pub const FOOT: BaseUnit = BaseUnit::new("ft", "foot");
    /// International inch.
    pub const INCH: BaseUnit = BaseUnit::new("in", "inch");
    /// Second.
    pub const SECOND: BaseUnit = BaseUnit::new("s", "second");
}

/// Marker trait for **unit systems**.
///
/// `BASE_UNITS` holds one base unit per dimension axis, in axis order. `CONVERSIONS` may add entries
/// for base units the [standard table](ConversionTable::STANDARD) does not know. It is consulted
/// before the standard table whenever this system is the source or the target of a conversion.
pub trait UnitSystem: 'static {
    /// Human-readable name.
    const NAME: &'static str;

    /// Base unit per axis.
    const BASE_UNITS: &'static [BaseUnit];

    /// Extra conversions specific to this system.
    const CONVERSIONS: ConversionTable = ConversionTable::EMPTY;
}

/// The International System of Units over mass, length and time.
#[derive(noda_derive::UnitSystem)]
#[system(name = "SI", units = [base::KILOGRAM, base::METER, base::SECOND])]
pub enum Si {}

/// Centimetre-gram-second system.
#[derive(noda_derive::UnitSystem)]
#[system(name = "CGS", units = [base::GRAM, base::CENTIMETER, base::SECOND])]
pub enum Cgs {}

/// Imperial units: pound, foot, second.
#[derive(noda_derive::UnitSystem)]
#[system(name = "Imperial", units = [base::POUND, base::FOOT, base::SECOND])]
pub enum Imperial {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::AXES;

    #[test]
    fn identity_is_the_symbol() {
        let other_kg = BaseUnit::new("kg", "kilo");
        assert_eq!(base::KILOGRAM, other_kg);
        assert!(base::KILOGRAM.same_as(&other_kg));
        assert!(!base::KILOGRAM.same_as(&base::GRAM));
        assert_ne!(base::METER, base::CENTIMETER);
    }

    #[test]
    fn same_as_checks_length() {
        assert!(!BaseUnit::new("m", "").same_as(&BaseUnit::new("mm", "")));
    }

    #[test]
    fn display_is_symbol() {
        assert_eq!(base::FOOT.to_string(), "ft");
        assert_eq!(base::FOOT.name(), "foot");
    }

    #[test]
    fn predefined_systems() {
        assert_eq!(Si::NAME, "SI");
        assert_eq!(Cgs::NAME, "CGS");
        assert_eq!(Imperial::NAME, "Imperial");
        assert_eq!(
            Si::BASE_UNITS,
            &[base::KILOGRAM, base::METER, base::SECOND]
        );
        assert_eq!(Cgs::BASE_UNITS[1], base::CENTIMETER);
        assert_eq!(Imperial::BASE_UNITS[0], base::POUND);
        for units in [Si::BASE_UNITS, Cgs::BASE_UNITS, Imperial::BASE_UNITS] {
            assert_eq!(units.len(), AXES);
        }
    }

    #[test]
    fn predefined_systems_use_standard_table_only() {
        assert!(Si::CONVERSIONS.entries().is_empty());
        assert!(Imperial::CONVERSIONS.entries().is_empty());
    }

    #[test]
    fn same_base_units_compares_in_order() {
        assert!(same_base_units(Si::BASE_UNITS, Si::BASE_UNITS));
        assert!(!same_base_units(Si::BASE_UNITS, Cgs::BASE_UNITS));
        assert!(!same_base_units(Si::BASE_UNITS, &Si::BASE_UNITS[..2]));
    }
}
