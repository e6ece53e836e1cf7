//! One-valued unit constants for building [`Unit`] values from literals.
//!
//! ```rust
//! use noda_core::units::{METER, SECOND};
//!
//! let d = 4.0 * METER;
//! let t = 2.0 * SECOND;
//! assert_eq!((d / t).value(), 2.0);
//! ```

use crate::dimensions::{Length, Mass, Time};
use crate::system::{Cgs, Imperial, Si};
use crate::Unit;

/// One kilogram.
pub const KILOGRAM: Unit<Mass, Si> = Unit::new(1.0);
/// One meter.
pub const METER: Unit<Length, Si> = Unit::new(1.0);
/// One second.
pub const SECOND: Unit<Time, Si> = Unit::new(1.0);

/// One gram.
pub const GRAM: Unit<Mass, Cgs> = Unit::new(1.0);
/// One centimeter.
pub const CENTIMETER: Unit<Length, Cgs> = Unit::new(1.0);

/// One pound.
pub const POUND: Unit<Mass, Imperial> = Unit::new(1.0);
/// One foot.
pub const FOOT: Unit<Length, Imperial> = Unit::new(1.0);
