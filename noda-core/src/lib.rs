//! Core type system for dimension-checked physical quantities.
//!
//! `noda-core` models a physical dimension as a vector of rational exponents over a fixed set of
//! base axes (mass, length, time for the built-ins):
//!
//! - A *dimension* is a zero-sized type implementing [`Dimension`], whose [`DimensionVector`] is a
//!   compile-time constant.
//! - A value tagged with a dimension is a [`Quantity<D, T>`], backed by any payload `T`.
//! - Arithmetic derives the result dimension ([`Product`], [`Quotient`], [`Root`], [`Power`]) and
//!   operations that need equal dimensions refuse to build otherwise.
//! - A value additionally tagged with a [`UnitSystem`] is a [`Unit<D, S, T>`]; converting between
//!   systems composes per-axis factors from a [`ConversionTable`].
//!
//! Most users should depend on `noda` (the facade crate) unless they need direct access to these
//! primitives.
//!
//! # What this crate solves
//!
//! - Rejecting `length + mass` before the program runs.
//! - Deriving `length * force = work` and `sqrt(area) = length` automatically, with fractional
//!   exponents where needed.
//! - Zero runtime overhead for dimension tags (phantom types only, checks are constant-evaluated).
//! - Converting between SI, CGS, Imperial or user-defined systems.
//!
//! # What this crate does not try to solve
//!
//! - Symbolic algebra: exponents are plain fractions, reduced and nothing more.
//! - Unit prefixes or a catalog of named units beyond the base units of the predefined systems.
//!
//! # Quick start
//!
//! ```rust
//! use noda_core::dimensions::{Area, Force, Length, Work};
//! use noda_core::Quantity;
//!
//! let d = Quantity::<Length>::new(3.0);
//! let f = Quantity::<Force>::new(2.0);
//! let w: Quantity<Work> = (d * f).to();
//! assert_eq!(w.value(), 6.0);
//!
//! let side: Quantity<Length> = Quantity::<Area>::new(9.0).sqrt().to();
//! assert_eq!(side.value(), 3.0);
//! ```
//!
//! Mixing unit systems:
//!
//! ```rust
//! use noda_core::system::Imperial;
//! use noda_core::units::{CENTIMETER, METER};
//!
//! let area = 4.0 * METER * (1.0 * CENTIMETER);
//! assert!((area.value() - 0.04).abs() < 1e-12);
//! assert!((area.to::<Imperial>().value() - 0.4306).abs() < 1e-4);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `noda-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! noda-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, square roots and powers are provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Rational`, `Quantity` and `Unit`; the wrappers serialize
//!   as their raw value only.
//!
//! # Panics and errors
//!
//! Typed operators fail at build time: a dimension mismatch, an unknown base-unit pair or an
//! algebra error stops constant evaluation with a short message. Runtime entry points (`try_*`
//! methods, [`try_composed_factor`], [`ConversionTable::composed_factor`]) return
//! [`Result<_, DimensionError>`](Result). Payload arithmetic follows the payload's own rules (IEEE-754
//! for floats).
//!
//! # Logging
//!
//! The runtime conversion path logs through the [`log`](https://docs.rs/log) facade at `trace` and
//! `debug` level. No logger is installed by this crate.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod algebra;
mod conversion;
mod dimension;
mod error;
mod macros;
mod quantity;
mod rational;
mod real;
mod unit;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use conversion::{
    composed_factor, try_composed_factor, BaseFactor, Conversion, ConversionPlan, ConversionTable,
    PlanFor,
};
pub use dimension::{
    check_dimensionless_for, check_same, Dimension, DimensionlessFor, Exponent, Inverse, Power,
    Product, Quotient, Ratio, Root, SameDimension, WellFormed,
};
pub use error::{DimensionError, Result};
pub use quantity::{pow, sqrt, Quantity};
pub use rational::{gcd, Rational};
pub use real::Real;
pub use system::{BaseUnit, UnitSystem};
pub use unit::Unit;
pub use vector::{elementwise, BinaryOp, DimensionVector, UnaryOp, MAX_AXES};

// ─────────────────────────────────────────────────────────────────────────────
// Predefined dimensions, systems and units
// ─────────────────────────────────────────────────────────────────────────────

pub mod dimensions;
pub mod system;
pub mod units;

/// Dimensionless numeric constants.
pub mod constants {
    pub use crate::quantity::{E, PHI, PI};
}
