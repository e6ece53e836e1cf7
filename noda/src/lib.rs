//! Dimension-checked physical quantities with rational exponents and unit systems.
//!
//! `noda` is the user-facing crate in this workspace. It re-exports the full API from `noda-core`
//! together with the predefined dimensions, unit systems and unit constants.
//!
//! The core idea is: a value is a `Quantity<D>`, where `D` is a zero-sized type carrying the
//! dimension's exponent vector as a compile-time constant. Multiplying, dividing or taking roots
//! computes the result dimension during compilation, and adding or comparing values of different
//! dimensions does not build.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to kilograms).
//! - Derives result dimensions automatically, including fractional exponents (`sqrt(length)`).
//! - Converts between SI, CGS and Imperial (or your own systems) by composing per-axis factors.
//!
//! # What this crate does not try to solve
//!
//! - Symbolic unit algebra beyond reducing exponent fractions.
//! - A catalog of prefixed or astronomical units.
//!
//! # Quick start
//!
//! ```rust
//! use noda::dimensions::{Force, Length, Work};
//! use noda::Quantity;
//!
//! let d = Quantity::<Length>::new(1.0);
//! let f = Quantity::<Force>::new(2.0);
//! let w: Quantity<Work> = (d * f).to();
//! assert_eq!(w.value(), 2.0);
//! ```
//!
//! Unit systems:
//!
//! ```rust
//! use noda::system::Imperial;
//! use noda::units::{CENTIMETER, METER};
//!
//! let area = 4.0 * METER * (1.0 * CENTIMETER);
//! assert!((area.value() - 0.04).abs() < 1e-12);
//! assert!((area.to::<Imperial>().value() - 0.4306).abs() < 1e-4);
//! ```
//!
//! # Incorrect usage (build error)
//!
//! ```compile_fail
//! use noda::dimensions::{Length, Mass};
//! use noda::Quantity;
//!
//! let l = Quantity::<Length>::new(1.0);
//! let m = Quantity::<Mass>::new(1.0);
//! let _ = l + m; // cannot add different dimensions
//! ```
//!
//! These errors come from constant evaluation, so they show up in `cargo build` and `cargo test`
//! rather than `cargo check`.
//!
//! # Modules
//!
//! - `noda::dimensions` (mass, length, time, velocity, force, work, …)
//! - `noda::system` (base units, `Si`, `Cgs`, `Imperial`)
//! - `noda::units` (`METER`, `KILOGRAM`, `FOOT`, … as one-valued constants)
//! - `noda::constants` (`E`, `PI`, `PHI`)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `noda-core`.
//! - `serde`: enables `serde` support; quantities and units serialize as their raw value only.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! noda = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Runtime-checked entry points return `noda::Result<_>` with a [`DimensionError`]. Typed operators
//! never fail at run time.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use noda_core::*;

/// Derive macros used by `noda-core` to declare its dimensions and unit systems.
///
/// They expand in terms of `crate::Dimension`, `crate::UnitSystem` and related paths, so they are
/// intended for use inside `noda-core` (or crates exposing the same crate-root API). Most users
/// implement the traits by hand.
pub use noda_derive::{Dimension, UnitSystem};
