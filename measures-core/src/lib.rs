//! Core type system for strongly typed brewing and physical measures.
//!
//! `measures-core` provides a small units model:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`], with a pair of conversion functions to and from the
//!   base unit of its [`Dimension`].
//! - A value tagged with a unit is a [`Measure<U>`], backed by an `f64` and its precomputed base value.
//! - Conversion is an explicit, type-checked call to [`Measure::to`].
//! - Ratios like flow or grist density are expressed as [`Per<N, D>`] (e.g. `Gallon/Minute`).
//! - Values whose unit is only known at runtime are carried by [`AnyMeasure`] (see [`registry`]) and travel as JSON
//!   through [`codec`].
//!
//! Most users should depend on `measures` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions (weight vs volume vs gravity, …).
//! - Non-linear scales: affine temperatures and the Brix/Plato gravity regressions share the same API as linear
//!   units.
//! - A JSON wire format with a 1:1 tag per unit.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Measure` is `f64`).
//! - Unit algebra beyond one level of ratio.
//!
//! # Quick start
//!
//! ```rust
//! use measures_core::temperature::{DegreesCelsius, Fahrenheit};
//! use measures_core::weight::{Kilograms, Pounds};
//!
//! let grain = Kilograms::new(4.5) + Pounds::new(1.0);
//! assert!((grain.pounds() - 10.92079).abs() < 1e-9);
//!
//! let strike = DegreesCelsius::new(72.0).to::<Fahrenheit>();
//! assert!((strike.value() - 161.6).abs() < 1e-9);
//! ```
//!
//! # Feature flags
//!
//! - `serde` (default): enables [`codec`], `Serialize`/`Deserialize` for [`Measure<U>`] and [`AnyMeasure`].
//!
//! # Errors
//!
//! Typed arithmetic and conversions never fail. Runtime dispatch, the codec and the checked gravity accessor return
//! [`MeasureResult`]; see [`MeasureError`].
//!
//! # Logging
//!
//! Uses the [`log`](https://docs.rs/log) facade. Decode failures and the specific-gravity clamp are reported at
//! `debug`, unit resolution at `trace`. No logger is installed by this crate.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod format;
mod macros;
mod measure;
mod unit;

pub mod registry;

#[cfg(feature = "serde")]
pub mod codec;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{Dimension, DivDim, RatioDimension};
pub use error::{MeasureError, MeasureResult};
pub use format::{format_number, DEFAULT_PRECISION};
pub use measure::Measure;
pub use registry::{compatible, convert_value, AnyMeasure, AnyUnit, DimensionKind, RatioKind, UnitKind};
pub use unit::{KnownUnit, Per, Tagged, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
pub mod units;

pub use units::concentration;
pub use units::density;
pub use units::dilution;
pub use units::flow;
pub use units::gravity;
pub use units::length;
pub use units::temperature;
pub use units::time;
pub use units::velocity;
pub use units::volume;
pub use units::weight;
