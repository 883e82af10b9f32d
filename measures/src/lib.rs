//! Strongly typed brewing and physical measures.
//!
//! `measures` is the user-facing crate in this workspace. It re-exports the full API from `measures-core` plus every
//! predefined unit at the crate root.
//!
//! The core idea is: a value is always a `Measure<U>`, where `U` is a zero-sized type describing the unit. This keeps
//! units at compile time; a measure costs two `f64`s (its value and its base value).
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add kilograms to liters).
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`).
//! - Covers the units a brewer needs: grain and hop weights, batch volumes, temperatures, the gravity scales
//!   (specific gravity, Brix, Plato, extract yield), concentrations, and the ratios between them.
//! - Round-trips every measure through a tagged JSON object.
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra or automatic simplification.
//! - Exact arithmetic: measures are backed by `f64`.
//! - Locale-aware number formatting.
//!
//! # Quick start
//!
//! ```rust
//! use measures::{Gallons, Liter, SpecificGravities};
//!
//! let batch = Gallons::new(5.0);
//! assert!((batch.to::<Liter>().value() - 18.92705).abs() < 1e-9);
//!
//! let og = SpecificGravities::new(1.040);
//! assert!((og.plato() - 10.0).abs() < 0.1);
//! assert_eq!(format!("{}", og), "1.0400sg");
//! ```
//!
//! Ratios are built from two measures and keep both units:
//!
//! ```rust
//! use measures::{Gallon, Gallons, Minute, Minutes};
//! use measures::flow::Flow;
//!
//! let pump: Flow<Gallon, Minute> = Gallons::new(10.0).per(Minutes::new(4.0));
//! assert_eq!(pump.display(1), "2.5gal/min");
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use measures::{Kilograms, Liters};
//!
//! let w = Kilograms::new(1.0);
//! let v = Liters::new(1.0);
//! let _ = w + v; // cannot add a weight to a volume
//! ```
//!
//! Ratios of different families do not compare either:
//!
//! ```compile_fail
//! use measures::{Liter, Meter, Second};
//! use measures::flow::Flow;
//! use measures::velocity::Velocity;
//!
//! let f: Flow<Liter, Second> = Flow::new(1.0);
//! let v: Velocity<Meter, Second> = Velocity::new(1.0);
//! let _ = f < v;
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `measures::weight` (kilograms, grams, pounds, ounces)
//! - `measures::volume` (liters, gallons, quarts, … teaspoons)
//! - `measures::length` (meters, inches, feet, miles, …)
//! - `measures::time` (seconds, minutes, … years)
//! - `measures::temperature` (Fahrenheit, Celsius)
//! - `measures::gravity` (gravity points, specific gravity, Brix, Plato, yield)
//! - `measures::concentration` and `measures::dilution` (ppm, ppb, percent)
//! - `measures::density`, `measures::flow`, `measures::velocity` (ratio aliases)
//!
//! # Feature flags
//!
//! - `serde` (default): JSON codec (`measures::codec`) and `Serialize`/`Deserialize` for every tagged measure.
//!
//! # Panics and errors
//!
//! Typed conversions and arithmetic never fail; they follow IEEE-754 behavior. Runtime dispatch
//! ([`AnyMeasure`]), the codec and [`Measure::try_specific_gravity`] return [`MeasureResult`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use measures_core::*;

pub use measures_core::units::concentration::*;
pub use measures_core::units::density::*;
pub use measures_core::units::dilution::*;
pub use measures_core::units::flow::*;
pub use measures_core::units::gravity::*;
pub use measures_core::units::length::*;
pub use measures_core::units::temperature::*;
pub use measures_core::units::time::*;
pub use measures_core::units::velocity::*;
pub use measures_core::units::volume::*;
pub use measures_core::units::weight::*;
