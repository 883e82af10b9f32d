//! Predefined unit modules grouped by dimension.
//!
//! `measures-core` ships every unit so that conversions, the runtime registry and the JSON codec work out of the
//! box without downstream crates having to fight Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`weight`]: weight units (pound is the base unit).
//! - [`volume`]: volume units (liter is the base unit).
//! - [`length`]: length units (meter is the base unit).
//! - [`time`]: time units (second is the base unit).
//! - [`temperature`]: Fahrenheit and Celsius (Fahrenheit is the base unit).
//! - [`gravity`]: gravity points, specific gravity, Brix, Plato and extract yield.
//! - [`concentration`]: ppm, ppb and percent concentrations.
//! - [`dilution`]: dilution in ppm.
//! - [`density`]: weight-per-volume and volume-per-weight aliases built from [`weight`] and [`volume`].
//! - [`flow`]: flow aliases (`Volume / Time`).
//! - [`velocity`]: velocity aliases (`Length / Time`).

pub mod concentration;
pub mod density;
pub mod dilution;
pub mod flow;
pub mod gravity;
pub mod length;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod volume;
pub mod weight;
