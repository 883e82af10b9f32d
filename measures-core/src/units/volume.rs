//! Volume units.
//!
//! The base unit for this dimension is [`Liter`]. US customary units use the factors below, rounded the way brewing
//! calculators usually round them.
//!
//! ```rust
//! use measures_core::volume::{Gallons, Liters};
//!
//! assert!((Gallons::new(1.0).base() - 3.78541).abs() < 1e-12);
//! assert!((Liters::new(3.78541).gallons() - 1.0).abs() < 1e-12);
//! ```

use crate::{Dimension, Measure, Unit};
use measures_derive::Unit;

/// Dimension tag for volume.
pub enum Volume {}
impl Dimension for Volume {}

/// Marker trait for any [`Unit`] whose dimension is [`Volume`].
pub trait VolumeUnit: Unit<Dim = Volume> {}
impl<T: Unit<Dim = Volume>> VolumeUnit for T {}

/// Liters in one US gallon.
pub const LITERS_PER_GALLON: f64 = 3.78541;
/// Liters in one US quart.
pub const LITERS_PER_QUART: f64 = 0.946353;
/// Liters in one US pint.
pub const LITERS_PER_PINT: f64 = 0.473176;
/// Liters in one (metric) cup.
pub const LITERS_PER_CUP: f64 = 0.24;
/// Liters in one US tablespoon.
pub const LITERS_PER_TABLESPOON: f64 = 0.0147868;
/// Liters in one US teaspoon.
pub const LITERS_PER_TEASPOON: f64 = 0.00492892;
/// Liters in one US fluid ounce.
pub const LITERS_PER_FLUID_OUNCE: f64 = 0.0295735;

/// Liter, the base unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "l", dimension = Volume, ratio = 1.0)]
pub struct Liter;
/// A measure in liters.
pub type Liters = Measure<Liter>;

/// Milliliter.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ml", dimension = Volume, ratio = 0.001)]
pub struct Milliliter;
/// A measure in milliliters.
pub type Milliliters = Measure<Milliliter>;

/// US gallon.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "gal", dimension = Volume, ratio = LITERS_PER_GALLON)]
pub struct Gallon;
/// A measure in gallons.
pub type Gallons = Measure<Gallon>;

/// US quart.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "qt", dimension = Volume, ratio = LITERS_PER_QUART)]
pub struct Quart;
/// A measure in quarts.
pub type Quarts = Measure<Quart>;

/// US pint.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pt", dimension = Volume, ratio = LITERS_PER_PINT)]
pub struct Pint;
/// A measure in pints.
pub type Pints = Measure<Pint>;

/// Cup.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "c", dimension = Volume, ratio = LITERS_PER_CUP)]
pub struct Cup;
/// A measure in cups.
pub type Cups = Measure<Cup>;

/// Tablespoon.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "tbsp", dimension = Volume, ratio = LITERS_PER_TABLESPOON)]
pub struct Tablespoon;
/// A measure in tablespoons.
pub type Tablespoons = Measure<Tablespoon>;

/// Teaspoon.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "tsp", dimension = Volume, ratio = LITERS_PER_TEASPOON)]
pub struct Teaspoon;
/// A measure in teaspoons.
pub type Teaspoons = Measure<Teaspoon>;

/// US fluid ounce.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "fl. oz", dimension = Volume, ratio = LITERS_PER_FLUID_OUNCE)]
pub struct FluidOunce;
/// A measure in fluid ounces.
pub type FluidOunces = Measure<FluidOunce>;

crate::impl_unit_conversions!(
    Liter, Milliliter, Gallon, Quart, Pint, Cup, Tablespoon, Teaspoon, FluidOunce
);

impl<U: Unit<Dim = Volume>> Measure<U> {
    /// This volume in liters.
    pub fn liters(self) -> f64 {
        self.in_units::<Liter>()
    }

    /// This volume in milliliters.
    pub fn milliliters(self) -> f64 {
        self.in_units::<Milliliter>()
    }

    /// This volume in gallons.
    pub fn gallons(self) -> f64 {
        self.in_units::<Gallon>()
    }

    /// This volume in quarts.
    pub fn quarts(self) -> f64 {
        self.in_units::<Quart>()
    }

    /// This volume in pints.
    pub fn pints(self) -> f64 {
        self.in_units::<Pint>()
    }

    /// This volume in cups.
    pub fn cups(self) -> f64 {
        self.in_units::<Cup>()
    }

    /// This volume in tablespoons.
    pub fn tablespoons(self) -> f64 {
        self.in_units::<Tablespoon>()
    }

    /// This volume in teaspoons.
    pub fn teaspoons(self) -> f64 {
        self.in_units::<Teaspoon>()
    }

    /// This volume in fluid ounces.
    pub fn fluid_ounces(self) -> f64 {
        self.in_units::<FluidOunce>()
    }
}
