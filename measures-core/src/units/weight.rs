//! Weight units.
//!
//! The base unit for this dimension is [`Pound`] (identity conversions). Metric units convert through the fixed
//! factor [`POUNDS_PER_KILOGRAM`].
//!
//! ```rust
//! use measures_core::weight::{Kilograms, Ounce};
//!
//! let kg = Kilograms::new(1.0);
//! assert!((kg.pounds() - 2.20462).abs() < 1e-9);
//! assert!((kg.to::<Ounce>().value() - 35.27392).abs() < 1e-4);
//! ```

use crate::{Dimension, Measure, Unit};
use measures_derive::Unit;

/// Dimension tag for weight.
pub enum Weight {}
impl Dimension for Weight {}

/// Marker trait for any [`Unit`] whose dimension is [`Weight`].
pub trait WeightUnit: Unit<Dim = Weight> {}
impl<T: Unit<Dim = Weight>> WeightUnit for T {}

/// Pounds in one kilogram.
pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;

/// Pounds in one avoirdupois ounce.
pub const POUNDS_PER_OUNCE: f64 = 0.0625;

fn grams_to_pounds(grams: f64) -> f64 {
    Kilogram::to_base(grams / 1000.0)
}

fn pounds_to_grams(pounds: f64) -> f64 {
    Kilogram::from_base(pounds) * 1000.0
}

/// Kilogram.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", dimension = Weight, ratio = POUNDS_PER_KILOGRAM)]
pub struct Kilogram;
/// A measure in kilograms.
pub type Kilograms = Measure<Kilogram>;

/// Gram, defined through the kilogram so that `1 kg` reads back as exactly `1000 g`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = Weight, to_base = grams_to_pounds, from_base = pounds_to_grams)]
pub struct Gram;
/// A measure in grams.
pub type Grams = Measure<Gram>;

/// Avoirdupois pound, the base unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", dimension = Weight, ratio = 1.0)]
pub struct Pound;
/// A measure in pounds.
pub type Pounds = Measure<Pound>;

/// Avoirdupois ounce: `16 oz = 1 lb`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "oz", dimension = Weight, ratio = POUNDS_PER_OUNCE)]
pub struct Ounce;
/// A measure in ounces.
pub type Ounces = Measure<Ounce>;

crate::impl_unit_conversions!(Kilogram, Gram, Pound, Ounce);

impl<U: Unit<Dim = Weight>> Measure<U> {
    /// This weight in kilograms.
    pub fn kilograms(self) -> f64 {
        self.in_units::<Kilogram>()
    }

    /// This weight in grams.
    pub fn grams(self) -> f64 {
        self.in_units::<Gram>()
    }

    /// This weight in pounds.
    pub fn pounds(self) -> f64 {
        self.in_units::<Pound>()
    }

    /// This weight in ounces.
    pub fn ounces(self) -> f64 {
        self.in_units::<Ounce>()
    }
}
