//! Temperature units.
//!
//! The base unit for this dimension is [`Fahrenheit`]. Celsius is affine: `°F = °C × 9/5 + 32`.
//!
//! Arithmetic between two temperatures happens in the left operand's scale, so `1°C + 1°C` is `2°C`.

use crate::{Dimension, Measure, Unit};
use measures_derive::Unit;

/// Dimension tag for temperature.
pub enum Temperature {}
impl Dimension for Temperature {}

/// Marker trait for any [`Unit`] whose dimension is [`Temperature`].
pub trait TemperatureUnit: Unit<Dim = Temperature> {}
impl<T: Unit<Dim = Temperature>> TemperatureUnit for T {}

/// Degree Fahrenheit, the base unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°F", dimension = Temperature, ratio = 1.0)]
pub struct Fahrenheit;
/// A temperature in degrees Fahrenheit.
pub type DegreesFahrenheit = Measure<Fahrenheit>;

/// Degree Celsius.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°C", dimension = Temperature, ratio = 9.0 / 5.0, offset = 32.0)]
pub struct Celsius;
/// A temperature in degrees Celsius.
pub type DegreesCelsius = Measure<Celsius>;

crate::impl_unit_conversions!(Fahrenheit, Celsius);

impl<U: Unit<Dim = Temperature>> Measure<U> {
    /// This temperature in degrees Fahrenheit.
    pub fn fahrenheit(self) -> f64 {
        self.in_units::<Fahrenheit>()
    }

    /// This temperature in degrees Celsius.
    pub fn celsius(self) -> f64 {
        self.in_units::<Celsius>()
    }
}
