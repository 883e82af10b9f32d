//! Length units.
//!
//! The base unit for this dimension is [`Meter`].

use crate::{Dimension, Measure, Unit};
use measures_derive::Unit;

/// Dimension tag for length.
pub enum Length {}
impl Dimension for Length {}

/// Marker trait for any [`Unit`] whose dimension is [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

/// Inches in one meter.
pub const INCHES_PER_METER: f64 = 39.3701;
/// Feet in one meter.
pub const FEET_PER_METER: f64 = 3.28084;
/// Miles in one meter.
pub const MILES_PER_METER: f64 = 0.000621371;
/// Yards in one meter.
pub const YARDS_PER_METER: f64 = 1.09361;

/// Inch.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = Length, ratio = 1.0 / INCHES_PER_METER)]
pub struct Inch;
/// A measure in inches.
pub type Inches = Measure<Inch>;

/// Centimeter.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", dimension = Length, ratio = 0.01)]
pub struct Centimeter;
/// A measure in centimeters.
pub type Centimeters = Measure<Centimeter>;

/// Meter, the base unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Length, ratio = 1.0)]
pub struct Meter;
/// A measure in meters.
pub type Meters = Measure<Meter>;

/// Foot.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = Length, ratio = 1.0 / FEET_PER_METER)]
pub struct Foot;
/// A measure in feet.
pub type Feet = Measure<Foot>;

/// Kilometer.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", dimension = Length, ratio = 1000.0)]
pub struct Kilometer;
/// A measure in kilometers.
pub type Kilometers = Measure<Kilometer>;

/// Statute mile.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mil", dimension = Length, ratio = 1.0 / MILES_PER_METER)]
pub struct Mile;
/// A measure in miles.
pub type Miles = Measure<Mile>;

/// Yard.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", dimension = Length, ratio = 1.0 / YARDS_PER_METER)]
pub struct Yard;
/// A measure in yards.
pub type Yards = Measure<Yard>;

crate::impl_unit_conversions!(Inch, Centimeter, Meter, Foot, Kilometer, Mile, Yard);

impl<U: Unit<Dim = Length>> Measure<U> {
    /// This length in inches.
    pub fn inches(self) -> f64 {
        self.in_units::<Inch>()
    }

    /// This length in centimeters.
    pub fn centimeters(self) -> f64 {
        self.in_units::<Centimeter>()
    }

    /// This length in meters.
    pub fn meters(self) -> f64 {
        self.in_units::<Meter>()
    }

    /// This length in feet.
    pub fn feet(self) -> f64 {
        self.in_units::<Foot>()
    }

    /// This length in kilometers.
    pub fn kilometers(self) -> f64 {
        self.in_units::<Kilometer>()
    }

    /// This length in miles.
    pub fn miles(self) -> f64 {
        self.in_units::<Mile>()
    }

    /// This length in yards.
    pub fn yards(self) -> f64 {
        self.in_units::<Yard>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn meter_in_every_unit() {
        let m = Meters::new(1.0);
        assert_relative_eq!(m.inches(), 39.3701, max_relative = 1e-12);
        assert_relative_eq!(m.feet(), 3.28084, max_relative = 1e-12);
        assert_relative_eq!(m.yards(), 1.09361, max_relative = 1e-12);
        assert_relative_eq!(m.miles(), 0.000621371, max_relative = 1e-12);
        assert_abs_diff_eq!(m.centimeters(), 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.kilometers(), 0.001, epsilon = 1e-15);
    }

    #[test]
    fn customary_relations() {
        assert_abs_diff_eq!(Feet::new(1.0).inches(), 12.0, epsilon = 1e-3);
        assert_abs_diff_eq!(Yards::new(1.0).feet(), 3.0, epsilon = 1e-3);
        assert_abs_diff_eq!(Miles::new(1.0).kilometers(), 1.609344, epsilon = 1e-5);
    }

    #[test]
    fn labels() {
        assert_eq!(Miles::new(3.0).display(1), "3.0mil");
        assert_eq!(Inches::new(0.5).display(2), "0.50in");
    }

    proptest! {
        #[test]
        fn prop_round_trip(v in -1e6..1e6f64) {
            let back = Inches::new(v).to::<Mile>().to::<Yard>().to::<Inch>();
            prop_assert!((back.value() - v).abs() < 1e-4);
        }
    }
}
