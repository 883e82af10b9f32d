//! Concentration units.
//!
//! The base unit for this dimension is [`PartsPerMillion`]. Percent units are `1 % = 10 000 ppm`.

use crate::{Dimension, Measure, Unit};
use measures_derive::Unit;

/// Dimension tag for concentration.
pub enum Concentration {}
impl Dimension for Concentration {}

/// Marker trait for any [`Unit`] whose dimension is [`Concentration`].
pub trait ConcentrationUnit: Unit<Dim = Concentration> {}
impl<T: Unit<Dim = Concentration>> ConcentrationUnit for T {}

/// Parts per million in one percent.
pub const PPM_PER_PERCENT: f64 = 10_000.0;

/// Parts per million, the base unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ppm", dimension = Concentration, ratio = 1.0)]
pub struct PartsPerMillion;
/// A concentration in ppm.
pub type Ppm = Measure<PartsPerMillion>;

/// Parts per billion.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ppb", dimension = Concentration, ratio = 0.001)]
pub struct PartsPerBillion;
/// A concentration in ppb.
pub type Ppb = Measure<PartsPerBillion>;

/// Mass fraction in percent (m/m).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/m%", dimension = Concentration, ratio = PPM_PER_PERCENT)]
pub struct MassPercent;
/// A concentration in mass percent.
pub type MassPercents = Measure<MassPercent>;

/// Volume fraction in percent (v/v), e.g. alcohol by volume.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "v/v%", dimension = Concentration, ratio = PPM_PER_PERCENT)]
pub struct VolumePercent;
/// A concentration in volume percent.
pub type VolumePercents = Measure<VolumePercent>;

crate::impl_unit_conversions!(PartsPerMillion, PartsPerBillion, MassPercent, VolumePercent);

impl<U: Unit<Dim = Concentration>> Measure<U> {
    /// This concentration in ppm.
    pub fn ppm(self) -> f64 {
        self.in_units::<PartsPerMillion>()
    }

    /// This concentration in ppb.
    pub fn ppb(self) -> f64 {
        self.in_units::<PartsPerBillion>()
    }

    /// This concentration in mass percent.
    pub fn mass_percent(self) -> f64 {
        self.in_units::<MassPercent>()
    }

    /// This concentration in volume percent.
    pub fn volume_percent(self) -> f64 {
        self.in_units::<VolumePercent>()
    }
}
