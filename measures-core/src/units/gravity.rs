//! Gravity (wort density) units.
//!
//! The base unit for this dimension is [`GravityPoint`]: `(SG − 1) × 1000`, so a specific gravity of `1.040` is
//! `40` points.
//!
//! Brix and Plato are not linear in gravity. Reading them goes through cubic regressions of specific gravity, and
//! writing them goes through the inverse approximation below, so the two directions agree to about `0.01°`
//! rather than to machine precision.
//!
//! Specific gravity is only defined for a positive point count: [`gp_to_sg`] returns `0.0` for `points ≤ 0`, and
//! the Brix and Plato readings inherit that sentinel. Use [`Measure::try_specific_gravity`] to get an error
//! instead.
//!
//! ```rust
//! use measures_core::gravity::SpecificGravities;
//!
//! let og = SpecificGravities::new(1.040);
//! assert!((og.gravity_points() - 40.0).abs() < 1e-9);
//! assert!((og.brix() - 10.0).abs() < 0.1);
//! assert!((og.plato() - 10.0).abs() < 0.1);
//! ```

use crate::error::{MeasureError, MeasureResult};
use crate::{Dimension, Measure, Unit};
use measures_derive::Unit;

/// Dimension tag for gravity.
pub enum Gravity {}
impl Dimension for Gravity {}

/// Marker trait for any [`Unit`] whose dimension is [`Gravity`].
pub trait GravityUnit: Unit<Dim = Gravity> {}
impl<T: Unit<Dim = Gravity>> GravityUnit for T {}

/// Gravity points contributed by fully extracted sucrose (100 % yield).
pub const SUCROSE_POINTS: f64 = 46.0;

/// Specific gravity to gravity points.
pub fn sg_to_gp(sg: f64) -> f64 {
    (sg - 1.0) * 1000.0
}

/// Gravity points to specific gravity, `0.0` when `points ≤ 0`.
pub fn gp_to_sg(points: f64) -> f64 {
    if points > 0.0 {
        points / 1000.0 + 1.0
    } else {
        log::debug!("{} gravity points is outside the specific gravity domain, clamping to 0", points);
        0.0
    }
}

fn gp_to_brix(points: f64) -> f64 {
    let sg = gp_to_sg(points);
    182.4601 * sg * sg * sg - 775.6821 * sg * sg + 1262.7794 * sg - 669.5622
}

fn gp_to_plato(points: f64) -> f64 {
    let sg = gp_to_sg(points);
    135.997 * sg * sg * sg - 630.272 * sg * sg + 1111.14 * sg - 616.868
}

// Brix and Plato share one inverse approximation.
fn degrees_to_gp(degrees: f64) -> f64 {
    sg_to_gp(degrees / (258.6 - (degrees / 258.2) * 227.1) + 1.0)
}

fn gp_to_yield(points: f64) -> f64 {
    points / SUCROSE_POINTS * 100.0
}

fn yield_to_gp(percent: f64) -> f64 {
    SUCROSE_POINTS * percent / 100.0
}

/// Gravity point, the base unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ppg", dimension = Gravity, ratio = 1.0)]
pub struct GravityPoint;
/// A gravity in points.
pub type GravityPoints = Measure<GravityPoint>;

/// Specific gravity, relative to water. Displays four decimals by default.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "sg", dimension = Gravity, to_base = sg_to_gp, from_base = gp_to_sg, precision = 4)]
pub struct SpecificGravity;
/// A gravity as specific gravity.
pub type SpecificGravities = Measure<SpecificGravity>;

/// Degrees Brix.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "brix", dimension = Gravity, to_base = degrees_to_gp, from_base = gp_to_brix)]
pub struct Brix;
/// A gravity in degrees Brix.
pub type DegreesBrix = Measure<Brix>;

/// Degrees Plato.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "P", dimension = Gravity, to_base = degrees_to_gp, from_base = gp_to_plato)]
pub struct Plato;
/// A gravity in degrees Plato.
pub type DegreesPlato = Measure<Plato>;

/// Extract yield, in percent of what sucrose would give.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "%", dimension = Gravity, to_base = yield_to_gp, from_base = gp_to_yield)]
pub struct Yield;
/// A gravity as extract yield.
pub type YieldPercents = Measure<Yield>;

crate::impl_unit_conversions!(GravityPoint, SpecificGravity, Brix, Plato, Yield);

impl<U: Unit<Dim = Gravity>> Measure<U> {
    /// This gravity in points.
    pub fn gravity_points(self) -> f64 {
        self.in_units::<GravityPoint>()
    }

    /// This gravity as specific gravity; `0.0` when the point count is not positive.
    pub fn specific_gravity(self) -> f64 {
        self.in_units::<SpecificGravity>()
    }

    /// This gravity as specific gravity, failing where [`Self::specific_gravity`] would clamp.
    ///
    /// ```rust
    /// use measures_core::gravity::GravityPoints;
    /// use measures_core::MeasureError;
    ///
    /// assert!((GravityPoints::new(52.0).try_specific_gravity().unwrap() - 1.052).abs() < 1e-12);
    /// assert!(matches!(
    ///     GravityPoints::new(-3.0).try_specific_gravity(),
    ///     Err(MeasureError::DomainOutOfRange { .. })
    /// ));
    /// ```
    pub fn try_specific_gravity(self) -> MeasureResult<f64> {
        let base = self.base();
        if base > 0.0 {
            Ok(SpecificGravity::from_base(base))
        } else {
            Err(MeasureError::DomainOutOfRange { unit: "sg", base })
        }
    }

    /// This gravity in degrees Brix.
    pub fn brix(self) -> f64 {
        self.in_units::<Brix>()
    }

    /// This gravity in degrees Plato.
    pub fn plato(self) -> f64 {
        self.in_units::<Plato>()
    }

    /// This gravity as extract yield percent.
    pub fn yield_percent(self) -> f64 {
        self.in_units::<Yield>()
    }
}
