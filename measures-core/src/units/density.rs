//! Weight-per-volume and volume-per-weight ratios.
//!
//! Both are *pure type aliases* over [`Per`]: no standalone units are introduced, every ratio is a pair of
//! existing weight and volume units at the type level.
//!
//! ```rust
//! use measures_core::density::{VolumeToWeight, WeightToVolume};
//! use measures_core::volume::{Gallon, Liter, Quart};
//! use measures_core::weight::{Kilogram, Pound};
//!
//! // Grain bill concentration in the mash.
//! let grist: WeightToVolume<Pound, Gallon> = WeightToVolume::new(1.5);
//! assert_eq!(grist.display(1), "1.5lb/gal");
//!
//! // The usual mash thickness, in metric.
//! let thickness: VolumeToWeight<Quart, Pound> = VolumeToWeight::new(1.25);
//! let metric = thickness.to::<measures_core::Per<Liter, Kilogram>>();
//! assert!((metric.value() - 2.608).abs() < 1e-3);
//! ```

use crate::registry::RatioKind;
use crate::units::volume::Volume;
use crate::units::weight::Weight;
use crate::{DivDim, Measure, Per, RatioDimension, Unit};

/// Dimension alias for weight per volume.
pub type WeightToVolumeDim = DivDim<Weight, Volume>;

/// Dimension alias for volume per weight.
pub type VolumeToWeightDim = DivDim<Volume, Weight>;

impl RatioDimension for WeightToVolumeDim {
    const KIND: RatioKind = RatioKind::WeightToVolume;
}

impl RatioDimension for VolumeToWeightDim {
    const KIND: RatioKind = RatioKind::VolumeToWeight;
}

/// Marker trait for any unit whose dimension is [`WeightToVolumeDim`].
pub trait WeightToVolumeUnit: Unit<Dim = WeightToVolumeDim> {}
impl<T: Unit<Dim = WeightToVolumeDim>> WeightToVolumeUnit for T {}

/// Marker trait for any unit whose dimension is [`VolumeToWeightDim`].
pub trait VolumeToWeightUnit: Unit<Dim = VolumeToWeightDim> {}
impl<T: Unit<Dim = VolumeToWeightDim>> VolumeToWeightUnit for T {}

/// A weight-per-volume measure parameterized by weight and volume units.
pub type WeightToVolume<N, D> = Measure<Per<N, D>>;

/// A volume-per-weight measure parameterized by volume and weight units.
pub type VolumeToWeight<N, D> = Measure<Per<N, D>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::{Gallon, Gallons, Liter};
    use crate::weight::{Kilogram, Pound, Pounds};
    use approx::assert_abs_diff_eq;

    #[test]
    fn convert_matches_direct_formula() {
        let r: WeightToVolume<Pound, Gallon> = WeightToVolume::new(1.5);
        let expected = Kilogram::from_base(r.base()) / Liter::from_base(1.0);
        assert_abs_diff_eq!(r.convert::<Kilogram, Liter>(), expected, epsilon = 1e-15);
        assert_abs_diff_eq!(expected, 1.5 / 3.78541 / 2.20462, epsilon = 1e-12);
    }

    #[test]
    fn to_carries_new_unit_pair() {
        let r: WeightToVolume<Pound, Gallon> = WeightToVolume::new(1.5);
        let metric: WeightToVolume<Kilogram, Liter> = r.to();
        assert_abs_diff_eq!(metric.value(), r.convert::<Kilogram, Liter>(), epsilon = 1e-15);
        assert_eq!(metric.units(), "kg/l");
        assert_abs_diff_eq!(metric.base(), r.base(), epsilon = 1e-12);
    }

    #[test]
    fn built_from_two_measures() {
        let r = Pounds::new(12.0).per(Gallons::new(8.0));
        assert_eq!(r.value(), 1.5);
        assert_abs_diff_eq!(r.numerator_for(Gallons::new(6.0)).value(), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn ratio_arithmetic_keeps_left_pair() {
        let a: WeightToVolume<Pound, Gallon> = WeightToVolume::new(1.0);
        let b: WeightToVolume<Kilogram, Liter> = a.to();
        let sum = a + b;
        assert_abs_diff_eq!(sum.value(), 2.0, epsilon = 1e-12);
        assert_eq!(sum.units(), "lb/gal");
    }
}
