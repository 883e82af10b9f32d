//! Runtime unit registry.
//!
//! Typed [`Measure<U>`] values cover code where the unit is known at compile time. When it is not (a decoded JSON
//! payload, a unit picked by a user), this module maps every concrete unit to a [`UnitKind`], every ratio family
//! to a [`RatioKind`], and carries values as [`AnyMeasure`].
//!
//! # Conversion formula
//!
//! Every dimension has one base unit, and every conversion goes through it:
//!
//! ```text
//! v_base = src.to_base(v_src)
//! v_dst  = dst.from_base(v_base)
//! ```
//!
//! Ratios synthesize both functions from their numerator `n` and denominator `d`:
//!
//! ```text
//! to_base(v)   = n.to_base(v) / d.to_base(1)
//! from_base(v) = n.from_base(v) / d.from_base(1)
//! ```
//!
//! Unlike typed measures, nothing here can be checked by the compiler, so every operation that mixes two units
//! returns [`MeasureError::InvalidUnitPairing`] when their dimensions differ.

use crate::error::{MeasureError, MeasureResult};
use crate::format::format_number;
use crate::units::concentration::{MassPercent, PartsPerBillion, PartsPerMillion, VolumePercent};
use crate::units::dilution::DilutionPartsPerMillion;
use crate::units::gravity::{Brix, GravityPoint, Plato, SpecificGravity, Yield};
use crate::units::length::{Centimeter, Foot, Inch, Kilometer, Meter, Mile, Yard};
use crate::units::temperature::{Celsius, Fahrenheit};
use crate::units::time::{Day, Hour, Minute, Month, Second, Week, Year};
use crate::units::volume::{
    Cup, FluidOunce, Gallon, Liter, Milliliter, Pint, Quart, Tablespoon, Teaspoon,
};
use crate::units::weight::{Gram, Kilogram, Ounce, Pound};
use crate::{Measure, Tagged};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

// =============================================================================
// Dimensions
// =============================================================================

/// Runtime identifier of a simple dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DimensionKind {
    /// [`Weight`](crate::weight::Weight), base unit pound.
    Weight,
    /// [`Volume`](crate::volume::Volume), base unit liter.
    Volume,
    /// [`Length`](crate::length::Length), base unit meter.
    Length,
    /// [`Time`](crate::time::Time), base unit second.
    Time,
    /// [`Temperature`](crate::temperature::Temperature), base unit degree Fahrenheit.
    Temperature,
    /// [`Gravity`](crate::gravity::Gravity), base unit gravity point.
    Gravity,
    /// [`Concentration`](crate::concentration::Concentration), base unit ppm.
    Concentration,
    /// [`Dilution`](crate::dilution::Dilution), base unit ppm.
    Dilution,
}

impl DimensionKind {
    /// Every simple dimension.
    pub const ALL: &'static [DimensionKind] = &[
        DimensionKind::Weight,
        DimensionKind::Volume,
        DimensionKind::Length,
        DimensionKind::Time,
        DimensionKind::Temperature,
        DimensionKind::Gravity,
        DimensionKind::Concentration,
        DimensionKind::Dilution,
    ];

    /// Lowercase name, used in error messages.
    pub fn tag(self) -> &'static str {
        match self {
            DimensionKind::Weight => "weight",
            DimensionKind::Volume => "volume",
            DimensionKind::Length => "length",
            DimensionKind::Time => "time",
            DimensionKind::Temperature => "temperature",
            DimensionKind::Gravity => "gravity",
            DimensionKind::Concentration => "concentration",
            DimensionKind::Dilution => "dilution",
        }
    }

    /// The unit whose conversions are the identity.
    pub fn base_unit(self) -> UnitKind {
        match self {
            DimensionKind::Weight => UnitKind::Pound,
            DimensionKind::Volume => UnitKind::Liter,
            DimensionKind::Length => UnitKind::Meter,
            DimensionKind::Time => UnitKind::Second,
            DimensionKind::Temperature => UnitKind::Fahrenheit,
            DimensionKind::Gravity => UnitKind::GravityPoint,
            DimensionKind::Concentration => UnitKind::PartsPerMillion,
            DimensionKind::Dilution => UnitKind::DilutionPartsPerMillion,
        }
    }

    /// Whether this dimension measures an amount of ingredient (weight or volume).
    pub fn is_amount(self) -> bool {
        matches!(self, DimensionKind::Weight | DimensionKind::Volume)
    }
}

// =============================================================================
// Units
// =============================================================================

crate::define_unit_kinds! {
    Weight => [
        (Kilogram, "kilogram"),
        (Gram, "gram"),
        (Pound, "pound"),
        (Ounce, "ounce"),
    ],
    Volume => [
        (Liter, "liter"),
        (Milliliter, "ml"),
        (Gallon, "gallon"),
        (Quart, "quart"),
        (Pint, "pint"),
        (Cup, "cup"),
        (Tablespoon, "tablespoon"),
        (Teaspoon, "teaspoon"),
        (FluidOunce, "fl_ounce"),
    ],
    Length => [
        (Inch, "inch"),
        (Centimeter, "centimeter"),
        (Meter, "meter"),
        (Foot, "foot"),
        (Kilometer, "kilometer"),
        (Mile, "mile"),
        (Yard, "yard"),
    ],
    Time => [
        (Second, "seconds", "second"),
        (Minute, "minutes", "minute"),
        (Hour, "hours", "hour"),
        (Day, "days", "day"),
        (Week, "weeks", "week"),
        (Month, "months", "month"),
        (Year, "years", "year"),
    ],
    Temperature => [
        (Fahrenheit, "fahrenheit"),
        (Celsius, "celsius"),
    ],
    Gravity => [
        (GravityPoint, "gp"),
        (SpecificGravity, "sg"),
        (Brix, "brix"),
        (Plato, "plato"),
        (Yield, "yield"),
    ],
    Concentration => [
        (PartsPerMillion, "ppm"),
        (PartsPerBillion, "ppb"),
        (MassPercent, "mass_percent"),
        (VolumePercent, "volume_percent"),
    ],
    Dilution => [
        (DilutionPartsPerMillion, "dilution_ppm"),
    ],
}

/// Checks if two units are compatible (same dimension).
#[inline]
pub fn compatible(a: UnitKind, b: UnitKind) -> bool {
    a.dimension() == b.dimension()
}

/// Converts a value from one unit to another.
///
/// # Returns
///
/// * `Ok(converted_value)` on success
/// * `Err(MeasureError::InvalidUnitPairing)` if the units have different dimensions
///
/// # Example
///
/// ```rust
/// use measures_core::{registry, UnitKind};
///
/// let lb = registry::convert_value(1.0, UnitKind::Kilogram, UnitKind::Pound).unwrap();
/// assert!((lb - 2.20462).abs() < 1e-9);
/// assert!(registry::convert_value(1.0, UnitKind::Kilogram, UnitKind::Liter).is_err());
/// ```
pub fn convert_value(v: f64, src: UnitKind, dst: UnitKind) -> MeasureResult<f64> {
    if !compatible(src, dst) {
        return Err(MeasureError::pairing(src.tag(), dst.tag()));
    }

    if src == dst {
        return Ok(v);
    }

    Ok(dst.from_base(src.to_base(v)))
}

// =============================================================================
// Ratios
// =============================================================================

/// Runtime identifier of a ratio family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RatioKind {
    /// Weight per volume, e.g. pounds of grain per gallon.
    WeightToVolume,
    /// Volume per weight, e.g. liters of water per kilogram of grain.
    VolumeToWeight,
    /// Volume per time.
    Flow,
    /// Length per time.
    Velocity,
}

impl RatioKind {
    /// Every ratio family.
    pub const ALL: &'static [RatioKind] = &[
        RatioKind::WeightToVolume,
        RatioKind::VolumeToWeight,
        RatioKind::Flow,
        RatioKind::Velocity,
    ];

    /// Wire discriminator of this family.
    pub fn tag(self) -> &'static str {
        match self {
            RatioKind::WeightToVolume => "WeightToVolume",
            RatioKind::VolumeToWeight => "volumeToWeight",
            RatioKind::Flow => "flow",
            RatioKind::Velocity => "velocity",
        }
    }

    /// Resolves a wire discriminator, `None` when no family carries it.
    ///
    /// The snake_case spellings `weight_to_volume` and `volume_to_weight` are accepted as well.
    pub fn from_tag(tag: &str) -> Option<RatioKind> {
        match tag {
            "weight_to_volume" => Some(RatioKind::WeightToVolume),
            "volume_to_weight" => Some(RatioKind::VolumeToWeight),
            _ => RatioKind::ALL.iter().copied().find(|kind| kind.tag() == tag),
        }
    }

    /// Dimension of the numerator.
    pub fn numerator(self) -> DimensionKind {
        match self {
            RatioKind::WeightToVolume => DimensionKind::Weight,
            RatioKind::VolumeToWeight | RatioKind::Flow => DimensionKind::Volume,
            RatioKind::Velocity => DimensionKind::Length,
        }
    }

    /// Dimension of the denominator.
    pub fn denominator(self) -> DimensionKind {
        match self {
            RatioKind::WeightToVolume => DimensionKind::Volume,
            RatioKind::VolumeToWeight => DimensionKind::Weight,
            RatioKind::Flow | RatioKind::Velocity => DimensionKind::Time,
        }
    }
}

// =============================================================================
// AnyUnit
// =============================================================================

/// A unit known only at runtime: a concrete unit or a ratio of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnyUnit {
    /// One concrete unit.
    Simple(UnitKind),
    /// `n / d` within the family `kind`.
    Ratio {
        /// Ratio family.
        kind: RatioKind,
        /// Numerator unit.
        n: UnitKind,
        /// Denominator unit.
        d: UnitKind,
    },
}

impl AnyUnit {
    /// Builds a ratio unit, checking that `n` and `d` belong to the family's dimensions.
    ///
    /// This is the checked way to build [`AnyUnit::Ratio`]; a literal `AnyUnit::Ratio { .. }` is not validated
    /// until [`AnyUnit::validate`] runs (the codec does so before encoding).
    pub fn ratio(kind: RatioKind, n: UnitKind, d: UnitKind) -> MeasureResult<AnyUnit> {
        if n.dimension() != kind.numerator() {
            return Err(MeasureError::pairing(kind.tag(), n.tag()));
        }
        if d.dimension() != kind.denominator() {
            return Err(MeasureError::pairing(kind.tag(), d.tag()));
        }
        Ok(AnyUnit::Ratio { kind, n, d })
    }

    /// Returns `self` when it is a simple unit or a ratio whose sides fit its family.
    pub fn validate(self) -> MeasureResult<AnyUnit> {
        match self {
            AnyUnit::Simple(_) => Ok(self),
            AnyUnit::Ratio { kind, n, d } => AnyUnit::ratio(kind, n, d),
        }
    }

    /// Wire discriminator: the unit tag, or the family tag for ratios.
    pub fn tag(self) -> &'static str {
        match self {
            AnyUnit::Simple(unit) => unit.tag(),
            AnyUnit::Ratio { kind, .. } => kind.tag(),
        }
    }

    /// Display label, `"{n}/{d}"` for ratios.
    pub fn units(self) -> String {
        match self {
            AnyUnit::Simple(unit) => unit.symbol().to_string(),
            AnyUnit::Ratio { n, d, .. } => format!("{}/{}", n.symbol(), d.symbol()),
        }
    }

    /// Default display precision.
    pub fn precision(self) -> usize {
        match self {
            AnyUnit::Simple(unit) => unit.precision(),
            AnyUnit::Ratio { .. } => crate::DEFAULT_PRECISION,
        }
    }

    /// Converts a value in this unit to the base unit.
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            AnyUnit::Simple(unit) => unit.to_base(value),
            AnyUnit::Ratio { n, d, .. } => n.to_base(value) / d.to_base(1.0),
        }
    }

    /// Converts a base value into this unit.
    pub fn from_base(self, base: f64) -> f64 {
        match self {
            AnyUnit::Simple(unit) => unit.from_base(base),
            AnyUnit::Ratio { n, d, .. } => n.from_base(base) / d.from_base(1.0),
        }
    }

    /// Whether values of the two units can be compared or combined.
    ///
    /// Simple units must share a dimension; ratios must share a family.
    pub fn is_compatible(self, other: AnyUnit) -> bool {
        match (self, other) {
            (AnyUnit::Simple(a), AnyUnit::Simple(b)) => compatible(a, b),
            (AnyUnit::Ratio { kind: a, .. }, AnyUnit::Ratio { kind: b, .. }) => a == b,
            _ => false,
        }
    }

    fn check_compatible(self, other: AnyUnit) -> MeasureResult<()> {
        if self.is_compatible(other) {
            Ok(())
        } else {
            Err(MeasureError::pairing(self.to_string(), other.to_string()))
        }
    }
}

impl Display for AnyUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AnyUnit::Simple(unit) => write!(f, "{}", unit.tag()),
            AnyUnit::Ratio { kind, n, d } => write!(f, "{}({}/{})", kind.tag(), n.tag(), d.tag()),
        }
    }
}

impl From<UnitKind> for AnyUnit {
    fn from(unit: UnitKind) -> Self {
        AnyUnit::Simple(unit)
    }
}

// =============================================================================
// AnyMeasure
// =============================================================================

/// A value whose unit is only known at runtime.
///
/// `PartialEq` is structural (same value, same unit). Use [`AnyMeasure::try_eq`] to compare quantities through
/// their base values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnyMeasure {
    value: f64,
    unit: AnyUnit,
}

impl AnyMeasure {
    /// Creates a measure of `value` in `unit`.
    ///
    /// The unit is taken as given. Build ratio units with [`AnyUnit::ratio`] or [`AnyMeasure::ratio`] to have their
    /// sides checked.
    pub fn new(value: f64, unit: impl Into<AnyUnit>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Creates a ratio measure, validating the unit pair.
    pub fn ratio(value: f64, kind: RatioKind, n: UnitKind, d: UnitKind) -> MeasureResult<Self> {
        Ok(Self::new(value, AnyUnit::ratio(kind, n, d)?))
    }

    /// Raw value in [`AnyMeasure::unit`].
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit of this measure.
    pub fn unit(&self) -> AnyUnit {
        self.unit
    }

    /// Value in the base unit.
    pub fn base(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    /// The value rounded to `precision` decimals followed by the unit label.
    pub fn display(&self, precision: usize) -> String {
        format!("{}{}", format_number(self.value, precision), self.unit.units())
    }

    /// Converts this measure to another compatible unit.
    pub fn to(&self, target: impl Into<AnyUnit>) -> MeasureResult<AnyMeasure> {
        let target = target.into();
        self.unit.check_compatible(target)?;
        Ok(AnyMeasure::new(target.from_base(self.base()), target))
    }

    /// Base-value equality, failing across dimensions.
    pub fn try_eq(&self, other: &AnyMeasure) -> MeasureResult<bool> {
        self.unit.check_compatible(other.unit)?;
        Ok(self.base() == other.base())
    }

    /// Base-value ordering, failing across dimensions.
    pub fn try_cmp(&self, other: &AnyMeasure) -> MeasureResult<Option<Ordering>> {
        self.unit.check_compatible(other.unit)?;
        Ok(self.base().partial_cmp(&other.base()))
    }

    /// `self + other`, expressed in `self`'s unit.
    pub fn try_add(&self, other: &AnyMeasure) -> MeasureResult<AnyMeasure> {
        let rhs = self.rhs_value(other)?;
        Ok(AnyMeasure::new(self.value + rhs, self.unit))
    }

    /// `self - other`, expressed in `self`'s unit.
    pub fn try_sub(&self, other: &AnyMeasure) -> MeasureResult<AnyMeasure> {
        let rhs = self.rhs_value(other)?;
        Ok(AnyMeasure::new(self.value - rhs, self.unit))
    }

    /// Converts into a typed measure of any unit in the same dimension (or ratio family).
    ///
    /// ```rust
    /// use measures_core::{AnyMeasure, UnitKind};
    /// use measures_core::weight::Ounce;
    ///
    /// let any = AnyMeasure::new(1.0, UnitKind::Pound);
    /// let oz = any.try_into_measure::<Ounce>().unwrap();
    /// assert_eq!(oz.value(), 16.0);
    /// ```
    pub fn try_into_measure<U: Tagged>(&self) -> MeasureResult<Measure<U>> {
        let target = U::any_unit();
        self.unit.check_compatible(target)?;
        if self.unit == target {
            return Ok(Measure::new(self.value));
        }
        Ok(Measure::new(U::from_base(self.base())))
    }

    fn rhs_value(&self, other: &AnyMeasure) -> MeasureResult<f64> {
        self.unit.check_compatible(other.unit)?;
        if self.unit == other.unit {
            Ok(other.value)
        } else {
            Ok(self.unit.from_base(other.base()))
        }
    }
}

impl<U: Tagged> From<Measure<U>> for AnyMeasure {
    fn from(measure: Measure<U>) -> Self {
        AnyMeasure::new(measure.value(), U::any_unit())
    }
}

impl Display for AnyMeasure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or_else(|| self.unit.precision());
        write!(f, "{}", self.display(precision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::Flow;
    use crate::time::{Minute, Minutes};
    use crate::volume::{Gallon, Gallons};
    use crate::weight::{Kilograms, Pound, Pounds};
    use approx::assert_abs_diff_eq;

    #[test]
    fn tags_are_unique_and_resolve_back() {
        for (i, a) in UnitKind::ALL.iter().enumerate() {
            assert_eq!(UnitKind::from_tag(a.tag()), Some(*a));
            for b in &UnitKind::ALL[i + 1..] {
                assert_ne!(a.tag(), b.tag());
            }
            assert!(RatioKind::from_tag(a.tag()).is_none());
        }
        for kind in RatioKind::ALL {
            assert_eq!(RatioKind::from_tag(kind.tag()), Some(*kind));
        }
        assert_eq!(UnitKind::from_tag("stone"), None);
    }

    #[test]
    fn legacy_spellings_resolve_to_canonical_tags() {
        assert_eq!(UnitKind::Minute.tag(), "minutes");
        assert_eq!(UnitKind::from_tag("minute"), Some(UnitKind::Minute));
        assert_eq!(UnitKind::from_tag("years"), Some(UnitKind::Year));
        assert_eq!(RatioKind::WeightToVolume.tag(), "WeightToVolume");
        assert_eq!(RatioKind::VolumeToWeight.tag(), "volumeToWeight");
        assert_eq!(RatioKind::from_tag("weight_to_volume"), Some(RatioKind::WeightToVolume));
        assert_eq!(RatioKind::from_tag("volume_to_weight"), Some(RatioKind::VolumeToWeight));
    }

    #[test]
    fn validate_checks_hand_built_ratios() {
        let bad = AnyUnit::Ratio {
            kind: RatioKind::Flow,
            n: UnitKind::Meter,
            d: UnitKind::Second,
        };
        assert!(matches!(bad.validate(), Err(MeasureError::InvalidUnitPairing { .. })));
        let good = AnyUnit::ratio(RatioKind::Flow, UnitKind::Liter, UnitKind::Second).unwrap();
        assert_eq!(good.validate().unwrap(), good);
        assert!(AnyUnit::Simple(UnitKind::Cup).validate().is_ok());
    }

    #[test]
    fn each_dimension_has_one_identity_unit() {
        for dim in DimensionKind::ALL {
            let base = dim.base_unit();
            assert_eq!(base.dimension(), *dim);
            assert_eq!(base.to_base(12.5), 12.5);
            assert_eq!(base.from_base(12.5), 12.5);

            let identities = UnitKind::ALL
                .iter()
                .filter(|u| u.dimension() == *dim)
                .filter(|u| u.to_base(12.5) == 12.5 && u.from_base(12.5) == 12.5)
                .count();
            assert_eq!(identities, 1, "{}", dim.tag());
        }
    }

    #[test]
    fn amount_dimensions() {
        assert!(DimensionKind::Weight.is_amount());
        assert!(DimensionKind::Volume.is_amount());
        assert!(!DimensionKind::Gravity.is_amount());
    }

    #[test]
    fn dispatch_matches_static_units() {
        assert_eq!(UnitKind::Kilogram.symbol(), "kg");
        assert_eq!(UnitKind::SpecificGravity.precision(), 4);
        assert_eq!(UnitKind::Gram.precision(), 2);
        assert_abs_diff_eq!(UnitKind::Celsius.to_base(1.0), 33.8, epsilon = 1e-12);
        assert_abs_diff_eq!(UnitKind::Gallon.to_base(1.0), 3.78541, epsilon = 1e-12);
    }

    #[test]
    fn convert_value_rejects_other_dimensions() {
        let err = convert_value(1.0, UnitKind::Kilogram, UnitKind::Liter).unwrap_err();
        assert_eq!(
            err,
            MeasureError::InvalidUnitPairing {
                left: "kilogram".into(),
                right: "liter".into()
            }
        );
        assert_eq!(convert_value(3.0, UnitKind::Cup, UnitKind::Cup).unwrap(), 3.0);
    }

    #[test]
    fn ratio_units_validate_their_sides() {
        assert!(AnyUnit::ratio(RatioKind::Flow, UnitKind::Gallon, UnitKind::Minute).is_ok());
        let err = AnyUnit::ratio(RatioKind::Flow, UnitKind::Meter, UnitKind::Minute).unwrap_err();
        assert!(err.to_string().contains("flow"));
        assert!(err.to_string().contains("meter"));
    }

    #[test]
    fn ratio_unit_label_and_base() {
        let unit = AnyUnit::ratio(RatioKind::WeightToVolume, UnitKind::Pound, UnitKind::Gallon).unwrap();
        assert_eq!(unit.units(), "lb/gal");
        assert_eq!(unit.tag(), "WeightToVolume");
        assert_eq!(unit.to_string(), "WeightToVolume(pound/gallon)");
        assert_abs_diff_eq!(unit.to_base(1.5), 1.5 / 3.78541, epsilon = 1e-12);
    }

    #[test]
    fn any_measure_converts_and_compares() {
        let kg = AnyMeasure::new(1.0, UnitKind::Kilogram);
        let lb = kg.to(UnitKind::Pound).unwrap();
        assert_abs_diff_eq!(lb.value(), 2.20462, epsilon = 1e-9);
        assert!(kg.try_eq(&lb).unwrap());
        assert_eq!(
            AnyMeasure::new(1.0, UnitKind::Pound).try_cmp(&kg).unwrap(),
            Some(Ordering::Less)
        );
        assert!(kg.to(UnitKind::Liter).is_err());
        assert!(kg.try_eq(&AnyMeasure::new(1.0, UnitKind::Liter)).is_err());
    }

    #[test]
    fn any_measure_arithmetic_keeps_left_unit() {
        let lb = AnyMeasure::new(1.0, UnitKind::Pound);
        let oz = AnyMeasure::new(8.0, UnitKind::Ounce);
        let sum = lb.try_add(&oz).unwrap();
        assert_eq!(sum.unit(), AnyUnit::Simple(UnitKind::Pound));
        assert_abs_diff_eq!(sum.value(), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(oz.try_sub(&lb).unwrap().value(), -8.0, epsilon = 1e-12);
        assert!(lb.try_add(&AnyMeasure::new(1.0, UnitKind::Celsius)).is_err());
    }

    #[test]
    fn flow_and_velocity_never_mix() {
        let flow = AnyMeasure::ratio(1.0, RatioKind::Flow, UnitKind::Liter, UnitKind::Second).unwrap();
        let velocity =
            AnyMeasure::ratio(1.0, RatioKind::Velocity, UnitKind::Meter, UnitKind::Second).unwrap();
        assert!(matches!(
            flow.try_cmp(&velocity),
            Err(MeasureError::InvalidUnitPairing { .. })
        ));
    }

    #[test]
    fn typed_round_trip_through_any() {
        let any: AnyMeasure = Kilograms::new(2.0).into();
        assert_eq!(any.unit(), AnyUnit::Simple(UnitKind::Kilogram));

        let lb: Pounds = any.try_into_measure::<Pound>().unwrap();
        assert_abs_diff_eq!(lb.value(), 4.40924, epsilon = 1e-9);

        let err = any.try_into_measure::<crate::volume::Liter>().unwrap_err();
        assert!(matches!(err, MeasureError::InvalidUnitPairing { .. }));

        let f: Flow<Gallon, Minute> = Gallons::new(5.0).per(Minutes::new(1.0));
        let any: AnyMeasure = f.into();
        assert_eq!(any.display(1), "5.0gal/min");
        assert_eq!(format!("{}", any), "5.00gal/min");
    }
}
