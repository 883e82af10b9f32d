//! Integration-level smoke tests for the `measures` facade crate.

use measures::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Reference scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn kilogram_reads_in_every_weight_unit() {
    let kg = Kilograms::new(1.0);
    assert_abs_diff_eq!(kg.pounds(), 2.20462, epsilon = 1e-9);
    assert_abs_diff_eq!(kg.ounces(), 35.274, epsilon = 1e-3);
    assert_eq!(kg.grams(), 1000.0);
}

#[test]
fn celsius_is_affine_over_fahrenheit() {
    assert_abs_diff_eq!(DegreesCelsius::new(1.0).base(), 33.8, epsilon = 1e-12);
    assert_abs_diff_eq!(DegreesFahrenheit::new(33.8).celsius(), 1.0, epsilon = 1e-12);
}

#[test]
fn gallon_is_measured_in_liters() {
    assert_abs_diff_eq!(Gallons::new(1.0).base(), 3.78541, epsilon = 1e-12);
    assert_abs_diff_eq!(Liters::new(3.78541).gallons(), 1.0, epsilon = 1e-12);
}

#[test]
fn specific_gravity_reads_as_brix_and_plato() {
    let og = SpecificGravities::new(1.040);
    assert_abs_diff_eq!(og.brix(), 10.0, epsilon = 0.1);
    assert_abs_diff_eq!(og.plato(), 10.0, epsilon = 0.1);
}

#[test]
fn weight_to_volume_reprojects() {
    let grist: WeightToVolume<Pound, Gallon> = WeightToVolume::new(1.5);
    let direct = Kilogram::from_base(grist.base()) / Liter::from_base(1.0);
    assert_eq!(grist.convert::<Kilogram, Liter>(), direct);
    assert_relative_eq!(direct, 0.17973, max_relative = 1e-4);
}

#[cfg(feature = "serde")]
#[test]
fn pound_survives_json() {
    let json = codec::encode(Pounds::new(1.0)).unwrap();
    let back: Pounds = serde_json::from_str(&json).unwrap();
    assert_eq!(back.display(2), "1.00lb");
}

// ─────────────────────────────────────────────────────────────────────────────
// Smoke tests per dimension
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_volume() {
    let tsp: Teaspoons = Tablespoons::new(1.0).to();
    assert_abs_diff_eq!(tsp.value(), 3.0, epsilon = 1e-4);
    let floz: FluidOunces = Cups::new(1.0).to();
    assert_abs_diff_eq!(floz.value(), 8.115, epsilon = 1e-3);
}

#[test]
fn smoke_test_length() {
    let ft: Feet = Yards::new(1.0).to();
    assert_abs_diff_eq!(ft.value(), 3.0, epsilon = 1e-4);
    assert_abs_diff_eq!(Miles::new(1.0).kilometers(), 1.609344, epsilon = 1e-5);
}

#[test]
fn smoke_test_time() {
    let min: Minutes = Hours::new(1.5).to();
    assert_eq!(min.value(), 90.0);
    assert_abs_diff_eq!(Years::new(1.0).months(), 12.0, epsilon = 1e-12);
    assert_abs_diff_eq!(Weeks::new(2.0).days(), 14.0, epsilon = 1e-12);
}

#[test]
fn smoke_test_concentration() {
    assert_abs_diff_eq!(MassPercents::new(1.0).ppm(), 10_000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(Ppb::new(500.0).ppm(), 0.5, epsilon = 1e-12);
    assert_eq!(Dilutions::new(3.0).display(0), "3ppm");
}

#[test]
fn smoke_test_gravity_yield() {
    let y = YieldPercents::new(100.0);
    assert_abs_diff_eq!(y.gravity_points(), 46.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y.specific_gravity(), 1.046, epsilon = 1e-12);
}

#[test]
fn mash_thickness_from_strike_water() {
    let water = Quarts::new(15.0);
    let grain = Pounds::new(12.0);
    let thickness: VolumeToWeight<Quart, Pound> = water.per(grain);
    assert_eq!(thickness.value(), 1.25);
    assert_abs_diff_eq!(thickness.numerator_for(Kilograms::new(1.0)).value(), 2.755775, epsilon = 1e-6);
}

#[test]
fn runtime_dispatch_matches_typed_conversion() {
    let typed = Ounces::new(5.0).to::<Gram>().value();
    let dynamic = convert_value(5.0, UnitKind::Ounce, UnitKind::Gram).unwrap();
    assert_abs_diff_eq!(typed, dynamic, epsilon = 1e-12);
    assert!(matches!(
        convert_value(5.0, UnitKind::Ounce, UnitKind::Liter),
        Err(MeasureError::InvalidUnitPairing { .. })
    ));
}

#[test]
fn operators_keep_left_unit() {
    let mut hops = Ounces::new(1.0);
    hops += Grams::new(28.349);
    assert_abs_diff_eq!(hops.value(), 2.0, epsilon = 1e-4);
    assert_eq!(hops.units(), "oz");

    assert_eq!((10.0 % Liters::new(4.0)).value(), 2.0);
    assert_eq!((2.0 * Liters::new(4.0)).value(), 8.0);
    assert_eq!(Liters::new(4.0).inc().value(), 5.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_volume_round_trip(v in -1e5..1e5f64) {
        let back = Liters::new(v).to::<Gallon>().to::<Teaspoon>().to::<Liter>();
        prop_assert!((back.value() - v).abs() < 1e-4);
    }

    #[test]
    fn prop_temperature_round_trip(v in -500.0..500.0f64) {
        let back = DegreesCelsius::new(v).to::<Fahrenheit>().to::<Celsius>();
        prop_assert!((back.value() - v).abs() < 1e-9);
    }

    #[test]
    fn prop_brix_plato_agree_within_a_tenth(v in 2.0..30.0f64) {
        prop_assert!((DegreesBrix::new(v).brix() - v).abs() < 0.1);
        prop_assert!((DegreesPlato::new(v).plato() - v).abs() < 0.1);
    }

    #[test]
    fn prop_equality_is_base_equality(a in -1e4..1e4f64) {
        let qt = Quarts::new(a);
        let pt: Pints = qt.to();
        prop_assert!((qt.base() - pt.base()).abs() < 1e-9);
    }
}
