//! Ratio example: mash thickness, grist density and pump flow.

use measures::flow::Flow;
use measures::{
    Gallon, Gallons, Hour, Kilogram, Liter, Minute, Minutes, Per, Pound, Pounds, Quart, Quarts,
    VolumeToWeight, WeightToVolume,
};

fn main() {
    // Mash thickness from strike water and grain.
    let thickness: VolumeToWeight<Quart, Pound> = Quarts::new(15.0).per(Pounds::new(12.0));
    let metric = thickness.to::<Per<Liter, Kilogram>>();
    println!("Mash thickness: {} = {:.2}", thickness, metric);

    // The same ratio without building a new measure.
    let grist: WeightToVolume<Pound, Gallon> = WeightToVolume::new(1.5);
    println!("Grist: {} = {:.4} kg/l", grist, grist.convert::<Kilogram, Liter>());

    // Rate times amount gives the numerator back.
    let pump: Flow<Gallon, Minute> = Gallons::new(10.0).per(Minutes::new(4.0));
    let transferred = pump.numerator_for(Minutes::new(3.0));
    println!("Pump: {} moves {} in 3 minutes", pump, transferred);
    assert!((transferred.value() - 7.5).abs() < 1e-12);

    let per_hour = pump.to::<Per<Liter, Hour>>();
    println!("      = {:.1}", per_hour);
    assert!((per_hour.base() - pump.base()).abs() < 1e-12);
}
