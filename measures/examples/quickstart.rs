//! Quick start: typed measures, conversions and formatting.

use measures::{
    Celsius, DegreesCelsius, Gallon, Gallons, Kilograms, Liter, Ounces, Pounds, SpecificGravities,
};

fn main() {
    // Grain bill, mixed units. The sum keeps the left operand's unit.
    let base_malt = Pounds::new(9.0);
    let crystal = Kilograms::new(0.5);
    let grain = base_malt + crystal;
    println!("Grain bill: {} ({:.3} kg)", grain, grain.kilograms());

    // Batch volume.
    let batch = Gallons::new(5.5);
    let liters = batch.to::<Liter>();
    println!("Batch: {} = {:.1}", batch, liters);
    assert!((liters.to::<Gallon>().value() - 5.5).abs() < 1e-12);

    // Strike water temperature.
    let strike = DegreesCelsius::new(74.0);
    println!("Strike: {} = {:.1}°F", strike, strike.fahrenheit());
    assert!((strike.to::<measures::Fahrenheit>().to::<Celsius>().value() - 74.0).abs() < 1e-9);

    // Original gravity, on every gravity scale.
    let og = SpecificGravities::new(1.052);
    println!(
        "OG: {} = {:.0} points = {:.1}°Bx = {:.1}°P",
        og,
        og.gravity_points(),
        og.brix(),
        og.plato()
    );

    // Comparisons go through the base unit.
    let hops = Ounces::new(2.0);
    assert!(hops < Pounds::new(0.25));
    println!("{} is less than a quarter pound", hops.display(1));
}
