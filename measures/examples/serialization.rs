//! Serializing measures to and from the tagged JSON format.
//!
//! ```bash
//! cargo run --example serialization
//! ```

use measures::flow::Flow;
use measures::{codec, AnyMeasure, Gallon, Kilograms, Minute, Ounces, Pound, Pounds, UnitKind};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
struct HopAddition {
    variety: String,
    amount: Ounces,
    boil_minutes: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Measure Serialization Examples ===\n");

    // 1. A typed measure.
    let json = codec::encode(Pounds::new(1.0))?;
    println!("1. Pound: {}", json);
    let back = codec::decode_as::<Pound>(&json)?;
    println!("   Restored: {}", back.display(2));

    // 2. A ratio carries both unit tags.
    let pump: Flow<Gallon, Minute> = Flow::new(2.5);
    println!("2. Flow: {}", codec::encode(pump)?);

    // 3. Unknown unit at compile time.
    let any = codec::decode(r#"{"class":"celsius","value":66}"#)?;
    println!("3. Decoded {} ({} in base units)", any, any.base());
    let in_f = any.to(UnitKind::Fahrenheit)?;
    println!("   As fahrenheit: {}", in_f);

    // 4. Measures inside structs.
    let addition = HopAddition {
        variety: "Cascade".to_string(),
        amount: Ounces::new(1.0),
        boil_minutes: 60.0,
    };
    let json = serde_json::to_string_pretty(&addition)?;
    println!("4. Struct:\n{}", json);
    let restored: HopAddition = serde_json::from_str(&json)?;
    println!("   Restored: {:?}", restored);

    // 5. Errors name the offending tag.
    match codec::decode(r#"{"class":"stone","value":1}"#) {
        Ok(m) => println!("5. Unexpected: {}", m),
        Err(err) => println!("5. {}", err),
    }
    match codec::decode_as::<measures::Ounce>(&codec::encode(Kilograms::new(1.0))?) {
        Ok(m) => println!("   Unexpected: {}", m),
        Err(err) => println!("   {}", err),
    }

    let total = AnyMeasure::new(1.0, UnitKind::Pound).try_add(&AnyMeasure::new(8.0, UnitKind::Ounce))?;
    println!("   1 lb + 8 oz = {}", total);

    Ok(())
}
