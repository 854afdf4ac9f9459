//! Serializing circular values, lengths and arcs.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use circval::{ArcLength, CircArc, SignedDegrees, UnsignedDeg, UnsignedDegrees};
    use serde::{Deserialize, Serialize};

    println!("=== Circular Serialization Examples ===\n");

    // Values serialize as the bare f64 and are re-wrapped on the way in
    println!("1. Raw values:");
    let heading = UnsignedDegrees::new(270.0);
    let json = serde_json::to_string(&heading).unwrap();
    println!("   {} → JSON: {}", heading, json);
    let signed: SignedDegrees = serde_json::from_str(&json).unwrap();
    println!("   JSON: {} as signed degrees → {}", json, signed);
    println!();

    println!("2. Structs with arcs and lengths:");
    #[derive(Serialize, Deserialize, Debug)]
    struct Sector {
        #[serde(with = "circval::serde_with_range")]
        bearing: UnsignedDegrees,
        arc: CircArc<UnsignedDeg>,
        width: ArcLength<UnsignedDeg>,
    }

    let sector = Sector {
        bearing: UnsignedDegrees::new(45.0),
        arc: CircArc::from_raw(350.0, 40.0),
        width: ArcLength::new(40.0),
    };
    let json = serde_json::to_string_pretty(&sector).unwrap();
    println!("{}", json);
    let restored: Sector = serde_json::from_str(&json).unwrap();
    println!("   Restored arc: {}", restored.arc);
    println!();

    println!("3. Range mismatch is rejected:");
    let wrong = r#"{"bearing":{"value":10.0,"range":"sdeg"},"arc":{"start":0.0,"length":0.0},"width":0.0}"#;
    match serde_json::from_str::<Sector>(wrong) {
        Ok(_) => println!("   unexpectedly accepted"),
        Err(e) => println!("   error: {}", e),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
