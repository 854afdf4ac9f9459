//! Runtime ranges: extend the built-in registry from TOML and convert by name.
//!
//! ```bash
//! cargo run --example registry --features config
//! ```

#[cfg(feature = "config")]
fn main() -> Result<(), circval::RegistryError> {
    use circval::RangeRegistry;

    const CONFIG: &str = r#"
        [ranges.compass]
        lower = 0.0
        upper = 32.0

        [ranges.weekday]
        lower = 1.0
        upper = 8.0
        zero = 1.0
    "#;

    let mut registry = RangeRegistry::builtin();
    registry.merge(RangeRegistry::from_toml_str(CONFIG)?);

    for (name, spec) in registry.iter() {
        println!("{name:>8}: [{}, {}) zero {}", spec.lower(), spec.upper(), spec.zero());
    }

    let point = registry.convert(270.0, "deg", "compass")?;
    println!("270 deg is compass point {point}");

    let day = registry.lookup("weekday")?;
    println!("day 10 of the week wraps to {}", day.wrap(10.0));
    println!("shortest hop from day 7 to day 2: {}", day.sdist(7.0, 2.0));

    Ok(())
}

#[cfg(not(feature = "config"))]
fn main() {
    println!("This example requires the 'config' feature.");
    println!("Run with: cargo run --example registry --features config");
}
