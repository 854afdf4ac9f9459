//! Minimal end-to-end example: wrap headings, measure across north and convert between ranges.

use circval::{SignedDeg, SignedDegrees, UnsignedDegrees, UnsignedRad};

fn main() {
    let heading = UnsignedDegrees::new(350.0);
    let turned = heading + 20.0;
    assert_eq!(turned.value(), 10.0);

    // shortest turn from 350° to 10° is +20°, the upward walk is also 20°
    assert_eq!(heading.sdist(turned), 20.0);
    assert_eq!(turned.pdist(heading), 340.0);

    let signed: SignedDegrees = heading.into();
    assert_eq!(signed.value(), -10.0);

    let rad = turned.to::<UnsignedRad>();
    assert!((rad.value() - 10.0_f64.to_radians()).abs() < 1e-12);
    assert_eq!(rad.to::<SignedDeg>().value().round(), 10.0);

    println!("{heading} + 20 = {turned} ({signed} signed, {rad})");
}
