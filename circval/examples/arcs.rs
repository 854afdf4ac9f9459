//! Arc predicates: containment, intersection and the whole-circle arc.

use circval::{ArcLength, ArcTester, CircArc, SignedDeg, UnsignedDeg, UnsignedDegrees};

fn main() {
    let watch = CircArc::<UnsignedDeg>::from_raw(100.0, 100.0);
    println!("watch sector: {watch}");

    for bearing in [100.0, 150.0, 200.0, 250.0] {
        let inside = watch.contains(UnsignedDegrees::new(bearing));
        println!("  bearing {bearing:>5}: {}", if inside { "inside" } else { "outside" });
    }

    let next = CircArc::<UnsignedDeg>::from_raw(200.0, 100.0);
    assert!(watch.intersects(&next));
    println!("{watch} touches {next}");

    let across_north = CircArc::<UnsignedDeg>::from_endpoints(UnsignedDegrees::new(350.0), UnsignedDegrees::new(10.0));
    assert_eq!(across_north.length(), ArcLength::new(20.0));
    assert!(across_north.contains(UnsignedDegrees::new(0.0)));

    let a = CircArc::<SignedDeg>::from_raw(-170.0, 360.0);
    let b = CircArc::<SignedDeg>::from_raw(-180.0, 360.0);
    assert!(a.contains_arc(&b) && a == b);
    println!("full circles {a} and {b} are the same arc");

    let report = ArcTester::<UnsignedDeg>::new(12)
        .and_then(|t| t.run())
        .unwrap_or_else(|e| panic!("arc invariants broken: {e}"));
    println!(
        "sweep: {} pairs, {} identical, {} containing, {} intersecting",
        report.pairs, report.identical, report.first_contains_second, report.intersecting
    );
}
