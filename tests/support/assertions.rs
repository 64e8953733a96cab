use rust_decimal::Decimal;

pub fn assert_decimal_near(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

pub fn assert_stakes_near(actual: &[Decimal], expected: &[Decimal], tolerance: Decimal) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "expected {} stakes, got {:?}",
        expected.len(),
        actual
    );
    for (actual, expected) in actual.iter().zip(expected) {
        assert_decimal_near(*actual, *expected, tolerance);
    }
}
