use super::*;

fn sqft(input: &str) -> f64 {
    parse_lot_size(input)
        .unwrap()
        .unwrap_or_else(|| panic!("expected Some for {input:?}"))
}

#[test]
fn whole_acres_convert_with_fixed_factor() {
    assert!((sqft("5 Acres") - 217_800.0).abs() < f64::EPSILON);
}

#[test]
fn fractional_acres_convert_with_fixed_factor() {
    assert!((sqft("1.5 Acres") - 65_340.0).abs() < f64::EPSILON);
}

#[test]
fn singular_acre_is_recognized() {
    assert!((sqft("1 Acre") - 43_560.0).abs() < f64::EPSILON);
}

#[test]
fn sqft_values_parse_directly() {
    assert!((sqft("2000 sqft") - 2_000.0).abs() < f64::EPSILON);
}

#[test]
fn sqft_values_with_thousands_separator() {
    assert!((sqft("8,712 sq ft") - 8_712.0).abs() < f64::EPSILON);
}

#[test]
fn square_feet_spelled_out() {
    assert!((sqft("2000 Square Feet") - 2_000.0).abs() < f64::EPSILON);
}

#[test]
fn empty_input_yields_none() {
    assert_eq!(parse_lot_size("").unwrap(), None);
    assert_eq!(parse_lot_size("   ").unwrap(), None);
}

#[test]
fn unrecognized_unit_is_an_error() {
    let err = parse_lot_size("5 hectares").unwrap_err();
    match err {
        RealtyError::InvalidQuantity { value, .. } => assert_eq!(value, "5 hectares"),
        other => panic!("expected InvalidQuantity, got {other:?}"),
    }
}

#[test]
fn unit_without_number_is_an_error() {
    assert!(matches!(
        parse_lot_size("Acres"),
        Err(RealtyError::InvalidQuantity { .. })
    ));
}

#[test]
fn acres_to_sqft_uses_documented_factor() {
    assert!((acres_to_sqft(2.0) - 87_120.0).abs() < f64::EPSILON);
}
