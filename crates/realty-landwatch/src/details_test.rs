use serde_json::{json, Value};

use super::*;

/// A complete, minimal `propertyResults` entry covering every expected key.
pub(crate) fn full_result() -> Value {
    let mut object = serde_json::Map::new();
    for key in EXPECTED_KEYS {
        object.insert((*key).to_owned(), Value::Null);
    }
    let mut value = Value::Object(object);

    let fill = json!({
        "price": 125000,
        "acres": 5.5,
        "homesqft": 1800,
        "address": "123 Ridge Rd",
        "city": "Dunlap",
        "county": "Sequatchie",
        "state": "Tennessee",
        "stateCode": "TN",
        "zip": "37327",
        "longitude": -85.38,
        "latitude": 35.37,
        "description": "Wooded parcel with creek frontage.",
        "hasHouse": true,
        "hasVideo": false,
        "hasVirtualTour": false,
        "propertyTypesLabel": "Homesite, Recreational",
        "beds": 3,
        "baths": 2.0,
        "halfBaths": 1,
        "brokerCompany": "Ridge Realty",
        "brokerName": "A. Broker",
        "canonicalUrl": "/pid/412345678",
    });
    if let (Value::Object(target), Value::Object(source)) = (&mut value, fill) {
        for (k, v) in source {
            target.insert(k, v);
        }
    }
    value
}

#[test]
fn full_result_normalizes() {
    let parcel = LandParcel::from_result(&full_result()).unwrap();
    assert!((parcel.price - 125_000.0).abs() < f64::EPSILON);
    assert!((parcel.acres - 5.5).abs() < f64::EPSILON);
    assert_eq!(parcel.home_sqft, Some(1800.0));
    assert_eq!(parcel.city, "Dunlap");
    assert_eq!(parcel.state_code, "TN");
    assert!(parcel.has_house);
    assert_eq!(parcel.beds, Some(3.0));
    assert_eq!(parcel.url, "https://www.landwatch.com/pid/412345678");
}

#[test]
fn nullable_fields_surface_as_none() {
    let mut result = full_result();
    result["lake"] = Value::Null;
    result["auctionDate"] = Value::Null;
    result["beds"] = Value::Null;
    let parcel = LandParcel::from_result(&result).unwrap();
    assert_eq!(parcel.lake, None);
    assert_eq!(parcel.auction_date, None);
    assert_eq!(parcel.beds, None);
}

#[test]
fn missing_keys_are_all_named_at_once() {
    let mut result = full_result();
    let object = result.as_object_mut().unwrap();
    object.remove("price");
    object.remove("acres");
    object.remove("zip");

    let err = LandParcel::from_result(&result).unwrap_err();
    match err {
        RealtyError::MissingFields { context, keys } => {
            assert_eq!(context, "property_result");
            assert_eq!(keys, vec!["acres", "price", "zip"]);
        }
        other => panic!("expected MissingFields, got {other:?}"),
    }
}

#[test]
fn wrong_value_type_is_schema_drift() {
    let mut result = full_result();
    result["price"] = json!("125,000");
    assert!(matches!(
        LandParcel::from_result(&result),
        Err(RealtyError::UnexpectedSchema { .. })
    ));
}

#[test]
fn non_object_input_is_rejected() {
    assert!(matches!(
        LandParcel::from_result(&json!([1, 2])),
        Err(RealtyError::MissingFields { .. }) | Err(RealtyError::UnexpectedSchema { .. })
    ));
}
