use serde_json::{json, Value};

use super::*;

pub(crate) fn full_building() -> Value {
    json!({
        "zpid": "2083240012",
        "buildingName": "Riverview Flats",
        "description": "Mid-rise on the north shore.",
        "isLowIncome": false,
        "isSeniorHousing": false,
        "isStudentHousing": false,
        "amenityDetails": {
            "hours": ["Mon-Fri 9am-5pm"],
            "unitFeatures": ["Dishwasher", "In-unit laundry"],
        },
        "buildingPhoneNumber": "423-555-0188",
        "city": "Chattanooga",
        "county": "Hamilton County",
        "state": "TN",
        "zipcode": "37405",
        "fullAddress": "400 Riverview Ave, Chattanooga, TN 37405",
        "buildingAttributes": {
            "applicationFee": 50.0,
            "administrativeFee": null,
            "depositFeeMin": 500.0,
            "depositFeeMax": 1000.0,
            "hasSharedLaundry": true,
            "hasSwimmingPool": false,
            "parkingTypes": ["Garage"],
        },
        "floorplans": [{ "name": "A1", "beds": 1, "price": 1450 }],
    })
}

fn page_for(building: Value) -> NextDataPage {
    NextDataPage {
        initial_data: json!({ "building": building }),
        redux_state: Value::Null,
    }
}

#[test]
fn extracts_building_facts_and_fees() {
    let listing = ApartmentListing::from_page(&page_for(full_building())).unwrap();

    assert_eq!(listing.zpid, "2083240012");
    assert_eq!(listing.building_name, "Riverview Flats");
    assert_eq!(listing.county.as_deref(), Some("Hamilton County"));
    assert_eq!(listing.application_fee, Some(50.0));
    assert_eq!(listing.administrative_fee, None);
    assert_eq!(listing.deposit_fee_min, Some(500.0));
    assert_eq!(listing.shared_laundry, Some(true));
    assert_eq!(listing.swimming_pool, Some(false));
    assert_eq!(listing.office_hours[0], "Mon-Fri 9am-5pm");
    assert_eq!(listing.floorplans[0]["name"], "A1");
    // The full attribute object stays available for the long tail.
    assert_eq!(listing.attributes["parkingTypes"][0], "Garage");
}

#[test]
fn numeric_zpid_is_coerced_to_string() {
    let mut building = full_building();
    building["zpid"] = json!(2_083_240_012_u64);
    let listing = ApartmentListing::from_page(&page_for(building)).unwrap();
    assert_eq!(listing.zpid, "2083240012");
}

#[test]
fn missing_building_attributes_fails() {
    let mut building = full_building();
    building.as_object_mut().unwrap().remove("buildingAttributes");
    let err = ApartmentListing::from_page(&page_for(building)).unwrap_err();
    assert!(matches!(err, RealtyError::MissingFields { .. }));
}

#[test]
fn absent_amenity_flags_stay_none() {
    let mut building = full_building();
    building["buildingAttributes"]
        .as_object_mut()
        .unwrap()
        .remove("hasSharedLaundry");
    let listing = ApartmentListing::from_page(&page_for(building)).unwrap();
    assert_eq!(listing.shared_laundry, None);
}
