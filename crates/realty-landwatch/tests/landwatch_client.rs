//! Integration tests for `LandwatchClient` against a local mock server.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use realty_landwatch::details::EXPECTED_KEYS;
use realty_landwatch::{LandwatchClient, RealtyError, SearchQuery};

fn client() -> LandwatchClient {
    LandwatchClient::new(5).expect("failed to build LandwatchClient")
}

/// One complete listing entry: every expected key present, interesting
/// fields filled, the rest null.
fn one_result() -> Value {
    let mut object = serde_json::Map::new();
    for key in EXPECTED_KEYS {
        object.insert((*key).to_owned(), Value::Null);
    }
    let fill = json!({
        "price": 89_000,
        "acres": 12.0,
        "address": "0 County Rd 44",
        "city": "Pikeville",
        "county": "Bledsoe",
        "state": "Tennessee",
        "stateCode": "TN",
        "zip": "37367",
        "longitude": -85.2,
        "latitude": 35.6,
        "description": "Unrestricted acreage.",
        "hasHouse": false,
        "hasVideo": false,
        "hasVirtualTour": false,
        "propertyTypesLabel": "Undeveloped",
        "canonicalUrl": "/pid/400000001",
    });
    if let Value::Object(source) = fill {
        for (k, v) in source {
            object.insert(k, v);
        }
    }
    Value::Object(object)
}

fn envelope(results: Vec<Value>) -> Value {
    json!({"searchResults": {"propertyResults": results}})
}

#[tokio::test]
async fn search_extracts_property_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/land"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![one_result()])))
        .mount(&server)
        .await;

    let mut query = SearchQuery::new();
    query.set_base_url(&server.uri());

    let results = client().search(&query).await.expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["city"], "Pikeville");
}

#[tokio::test]
async fn search_listings_normalizes_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tennessee/page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![one_result()])))
        .mount(&server)
        .await;

    let mut query = SearchQuery::new();
    query.set_base_url(&server.uri());
    query.set_state("Tennessee").unwrap().set_page(2).unwrap();

    let parcels = client().search_listings(&query).await.expect("search");
    assert_eq!(parcels.len(), 1);
    assert!((parcels[0].acres - 12.0).abs() < f64::EPSILON);
    assert_eq!(parcels[0].url, "https://www.landwatch.com/pid/400000001");
}

#[tokio::test]
async fn schema_drift_in_a_result_names_the_missing_keys() {
    let server = MockServer::start().await;

    let mut drifted = one_result();
    drifted.as_object_mut().unwrap().remove("price");
    drifted.as_object_mut().unwrap().remove("acres");

    Mock::given(method("GET"))
        .and(path("/land"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![drifted])))
        .mount(&server)
        .await;

    let mut query = SearchQuery::new();
    query.set_base_url(&server.uri());

    let err = client().search_listings(&query).await.unwrap_err();
    match err {
        RealtyError::MissingFields { keys, .. } => {
            assert_eq!(keys, vec!["acres", "price"]);
        }
        other => panic!("expected MissingFields, got {other:?}"),
    }
}

#[tokio::test]
async fn non_2xx_status_is_surfaced_not_parsed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/land"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let mut query = SearchQuery::new();
    query.set_base_url(&server.uri());

    let err = client().search(&query).await.unwrap_err();
    assert!(matches!(
        err,
        RealtyError::UnexpectedStatus { status: 500, .. }
    ));
}

#[tokio::test]
async fn non_json_body_is_a_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/land"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
        .mount(&server)
        .await;

    let mut query = SearchQuery::new();
    query.set_base_url(&server.uri());

    let err = client().search(&query).await.unwrap_err();
    assert!(matches!(err, RealtyError::MalformedResponse { .. }));
}

#[tokio::test]
async fn missing_envelope_path_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/land"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"searchResults": {}})))
        .mount(&server)
        .await;

    let mut query = SearchQuery::new();
    query.set_base_url(&server.uri());

    let err = client().search(&query).await.unwrap_err();
    match err {
        RealtyError::MissingFields { keys, .. } => assert_eq!(keys, vec!["propertyResults"]),
        other => panic!("expected MissingFields, got {other:?}"),
    }
}
