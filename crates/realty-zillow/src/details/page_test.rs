use serde_json::{json, Value};

use super::*;

fn preload_html(api_cache: &Value) -> String {
    let preload = json!({ "apiCache": api_cache.to_string() });
    format!("<html><body><script id=\"hdpApolloPreloadedData\">{preload}</script></body></html>")
}

#[test]
fn preload_page_takes_property_from_the_full_cache() {
    let cache = json!({
        "VariantQuery{\"zpid\":123}": { "property": { "zpid": 123, "price": 1 } },
        "FullRenderQuery{\"zpid\":123}": { "property": { "zpid": 123, "price": 2 } },
    });
    let page = PreloadPage::from_html(&preload_html(&cache)).unwrap();
    assert_eq!(page.property["price"], 2);
    assert_eq!(page.variant_cache["property"]["price"], 1);
    assert_eq!(page.full_cache["property"]["price"], 2);
}

#[test]
fn preload_page_falls_back_to_the_variant_cache() {
    let cache = json!({
        "VariantQuery{\"zpid\":123}": { "property": { "zpid": 123, "price": 7 } },
        "FullRenderQuery{\"zpid\":123}": { "property": null },
    });
    let page = PreloadPage::from_html(&preload_html(&cache)).unwrap();
    assert_eq!(page.property["price"], 7);
}

#[test]
fn preload_page_fails_when_no_cache_entry_holds_property_data() {
    let cache = json!({
        "VariantQuery{\"zpid\":123}": {},
        "FullRenderQuery{\"zpid\":123}": { "property": null },
    });
    let err = PreloadPage::from_html(&preload_html(&cache)).unwrap_err();
    assert!(matches!(err, RealtyError::UnexpectedSchema { .. }));
}

#[test]
fn preload_page_fails_on_unclassifiable_cache_keys() {
    let cache = json!({
        "VariantQuery{\"zpid\":123}": { "property": {} },
        "SomeOtherQuery{\"zpid\":123}": { "property": {} },
    });
    let err = PreloadPage::from_html(&preload_html(&cache)).unwrap_err();
    assert!(matches!(err, RealtyError::UnexpectedSchema { .. }));
}

#[test]
fn missing_preload_script_is_element_not_found() {
    let html = "<html><body><p>blocked</p></body></html>";
    let err = PreloadPage::from_html(html).unwrap_err();
    match err {
        RealtyError::ElementNotFound { selector } => {
            assert_eq!(selector, "script#hdpApolloPreloadedData");
        }
        other => panic!("expected ElementNotFound, got {other:?}"),
    }
}

#[test]
fn next_data_page_splits_initial_data_and_redux_state() {
    let ndata = json!({
        "props": {
            "initialData": { "building": { "zpid": "9" } },
            "initialReduxState": { "some": "state" },
        }
    });
    let html =
        format!("<html><body><script id=\"__NEXT_DATA__\">{ndata}</script></body></html>");
    let page = NextDataPage::from_html(&html).unwrap();
    assert_eq!(page.initial_data["building"]["zpid"], "9");
    assert_eq!(page.redux_state["some"], "state");
}

#[test]
fn next_data_page_fails_when_props_are_missing() {
    let html = "<html><body><script id=\"__NEXT_DATA__\">{\"props\":{}}</script></body></html>";
    let err = NextDataPage::from_html(html).unwrap_err();
    assert!(matches!(err, RealtyError::MissingFields { .. }));
}
