use super::*;

#[test]
fn default_query_targets_the_land_index() {
    let q = SearchQuery::new();
    assert_eq!(q.create_url().unwrap(), "https://www.landwatch.com/land");
}

#[test]
fn render_is_deterministic() {
    let mut q = SearchQuery::new();
    q.set_state("Tennessee")
        .unwrap()
        .set_price_range(Some(50_000), Some(250_000))
        .unwrap()
        .add_property_type("House")
        .unwrap()
        .set_page(3)
        .unwrap();
    assert_eq!(q.create_url().unwrap(), q.create_url().unwrap());
}

#[test]
fn segments_follow_the_fixed_order() {
    let mut q = SearchQuery::new();
    q.set_state("Tennessee").unwrap();
    q.set_city("Chattanooga");
    q.add_property_type("House").unwrap();
    q.set_activity("Fishing").unwrap();
    q.set_price_range(Some(100_000), Some(500_000)).unwrap();
    q.set_acres_range(Some(2), None).unwrap();
    q.set_beds_range(None, Some(4)).unwrap();
    q.add_keyword("creek");
    q.set_sale_type(SaleType::Auction);
    q.set_owner_financing(true);
    q.set_page(2).unwrap();

    assert_eq!(
        q.create_url().unwrap(),
        "https://www.landwatch.com/tennessee/chattanooga/type-16/fishing-activity\
         /price-100000-500000/acres-over-2/beds-under-4/keyword-creek/auctions\
         /owner-financing/page-2"
    );
}

#[test]
fn city_takes_precedence_over_county_and_region() {
    let mut q = SearchQuery::new();
    q.set_state("Georgia").unwrap();
    q.set_region("North");
    q.set_county("Walker");
    q.set_city("Lafayette");
    assert_eq!(
        q.create_url().unwrap(),
        "https://www.landwatch.com/georgia/lafayette"
    );
}

#[test]
fn county_takes_precedence_over_region() {
    let mut q = SearchQuery::new();
    q.set_state("Georgia").unwrap();
    q.set_region("North");
    q.set_county("Walker");
    assert_eq!(
        q.create_url().unwrap(),
        "https://www.landwatch.com/georgia/walker-county"
    );
}

#[test]
fn region_renders_when_nothing_narrower_is_set() {
    let mut q = SearchQuery::new();
    q.set_state("Georgia").unwrap();
    q.set_region("North");
    assert_eq!(
        q.create_url().unwrap(),
        "https://www.landwatch.com/georgia/north-region"
    );
}

#[test]
fn range_renders_both_bounds() {
    let mut q = SearchQuery::new();
    q.set_price_range(Some(10_000), Some(90_000)).unwrap();
    assert!(q.create_url().unwrap().ends_with("/price-10000-90000"));
}

#[test]
fn range_renders_open_ended_forms() {
    let mut q = SearchQuery::new();
    q.set_price_range(None, Some(90_000)).unwrap();
    assert!(q.create_url().unwrap().ends_with("/price-under-90000"));

    q.set_price_range(Some(10_000), None).unwrap();
    assert!(q.create_url().unwrap().ends_with("/price-over-10000"));
}

#[test]
fn clearing_a_range_removes_the_segment() {
    let mut q = SearchQuery::new();
    q.set_price_range(Some(10_000), Some(90_000)).unwrap();
    q.set_price_range(None, None).unwrap();
    assert_eq!(q.create_url().unwrap(), "https://www.landwatch.com/land");
}

#[test]
fn inverted_range_is_rejected() {
    let mut q = SearchQuery::new();
    let err = q.set_price_range(Some(90_000), Some(10_000)).unwrap_err();
    assert!(matches!(err, RealtyError::InvalidRange { field: "price", .. }));
}

#[test]
fn page_below_one_is_rejected() {
    let mut q = SearchQuery::new();
    assert!(matches!(
        q.set_page(0),
        Err(RealtyError::InvalidPage { page: 0 })
    ));
    assert!(matches!(
        q.set_page(-1),
        Err(RealtyError::InvalidPage { page: -1 })
    ));
}

#[test]
fn page_one_renders_no_segment_and_page_two_does() {
    let mut q = SearchQuery::new();
    q.set_page(1).unwrap();
    assert!(!q.create_url().unwrap().contains("/page-"));
    q.set_page(2).unwrap();
    assert!(q.create_url().unwrap().ends_with("/page-2"));
}

#[test]
fn property_types_combine_into_one_token() {
    let mut q = SearchQuery::new();
    q.add_property_type("House").unwrap();
    q.add_property_type("Waterfront").unwrap();
    q.add_property_type("House").unwrap(); // duplicate collapses
    assert_eq!(
        q.create_url().unwrap(),
        "https://www.landwatch.com/type-4112"
    );
}

#[test]
fn invalid_property_type_fails_at_the_setter() {
    let mut q = SearchQuery::new();
    assert!(matches!(
        q.add_property_type("Castle"),
        Err(RealtyError::InvalidValue { .. })
    ));
    // Builder state is untouched by the failed call.
    assert_eq!(q.create_url().unwrap(), "https://www.landwatch.com/land");
}

#[test]
fn non_default_status_flags_render_each_enabled_flag() {
    let mut q = SearchQuery::new();
    q.set_status(StatusFlags {
        available: true,
        under_contract: true,
        off_market: false,
        sold: false,
    });
    assert_eq!(
        q.create_url().unwrap(),
        "https://www.landwatch.com/land/available/under-contract"
    );
}

#[test]
fn keywords_join_into_a_single_segment() {
    let mut q = SearchQuery::new();
    q.add_keyword("Creek Front");
    q.add_keyword("barn");
    q.add_keyword("barn"); // duplicate collapses
    assert_eq!(
        q.create_url().unwrap(),
        "https://www.landwatch.com/land/keyword-creek-front,barn"
    );
}

#[test]
fn build_request_carries_the_fixed_headers() {
    let q = SearchQuery::new();
    let request = q.build_request().unwrap();
    assert!(request
        .headers
        .iter()
        .any(|(name, value)| *name == "authority" && value == "www.landwatch.com"));
    assert!(request.body.is_none());
}
