// src/tests/router_tests/pages_tests.rs

use astra::Body;
use http::{Method, Request};

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, make_category, make_property, make_state, StubBackend};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn home_page_lists_categories() {
    let state = make_state(StubBackend {
        categories: vec![make_category(1, "land", 4), make_category(2, "house", 2)],
        ..Default::default()
    });

    let mut resp = handle(get("/"), &state).expect("handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Land"));
    assert!(body.contains("House"));
    assert!(body.contains("Investment Properties"));
}

#[test]
fn browse_renders_properties_and_pagination() {
    let state = make_state(StubBackend {
        properties: vec![make_property(1, "Riverside plot"), make_property(2, "Hilltop land")],
        ..Default::default()
    });

    let mut resp = handle(get("/properties"), &state).expect("handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Riverside plot"));
    assert!(body.contains("Hilltop land"));
    assert!(body.contains("Page 1 of 1"));
    assert!(body.contains("Total results: 2"));
}

#[test]
fn browse_encodes_query_state_for_the_backend() {
    let state = make_state(StubBackend {
        properties: (1..=30).map(|i| make_property(i, &format!("Plot {i}"))).collect(),
        ..Default::default()
    });

    let uri = "/properties?minPrice=1000000&status=available&sort=roi_desc&page=2&limit=9";
    handle(get(uri), &state).expect("handler failed");

    let queries = state.api.listing_queries.borrow();
    assert_eq!(queries.len(), 1);
    assert_eq!(
        queries[0].to_query_string(),
        "minPrice=1000000&status=available&sort=roi_desc&page=2&limit=9"
    );
}

#[test]
fn browse_shows_active_filter_count() {
    let state = make_state(StubBackend::default());

    let mut resp =
        handle(get("/properties?minPrice=1000000&status=available"), &state).expect("handler failed");
    let body = body_string(&mut resp);
    assert!(body.contains("Active filters: 2"));
}

#[test]
fn browse_backend_failure_shows_generic_error() {
    let state = make_state(StubBackend { fail_listings: true, ..Default::default() });

    let mut resp = handle(get("/properties"), &state).expect("handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Failed to load properties."));
    assert!(body.contains("Retry"));
    // Nothing from a previous result leaks into the error view.
    assert!(!body.contains("Riverside"));
}

#[test]
fn browse_with_no_matches_says_so() {
    let state = make_state(StubBackend::default());

    let mut resp = handle(get("/properties?location=Mustang"), &state).expect("handler failed");
    let body = body_string(&mut resp);
    assert!(body.contains("No properties found for selected filters."));
}

#[test]
fn property_detail_renders_facts() {
    let state = make_state(StubBackend {
        properties: vec![make_property(7, "Riverside plot")],
        ..Default::default()
    });

    let mut resp = handle(get("/properties/7"), &state).expect("handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Riverside plot"));
    assert!(body.contains("12.5"));
    assert!(body.contains("0-11-2-0"));
    assert!(body.contains("450"));
    // Image sources point at the backend host.
    assert!(body.contains("http://backend.test/uploads/a.jpg"));
}

#[test]
fn unknown_property_renders_not_found_page() {
    let state = make_state(StubBackend::default());

    let mut resp = handle(get("/properties/99"), &state).expect("handler failed");
    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Property Not Found"));
}

#[test]
fn non_numeric_property_id_is_not_found() {
    let state = make_state(StubBackend::default());
    let err = handle(get("/properties/abc"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn unknown_route_is_not_found() {
    let state = make_state(StubBackend::default());
    let err = handle(get("/nope"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
