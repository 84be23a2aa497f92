// src/tests/router_tests/admin_tests.rs

use astra::Body;
use http::{Method, Request};

use crate::router::handle;
use crate::tests::utils::{body_string, make_category, make_property, make_state, StubBackend};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

const BOUNDARY: &str = "----portal-test-boundary";

fn multipart_field(name: &str, value: &str) -> String {
    format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
}

fn post_property(fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&multipart_field(name, value));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method(Method::POST)
        .uri("/admin/properties")
        .header("Content-Type", format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body.into_bytes()))
        .unwrap()
}

fn complete_property_fields<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("title", "Riverside plot"),
        ("categoryId", "3"),
        ("location", "Sankhamul, Lalitpur"),
        ("price", "1800000"),
        ("roi", "11"),
        ("status", "available"),
        ("area", "2400"),
        ("areaNepali", "0-7-2-0"),
        ("distanceFromHighway", "120"),
        ("description", "Flat plot by the river corridor."),
    ]
}

#[test]
fn categories_table_is_sorted_and_counts_properties() {
    let state = make_state(StubBackend {
        categories: vec![make_category(2, "house", 1), make_category(1, "land", 4)],
        ..Default::default()
    });

    let mut resp = handle(get("/admin/categories"), &state).expect("handler failed");
    let body = body_string(&mut resp);

    let land = body.find("land").expect("land row");
    let house = body.find("house").expect("house row");
    assert!(land < house, "rows must be sorted by id ascending");
    assert!(body.contains(">4<"));
}

#[test]
fn create_category_redirects_on_success() {
    let state = make_state(StubBackend::default());

    let resp = handle(post_form("/admin/categories", "name=Prime+Land"), &state)
        .expect("handler failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/admin/categories");
    assert_eq!(*state.api.created_categories.borrow(), vec!["Prime Land".to_string()]);
}

#[test]
fn create_category_requires_a_name() {
    let state = make_state(StubBackend::default());

    let mut resp =
        handle(post_form("/admin/categories", "name=+"), &state).expect("handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Category name is required"));
    assert!(state.api.created_categories.borrow().is_empty());
}

#[test]
fn create_category_failure_keeps_user_on_form() {
    let state = make_state(StubBackend { fail_mutations: true, ..Default::default() });

    let mut resp = handle(post_form("/admin/categories", "name=Homestead"), &state)
        .expect("handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Failed to create category"));
    // The typed value survives for retry.
    assert!(body.contains("Homestead"));
}

#[test]
fn edit_category_prefills_the_current_name() {
    let state = make_state(StubBackend {
        categories: vec![make_category(5, "commercial", 0)],
        ..Default::default()
    });

    let mut resp = handle(get("/admin/categories/5/edit"), &state).expect("handler failed");
    let body = body_string(&mut resp);
    assert!(body.contains("commercial"));
    assert!(body.contains("/admin/categories/5"));
}

#[test]
fn update_category_calls_the_backend() {
    let state = make_state(StubBackend {
        categories: vec![make_category(5, "commercial", 0)],
        ..Default::default()
    });

    let resp = handle(post_form("/admin/categories/5", "name=retail"), &state)
        .expect("handler failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(*state.api.updated_categories.borrow(), vec![(5, "retail".to_string())]);
}

#[test]
fn delete_category_failure_shows_banner() {
    let state = make_state(StubBackend {
        categories: vec![make_category(1, "land", 0)],
        fail_mutations: true,
        ..Default::default()
    });

    let mut resp = handle(post_form("/admin/categories/1/delete", ""), &state)
        .expect("handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Failed to delete category"));
}

#[test]
fn admin_properties_formats_declared_columns() {
    let state = make_state(StubBackend {
        properties: vec![make_property(7, "Riverside plot")],
        ..Default::default()
    });

    let mut resp = handle(get("/admin/properties"), &state).expect("handler failed");
    let body = body_string(&mut resp);

    assert!(body.contains("Nrs. 2500000 per aana"));
    assert!(body.contains("12.5%"));
    assert!(body.contains("3800 sq ft"));
    assert!(body.contains("1 image(s)"));
    assert!(body.contains("Land"));
}

#[test]
fn admin_properties_can_filter_by_id() {
    let state = make_state(StubBackend {
        properties: vec![make_property(1, "Plot one"), make_property(2, "Plot two")],
        ..Default::default()
    });

    let mut resp = handle(get("/admin/properties?id=2"), &state).expect("handler failed");
    let body = body_string(&mut resp);
    assert!(body.contains("Plot two"));
    assert!(!body.contains("Plot one"));
}

#[test]
fn add_property_with_missing_fields_rerenders_with_errors() {
    let state = make_state(StubBackend::default());

    let mut resp = handle(post_property(&[("title", "Nameless plot")]), &state)
        .expect("handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Category is required"));
    assert!(body.contains("Price is required"));
    // The submitted value is kept in the re-rendered form.
    assert!(body.contains("Nameless plot"));
    assert!(state.api.created_properties.borrow().is_empty());
}

#[test]
fn add_property_with_valid_form_creates_and_redirects() {
    let state = make_state(StubBackend {
        categories: vec![make_category(3, "land", 0)],
        ..Default::default()
    });

    let resp = handle(post_property(&complete_property_fields()), &state)
        .expect("handler failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/admin/properties");
    assert_eq!(*state.api.created_properties.borrow(), vec!["Riverside plot".to_string()]);
}

#[test]
fn add_property_backend_failure_shows_banner() {
    let state = make_state(StubBackend { fail_mutations: true, ..Default::default() });

    let mut resp = handle(post_property(&complete_property_fields()), &state)
        .expect("handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Failed to create property. Please try again."));
}

#[test]
fn delete_property_redirects_on_success() {
    let state = make_state(StubBackend {
        properties: vec![make_property(7, "Riverside plot")],
        ..Default::default()
    });

    let resp = handle(post_form("/admin/properties/7/delete", ""), &state)
        .expect("handler failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(*state.api.deleted_properties.borrow(), vec![7]);
}

#[test]
fn autocomplete_needs_two_characters() {
    let state = make_state(StubBackend {
        suggestions: vec![suggestion("p1", "Kathmandu, Nepal")],
        ..Default::default()
    });

    let mut resp = handle(get("/admin/locations?q=k"), &state).expect("handler failed");
    assert!(!body_string(&mut resp).contains("Kathmandu"));
}

#[test]
fn autocomplete_renders_matching_suggestions() {
    let state = make_state(StubBackend {
        suggestions: vec![
            suggestion("p1", "Kathmandu, Nepal"),
            suggestion("p2", "Pokhara, Nepal"),
        ],
        ..Default::default()
    });

    let mut resp = handle(get("/admin/locations?q=kath"), &state).expect("handler failed");
    let body = body_string(&mut resp);
    assert!(body.contains("Kathmandu, Nepal"));
    assert!(!body.contains("Pokhara"));
}

fn suggestion(place_id: &str, description: &str) -> crate::api::models::LocationSuggestion {
    serde_json::from_value(serde_json::json!({
        "placeId": place_id,
        "description": description,
    }))
    .expect("valid suggestion json")
}
