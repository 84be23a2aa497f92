use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use tracing::{debug, warn};

use crate::api::Backend;
use crate::config::AppConfig;
use crate::errors::{ResultResp, ServerError};
use crate::forms::{multipart_boundary, parse_multipart, parse_urlencoded, PropertyForm};
use crate::listing::{FilterField, ListingSynchronizer, SortOrder};
use crate::responses::{html_response, html_response_status, redirect_response};
use crate::templates::pages::admin::categories::{
    categories_page, category_form_page, CategoriesVm, CategoryFormVm,
};
use crate::templates::pages::admin::properties::{
    add_property_page, admin_properties_page, location_suggestions_fragment, AddPropertyVm,
    AdminPropertiesVm,
};
use crate::templates::pages::admin::admin_home_page;
use crate::templates::pages::home::home_page;
use crate::templates::pages::properties::{properties_page, PropertiesVm};
use crate::templates::pages::property_detail::{
    property_detail_page, property_not_found_page, PropertyDetailVm,
};

/// Everything a request handler needs: the backend client and the runtime
/// configuration (the templates use the base URL for image sources).
pub struct AppState<B: Backend> {
    pub api: B,
    pub config: AppConfig,
}

pub fn handle<B: Backend>(mut req: Request, state: &AppState<B>) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    debug!(%method, %path, "request");

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => home(state),
        ("GET", ["properties"]) => browse(&req, state),
        ("GET", ["properties", id]) => property_detail(&req, state, parse_id(id)?),

        ("GET", ["admin"]) => html_response(admin_home_page()),

        ("GET", ["admin", "categories"]) => admin_categories(state, None),
        ("GET", ["admin", "categories", "new"]) => html_response(category_form_page(
            &CategoryFormVm { id: None, name: "", error: None },
        )),
        ("POST", ["admin", "categories"]) => create_category(&mut req, state),
        ("GET", ["admin", "categories", id, "edit"]) => edit_category(state, parse_id(id)?),
        ("POST", ["admin", "categories", id]) => update_category(&mut req, state, parse_id(id)?),
        ("POST", ["admin", "categories", id, "delete"]) => delete_category(state, parse_id(id)?),

        ("GET", ["admin", "properties"]) => admin_properties(&req, state, None),
        ("GET", ["admin", "properties", "new"]) => {
            add_property_form(state, &PropertyForm::default(), &Default::default(), None)
        }
        ("POST", ["admin", "properties"]) => create_property(&mut req, state),
        ("POST", ["admin", "properties", id, "delete"]) => delete_property(state, parse_id(id)?),

        ("GET", ["admin", "locations"]) => autocomplete_locations(&req, state),

        _ => Err(ServerError::NotFound),
    }
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| parse_urlencoded(q.as_bytes()))
        .unwrap_or_default()
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|_| ServerError::BadRequest("unreadable request body".into()))?;
    Ok(buf)
}

/// Categories are decorative on public pages; a backend hiccup renders them
/// empty rather than failing the page.
fn categories_or_empty<B: Backend>(state: &AppState<B>) -> Vec<crate::api::models::Category> {
    state.api.list_categories().unwrap_or_else(|err| {
        warn!(%err, "failed to fetch categories");
        Vec::new()
    })
}

fn home<B: Backend>(state: &AppState<B>) -> ResultResp {
    let categories = categories_or_empty(state);
    html_response(home_page(&categories))
}

/// The browse view. The URL query carries the whole QueryState; events are
/// replayed onto a fresh synchronizer in apply → sort → limit → page order
/// so the page-reset rules land the same way they do for a live user.
fn browse<B: Backend>(req: &Request, state: &AppState<B>) -> ResultResp {
    let params = parse_query(req);

    let mut sync = ListingSynchronizer::new();
    for field in FilterField::ALL {
        if let Some(value) = params.get(field.param_name()) {
            sync.set_draft(field, value.clone());
        }
    }
    sync.apply_filters();
    if let Some(sort) = params.get("sort") {
        sync.set_sort(SortOrder::from_param(sort));
    }
    if let Some(limit) = params.get("limit").and_then(|v| v.parse().ok()) {
        sync.set_page_size(limit);
    }
    if let Some(page) = params.get("page").and_then(|v| v.parse().ok()) {
        sync.set_page(page);
    }

    sync.run(&state.api);

    let categories = categories_or_empty(state);
    let vm = PropertiesVm {
        categories: &categories,
        draft: sync.draft(),
        query: sync.state(),
        display: sync.display(),
        active_filters: sync.active_filter_count(),
        asset_base: &state.config.api_base_url,
    };
    html_response(properties_page(&vm))
}

fn property_detail<B: Backend>(req: &Request, state: &AppState<B>, id: i64) -> ResultResp {
    let params = parse_query(req);
    let selected_image = params.get("img").and_then(|v| v.parse().ok()).unwrap_or(0);

    match state.api.get_property(id)? {
        Some(property) => html_response(property_detail_page(&PropertyDetailVm {
            property: &property,
            selected_image,
            asset_base: &state.config.api_base_url,
        })),
        None => html_response_status(404, property_not_found_page()),
    }
}

fn admin_categories<B: Backend>(state: &AppState<B>, banner: Option<&str>) -> ResultResp {
    let mut categories = state.api.list_categories()?;
    categories.sort_by_key(|c| c.id);
    html_response(categories_page(&CategoriesVm { categories: &categories, banner }))
}

fn create_category<B: Backend>(req: &mut Request, state: &AppState<B>) -> ResultResp {
    let body = read_body(req)?;
    let form = parse_urlencoded(&body);
    let name = form.get("name").map(|n| n.trim()).unwrap_or("");

    if name.is_empty() {
        return html_response(category_form_page(&CategoryFormVm {
            id: None,
            name,
            error: Some("Category name is required"),
        }));
    }

    match state.api.create_category(name) {
        Ok(()) => redirect_response("/admin/categories"),
        Err(err) => {
            warn!(%err, "category create failed");
            html_response(category_form_page(&CategoryFormVm {
                id: None,
                name,
                error: Some("Failed to create category"),
            }))
        }
    }
}

fn edit_category<B: Backend>(state: &AppState<B>, id: i64) -> ResultResp {
    // The backend has no single-category endpoint; find it in the list.
    let categories = state.api.list_categories()?;
    let category = categories.iter().find(|c| c.id == id).ok_or(ServerError::NotFound)?;

    html_response(category_form_page(&CategoryFormVm {
        id: Some(id),
        name: &category.name,
        error: None,
    }))
}

fn update_category<B: Backend>(req: &mut Request, state: &AppState<B>, id: i64) -> ResultResp {
    let body = read_body(req)?;
    let form = parse_urlencoded(&body);
    let name = form.get("name").map(|n| n.trim()).unwrap_or("");

    if name.is_empty() {
        return html_response(category_form_page(&CategoryFormVm {
            id: Some(id),
            name,
            error: Some("Category name is required"),
        }));
    }

    match state.api.update_category(id, name) {
        Ok(()) => redirect_response("/admin/categories"),
        Err(err) => {
            warn!(%err, "category update failed");
            html_response(category_form_page(&CategoryFormVm {
                id: Some(id),
                name,
                error: Some("Failed to update category"),
            }))
        }
    }
}

fn delete_category<B: Backend>(state: &AppState<B>, id: i64) -> ResultResp {
    match state.api.delete_category(id) {
        Ok(()) => redirect_response("/admin/categories"),
        Err(err) => {
            warn!(%err, "category delete failed");
            admin_categories(state, Some("Failed to delete category"))
        }
    }
}

fn admin_properties<B: Backend>(
    req: &Request,
    state: &AppState<B>,
    banner: Option<&str>,
) -> ResultResp {
    let params = parse_query(req);
    let search_id = params.get("id").map(|s| s.trim().to_string()).unwrap_or_default();
    render_admin_properties(state, &search_id, banner)
}

fn render_admin_properties<B: Backend>(
    state: &AppState<B>,
    search_id: &str,
    banner: Option<&str>,
) -> ResultResp {
    let mut properties = state.api.list_all_properties()?;
    if let Ok(wanted) = search_id.parse::<i64>() {
        properties.retain(|p| p.id == wanted);
    }

    html_response(admin_properties_page(&AdminPropertiesVm {
        properties: &properties,
        search_id,
        banner,
    }))
}

fn add_property_form<B: Backend>(
    state: &AppState<B>,
    form: &PropertyForm,
    errors: &std::collections::BTreeMap<&'static str, String>,
    banner: Option<&str>,
) -> ResultResp {
    let categories = categories_or_empty(state);
    html_response(add_property_page(&AddPropertyVm { categories: &categories, form, errors, banner }))
}

fn create_property<B: Backend>(req: &mut Request, state: &AppState<B>) -> ResultResp {
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let boundary = multipart_boundary(&content_type)
        .ok_or_else(|| ServerError::BadRequest("expected a multipart form".into()))?;

    let body = read_body(req)?;
    let form = PropertyForm::from_multipart(parse_multipart(&body, &boundary)?);

    let errors = form.validate();
    if !errors.is_empty() {
        return add_property_form(state, &form, &errors, None);
    }

    match state.api.create_property(&form) {
        Ok(()) => redirect_response("/admin/properties"),
        Err(err) => {
            warn!(%err, "property create failed");
            add_property_form(
                state,
                &form,
                &Default::default(),
                Some("Failed to create property. Please try again."),
            )
        }
    }
}

fn delete_property<B: Backend>(state: &AppState<B>, id: i64) -> ResultResp {
    match state.api.delete_property(id) {
        Ok(()) => redirect_response("/admin/properties"),
        Err(err) => {
            warn!(%err, "property delete failed");
            render_admin_properties(state, "", Some("Failed to delete property"))
        }
    }
}

/// htmx fragment for the location input. Queries under two characters render
/// an empty suggestion list, as does a backend failure.
fn autocomplete_locations<B: Backend>(req: &Request, state: &AppState<B>) -> ResultResp {
    let params = parse_query(req);
    let query = params
        .get("q")
        .or_else(|| params.get("location"))
        .map(|q| q.trim().to_string())
        .unwrap_or_default();

    if query.chars().count() < 2 {
        return html_response(location_suggestions_fragment(&[]));
    }

    let suggestions = state.api.autocomplete_locations(&query).unwrap_or_else(|err| {
        warn!(%err, "location autocomplete failed");
        Vec::new()
    });
    html_response(location_suggestions_fragment(&suggestions))
}
