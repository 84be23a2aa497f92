use std::cell::RefCell;
use std::io::Read;

use crate::api::models::{
    Category, LocationSuggestion, Pagination, PropertiesResponse, Property,
};
use crate::api::{ApiError, Backend};
use crate::config::AppConfig;
use crate::forms::PropertyForm;
use crate::listing::{ListingSource, QueryState};
use crate::router::AppState;

/// In-memory stand-in for the listings backend. Records what it was asked
/// and can be told to fail.
#[derive(Default)]
pub struct StubBackend {
    pub categories: Vec<Category>,
    pub properties: Vec<Property>,
    pub suggestions: Vec<LocationSuggestion>,
    pub fail_listings: bool,
    pub fail_mutations: bool,
    pub listing_queries: RefCell<Vec<QueryState>>,
    pub created_categories: RefCell<Vec<String>>,
    pub updated_categories: RefCell<Vec<(i64, String)>>,
    pub deleted_categories: RefCell<Vec<i64>>,
    pub created_properties: RefCell<Vec<String>>,
    pub deleted_properties: RefCell<Vec<i64>>,
}

impl StubBackend {
    fn mutation(&self) -> Result<(), ApiError> {
        if self.fail_mutations {
            Err(ApiError::Status(500))
        } else {
            Ok(())
        }
    }
}

impl ListingSource for StubBackend {
    fn fetch_listings(&self, query: &QueryState) -> Result<PropertiesResponse, ApiError> {
        self.listing_queries.borrow_mut().push(query.clone());
        if self.fail_listings {
            return Err(ApiError::Network("connection refused".into()));
        }

        let limit = query.page.limit as usize;
        let total = self.properties.len();
        let total_pages = (total.div_ceil(limit).max(1)) as u32;
        let start = (query.page.page as usize - 1) * limit;
        let data = self
            .properties
            .iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();

        Ok(PropertiesResponse {
            data,
            pagination: Some(Pagination::new(
                query.page.page,
                query.page.limit,
                total as u64,
                total_pages,
            )),
        })
    }
}

impl Backend for StubBackend {
    fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.categories.clone())
    }

    fn create_category(&self, name: &str) -> Result<(), ApiError> {
        self.mutation()?;
        self.created_categories.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn update_category(&self, id: i64, name: &str) -> Result<(), ApiError> {
        self.mutation()?;
        self.updated_categories.borrow_mut().push((id, name.to_string()));
        Ok(())
    }

    fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.mutation()?;
        self.deleted_categories.borrow_mut().push(id);
        Ok(())
    }

    fn list_all_properties(&self) -> Result<Vec<Property>, ApiError> {
        if self.fail_listings {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(self.properties.clone())
    }

    fn get_property(&self, id: i64) -> Result<Option<Property>, ApiError> {
        Ok(self.properties.iter().find(|p| p.id == id).cloned())
    }

    fn create_property(&self, form: &PropertyForm) -> Result<(), ApiError> {
        self.mutation()?;
        self.created_properties.borrow_mut().push(form.title.clone());
        Ok(())
    }

    fn delete_property(&self, id: i64) -> Result<(), ApiError> {
        self.mutation()?;
        self.deleted_properties.borrow_mut().push(id);
        Ok(())
    }

    fn autocomplete_locations(&self, query: &str) -> Result<Vec<LocationSuggestion>, ApiError> {
        let needle = query.to_lowercase();
        Ok(self
            .suggestions
            .iter()
            .filter(|s| s.description.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

pub fn make_state(api: StubBackend) -> AppState<StubBackend> {
    AppState {
        api,
        config: AppConfig {
            api_base_url: "http://backend.test".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
        },
    }
}

pub fn make_category(id: i64, name: &str, property_count: usize) -> Category {
    Category {
        id,
        name: name.to_string(),
        properties: vec![serde_json::Value::Null; property_count],
    }
}

pub fn make_property(id: i64, title: &str) -> Property {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "categoryId": 1,
        "category": {"id": 1, "name": "land"},
        "location": "Budhanilkantha, Kathmandu",
        "price": "2500000",
        "roi": "12.5",
        "status": "available",
        "area": "3800",
        "areaNepali": "0-11-2-0",
        "distanceFromHighway": 450,
        "images": ["uploads/a.jpg"],
        "description": "South-facing plot near the ring road."
    }))
    .expect("valid property json")
}

/// Drains a response body into a string.
pub fn body_string(resp: &mut astra::Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).expect("readable body");
    String::from_utf8(bytes).expect("utf-8 body")
}
