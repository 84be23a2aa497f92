// src/api/client.rs

use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::AppConfig;
use crate::forms::PropertyForm;
use crate::listing::{ListingSource, QueryState};

use super::error::ApiError;
use super::models::{
    Category, CategoryPayload, LocationsResponse, LocationSuggestion, PropertiesResponse, Property,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything the portal asks of the listings backend. The router is written
/// against this trait so tests can substitute an in-memory backend.
pub trait Backend: ListingSource {
    fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
    fn create_category(&self, name: &str) -> Result<(), ApiError>;
    fn update_category(&self, id: i64, name: &str) -> Result<(), ApiError>;
    fn delete_category(&self, id: i64) -> Result<(), ApiError>;
    /// The admin table's unfiltered, unpaginated listing.
    fn list_all_properties(&self) -> Result<Vec<Property>, ApiError>;
    fn get_property(&self, id: i64) -> Result<Option<Property>, ApiError>;
    fn create_property(&self, form: &PropertyForm) -> Result<(), ApiError>;
    fn delete_property(&self, id: i64) -> Result<(), ApiError>;
    fn autocomplete_locations(&self, query: &str) -> Result<Vec<LocationSuggestion>, ApiError>;
}

/// Blocking HTTP client for the listings backend. Base URL comes from
/// configuration; one reqwest client is built up front and reused.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url: config.api_base_url.clone() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET backend");
        let resp = self
            .http
            .get(self.url(path))
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode_json(resp)
    }

    fn decode_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        // An HTML body on a JSON endpoint means we reached something that is
        // not the backend (dev proxy, captive portal, error page).
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if content_type.contains("text/html") {
            return Err(ApiError::Decode("backend returned HTML, not JSON".into()));
        }

        resp.json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn expect_success(resp: Result<Response, reqwest::Error>) -> Result<(), ApiError> {
        let resp = resp.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }
}

impl ListingSource for ApiClient {
    fn fetch_listings(&self, query: &QueryState) -> Result<PropertiesResponse, ApiError> {
        self.get_json(&format!("/api/properties?{}", query.to_query_string()))
    }
}

impl Backend for ApiClient {
    fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/api/categories")
    }

    fn create_category(&self, name: &str) -> Result<(), ApiError> {
        Self::expect_success(
            self.http
                .post(self.url("/api/categories"))
                .json(&CategoryPayload { name })
                .send(),
        )
    }

    fn update_category(&self, id: i64, name: &str) -> Result<(), ApiError> {
        Self::expect_success(
            self.http
                .put(self.url(&format!("/api/categories/{id}")))
                .json(&CategoryPayload { name })
                .send(),
        )
    }

    fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        Self::expect_success(self.http.delete(self.url(&format!("/api/categories/{id}"))).send())
    }

    fn list_all_properties(&self) -> Result<Vec<Property>, ApiError> {
        // The backend answers this route with either a bare array or the
        // paginated envelope; accept both.
        let payload: serde_json::Value = self.get_json("/api/properties")?;
        let rows = match payload {
            serde_json::Value::Array(_) => payload,
            serde_json::Value::Object(mut obj) => {
                obj.remove("data").unwrap_or(serde_json::Value::Array(Vec::new()))
            }
            _ => return Err(ApiError::Decode("expected an array of properties".into())),
        };
        serde_json::from_value(rows).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn get_property(&self, id: i64) -> Result<Option<Property>, ApiError> {
        debug!(id, "GET property");
        let resp = self
            .http
            .get(self.url(&format!("/api/properties/{id}")))
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if resp.status().as_u16() == 404 {
            return Ok(None);
        }
        Self::decode_json(resp).map(Some)
    }

    fn create_property(&self, form: &PropertyForm) -> Result<(), ApiError> {
        let mut multipart = Form::new()
            .text("title", form.title.clone())
            .text("categoryId", form.category_id.clone())
            .text("location", form.location.clone())
            .text("price", form.price.clone())
            .text("roi", form.roi.clone())
            .text("status", form.status.clone())
            .text("area", form.area.clone())
            .text("description", form.description.clone());

        if !form.area_nepali.trim().is_empty() {
            multipart = multipart.text("areaNepali", form.area_nepali.clone());
        }
        if !form.distance_from_highway.trim().is_empty() {
            multipart = multipart.text("distanceFromHighway", form.distance_from_highway.clone());
        }

        for image in &form.images {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            multipart = multipart.part("images", part);
        }

        Self::expect_success(
            self.http.post(self.url("/api/properties")).multipart(multipart).send(),
        )
    }

    fn delete_property(&self, id: i64) -> Result<(), ApiError> {
        Self::expect_success(self.http.delete(self.url(&format!("/api/properties/{id}"))).send())
    }

    fn autocomplete_locations(&self, query: &str) -> Result<Vec<LocationSuggestion>, ApiError> {
        let q = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("q", query)
            .finish();
        let url = self.url(&format!("/api/locations/autocomplete?{q}"));

        debug!(query, "GET location autocomplete");
        let resp = self.http.get(url).send().map_err(|e| ApiError::Network(e.to_string()))?;
        let payload: LocationsResponse = Self::decode_json(resp)?;
        Ok(payload.data)
    }
}
