// src/api/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A listing category. The backend embeds the category's properties when
/// listing categories; the admin table only shows their count.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<serde_json::Value>,
}

/// Payload for category create/update.
#[derive(Debug, Serialize)]
pub struct CategoryPayload<'a> {
    pub name: &'a str,
}

/// Compact category reference embedded in a property.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRef {
    pub id: Option<i64>,
    pub name: String,
}

/// A property as served by the backend. The portal holds a read copy per
/// fetch and never mutates it locally.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub category_id: i64,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    pub location: String,
    pub price: String,
    pub roi: String,
    pub status: String,
    pub area: String,
    /// Traditional-unit area string (ropani-aana-paisa-daam).
    #[serde(default)]
    pub area_nepali: Option<String>,
    #[serde(default)]
    pub distance_from_highway: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Property {
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("N/A")
    }
}

/// Pagination metadata from the listing endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Builds metadata with the navigation flags derived from page position.
    pub fn new(page: u32, limit: u32, total: u64, total_pages: u32) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Stand-in metadata when the backend omits the pagination block.
    pub fn fallback(page: u32, limit: u32) -> Self {
        Self::new(page, limit, 0, 1)
    }
}

/// Envelope of the paginated listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertiesResponse {
    #[serde(default)]
    pub data: Vec<Property>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSuggestion {
    pub place_id: String,
    pub description: String,
}

/// Envelope of the location autocomplete endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationsResponse {
    #[serde(default)]
    pub data: Vec<LocationSuggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_flags_follow_page_position() {
        let first = Pagination::new(1, 9, 25, 3);
        assert!(!first.has_prev);
        assert!(first.has_next);

        let middle = Pagination::new(2, 9, 25, 3);
        assert!(middle.has_prev);
        assert!(middle.has_next);

        let last = Pagination::new(3, 9, 25, 3);
        assert!(last.has_prev);
        assert!(!last.has_next);

        let only = Pagination::new(1, 9, 4, 1);
        assert!(!only.has_prev);
        assert!(!only.has_next);
    }

    #[test]
    fn property_decodes_backend_shape() {
        let json = r#"{
            "id": 7,
            "title": "Commercial plot in Budhanilkantha",
            "categoryId": 2,
            "category": {"id": 2, "name": "land"},
            "location": "Budhanilkantha, Kathmandu",
            "price": "2500000",
            "roi": "12.5",
            "status": "available",
            "area": "3800",
            "areaNepali": "0-11-2-0",
            "distanceFromHighway": 450,
            "images": ["uploads/7-a.jpg", "uploads/7-b.jpg"],
            "description": "South-facing plot near the ring road."
        }"#;

        let prop: Property = serde_json::from_str(json).unwrap();
        assert_eq!(prop.id, 7);
        assert_eq!(prop.category_name(), "land");
        assert_eq!(prop.area_nepali.as_deref(), Some("0-11-2-0"));
        assert_eq!(prop.distance_from_highway, Some(450.0));
        assert_eq!(prop.images.len(), 2);
        assert!(prop.created_at.is_none());
    }

    #[test]
    fn properties_envelope_tolerates_missing_pagination() {
        let json = r#"{"data": []}"#;
        let resp: PropertiesResponse = serde_json::from_str(json).unwrap();
        assert!(resp.data.is_empty());
        assert!(resp.pagination.is_none());
    }
}
