// src/listing/filters.rs

/// The optional constraints a user can put on the property listing query.
/// Fields hold raw text as typed; an empty (or whitespace) field means "no
/// constraint". Numeric-looking fields are passed through to the backend at
/// request-build time, not parsed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub location: String,
    pub category_id: String,
    pub min_price: String,
    pub max_price: String,
    pub min_roi: String,
    pub min_area: String,
    pub max_distance_from_highway: String,
    pub status: String,
}

/// One editable field of the criteria, addressed by the draft-edit operation
/// and named after its backend query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Location,
    CategoryId,
    MinPrice,
    MaxPrice,
    MinRoi,
    MinArea,
    MaxDistanceFromHighway,
    Status,
}

impl FilterField {
    pub const ALL: [FilterField; 8] = [
        FilterField::Location,
        FilterField::CategoryId,
        FilterField::MinPrice,
        FilterField::MaxPrice,
        FilterField::MinRoi,
        FilterField::MinArea,
        FilterField::MaxDistanceFromHighway,
        FilterField::Status,
    ];

    /// The query-parameter name the backend expects.
    pub fn param_name(self) -> &'static str {
        match self {
            FilterField::Location => "location",
            FilterField::CategoryId => "categoryId",
            FilterField::MinPrice => "minPrice",
            FilterField::MaxPrice => "maxPrice",
            FilterField::MinRoi => "minRoi",
            FilterField::MinArea => "minArea",
            FilterField::MaxDistanceFromHighway => "maxDistanceFromHighway",
            FilterField::Status => "status",
        }
    }
}

impl FilterCriteria {
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Location => self.location = value,
            FilterField::CategoryId => self.category_id = value,
            FilterField::MinPrice => self.min_price = value,
            FilterField::MaxPrice => self.max_price = value,
            FilterField::MinRoi => self.min_roi = value,
            FilterField::MinArea => self.min_area = value,
            FilterField::MaxDistanceFromHighway => self.max_distance_from_highway = value,
            FilterField::Status => self.status = value,
        }
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Location => &self.location,
            FilterField::CategoryId => &self.category_id,
            FilterField::MinPrice => &self.min_price,
            FilterField::MaxPrice => &self.max_price,
            FilterField::MinRoi => &self.min_roi,
            FilterField::MinArea => &self.min_area,
            FilterField::MaxDistanceFromHighway => &self.max_distance_from_highway,
            FilterField::Status => &self.status,
        }
    }

    /// Fields in declaration order with their trimmed values, empties skipped.
    /// This is the exact set of filter parameters a fetch will carry.
    pub fn non_empty_fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        FilterField::ALL.into_iter().filter_map(|field| {
            let trimmed = self.get(field).trim();
            (!trimmed.is_empty()).then_some((field.param_name(), trimmed))
        })
    }

    /// Number of constrained fields. Computed from whichever instance it is
    /// called on; the UI reads it off the applied criteria, never the draft.
    pub fn active_count(&self) -> usize {
        self.non_empty_fields().count()
    }
}
