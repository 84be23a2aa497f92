// src/listing/query.rs

use url::form_urlencoded;

use super::filters::FilterCriteria;

/// Sort orders the listing endpoint understands. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    RoiDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Newest,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::RoiDesc,
    ];

    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::PriceAsc => "price_asc",
            SortOrder::PriceDesc => "price_desc",
            SortOrder::RoiDesc => "roi_desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
            SortOrder::RoiDesc => "ROI: High to Low",
        }
    }

    /// Unknown values fall back to the default ordering.
    pub fn from_param(value: &str) -> Self {
        match value {
            "price_asc" => SortOrder::PriceAsc,
            "price_desc" => SortOrder::PriceDesc,
            "roi_desc" => SortOrder::RoiDesc,
            _ => SortOrder::Newest,
        }
    }
}

/// Page sizes offered by the browse view. The state layer rejects anything
/// outside this set.
pub const ALLOWED_PAGE_SIZES: [u32; 4] = [6, 9, 12, 18];

pub const DEFAULT_PAGE_SIZE: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: DEFAULT_PAGE_SIZE }
    }
}

/// The tuple that uniquely determines one listing fetch: applied filters,
/// sort order, and page request. Equality is what gates re-fetching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub filters: FilterCriteria,
    pub sort: SortOrder,
    pub page: PageRequest,
}

impl QueryState {
    /// Encodes the state as the listing endpoint's query string: every
    /// non-empty filter field in declaration order, then sort, page, limit.
    /// Empty fields are omitted entirely, never sent as empty strings.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.filters.non_empty_fields() {
            serializer.append_pair(name, value);
        }
        serializer.append_pair("sort", self.sort.as_param());
        serializer.append_pair("page", &self.page.page.to_string());
        serializer.append_pair("limit", &self.page.limit.to_string());
        serializer.finish()
    }
}
