// src/listing/sync.rs
//
// The listing query synchronizer: a pure reducer over QueryState, a display
// state machine, and a sequence-numbered effect runner that enforces
// last-request-wins when responses land out of order.

use tracing::{debug, warn};

use crate::api::models::{Pagination, PropertiesResponse, Property};
use crate::api::ApiError;

use super::filters::{FilterCriteria, FilterField};
use super::query::{PageRequest, QueryState, SortOrder, ALLOWED_PAGE_SIZES};

/// Fixed user-facing message for any failed listing fetch.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load properties.";

/// State-changing operations on the listing query.
#[derive(Debug, Clone)]
pub enum QueryEvent {
    /// Commit a draft criteria as the applied one.
    ApplyFilters(FilterCriteria),
    ClearFilters,
    SetSort(SortOrder),
    SetPage(u32),
    SetPageSize(u32),
}

impl QueryState {
    /// Pure transition function. Every rule about what resets the page index
    /// lives here and nowhere else.
    pub fn reduce(&self, event: &QueryEvent) -> QueryState {
        let mut next = self.clone();
        match event {
            QueryEvent::ApplyFilters(criteria) => {
                next.filters = criteria.clone();
                next.page.page = 1;
            }
            QueryEvent::ClearFilters => {
                next.filters = FilterCriteria::default();
                next.sort = SortOrder::Newest;
                next.page.page = 1;
            }
            // A sort change keeps the current page. Filter and page-size
            // changes reset it; this asymmetry is the shipped behavior and
            // is pinned by a test below.
            QueryEvent::SetSort(sort) => {
                next.sort = *sort;
            }
            QueryEvent::SetPage(page) => {
                next.page.page = (*page).max(1);
            }
            QueryEvent::SetPageSize(limit) => {
                if ALLOWED_PAGE_SIZES.contains(limit) {
                    next.page = PageRequest { page: 1, limit: *limit };
                }
            }
        }
        next
    }
}

/// A successfully loaded page, replaced wholesale on every fetch.
#[derive(Debug, Clone)]
pub struct LoadedPage {
    pub properties: Vec<Property>,
    pub pagination: Pagination,
}

/// What the renderer shows for the listing region.
#[derive(Debug, Clone)]
pub enum DisplayState {
    /// No fetch issued yet.
    Idle,
    /// A fetch for the current QueryState is outstanding. Any prior result
    /// is retained in memory but not shown.
    Loading,
    Ready(LoadedPage),
    /// Generic failure with zero results; retrying is the user's call.
    Errored,
}

/// One issued fetch: the sequence number and the state snapshot it encodes.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: QueryState,
}

/// Whatever can answer a listing query. `ApiClient` is the real source;
/// tests substitute their own.
pub trait ListingSource {
    fn fetch_listings(&self, query: &QueryState) -> Result<PropertiesResponse, ApiError>;
}

/// Owns the draft and applied query state and reconciles fetch responses
/// into display state. Single-owner: all mutation goes through the methods
/// below, so a reader always observes a fully-formed state triple.
#[derive(Debug)]
pub struct ListingSynchronizer {
    draft: FilterCriteria,
    state: QueryState,
    display: DisplayState,
    last_result: Option<LoadedPage>,
    next_seq: u64,
    issued: Option<FetchTicket>,
}

impl Default for ListingSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingSynchronizer {
    pub fn new() -> Self {
        Self {
            draft: FilterCriteria::default(),
            state: QueryState::default(),
            display: DisplayState::Idle,
            last_result: None,
            next_seq: 0,
            issued: None,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// The most recent successful page, kept across loading and error
    /// states. Not what the renderer shows; useful for diagnostics.
    pub fn last_result(&self) -> Option<&LoadedPage> {
        self.last_result.as_ref()
    }

    /// Non-empty fields of the *applied* criteria; the draft is irrelevant.
    pub fn active_filter_count(&self) -> usize {
        self.state.filters.active_count()
    }

    /// Edits one draft field. Never triggers a fetch.
    pub fn set_draft(&mut self, field: FilterField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn apply_filters(&mut self) {
        self.state = self.state.reduce(&QueryEvent::ApplyFilters(self.draft.clone()));
    }

    pub fn clear_filters(&mut self) {
        self.draft = FilterCriteria::default();
        self.state = self.state.reduce(&QueryEvent::ClearFilters);
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.state = self.state.reduce(&QueryEvent::SetSort(sort));
    }

    pub fn set_page(&mut self, page: u32) {
        self.state = self.state.reduce(&QueryEvent::SetPage(page));
    }

    pub fn set_page_size(&mut self, limit: u32) {
        self.state = self.state.reduce(&QueryEvent::SetPageSize(limit));
    }

    /// Effect runner, step one: issue a fetch iff the current QueryState
    /// differs from the one the latest outstanding ticket was issued for.
    /// Unrelated re-renders therefore never cause redundant requests.
    pub fn next_request(&mut self) -> Option<FetchTicket> {
        if let Some(issued) = &self.issued {
            if issued.query == self.state {
                return None;
            }
        }

        self.next_seq += 1;
        let ticket = FetchTicket { seq: self.next_seq, query: self.state.clone() };
        self.issued = Some(ticket.clone());
        self.display = DisplayState::Loading;
        Some(ticket)
    }

    /// Effect runner, step two: reconcile a response. Only the response to
    /// the most recently issued ticket may touch display state; anything
    /// older was superseded and is dropped silently. A failed fetch leaves
    /// the applied QueryState untouched so the user's next action re-issues
    /// the same criteria.
    pub fn complete(&mut self, seq: u64, result: Result<PropertiesResponse, ApiError>) {
        let Some(issued) = &self.issued else {
            return;
        };
        if issued.seq != seq {
            debug!(seq, latest = issued.seq, "dropping stale listing response");
            return;
        }

        match result {
            Ok(response) => {
                let page = &issued.query.page;
                let pagination = response
                    .pagination
                    .unwrap_or_else(|| Pagination::fallback(page.page, page.limit));
                let loaded = LoadedPage { properties: response.data, pagination };
                self.last_result = Some(loaded.clone());
                self.display = DisplayState::Ready(loaded);
            }
            Err(err) => {
                warn!(%err, "listing fetch failed");
                self.display = DisplayState::Errored;
            }
        }
    }

    /// Runs issue-and-complete to quiescence against a blocking source. The
    /// router uses this; out-of-order completion only arises when callers
    /// drive `next_request`/`complete` themselves.
    pub fn run<S: ListingSource + ?Sized>(&mut self, source: &S) {
        while let Some(ticket) = self.next_request() {
            let result = source.fetch_listings(&ticket.query);
            self.complete(ticket.seq, result);
        }
    }
}
