pub mod filters;
pub mod query;
pub mod sync;

pub use filters::{FilterCriteria, FilterField};
pub use query::{PageRequest, QueryState, SortOrder};
pub use sync::{DisplayState, ListingSource, ListingSynchronizer, QueryEvent, LOAD_ERROR_MESSAGE};
