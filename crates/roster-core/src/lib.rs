//! Record-query-and-mutation engine for the roster browser.
//!
//! - [`store`]: the authoritative record collection.
//! - [`query`]: query state and the pure filter/sort/paginate projection.
//! - [`edit`]: the single-record edit lock.
//! - [`browser`]: ties the three together behind one event-processing API.
//! - [`generator`]: synthetic starting data.

pub mod browser;
pub mod collate;
pub mod edit;
pub mod error;
pub mod generator;
pub mod query;
pub mod store;

pub use browser::Browser;
pub use edit::EditSession;
pub use error::EditError;
pub use generator::{DEFAULT_RECORD_COUNT, generate, generate_random, generate_seeded};
pub use query::{
    DEFAULT_PAGE_SIZE, QueryState, SortDirection, SortSpec, View, compare_by_field, compute_view,
    last_page_index,
};
pub use store::RecordStore;
