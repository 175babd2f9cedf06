pub mod database;
pub mod logging;

pub use database::{init_database, migrate_database};
pub use logging::init_logging;

/// Number of records per list page.
///
/// Shared with the table UI; both sides must agree for the pagination math
/// to line up.
pub const PAGINATION_PAGE_SIZE: u64 = 6;
