use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::stores::RequestStore;

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across API
/// services. The store handle is passed down explicitly; nothing caches a
/// connection at module level.
pub struct AppData {
    pub db: DatabaseConnection,
    pub request_store: Arc<RequestStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection should be initialized and migrated before
    /// calling this.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let request_store = Arc::new(RequestStore::new(db.clone()));
        tracing::debug!("Stores created");

        Self { db, request_store }
    }
}
