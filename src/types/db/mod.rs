// Database entities - SeaORM models
pub mod item_request;
