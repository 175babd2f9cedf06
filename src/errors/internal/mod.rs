use thiserror::Error;

pub mod database;
pub mod item_request;

pub use database::DatabaseError;
pub use item_request::ItemRequestError;

/// Internal error type for store operations
///
/// Separates infrastructure errors (shared) from domain errors
/// (store-specific). Not exposed via API - endpoints must convert to
/// RequestError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error(transparent)]
    ItemRequest(#[from] ItemRequestError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn parse(value_type: &str, message: impl Into<String>) -> InternalError {
        InternalError::Parse {
            value_type: value_type.to_string(),
            message: message.into(),
        }
    }
}
