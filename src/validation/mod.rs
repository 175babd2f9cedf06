// Validation layer - pure request body validators
pub mod requests;

pub use requests::{validate_batch_delete, validate_batch_edit, validate_create, validate_status_edit};
