// Internal types - validated commands and identifiers
pub mod commands;
pub mod request_id;

pub use commands::{BatchDeleteCommand, BatchEditCommand, CreateRequestCommand, EditStatusCommand};
pub use request_id::RequestId;
