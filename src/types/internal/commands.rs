use crate::types::dto::requests::RequestStatus;
use crate::types::internal::RequestId;

/// Validated create payload. Field values are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRequestCommand {
    pub requestor_name: String,
    pub item_requested: String,
}

/// Validated single-record status edit
#[derive(Debug, Clone, PartialEq)]
pub struct EditStatusCommand {
    pub id: RequestId,
    pub status: RequestStatus,
}

/// Validated batch status edit. `ids` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEditCommand {
    pub ids: Vec<RequestId>,
    pub status: RequestStatus,
}

/// Validated batch delete. `ids` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchDeleteCommand {
    pub ids: Vec<RequestId>,
}
