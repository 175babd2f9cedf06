use chrono::DateTime;
use poem_openapi::{Enum, Object};

use crate::errors::InternalError;
use crate::types::db::item_request;

/// Lifecycle status of an item request
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[oai(rename_all = "UPPERCASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Completed,
    Rejected,
}

impl RequestStatus {
    /// Stored/wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Completed => "COMPLETED",
            RequestStatus::Rejected => "REJECTED",
        }
    }

    /// Parse a stored/wire status value. Exact match only.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(RequestStatus::Pending),
            "APPROVED" => Some(RequestStatus::Approved),
            "COMPLETED" => Some(RequestStatus::Completed),
            "REJECTED" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for creating an item request
///
/// Fields are optional so that missing values reach the validator and are
/// reported as invalid input instead of being rejected by the codec.
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct CreateRequestBody {
    /// Name of the person requesting the item (3-30 characters)
    pub requestor_name: Option<String>,

    /// Description of the requested item (2-100 characters)
    pub item_requested: Option<String>,
}

/// Request body for editing the status of a single item request
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct EditStatusBody {
    /// Identifier of the request to update (24 hex characters)
    pub id: Option<String>,

    /// New status value
    pub status: Option<String>,
}

/// Request body for editing the status of several item requests at once
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct BatchEditBody {
    /// Identifiers of the requests to update (24 hex characters each)
    pub ids: Option<Vec<String>>,

    /// New status value applied to every request
    pub status: Option<String>,
}

/// Request body for deleting several item requests at once
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct BatchDeleteBody {
    /// Identifiers of the requests to delete (24 hex characters each)
    pub ids: Option<Vec<String>>,
}

/// Response model representing an item request
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct ItemRequestDto {
    /// Unique identifier for the request (24 hex characters)
    pub id: String,

    /// Name of the person who made the request
    pub requestor_name: String,

    /// Description of the requested item
    pub item_requested: String,

    /// Timestamp when the request was created (ISO 8601 format)
    pub created_date: String,

    /// Timestamp of the last status change (ISO 8601 format)
    pub last_edited_date: String,

    /// Current lifecycle status
    pub status: RequestStatus,
}

/// Response model for batch status updates
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    /// Number of requests actually updated
    pub modified_count: u64,
}

/// Response model for batch deletes
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct BatchDeleteResponse {
    /// Number of requests actually removed
    pub deleted_count: u64,
}

impl TryFrom<item_request::Model> for ItemRequestDto {
    type Error = InternalError;

    fn try_from(model: item_request::Model) -> Result<Self, Self::Error> {
        let status = RequestStatus::parse(&model.status).ok_or_else(|| {
            InternalError::parse(
                "request_status",
                format!("stored status {:?} is not a known value", model.status),
            )
        })?;

        Ok(Self {
            id: model.id,
            requestor_name: model.requestor_name,
            item_requested: model.item_requested,
            created_date: rfc3339(model.created_date, "created_date")?,
            last_edited_date: rfc3339(model.last_edited_date, "last_edited_date")?,
            status,
        })
    }
}

fn rfc3339(epoch_millis: i64, field: &str) -> Result<String, InternalError> {
    DateTime::from_timestamp_millis(epoch_millis)
        .map(|ts| ts.to_rfc3339())
        .ok_or_else(|| {
            InternalError::parse(
                field,
                format!("timestamp {} is out of range", epoch_millis),
            )
        })
}
