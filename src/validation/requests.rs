//! Pure validators for item request operations.
//!
//! Each function turns a loose request body into a validated command or a
//! [`ValidationError`]. No I/O, no panics; infrastructure failures never
//! originate here.

use crate::errors::ValidationError;
use crate::types::dto::requests::{
    BatchDeleteBody, BatchEditBody, CreateRequestBody, EditStatusBody, RequestStatus,
};
use crate::types::internal::{
    BatchDeleteCommand, BatchEditCommand, CreateRequestCommand, EditStatusCommand, RequestId,
};

pub const REQUESTOR_NAME_MIN: usize = 3;
pub const REQUESTOR_NAME_MAX: usize = 30;
pub const ITEM_REQUESTED_MIN: usize = 2;
pub const ITEM_REQUESTED_MAX: usize = 100;

/// Validate a create payload. Returns the trimmed field values.
pub fn validate_create(body: &CreateRequestBody) -> Result<CreateRequestCommand, ValidationError> {
    let requestor_name = bounded_string(
        body.requestor_name.as_deref(),
        "requestorName",
        REQUESTOR_NAME_MIN,
        REQUESTOR_NAME_MAX,
    )?;
    let item_requested = bounded_string(
        body.item_requested.as_deref(),
        "itemRequested",
        ITEM_REQUESTED_MIN,
        ITEM_REQUESTED_MAX,
    )?;

    Ok(CreateRequestCommand {
        requestor_name,
        item_requested,
    })
}

/// Validate a single-record status edit payload
pub fn validate_status_edit(body: &EditStatusBody) -> Result<EditStatusCommand, ValidationError> {
    let id = body
        .id
        .as_deref()
        .ok_or(ValidationError::MissingField("id"))
        .and_then(RequestId::parse)?;
    let status = parse_status(body.status.as_deref())?;

    Ok(EditStatusCommand { id, status })
}

/// Validate a batch status edit payload
pub fn validate_batch_edit(body: &BatchEditBody) -> Result<BatchEditCommand, ValidationError> {
    let ids = parse_id_list(body.ids.as_deref())?;
    let status = parse_status(body.status.as_deref())?;

    Ok(BatchEditCommand { ids, status })
}

/// Validate a batch delete payload
pub fn validate_batch_delete(
    body: &BatchDeleteBody,
) -> Result<BatchDeleteCommand, ValidationError> {
    let ids = parse_id_list(body.ids.as_deref())?;

    Ok(BatchDeleteCommand { ids })
}

/// Check a text field against its length bounds.
///
/// Bounds apply to the trimmed value, which is also what gets returned.
fn bounded_string(
    value: Option<&str>,
    field: &'static str,
    min: usize,
    max: usize,
) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    let trimmed = value.trim();

    let length = trimmed.chars().count();
    if length < min || length > max {
        return Err(ValidationError::LengthOutOfRange { field, min, max });
    }

    Ok(trimmed.to_string())
}

fn parse_status(value: Option<&str>) -> Result<RequestStatus, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField("status"))?;
    RequestStatus::parse(value).ok_or_else(|| ValidationError::UnknownStatus(value.to_string()))
}

fn parse_id_list(ids: Option<&[String]>) -> Result<Vec<RequestId>, ValidationError> {
    let ids = ids.ok_or(ValidationError::MissingField("ids"))?;
    if ids.is_empty() {
        return Err(ValidationError::EmptyIdList);
    }

    ids.iter().map(|id| RequestId::parse(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_ID: &str = "507f1f77bcf86cd799439011";

    fn create_body(requestor_name: Option<&str>, item_requested: Option<&str>) -> CreateRequestBody {
        CreateRequestBody {
            requestor_name: requestor_name.map(String::from),
            item_requested: item_requested.map(String::from),
        }
    }

    #[test]
    fn test_validate_create_accepts_valid_payload() {
        let body = create_body(Some("Jamie Reyes"), Some("First aid kit"));
        let command = validate_create(&body).unwrap();

        assert_eq!(command.requestor_name, "Jamie Reyes");
        assert_eq!(command.item_requested, "First aid kit");
    }

    #[test]
    fn test_validate_create_trims_whitespace() {
        let body = create_body(Some("  Jamie Reyes  "), Some("\tFirst aid kit\n"));
        let command = validate_create(&body).unwrap();

        assert_eq!(command.requestor_name, "Jamie Reyes");
        assert_eq!(command.item_requested, "First aid kit");
    }

    #[test]
    fn test_requestor_name_length_boundaries() {
        let exactly_30 = "a".repeat(30);
        let exactly_31 = "a".repeat(31);

        // 2 chars rejected, 3 and 30 accepted, 31 rejected
        assert!(validate_create(&create_body(Some("ab"), Some("ok"))).is_err());
        assert!(validate_create(&create_body(Some("abc"), Some("ok"))).is_ok());
        assert!(validate_create(&create_body(Some(exactly_30.as_str()), Some("ok"))).is_ok());
        assert!(validate_create(&create_body(Some(exactly_31.as_str()), Some("ok"))).is_err());
    }

    #[test]
    fn test_requestor_name_bounds_apply_after_trimming() {
        // 2 chars padded to 6 with whitespace still fails the lower bound
        assert!(validate_create(&create_body(Some("  ab  "), Some("ok"))).is_err());
        assert!(validate_create(&create_body(Some("  abc  "), Some("ok"))).is_ok());
        // 31 trimmed chars padded with whitespace still fails the upper bound
        let padded = format!(" {} ", "a".repeat(31));
        assert!(validate_create(&create_body(Some(padded.as_str()), Some("ok"))).is_err());
    }

    #[test]
    fn test_item_requested_length_boundaries() {
        let exactly_100 = "b".repeat(100);
        let exactly_101 = "b".repeat(101);

        assert!(validate_create(&create_body(Some("abc"), Some("a"))).is_err());
        assert!(validate_create(&create_body(Some("abc"), Some("ab"))).is_ok());
        assert!(validate_create(&create_body(Some("abc"), Some(exactly_100.as_str()))).is_ok());
        assert!(validate_create(&create_body(Some("abc"), Some(exactly_101.as_str()))).is_err());
    }

    #[test]
    fn test_validate_create_rejects_missing_fields() {
        assert_eq!(
            validate_create(&create_body(None, Some("First aid kit"))),
            Err(ValidationError::MissingField("requestorName"))
        );
        assert_eq!(
            validate_create(&create_body(Some("Jamie Reyes"), None)),
            Err(ValidationError::MissingField("itemRequested"))
        );
    }

    #[test]
    fn test_validate_create_rejects_blank_strings() {
        assert!(validate_create(&create_body(Some(""), Some("ok"))).is_err());
        assert!(validate_create(&create_body(Some("   "), Some("ok"))).is_err());
        assert!(validate_create(&create_body(Some("abc"), Some("   "))).is_err());
    }

    #[test]
    fn test_validate_status_edit_accepts_valid_payload() {
        let body = EditStatusBody {
            id: Some(VALID_ID.to_string()),
            status: Some("APPROVED".to_string()),
        };
        let command = validate_status_edit(&body).unwrap();

        assert_eq!(command.id.as_str(), VALID_ID);
        assert_eq!(command.status, RequestStatus::Approved);
    }

    #[test]
    fn test_validate_status_edit_rejects_bad_id() {
        for id in ["", "507f1f77bcf86cd79943901", "507f1f77bcf86cd7994390111", "507f1f77bcf86cd79943901z"] {
            let body = EditStatusBody {
                id: Some(id.to_string()),
                status: Some("APPROVED".to_string()),
            };
            assert!(validate_status_edit(&body).is_err(), "id {:?} should be rejected", id);
        }
    }

    #[test]
    fn test_validate_status_edit_rejects_unknown_status() {
        let body = EditStatusBody {
            id: Some(VALID_ID.to_string()),
            status: Some("approved".to_string()),
        };
        assert_eq!(
            validate_status_edit(&body),
            Err(ValidationError::UnknownStatus("approved".to_string()))
        );
    }

    #[test]
    fn test_validate_status_edit_rejects_missing_fields() {
        let body = EditStatusBody {
            id: None,
            status: Some("APPROVED".to_string()),
        };
        assert_eq!(
            validate_status_edit(&body),
            Err(ValidationError::MissingField("id"))
        );

        let body = EditStatusBody {
            id: Some(VALID_ID.to_string()),
            status: None,
        };
        assert_eq!(
            validate_status_edit(&body),
            Err(ValidationError::MissingField("status"))
        );
    }

    #[test]
    fn test_validate_batch_edit_accepts_valid_payload() {
        let body = BatchEditBody {
            ids: Some(vec![VALID_ID.to_string(), "0123456789abcdef01234567".to_string()]),
            status: Some("COMPLETED".to_string()),
        };
        let command = validate_batch_edit(&body).unwrap();

        assert_eq!(command.ids.len(), 2);
        assert_eq!(command.status, RequestStatus::Completed);
    }

    #[test]
    fn test_validate_batch_edit_rejects_empty_id_list() {
        let body = BatchEditBody {
            ids: Some(vec![]),
            status: Some("APPROVED".to_string()),
        };
        assert_eq!(validate_batch_edit(&body), Err(ValidationError::EmptyIdList));
    }

    #[test]
    fn test_validate_batch_edit_rejects_one_bad_id_among_valid() {
        let body = BatchEditBody {
            ids: Some(vec![VALID_ID.to_string(), "not-hex".to_string()]),
            status: Some("APPROVED".to_string()),
        };
        assert!(validate_batch_edit(&body).is_err());
    }

    #[test]
    fn test_validate_batch_delete_accepts_valid_payload() {
        let body = BatchDeleteBody {
            ids: Some(vec![VALID_ID.to_string()]),
        };
        let command = validate_batch_delete(&body).unwrap();
        assert_eq!(command.ids.len(), 1);
    }

    #[test]
    fn test_validate_batch_delete_rejects_missing_or_empty_ids() {
        assert_eq!(
            validate_batch_delete(&BatchDeleteBody { ids: None }),
            Err(ValidationError::MissingField("ids"))
        );
        assert_eq!(
            validate_batch_delete(&BatchDeleteBody { ids: Some(vec![]) }),
            Err(ValidationError::EmptyIdList)
        );
    }
}
