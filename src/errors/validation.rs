use thiserror::Error;

/// Rejection reason produced by the request validators
///
/// Carries the structured cause for logging; the API layer collapses every
/// variant into the single invalid-input response, so no field-level detail
/// reaches the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("{field} must be {min}-{max} characters")]
    LengthOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("invalid request id: {0}")]
    InvalidId(String),

    #[error("unknown status value: {0}")]
    UnknownStatus(String),

    #[error("ids must be a non-empty list")]
    EmptyIdList,
}
