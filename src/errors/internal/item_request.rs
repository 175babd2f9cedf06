use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemRequestError {
    #[error("Item request not found: {0}")]
    NotFound(String),
}
