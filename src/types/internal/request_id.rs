use chrono::Utc;
use uuid::Uuid;

use crate::errors::ValidationError;

/// Identifier of an item request: exactly 24 lowercase hex characters.
///
/// Generated ids carry a 4-byte unix-seconds prefix followed by 8 random
/// bytes, so freshly created records sort roughly by creation time even
/// when compared by id alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Parse an untrusted identifier string.
    ///
    /// Accepts exactly 24 hex characters (either case) and normalizes to
    /// lowercase, which is how ids are stored.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if value.len() != 24 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidId(value.to_string()));
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    /// Generate a fresh identifier for a new record
    pub fn generate() -> Self {
        let seconds = Utc::now().timestamp() as u32;
        let random = Uuid::new_v4().into_bytes();

        let mut id = format!("{:08x}", seconds);
        for byte in &random[..8] {
            id.push_str(&format!("{:02x}", byte));
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
