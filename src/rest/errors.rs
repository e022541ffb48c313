//! Decoding errors for typed entity clients.

use serde_json::Value;
use thiserror::Error;

/// Error raised when a record field cannot be coerced to its declared type.
///
/// Raised only by typed entity clients during
/// [`Entity::from_record`](crate::rest::Entity::from_record); the generic
/// [`RecordsApi`](crate::rest::RecordsApi) performs no decoding and can never
/// produce this error. A missing or `null` field is not an error — it decodes
/// to an absent field.
#[derive(Debug, Error)]
#[error("failed to decode field `{field}` from {value}: {reason}")]
pub struct DecodeError {
    /// The name of the offending field.
    pub field: String,
    /// The raw value that failed coercion.
    pub value: Value,
    /// Description of the coercion failure.
    pub reason: String,
}
