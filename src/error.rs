//! Unified error type for the Flexmodel client.

use thiserror::Error;

use crate::clients::ApiError;
use crate::rest::DecodeError;

/// Unified error type returned by typed operations and the client context.
///
/// The generic [`RecordsApi`](crate::rest::RecordsApi) returns bare
/// [`ApiError`]s since it can never fail to decode; typed entity operations
/// return this enum so callers can branch on the kind.
///
/// # Example
///
/// ```rust,ignore
/// match users.get("u1", None).await {
///     Ok(user) => println!("{user:?}"),
///     Err(Error::Api(e)) if e.is_network() => println!("backend unreachable"),
///     Err(Error::Api(e)) => println!("HTTP {}: {e}", e.status_code),
///     Err(Error::Decode(e)) => println!("bad field {}: {e}", e.field),
///     Err(e) => println!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure: a non-2xx response, or no response at all
    /// (status code sentinel `0`).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A record field failed type coercion while decoding into an entity.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A typed client was requested for an entity type that was never
    /// registered on the context.
    #[error("entity type `{entity}` is not registered; call `FlexmodelClient::register` first")]
    NotRegistered {
        /// The Rust type name of the unregistered entity.
        entity: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_registered_message_names_type() {
        let err = Error::NotRegistered { entity: "my_crate::User" };
        let message = err.to_string();
        assert!(message.contains("my_crate::User"));
        assert!(message.contains("not registered"));
    }

    #[test]
    fn test_api_error_converts_transparently() {
        let api = ApiError::from_response(reqwest::StatusCode::NOT_FOUND, r#"{"message":"gone"}"#);
        let err: Error = api.into();
        assert_eq!(err.to_string(), "gone");
        assert!(matches!(err, Error::Api(e) if e.status_code == 404));
    }
}
