//! Configuration types for the Flexmodel client.
//!
//! The main types in this module are:
//!
//! - [`ClientOptions`]: connection settings bound at construction time
//! - [`AuthMethod`]: the mutually exclusive authentication strategies
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use flexmodel_client::ClientOptions;
//!
//! let options = ClientOptions::new()
//!     .api_key("my-api-key")
//!     .timeout(Duration::from_secs(10))
//!     .header("X-Tenant", "acme");
//! ```

use std::collections::HashMap;
use std::time::Duration;

/// Default per-call timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Authentication strategy attached to every outgoing request.
///
/// The strategies are mutually exclusive; the one in effect is whichever was
/// set most recently, either at construction via [`ClientOptions`] or later
/// through the client's credential-rotation methods.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthMethod {
    /// No authentication header is sent.
    #[default]
    None,
    /// `Authorization: Bearer {token}`.
    Bearer(String),
    /// HTTP Basic authentication.
    Basic {
        /// The basic-auth username.
        username: String,
        /// The basic-auth password.
        password: String,
    },
}

/// Connection settings for a client context.
///
/// All fields have defaults: no authentication, a 30 second per-call timeout,
/// and no extra headers. The options are consumed at construction time; the
/// resulting context is immutable apart from explicit credential rotation.
///
/// # Example
///
/// ```rust
/// use flexmodel_client::ClientOptions;
///
/// let options = ClientOptions::new().credentials("admin", "s3cret");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClientOptions {
    auth: AuthMethod,
    timeout: Option<Duration>,
    headers: HashMap<String, String>,
}

impl ClientOptions {
    /// Creates options with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticates with a bearer API key, replacing any previous strategy.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.auth = AuthMethod::Bearer(api_key.into());
        self
    }

    /// Authenticates with HTTP Basic credentials, replacing any previous
    /// strategy.
    #[must_use]
    pub fn credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.auth = AuthMethod::Basic {
            username: username.into(),
            password: password.into(),
        };
        self
    }

    /// Sets the per-call timeout. Applies to every request made through the
    /// resulting client; there is no per-call override.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a static header sent with every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Returns the configured authentication strategy.
    #[must_use]
    pub const fn auth(&self) -> &AuthMethod {
        &self.auth
    }

    /// Returns the configured timeout, or [`DEFAULT_TIMEOUT`].
    #[must_use]
    pub fn effective_timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Returns the extra static headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

// Verify the config types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthMethod>();
    assert_send_sync::<ClientOptions>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::new();
        assert_eq!(options.auth(), &AuthMethod::None);
        assert_eq!(options.effective_timeout(), DEFAULT_TIMEOUT);
        assert!(options.headers().is_empty());
    }

    #[test]
    fn test_api_key_sets_bearer_auth() {
        let options = ClientOptions::new().api_key("key-123");
        assert_eq!(options.auth(), &AuthMethod::Bearer("key-123".to_string()));
    }

    #[test]
    fn test_credentials_set_basic_auth() {
        let options = ClientOptions::new().credentials("user", "pass");
        assert_eq!(
            options.auth(),
            &AuthMethod::Basic {
                username: "user".to_string(),
                password: "pass".to_string(),
            }
        );
    }

    #[test]
    fn test_auth_strategies_are_mutually_exclusive() {
        // The most recently set strategy wins.
        let options = ClientOptions::new().api_key("key").credentials("u", "p");
        assert!(matches!(options.auth(), AuthMethod::Basic { .. }));

        let options = ClientOptions::new().credentials("u", "p").api_key("key");
        assert!(matches!(options.auth(), AuthMethod::Bearer(_)));
    }

    #[test]
    fn test_timeout_override() {
        let options = ClientOptions::new().timeout(Duration::from_secs(5));
        assert_eq!(options.effective_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_extra_headers_accumulate() {
        let options = ClientOptions::new()
            .header("X-One", "1")
            .header("X-Two", "2");
        assert_eq!(options.headers().len(), 2);
        assert_eq!(options.headers().get("X-One"), Some(&"1".to_string()));
    }
}
