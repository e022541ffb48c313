//! HTTP transport for the Flexmodel API.
//!
//! This module provides the [`ApiClient`] type, the single code path through
//! which every request to the backend travels. It owns the connection pool,
//! the default headers, the authentication strategy, and the mapping of
//! protocol failures into [`ApiError`].

use std::collections::HashMap;
use std::sync::RwLock;

use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::clients::errors::ApiError;
use crate::config::{AuthMethod, ClientOptions};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to a Flexmodel backend.
///
/// The client handles:
/// - Absolute URL construction from the base URL and server-relative paths
/// - Default headers including `Content-Type: application/json`
/// - One of three mutually exclusive auth strategies (bearer, basic, none)
/// - A per-call timeout configured once at construction
/// - Mapping non-2xx responses and transport failures into [`ApiError`]
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`; independent calls may run fully in parallel.
/// The only shared mutable state is the auth snapshot, which
/// [`set_api_key`](Self::set_api_key) and
/// [`set_credentials`](Self::set_credentials) replace atomically. A rotation
/// racing an in-flight request is last-writer-wins; callers that need
/// deterministic ordering must serialize credential changes themselves.
///
/// # Example
///
/// ```rust,ignore
/// use flexmodel_client::{ApiClient, ClientOptions};
///
/// let client = ApiClient::new("http://localhost:8080", &ClientOptions::new());
/// let body = client.get("/api/f/datasources/sales/models/order/records", None).await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL without a trailing slash (e.g. `http://localhost:8080`).
    base_url: String,
    /// Static headers sent with every request.
    default_headers: HashMap<String, String>,
    /// Auth snapshot read at header-construction time for each request.
    auth: RwLock<AuthMethod>,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new transport bound to `base_url`.
    ///
    /// A trailing `/` on `base_url` is trimmed so that server-relative paths
    /// join cleanly. The configured timeout applies to every call made
    /// through this client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g. TLS
    /// initialization failure).
    #[must_use]
    pub fn new(base_url: impl Into<String>, options: &ClientOptions) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Flexmodel Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        for (name, value) in options.headers() {
            default_headers.insert(name.clone(), value.clone());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(options.effective_timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            default_headers,
            auth: RwLock::new(options.auth().clone()),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Replaces the auth strategy with a bearer API key.
    ///
    /// Applies to all subsequent calls; requests already in flight keep the
    /// snapshot they were built with.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.replace_auth(AuthMethod::Bearer(api_key.into()));
    }

    /// Replaces the auth strategy with HTTP Basic credentials.
    ///
    /// Applies to all subsequent calls; requests already in flight keep the
    /// snapshot they were built with.
    pub fn set_credentials(&self, username: impl Into<String>, password: impl Into<String>) {
        self.replace_auth(AuthMethod::Basic {
            username: username.into(),
            password: password.into(),
        });
    }

    fn replace_auth(&self, auth: AuthMethod) {
        // An AuthMethod swap cannot leave the value half-written, so a
        // poisoned lock is safe to recover.
        let mut guard = self
            .auth
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = auth;
    }

    fn auth_snapshot(&self) -> AuthMethod {
        self.auth
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for non-2xx responses, or with status code `0`
    /// when no response was obtained.
    pub async fn get(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
    ) -> Result<Value, ApiError> {
        self.request(Method::GET, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for non-2xx responses, or with status code `0`
    /// when no response was obtained.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::POST, path, Some(body), None).await
    }

    /// Sends a PUT request with a JSON body (full-replace semantics).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for non-2xx responses, or with status code `0`
    /// when no response was obtained.
    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::PUT, path, Some(body), None).await
    }

    /// Sends a PATCH request with a JSON body (partial-merge semantics).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for non-2xx responses, or with status code `0`
    /// when no response was obtained.
    pub async fn patch(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::PATCH, path, Some(body), None).await
    }

    /// Sends a DELETE request, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for non-2xx responses, or with status code `0`
    /// when no response was obtained.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::DELETE, path, None, None).await?;
        Ok(())
    }

    /// Builds and sends a request, mapping failures into [`ApiError`].
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&HashMap<String, String>>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, path, "sending request");

        let mut builder = self.client.request(method, &url);

        for (name, value) in &self.default_headers {
            builder = builder.header(name, value);
        }

        builder = match self.auth_snapshot() {
            AuthMethod::Bearer(token) => builder.bearer_auth(token),
            AuthMethod::Basic { username, password } => {
                builder.basic_auth(username, Some(password))
            }
            AuthMethod::None => builder,
        };

        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::transport(&err))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::transport(&err))?;

        if !status.is_success() {
            let error = ApiError::from_response(status, &text);
            tracing::warn!(status = status.as_u16(), path, "request failed: {error}");
            return Err(error);
        }

        Ok(parse_success_body(status, &text))
    }
}

/// Parses a success body leniently: empty bodies (e.g. 204 on delete) become
/// `Value::Null`, as do bodies that are not valid JSON.
fn parse_success_body(status: StatusCode, text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|err| {
        tracing::debug!(status = status.as_u16(), "ignoring unparseable success body: {err}");
        Value::Null
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/", &ClientOptions::new());
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_content_type_header_always_present() {
        let client = ApiClient::new("http://localhost:8080", &ClientOptions::new());
        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = ApiClient::new("http://localhost:8080", &ClientOptions::new());
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Flexmodel Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_extra_headers_are_merged() {
        let options = ClientOptions::new().header("X-Tenant", "acme");
        let client = ApiClient::new("http://localhost:8080", &options);
        assert_eq!(
            client.default_headers().get("X-Tenant"),
            Some(&"acme".to_string())
        );
    }

    #[test]
    fn test_auth_rotation_replaces_snapshot() {
        let client = ApiClient::new("http://localhost:8080", &ClientOptions::new());
        assert_eq!(client.auth_snapshot(), AuthMethod::None);

        client.set_api_key("key-1");
        assert_eq!(client.auth_snapshot(), AuthMethod::Bearer("key-1".to_string()));

        client.set_credentials("user", "pass");
        assert_eq!(
            client.auth_snapshot(),
            AuthMethod::Basic {
                username: "user".to_string(),
                password: "pass".to_string(),
            }
        );
    }

    #[test]
    fn test_timeout_option_is_accepted() {
        let options = ClientOptions::new().timeout(Duration::from_millis(250));
        let _client = ApiClient::new("http://localhost:8080", &options);
    }

    #[test]
    fn test_parse_success_body_empty_is_null() {
        assert_eq!(parse_success_body(StatusCode::NO_CONTENT, ""), Value::Null);
    }

    #[test]
    fn test_parse_success_body_json() {
        let value = parse_success_body(StatusCode::OK, r#"{"id":"1"}"#);
        assert_eq!(value["id"], "1");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiClient>();
    }
}
