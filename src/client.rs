//! The client context: factory constructors, the generic records client,
//! and the typed entity registry.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::clients::ApiClient;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::rest::{Entity, EntityApi, RecordsApi};

/// Default base URL used by [`FlexmodelClient::local`] for development.
pub const DEFAULT_LOCAL_URL: &str = "http://localhost:8080";

/// A client context bound to one backend and one datasource.
///
/// Construction is pure — no I/O happens until an operation is called — and
/// each context is fully independent; the crate holds no process-wide state.
/// Both the generic [`RecordsApi`] and every typed [`EntityApi`] derived
/// from a context share its single transport.
///
/// # Entity registration
///
/// Typed accessors are opt-in: register an entity type once, then request
/// its client anywhere. Asking for an unregistered type is a normal error
/// ([`Error::NotRegistered`]), not a stub that panics at call time.
///
/// ```rust,ignore
/// let client = FlexmodelClient::with_api_key("http://localhost:8080", "sales", "key");
/// client.register::<User>();
///
/// let users = client.entity::<User>()?;
/// let everyone = users.list_simple().await?;
/// ```
///
/// # Credential rotation
///
/// [`set_api_key`](Self::set_api_key) and
/// [`set_credentials`](Self::set_credentials) replace the transport's auth
/// snapshot atomically. Calls already in flight keep the credentials they
/// started with; concurrent rotations are last-writer-wins.
#[derive(Debug)]
pub struct FlexmodelClient {
    api_client: Arc<ApiClient>,
    datasource: String,
    /// Model-name binding per registered entity type.
    registry: RwLock<HashMap<TypeId, String>>,
}

impl FlexmodelClient {
    /// Creates a client context from a base URL, datasource name, and
    /// options.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        datasource: impl Into<String>,
        options: &ClientOptions,
    ) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(base_url, options)),
            datasource: datasource.into(),
            registry: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a context authenticated with a bearer API key.
    #[must_use]
    pub fn with_api_key(
        base_url: impl Into<String>,
        datasource: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self::new(base_url, datasource, &ClientOptions::new().api_key(api_key))
    }

    /// Creates a context authenticated with HTTP Basic credentials.
    #[must_use]
    pub fn with_credentials(
        base_url: impl Into<String>,
        datasource: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(
            base_url,
            datasource,
            &ClientOptions::new().credentials(username, password),
        )
    }

    /// Creates an unauthenticated context against [`DEFAULT_LOCAL_URL`], for
    /// development setups.
    #[must_use]
    pub fn local(datasource: impl Into<String>) -> Self {
        Self::new(DEFAULT_LOCAL_URL, datasource, &ClientOptions::new())
    }

    /// Returns the datasource name this context is bound to.
    #[must_use]
    pub fn datasource(&self) -> &str {
        &self.datasource
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn api_client(&self) -> &Arc<ApiClient> {
        &self.api_client
    }

    /// Returns the generic, untyped records client.
    #[must_use]
    pub fn records(&self) -> RecordsApi {
        RecordsApi::new(Arc::clone(&self.api_client))
    }

    /// Registers an entity type under its default model name
    /// ([`Entity::MODEL`]).
    pub fn register<T: Entity + 'static>(&self) {
        self.register_as::<T>(T::MODEL);
    }

    /// Registers an entity type under an explicit model name, overriding
    /// [`Entity::MODEL`]. Re-registering a type replaces its binding.
    pub fn register_as<T: Entity + 'static>(&self, model: impl Into<String>) {
        let mut registry = self
            .registry
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        registry.insert(TypeId::of::<T>(), model.into());
    }

    /// Returns the typed client for a registered entity type.
    ///
    /// Each call yields a fresh handle over the shared transport; handles
    /// are cheap to create and safe to keep.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRegistered`] when `T` was never registered on
    /// this context.
    pub fn entity<T: Entity + 'static>(&self) -> Result<EntityApi<T>, Error> {
        let registry = self
            .registry
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let model = registry
            .get(&TypeId::of::<T>())
            .ok_or(Error::NotRegistered {
                entity: std::any::type_name::<T>(),
            })?;
        Ok(EntityApi::new(
            Arc::clone(&self.api_client),
            self.datasource.as_str(),
            model.as_str(),
        ))
    }

    /// Replaces the auth strategy with a bearer API key for all subsequent
    /// calls from this context.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.api_client.set_api_key(api_key);
    }

    /// Replaces the auth strategy with HTTP Basic credentials for all
    /// subsequent calls from this context.
    pub fn set_credentials(&self, username: impl Into<String>, password: impl Into<String>) {
        self.api_client.set_credentials(username, password);
    }
}

// Verify FlexmodelClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FlexmodelClient>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::User;

    #[test]
    fn test_construction_is_pure() {
        let client = FlexmodelClient::new("http://localhost:8080", "sales", &ClientOptions::new());
        assert_eq!(client.datasource(), "sales");
    }

    #[test]
    fn test_contexts_are_independent() {
        let a = FlexmodelClient::local("first");
        let b = FlexmodelClient::local("second");
        a.register::<User>();

        assert!(a.entity::<User>().is_ok());
        assert!(matches!(
            b.entity::<User>(),
            Err(Error::NotRegistered { .. })
        ));
    }

    #[test]
    fn test_entity_requires_registration() {
        let client = FlexmodelClient::local("sales");
        let err = client.entity::<User>().unwrap_err();
        assert!(err.to_string().contains("not registered"));

        client.register::<User>();
        let users = client.entity::<User>().unwrap();
        assert_eq!(users.model(), User::MODEL);
    }

    #[test]
    fn test_register_as_overrides_model_name() {
        let client = FlexmodelClient::local("sales");
        client.register_as::<User>("member");
        let users = client.entity::<User>().unwrap();
        assert_eq!(users.model(), "member");
    }

    #[test]
    fn test_reregistration_replaces_binding() {
        let client = FlexmodelClient::local("sales");
        client.register::<User>();
        client.register_as::<User>("person");
        assert_eq!(client.entity::<User>().unwrap().model(), "person");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FlexmodelClient>();
    }
}
