//! Typed entity clients.
//!
//! The backend is dynamically schemed: records are plain field maps. This
//! module makes a model feel statically typed at the call site. An entity
//! type implements [`Entity`] — a model name plus a decode/encode pair —
//! and [`EntityApi`] supplies the full CRUD and listing surface for it by
//! delegating every call to [`RecordsApi`]. There is exactly one code path
//! for HTTP, pagination, and path construction; the typed layer only adds
//! the codec at the boundary.
//!
//! # Implementing an entity
//!
//! ```rust
//! use flexmodel_client::{decode_field, encode_field, DecodeError, Entity, Record};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! pub struct Task {
//!     pub id: Option<String>,
//!     pub title: Option<String>,
//!     pub done: Option<bool>,
//! }
//!
//! impl Entity for Task {
//!     const MODEL: &'static str = "task";
//!
//!     fn from_record(record: &Record) -> Result<Self, DecodeError> {
//!         Ok(Self {
//!             id: decode_field(record, "id")?,
//!             title: decode_field(record, "title")?,
//!             done: decode_field(record, "done")?,
//!         })
//!     }
//!
//!     fn to_record(&self) -> Record {
//!         let mut record = Record::new();
//!         encode_field(&mut record, "id", self.id.as_ref());
//!         encode_field(&mut record, "title", self.title.as_ref());
//!         encode_field(&mut record, "done", self.done.as_ref());
//!         record
//!     }
//! }
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::ApiClient;
use crate::error::Error;
use crate::rest::errors::DecodeError;
use crate::rest::params::ListParams;
use crate::rest::records::{Record, RecordsApi};
use crate::rest::Page;

/// A statically-shaped projection of a [`Record`].
///
/// Every field of an entity is independently optional: a field missing from
/// a record decodes to `None`, and a `None` field is omitted from the
/// outgoing record entirely rather than encoded as `null`. That asymmetry is
/// what makes partial entities safe to send to `patch`.
pub trait Entity: Clone + Send + Sync + Sized {
    /// The default model name for this entity type.
    const MODEL: &'static str;

    /// Decodes a record into this entity shape.
    ///
    /// Missing and `null` fields become absent fields; a field whose value
    /// fails type coercion is an error.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] naming the offending field and its raw value.
    fn from_record(record: &Record) -> Result<Self, DecodeError>;

    /// Encodes this entity as a record, omitting absent fields. Never fails.
    fn to_record(&self) -> Record;
}

/// Decodes one optional field from a record.
///
/// Missing keys and explicit `null`s yield `Ok(None)`; any present value
/// must coerce to `T`.
///
/// # Errors
///
/// Returns [`DecodeError`] carrying the field name and raw value when
/// coercion fails.
pub fn decode_field<T: DeserializeOwned>(
    record: &Record,
    field: &str,
) -> Result<Option<T>, DecodeError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|err| DecodeError {
                field: field.to_string(),
                value: value.clone(),
                reason: err.to_string(),
            }),
    }
}

/// Encodes one optional field into a record. `None` inserts nothing — the
/// key stays absent rather than becoming `null`.
pub fn encode_field<T: Serialize>(record: &mut Record, field: &str, value: Option<&T>) {
    if let Some(value) = value {
        // Plain data fields serialize infallibly; a field that somehow
        // cannot serialize is omitted, since encoding never raises.
        if let Ok(encoded) = serde_json::to_value(value) {
            record.insert(field.to_string(), encoded);
        }
    }
}

/// Typed CRUD client for one entity type.
///
/// Binds `(transport, datasource, model)` once at construction and exposes
/// the same operation set as [`RecordsApi`], with [`Entity::from_record`] and
/// [`Entity::to_record`] applied at the boundary. Instantiated per entity
/// type through [`FlexmodelClient::entity`](crate::FlexmodelClient::entity);
/// nothing else about the type varies.
///
/// # Example
///
/// ```rust,ignore
/// let users = client.entity::<User>()?;
/// let page = users.list(&ListParams::new().page_size(10)).await?;
/// let created = users.create(&User { name: Some("Ada".into()), ..User::default() }).await?;
/// ```
#[derive(Debug, Clone)]
pub struct EntityApi<T: Entity> {
    records: RecordsApi,
    datasource: String,
    model: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> EntityApi<T> {
    /// Creates a typed client bound to a datasource and model name.
    #[must_use]
    pub fn new(
        client: Arc<ApiClient>,
        datasource: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            records: RecordsApi::new(client),
            datasource: datasource.into(),
            model: model.into(),
            _entity: PhantomData,
        }
    }

    /// Returns the model name this client addresses.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Lists entities as one page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for transport failures and [`Error::Decode`]
    /// when a returned record does not fit the entity shape.
    pub async fn list(&self, params: &ListParams) -> Result<Page<T>, Error> {
        let page = self
            .records
            .list(&self.datasource, &self.model, params)
            .await?;
        Ok(page.try_map(|record| T::from_record(&record))?)
    }

    /// Lists entities as a plain sequence, in a single call with pagination
    /// parameters omitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for transport failures and [`Error::Decode`]
    /// when a returned record does not fit the entity shape.
    pub async fn list_as_vec(&self, params: &ListParams) -> Result<Vec<T>, Error> {
        let page = self.list(&params.without_pagination()).await?;
        Ok(page.into_items())
    }

    /// Lists entities with no parameters at all — the simplest call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for transport failures and [`Error::Decode`]
    /// when a returned record does not fit the entity shape.
    pub async fn list_simple(&self) -> Result<Vec<T>, Error> {
        self.list_as_vec(&ListParams::new()).await
    }

    /// Fetches one entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for transport failures and [`Error::Decode`]
    /// when the returned record does not fit the entity shape.
    pub async fn get(&self, id: &str, nested_query: Option<bool>) -> Result<T, Error> {
        let record = self
            .records
            .get(&self.datasource, &self.model, id, nested_query)
            .await?;
        Ok(T::from_record(&record)?)
    }

    /// Creates an entity and returns it as stored by the server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for transport failures and [`Error::Decode`]
    /// when the returned record does not fit the entity shape.
    pub async fn create(&self, entity: &T) -> Result<T, Error> {
        let record = self
            .records
            .create(&self.datasource, &self.model, &entity.to_record())
            .await?;
        Ok(T::from_record(&record)?)
    }

    /// Replaces an entity in full (PUT).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for transport failures and [`Error::Decode`]
    /// when the returned record does not fit the entity shape.
    pub async fn update(&self, id: &str, entity: &T) -> Result<T, Error> {
        let record = self
            .records
            .update(&self.datasource, &self.model, id, &entity.to_record())
            .await?;
        Ok(T::from_record(&record)?)
    }

    /// Merges the populated fields of `entity` into the stored record
    /// (PATCH). Absent fields are not sent, so they are left untouched on
    /// the server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for transport failures and [`Error::Decode`]
    /// when the returned record does not fit the entity shape.
    pub async fn patch(&self, id: &str, entity: &T) -> Result<T, Error> {
        let record = self
            .records
            .patch(&self.datasource, &self.model, id, &entity.to_record())
            .await?;
        Ok(T::from_record(&record)?)
    }

    /// Deletes an entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for transport failures.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.records
            .delete(&self.datasource, &self.model, id)
            .await?;
        Ok(())
    }
}
