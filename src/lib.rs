//! # Flexmodel Client
//!
//! A Rust client SDK for the Flexmodel record service: a backend exposing
//! named datasources containing named models, with CRUD and paginated
//! listing over `{datasource}/{model}/records` resources.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A single async transport ([`ApiClient`]) owning headers, auth, timeout,
//!   and error mapping
//! - A generic, untyped records client ([`rest::RecordsApi`]) for arbitrary
//!   datasource/model pairs
//! - A typed entity client ([`rest::EntityApi`]) derived per entity type
//!   from the same transport, path, and pagination code path
//! - A client context and factory ([`FlexmodelClient`]) with explicit entity
//!   registration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flexmodel_client::{FlexmodelClient, ListParams};
//! use flexmodel_client::entities::User;
//!
//! // Bind a base URL, datasource, and auth mode. Construction does no I/O.
//! let client = FlexmodelClient::with_api_key("http://localhost:8080", "sales", "api-key");
//!
//! // Untyped access to any model:
//! let page = client
//!     .records()
//!     .list("sales", "order", &ListParams::new().page_size(10).current(1))
//!     .await?;
//! println!("{} of {} orders", page.size(), page.total);
//!
//! // Typed access, after registering the entity type once:
//! client.register::<User>();
//! let users = client.entity::<User>()?;
//! let created = users
//!     .create(&User { name: Some("Ada".into()), ..User::default() })
//!     .await?;
//! ```
//!
//! ## Defining entities
//!
//! An entity is a fixed, all-optional projection of a model's records.
//! Implement [`rest::Entity`] with the field helpers and every CRUD
//! operation comes from the shared generic building block:
//!
//! ```rust
//! use flexmodel_client::{decode_field, encode_field, DecodeError, Entity, Record};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Tag {
//!     id: Option<String>,
//!     label: Option<String>,
//! }
//!
//! impl Entity for Tag {
//!     const MODEL: &'static str = "tag";
//!
//!     fn from_record(record: &Record) -> Result<Self, DecodeError> {
//!         Ok(Self {
//!             id: decode_field(record, "id")?,
//!             label: decode_field(record, "label")?,
//!         })
//!     }
//!
//!     fn to_record(&self) -> Record {
//!         let mut record = Record::new();
//!         encode_field(&mut record, "id", self.id.as_ref());
//!         encode_field(&mut record, "label", self.label.as_ref());
//!         record
//!     }
//! }
//! ```
//!
//! ## Error handling
//!
//! Transport failures are [`ApiError`]: a non-2xx response carries the real
//! status code and any structured payload; no response at all carries the
//! status sentinel `0`. Typed operations additionally raise [`DecodeError`]
//! when a field fails coercion, unified under [`Error`]. The client never
//! retries, caches, or validates queries — `filter` and `sort` are opaque
//! pass-through expressions.
//!
//! ## Design Principles
//!
//! - **No global state**: each context is independent and passed explicitly
//! - **One code path**: generic and typed clients share transport, path
//!   construction, and pagination
//! - **Thread-safe**: all client types are `Send + Sync`; only credential
//!   rotation touches shared mutable state, via atomic snapshot replacement
//! - **Async-first**: designed for use with the Tokio runtime

pub mod client;
pub mod clients;
pub mod config;
pub mod entities;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::{FlexmodelClient, DEFAULT_LOCAL_URL};
pub use clients::{ApiClient, ApiError};
pub use config::{AuthMethod, ClientOptions, DEFAULT_TIMEOUT};
pub use error::Error;
pub use rest::{
    collection_path, decode_field, encode_field, item_path, DecodeError, Entity, EntityApi,
    ListParams, Page, Record, RecordsApi,
};
