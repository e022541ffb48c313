//! Transport layer for the Flexmodel API.
//!
//! This module contains the low-level HTTP client ([`ApiClient`]) and its
//! error type ([`ApiError`]). Everything above this layer — the generic
//! records client and the typed entity clients — funnels through the single
//! request path implemented here.

mod errors;
mod http_client;

pub use errors::ApiError;
pub use http_client::{ApiClient, SDK_VERSION};
