//! Record resources: paths, pagination, and the generic/typed client pair.
//!
//! The layering is deliberate: [`RecordsApi`] is the one implementation of
//! CRUD and paginated listing, and [`EntityApi`] adds a per-entity codec on
//! top of it. Both use [`collection_path`]/[`item_path`] for addressing, so
//! there is a single code path for HTTP, pagination, and path construction.

mod entity;
mod errors;
mod page;
mod params;
mod path;
mod records;

pub use entity::{decode_field, encode_field, Entity, EntityApi};
pub use errors::DecodeError;
pub use page::Page;
pub use params::ListParams;
pub use path::{collection_path, encode_segment, item_path};
pub use records::{Record, RecordsApi};
