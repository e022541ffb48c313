//! Example entity types.
//!
//! These demonstrate the [`Entity`](crate::rest::Entity) pattern: each type
//! is a fixed projection of a model's records, and the full CRUD surface
//! comes from [`EntityApi`](crate::rest::EntityApi) — the entity itself only
//! supplies a model name and a decode/encode pair. Real applications define
//! their own entity types the same way; nothing in the client depends on
//! this module.

mod order;
mod product;
mod user;

pub use order::Order;
pub use product::Product;
pub use user::User;
