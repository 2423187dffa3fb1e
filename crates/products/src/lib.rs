//! Product catalog.
//!
//! An owned, in-memory collection of products answering filtered, paginated
//! list queries and single-record create/read/update/delete. Pure domain
//! logic: no IO, no HTTP, no persistence.

pub mod product;
pub mod query;
pub mod seed;
pub mod store;

pub use product::{INVALID_PRICE, MISSING_REQUIRED_FIELDS, NewProduct, Product, ProductPatch};
pub use query::{ListQuery, Pagination, ProductFilter, ProductPage};
pub use store::{CatalogStore, DELETED_MESSAGE, DeleteAck, IDS_EXHAUSTED};
