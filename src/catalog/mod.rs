//! Catalog service: translates requests into song store operations and
//! shapes responses.

mod service;

pub use service::{CatalogService, Stats};
