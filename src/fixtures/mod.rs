// fixtures/mod.rs - Catalog fixtures
//
// Reusable product data. The same records back the server's fallback catalog
// and the test suites, so rendering and store tests see realistic products.

pub mod catalog;

pub use catalog::{sample_catalog, ProductBuilder};
