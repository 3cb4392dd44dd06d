// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Marker, icons, PriceDisplay, Pagination, etc.)
// - filters.rs: Collapsible filter sidebar (collection, availability, price)
// - product.rs: Product display components (ProductCell, ProductGrid, ProductDetail)
// - header.rs: Site header with wishlist/cart counters

pub mod common;
pub mod filters;
pub mod header;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use filters::*;
pub use header::*;
pub use product::*;
