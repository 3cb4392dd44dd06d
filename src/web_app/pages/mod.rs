// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - AllProductsPage: Product listing with filter sidebar
// - ProductPage: Single product detail

pub mod all_products;
pub mod product;

// Re-export page components
pub use all_products::AllProductsPage;
pub use product::ProductPage;
