// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::{Product, ProductId};

/// Full catalog, in catalog order
#[server(ListProducts, "/api")]
pub async fn list_products() -> Result<Vec<Product>, ServerFnError> {
    use crate::web_app::api::catalog;

    let products = catalog::catalog().to_vec();
    tracing::info!("Catalog request: returning {} products", products.len());
    Ok(products)
}

/// Single product for the detail page (`None` when the id is unknown)
#[server(GetProduct, "/api")]
pub async fn get_product(id: ProductId) -> Result<Option<Product>, ServerFnError> {
    use crate::web_app::api::catalog;

    let product = catalog::find_product(id).cloned();
    if product.is_none() {
        tracing::warn!("Product {} not found", id);
    }
    Ok(product)
}
