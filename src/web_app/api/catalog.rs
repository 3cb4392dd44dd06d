// web_app/api/catalog.rs - Process-wide product catalog
//
// The catalog is loaded once at startup and read by server functions.
// It never changes afterwards, so a OnceLock is all the sharing we need.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use crate::fixtures::sample_catalog;
use crate::web_app::model::{Product, ProductId};

static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();
static SAMPLE: OnceLock<Vec<Product>> = OnceLock::new();

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no products")]
    Empty,
    #[error("duplicate product id {0} in catalog")]
    DuplicateId(ProductId),
}

/// Accepted catalog file layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { products: Vec<Product> },
    Bare(Vec<Product>),
}

/// Initialize the global catalog
pub fn init_catalog(products: Vec<Product>) {
    let count = products.len();
    if CATALOG.set(products).is_err() {
        tracing::warn!("Catalog already initialized, ignoring {} products", count);
    } else {
        tracing::info!("Catalog initialized with {} products", count);
    }
}

/// Get the global catalog, or the built-in sample when none was initialized
pub fn catalog() -> &'static [Product] {
    match CATALOG.get() {
        Some(products) => products,
        None => {
            tracing::debug!("Catalog not initialized, serving sample catalog");
            SAMPLE.get_or_init(sample_catalog)
        }
    }
}

/// Look up one product by id
pub fn find_product(id: ProductId) -> Option<&'static Product> {
    catalog().iter().find(|p| p.id == id)
}

/// Parse and validate catalog JSON
///
/// Accepts either a bare array of products or `{ "products": [...] }`.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    let products = match serde_json::from_str::<CatalogFile>(json)? {
        CatalogFile::Wrapped { products } | CatalogFile::Bare(products) => products,
    };
    validate(&products)?;
    Ok(products)
}

/// Read a catalog file from disk
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Product>, CatalogError> {
    let path = path.as_ref();
    tracing::info!("Loading catalog from {}", path.display());

    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&json)
}

fn validate(products: &[Product]) -> Result<(), CatalogError> {
    if products.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 100, "image": "/a.jpg"},
            {"id": 2, "name": "B", "price": 200, "image": "/b.jpg", "soldOut": true}
        ]"#;
        let products = parse_catalog(json).unwrap();
        assert_eq!(products.len(), 2);
        assert!(products[1].sold_out);
    }

    #[test]
    fn test_parse_wrapped_object() {
        let json = r#"{"products": [{"id": 9, "name": "C", "price": 300, "image": "/c.jpg"}]}"#;
        let products = parse_catalog(json).unwrap();
        assert_eq!(products[0].id, 9);
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 100, "image": "/a.jpg"},
            {"id": 1, "name": "A again", "price": 150, "image": "/a2.jpg"}
        ]"#;
        assert!(matches!(parse_catalog(json), Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(parse_catalog("[]"), Err(CatalogError::Empty)));
        assert!(matches!(parse_catalog(r#"{"products": []}"#), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_catalog("not json"), Err(CatalogError::Parse(_))));
    }
}
