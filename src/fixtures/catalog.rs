// fixtures/catalog.rs
//
// The built-in storefront catalog. The server falls back to it when no
// CATALOG_PATH is configured, and tests use it as realistic data.

use rust_decimal::Decimal;

use crate::web_app::model::Product;

/// Builder for catalog products with storefront defaults
///
/// Defaults: in stock, not on sale, no original price, image derived from id.
#[derive(Clone, Debug)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    pub fn new(id: u32, name: impl Into<String>, price: i64) -> Self {
        Self {
            product: Product {
                id,
                name: name.into(),
                price: Decimal::from(price),
                original_price: None,
                image: format!("/images/products/{}.jpg", id),
                sold_out: false,
                sale: false,
            },
        }
    }

    /// Mark down from `original`; sets the sale flag too
    pub fn marked_down_from(mut self, original: i64) -> Self {
        self.product.original_price = Some(Decimal::from(original));
        self.product.sale = true;
        self
    }

    pub fn sale(mut self, sale: bool) -> Self {
        self.product.sale = sale;
        self
    }

    pub fn sold_out(mut self) -> Self {
        self.product.sold_out = true;
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.product.image = image.into();
        self
    }

    pub fn build(self) -> Product {
        self.product
    }
}

/// Sample catalog shown when nothing else is configured
pub fn sample_catalog() -> Vec<Product> {
    vec![
        ProductBuilder::new(1, "Handwoven Cotton Saree", 1299)
            .marked_down_from(1999)
            .build(),
        ProductBuilder::new(2, "Block Print Kurta", 899).build(),
        ProductBuilder::new(3, "Embroidered Dupatta", 649)
            .marked_down_from(799)
            .sold_out()
            .build(),
        ProductBuilder::new(4, "Silk Blend Lehenga", 1899).build(),
        ProductBuilder::new(5, "Chanderi Palazzo Set", 1149)
            .marked_down_from(1499)
            .build(),
        ProductBuilder::new(6, "Kalamkari Stole", 499).sold_out().build(),
        ProductBuilder::new(7, "Ikat Wrap Dress", 1349).build(),
        ProductBuilder::new(8, "Bandhani Scarf", 399)
            .marked_down_from(549)
            .build(),
        ProductBuilder::new(9, "Linen Nehru Jacket", 1599).build(),
        ProductBuilder::new(10, "Mirror Work Clutch", 749).sold_out().build(),
        ProductBuilder::new(11, "Khadi Shirt", 999).build(),
        ProductBuilder::new(12, "Jute Tote Bag", 349)
            .marked_down_from(450)
            .build(),
    ]
}
