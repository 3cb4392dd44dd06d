// web_app/listing.rs - Listing page logic
//
// Everything the product listing decides, separated from the markup so it can
// be tested without a reactive runtime:
// - which intent a wishlist/cart click produces
// - what a product cell shows
// - the counts displayed in the filter sidebar

use crate::web_app::model::{
    format_rupees, AvailabilityCounts, CollectionEntry, Product,
};
use crate::web_app::store::StoreAction;

/// Intent for a click on the wishlist heart
///
/// Linear scan by id over the current wishlist: remove when present,
/// insert the full record otherwise.
pub fn wishlist_toggle_intent(wishlist: &[Product], product: &Product) -> StoreAction {
    if wishlist.iter().any(|item| item.id == product.id) {
        StoreAction::RemoveFromWishlist(product.id)
    } else {
        StoreAction::AddToWishlist(product.clone())
    }
}

/// Intent for a click on "Add to Cart". No duplicate check here.
pub fn add_to_cart_intent(product: &Product) -> StoreAction {
    StoreAction::AddToCart(product.clone())
}

/// Everything a product cell renders, derived from the product and the
/// current wishlist. Rebuilt on every render.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCellModel {
    pub show_sale_marker: bool,
    pub show_sold_out_marker: bool,
    pub wishlisted: bool,
    pub offers_add_to_cart: bool,
    pub price_label: String,
    /// Struck-through label, only for marked-down products
    pub original_price_label: Option<String>,
    pub detail_href: String,
}

impl ProductCellModel {
    pub fn new(product: &Product, wishlist: &[Product]) -> Self {
        Self {
            show_sale_marker: product.sale,
            show_sold_out_marker: product.sold_out,
            wishlisted: wishlist.iter().any(|item| item.id == product.id),
            offers_add_to_cart: !product.sold_out,
            price_label: format_rupees(product.price),
            original_price_label: product.original_price.map(format_rupees),
            detail_href: product.detail_href(),
        }
    }
}

/// In-stock vs sold-out counts over the whole catalog
pub fn availability_counts(catalog: &[Product]) -> AvailabilityCounts {
    let out_of_stock = catalog.iter().filter(|p| p.sold_out).count();
    AvailabilityCounts {
        in_stock: catalog.len() - out_of_stock,
        out_of_stock,
    }
}

/// Entries of the collection filter
pub fn collection_entries(catalog: &[Product]) -> Vec<CollectionEntry> {
    let total = catalog.len();
    [
        ("Home", 0),
        ("Shop By", total),
        ("All Products", total),
        ("Track Order", 0),
        ("Contact", 0),
    ]
    .into_iter()
    .map(|(name, count)| CollectionEntry {
        name: name.to_string(),
        count,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: u32, sold_out: bool, sale: bool) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price: Decimal::from(1299),
            original_price: None,
            image: String::new(),
            sold_out,
            sale,
        }
    }

    #[test]
    fn test_toggle_intent_adds_when_absent() {
        let p = product(1, false, false);
        assert_eq!(wishlist_toggle_intent(&[], &p), StoreAction::AddToWishlist(p.clone()));
    }

    #[test]
    fn test_toggle_intent_removes_when_present() {
        let p = product(1, false, false);
        let wishlist = vec![product(2, false, false), p.clone()];
        assert_eq!(wishlist_toggle_intent(&wishlist, &p), StoreAction::RemoveFromWishlist(1));
    }

    #[test]
    fn test_cell_model_markers() {
        let cell = ProductCellModel::new(&product(2, true, true), &[]);
        assert!(cell.show_sale_marker);
        assert!(cell.show_sold_out_marker);
        assert!(!cell.offers_add_to_cart);
        assert!(!cell.wishlisted);
        assert_eq!(cell.detail_href, "/product/2");
    }

    #[test]
    fn test_cell_model_original_price() {
        let mut p = product(3, false, true);
        assert!(ProductCellModel::new(&p, &[]).original_price_label.is_none());

        p.original_price = Some(Decimal::from(1999));
        let cell = ProductCellModel::new(&p, &[]);
        assert_eq!(cell.price_label, "Rs. 1,299.00");
        assert_eq!(cell.original_price_label.as_deref(), Some("Rs. 1,999.00"));
    }

    #[test]
    fn test_collection_entries_counts() {
        let catalog: Vec<_> = (1..=4).map(|id| product(id, false, false)).collect();
        let entries = collection_entries(&catalog);
        let pairs: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.count)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Home", 0),
                ("Shop By", 4),
                ("All Products", 4),
                ("Track Order", 0),
                ("Contact", 0),
            ]
        );
    }

    #[test]
    fn test_availability_counts_empty_catalog() {
        assert_eq!(availability_counts(&[]), AvailabilityCounts::default());
    }
}
