// web_app/store/mod.rs - Shared wishlist/cart store
//
// The store is a single-writer reducer: views never touch the collections
// directly, they send a `StoreAction` and the store applies it.
//
// - StoreState / StoreAction: pure data + reducer (no Leptos needed)
// - handle.rs: reactive `Store` wrapper with dispatch and a read-only snapshot

use serde::{Deserialize, Serialize};

use crate::web_app::model::{CartLine, Product, ProductId};

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod handle;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use handle::{provide_store, use_store, Store};

/// Mutation intent sent to the store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StoreAction {
    AddToWishlist(Product),
    RemoveFromWishlist(ProductId),
    AddToCart(Product),
    RemoveFromCart(ProductId),
}

impl StoreAction {
    /// Identifier of the product the intent refers to
    pub fn product_id(&self) -> ProductId {
        match self {
            StoreAction::AddToWishlist(product) | StoreAction::AddToCart(product) => product.id,
            StoreAction::RemoveFromWishlist(id) | StoreAction::RemoveFromCart(id) => *id,
        }
    }
}

impl std::fmt::Display for StoreAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreAction::AddToWishlist(p) => write!(f, "ADD_TO_WISHLIST({})", p.id),
            StoreAction::RemoveFromWishlist(id) => write!(f, "REMOVE_FROM_WISHLIST({})", id),
            StoreAction::AddToCart(p) => write!(f, "ADD_TO_CART({})", p.id),
            StoreAction::RemoveFromCart(id) => write!(f, "REMOVE_FROM_CART({})", id),
        }
    }
}

/// Wishlist and cart contents
///
/// Both collections keep insertion order and hold each product id at most once.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    pub wishlist: Vec<Product>,
    pub cart: Vec<CartLine>,
}

impl StoreState {
    /// Apply one intent
    ///
    /// Duplicate wishlist inserts are ignored; duplicate cart inserts bump the
    /// line quantity. Removing an absent id is a no-op.
    pub fn apply(&mut self, action: StoreAction) {
        match action {
            StoreAction::AddToWishlist(product) => {
                if !self.is_wishlisted(product.id) {
                    self.wishlist.push(product);
                }
            }
            StoreAction::RemoveFromWishlist(id) => {
                self.wishlist.retain(|item| item.id != id);
            }
            StoreAction::AddToCart(product) => {
                match self.cart.iter_mut().find(|line| line.product.id == product.id) {
                    Some(line) => line.quantity = line.quantity.saturating_add(1),
                    None => self.cart.push(CartLine { product, quantity: 1 }),
                }
            }
            StoreAction::RemoveFromCart(id) => {
                self.cart.retain(|line| line.product.id != id);
            }
        }
    }

    pub fn is_wishlisted(&self, id: ProductId) -> bool {
        self.wishlist.iter().any(|item| item.id == id)
    }

    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    /// Quantity of a product in the cart (0 when absent)
    pub fn cart_quantity(&self, id: ProductId) -> u32 {
        self.cart
            .iter()
            .find(|line| line.product.id == id)
            .map_or(0, |line| line.quantity)
    }

    /// Total units across all cart lines
    pub fn cart_item_count(&self) -> u32 {
        self.cart.iter().map(|line| line.quantity).sum()
    }
}
