// web_app/components/header.rs - Site header
//
// Shows the wishlist and cart counts so store changes are visible from
// every page.

use leptos::prelude::*;

use crate::web_app::store::Store;

/// Top bar with store name and wishlist/cart counters
#[component]
pub fn SiteHeader(
    /// Shared wishlist/cart store
    store: Store,
) -> impl IntoView {
    let state = store.state();
    let wishlist_count = move || state.with(|s| s.wishlist_count());
    let cart_count = move || state.with(|s| s.cart_item_count());

    view! {
        <header class="bg-white border-b border-gray-200 sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="/" class="text-xl font-bold tracking-wide text-gray-900">"STOREFRONT"</a>
                <nav class="flex items-center gap-6 text-sm text-gray-700">
                    <a href="/collections/all" class="hover:text-brand transition-colors">"All Products"</a>
                    <span data-counter="wishlist">"Wishlist (" {wishlist_count} ")"</span>
                    <span data-counter="cart">"Cart (" {cart_count} ")"</span>
                </nav>
            </div>
        </header>
    }
}
