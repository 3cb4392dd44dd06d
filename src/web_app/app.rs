// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the shared wishlist/cart store, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::SiteHeader;
use crate::web_app::pages::{AllProductsPage, ProductPage};
use crate::web_app::store::provide_store;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The shared store (one per app instance)
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    let store = provide_store();

    view! {
        <Title text="All Products" />
        <Meta name="description" content="Browse the full storefront catalog" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/storefront_listing.css" />

        <Router>
            <SiteHeader store=store />
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=AllProductsPage />
                    <Route path=path!("/collections/all") view=AllProductsPage />
                    <Route path=path!("/product/:id") view=ProductPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/collections/all"
                    class="px-6 py-3 bg-black text-white rounded-lg hover:bg-gray-800 transition-colors"
                >
                    "Continue shopping"
                </a>
            </div>
        </div>
    }
}
