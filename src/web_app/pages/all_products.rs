// web_app/pages/all_products.rs - Product listing page
//
// Composes the filter sidebar, the product grid and the pagination row.
// Owns the panel visibility state; the wishlist/cart store comes from context.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::{FilterPanels, Product};
use crate::web_app::server_fns::list_products;
use crate::web_app::store::use_store;

/// All products page
///
/// The grid always shows the full catalog; sidebar selections are not applied.
#[component]
pub fn AllProductsPage() -> impl IntoView {
    let store = use_store();

    // Fresh on every mount: all panels collapsed
    let panels = RwSignal::new(FilterPanels::default());

    let catalog = Resource::new(|| (), |_| list_products());

    let products = Signal::derive(move || {
        catalog
            .get()
            .and_then(|r: Result<Vec<Product>, ServerFnError>| r.ok())
            .unwrap_or_default()
    });

    view! {
        <div class="min-h-screen bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <Suspense fallback=move || view! { <Loading message="Loading products..." /> }>
                    {move || match catalog.get() {
                        None => view! { <Loading message="Loading products..." /> }.into_any(),
                        Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                        Some(Ok(_)) => view! {
                            <div class="flex flex-col lg:flex-row gap-8">
                                <FilterSidebar catalog=products panels=panels />

                                <section class="w-full lg:w-3/4">
                                    <ProductGrid products=products store=store />
                                    <Pagination />
                                </section>
                            </div>
                        }.into_any(),
                    }}
                </Suspense>
            </div>
        </div>
    }
}
