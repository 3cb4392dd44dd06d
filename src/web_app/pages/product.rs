// web_app/pages/product.rs - Product detail page
//
// Target of the links in the listing grid: /product/:id

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::web_app::components::*;
use crate::web_app::model::ProductId;
use crate::web_app::server_fns::get_product;
use crate::web_app::store::use_store;

/// Parse the `:id` route segment
pub fn parse_product_id(raw: &str) -> Option<ProductId> {
    raw.trim().parse().ok()
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let store = use_store();
    let params = use_params_map();
    let product_id = move || params.with(|p| p.get("id")).as_deref().and_then(parse_product_id);

    let product = Resource::new(product_id, |id| async move {
        match id {
            Some(id) => get_product(id).await,
            None => Ok(None),
        }
    });

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <a href="/collections/all" class="text-sm text-gray-500 hover:text-brand">"← Back to all products"</a>
            <div class="mt-6">
                <Suspense fallback=move || view! { <Loading message="Loading product..." /> }>
                    {move || match product.get() {
                        None => view! { <Loading message="Loading product..." /> }.into_any(),
                        Some(Err(e)) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                        Some(Ok(None)) => view! {
                            <div class="text-center py-16">
                                <h2 class="text-2xl font-medium text-gray-900 mb-2">"Product not found"</h2>
                                <p class="text-gray-500">"This product is no longer available."</p>
                            </div>
                        }.into_any(),
                        Some(Ok(Some(p))) => view! { <ProductDetail product=p store=store /> }.into_any(),
                    }}
                </Suspense>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_product_id;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("12"), Some(12));
        assert_eq!(parse_product_id(" 7 "), Some(7));
        assert_eq!(parse_product_id("abc"), None);
        assert_eq!(parse_product_id("-1"), None);
        assert_eq!(parse_product_id(""), None);
    }
}
