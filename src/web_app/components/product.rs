// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCell: Grid cell with markers, wishlist heart and add-to-cart
// - ProductGrid: Responsive grid over the whole catalog
// - ProductDetail: Single product view for the detail route
//
// Cells never touch the store contents; they dispatch intents.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::common::{HeartIcon, Marker, PriceDisplay, ShoppingBagIcon};
use crate::web_app::listing::{add_to_cart_intent, wishlist_toggle_intent, ProductCellModel};
use crate::web_app::model::Product;
use crate::web_app::store::Store;

/// Wishlist membership of one product, tracked against the store snapshot
fn wishlisted_signal(store: Store, product: &Product) -> Signal<bool> {
    let state = store.state();
    let id = product.id;
    Signal::derive(move || state.with(|s| s.is_wishlisted(id)))
}

/// Click handler that flips wishlist membership without following the enclosing link
fn wishlist_click(store: Store, product: Product) -> impl Fn(MouseEvent) + Clone + Send + Sync + 'static {
    move |ev: MouseEvent| {
        ev.prevent_default();
        let intent = store
            .state()
            .with_untracked(|s| wishlist_toggle_intent(&s.wishlist, &product));
        store.dispatch(intent);
    }
}

/// Click handler that requests a cart insert without following the enclosing link
fn add_to_cart_click(store: Store, product: Product) -> impl Fn(MouseEvent) + Clone + Send + Sync + 'static {
    move |ev: MouseEvent| {
        ev.prevent_default();
        store.dispatch(add_to_cart_intent(&product));
    }
}

/// Product cell for the listing grid
#[component]
pub fn ProductCell(
    /// The product to display
    product: Product,
    /// Shared wishlist/cart store
    store: Store,
) -> impl IntoView {
    let cell = ProductCellModel::new(&product, &[]);
    let wishlisted = wishlisted_signal(store, &product);
    let on_wishlist = wishlist_click(store, product.clone());
    let on_add_to_cart = add_to_cart_click(store, product.clone());

    view! {
        <div class="group cursor-pointer" data-product-id=product.id.to_string()>
            <a href=cell.detail_href.clone()>
                <div class="relative overflow-hidden rounded-lg bg-gray-100 aspect-square mb-4">
                    {cell.show_sale_marker.then(|| view! {
                        <Marker>"Sale"</Marker>
                    })}
                    {cell.show_sold_out_marker.then(|| view! {
                        <Marker variant="red" position="top-4 right-12">"Sold Out"</Marker>
                    })}

                    <button
                        type="button"
                        aria-label="Toggle wishlist"
                        class="absolute top-4 right-4 p-2 bg-white rounded-full shadow-md hover:shadow-lg transition-shadow z-10"
                        on:click=on_wishlist
                    >
                        <HeartIcon filled=wishlisted />
                    </button>

                    <img
                        src=product.image.clone()
                        alt=product.name.clone()
                        class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                    />

                    {cell.offers_add_to_cart.then(|| view! {
                        <button
                            type="button"
                            class="absolute bottom-4 left-1/2 transform -translate-x-1/2 bg-brand text-white \
                                   px-4 py-2 rounded-lg font-medium hover:bg-brand-hover transition-colors \
                                   opacity-0 group-hover:opacity-100 flex items-center space-x-2"
                            on:click=on_add_to_cart
                        >
                            <ShoppingBagIcon />
                            <span>"Add to Cart"</span>
                        </button>
                    })}
                </div>
            </a>

            <div class="text-center">
                <a href=cell.detail_href.clone()>
                    <h3 class="text-sm font-medium text-gray-900 mb-2 hover:text-brand transition-colors">
                        {product.name.clone()}
                    </h3>
                </a>
                <PriceDisplay
                    price=cell.price_label.clone()
                    original_price=cell.original_price_label.clone()
                />
            </div>
        </div>
    }
}

/// Product grid
///
/// Renders every product it is given; there is no filtering step.
#[component]
pub fn ProductGrid(
    /// Products in catalog order
    #[prop(into)]
    products: Signal<Vec<Product>>,
    /// Shared wishlist/cart store
    store: Store,
) -> impl IntoView {
    view! {
        <Show
            when=move || products.with(|p| !p.is_empty())
            fallback=|| view! {
                <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                    <h3 class="text-xl font-bold text-gray-900 mb-2">"No products yet"</h3>
                    <p class="text-gray-500 max-w-md mx-auto">"Check back soon for new arrivals."</p>
                </div>
            }
        >
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                <For
                    each=move || products.get()
                    key=|product| product.id
                    children=move |product| {
                        view! { <ProductCell product=product store=store /> }
                    }
                />
            </div>
        </Show>
    }
}

/// Product detail view
#[component]
pub fn ProductDetail(
    /// The product to display
    product: Product,
    /// Shared wishlist/cart store
    store: Store,
) -> impl IntoView {
    let cell = ProductCellModel::new(&product, &[]);
    let wishlisted = wishlisted_signal(store, &product);
    let on_wishlist = wishlist_click(store, product.clone());
    let on_add_to_cart = add_to_cart_click(store, product.clone());

    view! {
        <div class="flex flex-col md:flex-row gap-8" data-product-id=product.id.to_string()>
            <div class="relative w-full md:w-1/2 aspect-square overflow-hidden rounded-lg bg-gray-100">
                {cell.show_sale_marker.then(|| view! { <Marker>"Sale"</Marker> })}
                {cell.show_sold_out_marker.then(|| view! {
                    <Marker variant="red" position="top-4 right-4">"Sold Out"</Marker>
                })}
                <img
                    src=product.image.clone()
                    alt=product.name.clone()
                    class="w-full h-full object-cover"
                />
            </div>

            <div class="flex-1 space-y-6">
                <h1 class="text-3xl font-medium text-gray-900">{product.name.clone()}</h1>
                <PriceDisplay
                    price=cell.price_label.clone()
                    original_price=cell.original_price_label.clone()
                    highlight=true
                />

                <div class="flex items-center gap-4">
                    {if cell.offers_add_to_cart {
                        view! {
                            <button
                                type="button"
                                class="flex-1 bg-brand text-white px-6 py-3 rounded-lg font-medium \
                                       hover:bg-brand-hover transition-colors flex items-center justify-center space-x-2"
                                on:click=on_add_to_cart
                            >
                                <ShoppingBagIcon />
                                <span>"Add to Cart"</span>
                            </button>
                        }.into_any()
                    } else {
                        view! {
                            <span class="flex-1 text-center bg-gray-200 text-gray-500 px-6 py-3 rounded-lg font-medium">
                                "Sold Out"
                            </span>
                        }.into_any()
                    }}
                    <button
                        type="button"
                        aria-label="Toggle wishlist"
                        class="p-3 border border-gray-300 rounded-full hover:shadow-md transition-shadow"
                        on:click=on_wishlist
                    >
                        <HeartIcon filled=wishlisted />
                    </button>
                </div>
            </div>
        </div>
    }
}
