// lib.rs - Root module for the storefront_listing library
//
// The pure model, store reducer and listing logic build without features.
// `ssr` adds the server side (catalog service, config), `hydrate` the WASM
// client entry point.

/// Built-in catalog data and product builders
pub mod fixtures;

pub mod web_app;

#[cfg(feature = "ssr")]
pub mod config;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: hydrate the server-rendered page
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            tracing::debug!("Hydrating storefront");
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
