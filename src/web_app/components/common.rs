// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-black"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Error Occurred"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Corner marker on a product image ("Sale", "Sold Out")
#[component]
pub fn Marker(
    children: Children,
    /// Marker color variant
    #[prop(default = "brand")]
    variant: &'static str,
    /// Placement classes
    #[prop(default = "top-4 left-4")]
    position: &'static str,
) -> impl IntoView {
    view! {
        <div class=marker_class(variant, position)>
            {children()}
        </div>
    }
}

fn marker_class(variant: &str, position: &str) -> String {
    let color = match variant {
        "red" => "bg-red-500",
        _ => "bg-brand",
    };
    format!("absolute {} {} text-white px-3 py-1 text-sm font-medium rounded z-10", position, color)
}

/// Heart icon; filled when `filled` is true
#[component]
pub fn HeartIcon(
    #[prop(into)]
    filled: Signal<bool>,
) -> impl IntoView {
    view! {
        <svg
            class=move || {
                if filled.get() {
                    "h-4 w-4 transition-colors text-red-500 fill-current"
                } else {
                    "h-4 w-4 transition-colors text-gray-600 hover:text-red-500"
                }
            }
            data-filled=move || filled.get().to_string()
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            viewBox="0 0 24 24"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M20.8 4.6a5.5 5.5 0 0 0-7.8 0L12 5.7l-1-1.1a5.5 5.5 0 0 0-7.8 7.8l1 1.1L12 21l7.8-7.5 1-1.1a5.5 5.5 0 0 0 0-7.8z"
            ></path>
        </svg>
    }
}

/// Chevron rotated when its panel is open
#[component]
pub fn ChevronIcon(
    #[prop(into)]
    open: Signal<bool>,
) -> impl IntoView {
    view! {
        <svg
            class=move || {
                if open.get() {
                    "h-4 w-4 transform transition-transform rotate-180"
                } else {
                    "h-4 w-4 transform transition-transform"
                }
            }
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            viewBox="0 0 24 24"
        >
            <path stroke-linecap="round" stroke-linejoin="round" d="M6 9l6 6 6-6"></path>
        </svg>
    }
}

#[component]
pub fn ShoppingBagIcon() -> impl IntoView {
    view! {
        <svg class="h-4 w-4" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M6 2L3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4zM3 6h18M16 10a4 4 0 0 1-8 0"
            ></path>
        </svg>
    }
}

/// Price with optional struck-through original price
#[component]
pub fn PriceDisplay(
    /// Formatted current price
    price: String,
    /// Formatted original price (marked-down products only)
    #[prop(optional_no_strip)]
    original_price: Option<String>,
    /// Larger type for detail pages
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-2xl font-bold text-gray-900"
    } else {
        "text-lg font-bold text-gray-900"
    };

    view! {
        <div class="flex items-center justify-center space-x-2">
            <span class=class>{price}</span>
            {original_price.map(|original| view! {
                <span class="text-sm text-gray-500 line-through">{original}</span>
            })}
        </div>
    }
}

/// Pagination buttons
///
/// Static: page 1 is always shown as current and the buttons do nothing.
#[component]
pub fn Pagination() -> impl IntoView {
    let active = "px-4 py-2 bg-black text-white rounded hover:bg-gray-800 transition-colors";
    let inactive = "px-4 py-2 bg-gray-200 text-gray-700 rounded hover:bg-gray-300 transition-colors";

    view! {
        <nav class="flex items-center justify-center space-x-2 mt-12">
            <button type="button" class=active>"1"</button>
            <button type="button" class=inactive>"2"</button>
            <button type="button" class=inactive>"→"</button>
        </nav>
    }
}
