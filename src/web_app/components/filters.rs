// web_app/components/filters.rs - Filter sidebar components
//
// The sidebar has three collapsible sections:
// - CollectionList: collection names with product counts
// - AvailabilityList: in-stock / out-of-stock counts
// - PriceRangeInputs: min/max inputs and a range slider
//
// The controls are display only. Nothing here narrows the product grid.

use leptos::prelude::*;

use super::common::ChevronIcon;
use crate::web_app::listing::{availability_counts, collection_entries};
use crate::web_app::model::{
    AvailabilityCounts, CollectionEntry, FilterPanels, Panel, Product, PRICE_RANGE_MAX,
    PRICE_RANGE_MIN,
};

/// Collapsible section with a heading button
#[component]
pub fn FilterSection(
    /// Which panel this section represents
    panel: Panel,
    /// Visibility of all panels (owned by the page)
    panels: RwSignal<FilterPanels>,
    /// Body, rendered only while expanded
    children: ChildrenFn,
) -> impl IntoView {
    let open = Signal::derive(move || panels.with(|p| p.is_expanded(panel)));
    let wrapper_class = if panel == Panel::Price {
        "pb-6"
    } else {
        "border-b border-gray-200 pb-6"
    };

    view! {
        <div class=wrapper_class data-panel=panel.to_string()>
            <button
                type="button"
                class="flex items-center justify-between w-full text-left"
                on:click=move |_| panels.update(|p| p.toggle(panel))
            >
                <h4 class="text-sm font-medium text-gray-900">{panel.heading()}</h4>
                <ChevronIcon open=open />
            </button>

            <Show when=move || open.get()>
                {children()}
            </Show>
        </div>
    }
}

/// Collection names with counts
#[component]
pub fn CollectionList(
    #[prop(into)]
    entries: Signal<Vec<CollectionEntry>>,
) -> impl IntoView {
    view! {
        <div class="mt-4 space-y-3">
            <For
                each=move || entries.get()
                key=|entry| entry.name.clone()
                children=move |entry| {
                    view! {
                        <div class="flex items-center justify-between">
                            <label class="flex items-center">
                                <input type="radio" name="collection" class="sr-only" />
                                <span class="text-sm text-gray-600 hover:text-brand cursor-pointer">
                                    {entry.name}
                                </span>
                            </label>
                            <span class="text-sm text-gray-400">{format!("({})", entry.count)}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// In-stock / out-of-stock checkboxes with counts
#[component]
pub fn AvailabilityList(
    #[prop(into)]
    counts: Signal<AvailabilityCounts>,
) -> impl IntoView {
    view! {
        <div class="mt-4 space-y-3">
            <label class="flex items-center">
                <input type="checkbox" class="mr-3" />
                <span class="text-sm text-gray-600">{move || counts.get().in_stock_label()}</span>
            </label>
            <label class="flex items-center">
                <input type="checkbox" class="mr-3" />
                <span class="text-sm text-gray-600">{move || counts.get().out_of_stock_label()}</span>
            </label>
        </div>
    }
}

/// Min/max price inputs and range slider
#[component]
pub fn PriceRangeInputs() -> impl IntoView {
    view! {
        <div class="mt-4">
            <div class="flex items-center space-x-4 mb-4">
                <div class="flex items-center">
                    <span class="text-sm text-gray-600 mr-2">"₹"</span>
                    <input
                        type="number"
                        placeholder="0"
                        class="w-20 px-2 py-1 border border-gray-300 rounded text-sm"
                    />
                </div>
                <div class="flex items-center">
                    <span class="text-sm text-gray-600 mr-2">"₹"</span>
                    <input
                        type="number"
                        placeholder="999.00"
                        class="w-24 px-2 py-1 border border-gray-300 rounded text-sm"
                    />
                </div>
            </div>
            <div class="relative">
                <input
                    type="range"
                    min=PRICE_RANGE_MIN.to_string()
                    max=PRICE_RANGE_MAX.to_string()
                    class="w-full h-2 bg-gray-200 rounded-lg appearance-none cursor-pointer"
                />
            </div>
        </div>
    }
}

/// Complete filter sidebar
///
/// Counts are computed over the whole catalog.
#[component]
pub fn FilterSidebar(
    /// Full catalog
    #[prop(into)]
    catalog: Signal<Vec<Product>>,
    /// Panel visibility
    panels: RwSignal<FilterPanels>,
) -> impl IntoView {
    let entries = Signal::derive(move || catalog.with(|c| collection_entries(c)));
    let counts = Signal::derive(move || catalog.with(|c| availability_counts(c)));

    view! {
        <aside class="w-full lg:w-1/4 space-y-6">
            <div>
                <h3 class="text-lg font-medium text-gray-900 mb-4">"FILTER:"</h3>
            </div>

            <FilterSection panel=Panel::Collection panels=panels>
                <CollectionList entries=entries />
            </FilterSection>

            <FilterSection panel=Panel::Availability panels=panels>
                <AvailabilityList counts=counts />
            </FilterSection>

            <FilterSection panel=Panel::Price panels=panels>
                <PriceRangeInputs />
            </FilterSection>
        </aside>
    }
}
