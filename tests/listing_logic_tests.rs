// tests/listing_logic_tests.rs - Listing page behaviour without a reactive runtime
//
// Covers the decisions the listing view makes:
// - wishlist toggle intents and their effect once applied by the store
// - which controls and markers a product cell shows
// - filter sidebar counts
// - panel visibility toggling

use rust_decimal::Decimal;
use storefront_listing::fixtures::{sample_catalog, ProductBuilder};
use storefront_listing::web_app::listing::{
    add_to_cart_intent, availability_counts, collection_entries, wishlist_toggle_intent,
    ProductCellModel,
};
use storefront_listing::web_app::model::{FilterPanels, Panel, PanelState, Product};
use storefront_listing::web_app::store::{StoreAction, StoreState};

/// What the view does on a heart click: build the intent from the
/// current snapshot, then let the store apply it
fn click_heart(state: &mut StoreState, product: &Product) {
    let intent = wishlist_toggle_intent(&state.wishlist, product);
    state.apply(intent);
}

fn wishlist_ids(state: &StoreState) -> Vec<u32> {
    state.wishlist.iter().map(|p| p.id).collect()
}

// ===== Wishlist toggle =====

#[test]
fn test_toggle_twice_scenario() {
    let product = ProductBuilder::new(1, "Handwoven Cotton Saree", 1299).build();
    let mut state = StoreState::default();

    click_heart(&mut state, &product);
    assert_eq!(state.wishlist, vec![product.clone()]);

    click_heart(&mut state, &product);
    assert!(state.wishlist.is_empty());
}

#[test]
fn test_toggle_is_involution_for_every_catalog_product() {
    let catalog = sample_catalog();
    let mut state = StoreState::default();
    // Seed a few members so both branches are exercised
    click_heart(&mut state, &catalog[1]);
    click_heart(&mut state, &catalog[4]);

    for product in &catalog {
        let before = wishlist_ids(&state);
        let was_member = state.is_wishlisted(product.id);

        click_heart(&mut state, product);
        assert_eq!(
            state.is_wishlisted(product.id),
            !was_member,
            "membership of {} should flip",
            product.id
        );

        click_heart(&mut state, product);
        let mut after = wishlist_ids(&state);
        let mut expected = before.clone();
        after.sort_unstable();
        expected.sort_unstable();
        assert_eq!(after, expected, "second toggle of {} restores the set", product.id);
    }
}

#[test]
fn test_toggle_matches_by_id_not_by_value() {
    // A stale copy of the product (different price) still counts as a member
    let listed = ProductBuilder::new(9, "Linen Nehru Jacket", 1599).build();
    let mut stale = listed.clone();
    stale.price = Decimal::from(1799);

    assert_eq!(
        wishlist_toggle_intent(&[stale], &listed),
        StoreAction::RemoveFromWishlist(9)
    );
}

#[test]
fn test_add_to_cart_intent_carries_full_product() {
    let product = ProductBuilder::new(2, "Block Print Kurta", 899).build();
    assert_eq!(add_to_cart_intent(&product), StoreAction::AddToCart(product.clone()));
}

// ===== Operation independence =====

#[test]
fn test_toggle_never_changes_cart() {
    let catalog = sample_catalog();
    let mut state = StoreState::default();
    state.apply(add_to_cart_intent(&catalog[0]));
    state.apply(add_to_cart_intent(&catalog[1]));
    let cart_before = state.cart.clone();

    for product in &catalog {
        click_heart(&mut state, product);
        assert_eq!(state.cart, cart_before);
    }
}

#[test]
fn test_add_to_cart_never_changes_wishlist() {
    let catalog = sample_catalog();
    let mut state = StoreState::default();
    click_heart(&mut state, &catalog[2]);
    let wishlist_before = state.wishlist.clone();

    for product in &catalog {
        state.apply(add_to_cart_intent(product));
        assert_eq!(state.wishlist, wishlist_before);
    }
}

// ===== Cell rendering rules =====

#[test]
fn test_add_to_cart_offered_iff_not_sold_out() {
    for product in sample_catalog() {
        let cell = ProductCellModel::new(&product, &[]);
        assert_eq!(
            cell.offers_add_to_cart,
            !product.sold_out,
            "product {} ({})",
            product.id,
            product.name
        );
    }
}

#[test]
fn test_sold_out_sale_product_scenario() {
    let product = ProductBuilder::new(2, "Clearance Shawl", 799).sale(true).sold_out().build();
    let cell = ProductCellModel::new(&product, &[]);

    assert!(cell.show_sale_marker);
    assert!(cell.show_sold_out_marker);
    assert!(!cell.offers_add_to_cart);
}

#[test]
fn test_markers_follow_flags_independently() {
    let cases = [(false, false), (true, false), (false, true), (true, true)];
    for (sale, sold_out) in cases {
        let mut builder = ProductBuilder::new(1, "P", 100).sale(sale);
        if sold_out {
            builder = builder.sold_out();
        }
        let cell = ProductCellModel::new(&builder.build(), &[]);
        assert_eq!(cell.show_sale_marker, sale);
        assert_eq!(cell.show_sold_out_marker, sold_out);
    }
}

#[test]
fn test_wishlist_state_recomputed_from_current_membership() {
    let product = ProductBuilder::new(11, "Khadi Shirt", 999).build();
    let mut state = StoreState::default();
    assert!(!ProductCellModel::new(&product, &state.wishlist).wishlisted);

    click_heart(&mut state, &product);
    assert!(ProductCellModel::new(&product, &state.wishlist).wishlisted);

    click_heart(&mut state, &product);
    assert!(!ProductCellModel::new(&product, &state.wishlist).wishlisted);
}

#[test]
fn test_original_price_shown_only_when_present() {
    for product in sample_catalog() {
        let cell = ProductCellModel::new(&product, &[]);
        assert_eq!(cell.original_price_label.is_some(), product.original_price.is_some());
    }
}

// ===== Filter sidebar counts =====

#[test]
fn test_availability_counts_scenario() {
    let catalog: Vec<Product> = (1..=5)
        .map(|id| {
            let builder = ProductBuilder::new(id, format!("Item {}", id), 500);
            let builder = if id % 2 == 0 { builder.sold_out() } else { builder };
            builder.build()
        })
        .collect();

    let counts = availability_counts(&catalog);
    assert_eq!(counts.in_stock_label(), "In stock (3)");
    assert_eq!(counts.out_of_stock_label(), "Out of stock (2)");
}

#[test]
fn test_collection_counts_use_full_catalog() {
    let catalog = sample_catalog();
    let entries = collection_entries(&catalog);
    let all = entries.iter().find(|e| e.name == "All Products").unwrap();
    assert_eq!(all.count, catalog.len());
    let home = entries.iter().find(|e| e.name == "Home").unwrap();
    assert_eq!(home.count, 0);
}

// ===== Panel visibility =====

#[test]
fn test_panels_toggle_independently() {
    let mut panels = FilterPanels::default();

    panels.toggle(Panel::Price);
    assert_eq!(panels.price, PanelState::Expanded);
    assert_eq!(panels.collection, PanelState::Collapsed);
    assert_eq!(panels.availability, PanelState::Collapsed);

    panels.toggle(Panel::Collection);
    panels.toggle(Panel::Price);
    assert_eq!(panels.price, PanelState::Collapsed);
    assert_eq!(panels.collection, PanelState::Expanded);
    assert_eq!(panels.availability, PanelState::Collapsed);
}

#[test]
fn test_panel_toggles_indefinitely() {
    let mut panels = FilterPanels::default();
    for i in 1..=10 {
        panels.toggle(Panel::Availability);
        assert_eq!(panels.is_expanded(Panel::Availability), i % 2 == 1);
    }
}
