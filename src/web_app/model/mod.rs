// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between the catalog service, the store and the views.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier (unique and stable within a catalog)
pub type ProductId = u32;

/// Lowest value of the (inert) price range slider
pub const PRICE_RANGE_MIN: u32 = 0;
/// Highest value of the (inert) price range slider
pub const PRICE_RANGE_MAX: u32 = 2000;

/// Product from the catalog
///
/// Field names are camelCase on the wire so catalog files written for the
/// storefront frontend load unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    /// Pre-markdown price; present only for discounted products
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub image: String,
    #[serde(default)]
    pub sold_out: bool,
    #[serde(default)]
    pub sale: bool,
}

impl Product {
    /// Route of the product detail page
    pub fn detail_href(&self) -> String {
        format!("/product/{}", self.id)
    }
}

/// One line in the cart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// The three collapsible filter sections of the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    Collection,
    Availability,
    Price,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Collection, Panel::Availability, Panel::Price];

    /// Heading shown on the panel toggle button
    pub fn heading(self) -> &'static str {
        match self {
            Panel::Collection => "COLLECTION",
            Panel::Availability => "AVAILABILITY",
            Panel::Price => "PRICE",
        }
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Panel::Collection => write!(f, "Collection"),
            Panel::Availability => write!(f, "Availability"),
            Panel::Price => write!(f, "Price"),
        }
    }
}

/// Visibility of a single filter panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Collapsed => PanelState::Expanded,
            PanelState::Expanded => PanelState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == PanelState::Expanded
    }
}

/// Visibility of all sidebar panels. Owned by the listing view, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterPanels {
    pub collection: PanelState,
    pub availability: PanelState,
    pub price: PanelState,
}

impl FilterPanels {
    pub fn state(&self, panel: Panel) -> PanelState {
        match panel {
            Panel::Collection => self.collection,
            Panel::Availability => self.availability,
            Panel::Price => self.price,
        }
    }

    pub fn is_expanded(&self, panel: Panel) -> bool {
        self.state(panel).is_expanded()
    }

    /// Flip one panel; the other two are untouched
    pub fn toggle(&mut self, panel: Panel) {
        let slot = match panel {
            Panel::Collection => &mut self.collection,
            Panel::Availability => &mut self.availability,
            Panel::Price => &mut self.price,
        };
        *slot = slot.toggled();
    }
}

/// Entry in the collection filter list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub name: String,
    pub count: usize,
}

/// In-stock / out-of-stock tallies for the availability filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityCounts {
    pub in_stock: usize,
    pub out_of_stock: usize,
}

impl AvailabilityCounts {
    pub fn in_stock_label(&self) -> String {
        format!("In stock ({})", self.in_stock)
    }

    pub fn out_of_stock_label(&self) -> String {
        format!("Out of stock ({})", self.out_of_stock)
    }
}

/// Format a price as rupees with thousands grouping, e.g. `Rs. 1,299.00`
pub fn format_rupees(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("Rs. {sign}{grouped}.{fraction}")
}
