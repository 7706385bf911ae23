//! Page configuration.
//!
//! Defaults match the markup the server renders today. A page may override any
//! field with a JSON block:
//!
//! ```html
//! <script type="application/json" id="sales-page-config">
//!   { "currency_symbol": "€", "stock": { "low": 20 } }
//! </script>
//! ```

use contracts::shared::stock::StockThresholds;
use serde::{Deserialize, Serialize};
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "sales-page-config";

/// Element ids the line-item calculator binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorIds {
    pub product_select: String,
    pub quantity_input: String,
    pub price_display: String,
    pub stock_display: String,
    pub total_display: String,
}

impl Default for CalculatorIds {
    fn default() -> Self {
        Self {
            product_select: "id_producto".to_string(),
            quantity_input: "cantidad".to_string(),
            price_display: "precio-display".to_string(),
            stock_display: "stock-display".to_string(),
            total_display: "total-display".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Prefix for API calls; empty means same origin.
    pub api_base: String,
    pub product_endpoint: String,
    pub currency_symbol: String,
    pub alert_dismiss_ms: u32,
    pub alert_fade_ms: u32,
    pub card_stagger_ms: u32,
    pub dark_mode_storage_key: String,
    pub data_table_selector: String,
    /// Button captions that trigger the delete confirmation.
    pub delete_labels: Vec<String>,
    pub stock: StockThresholds,
    pub ids: CalculatorIds,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            product_endpoint: "/api/producto".to_string(),
            currency_symbol: "$".to_string(),
            alert_dismiss_ms: 5000,
            alert_fade_ms: 500,
            card_stagger_ms: 100,
            dark_mode_storage_key: "darkMode".to_string(),
            data_table_selector: ".data-table".to_string(),
            delete_labels: vec!["Eliminar".to_string(), "Delete".to_string()],
            stock: StockThresholds::default(),
            ids: CalculatorIds::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid page config: {}", e))
    }

    /// Reads the override block; falls back to defaults when it is absent or broken.
    pub fn from_document(document: &Document) -> Self {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let json = element.text_content().unwrap_or_default();
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}
