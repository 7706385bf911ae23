//! Бейджи остатка: `<span class="badge" data-stock="7">7</span>`.

use crate::shared::dom_utils::{query_document, toggle_class};
use crate::shared::number_parse::parse_int_prefix;
use contracts::shared::stock::{StockLevel, StockThresholds};
use web_sys::Document;

/// Level for a raw `data-stock` value; `None` leaves the badge untouched.
pub fn badge_level(raw: &str, thresholds: &StockThresholds) -> Option<StockLevel> {
    parse_int_prefix(raw).map(|stock| thresholds.classify(stock))
}

/// Раскрашивает все `[data-stock]`. Возвращает количество обновлённых бейджей.
pub fn update_stock_badges(document: &Document, thresholds: &StockThresholds) -> usize {
    let mut updated = 0;
    for element in query_document(document, "[data-stock]") {
        let raw = element.get_attribute("data-stock").unwrap_or_default();
        let Some(level) = badge_level(&raw, thresholds) else {
            continue;
        };
        for candidate in StockLevel::all() {
            toggle_class(&element, candidate.badge_class(), candidate == level);
        }
        updated += 1;
    }
    updated
}
