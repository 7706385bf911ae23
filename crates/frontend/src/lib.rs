pub mod app;
pub mod domain;
pub mod shared;

use crate::domain::a001_product::ui::calculator::bind_calculator;
use crate::domain::a001_product::ui::stock_badges::update_stock_badges;
use crate::shared::alerts::{auto_dismiss_rendered_alerts, AlertService, AlertTiming};
use crate::shared::animations::animate_cards;
use crate::shared::config::PageConfig;
use crate::shared::confirm_delete::bind_delete_confirmation;
use crate::shared::dom_utils::{document, when_ready};
use crate::shared::form_validation::bind_form_validation;
use crate::shared::preferences::DarkModePreference;
use crate::shared::table_utils::enhance_data_tables;
use crate::app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(doc) = document() else {
        log::warn!("no document, page enhancements skipped");
        return;
    };
    let ready_doc = doc.clone();
    when_ready(&doc, move || init_page(&ready_doc));
}

fn init_page(doc: &web_sys::Document) {
    let config = PageConfig::from_document(doc);
    let timing = AlertTiming::from(&config);
    let alerts = AlertService::new(timing);

    let rendered_alerts = auto_dismiss_rendered_alerts(doc, timing);

    let dark_mode = DarkModePreference::new(config.dark_mode_storage_key.clone());
    dark_mode.load_user_preferences(doc);
    let toggles = dark_mode.bind_toggles(doc);

    let forms = bind_form_validation(doc, alerts);
    let calculator = bind_calculator(doc, &config, alerts).is_some();
    let tables = enhance_data_tables(doc, &config.data_table_selector);
    let badges = update_stock_badges(doc, &config.stock);
    let cards = animate_cards(doc, config.card_stagger_ms);
    bind_delete_confirmation(doc, config.delete_labels.clone());

    log::info!(
        "page ready: {} forms, calculator {}, {} tables, {} badges, {} cards, {} alerts, {} dark-mode toggles",
        forms,
        if calculator { "on" } else { "off" },
        tables,
        badges,
        cards,
        rendered_alerts,
        toggles
    );

    leptos::mount::mount_to_body(move || view! { <App alerts=alerts /> });
}

/// Переключить тёмную тему из инлайнового скрипта страницы.
#[wasm_bindgen]
pub fn toggle_dark_mode() -> bool {
    let Some(doc) = document() else {
        return false;
    };
    let config = PageConfig::from_document(&doc);
    DarkModePreference::new(config.dark_mode_storage_key).toggle(&doc)
}
