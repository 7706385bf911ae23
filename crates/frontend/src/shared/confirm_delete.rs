//! Подтверждение удаления для кнопок `.btn-danger` с надписью «Eliminar» / «Delete».

use crate::shared::dom_utils::listen;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub const DANGER_CLASS: &str = "btn-danger";
pub const CONFIRM_MESSAGE: &str = "Are you sure you want to delete this item?";

/// Кнопка требует подтверждения, если она «опасная» и её текст содержит одну из подписей.
pub fn needs_confirmation(is_danger: bool, text: &str, labels: &[String]) -> bool {
    is_danger && labels.iter().any(|label| text.contains(label.as_str()))
}

/// One document-level listener; declining the prompt cancels the click.
pub fn bind_delete_confirmation(document: &Document, labels: Vec<String>) {
    listen(document, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let text = target.text_content().unwrap_or_default();
        if !needs_confirmation(target.class_list().contains(DANGER_CLASS), &text, &labels) {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(CONFIRM_MESSAGE).ok())
            .unwrap_or(true);
        if !confirmed {
            event.prevent_default();
        }
    });
}
