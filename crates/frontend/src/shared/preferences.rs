//! User preferences persisted in localStorage.
//!
//! Only the dark-mode flag exists today: stored as `"true"` / `"false"` under
//! a configurable key and applied as the `dark-mode` class on `<body>`.

use crate::shared::dom_utils::{listen, query_document, toggle_class};
use web_sys::{window, Document};

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const TOGGLE_SELECTOR: &str = "[data-action=\"toggle-dark-mode\"]";

/// Parse the stored flag. Anything but `"true"` means disabled.
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

pub fn format_flag(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DarkModePreference {
    storage_key: String,
}

impl DarkModePreference {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    /// Load the flag from localStorage.
    pub fn load(&self) -> bool {
        let raw = window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(&self.storage_key).ok().flatten());
        parse_flag(raw.as_deref())
    }

    /// Save the flag to localStorage.
    pub fn save(&self, enabled: bool) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(&self.storage_key, format_flag(enabled));
        }
    }

    /// Apply the stored preference to `<body>`. Returns the loaded flag.
    pub fn load_user_preferences(&self, document: &Document) -> bool {
        let enabled = self.load();
        if enabled {
            apply(document, true);
        }
        enabled
    }

    /// Flip dark mode, persist it and return the new state.
    pub fn toggle(&self, document: &Document) -> bool {
        let enabled = !is_applied(document);
        apply(document, enabled);
        self.save(enabled);
        log::info!("dark mode {}", if enabled { "on" } else { "off" });
        enabled
    }

    /// Wire every `[data-action="toggle-dark-mode"]` element to [`Self::toggle`].
    pub fn bind_toggles(&self, document: &Document) -> usize {
        let toggles = query_document(document, TOGGLE_SELECTOR);
        for toggle in &toggles {
            let this = self.clone();
            let document = document.clone();
            listen(toggle, "click", move |event| {
                event.prevent_default();
                this.toggle(&document);
            });
        }
        toggles.len()
    }
}

fn is_applied(document: &Document) -> bool {
    document
        .body()
        .map(|body| body.class_list().contains(DARK_MODE_CLASS))
        .unwrap_or(false)
}

fn apply(document: &Document, enabled: bool) {
    if let Some(body) = document.body() {
        toggle_class(&body, DARK_MODE_CLASS, enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("true")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("1")));
        assert!(!parse_flag(None));
    }
}
