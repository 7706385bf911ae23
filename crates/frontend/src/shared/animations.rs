//! Косметические анимации страницы.
//!
//! Карточки (`.card`, `.stat-card`) появляются каскадом: каждая следующая
//! стартует на `stagger_ms` позже предыдущей.

use crate::shared::dom_utils::{detach, query_document, set_style};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

pub const CARD_SELECTOR: &str = ".card, .stat-card";

/// Delay before the card at `index` starts to appear.
pub fn stagger_delay(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

/// Returns the number of animated elements.
pub fn animate_cards(document: &Document, stagger_ms: u32) -> usize {
    let cards = query_document(document, CARD_SELECTOR);
    let count = cards.len();

    for (index, card) in cards.into_iter().enumerate() {
        set_style(&card, "opacity", "0");
        set_style(&card, "transform", "translateY(20px)");

        let delay = stagger_delay(index, stagger_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            set_style(&card, "transition", "all 0.6s ease");
            set_style(&card, "opacity", "1");
            set_style(&card, "transform", "translateY(0)");
        });
    }
    count
}

/// Fade `element` out and detach it. Safe if it was removed in the meantime.
pub fn fade_out_element(element: Element, fade_ms: u32) {
    set_style(&element, "transition", "opacity 0.5s ease");
    set_style(&element, "opacity", "0");
    spawn_local(async move {
        TimeoutFuture::new(fade_ms).await;
        detach(&element);
    });
}
