use super::service::AlertTiming;
use crate::shared::animations::fade_out_element;
use crate::shared::dom_utils::query_document;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

/// Server-rendered `.alert` blocks fade out after `dismiss_ms`, like raised ones.
///
/// Must run before [`super::AlertHost`] is mounted, otherwise the host's own
/// alerts would be picked up too.
pub fn auto_dismiss_rendered_alerts(document: &Document, timing: AlertTiming) -> usize {
    let alerts = query_document(document, ".alert");
    let count = alerts.len();
    for alert in alerts {
        spawn_local(async move {
            TimeoutFuture::new(timing.dismiss_ms).await;
            fade_out_element(alert, timing.fade_ms);
        });
    }
    count
}
