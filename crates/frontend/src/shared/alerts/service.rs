use super::queue::{Alert, AlertId, AlertQueue, Severity};
use crate::shared::config::PageConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTiming {
    /// How long an alert stays fully visible.
    pub dismiss_ms: u32,
    /// Length of the fade-out before removal.
    pub fade_ms: u32,
}

impl Default for AlertTiming {
    fn default() -> Self {
        Self {
            dismiss_ms: 5000,
            fade_ms: 500,
        }
    }
}

impl From<&PageConfig> for AlertTiming {
    fn from(config: &PageConfig) -> Self {
        Self {
            dismiss_ms: config.alert_dismiss_ms,
            fade_ms: config.alert_fade_ms,
        }
    }
}

/// Сервис уведомлений.
///
/// Создаётся один раз при старте страницы и передаётся всем компонентам,
/// которым нужно что-то показать пользователю.
#[derive(Clone, Copy)]
pub struct AlertService {
    queue: RwSignal<AlertQueue>,
    timing: AlertTiming,
}

impl AlertService {
    pub fn new(timing: AlertTiming) -> Self {
        Self {
            queue: RwSignal::new(AlertQueue::new()),
            timing,
        }
    }

    /// Показать уведомление; через `dismiss_ms` оно плавно исчезнет.
    pub fn raise(&self, message: impl Into<String>, severity: Severity) -> AlertId {
        let message = message.into();
        log::debug!("alert [{}]: {}", severity.as_str(), message);

        let Some(id) = self.queue.try_update(|q| q.push(message, severity)) else {
            return 0;
        };

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.timing.dismiss_ms).await;
            this.fade_and_remove(id).await;
        });
        id
    }

    /// Закрыть уведомление вручную (кнопка ×).
    pub fn dismiss(&self, id: AlertId) {
        self.queue.update(|q| {
            q.remove(id);
        });
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.queue.with(|q| q.alerts().to_vec())
    }

    pub fn is_fading(&self, id: AlertId) -> bool {
        self.queue
            .with(|q| q.get(id).map(|a| a.fading).unwrap_or(true))
    }

    async fn fade_and_remove(self, id: AlertId) {
        // Already dismissed by hand.
        if !self.queue.try_update(|q| q.begin_fade(id)).unwrap_or(false) {
            return;
        }
        TimeoutFuture::new(self.timing.fade_ms).await;
        self.dismiss(id);
    }
}
