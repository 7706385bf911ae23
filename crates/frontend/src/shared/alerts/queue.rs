use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

pub type AlertId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: AlertId,
    pub message: String,
    pub severity: Severity,
    /// Set when the fade-out transition has started.
    pub fading: bool,
}

pub fn alert_class(severity: Severity, fading: bool) -> String {
    let phase = if fading { "fade-out" } else { "fade-in" };
    format!("alert alert-{} {}", severity.as_str(), phase)
}

/// Видимые уведомления в порядке добавления (старые сверху).
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    alerts: Vec<Alert>,
    next_id: AlertId,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> AlertId {
        self.next_id += 1;
        let id = self.next_id;
        self.alerts.push(Alert {
            id,
            message: message.into(),
            severity,
            fading: false,
        });
        id
    }

    /// Marks the alert as fading. Returns `false` if it is already gone.
    pub fn begin_fade(&mut self, id: AlertId) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.fading = true;
                true
            }
            None => false,
        }
    }

    /// Removes the alert. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: AlertId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }

    pub fn get(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
