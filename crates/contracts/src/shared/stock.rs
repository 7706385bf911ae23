use serde::{Deserialize, Serialize};

/// Уровень остатка для раскраски бейджей.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockLevel {
    Critical,
    Low,
    Sufficient,
}

impl StockLevel {
    /// CSS modifier used by `[data-stock]` badges.
    pub fn badge_class(&self) -> &'static str {
        match self {
            StockLevel::Critical => "badge-danger",
            StockLevel::Low => "badge-warning",
            StockLevel::Sufficient => "badge-success",
        }
    }

    pub fn all() -> [StockLevel; 3] {
        [StockLevel::Critical, StockLevel::Low, StockLevel::Sufficient]
    }
}

/// Границы уровней: ниже `critical` критично, ниже `low` мало.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockThresholds {
    pub critical: i64,
    pub low: i64,
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            critical: 5,
            low: 10,
        }
    }
}

impl StockThresholds {
    pub fn classify(&self, stock: i64) -> StockLevel {
        if stock < self.critical {
            StockLevel::Critical
        } else if stock < self.low {
            StockLevel::Low
        } else {
            StockLevel::Sufficient
        }
    }

    /// The calculator's stock badge only distinguishes low vs. enough.
    pub fn quote_badge_class(&self, stock: i64) -> &'static str {
        if stock < self.low {
            "badge badge-warning"
        } else {
            "badge badge-success"
        }
    }
}
