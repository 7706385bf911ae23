//! Всплывающие уведомления.
//!
//! - `queue.rs`: чистая модель очереди (тестируется нативно)
//! - `service.rs`: `AlertService`, реактивная обёртка с таймерами автоскрытия
//! - `host.rs`: Leptos-компонент, рисующий уведомления в правом верхнем углу
//! - `rendered.rs`: автоскрытие `.alert`, пришедших в разметке сервера

mod host;
mod queue;
mod rendered;
mod service;

pub use host::AlertHost;
pub use queue::{Alert, AlertId, AlertQueue, Severity};
pub use rendered::auto_dismiss_rendered_alerts;
pub use service::{AlertService, AlertTiming};
