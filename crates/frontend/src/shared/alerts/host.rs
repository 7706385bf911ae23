use super::queue::{alert_class, Alert};
use super::service::AlertService;
use leptos::prelude::*;

const HOST_STYLE: &str =
    "position: fixed; top: 20px; right: 20px; z-index: 1000; max-width: 400px;";
const FADE_STYLE: &str = "transition: opacity 0.5s ease; opacity: 0;";

/// Контейнер уведомлений в правом верхнем углу страницы.
#[component]
pub fn AlertHost(service: AlertService) -> impl IntoView {
    view! {
        <div id="alert-container" style=HOST_STYLE>
            <For
                each=move || service.alerts()
                key=|alert| alert.id
                children=move |alert: Alert| {
                    let Alert { id, message, severity, .. } = alert;
                    let class = move || alert_class(severity, service.is_fading(id));
                    let style = move || if service.is_fading(id) { FADE_STYLE } else { "" };
                    view! {
                        <div class=class style=style role="alert">
                            {message}
                            <button
                                type="button"
                                class="close"
                                title="Close"
                                on:click=move |_| service.dismiss(id)
                            >
                                <span>"×"</span>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
