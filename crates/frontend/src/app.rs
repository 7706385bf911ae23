use crate::shared::alerts::{AlertHost, AlertService};
use leptos::prelude::*;

#[component]
pub fn App(alerts: AlertService) -> impl IntoView {
    view! {
        <AlertHost service=alerts />
    }
}
