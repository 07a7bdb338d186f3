//! Dashboard header with backend location and health readout.

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::state::bootstrap::{BootstrapState, db_status_line};

#[component]
pub fn StatusHeader() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let bootstrap = expect_context::<RwSignal<BootstrapState>>();

    let status_line = move || bootstrap.with(|b| b.db_status.as_ref().map(db_status_line));
    let global_error = move || bootstrap.with(|b| b.global_error.clone());

    view! {
        <header class="dashboard__header">
            <h1>"Music Discovery Dashboard"</h1>
            <p class="dashboard__backend">
                "Backend: " <code>{format!("{}/api/…", config.backend_url())}</code>
            </p>
            <Show when=move || status_line().is_some()>
                <p class="dashboard__db-status">
                    "DB status: " <strong>{move || status_line().unwrap_or_default()}</strong>
                </p>
            </Show>
            <Show when=move || global_error().is_some()>
                <p class="dashboard__error">{move || global_error().unwrap_or_default()}</p>
            </Show>
        </header>
    }
}
