//! Inline error / loading / empty-result line under a panel's controls.

use leptos::prelude::*;

#[component]
pub fn PanelStatus(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional)] empty: Option<Signal<bool>>,
) -> impl IntoView {
    let show_empty = move || empty.is_some_and(|e| e.get());
    view! {
        <Show when=move || error.get().is_some()>
            <p class="panel__error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <Show when=move || loading.get()>
            <p class="panel__loading">"Loading..."</p>
        </Show>
        <Show when=show_empty>
            <p class="panel__empty">"No results."</p>
        </Show>
    }
}
