//! Labelled form inputs bound to panel state through callbacks.

use leptos::prelude::*;

use crate::util::form::parse_number_input;

/// Numeric input. Blank or unparsable text leaves the value unchanged.
#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<f64>,
    on_change: Callback<f64>,
    #[prop(default = "1")] step: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input field__input--number"
                type="number"
                step=step
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Some(parsed) = parse_number_input(&event_target_value(&ev)) {
                        on_change.run(parsed);
                    }
                }
            />
        </label>
    }
}

/// Single-line text input.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Multi-line input used for comma-separated id lists.
#[component]
pub fn IdListField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field field--block">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--ids"
                rows="2"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}
