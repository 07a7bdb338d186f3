//! Pretty-printed JSON readout for object endpoints (user info, playlist stats).

#[cfg(test)]
#[path = "json_readout_test.rs"]
mod json_readout_test;

use leptos::prelude::*;
use serde_json::Value;

/// Two-space indented rendering of `value`.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Renders nothing until a value is present.
#[component]
pub fn JsonReadout(#[prop(into)] value: Signal<Option<Value>>) -> impl IntoView {
    move || {
        value.with(|v| {
            v.as_ref().map(|v| {
                view! { <pre class="json-readout">{pretty_json(v)}</pre> }
            })
        })
    }
}
