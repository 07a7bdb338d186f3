//! Dual-thumb range slider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two `<input type="range">` elements are stacked over one track. Every
//! input event is routed through `range_math::drag`; the owner receives the
//! resulting selection and writes it back, which repositions both thumbs.

#[cfg(test)]
#[path = "range_selector_test.rs"]
mod range_selector_test;

use leptos::prelude::*;

use crate::util::form::parse_number_input;
use crate::util::range_math::{RangeSelection, Thumb, drag};

#[component]
pub fn RangeSelector(
    #[prop(into)] label: String,
    #[prop(into)] selection: Signal<RangeSelection>,
    on_change: Callback<RangeSelection>,
    #[prop(default = "1")] step: &'static str,
) -> impl IntoView {
    let move_thumb = move |thumb: Thumb, raw: String| {
        let requested = parse_number_input(&raw).unwrap_or(f64::NAN);
        on_change.run(drag(selection.get_untracked(), thumb, requested));
    };

    let lower = move || format_position(selection.get().lower_bound);
    let upper = move || format_position(selection.get().upper_bound);

    view! {
        <div class="range-selector">
            <span class="range-selector__label">
                {label} " " {move || range_readout(&selection.get())}
            </span>
            <div class="range-selector__track" style=move || highlight_style(&selection.get())>
                <input
                    class="range-selector__thumb range-selector__thumb--min"
                    type="range"
                    min=lower
                    max=upper
                    step=step
                    prop:value=move || format_position(selection.get().min)
                    on:input=move |ev| move_thumb(Thumb::Min, event_target_value(&ev))
                />
                <input
                    class="range-selector__thumb range-selector__thumb--max"
                    type="range"
                    min=lower
                    max=upper
                    step=step
                    prop:value=move || format_position(selection.get().max)
                    on:input=move |ev| move_thumb(Thumb::Max, event_target_value(&ev))
                />
            </div>
        </div>
    }
}

fn format_position(value: f64) -> String {
    format!("{value}")
}

/// `min–max` readout shown next to the label.
fn range_readout(selection: &RangeSelection) -> String {
    format!("{}–{}", format_position(selection.min), format_position(selection.max))
}

/// CSS custom properties marking the selected segment of the track.
fn highlight_style(selection: &RangeSelection) -> String {
    format!(
        "--range-start: {:.1}%; --range-end: {:.1}%;",
        selection.fraction(selection.min) * 100.0,
        selection.fraction(selection.max) * 100.0
    )
}
