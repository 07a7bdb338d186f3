//! Genre dropdown fed by the bootstrap genre list.

#[cfg(test)]
#[path = "genre_select_test.rs"]
mod genre_select_test;

use leptos::prelude::*;

use crate::net::types::Genre;

/// One `<option>` per genre, in list order: `(name, selected)`.
fn genre_options(genres: Vec<Genre>, current: &str) -> Vec<(String, bool)> {
    genres
        .into_iter()
        .map(|g| {
            let selected = g.genre_name == current;
            (g.genre_name, selected)
        })
        .collect()
}

#[component]
pub fn GenreSelect(
    #[prop(into)] genres: Signal<Vec<Genre>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <select
            class="genre-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {move || {
                let current = value.get_untracked();
                genre_options(genres.get(), &current)
                    .into_iter()
                    .map(|(name, selected)| {
                        let label = name.clone();
                        view! {
                            <option value=name selected=selected>
                                {label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </select>
    }
}
