//! Genre + tempo playlist panel.

#[cfg(test)]
#[path = "genre_test.rs"]
mod genre_test;

use leptos::prelude::*;

use super::{run_record_query, slot_empty, slot_error, slot_loading, slot_rows, use_config, use_genres};
use crate::components::genre_select::GenreSelect;
use crate::components::panel_status::PanelStatus;
use crate::components::range_selector::RangeSelector;
use crate::components::result_table::ResultTable;
use crate::net::query::{Endpoint, QueryParams, RecordQuery};
use crate::state::panel::{RecordSlot, ValidationError};
use crate::util::form::non_blank;
use crate::util::range_math::RangeSelection;

pub const TEMPO_LOWER_BOUND: f64 = 60.0;
pub const TEMPO_UPPER_BOUND: f64 = 220.0;
const GENRE_PLAYLIST_LIMIT: i64 = 25;

#[derive(Clone, Debug, PartialEq)]
pub struct GenreForm {
    pub genre: String,
    pub tempo: RangeSelection,
}

impl Default for GenreForm {
    fn default() -> Self {
        Self {
            genre: String::new(),
            tempo: RangeSelection::new(TEMPO_LOWER_BOUND, TEMPO_UPPER_BOUND, 120.0, 140.0),
        }
    }
}

/// # Errors
///
/// Returns [`ValidationError::GenreRequired`] when no genre is selected.
pub fn build_genre_query(form: &GenreForm) -> Result<RecordQuery, ValidationError> {
    let genre = non_blank(&form.genre).ok_or(ValidationError::GenreRequired)?;
    let params = QueryParams::new()
        .text("genre", genre)
        .int("tempo_min", form.tempo.min_rounded())
        .int("tempo_max", form.tempo.max_rounded())
        .int("limit", GENRE_PLAYLIST_LIMIT);
    Ok(RecordQuery::new(Endpoint::GenrePlaylist, params))
}

#[component]
pub fn GenrePanel() -> impl IntoView {
    let config = use_config();
    let genres = use_genres();
    let form = RwSignal::new(GenreForm::default());
    let slot = RwSignal::new(RecordSlot::default());

    let on_generate = move |_| {
        let built = form.with_untracked(build_genre_query);
        run_record_query(&config, slot, built, "Error fetching playlist.");
    };

    view! {
        <section class="panel panel--genre">
            <h2>"Playlist by Genre & Tempo"</h2>
            <div class="panel__controls">
                <GenreSelect
                    genres=genres
                    value=Signal::derive(move || form.with(|f| f.genre.clone()))
                    on_change=Callback::new(move |genre: String| form.update(|f| f.genre = genre))
                    placeholder="Select a genre"
                />
                <RangeSelector
                    label="Tempo"
                    selection=Signal::derive(move || form.with(|f| f.tempo))
                    on_change=Callback::new(move |tempo: RangeSelection| form.update(|f| f.tempo = tempo))
                />
                <button class="btn" on:click=on_generate>
                    "Generate"
                </button>
            </div>
            <PanelStatus error=slot_error(slot) loading=slot_loading(slot) empty=slot_empty(slot)/>
            <ResultTable rows=slot_rows(slot)/>
        </section>
    }
}
