//! Artist-similarity playlist panel.

#[cfg(test)]
#[path = "artist_test.rs"]
mod artist_test;

use leptos::prelude::*;

use super::{run_record_query, slot_empty, slot_error, slot_loading, slot_rows, use_config};
use crate::components::fields::{NumberField, TextField};
use crate::components::panel_status::PanelStatus;
use crate::components::result_table::ResultTable;
use crate::net::query::{Endpoint, QueryParams, RecordQuery};
use crate::state::panel::{RecordSlot, ValidationError};
use crate::util::form::non_blank;

pub const ARTIST_LIMIT_MIN: i64 = 1;
pub const ARTIST_LIMIT_MAX: i64 = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct ArtistForm {
    pub artist_name: String,
    pub limit: f64,
}

impl Default for ArtistForm {
    fn default() -> Self {
        Self { artist_name: String::new(), limit: 20.0 }
    }
}

/// # Errors
///
/// Returns [`ValidationError::ArtistRequired`] when the name is blank.
#[allow(clippy::cast_possible_truncation)]
pub fn build_artist_query(form: &ArtistForm) -> Result<RecordQuery, ValidationError> {
    let name = non_blank(&form.artist_name).ok_or(ValidationError::ArtistRequired)?;
    let limit = (form.limit.round() as i64).clamp(ARTIST_LIMIT_MIN, ARTIST_LIMIT_MAX);
    Ok(RecordQuery::new(
        Endpoint::ArtistPlaylist(name.to_owned()),
        QueryParams::new().int("limit", limit),
    ))
}

#[component]
pub fn ArtistPanel() -> impl IntoView {
    let config = use_config();
    let form = RwSignal::new(ArtistForm::default());
    let slot = RwSignal::new(RecordSlot::default());

    let on_generate = move |_| {
        let built = form.with_untracked(build_artist_query);
        run_record_query(&config, slot, built, "Error fetching playlist.");
    };

    view! {
        <section class="panel panel--artist">
            <h2>"Similar Songs from Favorite Artist"</h2>
            <div class="panel__controls">
                <TextField
                    label="Artist"
                    placeholder="Favorite artist (exact name)"
                    value=Signal::derive(move || form.with(|f| f.artist_name.clone()))
                    on_change=Callback::new(move |name: String| form.update(|f| f.artist_name = name))
                />
                <NumberField
                    label="Limit:"
                    value=Signal::derive(move || form.with(|f| f.limit))
                    on_change=Callback::new(move |limit: f64| form.update(|f| f.limit = limit))
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
