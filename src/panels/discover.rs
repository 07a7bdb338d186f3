//! Discovery tools: artist search, similar artists and track search.

#[cfg(test)]
#[path = "discover_test.rs"]
mod discover_test;

use leptos::prelude::*;

use super::{has_rows, run_record_query, slot_empty, slot_error, slot_loading, slot_rows, use_config};
use crate::components::fields::{NumberField, TextField};
use crate::components::panel_status::PanelStatus;
use crate::components::result_table::FixedTable;
use crate::net::query::{Endpoint, QueryParams, RecordQuery};
use crate::net::types::Record;
use crate::state::panel::{RecordSlot, ValidationError};
use crate::util::form::non_blank;
use crate::util::table_schema::{ARTIST_COLUMN, ColumnSpec, TRACK_COLUMN, format_cell};

const SIMILAR_MIN_TRACKS: i64 = 5;
const SIMILAR_LIMIT: i64 = 10;
const TRACK_SEARCH_LIMIT: i64 = 20;

pub const SIMILAR_ARTIST_COLUMNS: [ColumnSpec; 5] = [
    ARTIST_COLUMN,
    ColumnSpec::right("track_count", "Tracks"),
    ColumnSpec::right("avg_popularity", "Avg Popularity").fixed2(),
    ColumnSpec::right("avg_tempo", "Avg Tempo").fixed2(),
    ColumnSpec::right("avg_energy", "Avg Energy").fixed2(),
];

pub const TRACK_SEARCH_COLUMNS: [ColumnSpec; 5] = [
    TRACK_COLUMN,
    ARTIST_COLUMN,
    ColumnSpec::right("popularity", "Popularity"),
    ColumnSpec::left("album_name", "Album"),
    ColumnSpec::left("spotify_id", "Spotify ID"),
];

/// Artist search sends whatever was typed, blank included.
pub fn build_artist_search_query(search: &str) -> RecordQuery {
    RecordQuery::new(Endpoint::Artists, QueryParams::new().text("search", search))
}

/// `artist_name (id artist_id)` list entry.
pub fn artist_list_label(record: &Record) -> String {
    let name = format_cell(record, &ARTIST_COLUMN);
    let id = format_cell(record, &ColumnSpec::left("artist_id", "ID"));
    format!("{name} (id {id})")
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimilarForm {
    pub base_artist: String,
    pub tempo_range: f64,
    pub feature_range: f64,
}

impl Default for SimilarForm {
    fn default() -> Self {
        Self { base_artist: String::new(), tempo_range: 25.0, feature_range: 0.25 }
    }
}

/// # Errors
///
/// Returns [`ValidationError::ArtistRequired`] when the base artist is blank.
pub fn build_similar_query(form: &SimilarForm) -> Result<RecordQuery, ValidationError> {
    let artist = non_blank(&form.base_artist).ok_or(ValidationError::ArtistRequired)?;
    let params = QueryParams::new()
        .float("tempo_range", form.tempo_range)
        .float("feature_range", form.feature_range)
        .int("min_tracks", SIMILAR_MIN_TRACKS)
        .int("limit", SIMILAR_LIMIT);
    Ok(RecordQuery::new(Endpoint::SimilarArtists(artist.to_owned()), params))
}

/// # Errors
///
/// Returns [`ValidationError::TrackQueryRequired`] when the query is blank.
pub fn build_track_search_query(text: &str) -> Result<RecordQuery, ValidationError> {
    let text = non_blank(text).ok_or(ValidationError::TrackQueryRequired)?;
    let params = QueryParams::new().text("query", text).int("limit", TRACK_SEARCH_LIMIT);
    Ok(RecordQuery::new(Endpoint::SearchTracks, params))
}

#[component]
pub fn DiscoverPanel() -> impl IntoView {
    let config = use_config();
    let artist_search = RwSignal::new(String::new());
    let similar = RwSignal::new(SimilarForm::default());
    let track_search = RwSignal::new(String::new());
    let artists = RwSignal::new(RecordSlot::default());
    let similar_slot = RwSignal::new(RecordSlot::default());
    let tracks = RwSignal::new(RecordSlot::default());

    let artists_config = config.clone();
    let on_search_artists = move |_| {
        let query = artist_search.with_untracked(|s| build_artist_search_query(s));
        run_record_query(&artists_config, artists, Ok(query), "Error searching artists.");
    };
    let similar_config = config.clone();
    let on_similar = move |_| {
        let built = similar.with_untracked(build_similar_query);
        run_record_query(&similar_config, similar_slot, built, "Error loading similar artists.");
    };
    let on_search_tracks = move |_| {
        let built = track_search.with_untracked(|s| build_track_search_query(s));
        run_record_query(&config, tracks, built, "Error searching tracks.");
    };

    let artist_items = move || {
        artists.with(|s| {
            s.value
                .iter()
                .map(|record| view! { <li>{artist_list_label(record)}</li> })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="panel panel--discover">
            <h2>"Discovery Tools"</h2>

            <div class="panel__section">
                <h3>"Search Artists"</h3>
                <div class="panel__controls">
                    <TextField
                        label="Artist"
                        placeholder="Artist name contains…"
                        value=Signal::derive(move || artist_search.get())
                        on_change=Callback::new(move |s: String| artist_search.set(s))
                    />
                    <button class="btn" on:click=on_search_artists>
                        "Search"
                    </button>
                </div>
                <PanelStatus error=slot_error(artists) loading=slot_loading(artists) empty=slot_empty(artists)/>
                <Show when=has_rows(artists)>
                    <ul class="artist-list">{artist_items}</ul>
                </Show>
            </div>

            <div class="panel__section">
                <h3>"Similar Artists"</h3>
                <div class="panel__controls">
                    <TextField
                        label="Base artist"
                        placeholder="Base artist (exact name)"
                        value=Signal::derive(move || similar.with(|f| f.base_artist.clone()))
                        on_change=Callback::new(move |s: String| similar.update(|f| f.base_artist = s))
                    />
                    <NumberField
                        label="Tempo range:"
                        value=Signal::derive(move || similar.with(|f| f.tempo_range))
                        on_change=Callback::new(move |v: f64| similar.update(|f| f.tempo_range = v))
                    />
                    <NumberField
                        label="Feature range:"
                        step="0.05"
                        value=Signal::derive(move || similar.with(|f| f.feature_range))
                        on_change=Callback::new(move |v: f64| similar.update(|f| f.feature_range = v))
                    />
                    <button class="btn" on:click=on_similar>
                        "Find similar"
                    </button>
                </div>
                <PanelStatus
                    error=slot_error(similar_slot)
                    loading=slot_loading(similar_slot)
                    empty=slot_empty(similar_slot)
                />
                <FixedTable rows=slot_rows(similar_slot) columns=SIMILAR_ARTIST_COLUMNS.to_vec()/>
            </div>

            <div class="panel__section">
                <h3>"Search Tracks"</h3>
                <div class="panel__controls">
                    <TextField
                        label="Track"
                        placeholder="Track name contains…"
                        value=Signal::derive(move || track_search.get())
                        on_change=Callback::new(move |s: String| track_search.set(s))
                    />
                    <button class="btn" on:click=on_search_tracks>
                        "Search tracks"
                    </button>
                </div>
                <PanelStatus error=slot_error(tracks) loading=slot_loading(tracks) empty=slot_empty(tracks)/>
                <FixedTable rows=slot_rows(tracks) columns=TRACK_SEARCH_COLUMNS.to_vec()/>
            </div>
        </section>
    }
}
