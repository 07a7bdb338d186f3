//! Hits + gems mix and playlist stats panel.

#[cfg(test)]
#[path = "mix_test.rs"]
mod mix_test;

use leptos::prelude::*;

use super::{
    run_readout_query, run_record_query, slot_empty, slot_error, slot_loading, slot_readout, slot_rows, use_config,
    use_genres,
};
use crate::components::fields::{IdListField, NumberField};
use crate::components::genre_select::GenreSelect;
use crate::components::json_readout::JsonReadout;
use crate::components::panel_status::PanelStatus;
use crate::components::result_table::ResultTable;
use crate::net::query::{Endpoint, QueryParams, RecordQuery};
use crate::state::panel::{ReadoutSlot, RecordSlot, ValidationError};
use crate::util::form::{non_blank, split_id_list};
use crate::util::table_schema::ColumnSpec;

/// Only the track type is added. Popularity is a well-known column and is
/// inferred from the first row, so it is deliberately not declared again;
/// doing so would render a second, identical Popularity column.
pub const MIX_COLUMNS: [ColumnSpec; 1] = [ColumnSpec::left("track_type", "Type")];

#[derive(Clone, Debug, PartialEq)]
pub struct MixForm {
    pub genre: String,
    pub max_chart_rank: f64,
    pub min_popularity: f64,
    pub hits_limit: f64,
    pub gems_limit: f64,
}

impl Default for MixForm {
    fn default() -> Self {
        Self { genre: String::new(), max_chart_rank: 30.0, min_popularity: 55.0, hits_limit: 15.0, gems_limit: 15.0 }
    }
}

/// # Errors
///
/// Returns [`ValidationError::GenreRequired`] when no genre is selected.
#[allow(clippy::cast_possible_truncation)]
pub fn build_mix_query(form: &MixForm) -> Result<RecordQuery, ValidationError> {
    let genre = non_blank(&form.genre).ok_or(ValidationError::GenreRequired)?;
    let params = QueryParams::new()
        .text("genre", genre)
        .int("max_chart_rank", form.max_chart_rank.round() as i64)
        .int("min_popularity", form.min_popularity.round() as i64)
        .int("hits_limit", form.hits_limit.round() as i64)
        .int("gems_limit", form.gems_limit.round() as i64);
    Ok(RecordQuery::new(Endpoint::Mix, params))
}

/// # Errors
///
/// Returns [`ValidationError::SpotifyIdsRequired`] when the list has no ids.
pub fn build_stats_query(raw_ids: &str) -> Result<RecordQuery, ValidationError> {
    let ids = split_id_list(raw_ids);
    if ids.is_empty() {
        return Err(ValidationError::SpotifyIdsRequired);
    }
    Ok(RecordQuery::new(Endpoint::PlaylistStats, QueryParams::new().text("spotify_ids", ids.join(","))))
}

#[component]
pub fn MixPanel() -> impl IntoView {
    let config = use_config();
    let genres = use_genres();
    let form = RwSignal::new(MixForm::default());
    let stats_ids = RwSignal::new(String::new());
    let mix = RwSignal::new(RecordSlot::default());
    let stats = RwSignal::new(ReadoutSlot::default());

    let mix_config = config.clone();
    let on_mix = move |_| {
        let built = form.with_untracked(build_mix_query);
        run_record_query(&mix_config, mix, built, "Error fetching playlist.");
    };
    let on_stats = move |_| {
        let built = stats_ids.with_untracked(|ids| build_stats_query(ids));
        run_readout_query(&config, stats, built, "Error loading stats.");
    };

    view! {
        <section class="panel panel--mix">
            <h2>"Mix Playlist & Stats"</h2>

            <div class="panel__section">
                <h3>"Chart Hits + Hidden Gems Mix"</h3>
                <div class="panel__controls">
                    <GenreSelect
                        genres=genres
                        value=Signal::derive(move || form.with(|f| f.genre.clone()))
                        on_change=Callback::new(move |genre: String| form.update(|f| f.genre = genre))
                        placeholder="Select genre"
                    />
                    <NumberField
                        label="Max chart rank:"
                        value=Signal::derive(move || form.with(|f| f.max_chart_rank))
                        on_change=Callback::new(move |v: f64| form.update(|f| f.max_chart_rank = v))
                    />
                    <NumberField
                        label="Min popularity:"
                        value=Signal::derive(move || form.with(|f| f.min_popularity))
                        on_change=Callback::new(move |v: f64| form.update(|f| f.min_popularity = v))
                    />
                    <NumberField
                        label="Hits:"
                        value=Signal::derive(move || form.with(|f| f.hits_limit))
                        on_change=Callback::new(move |v: f64| form.update(|f| f.hits_limit = v))
                    />
                    <NumberField
                        label="Gems:"
                        value=Signal::derive(move || form.with(|f| f.gems_limit))
                        on_change=Callback::new(move |v: f64| form.update(|f| f.gems_limit = v))
                    />
                    <button class="btn" on:click=on_mix>
                        "Generate mix"
                    </button>
                </div>
                <PanelStatus error=slot_error(mix) loading=slot_loading(mix) empty=slot_empty(mix)/>
                <ResultTable rows=slot_rows(mix) extra_columns=MIX_COLUMNS.to_vec()/>
            </div>

            <div class="panel__section">
                <h3>"Playlist Stats"</h3>
                <p class="panel__hint">
                    "Enter a comma-separated list of Spotify IDs. You can grab IDs from the Mix or Track Search tables."
                </p>
                <IdListField
                    label="Spotify IDs"
                    value=Signal::derive(move || stats_ids.get())
                    on_change=Callback::new(move |ids: String| stats_ids.set(ids))
                />
                <button class="btn" on:click=on_stats>
                    "Get stats"
                </button>
                <PanelStatus error=slot_error(stats) loading=slot_loading(stats)/>
                <JsonReadout value=slot_readout(stats)/>
            </div>
        </section>
    }
}
