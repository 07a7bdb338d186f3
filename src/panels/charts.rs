//! Chart hits and hidden gems panel.
//!
//! Both requests share the genre selector but own separate result slots, so
//! one failing leaves the other's table intact.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use super::{has_rows, run_record_query, slot_error, slot_loading, slot_rows, use_config, use_genres};
use crate::components::fields::NumberField;
use crate::components::genre_select::GenreSelect;
use crate::components::panel_status::PanelStatus;
use crate::components::result_table::ResultTable;
use crate::net::query::{Endpoint, QueryParams, RecordQuery};
use crate::state::panel::{RecordSlot, ValidationError};
use crate::util::form::non_blank;
use crate::util::table_schema::ColumnSpec;

const CHART_HITS_LIMIT: i64 = 30;
const HIDDEN_GEMS_LIMIT: i64 = 25;

pub const CHART_HIT_COLUMNS: [ColumnSpec; 2] = [
    ColumnSpec::right("best_chart_position", "Best Rank"),
    ColumnSpec::right("weeks_on_chart", "Weeks"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct ChartsForm {
    pub genre: String,
    pub max_rank: f64,
    pub min_popularity: f64,
}

impl Default for ChartsForm {
    fn default() -> Self {
        Self { genre: String::new(), max_rank: 50.0, min_popularity: 60.0 }
    }
}

impl ChartsForm {
    fn genre(&self) -> Result<&str, ValidationError> {
        non_blank(&self.genre).ok_or(ValidationError::ChartGenreRequired)
    }
}

/// # Errors
///
/// Returns [`ValidationError::ChartGenreRequired`] when no genre is selected.
#[allow(clippy::cast_possible_truncation)]
pub fn build_chart_hits_query(form: &ChartsForm) -> Result<RecordQuery, ValidationError> {
    let params = QueryParams::new()
        .text("genre", form.genre()?)
        .int("max_rank", form.max_rank.round() as i64)
        .int("limit", CHART_HITS_LIMIT);
    Ok(RecordQuery::new(Endpoint::ChartHits, params))
}

/// # Errors
///
/// Returns [`ValidationError::ChartGenreRequired`] when no genre is selected.
#[allow(clippy::cast_possible_truncation)]
pub fn build_hidden_gems_query(form: &ChartsForm) -> Result<RecordQuery, ValidationError> {
    let params = QueryParams::new()
        .text("genre", form.genre()?)
        .int("min_popularity", form.min_popularity.round() as i64)
        .int("limit", HIDDEN_GEMS_LIMIT);
    Ok(RecordQuery::new(Endpoint::HiddenGems, params))
}

#[component]
pub fn ChartsPanel() -> impl IntoView {
    let config = use_config();
    let genres = use_genres();
    let form = RwSignal::new(ChartsForm::default());
    let hits = RwSignal::new(RecordSlot::default());
    let gems = RwSignal::new(RecordSlot::default());

    let hits_config = config.clone();
    let on_load_hits = move |_| {
        let built = form.with_untracked(build_chart_hits_query);
        run_record_query(&hits_config, hits, built, "Error loading chart hits.");
    };
    let on_load_gems = move |_| {
        let built = form.with_untracked(build_hidden_gems_query);
        run_record_query(&config, gems, built, "Error loading hidden gems.");
    };

    view! {
        <section class="panel panel--charts">
            <h2>"Chart Hits & Hidden Gems"</h2>
            <div class="panel__controls">
                <GenreSelect
                    genres=genres
                    value=Signal::derive(move || form.with(|f| f.genre.clone()))
                    on_change=Callback::new(move |genre: String| form.update(|f| f.genre = genre))
                    placeholder="Select genre"
                />
                <NumberField
                    label="Max chart rank:"
                    value=Signal::derive(move || form.with(|f| f.max_rank))
                    on_change=Callback::new(move |rank: f64| form.update(|f| f.max_rank = rank))
                />
                <button class="btn" on:click=on_load_hits>
                    "Load Chart Hits"
                </button>
                <NumberField
                    label="Hidden gems min popularity:"
                    value=Signal::derive(move || form.with(|f| f.min_popularity))
                    on_change=Callback::new(move |pop: f64| form.update(|f| f.min_popularity = pop))
                />
                <button class="btn" on:click=on_load_gems>
                    "Load Hidden Gems"
                </button>
            </div>
            <PanelStatus error=slot_error(hits) loading=slot_loading(hits)/>
            <PanelStatus error=slot_error(gems) loading=slot_loading(gems)/>
            <Show when=has_rows(hits)>
                <h3>"Chart Hits"</h3>
                <ResultTable rows=slot_rows(hits) extra_columns=CHART_HIT_COLUMNS.to_vec()/>
            </Show>
            <Show when=has_rows(gems)>
                <h3>"Hidden Gems"</h3>
                <ResultTable rows=slot_rows(gems)/>
            </Show>
        </section>
    }
}
