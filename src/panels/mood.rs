//! Workout, happy-mood and decade throwback panel.
//!
//! Three independent forms on one tab. Each owns its own result slot, so a
//! failed workout request leaves the happy and decade tables untouched.

#[cfg(test)]
#[path = "mood_test.rs"]
mod mood_test;

use leptos::prelude::*;

use super::genre::{TEMPO_LOWER_BOUND, TEMPO_UPPER_BOUND};
use super::{run_record_query, slot_empty, slot_error, slot_loading, slot_rows, use_config};
use crate::components::fields::NumberField;
use crate::components::panel_status::PanelStatus;
use crate::components::range_selector::RangeSelector;
use crate::components::result_table::ResultTable;
use crate::net::query::{Endpoint, QueryParams, RecordQuery};
use crate::state::panel::RecordSlot;
use crate::util::range_math::RangeSelection;
use crate::util::table_schema::ColumnSpec;

pub const YEAR_LOWER_BOUND: f64 = 1950.0;
pub const YEAR_UPPER_BOUND: f64 = 2025.0;

const WORKOUT_LIMIT: i64 = 30;
const HAPPY_MIN_ENERGY: f64 = 0.6;
const HAPPY_LIMIT: i64 = 25;
const DECADE_MIN_ENERGY: f64 = 0.5;
const DECADE_MAX_ENERGY: f64 = 0.8;
const DECADE_LIMIT: i64 = 30;

const FAILURE_MESSAGE: &str = "Error fetching playlist.";

pub const DECADE_COLUMNS: [ColumnSpec; 2] =
    [ColumnSpec::right("year", "Year"), ColumnSpec::right("best_rank", "Best Rank")];

// =============================================================================
// WORKOUT
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutForm {
    pub min_energy: f64,
    pub min_danceability: f64,
    pub tempo: RangeSelection,
}

impl Default for WorkoutForm {
    fn default() -> Self {
        Self {
            min_energy: 0.75,
            min_danceability: 0.65,
            tempo: RangeSelection::new(TEMPO_LOWER_BOUND, TEMPO_UPPER_BOUND, 130.0, 180.0),
        }
    }
}

pub fn build_workout_query(form: &WorkoutForm) -> RecordQuery {
    let params = QueryParams::new()
        .float("min_energy", form.min_energy)
        .float("min_danceability", form.min_danceability)
        .int("tempo_min", form.tempo.min_rounded())
        .int("tempo_max", form.tempo.max_rounded())
        .int("limit", WORKOUT_LIMIT);
    RecordQuery::new(Endpoint::Workout, params)
}

// =============================================================================
// HAPPY
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct HappyForm {
    pub min_valence: f64,
}

impl Default for HappyForm {
    fn default() -> Self {
        Self { min_valence: 0.7 }
    }
}

pub fn build_happy_query(form: &HappyForm) -> RecordQuery {
    let params = QueryParams::new()
        .float("min_valence", form.min_valence)
        .float("min_energy", HAPPY_MIN_ENERGY)
        .int("limit", HAPPY_LIMIT);
    RecordQuery::new(Endpoint::HappyMood, params)
}

// =============================================================================
// DECADE
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct DecadeForm {
    pub years: RangeSelection,
}

impl Default for DecadeForm {
    fn default() -> Self {
        Self { years: RangeSelection::new(YEAR_LOWER_BOUND, YEAR_UPPER_BOUND, 1990.0, 1999.0) }
    }
}

/// Years come from the range selector, so both ends are always present
/// and ordered.
pub fn build_decade_query(form: &DecadeForm) -> RecordQuery {
    let params = QueryParams::new()
        .int("start_year", form.years.min_rounded())
        .int("end_year", form.years.max_rounded())
        .float("min_energy", DECADE_MIN_ENERGY)
        .float("max_energy", DECADE_MAX_ENERGY)
        .int("limit", DECADE_LIMIT);
    RecordQuery::new(Endpoint::Decade, params)
}

// =============================================================================
// VIEW
// =============================================================================

#[component]
pub fn MoodPanel() -> impl IntoView {
    let config = use_config();
    let workout = RwSignal::new(WorkoutForm::default());
    let happy = RwSignal::new(HappyForm::default());
    let decade = RwSignal::new(DecadeForm::default());
    let workout_slot = RwSignal::new(RecordSlot::default());
    let happy_slot = RwSignal::new(RecordSlot::default());
    let decade_slot = RwSignal::new(RecordSlot::default());

    let workout_config = config.clone();
    let on_workout = move |_| {
        let query = workout.with_untracked(build_workout_query);
        run_record_query(&workout_config, workout_slot, Ok(query), FAILURE_MESSAGE);
    };
    let happy_config = config.clone();
    let on_happy = move |_| {
        let query = happy.with_untracked(build_happy_query);
        run_record_query(&happy_config, happy_slot, Ok(query), FAILURE_MESSAGE);
    };
    let on_decade = move |_| {
        let query = decade.with_untracked(build_decade_query);
        run_record_query(&config, decade_slot, Ok(query), FAILURE_MESSAGE);
    };

    view! {
        <section class="panel panel--mood">
            <h2>"Workout / Happy / Decade"</h2>

            <div class="panel__section">
                <h3>"Workout Playlist"</h3>
                <div class="panel__controls">
                    <NumberField
                        label="Min energy:"
                        step="0.05"
                        value=Signal::derive(move || workout.with(|f| f.min_energy))
                        on_change=Callback::new(move |v: f64| workout.update(|f| f.min_energy = v))
                    />
                    <NumberField
                        label="Min danceability:"
                        step="0.05"
                        value=Signal::derive(move || workout.with(|f| f.min_danceability))
                        on_change=Callback::new(move |v: f64| workout.update(|f| f.min_danceability = v))
                    />
                    <RangeSelector
                        label="Tempo"
                        selection=Signal::derive(move || workout.with(|f| f.tempo))
                        on_change=Callback::new(move |tempo: RangeSelection| workout.update(|f| f.tempo = tempo))
                    />
                    <button class="btn" on:click=on_workout>
                        "Generate workout playlist"
                    </button>
                </div>
                <PanelStatus
                    error=slot_error(workout_slot)
                    loading=slot_loading(workout_slot)
                    empty=slot_empty(workout_slot)
                />
                <ResultTable rows=slot_rows(workout_slot)/>
            </div>

            <div class="panel__section">
                <h3>"Happy Mood Playlist"</h3>
                <div class="panel__controls">
                    <NumberField
                        label="Min valence:"
                        step="0.05"
                        value=Signal::derive(move || happy.with(|f| f.min_valence))
                        on_change=Callback::new(move |v: f64| happy.update(|f| f.min_valence = v))
                    />
                    <button class="btn" on:click=on_happy>
                        "Generate happy playlist"
                    </button>
                </div>
                <PanelStatus
                    error=slot_error(happy_slot)
                    loading=slot_loading(happy_slot)
                    empty=slot_empty(happy_slot)
                />
                <ResultTable rows=slot_rows(happy_slot)/>
            </div>

            <div class="panel__section">
                <h3>"Decade Throwback"</h3>
                <div class="panel__controls">
                    <RangeSelector
                        label="Years"
                        selection=Signal::derive(move || decade.with(|f| f.years))
                        on_change=Callback::new(move |years: RangeSelection| decade.update(|f| f.years = years))
                    />
                    <button class="btn" on:click=on_decade>
                        "Generate throwback"
                    </button>
                </div>
                <PanelStatus
                    error=slot_error(decade_slot)
                    loading=slot_loading(decade_slot)
                    empty=slot_empty(decade_slot)
                />
                <ResultTable rows=slot_rows(decade_slot) extra_columns=DECADE_COLUMNS.to_vec()/>
            </div>
        </section>
    }
}
