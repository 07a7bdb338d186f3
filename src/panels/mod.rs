//! Panel controllers, one per dashboard feature area.
//!
//! ARCHITECTURE
//! ============
//! Each panel owns its form state and result slots. Pure `build_*` functions
//! turn form state into a request (or a validation error); the shared
//! [`run_request`] path validates, issues and settles it, so no panel carries
//! its own fetch/error plumbing.

pub mod artist;
pub mod charts;
pub mod discover;
pub mod genre;
pub mod mix;
pub mod mood;
pub mod user;

use std::future::Future;

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::net::api;
use crate::net::query::RecordQuery;
use crate::net::types::{FetchFailure, Genre, Record};
use crate::state::bootstrap::BootstrapState;
use crate::state::panel::{ReadoutSlot, RecordSlot, ResultSlot, ValidationError};

/// Validate, issue and settle one request against `slot`.
///
/// A validation error is written to the slot and nothing is sent. Otherwise
/// `issue` runs on the UI task queue and its outcome settles the slot; a
/// later-settling older request overwrites a newer one.
pub(crate) fn run_request<T, Q, F, Fut>(
    slot: RwSignal<ResultSlot<T>>,
    built: Result<Q, ValidationError>,
    failure_message: &'static str,
    issue: F,
) where
    T: Default + Send + Sync + 'static,
    Q: 'static,
    F: FnOnce(Q) -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchFailure>> + 'static,
{
    let Some(request) = slot.try_update(|s| s.begin(built)).flatten() else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = issue(request).await;
        // The panel may have been unmounted by a tab switch; drop the result then.
        let _ = slot.try_update(|s| s.settle(outcome, failure_message));
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = (request, issue, failure_message);
    }
}

/// Shared record-fetching path used by every table panel.
pub(crate) fn run_record_query(
    config: &DashboardConfig,
    slot: RwSignal<RecordSlot>,
    built: Result<RecordQuery, ValidationError>,
    failure_message: &'static str,
) {
    let config = config.clone();
    run_request(slot, built, failure_message, move |query: RecordQuery| async move {
        api::fetch_records(&config, &query).await
    });
}

/// Object endpoints shown as a raw JSON readout.
pub(crate) fn run_readout_query(
    config: &DashboardConfig,
    slot: RwSignal<ReadoutSlot>,
    built: Result<RecordQuery, ValidationError>,
    failure_message: &'static str,
) {
    let config = config.clone();
    run_request(slot, built, failure_message, move |query: RecordQuery| async move {
        api::fetch_object::<serde_json::Value>(&config, &query).await.map(Some)
    });
}

pub(crate) fn use_config() -> DashboardConfig {
    expect_context::<DashboardConfig>()
}

pub(crate) fn use_genres() -> Signal<Vec<Genre>> {
    let bootstrap = expect_context::<RwSignal<BootstrapState>>();
    Signal::derive(move || bootstrap.with(|b| b.genres.clone()))
}

pub(crate) fn slot_rows(slot: RwSignal<RecordSlot>) -> Signal<Vec<Record>> {
    Signal::derive(move || slot.with(|s| s.value.clone()))
}

pub(crate) fn slot_error<T: Send + Sync + 'static>(slot: RwSignal<ResultSlot<T>>) -> Signal<Option<String>> {
    Signal::derive(move || slot.with(|s| s.error.clone()))
}

pub(crate) fn slot_loading<T: Send + Sync + 'static>(slot: RwSignal<ResultSlot<T>>) -> Signal<bool> {
    Signal::derive(move || slot.with(|s| s.loading))
}

pub(crate) fn slot_readout(slot: RwSignal<ReadoutSlot>) -> Signal<Option<serde_json::Value>> {
    Signal::derive(move || slot.with(|s| s.value.clone()))
}

pub(crate) fn slot_empty(slot: RwSignal<RecordSlot>) -> Signal<bool> {
    Signal::derive(move || slot.with(RecordSlot::is_empty_result))
}

pub(crate) fn has_rows(slot: RwSignal<RecordSlot>) -> impl Fn() -> bool + Copy + Send + Sync + 'static {
    move || slot.with(|s| !s.value.is_empty())
}
