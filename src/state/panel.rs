//! Per-panel request slot and validation errors.
//!
//! DESIGN
//! ======
//! Each panel owns one slot per result area. A request moves the slot through
//! `begin` (validate, clear, mark loading) and `settle` (replace or fail).
//! There is no request generation: when two requests overlap, whichever
//! settles last wins, and the first settle already clears `loading`.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::net::types::{FetchFailure, Record};

/// A required form field was missing; no request was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Pick a genre first.")]
    GenreRequired,
    #[error("Select a genre first.")]
    ChartGenreRequired,
    #[error("Enter an artist name.")]
    ArtistRequired,
    #[error("Enter a track name to search.")]
    TrackQueryRequired,
    #[error("Enter at least one Spotify ID.")]
    SpotifyIdsRequired,
    #[error("Enter a numeric user ID first.")]
    UserIdRequired,
    #[error("Username and email are required.")]
    CredentialsRequired,
    #[error("Enter a playlist name.")]
    PlaylistNameRequired,
    #[error("Enter a numeric playlist ID.")]
    PlaylistIdRequired,
}

/// Result area state for one panel section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSlot<T> {
    pub value: T,
    pub error: Option<String>,
    pub loading: bool,
    /// Set once any request has been issued, so callers can tell
    /// "no results" apart from "not yet queried".
    pub queried: bool,
}

/// Slot holding a record sequence for a result table.
pub type RecordSlot = ResultSlot<Vec<Record>>;
/// Slot holding a raw JSON readout.
pub type ReadoutSlot = ResultSlot<Option<serde_json::Value>>;
/// Slot holding a status message from a mutation.
pub type MessageSlot = ResultSlot<Option<String>>;

impl<T: Default> ResultSlot<T> {
    /// Start a request built from form state.
    ///
    /// A validation error is shown inline and yields `None`, so the caller
    /// issues nothing. Otherwise the previous value and error are cleared and
    /// the request is handed back to be sent.
    pub fn begin<Q>(&mut self, built: Result<Q, ValidationError>) -> Option<Q> {
        match built {
            Ok(request) => {
                self.value = T::default();
                self.error = None;
                self.loading = true;
                self.queried = true;
                Some(request)
            }
            Err(err) => {
                log::warn!("request skipped: {err}");
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Apply a settled response. Success replaces the value wholesale; failure
    /// shows `failure_message` and logs the cause.
    pub fn settle(&mut self, outcome: Result<T, FetchFailure>, failure_message: &str) {
        self.loading = false;
        match outcome {
            Ok(value) => {
                self.value = value;
                self.error = None;
            }
            Err(err) => {
                log::error!("{failure_message} [{}] ({err})", failure_kind(&err));
                self.error = Some(failure_message.to_owned());
            }
        }
    }
}

/// Coarse failure class for the log line.
fn failure_kind(err: &FetchFailure) -> &'static str {
    if err.is_parse() {
        "parse"
    } else if err.is_transport() {
        "transport"
    } else {
        "rejected"
    }
}

impl RecordSlot {
    /// Queried, settled, error-free and empty.
    pub fn is_empty_result(&self) -> bool {
        self.queried && !self.loading && self.error.is_none() && self.value.is_empty()
    }
}
