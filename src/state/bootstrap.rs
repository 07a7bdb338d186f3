//! App-wide data loaded once at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The genre list feeds every genre selector; the health readout only drives
//! the header. A failed load degrades those two surfaces and nothing else.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::net::types::{DbStatus, FetchFailure, Genre};

pub const GENRES_FAILED_MESSAGE: &str = "Could not load genres from backend";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BootstrapState {
    pub genres: Vec<Genre>,
    pub db_status: Option<DbStatus>,
    pub global_error: Option<String>,
}

impl BootstrapState {
    pub fn apply_genres(&mut self, outcome: Result<Vec<Genre>, FetchFailure>) {
        match outcome {
            Ok(genres) => {
                log::debug!("loaded {} genres", genres.len());
                self.genres = genres;
            }
            Err(err) => {
                log::error!("genre bootstrap failed: {err}");
                self.global_error = Some(GENRES_FAILED_MESSAGE.to_owned());
            }
        }
    }

    /// An unreachable backend simply hides the status line.
    pub fn apply_db_status(&mut self, outcome: Result<DbStatus, FetchFailure>) {
        match outcome {
            Ok(status) => self.db_status = Some(status),
            Err(err) => {
                log::error!("health check failed: {err}");
                self.db_status = None;
            }
        }
    }
}

/// Header readout for a health response.
pub fn db_status_line(status: &DbStatus) -> String {
    match status.total_tracks {
        Some(total) => format!("{} — {} ({total} tracks)", status.status, status.message),
        None => format!("{} — {}", status.status, status.message),
    }
}
