//! Response shapes returned by the music backend.
//!
//! DESIGN
//! ======
//! Playlist-style endpoints return rows whose shape differs per endpoint, so
//! they stay untyped as [`Record`] maps and the result table infers columns
//! from them. Single-object endpoints with a stable shape get serde structs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One backend row: field name to scalar value.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Genre entry from `/api/genres`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub genre_id: i64,
    pub genre_name: String,
}

/// Health readout from `/api/test-db`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStatus {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub total_tracks: Option<i64>,
}

/// Acknowledgement body for user and playlist mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub playlist_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MutationResponse {
    /// Server message, or `fallback` when the body carried none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_owned()
    }
}

/// Why a backend call produced no usable data.
///
/// Panels map every variant to the same generic message; the variant and its
/// detail only reach the log.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Parse(String),
    /// Well-formed body that reports the operation did not happen.
    #[error("backend rejected the request: {0}")]
    Rejected(String),
    #[error("network access is only available in the browser build")]
    Unavailable,
}

impl FetchFailure {
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status(_) | Self::Unavailable)
    }
}

/// Reject non-2xx statuses.
///
/// # Errors
///
/// Returns [`FetchFailure::Status`] for any status outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), FetchFailure> {
    if (200..=299).contains(&status) {
        Ok(())
    } else {
        Err(FetchFailure::Status(status))
    }
}

/// Decode an array body into records.
///
/// # Errors
///
/// Returns [`FetchFailure::Parse`] when the body is not a JSON array of objects.
pub fn decode_records(body: &str) -> Result<Vec<Record>, FetchFailure> {
    decode_object(body)
}

/// Decode a body into any deserializable shape.
///
/// # Errors
///
/// Returns [`FetchFailure::Parse`] when the body does not match `T`.
pub fn decode_object<T: DeserializeOwned>(body: &str) -> Result<T, FetchFailure> {
    serde_json::from_str(body).map_err(|e| FetchFailure::Parse(e.to_string()))
}

/// Decode a `/api/test-db` body whatever the status code.
///
/// The backend reports a database outage as a 500 carrying a regular
/// `DbStatus` body, so only a body that does not decode counts as a failure.
///
/// # Errors
///
/// Returns [`FetchFailure::Status`] for a non-2xx response whose body is not a
/// `DbStatus`, and [`FetchFailure::Parse`] for a 2xx one.
pub fn decode_health(status: u16, body: &str) -> Result<DbStatus, FetchFailure> {
    match decode_object::<DbStatus>(body) {
        Ok(health) => Ok(health),
        Err(err) => {
            check_status(status)?;
            Err(err)
        }
    }
}
