//! Query builder: endpoint paths and normalized parameter sets.
//!
//! ARCHITECTURE
//! ============
//! Panels never format URLs themselves. They produce a [`RecordQuery`]
//! (endpoint + ordered parameters) and the gateway resolves it against the
//! configured backend.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::fmt;

use urlencoding::encode;

use crate::config::DashboardConfig;

/// Backend endpoints, relative to the `/api` base path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Genres,
    TestDb,
    GenrePlaylist,
    ArtistPlaylist(String),
    ChartHits,
    HiddenGems,
    Workout,
    HappyMood,
    Decade,
    Mix,
    PlaylistStats,
    SearchTracks,
    Artists,
    SimilarArtists(String),
    UpsertUser,
    User(i64),
    UserPlaylists(i64),
    SavePlaylist,
    DeletePlaylist(i64),
}

impl Endpoint {
    /// Path below `/api`, with name segments percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Self::Genres => "/genres".to_owned(),
            Self::TestDb => "/test-db".to_owned(),
            Self::GenrePlaylist => "/playlist/genre".to_owned(),
            Self::ArtistPlaylist(name) => format!("/playlist/artist/{}", encode(name)),
            Self::ChartHits => "/playlist/chart-hits".to_owned(),
            Self::HiddenGems => "/playlist/hidden-gems".to_owned(),
            Self::Workout => "/playlist/workout".to_owned(),
            Self::HappyMood => "/playlist/mood/happy".to_owned(),
            Self::Decade => "/playlist/decade".to_owned(),
            Self::Mix => "/playlist/mix".to_owned(),
            Self::PlaylistStats => "/playlist/stats".to_owned(),
            Self::SearchTracks => "/search/tracks".to_owned(),
            Self::Artists => "/artists".to_owned(),
            Self::SimilarArtists(name) => format!("/artists/similar/{}", encode(name)),
            Self::UpsertUser => "/user".to_owned(),
            Self::User(id) => format!("/user/{id}"),
            Self::UserPlaylists(id) => format!("/user/{id}/playlists"),
            Self::SavePlaylist => "/playlist/save".to_owned(),
            Self::DeletePlaylist(id) => format!("/playlist/{id}"),
        }
    }
}

/// A single query-string value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Ordered parameter set; insertion order is the serialization order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams(Vec<(&'static str, ParamValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(self, key: &'static str, value: impl Into<String>) -> Self {
        self.push(key, ParamValue::Text(value.into()))
    }

    #[must_use]
    pub fn int(self, key: &'static str, value: i64) -> Self {
        self.push(key, ParamValue::Int(value))
    }

    #[must_use]
    pub fn float(self, key: &'static str, value: f64) -> Self {
        self.push(key, ParamValue::Float(value))
    }

    fn push(mut self, key: &'static str, value: ParamValue) -> Self {
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
        self
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    #[cfg(test)]
    pub fn keys(&self) -> Vec<&'static str> {
        self.0.iter().map(|(k, _)| *k).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `key=value&...` with both sides percent-encoded.
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(&v.to_string())))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// A fully-specified GET request for one endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordQuery {
    pub endpoint: Endpoint,
    pub params: QueryParams,
}

impl RecordQuery {
    pub fn new(endpoint: Endpoint, params: QueryParams) -> Self {
        Self { endpoint, params }
    }

    pub fn bare(endpoint: Endpoint) -> Self {
        Self::new(endpoint, QueryParams::new())
    }

    /// Absolute URL against the configured backend.
    pub fn url(&self, config: &DashboardConfig) -> String {
        let base = config.api_url(&self.endpoint.path());
        if self.params.is_empty() {
            base
        } else {
            format!("{base}?{}", self.params.to_query_string())
        }
    }
}
