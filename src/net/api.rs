//! Fetch gateway for the music backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): every call returns [`FetchFailure::Unavailable`]
//! since these requests are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call performs exactly one request and returns a typed
//! [`FetchFailure`] instead of panicking. Callers decide what the user sees;
//! the gateway never retries and sets no timeout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::query::{Endpoint, RecordQuery};
#[cfg(feature = "csr")]
use super::types::{check_status, decode_health, decode_object};
use super::types::{DbStatus, FetchFailure, Record};
use crate::config::DashboardConfig;

/// HTTP verb for body-carrying mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Post,
    Delete,
}

impl Mutation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for FetchFailure {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Parse(e.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Fetch a record sequence for `query`.
///
/// # Errors
///
/// Returns a [`FetchFailure`] on network failure, non-2xx status, or a body
/// that is not an array of objects.
pub async fn fetch_records(config: &DashboardConfig, query: &RecordQuery) -> Result<Vec<Record>, FetchFailure> {
    fetch_object(config, query).await
}

/// Fetch and decode a single JSON body for `query`.
///
/// # Errors
///
/// Returns a [`FetchFailure`] on network failure, non-2xx status, or a body
/// that does not decode as `T`.
pub async fn fetch_object<T: DeserializeOwned>(config: &DashboardConfig, query: &RecordQuery) -> Result<T, FetchFailure> {
    #[cfg(feature = "csr")]
    {
        let url = query.url(config);
        log::debug!("GET {url}");
        let resp = gloo_net::http::Request::get(&url).send().await?;
        check_status(resp.status())?;
        let body = resp.text().await?;
        decode_object(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, query);
        Err(FetchFailure::Unavailable)
    }
}

/// Fetch the backend health readout from `/api/test-db`.
///
/// Unlike [`fetch_object`], a non-2xx response still yields its body when it
/// decodes as a [`DbStatus`].
///
/// # Errors
///
/// Returns a [`FetchFailure`] on network failure or a body that is not a
/// health readout.
pub async fn fetch_db_status(config: &DashboardConfig) -> Result<DbStatus, FetchFailure> {
    #[cfg(feature = "csr")]
    {
        let url = RecordQuery::bare(Endpoint::TestDb).url(config);
        log::debug!("GET {url}");
        let resp = gloo_net::http::Request::get(&url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        decode_health(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(FetchFailure::Unavailable)
    }
}

/// Send a mutation to `endpoint`, with an optional JSON body.
///
/// # Errors
///
/// Returns a [`FetchFailure`] on network failure, non-2xx status, or a body
/// that does not decode as `T`.
pub async fn send_json<T: DeserializeOwned>(
    config: &DashboardConfig,
    method: Mutation,
    endpoint: &Endpoint,
    body: Option<&serde_json::Value>,
) -> Result<T, FetchFailure> {
    #[cfg(feature = "csr")]
    {
        let url = config.api_url(&endpoint.path());
        log::debug!("{} {url}", method.as_str());
        let builder = match method {
            Mutation::Post => gloo_net::http::Request::post(&url),
            Mutation::Delete => gloo_net::http::Request::delete(&url),
        };
        let resp = match body {
            Some(payload) => builder.json(payload)?.send().await?,
            None => builder.send().await?,
        };
        check_status(resp.status())?;
        let text = resp.text().await?;
        decode_object(&text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, method, endpoint, body);
        Err(FetchFailure::Unavailable)
    }
}
