//! Users and saved playlists panel.
//!
//! DESIGN
//! ======
//! Create/update, save and delete share one status line ([`MessageSlot`]).
//! User info is a raw JSON readout; the saved-playlist list is a fixed table.
//! A successful create/update writes the returned id back into the form so
//! the follow-up lookups and saves target the new user.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::*;
use serde_json::{Value, json};

use super::{
    run_readout_query, run_record_query, run_request, slot_empty, slot_error, slot_loading, slot_readout, slot_rows,
    use_config,
};
use crate::components::fields::{IdListField, TextField};
use crate::components::json_readout::JsonReadout;
use crate::components::panel_status::PanelStatus;
use crate::components::result_table::FixedTable;
use crate::config::DashboardConfig;
use crate::net::api::{self, Mutation};
use crate::net::query::{Endpoint, RecordQuery};
use crate::net::types::{FetchFailure, MutationResponse};
use crate::state::panel::{MessageSlot, ReadoutSlot, RecordSlot, ValidationError};
use crate::util::form::{non_blank, parse_integer_input, split_id_list};
use crate::util::table_schema::ColumnSpec;

pub const PLAYLIST_COLUMNS: [ColumnSpec; 4] = [
    ColumnSpec::left("playlist_id", "Playlist ID"),
    ColumnSpec::left("name", "Name"),
    ColumnSpec::left("created_at", "Created"),
    ColumnSpec::right("track_count", "Tracks"),
];

const UPSERT_FAILED: &str = "Error creating/updating user";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    /// Free text; optional for create, required for everything else.
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub playlist_name: String,
    pub spotify_ids: String,
    pub delete_playlist_id: String,
}

impl UserForm {
    fn user_id(&self) -> Result<i64, ValidationError> {
        parse_integer_input(&self.user_id).ok_or(ValidationError::UserIdRequired)
    }
}

/// A JSON body bound for one mutation endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationRequest {
    pub method: Mutation,
    pub endpoint: Endpoint,
    pub body: Option<Value>,
}

/// `POST /user`. A parseable user id is included so the backend updates
/// instead of creating.
///
/// # Errors
///
/// Returns [`ValidationError::CredentialsRequired`] when username or email is
/// blank.
pub fn build_upsert_request(form: &UserForm) -> Result<MutationRequest, ValidationError> {
    let (Some(username), Some(email)) = (non_blank(&form.username), non_blank(&form.email)) else {
        return Err(ValidationError::CredentialsRequired);
    };
    let mut body = json!({ "username": username, "email": email });
    if let (Some(id), Value::Object(map)) = (parse_integer_input(&form.user_id), &mut body) {
        map.insert("user_id".to_owned(), json!(id));
    }
    Ok(MutationRequest { method: Mutation::Post, endpoint: Endpoint::UpsertUser, body: Some(body) })
}

/// # Errors
///
/// Returns [`ValidationError::UserIdRequired`] unless the user id is numeric.
pub fn build_user_query(form: &UserForm) -> Result<RecordQuery, ValidationError> {
    Ok(RecordQuery::bare(Endpoint::User(form.user_id()?)))
}

/// # Errors
///
/// Returns [`ValidationError::UserIdRequired`] unless the user id is numeric.
pub fn build_user_playlists_query(form: &UserForm) -> Result<RecordQuery, ValidationError> {
    Ok(RecordQuery::bare(Endpoint::UserPlaylists(form.user_id()?)))
}

/// `POST /playlist/save` with the trimmed id list.
///
/// # Errors
///
/// Checks user id, then playlist name, then the id list.
pub fn build_save_request(form: &UserForm) -> Result<MutationRequest, ValidationError> {
    let user_id = form.user_id()?;
    let name = non_blank(&form.playlist_name).ok_or(ValidationError::PlaylistNameRequired)?;
    let ids = split_id_list(&form.spotify_ids);
    if ids.is_empty() {
        return Err(ValidationError::SpotifyIdsRequired);
    }
    let body = json!({ "user_id": user_id, "playlist_name": name, "spotify_ids": ids });
    Ok(MutationRequest { method: Mutation::Post, endpoint: Endpoint::SavePlaylist, body: Some(body) })
}

/// # Errors
///
/// Returns [`ValidationError::PlaylistIdRequired`] unless the id is numeric.
pub fn build_delete_request(form: &UserForm) -> Result<MutationRequest, ValidationError> {
    let id = parse_integer_input(&form.delete_playlist_id).ok_or(ValidationError::PlaylistIdRequired)?;
    Ok(MutationRequest { method: Mutation::Delete, endpoint: Endpoint::DeletePlaylist(id), body: None })
}

/// A create/update only counts when the backend hands back a user id.
///
/// # Errors
///
/// Returns [`FetchFailure::Rejected`] when the body has no `user_id`.
pub fn upsert_outcome(response: &MutationResponse) -> Result<(i64, String), FetchFailure> {
    match response.user_id {
        Some(id) => Ok((id, response.message_or("User saved."))),
        None => Err(FetchFailure::Rejected(
            response.error.clone().unwrap_or_else(|| "response carried no user_id".to_owned()),
        )),
    }
}

async fn send(config: &DashboardConfig, request: &MutationRequest) -> Result<MutationResponse, FetchFailure> {
    api::send_json(config, request.method, &request.endpoint, request.body.as_ref()).await
}

#[component]
pub fn UserPanel() -> impl IntoView {
    let config = use_config();
    let form = RwSignal::new(UserForm::default());
    let notice = RwSignal::new(MessageSlot::default());
    let info = RwSignal::new(ReadoutSlot::default());
    let playlists = RwSignal::new(RecordSlot::default());

    let upsert_config = config.clone();
    let on_upsert = move |_| {
        let built = form.with_untracked(build_upsert_request);
        let config = upsert_config.clone();
        run_request(notice, built, UPSERT_FAILED, move |request: MutationRequest| async move {
            let (user_id, message) = upsert_outcome(&send(&config, &request).await?)?;
            let _ = form.try_update(|f| f.user_id = user_id.to_string());
            Ok::<_, FetchFailure>(Some(message))
        });
    };

    let info_config = config.clone();
    let on_load_user = move |_| {
        let built = form.with_untracked(build_user_query);
        run_readout_query(&info_config, info, built, "Error loading user.");
    };
    let playlists_config = config.clone();
    let on_load_playlists = move |_| {
        let built = form.with_untracked(build_user_playlists_query);
        run_record_query(&playlists_config, playlists, built, "Error loading playlists.");
    };

    let save_config = config.clone();
    let on_save = move |_| {
        let built = form.with_untracked(build_save_request);
        let config = save_config.clone();
        run_request(notice, built, "Error saving playlist.", move |request: MutationRequest| async move {
            Ok::<_, FetchFailure>(Some(send(&config, &request).await?.message_or("Saved playlist.")))
        });
    };
    let on_delete = move |_| {
        let built = form.with_untracked(build_delete_request);
        let config = config.clone();
        run_request(notice, built, "Error deleting playlist.", move |request: MutationRequest| async move {
            Ok::<_, FetchFailure>(Some(send(&config, &request).await?.message_or("Deleted playlist.")))
        });
    };

    let save_label = move || {
        form.with(|f| match non_blank(&f.user_id) {
            Some(id) => format!("Save playlist for user {id}"),
            None => "Save playlist for user (set user id first)".to_owned(),
        })
    };

    view! {
        <section class="panel panel--user">
            <h2>"Users & Saved Playlists"</h2>

            <div class="panel__section">
                <h3>"Create / Update User"</h3>
                <div class="panel__controls">
                    <TextField
                        label="User ID (optional):"
                        value=Signal::derive(move || form.with(|f| f.user_id.clone()))
                        on_change=Callback::new(move |v: String| form.update(|f| f.user_id = v))
                    />
                    <TextField
                        label="Username:"
                        value=Signal::derive(move || form.with(|f| f.username.clone()))
                        on_change=Callback::new(move |v: String| form.update(|f| f.username = v))
                    />
                    <TextField
                        label="Email:"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_change=Callback::new(move |v: String| form.update(|f| f.email = v))
                    />
                    <button class="btn" on:click=on_upsert>
                        "Save user"
                    </button>
                </div>
            </div>

            <div class="panel__section">
                <h3>"Load User & Playlists"</h3>
                <div class="panel__controls">
                    <button class="btn" on:click=on_load_user>
                        "Load user info"
                    </button>
                    <button class="btn" on:click=on_load_playlists>
                        "Load user playlists"
                    </button>
                </div>
                <PanelStatus error=slot_error(info) loading=slot_loading(info)/>
                <JsonReadout value=slot_readout(info)/>
                <PanelStatus
                    error=slot_error(playlists)
                    loading=slot_loading(playlists)
                    empty=slot_empty(playlists)
                />
                <FixedTable rows=slot_rows(playlists) columns=PLAYLIST_COLUMNS.to_vec()/>
            </div>

            <div class="panel__section">
                <h3>"Save Playlist"</h3>
                <p class="panel__hint">
                    "Provide a playlist name and a comma-separated list of Spotify IDs (you can copy IDs from the Mix or Track Search tabs)."
                </p>
                <TextField
                    label="Playlist name:"
                    value=Signal::derive(move || form.with(|f| f.playlist_name.clone()))
                    on_change=Callback::new(move |v: String| form.update(|f| f.playlist_name = v))
                />
                <IdListField
                    label="Spotify IDs"
                    value=Signal::derive(move || form.with(|f| f.spotify_ids.clone()))
                    on_change=Callback::new(move |v: String| form.update(|f| f.spotify_ids = v))
                />
                <button class="btn" on:click=on_save>
                    {save_label}
                </button>
            </div>

            <div class="panel__section">
                <h3>"Delete Playlist"</h3>
                <div class="panel__controls">
                    <TextField
                        label="Playlist ID to delete:"
                        value=Signal::derive(move || form.with(|f| f.delete_playlist_id.clone()))
                        on_change=Callback::new(move |v: String| form.update(|f| f.delete_playlist_id = v))
                    />
                    <button class="btn" on:click=on_delete>
                        "Delete"
                    </button>
                </div>
            </div>

            <PanelStatus error=slot_error(notice) loading=slot_loading(notice)/>
            {move || notice.with(|s| s.value.clone()).map(|message| view! { <p class="panel__notice">{message}</p> })}
        </section>
    }
}
