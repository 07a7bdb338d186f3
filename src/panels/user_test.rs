use serde_json::json;

use super::*;

fn form() -> UserForm {
    UserForm {
        user_id: "7".to_owned(),
        username: "ana".to_owned(),
        email: "ana@example.com".to_owned(),
        playlist_name: "Road trip".to_owned(),
        spotify_ids: " a1 , b2,, c3 ".to_owned(),
        delete_playlist_id: "12".to_owned(),
    }
}

// =============================================================
// Create / update
// =============================================================

#[test]
fn upsert_requires_username_and_email() {
    let missing_email = UserForm { email: "  ".to_owned(), ..form() };
    assert_eq!(build_upsert_request(&missing_email), Err(ValidationError::CredentialsRequired));
    let missing_name = UserForm { username: String::new(), ..form() };
    assert_eq!(build_upsert_request(&missing_name), Err(ValidationError::CredentialsRequired));
}

#[test]
fn upsert_includes_numeric_user_id() {
    let request = build_upsert_request(&form()).unwrap();
    assert_eq!(request.method, Mutation::Post);
    assert_eq!(request.endpoint, Endpoint::UpsertUser);
    assert_eq!(request.body, Some(json!({ "username": "ana", "email": "ana@example.com", "user_id": 7 })));
}

#[test]
fn upsert_without_user_id_creates() {
    let request = build_upsert_request(&UserForm { user_id: "abc".to_owned(), ..form() }).unwrap();
    assert_eq!(request.body, Some(json!({ "username": "ana", "email": "ana@example.com" })));
}

#[test]
fn upsert_outcome_needs_user_id() {
    let ok = MutationResponse { user_id: Some(9), message: Some("User created".to_owned()), ..Default::default() };
    assert_eq!(upsert_outcome(&ok), Ok((9, "User created".to_owned())));

    let rejected = MutationResponse { error: Some("email taken".to_owned()), ..Default::default() };
    assert_eq!(upsert_outcome(&rejected), Err(FetchFailure::Rejected("email taken".to_owned())));
}

#[test]
fn rejected_upsert_shows_generic_message() {
    let mut slot = MessageSlot::default();
    slot.begin(Ok(()));
    let outcome = upsert_outcome(&MutationResponse::default()).map(|(_, message)| Some(message));
    slot.settle(outcome, UPSERT_FAILED);
    assert_eq!(slot.error.as_deref(), Some("Error creating/updating user"));
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn lookups_need_numeric_user_id() {
    let blank = UserForm::default();
    assert_eq!(build_user_query(&blank), Err(ValidationError::UserIdRequired));
    let words = UserForm { user_id: "seven".to_owned(), ..form() };
    assert_eq!(build_user_playlists_query(&words), Err(ValidationError::UserIdRequired));
}

#[test]
fn lookup_paths() {
    assert_eq!(build_user_query(&form()).unwrap().endpoint.path(), "/user/7");
    assert_eq!(build_user_playlists_query(&form()).unwrap().endpoint.path(), "/user/7/playlists");
}

// =============================================================
// Save / delete
// =============================================================

#[test]
fn save_validates_in_order() {
    let no_user = UserForm { user_id: String::new(), playlist_name: String::new(), ..form() };
    assert_eq!(build_save_request(&no_user), Err(ValidationError::UserIdRequired));
    let no_name = UserForm { playlist_name: " ".to_owned(), ..form() };
    assert_eq!(build_save_request(&no_name), Err(ValidationError::PlaylistNameRequired));
    let no_ids = UserForm { spotify_ids: ",".to_owned(), ..form() };
    assert_eq!(build_save_request(&no_ids), Err(ValidationError::SpotifyIdsRequired));
}

#[test]
fn save_body_carries_trimmed_ids() {
    let request = build_save_request(&form()).unwrap();
    assert_eq!(request.endpoint, Endpoint::SavePlaylist);
    assert_eq!(
        request.body,
        Some(json!({ "user_id": 7, "playlist_name": "Road trip", "spotify_ids": ["a1", "b2", "c3"] }))
    );
}

#[test]
fn delete_needs_numeric_playlist_id() {
    let bad = UserForm { delete_playlist_id: "x".to_owned(), ..form() };
    assert_eq!(build_delete_request(&bad), Err(ValidationError::PlaylistIdRequired));

    let request = build_delete_request(&form()).unwrap();
    assert_eq!(request.method, Mutation::Delete);
    assert_eq!(request.endpoint.path(), "/playlist/12");
    assert_eq!(request.body, None);
}

#[test]
fn playlist_table_columns() {
    let labels: Vec<_> = PLAYLIST_COLUMNS.iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["Playlist ID", "Name", "Created", "Tracks"]);
}
