use super::*;

fn rock() -> Genre {
    Genre { genre_id: 1, genre_name: "rock".to_owned() }
}

#[test]
fn genres_load_replaces_list() {
    let mut state = BootstrapState::default();
    state.apply_genres(Ok(vec![rock()]));
    assert_eq!(state.genres, vec![rock()]);
    assert_eq!(state.global_error, None);
}

#[test]
fn genres_failure_sets_global_error_only() {
    let mut state = BootstrapState::default();
    state.apply_genres(Err(FetchFailure::Status(500)));
    assert!(state.genres.is_empty());
    assert_eq!(state.global_error.as_deref(), Some(GENRES_FAILED_MESSAGE));
    assert_eq!(state.db_status, None);
}

#[test]
fn health_failure_clears_status_without_global_error() {
    let mut state = BootstrapState {
        db_status: Some(DbStatus { status: "success".to_owned(), message: "ok".to_owned(), total_tracks: Some(3) }),
        ..BootstrapState::default()
    };
    state.apply_db_status(Err(FetchFailure::Transport("offline".to_owned())));
    assert_eq!(state.db_status, None);
    assert_eq!(state.global_error, None);
}

#[test]
fn status_line_includes_track_count_when_present() {
    let status = DbStatus {
        status: "success".to_owned(),
        message: "Database connection successful!".to_owned(),
        total_tracks: Some(114_000),
    };
    assert_eq!(db_status_line(&status), "success — Database connection successful! (114000 tracks)");
}

#[test]
fn status_line_omits_missing_track_count() {
    let status = DbStatus { status: "error".to_owned(), message: "Could not connect".to_owned(), total_tracks: None };
    assert_eq!(db_status_line(&status), "error — Could not connect");
}

#[test]
fn database_outage_reaches_the_header() {
    let body = r#"{"status":"error","message":"Could not connect to database"}"#;
    let mut state = BootstrapState::default();
    state.apply_db_status(crate::net::types::decode_health(500, body));
    let status = state.db_status.as_ref().unwrap();
    assert_eq!(status.status, "error");
    assert_eq!(db_status_line(status), "error — Could not connect to database");
}
