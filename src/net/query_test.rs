use super::*;

fn config() -> DashboardConfig {
    DashboardConfig::new("http://localhost:5000")
}

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn static_endpoint_paths() {
    assert_eq!(Endpoint::Genres.path(), "/genres");
    assert_eq!(Endpoint::TestDb.path(), "/test-db");
    assert_eq!(Endpoint::GenrePlaylist.path(), "/playlist/genre");
    assert_eq!(Endpoint::ChartHits.path(), "/playlist/chart-hits");
    assert_eq!(Endpoint::HiddenGems.path(), "/playlist/hidden-gems");
    assert_eq!(Endpoint::Workout.path(), "/playlist/workout");
    assert_eq!(Endpoint::HappyMood.path(), "/playlist/mood/happy");
    assert_eq!(Endpoint::Decade.path(), "/playlist/decade");
    assert_eq!(Endpoint::Mix.path(), "/playlist/mix");
    assert_eq!(Endpoint::PlaylistStats.path(), "/playlist/stats");
    assert_eq!(Endpoint::SearchTracks.path(), "/search/tracks");
    assert_eq!(Endpoint::Artists.path(), "/artists");
    assert_eq!(Endpoint::UpsertUser.path(), "/user");
    assert_eq!(Endpoint::SavePlaylist.path(), "/playlist/save");
}

#[test]
fn id_endpoint_paths() {
    assert_eq!(Endpoint::User(12).path(), "/user/12");
    assert_eq!(Endpoint::UserPlaylists(12).path(), "/user/12/playlists");
    assert_eq!(Endpoint::DeletePlaylist(40).path(), "/playlist/40");
}

#[test]
fn name_segments_are_percent_encoded() {
    assert_eq!(
        Endpoint::ArtistPlaylist("Simon & Garfunkel".to_owned()).path(),
        "/playlist/artist/Simon%20%26%20Garfunkel"
    );
    assert_eq!(
        Endpoint::SimilarArtists("AC/DC".to_owned()).path(),
        "/artists/similar/AC%2FDC"
    );
}

// =============================================================
// QueryParams
// =============================================================

#[test]
fn params_serialize_in_insertion_order() {
    let params = QueryParams::new()
        .text("genre", "rock")
        .int("tempo_min", 120)
        .int("tempo_max", 140)
        .int("limit", 25);
    assert_eq!(params.to_query_string(), "genre=rock&tempo_min=120&tempo_max=140&limit=25");
}

#[test]
fn float_params_use_shortest_form() {
    let params = QueryParams::new().float("min_energy", 0.75).float("min_valence", 0.7).float("whole", 1.0);
    assert_eq!(params.to_query_string(), "min_energy=0.75&min_valence=0.7&whole=1");
}

#[test]
fn text_params_are_encoded() {
    let params = QueryParams::new().text("genre", "hip hop/rap");
    assert_eq!(params.to_query_string(), "genre=hip%20hop%2Frap");
}

#[test]
fn repeated_key_overwrites_in_place() {
    let params = QueryParams::new().int("limit", 10).text("genre", "pop").int("limit", 30);
    assert_eq!(params.keys(), vec!["limit", "genre"]);
    assert_eq!(params.get("limit"), Some(&ParamValue::Int(30)));
}

// =============================================================
// RecordQuery
// =============================================================

#[test]
fn url_without_params_has_no_question_mark() {
    let query = RecordQuery::bare(Endpoint::Genres);
    assert_eq!(query.url(&config()), "http://localhost:5000/api/genres");
}

#[test]
fn url_with_params_appends_query_string() {
    let query = RecordQuery::new(Endpoint::ArtistPlaylist("Adele".to_owned()), QueryParams::new().int("limit", 20));
    assert_eq!(query.url(&config()), "http://localhost:5000/api/playlist/artist/Adele?limit=20");
}
