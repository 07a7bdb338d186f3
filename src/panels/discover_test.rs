use serde_json::json;

use super::*;

fn record(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

#[test]
fn artist_search_sends_blank_text() {
    let query = build_artist_search_query("");
    assert_eq!(query.endpoint, Endpoint::Artists);
    assert_eq!(query.params.to_query_string(), "search=");
}

#[test]
fn artist_list_label_shows_name_and_id() {
    let artist = record(json!({ "artist_id": 42, "artist_name": "Björk" }));
    assert_eq!(artist_list_label(&artist), "Björk (id 42)");
}

#[test]
fn similar_requires_base_artist() {
    assert_eq!(build_similar_query(&SimilarForm::default()), Err(ValidationError::ArtistRequired));
}

#[test]
fn similar_defaults_and_encoded_name() {
    let form = SimilarForm { base_artist: "AC/DC".to_owned(), ..SimilarForm::default() };
    let query = build_similar_query(&form).unwrap();
    assert_eq!(query.endpoint.path(), "/artists/similar/AC%2FDC");
    assert_eq!(query.params.to_query_string(), "tempo_range=25&feature_range=0.25&min_tracks=5&limit=10");
}

#[test]
fn similar_stats_render_to_two_decimals() {
    let row = record(json!({
        "artist_name": "Muse",
        "track_count": 12,
        "avg_popularity": 71.333_333,
        "avg_tempo": 128,
        "avg_energy": 0.8,
    }));
    let cells: Vec<String> = SIMILAR_ARTIST_COLUMNS.iter().map(|c| format_cell(&row, c)).collect();
    assert_eq!(cells, vec!["Muse", "12", "71.33", "128.00", "0.80"]);
}

#[test]
fn track_search_requires_text() {
    assert_eq!(build_track_search_query("   "), Err(ValidationError::TrackQueryRequired));
}

#[test]
fn track_search_params() {
    let query = build_track_search_query(" love ").unwrap();
    assert_eq!(query.endpoint, Endpoint::SearchTracks);
    assert_eq!(query.params.to_query_string(), "query=love&limit=20");
}

#[test]
fn track_search_columns_are_fixed() {
    let labels: Vec<_> = TRACK_SEARCH_COLUMNS.iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["Track", "Artist", "Popularity", "Album", "Spotify ID"]);
}
