use serde_json::json;

use super::*;

fn record(value: serde_json::Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// =============================================================
// columns_for
// =============================================================

#[test]
fn track_and_artist_always_lead() {
    let columns = columns_for(&Record::new(), &[]);
    assert_eq!(columns, vec![TRACK_COLUMN, ARTIST_COLUMN]);
}

#[test]
fn energy_only_record_yields_three_columns() {
    let rows = vec![record(json!({ "track_name": "X", "artist_name": "Y", "energy": 0.5 }))];
    let table = TableModel::infer(&rows, &[]).unwrap();
    assert_eq!(table.labels(), vec!["Track", "Artist", "Energy"]);
    assert_eq!(table.rows, vec![vec!["X".to_owned(), "Y".to_owned(), "0.50".to_owned()]]);
}

#[test]
fn well_known_columns_follow_priority_order_not_key_order() {
    let first = record(json!({
        "popularity": 80,
        "danceability": 0.7,
        "tempo": 128.0,
        "genre_name": "house",
        "energy": 0.9,
        "track_name": "T",
        "artist_name": "A",
    }));
    let labels: Vec<_> = columns_for(&first, &[]).iter().map(|c| c.label).collect();
    assert_eq!(
        labels,
        vec!["Track", "Artist", "Genre", "Tempo", "Energy", "Danceability", "Popularity"]
    );
}

#[test]
fn extra_columns_append_after_well_known_in_caller_order() {
    let first = record(json!({ "track_name": "T", "artist_name": "A", "popularity": 70 }));
    let extra = [
        ColumnSpec::right("best_chart_position", "Best Rank"),
        ColumnSpec::right("weeks_on_chart", "Weeks"),
    ];
    let labels: Vec<_> = columns_for(&first, &extra).iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["Track", "Artist", "Popularity", "Best Rank", "Weeks"]);
}

#[test]
fn unknown_keys_are_not_inferred() {
    let first = record(json!({ "track_name": "T", "artist_name": "A", "year": 1994, "best_rank": 3 }));
    assert_eq!(columns_for(&first, &[]).len(), 2);
}

#[test]
fn alignment_is_right_for_numeric_well_known_columns() {
    for column in WELL_KNOWN_COLUMNS {
        let expected = if column.key == "genre_name" { Align::Left } else { Align::Right };
        assert_eq!(column.align, expected, "{}", column.key);
    }
    assert_eq!(TRACK_COLUMN.align, Align::Left);
    assert_eq!(ARTIST_COLUMN.align, Align::Left);
}

#[test]
fn extra_columns_default_to_left() {
    assert_eq!(ColumnSpec::left("track_type", "Type").align, Align::Left);
    assert_eq!(ColumnSpec::left("track_type", "Type").format, CellFormat::Raw);
}

// =============================================================
// TableModel
// =============================================================

#[test]
fn empty_result_renders_nothing() {
    assert_eq!(TableModel::infer(&[], &[]), None);
    assert_eq!(TableModel::infer(&[], &[ColumnSpec::right("year", "Year")]), None);
    assert_eq!(TableModel::with_columns(&[], &[TRACK_COLUMN]), None);
}

#[test]
fn header_comes_from_first_row_only() {
    let rows = vec![
        record(json!({ "track_name": "one", "artist_name": "a", "tempo": 120 })),
        record(json!({ "track_name": "two", "artist_name": "b", "energy": 0.4, "popularity": 50 })),
        record(json!({ "track_name": "three" })),
    ];
    let table = TableModel::infer(&rows, &[]).unwrap();
    assert_eq!(table.labels(), vec!["Track", "Artist", "Tempo"]);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[1], vec!["two".to_owned(), "b".to_owned(), String::new()]);
    assert_eq!(table.rows[2], vec!["three".to_owned(), String::new(), String::new()]);
}

#[test]
fn rows_keep_received_order() {
    let rows: Vec<Record> = ["c", "a", "b"]
        .iter()
        .map(|name| record(json!({ "track_name": name, "artist_name": "x" })))
        .collect();
    let table = TableModel::infer(&rows, &[]).unwrap();
    let names: Vec<_> = table.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[test]
fn fixed_columns_skip_inference() {
    let rows = vec![record(json!({ "artist_name": "Muse", "track_count": 12, "avg_tempo": 121.456 }))];
    let columns = [
        ColumnSpec::left("artist_name", "Artist"),
        ColumnSpec::right("track_count", "Tracks"),
        ColumnSpec::right("avg_tempo", "Avg Tempo").fixed2(),
    ];
    let table = TableModel::with_columns(&rows, &columns).unwrap();
    assert_eq!(table.labels(), vec!["Artist", "Tracks", "Avg Tempo"]);
    assert_eq!(table.rows[0], vec!["Muse".to_owned(), "12".to_owned(), "121.46".to_owned()]);
}

// =============================================================
// format_cell
// =============================================================

#[test]
fn tempo_and_popularity_render_unrounded() {
    let row = record(json!({ "tempo": 127.983, "popularity": 64 }));
    assert_eq!(format_cell(&row, &WELL_KNOWN_COLUMNS[1]), "127.983");
    assert_eq!(format_cell(&row, &WELL_KNOWN_COLUMNS[4]), "64");
}

#[test]
fn whole_floats_render_without_fraction() {
    let row = record(json!({ "tempo": 120.0 }));
    assert_eq!(format_cell(&row, &WELL_KNOWN_COLUMNS[1]), "120");
}

#[test]
fn energy_and_danceability_fix_two_decimals() {
    let row = record(json!({ "energy": 0.8123, "danceability": 1 }));
    assert_eq!(format_cell(&row, &WELL_KNOWN_COLUMNS[2]), "0.81");
    assert_eq!(format_cell(&row, &WELL_KNOWN_COLUMNS[3]), "1.00");
}

#[test]
fn fixed2_parses_numeric_strings() {
    let row = record(json!({ "energy": "0.456" }));
    assert_eq!(format_cell(&row, &WELL_KNOWN_COLUMNS[2]), "0.46");
}

#[test]
fn fixed2_rounds_ties_away_from_zero() {
    let energy = &WELL_KNOWN_COLUMNS[2];
    let cell = |v: serde_json::Value| format_cell(&record(json!({ "energy": v })), energy);
    assert_eq!(cell(json!(0.125)), "0.13");
    assert_eq!(cell(json!(0.625)), "0.63");
    assert_eq!(cell(json!(0.375)), "0.38");
    assert_eq!(cell(json!(-0.125)), "-0.13");
    // 1.005 is stored just below the tie.
    assert_eq!(cell(json!(1.005)), "1.00");
}

#[test]
fn fixed2_renders_empty_for_null_or_text() {
    let row = record(json!({ "energy": null, "danceability": "n/a" }));
    assert_eq!(format_cell(&row, &WELL_KNOWN_COLUMNS[2]), "");
    assert_eq!(format_cell(&row, &WELL_KNOWN_COLUMNS[3]), "");
}

#[test]
fn raw_values_for_extra_columns() {
    let row = record(json!({ "track_type": "gem", "weeks_on_chart": 12, "explicit": true, "note": null }));
    assert_eq!(format_cell(&row, &ColumnSpec::left("track_type", "Type")), "gem");
    assert_eq!(format_cell(&row, &ColumnSpec::right("weeks_on_chart", "Weeks")), "12");
    assert_eq!(format_cell(&row, &ColumnSpec::left("explicit", "Explicit")), "true");
    assert_eq!(format_cell(&row, &ColumnSpec::left("note", "Note")), "");
    assert_eq!(format_cell(&row, &ColumnSpec::left("absent", "Absent")), "");
}
