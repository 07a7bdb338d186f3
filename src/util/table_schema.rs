//! Column inference and cell formatting for result tables.
//!
//! DESIGN
//! ======
//! Backend rows have no declared schema. Columns are chosen by testing the
//! first row for membership of a fixed, ordered list of well-known keys; any
//! other column must be declared by the caller. Inference runs on every
//! render and is never cached, so a new result set can never inherit columns
//! from the previous one.

#[cfg(test)]
#[path = "table_schema_test.rs"]
mod table_schema_test;

use serde_json::Value;

use crate::net::types::Record;

/// Horizontal alignment for a column's header and cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// How a cell value is turned into text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellFormat {
    /// Value as received: strings verbatim, numbers unrounded.
    #[default]
    Raw,
    /// Numeric value fixed to two decimal places.
    Fixed2,
}

/// One renderable column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub align: Align,
    pub format: CellFormat,
}

impl ColumnSpec {
    pub const fn left(key: &'static str, label: &'static str) -> Self {
        Self { key, label, align: Align::Left, format: CellFormat::Raw }
    }

    pub const fn right(key: &'static str, label: &'static str) -> Self {
        Self { key, label, align: Align::Right, format: CellFormat::Raw }
    }

    #[must_use]
    pub const fn fixed2(self) -> Self {
        Self { format: CellFormat::Fixed2, ..self }
    }
}

pub const TRACK_COLUMN: ColumnSpec = ColumnSpec::left("track_name", "Track");
pub const ARTIST_COLUMN: ColumnSpec = ColumnSpec::left("artist_name", "Artist");

/// Auto-detected columns, in display priority order.
pub const WELL_KNOWN_COLUMNS: [ColumnSpec; 5] = [
    ColumnSpec::left("genre_name", "Genre"),
    ColumnSpec::right("tempo", "Tempo"),
    ColumnSpec::right("energy", "Energy").fixed2(),
    ColumnSpec::right("danceability", "Danceability").fixed2(),
    ColumnSpec::right("popularity", "Popularity"),
];

/// Ordered column set for a result whose first row is `first`.
///
/// Track and Artist always lead; each well-known column follows iff its key
/// is present on `first`; `extra` is appended in the order given.
pub fn columns_for(first: &Record, extra: &[ColumnSpec]) -> Vec<ColumnSpec> {
    let mut columns = vec![TRACK_COLUMN, ARTIST_COLUMN];
    columns.extend(WELL_KNOWN_COLUMNS.iter().copied().filter(|c| first.contains_key(c.key)));
    columns.extend_from_slice(extra);
    columns
}

/// Text for `column` in `record`. Missing keys render as an empty cell.
pub fn format_cell(record: &Record, column: &ColumnSpec) -> String {
    let Some(value) = record.get(column.key) else {
        return String::new();
    };
    match column.format {
        CellFormat::Raw => format_raw(value),
        CellFormat::Fixed2 => numeric_value(value).map(format_fixed2).unwrap_or_default(),
    }
}

fn format_raw(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string()),
        },
        other => other.to_string(),
    }
}

/// Two decimals with ties rounded away from zero (`0.125` -> `0.13`); plain
/// `{:.2}` would round them to even.
fn format_fixed2(n: f64) -> String {
    format!("{:.2}", (n * 100.0).round() / 100.0)
}

fn numeric_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// A result set laid out against a resolved column list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableModel {
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Infer columns from the first record. `None` when there are no records,
    /// since no schema can be inferred from zero rows.
    pub fn infer(records: &[Record], extra: &[ColumnSpec]) -> Option<Self> {
        let first = records.first()?;
        Some(Self::layout(records, columns_for(first, extra)))
    }

    /// Lay records out against an explicit column list. `None` when empty.
    pub fn with_columns(records: &[Record], columns: &[ColumnSpec]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        Some(Self::layout(records, columns.to_vec()))
    }

    fn layout(records: &[Record], columns: Vec<ColumnSpec>) -> Self {
        let rows = records
            .iter()
            .map(|record| columns.iter().map(|c| format_cell(record, c)).collect())
            .collect();
        Self { columns, rows }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }
}
