//! Result tables for backend record sequences.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ResultTable` infers its columns from the first row on every render;
//! `FixedTable` renders a panel-declared column list. Both render nothing for
//! an empty sequence, leaving "no results" messaging to the caller.

#[cfg(test)]
#[path = "result_table_test.rs"]
mod result_table_test;

use leptos::prelude::*;

use crate::net::types::Record;
use crate::util::table_schema::{Align, ColumnSpec, TableModel};

/// Schema-inferring table: Track, Artist, detected well-known columns, then
/// `extra_columns`.
#[component]
pub fn ResultTable(
    #[prop(into)] rows: Signal<Vec<Record>>,
    #[prop(optional)] extra_columns: Vec<ColumnSpec>,
) -> impl IntoView {
    move || rows.with(|records| TableModel::infer(records, &extra_columns)).map(table_view)
}

/// Table with an explicit column list and no inference.
#[component]
pub fn FixedTable(#[prop(into)] rows: Signal<Vec<Record>>, columns: Vec<ColumnSpec>) -> impl IntoView {
    move || rows.with(|records| TableModel::with_columns(records, &columns)).map(table_view)
}

fn table_view(model: TableModel) -> impl IntoView {
    let labels = model.labels();
    let TableModel { columns, rows } = model;
    let classes: Vec<&'static str> = columns.iter().map(|c| cell_class(c.align)).collect();

    let header = labels
        .into_iter()
        .zip(classes.iter().copied())
        .map(|(label, class)| view! { <th class=class>{label}</th> })
        .collect::<Vec<_>>();

    let body = rows
        .into_iter()
        .map(|row| {
            let cells = row
                .into_iter()
                .zip(classes.iter().copied())
                .map(|(text, class)| view! { <td class=class>{text}</td> })
                .collect::<Vec<_>>();
            view! { <tr>{cells}</tr> }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="result-table">
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

fn cell_class(align: Align) -> &'static str {
    match align {
        Align::Left => "result-table__cell result-table__cell--left",
        Align::Right => "result-table__cell result-table__cell--right",
    }
}
