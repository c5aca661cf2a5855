//! Simple read-only table with loading and empty states.
//!
//! DESIGN
//! ======
//! Pages map their records into `TableRow`s with pure helpers so the
//! column mapping stays testable without a DOM.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::status_badge::StatusBadge;

/// One rendered cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableCell {
    Text(String),
    Strong(String),
    /// Rendered through `StatusBadge`.
    Status(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<TableCell>,
}

#[component]
pub fn DataTable(
    headers: Vec<&'static str>,
    rows: Signal<Vec<TableRow>>,
    loading: Signal<bool>,
    #[prop(default = "Nothing here yet.")] empty: &'static str,
) -> impl IntoView {
    let colspan = headers.len().to_string();

    let body = move || {
        if loading.get() {
            return view! {
                <tr>
                    <td class="data-table__status" colspan=colspan.clone()>"Loading..."</td>
                </tr>
            }
            .into_any();
        }
        let rows = rows.get();
        if rows.is_empty() {
            return view! {
                <tr>
                    <td class="data-table__status" colspan=colspan.clone()>{empty}</td>
                </tr>
            }
            .into_any();
        }
        rows.into_iter()
            .map(|row| {
                view! {
                    <tr data-key=row.key>
                        {row.cells.into_iter().map(render_cell).collect_view()}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table-wrap">
            <table class="data-table">
                <thead>
                    <tr>{headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

fn render_cell(cell: TableCell) -> impl IntoView {
    match cell {
        TableCell::Text(text) => view! { <td>{text}</td> }.into_any(),
        TableCell::Strong(text) => view! { <td><strong>{text}</strong></td> }.into_any(),
        TableCell::Status(status) => view! { <td><StatusBadge status=status/></td> }.into_any(),
    }
}
