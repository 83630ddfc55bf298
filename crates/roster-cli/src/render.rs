//! Table and JSON rendering of a view page.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use roster_core::{QueryState, SortSpec, View};
use roster_model::{Field, Record, RecordId};
use serde::Serialize;

/// Marker shown in the status column of the row being edited.
pub const EDITING_MARKER: &str = "✎ editing";

/// Render the current page as a table followed by a one-line footer.
pub fn render_page(
    view: &View,
    query: &QueryState,
    editing: Option<RecordId>,
    use_color: bool,
) -> String {
    let mut table = Table::new();
    apply_table_style(&mut table);
    if use_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    let mut header = vec![header_cell("#"), header_cell("Id")];
    header.extend(
        Field::ALL
            .iter()
            .map(|field| header_cell(&column_label(*field, query.sort()))),
    );
    header.push(header_cell(""));
    table.set_header(header);

    for (offset, record) in view.items.iter().enumerate() {
        let is_editing = editing == Some(record.id);
        table.add_row(record_row(view.row_number(offset), record, is_editing));
    }

    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);

    format!("{table}\n{}", footer(view, query))
}

/// `"11-20 of 97 · page 2/10 · search \"an\" · salary descending"`.
pub fn footer(view: &View, query: &QueryState) -> String {
    let mut parts = vec![
        view.range_label(),
        format!(
            "page {}/{}",
            if view.total_filtered == 0 {
                0
            } else {
                view.page_index + 1
            },
            view.page_count()
        ),
    ];
    if !query.search().is_empty() {
        parts.push(format!("search \"{}\"", query.search()));
    }
    if let Some(sort) = query.sort() {
        parts.push(format!("{} {}", sort.key.as_str(), sort.direction));
    }
    parts.join(" · ")
}

/// Column header with the sort arrow when the column is active.
pub fn column_label(field: Field, sort: Option<SortSpec>) -> String {
    match sort {
        Some(spec) if spec.key == field => format!("{} {}", field.label(), spec.direction.arrow()),
        _ => field.label().to_string(),
    }
}

fn record_row(row_number: usize, record: &Record, is_editing: bool) -> Vec<Cell> {
    let mut cells = vec![
        Cell::new(row_number).fg(Color::DarkGrey),
        Cell::new(record.id.short()).fg(Color::DarkGrey),
    ];
    cells.extend(Field::ALL.iter().map(|field| {
        let cell = Cell::new(record.display_value(*field));
        if is_editing {
            cell.fg(Color::Yellow)
        } else {
            cell
        }
    }));
    cells.push(if is_editing {
        Cell::new(EDITING_MARKER)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("")
    });
    cells
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageJson<'a> {
    page: usize,
    page_size: usize,
    page_count: usize,
    total_filtered: usize,
    items: &'a [Record],
}

/// Render the current page as pretty JSON.
pub fn render_json(view: &View) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&PageJson {
        page: view.page_index + 1,
        page_size: view.page_size.get(),
        page_count: view.page_count(),
        total_filtered: view.total_filtered,
        items: &view.items,
    })
}
