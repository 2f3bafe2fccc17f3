//! Plain-text rendering of the table for a terminal.

use crossterm::style::{Color, Stylize, style};
use ul_core::{RenderedTable, RowShade, SortKey, TableRenderer, ViewStore, toggle_country_label};

const COLUMN_GAP: &str = "  ";
const SORT_MARKER: &str = " ^";

// slate-800 / slate-500
const ODD_BACKGROUND: Color = Color::Rgb { r: 30, g: 41, b: 59 };
const EVEN_BACKGROUND: Color = Color::Rgb {
    r: 100,
    g: 116,
    b: 139,
};

/// Render the store's derived rows followed by a status line.
///
/// With `paint` set, shaded rows get ANSI backgrounds. Otherwise the shade is
/// shown as a marker in the leading gutter so it survives pipes and tests.
pub fn format_view(store: &ViewStore, paint: bool) -> String {
    let params = store.params();
    let rows = store.derived();
    let table = TableRenderer::render(&rows, params.show_colors);

    let mut out = format_table(&table, params.sort_key, paint);
    if table.is_empty() {
        out.push_str(if store.is_settled() {
            "  (no users)\n"
        } else {
            "  Loading users...\n"
        });
    }
    out.push_str(&format_status(store, table.rows.len()));
    out.push('\n');
    out
}

pub fn format_table(table: &RenderedTable, sort_key: SortKey, paint: bool) -> String {
    let header: Vec<String> = table
        .header
        .iter()
        .map(|cell| {
            if sort_key != SortKey::None && cell.sort_key == Some(sort_key) {
                format!("{}{}", cell.label, SORT_MARKER)
            } else {
                cell.label.to_string()
            }
        })
        .collect();

    let body: Vec<(RowShade, Vec<String>)> = table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            (
                row.shade,
                vec![
                    photo_label(&row.thumbnail),
                    row.first.clone(),
                    row.last.clone(),
                    row.country.clone(),
                    format!("delete #{}", index + 1),
                ],
            )
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for (_, cells) in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format!("  {}\n", join_padded(&header, &widths));
    for (shade, cells) in &body {
        let line = join_padded(cells, &widths);
        if paint {
            out.push_str(&format!("  {}\n", paint_row(&line, *shade)));
        } else {
            out.push_str(&format!("{} {}\n", gutter(*shade), line));
        }
    }
    out
}

pub fn format_status(store: &ViewStore, visible: usize) -> String {
    let params = store.params();
    let deleted = store.original().len().saturating_sub(store.current().len());

    format!(
        "Showing {visible} of {} users ({deleted} deleted) | sort: {} | filter: {} | colors: {} | [{}]",
        store.current().len(),
        params.sort_key,
        params.active_filter().map(str::trim).unwrap_or("-"),
        if params.show_colors { "on" } else { "off" },
        toggle_country_label(params.sort_key),
    )
}

/// Ids of the visible rows, one per line, numbered like the table
pub fn format_ids(store: &ViewStore) -> String {
    store
        .derived()
        .iter()
        .enumerate()
        .map(|(index, record)| format!("#{:<4} {}\n", index + 1, record.id()))
        .collect()
}

/// Last two path segments of a portrait URL, e.g. `men/12.jpg`
fn photo_label(thumbnail: &str) -> String {
    let segments: Vec<&str> = thumbnail.rsplit('/').take(2).collect();
    match segments.as_slice() {
        [file, dir] if !file.is_empty() => format!("{dir}/{file}"),
        [file, ..] if !file.is_empty() => file.to_string(),
        _ => String::from("-"),
    }
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

fn gutter(shade: RowShade) -> char {
    match shade {
        RowShade::Plain => ' ',
        RowShade::Odd => '▓',
        RowShade::Even => '░',
    }
}

fn paint_row(line: &str, shade: RowShade) -> String {
    match shade {
        RowShade::Plain => line.to_string(),
        RowShade::Odd => style(line).with(Color::White).on(ODD_BACKGROUND).to_string(),
        RowShade::Even => style(line).with(Color::White).on(EVEN_BACKGROUND).to_string(),
    }
}
