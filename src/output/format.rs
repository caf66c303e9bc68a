use std::io::{self, Write};
use std::time::Duration;

use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::consts::SEPARATOR_WIDTH;

/// Shown in place of a statistic the filtered rows cannot define
pub(crate) const NO_DATA: &str = "no data for the selected filters";

pub(crate) fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Progress line printed before a statistics block
pub(crate) fn write_heading<W: Write>(out: &mut W, text: &str, use_color: bool) -> io::Result<()> {
    if use_color {
        writeln!(out, "\n\x1b[1m{text}\x1b[0m\n")
    } else {
        writeln!(out, "\n{text}\n")
    }
}

/// Elapsed-time line plus the dashed separator closing a block
pub(crate) fn write_footer<W: Write>(out: &mut W, elapsed: Duration, use_color: bool) -> io::Result<()> {
    let secs = elapsed.as_secs_f64();
    if use_color {
        writeln!(out, "\nThis took \x1b[36m{secs}\x1b[0m seconds.")?;
    } else {
        writeln!(out, "\nThis took {secs} seconds.")?;
    }
    writeln!(out, "{}", separator())
}

/// Seconds as "1d 2h 3m 4s", dropping leading zero units
pub(crate) fn format_seconds(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "N/A".to_string();
    }
    let total = secs.round() as u64;
    let (days, rem) = (total / 86_400, total % 86_400);
    let (hours, rem) = (rem / 3_600, rem % 3_600);
    let (minutes, seconds) = (rem / 60, rem % 60);

    let parts = [(days, "d"), (hours, "h"), (minutes, "m")];
    let mut out = String::new();
    for (value, unit) in parts {
        if value > 0 || !out.is_empty() {
            out.push_str(&format!("{value}{unit} "));
        }
    }
    out.push_str(&format!("{seconds}s"));
    out
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table(use_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if use_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    normalize_header_separator(&mut table);
    table
}
