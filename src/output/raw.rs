use std::io::{self, Write};

use comfy_table::Cell;

use crate::data::{Schema, TripRecord};
use crate::output::format::{create_styled_table, header_cell, right_cell};

fn optional(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Render one page of raw rows; an empty page prints a notice instead of a table
pub(crate) fn write_raw_page<W: Write>(
    out: &mut W,
    rows: &[TripRecord],
    schema: Schema,
    use_color: bool,
) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No more rows to display.");
    }

    let mut header = vec![
        header_cell("", use_color),
        header_cell("Start Time", use_color),
        header_cell("End Time", use_color),
        header_cell("Trip Duration", use_color),
        header_cell("Start Station", use_color),
        header_cell("End Station", use_color),
        header_cell("User Type", use_color),
    ];
    if schema.has_gender {
        header.push(header_cell("Gender", use_color));
    }
    if schema.has_birth_year {
        header.push(header_cell("Birth Year", use_color));
    }
    header.extend([
        header_cell("month", use_color),
        header_cell("week_day", use_color),
        header_cell("hour", use_color),
    ]);

    let mut table = create_styled_table(use_color);
    table.set_header(header);

    for r in rows {
        let mut row = vec![
            right_cell(&r.row.to_string()),
            Cell::new(r.start_time.format("%Y-%m-%d %H:%M:%S").to_string()),
            Cell::new(&r.end_time),
            right_cell(&r.trip_duration.to_string()),
            Cell::new(&r.start_station),
            Cell::new(&r.end_station),
            Cell::new(optional(r.user_type.as_deref())),
        ];
        if schema.has_gender {
            row.push(Cell::new(optional(r.gender.as_deref())));
        }
        if schema.has_birth_year {
            let year = r.birth_year.map(|y| (y as i64).to_string());
            row.push(right_cell(&year.unwrap_or_default()));
        }
        row.extend([
            Cell::new(&r.month),
            Cell::new(&r.week_day),
            right_cell(&r.hour.to_string()),
        ]);
        table.add_row(row);
    }

    writeln!(out, "{table}")
}
