//! In-memory trip table
//!
//! Derived calendar fields are computed once when a record is built; after
//! that the table only ever shrinks through filtering.

use chrono::{NaiveDateTime, Timelike};

use crate::consts::{ALL, PAGE_SIZE};
use crate::data::city::City;
use crate::utils::{month_name, weekday_name};

/// Month/day selection collected at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Filters {
    pub(crate) city: City,
    /// Lowercase month name or "all"; not validated
    pub(crate) month: String,
    /// Lowercase weekday name or "all"; not validated
    pub(crate) day: String,
}

impl Filters {
    pub(crate) fn new(city: City, month: impl Into<String>, day: impl Into<String>) -> Self {
        Filters {
            city,
            month: month.into(),
            day: day.into(),
        }
    }

    /// No month or weekday restriction
    #[cfg(test)]
    pub(crate) fn everything(city: City) -> Self {
        Self::new(city, ALL, ALL)
    }
}

/// Which optional columns the source file carried
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Schema {
    pub(crate) has_gender: bool,
    pub(crate) has_birth_year: bool,
}

/// One trip, as read from the file plus its derived calendar fields
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TripRecord {
    /// Zero-based position in the source file
    pub(crate) row: usize,
    pub(crate) start_time: NaiveDateTime,
    pub(crate) end_time: String,
    pub(crate) start_station: String,
    pub(crate) end_station: String,
    /// Seconds
    pub(crate) trip_duration: f64,
    pub(crate) user_type: Option<String>,
    pub(crate) gender: Option<String>,
    pub(crate) birth_year: Option<f64>,
    pub(crate) month: String,
    pub(crate) week_day: String,
    pub(crate) hour: u32,
}

/// Source columns of a trip; the derived fields are filled in by `TripRecord::new`
#[derive(Debug, Clone, Default)]
pub(crate) struct TripFields {
    pub(crate) end_time: String,
    pub(crate) start_station: String,
    pub(crate) end_station: String,
    pub(crate) trip_duration: f64,
    pub(crate) user_type: Option<String>,
    pub(crate) gender: Option<String>,
    pub(crate) birth_year: Option<f64>,
}

impl TripRecord {
    pub(crate) fn new(row: usize, start_time: NaiveDateTime, fields: TripFields) -> Self {
        TripRecord {
            row,
            month: month_name(&start_time),
            week_day: weekday_name(&start_time),
            hour: start_time.hour(),
            start_time,
            end_time: fields.end_time,
            start_station: fields.start_station,
            end_station: fields.end_station,
            trip_duration: fields.trip_duration,
            user_type: fields.user_type,
            gender: fields.gender,
            birth_year: fields.birth_year,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TripTable {
    city: City,
    schema: Schema,
    records: Vec<TripRecord>,
}

impl TripTable {
    pub(crate) fn new(city: City, schema: Schema, records: Vec<TripRecord>) -> Self {
        TripTable {
            city,
            schema,
            records,
        }
    }

    pub(crate) fn city(&self) -> City {
        self.city
    }

    pub(crate) fn schema(&self) -> Schema {
        self.schema
    }

    pub(crate) fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep rows whose derived month and weekday match; "all" matches everything.
    /// Unknown names match nothing. Row order is preserved.
    pub(crate) fn filter(mut self, month: &str, day: &str) -> Self {
        if month != ALL {
            self.records.retain(|r| r.month == month);
        }
        if day != ALL {
            self.records.retain(|r| r.week_day == day);
        }
        self
    }

    /// Rows `[page * PAGE_SIZE, (page + 1) * PAGE_SIZE)`, clipped to the table.
    /// Pages past the end are empty.
    pub(crate) fn page(&self, page: usize) -> &[TripRecord] {
        let len = self.records.len();
        let start = page.saturating_mul(PAGE_SIZE).min(len);
        let end = start.saturating_add(PAGE_SIZE).min(len);
        &self.records[start..end]
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDateTime;

    use super::*;

    pub(crate) fn trip(row: usize, start: &str, from: &str, to: &str, secs: f64) -> TripRecord {
        let start_time = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S")
            .expect("valid test timestamp");
        TripRecord::new(
            row,
            start_time,
            TripFields {
                end_time: start.to_string(),
                start_station: from.to_string(),
                end_station: to.to_string(),
                trip_duration: secs,
                user_type: Some("Subscriber".to_string()),
                ..Default::default()
            },
        )
    }

    pub(crate) fn table(records: Vec<TripRecord>) -> TripTable {
        TripTable::new(City::Washington, Schema::default(), records)
    }
}
