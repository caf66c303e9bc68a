//! Dataset loader: city file → derived trip table → month/day filter

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;
use tracing::debug;

use crate::data::city::{City, CityFiles};
use crate::data::types::{Filters, Schema, TripFields, TripRecord, TripTable};
use crate::error::AppError;
use crate::utils::parse_start_time;

const REQUIRED_COLUMNS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

const GENDER: &str = "Gender";
const BIRTH_YEAR: &str = "Birth Year";

/// One CSV row. Unknown columns (including the unnamed index column) are ignored
/// and empty optional cells deserialize to `None`.
#[derive(Debug, Deserialize)]
struct CsvTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl CsvTrip {
    fn into_fields(self) -> TripFields {
        TripFields {
            end_time: self.end_time,
            start_station: self.start_station,
            end_station: self.end_station,
            trip_duration: self.trip_duration,
            user_type: non_blank(self.user_type),
            gender: non_blank(self.gender),
            birth_year: self.birth_year.filter(|y| !y.is_nan()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Read the city's file and apply the month/day filters.
/// Reloads from disk on every call.
pub(crate) fn load_trips(files: &CityFiles, filters: &Filters) -> Result<TripTable, AppError> {
    let started = Instant::now();
    let table = read_city(files, filters.city)?;
    let loaded = table.len();

    let table = table.filter(&filters.month, &filters.day);
    debug!(
        city = %filters.city,
        month = %filters.month,
        day = %filters.day,
        loaded,
        kept = table.len(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "loaded trip data"
    );
    Ok(table)
}

/// Unfiltered table for a city
pub(crate) fn read_city(files: &CityFiles, city: City) -> Result<TripTable, AppError> {
    let path = files.path(city);
    let file = File::open(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_trips(file, path, city)
}

/// Parse trips from any reader; `path` is only used in error messages
pub(crate) fn read_trips<R: Read>(reader: R, path: &Path, city: City) -> Result<TripTable, AppError> {
    let csv_err = |source: csv::Error| AppError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(false)
        .from_reader(reader);
    let headers = rdr.headers().map_err(csv_err)?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }
    let schema = Schema {
        has_gender: headers.iter().any(|h| h == GENDER),
        has_birth_year: headers.iter().any(|h| h == BIRTH_YEAR),
    };

    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let raw = result.map_err(csv_err)?;
        let trip: CsvTrip = raw.deserialize(Some(&headers)).map_err(csv_err)?;
        let Some(start_time) = parse_start_time(&trip.start_time) else {
            return Err(AppError::InvalidTimestamp {
                path: path.to_path_buf(),
                line: raw.position().map_or(0, |p| p.line()),
                value: trip.start_time,
            });
        };
        records.push(TripRecord::new(row, start_time, trip.into_fields()));
    }

    debug!(
        path = %path.display(),
        rows = records.len(),
        gender = schema.has_gender,
        birth_year = schema.has_birth_year,
        "parsed trip file"
    );
    Ok(TripTable::new(city, schema, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ALL;
    use std::fs;
    use tempfile::TempDir;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Subscriber,,
45207,2017-01-02 14:53:25,2017-01-02 15:00:59,454.0,Clark St & Lake St,Clark St & Grand Ave,Customer,,
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
";

    fn parse(csv: &str, city: City) -> Result<TripTable, AppError> {
        read_trips(csv.as_bytes(), Path::new("test.csv"), city)
    }

    #[test]
    fn reads_rows_in_file_order() {
        let t = parse(CHICAGO, City::Chicago).unwrap();
        assert_eq!(t.len(), 5);
        let rows: Vec<usize> = t.records().iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![0, 1, 2, 3, 4]);
        assert_eq!(t.records()[0].start_station, "Wood St & Hubbard St");
        assert_eq!(t.records()[4].trip_duration, 454.0);
    }

    #[test]
    fn derives_calendar_fields() {
        let t = parse(CHICAGO, City::Chicago).unwrap();
        let first = &t.records()[0];
        assert_eq!(first.month, "june");
        assert_eq!(first.week_day, "friday");
        assert_eq!(first.hour, 15);
    }

    #[test]
    fn empty_optional_cells_are_missing() {
        let t = parse(CHICAGO, City::Chicago).unwrap();
        let last = &t.records()[4];
        assert_eq!(last.gender, None);
        assert_eq!(last.birth_year, None);
        assert_eq!(last.user_type.as_deref(), Some("Customer"));
        assert_eq!(t.records()[0].birth_year, Some(1992.0));
    }

    #[test]
    fn schema_records_optional_columns() {
        let chicago = parse(CHICAGO, City::Chicago).unwrap();
        assert!(chicago.schema().has_gender);
        assert!(chicago.schema().has_birth_year);

        let washington = parse(WASHINGTON, City::Washington).unwrap();
        assert!(!washington.schema().has_gender);
        assert!(!washington.schema().has_birth_year);
        assert_eq!(washington.len(), 2);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv = "Start Time,End Time,Trip Duration,Start Station,User Type\n";
        match parse(csv, City::Chicago) {
            Err(AppError::MissingColumn { column, .. }) => assert_eq!(column, "End Station"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn bad_timestamp_reports_line() {
        let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:00:00,x,1,A,B,Subscriber
not a date,x,1,A,B,Subscriber
";
        match parse(csv, City::Chicago) {
            Err(AppError::InvalidTimestamp { line, value, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "not a date");
            }
            other => panic!("expected InvalidTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn bad_duration_is_fatal() {
        let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:00:00,x,long,A,B,Subscriber
";
        assert!(matches!(parse(csv, City::Chicago), Err(AppError::Csv { .. })));
    }

    fn data_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("chicago.csv"), CHICAGO).unwrap();
        fs::write(dir.path().join("washington.csv"), WASHINGTON).unwrap();
        dir
    }

    #[test]
    fn load_all_keeps_every_row() {
        let dir = data_dir();
        let files = CityFiles::new(dir.path());
        let t = load_trips(&files, &Filters::everything(City::Chicago)).unwrap();
        let full = read_city(&files, City::Chicago).unwrap();
        assert_eq!(t.len(), full.len());
    }

    #[test]
    fn load_month_is_subset_of_full_table() {
        let dir = data_dir();
        let files = CityFiles::new(dir.path());
        let full = read_city(&files, City::Chicago).unwrap();
        let t = load_trips(&files, &Filters::new(City::Chicago, "january", ALL)).unwrap();

        assert_eq!(t.len(), 2);
        for r in t.records() {
            assert_eq!(r.month, "january");
            assert_eq!(&full.records()[r.row], r);
        }
    }

    #[test]
    fn load_month_and_day() {
        let dir = data_dir();
        let files = CityFiles::new(dir.path());
        let t = load_trips(&files, &Filters::new(City::Chicago, "january", "monday")).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.records()[0].start_station, "Clark St & Lake St");
    }

    #[test]
    fn load_unknown_month_is_empty_not_error() {
        let dir = data_dir();
        let files = CityFiles::new(dir.path());
        let t = load_trips(&files, &Filters::new(City::Chicago, "december", ALL)).unwrap();
        assert!(t.is_empty());
        let t = load_trips(&files, &Filters::new(City::Chicago, "jan", ALL)).unwrap();
        assert!(t.is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = data_dir();
        let files = CityFiles::new(dir.path());
        let err = load_trips(&files, &Filters::everything(City::NewYorkCity)).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
