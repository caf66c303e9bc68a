//! Aggregations behind the four statistics reports

use std::collections::HashMap;
use std::hash::Hash;

use crate::core::types::{
    BirthYearStats, ColumnProbe, DurationStats, StationStats, TimeStats, UserStats,
};
use crate::data::TripTable;

/// Most frequent value. Ties go to the value seen first; empty input has no mode.
pub(crate) fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    // value -> (count, first position)
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (pos, value) in values.into_iter().enumerate() {
        counts.entry(value).or_insert((0, pos)).0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value)
}

pub(crate) fn time_stats(table: &TripTable) -> TimeStats {
    let records = table.records();
    TimeStats {
        popular_month: mode(records.iter().map(|r| r.month.as_str())).map(str::to_string),
        popular_day: mode(records.iter().map(|r| r.week_day.as_str())).map(str::to_string),
        popular_hour: mode(records.iter().map(|r| r.hour)),
    }
}

pub(crate) fn station_stats(table: &TripTable) -> StationStats {
    let records = table.records();
    StationStats {
        popular_start: mode(records.iter().map(|r| r.start_station.as_str())).map(str::to_string),
        popular_end: mode(records.iter().map(|r| r.end_station.as_str())).map(str::to_string),
        // No delimiter: "A" + "BC" and "AB" + "C" count as the same trip
        popular_combination: mode(
            records
                .iter()
                .map(|r| format!("{}{}", r.start_station, r.end_station)),
        ),
    }
}

pub(crate) fn duration_stats(table: &TripTable) -> DurationStats {
    let total = table
        .records()
        .iter()
        .fold(0.0, |acc, r| acc + r.trip_duration);
    let mean = if table.is_empty() {
        None
    } else {
        Some(total / table.len() as f64)
    };
    DurationStats { total, mean }
}

pub(crate) fn user_stats(table: &TripTable) -> UserStats {
    let records = table.records();
    let schema = table.schema();

    let user_type_count = records.iter().filter(|r| r.user_type.is_some()).count();

    let gender_count = ColumnProbe::from_presence(schema.has_gender, || {
        records.iter().filter(|r| r.gender.is_some()).count()
    });

    let birth_years = ColumnProbe::from_presence(schema.has_birth_year, || {
        let years: Vec<i64> = records
            .iter()
            .filter_map(|r| r.birth_year)
            .map(|y| y as i64)
            .collect();
        Some(BirthYearStats {
            most_recent: *years.iter().max()?,
            earliest: *years.iter().min()?,
            most_common: mode(years.iter().copied())?,
        })
    });

    UserStats {
        user_type_count,
        gender_count,
        birth_years,
    }
}
