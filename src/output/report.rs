//! Text rendering of the four statistics blocks

use std::fmt::Display;
use std::io::{self, Write};

use crate::core::{BirthYearStats, ColumnProbe, DurationStats, StationStats, TimeStats, UserStats};
use crate::data::City;
use crate::output::format::{NO_DATA, format_seconds};

pub(crate) const TIME_HEADING: &str = "Calculating The Most Frequent Times of Travel...";
pub(crate) const STATION_HEADING: &str = "Calculating The Most Popular Stations and Trip...";
pub(crate) const DURATION_HEADING: &str = "Calculating Trip Duration...";
pub(crate) const USER_HEADING: &str = "Calculating User Stats...";

fn write_value<W: Write, T: Display>(out: &mut W, label: &str, value: Option<T>) -> io::Result<()> {
    match value {
        Some(v) => writeln!(out, "{label}: {v}"),
        None => writeln!(out, "{label}: {NO_DATA}"),
    }
}

pub(crate) fn write_time_stats<W: Write>(out: &mut W, stats: &TimeStats) -> io::Result<()> {
    write_value(out, "Most Popular Travel Month", stats.popular_month.as_deref())?;
    write_value(out, "Most Popular Travel Week Day", stats.popular_day.as_deref())?;
    write_value(out, "Most Popular Travel Hour", stats.popular_hour)
}

pub(crate) fn write_station_stats<W: Write>(out: &mut W, stats: &StationStats) -> io::Result<()> {
    write_value(out, "Most Popular Start Station", stats.popular_start.as_deref())?;
    write_value(out, "Most Popular End Station", stats.popular_end.as_deref())?;
    write_value(
        out,
        "Most Popular Start and End Station",
        stats.popular_combination.as_deref(),
    )
}

pub(crate) fn write_duration_stats<W: Write>(out: &mut W, stats: &DurationStats) -> io::Result<()> {
    writeln!(
        out,
        "Total Number of Trip Duration: {} ({})",
        stats.total,
        format_seconds(stats.total)
    )?;
    match stats.mean {
        Some(mean) => writeln!(
            out,
            "Total Mean of Trip Duration: {mean} ({})",
            format_seconds(mean)
        ),
        None => writeln!(out, "Total Mean of Trip Duration: NaN ({NO_DATA})"),
    }
}

fn write_birth_years<W: Write>(out: &mut W, years: &BirthYearStats) -> io::Result<()> {
    writeln!(out, "Most Recent Birth Year: {}", years.most_recent)?;
    writeln!(out, "The Earliest Birth Year: {}", years.earliest)?;
    writeln!(out, "The Most Popular Birth Year: {}", years.most_common)
}

pub(crate) fn write_user_stats<W: Write>(out: &mut W, stats: &UserStats, city: City) -> io::Result<()> {
    writeln!(out, "Total Number of Customers: {}", stats.user_type_count)?;

    match stats.gender_count {
        ColumnProbe::Present(count) => writeln!(out, "Total Number Of Genders: {count}")?,
        ColumnProbe::Absent => writeln!(
            out,
            "Sorry, there's no data for 'Gender' in {} city",
            city.key()
        )?,
    }

    match stats.birth_years {
        ColumnProbe::Present(Some(years)) => write_birth_years(out, &years),
        ColumnProbe::Present(None) => writeln!(out, "Birth Year: {NO_DATA}"),
        ColumnProbe::Absent => writeln!(
            out,
            "Sorry, we have no data for 'Birth Year' in {} city",
            city.key()
        ),
    }
}
