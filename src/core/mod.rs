//! Core module - statistics computed over a filtered trip table

mod aggregator;
mod types;

pub(crate) use aggregator::{duration_stats, station_stats, time_stats, user_stats};
pub(crate) use types::{
    BirthYearStats, ColumnProbe, DurationStats, StationStats, TimeStats, UserStats,
};
