//! Report values computed from a trip table
//!
//! Every statistic that is undefined on an empty table is an `Option`.

/// Result of probing an optional column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnProbe<T> {
    Present(T),
    Absent,
}

impl<T> ColumnProbe<T> {
    pub(crate) fn from_presence(present: bool, compute: impl FnOnce() -> T) -> Self {
        if present {
            ColumnProbe::Present(compute())
        } else {
            ColumnProbe::Absent
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TimeStats {
    pub(crate) popular_month: Option<String>,
    pub(crate) popular_day: Option<String>,
    pub(crate) popular_hour: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct StationStats {
    pub(crate) popular_start: Option<String>,
    pub(crate) popular_end: Option<String>,
    /// Start and end names joined with no separator
    pub(crate) popular_combination: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct DurationStats {
    /// Seconds; 0 for an empty table
    pub(crate) total: f64,
    /// Seconds; undefined for an empty table
    pub(crate) mean: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BirthYearStats {
    pub(crate) most_recent: i64,
    pub(crate) earliest: i64,
    pub(crate) most_common: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UserStats {
    /// Non-missing `User Type` cells
    pub(crate) user_type_count: usize,
    /// Non-missing `Gender` cells
    pub(crate) gender_count: ColumnProbe<usize>,
    /// `None` when the column exists but has no values in the filtered rows
    pub(crate) birth_years: ColumnProbe<Option<BirthYearStats>>,
}
