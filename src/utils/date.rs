use chrono::NaiveDateTime;

const START_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

pub(crate) fn parse_start_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Full lowercase month name, e.g. "january"
pub(crate) fn month_name(dt: &NaiveDateTime) -> String {
    dt.format("%B").to_string().to_lowercase()
}

/// Full lowercase weekday name, e.g. "monday"
pub(crate) fn weekday_name(dt: &NaiveDateTime) -> String {
    dt.format("%A").to_string().to_lowercase()
}
