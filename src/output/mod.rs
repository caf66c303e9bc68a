mod format;
mod raw;
mod report;

pub(crate) use format::{separator, write_footer, write_heading};
pub(crate) use raw::write_raw_page;
pub(crate) use report::{
    DURATION_HEADING, STATION_HEADING, TIME_HEADING, USER_HEADING, write_duration_stats,
    write_station_stats, write_time_stats, write_user_stats,
};
