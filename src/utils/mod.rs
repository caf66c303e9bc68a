pub(crate) mod date;
pub(crate) mod logging;

pub(crate) use date::{month_name, parse_start_time, weekday_name};
pub(crate) use logging::init_logging;
