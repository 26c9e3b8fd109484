pub mod app_time;
pub mod time_utils;
pub mod timezone;

pub use time_utils::TimeUtils;
pub use timezone::{TimeParseError, convert_time};
