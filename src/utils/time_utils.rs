use chrono::{DateTime, Datelike, Days, FixedOffset, Local, NaiveDate, Utc, Weekday};

use crate::config::CLOCK;

pub struct TimeUtils;

impl TimeUtils {
    pub const SECS_IN_H: i32 = 60 * 60;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const CLOCK_FORMAT: &str = "%H:%M";

    /// Three-letter upper-case code used by the red folder news feed.
    pub fn weekday_code(day: Weekday) -> &'static str {
        match day {
            Weekday::Mon => "MON",
            Weekday::Tue => "TUE",
            Weekday::Wed => "WED",
            Weekday::Thu => "THU",
            Weekday::Fri => "FRI",
            Weekday::Sat => "SAT",
            Weekday::Sun => "SUN",
        }
    }
}

fn last_sunday_of(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    let last_day = first_of_next.pred_opt()?;
    let back = last_day.weekday().num_days_from_sunday();
    last_day.checked_sub_days(Days::new(back as u64))
}

/// Frankfurt is CET (UTC+1) with CEST (UTC+2) between 01:00 UTC on the last
/// Sunday of March and 01:00 UTC on the last Sunday of October.
pub fn frankfurt_offset_hours(utc: DateTime<Utc>) -> i32 {
    let switch_at = |month: u32| {
        last_sunday_of(utc.year(), month)
            .and_then(|day| day.and_hms_opt(1, 0, 0))
            .map(|naive| naive.and_utc())
    };

    match (switch_at(3), switch_at(10)) {
        (Some(summer_start), Some(summer_end)) if utc >= summer_start && utc < summer_end => {
            CLOCK.standard_offset_hours + 1
        }
        _ => CLOCK.standard_offset_hours,
    }
}

pub fn frankfurt_time(utc: DateTime<Utc>) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(frankfurt_offset_hours(utc) * TimeUtils::SECS_IN_H)
        .map(|tz| utc.with_timezone(&tz))
        .unwrap_or_else(|| utc.fixed_offset())
}

/// "HH:MM" wall-clock time in Frankfurt.
pub fn frankfurt_clock(utc: DateTime<Utc>) -> String {
    frankfurt_time(utc).format(TimeUtils::CLOCK_FORMAT).to_string()
}

pub fn utc_now() -> DateTime<Utc> {
    Utc::now()
}

pub fn local_weekday_code() -> &'static str {
    TimeUtils::weekday_code(Local::now().weekday())
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn winter_and_summer_offsets() {
        assert_eq!(frankfurt_clock(utc(2026, 1, 15, 12, 0)), "13:00");
        assert_eq!(frankfurt_clock(utc(2026, 7, 1, 12, 0)), "14:00");
    }

    #[test]
    fn daylight_saving_switches_at_one_utc() {
        // 2026: last Sunday of March is the 29th, of October the 25th.
        assert_eq!(frankfurt_offset_hours(utc(2026, 3, 29, 0, 59)), 1);
        assert_eq!(frankfurt_offset_hours(utc(2026, 3, 29, 1, 0)), 2);
        assert_eq!(frankfurt_offset_hours(utc(2026, 10, 25, 0, 59)), 2);
        assert_eq!(frankfurt_offset_hours(utc(2026, 10, 25, 1, 0)), 1);
    }

    #[test]
    fn late_evening_rolls_into_next_day() {
        let local = frankfurt_time(utc(2026, 12, 31, 23, 30));
        assert_eq!(local.format("%Y-%m-%d %H:%M").to_string(), "2027-01-01 00:30");
    }

    #[test]
    fn weekday_codes_and_dates() {
        assert_eq!(TimeUtils::weekday_code(Weekday::Tue), "TUE");
        assert_eq!(TimeUtils::weekday_code(Weekday::Sun), "SUN");
        let day = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        assert_eq!(iso_date(day), "2026-02-10");
    }
}
