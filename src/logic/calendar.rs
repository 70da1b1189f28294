//! Calendar arithmetic for placing matches on league matchdays.

use crate::models::ScheduleError;
use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike, Weekday,
};

/// `n` calendar days later (earlier when negative), same wall-clock time.
pub fn add_days(date: DateTime<FixedOffset>, n: i64) -> DateTime<FixedOffset> {
    date + Duration::days(n)
}

/// `n` minutes later (earlier when negative).
pub fn add_minutes(date: DateTime<FixedOffset>, n: i64) -> DateTime<FixedOffset> {
    date + Duration::minutes(n)
}

/// Same calendar day as `date`, wall clock set to `hours:minutes` in the date's offset.
/// Returns `None` when the hour or minute is out of range.
pub fn apply_time_to_date(
    date: DateTime<FixedOffset>,
    hours: u32,
    minutes: u32,
) -> Option<DateTime<FixedOffset>> {
    let time = NaiveTime::from_hms_opt(hours, minutes, 0)?;
    date.date_naive()
        .and_time(time)
        .and_local_timezone(*date.offset())
        .single()
}

/// First date on or after `date` that falls on `weekday`.
pub fn next_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let from = date.weekday().num_days_from_monday();
    let to = weekday.num_days_from_monday();
    let ahead = (7 + to - from) % 7;
    date + Duration::days(i64::from(ahead))
}

/// League time zone from a UTC offset in minutes.
pub fn league_offset(utc_offset_minutes: i32) -> Result<FixedOffset, ScheduleError> {
    utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(ScheduleError::InvalidTimeZone(utc_offset_minutes))
}

/// Kickoff on the first `weekday` on or after `start`, at `time` league time.
pub fn first_matchday(
    start: NaiveDate,
    weekday: Weekday,
    time: NaiveTime,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, ScheduleError> {
    let day = next_weekday_on_or_after(start, weekday);
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .and_then(|dt| offset.from_local_datetime(&dt).single())
        .ok_or(ScheduleError::InvalidMatchTime)?;
    apply_time_to_date(midnight, time.hour(), time.minute()).ok_or(ScheduleError::InvalidMatchTime)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
    }

    #[test]
    fn add_days_keeps_wall_clock() {
        let d = at(2024, 2, 27, 19, 30);
        assert_eq!(add_days(d, 3), at(2024, 3, 1, 19, 30));
        assert_eq!(add_days(d, -27), at(2024, 1, 31, 19, 30));
    }

    #[test]
    fn add_minutes_rolls_over_midnight() {
        assert_eq!(add_minutes(at(2024, 5, 4, 23, 15), 90), at(2024, 5, 5, 0, 45));
    }

    #[test]
    fn apply_time_keeps_date_and_offset() {
        let d = at(2024, 5, 4, 8, 0);
        assert_eq!(apply_time_to_date(d, 18, 45), Some(at(2024, 5, 4, 18, 45)));
        assert_eq!(apply_time_to_date(d, 24, 0), None);
    }

    #[test]
    fn weekday_alignment() {
        // 2024-05-01 is a Wednesday.
        let wed = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(next_weekday_on_or_after(wed, Weekday::Wed), wed);
        assert_eq!(
            next_weekday_on_or_after(wed, Weekday::Sat),
            NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()
        );
        assert_eq!(
            next_weekday_on_or_after(wed, Weekday::Mon),
            NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
        );
    }

    #[test]
    fn offset_out_of_range_is_rejected() {
        assert!(league_offset(180).is_ok());
        assert_eq!(league_offset(24 * 60), Err(ScheduleError::InvalidTimeZone(24 * 60)));
    }
}
