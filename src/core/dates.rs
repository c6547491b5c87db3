// src/core/dates.rs
//
// The two fixed text formats the agenda center uses, plus the hour helper the
// evaluator reports in. Parsers do not trim; callers decide.

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};

use crate::config::consts::{MEETING_DATE_FMT, POSTED_DATE_FMT};

/// "Jun 10, 2024"
pub fn parse_meeting_date(s: &str) -> Option<NaiveDate> {
    if !abbreviated_month(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, MEETING_DATE_FMT).ok()
}

/// "Jun 9, 2024 04:00 PM"
pub fn parse_posted_at(s: &str) -> Option<NaiveDateTime> {
    if !abbreviated_month(s) {
        return None;
    }
    NaiveDateTime::parse_from_str(s, POSTED_DATE_FMT).ok()
}

// chrono's `%b` also takes "June"; the site only ever writes three letters.
fn abbreviated_month(s: &str) -> bool {
    s.split_whitespace().next().is_some_and(|m| m.chars().count() == 3)
}

/// Signed fractional hours.
pub fn hours(d: TimeDelta) -> f64 {
    d.num_seconds() as f64 / 3600.0
}

/// Wall-clock now, local zone, without offset.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_date_accepts_single_digit_day() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(parse_meeting_date("Jun 9, 2024"), Some(d));
        assert_eq!(parse_meeting_date("Jun 09, 2024"), Some(d));
    }

    #[test]
    fn meeting_date_rejects_trailing_text() {
        assert_eq!(parse_meeting_date("Jun 10, 2024 Amended"), None);
        assert_eq!(parse_meeting_date("TBD"), None);
        assert_eq!(parse_meeting_date(""), None);
    }

    #[test]
    fn full_month_names_are_rejected() {
        assert_eq!(parse_meeting_date("June 10, 2024"), None);
        assert_eq!(parse_posted_at("June 9, 2024 04:00 PM"), None);
        assert!(parse_meeting_date("May 10, 2024").is_some());
    }

    #[test]
    fn posted_at_uses_twelve_hour_clock() {
        let pm = parse_posted_at("Jun 9, 2024 04:00 PM").unwrap();
        assert_eq!(pm, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap().and_hms_opt(16, 0, 0).unwrap());

        let am = parse_posted_at("Jun 9, 2024 12:15 AM").unwrap();
        assert_eq!(am, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap().and_hms_opt(0, 15, 0).unwrap());

        assert_eq!(parse_posted_at("A - Jun 9, 2024 04:00 PM"), None);
    }

    #[test]
    fn hours_are_signed_and_fractional() {
        assert_eq!(hours(TimeDelta::minutes(-90)), -1.5);
        assert_eq!(hours(TimeDelta::hours(25)), 25.0);
    }
}
