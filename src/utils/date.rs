use chrono::{Datelike, Duration, NaiveDate, Utc};

/// Today's calendar date, UTC-normalized. All aggregation windows are
/// anchored here so that logs written from any local timezone land in
/// the same bucket.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Most recent Monday (itself, if `d` is a Monday).
pub fn week_start(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}
