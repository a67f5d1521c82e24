//! Quarter tags: "Q1-2026" .. "Q4-2026", plus the special
//! "Top Priority" tag that is shown in every quarter.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;

pub const TOP_PRIORITY: &str = "Top Priority";

/// Tag for the quarter containing `d`, e.g. "Q3-2026".
pub fn quarter_tag(d: NaiveDate) -> String {
    let q = (d.month0() / 3) + 1;
    format!("Q{}-{}", q, d.year())
}

/// Validate a user-supplied quarter tag.
pub fn parse_tag(s: &str) -> AppResult<String> {
    if s == TOP_PRIORITY {
        return Ok(s.to_string());
    }
    let re = Regex::new(r"^Q([1-4])-(\d{4})$").map_err(|e| AppError::Other(e.to_string()))?;
    if re.is_match(s) {
        Ok(s.to_string())
    } else {
        Err(AppError::InvalidQuarter(s.to_string()))
    }
}

/// Fixed date range of a quarter tag. None for "Top Priority", which has
/// no calendar span of its own.
pub fn quarter_range(tag: &str) -> Option<(NaiveDate, NaiveDate)> {
    let re = Regex::new(r"^Q([1-4])-(\d{4})$").ok()?;
    let caps = re.captures(tag)?;
    let q: u32 = caps[1].parse().ok()?;
    let year: i32 = caps[2].parse().ok()?;

    let start_month = (q - 1) * 3 + 1;
    let start = NaiveDate::from_ymd_opt(year, start_month, 1)?;
    let end = if q == 4 {
        NaiveDate::from_ymd_opt(year, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(year, start_month + 3, 1)?.pred_opt()?
    };
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_for_date() {
        assert_eq!(quarter_tag(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()), "Q1-2026");
        assert_eq!(quarter_tag(NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()), "Q3-2026");
        assert_eq!(quarter_tag(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()), "Q4-2025");
    }

    #[test]
    fn parse_accepts_tags_and_top_priority() {
        assert!(parse_tag("Q1-2026").is_ok());
        assert!(parse_tag("Top Priority").is_ok());
        assert!(parse_tag("Q5-2026").is_err());
        assert!(parse_tag("2026-Q1").is_err());
    }

    #[test]
    fn range_covers_whole_quarter() {
        let (s, e) = quarter_range("Q3-2026").unwrap();
        assert_eq!(s, NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2026, 9, 30).unwrap());

        let (s, e) = quarter_range("Q4-2026").unwrap();
        assert_eq!(s, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());

        assert!(quarter_range("Top Priority").is_none());
    }
}
