//! Age cutoff parsing for CLI commands.

use chrono::{Days, Local, Months, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static RELATIVE_AGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*([dwmy]?)$").expect("valid regex"));

/// Matches timestamps strictly older than a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Cutoff {
    threshold: NaiveDateTime,
}

impl Cutoff {
    /// Parses a cutoff relative to the current local time.
    ///
    /// Accepts:
    /// - Relative: "30d", "2w", "6m", "1y" (a bare number counts months)
    /// - Absolute: "2024-01-15" (YYYY-MM-DD, local midnight)
    pub fn parse(s: &str) -> Result<Self, String> {
        Self::parse_at(s, Local::now().naive_local())
    }

    /// Parses a cutoff relative to `now`.
    pub fn parse_at(s: &str, now: NaiveDateTime) -> Result<Self, String> {
        let s = s.trim();

        if let Some(caps) = RELATIVE_AGE.captures(s) {
            let amount: u32 = caps[1]
                .parse()
                .map_err(|_| format!("age out of range: {}", s))?;
            let threshold = match &caps[2] {
                "d" => now.checked_sub_days(Days::new(amount.into())),
                "w" => now.checked_sub_days(Days::new(u64::from(amount) * 7)),
                "y" => amount
                    .checked_mul(12)
                    .and_then(|months| now.checked_sub_months(Months::new(months))),
                _ => now.checked_sub_months(Months::new(amount)),
            }
            .ok_or_else(|| format!("age out of range: {}", s))?;
            return Ok(Self { threshold });
        }

        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            format!("invalid age (expected YYYY-MM-DD or N followed by d, w, m or y): {}", s)
        })?;

        Ok(Self {
            threshold: date.and_time(chrono::NaiveTime::MIN),
        })
    }

    /// Returns true if `timestamp` is known and before the threshold.
    pub fn matches(&self, timestamp: Option<NaiveDateTime>) -> bool {
        timestamp.is_some_and(|t| t < self.threshold)
    }

    pub fn threshold(&self) -> NaiveDateTime {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn parse_months() {
        let cutoff = Cutoff::parse_at("6m", at(2024, 8, 31)).unwrap();
        assert_eq!(cutoff.threshold(), at(2024, 2, 29));
    }

    #[test]
    fn bare_number_counts_months() {
        assert_eq!(
            Cutoff::parse_at("3", at(2024, 5, 10)).unwrap(),
            Cutoff::parse_at("3m", at(2024, 5, 10)).unwrap()
        );
    }

    #[test]
    fn parse_days_weeks_years() {
        let now = at(2024, 3, 15);
        assert_eq!(Cutoff::parse_at("30d", now).unwrap().threshold(), at(2024, 2, 14));
        assert_eq!(Cutoff::parse_at("2w", now).unwrap().threshold(), at(2024, 3, 1));
        assert_eq!(Cutoff::parse_at("1y", now).unwrap().threshold(), at(2023, 3, 15));
    }

    #[test]
    fn parse_absolute_date() {
        let cutoff = Cutoff::parse_at("2024-01-15", at(2030, 1, 1)).unwrap();
        assert_eq!(
            cutoff.threshold(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn parse_invalid_format() {
        let now = at(2024, 1, 1);
        assert!(Cutoff::parse_at("invalid", now).is_err());
        assert!(Cutoff::parse_at("2024/01/15", now).is_err());
        assert!(Cutoff::parse_at("-5d", now).is_err());
        assert!(Cutoff::parse_at("5h", now).is_err());
    }

    #[test]
    fn matches_strictly_older() {
        let cutoff = Cutoff::parse_at("2024-01-15", at(2030, 1, 1)).unwrap();
        assert!(cutoff.matches(Some(at(2024, 1, 14))));
        assert!(!cutoff.matches(Some(cutoff.threshold())));
        assert!(!cutoff.matches(Some(at(2024, 1, 20))));
    }

    #[test]
    fn unknown_timestamp_never_matches() {
        let cutoff = Cutoff::parse_at("1d", at(2024, 1, 1)).unwrap();
        assert!(!cutoff.matches(None));
    }
}
