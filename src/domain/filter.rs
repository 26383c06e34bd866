//! Filter state consumed by the pipeline.
//!
//! `FilterState` is an explicit value passed into every pipeline invocation,
//! never ambient state; callers own its lifecycle and defaults.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Kickoff date window. Either bound may be open. The start bound is
/// interpreted as 00:00:00 and the end bound as 23:59:59.999, both UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        if let Some(start) = self.start {
            if instant < day_start(start) {
                return false;
            }
        }
        if let Some(end) = self.end {
            if instant > day_end(end) {
                return false;
            }
        }
        true
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn day_end(date: NaiveDate) -> DateTime<Utc> {
    // 23:59:59.999 is always a valid time of day.
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
        .and_utc()
}

/// Inclusive rating window. Defaults to `[0, 200]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl Default for RatingRange {
    fn default() -> Self {
        Self {
            min: dec!(0),
            max: dec!(200),
        }
    }
}

impl RatingRange {
    pub fn contains(&self, rating: Decimal) -> bool {
        self.min <= rating && rating <= self.max
    }
}

/// Inclusive decimal odds window. Defaults to `[1.01, 1000]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OddsRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl Default for OddsRange {
    fn default() -> Self {
        Self {
            min: dec!(1.01),
            max: dec!(1000),
        }
    }
}

impl OddsRange {
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Everything the caller controls about a pipeline run.
///
/// An empty `selected_bookmakers` set yields zero results by contract: it is
/// a restriction to nothing, not a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Case-insensitive substring match on `"{home} vs {away}"`. Empty skips
    /// the search stage.
    pub search_term: String,
    pub date_range: DateRange,
    pub rating_range: RatingRange,
    pub odds_range: OddsRange,
    pub selected_bookmakers: BTreeSet<String>,
}

impl FilterState {
    pub fn matches_search(&self, fixture: &str) -> bool {
        self.search_term.is_empty()
            || fixture
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_range_bounds_are_inclusive_to_the_millisecond() {
        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2026, 9, 1),
            end: NaiveDate::from_ymd_opt(2026, 9, 2),
        };

        let first = Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap();
        let last = Utc
            .with_ymd_and_hms(2026, 9, 2, 23, 59, 59)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(999))
            .unwrap();
        let after = Utc.with_ymd_and_hms(2026, 9, 3, 0, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2026, 8, 31, 23, 59, 59).unwrap();

        assert!(range.contains(first));
        assert!(range.contains(last));
        assert!(!range.contains(after));
        assert!(!range.contains(before));
    }

    #[test]
    fn open_bounds_accept_everything_on_that_side() {
        let open_start = DateRange {
            start: None,
            end: NaiveDate::from_ymd_opt(2026, 9, 2),
        };
        let ancient = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
        assert!(open_start.contains(ancient));

        let open_end = DateRange {
            start: NaiveDate::from_ymd_opt(2026, 9, 2),
            end: None,
        };
        let far_future = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
        assert!(open_end.contains(far_future));
    }

    #[test]
    fn default_windows_match_contract() {
        let filters = FilterState::default();
        assert_eq!(filters.rating_range.min, dec!(0));
        assert_eq!(filters.rating_range.max, dec!(200));
        assert_eq!(filters.odds_range.min, dec!(1.01));
        assert_eq!(filters.odds_range.max, dec!(1000));
        assert!(filters.selected_bookmakers.is_empty());
    }

    #[test]
    fn rating_window_is_inclusive() {
        let range = RatingRange {
            min: dec!(100),
            max: dec!(105),
        };
        assert!(range.contains(dec!(100)));
        assert!(range.contains(dec!(105)));
        assert!(!range.contains(dec!(99.99)));
        assert!(!range.contains(dec!(105.01)));
    }

    #[test]
    fn search_is_case_insensitive() {
        let filters = FilterState {
            search_term: "ARSE".into(),
            ..FilterState::default()
        };
        assert!(filters.matches_search("Arsenal vs Chelsea"));
        assert!(!filters.matches_search("Lyon vs Lille"));
    }

    #[test]
    fn empty_search_matches_everything() {
        let filters = FilterState::default();
        assert!(filters.matches_search("Anything vs Anyone"));
    }
}
