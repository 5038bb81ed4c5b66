use chrono::NaiveDate;
use serde::Serialize;

/// A tradable ticker-identified security on the exchange.
#[derive(Debug, Clone, Serialize)]
pub struct Instrument {
    /// Ticker as listed, original casing preserved. Matching is
    /// case-insensitive and done by the caller.
    pub ticker: String,
    pub name: String,
    pub profile_url: String,
}

/// One day's OHLCV-plus-turnover data point for an instrument.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceRecord {
    pub quote_date: NaiveDate,
    pub ticker: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
    pub value: f64,
    /// Normalized exchange code, always "OSE". Replaces the free-text
    /// exchange description carried by the raw data.
    pub exch: String,
}

/// Which comparison the date filter applies at the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Rows dated exactly at either bound are dropped. This reproduces
    /// the upstream behaviour (inverted comparisons) and is the default.
    Exclusive,
    /// The intuitive contract: both bounds retained.
    Inclusive,
}

/// Filter bounds applied to a record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Stand-in for "beginning of history" when no from-date is given.
    pub fn sentinel_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
    }

    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Full history up to `today`.
    pub fn full_history(today: NaiveDate) -> Self {
        Self {
            from: Self::sentinel_start(),
            to: today,
        }
    }

    pub fn is_full_history(&self) -> bool {
        self.from == Self::sentinel_start()
    }

    /// Whether a record dated `date` survives the filter under `policy`.
    pub fn retains(&self, date: NaiveDate, policy: FilterPolicy) -> bool {
        match policy {
            FilterPolicy::Exclusive => self.from < date && date < self.to,
            FilterPolicy::Inclusive => self.from <= date && date <= self.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn exclusive_policy_drops_rows_on_both_bounds() {
        let range = DateRange::new(d(2015, 1, 2), d(2015, 1, 4));
        assert!(!range.retains(d(2015, 1, 2), FilterPolicy::Exclusive));
        assert!(range.retains(d(2015, 1, 3), FilterPolicy::Exclusive));
        assert!(!range.retains(d(2015, 1, 4), FilterPolicy::Exclusive));
    }

    #[test]
    fn inclusive_policy_keeps_rows_on_both_bounds() {
        let range = DateRange::new(d(2015, 1, 2), d(2015, 1, 4));
        assert!(range.retains(d(2015, 1, 2), FilterPolicy::Inclusive));
        assert!(range.retains(d(2015, 1, 4), FilterPolicy::Inclusive));
        assert!(!range.retains(d(2015, 1, 5), FilterPolicy::Inclusive));
    }

    #[test]
    fn full_history_uses_the_sentinel_start() {
        let range = DateRange::full_history(d(2018, 10, 8));
        assert!(range.is_full_history());
        assert_eq!(range.from, d(2000, 1, 1));
    }
}
