use crate::errors::Result;
use crate::models::quote::{DateRange, FilterPolicy, PriceRecord};
use crate::util;
use chrono::NaiveDate;
use log::{debug, warn};

/// Field count of a raw history row before the reshape.
const RAW_FIELD_COUNT: usize = 9;

/// Parses raw history lines into structured records, swaps the free-text
/// exchange description for the normalized exchange code, and filters by
/// date range. Records keep the source's newest-first ordering.
pub fn parse_and_filter(
    raw_lines: &[String],
    range: &DateRange,
    policy: FilterPolicy,
    exchange_code: &str,
) -> Result<Vec<PriceRecord>> {
    // Copy-and-filter into a fresh vector; the raw sequence is never
    // mutated while being walked.
    let mut records = Vec::new();

    // Data rows only, the header row is never filtered.
    for line in raw_lines.iter().skip(1) {
        let Some(record) = parse_row(line, exchange_code) else {
            warn!("Skipping malformed history row: {}", line);
            continue;
        };

        if range.retains(record.quote_date, policy) {
            records.push(record);
        }
    }

    debug!(
        "Retained {} of {} history rows",
        records.len(),
        raw_lines.len().saturating_sub(1)
    );
    Ok(records)
}

/// When no from-date was given, the chart axis starts at the oldest
/// surviving record instead of the sentinel. Records arrive newest-first,
/// so that is the last element. Only the axis is affected; the filter has
/// already been applied.
pub fn effective_plot_start(records: &[PriceRecord], range: &DateRange) -> NaiveDate {
    if range.is_full_history() {
        if let Some(oldest) = records.last() {
            return oldest.quote_date;
        }
    }
    range.from
}

fn parse_row(line: &str, exchange_code: &str) -> Option<PriceRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != RAW_FIELD_COUNT {
        return None;
    }

    // Raw layout: quote_date, paper, exchange description, open, high,
    // low, close, volume, value. The description (index 2) is dropped
    // and the normalized code carried instead (the reshape).
    Some(PriceRecord {
        quote_date: util::parse_yyyymmdd(fields[0]).ok()?,
        ticker: fields[1].to_string(),
        open: fields[3].parse().ok()?,
        high: fields[4].parse().ok()?,
        low: fields[5].parse().ok()?,
        close: fields[6].parse().ok()?,
        volume: fields[7].parse().ok()?,
        value: fields[8].parse().ok()?,
        exch: exchange_code.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn raw_lines(dates: &[&str]) -> Vec<String> {
        let mut lines = vec!["quote_date,paper,exch,open,high,low,close,volume,value".to_string()];
        for date in dates {
            lines.push(format!(
                "{},TRVX,Oslo Børs,11.28,11.50,11.06,11.44,114880,1299423",
                date
            ));
        }
        lines
    }

    #[test]
    fn reshape_drops_description_and_carries_the_code() {
        let lines = raw_lines(&["20181008"]);
        let range = DateRange::full_history(d(2018, 12, 31));

        let records = parse_and_filter(&lines, &range, FilterPolicy::Exclusive, "OSE").unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.quote_date, d(2018, 10, 8));
        assert_eq!(record.ticker, "TRVX");
        assert_eq!(record.exch, "OSE");
        assert_eq!(record.open, 11.28);
        assert_eq!(record.close, 11.44);
        assert_eq!(record.volume, 114_880);
        assert_eq!(record.value, 1_299_423.0);
    }

    #[test]
    fn filter_is_strict_exclusive_on_both_bounds() {
        // Five consecutive days, newest first.
        let lines = raw_lines(&[
            "20150105", "20150104", "20150103", "20150102", "20150101",
        ]);
        let range = DateRange::new(d(2015, 1, 2), d(2015, 1, 4));

        let records = parse_and_filter(&lines, &range, FilterPolicy::Exclusive, "OSE").unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quote_date, d(2015, 1, 3));
    }

    #[test]
    fn inclusive_policy_keeps_the_bounds() {
        let lines = raw_lines(&[
            "20150105", "20150104", "20150103", "20150102", "20150101",
        ]);
        let range = DateRange::new(d(2015, 1, 2), d(2015, 1, 4));

        let records = parse_and_filter(&lines, &range, FilterPolicy::Inclusive, "OSE").unwrap();

        let dates: Vec<NaiveDate> = records.iter().map(|r| r.quote_date).collect();
        assert_eq!(dates, vec![d(2015, 1, 4), d(2015, 1, 3), d(2015, 1, 2)]);
    }

    #[test]
    fn adjacent_excluded_rows_are_not_skipped_over() {
        // Rows outside the range on consecutive dates; a remove-while-
        // iterating pass would skip every other one.
        let lines = raw_lines(&[
            "20150110", "20150109", "20150108", "20150107", "20150106",
        ]);
        let range = DateRange::new(d(2015, 1, 1), d(2015, 1, 2));

        let records = parse_and_filter(&lines, &range, FilterPolicy::Exclusive, "OSE").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let lines = raw_lines(&["20171008", "20161009", "20151008"]);
        let range = DateRange::new(d(2015, 10, 9), d(2017, 10, 9));

        let once = parse_and_filter(&lines, &range, FilterPolicy::Exclusive, "OSE").unwrap();

        // Re-serialize the surviving records into raw shape and filter again.
        let mut again_lines = vec![lines[0].clone()];
        for r in &once {
            again_lines.push(format!(
                "{},{},Oslo Børs,{},{},{},{},{},{}",
                r.quote_date.format("%Y%m%d"),
                r.ticker,
                r.open,
                r.high,
                r.low,
                r.close,
                r.volume,
                r.value
            ));
        }
        let twice = parse_and_filter(&again_lines, &range, FilterPolicy::Exclusive, "OSE").unwrap();

        let once_dates: Vec<NaiveDate> = once.iter().map(|r| r.quote_date).collect();
        let twice_dates: Vec<NaiveDate> = twice.iter().map(|r| r.quote_date).collect();
        assert_eq!(once_dates, twice_dates);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let mut lines = raw_lines(&["20181008"]);
        lines.push("garbage,row".to_string());
        lines.push("20181007,TRVX,Oslo Børs,notanumber,1,1,1,1,1".to_string());
        let range = DateRange::full_history(d(2018, 12, 31));

        let records = parse_and_filter(&lines, &range, FilterPolicy::Exclusive, "OSE").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn plot_start_is_rederived_for_full_history() {
        let lines = raw_lines(&["20181008", "20151008"]);
        let range = DateRange::full_history(d(2018, 12, 31));
        let records = parse_and_filter(&lines, &range, FilterPolicy::Exclusive, "OSE").unwrap();

        // Sentinel from-date: axis starts at the oldest surviving record.
        assert_eq!(effective_plot_start(&records, &range), d(2015, 10, 8));

        // Explicit from-date: axis starts at the given bound.
        let explicit = DateRange::new(d(2015, 1, 1), d(2018, 12, 31));
        assert_eq!(effective_plot_start(&records, &explicit), d(2015, 1, 1));
    }
}
