use crate::errors::{OseError, Result};
use crate::models::quote::{DateRange, PriceRecord};
use crate::pipeline;
use crate::util;
use chrono::NaiveDate;
use log::info;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

const CHART_SIZE: (u32, u32) = (1024, 768);

/// Render the filtered sequence as a single-panel line chart of closing
/// prices: x axis in calendar years from the effective lower bound
/// through the to-date, y axis in the exchange currency, title = ticker.
/// Returns the written path (`YYYY.MM.DD-TICKER.png` under `dir`).
pub fn render_plot(
    records: &[PriceRecord],
    range: &DateRange,
    ticker: &str,
    currency: &str,
    dir: &Path,
) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(OseError::DataError(
            "no records in range, nothing to plot".to_string(),
        ));
    }

    let series = close_series(records);
    let (y_min, y_max) = y_bounds(&series);
    let x_start = pipeline::effective_plot_start(records, range);
    let x_end = range.to;

    let filename = format!(
        "{}-{}.png",
        util::filename_stamp(util::today()),
        ticker.to_uppercase()
    );
    let path = dir.join(filename);

    let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| OseError::PlotError(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(ticker.to_uppercase(), ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(52)
        .build_cartesian_2d(x_start..x_end, y_min..y_max)
        .map_err(|e| OseError::PlotError(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("year")
        .y_desc(currency)
        .x_labels(year_span(x_start, x_end))
        .x_label_formatter(&|d| d.format("%Y").to_string())
        .draw()
        .map_err(|e| OseError::PlotError(e.to_string()))?;

    // Series arrives newest-first; draw oldest-to-newest.
    chart
        .draw_series(LineSeries::new(series.into_iter().rev(), &BLUE))
        .map_err(|e| OseError::PlotError(e.to_string()))?;

    root.present()
        .map_err(|e| OseError::PlotError(e.to_string()))?;
    drop(chart);
    drop(root);

    info!("Wrote chart to {}", path.display());
    Ok(path)
}

/// (quote_date, close) pairs in source order.
fn close_series(records: &[PriceRecord]) -> Vec<(NaiveDate, f64)> {
    records.iter().map(|r| (r.quote_date, r.close)).collect()
}

/// Y axis bounds with a small margin around the observed closes.
fn y_bounds(series: &[(NaiveDate, f64)]) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for &(_, close) in series {
        min = min.min(close);
        max = max.max(close);
    }
    let margin = ((max - min) * 0.05).max(0.5);
    (min - margin, max + margin)
}

/// One tick label per calendar year, both end years included.
fn year_span(start: NaiveDate, end: NaiveDate) -> usize {
    use chrono::Datelike;
    (end.year() - start.year() + 1).max(1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn record(date: NaiveDate, close: f64) -> PriceRecord {
        PriceRecord {
            quote_date: date,
            ticker: "TRVX".to_string(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1,
            value: 1.0,
            exch: "OSE".to_string(),
        }
    }

    #[test]
    fn extracts_date_close_pairs() {
        let records = vec![record(d(2017, 10, 8), 11.44), record(d(2016, 10, 9), 9.8)];
        let series = close_series(&records);
        assert_eq!(series, vec![(d(2017, 10, 8), 11.44), (d(2016, 10, 9), 9.8)]);
    }

    #[test]
    fn y_bounds_pad_around_the_closes() {
        let series = vec![(d(2017, 1, 1), 10.0), (d(2016, 1, 1), 20.0)];
        let (min, max) = y_bounds(&series);
        assert!(min < 10.0);
        assert!(max > 20.0);
    }

    #[test]
    fn year_span_counts_both_end_years() {
        assert_eq!(year_span(d(2015, 10, 9), d(2017, 10, 9)), 3);
        assert_eq!(year_span(d(2017, 1, 1), d(2017, 12, 31)), 1);
    }

    #[test]
    fn empty_range_is_an_error() {
        let range = DateRange::new(d(2015, 1, 1), d(2016, 1, 1));
        let dir = tempfile::tempdir().unwrap();
        let err = render_plot(&[], &range, "trvx", "NOK", dir.path()).unwrap_err();
        assert!(matches!(err, OseError::DataError(_)));
    }
}
