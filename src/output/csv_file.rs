use crate::errors::Result;
use crate::models::quote::PriceRecord;
use crate::util;
use log::info;
use std::path::{Path, PathBuf};

/// Column layout after the reshape: the free-text exchange description
/// is gone and the normalized code sits in the trailing `exch` column.
pub const CSV_HEADER: [&str; 9] = [
    "quote_date",
    "paper",
    "open",
    "high",
    "low",
    "close",
    "volume",
    "value",
    "exch",
];

/// Write the filtered record sequence as semicolon-delimited UTF-8 text,
/// newest-first ordering preserved. Returns the written path
/// (`YYYY.MM.DD-TICKER.csv` under `dir`).
pub fn write_csv(records: &[PriceRecord], ticker: &str, dir: &Path) -> Result<PathBuf> {
    let filename = format!(
        "{}-{}.csv",
        util::filename_stamp(util::today()),
        ticker.to_uppercase()
    );
    let path = dir.join(filename);

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&path)?;

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.quote_date.format("%Y%m%d").to_string(),
            record.ticker.clone(),
            record.open.to_string(),
            record.high.to_string(),
            record.low.to_string(),
            record.close.to_string(),
            record.volume.to_string(),
            record.value.to_string(),
            record.exch.clone(),
        ])?;
    }
    writer.flush()?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(path)
}
