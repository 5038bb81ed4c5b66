use crate::errors::{OseError, Result};
use crate::scrapers::base::PageFetcher;
use log::info;
use std::sync::Arc;

/// Retrieves the raw historical record lines from a resolved endpoint.
/// The first line is the comma-separated header row
/// (`quote_date,paper,exch,open,high,low,close,volume,value`).
pub struct HistoryFetcher {
    fetcher: Arc<dyn PageFetcher + Send + Sync>,
}

impl HistoryFetcher {
    pub fn new(fetcher: Arc<dyn PageFetcher + Send + Sync>) -> Self {
        Self { fetcher }
    }

    /// Single retrieval, no retry; a failed fetch is fatal to the run.
    pub async fn fetch_raw_lines(&self, endpoint_url: &str) -> Result<Vec<String>> {
        let body = self
            .fetcher
            .fetch_text(endpoint_url)
            .await
            .map_err(|e| OseError::FetchUnavailable(e.to_string()))?;

        let lines: Vec<String> = body
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect();

        if lines.is_empty() {
            return Err(OseError::FetchUnavailable(format!(
                "{} returned an empty body",
                endpoint_url
            )));
        }

        info!("Fetched {} raw history lines", lines.len());
        Ok(lines)
    }
}
