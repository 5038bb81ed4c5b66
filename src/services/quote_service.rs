use crate::cli::{Mode, RunOptions};
use crate::config::Config;
use crate::errors::Result;
use crate::output::{console, csv_file, plot};
use crate::pipeline;
use crate::scrapers::base::PageFetcher;
use crate::scrapers::directory::{self, InstrumentDirectory};
use crate::scrapers::history::HistoryFetcher;
use crate::scrapers::resolver::EndpointResolver;
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Runs the four retrieval stages in order and dispatches to the
/// selected output. Each stage's output is the next stage's sole input;
/// any failure aborts the run.
pub struct QuoteService {
    config: Config,
    directory: InstrumentDirectory,
    resolver: EndpointResolver,
    history: HistoryFetcher,
}

impl QuoteService {
    pub fn new(config: Config, fetcher: Arc<dyn PageFetcher + Send + Sync>) -> Self {
        Self {
            config,
            directory: InstrumentDirectory::new(fetcher.clone()),
            resolver: EndpointResolver::new(fetcher.clone()),
            history: HistoryFetcher::new(fetcher),
        }
    }

    /// Execute one run. Returns the written file path for the
    /// file-producing modes, `None` for the console snapshot.
    pub async fn run(&self, options: &RunOptions) -> Result<Option<PathBuf>> {
        let instruments = self.directory.list_instruments(&self.config).await?;
        let instrument = directory::find_instrument(&instruments, &options.ticker)?;
        info!("Resolved ticker {} to {}", options.ticker, instrument.name);

        let endpoint = self
            .resolver
            .resolve_history_endpoint(&instrument.profile_url, &self.config)
            .await?;
        let raw_lines = self.history.fetch_raw_lines(&endpoint).await?;

        match options.mode {
            Mode::Current => {
                // Latest session straight from the raw lines, no
                // filtering and no reshape.
                console::render_current(&raw_lines)?;
                Ok(None)
            }
            Mode::Csv => {
                let records = pipeline::parse_and_filter(
                    &raw_lines,
                    &options.range,
                    options.policy,
                    &self.config.exchange_code,
                )?;
                let path = csv_file::write_csv(
                    &records,
                    &options.ticker,
                    Path::new(&self.config.output_dir),
                )?;
                Ok(Some(path))
            }
            Mode::Plot => {
                let records = pipeline::parse_and_filter(
                    &raw_lines,
                    &options.range,
                    options.policy,
                    &self.config.exchange_code,
                )?;
                let path = plot::render_plot(
                    &records,
                    &options.range,
                    &options.ticker,
                    &self.config.currency,
                    Path::new(&self.config.output_dir),
                )?;
                Ok(Some(path))
            }
        }
    }
}
