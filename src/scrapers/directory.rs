use crate::config::Config;
use crate::errors::{OseError, Result};
use crate::models::quote::Instrument;
use crate::scrapers::base::PageFetcher;
use log::{debug, info};
use scraper::{Html, Selector};
use std::sync::Arc;

/// Scrapes the exchange listing page into the full set of listed
/// instruments (ticker, display name, profile URL).
pub struct InstrumentDirectory {
    fetcher: Arc<dyn PageFetcher + Send + Sync>,
}

impl InstrumentDirectory {
    pub fn new(fetcher: Arc<dyn PageFetcher + Send + Sync>) -> Self {
        Self { fetcher }
    }

    /// Fetch and parse the listing page. Fails with
    /// [`OseError::DirectoryUnavailable`] when the page cannot be
    /// retrieved and [`OseError::DirectoryFormatChanged`] when the
    /// expected markup is absent.
    pub async fn list_instruments(&self, config: &Config) -> Result<Vec<Instrument>> {
        info!("Fetching exchange listing from {}", config.listing_url);

        let body = self
            .fetcher
            .fetch_text(&config.listing_url)
            .await
            .map_err(|e| OseError::DirectoryUnavailable(e.to_string()))?;

        let document = Html::parse_document(&body);
        // Selectors from literal strings cannot fail to parse.
        let cell_selector = Selector::parse("td.leftalign").unwrap();
        let link_selector = Selector::parse("a").unwrap();

        let exchange_suffix = format!(".{}", config.exchange_code);
        let mut instruments = Vec::new();

        for cell in document.select(&cell_selector) {
            for link in cell.select(&link_selector) {
                let Some(href) = link.value().attr("href") else {
                    continue;
                };

                // Ticker sits between the query's '=' and the exchange
                // suffix, e.g. kurs.php?paper=TRVX.OSE.
                let Some(ticker) = href
                    .rsplit_once('=')
                    .map(|(_, tail)| tail)
                    .and_then(|tail| tail.strip_suffix(exchange_suffix.as_str()))
                else {
                    debug!("Skipping listing link without ticker pattern: {}", href);
                    continue;
                };

                instruments.push(Instrument {
                    ticker: ticker.to_string(),
                    name: link.text().collect::<String>().trim().to_string(),
                    profile_url: format!("{}{}", config.quote_base_url, href),
                });
            }
        }

        if instruments.is_empty() {
            return Err(OseError::DirectoryFormatChanged(
                "no company links found under td.leftalign cells".to_string(),
            ));
        }

        info!("Found {} instruments on {}", instruments.len(), config.exchange_code);
        Ok(instruments)
    }
}

/// Case-insensitive lookup; the listing preserves original casing.
pub fn find_instrument<'a>(instruments: &'a [Instrument], ticker: &str) -> Result<&'a Instrument> {
    instruments
        .iter()
        .find(|i| i.ticker.eq_ignore_ascii_case(ticker))
        .ok_or_else(|| OseError::InstrumentNotFound(ticker.to_string()))
}
