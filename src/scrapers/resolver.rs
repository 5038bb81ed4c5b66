use crate::config::Config;
use crate::errors::{OseError, Result};
use crate::scrapers::base::PageFetcher;
use log::{debug, info};
use scraper::{Html, Selector};
use std::sync::Arc;

/// Visible label of the export option on the instrument profile page.
const EXPORT_OPTION_LABEL: &str = "Dataeksport";
/// Path shape of the historical-data link on the export page.
const HISTORY_PATH_PREFIX: &str = "paperhistory";
const HISTORY_PATH_SUFFIX: &str = "csv";

/// Walks from an instrument's profile page, via its export menu, to the
/// URL serving raw historical records.
pub struct EndpointResolver {
    fetcher: Arc<dyn PageFetcher + Send + Sync>,
}

impl EndpointResolver {
    pub fn new(fetcher: Arc<dyn PageFetcher + Send + Sync>) -> Self {
        Self { fetcher }
    }

    pub async fn resolve_history_endpoint(
        &self,
        profile_url: &str,
        config: &Config,
    ) -> Result<String> {
        let export_url = self.find_export_menu(profile_url, config).await?;
        debug!("Export menu for {} is {}", profile_url, export_url);
        let endpoint = self.find_history_link(&export_url, config).await?;
        info!("Resolved history endpoint {}", endpoint);
        Ok(endpoint)
    }

    /// Hop one: the profile page's option element labelled exactly
    /// "Dataeksport" points at the export menu.
    async fn find_export_menu(&self, profile_url: &str, config: &Config) -> Result<String> {
        let body = self.fetcher.fetch_text(profile_url).await?;
        let document = Html::parse_document(&body);
        let option_selector = Selector::parse("option").unwrap();

        for option in document.select(&option_selector) {
            let label = option.text().collect::<String>();
            if label.trim() == EXPORT_OPTION_LABEL {
                if let Some(value) = option.value().attr("value") {
                    return Ok(format!("{}{}", config.site_base_url, value));
                }
            }
        }

        Err(OseError::NoExportMenu(profile_url.to_string()))
    }

    /// Hop two: among the export page's links matching the
    /// paperhistory…csv path shape, the LAST one wins. Sources list
    /// candidates in ascending relevance order, so this must stay a
    /// fold-to-last rather than a first-match scan.
    async fn find_history_link(&self, export_url: &str, config: &Config) -> Result<String> {
        let body = self.fetcher.fetch_text(export_url).await?;
        let document = Html::parse_document(&body);
        let link_selector = Selector::parse("a").unwrap();

        let last_match = document
            .select(&link_selector)
            .filter_map(|link| link.value().attr("href"))
            .filter(|href| {
                href.starts_with(HISTORY_PATH_PREFIX) && href.ends_with(HISTORY_PATH_SUFFIX)
            })
            .last();

        match last_match {
            Some(href) => Ok(format!("{}{}", config.quote_base_url, href)),
            None => Err(OseError::NoHistoryLink(export_url.to_string())),
        }
    }
}
