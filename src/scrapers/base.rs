use crate::errors::{OseError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Narrow retrieval capability the pipeline stages are written against.
/// Production uses [`HttpFetcher`]; tests substitute fixture documents.
#[async_trait]
pub trait PageFetcher {
    /// Fetch the document body at `url` as text.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Live HTTP fetcher.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(OseError::RequestError)?;

        Ok(Self { client })
    }
}


#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(OseError::RequestError)?;

        if !response.status().is_success() {
            return Err(OseError::FetchUnavailable(format!(
                "{} returned HTTP status {}",
                url,
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}
