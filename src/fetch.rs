//! Article fetching.
//!
//! Fetches the raw page body with reqwest and hands it on untouched. Content
//! extraction and cleaning are deliberately out of scope; the model receives
//! the HTML as-is.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

/// User-Agent string identifying this fetcher
const USER_AGENT: &str = concat!("summarist/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to fetch URL: {0}")]
    Http(#[from] reqwest::Error),
}

/// Source of article bodies. Implemented over HTTP in production and by
/// canned mocks in tests.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP fetcher returning the response body as text.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}
