use crate::error::{Error, Result};
use reqwest::{Client, StatusCode};
use url::Url;

/// What a single GET produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Body of a `200 OK` response
    Page(String),
    /// Any other status; the caller reports it and carries on with no data
    Failed(StatusCode),
}

/// Thin wrapper around one HTTP client. One call, one request: no retries,
/// no custom headers.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher with the transport defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Issue a single GET for `url`.
    ///
    /// Only an exact `200 OK` counts as a page. Transport failures are
    /// returned as errors, not as [`FetchOutcome::Failed`].
    pub async fn fetch(&self, url: &str) -> Result<FetchOutcome> {
        let parsed = Url::parse(url).map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        ::log::info!("Fetching {}", parsed);
        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        ::log::debug!("{} answered with status {}", url, status);

        if status != StatusCode::OK {
            ::log::warn!("Fetch of {} failed with status {}", url, status);
            return Ok(FetchOutcome::Failed(status));
        }

        let body = response.text().await?;
        ::log::debug!("Received {} bytes from {}", body.len(), url);
        Ok(FetchOutcome::Page(body))
    }
}
