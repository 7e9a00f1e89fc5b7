//! NOAA SWPC GOES proton flux feed backed by reqwest.

use crate::parse::parse_latest_flux;
use crate::FluxProvider;
use async_trait::async_trait;
use radrisk_core::error::{RadriskError, RadriskResult};
use radrisk_core::{FeedError, ProtonFlux};
use std::time::Duration;
use url::Url;

/// GOES primary satellite, differential proton flux, last 24 hours.
pub const DEFAULT_FEED_URL: &str =
    "https://services.swpc.noaa.gov/json/goes/primary/differential-proton-flux-1-day.json";

/// Upper bound on one feed request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how long to ask for flux data.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Fetches the latest reading from a SWPC-style JSON time series.
///
/// ```ignore
/// let feed = NoaaFeed::new(FeedConfig::default())?;
/// let reading = get_proton_flux(&feed).await;
/// ```
#[derive(Debug)]
pub struct NoaaFeed {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl NoaaFeed {
    pub fn new(config: FeedConfig) -> RadriskResult<Self> {
        let url = Url::parse(&config.url).map_err(|e| {
            RadriskError::InvalidInput(format!("feed URL {:?} is invalid: {e}", config.url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RadriskError::InvalidInput(format!(
                "feed URL must be http or https, got {}",
                url.scheme()
            )));
        }
        if config.timeout.is_zero() {
            return Err(RadriskError::InvalidInput(
                "feed timeout must be greater than zero".into(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RadriskError::Internal(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!(url = %url, timeout_ms = config.timeout.as_millis() as u64, "feed configured");

        Ok(Self {
            client,
            url,
            timeout: config.timeout,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn classify(&self, e: reqwest::Error) -> FeedError {
        if e.is_timeout() {
            FeedError::Timeout(self.timeout)
        } else {
            FeedError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl FluxProvider for NoaaFeed {
    async fn latest_flux(&self) -> Result<ProtonFlux, FeedError> {
        tracing::debug!(url = %self.url, "fetching proton flux");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        tracing::debug!(bytes = body.len(), "feed body received");

        parse_latest_flux(&body)
    }
}
