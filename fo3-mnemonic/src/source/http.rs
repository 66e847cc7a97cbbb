//! Remote entropy over HTTP
//!
//! The service is queried with `GET {url}?bits={n}` and must answer with a
//! plain-text body of exactly `n` binary digits.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::{debug, warn};

use super::provider::{check_strength, parse_bit_string, EntropySource, EntropySourceConfig, DEFAULT_TIMEOUT_SECS};
use crate::error::{Error, Result};

/// HTTP client for a remote randomness service
#[derive(Debug, Clone)]
pub struct HttpEntropySource {
    url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpEntropySource {
    /// Create a new source from configuration; `url` is required
    pub fn new(config: EntropySourceConfig) -> Result<Self> {
        let url = config
            .url
            .ok_or_else(|| Error::Config("HTTP entropy source requires a url".to_string()))?;

        let timeout = Duration::from_secs(config.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url,
            api_key: config.api_key,
            client,
        })
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(ref api_key) = self.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| Error::Config(format!("Invalid API key: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl EntropySource for HttpEntropySource {
    async fn fetch_bits(&self, bits: usize) -> Result<String> {
        check_strength(bits)?;
        debug!("Requesting {} bits from {}", bits, self.url);

        let response = self
            .client
            .get(&self.url)
            .headers(self.build_headers()?)
            .query(&[("bits", bits)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Entropy service {} answered {}", self.url, status);
            return Err(Error::ExternalEntropyUnavailable(format!(
                "service returned status {}",
                status
            )));
        }

        let body = response.text().await?;
        parse_bit_string(&body, bits)?;
        Ok(body.trim().to_string())
    }

    fn name(&self) -> &str {
        "http"
    }
}
