//! Entropy source provider

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest strength a source can be asked for, in bits
pub const MAX_STRENGTH_BITS: usize = 256;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// A source of random bits
#[async_trait]
pub trait EntropySource: Send + Sync {
    /// Fetch `bits` random bits as a string of `'0'` and `'1'` digits.
    ///
    /// `bits` must be a positive multiple of 32 no larger than 256.
    async fn fetch_bits(&self, bits: usize) -> Result<String>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

/// Source type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// OS secure random number generator
    Local,
    /// Remote HTTP service
    Http,
}

/// Entropy source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntropySourceConfig {
    /// Source type
    pub source_type: SourceType,
    /// Service URL (HTTP sources only)
    pub url: Option<String>,
    /// API key (if required)
    pub api_key: Option<String>,
    /// Timeout in seconds
    pub timeout: Option<u64>,
}

impl Default for EntropySourceConfig {
    fn default() -> Self {
        Self {
            source_type: match std::env::var("FO3_ENTROPY_SOURCE").as_deref() {
                Ok("http") => SourceType::Http,
                _ => SourceType::Local,
            },
            url: std::env::var("FO3_ENTROPY_URL").ok(),
            api_key: std::env::var("FO3_ENTROPY_API_KEY").ok(),
            timeout: Some(
                std::env::var("FO3_ENTROPY_TIMEOUT")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }
}

/// Source factory
pub struct SourceFactory;

impl SourceFactory {
    /// Create a new entropy source
    pub fn create_source(config: EntropySourceConfig) -> Result<Box<dyn EntropySource>> {
        match config.source_type {
            SourceType::Local => Ok(Box::new(super::local::LocalEntropySource::new())),
            #[cfg(feature = "http-entropy")]
            SourceType::Http => {
                let source = super::http::HttpEntropySource::new(config)?;
                Ok(Box::new(source))
            }
            #[cfg(not(feature = "http-entropy"))]
            SourceType::Http => Err(Error::Config(
                "HTTP entropy sources require the http-entropy feature".to_string(),
            )),
        }
    }
}

/// Check a requested strength: a positive multiple of 32, at most 256 bits
pub fn check_strength(bits: usize) -> Result<()> {
    if bits == 0 || bits % 32 != 0 || bits > MAX_STRENGTH_BITS {
        return Err(Error::InvalidStrength(bits));
    }
    Ok(())
}

/// Pack a string of binary digits into bytes, most significant bit first.
///
/// Surrounding whitespace is ignored. Anything other than exactly `expected`
/// digits is reported as [`Error::ExternalEntropyUnavailable`].
pub fn parse_bit_string(bits: &str, expected: usize) -> Result<Vec<u8>> {
    let bits = bits.trim();
    if bits.len() != expected || expected % 8 != 0 {
        return Err(Error::ExternalEntropyUnavailable(format!(
            "expected {} binary digits, got {}",
            expected,
            bits.len()
        )));
    }

    bits.as_bytes()
        .chunks(8)
        .map(|chunk| {
            chunk.iter().try_fold(0u8, |acc, &digit| match digit {
                b'0' => Ok(acc << 1),
                b'1' => Ok((acc << 1) | 1),
                other => Err(Error::ExternalEntropyUnavailable(format!(
                    "unexpected character {:?} in bit string",
                    char::from(other)
                ))),
            })
        })
        .collect()
}

/// Render bytes as a string of binary digits, most significant bit first
pub fn to_bit_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:08b}", b)).collect()
}
