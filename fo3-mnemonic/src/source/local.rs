//! OS random number generator as an entropy source

use async_trait::async_trait;
use rand::{rngs::OsRng, RngCore};

use super::provider::{check_strength, to_bit_string, EntropySource};
use crate::error::Result;

/// Fill a new buffer of `len` bytes from the OS secure RNG
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Entropy from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalEntropySource;

impl LocalEntropySource {
    /// Create a source backed by the OS secure RNG
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EntropySource for LocalEntropySource {
    async fn fetch_bits(&self, bits: usize) -> Result<String> {
        check_strength(bits)?;
        Ok(to_bit_string(&random_bytes(bits / 8)))
    }

    fn name(&self) -> &str {
        "local"
    }
}
