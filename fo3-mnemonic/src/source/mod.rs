//! Entropy sources
//!
//! Local OS randomness can be combined with bits from a remote source. The
//! two are XORed byte for byte. A remote failure is always returned to the
//! caller; there is no silent fallback to local-only entropy.

pub mod provider;
pub mod local;
#[cfg(feature = "http-entropy")]
pub mod http;

pub use provider::*;
pub use local::*;
#[cfg(feature = "http-entropy")]
pub use http::*;

use tracing::{debug, warn};

use crate::crypto::{validate_entropy, MnemonicCodec, MnemonicPhrase, MnemonicStrength};
use crate::error::{Error, Result};

/// XOR two equally long byte sequences
pub fn mix_entropy(local: &[u8], remote: &[u8]) -> Result<Vec<u8>> {
    if local.len() != remote.len() {
        return Err(Error::ExternalEntropyUnavailable(format!(
            "remote entropy is {} bytes, expected {}",
            remote.len(),
            local.len()
        )));
    }
    Ok(local.iter().zip(remote).map(|(a, b)| a ^ b).collect())
}

/// Draw local entropy and mix it with bits fetched from `remote`.
///
/// The result has the exact length of `strength` and is validated before it
/// is returned.
pub async fn mixed_entropy(strength: MnemonicStrength, remote: &dyn EntropySource) -> Result<Vec<u8>> {
    let bits = strength.entropy_bits();
    let local = random_bytes(strength.entropy_bytes());

    let fetched = remote.fetch_bits(bits).await.map_err(|e| {
        warn!("Entropy source {} failed: {}", remote.name(), e);
        match e {
            Error::ExternalEntropyUnavailable(_) => e,
            other => Error::ExternalEntropyUnavailable(other.to_string()),
        }
    })?;
    let remote_bytes = parse_bit_string(&fetched, bits)?;

    let entropy = mix_entropy(&local, &remote_bytes)?;
    validate_entropy(&entropy)?;
    debug!("Mixed {} bits of local and {} entropy", bits, remote.name());
    Ok(entropy)
}

impl MnemonicCodec {
    /// Generate a mnemonic from local entropy mixed with a remote source
    pub async fn generate_mixed(
        &self,
        strength: MnemonicStrength,
        remote: &dyn EntropySource,
    ) -> Result<MnemonicPhrase> {
        let entropy = mixed_entropy(strength, remote).await?;
        self.entropy_to_mnemonic(&entropy)
    }
}
