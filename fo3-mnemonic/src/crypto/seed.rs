//! Seed derivation
//!
//! seed = PBKDF2-HMAC-SHA512(NFKD(mnemonic), "mnemonic" + NFKD(passphrase), 2048, 64)

use std::fmt;

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha512;
use tracing::debug;

use super::mnemonic::{MnemonicCodec, MnemonicInput, MnemonicPhrase};
use super::normalize::normalize;
use crate::error::{Error, Result};

/// Number of PBKDF2 rounds
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Seed length in bytes
pub const SEED_LEN: usize = 64;

/// Prefix of the PBKDF2 salt
pub const SALT_PREFIX: &str = "mnemonic";

/// 64 bytes of seed material
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Get the raw seed bytes
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Copy the seed into a vector
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// Run PBKDF2 over an already canonical mnemonic
fn derive(mnemonic: &str, passphrase: &str) -> Result<Seed> {
    let salt = format!("{}{}", SALT_PREFIX, normalize(passphrase));
    let mut seed = [0u8; SEED_LEN];
    pbkdf2::<Hmac<Sha512>>(mnemonic.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed)
        .map_err(|e| Error::Unknown(format!("PBKDF2 failed: {}", e)))?;
    Ok(Seed(seed))
}

/// Run [`derive`] on the blocking pool
async fn derive_blocking(mnemonic: String, passphrase: String) -> Result<Seed> {
    tokio::task::spawn_blocking(move || derive(&mnemonic, &passphrase))
        .await
        .map_err(|e| Error::Unknown(format!("Seed derivation task failed: {}", e)))?
}

/// Derive a seed from mnemonic text and a passphrase.
///
/// The mnemonic is NFKD-normalized and must have a valid word count; its
/// words are not checked against any table.
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> Result<Seed> {
    let phrase = MnemonicPhrase::parse(mnemonic)?;
    derive(&phrase.phrase(), passphrase)
}

/// Non-blocking form of [`mnemonic_to_seed`].
///
/// The key stretching runs on tokio's blocking pool and always runs to
/// completion. Dropping the future discards the result.
pub async fn mnemonic_to_seed_async(mnemonic: &str, passphrase: &str) -> Result<Seed> {
    let phrase = MnemonicPhrase::parse(mnemonic)?;
    derive_blocking(phrase.phrase(), passphrase.to_string()).await
}

impl MnemonicCodec {
    /// Derive a seed from a mnemonic in any form.
    ///
    /// Word indices are mapped through this codec's table first. Text is not
    /// checked against the table.
    pub fn mnemonic_to_seed<'a>(
        &self,
        mnemonic: impl Into<MnemonicInput<'a>>,
        passphrase: &str,
    ) -> Result<Seed> {
        let text = self.canonical_text(mnemonic)?;
        debug!("Deriving seed ({} rounds)", PBKDF2_ROUNDS);
        derive(&text, passphrase)
    }

    /// Non-blocking form of [`MnemonicCodec::mnemonic_to_seed`]
    pub async fn mnemonic_to_seed_async<'a>(
        &self,
        mnemonic: impl Into<MnemonicInput<'a>>,
        passphrase: &str,
    ) -> Result<Seed> {
        let text = self.canonical_text(mnemonic)?;
        debug!("Deriving seed on blocking pool ({} rounds)", PBKDF2_ROUNDS);
        derive_blocking(text, passphrase.to_string()).await
    }
}
