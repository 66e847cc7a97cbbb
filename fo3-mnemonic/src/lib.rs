//! FO3 Mnemonic Core - checksummed mnemonic codec and seed derivation
//!
//! This library converts random entropy into a human-transcribable word
//! sequence and back, validates mnemonics against their embedded checksum,
//! and derives 64-byte seeds from a mnemonic and an optional passphrase.

pub mod error;
pub mod crypto;
pub mod source;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use crypto::{
    mnemonic_to_seed, mnemonic_to_seed_async, MnemonicBinary, MnemonicCodec, MnemonicInput,
    MnemonicPhrase, MnemonicStrength, Seed, Wordlist,
};
pub use source::{EntropySource, EntropySourceConfig, SourceFactory, SourceType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
