//! Error types for the mnemonic library

use thiserror::Error;

/// Custom error type for mnemonic operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid entropy length: {0} bytes (expected 16, 20, 24, 28 or 32)")]
    InvalidEntropyLength(usize),

    #[error("Invalid wordlist: {0}")]
    InvalidWordlist(String),

    #[error("Invalid mnemonic word count: {0} (expected 12, 15, 18, 21 or 24)")]
    InvalidMnemonicWordCount(usize),

    #[error("Unknown word: {0}")]
    UnknownWord(String),

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("External entropy unavailable: {0}")]
    ExternalEntropyUnavailable(String),

    #[error("Invalid strength: {0} bits (expected a multiple of 32 between 128 and 256)")]
    InvalidStrength(usize),

    #[error("Invalid binary mnemonic: {0}")]
    InvalidBinary(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

#[cfg(feature = "http-entropy")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::ExternalEntropyUnavailable(e.to_string())
    }
}

/// Result type for mnemonic operations
pub type Result<T> = std::result::Result<T, Error>;
