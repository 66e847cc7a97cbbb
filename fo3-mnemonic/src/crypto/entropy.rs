//! Entropy length validation and mnemonic strengths

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Entropy lengths accepted by the codec, in bytes
pub const ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Supported mnemonic strengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MnemonicStrength {
    /// 12 words (128 bits)
    Words12,
    /// 15 words (160 bits)
    Words15,
    /// 18 words (192 bits)
    Words18,
    /// 21 words (224 bits)
    Words21,
    /// 24 words (256 bits)
    Words24,
}

impl MnemonicStrength {
    /// All strengths, weakest first
    pub const ALL: [MnemonicStrength; 5] = [
        Self::Words12,
        Self::Words15,
        Self::Words18,
        Self::Words21,
        Self::Words24,
    ];

    /// Get entropy length in bytes
    pub fn entropy_bytes(&self) -> usize {
        match self {
            Self::Words12 => 16,
            Self::Words15 => 20,
            Self::Words18 => 24,
            Self::Words21 => 28,
            Self::Words24 => 32,
        }
    }

    /// Get entropy length in bits
    pub fn entropy_bits(&self) -> usize {
        self.entropy_bytes() * 8
    }

    /// Number of checksum bits appended to the entropy
    pub fn checksum_bits(&self) -> usize {
        self.entropy_bytes() / 4
    }

    /// Number of words in a mnemonic of this strength
    pub fn word_count(&self) -> usize {
        (self.entropy_bits() + self.checksum_bits()) / 11
    }

    /// Look up the strength for an entropy length in bytes
    pub fn from_entropy_bytes(len: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.entropy_bytes() == len)
            .ok_or(Error::InvalidEntropyLength(len))
    }

    /// Look up the strength for an entropy length in bits
    pub fn from_entropy_bits(bits: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.entropy_bits() == bits)
            .ok_or(Error::InvalidStrength(bits))
    }

    /// Look up the strength for a mnemonic word count
    pub fn from_word_count(count: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.word_count() == count)
            .ok_or(Error::InvalidMnemonicWordCount(count))
    }
}

/// Check that `entropy` has one of the allowed lengths
pub fn validate_entropy(entropy: &[u8]) -> Result<MnemonicStrength> {
    MnemonicStrength::from_entropy_bytes(entropy.len())
}
