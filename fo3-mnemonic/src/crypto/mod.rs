//! Cryptographic primitives and operations
//!
//! This module provides the mnemonic codec: entropy validation, checksums,
//! radix-2048 packing, word tables, text normalization and seed derivation.

pub mod entropy;
pub mod checksum;
pub mod radix;
pub mod wordlist;
pub mod normalize;
pub mod mnemonic;
pub mod seed;

pub use entropy::{validate_entropy, MnemonicStrength, ENTROPY_LENGTHS};
pub use wordlist::{Wordlist, WORDLIST_SIZE};
pub use mnemonic::*;
pub use seed::*;
