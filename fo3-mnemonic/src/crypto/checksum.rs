//! Entropy checksum

use sha2::{Digest, Sha256};

use super::entropy::validate_entropy;
use crate::error::Result;

/// Compute the checksum byte for `entropy`.
///
/// Only the top `len / 4` bits carry the checksum, taken from the first byte
/// of the SHA-256 digest. The remaining low bits are zero.
pub fn checksum(entropy: &[u8]) -> Result<u8> {
    let strength = validate_entropy(entropy)?;
    let hash = Sha256::digest(entropy);
    let bits_to_zero = 8 - strength.checksum_bits();

    Ok((hash[0] >> bits_to_zero) << bits_to_zero)
}
