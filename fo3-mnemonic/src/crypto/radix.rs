//! Radix-2048 bit packing
//!
//! Converts between a big-endian bit buffer and a sequence of 11-bit word
//! indices. Bits are consumed and produced most-significant-bit first across
//! byte boundaries.

/// Width of one word index in bits
pub const BITS_PER_WORD: usize = 11;

const INDEX_MASK: u32 = (1 << BITS_PER_WORD) - 1;

/// Split the first `total_bits` bits of `buffer` into 11-bit indices.
///
/// `total_bits` must be a multiple of 11 and must not exceed the buffer. Bits
/// past `total_bits` are never read.
pub fn to_indices(buffer: &[u8], total_bits: usize) -> Vec<u16> {
    debug_assert!(total_bits % BITS_PER_WORD == 0);
    debug_assert!(total_bits <= buffer.len() * 8);

    let mut indices = Vec::with_capacity(total_bits / BITS_PER_WORD);
    let mut acc: u32 = 0;
    let mut acc_bits = 0usize;
    let mut remaining = total_bits;

    for &byte in buffer {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(8);
        acc = (acc << take) | u32::from(byte >> (8 - take));
        acc_bits += take;
        remaining -= take;

        if acc_bits >= BITS_PER_WORD {
            acc_bits -= BITS_PER_WORD;
            indices.push(((acc >> acc_bits) & INDEX_MASK) as u16);
            acc &= (1 << acc_bits) - 1;
        }
    }

    indices
}

/// Pack 11-bit indices back into bytes.
///
/// The result holds `indices.len() * 11` meaningful bits; any trailing bits of
/// the last byte are zero.
pub fn from_indices(indices: &[u16]) -> Vec<u8> {
    let total_bits = indices.len() * BITS_PER_WORD;
    let mut buffer = Vec::with_capacity((total_bits + 7) / 8);
    let mut acc: u32 = 0;
    let mut acc_bits = 0usize;

    for &index in indices {
        debug_assert!(u32::from(index) <= INDEX_MASK);
        acc = (acc << BITS_PER_WORD) | (u32::from(index) & INDEX_MASK);
        acc_bits += BITS_PER_WORD;

        while acc_bits >= 8 {
            acc_bits -= 8;
            buffer.push((acc >> acc_bits) as u8);
        }
        acc &= (1 << acc_bits) - 1;
    }

    if acc_bits > 0 {
        buffer.push((acc << (8 - acc_bits)) as u8);
    }

    buffer
}
