//! Unicode normalization of mnemonic text and passphrases

use unicode_normalization::UnicodeNormalization;

use super::entropy::MnemonicStrength;
use crate::error::Result;

/// Word separator of the textual mnemonic format
pub const WORD_SEPARATOR: &str = " ";

/// Apply NFKD normalization to `text`
pub fn normalize(text: &str) -> String {
    text.nfkd().collect()
}

/// Normalize a mnemonic and split it into words.
///
/// The text is NFKD-normalized first, so compatibility spaces such as
/// U+3000 become plain spaces, then split on every single space. The word
/// count must be 12, 15, 18, 21 or 24.
pub fn tokenize(mnemonic: &str) -> Result<Vec<String>> {
    let normalized = normalize(mnemonic);
    let words: Vec<String> = normalized.split(WORD_SEPARATOR).map(str::to_string).collect();
    MnemonicStrength::from_word_count(words.len())?;
    Ok(words)
}
