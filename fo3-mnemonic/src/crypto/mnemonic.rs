//! Mnemonic phrase encoding, decoding and validation

use std::fmt;
use std::str::FromStr;

use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::checksum::checksum;
use super::entropy::{validate_entropy, MnemonicStrength};
use super::normalize::{tokenize, WORD_SEPARATOR};
use super::radix;
use super::wordlist::{Wordlist, WORDLIST_SIZE};
use crate::error::{Error, Result};

/// A mnemonic as an ordered sequence of words
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MnemonicPhrase {
    words: Vec<String>,
    strength: MnemonicStrength,
}

impl MnemonicPhrase {
    /// Parse mnemonic text.
    ///
    /// The text is NFKD-normalized and split on single spaces. Only the word
    /// count is checked here; words are checked against a table when the
    /// phrase is decoded.
    pub fn parse(text: &str) -> Result<Self> {
        let words = tokenize(text)?;
        let strength = MnemonicStrength::from_word_count(words.len())?;
        Ok(Self { words, strength })
    }

    /// The words of the phrase
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Strength implied by the word count
    pub fn strength(&self) -> MnemonicStrength {
        self.strength
    }

    /// Words joined with single spaces
    pub fn phrase(&self) -> String {
        self.words.join(WORD_SEPARATOR)
    }
}

impl fmt::Display for MnemonicPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(WORD_SEPARATOR)?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl fmt::Debug for MnemonicPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MnemonicPhrase")
            .field("word_count", &self.words.len())
            .finish_non_exhaustive()
    }
}

impl FromStr for MnemonicPhrase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A mnemonic as a sequence of word indices.
///
/// The byte form stores each index as a little-endian `u16`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u16>", into = "Vec<u16>")]
pub struct MnemonicBinary {
    indices: Vec<u16>,
}

impl MnemonicBinary {
    /// Wrap a sequence of word indices.
    ///
    /// Every index must be below 2048 and the count must be a valid word count.
    pub fn new(indices: Vec<u16>) -> Result<Self> {
        MnemonicStrength::from_word_count(indices.len())?;
        if let Some(index) = indices.iter().find(|&&i| usize::from(i) >= WORDLIST_SIZE) {
            return Err(Error::InvalidBinary(format!("word index {} out of range", index)));
        }
        Ok(Self { indices })
    }

    /// The word indices
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Number of words
    pub fn word_count(&self) -> usize {
        self.indices.len()
    }

    /// Encode as little-endian `u16` values
    pub fn to_bytes(&self) -> Vec<u8> {
        self.indices.iter().flat_map(|i| i.to_le_bytes()).collect()
    }

    /// Decode little-endian `u16` values
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 2 != 0 {
            return Err(Error::InvalidBinary(format!("odd byte length {}", bytes.len())));
        }
        let indices = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Self::new(indices)
    }
}

impl fmt::Debug for MnemonicBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MnemonicBinary")
            .field("word_count", &self.indices.len())
            .finish_non_exhaustive()
    }
}

impl TryFrom<Vec<u16>> for MnemonicBinary {
    type Error = Error;

    fn try_from(indices: Vec<u16>) -> Result<Self> {
        Self::new(indices)
    }
}

impl From<MnemonicBinary> for Vec<u16> {
    fn from(binary: MnemonicBinary) -> Self {
        binary.indices
    }
}

/// Any of the accepted mnemonic forms
#[derive(Debug, Clone, Copy)]
pub enum MnemonicInput<'a> {
    /// Raw text, normalized before use
    Text(&'a str),
    /// An already tokenized phrase
    Phrase(&'a MnemonicPhrase),
    /// Word indices; no normalization applies
    Binary(&'a MnemonicBinary),
}

impl<'a> From<&'a str> for MnemonicInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for MnemonicInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl<'a> From<&'a MnemonicPhrase> for MnemonicInput<'a> {
    fn from(phrase: &'a MnemonicPhrase) -> Self {
        Self::Phrase(phrase)
    }
}

impl<'a> From<&'a MnemonicBinary> for MnemonicInput<'a> {
    fn from(binary: &'a MnemonicBinary) -> Self {
        Self::Binary(binary)
    }
}

/// Converts entropy to mnemonics and back using one word table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicCodec {
    wordlist: Wordlist,
}

impl MnemonicCodec {
    /// Create a codec over a validated table
    pub fn new(wordlist: Wordlist) -> Self {
        Self { wordlist }
    }

    /// Create a codec over the bundled English table
    pub fn english() -> Result<Self> {
        Ok(Self::new(Wordlist::english()?))
    }

    /// Validate `words` as a table and create a codec over it
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(Wordlist::new(words)?))
    }

    /// The word table
    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Encode entropy as word indices
    pub fn entropy_to_binary(&self, entropy: &[u8]) -> Result<MnemonicBinary> {
        let strength = validate_entropy(entropy)?;

        let mut buffer = Vec::with_capacity(entropy.len() + 1);
        buffer.extend_from_slice(entropy);
        buffer.push(checksum(entropy)?);

        let total_bits = strength.entropy_bits() + strength.checksum_bits();
        Ok(MnemonicBinary {
            indices: radix::to_indices(&buffer, total_bits),
        })
    }

    /// Encode entropy as a mnemonic phrase
    pub fn entropy_to_mnemonic(&self, entropy: &[u8]) -> Result<MnemonicPhrase> {
        let binary = self.entropy_to_binary(entropy)?;
        self.binary_to_phrase(&binary)
    }

    /// Decode a mnemonic in any form back to its entropy.
    ///
    /// Fails with [`Error::InvalidMnemonicWordCount`], [`Error::UnknownWord`]
    /// or [`Error::ChecksumMismatch`].
    pub fn mnemonic_to_entropy<'a>(&self, mnemonic: impl Into<MnemonicInput<'a>>) -> Result<Vec<u8>> {
        let indices = self.indices(mnemonic.into())?;
        decode_indices(&indices)
    }

    /// Check a mnemonic in any form.
    ///
    /// Returns `false` on any decoding failure.
    pub fn validate_mnemonic<'a>(&self, mnemonic: impl Into<MnemonicInput<'a>>) -> bool {
        self.mnemonic_to_entropy(mnemonic).is_ok()
    }

    /// Convert a phrase to word indices
    pub fn phrase_to_binary(&self, phrase: &MnemonicPhrase) -> Result<MnemonicBinary> {
        let indices = self.indices(MnemonicInput::Phrase(phrase))?;
        Ok(MnemonicBinary { indices })
    }

    /// Convert word indices to a phrase
    pub fn binary_to_phrase(&self, binary: &MnemonicBinary) -> Result<MnemonicPhrase> {
        let strength = MnemonicStrength::from_word_count(binary.indices.len())?;
        let words = binary
            .indices
            .iter()
            .map(|&i| {
                self.wordlist
                    .word(i)
                    .map(str::to_string)
                    .ok_or_else(|| Error::InvalidBinary(format!("word index {} out of range", i)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(MnemonicPhrase { words, strength })
    }

    /// Generate a new random mnemonic phrase with the specified strength
    pub fn generate(&self, strength: MnemonicStrength) -> Result<MnemonicPhrase> {
        let mut entropy = vec![0u8; strength.entropy_bytes()];
        OsRng.fill_bytes(&mut entropy);

        debug!("Generating {}-word mnemonic from OS entropy", strength.word_count());
        self.entropy_to_mnemonic(&entropy)
    }

    /// Resolve any mnemonic form to its canonical text.
    ///
    /// Every form yields NFKD words joined with single spaces: text is
    /// normalized on parsing and table entries are stored normalized.
    pub fn canonical_text<'a>(&self, mnemonic: impl Into<MnemonicInput<'a>>) -> Result<String> {
        match mnemonic.into() {
            MnemonicInput::Text(text) => Ok(MnemonicPhrase::parse(text)?.phrase()),
            MnemonicInput::Phrase(phrase) => Ok(phrase.phrase()),
            MnemonicInput::Binary(binary) => Ok(self.binary_to_phrase(binary)?.phrase()),
        }
    }

    fn indices(&self, mnemonic: MnemonicInput<'_>) -> Result<Vec<u16>> {
        match mnemonic {
            MnemonicInput::Text(text) => self.indices(MnemonicInput::Phrase(&MnemonicPhrase::parse(text)?)),
            MnemonicInput::Phrase(phrase) => phrase
                .words
                .iter()
                .map(|w| self.wordlist.index_of(w))
                .collect(),
            MnemonicInput::Binary(binary) => Ok(binary.indices.clone()),
        }
    }
}

/// Unpack word indices and verify the embedded checksum
fn decode_indices(indices: &[u16]) -> Result<Vec<u8>> {
    let strength = MnemonicStrength::from_word_count(indices.len())?;
    let mut buffer = radix::from_indices(indices);

    let entropy_len = strength.entropy_bytes();
    let decoded_checksum = buffer.get(entropy_len).copied().ok_or(Error::ChecksumMismatch)?;
    buffer.truncate(entropy_len);

    if checksum(&buffer)? != decoded_checksum {
        return Err(Error::ChecksumMismatch);
    }

    Ok(buffer)
}
