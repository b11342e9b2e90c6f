//! Conversion between raw bytes and instruction words.
//!
//! A program file is nothing but its words, four bytes each, with no header,
//! magic number or length prefix.

use crate::Vec;

/// Size of one instruction word in bytes.
pub const WORD_SIZE: usize = 4;

/// Byte order of words in a program file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    #[default]
    Big,
    Little,
}

impl Endianness {
    fn read(self, bytes: [u8; WORD_SIZE]) -> i32 {
        match self {
            Endianness::Big => i32::from_be_bytes(bytes),
            Endianness::Little => i32::from_le_bytes(bytes),
        }
    }

    fn write(self, word: i32) -> [u8; WORD_SIZE] {
        match self {
            Endianness::Big => word.to_be_bytes(),
            Endianness::Little => word.to_le_bytes(),
        }
    }
}

/// Split `bytes` into words.
///
/// Trailing bytes that do not form a whole word are dropped; the machine never
/// sees them.
pub fn decode_words(bytes: &[u8], endianness: Endianness) -> Vec<i32> {
    let chunks = bytes.chunks_exact(WORD_SIZE);
    let trailing = chunks.remainder().len();
    if trailing != 0 {
        tracing::warn!(
            trailing,
            len = bytes.len(),
            "Program is not a whole number of words, ignoring trailing bytes"
        );
    }
    chunks
        .map(|chunk| {
            let mut word = [0; WORD_SIZE];
            word.copy_from_slice(chunk);
            endianness.read(word)
        })
        .collect()
}

/// Serialize `words` into bytes.
pub fn encode_words(words: &[i32], endianness: Endianness) -> Vec<u8> {
    words
        .iter()
        .flat_map(|&word| endianness.write(word))
        .collect()
}
