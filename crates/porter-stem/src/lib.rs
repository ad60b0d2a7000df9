//! Porter Stem — the Porter suffix-stripping algorithm for English words.
//!
//! ```
//! assert_eq!(porter_stem::stem("meetings"), "meet");
//! assert_eq!(porter_stem::stem("relational"), "relat");
//! ```
//!
//! [`stem`] is a pure function of its input. [`PorterStemmer`] adds input
//! policy handling from [`porter_core::StemmerConfig`], and [`Stemmer`] loads
//! a word one character at a time.

mod buffer;
mod steps;
pub mod stemmer;

pub use stemmer::{split, PorterStemmer, StemSplit, Stemmer};

use buffer::WordBuffer;

/// Stem a single word.
///
/// Words of two characters or fewer (including the empty word) come back
/// unchanged. Vowels are `a e i o u`, plus `y` after a consonant; every other
/// character is treated as a consonant, so callers wanting lowercase folding
/// or validation should go through [`PorterStemmer`].
pub fn stem(word: &str) -> String {
    stem_chars(word.chars().collect())
}

pub(crate) fn stem_chars(chars: Vec<char>) -> String {
    let mut buffer = WordBuffer::new(chars);
    steps::run(&mut buffer);
    buffer.into_string()
}
