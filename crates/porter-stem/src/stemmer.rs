//! Caller-facing stemmers built on the pure [`crate::stem`] function.

use std::borrow::Cow;

use porter_core::{Error, InputPolicy, Result, StemmerConfig};
use serde::Serialize;
use tracing::{debug, warn};

/// Stems words after preparing them according to an [`InputPolicy`].
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer {
    config: StemmerConfig,
}

impl PorterStemmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StemmerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StemmerConfig {
        &self.config
    }

    /// Stem one word, applying the configured input policy first.
    pub fn try_stem(&self, word: &str) -> Result<String> {
        let prepared = self.prepare(word)?;
        Ok(crate::stem(&prepared))
    }

    /// Stem every token in order. The first rejected token aborts the batch.
    pub fn stem_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<String>> {
        let stems = tokens
            .iter()
            .map(|t| self.try_stem(t.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        debug!("Stemmed {} tokens", stems.len());
        Ok(stems)
    }

    /// Like [`split`], on the word as prepared by the input policy.
    pub fn try_split(&self, word: &str) -> Result<StemSplit> {
        let prepared = self.prepare(word)?;
        Ok(split(&prepared))
    }

    fn prepare<'a>(&self, word: &'a str) -> Result<Cow<'a, str>> {
        match self.config.input_policy {
            InputPolicy::Verbatim => Ok(Cow::Borrowed(word)),
            InputPolicy::Fold => {
                if word.chars().any(char::is_uppercase) {
                    Ok(Cow::Owned(word.to_lowercase()))
                } else {
                    Ok(Cow::Borrowed(word))
                }
            }
            InputPolicy::Strict => match word.char_indices().find(|(_, c)| !c.is_ascii_lowercase()) {
                None => Ok(Cow::Borrowed(word)),
                Some((pos, ch)) => {
                    if self.config.log_rejections {
                        warn!("Rejecting {:?}: {:?} at byte {}", word, ch, pos);
                    }
                    Err(Error::InvalidWord {
                        word: word.to_string(),
                        reason: format!("{:?} at byte {} is not a lowercase ASCII letter", ch, pos),
                    })
                }
            },
        }
    }
}

/// Loads a word one character at a time, then stems it.
///
/// Every call to [`Stemmer::stem`] consumes the loaded characters, so the
/// same instance can be reused for the next word.
#[derive(Debug, Clone, Default)]
pub struct Stemmer {
    chars: Vec<char>,
}

impl Stemmer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character to the word being stemmed.
    pub fn add(&mut self, ch: char) {
        self.chars.push(ch);
    }

    pub fn extend<I: IntoIterator<Item = char>>(&mut self, chars: I) {
        self.chars.extend(chars);
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Stem the loaded word and reset.
    pub fn stem(&mut self) -> String {
        crate::stem_chars(std::mem::take(&mut self.chars))
    }
}

/// A stem together with what was cut from the input word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemSplit {
    pub word: String,
    pub stem: String,
    /// Byte length of the prefix shared by `word` and `stem`.
    pub prefix_len: usize,
    /// `word` after the shared prefix. Together with the prefix it rebuilds
    /// the input exactly.
    pub suffix: String,
}

/// Stem `word` and report the shared prefix and the removed suffix.
pub fn split(word: &str) -> StemSplit {
    let stem = crate::stem(word);
    let prefix_len = common_prefix_len(word, &stem);
    StemSplit {
        word: word.to_string(),
        suffix: word[prefix_len..].to_string(),
        stem,
        prefix_len,
    }
}

/// Return the *byte* length of the common prefix between two strings
fn common_prefix_len(aa: &str, bb: &str) -> usize {
    aa.chars()
        .zip(bb.chars())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len_utf8())
        .sum()
}
