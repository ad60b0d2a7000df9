//! Stemmer configuration: input policy and its persistence.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Environment variable overriding the configured input policy.
pub const INPUT_POLICY_ENV: &str = "PORTER_INPUT_POLICY";

/// How a word is prepared before it reaches the algorithm.
///
/// The algorithm itself only knows the vowels `a e i o u` (and `y` by
/// position); every other character counts as a consonant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Stem the characters exactly as given.
    Verbatim,
    /// Lowercase the word first.
    #[default]
    Fold,
    /// Reject any word with a character outside `a..=z`.
    Strict,
}

impl FromStr for InputPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbatim" => Ok(Self::Verbatim),
            "fold" => Ok(Self::Fold),
            "strict" => Ok(Self::Strict),
            other => Err(Error::Config(format!(
                "unknown input policy '{}' (expected verbatim, fold or strict)",
                other
            ))),
        }
    }
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Verbatim => "verbatim",
            Self::Fold => "fold",
            Self::Strict => "strict",
        };
        f.write_str(name)
    }
}

/// Stemmer configuration (persisted as JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemmerConfig {
    #[serde(default)]
    pub input_policy: InputPolicy,
    /// Emit a warning for every word rejected under [`InputPolicy::Strict`].
    #[serde(default = "default_log_rejections")]
    pub log_rejections: bool,
}

fn default_log_rejections() -> bool {
    true
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            input_policy: InputPolicy::default(),
            log_rejections: default_log_rejections(),
        }
    }
}

impl StemmerConfig {
    /// Load config from file, falling back to defaults, then apply the
    /// `PORTER_INPUT_POLICY` override.
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = Self::load_file(config_path);
        config.apply_policy_override(std::env::var(INPUT_POLICY_ENV).ok().as_deref())?;
        Ok(config)
    }

    /// Load config from file alone, falling back to defaults.
    pub fn load_file(config_path: &Path) -> Self {
        std::fs::read_to_string(config_path)
            .ok()
            .and_then(|s| match serde_json::from_str(&s) {
                Ok(c) => Some(c),
                Err(e) => {
                    debug!("Ignoring unreadable config {}: {}", config_path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Override the input policy from a textual value, if one is given.
    pub fn apply_policy_override(&mut self, value: Option<&str>) -> Result<()> {
        if let Some(raw) = value {
            self.input_policy = raw.parse()?;
            debug!("Input policy overridden to {}", self.input_policy);
        }
        Ok(())
    }

    /// Save config to disk.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, json)?;
        info!("Saved stemmer config to {}", config_path.display());
        Ok(())
    }
}
