//! Porter Core — error types and stemmer configuration shared by the workspace.

pub mod config;
pub mod error;

pub use config::{InputPolicy, StemmerConfig, INPUT_POLICY_ENV};
pub use error::{Error, Result};
