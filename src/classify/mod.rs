//! Staged language classification over capture evidence.
//!
//! The pipeline runs up to three stages in strict priority order: suffix
//! evidence from the source address/title, an explicit fenced-code-block
//! hint, and keyword heuristics over the body text. The first stage that
//! produces a match wins; anything else resolves to [`FALLBACK_LANGUAGE`].

/// Fenced-code-block language-hint extraction.
mod fence;
/// Static suffix and keyword rule tables.
pub mod rules;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::utf8_prefix;

/// Reserved fallback tag returned when no stage produces a match.
pub const FALLBACK_LANGUAGE: &str = "text";

/// Upper bound on how much body text the fence and keyword stages scan.
const SAMPLE_MAX_BYTES: usize = 64 * 1024;

/// Contextual inputs available to a single classification call.
///
/// All fields are optional; collaborators that only have partial context
/// (for example a popup field with no originating page) leave the rest
/// empty. Missing fields are normal inputs, never errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Evidence {
    /// Captured or in-progress body text.
    #[serde(default)]
    pub text: String,
    /// Address of the page the text was captured from.
    #[serde(default)]
    pub address: String,
    /// Title of the page the text was captured from.
    #[serde(default)]
    pub title: String,
}

impl Evidence {
    /// Evidence carrying only body text (the quick-mode shape).
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Evidence-stage subset enabled for a classification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Suffix, fence, and keyword stages; address/title are authoritative.
    Full,
    /// Fence and keyword stages only, for live pre-fill over partial text.
    Quick,
}

/// Error for unrecognized mode names at string boundaries (CLI, payloads).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mode {0:?} (expected \"full\" or \"quick\")")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Mode::Full),
            "quick" => Ok(Mode::Quick),
            _ => Err(ParseModeError(value.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Full => f.write_str("full"),
            Mode::Quick => f.write_str("quick"),
        }
    }
}

/// Infer the programming language of captured text.
///
/// Total over its input domain: always returns a non-empty lowercase tag,
/// falling back to [`FALLBACK_LANGUAGE`] when no rule matches. Safe to call
/// concurrently; the rule tables are read-only constants.
pub fn classify(evidence: &Evidence, mode: Mode) -> String {
    if mode == Mode::Full {
        if let Some(language) = rules::match_suffix(&evidence.address, &evidence.title) {
            tracing::debug!("suffix evidence matched: {}", language);
            return language.to_string();
        }
    }

    body_language(&evidence.text).unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Pre-fill hint for an in-progress text field.
///
/// # Returns
/// `Some(tag)` when a non-fallback language was inferred from the text
/// alone, otherwise `None` so callers never overwrite an explicit user
/// choice with the fallback.
pub fn classify_quick_hint(text: &str) -> Option<String> {
    body_language(text)
}

/// Fence and keyword stages shared by both modes.
fn body_language(text: &str) -> Option<String> {
    let sample = utf8_prefix(text, SAMPLE_MAX_BYTES);

    if let Some(language) = fence::fence_language(sample) {
        tracing::debug!("fence hint matched: {}", language);
        return Some(language);
    }

    if let Some(language) = rules::match_keywords(sample) {
        tracing::debug!("keyword rule matched: {}", language);
        return Some(language.to_string());
    }

    None
}
