//! Language classification core for SnipVault capture surfaces.

/// Staged language classifier over capture evidence.
pub mod classify;
/// Shared text helpers.
pub mod text;

pub use classify::{
    classify, classify_quick_hint, Evidence, Mode, ParseModeError, FALLBACK_LANGUAGE,
};
