//! Error types for flashcard-render.

use thiserror::Error;

/// Result type alias using MathError.
pub type Result<T> = std::result::Result<T, MathError>;

/// Errors produced by a math engine.
///
/// Both variants are recovered per span during restoration: a failed
/// formula becomes a visible error fragment, never an aborted render.
#[derive(Debug, Error)]
pub enum MathError {
    #[error("invalid engine options: {detail}")]
    Options { detail: String },

    #[error("math render failed: {detail}")]
    Render { detail: String },
}
