//! Core types for the mixed-text renderer.

use serde::{Deserialize, Serialize};

/// How a math span is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MathKind {
    /// Standalone centered formula (`$$..$$` or `\[..\]`).
    Block,
    /// Formula flowing within surrounding text (`$..$` or `\(..\)`).
    Inline,
}

/// A math span lifted out of the raw text during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathSpan {
    pub kind: MathKind,
    /// Raw notation between the delimiters, delimiters excluded.
    pub source: String,
}

/// Caller-facing render options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Style the enclosing container as a standalone block rather than
    /// inline content. This is outer styling only; it never changes which
    /// delimiter syntax maps to which math display mode.
    pub display_block: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            display_block: false,
        }
    }
}

impl RenderOptions {
    /// Options for a card face rendered as a standalone block.
    pub fn block() -> Self {
        Self {
            display_block: true,
        }
    }

    /// Options for text rendered inline (e.g. a one-line hint).
    pub fn inline() -> Self {
        Self {
            display_block: false,
        }
    }
}
