//! Mixed Markdown + math renderer for flashcard text.
//!
//! Card questions and answers mix Markdown formatting with LaTeX math
//! notation. The two grammars cannot be fed to a single parser: a Markdown
//! parser will mangle `x_1 * x_2` inside a formula, and a math renderer
//! knows nothing about `**bold**`. This crate composes the two transforms
//! safely:
//!
//! 1. Extract math spans (`$$..$$`, `\[..\]`, `\(..\)`, `$..$`) into a
//!    token table, leaving collision-proof placeholder tokens behind.
//! 2. Run the residual text through the Markdown transform (GFM extensions,
//!    hard line breaks).
//! 3. Replace each token in the resulting HTML with the rendered math, or
//!    with a visible error fragment when a formula does not typeset.
//!
//! The output is trusted HTML; callers are responsible for inserting it
//! into a context that accepts trusted markup.

pub mod engine;
pub mod error;
pub mod extract;
pub mod markdown;
pub mod render;
pub mod types;

#[cfg(feature = "katex")]
pub use engine::katex::KatexEngine;
pub use engine::{default_engine, get_engine, mathml::MathMlEngine, MathEngine};
pub use error::{MathError, Result};
pub use extract::{extract, Extraction};
pub use render::{render, render_with_engine};
pub use types::{MathKind, MathSpan, RenderOptions};
