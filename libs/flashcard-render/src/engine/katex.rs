//! KaTeX math engine.
//!
//! Server-side KaTeX via the `katex` crate (embedded JS engine). Output is
//! the same markup the browser bundle would produce, so the existing KaTeX
//! stylesheet applies unchanged.

use super::MathEngine;
use crate::error::{MathError, Result};

/// Engine rendering LaTeX through KaTeX.
#[derive(Debug, Clone, Default)]
pub struct KatexEngine;

impl KatexEngine {
    pub fn new() -> Self {
        Self
    }
}

impl MathEngine for KatexEngine {
    fn name(&self) -> &'static str {
        "katex"
    }

    fn render(&self, source: &str, display_mode: bool) -> Result<String> {
        // Trust mode: formulas may use \htmlClass, \textcolor and friends;
        // the pipeline output is trusted markup by contract.
        let opts = katex::Opts::builder()
            .display_mode(display_mode)
            .trust(true)
            .build()
            .map_err(|e| MathError::Options {
                detail: e.to_string(),
            })?;

        katex::render_with_opts(source, &opts).map_err(|e| MathError::Render {
            detail: e.to_string(),
        })
    }
}
