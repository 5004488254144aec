//! MathML math engine.
//!
//! Pure-Rust LaTeX to MathML conversion via `latex2mathml`. No JS engine,
//! no stylesheet; rendering quality depends on the browser's MathML
//! support. Used as the default when the `katex` feature is off.

use latex2mathml::{latex_to_mathml, DisplayStyle};

use super::MathEngine;
use crate::error::{MathError, Result};

/// Engine converting LaTeX to MathML markup.
#[derive(Debug, Clone, Default)]
pub struct MathMlEngine;

impl MathMlEngine {
    pub fn new() -> Self {
        Self
    }
}

impl MathEngine for MathMlEngine {
    fn name(&self) -> &'static str {
        "mathml"
    }

    fn render(&self, source: &str, display_mode: bool) -> Result<String> {
        let style = if display_mode {
            DisplayStyle::Block
        } else {
            DisplayStyle::Inline
        };

        latex_to_mathml(source, style).map_err(|e| MathError::Render {
            detail: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_inline_formula() {
        let html = MathMlEngine::new().render("x^2", false).unwrap();
        assert!(html.contains("<math"));
    }

    #[test]
    fn block_mode_sets_display_attribute() {
        let html = MathMlEngine::new().render("x^2", true).unwrap();
        assert!(html.contains("block"));
    }
}
