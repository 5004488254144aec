//! Math engine implementations.

#[cfg(feature = "katex")]
pub mod katex;
pub mod mathml;

use crate::error::Result;

/// Trait for math-notation-to-HTML engines.
pub trait MathEngine: Send + Sync {
    /// Engine identifier.
    fn name(&self) -> &'static str;

    /// Render one formula. `display_mode` selects standalone block layout
    /// over inline layout.
    ///
    /// Malformed notation must come back as `Err`, never a panic; the
    /// pipeline turns the error into a visible fragment.
    fn render(&self, source: &str, display_mode: bool) -> Result<String>;
}

/// Get engine by name.
pub fn get_engine(name: &str) -> Option<Box<dyn MathEngine>> {
    match name {
        #[cfg(feature = "katex")]
        "katex" => Some(Box::new(katex::KatexEngine::default())),
        "mathml" => Some(Box::new(mathml::MathMlEngine::default())),
        _ => None,
    }
}

/// The engine used by [`crate::render`].
pub fn default_engine() -> Box<dyn MathEngine> {
    #[cfg(feature = "katex")]
    {
        Box::new(katex::KatexEngine::default())
    }
    #[cfg(not(feature = "katex"))]
    {
        Box::new(mathml::MathMlEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert!(get_engine("mathml").is_some());
        assert!(get_engine("nope").is_none());
    }

    #[cfg(feature = "katex")]
    #[test]
    fn katex_is_the_default() {
        assert_eq!(default_engine().name(), "katex");
    }
}
