//! Markdown transform wrapper.
//!
//! Card text uses GitHub-flavored Markdown, and a lone newline is a
//! visible line break (card authors write one line per fact, without
//! blank-line paragraph separators).

use comrak::{markdown_to_html, Options};

/// Convert Markdown to HTML.
///
/// Raw HTML in the input is passed through: the renderer's output is
/// trusted markup by contract, and sanitization is the caller's concern.
pub fn to_html(text: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.render.hardbreaks = true;
    options.render.r#unsafe = true;
    markdown_to_html(text, &options)
}
