//! The extract → Markdown → restore pipeline.

use tracing::{debug, warn};

use crate::engine::{default_engine, MathEngine};
use crate::error::MathError;
use crate::extract;
use crate::markdown;
use crate::types::{MathKind, RenderOptions};

/// Render mixed Markdown + math card text to trusted HTML using the
/// default math engine.
///
/// Pure and synchronous; every call owns its own token table, so
/// concurrent renders never interact. Empty or whitespace-only input
/// yields an empty string.
pub fn render(text: &str, options: &RenderOptions) -> String {
    render_with_engine(text, options, default_engine().as_ref())
}

/// Render with an explicit math engine.
pub fn render_with_engine(
    text: &str,
    options: &RenderOptions,
    engine: &dyn MathEngine,
) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let extraction = extract::extract(text);
    debug!(spans = extraction.table.len(), "extracted math spans");

    let mut html = markdown::to_html(&extraction.text);

    for (token, span) in &extraction.table {
        let fragment = match engine.render(&span.source, span.kind == MathKind::Block) {
            Ok(rendered) => rendered,
            Err(err) => {
                warn!(engine = engine.name(), source = %span.source, %err, "math render failed");
                error_fragment(&span.source, &err)
            }
        };
        html = html.replace(token.as_str(), &fragment);
    }

    wrap(&html, options)
}

/// Visible stand-in for a formula that failed to typeset: the raw notation
/// (delimiters stripped) with the failure detail in the tooltip. Keeps the
/// rest of the card readable.
fn error_fragment(source: &str, err: &MathError) -> String {
    format!(
        r#"<span class="math-error" title="{}">{}</span>"#,
        escape_html(&err.to_string()).replace('"', "&quot;"),
        escape_html(source)
    )
}

/// Outer container, styled per the caller's display hint. Container-level
/// only: block vs inline classification of each formula is decided by its
/// delimiters during extraction.
fn wrap(html: &str, options: &RenderOptions) -> String {
    let modifier = if options.display_block {
        "block"
    } else {
        "inline"
    };
    format!(r#"<div class="card-markdown card-markdown--{modifier}">{html}</div>"#)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
