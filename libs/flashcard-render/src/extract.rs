//! Math span extraction.
//!
//! Lifts math notation out of raw card text before Markdown parsing, so
//! the Markdown transform never sees characters like `_`, `*` or `\` that
//! belong to a formula. Each span is replaced by a placeholder token and
//! recorded in a token table; restoration happens after Markdown parsing.
//!
//! Four delimiter syntaxes are recognized, in precedence order:
//!
//! 1. `$$ .. $$` (block)
//! 2. `\[ .. \]` (block)
//! 3. `\( .. \)` (inline)
//! 4. `$ .. $` (inline)
//!
//! `$$` must run before single `$`, otherwise a display formula would be
//! split into two bogus inline matches. Each pass only sees the text left
//! over by the previous passes. Unterminated delimiters never match and
//! fall through to Markdown as literal text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::types::{MathKind, MathSpan};

static BLOCK_DOLLAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$").unwrap());
static BLOCK_BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\\\[(.*?)\\\]").unwrap());
static INLINE_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\\\((.*?)\\\)").unwrap());
static INLINE_DOLLAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\$(.*?)\$").unwrap());

/// Result of the extraction pass: the working text with tokens substituted
/// for math spans, and the table mapping each token to its span.
///
/// The table lives for a single render call and is consumed during
/// restoration.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub text: String,
    pub table: Vec<(String, MathSpan)>,
}

/// Extract all math spans from `text`, replacing each with a placeholder
/// token.
///
/// Tokens are plain alphanumeric runs, so Markdown passes them through as
/// text content untouched. The token counter is local to this call.
pub fn extract(text: &str) -> Extraction {
    let stem = token_stem(text);
    let mut counter = 0usize;
    let mut table = Vec::new();

    let text = run_pass(text, &BLOCK_DOLLAR, MathKind::Block, &stem, &mut counter, &mut table);
    let text = run_pass(&text, &BLOCK_BRACKET, MathKind::Block, &stem, &mut counter, &mut table);
    let text = run_pass(&text, &INLINE_PAREN, MathKind::Inline, &stem, &mut counter, &mut table);
    let text = run_pass(&text, &INLINE_DOLLAR, MathKind::Inline, &stem, &mut counter, &mut table);

    Extraction { text, table }
}

/// Choose a token stem that does not occur anywhere in the input.
///
/// Every token contains the stem, so no token can collide with user
/// content. Uppercase alphanumerics only: nothing Markdown treats as
/// syntax, and no character that could be split across emphasis or
/// heading markers.
fn token_stem(text: &str) -> String {
    let mut stem = String::from("FCMATH");
    while text.contains(&stem) {
        stem.push('Q');
    }
    stem
}

fn run_pass(
    text: &str,
    re: &Regex,
    kind: MathKind,
    stem: &str,
    counter: &mut usize,
    table: &mut Vec<(String, MathSpan)>,
) -> String {
    re.replace_all(text, |caps: &Captures<'_>| {
        // Trailing X terminates the number, so FCMATH1X is never a
        // substring of FCMATH10X.
        let token = format!("{stem}{counter}X");
        *counter += 1;
        table.push((
            token.clone(),
            MathSpan {
                kind,
                source: caps[1].to_string(),
            },
        ));
        token
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spans(extraction: &Extraction) -> Vec<(MathKind, &str)> {
        extraction
            .table
            .iter()
            .map(|(_, span)| (span.kind, span.source.as_str()))
            .collect()
    }

    #[test]
    fn extract_block_dollar() {
        let extraction = extract("before $$x^2$$ after");
        assert_eq!(spans(&extraction), vec![(MathKind::Block, "x^2")]);
        assert!(!extraction.text.contains('$'));
        assert!(extraction.text.starts_with("before "));
        assert!(extraction.text.ends_with(" after"));
    }

    #[test]
    fn extract_all_four_syntaxes() {
        let extraction = extract(r"$$a$$ \[b\] \(c\) $d$");
        assert_eq!(
            spans(&extraction),
            vec![
                (MathKind::Block, "a"),
                (MathKind::Block, "b"),
                (MathKind::Inline, "c"),
                (MathKind::Inline, "d"),
            ]
        );
    }

    #[test]
    fn double_dollar_wins_over_single() {
        let extraction = extract("$$x^2$$ and $y$");
        assert_eq!(
            spans(&extraction),
            vec![(MathKind::Block, "x^2"), (MathKind::Inline, "y")]
        );
    }

    #[test]
    fn adjacent_inline_spans_stay_inline() {
        // No contiguous $$ pair exists here, so the block rule never fires.
        let extraction = extract("$a$$b$");
        assert_eq!(
            spans(&extraction),
            vec![(MathKind::Inline, "a"), (MathKind::Inline, "b")]
        );
    }

    #[test]
    fn unterminated_dollar_passes_through() {
        let extraction = extract("cost is $5 today");
        assert!(extraction.table.is_empty());
        assert_eq!(extraction.text, "cost is $5 today");
    }

    #[test]
    fn empty_content_is_a_valid_span() {
        let extraction = extract("$$$$");
        assert_eq!(spans(&extraction), vec![(MathKind::Block, "")]);

        let extraction = extract("$ $");
        assert_eq!(spans(&extraction), vec![(MathKind::Inline, " ")]);
    }

    #[test]
    fn block_span_may_contain_newlines() {
        let extraction = extract("$$\na + b\n= c\n$$");
        assert_eq!(spans(&extraction), vec![(MathKind::Block, "\na + b\n= c\n")]);
    }

    #[test]
    fn tokens_are_unique_and_sequenced() {
        let extraction = extract("$a$ $b$ $c$");
        let tokens: Vec<&str> = extraction.table.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tokens, vec!["FCMATH0X", "FCMATH1X", "FCMATH2X"]);
        // Replacement order in the working text matches extraction order.
        let first = extraction.text.find(tokens[0]).unwrap();
        let second = extraction.text.find(tokens[1]).unwrap();
        assert!(first < second);
    }

    #[test]
    fn stem_avoids_colliding_input() {
        let extraction = extract("FCMATH0X and $x$");
        let (token, _) = &extraction.table[0];
        assert!(token.starts_with("FCMATHQ"));
        assert!(!"FCMATH0X and ".contains(token.as_str()));
    }

    #[test]
    fn tokens_contain_no_markdown_metacharacters() {
        let extraction = extract("$x_1 * x_2$");
        let (token, _) = &extraction.table[0];
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
