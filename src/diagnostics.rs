//! Pointer-style diagnostic rendering
//!
//! Given the original source text and a token position, renders the block
//! every parse error embeds: the offending source line behind a numbered
//! gutter, a caret under the offending column, and the message attached to
//! the caret.

use crate::lexer::Token;

/// Renders a pointer diagnostic for `token` inside `source`.
///
/// Without a token there is no position to point at and `message` is
/// returned verbatim. With a token the output is:
///
/// ```text
///
///
///  4 | (define x
///    |         ^
///    |         '- needs a matching closing delimiter
/// ```
///
/// The gutter is sized to the decimal width of the 1-indexed line number
/// and repeated as blank padding on the pointer lines so they align under
/// the source line.
pub fn render(source: &str, token: Option<&Token>, message: &str) -> String {
    let Some(token) = token else {
        return message.to_string();
    };

    // A line index past the end of the text points at an empty line.
    let line = source.split('\n').nth(token.line).unwrap_or("");

    let number = (token.line + 1).to_string();
    let pad = " ".repeat(number.len());
    let indent = " ".repeat(token.column);

    format!(
        "\n\n {number} | {line}\n {pad} | {indent}^\n {pad} | {indent}'- {message}\n"
    )
}
