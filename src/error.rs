//! Error types for the asexp parser

use thiserror::Error;

/// Parse-time errors
///
/// Every variant carries the 0-indexed position the diagnostic points at
/// and the fully rendered pointer block (source line, caret, message)
/// produced by [`crate::diagnostics::render`]. The rendered block is the
/// `Display` output, so printing an error reproduces the annotated source
/// location verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string literal reached end of input without a terminating quote
    ///
    /// **Triggered by:** `"` opened and never closed by an unescaped `"`
    /// **Example:** `(greet "hello` (input ends inside the string)
    ///
    /// Points at the opening quote.
    #[error("{diagnostic}")]
    UnclosedString {
        /// Line of the opening quote (0-indexed)
        line: usize,
        /// Column of the opening quote (0-indexed)
        column: usize,
        /// Rendered pointer diagnostic
        diagnostic: String,
    },

    /// A closing delimiter appeared with no list open
    ///
    /// **Triggered by:** `)` at a point where every `(` is already matched
    /// **Example:** `(a b)) c`
    ///
    /// Points at the stray `)`.
    #[error("{diagnostic}")]
    UnexpectedClosingDelimiter {
        /// Line of the stray delimiter (0-indexed)
        line: usize,
        /// Column of the stray delimiter (0-indexed)
        column: usize,
        /// Rendered pointer diagnostic
        diagnostic: String,
    },

    /// Input ended with one or more lists still open
    ///
    /// **Triggered by:** a `(` that is never matched by a `)`
    /// **Example:** `(a (b c)`
    ///
    /// Points at the innermost unclosed `(`.
    #[error("{diagnostic}")]
    UnmatchedOpenDelimiter {
        /// Line of the unclosed delimiter (0-indexed)
        line: usize,
        /// Column of the unclosed delimiter (0-indexed)
        column: usize,
        /// Rendered pointer diagnostic
        diagnostic: String,
    },
}

impl Error {
    /// Line the diagnostic points at (0-indexed)
    pub fn line(&self) -> usize {
        match self {
            Error::UnclosedString { line, .. }
            | Error::UnexpectedClosingDelimiter { line, .. }
            | Error::UnmatchedOpenDelimiter { line, .. } => *line,
        }
    }

    /// Column the diagnostic points at (0-indexed)
    pub fn column(&self) -> usize {
        match self {
            Error::UnclosedString { column, .. }
            | Error::UnexpectedClosingDelimiter { column, .. }
            | Error::UnmatchedOpenDelimiter { column, .. } => *column,
        }
    }

    /// Position the diagnostic points at as `(line, column)` (0-indexed)
    pub fn position(&self) -> (usize, usize) {
        (self.line(), self.column())
    }
}

/// Result type for asexp operations
pub type Result<T> = std::result::Result<T, Error>;
