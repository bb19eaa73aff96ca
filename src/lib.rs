//! # asexp - A Parser for Nested Symbolic Expressions
//!
//! Reads a text document of Lisp-style parenthesized expressions and
//! produces an in-memory tree: a two-stage pipeline of a character-level
//! scanner (a small three-state machine) and a stack-based structural
//! parser, sharing one pointer-style diagnostic renderer.
//!
//! ## Features
//!
//! - **Positioned tokens** - every token records the 0-indexed line and
//!   column of its first character
//! - **Forest output** - a document may hold any number of sibling
//!   top-level expressions
//! - **Pointer diagnostics** - failures render the offending source line
//!   with a caret under the exact column
//! - **No interpretation** - symbols stay raw text and string literals
//!   keep their quotes; nothing is evaluated or unescaped
//!
//! ## Quick Start
//!
//! ```rust
//! use asexp::{parse, Expression};
//!
//! # fn main() -> asexp::Result<()> {
//! let forest = parse("(greet \"hello world\") done")?;
//!
//! assert_eq!(forest.len(), 2);
//! assert_eq!(
//!     forest[0],
//!     Expression::List(vec![
//!         Expression::Symbol("greet".to_string()),
//!         Expression::Symbol("\"hello world\"".to_string()),
//!     ])
//! );
//! assert_eq!(forest[1], Expression::Symbol("done".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! Tokens can be inspected directly:
//!
//! ```rust
//! use asexp::tokenize;
//!
//! # fn main() -> asexp::Result<()> {
//! let tokens = tokenize("(a ; comment\n b)")?;
//!
//! let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
//! assert_eq!(values, ["(", "a", "b", ")"]);
//! assert_eq!((tokens[2].line, tokens[2].column), (1, 1));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Text -> Scanner -> Tokens -> Parser -> Vec<Expression>
//! ```
//!
//! - [`Scanner`] - walks characters and emits positioned tokens
//! - [`Parser`] - assembles tokens into nested lists with a dual stack
//! - [`diagnostics`] - renders the caret block embedded in every error
//!
//! Both stages are pure functions of their input: no state is shared
//! across calls, so independent inputs may be parsed concurrently without
//! coordination.
//!
//! ## Error Handling
//!
//! Three failure kinds, each pointing at a precise source position:
//!
//! ```rust
//! use asexp::{parse, Error};
//!
//! match parse("(a (b c") {
//!     Err(Error::UnmatchedOpenDelimiter { line, column, .. }) => {
//!         // Points at the innermost unclosed `(`.
//!         assert_eq!((line, column), (0, 3));
//!     }
//!     other => panic!("expected an unmatched delimiter, got {other:?}"),
//! }
//! ```
//!
//! Printing an error yields the rendered diagnostic:
//!
//! ```text
//!
//!  1 | (a (b c
//!    |    ^
//!    |    '- needs a matching closing delimiter
//! ```

/// Version of the asexp crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{Scanner, Token};
pub use parser::{Expression, Parser};

/// Tokenizes `source` into an ordered sequence of positioned tokens.
///
/// Fails with [`Error::UnclosedString`] when a string literal is left
/// unclosed at end of input.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).scan_tokens()
}

/// Parses `source` into a forest of expressions.
///
/// Tokenizes first; scanner failures propagate unchanged. Fails with
/// [`Error::UnexpectedClosingDelimiter`] on a stray `)` and
/// [`Error::UnmatchedOpenDelimiter`] when input ends with open lists.
pub fn parse(source: &str) -> Result<Vec<Expression>> {
    Parser::new(source).parse()
}
