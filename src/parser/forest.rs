use super::ast::Expression;
use crate::diagnostics;
use crate::error::{Error, Result};
use crate::lexer::{Scanner, Token};

/// Structural parser assembling tokens into a forest of expressions
///
/// Keeps two parallel stacks: one of in-progress list containers, seeded
/// with the top-level container, and one of the opening-delimiter tokens,
/// used only to report the position of an unclosed list. Stack depth
/// equals current nesting depth, so both structural error cases are
/// detected at the token where they occur.
pub struct Parser<'a> {
    /// Original source text, kept for diagnostics
    source: &'a str,
}

impl<'a> Parser<'a> {
    /// Creates a new parser over the given source text
    pub fn new(source: &'a str) -> Self {
        Parser { source }
    }

    /// Tokenizes the source and builds the expression forest
    ///
    /// Scanner failures propagate unchanged. Structural failures are
    /// [`Error::UnexpectedClosingDelimiter`] for a stray `)` and
    /// [`Error::UnmatchedOpenDelimiter`] when input ends with open lists.
    pub fn parse(&self) -> Result<Vec<Expression>> {
        let tokens = Scanner::new(self.source).scan_tokens()?;
        self.build(tokens)
    }

    /// Structural pass over an already scanned token sequence
    pub fn build(&self, tokens: Vec<Token>) -> Result<Vec<Expression>> {
        let mut stack: Vec<Vec<Expression>> = vec![Vec::new()];
        let mut open_delims: Vec<Token> = Vec::new();

        for token in tokens {
            if token.opens_list() {
                open_delims.push(token);
                stack.push(Vec::new());
            } else if token.closes_list() {
                match (stack.pop(), stack.last_mut()) {
                    (Some(completed), Some(parent)) => {
                        open_delims.pop();
                        parent.push(Expression::List(completed));
                    }
                    // Only the top-level container was left: nothing open.
                    _ => {
                        return Err(Error::UnexpectedClosingDelimiter {
                            line: token.line,
                            column: token.column,
                            diagnostic: diagnostics::render(
                                self.source,
                                Some(&token),
                                "unexpected closing delimiter",
                            ),
                        });
                    }
                }
            } else if let Some(top) = stack.last_mut() {
                top.push(Expression::Symbol(token.value));
            }
        }

        if let Some(unclosed) = open_delims.last() {
            return Err(Error::UnmatchedOpenDelimiter {
                line: unclosed.line,
                column: unclosed.column,
                diagnostic: diagnostics::render(
                    self.source,
                    Some(unclosed),
                    "needs a matching closing delimiter",
                ),
            });
        }

        let forest = stack.pop().unwrap_or_default();
        tracing::trace!(expressions = forest.len(), "parse complete");
        Ok(forest)
    }
}
