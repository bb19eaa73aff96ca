use super::token::Token;
use crate::diagnostics;
use crate::error::{Error, Result};

/// Scanner state
///
/// The machine starts in `Normal` and must end in `Normal` or `Comment`;
/// ending in `Str` means an unterminated string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between tokens or inside a bare symbol
    Normal,
    /// After `;`, discarding input up to the next newline
    Comment,
    /// Inside a double-quoted string literal
    Str,
}

/// Scanner for nested symbolic expressions
///
/// Walks the source one character at a time, maintaining an explicit
/// three-state machine and a running 0-indexed line/column position.
/// Symbols accumulate in a pending slot and are flushed on whitespace,
/// delimiters, comments, or end of input; delimiters are emitted
/// immediately as single-character tokens; string literals keep their
/// surrounding quotes verbatim.
pub struct Scanner<'a> {
    /// Original source text, kept for diagnostics
    source: &'a str,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Token currently being accumulated, if any
    pending: Option<Token>,
    /// Machine state
    state: State,
    /// Previously consumed character
    prev: Option<char>,
    /// Current line (0-indexed)
    line: usize,
    /// Current column (0-indexed)
    column: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner over the given source text
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            tokens: Vec::new(),
            pending: None,
            state: State::Normal,
            prev: None,
            line: 0,
            column: 0,
        }
    }

    /// Scans the entire source and returns the token sequence
    ///
    /// Fails with [`Error::UnclosedString`] when input ends inside a
    /// string literal; the diagnostic points at the opening quote.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>> {
        for c in self.source.chars() {
            match self.state {
                State::Normal => self.normal(c),
                State::Comment => self.comment(c),
                State::Str => self.string(c),
            }

            // Position advances after the character is handled, so a token
            // opened on this character records the character's own position.
            self.advance_position(c);
            self.prev = Some(c);
        }

        self.finish()
    }

    fn normal(&mut self, c: char) {
        match c {
            ';' => {
                self.flush();
                self.state = State::Comment;
            }
            c if c.is_whitespace() => self.flush(),
            '(' | ')' => {
                self.flush();
                let mut token = Token::new(self.line, self.column);
                token.value.push(c);
                self.tokens.push(token);
            }
            '"' => {
                self.flush();
                let mut token = Token::new(self.line, self.column);
                token.value.push(c);
                self.pending = Some(token);
                self.state = State::Str;
            }
            _ => {
                let token = self
                    .pending
                    .get_or_insert_with(|| Token::new(self.line, self.column));
                token.value.push(c);
            }
        }
    }

    fn comment(&mut self, c: char) {
        if c == '\n' {
            self.state = State::Normal;
        }
    }

    fn string(&mut self, c: char) {
        if let Some(token) = self.pending.as_mut() {
            token.value.push(c);
        }

        // Single-character lookback: a quote closes the string unless the
        // previously consumed character was a backslash, counted literally.
        if c == '"' && self.prev != Some('\\') {
            self.flush();
            self.state = State::Normal;
        }
    }

    /// Pushes the pending token, if any, to the output
    fn flush(&mut self) {
        if let Some(token) = self.pending.take() {
            self.tokens.push(token);
        }
    }

    fn advance_position(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    fn finish(mut self) -> Result<Vec<Token>> {
        if let Some(token) = self.pending.take() {
            if self.state == State::Str {
                return Err(Error::UnclosedString {
                    line: token.line,
                    column: token.column,
                    diagnostic: diagnostics::render(self.source, Some(&token), "unclosed string"),
                });
            }

            // Trailing symbol with no delimiter or whitespace after it.
            self.tokens.push(token);
        }

        tracing::trace!(tokens = self.tokens.len(), "scan complete");
        Ok(self.tokens)
    }
}
