use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed symbolic expression
///
/// A document parses to a forest of these: atoms stay atoms, and every
/// matched pair of parentheses becomes one `List` holding its contents in
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// A bare symbol or string literal
    ///
    /// String literals keep their surrounding quote characters verbatim;
    /// no unescaping or interpretation happens at this layer.
    Symbol(String),
    /// The expressions between a matched `(` and `)`
    List(Vec<Expression>),
}

impl Expression {
    /// True if this expression is an atom
    pub fn is_symbol(&self) -> bool {
        matches!(self, Expression::Symbol(_))
    }

    /// True if this expression is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Expression::List(_))
    }

    /// The symbol text, if this expression is an atom
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Expression::Symbol(text) => Some(text),
            Expression::List(_) => None,
        }
    }

    /// The list items, if this expression is a list
    pub fn as_list(&self) -> Option<&[Expression]> {
        match self {
            Expression::Symbol(_) => None,
            Expression::List(items) => Some(items),
        }
    }
}

/// Renders the expression back to text with single-space separators.
/// Parsing the rendered text reproduces an equal tree.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Symbol(text) => write!(f, "{text}"),
            Expression::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}
