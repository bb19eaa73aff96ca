//! Structural parsing
//!
//! Assembles the scanner's token stream into a forest of nested
//! expressions with a dual-stack single pass.

mod ast;
mod forest;

pub use ast::Expression;
pub use forest::Parser;
