//! Property-based fuzzing tests for the asexp scanner and parser
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. The parser never panics on arbitrary input
//! 2. Rendered expression trees reparse to equal trees
//! 3. Comment bodies never leak into the output
//! 4. Every parsed list corresponds to a matched delimiter pair

use asexp::{parse, tokenize, Expression};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break the pipeline
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,300}").unwrap()
}

/// Generate tokens that look like document elements
fn sexp_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just(";".to_string()),
        Just("\"".to_string()),
        Just("\\".to_string()),
        // Symbols
        "[a-z][a-z0-9_-]{0,8}".prop_map(|s| s),
        // Strings
        r#""[a-zA-Z0-9 ]{0,12}""#.prop_map(|s| s),
        // Comments
        ";[^\n]{0,16}".prop_map(|s| s),
        Just("\n".to_string()),
    ]
}

/// Generate token-soup documents, balanced or not
fn sexp_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(sexp_token(), 0..40).prop_map(|tokens| tokens.join(" "))
}

/// Symbol text that survives a render/reparse cycle: no whitespace,
/// delimiters, quotes, or comment markers
fn symbol_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9_+*/<>=!?.-]{1,12}").unwrap()
}

/// String-literal text, quotes included, with a body that cannot escape
fn string_literal_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#""[a-zA-Z0-9 ]{0,12}""#).unwrap()
}

/// Generate arbitrary expression trees
fn expression() -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        symbol_text().prop_map(Expression::Symbol),
        string_literal_text().prop_map(Expression::Symbol),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Expression::List)
    })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn parse_never_panics_on_arbitrary_input(source in arbitrary_source_string()) {
        // Errors are fine; panics are not.
        let _ = parse(&source);
    }

    #[test]
    fn parse_never_panics_on_token_soup(source in sexp_like_string()) {
        let _ = parse(&source);
    }

    #[test]
    fn tokenize_positions_stay_in_bounds(source in sexp_like_string()) {
        if let Ok(tokens) = tokenize(&source) {
            let line_count = source.split('\n').count();
            for token in tokens {
                prop_assert!(token.line < line_count);
                prop_assert!(!token.value.is_empty());
            }
        }
    }

    #[test]
    fn rendered_forest_reparses_equal(forest in prop::collection::vec(expression(), 0..5)) {
        let rendered = forest
            .iter()
            .map(Expression::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let reparsed = parse(&rendered);
        prop_assert!(reparsed.is_ok(), "failed to reparse {rendered:?}");
        prop_assert_eq!(reparsed.unwrap(), forest);
    }

    #[test]
    fn comment_bodies_never_reach_output(body in "[^\n]{0,24}") {
        let source = format!("before ;{body}\nafter");
        let forest = parse(&source).unwrap();
        prop_assert_eq!(forest, vec![
            Expression::Symbol("before".to_string()),
            Expression::Symbol("after".to_string()),
        ]);
    }

    #[test]
    fn balanced_wrapping_preserves_depth(n in 0usize..24) {
        let source = format!("{}x{}", "(".repeat(n), ")".repeat(n));
        let forest = parse(&source).unwrap();
        prop_assert_eq!(forest.len(), 1);

        let mut depth = 0;
        let mut expr = &forest[0];
        while let Expression::List(items) = expr {
            prop_assert_eq!(items.len(), 1);
            expr = &items[0];
            depth += 1;
        }
        prop_assert_eq!(depth, n);
    }
}
