//! Property tests for the render module: arbitrary answers and source lists
//! must always produce output, never panic.

#![cfg(test)]

use std::collections::HashSet;

use proptest::prelude::*;

use super::formatter::{format_response, parse_blocks};
use super::sources::process_sources;

/// Answer-like text: words, markdown markers, list prefixes and newlines.
fn answer_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Z0-9]{1,20}",
        Just("**".to_string()),
        Just("### ".to_string()),
        Just("## ".to_string()),
        (1u32..20).prop_map(|n| format!("{}. ", n)),
        Just("\n".to_string()),
        Just("\n\n".to_string()),
        Just(" ".to_string()),
        Just("https://example.com/x".to_string()),
    ];
    prop::collection::vec(piece, 0..30).prop_map(|pieces| pieces.concat())
}

/// Source-like strings, including redirect wrappers and junk.
fn source_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,10}".prop_map(|host| format!("https://www.{}.com/page", host)),
        "[a-z]{1,10}".prop_map(|host| format!(
            "//duckduckgo.com/l/?uddg=https%3A%2F%2F{}.org%2Fdoc&rut=abc",
            host
        )),
        "[ -~]{0,40}",
        Just(String::new()),
    ]
}

#[test]
fn formatter_is_total() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&answer_strategy(), |answer| {
            let html = format_response(&answer);
            if answer.trim().is_empty() {
                prop_assert!(html.is_empty());
            } else {
                prop_assert!(!html.is_empty());
            }
            // Blank lines never become blocks.
            let non_blank = answer.split('\n').filter(|l| !l.trim().is_empty()).count();
            prop_assert_eq!(parse_blocks(&answer).len(), non_blank);
            Ok(())
        })
        .unwrap();
}

#[test]
fn sources_are_unique_indexed_and_http() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let strategy = prop::collection::vec(source_strategy(), 0..10);

    runner
        .run(&strategy, |sources| {
            let out = process_sources(&sources);

            let unique: HashSet<&String> = sources.iter().collect();
            prop_assert_eq!(out.len(), unique.len());

            for (position, desc) in out.iter().enumerate() {
                prop_assert_eq!(desc.index, position + 1);
                prop_assert_eq!(desc.overflow, desc.index > 3);
                prop_assert!(desc.url.starts_with("http"));
                prop_assert!(!desc.label.is_empty());
            }
            Ok(())
        })
        .unwrap();
}
