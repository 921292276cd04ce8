// Fixture tests: Markdown input and the plain text it renders to.
//
// Each fixture directory contains:
//   index.md    Markdown input
//   index.txt   expected text of the rendered runs
//   index.json  optional, `{"theme": "<preset>"}`
//
// These tests run the full pipeline: Markdown string → AST → StyledText.

mod common;

use pretty_assertions::assert_eq;

fn fixture_test(name: &str) {
    let f = common::load_fixture(name);
    let result = styled_markdown::render_markdown(&f.markdown, &f.theme);
    assert_eq!(result.as_string(), f.expected_text, "fixture: {}", name);
}

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

#[test]
fn fixture_paragraphs() { fixture_test("paragraphs"); }

#[test]
fn fixture_heading() { fixture_test("heading"); }

#[test]
fn fixture_code_block() { fixture_test("code-block"); }

#[test]
fn fixture_soft_break() { fixture_test("soft-break"); }

#[test]
fn fixture_block_quote() { fixture_test("block-quote"); }

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[test]
fn fixture_unordered_list() { fixture_test("unordered-list"); }

#[test]
fn fixture_ordered_list() { fixture_test("ordered-list"); }

#[test]
fn fixture_nested_list() { fixture_test("nested-list"); }

#[test]
fn fixture_loose_list() { fixture_test("loose-list"); }

#[test]
fn fixture_test_theme_bullets() { fixture_test("test-theme-bullets"); }
