//! Integration tests for end-to-end tokenization.
//!
//! These tests go through the public API the way an embedding tool would:
//! tokenize, render, and validate, plus the `jsx-lexer` binary itself.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use jsx_lexer::{
    render::{to_json, to_listing, to_source},
    tokenize, tokenize_partial, tokenize_with, validate, Lexer, LexerConfig, Token, TokenKind,
};
use pretty_assertions::assert_eq;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jsx-lexer"))
}

#[test]
fn test_tokenize_then_render_json() {
    let tokens = tokenize(r#"<h1 id="title">Hello World</h1>"#).unwrap();
    let json = to_json(&tokens).unwrap();

    let parsed: Vec<Token> = serde_json::from_str(&json).unwrap();
    let kinds: Vec<TokenKind> = parsed.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::TagOpen,
            TokenKind::Identifier,
            TokenKind::AttributeName,
            TokenKind::AttributeStringValue,
            TokenKind::TagClose,
            TokenKind::Text,
            TokenKind::TagOpen,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::TagClose,
        ]
    );
    assert_eq!(parsed[5].value, "Hello World");
}

#[test]
fn test_listing_matches_streaming_lexer() {
    let source = r#"<ul><li key={a1}>one</li><li key={a2}>two</li></ul>"#;

    let collected = tokenize(source).unwrap();
    let streamed: Vec<Token> = Lexer::new(source).map(Result::unwrap).collect();

    assert_eq!(collected, streamed);
    assert_eq!(to_listing(&collected), to_listing(&streamed));
    assert_eq!(to_source(&collected), source);
}

#[test]
fn test_unclosed_text_depends_on_config() {
    let source = "<div>unclosed";

    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens.last().unwrap().value, "unclosed");

    let error = tokenize_with(source, &LexerConfig::strict()).unwrap_err();
    assert_eq!(error.get_error_name(), "TruncatedInput");
}

#[test]
fn test_partial_tokenization_reports_failure() {
    let (tokens, error) = tokenize_partial("<div><img/>", &LexerConfig::default());

    assert_eq!(tokens.len(), 4);
    assert_eq!(error.unwrap().get_position().offset(), 9);
}

#[test]
fn test_validate_error_cases() {
    assert!(!validate("invalid"));
    assert!(!validate("<div/>"));
    assert!(!validate("<div onClick={handleClick}>Click me</div>"));
    assert!(validate("<div onclick={handleclick}>Click me</div>"));
}

#[test]
fn test_cli_listing_output() {
    let output = cli()
        .args(["--format", "listing", "<b>x</b>"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "TOKENS_COUNT:8\n\
         TOKEN_0:TagOpen:<\n\
         TOKEN_1:Identifier:b\n\
         TOKEN_2:TagClose:>\n\
         TOKEN_3:Text:x\n\
         TOKEN_4:TagOpen:<\n\
         TOKEN_5:Slash:/\n\
         TOKEN_6:Identifier:b\n\
         TOKEN_7:TagClose:>\n"
    );
}

#[test]
fn test_cli_json_with_kind_filter() {
    let output = cli()
        .args(["--format", "json", "--only", "identifier", r#"<a href="x">y</a>"#])
        .output()
        .unwrap();

    assert!(output.status.success());
    let tokens: Vec<Token> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_cli_reads_stdin() {
    let mut child = cli()
        .args(["--check"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"<p>from stdin</p>")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "valid\n");
}

#[test]
fn test_cli_reports_error_position() {
    let output = cli().args(["<div/>"]).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("InvalidIdentifierChar"));
    assert!(stderr.contains("<argument>:1:5"));
    assert!(stderr.contains("1 | <div/>"));
}

#[test]
fn test_cli_strict_check() {
    let output = cli()
        .args(["--check", "--strict", "<p>x</p>tail"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "invalid\n");
}
