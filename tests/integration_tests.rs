//! Integration tests for the lexer pipeline and the `jlex` binary.
//!
//! These tests run complete source files through normalization, comment
//! stripping and tokenization, and drive the command-line tool end to end.

use std::{io::Write, path::PathBuf};

use assert_cmd::Command;
use jlex::{load_source, normalize, strip_comments, tokenize, tokenize_fragment, Token, TokenKind};
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_tokenize_fixture() {
    let source = load_source(&fixture("Main.java")).unwrap();
    let tokens = tokenize(&source).unwrap();

    assert_eq!(
        &tokens[..4],
        &[
            Token::new(TokenKind::Package, "package"),
            Token::new(TokenKind::Identifier, "demo"),
            Token::new(TokenKind::Sign, ";"),
            Token::new(TokenKind::Import, "import"),
        ]
    );
    assert!(tokens.contains(&Token::new(TokenKind::Literal, "\"done // not a comment\"")));
    assert!(tokens.contains(&Token::new(TokenKind::Sign, "++")));
    assert!(tokens.contains(&Token::new(TokenKind::Sign, "+=")));
    assert!(tokens.contains(&Token::new(TokenKind::Return, "return")));
    assert_eq!(tokens.last(), Some(&Token::new(TokenKind::Sign, "}")));
}

#[test]
fn test_fixture_comments_removed() {
    let source = load_source(&fixture("Main.java")).unwrap();

    let normalized = normalize(&source);
    assert!(normalized.iter().any(|fragment| fragment == "// upper bound"));
    assert!(normalized.iter().any(|fragment| fragment == "/* running sum */"));

    let stripped = strip_comments(normalized).unwrap();
    for comment in ["Entry point", "upper bound", "running sum"] {
        assert!(stripped.iter().all(|fragment| !fragment.contains(comment)));
    }
    assert!(stripped
        .iter()
        .any(|fragment| fragment == "String message = \"done // not a comment\""));
}

#[test]
fn test_pipeline_equals_stages() {
    let source = load_source(&fixture("Main.java")).unwrap();

    let staged: Vec<Token> = strip_comments(normalize(&source))
        .unwrap()
        .iter()
        .flat_map(|fragment| tokenize_fragment(fragment).unwrap())
        .collect();

    assert_eq!(staged, tokenize(&source).unwrap());
}

#[test]
fn test_load_source_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "int a = 1;\na += 1;\n").unwrap();

    let source = load_source(file.path()).unwrap();
    let tokens = tokenize(&source).unwrap();

    assert_eq!(tokens.len(), 9);
    assert_eq!(tokens[0], Token::new(TokenKind::Int, "int"));
    assert_eq!(tokens[6], Token::new(TokenKind::Sign, "+="));
}

#[test]
fn test_load_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_source(&dir.path().join("Missing.java")).is_err());
}

#[test]
fn test_cli_prints_tokens() {
    Command::cargo_bin("jlex")
        .unwrap()
        .arg(fixture("Main.java"))
        .assert()
        .success()
        .stdout(predicate::str::contains("<24, 'public'>"))
        .stdout(predicate::str::contains("<47, 'Main'>"))
        .stdout(predicate::str::contains("< 0, '{'>"));
}

#[test]
fn test_cli_json_output() {
    Command::cargo_bin("jlex")
        .unwrap()
        .arg(fixture("Main.java"))
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"Package\""))
        .stdout(predicate::str::contains("\"lexeme\": \"package\""));
}

#[test]
fn test_cli_fragments_stage() {
    Command::cargo_bin("jlex")
        .unwrap()
        .arg(fixture("Main.java"))
        .args(["--stage", "fragments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("// upper bound"));

    Command::cargo_bin("jlex")
        .unwrap()
        .arg(fixture("Main.java"))
        .args(["--stage", "stripped"])
        .assert()
        .success()
        .stdout(predicate::str::contains("upper bound").not());
}

#[test]
fn test_cli_reports_lexer_error() {
    Command::cargo_bin("jlex")
        .unwrap()
        .arg(fixture("Broken.java"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("illegal sign: <>"))
        .stderr(predicate::str::contains("3 | a <> 2;"))
        .stderr(predicate::str::contains("failed to tokenize"));
}

#[test]
fn test_cli_missing_file() {
    Command::cargo_bin("jlex")
        .unwrap()
        .arg(fixture("DoesNotExist.java"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
