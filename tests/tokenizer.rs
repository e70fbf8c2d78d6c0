// tests/tokenizer.rs

use bootrun::args::tokenize;
use bootrun::errors::BootrunError;

#[test]
fn splits_on_whitespace_and_strips_quotes() {
    let tokens = tokenize(r#"-Xmx512m -Dfoo="bar baz" 'single quoted'"#).unwrap();
    assert_eq!(tokens, vec!["-Xmx512m", "-Dfoo=bar baz", "single quoted"]);
}

#[test]
fn blank_input_yields_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   \n\t ").unwrap().is_empty());
}

#[test]
fn newlines_and_tabs_separate_tokens() {
    let tokens = tokenize("-Xms128m\n-Xmx1g\t-verbose").unwrap();
    assert_eq!(tokens, vec!["-Xms128m", "-Xmx1g", "-verbose"]);
}

#[test]
fn runs_of_whitespace_do_not_produce_empty_tokens() {
    let tokens = tokenize("  a    b  ").unwrap();
    assert_eq!(tokens, vec!["a", "b"]);
}

#[test]
fn empty_quoted_string_is_an_empty_token() {
    let tokens = tokenize(r#"a "" b"#).unwrap();
    assert_eq!(tokens, vec!["a", "", "b"]);
}

#[test]
fn quotes_of_the_other_kind_are_literal() {
    let tokens = tokenize(r#""it's" 'say "hi"'"#).unwrap();
    assert_eq!(tokens, vec!["it's", r#"say "hi""#]);
}

#[test]
fn quoted_and_unquoted_parts_join() {
    let tokens = tokenize(r#"--name="John Doe"suffix"#).unwrap();
    assert_eq!(tokens, vec!["--name=John Doesuffix"]);
}

#[test]
fn unbalanced_quote_is_a_parse_error() {
    match tokenize(r#"-Dfoo="unterminated value"#) {
        Err(BootrunError::ParseError { input, reason }) => {
            assert!(input.contains("unterminated"));
            assert!(reason.contains("unbalanced"));
        }
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn unbalanced_single_quote_is_a_parse_error() {
    assert!(matches!(
        tokenize("'open"),
        Err(BootrunError::ParseError { .. })
    ));
}

#[test]
fn backslashes_are_kept_literally() {
    let tokens = tokenize(r#"-Dpath=C:\tmp\app "a\b" 'c\'"#).unwrap();
    assert_eq!(tokens, vec![r"-Dpath=C:\tmp\app", r"a\b", r"c\"]);
}

#[test]
fn backslash_does_not_escape_a_quote() {
    // The second quote closes the section; the trailing one is unbalanced.
    let err = tokenize(r#""a\" b""#).unwrap_err();
    assert!(matches!(err, BootrunError::ParseError { .. }), "{err:?}");
}
