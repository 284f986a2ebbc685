//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and reals)
//! - String literals taken verbatim
//! - Operators and punctuation, including maximal munch
//! - Error cases

use crate::errors::errors::LexicalError;

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn lexemes(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.lexeme.as_str()).collect()
}

#[test]
fn test_tokenize_whitespace_only() {
    assert!(tokenize("", None).unwrap().is_empty());
    assert!(tokenize("   \t\n\r\n  ", None).unwrap().is_empty());
}

#[test]
fn test_tokenize_arithmetic() {
    let tokens = tokenize("10 + 20 * 30", Some("test.mc".to_string())).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::IntLiteral,
            TokenKind::ArithmeticOp,
            TokenKind::IntLiteral,
            TokenKind::ArithmeticOp,
            TokenKind::IntLiteral,
        ]
    );
    assert_eq!(lexemes(&tokens), vec!["10", "+", "20", "*", "30"]);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("int double string main if else while for do return", None).unwrap();

    assert_eq!(tokens.len(), 10);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Keyword));
    assert_eq!(tokens[4].lexeme, "if");
}

#[test]
fn test_keyword_requires_full_match() {
    let tokens = tokenize("if ifx x_if integer", None).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore CamelCase", None).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(
        lexemes(&tokens),
        vec!["foo", "baz_123", "_underscore", "CamelCase"]
    );
}

#[test]
fn test_identifier_at_end_of_input() {
    let tokens = tokenize("x", None).unwrap();

    assert_eq!(kinds(&tokens), vec![TokenKind::Identifier]);
    assert_eq!(tokens[0].lexeme, "x");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5 7.", None).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::IntLiteral,
            TokenKind::RealLiteral,
            TokenKind::IntLiteral,
            TokenKind::RealLiteral,
            TokenKind::RealLiteral,
        ]
    );
    assert_eq!(lexemes(&tokens), vec!["42", "3.14", "0", "100.5", "7."]);
}

#[test]
fn test_number_followed_by_identifier() {
    let tokens = tokenize("12ab", None).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::IntLiteral, TokenKind::Identifier]
    );
    assert_eq!(lexemes(&tokens), vec!["12", "ab"]);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#, None).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::StringLiteral));
    assert_eq!(lexemes(&tokens), vec!["hello", "multiple words", ""]);
}

#[test]
fn test_string_escapes_are_verbatim() {
    let tokens = tokenize(r#""tab\there""#, None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme, "tab\\there");
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("\"abc", None).unwrap_err();

    match error {
        LexicalError::UnterminatedString { start } => assert_eq!(start.0, 0),
        other => panic!("Expected UnterminatedString, got {:?}", other),
    }

    let error = tokenize("int s = \"open", None).unwrap_err();
    assert!(matches!(error, LexicalError::UnterminatedString { start } if start.0 == 8));
}

#[test]
fn test_increment_is_one_token() {
    let tokens = tokenize("i++", None).unwrap();

    assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Increment]);
    assert_eq!(tokens[1].lexeme, "++");

    let tokens = tokenize("--", None).unwrap();
    assert_eq!(kinds(&tokens), vec![TokenKind::Decrement]);
}

#[test]
fn test_single_arithmetic_operators() {
    let tokens = tokenize("+ - * / +-", None).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::ArithmeticOp));
    assert_eq!(lexemes(&tokens), vec!["+", "-", "*", "/", "+", "-"]);
}

#[test]
fn test_tokenize_relational_and_assignment() {
    let tokens = tokenize("< > <= >= == != =", None).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::RelationalOp,
            TokenKind::RelationalOp,
            TokenKind::RelationalOp,
            TokenKind::RelationalOp,
            TokenKind::RelationalOp,
            TokenKind::RelationalOp,
            TokenKind::AssignOp,
        ]
    );
    assert_eq!(lexemes(&tokens), vec!["<", ">", "<=", ">=", "==", "!=", "="]);
}

#[test]
fn test_tokenize_logical() {
    let tokens = tokenize("a && b || !c", None).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::LogicalOp,
            TokenKind::Identifier,
            TokenKind::LogicalOp,
            TokenKind::LogicalOp,
            TokenKind::Identifier,
        ]
    );
    assert_eq!(lexemes(&tokens), vec!["a", "&&", "b", "||", "!", "c"]);
}

#[test]
fn test_lone_ampersand_is_invalid() {
    let error = tokenize("a & b", None).unwrap_err();

    match error {
        LexicalError::InvalidOperator { lexeme, position } => {
            assert_eq!(lexeme, "&");
            assert_eq!(position.0, 2);
        }
        other => panic!("Expected InvalidOperator, got {:?}", other),
    }

    assert!(matches!(
        tokenize("|", None),
        Err(LexicalError::InvalidOperator { .. })
    ));
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("; ( ) { } [ ] , . : ?", None).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Semicolon,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Colon,
            TokenKind::Question,
        ]
    );
}

#[test]
fn test_invalid_character() {
    let error = tokenize("int x = @;", None).unwrap_err();

    assert_eq!(
        error,
        LexicalError::InvalidCharacter {
            character: '@',
            position: crate::Position(8, std::rc::Rc::new("shell".to_string())),
        }
    );
}

#[test]
fn test_non_ascii_outside_string_is_invalid() {
    assert!(matches!(
        tokenize("int é;", None),
        Err(LexicalError::InvalidCharacter { character: 'é', .. })
    ));

    let tokens = tokenize("\"olá\"", None).unwrap();
    assert_eq!(tokens[0].lexeme, "olá");
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("int  value = 3.5;", Some("span.mc".to_string())).unwrap();

    assert_eq!(tokens[1].lexeme, "value");
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 10);
    assert_eq!(tokens[3].span.start.0, 13);
    assert_eq!(tokens[3].span.end.0, 16);
    assert_eq!(tokens[1].span.start.1.as_str(), "span.mc");
}

#[test]
fn test_unknown_never_emitted() {
    let source = "int main() { double d = 1.5; if (d >= 1 && !done) { d = d - 1; } return 0; }";
    let tokens = tokenize(source, None).unwrap();

    assert!(!tokens.is_empty());
    assert!(tokens.iter().all(|token| token.kind != TokenKind::Unknown));
}

#[test]
fn test_retokenizing_lexemes_is_stable() {
    let source = "for (i = 0; i <= 10; i = i + 1) { total = total * 2.5 / (i - 1); a[i] = !x || y != z; }";
    let tokens = tokenize(source, None).unwrap();

    let joined: String = tokens.iter().map(|token| token.lexeme.as_str()).collect();
    let again = tokenize(&joined, None).unwrap();

    assert_eq!(kinds(&tokens), kinds(&again));
}

#[test]
fn test_each_call_starts_clean() {
    let first = tokenize("a b c", None).unwrap();
    let second = tokenize("d", None).unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].span.start.0, 0);
}

#[test]
fn test_token_debug_line() {
    let tokens = tokenize("int x = \"hi\";", None).unwrap();
    let lines: Vec<String> = tokens.iter().map(|token| token.debug()).collect();

    assert_eq!(
        lines,
        vec![
            "Keyword (int)",
            "Identifier (x)",
            "AssignOp ()",
            "StringLiteral (hi)",
            "Semicolon ()",
        ]
    );
}
