use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Failures of the tokenizer. Every one aborts the current `tokenize` call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexicalError {
    #[error("invalid character {character:?}")]
    InvalidCharacter { character: char, position: Position },
    #[error("unterminated string literal")]
    UnterminatedString { start: Position },
    #[error("invalid logical operator {lexeme:?}")]
    InvalidOperator { lexeme: String, position: Position },
}

/// Failures of the parser. Every one aborts the current `parse` call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("expected {expected}, found {found:?}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: Position,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("lexical error: {0}")]
    Lexical(#[from] LexicalError),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl Error {
    pub fn get_position(&self) -> &Position {
        match self {
            Error::Lexical(LexicalError::InvalidCharacter { position, .. }) => position,
            Error::Lexical(LexicalError::UnterminatedString { start }) => start,
            Error::Lexical(LexicalError::InvalidOperator { position, .. }) => position,
            Error::Syntax(SyntaxError::UnexpectedToken { position, .. }) => position,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            Error::Lexical(LexicalError::InvalidCharacter { .. }) => "InvalidCharacter",
            Error::Lexical(LexicalError::UnterminatedString { .. }) => "UnterminatedString",
            Error::Lexical(LexicalError::InvalidOperator { .. }) => "InvalidOperator",
            Error::Syntax(SyntaxError::UnexpectedToken { .. }) => "UnexpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::Lexical(LexicalError::InvalidCharacter { character, .. }) => {
                ErrorTip::Suggestion(format!("`{}` does not start any token", character))
            }
            // The error name already says what is missing
            Error::Lexical(LexicalError::UnterminatedString { .. }) => ErrorTip::None,
            Error::Lexical(LexicalError::InvalidOperator { lexeme, .. }) => ErrorTip::Suggestion(
                format!("`{}` must be doubled, did you mean `{}{}`?", lexeme, lexeme, lexeme),
            ),
            Error::Syntax(SyntaxError::UnexpectedToken { expected, found, .. }) => {
                if found.is_empty() {
                    ErrorTip::Suggestion(format!("expected {}, found end of input", expected))
                } else {
                    ErrorTip::Suggestion(format!("expected {}, found `{}`", expected, found))
                }
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
