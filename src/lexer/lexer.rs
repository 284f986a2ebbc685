use std::rc::Rc;

use crate::{errors::errors::LexicalError, Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, PUNCTUATION_LOOKUP, RESERVED_WORDS};

/// States of the tokenizer automaton.
///
/// Every state except `Start` classifies the token currently being
/// accumulated; reaching the end of that token emits it and returns to `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexerState {
    Start,
    Integer,
    Decimal,
    Identifier,
    StringBody,
    Arithmetic,
    Increment,
    Decrement,
    Relational,
    Logical,
    Punctuation,
}

pub(crate) struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    state: LexerState,
    lexeme: String,
    lexeme_start: usize,
    tokens: Vec<Token>,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            state: LexerState::Start,
            lexeme: String::new(),
            lexeme_start: 0,
            tokens: vec![],
            file: file_name,
        }
    }

    fn at(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn position(&self, offset: usize) -> Position {
        Position(offset as u32, Rc::clone(&self.file))
    }

    /// Consumes the current byte into the lexeme being accumulated.
    fn take(&mut self) {
        if let Some(c) = self.at() {
            self.lexeme.push(c as char);
            self.pos += 1;
        }
    }

    fn begin(&mut self, state: LexerState) {
        self.lexeme.clear();
        self.lexeme_start = self.pos;
        self.state = state;
    }

    fn emit(&mut self, kind: TokenKind) {
        let lexeme = std::mem::take(&mut self.lexeme);
        self.tokens.push(MK_TOKEN!(kind, lexeme, self.lexeme_start, self.pos, self.file));
        self.state = LexerState::Start;
    }

    /// Runs one transition of the automaton.
    fn step(&mut self) -> Result<(), LexicalError> {
        match self.state {
            LexerState::Start => self.start(),
            LexerState::Integer => {
                self.integer();
                Ok(())
            }
            LexerState::Decimal => {
                self.decimal();
                Ok(())
            }
            LexerState::Identifier => {
                self.identifier();
                Ok(())
            }
            LexerState::StringBody => self.string_body(),
            LexerState::Arithmetic => {
                self.emit(TokenKind::ArithmeticOp);
                Ok(())
            }
            LexerState::Increment => {
                self.emit(TokenKind::Increment);
                Ok(())
            }
            LexerState::Decrement => {
                self.emit(TokenKind::Decrement);
                Ok(())
            }
            LexerState::Relational => {
                self.relational();
                Ok(())
            }
            LexerState::Logical => self.logical(),
            LexerState::Punctuation => {
                self.punctuation();
                Ok(())
            }
        }
    }

    fn start(&mut self) -> Result<(), LexicalError> {
        let Some(c) = self.at() else {
            return Ok(());
        };

        match c {
            c if c.is_ascii_whitespace() => self.pos += 1,
            b'0'..=b'9' => {
                self.begin(LexerState::Integer);
                self.take();
            }
            c if c.is_ascii_alphabetic() || c == b'_' => {
                self.begin(LexerState::Identifier);
                self.take();
            }
            b'"' => {
                self.begin(LexerState::StringBody);
                // The quotes are not part of the lexeme
                self.pos += 1;
            }
            b'+' | b'-' => {
                let doubled = self.peek() == Some(c);
                let state = match (c, doubled) {
                    (b'+', true) => LexerState::Increment,
                    (b'-', true) => LexerState::Decrement,
                    _ => LexerState::Arithmetic,
                };
                self.begin(state);
                self.take();
                if doubled {
                    self.take();
                }
            }
            b'*' | b'/' => {
                self.begin(LexerState::Arithmetic);
                self.take();
            }
            b'!' | b'&' | b'|' => {
                self.begin(LexerState::Logical);
                self.take();
            }
            b'<' | b'>' | b'=' => {
                self.begin(LexerState::Relational);
                self.take();
            }
            c if PUNCTUATION_LOOKUP.contains_key(&(c as char)) => {
                self.begin(LexerState::Punctuation);
                self.take();
            }
            _ => {
                let character = self.source[self.pos..].chars().next().unwrap_or('\0');
                return Err(LexicalError::InvalidCharacter {
                    character,
                    position: self.position(self.pos),
                });
            }
        }

        Ok(())
    }

    fn integer(&mut self) {
        match self.at() {
            Some(b'0'..=b'9') => self.take(),
            Some(b'.') => {
                self.take();
                self.state = LexerState::Decimal;
            }
            _ => self.emit(TokenKind::IntLiteral),
        }
    }

    fn decimal(&mut self) {
        while let Some(b'0'..=b'9') = self.at() {
            self.take();
        }
        self.emit(TokenKind::RealLiteral);
    }

    fn identifier(&mut self) {
        match self.at() {
            Some(c) if c.is_ascii_alphanumeric() || c == b'_' => self.take(),
            _ => {
                if RESERVED_WORDS.contains(self.lexeme.as_str()) {
                    self.emit(TokenKind::Keyword);
                } else {
                    self.emit(TokenKind::Identifier);
                }
            }
        }
    }

    fn string_body(&mut self) -> Result<(), LexicalError> {
        let body_start = self.pos;
        let Some(length) = self.source[body_start..].find('"') else {
            return Err(LexicalError::UnterminatedString {
                start: self.position(self.lexeme_start),
            });
        };

        self.lexeme.push_str(&self.source[body_start..body_start + length]);
        self.pos = body_start + length + 1;
        self.emit(TokenKind::StringLiteral);

        Ok(())
    }

    fn relational(&mut self) {
        if self.at() == Some(b'=') {
            self.take();
        }

        if self.lexeme == "=" {
            self.emit(TokenKind::AssignOp);
        } else {
            self.emit(TokenKind::RelationalOp);
        }
    }

    fn logical(&mut self) -> Result<(), LexicalError> {
        let next = self.at();

        match (self.lexeme.as_str(), next) {
            ("&", Some(b'&')) | ("|", Some(b'|')) => {
                self.take();
                self.emit(TokenKind::LogicalOp);
            }
            ("!", Some(b'=')) => {
                self.take();
                self.emit(TokenKind::RelationalOp);
            }
            ("!", _) => self.emit(TokenKind::LogicalOp),
            _ => {
                return Err(LexicalError::InvalidOperator {
                    lexeme: self.lexeme.clone(),
                    position: self.position(self.lexeme_start),
                });
            }
        }

        Ok(())
    }

    fn punctuation(&mut self) {
        let kind = self
            .lexeme
            .chars()
            .next()
            .and_then(|c| PUNCTUATION_LOOKUP.get(&c).copied())
            .unwrap_or(TokenKind::Unknown);

        self.emit(kind);
    }
}

/// Converts `source` into its ordered token list.
///
/// The list never contains the `Unknown` sentinel; an empty or
/// whitespace-only source yields an empty list.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, LexicalError> {
    let mut lex = Lexer::new(source, file);

    while !(lex.at_eof() && lex.state == LexerState::Start) {
        lex.step()?;
    }

    Ok(lex.tokens)
}
