use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("double");
        set.insert("string");
        set.insert("main");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("do");
        set.insert("return");
        set
    };
    pub static ref PUNCTUATION_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(';', TokenKind::Semicolon);
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map.insert('{', TokenKind::LBrace);
        map.insert('}', TokenKind::RBrace);
        map.insert('[', TokenKind::LBracket);
        map.insert(']', TokenKind::RBracket);
        map.insert(',', TokenKind::Comma);
        map.insert('.', TokenKind::Dot);
        map.insert(':', TokenKind::Colon);
        map.insert('?', TokenKind::Question);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    IntLiteral,
    RealLiteral,
    StringLiteral,
    Identifier,
    Keyword,

    ArithmeticOp, // + - * /
    RelationalOp, // < > <= >= == !=
    LogicalOp,    // && || !
    AssignOp,     // =
    Increment,    // ++
    Decrement,    // --

    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Dot,
    Colon,
    Question,

    /// End of input. Never emitted by the lexer.
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nlexeme: {}}}", self.kind, self.lexeme)
    }
}

impl Token {
    /// Builds the end-of-input sentinel, positioned at `span`.
    pub fn unknown(span: Span) -> Token {
        Token {
            kind: TokenKind::Unknown,
            lexeme: String::new(),
            span,
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == word
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// One-line dump used by the driver: `Identifier (x)`, or `Semicolon ()`
    /// for kinds whose lexeme adds nothing.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::StringLiteral,
            TokenKind::Identifier,
            TokenKind::IntLiteral,
            TokenKind::RealLiteral,
            TokenKind::Keyword,
        ]) {
            format!("{} ({})", self.kind, self.lexeme)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
