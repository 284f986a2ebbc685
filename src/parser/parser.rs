//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level rules
//! (functions, parameter lists, blocks). Statements live in `stmt` and
//! expressions in `expr`.
//!
//! The token list is fully materialized before parsing starts, so lookahead
//! is a matter of saving the cursor, advancing, and restoring it.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{
        ast::{Function, Parameter, Program},
        expressions::Expr,
        statements::Block,
    },
    errors::errors::SyntaxError,
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    expr::parse_expr,
    lookups::{create_stmt_lookups, StmtHandler, StmtLookup, TYPE_KEYWORDS},
    stmt::{parse_stmt, parse_var_decl_stmt},
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of `current` in `tokens`
    pos: usize,
    /// Token at `pos`, or the `Unknown` sentinel past the end
    current: Token,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Statement handlers keyed by leading keyword
    stmt_lookup: StmtLookup,
}

/// A saved cursor position, see [`Parser::save`].
#[derive(Debug, Clone)]
pub struct Snapshot {
    pos: usize,
    current: Token,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let mut parser = Parser {
            tokens,
            pos: 0,
            current: Token::unknown(Span {
                start: Position(0, Rc::clone(&file)),
                end: Position(0, Rc::clone(&file)),
            }),
            file,
            stmt_lookup: HashMap::new(),
        };
        parser.current = parser.token_at(0);
        parser
    }

    fn token_at(&self, pos: usize) -> Token {
        match self.tokens.get(pos) {
            Some(token) => token.clone(),
            None => {
                let end = self.tokens.last().map(|token| token.span.end.0).unwrap_or(0);
                Token::unknown(Span {
                    start: Position(end, Rc::clone(&self.file)),
                    end: Position(end, Rc::clone(&self.file)),
                })
            }
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Token {
        self.pos += 1;
        let next = self.token_at(self.pos);
        std::mem::replace(&mut self.current, next)
    }

    pub fn at_end(&self) -> bool {
        self.current.kind == TokenKind::Unknown
    }

    pub fn save(&self) -> Snapshot {
        Snapshot {
            pos: self.pos,
            current: self.current.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.pos = snapshot.pos;
        self.current = snapshot.current;
    }

    /// Builds the error for the current token not matching `expected`.
    pub fn error(&self, expected: &str) -> SyntaxError {
        SyntaxError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.current.lexeme.clone(),
            position: self.current.span.start.clone(),
        }
    }

    /// Consumes a token of `expected_kind`, or fails describing `expected`.
    pub fn expect(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, SyntaxError> {
        if self.current.kind != expected_kind {
            return Err(self.error(expected));
        }

        Ok(self.advance())
    }

    pub fn expect_keyword(&mut self, word: &str) -> Result<Token, SyntaxError> {
        if !self.current.is_keyword(word) {
            return Err(self.error(&format!("'{}'", word)));
        }

        Ok(self.advance())
    }

    pub fn is_type(&self) -> bool {
        self.current.kind == TokenKind::Keyword && TYPE_KEYWORDS.contains(self.current.lexeme.as_str())
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.current.is_keyword(word)
    }

    /// Checks for `type name (` without moving the cursor.
    pub fn is_function_ahead(&mut self) -> bool {
        if !self.is_type() {
            return false;
        }

        let snapshot = self.save();
        self.advance();

        let mut is_function = false;
        if matches!(self.current.kind, TokenKind::Identifier | TokenKind::Keyword) {
            self.advance();
            is_function = self.current.kind == TokenKind::LParen;
        }

        self.restore(snapshot);
        is_function
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a leading keyword.
    pub fn stmt(&mut self, keyword: &'static str, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }
}

pub fn parse_program(parser: &mut Parser) -> Result<Program, SyntaxError> {
    let mut functions = vec![];

    while !parser.at_end() {
        if !parser.is_type() {
            return Err(parser.error("function or variable declaration"));
        }

        if parser.is_function_ahead() {
            functions.push(parse_function(parser)?);
            continue;
        }

        // Top-level declarations are gathered into a wrapper function
        let mut statements = vec![];
        while parser.is_type() && !parser.is_function_ahead() {
            statements.push(parse_var_decl_stmt(parser)?);
        }
        functions.push(Function::global(Block::new(statements)));
    }

    Ok(Program { functions })
}

pub fn parse_function(parser: &mut Parser) -> Result<Function, SyntaxError> {
    if !parser.is_type() {
        return Err(parser.error("function return type"));
    }
    let return_type = parser.advance().lexeme;

    if !matches!(
        parser.current_token_kind(),
        TokenKind::Identifier | TokenKind::Keyword
    ) {
        return Err(parser.error("function name"));
    }
    let name = parser.advance().lexeme;

    parser.expect(TokenKind::LParen, "'(' after function name")?;

    let params = if parser.is_type() {
        parse_param_list(parser)?
    } else {
        vec![]
    };

    parser.expect(TokenKind::RParen, "')' after parameters")?;

    let body = parse_block(parser)?;

    Ok(Function {
        return_type,
        name,
        params,
        body,
    })
}

pub fn parse_param_list(parser: &mut Parser) -> Result<Vec<Parameter>, SyntaxError> {
    let mut params = vec![];

    loop {
        if !parser.is_type() {
            return Err(parser.error("parameter type"));
        }
        let type_name = parser.advance().lexeme;
        let name = parser
            .expect(TokenKind::Identifier, "parameter name")?
            .lexeme;

        params.push(Parameter { type_name, name });

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    Ok(params)
}

pub fn parse_block(parser: &mut Parser) -> Result<Block, SyntaxError> {
    parser.expect(TokenKind::LBrace, "'{' to open block")?;

    let mut statements = vec![];
    while !matches!(
        parser.current_token_kind(),
        TokenKind::RBrace | TokenKind::Unknown
    ) {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::RBrace, "'}' to close block")?;

    Ok(Block::new(statements))
}

/// Parses a token list into a [`Program`].
///
/// This is the main entry point for parsing. On failure no part of the tree
/// is returned.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, SyntaxError> {
    let mut parser = Parser::new(tokens, file);
    create_stmt_lookups(&mut parser);

    parse_program(&mut parser)
}

/// Parses a token list holding exactly one expression.
pub fn parse_expression(tokens: Vec<Token>, file: Rc<String>) -> Result<Expr, SyntaxError> {
    let mut parser = Parser::new(tokens, file);

    let expr = parse_expr(&mut parser)?;
    if !parser.at_end() {
        return Err(parser.error("end of expression"));
    }

    Ok(expr)
}
