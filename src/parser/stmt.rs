use crate::{
    ast::{expressions::Expr, statements::{Block, Stmt}},
    errors::errors::SyntaxError,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    parser::{parse_block, Parser},
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    if parser.is_type() {
        return parse_var_decl_stmt(parser);
    }

    if parser.current_token_kind() == TokenKind::Keyword {
        let handler = parser
            .get_stmt_lookup()
            .get(parser.current_token().lexeme.as_str())
            .copied();
        if let Some(handler) = handler {
            return handler(parser);
        }
    }

    match parser.current_token_kind() {
        TokenKind::Identifier => parse_identifier_stmt(parser),
        TokenKind::LBrace => Ok(Stmt::Block(parse_block(parser)?)),
        _ => parse_expression_stmt(parser),
    }
}

/// Statement starting with an identifier: `a = ..;`, `a[i] = ..;` or an
/// expression statement such as `f(x);` or `a[i];`.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let snapshot = parser.save();
    parser.advance();

    match parser.current_token_kind() {
        TokenKind::LBracket => {
            parser.advance();
            parse_expr(parser)?;
            parser.expect(TokenKind::RBracket, "']' after array index")?;

            let is_assignment = parser.current_token_kind() == TokenKind::AssignOp;
            parser.restore(snapshot);

            if is_assignment {
                parse_assignment_stmt(parser)
            } else {
                parse_expression_stmt(parser)
            }
        }
        TokenKind::AssignOp => {
            parser.restore(snapshot);
            parse_assignment_stmt(parser)
        }
        _ => {
            parser.restore(snapshot);
            parse_expression_stmt(parser)
        }
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let expr = parse_expr(parser)?;

    parser.expect(TokenKind::Semicolon, "';' after expression")?;

    Ok(Stmt::Expr(expr))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    if !parser.is_type() {
        return Err(parser.error("type in variable declaration"));
    }
    let type_name = parser.advance().lexeme;

    let name = parser
        .expect(TokenKind::Identifier, "identifier in variable declaration")?
        .lexeme;

    let init = if parser.current_token_kind() == TokenKind::AssignOp {
        parser.advance();
        Some(parse_expr(parser)?)
    } else {
        None
    };

    // Further declarators are checked but not kept in the tree
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.expect(TokenKind::Identifier, "identifier after ','")?;
        if parser.current_token_kind() == TokenKind::AssignOp {
            parser.advance();
            parse_expr(parser)?;
        }
    }

    parser.expect(TokenKind::Semicolon, "';' after variable declaration")?;

    Ok(Stmt::VarDecl {
        type_name,
        name,
        init,
    })
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let name = parser
        .expect(TokenKind::Identifier, "identifier in assignment")?
        .lexeme;

    let index = if parser.current_token_kind() == TokenKind::LBracket {
        parser.advance();
        let index = parse_expr(parser)?;
        parser.expect(TokenKind::RBracket, "']' after array index")?;
        Some(index)
    } else {
        None
    };

    parser.expect(TokenKind::AssignOp, "'=' in assignment")?;

    let value = parse_expr(parser)?;

    parser.expect(TokenKind::Semicolon, "';' after assignment")?;

    Ok(Stmt::Assign { name, index, value })
}

/// A braced block, or a single statement wrapped into a one-statement block.
fn parse_stmt_or_block(parser: &mut Parser) -> Result<Block, SyntaxError> {
    if parser.current_token_kind() == TokenKind::LBrace {
        return parse_block(parser);
    }

    Ok(Block::new(vec![parse_stmt(parser)?]))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    parser.expect_keyword("if")?;
    parser.expect(TokenKind::LParen, "'(' after 'if'")?;

    let condition = parse_expr(parser)?;

    parser.expect(TokenKind::RParen, "')' after if condition")?;

    let then_block = parse_stmt_or_block(parser)?;

    let else_block = if parser.is_keyword("else") {
        parser.advance();
        Some(parse_stmt_or_block(parser)?)
    } else {
        None
    };

    Ok(Stmt::If {
        condition,
        then_block,
        else_block,
    })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    parser.expect_keyword("while")?;
    parser.expect(TokenKind::LParen, "'(' after 'while'")?;

    let condition = parse_expr(parser)?;

    parser.expect(TokenKind::RParen, "')' after while condition")?;

    let body = parse_stmt_or_block(parser)?;

    Ok(Stmt::While { condition, body })
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    parser.expect_keyword("for")?;
    parser.expect(TokenKind::LParen, "'(' after 'for'")?;

    // Every init form consumes its own ';'
    let init = if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
        None
    } else if parser.is_type() {
        Some(Box::new(parse_var_decl_stmt(parser)?))
    } else if parser.current_token_kind() == TokenKind::Identifier {
        Some(Box::new(parse_identifier_stmt(parser)?))
    } else {
        let expr = parse_expr(parser)?;
        parser.expect(TokenKind::Semicolon, "';' after for initializer")?;
        Some(Box::new(Stmt::Expr(expr)))
    };

    let condition = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon, "';' after for condition")?;

    let update = if parser.current_token_kind() != TokenKind::RParen {
        Some(parse_for_update(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::RParen, "')' after for update")?;

    let body = parse_block(parser)?;

    Ok(Stmt::For {
        init,
        condition,
        update,
        body,
    })
}

/// `i = i + 1` in a for header becomes `BinaryOp(Identifier(i), "=", ..)`.
fn parse_for_update(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    if parser.current_token_kind() != TokenKind::Identifier {
        return parse_expr(parser);
    }

    let snapshot = parser.save();
    parser.advance();
    let is_assignment = parser.current_token_kind() == TokenKind::AssignOp;
    parser.restore(snapshot);

    if !is_assignment {
        return parse_expr(parser);
    }

    let name = parser.advance().lexeme;
    let operator = parser.advance().lexeme;
    let value = parse_expr(parser)?;

    Ok(Expr::binary(Expr::Identifier(name), operator, value))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    parser.expect_keyword("return")?;

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon, "';' after return")?;

    Ok(Stmt::Return(value))
}
