use crate::{ast::expressions::Expr, errors::errors::SyntaxError, lexer::tokens::TokenKind};

use super::parser::Parser;

/// Expression := E ((relational | logical) E)*
///
/// Relational and logical operators share one level and fold strictly left
/// to right: `a < b && c` is `(a < b) && c`, `a && b < c` is `(a && b) < c`.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let mut left = parse_additive_expr(parser)?;

    while is_chain_operator(parser) {
        let operator = parser.advance().lexeme;
        let right = parse_additive_expr(parser)?;
        left = Expr::binary(left, operator, right);
    }

    Ok(left)
}

fn is_chain_operator(parser: &Parser) -> bool {
    let token = parser.current_token();
    match token.kind {
        TokenKind::RelationalOp | TokenKind::LogicalOp => true,
        _ => false,
    }
}

fn is_arithmetic(parser: &Parser, operators: &[&str]) -> bool {
    let token = parser.current_token();
    token.kind == TokenKind::ArithmeticOp && operators.contains(&token.lexeme.as_str())
}

/// E := T (('+' | '-') T)*
pub fn parse_additive_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let mut left = parse_multiplicative_expr(parser)?;

    while is_arithmetic(parser, &["+", "-"]) {
        let operator = parser.advance().lexeme;
        let right = parse_multiplicative_expr(parser)?;
        left = Expr::binary(left, operator, right);
    }

    Ok(left)
}

/// T := F (('*' | '/') F)*
pub fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let mut left = parse_primary_expr(parser)?;

    while is_arithmetic(parser, &["*", "/"]) {
        let operator = parser.advance().lexeme;
        let right = parse_primary_expr(parser)?;
        left = Expr::binary(left, operator, right);
    }

    Ok(left)
}

/// F := '!' F | '(' Expression ')' | name | name '[' Expression ']'
///    | name '(' args ')' | literal
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    match parser.current_token_kind() {
        TokenKind::LogicalOp if parser.current_token().lexeme == "!" => {
            let operator = parser.advance().lexeme;
            let operand = parse_primary_expr(parser)?;
            Ok(Expr::unary(operator, operand))
        }
        TokenKind::LParen => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::RParen, "')' to close expression")?;
            Ok(expr)
        }
        TokenKind::Identifier => {
            let name = parser.advance().lexeme;

            match parser.current_token_kind() {
                TokenKind::LBracket => {
                    parser.advance();
                    let index = parse_expr(parser)?;
                    parser.expect(TokenKind::RBracket, "']' after array index")?;
                    Ok(Expr::array_access(name, index))
                }
                TokenKind::LParen => {
                    parser.advance();
                    let args = parse_call_args(parser)?;
                    parser.expect(TokenKind::RParen, "')' after function arguments")?;
                    Ok(Expr::call(name, args))
                }
                _ => Ok(Expr::Identifier(name)),
            }
        }
        TokenKind::IntLiteral | TokenKind::RealLiteral | TokenKind::StringLiteral => {
            Ok(Expr::Literal(parser.advance().lexeme))
        }
        _ => Err(parser.error("expression")),
    }
}

fn parse_call_args(parser: &mut Parser) -> Result<Vec<Expr>, SyntaxError> {
    let mut args = vec![];

    if parser.current_token_kind() == TokenKind::RParen {
        return Ok(args);
    }

    args.push(parse_expr(parser)?);
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        args.push(parse_expr(parser)?);
    }

    Ok(args)
}
