use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::{ast::statements::Stmt, errors::errors::SyntaxError};

use super::{parser::Parser, stmt::*};

lazy_static! {
    /// Reserved words that name a type and therefore start a declaration.
    pub static ref TYPE_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("double");
        set.insert("string");
        set
    };
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, SyntaxError>;

// Lookup table inside parser struct, keyed by keyword lexeme
pub type StmtLookup = HashMap<&'static str, StmtHandler>;

pub fn create_stmt_lookups(parser: &mut Parser) {
    parser.stmt("if", parse_if_stmt);
    parser.stmt("while", parse_while_stmt);
    parser.stmt("for", parse_for_stmt);
    parser.stmt("return", parse_return_stmt);
}
