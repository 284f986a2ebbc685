//! Parser module for building the Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns the token
//! list produced by the lexer into a `Program`. It handles:
//!
//! - Program structure (functions and top-level declarations)
//! - Statement parsing, using saved/restored cursor positions to tell
//!   assignments, array assignments and expression statements apart
//! - Expression parsing through layered precedence rules
//!
//! Any mismatch aborts the whole parse with a `SyntaxError`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
