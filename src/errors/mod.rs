//! Error types and error handling for the front end.
//!
//! This module defines the errors produced while turning source text into
//! an AST. It includes:
//!
//! - Lexical errors raised by the tokenizer automaton
//! - Syntax errors raised by the recursive-descent parser
//! - A crate-wide error wrapping both, with names, positions and tips

pub mod errors;
