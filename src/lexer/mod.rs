//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a list of tokens for parsing. It handles:
//!
//! - Tokenization through an explicit finite-state automaton
//! - Recognition of keywords, identifiers, literals, and operators
//! - Maximal-munch classification of two-character operators
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
