//! Lexical analysis module.
//!
//! This module turns Java-like source text into tokens in three stages:
//!
//! - Normalization of raw lines into statement and comment fragments
//! - Removal of line and block comment fragments
//! - Tokenization of each remaining fragment
//!
//! The token catalog in `tokens` is the only place that decides whether a
//! spelling is a sign, a keyword or an identifier.

pub mod comments;
pub mod lexer;
pub mod normalizer;
pub mod tokens;
