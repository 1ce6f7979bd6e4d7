//! Error types and error handling for the lexer.
//!
//! This module defines the error types raised while turning source text
//! into tokens. It includes:
//!
//! - Error structures carrying the offending fragment and column
//! - One variant per failure kind (illegal sign, illegal symbol,
//!   unclosed string, unclosed comment)
//! - Error names and user-facing suggestions

pub mod errors;
