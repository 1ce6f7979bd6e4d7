use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalSign { .. } => "IllegalSign",
            ErrorImpl::IllegalSymbol { .. } => "IllegalSymbol",
            ErrorImpl::UnclosedString { .. } => "UnclosedString",
            ErrorImpl::UnclosedComment { .. } => "UnclosedComment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalSign { sign } => ErrorTip::Suggestion(format!(
                "`{}` is not an operator, separate the operators with whitespace",
                sign
            )),
            ErrorImpl::IllegalSymbol { symbol, .. } => {
                ErrorTip::Suggestion(format!("`{}` cannot start a token", symbol))
            }
            ErrorImpl::UnclosedString { .. } => ErrorTip::Suggestion(String::from(
                "string literals must be closed on the same line",
            )),
            ErrorImpl::UnclosedComment { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal sign: {sign}")]
    IllegalSign { sign: String },
    #[error("illegal symbol {symbol:?}: {preview}")]
    IllegalSymbol { symbol: char, preview: String },
    #[error("can't find closing quote for: {literal}")]
    UnclosedString { literal: String },
    #[error("unclosed comment: unmatched `{marker}`")]
    UnclosedComment { marker: String },
}
