use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    comments::strip_comments,
    normalizer::normalize,
    tokens::{identifier_or_keyword, multi_sign, single_sign, Token, TokenKind, OPERATOR_CHARS},
};

/// Gets the matched lexeme at the lexer's position. `Ok(None)` hands the
/// lexeme over to the next pattern.
pub type LexemeHandler = fn(&Lexer, &str) -> Result<Option<Token>, Error>;

pub struct LexemePattern {
    regex: Regex,
    handler: LexemeHandler,
}

const ILLEGAL_SYMBOL_PREVIEW: usize = 10;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^[ \t\n]+").unwrap();

    // Order is significant: the first pattern producing a token wins.
    static ref PATTERNS: Vec<LexemePattern> = vec![
        LexemePattern { regex: Regex::new("^.").unwrap(), handler: single_sign_handler },
        LexemePattern {
            regex: Regex::new(&format!("^[{}]+", regex::escape(OPERATOR_CHARS))).unwrap(),
            handler: multi_sign_handler,
        },
        LexemePattern { regex: Regex::new("^\\p{Nd}+").unwrap(), handler: number_handler },
        LexemePattern { regex: Regex::new("^\"[^\"]*\"?").unwrap(), handler: string_handler },
        LexemePattern {
            regex: Regex::new("^[\\p{Alphabetic}_][\\p{Alphabetic}\\p{Nd}_]*").unwrap(),
            handler: symbol_handler,
        },
    ];
}

/// Lazily tokenizes one comment-free fragment.
///
/// Yields tokens in order and stops after the first error.
#[derive(Clone)]
pub struct Lexer {
    source: Arc<String>,
    pos: usize,
    failed: bool,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: Arc::new(source.into()),
            pos: 0,
            failed: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        let column = self.source[..self.pos].chars().count();
        Position(column as u32, Arc::clone(&self.source))
    }

    fn skip_whitespace(&mut self) {
        if let Some(found) = WHITESPACE.find(self.remainder()) {
            let skipped = found.end();
            self.advance_n(skipped);
        }
    }

    fn next_token(&self) -> Result<Token, Error> {
        let remaining = self.remainder();

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remaining) {
                if let Some(token) = (pattern.handler)(self, found.as_str())? {
                    return Ok(token);
                }
            }
        }

        Err(self.illegal_symbol())
    }

    fn illegal_symbol(&self) -> Error {
        let remaining = self.remainder();
        let symbol = remaining.chars().next().unwrap_or_default();
        let preview = remaining.chars().take(ILLEGAL_SYMBOL_PREVIEW).collect();

        Error::new(ErrorImpl::IllegalSymbol { symbol, preview }, self.position())
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        self.skip_whitespace();
        if self.at_eof() {
            return None;
        }

        match self.next_token() {
            Ok(token) => {
                trace!(kind = %token.kind(), lexeme = token.lexeme(), "token");
                self.advance_n(token.len());
                Some(Ok(token))
            }
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer {}

fn single_sign_handler(_lexer: &Lexer, lexeme: &str) -> Result<Option<Token>, Error> {
    Ok(lexeme.chars().next().and_then(single_sign))
}

fn multi_sign_handler(lexer: &Lexer, lexeme: &str) -> Result<Option<Token>, Error> {
    match multi_sign(lexeme) {
        Some(token) => Ok(Some(token)),
        None => Err(Error::new(
            ErrorImpl::IllegalSign {
                sign: String::from(lexeme),
            },
            lexer.position(),
        )),
    }
}

fn number_handler(_lexer: &Lexer, lexeme: &str) -> Result<Option<Token>, Error> {
    Ok(Some(MK_TOKEN!(TokenKind::Literal, lexeme)))
}

fn string_handler(lexer: &Lexer, lexeme: &str) -> Result<Option<Token>, Error> {
    if lexeme.len() < 2 || !lexeme.ends_with('"') {
        return Err(Error::new(
            ErrorImpl::UnclosedString {
                literal: String::from(lexeme),
            },
            lexer.position(),
        ));
    }

    Ok(Some(MK_TOKEN!(TokenKind::Literal, lexeme)))
}

fn symbol_handler(_lexer: &Lexer, lexeme: &str) -> Result<Option<Token>, Error> {
    Ok(Some(identifier_or_keyword(lexeme)))
}

/// Tokenizes a single comment-free fragment.
pub fn tokenize_fragment(fragment: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(fragment).collect()
}

/// Runs the whole pipeline: normalize, strip comments, then tokenize every
/// remaining fragment in order.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let fragments = strip_comments(normalize(source))?;

    let mut tokens = vec![];
    for fragment in fragments {
        for token in Lexer::new(fragment) {
            tokens.push(token?);
        }
    }

    debug!(tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}
