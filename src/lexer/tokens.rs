use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashMap, fmt::Display};

use crate::{MK_LOOKUP, MK_TOKEN};

/// Characters that may form a multi-character sign.
pub const OPERATOR_CHARS: &str = "+-*/%=<>";

lazy_static! {
    pub static ref SINGLE_SIGN_LOOKUP: HashMap<char, TokenKind> = MK_LOOKUP! {
        '(' => TokenKind::Sign,
        ')' => TokenKind::Sign,
        '[' => TokenKind::Sign,
        ']' => TokenKind::Sign,
        '{' => TokenKind::Sign,
        '}' => TokenKind::Sign,
        ';' => TokenKind::Sign,
        ',' => TokenKind::Sign,
        '.' => TokenKind::Sign,
    };

    pub static ref MULTI_SIGN_LOOKUP: HashMap<&'static str, TokenKind> = MK_LOOKUP! {
        "+" => TokenKind::Sign,
        "+=" => TokenKind::Sign,
        "++" => TokenKind::Sign,
        "-" => TokenKind::Sign,
        "-=" => TokenKind::Sign,
        "--" => TokenKind::Sign,
        "*" => TokenKind::Sign,
        "*=" => TokenKind::Sign,
        "/" => TokenKind::Sign,
        "/=" => TokenKind::Sign,
        "%" => TokenKind::Sign,
        "%=" => TokenKind::Sign,
        "=" => TokenKind::Sign,
        "==" => TokenKind::Sign,
        "<" => TokenKind::Sign,
        "<=" => TokenKind::Sign,
        ">" => TokenKind::Sign,
        ">=" => TokenKind::Sign,
    };

    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = MK_LOOKUP! {
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "do" => TokenKind::Do,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "return" => TokenKind::Return,
        "switch" => TokenKind::Switch,
        "case" => TokenKind::Case,
        "default" => TokenKind::Default,
        "int" => TokenKind::Int,
        "long" => TokenKind::Long,
        "float" => TokenKind::Float,
        "double" => TokenKind::Double,
        "char" => TokenKind::Char,
        "boolean" => TokenKind::Boolean,
        "void" => TokenKind::Void,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        "new" => TokenKind::New,
        "class" => TokenKind::Class,
        "public" => TokenKind::Public,
        "private" => TokenKind::Private,
        "protected" => TokenKind::Protected,
        "static" => TokenKind::Static,
        "final" => TokenKind::Final,
        "abstract" => TokenKind::Abstract,
        "this" => TokenKind::This,
        "super" => TokenKind::Super,
        "import" => TokenKind::Import,
        "package" => TokenKind::Package,
        "try" => TokenKind::Try,
        "catch" => TokenKind::Catch,
        "finally" => TokenKind::Finally,
        "throw" => TokenKind::Throw,
        "throws" => TokenKind::Throws,
        "enum" => TokenKind::Enum,
        "interface" => TokenKind::Interface,
        "extends" => TokenKind::Extends,
        "implements" => TokenKind::Implements,
        "instanceof" => TokenKind::InstanceOf,
        "native" => TokenKind::Native,
        "synchronized" => TokenKind::Synchronized,
    };
}

/// Token categories. Every reserved word has its own variant; the
/// declaration order is the index printed by `Token`'s `Display`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    Sign,

    // Reserved
    If,
    Else,
    While,
    For,
    Do,
    Break,
    Continue,
    Return,
    Switch,
    Case,
    Default,
    Int,
    Long,
    Float,
    Double,
    Char,
    Boolean,
    Void,
    True,
    False,
    Null,
    New,
    Class,
    Public,
    Private,
    Protected,
    Static,
    Final,
    Abstract,
    This,
    Super,
    Import,
    Package,
    Try,
    Catch,
    Finally,
    Throw,
    Throws,
    Enum,
    Interface,
    Extends,
    Implements,
    InstanceOf,
    Native,
    Synchronized,

    Literal,
    Identifier,
}

impl TokenKind {
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexeme together with its category. Tokens own a copy of the
/// source text and are never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{:2}, '{}'>", self.kind.index(), self.lexeme)
    }
}

pub fn single_sign(ch: char) -> Option<Token> {
    SINGLE_SIGN_LOOKUP
        .get(&ch)
        .map(|kind| MK_TOKEN!(*kind, ch.to_string()))
}

/// Looks up a run of `OPERATOR_CHARS`. `None` means the run is not a sign
/// the language defines.
pub fn multi_sign(run: &str) -> Option<Token> {
    MULTI_SIGN_LOOKUP
        .get(run)
        .map(|kind| MK_TOKEN!(*kind, run))
}

pub fn identifier_or_keyword(word: &str) -> Token {
    match RESERVED_LOOKUP.get(word) {
        Some(kind) => MK_TOKEN!(*kind, word),
        None => MK_TOKEN!(TokenKind::Identifier, word),
    }
}
