//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the token catalog and the
//! tokenizer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_LOOKUP!` - Builds a spelling -> TokenKind lookup table
//!
//! These macros reduce boilerplate in the catalog and lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The source text the token was read from
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Literal, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr) => {
        $crate::lexer::tokens::Token::new($kind, $lexeme)
    };
}

/// Builds a `HashMap` lookup table from `spelling => kind` pairs.
///
/// # Example
///
/// ```ignore
/// let map = MK_LOOKUP! {
///     "if" => TokenKind::If,
///     "else" => TokenKind::Else,
/// };
/// ```
#[macro_export]
macro_rules! MK_LOOKUP {
    ($($spelling:expr => $kind:expr),* $(,)?) => {{
        let mut map = ::std::collections::HashMap::new();
        $(
            map.insert($spelling, $kind);
        )*
        map
    }};
}
