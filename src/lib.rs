#![allow(clippy::module_inception)]

use std::{fs, io, path::Path, sync::Arc};

use tracing::debug;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use lexer::{
    comments::strip_comments,
    lexer::{tokenize, tokenize_fragment, Lexer},
    normalizer::normalize,
    tokens::{Token, TokenKind},
};

/// Column (in chars) inside a fragment, plus the fragment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

impl Position {
    pub fn fragment(&self) -> &str {
        &self.1
    }
}

/// Reads a whole source file as UTF-8.
pub fn load_source(path: &Path) -> io::Result<String> {
    let source = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = source.len(), "loaded source");
    Ok(source)
}

/// Finds the first physical line of `source` containing the fragment the
/// position points into. Returns the 1-based line number, the line, and the
/// char column of the position on that line.
pub fn get_line_at_position(source: &str, position: &Position) -> Option<(usize, String, usize)> {
    let fragment = position.fragment();
    if fragment.is_empty() {
        return None;
    }

    for (index, line) in source.lines().enumerate() {
        if let Some(byte_start) = line.find(fragment) {
            let column = line[..byte_start].chars().count() + position.0 as usize;
            return Some((index + 1, line.to_string(), column));
        }
    }

    None
}

pub fn render_error(error: &Error, source: &str, file: &Path) -> String {
    /*
        Error: IllegalSign (`<>` is not an operator, ...)
        -> Main.java
           |
        20 | if (a <> b) {
           | ------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position)
        .unwrap_or_else(|| (0, position.fragment().to_string(), position.0 as usize));

    let line_string = if line == 0 {
        String::from("?")
    } else {
        line.to_string()
    };
    let padding = line_string.len() + 2;

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {} ({})", error.get_error_name(), error)
    } else {
        format!("Error: {} ({})", error, error.get_tip())
    };

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let lines = [
        header,
        format!("-> {}", file.as_os_str().to_string_lossy()),
        format!("{:>padding$}", "|"),
        format!("{} | {}", line_string, line_text_removed.trim_end()),
        format!("{:>padding$} {:->arrows$}", "|", "^"),
    ];

    lines.iter().map(|line| format!("{}\n", line)).collect()
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (string.chars().skip(start).collect(), start)
}
