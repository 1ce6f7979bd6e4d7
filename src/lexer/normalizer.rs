//! Splits raw source into logical fragments.
//!
//! Each physical line is cut at its first `//` or its last `/*` that is not
//! inside a string literal; the code before the cut is split on `;`, and the
//! comment tail becomes a fragment of its own. Whether a marker is inside a
//! literal is decided per line by looking for a `"` on both sides of it, so
//! literals spanning lines and escaped quotes are not understood.

use tracing::debug;

pub const LINE_COMMENT: &str = "//";
pub const BLOCK_COMMENT_OPEN: &str = "/*";
pub const BLOCK_COMMENT_CLOSE: &str = "*/";
pub const SEMICOLON: &str = ";";

pub fn normalize(source: &str) -> Vec<String> {
    let fragments: Vec<String> = source
        .split('\n')
        .flat_map(split_line)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(String::from)
        .collect();

    debug!(fragments = fragments.len(), "normalized source");
    fragments
}

fn split_line(line: &str) -> Vec<&str> {
    let line_comment = line
        .match_indices(LINE_COMMENT)
        .map(|(index, _)| index)
        .find(|index| !in_literal(line, *index));

    let block_comment = line
        .rmatch_indices(BLOCK_COMMENT_OPEN)
        .map(|(index, _)| index)
        .find(|index| !in_literal(line, *index));

    let comment_start = [line_comment, block_comment].into_iter().flatten().min();
    let code = match comment_start {
        Some(index) => &line[..index],
        None => line,
    };

    let mut fragments = vec![];
    let terminated = code.contains(SEMICOLON);

    for statement in code.split(SEMICOLON) {
        if statement.trim().is_empty() {
            continue;
        }
        fragments.push(statement);
        if terminated {
            fragments.push(SEMICOLON);
        }
    }

    if let Some(index) = comment_start {
        fragments.push(&line[index..]);
    }

    fragments
}

/// A marker at `index` counts as quoted when the line has a `"` before it
/// and another one after it.
fn in_literal(line: &str, index: usize) -> bool {
    line[..index].contains('"') && line[index..].contains('"')
}

#[cfg(test)]
mod tests {
    use super::{in_literal, normalize};

    #[test]
    fn test_in_literal() {
        let line = r#"String a = "x // y"; // z"#;
        assert!(in_literal(line, line.find("//").unwrap()));
        assert!(!in_literal(line, line.rfind("//").unwrap()));
        assert!(!in_literal("a = 1; // c", 7));
    }

    #[test]
    fn test_block_comment_tail_is_split_off() {
        let fragments = normalize("int a = 1; /* start");
        assert_eq!(fragments, vec!["int a = 1", ";", "/* start"]);
    }

    #[test]
    fn test_earliest_marker_wins() {
        let fragments = normalize("x = 1; /* a // b");
        assert_eq!(fragments, vec!["x = 1", ";", "/* a // b"]);

        let fragments = normalize("x = 1; // a /* b");
        assert_eq!(fragments, vec!["x = 1", ";", "// a /* b"]);
    }

    #[test]
    fn test_crlf_lines() {
        let fragments = normalize("int a = 1;\r\nint b = 2;\r\n");
        assert_eq!(fragments, vec!["int a = 1", ";", "int b = 2", ";"]);
    }
}
