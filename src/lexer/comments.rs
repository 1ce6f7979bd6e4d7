use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::normalizer::{BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, LINE_COMMENT};

/// Removes comment fragments from normalized source.
///
/// Fragments are pushed onto a stack; a fragment ending in `*/` pops
/// entries until the nearest one starting with `/*` is popped as well.
/// Whatever is left on the stack, bottom to top, is the comment-free code.
pub fn strip_comments(fragments: Vec<String>) -> Result<Vec<String>, Error> {
    let mut stack: Vec<String> = vec![];

    for fragment in fragments {
        if fragment.starts_with(LINE_COMMENT) {
            continue;
        }

        if fragment.ends_with(BLOCK_COMMENT_CLOSE) {
            let comment_open = stack
                .iter()
                .any(|entry| entry.starts_with(BLOCK_COMMENT_OPEN));
            if !comment_open && is_inline_block_comment(&fragment) {
                continue;
            }

            let mut closed = false;
            while let Some(entry) = stack.pop() {
                trace!(fragment = %entry, "dropped commented fragment");
                if entry.starts_with(BLOCK_COMMENT_OPEN) {
                    closed = true;
                    break;
                }
            }

            if !closed {
                let column = fragment.chars().count() - BLOCK_COMMENT_CLOSE.len();
                return Err(unclosed_comment(fragment, column, BLOCK_COMMENT_CLOSE));
            }
            continue;
        }

        stack.push(fragment);
    }

    if let Some(opener) = stack
        .iter()
        .find(|fragment| fragment.starts_with(BLOCK_COMMENT_OPEN))
    {
        return Err(unclosed_comment(opener.clone(), 0, BLOCK_COMMENT_OPEN));
    }

    debug!(fragments = stack.len(), "stripped comments");
    Ok(stack)
}

/// `/* ... */` held entirely in one fragment. Only standalone when no
/// other block comment is open.
fn is_inline_block_comment(fragment: &str) -> bool {
    fragment.len() >= BLOCK_COMMENT_OPEN.len() + BLOCK_COMMENT_CLOSE.len()
        && fragment.starts_with(BLOCK_COMMENT_OPEN)
}

fn unclosed_comment(fragment: String, column: usize, marker: &str) -> Error {
    Error::new(
        ErrorImpl::UnclosedComment {
            marker: String::from(marker),
        },
        Position(column as u32, Arc::new(fragment)),
    )
}
