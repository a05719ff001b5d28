//! Comment placeholders
//!
//! `oxc_codegen` only prints comments that are anchored to source spans, and a
//! built tree has no source text. Comment nodes are therefore lowered to
//! indexed `void "__estemplate_comment_N__";` statements and the comment text
//! is spliced back in after codegen. The text itself never passes through the
//! string-literal printer.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::ast::Comment;
use crate::error::{Error, Result};

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"void\s*["']__estemplate_comment_(\d+)__["']\s*;"#)
        .expect("placeholder pattern is valid")
});

/// String literal standing in for the `index`-th comment of a render
pub fn placeholder(index: usize) -> String {
    format!("__estemplate_comment_{}__", index)
}

/// JavaScript comment text for a comment node
pub fn comment_text(comment: &Comment) -> String {
    match comment.kind.as_str() {
        "Line" => comment
            .value
            .split('\n')
            .map(|line| format!("//{}", line))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => format!("/*{}*/", comment.value.replace("*/", "* /")),
    }
}

/// Replace the placeholders in generated code with the comments they stand for.
///
/// Placeholders must appear exactly once each, in lowering order; anything else
/// means a string literal in the tree collided with the placeholder text.
pub fn restore_comments(code: &str, comments: &[Comment]) -> Result<String> {
    let indices: Vec<Option<usize>> = PLACEHOLDER_REGEX
        .captures_iter(code)
        .map(|caps| caps[1].parse().ok())
        .collect();
    let in_order = indices.len() == comments.len()
        && indices.iter().enumerate().all(|(i, index)| *index == Some(i));
    if !in_order {
        return Err(Error::render(format!(
            "found {} comment placeholders for {} comments; a string literal collides with the placeholder text",
            indices.len(),
            comments.len()
        )));
    }

    let mut next = comments.iter();
    Ok(PLACEHOLDER_REGEX
        .replace_all(code, |caps: &Captures| match next.next() {
            Some(comment) => comment_text(comment),
            None => caps[0].to_string(),
        })
        .into_owned())
}
