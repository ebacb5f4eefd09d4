//! Output-time escaping of free text.
//!
//! Stored rows keep whatever the client sent; every bookmark leaving the API goes
//! through [`sanitize_bookmark`] first.

use crate::database::models::bookmarks;

/// Escapes characters a browser would read as markup.
///
/// `&` is left alone so the function is idempotent: its output contains none of the
/// characters it replaces.
pub fn sanitize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub fn sanitize_bookmark(bookmark: bookmarks::Model) -> bookmarks::Model {
    bookmarks::Model {
        title: sanitize_text(&bookmark.title),
        description: sanitize_text(&bookmark.description),
        ..bookmark
    }
}
