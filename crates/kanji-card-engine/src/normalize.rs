//! # Rich Text Normalization
//!
//! The card editor stores line breaks as markup (`<div>…</div>`, `<br>`)
//! instead of newlines. Normalization maps that markup back to the plain
//! notation: every opening tag becomes `\n`, every closing tag is dropped.
//!
//! This is a textual substitution over tag-shaped substrings, not an HTML
//! parser. Attributes containing `>` and character entities are not handled.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// Closing or opening tag, matched together in a single pass.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</[^>]*>|<[^/>][^>]*>").expect("tag pattern is valid"));

/// Converts editor markup into newline-delimited notation.
///
/// Text between tags, including annotation brackets, is left untouched.
pub fn normalize_rich_text(html: &str) -> String {
    TAG.replace_all(html, |caps: &Captures<'_>| {
        if caps[0].starts_with("</") { "" } else { "\n" }
    })
    .into_owned()
}
