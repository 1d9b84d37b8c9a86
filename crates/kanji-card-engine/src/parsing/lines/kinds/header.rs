use std::sync::LazyLock;

use regex::Regex;

// The first character may not be `*`, keeping headers disjoint from examples.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^\s*](?:.*\S)?)\s*:\s*$").expect("reading header pattern is valid")
});

/// A `reading :` line opening a new group.
pub struct ReadingHeader;

impl ReadingHeader {
    /// Returns the reading text, trimmed, if `line` is a header.
    pub fn match_line(line: &str) -> Option<&str> {
        HEADER
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
