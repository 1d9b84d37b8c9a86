use std::sync::LazyLock;

use regex::Regex;

static EXAMPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\*\s*(.*\S)\s*-\s*(.*\S)\s*$").expect("example line pattern is valid")
});

/// A `* word - translation` line.
pub struct ExampleLine;

impl ExampleLine {
    /// Returns `(word, translation)`, both trimmed, if `line` is an example.
    ///
    /// The word part is greedy: with several `-` the split is at the last one.
    pub fn match_line(line: &str) -> Option<(&str, &str)> {
        let caps = EXAMPLE.captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}
