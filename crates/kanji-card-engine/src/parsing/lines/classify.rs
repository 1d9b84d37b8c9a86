use super::{
    kinds::{ExampleLine, ReadingHeader},
    split::LineRef,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of document parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    /// `reading :` with the trimmed reading text.
    Header { reading: &'a str },
    /// `* word - translation` with both parts trimmed, not yet annotation-parsed.
    Example {
        word: &'a str,
        translation: &'a str,
    },
    /// Anything else.
    Invalid,
}

/// Classifies individual lines for the document building phase.
pub struct NotationLineClassifier;

impl NotationLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: blank, then header, then example.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let text = lr.text;
        let class = if text.trim().is_empty() {
            LineClass::Blank
        } else if let Some(reading) = ReadingHeader::match_line(text) {
            LineClass::Header { reading }
        } else if let Some((word, translation)) = ExampleLine::match_line(text) {
            LineClass::Example { word, translation }
        } else {
            LineClass::Invalid
        };
        log::trace!("line {}: {class:?}", lr.number);
        class
    }
}
