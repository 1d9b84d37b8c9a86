//! # Text Model
//!
//! The in-memory result of parsing: segments of inline text, examples built
//! from them, and the reading groups that make up a [`Document`].
//!
//! Everything here is immutable once built. A [`Document`] is produced fresh by
//! [`crate::build_document`] and only read afterwards.

/// One atomic unit of parsed inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text reproduced verbatim.
    Plain { text: String },
    /// Base text with a reading shown above it.
    Annotated { text: String, annotation: String },
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Segment::Plain { text: text.into() }
    }

    pub fn annotated(text: impl Into<String>, annotation: impl Into<String>) -> Self {
        Segment::Annotated {
            text: text.into(),
            annotation: annotation.into(),
        }
    }

    /// Renders the segment as HTML. Text is emitted as-is, without escaping.
    ///
    /// Annotated segments become `<ruby>BASE<rt>READING</ruby>`. The `<rt>` is
    /// left unclosed to stay byte-compatible with previously generated cards.
    pub fn render_html(&self) -> String {
        match self {
            Segment::Plain { text } => text.clone(),
            Segment::Annotated { text, annotation } => {
                format!("<ruby>{text}<rt>{annotation}</ruby>")
            }
        }
    }
}

/// An ordered sequence of segments parsed from one string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedText {
    segments: Vec<Segment>,
}

impl ParsedText {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Concatenation of every segment's rendering, in order.
    pub fn render_html(&self) -> String {
        self.segments.iter().map(Segment::render_html).collect()
    }
}

impl From<Vec<Segment>> for ParsedText {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

/// A word and its translation, both already annotation-parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Example {
    pub word: ParsedText,
    pub translation: ParsedText,
}

impl Example {
    pub fn new(word: ParsedText, translation: ParsedText) -> Self {
        Self { word, translation }
    }

    /// The placeholder used for a reading header with no example lines.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// The examples listed under one `reading:` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingGroup {
    /// Raw header text. Not annotation-parsed.
    pub reading: String,
    examples: Vec<Example>,
}

impl ReadingGroup {
    pub fn new(reading: impl Into<String>) -> Self {
        Self {
            reading: reading.into(),
            examples: vec![],
        }
    }

    pub fn with_examples(reading: impl Into<String>, examples: Vec<Example>) -> Self {
        Self {
            reading: reading.into(),
            examples,
        }
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub(crate) fn push(&mut self, example: Example) {
        self.examples.push(example);
    }

    /// Closes the group, synthesizing an empty example if none were added so
    /// the group still occupies a table row.
    pub(crate) fn seal(mut self) -> Self {
        if self.examples.is_empty() {
            self.examples.push(Example::empty());
        }
        self
    }
}

/// Reading groups in the order their headers appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    groups: Vec<ReadingGroup>,
}

impl Document {
    pub fn new(groups: Vec<ReadingGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[ReadingGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
