use thiserror::Error;

/// An opening `[` that is not followed by a non-empty base, a `|` and a `]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bad annotation: {remainder}")]
pub struct MalformedAnnotation {
    /// The unparsed text starting at the offending `[`.
    pub remainder: String,
}

/// Errors that abort a conversion. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("line {line}: {source}")]
    MalformedAnnotation {
        line: usize,
        #[source]
        source: MalformedAnnotation,
    },

    #[error("line {line}: example before any reading header: {text}")]
    ExampleBeforeReading { line: usize, text: String },

    #[error("line {line}: unexpected line: {text}")]
    UnrecognizedLine { line: usize, text: String },
}

impl ConvertError {
    /// The 1-based line number the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            ConvertError::MalformedAnnotation { line, .. }
            | ConvertError::ExampleBeforeReading { line, .. }
            | ConvertError::UnrecognizedLine { line, .. } => *line,
        }
    }
}
