pub mod inline;
pub mod lines;

use crate::{error::ConvertError, text::Document};

use lines::{DocumentBuilder, LineRef, NotationLineClassifier, number_lines, split_lines};

/// Builds a [`Document`] from plain-text notation, failing on the first bad line.
pub fn build_document(source: &str) -> Result<Document, ConvertError> {
    build_from_line_refs(split_lines(source))
}

/// Like [`build_document`] for input that is already split into lines.
pub fn build_from_lines<'a, I>(lines: I) -> Result<Document, ConvertError>
where
    I: IntoIterator<Item = &'a str>,
{
    build_from_line_refs(number_lines(lines))
}

fn build_from_line_refs<'a>(
    lines: impl Iterator<Item = LineRef<'a>>,
) -> Result<Document, ConvertError> {
    let classifier = NotationLineClassifier;
    let mut builder = DocumentBuilder::new();

    for lr in lines {
        let lc = classifier.classify(&lr);
        builder.push(&lr, lc)?;
    }

    let doc = builder.finish();
    log::debug!("built document with {} reading group(s)", doc.groups().len());
    Ok(doc)
}
