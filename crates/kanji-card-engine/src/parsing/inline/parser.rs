use crate::{
    error::MalformedAnnotation,
    text::{ParsedText, Segment},
};

use super::{cursor::Cursor, kinds::Annotation};

/// Parses a word or translation string into [`Segment`]s.
///
/// Text outside annotations becomes `Segment::Plain`; each `[text|reading]`
/// becomes `Segment::Annotated`. Empty plain runs are not emitted, so an
/// empty input yields an empty [`ParsedText`].
///
/// # Errors
/// Returns [`MalformedAnnotation`] with the remaining text when a `[` is not
/// followed by a non-empty base, a `|`, and then a `]`.
pub fn parse_annotated(source: &str) -> Result<ParsedText, MalformedAnnotation> {
    let mut cur = Cursor::new(source);
    let mut out = vec![];

    while !cur.eof() {
        let Some(open) = cur.find(Annotation::OPEN) else {
            out.push(Segment::plain(cur.rest()));
            break;
        };

        if open > cur.pos() {
            out.push(Segment::plain(cur.slice(cur.pos(), open)));
            cur.bump_to(open);
        }

        out.push(parse_annotation(&mut cur)?);
    }

    Ok(ParsedText::new(out))
}

/// Parses one annotation with the cursor sitting on its `[`.
///
/// The first `|` and the first `]` after the `[` are used, so base text can
/// contain neither.
fn parse_annotation(cur: &mut Cursor<'_>) -> Result<Segment, MalformedAnnotation> {
    let start = cur.pos();
    let separator = cur.find(Annotation::SEPARATOR);
    let close = cur.find(Annotation::CLOSE);

    match (separator, close) {
        (Some(sep), Some(close)) if sep > start + 1 && close > sep => {
            let segment = Segment::annotated(cur.slice(start + 1, sep), cur.slice(sep + 1, close));
            cur.bump_to(close + 1);
            Ok(segment)
        }
        _ => Err(MalformedAnnotation {
            remainder: cur.rest().to_string(),
        }),
    }
}
