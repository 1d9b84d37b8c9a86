use crate::{
    error::{ConvertError, MalformedAnnotation},
    parsing::inline::parse_annotated,
    text::{Document, Example, ReadingGroup},
};

use super::{classify::LineClass, split::LineRef};

pub struct DocumentBuilder {
    current: Option<ReadingGroup>,
    out: Vec<ReadingGroup>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            current: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, lr: &LineRef<'_>, class: LineClass<'_>) -> Result<(), ConvertError> {
        match class {
            LineClass::Blank => Ok(()),
            LineClass::Header { reading } => {
                self.flush_group();
                self.current = Some(ReadingGroup::new(reading));
                Ok(())
            }
            LineClass::Example { word, translation } => {
                self.add_example(lr, word, translation)
            }
            LineClass::Invalid => Err(ConvertError::UnrecognizedLine {
                line: lr.number,
                text: lr.text.to_string(),
            }),
        }
    }

    pub fn finish(mut self) -> Document {
        // EOF flush
        self.flush_group();
        Document::new(self.out)
    }

    fn add_example(
        &mut self,
        lr: &LineRef<'_>,
        word: &str,
        translation: &str,
    ) -> Result<(), ConvertError> {
        let Some(group) = self.current.as_mut() else {
            return Err(ConvertError::ExampleBeforeReading {
                line: lr.number,
                text: lr.text.to_string(),
            });
        };

        let at_line = |source: MalformedAnnotation| ConvertError::MalformedAnnotation {
            line: lr.number,
            source,
        };
        let word = parse_annotated(word).map_err(&at_line)?;
        let translation = parse_annotated(translation).map_err(&at_line)?;
        group.push(Example::new(word, translation));
        Ok(())
    }

    fn flush_group(&mut self) {
        if let Some(group) = self.current.take() {
            self.out.push(group.seal());
        }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
