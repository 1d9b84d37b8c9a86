//! Flashcard host integration for kanji-card
//!
//! A thin adapter between a flashcard application and the engine. The host
//! supplies its note storage through [`Note`] and its note type catalogue
//! through [`NoteTypeRegistry`]; this crate declares the note type and reacts
//! when editing focus leaves the raw readings field.

use kanji_card_config::{Config, FieldNames};
use kanji_card_engine::{ConvertError, convert};

// ============ Errors ============

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("Note type registration failed: {reason}")]
    Registry { reason: String },
}

// ============ Note Type ============

/// One card template of a note type, in the host's `{{Field}}` syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplate {
    pub name: String,
    pub front: String,
    pub back: String,
}

/// Everything the host needs to create the note type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTypeSpec {
    pub name: String,
    /// Field names in display order.
    pub fields: Vec<String>,
    pub templates: Vec<CardTemplate>,
}

impl NoteTypeSpec {
    pub fn new(name: impl Into<String>, fields: &FieldNames) -> Self {
        let template = CardTemplate {
            name: "Recognition".to_string(),
            front: format!("{{{{{}}}}}", fields.kanji),
            back: format!(
                "{{{{FrontSide}}}}<hr id=answer>{{{{{}}}}}<br>{{{{{}}}}}",
                fields.meaning, fields.processed_readings
            ),
        };

        Self {
            name: name.into(),
            fields: fields.all().iter().map(|f| f.to_string()).collect(),
            templates: vec![template],
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.note_type.clone(), &config.fields)
    }
}

/// The host's catalogue of note types.
pub trait NoteTypeRegistry {
    fn has_note_type(&self, name: &str) -> bool;
    fn add_note_type(&mut self, spec: &NoteTypeSpec) -> Result<(), HostError>;
}

/// Adds the note type unless one with the same name exists.
///
/// Returns whether it was added.
pub fn register_note_type<R: NoteTypeRegistry>(
    registry: &mut R,
    spec: &NoteTypeSpec,
) -> Result<bool, HostError> {
    if registry.has_note_type(&spec.name) {
        log::debug!("note type '{}' already registered", spec.name);
        return Ok(false);
    }
    registry.add_note_type(spec)?;
    log::info!("registered note type '{}'", spec.name);
    Ok(true)
}

// ============ Editor Hook ============

/// A single note as exposed by the host editor.
pub trait Note {
    /// Field names in the order the editor indexes them.
    fn field_names(&self) -> Vec<String>;
    fn field(&self, name: &str) -> Option<&str>;
    fn set_field(&mut self, name: &str, value: String);
}

/// Regenerates the processed readings whenever the raw readings field loses focus.
pub struct ReadingsHook {
    fields: FieldNames,
}

impl ReadingsHook {
    pub fn new(fields: FieldNames) -> Self {
        Self { fields }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.fields.clone())
    }

    /// Handles focus leaving field `field_index` of `note`.
    ///
    /// `changed` is the flag accumulated by earlier handlers; it is returned
    /// as-is unless this call writes to the note, in which case the result is
    /// `true` and the editor should reload. On a conversion error the note is
    /// left untouched.
    pub fn on_focus_lost<N: Note>(
        &self,
        changed: bool,
        note: &mut N,
        field_index: usize,
    ) -> Result<bool, HostError> {
        let names = note.field_names();
        let raw_name = self.fields.raw_readings.as_str();
        let processed_name = self.fields.processed_readings.as_str();

        if names.get(field_index).map(String::as_str) != Some(raw_name) {
            return Ok(changed);
        }
        if !names.iter().any(|n| n == processed_name) {
            return Ok(changed);
        }
        let Some(raw) = note.field(raw_name) else {
            return Ok(changed);
        };

        let html = convert(raw).inspect_err(|e| {
            log::warn!("not updating '{processed_name}': {e}");
        })?;

        if note.field(processed_name) == Some(html.as_str()) {
            return Ok(changed);
        }

        note.set_field(processed_name, html);
        log::info!("updated '{processed_name}' from '{raw_name}'");
        Ok(true)
    }
}
