//! Note-related types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A new note to add to the collection.
///
/// Field values are HTML; field names must match the note type's field
/// names exactly, including case. [`NoteBuilder`] is the ergonomic way
/// to put one together.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// The deck to add the note to.
    pub deck_name: String,
    /// The note type (model) name.
    pub model_name: String,
    /// Field values, keyed by field name.
    pub fields: HashMap<String, String>,
    /// Tags for the note.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Audio to download into the media folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Vec<MediaAttachment>>,
    /// Video to download into the media folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Vec<MediaAttachment>>,
    /// Pictures to download into the media folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<Vec<MediaAttachment>>,
    /// Duplicate handling options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<NoteOptions>,
}

/// A media attachment referenced from a note field.
///
/// Exactly one of `url`, `data`, or `path` supplies the content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttachment {
    /// URL to download the media from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Base64-encoded media data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Absolute path to read the media from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Filename to store the media under.
    pub filename: String,
    /// Fields the media reference is inserted into.
    pub fields: Vec<String>,
    /// Skip the download when a file with this hash already exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_hash: Option<String>,
}

/// Duplicate handling for `addNote`/`addNotes`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    /// Allow adding a duplicate note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_duplicate: Option<bool>,
    /// Where to look for duplicates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_scope: Option<DuplicateScope>,
    /// Fine-grained duplicate scope settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_scope_options: Option<DuplicateScopeOptions>,
}

/// Scope of the duplicate check.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum DuplicateScope {
    /// Check only the target deck.
    #[serde(rename = "deck")]
    Deck,
    /// Check the whole collection.
    #[serde(rename = "all")]
    AllDecks,
}

/// Settings refining a [`DuplicateScope`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateScopeOptions {
    /// Deck to check for duplicates in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_name: Option<String>,
    /// Also check child decks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_children: Option<bool>,
    /// Check every note type, not just the note's own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_all_models: Option<bool>,
}

/// An existing note, as returned by `notesInfo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    /// The note ID.
    pub note_id: i64,
    /// The note type (model) name.
    #[serde(default)]
    pub model_name: String,
    /// Tags on the note.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Field values and their order.
    #[serde(default)]
    pub fields: HashMap<String, NoteField>,
    /// Cards generated from this note.
    #[serde(default)]
    pub cards: Vec<i64>,
    /// Last modification timestamp (seconds since epoch).
    #[serde(default, rename = "mod")]
    pub mod_time: i64,
}

/// A field value with its display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteField {
    /// The field's HTML content.
    pub value: String,
    /// The field's position in the note type.
    #[serde(default)]
    pub order: i64,
}

/// Builder for [`Note`].
///
/// # Example
///
/// ```
/// use ranki::NoteBuilder;
///
/// let note = NoteBuilder::new("Italian", "Basic")
///     .field("Front", "mangiare")
///     .field("Back", "to eat")
///     .tag("verb")
///     .build();
///
/// assert_eq!(note.deck_name, "Italian");
/// assert_eq!(note.fields["Front"], "mangiare");
/// ```
#[derive(Debug, Clone)]
pub struct NoteBuilder {
    note: Note,
}

impl NoteBuilder {
    /// Start a note for the given deck and note type.
    pub fn new(deck: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            note: Note {
                deck_name: deck.into(),
                model_name: model.into(),
                fields: HashMap::new(),
                tags: Vec::new(),
                audio: None,
                video: None,
                picture: None,
                options: None,
            },
        }
    }

    /// Set a field value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.note.fields.insert(name.into(), value.into());
        self
    }

    /// Add a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.note.tags.push(tag.into());
        self
    }

    /// Attach a picture.
    pub fn picture(mut self, attachment: MediaAttachment) -> Self {
        self.note.picture.get_or_insert_with(Vec::new).push(attachment);
        self
    }

    /// Attach audio.
    pub fn audio(mut self, attachment: MediaAttachment) -> Self {
        self.note.audio.get_or_insert_with(Vec::new).push(attachment);
        self
    }

    /// Allow the note even when it duplicates an existing one.
    pub fn allow_duplicate(mut self) -> Self {
        self.note
            .options
            .get_or_insert_with(NoteOptions::default)
            .allow_duplicate = Some(true);
        self
    }

    /// Restrict the duplicate check to the given scope.
    pub fn duplicate_scope(mut self, scope: DuplicateScope) -> Self {
        self.note
            .options
            .get_or_insert_with(NoteOptions::default)
            .duplicate_scope = Some(scope);
        self
    }

    /// Finish the note.
    pub fn build(self) -> Note {
        self.note
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tags_are_omitted_from_the_body() {
        let note = NoteBuilder::new("Default", "Basic")
            .field("Front", "hello")
            .build();
        let body = serde_json::to_value(&note).unwrap();
        assert!(body.get("tags").is_none());
        assert!(body.get("options").is_none());
    }

    #[test]
    fn duplicate_scope_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_value(DuplicateScope::Deck).unwrap(),
            serde_json::json!("deck")
        );
        assert_eq!(
            serde_json::to_value(DuplicateScope::AllDecks).unwrap(),
            serde_json::json!("all")
        );
    }
}
