//! Ordering specification for the card browser.

use serde::Serialize;

/// Sort direction for browser results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Column the browser sorts by.
///
/// The serialized names are the column identifiers Anki's browser uses
/// internally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum BrowserColumn {
    #[serde(rename = "custom")]
    Custom,
    #[serde(rename = "question")]
    Question,
    #[serde(rename = "answer")]
    Answer,
    #[serde(rename = "deck")]
    Deck,
    #[serde(rename = "template")]
    Template,
    #[default]
    #[serde(rename = "cardDue")]
    Due,
    #[serde(rename = "cardEase")]
    Ease,
    #[serde(rename = "cardIvl")]
    Interval,
    #[serde(rename = "cardLapses")]
    Lapses,
    #[serde(rename = "cardReps")]
    Reps,
    #[serde(rename = "cardMod")]
    CardModified,
    #[serde(rename = "note")]
    NoteType,
    #[serde(rename = "noteCrt")]
    NoteCreated,
    #[serde(rename = "noteMod")]
    NoteModified,
    #[serde(rename = "noteFld")]
    SortField,
    #[serde(rename = "noteTags")]
    Tags,
    #[serde(rename = "originalPosition")]
    OriginalPosition,
    #[serde(rename = "stability")]
    Stability,
    #[serde(rename = "difficulty")]
    Difficulty,
    #[serde(rename = "retrievability")]
    Retrievability,
}

/// How `guiBrowse` should reorder the cards it shows.
///
/// Defaults to sorting by due date, ascending.
///
/// # Example
///
/// ```
/// use ranki::{BrowserColumn, Reordering};
///
/// let order = Reordering::by(BrowserColumn::Lapses).descending();
/// assert_eq!(
///     serde_json::to_value(&order).unwrap(),
///     serde_json::json!({"order": "descending", "columnId": "cardLapses"})
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Reordering {
    /// Sort direction.
    pub order: SortOrder,
    /// Column to sort by.
    #[serde(rename = "columnId")]
    pub column_id: BrowserColumn,
}

impl Reordering {
    /// Sort ascending by the given column.
    pub fn by(column_id: BrowserColumn) -> Self {
        Self {
            order: SortOrder::Ascending,
            column_id,
        }
    }

    /// Flip the direction to descending.
    pub fn descending(mut self) -> Self {
        self.order = SortOrder::Descending;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_due_ascending() {
        let body = serde_json::to_value(Reordering::default()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"order": "ascending", "columnId": "cardDue"})
        );
    }
}
