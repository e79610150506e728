//! Card-related types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::NoteField;

/// Everything `cardsInfo` reports about a card.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// The card ID.
    pub card_id: i64,
    /// The note this card was generated from.
    #[serde(default, rename = "note")]
    pub note_id: i64,
    /// The deck this card lives in.
    #[serde(default)]
    pub deck_name: String,
    /// The note type (model) name.
    #[serde(default)]
    pub model_name: String,
    /// Rendered question side (HTML).
    #[serde(default)]
    pub question: String,
    /// Rendered answer side (HTML).
    #[serde(default)]
    pub answer: String,
    /// Field values from the note.
    #[serde(default)]
    pub fields: HashMap<String, NoteField>,
    /// The note type's CSS.
    #[serde(default)]
    pub css: String,
    /// Which field is the sort field.
    #[serde(default)]
    pub field_order: i64,
    /// Template ordinal within the note type.
    #[serde(default)]
    pub ord: i64,
    /// Card state (0 = new, 1 = learning, 2 = review, 3 = relearning).
    #[serde(default, rename = "type")]
    pub card_type: i64,
    /// Queue the card sits in (-1 = suspended, -2/-3 = buried, 0 = new,
    /// 1 = learning, 2 = review, 3 = day learn, 4 = preview).
    #[serde(default)]
    pub queue: i64,
    /// Due position or date; interpretation depends on `card_type`.
    #[serde(default)]
    pub due: i64,
    /// Current interval in days.
    #[serde(default)]
    pub interval: i64,
    /// Ease factor as an integer, e.g. 2500 = 250%.
    #[serde(default, alias = "factor")]
    pub ease_factor: i64,
    /// Number of reviews.
    #[serde(default)]
    pub reps: i64,
    /// Number of lapses.
    #[serde(default)]
    pub lapses: i64,
    /// Reviews left today.
    #[serde(default)]
    pub left: i64,
    /// Last modification timestamp (seconds since epoch).
    #[serde(default, rename = "mod")]
    pub mod_time: i64,
}

/// Modification time of a card, as returned by `cardsModTime`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardModTime {
    /// The card ID.
    pub card_id: i64,
    /// Modification timestamp (seconds since epoch).
    #[serde(rename = "mod")]
    pub mod_time: i64,
}

/// Review ease, the four answer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum Ease {
    /// The card failed (Again).
    Again,
    /// Correct, but hard.
    Hard,
    /// Correct.
    Good,
    /// Correct and easy.
    Easy,
}

impl From<Ease> for u8 {
    fn from(ease: Ease) -> u8 {
        match ease {
            Ease::Again => 1,
            Ease::Hard => 2,
            Ease::Good => 3,
            Ease::Easy => 4,
        }
    }
}

/// One answer for `answerCards`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAnswer {
    /// The card to answer.
    pub card_id: i64,
    /// The ease rating.
    pub ease: Ease,
}

impl CardAnswer {
    /// Create a new card answer.
    pub fn new(card_id: i64, ease: Ease) -> Self {
        Self { card_id, ease }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_serializes_to_button_number() {
        let answer = CardAnswer::new(7, Ease::Easy);
        let body = serde_json::to_value(&answer).unwrap();
        assert_eq!(body, serde_json::json!({"cardId": 7, "ease": 4}));
    }
}
