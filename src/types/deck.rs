//! Deck-related types.

use serde::{Deserialize, Serialize};

/// Per-deck counts, as returned by `getDeckStats`.
///
/// The deck ID is the key of the map `getDeckStats` returns, not a
/// field here.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckStats {
    /// The deck name.
    pub name: String,
    /// New cards waiting.
    #[serde(default, alias = "newCount", alias = "new_count")]
    pub new_count: i64,
    /// Cards in learning.
    #[serde(default, alias = "learnCount", alias = "learn_count")]
    pub learn_count: i64,
    /// Cards due for review.
    #[serde(default, alias = "reviewCount", alias = "review_count")]
    pub review_count: i64,
    /// Total cards in the deck.
    #[serde(default, alias = "totalInDeck", alias = "total_in_deck")]
    pub total_in_deck: i64,
}

/// A deck options group, as returned by `getDeckConfig`.
///
/// Only the commonly edited settings are typed; everything else the
/// server sent is kept in `extra` so `saveDeckConfig` round-trips the
/// full group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckConfig {
    /// The options group ID.
    pub id: i64,
    /// The options group name.
    pub name: String,
    /// Seconds allowed per answer.
    #[serde(default)]
    pub max_taken: i64,
    /// Whether to replay question audio with the answer.
    #[serde(default)]
    pub replayq: bool,
    /// Whether audio plays automatically.
    #[serde(default)]
    pub autoplay: bool,
    /// Answer timer setting.
    #[serde(default)]
    pub timer: i64,
    /// New card settings.
    pub new: NewCardConfig,
    /// Review settings.
    pub rev: ReviewConfig,
    /// Lapse settings.
    pub lapse: LapseConfig,
    /// Untyped remainder of the options group.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// New-card settings inside a [`DeckConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCardConfig {
    /// Learning steps in minutes.
    #[serde(default)]
    pub delays: Vec<f64>,
    /// New card order (0 = random, 1 = due).
    #[serde(default)]
    pub order: i64,
    /// Starting ease factor, e.g. 2500 = 250%.
    #[serde(default)]
    pub initial_factor: i64,
    /// Graduating and easy intervals in days.
    #[serde(default)]
    pub ints: Vec<i64>,
    /// New cards per day.
    #[serde(default)]
    pub per_day: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Review settings inside a [`DeckConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewConfig {
    /// Reviews per day.
    #[serde(default)]
    pub per_day: i64,
    /// Easy bonus multiplier.
    #[serde(default)]
    pub ease4: f64,
    /// Maximum interval in days.
    #[serde(default)]
    pub max_ivl: i64,
    /// Hard interval multiplier.
    #[serde(default)]
    pub hard_factor: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Lapse settings inside a [`DeckConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LapseConfig {
    /// Relearning steps in minutes.
    #[serde(default)]
    pub delays: Vec<f64>,
    /// Lapses before a card becomes a leech.
    #[serde(default)]
    pub leech_fails: i64,
    /// Leech action (0 = suspend, 1 = tag only).
    #[serde(default)]
    pub leech_action: i64,
    /// Interval multiplier applied on lapse.
    #[serde(default)]
    pub mult: f64,
    /// Minimum interval after a lapse, in days.
    #[serde(default)]
    pub min_int: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
