//! Domain types for AnkiConnect.
//!
//! Pass-through value objects mirroring the API's vocabulary: cards,
//! decks, notes, and the browser ordering specification. Nothing here
//! is owned or cached by the library; these are request and response
//! payloads.

mod browse;
mod card;
mod deck;
mod note;

pub use browse::{BrowserColumn, Reordering, SortOrder};
pub use card::{CardAnswer, CardInfo, CardModTime, Ease};
pub use deck::{DeckConfig, DeckStats, LapseConfig, NewCardConfig, ReviewConfig};
pub use note::{
    DuplicateScope, DuplicateScopeOptions, MediaAttachment, Note, NoteBuilder, NoteField,
    NoteInfo, NoteOptions,
};
