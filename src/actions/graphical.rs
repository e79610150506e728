//! Actions that drive Anki's graphical interface.
//!
//! These operate on whatever the user currently has open: the browser,
//! the reviewer, the deck list. Most of them return a flag telling you
//! whether Anki was in a state where the operation made sense.
//!
//! # Example
//!
//! ```no_run
//! use ranki::{AnkiClient, BrowserColumn, Reordering};
//!
//! # async fn example() -> ranki::Result<()> {
//! let client = AnkiClient::new();
//!
//! // open the browser sorted by lapse count, worst first
//! let order = Reordering::by(BrowserColumn::Lapses).descending();
//! let cards = client.gui().browse_ordered("deck:Japanese", &order).await?;
//! println!("browser shows {} cards", cards.len());
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::batch::{BatchQueue, Deferred};
use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{Ease, Note, Reordering};

/// GUI operations on the asynchronous client.
///
/// Obtained via [`AnkiClient::gui()`].
#[derive(Debug)]
pub struct GuiActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

/// GUI operations queued on a batch scope.
///
/// Obtained via [`Batch::gui()`](crate::Batch::gui).
#[derive(Debug)]
pub struct BatchGui<'a> {
    pub(crate) queue: &'a BatchQueue,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrowseParams<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_cards: Option<&'a Reordering>,
}

#[derive(Serialize)]
pub(crate) struct SelectCardParams {
    pub card: i64,
}

#[derive(Serialize)]
pub(crate) struct EditNoteParams {
    pub note: i64,
}

#[derive(Serialize)]
pub(crate) struct AnswerCardParams {
    pub ease: Ease,
}

#[derive(Serialize)]
pub(crate) struct DeckNameParams<'a> {
    pub name: &'a str,
}

#[derive(Serialize)]
pub(crate) struct ImportFileParams<'a> {
    pub path: &'a str,
}

#[derive(Serialize)]
pub(crate) struct AddCardsParams<'a> {
    pub note: &'a Note,
}

/// The card currently shown in the reviewer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCard {
    /// The card ID.
    pub card_id: i64,
    /// Deck the card belongs to.
    #[serde(default)]
    pub deck_name: String,
    /// Note type name.
    #[serde(default)]
    pub model_name: String,
    /// Rendered question side (HTML).
    #[serde(default)]
    pub question: String,
    /// Rendered answer side (HTML).
    #[serde(default)]
    pub answer: String,
    /// Field values.
    #[serde(default)]
    pub fields: serde_json::Value,
    /// Ease values of the currently shown answer buttons.
    #[serde(default)]
    pub buttons: Vec<i64>,
    /// Next interval shown on each button.
    #[serde(default)]
    pub next_reviews: Vec<String>,
}

impl GuiActions<'_> {
    /// Open the card browser with a search query.
    ///
    /// Returns the IDs of the cards the browser now shows.
    pub async fn browse(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke(
                "guiBrowse",
                BrowseParams {
                    query,
                    reorder_cards: None,
                },
            )
            .await
    }

    /// Open the card browser with a search query and a sort order.
    pub async fn browse_ordered(&self, query: &str, order: &Reordering) -> Result<Vec<i64>> {
        self.client
            .invoke(
                "guiBrowse",
                BrowseParams {
                    query,
                    reorder_cards: Some(order),
                },
            )
            .await
    }

    /// Select a card in the open browser.
    ///
    /// Returns `false` when no browser window is open.
    pub async fn select_card(&self, card_id: i64) -> Result<bool> {
        self.client
            .invoke("guiSelectCard", SelectCardParams { card: card_id })
            .await
    }

    /// Get the notes currently selected in the browser.
    pub async fn selected_notes(&self) -> Result<Vec<i64>> {
        self.client.invoke_without_params("guiSelectedNotes").await
    }

    /// Open the Add Cards dialog prefilled with a note.
    ///
    /// Returns the ID the note will get once the user saves it.
    pub async fn add_cards(&self, note: &Note) -> Result<i64> {
        self.client.invoke("guiAddCards", AddCardsParams { note }).await
    }

    /// Open the note editor for a note.
    pub async fn edit_note(&self, note_id: i64) -> Result<()> {
        self.client
            .invoke_void("guiEditNote", EditNoteParams { note: note_id })
            .await
    }

    /// Get the card currently shown in the reviewer.
    ///
    /// `None` when Anki is not in review mode.
    pub async fn current_card(&self) -> Result<Option<CurrentCard>> {
        self.client
            .invoke_nullable_without_params("guiCurrentCard")
            .await
    }

    /// Start or reset the answer timer for the current card.
    pub async fn start_card_timer(&self) -> Result<bool> {
        self.client.invoke_without_params("guiStartCardTimer").await
    }

    /// Show the question side of the current card.
    pub async fn show_question(&self) -> Result<bool> {
        self.client.invoke_without_params("guiShowQuestion").await
    }

    /// Show the answer side of the current card.
    pub async fn show_answer(&self) -> Result<bool> {
        self.client.invoke_without_params("guiShowAnswer").await
    }

    /// Answer the current card.
    ///
    /// The answer side must be showing; returns `false` otherwise.
    pub async fn answer_card(&self, ease: Ease) -> Result<bool> {
        self.client
            .invoke("guiAnswerCard", AnswerCardParams { ease })
            .await
    }

    /// Undo the last action.
    pub async fn undo(&self) -> Result<bool> {
        self.client.invoke_without_params("guiUndo").await
    }

    /// Open the overview screen for a deck.
    pub async fn deck_overview(&self, name: &str) -> Result<bool> {
        self.client
            .invoke("guiDeckOverview", DeckNameParams { name })
            .await
    }

    /// Open the deck list.
    pub async fn deck_browser(&self) -> Result<()> {
        self.client
            .invoke_void_without_params("guiDeckBrowser")
            .await
    }

    /// Start reviewing a deck.
    pub async fn deck_review(&self, name: &str) -> Result<bool> {
        self.client
            .invoke("guiDeckReview", DeckNameParams { name })
            .await
    }

    /// Open the import dialog for a file.
    pub async fn import_file(&self, path: &str) -> Result<()> {
        self.client
            .invoke_void("guiImportFile", ImportFileParams { path })
            .await
    }

    /// Run a database check.
    ///
    /// Always reports `true`; problems found during the check are
    /// surfaced in the Anki UI, not here.
    pub async fn check_database(&self) -> Result<bool> {
        self.client.invoke_without_params("guiCheckDatabase").await
    }

    /// Schedule a graceful Anki shutdown.
    ///
    /// Returns as soon as the request is accepted; Anki closes
    /// afterwards.
    pub async fn exit_anki(&self) -> Result<()> {
        self.client.invoke_void_without_params("guiExitAnki").await
    }
}

impl BatchGui<'_> {
    /// Queue a browser open.
    pub fn browse(&self, query: &str) -> Result<Deferred<Vec<i64>>> {
        self.queue.push(
            "guiBrowse",
            Some(BrowseParams {
                query,
                reorder_cards: None,
            }),
        )
    }

    /// Queue a browser open with a sort order.
    pub fn browse_ordered(&self, query: &str, order: &Reordering) -> Result<Deferred<Vec<i64>>> {
        self.queue.push(
            "guiBrowse",
            Some(BrowseParams {
                query,
                reorder_cards: Some(order),
            }),
        )
    }

    /// Queue a browser card selection.
    pub fn select_card(&self, card_id: i64) -> Result<Deferred<bool>> {
        self.queue
            .push("guiSelectCard", Some(SelectCardParams { card: card_id }))
    }

    /// Queue a selected-notes lookup.
    pub fn selected_notes(&self) -> Result<Deferred<Vec<i64>>> {
        self.queue.push::<(), _>("guiSelectedNotes", None)
    }

    /// Queue an Add Cards dialog open.
    pub fn add_cards(&self, note: &Note) -> Result<Deferred<i64>> {
        self.queue.push("guiAddCards", Some(AddCardsParams { note }))
    }

    /// Queue a note editor open.
    pub fn edit_note(&self, note_id: i64) -> Result<Deferred<()>> {
        self.queue
            .push("guiEditNote", Some(EditNoteParams { note: note_id }))
    }

    /// Queue a current-card lookup.
    pub fn current_card(&self) -> Result<Deferred<Option<CurrentCard>>> {
        self.queue.push::<(), _>("guiCurrentCard", None)
    }

    /// Queue a card timer start.
    pub fn start_card_timer(&self) -> Result<Deferred<bool>> {
        self.queue.push::<(), _>("guiStartCardTimer", None)
    }

    /// Queue an answer for the current card.
    pub fn answer_card(&self, ease: Ease) -> Result<Deferred<bool>> {
        self.queue
            .push("guiAnswerCard", Some(AnswerCardParams { ease }))
    }

    /// Queue a question reveal.
    pub fn show_question(&self) -> Result<Deferred<bool>> {
        self.queue.push::<(), _>("guiShowQuestion", None)
    }

    /// Queue an answer reveal.
    pub fn show_answer(&self) -> Result<Deferred<bool>> {
        self.queue.push::<(), _>("guiShowAnswer", None)
    }

    /// Queue an undo.
    pub fn undo(&self) -> Result<Deferred<bool>> {
        self.queue.push::<(), _>("guiUndo", None)
    }

    /// Queue a deck overview open.
    pub fn deck_overview(&self, name: &str) -> Result<Deferred<bool>> {
        self.queue
            .push("guiDeckOverview", Some(DeckNameParams { name }))
    }

    /// Queue a deck review start.
    pub fn deck_review(&self, name: &str) -> Result<Deferred<bool>> {
        self.queue
            .push("guiDeckReview", Some(DeckNameParams { name }))
    }

    /// Queue a deck list open.
    pub fn deck_browser(&self) -> Result<Deferred<()>> {
        self.queue.push::<(), _>("guiDeckBrowser", None)
    }

    /// Queue an import dialog open.
    pub fn import_file(&self, path: &str) -> Result<Deferred<()>> {
        self.queue
            .push("guiImportFile", Some(ImportFileParams { path }))
    }

    /// Queue a database check.
    pub fn check_database(&self) -> Result<Deferred<bool>> {
        self.queue.push::<(), _>("guiCheckDatabase", None)
    }

    /// Queue an Anki shutdown.
    pub fn exit_anki(&self) -> Result<Deferred<()>> {
        self.queue.push::<(), _>("guiExitAnki", None)
    }
}
