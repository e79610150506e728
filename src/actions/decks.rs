//! Deck actions.
//!
//! ```no_run
//! use ranki::AnkiClient;
//!
//! # async fn example() -> ranki::Result<()> {
//! let client = AnkiClient::new();
//! let names = client.decks().names().await?;
//! println!("decks: {names:?}");
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::batch::{BatchQueue, Deferred};
use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{DeckConfig, DeckStats};

/// Deck operations on the asynchronous client.
///
/// Obtained via [`AnkiClient::decks()`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

/// Deck operations queued on a batch scope.
///
/// Obtained via [`Batch::decks()`](crate::Batch::decks).
#[derive(Debug)]
pub struct BatchDecks<'a> {
    pub(crate) queue: &'a BatchQueue,
}

#[derive(Serialize)]
pub(crate) struct CreateDeckParams<'a> {
    pub deck: &'a str,
}

#[derive(Serialize)]
pub(crate) struct GetDecksParams<'a> {
    pub cards: &'a [i64],
}

#[derive(Serialize)]
pub(crate) struct ChangeDeckParams<'a> {
    pub cards: &'a [i64],
    pub deck: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteDecksParams<'a> {
    pub decks: &'a [&'a str],
    pub cards_too: bool,
}

#[derive(Serialize)]
pub(crate) struct GetDeckConfigParams<'a> {
    pub deck: &'a str,
}

#[derive(Serialize)]
pub(crate) struct SaveDeckConfigParams<'a> {
    pub config: &'a DeckConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SetDeckConfigIdParams<'a> {
    pub decks: &'a [&'a str],
    pub config_id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CloneDeckConfigParams<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_from: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemoveDeckConfigParams {
    pub config_id: i64,
}

#[derive(Serialize)]
pub(crate) struct GetDeckStatsParams<'a> {
    pub decks: &'a [&'a str],
}

impl DeckActions<'_> {
    /// Get all deck names.
    pub async fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("deckNames").await
    }

    /// Get all deck names with their IDs.
    pub async fn names_and_ids(&self) -> Result<HashMap<String, i64>> {
        self.client.invoke_without_params("deckNamesAndIds").await
    }

    /// Group the given cards by the deck that contains them.
    pub async fn of_cards(&self, card_ids: &[i64]) -> Result<HashMap<String, Vec<i64>>> {
        self.client
            .invoke("getDecks", GetDecksParams { cards: card_ids })
            .await
    }

    /// Create an empty deck, returning its ID.
    ///
    /// Existing decks are left alone; `::` creates nested decks.
    pub async fn create(&self, deck: &str) -> Result<i64> {
        self.client
            .invoke("createDeck", CreateDeckParams { deck })
            .await
    }

    /// Move cards to a deck, creating it if needed.
    pub async fn change(&self, card_ids: &[i64], deck: &str) -> Result<()> {
        self.client
            .invoke_void(
                "changeDeck",
                ChangeDeckParams {
                    cards: card_ids,
                    deck,
                },
            )
            .await
    }

    /// Delete decks. `cards_too` must be `true`; AnkiConnect refuses to
    /// orphan cards.
    pub async fn delete(&self, decks: &[&str], cards_too: bool) -> Result<()> {
        self.client
            .invoke_void("deleteDecks", DeleteDecksParams { decks, cards_too })
            .await
    }

    /// Get the options group of a deck.
    pub async fn config(&self, deck: &str) -> Result<DeckConfig> {
        self.client
            .invoke("getDeckConfig", GetDeckConfigParams { deck })
            .await
    }

    /// Save an options group. Returns `false` when the group ID does
    /// not exist.
    pub async fn save_config(&self, config: &DeckConfig) -> Result<bool> {
        self.client
            .invoke("saveDeckConfig", SaveDeckConfigParams { config })
            .await
    }

    /// Assign an options group to decks.
    pub async fn set_config_id(&self, decks: &[&str], config_id: i64) -> Result<bool> {
        self.client
            .invoke("setDeckConfigId", SetDeckConfigIdParams { decks, config_id })
            .await
    }

    /// Clone an options group, returning the new group's ID.
    ///
    /// Clones the default group when `clone_from` is `None`.
    pub async fn clone_config(&self, name: &str, clone_from: Option<i64>) -> Result<i64> {
        self.client
            .invoke(
                "cloneDeckConfigId",
                CloneDeckConfigParams { name, clone_from },
            )
            .await
    }

    /// Remove an options group.
    pub async fn remove_config(&self, config_id: i64) -> Result<bool> {
        self.client
            .invoke("removeDeckConfigId", RemoveDeckConfigParams { config_id })
            .await
    }

    /// Get card counts for decks, keyed by deck ID.
    pub async fn stats(&self, decks: &[&str]) -> Result<HashMap<String, DeckStats>> {
        self.client
            .invoke("getDeckStats", GetDeckStatsParams { decks })
            .await
    }
}

impl BatchDecks<'_> {
    /// Queue a deck name listing.
    pub fn names(&self) -> Result<Deferred<Vec<String>>> {
        self.queue.push::<(), _>("deckNames", None)
    }

    /// Queue a deck name/ID listing.
    pub fn names_and_ids(&self) -> Result<Deferred<HashMap<String, i64>>> {
        self.queue.push::<(), _>("deckNamesAndIds", None)
    }

    /// Queue a cards-by-deck grouping.
    pub fn of_cards(&self, card_ids: &[i64]) -> Result<Deferred<HashMap<String, Vec<i64>>>> {
        self.queue
            .push("getDecks", Some(GetDecksParams { cards: card_ids }))
    }

    /// Queue a deck creation.
    pub fn create(&self, deck: &str) -> Result<Deferred<i64>> {
        self.queue
            .push("createDeck", Some(CreateDeckParams { deck }))
    }

    /// Queue a card move.
    pub fn change(&self, card_ids: &[i64], deck: &str) -> Result<Deferred<()>> {
        self.queue.push(
            "changeDeck",
            Some(ChangeDeckParams {
                cards: card_ids,
                deck,
            }),
        )
    }

    /// Queue a deck deletion.
    pub fn delete(&self, decks: &[&str], cards_too: bool) -> Result<Deferred<()>> {
        self.queue
            .push("deleteDecks", Some(DeleteDecksParams { decks, cards_too }))
    }

    /// Queue an options group lookup.
    pub fn config(&self, deck: &str) -> Result<Deferred<DeckConfig>> {
        self.queue
            .push("getDeckConfig", Some(GetDeckConfigParams { deck }))
    }

    /// Queue an options group save.
    pub fn save_config(&self, config: &DeckConfig) -> Result<Deferred<bool>> {
        self.queue
            .push("saveDeckConfig", Some(SaveDeckConfigParams { config }))
    }

    /// Queue an options group assignment.
    pub fn set_config_id(&self, decks: &[&str], config_id: i64) -> Result<Deferred<bool>> {
        self.queue.push(
            "setDeckConfigId",
            Some(SetDeckConfigIdParams { decks, config_id }),
        )
    }

    /// Queue an options group clone.
    pub fn clone_config(&self, name: &str, clone_from: Option<i64>) -> Result<Deferred<i64>> {
        self.queue.push(
            "cloneDeckConfigId",
            Some(CloneDeckConfigParams { name, clone_from }),
        )
    }

    /// Queue an options group removal.
    pub fn remove_config(&self, config_id: i64) -> Result<Deferred<bool>> {
        self.queue
            .push("removeDeckConfigId", Some(RemoveDeckConfigParams { config_id }))
    }

    /// Queue a deck stats lookup.
    pub fn stats(&self, decks: &[&str]) -> Result<Deferred<HashMap<String, DeckStats>>> {
        self.queue
            .push("getDeckStats", Some(GetDeckStatsParams { decks }))
    }
}
