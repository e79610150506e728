//! Card lookup and scheduling-state actions.
//!
//! Cards are generated from notes; one note can produce several cards.
//! Lookup returns card IDs, and [`CardActions::info`] expands IDs into
//! full card details.
//!
//! # Example
//!
//! ```no_run
//! use ranki::AnkiClient;
//!
//! # async fn example() -> ranki::Result<()> {
//! let client = AnkiClient::new();
//!
//! let due = client.cards().find("deck:Japanese is:due").await?;
//! let info = client.cards().info(&due).await?;
//! for card in info {
//!     println!("card {} has lapsed {} times", card.card_id, card.lapses);
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::batch::{BatchQueue, Deferred};
use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{CardAnswer, CardInfo, CardModTime};

/// Card operations on the asynchronous client.
///
/// Obtained via [`AnkiClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

/// Card operations queued on a batch scope.
///
/// Obtained via [`Batch::cards()`](crate::Batch::cards). Each method
/// records the call and returns a [`Deferred`] handle in place of the
/// result.
#[derive(Debug)]
pub struct BatchCards<'a> {
    pub(crate) queue: &'a BatchQueue,
}

// Parameter structs, shared by the async, blocking, and batch surfaces.
#[derive(Serialize)]
pub(crate) struct FindCardsParams<'a> {
    pub query: &'a str,
}

#[derive(Serialize)]
pub(crate) struct CardsParams<'a> {
    pub cards: &'a [i64],
}

#[derive(Serialize)]
pub(crate) struct SuspendedParams {
    pub card: i64,
}

#[derive(Serialize)]
pub(crate) struct GetIntervalsParams<'a> {
    pub cards: &'a [i64],
    pub complete: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SetEaseFactorsParams<'a> {
    pub cards: &'a [i64],
    pub ease_factors: &'a [i64],
}

#[derive(Serialize)]
pub(crate) struct AnswerCardsParams<'a> {
    pub answers: &'a [CardAnswer],
}

/// Quote a deck name into a `deck:"…"` search term.
pub(crate) fn deck_query(deck: &str) -> String {
    format!("deck:\"{deck}\"")
}

impl CardActions<'_> {
    /// Find cards matching a search query.
    ///
    /// Uses Anki's search syntax: `deck:Name`, `is:due`, `is:new`,
    /// `is:suspended`, `-is:suspended`, `rated:1`, and so on.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ranki::AnkiClient;
    /// # async fn example() -> ranki::Result<()> {
    /// let client = AnkiClient::new();
    /// let cards = client.cards().find("deck:Japanese is:due").await?;
    /// println!("{} due cards", cards.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("findCards", FindCardsParams { query })
            .await
    }

    /// Find all cards in a deck.
    ///
    /// Equivalent to [`find`](Self::find) with a quoted `deck:"…"`
    /// query, so deck names with spaces work as-is.
    pub async fn in_deck(&self, deck: &str) -> Result<Vec<i64>> {
        self.find(&deck_query(deck)).await
    }

    /// Get detailed information about cards.
    pub async fn info(&self, card_ids: &[i64]) -> Result<Vec<CardInfo>> {
        self.client
            .invoke("cardsInfo", CardsParams { cards: card_ids })
            .await
    }

    /// Map card IDs to the IDs of the notes they were generated from.
    pub async fn to_notes(&self, card_ids: &[i64]) -> Result<Vec<i64>> {
        self.client
            .invoke("cardsToNotes", CardsParams { cards: card_ids })
            .await
    }

    /// Get modification times for cards.
    pub async fn mod_time(&self, card_ids: &[i64]) -> Result<Vec<CardModTime>> {
        self.client
            .invoke("cardsModTime", CardsParams { cards: card_ids })
            .await
    }

    /// Suspend cards so they no longer come up in reviews.
    ///
    /// Returns `true` when at least one card changed state.
    pub async fn suspend(&self, card_ids: &[i64]) -> Result<bool> {
        self.client
            .invoke("suspend", CardsParams { cards: card_ids })
            .await
    }

    /// Unsuspend cards.
    ///
    /// Returns `true` when at least one card changed state.
    pub async fn unsuspend(&self, card_ids: &[i64]) -> Result<bool> {
        self.client
            .invoke("unsuspend", CardsParams { cards: card_ids })
            .await
    }

    /// Check whether a single card is suspended.
    pub async fn is_suspended(&self, card_id: i64) -> Result<bool> {
        self.client
            .invoke("suspended", SuspendedParams { card: card_id })
            .await
    }

    /// Check whether each card is suspended.
    ///
    /// `None` marks a card that does not exist.
    pub async fn are_suspended(&self, card_ids: &[i64]) -> Result<Vec<Option<bool>>> {
        self.client
            .invoke("areSuspended", CardsParams { cards: card_ids })
            .await
    }

    /// Check whether each card is due for review.
    ///
    /// Cards in the learning queue count as due even when their next
    /// step is in the future.
    pub async fn are_due(&self, card_ids: &[i64]) -> Result<Vec<bool>> {
        self.client
            .invoke("areDue", CardsParams { cards: card_ids })
            .await
    }

    /// Get the current interval of each card, in days.
    ///
    /// Negative values are seconds, used for cards in learning.
    pub async fn intervals(&self, card_ids: &[i64]) -> Result<Vec<i64>> {
        self.client
            .invoke(
                "getIntervals",
                GetIntervalsParams {
                    cards: card_ids,
                    complete: false,
                },
            )
            .await
    }

    /// Get the full interval history of each card.
    ///
    /// One inner list per card, oldest interval first.
    pub async fn interval_history(&self, card_ids: &[i64]) -> Result<Vec<Vec<i64>>> {
        self.client
            .invoke(
                "getIntervals",
                GetIntervalsParams {
                    cards: card_ids,
                    complete: true,
                },
            )
            .await
    }

    /// Get ease factors, as integers (2500 = 250%).
    pub async fn ease_factors(&self, card_ids: &[i64]) -> Result<Vec<i64>> {
        self.client
            .invoke("getEaseFactors", CardsParams { cards: card_ids })
            .await
    }

    /// Set ease factors; one factor per card, same order.
    ///
    /// Returns a success flag per card.
    pub async fn set_ease_factors(
        &self,
        card_ids: &[i64],
        ease_factors: &[i64],
    ) -> Result<Vec<bool>> {
        self.client
            .invoke(
                "setEaseFactors",
                SetEaseFactorsParams {
                    cards: card_ids,
                    ease_factors,
                },
            )
            .await
    }

    /// Forget cards, resetting them to new.
    pub async fn forget(&self, card_ids: &[i64]) -> Result<()> {
        self.client
            .invoke_void("forgetCards", CardsParams { cards: card_ids })
            .await
    }

    /// Put cards back into the relearning queue.
    pub async fn relearn(&self, card_ids: &[i64]) -> Result<()> {
        self.client
            .invoke_void("relearnCards", CardsParams { cards: card_ids })
            .await
    }

    /// Answer cards programmatically.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ranki::{AnkiClient, CardAnswer, Ease};
    ///
    /// # async fn example() -> ranki::Result<()> {
    /// let client = AnkiClient::new();
    /// let answers = [
    ///     CardAnswer::new(1234567890, Ease::Good),
    ///     CardAnswer::new(1234567891, Ease::Again),
    /// ];
    /// client.cards().answer(&answers).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn answer(&self, answers: &[CardAnswer]) -> Result<Vec<bool>> {
        self.client
            .invoke("answerCards", AnswerCardsParams { answers })
            .await
    }
}

impl BatchCards<'_> {
    /// Queue a card search.
    pub fn find(&self, query: &str) -> Result<Deferred<Vec<i64>>> {
        self.queue.push("findCards", Some(FindCardsParams { query }))
    }

    /// Queue a deck-scoped card search.
    pub fn in_deck(&self, deck: &str) -> Result<Deferred<Vec<i64>>> {
        self.find(&deck_query(deck))
    }

    /// Queue a card info lookup.
    pub fn info(&self, card_ids: &[i64]) -> Result<Deferred<Vec<CardInfo>>> {
        self.queue
            .push("cardsInfo", Some(CardsParams { cards: card_ids }))
    }

    /// Queue a card-to-note mapping.
    pub fn to_notes(&self, card_ids: &[i64]) -> Result<Deferred<Vec<i64>>> {
        self.queue
            .push("cardsToNotes", Some(CardsParams { cards: card_ids }))
    }

    /// Queue a modification-time lookup.
    pub fn mod_time(&self, card_ids: &[i64]) -> Result<Deferred<Vec<CardModTime>>> {
        self.queue
            .push("cardsModTime", Some(CardsParams { cards: card_ids }))
    }

    /// Queue a suspend.
    pub fn suspend(&self, card_ids: &[i64]) -> Result<Deferred<bool>> {
        self.queue
            .push("suspend", Some(CardsParams { cards: card_ids }))
    }

    /// Queue an unsuspend.
    pub fn unsuspend(&self, card_ids: &[i64]) -> Result<Deferred<bool>> {
        self.queue
            .push("unsuspend", Some(CardsParams { cards: card_ids }))
    }

    /// Queue a single-card suspension check.
    pub fn is_suspended(&self, card_id: i64) -> Result<Deferred<bool>> {
        self.queue
            .push("suspended", Some(SuspendedParams { card: card_id }))
    }

    /// Queue a multi-card suspension check.
    pub fn are_suspended(&self, card_ids: &[i64]) -> Result<Deferred<Vec<Option<bool>>>> {
        self.queue
            .push("areSuspended", Some(CardsParams { cards: card_ids }))
    }

    /// Queue a due check.
    pub fn are_due(&self, card_ids: &[i64]) -> Result<Deferred<Vec<bool>>> {
        self.queue
            .push("areDue", Some(CardsParams { cards: card_ids }))
    }

    /// Queue a current-interval lookup.
    pub fn intervals(&self, card_ids: &[i64]) -> Result<Deferred<Vec<i64>>> {
        self.queue.push(
            "getIntervals",
            Some(GetIntervalsParams {
                cards: card_ids,
                complete: false,
            }),
        )
    }

    /// Queue an interval-history lookup.
    pub fn interval_history(&self, card_ids: &[i64]) -> Result<Deferred<Vec<Vec<i64>>>> {
        self.queue.push(
            "getIntervals",
            Some(GetIntervalsParams {
                cards: card_ids,
                complete: true,
            }),
        )
    }

    /// Queue an ease-factor lookup.
    pub fn ease_factors(&self, card_ids: &[i64]) -> Result<Deferred<Vec<i64>>> {
        self.queue
            .push("getEaseFactors", Some(CardsParams { cards: card_ids }))
    }

    /// Queue an ease-factor update.
    pub fn set_ease_factors(
        &self,
        card_ids: &[i64],
        ease_factors: &[i64],
    ) -> Result<Deferred<Vec<bool>>> {
        self.queue.push(
            "setEaseFactors",
            Some(SetEaseFactorsParams {
                cards: card_ids,
                ease_factors,
            }),
        )
    }

    /// Queue a forget.
    pub fn forget(&self, card_ids: &[i64]) -> Result<Deferred<()>> {
        self.queue
            .push("forgetCards", Some(CardsParams { cards: card_ids }))
    }

    /// Queue a relearn.
    pub fn relearn(&self, card_ids: &[i64]) -> Result<Deferred<()>> {
        self.queue
            .push("relearnCards", Some(CardsParams { cards: card_ids }))
    }

    /// Queue card answers.
    pub fn answer(&self, answers: &[CardAnswer]) -> Result<Deferred<Vec<bool>>> {
        self.queue
            .push("answerCards", Some(AnswerCardsParams { answers }))
    }
}
