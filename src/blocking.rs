//! Blocking (synchronous) API.
//!
//! A mirror of the async surface for callers without a runtime: same
//! action groups, same types, same errors, no `.await`. The blocking
//! [`Batch`] reuses the queueing groups of the async one, so batched
//! code looks identical up to the dispatch call.
//!
//! Do not use this module from inside an async runtime; it performs
//! blocking I/O.
//!
//! # Example
//!
//! ```no_run
//! use ranki::blocking::AnkiClient;
//!
//! # fn example() -> ranki::Result<()> {
//! let client = AnkiClient::new();
//! let version = client.misc().version()?;
//! println!("AnkiConnect version: {version}");
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::actions::{
    AddCardsParams, AddNoteParams, AddNotesParams, AnswerCardParams, AnswerCardsParams,
    ApiReflectParams, ApiReflectResult, BatchCards, BatchDecks, BatchGui, BatchMisc, BatchNotes,
    BatchStatistics, BrowseParams, CardsParams, ChangeDeckParams, CloneDeckConfigParams,
    CollectionStatsParams, CreateDeckParams, CurrentCard, DeckNameParams, DeleteDecksParams,
    EditNoteParams, ExportPackageParams, FindCardsParams, FindNotesParams, GetDeckConfigParams,
    GetDeckStatsParams, GetDecksParams, GetIntervalsParams, ImportFileParams, ImportPackageParams,
    LoadProfileParams, MultiAction, MultiParams, NotesParams, PermissionResult,
    RemoveDeckConfigParams, SaveDeckConfigParams, SelectCardParams, SetDeckConfigIdParams,
    SetEaseFactorsParams, SuspendedParams, deck_query,
};
use crate::batch::{BatchQueue, Deferred, QueuedAction};
use crate::error::Result;
use crate::request::{AnkiRequest, AnkiResponse, transport_error};
use crate::types::{
    CardAnswer, CardInfo, CardModTime, DeckConfig, DeckStats, Ease, Note, NoteInfo, Reordering,
};

/// Default URL for AnkiConnect.
const DEFAULT_URL: &str = "http://127.0.0.1:8765";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The blocking client for AnkiConnect.
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AnkiClient {
    /// Create a client with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access card operations.
    pub fn cards(&self) -> CardActions<'_> {
        CardActions { client: self }
    }

    /// Access deck operations.
    pub fn decks(&self) -> DeckActions<'_> {
        DeckActions { client: self }
    }

    /// Access GUI operations.
    pub fn gui(&self) -> GuiActions<'_> {
        GuiActions { client: self }
    }

    /// Access note operations.
    pub fn notes(&self) -> NoteActions<'_> {
        NoteActions { client: self }
    }

    /// Access miscellaneous operations.
    pub fn misc(&self) -> MiscActions<'_> {
        MiscActions { client: self }
    }

    /// Access statistics operations.
    pub fn statistics(&self) -> StatisticsActions<'_> {
        StatisticsActions { client: self }
    }

    /// Open a batch scope; see [`Batch`].
    pub fn batch(&self) -> Batch<'_> {
        Batch {
            client: self,
            queue: BatchQueue::default(),
        }
    }

    fn invoke_without_params<R>(&self, action: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = AnkiRequest::<()>::without_params(action, self.api_key.as_deref());
        self.send_request(&request)?.into_result()
    }

    fn invoke<P, R>(&self, action: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = AnkiRequest::new(action, params, self.api_key.as_deref());
        self.send_request(&request)?.into_result()
    }

    fn invoke_void<P>(&self, action: &str, params: P) -> Result<()>
    where
        P: Serialize,
    {
        let request = AnkiRequest::new(action, params, self.api_key.as_deref());
        self.send_request::<_, Value>(&request)?.into_void()
    }

    fn invoke_void_without_params(&self, action: &str) -> Result<()> {
        let request = AnkiRequest::<()>::without_params(action, self.api_key.as_deref());
        self.send_request::<_, Value>(&request)?.into_void()
    }

    fn invoke_nullable_without_params<R>(&self, action: &str) -> Result<Option<R>>
    where
        R: DeserializeOwned,
    {
        let request = AnkiRequest::<()>::without_params(action, self.api_key.as_deref());
        self.send_request(&request)?.into_nullable()
    }

    fn send_request<T, R>(&self, request: &AnkiRequest<'_, T>) -> Result<AnkiResponse<R>>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        debug!(action = request.action, "sending AnkiConnect request");
        let response = self
            .http_client
            .post(&self.base_url)
            .json(request)
            .send()
            .map_err(transport_error)?;

        let response: AnkiResponse<R> = response.json()?;
        if let Some(err) = &response.error {
            debug!(action = request.action, error = %err, "AnkiConnect reported an error");
        }
        Ok(response)
    }
}

impl Default for AnkiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a customized blocking [`AnkiClient`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the AnkiConnect URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> AnkiClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("failed to build HTTP client");

        AnkiClient {
            http_client,
            base_url: self.base_url,
            api_key: self.api_key,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A batch scope over the blocking client.
///
/// Queueing works exactly like the async [`Batch`](crate::Batch): the
/// same groups hand out the same [`Deferred`] handles. Only
/// [`dispatch`](Self::dispatch) and [`resolve`](Self::resolve) differ,
/// blocking instead of awaiting.
#[derive(Debug)]
pub struct Batch<'a> {
    client: &'a AnkiClient,
    queue: BatchQueue,
}

#[derive(Serialize)]
struct BatchDispatchParams<'a> {
    actions: &'a [QueuedAction],
}

impl Batch<'_> {
    /// Queue card operations.
    pub fn cards(&self) -> BatchCards<'_> {
        BatchCards { queue: &self.queue }
    }

    /// Queue deck operations.
    pub fn decks(&self) -> BatchDecks<'_> {
        BatchDecks { queue: &self.queue }
    }

    /// Queue GUI operations.
    pub fn gui(&self) -> BatchGui<'_> {
        BatchGui { queue: &self.queue }
    }

    /// Queue note operations.
    pub fn notes(&self) -> BatchNotes<'_> {
        BatchNotes { queue: &self.queue }
    }

    /// Queue miscellaneous operations.
    pub fn misc(&self) -> BatchMisc<'_> {
        BatchMisc { queue: &self.queue }
    }

    /// Queue statistics operations.
    pub fn statistics(&self) -> BatchStatistics<'_> {
        BatchStatistics { queue: &self.queue }
    }

    /// Number of calls queued and not yet dispatched.
    pub fn pending(&self) -> usize {
        self.queue.pending_len()
    }

    /// Send everything pending as one `multi` request.
    pub fn dispatch(&self) -> Result<()> {
        let actions = self.queue.take_pending();
        if actions.is_empty() {
            return Ok(());
        }
        debug!(actions = actions.len(), "dispatching batched AnkiConnect request");
        match self
            .client
            .invoke::<_, Vec<Value>>("multi", BatchDispatchParams { actions: &actions })
        {
            Ok(raw) => {
                self.queue.fill(actions.len(), raw);
                Ok(())
            }
            Err(e) => {
                self.queue.fail(actions.len(), &e.to_string());
                Err(e)
            }
        }
    }

    /// Resolve a handle to its typed result, dispatching first if its
    /// group has not been sent yet.
    pub fn resolve<T>(&self, handle: Deferred<T>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !self.queue.is_filled(handle.index()) {
            self.dispatch()?;
        }
        let value = self.queue.take_slot(handle.index())?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Blocking card operations; see [`crate::actions::CardActions`].
#[derive(Debug)]
pub struct CardActions<'a> {
    client: &'a AnkiClient,
}

impl CardActions<'_> {
    /// Find cards matching a search query.
    pub fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client.invoke("findCards", FindCardsParams { query })
    }

    /// Find all cards in a deck.
    pub fn in_deck(&self, deck: &str) -> Result<Vec<i64>> {
        self.find(&deck_query(deck))
    }

    /// Get detailed information about cards.
    pub fn info(&self, card_ids: &[i64]) -> Result<Vec<CardInfo>> {
        self.client.invoke("cardsInfo", CardsParams { cards: card_ids })
    }

    /// Map card IDs to the IDs of the notes they were generated from.
    pub fn to_notes(&self, card_ids: &[i64]) -> Result<Vec<i64>> {
        self.client
            .invoke("cardsToNotes", CardsParams { cards: card_ids })
    }

    /// Get modification times for cards.
    pub fn mod_time(&self, card_ids: &[i64]) -> Result<Vec<CardModTime>> {
        self.client
            .invoke("cardsModTime", CardsParams { cards: card_ids })
    }

    /// Suspend cards.
    pub fn suspend(&self, card_ids: &[i64]) -> Result<bool> {
        self.client.invoke("suspend", CardsParams { cards: card_ids })
    }

    /// Unsuspend cards.
    pub fn unsuspend(&self, card_ids: &[i64]) -> Result<bool> {
        self.client
            .invoke("unsuspend", CardsParams { cards: card_ids })
    }

    /// Check whether a single card is suspended.
    pub fn is_suspended(&self, card_id: i64) -> Result<bool> {
        self.client
            .invoke("suspended", SuspendedParams { card: card_id })
    }

    /// Check whether each card is suspended.
    pub fn are_suspended(&self, card_ids: &[i64]) -> Result<Vec<Option<bool>>> {
        self.client
            .invoke("areSuspended", CardsParams { cards: card_ids })
    }

    /// Check whether each card is due for review.
    pub fn are_due(&self, card_ids: &[i64]) -> Result<Vec<bool>> {
        self.client.invoke("areDue", CardsParams { cards: card_ids })
    }

    /// Get the current interval of each card, in days.
    pub fn intervals(&self, card_ids: &[i64]) -> Result<Vec<i64>> {
        self.client.invoke(
            "getIntervals",
            GetIntervalsParams {
                cards: card_ids,
                complete: false,
            },
        )
    }

    /// Get the full interval history of each card.
    pub fn interval_history(&self, card_ids: &[i64]) -> Result<Vec<Vec<i64>>> {
        self.client.invoke(
            "getIntervals",
            GetIntervalsParams {
                cards: card_ids,
                complete: true,
            },
        )
    }

    /// Get ease factors, as integers (2500 = 250%).
    pub fn ease_factors(&self, card_ids: &[i64]) -> Result<Vec<i64>> {
        self.client
            .invoke("getEaseFactors", CardsParams { cards: card_ids })
    }

    /// Set ease factors; one factor per card, same order.
    pub fn set_ease_factors(&self, card_ids: &[i64], ease_factors: &[i64]) -> Result<Vec<bool>> {
        self.client.invoke(
            "setEaseFactors",
            SetEaseFactorsParams {
                cards: card_ids,
                ease_factors,
            },
        )
    }

    /// Forget cards, resetting them to new.
    pub fn forget(&self, card_ids: &[i64]) -> Result<()> {
        self.client
            .invoke_void("forgetCards", CardsParams { cards: card_ids })
    }

    /// Put cards back into the relearning queue.
    pub fn relearn(&self, card_ids: &[i64]) -> Result<()> {
        self.client
            .invoke_void("relearnCards", CardsParams { cards: card_ids })
    }

    /// Answer cards programmatically.
    pub fn answer(&self, answers: &[CardAnswer]) -> Result<Vec<bool>> {
        self.client
            .invoke("answerCards", AnswerCardsParams { answers })
    }
}

/// Blocking deck operations; see [`crate::actions::DeckActions`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    client: &'a AnkiClient,
}

impl DeckActions<'_> {
    /// Get all deck names.
    pub fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("deckNames")
    }

    /// Get all deck names with their IDs.
    pub fn names_and_ids(&self) -> Result<HashMap<String, i64>> {
        self.client.invoke_without_params("deckNamesAndIds")
    }

    /// Group the given cards by the deck that contains them.
    pub fn of_cards(&self, card_ids: &[i64]) -> Result<HashMap<String, Vec<i64>>> {
        self.client
            .invoke("getDecks", GetDecksParams { cards: card_ids })
    }

    /// Create an empty deck, returning its ID.
    pub fn create(&self, deck: &str) -> Result<i64> {
        self.client.invoke("createDeck", CreateDeckParams { deck })
    }

    /// Move cards to a deck, creating it if needed.
    pub fn change(&self, card_ids: &[i64], deck: &str) -> Result<()> {
        self.client.invoke_void(
            "changeDeck",
            ChangeDeckParams {
                cards: card_ids,
                deck,
            },
        )
    }

    /// Delete decks.
    pub fn delete(&self, decks: &[&str], cards_too: bool) -> Result<()> {
        self.client
            .invoke_void("deleteDecks", DeleteDecksParams { decks, cards_too })
    }

    /// Get the options group of a deck.
    pub fn config(&self, deck: &str) -> Result<DeckConfig> {
        self.client
            .invoke("getDeckConfig", GetDeckConfigParams { deck })
    }

    /// Save an options group.
    pub fn save_config(&self, config: &DeckConfig) -> Result<bool> {
        self.client
            .invoke("saveDeckConfig", SaveDeckConfigParams { config })
    }

    /// Assign an options group to decks.
    pub fn set_config_id(&self, decks: &[&str], config_id: i64) -> Result<bool> {
        self.client
            .invoke("setDeckConfigId", SetDeckConfigIdParams { decks, config_id })
    }

    /// Clone an options group, returning the new group's ID.
    pub fn clone_config(&self, name: &str, clone_from: Option<i64>) -> Result<i64> {
        self.client.invoke(
            "cloneDeckConfigId",
            CloneDeckConfigParams { name, clone_from },
        )
    }

    /// Remove an options group.
    pub fn remove_config(&self, config_id: i64) -> Result<bool> {
        self.client
            .invoke("removeDeckConfigId", RemoveDeckConfigParams { config_id })
    }

    /// Get card counts for decks, keyed by deck ID.
    pub fn stats(&self, decks: &[&str]) -> Result<HashMap<String, DeckStats>> {
        self.client
            .invoke("getDeckStats", GetDeckStatsParams { decks })
    }
}

/// Blocking GUI operations; see [`crate::actions::GuiActions`].
#[derive(Debug)]
pub struct GuiActions<'a> {
    client: &'a AnkiClient,
}

impl GuiActions<'_> {
    /// Open the card browser with a search query.
    pub fn browse(&self, query: &str) -> Result<Vec<i64>> {
        self.client.invoke(
            "guiBrowse",
            BrowseParams {
                query,
                reorder_cards: None,
            },
        )
    }

    /// Open the card browser with a search query and a sort order.
    pub fn browse_ordered(&self, query: &str, order: &Reordering) -> Result<Vec<i64>> {
        self.client.invoke(
            "guiBrowse",
            BrowseParams {
                query,
                reorder_cards: Some(order),
            },
        )
    }

    /// Select a card in the open browser.
    pub fn select_card(&self, card_id: i64) -> Result<bool> {
        self.client
            .invoke("guiSelectCard", SelectCardParams { card: card_id })
    }

    /// Get the notes currently selected in the browser.
    pub fn selected_notes(&self) -> Result<Vec<i64>> {
        self.client.invoke_without_params("guiSelectedNotes")
    }

    /// Open the Add Cards dialog prefilled with a note.
    pub fn add_cards(&self, note: &Note) -> Result<i64> {
        self.client.invoke("guiAddCards", AddCardsParams { note })
    }

    /// Open the note editor for a note.
    pub fn edit_note(&self, note_id: i64) -> Result<()> {
        self.client
            .invoke_void("guiEditNote", EditNoteParams { note: note_id })
    }

    /// Get the card currently shown in the reviewer.
    pub fn current_card(&self) -> Result<Option<CurrentCard>> {
        self.client.invoke_nullable_without_params("guiCurrentCard")
    }

    /// Start or reset the answer timer for the current card.
    pub fn start_card_timer(&self) -> Result<bool> {
        self.client.invoke_without_params("guiStartCardTimer")
    }

    /// Show the question side of the current card.
    pub fn show_question(&self) -> Result<bool> {
        self.client.invoke_without_params("guiShowQuestion")
    }

    /// Show the answer side of the current card.
    pub fn show_answer(&self) -> Result<bool> {
        self.client.invoke_without_params("guiShowAnswer")
    }

    /// Answer the current card.
    pub fn answer_card(&self, ease: Ease) -> Result<bool> {
        self.client
            .invoke("guiAnswerCard", AnswerCardParams { ease })
    }

    /// Undo the last action.
    pub fn undo(&self) -> Result<bool> {
        self.client.invoke_without_params("guiUndo")
    }

    /// Open the overview screen for a deck.
    pub fn deck_overview(&self, name: &str) -> Result<bool> {
        self.client
            .invoke("guiDeckOverview", DeckNameParams { name })
    }

    /// Open the deck list.
    pub fn deck_browser(&self) -> Result<()> {
        self.client.invoke_void_without_params("guiDeckBrowser")
    }

    /// Start reviewing a deck.
    pub fn deck_review(&self, name: &str) -> Result<bool> {
        self.client.invoke("guiDeckReview", DeckNameParams { name })
    }

    /// Open the import dialog for a file.
    pub fn import_file(&self, path: &str) -> Result<()> {
        self.client
            .invoke_void("guiImportFile", ImportFileParams { path })
    }

    /// Run a database check.
    pub fn check_database(&self) -> Result<bool> {
        self.client.invoke_without_params("guiCheckDatabase")
    }

    /// Schedule a graceful Anki shutdown.
    pub fn exit_anki(&self) -> Result<()> {
        self.client.invoke_void_without_params("guiExitAnki")
    }
}

/// Blocking note operations; see [`crate::actions::NoteActions`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    client: &'a AnkiClient,
}

impl NoteActions<'_> {
    /// Add a note, returning its ID.
    pub fn add(&self, note: &Note) -> Result<i64> {
        self.client.invoke("addNote", AddNoteParams { note })
    }

    /// Add several notes at once.
    pub fn add_many(&self, notes: &[Note]) -> Result<Vec<Option<i64>>> {
        self.client.invoke("addNotes", AddNotesParams { notes })
    }

    /// Find notes matching a search query.
    pub fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client.invoke("findNotes", FindNotesParams { query })
    }

    /// Get detailed information about notes.
    pub fn info(&self, note_ids: &[i64]) -> Result<Vec<NoteInfo>> {
        self.client
            .invoke("notesInfo", NotesParams { notes: note_ids })
    }

    /// Delete notes and every card generated from them.
    pub fn delete(&self, note_ids: &[i64]) -> Result<()> {
        self.client
            .invoke_void("deleteNotes", NotesParams { notes: note_ids })
    }
}

/// Blocking miscellaneous operations; see [`crate::actions::MiscActions`].
#[derive(Debug)]
pub struct MiscActions<'a> {
    client: &'a AnkiClient,
}

impl MiscActions<'_> {
    /// Get the AnkiConnect API version.
    pub fn version(&self) -> Result<u8> {
        self.client.invoke_without_params("version")
    }

    /// Ask AnkiConnect for permission to use the API.
    pub fn request_permission(&self) -> Result<PermissionResult> {
        self.client.invoke_without_params("requestPermission")
    }

    /// Ask which API methods are available.
    pub fn api_reflect(
        &self,
        scopes: Option<&[&str]>,
        actions: Option<&[&str]>,
    ) -> Result<ApiReflectResult> {
        self.client
            .invoke("apiReflect", ApiReflectParams { scopes, actions })
    }

    /// Synchronize the collection with AnkiWeb.
    pub fn sync(&self) -> Result<()> {
        self.client.invoke_void_without_params("sync")
    }

    /// List the available profiles.
    pub fn profiles(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("getProfiles")
    }

    /// Get the name of the open profile.
    pub fn active_profile(&self) -> Result<String> {
        self.client.invoke_without_params("getActiveProfile")
    }

    /// Switch to another profile.
    pub fn load_profile(&self, name: &str) -> Result<bool> {
        self.client
            .invoke("loadProfile", LoadProfileParams { name })
    }

    /// Export a deck to an `.apkg` file.
    pub fn export_package(&self, deck: &str, path: &str, include_sched: bool) -> Result<bool> {
        self.client.invoke(
            "exportPackage",
            ExportPackageParams {
                deck,
                path,
                include_sched,
            },
        )
    }

    /// Import an `.apkg` file into the collection.
    pub fn import_package(&self, path: &str) -> Result<bool> {
        self.client
            .invoke("importPackage", ImportPackageParams { path })
    }

    /// Tell Anki to reload everything from the database.
    pub fn reload_collection(&self) -> Result<()> {
        self.client.invoke_void_without_params("reloadCollection")
    }

    /// Send a hand-assembled `multi` request.
    pub fn multi(&self, actions: &[MultiAction<'_>]) -> Result<Vec<Value>> {
        self.client.invoke("multi", MultiParams { actions })
    }
}

/// Blocking statistics operations; see
/// [`crate::actions::StatisticsActions`].
#[derive(Debug)]
pub struct StatisticsActions<'a> {
    client: &'a AnkiClient,
}

impl StatisticsActions<'_> {
    /// Get the number of cards reviewed today.
    pub fn cards_reviewed_today(&self) -> Result<i64> {
        self.client.invoke_without_params("getNumCardsReviewedToday")
    }

    /// Get review counts per day, newest first.
    pub fn cards_reviewed_by_day(&self) -> Result<Vec<(String, i64)>> {
        self.client.invoke_without_params("getNumCardsReviewedByDay")
    }

    /// Get the collection statistics report as HTML.
    pub fn collection_stats_html(&self, whole_collection: bool) -> Result<String> {
        self.client.invoke(
            "getCollectionStatsHTML",
            CollectionStatsParams { whole_collection },
        )
    }
}
