//! Batched dispatch over the `multi` action.
//!
//! AnkiConnect accepts a `multi` action whose parameters are an ordered
//! list of sub-actions; the reply is an equally ordered list of
//! sub-results. A [`Batch`] records calls instead of sending them and
//! hands back a [`Deferred`] handle per call. The combined request goes
//! out once, either on [`Batch::dispatch`] or on the first
//! [`Batch::resolve`] of a handle whose result is not in yet. Call
//! order is the correlation key: the nth enqueued call resolves from
//! the nth sub-result.
//!
//! A failed sub-action fails only its own handle; sibling results in
//! the same group stay usable.
//!
//! # Example
//!
//! ```no_run
//! use ranki::AnkiClient;
//!
//! # async fn example() -> ranki::Result<()> {
//! let client = AnkiClient::new();
//! let batch = client.batch();
//!
//! let due = batch.cards().find("is:due")?;
//! let suspended = batch.cards().find("is:suspended")?;
//! let decks = batch.decks().names()?;
//!
//! // the first resolve sends one multi request for all three
//! println!("due: {}", batch.resolve(due).await?.len());
//! println!("suspended: {}", batch.resolve(suspended).await?.len());
//! println!("decks: {:?}", batch.resolve(decks).await?);
//! # Ok(())
//! # }
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::actions::{BatchCards, BatchDecks, BatchGui, BatchMisc, BatchNotes, BatchStatistics};
use crate::client::AnkiClient;
use crate::error::{Error, Result};
use crate::request::{API_VERSION, AnkiResponse, api_error};

/// A recorded call waiting for the next combined dispatch.
///
/// The version is stamped per sub-action; AnkiConnect expects it inside
/// each element of the `actions` list, not only on the envelope.
#[derive(Debug, Serialize)]
pub(crate) struct QueuedAction {
    action: String,
    version: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
}

#[derive(Serialize)]
struct MultiParams<'a> {
    actions: &'a [QueuedAction],
}

/// A placeholder for the result of a batched call.
///
/// Handles are single-use: resolving consumes them. The type parameter
/// records what the underlying action returns, so resolution is as
/// typed as a direct call.
pub struct Deferred<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Deferred<T> {
    /// Position of the call in its queue; the correlation key.
    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").field("index", &self.index).finish()
    }
}

/// Ordered bookkeeping shared by the async and blocking batch scopes.
///
/// `slots[i]` holds the decoded sub-result of the ith call ever made on
/// this queue; `pending` holds the tail of calls not yet dispatched, so
/// `slots.len() + pending.len()` is the total call count.
#[derive(Debug, Default)]
pub(crate) struct BatchQueue {
    state: RefCell<QueueState>,
}

#[derive(Debug, Default)]
struct QueueState {
    pending: Vec<QueuedAction>,
    slots: Vec<Option<Result<Value>>>,
}

impl BatchQueue {
    /// Record a call and hand out the handle for its future result.
    pub fn push<P, R>(&self, action: &str, params: Option<P>) -> Result<Deferred<R>>
    where
        P: Serialize,
    {
        let params = params.map(serde_json::to_value).transpose()?;
        let mut state = self.state.borrow_mut();
        let index = state.slots.len() + state.pending.len();
        state.pending.push(QueuedAction {
            action: action.to_string(),
            version: API_VERSION,
            params,
        });
        Ok(Deferred {
            index,
            _marker: PhantomData,
        })
    }

    pub fn take_pending(&self) -> Vec<QueuedAction> {
        std::mem::take(&mut self.state.borrow_mut().pending)
    }

    pub fn pending_len(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Whether the handle's slot has been filled by a dispatch.
    pub fn is_filled(&self, index: usize) -> bool {
        index < self.state.borrow().slots.len()
    }

    /// Record the sub-results of a dispatched group, in call order.
    ///
    /// A count mismatch fails the whole group; with call order as the
    /// only correlation key there is no meaningful partial alignment.
    pub fn fill(&self, sent: usize, raw: Vec<Value>) {
        let mut state = self.state.borrow_mut();
        if raw.len() != sent {
            let msg = format!(
                "multi returned {} sub-results for {} sub-actions",
                raw.len(),
                sent
            );
            for _ in 0..sent {
                state.slots.push(Some(Err(Error::Batch(msg.clone()))));
            }
            return;
        }
        for value in raw {
            state.slots.push(Some(decode_sub_result(value)));
        }
    }

    /// Fail an entire dispatched group, e.g. when the combined request
    /// itself never produced a response.
    pub fn fail(&self, sent: usize, message: &str) {
        let mut state = self.state.borrow_mut();
        for _ in 0..sent {
            state.slots.push(Some(Err(Error::Batch(message.to_string()))));
        }
    }

    pub fn take_slot(&self, index: usize) -> Result<Value> {
        let mut state = self.state.borrow_mut();
        match state.slots.get_mut(index) {
            Some(slot) => slot
                .take()
                .unwrap_or_else(|| Err(Error::Batch("result already taken".into()))),
            None => Err(Error::Batch("result was never dispatched".into())),
        }
    }
}

/// Decode one element of the `multi` result array.
///
/// Each element is its own `{result, error}` envelope. A null result
/// with a null error is how void sub-actions report success, so it maps
/// to `Value::Null` rather than an error.
fn decode_sub_result(value: Value) -> Result<Value> {
    let envelope: AnkiResponse<Value> = serde_json::from_value(value)
        .map_err(|e| Error::Batch(format!("sub-result is not a result/error envelope: {e}")))?;
    match envelope.error {
        Some(err) => Err(api_error(err)),
        None => Ok(envelope.result.unwrap_or(Value::Null)),
    }
}

/// A batch scope over an [`AnkiClient`].
///
/// Created by [`AnkiClient::batch`]. The scope is reusable: calls
/// enqueued after a dispatch form a new pending group that goes out on
/// the next flush or first access.
#[derive(Debug)]
pub struct Batch<'a> {
    client: &'a AnkiClient,
    queue: BatchQueue,
}

impl<'a> Batch<'a> {
    pub(crate) fn new(client: &'a AnkiClient) -> Self {
        Self {
            client,
            queue: BatchQueue::default(),
        }
    }

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
    ///
    /// Does nothing when the pending list is empty. On transport
    /// failure every handle in the group fails with a batch error and
    /// the underlying error is returned here.
    pub async fn dispatch(&self) -> Result<()> {
        let actions = self.queue.take_pending();
        if actions.is_empty() {
            return Ok(());
        }
        debug!(actions = actions.len(), "dispatching batched AnkiConnect request");
        match self
            .client
            .invoke::<_, Vec<Value>>("multi", MultiParams { actions: &actions })
            .await
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

    /// Resolve a handle to its typed result.
    ///
    /// Triggers [`dispatch`](Self::dispatch) first if the handle's
    /// group has not been sent yet.
    pub async fn resolve<T>(&self, handle: Deferred<T>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !self.queue.is_filled(handle.index) {
            self.dispatch().await?;
        }
        let value = self.queue.take_slot(handle.index)?;
        Ok(serde_json::from_value(value)?)
    }
}
