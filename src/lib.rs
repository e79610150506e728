//! A Rust client for the AnkiConnect API, sync and async, with
//! request batching.
//!
//! [AnkiConnect](https://git.sr.ht/~foosoft/anki-connect) runs a local
//! HTTP server (port 8765 by default) through which the Anki desktop
//! app can be queried and driven. This crate wraps that protocol in
//! typed method calls.
//!
//! # Quick start
//!
//! ```no_run
//! use ranki::AnkiClient;
//!
//! # async fn example() -> ranki::Result<()> {
//! let client = AnkiClient::new();
//!
//! // check that AnkiConnect is reachable
//! let version = client.misc().version().await?;
//! println!("AnkiConnect version: {version}");
//!
//! // look up cards and their scheduling state
//! let cards = client.cards().find("deck:Japanese is:due").await?;
//! let due = client.cards().are_due(&cards).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Without an async runtime, use the mirror in [`blocking`]:
//!
//! ```no_run
//! use ranki::blocking::AnkiClient;
//!
//! # fn example() -> ranki::Result<()> {
//! let client = AnkiClient::new();
//! let decks = client.decks().names()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Batching
//!
//! Every round trip to AnkiConnect costs a few milliseconds; the
//! `multi` action bundles several sub-actions into one request. A
//! [`Batch`] scope records calls instead of sending them and hands
//! back [`Deferred`] handles; the combined request goes out on
//! [`Batch::dispatch`] or on the first resolve of a pending handle,
//! and each handle resolves from its position in the combined result.
//!
//! ```no_run
//! # use ranki::AnkiClient;
//! # async fn example() -> ranki::Result<()> {
//! let client = AnkiClient::new();
//! let batch = client.batch();
//!
//! let cards = batch.cards().find("is:due")?;
//! let reviewed = batch.statistics().cards_reviewed_today()?;
//!
//! batch.dispatch().await?; // one HTTP request
//!
//! println!("due: {}", batch.resolve(cards).await?.len());
//! println!("reviewed today: {}", batch.resolve(reviewed).await?);
//! # Ok(())
//! # }
//! ```
//!
//! # Action groups
//!
//! - [`AnkiClient::cards()`] - lookup, scheduling state, suspend,
//!   answer
//! - [`AnkiClient::decks()`] - create, move, delete, options groups
//! - [`AnkiClient::gui()`] - drive the browser and the reviewer
//! - [`AnkiClient::notes()`] - add, find, inspect, delete
//! - [`AnkiClient::statistics()`] - review counts
//! - [`AnkiClient::misc()`] - version, permission, profiles, packages
//!
//! # Requirements
//!
//! Anki must be running with the AnkiConnect add-on installed. By
//! default the client connects to `http://127.0.0.1:8765`.

pub mod actions;
pub mod batch;
pub mod blocking;
pub mod client;
pub mod error;
mod request;
pub mod types;

pub use actions::{ApiReflectResult, CurrentCard, MultiAction, PermissionResult};
pub use batch::{Batch, Deferred};
pub use client::{AnkiClient, ClientBuilder};
pub use error::{Error, Result};
pub use types::{
    BrowserColumn, CardAnswer, CardInfo, CardModTime, DeckConfig, DeckStats, DuplicateScope,
    DuplicateScopeOptions, Ease, MediaAttachment, Note, NoteBuilder, NoteField, NoteInfo,
    NoteOptions, Reordering, SortOrder,
};
