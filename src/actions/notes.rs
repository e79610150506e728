//! Note actions.
//!
//! The lean subset needed alongside card work: adding, finding,
//! inspecting, and deleting notes. Construct notes with
//! [`NoteBuilder`](crate::NoteBuilder).

use serde::Serialize;

use crate::batch::{BatchQueue, Deferred};
use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{Note, NoteInfo};

/// Note operations on the asynchronous client.
///
/// Obtained via [`AnkiClient::notes()`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

/// Note operations queued on a batch scope.
///
/// Obtained via [`Batch::notes()`](crate::Batch::notes).
#[derive(Debug)]
pub struct BatchNotes<'a> {
    pub(crate) queue: &'a BatchQueue,
}

#[derive(Serialize)]
pub(crate) struct AddNoteParams<'a> {
    pub note: &'a Note,
}

#[derive(Serialize)]
pub(crate) struct AddNotesParams<'a> {
    pub notes: &'a [Note],
}

#[derive(Serialize)]
pub(crate) struct FindNotesParams<'a> {
    pub query: &'a str,
}

#[derive(Serialize)]
pub(crate) struct NotesParams<'a> {
    pub notes: &'a [i64],
}

impl NoteActions<'_> {
    /// Add a note, returning its ID.
    ///
    /// Fails with an AnkiConnect error when the note is a duplicate,
    /// unless its options allow duplicates.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ranki::{AnkiClient, NoteBuilder};
    ///
    /// # async fn example() -> ranki::Result<()> {
    /// let client = AnkiClient::new();
    /// let note = NoteBuilder::new("Italian", "Basic")
    ///     .field("Front", "mangiare")
    ///     .field("Back", "to eat")
    ///     .build();
    /// let id = client.notes().add(&note).await?;
    /// println!("created note {id}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add(&self, note: &Note) -> Result<i64> {
        self.client.invoke("addNote", AddNoteParams { note }).await
    }

    /// Add several notes at once.
    ///
    /// One entry per note, `None` for notes that could not be added.
    pub async fn add_many(&self, notes: &[Note]) -> Result<Vec<Option<i64>>> {
        self.client
            .invoke("addNotes", AddNotesParams { notes })
            .await
    }

    /// Find notes matching a search query.
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("findNotes", FindNotesParams { query })
            .await
    }

    /// Get detailed information about notes.
    pub async fn info(&self, note_ids: &[i64]) -> Result<Vec<NoteInfo>> {
        self.client
            .invoke("notesInfo", NotesParams { notes: note_ids })
            .await
    }

    /// Delete notes and every card generated from them.
    pub async fn delete(&self, note_ids: &[i64]) -> Result<()> {
        self.client
            .invoke_void("deleteNotes", NotesParams { notes: note_ids })
            .await
    }
}

impl BatchNotes<'_> {
    /// Queue a note addition.
    pub fn add(&self, note: &Note) -> Result<Deferred<i64>> {
        self.queue.push("addNote", Some(AddNoteParams { note }))
    }

    /// Queue a bulk note addition.
    pub fn add_many(&self, notes: &[Note]) -> Result<Deferred<Vec<Option<i64>>>> {
        self.queue.push("addNotes", Some(AddNotesParams { notes }))
    }

    /// Queue a note search.
    pub fn find(&self, query: &str) -> Result<Deferred<Vec<i64>>> {
        self.queue.push("findNotes", Some(FindNotesParams { query }))
    }

    /// Queue a note info lookup.
    pub fn info(&self, note_ids: &[i64]) -> Result<Deferred<Vec<NoteInfo>>> {
        self.queue
            .push("notesInfo", Some(NotesParams { notes: note_ids }))
    }

    /// Queue a note deletion.
    pub fn delete(&self, note_ids: &[i64]) -> Result<Deferred<()>> {
        self.queue
            .push("deleteNotes", Some(NotesParams { notes: note_ids }))
    }
}
