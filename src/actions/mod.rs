//! Action groups, one module per AnkiConnect category.
//!
//! Each category has two surfaces: the async group obtained from
//! [`AnkiClient`](crate::AnkiClient), and the queueing group obtained
//! from a [`Batch`](crate::Batch). The blocking client mirrors the
//! async groups in [`crate::blocking`].

mod cards;
mod decks;
mod graphical;
mod misc;
mod notes;
mod statistics;

pub use cards::{BatchCards, CardActions};
pub use decks::{BatchDecks, DeckActions};
pub use graphical::{BatchGui, CurrentCard, GuiActions};
pub use misc::{ApiReflectResult, BatchMisc, MiscActions, MultiAction, PermissionResult};
pub use notes::{BatchNotes, NoteActions};
pub use statistics::{BatchStatistics, StatisticsActions};

pub(crate) use cards::{
    AnswerCardsParams, CardsParams, FindCardsParams, GetIntervalsParams, SetEaseFactorsParams,
    SuspendedParams, deck_query,
};
pub(crate) use decks::{
    ChangeDeckParams, CloneDeckConfigParams, CreateDeckParams, DeleteDecksParams,
    GetDeckConfigParams, GetDeckStatsParams, GetDecksParams, RemoveDeckConfigParams,
    SaveDeckConfigParams, SetDeckConfigIdParams,
};
pub(crate) use graphical::{
    AddCardsParams, AnswerCardParams, BrowseParams, DeckNameParams, EditNoteParams,
    ImportFileParams, SelectCardParams,
};
pub(crate) use misc::{
    ApiReflectParams, ExportPackageParams, ImportPackageParams, LoadProfileParams, MultiParams,
};
pub(crate) use notes::{AddNoteParams, AddNotesParams, FindNotesParams, NotesParams};
pub(crate) use statistics::CollectionStatsParams;
