//! Read-only access to the notes store and views derived from it

mod repository;
pub mod schema;
mod sqlite;
pub mod views;

pub use repository::{
    LargestNote, NoteRepository, SEARCH_LIMIT, StoreError, StoreResult, StoreSummary,
    TagWithCount,
};
pub use sqlite::{NoteStore, ReadSnapshot};
