//! Local translation history

pub mod entry;
pub mod store;

pub use entry::{HistoryEntry, NewHistoryEntry};
pub use store::{HistorySnapshot, HistoryStore, DEFAULT_MAX_ITEMS, HISTORY_KEY};
