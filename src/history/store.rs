//! Bounded, deduplicated translation history

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::errors::StorageError;
use crate::history::entry::{HistoryEntry, NewHistoryEntry};
use crate::storage::KeyValueStore;

/// Key the serialized history lives under
pub const HISTORY_KEY: &str = "TranslationHistory";

/// Default bound on the number of entries
pub const DEFAULT_MAX_ITEMS: usize = 100;

/// Snapshot published to subscribers after every mutation
pub type HistorySnapshot = Arc<[HistoryEntry]>;

/// Newest-first history persisted as one JSON array.
///
/// At most one entry exists per (source text, source code, target code,
/// context). Mutations take `&mut self`; callers sharing a store across
/// tasks must serialize access themselves.
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    max_items: usize,
    store: Arc<dyn KeyValueStore>,
    changes: watch::Sender<HistorySnapshot>,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("len", &self.entries.len())
            .field("max_items", &self.max_items)
            .finish_non_exhaustive()
    }
}

impl HistoryStore {
    /// Load history from `store`; missing or unreadable data yields an empty history
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_max_items(store, DEFAULT_MAX_ITEMS)
    }

    pub fn with_max_items(store: Arc<dyn KeyValueStore>, max_items: usize) -> Self {
        let mut entries = load_entries(store.as_ref());
        if entries.len() > max_items {
            warn!(
                "Persisted history has {} entries, keeping newest {}",
                entries.len(),
                max_items
            );
            entries.truncate(max_items);
        }

        let (changes, _) = watch::channel(HistorySnapshot::from(entries.clone()));
        Self {
            entries,
            max_items,
            store,
            changes,
        }
    }

    /// Current entries, newest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Owned snapshot of the current entries
    pub fn snapshot(&self) -> HistorySnapshot {
        self.changes.borrow().clone()
    }

    /// Receive a fresh snapshot whenever the history changes
    pub fn subscribe(&self) -> watch::Receiver<HistorySnapshot> {
        self.changes.subscribe()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn get(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Insert at the head, replacing any entry with the same dedup key
    pub fn record(&mut self, input: NewHistoryEntry) -> HistoryEntry {
        if let Some(pos) = self.entries.iter().position(|e| e.matches_key(&input)) {
            let replaced = self.entries.remove(pos);
            debug!("Replacing history entry {} at position {}", replaced.id, pos);
        }

        let entry = input.into_entry();
        self.entries.insert(0, entry.clone());

        if self.entries.len() > self.max_items {
            let evicted = self.entries.len() - self.max_items;
            self.entries.truncate(self.max_items);
            debug!("Evicted {} oldest history entries", evicted);
        }

        self.commit();
        entry
    }

    /// Delete the entry with `id`; unknown ids are ignored
    pub fn remove(&mut self, id: Uuid) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            debug!("History entry {} not found, nothing removed", id);
        }
        self.commit();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        info!("Cleared translation history");
        self.commit();
    }

    /// Case-insensitive match on source or translated text, newest first.
    /// An empty query yields every entry.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a HistoryEntry> + Clone + 'a {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(move |e| needle.is_empty() || e.matches_query(&needle))
    }

    fn commit(&self) {
        if let Err(e) = self.persist() {
            warn!("Failed to persist translation history: {}", e);
        }
        self.changes
            .send_replace(HistorySnapshot::from(self.entries.clone()));
    }

    fn persist(&self) -> Result<(), StorageError> {
        let encoded = serde_json::to_vec(&self.entries)?;
        self.store.set(HISTORY_KEY, &encoded)?;
        debug!("Persisted {} history entries", self.entries.len());
        Ok(())
    }
}

fn load_entries(store: &dyn KeyValueStore) -> Vec<HistoryEntry> {
    let bytes = match store.get(HISTORY_KEY) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to read translation history: {}", e);
            return Vec::new();
        }
    };

    match serde_json::from_slice::<Vec<HistoryEntry>>(&bytes) {
        Ok(entries) => {
            info!("Loaded {} history entries", entries.len());
            entries
        }
        Err(e) => {
            warn!("Discarding unreadable translation history: {}", e);
            Vec::new()
        }
    }
}
