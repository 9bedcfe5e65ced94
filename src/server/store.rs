//! Entry storage used by the boundary handler.
//!
//! The decoding core never touches a store; [`create_entry`](super::create_entry)
//! appends every accepted post to one. [`MemoryStore`] is the append-only,
//! in-memory implementation; hosts with real persistence implement
//! [`EntryStore`] themselves.

use crate::types::MicroformatObject;
use parking_lot::RwLock;
use std::sync::Arc;

/// Append-only collection of accepted posts.
pub trait EntryStore: Send + Sync {
    /// Store a post. Ownership moves to the store.
    fn append(&self, entry: MicroformatObject);

    /// Number of stored posts.
    fn len(&self) -> usize;

    /// The post at `index`, in append order.
    fn get(&self, index: usize) -> Option<Arc<MicroformatObject>>;

    /// Whether nothing has been stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Thread-safe in-memory [`EntryStore`].
///
/// Cloning creates a new handle to the same entries, so one store can be
/// shared between the router state and the rest of the application.
///
/// # Examples
///
/// ```
/// use micropub_mf::{EntryType, MicroformatObject};
/// use micropub_mf::server::{EntryStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.append(MicroformatObject::new(EntryType::Entry));
///
/// let handle = store.clone();
/// assert_eq!(handle.len(), 1);
/// assert_eq!(handle.get(0).unwrap().entry_type(), EntryType::Entry);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<Vec<Arc<MicroformatObject>>>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored post, in append order.
    pub fn entries(&self) -> Vec<Arc<MicroformatObject>> {
        self.entries.read().clone()
    }
}

impl EntryStore for MemoryStore {
    fn append(&self, entry: MicroformatObject) {
        self.entries.write().push(Arc::new(entry));
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn get(&self, index: usize) -> Option<Arc<MicroformatObject>> {
        self.entries.read().get(index).cloned()
    }
}
