//! In-memory assistant store.
//!
//! # Responsibilities
//! - Hold the process-lifetime collection of assistants (insertion order)
//! - Allocate unique, strictly increasing ids (never reused after deletion)
//! - Provide the find/mutate/remove primitives the handlers build on
//!
//! # Design Decisions
//! - Explicit store object, injected via application state, so every test
//!   constructs an isolated instance with a fresh counter
//! - One `std::sync::Mutex` around the collection and the counter; the host
//!   runtime is multi-threaded, and guarding both behind a single lock keeps
//!   find-then-mutate sequences atomic with respect to other requests
//! - No name validation here; blank-name rejection happens at the HTTP
//!   boundary before a record is constructed

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// The sole managed entity: an `{id, name}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assistant {
    /// Server-assigned, unique, immutable after creation.
    pub id: u64,
    /// Non-empty display name, mutable.
    pub name: String,
}

#[derive(Debug)]
struct StoreInner {
    assistants: Vec<Assistant>,
    next_id: u64,
}

/// Mutex-guarded collection of assistants plus the id counter.
#[derive(Debug)]
pub struct AssistantStore {
    inner: Mutex<StoreInner>,
}

impl AssistantStore {
    /// Create an empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                assistants: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<Assistant> {
        self.lock().assistants.clone()
    }

    /// Find a record by id.
    pub fn get(&self, id: u64) -> Option<Assistant> {
        self.lock().assistants.iter().find(|a| a.id == id).cloned()
    }

    /// Append a new record with the next sequential id.
    pub fn create(&self, name: String) -> Assistant {
        let mut inner = self.lock();
        let assistant = Assistant {
            id: inner.next_id,
            name,
        };
        inner.next_id += 1;
        inner.assistants.push(assistant.clone());
        assistant
    }

    /// Rename a record in place, returning the updated record.
    pub fn rename(&self, id: u64, name: String) -> Option<Assistant> {
        let mut inner = self.lock();
        let assistant = inner.assistants.iter_mut().find(|a| a.id == id)?;
        assistant.name = name;
        Some(assistant.clone())
    }

    /// Remove a record by id. Returns false when no record matched.
    pub fn remove(&self, id: u64) -> bool {
        let mut inner = self.lock();
        match inner.assistants.iter().position(|a| a.id == id) {
            Some(index) => {
                inner.assistants.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock().assistants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // A poisoned lock means a panic mid-mutation; the store holds no
        // invariant that a half-applied rename or remove could break.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for AssistantStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = AssistantStore::new();
        assert!(store.is_empty());
        assert_eq!(store.list(), vec![]);
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let store = AssistantStore::new();
        let a = store.create("Ada".into());
        let b = store.create("Grace".into());
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let store = AssistantStore::new();
        let a = store.create("Ada".into());
        assert!(store.remove(a.id));
        let b = store.create("Grace".into());
        assert!(b.id > a.id);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = AssistantStore::new();
        store.create("Ada".into());
        store.create("Grace".into());
        store.create("Edsger".into());
        let names: Vec<_> = store.list().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Ada", "Grace", "Edsger"]);
    }

    #[test]
    fn rename_mutates_in_place() {
        let store = AssistantStore::new();
        let a = store.create("Ada".into());
        let updated = store.rename(a.id, "Ada Lovelace".into()).unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(store.get(a.id).unwrap().name, "Ada Lovelace");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rename_missing_id_is_none() {
        let store = AssistantStore::new();
        assert!(store.rename(999, "ghost".into()).is_none());
    }

    #[test]
    fn remove_missing_id_is_false() {
        let store = AssistantStore::new();
        store.create("Ada".into());
        assert!(!store.remove(999));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn instances_are_isolated() {
        let first = AssistantStore::new();
        first.create("Ada".into());
        let second = AssistantStore::new();
        assert!(second.is_empty());
        assert_eq!(second.create("Grace".into()).id, 1);
    }
}
