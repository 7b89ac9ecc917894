#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use listening_cleanup::modules::cleanup::prompt::{Confirm, Reply};
use listening_cleanup::modules::history::crud::HistoryStore;
use listening_cleanup::modules::history::model::HistoryEntry;
use listening_cleanup::modules::history::schema::SinceFilter;
use listening_cleanup::CleanupError;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn entry(id: &str, track: &str, artist: &str, at: DateTime<Utc>) -> HistoryEntry {
    let mut e = HistoryEntry::new(id, track, artist, bson::DateTime::from_chrono(at));
    e.mongo_id = Some(bson::oid::ObjectId::new());
    e
}

#[derive(Default)]
struct Inner {
    entries: Mutex<Vec<HistoryEntry>>,
    find_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    fail_find: bool,
    fail_delete: bool,
}

/// In-memory history collection with the same predicate semantics as MongoDB.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        let store = Self::default();
        *store.inner.entries.lock().unwrap() = entries;
        store
    }

    pub fn failing_find() -> Self {
        Self {
            inner: Arc::new(Inner {
                fail_find: true,
                ..Default::default()
            }),
        }
    }

    pub fn failing_delete(entries: Vec<HistoryEntry>) -> Self {
        Self {
            inner: Arc::new(Inner {
                entries: Mutex::new(entries),
                fail_delete: true,
                ..Default::default()
            }),
        }
    }

    pub fn insert(&self, entry: HistoryEntry) {
        self.inner.entries.lock().unwrap().push(entry);
    }

    pub fn len(&self) -> usize {
        self.inner.entries.lock().unwrap().len()
    }

    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .inner
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| e.id.clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn find_calls(&self) -> usize {
        self.inner.find_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.inner.delete_calls.load(Ordering::SeqCst)
    }
}

fn unavailable() -> mongodb::error::Error {
    io::Error::new(io::ErrorKind::ConnectionRefused, "server unavailable").into()
}

#[async_trait]
impl HistoryStore for MemoryStore {
    async fn find_since(&self, filter: &SinceFilter) -> Result<Vec<HistoryEntry>, CleanupError> {
        self.inner.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_find {
            return Err(CleanupError::Query(unavailable()));
        }

        let mut found: Vec<HistoryEntry> = self
            .inner
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        found.sort_by_key(|e| e.timestamp);
        Ok(found)
    }

    async fn delete_since(&self, filter: &SinceFilter) -> Result<u64, CleanupError> {
        self.inner.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_delete {
            return Err(CleanupError::Delete(unavailable()));
        }

        let mut entries = self.inner.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| !filter.matches(e));
        Ok((before - entries.len()) as u64)
    }
}

/// Confirmation source that hands back a fixed reply, optionally inserting
/// rows into the store while "waiting" for the operator.
pub struct ScriptedConfirm {
    reply: Reply,
    pub asked: usize,
    late: Option<(MemoryStore, Vec<HistoryEntry>)>,
}

impl ScriptedConfirm {
    pub fn answer(answer: &str) -> Self {
        Self {
            reply: Reply::Answer(answer.to_string()),
            asked: 0,
            late: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            reply: Reply::Unavailable,
            asked: 0,
            late: None,
        }
    }

    pub fn inserting(mut self, store: MemoryStore, entries: Vec<HistoryEntry>) -> Self {
        self.late = Some((store, entries));
        self
    }
}

impl Confirm for ScriptedConfirm {
    fn read_reply(&mut self) -> io::Result<Reply> {
        self.asked += 1;
        if let Some((store, entries)) = self.late.take() {
            for e in entries {
                store.insert(e);
            }
        }
        Ok(self.reply.clone())
    }
}

/// Panics if consulted; for paths that must never prompt.
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn read_reply(&mut self) -> io::Result<Reply> {
        panic!("confirmation must not be requested");
    }
}
