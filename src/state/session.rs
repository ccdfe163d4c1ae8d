//! Persisted session record and the single-slot store that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the only code that touches the persisted credential. Guards
//! read it on every gated navigation and the auth form writes it on a
//! successful submit; nobody else reaches the storage primitive directly.
//!
//! DESIGN
//! ======
//! The slot holds a JSON object `{"token": "<string>", "exp": <epoch ms>}`.
//! A value that does not decode to exactly that shape is malformed and reads
//! the same as an empty slot. Backends only support whole-value replace and
//! remove, so no reader can observe a half-written record.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::ConsoleConfig;
use crate::util::clock;
use crate::util::local_storage::{self, StorageError};

/// Authenticated visitor credential with an absolute expiry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionRecord {
    pub token: String,
    /// Expiry in epoch milliseconds.
    pub exp: i64,
}

impl SessionRecord {
    /// Whether the record is no longer valid at `now`.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }
}

/// What the slot held at read time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredSession {
    Absent,
    Malformed,
    Present(SessionRecord),
}

/// Raw single-slot storage behind a [`SessionStore`].
pub trait SessionBackend {
    fn load(&self) -> Option<String>;

    /// Replace the slot contents.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing storage rejects the write.
    fn store(&self, raw: &str) -> Result<(), StorageError>;

    fn remove(&self);
}

/// Browser `localStorage` slot under a fixed key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageBackend {
    key: String,
}

impl LocalStorageBackend {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionBackend for LocalStorageBackend {
    fn load(&self) -> Option<String> {
        local_storage::load_raw(&self.key)
    }

    fn store(&self, raw: &str) -> Result<(), StorageError> {
        local_storage::save_raw(&self.key, raw)
    }

    fn remove(&self) {
        local_storage::remove(&self.key);
    }
}

/// In-process slot. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryBackend {
    /// Backend pre-seeded with a raw stored value.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(raw.into()))) }
    }

    /// Current raw slot contents.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Option<String> {
        self.raw()
    }

    fn store(&self, raw: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(raw.to_owned());
        Ok(())
    }

    fn remove(&self) {
        self.slot.borrow_mut().take();
    }
}

/// Owner of the single persisted session slot.
#[derive(Clone, Debug)]
pub struct SessionStore<B> {
    backend: B,
}

/// Store used by pages and components in the running console.
pub type BrowserSessionStore = SessionStore<LocalStorageBackend>;

impl BrowserSessionStore {
    pub fn browser(config: &ConsoleConfig) -> Self {
        Self::new(LocalStorageBackend::new(config.session_storage_key.clone()))
    }
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Write a record expiring `ttl_ms` from now, replacing any prior record.
    pub fn save(&self, token: &str, ttl_ms: i64) {
        self.save_at(token, ttl_ms, clock::now_millis());
    }

    /// Write a record expiring `ttl_ms` after `now`.
    pub fn save_at(&self, token: &str, ttl_ms: i64, now: i64) {
        let record = SessionRecord { token: token.to_owned(), exp: now.saturating_add(ttl_ms) };
        if let Err(e) = self.write(&record) {
            log::warn!("session record not persisted: {e}");
        }
    }

    fn write(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record)?;
        self.backend.store(&raw)
    }

    /// Inspect the slot, distinguishing empty from malformed.
    pub fn load(&self) -> StoredSession {
        let Some(raw) = self.backend.load() else {
            return StoredSession::Absent;
        };
        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => StoredSession::Present(record),
            Err(e) => {
                log::debug!("stored session malformed: {e}");
                StoredSession::Malformed
            }
        }
    }

    /// The stored record, or `None` when the slot is empty or malformed.
    pub fn read(&self) -> Option<SessionRecord> {
        match self.load() {
            StoredSession::Present(record) => Some(record),
            StoredSession::Absent | StoredSession::Malformed => None,
        }
    }

    /// Remove the record. Idempotent.
    pub fn clear(&self) {
        self.backend.remove();
    }

    pub fn is_expired(&self, record: &SessionRecord, now: i64) -> bool {
        record.is_expired(now)
    }

    /// A well-formed, unexpired record is stored. Never mutates the slot.
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(clock::now_millis())
    }

    pub fn is_authenticated_at(&self, now: i64) -> bool {
        self.read().is_some_and(|record| !record.is_expired(now))
    }
}
