//! Draft Persistence
//!
//! Serializes the receipt draft to the browser's local key-value store
//! under a single fixed key and restores it on page load. Access goes
//! through the `StorageBackend` trait so the repository logic runs
//! against an in-memory map in tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;

use crate::models::ReceiptDraft;

/// Fixed localStorage key for the persisted snapshot.
pub const STORAGE_KEY: &str = "formData";

/// Storage failures, surfaced once per operation.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The store rejected a write or delete (quota exceeded, privacy mode).
    Write(String),
    /// The stored snapshot is not valid serialized data.
    Parse(String),
    /// The store itself could not be reached.
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Write(msg) => write!(f, "storage write failed: {}", msg),
            StorageError::Parse(msg) => write!(f, "stored draft is malformed: {}", msg),
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Key-value access behind the repository.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

fn js_error(err: wasm_bindgen::JsValue) -> String {
    format!("{:?}", err)
}

/// Browser localStorage backend.
///
/// The storage handle is resolved once at construction. When the browser
/// blocks access (sandboxed frame, privacy settings) every operation
/// reports the store as unavailable instead of panicking.
#[derive(Clone)]
pub struct LocalStorageBackend {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, String> {
        self.storage
            .as_ref()
            .ok_or_else(|| "local storage is not accessible".to_string())
    }
}

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}

/// In-memory backend for tests.
#[derive(Default)]
pub struct MemoryBackend {
    map: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail, emulating an exhausted quota.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        if self.fail_writes.get() {
            return Err("quota exceeded".to_string());
        }
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.map.borrow_mut().remove(key);
        Ok(())
    }
}

/// What `persist` did with the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The draft carried data and was written.
    Saved,
    /// The draft was empty; the stored key was deleted instead.
    Cleared,
}

/// Persisted-draft repository over the fixed storage key.
#[derive(Clone)]
pub struct DraftRepository<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> DraftRepository<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Serialize and write the draft. Encoding finishes before the write
    /// starts, so a failed save leaves the previously stored value intact.
    pub fn save(&self, draft: &ReceiptDraft) -> Result<(), StorageError> {
        let json = serde_json::to_string(draft)
            .map_err(|err| StorageError::Write(format!("encode: {}", err)))?;
        self.backend
            .set_item(STORAGE_KEY, &json)
            .map_err(StorageError::Write)
    }

    /// Read the stored draft. An absent key is `Ok(None)`; a snapshot that
    /// no longer parses is a parse error for the caller to log and skip.
    pub fn load(&self) -> Result<Option<ReceiptDraft>, StorageError> {
        let json = match self.backend.get_item(STORAGE_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return Ok(None),
            Err(err) => return Err(StorageError::Unavailable(err)),
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|err| StorageError::Parse(err.to_string()))
    }

    /// Delete the stored draft. Idempotent.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.backend
            .remove_item(STORAGE_KEY)
            .map_err(StorageError::Write)
    }

    /// Write the draft when it carries data, delete the key when it does
    /// not. Keeps storage free of all-blank snapshots.
    pub fn persist(&self, draft: &ReceiptDraft) -> Result<SaveOutcome, StorageError> {
        if draft.is_empty() {
            self.clear()?;
            Ok(SaveOutcome::Cleared)
        } else {
            self.save(draft)?;
            Ok(SaveOutcome::Saved)
        }
    }
}
