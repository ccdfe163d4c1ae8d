//! Browser `localStorage` helpers for raw string slots.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the session
//! store and dark-mode preference never repeat web-sys glue. Outside the
//! browser every read is empty and every write reports `Unavailable`.

use thiserror::Error;

/// Failure writing to browser storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No `window` or `localStorage` (SSR, private mode, sandboxed frame).
    #[error("browser storage unavailable")]
    Unavailable,

    /// The browser refused the write (quota exceeded, security error).
    #[error("storage write rejected: {0}")]
    WriteRejected(String),

    /// The value could not be encoded before writing.
    #[error("storage encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `raw` under `key`, replacing any previous value.
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] outside the browser or when storage
/// is disabled, and [`StorageError::WriteRejected`] when the browser refuses
/// the write.
pub fn save_raw(key: &str, raw: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, raw)
            .map_err(|e| StorageError::WriteRejected(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
        Err(StorageError::Unavailable)
    }
}

/// Remove `key`. Missing keys and unavailable storage are both no-ops.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
