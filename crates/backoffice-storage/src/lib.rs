// Durable client-side key-value storage used to persist the signed-in session.
use async_trait::async_trait;
use std::fmt;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    /// Key is empty or would escape the storage directory.
    InvalidKey(String),
    Io(std::io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "storage key {key:?} is not usable"),
            Self::Io(err) => write!(f, "storage unavailable: {err}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// String key-value store that survives process restarts (or, for
/// [`MemoryStorage`], the lifetime of the value).
///
/// ```
/// use backoffice_storage::{DurableStorage, MemoryStorage};
///
/// let storage = MemoryStorage::new();
/// let rt = tokio::runtime::Runtime::new().expect("rt");
/// rt.block_on(async {
///     storage.set("backoffice_user", "{}").await.expect("set");
///     assert_eq!(storage.get("backoffice_user").await.expect("get").as_deref(), Some("{}"));
///     storage.remove("backoffice_user").await.expect("remove");
///     assert!(storage.get("backoffice_user").await.expect("get").is_none());
/// });
/// ```
#[async_trait]
pub trait DurableStorage: Send + Sync {
    /// Read the value stored under `key`; a missing key is `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<String>>;
    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Remove `key`. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Reject keys that cannot safely double as file names.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
        && key != "."
        && key != "..";
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_key_accepts_plain_names() {
        for key in ["backoffice_user", "session-v2", "a.b"] {
            assert!(validate_key(key).is_ok(), "{key}");
        }
    }

    #[test]
    fn validate_key_rejects_paths_and_empty() {
        for key in ["", ".", "..", "../etc", "a/b", "with space"] {
            let err = validate_key(key).expect_err("invalid");
            assert!(matches!(err, StorageError::InvalidKey(ref k) if k == key));
        }
    }

    #[test]
    fn error_display_and_source() {
        let io = StorageError::from(std::io::Error::other("disk full"));
        assert_eq!(io.to_string(), "storage unavailable: disk full");
        assert!(std::error::Error::source(&io).is_some());

        let invalid = StorageError::InvalidKey("a/b".to_string());
        assert!(invalid.to_string().contains("a/b"));
        assert!(std::error::Error::source(&invalid).is_none());
    }
}
