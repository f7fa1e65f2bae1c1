//! The durable high-score scalar
//!
//! A single non-negative integer under a fixed key, surviving reloads.
//! LocalStorage on the web build, a small file beside the executable on
//! native. Reads fall back to 0; writes are best-effort and logged.

/// Fixed identifier for the persisted scalar
pub const STORAGE_KEY: &str = "typefall_high_score";

/// Get/set boundary for the persisted high score. Implementations must
/// write synchronously; the game updates the store the moment the score
/// passes the old record, never in a batch.
pub trait ScoreStore {
    fn load(&self) -> u64;
    fn store(&mut self, value: u64);
}

/// LocalStorage-backed store (the deployed web surface)
#[cfg(target_arch = "wasm32")]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStore {
    fn load(&self) -> u64 {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                match serde_json::from_str::<u64>(&raw) {
                    Ok(value) => return value,
                    Err(_) => log::warn!("stored high score is not a number, ignoring"),
                }
            }
        }
        0
    }

    fn store(&mut self, value: u64) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if let Some(storage) = storage {
            if let Ok(raw) = serde_json::to_string(&value) {
                let _ = storage.set_item(STORAGE_KEY, &raw);
                log::info!("high score saved: {}", value);
            }
        }
    }
}

/// File-backed store for native builds, kept next to the executable
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new() -> Self {
        Self {
            path: Self::score_path(),
        }
    }

    fn score_path() -> std::path::PathBuf {
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join("typefall.score");
            }
        }
        std::path::PathBuf::from("typefall.score")
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScoreStore for FileStore {
    fn load(&self) -> u64 {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return 0;
        };
        match serde_json::from_str::<u64>(raw.trim()) {
            Ok(value) => value,
            Err(_) => {
                log::warn!("stored high score is not a number, ignoring");
                0
            }
        }
    }

    fn store(&mut self, value: u64) {
        if let Ok(raw) = serde_json::to_string(&value) {
            let _ = std::fs::write(&self.path, raw);
            log::info!("high score saved: {}", value);
        }
    }
}

/// Non-persistent store for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: u64,
}

impl MemoryStore {
    pub fn new(value: u64) -> Self {
        Self { value }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.value
    }

    fn store(&mut self, value: u64) {
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), 0);
        store.store(120);
        assert_eq!(store.load(), 120);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_roundtrip() {
        let path = std::env::temp_dir().join(format!("typefall-test-{}.score", std::process::id()));
        let mut store = FileStore { path: path.clone() };
        assert_eq!(store.load(), 0);

        store.store(420);
        assert_eq!(store.load(), 420);
        assert_eq!(FileStore { path: path.clone() }.load(), 420);

        let _ = std::fs::remove_file(path);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_rejects_garbage() {
        let path = std::env::temp_dir().join(format!("typefall-garbage-{}.score", std::process::id()));
        std::fs::write(&path, "not a number").unwrap();
        assert_eq!(FileStore { path: path.clone() }.load(), 0);
        let _ = std::fs::remove_file(path);
    }
}
