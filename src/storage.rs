//! Persistent State Store
//!
//! Key-scoped JSON values in a durable key-value store. The browser's
//! `localStorage` backs the app; `MemoryStorage` backs the tests.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::board::Board;
use crate::config::AppConfig;
use crate::error::{StorageError, StorageResult};
use crate::models::{Column, Task};

/// Raw string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable {
            message: "no window".to_string(),
        })?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable {
                message: format!("{:?}", e),
            })?
            .ok_or_else(|| StorageError::Unavailable {
                message: "localStorage is disabled".to_string(),
            })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Unavailable {
            message: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

/// In-memory store
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read `key`, falling back to `default` when absent, unreadable or malformed
pub fn load<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring malformed value for {}: {}", key, e);
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            log::warn!("Could not read {}: {}", key, e);
            default
        }
    }
}

pub fn save<T, S>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

/// Load both board sequences under the configured keys
pub fn load_board<S: KeyValueStore + ?Sized>(store: &S, config: &AppConfig) -> Board {
    let columns: Vec<Column> = load(store, &config.columns_key, Vec::new());
    let tasks: Vec<Task> = load(store, &config.tasks_key, Vec::new());
    let board = Board::from_parts(columns, tasks);
    for task in board.orphaned_tasks() {
        log::warn!("Task {} references missing column {}; it will not be shown", task.id, task.column_id);
    }
    board
}

pub fn save_board<S: KeyValueStore + ?Sized>(store: &S, config: &AppConfig, board: &Board) -> StorageResult<()> {
    save(store, &config.columns_key, board.columns())?;
    save(store, &config.tasks_key, board.tasks())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_key_returns_default() {
        let store = MemoryStorage::default();
        let value: Vec<u32> = load(&store, "absent", vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn test_load_malformed_returns_default() {
        let store = MemoryStorage::default();
        store.set("columns", "{not json").unwrap();
        let value: Vec<Column> = load(&store, "columns", Vec::new());
        assert!(value.is_empty());

        // Valid JSON of the wrong shape also falls back
        store.set("columns", r#"{"id": 1}"#).unwrap();
        let value: Vec<Column> = load(&store, "columns", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStorage::default();
        save(&store, "numbers", &[1, 2, 3]).unwrap();
        assert_eq!(store.get("numbers").unwrap().as_deref(), Some("[1,2,3]"));
        let value: Vec<i32> = load(&store, "numbers", Vec::new());
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_board_persists_under_two_keys() {
        let store = MemoryStorage::default();
        let config = AppConfig::default();
        let mut board = Board::default();
        let column = board.create_column("Todo").unwrap();
        board.create_task(column, "Ship it", "2024-01-01T00:00:00.000Z");

        save_board(&store, &config, &board).unwrap();
        assert!(store.get("columns").unwrap().is_some());
        assert!(store.get("tasks").unwrap().unwrap().contains("\"columnId\""));

        let mut loaded = load_board(&store, &config);
        assert_eq!(loaded.columns(), board.columns());
        assert_eq!(loaded.tasks(), board.tasks());
        // New identifiers continue after the stored ones
        let next = loaded.create_column("Done").unwrap();
        assert!(board.tasks().iter().all(|t| t.id != next));
        assert!(board.columns().iter().all(|c| c.id != next));
    }

    #[test]
    fn test_corrupt_tasks_keep_columns() {
        let store = MemoryStorage::default();
        let config = AppConfig::default();
        store.set("columns", r#"[{"id":4,"title":"Todo"}]"#).unwrap();
        store.set("tasks", "garbage").unwrap();

        let board = load_board(&store, &config);
        assert_eq!(board.columns().len(), 1);
        assert!(board.tasks().is_empty());
    }
}
