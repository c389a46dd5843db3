use std::collections::BTreeMap;
use std::sync::RwLock;

use fstore_types::FileName;

use crate::error::StoreResult;
use crate::traits::FileStore;

/// In-memory, BTreeMap-based file store.
///
/// Intended for tests and embedding. Files are held in memory behind a
/// `RwLock` and cloned on read. The map is ordered, so `list` needs no sort.
pub struct InMemoryFileStore {
    files: RwLock<BTreeMap<FileName, Vec<u8>>>,
}

impl InMemoryFileStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            files: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of files currently stored.
    pub fn len(&self) -> usize {
        self.files.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.files.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for InMemoryFileStore {
    fn exists(&self, name: &FileName) -> StoreResult<bool> {
        let map = self.files.read().expect("lock poisoned");
        Ok(map.contains_key(name))
    }

    fn read(&self, name: &FileName) -> StoreResult<Option<Vec<u8>>> {
        let map = self.files.read().expect("lock poisoned");
        Ok(map.get(name).cloned())
    }

    fn write(&self, name: &FileName, data: &[u8]) -> StoreResult<()> {
        let mut map = self.files.write().expect("lock poisoned");
        map.insert(name.clone(), data.to_vec());
        Ok(())
    }

    fn remove(&self, name: &FileName) -> StoreResult<bool> {
        let mut map = self.files.write().expect("lock poisoned");
        Ok(map.remove(name).is_some())
    }

    fn list(&self) -> StoreResult<Vec<FileName>> {
        let map = self.files.read().expect("lock poisoned");
        Ok(map.keys().cloned().collect())
    }

    fn read_all(&self) -> StoreResult<Vec<(FileName, Vec<u8>)>> {
        let map = self.files.read().expect("lock poisoned");
        Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

impl std::fmt::Debug for InMemoryFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryFileStore")
            .field("file_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> FileName {
        FileName::new(s).unwrap()
    }

    #[test]
    fn write_and_read() {
        let store = InMemoryFileStore::new();
        store.write(&name("a.txt"), b"hello").unwrap();
        assert_eq!(store.read(&name("a.txt")).unwrap().unwrap(), b"hello");
        assert!(store.exists(&name("a.txt")).unwrap());
    }

    #[test]
    fn read_missing_returns_none() {
        let store = InMemoryFileStore::new();
        assert!(store.read(&name("nope")).unwrap().is_none());
        assert!(!store.exists(&name("nope")).unwrap());
    }

    #[test]
    fn write_overwrites() {
        let store = InMemoryFileStore::new();
        store.write(&name("a"), b"one").unwrap();
        store.write(&name("a"), b"two").unwrap();
        assert_eq!(store.read(&name("a")).unwrap().unwrap(), b"two");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_reports_existence() {
        let store = InMemoryFileStore::new();
        store.write(&name("a"), b"x").unwrap();
        assert!(store.remove(&name("a")).unwrap());
        assert!(!store.remove(&name("a")).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn list_is_sorted() {
        let store = InMemoryFileStore::new();
        for n in ["c", "a", "b"] {
            store.write(&name(n), n.as_bytes()).unwrap();
        }
        let names: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(FileName::into_string)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn read_all_pairs_names_with_content() {
        let store = InMemoryFileStore::new();
        store.write(&name("b"), b"2").unwrap();
        store.write(&name("a"), b"1").unwrap();
        let all = store.read_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], (name("a"), b"1".to_vec()));
        assert_eq!(all[1], (name("b"), b"2".to_vec()));
    }

    #[test]
    fn debug_shows_count() {
        let store = InMemoryFileStore::new();
        store.write(&name("a"), b"x").unwrap();
        assert!(format!("{store:?}").contains("file_count: 1"));
    }
}
