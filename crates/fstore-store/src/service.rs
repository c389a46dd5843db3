//! The file store operations exposed over HTTP.
//!
//! [`FileService`] owns a storage backend and the [`HashIndex`], and
//! implements add, list, remove, update, word count, and frequent words on
//! top of them.
//!
//! Mutations (add, remove, update) run under the index mutex, so a whole add
//! batch checks and writes without interleaving with other mutations. Reads
//! go straight to the backend.

use std::sync::{Arc, Mutex, MutexGuard};

use fstore_crypto::ContentHasher;
use fstore_types::{ContentHash, FileName, SortOrder, WordFrequency};

use crate::error::{StoreError, StoreResult};
use crate::index::HashIndex;
use crate::traits::FileStore;
use crate::words::{count_words, WordCounter};

/// One file of an add batch, as received from the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewFile {
    /// Unvalidated client-supplied name.
    pub name: String,
    pub data: Vec<u8>,
}

impl NewFile {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Summary counters for a store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub files: usize,
    pub bytes: u64,
    pub indexed_hashes: usize,
}

/// File store with content-hash deduplication.
pub struct FileService {
    backend: Arc<dyn FileStore>,
    index: Mutex<HashIndex>,
}

impl FileService {
    /// Wrap a backend with an empty hash index.
    ///
    /// Files already present in the backend are not indexed; use
    /// [`FileService::open`] to pick them up.
    pub fn new(backend: Arc<dyn FileStore>) -> Self {
        Self {
            backend,
            index: Mutex::new(HashIndex::new()),
        }
    }

    /// Wrap a backend and index every file it already holds.
    pub fn open(backend: Arc<dyn FileStore>) -> StoreResult<Self> {
        let service = Self::new(backend);
        let indexed = service.rebuild_index()?;
        tracing::info!(indexed, "hash index rebuilt from store");
        Ok(service)
    }

    pub fn backend(&self) -> &Arc<dyn FileStore> {
        &self.backend
    }

    /// Re-hash every stored file and replace the index.
    ///
    /// When several stored files share content, the first in name order owns
    /// the hash. Returns the number of indexed hashes.
    pub fn rebuild_index(&self) -> StoreResult<usize> {
        let mut index = self.lock_index();
        index.clear();
        for (name, data) in self.backend.read_all()? {
            let hash = ContentHasher::hash(&data);
            if !index.insert(hash, name.clone()) {
                tracing::debug!(%name, hash = %hash.short_hex(), "stored file duplicates earlier content");
            }
        }
        Ok(index.len())
    }

    /// Store a batch of new files, in order, stopping at the first conflict.
    ///
    /// Each file is rejected if its name is invalid, its name is already
    /// stored, or its content hash is already indexed (including content
    /// added earlier in the same batch). Files before the failing one stay
    /// stored. Returns the stored names on success.
    pub fn add(&self, files: Vec<NewFile>) -> StoreResult<Vec<FileName>> {
        let mut index = self.lock_index();
        let mut stored = Vec::with_capacity(files.len());
        for file in files {
            let name = Self::parse_name(&file.name)?;

            if self.backend.exists(&name)? {
                tracing::warn!(%name, "rejected upload: name already stored");
                return Err(StoreError::NameExists(name));
            }

            let hash = ContentHasher::hash(&file.data);
            if let Some(existing) = index.lookup(&hash) {
                tracing::warn!(%name, %existing, "rejected upload: duplicate content");
                return Err(StoreError::DuplicateContent {
                    name,
                    existing: existing.clone(),
                });
            }

            self.backend.write(&name, &file.data)?;
            index.insert(hash, name.clone());
            tracing::info!(%name, bytes = file.data.len(), hash = %hash.short_hex(), "file stored");
            stored.push(name);
        }
        Ok(stored)
    }

    /// Names of all stored files, sorted.
    pub fn list(&self) -> StoreResult<Vec<FileName>> {
        self.backend.list()
    }

    /// Delete a stored file and release its content hash.
    ///
    /// If another stored file holds the same content, it takes over the hash.
    pub fn remove(&self, name: &str) -> StoreResult<FileName> {
        let name = Self::parse_name(name)?;
        let mut index = self.lock_index();
        if !self.backend.remove(&name)? {
            return Err(StoreError::NotFound(name));
        }
        if let Some(released) = index.forget(&name) {
            self.reassign(&mut index, released)?;
        }
        tracing::info!(%name, "file removed");
        Ok(name)
    }

    /// Replace the content of an existing file.
    ///
    /// No duplicate check: the new content may match another stored file, in
    /// which case the other file keeps ownership of the hash. The old content
    /// hash passes to any other file still holding it.
    pub fn update(&self, name: &str, data: &[u8]) -> StoreResult<FileName> {
        let name = Self::parse_name(name)?;
        let mut index = self.lock_index();
        if !self.backend.exists(&name)? {
            return Err(StoreError::NotFound(name));
        }
        self.backend.write(&name, data)?;
        let hash = ContentHasher::hash(data);
        let previous = index.hash_of(&name).copied();
        if !index.insert(hash, name.clone()) {
            tracing::debug!(%name, "updated content duplicates another stored file");
        }
        if let Some(released) = previous.filter(|old| *old != hash) {
            self.reassign(&mut index, released)?;
        }
        tracing::info!(%name, bytes = data.len(), "file updated");
        Ok(name)
    }

    /// Hand a released hash to the first unindexed file that still holds
    /// that content, if any.
    fn reassign(&self, index: &mut HashIndex, hash: ContentHash) -> StoreResult<()> {
        for name in self.backend.list()? {
            if index.hash_of(&name).is_some() {
                continue;
            }
            let Some(data) = self.backend.read(&name)? else {
                continue;
            };
            if ContentHasher::hash(&data) == hash {
                tracing::debug!(%name, hash = %hash.short_hex(), "content hash reassigned");
                index.insert(hash, name);
                break;
            }
        }
        Ok(())
    }

    /// Total whitespace-separated tokens across every stored file.
    pub fn word_count(&self) -> StoreResult<u64> {
        let mut total = 0;
        for name in self.backend.list()? {
            if let Some(data) = self.backend.read(&name)? {
                total += count_words(&data);
            }
        }
        Ok(total)
    }

    /// The `limit` most (or, with [`SortOrder::Asc`], least) frequent tokens
    /// across every stored file.
    pub fn frequent_words(&self, limit: usize, order: SortOrder) -> StoreResult<Vec<WordFrequency>> {
        let mut counter = WordCounter::new();
        for (_, data) in self.backend.read_all()? {
            counter.add_bytes(&data);
        }
        tracing::debug!(
            distinct = counter.distinct(),
            total = counter.total(),
            limit,
            %order,
            "ranked store vocabulary"
        );
        Ok(counter.frequent_words(limit, order))
    }

    pub fn stats(&self) -> StoreResult<StoreStats> {
        let indexed_hashes = self.lock_index().len();
        let files = self.backend.read_all()?;
        Ok(StoreStats {
            files: files.len(),
            bytes: files.iter().map(|(_, data)| data.len() as u64).sum(),
            indexed_hashes,
        })
    }

    fn parse_name(name: &str) -> StoreResult<FileName> {
        FileName::new(name).map_err(|_| StoreError::InvalidName(name.to_string()))
    }

    fn lock_index(&self) -> MutexGuard<'_, HashIndex> {
        self.index.lock().expect("lock poisoned")
    }
}

impl std::fmt::Debug for FileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileService")
            .field("indexed_hashes", &self.lock_index().len())
            .finish()
    }
}
