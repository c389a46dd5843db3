//! Filesystem-backed file store.
//!
//! Files live flat in a single directory under their own names:
//!
//! ```text
//! {root}/
//! ├── notes.txt
//! ├── report.md
//! └── .fstore-tmp-XXXXXX   (in-flight write, never listed)
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fstore_types::FileName;

use crate::error::StoreResult;
use crate::traits::FileStore;

/// Prefix of the temporary files used for atomic writes.
pub const TEMP_PREFIX: &str = ".fstore-tmp-";

/// File store backed by a plain directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory holding the stored files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, name: &FileName) -> PathBuf {
        self.root.join(name.as_str())
    }
}

impl FileStore for DirectoryStore {
    fn exists(&self, name: &FileName) -> StoreResult<bool> {
        match fs::symlink_metadata(self.path_of(name)) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn read(&self, name: &FileName) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(self.path_of(name)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, name: &FileName, data: &[u8]) -> StoreResult<()> {
        // Write to a sibling temp file, then rename over the target so readers
        // never see a half-written file.
        let mut tmp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(&self.root)?;
        tmp.write_all(data)?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.path_of(name)).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&self, name: &FileName) -> StoreResult<bool> {
        match fs::remove_file(self.path_of(name)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self) -> StoreResult<Vec<FileName>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let raw = entry.file_name();
            let Some(raw) = raw.to_str() else {
                tracing::warn!(path = ?entry.path(), "skipping non UTF-8 file name");
                continue;
            };
            if raw.starts_with(TEMP_PREFIX) {
                continue;
            }
            match FileName::new(raw) {
                Ok(name) => names.push(name),
                Err(e) => tracing::warn!(error = %e, "skipping unusable file name"),
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn name(s: &str) -> FileName {
        FileName::new(s).unwrap()
    }

    fn setup() -> (TempDir, DirectoryStore) {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::open(dir.path().join("files")).unwrap();
        (dir, store)
    }

    #[test]
    fn open_creates_directory() {
        let (dir, store) = setup();
        assert!(dir.path().join("files").is_dir());
        assert_eq!(store.root(), dir.path().join("files"));
    }

    #[test]
    fn write_lands_on_disk() {
        let (_dir, store) = setup();
        store.write(&name("a.txt"), b"hello").unwrap();
        let on_disk = fs::read(store.root().join("a.txt")).unwrap();
        assert_eq!(on_disk, b"hello");
    }

    #[test]
    fn read_roundtrips_binary() {
        let (_dir, store) = setup();
        let data: Vec<u8> = (0..=255).collect();
        store.write(&name("bin"), &data).unwrap();
        assert_eq!(store.read(&name("bin")).unwrap().unwrap(), data);
    }

    #[test]
    fn read_missing_returns_none() {
        let (_dir, store) = setup();
        assert!(store.read(&name("missing")).unwrap().is_none());
        assert!(!store.exists(&name("missing")).unwrap());
    }

    #[test]
    fn overwrite_replaces_content() {
        let (_dir, store) = setup();
        store.write(&name("a"), b"a much longer first version").unwrap();
        store.write(&name("a"), b"short").unwrap();
        assert_eq!(store.read(&name("a")).unwrap().unwrap(), b"short");
    }

    #[test]
    fn remove_reports_existence() {
        let (_dir, store) = setup();
        store.write(&name("a"), b"x").unwrap();
        assert!(store.remove(&name("a")).unwrap());
        assert!(!store.remove(&name("a")).unwrap());
        assert!(!store.root().join("a").exists());
    }

    #[test]
    fn list_is_sorted_and_skips_dirs_and_temp_files() {
        let (_dir, store) = setup();
        store.write(&name("b"), b"2").unwrap();
        store.write(&name("a"), b"1").unwrap();
        fs::create_dir(store.root().join("subdir")).unwrap();
        fs::write(store.root().join(format!("{TEMP_PREFIX}leftover")), b"junk").unwrap();

        let names = store.list().unwrap();
        assert_eq!(names, vec![name("a"), name("b")]);
    }

    #[test]
    fn sees_files_placed_externally() {
        let (_dir, store) = setup();
        fs::write(store.root().join("dropped.txt"), b"external").unwrap();
        assert!(store.exists(&name("dropped.txt")).unwrap());
        assert_eq!(store.list().unwrap(), vec![name("dropped.txt")]);
    }
}
