use fstore_types::FileName;

use crate::error::StoreResult;

/// Name-keyed byte storage underneath a [`crate::FileService`].
///
/// Backends are deliberately dumb: they never hash, dedupe, or interpret
/// content. All implementations must satisfy these invariants:
/// - A name maps to at most one byte sequence.
/// - `write` replaces any previous content for the name in full.
/// - `list` returns every stored name exactly once, sorted.
/// - All I/O errors are propagated, never silently ignored.
pub trait FileStore: Send + Sync {
    /// Check whether a file with this name exists.
    fn exists(&self, name: &FileName) -> StoreResult<bool>;

    /// Read a file's full content.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    fn read(&self, name: &FileName) -> StoreResult<Option<Vec<u8>>>;

    /// Create or overwrite a file.
    fn write(&self, name: &FileName, data: &[u8]) -> StoreResult<()>;

    /// Delete a file. Returns `true` if the file existed.
    fn remove(&self, name: &FileName) -> StoreResult<bool>;

    /// Names of all stored files, sorted lexicographically.
    fn list(&self) -> StoreResult<Vec<FileName>>;

    /// Read every stored file in name order.
    ///
    /// Default implementation calls `list()` then `read()` for each name,
    /// skipping files removed in between.
    fn read_all(&self) -> StoreResult<Vec<(FileName, Vec<u8>)>> {
        let mut out = Vec::new();
        for name in self.list()? {
            if let Some(data) = self.read(&name)? {
                out.push((name, data));
            }
        }
        Ok(out)
    }
}
