//! Durable key-value store backed by one file per key.
//!
//! Writes go through a temporary file, `fsync` and an atomic rename, under an
//! exclusive lock file, so a crash never leaves a half-written document.

use designai_core::error::Result;
use designai_core::store::KeyValueStore;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write as IoWrite};
use std::path::{Path, PathBuf};

/// A directory of `<key>.json` files.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Maps a key to its file; characters outside `[A-Za-z0-9._-]` become `_`.
    fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_stem))
    }

    /// Temporary file path for atomic writes, next to the target.
    fn temp_path(path: &Path) -> PathBuf {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.with_file_name(format!(".{}.tmp", file_name))
    }
}

impl KeyValueStore for FileKeyValueStore {
    /// Checks without touching the filesystem: the directory, or the nearest
    /// existing ancestor when it has not been created yet, must be a writable
    /// directory.
    fn is_available(&self) -> bool {
        self.dir
            .ancestors()
            .map(|dir| if dir.as_os_str().is_empty() { Path::new(".") } else { dir })
            .find_map(|dir| fs::metadata(dir).ok())
            .map(|meta| meta.is_dir() && !meta.permissions().readonly())
            .unwrap_or(false)
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let _lock = FileLock::acquire(&path)?;

        // Write to temporary file in the same directory
        let tmp_path = Self::temp_path(&path);
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(value.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.sync_all()?;
        drop(tmp_file);

        // Atomic rename
        fs::rename(&tmp_path, &path)?;

        tracing::debug!(key, path = %path.display(), "stored document");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if !self.dir.exists() {
            return Ok(());
        }

        let _lock = FileLock::acquire(&path)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, "removed document");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// A file lock guard that automatically releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Acquires an exclusive lock next to `path`.
    fn acquire(path: &Path) -> std::io::Result<Self> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped
        let _ = fs::remove_file(&self.lock_path);
    }
}
