use crate::error::Result;
use directories::ProjectDirs;
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_FILE: &str = "tasks.json";

pub struct LocalStorage;

impl LocalStorage {
    /// Default location of the task file (platform data dir).
    pub fn default_path() -> Option<PathBuf> {
        if let Some(proj) = ProjectDirs::from("com", "ticked", "ticked") {
            let data_dir = proj.data_dir();
            if !data_dir.exists() {
                let _ = fs::create_dir_all(data_dir);
            }
            return Some(data_dir.join(DATA_FILE));
        }
        None
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Runs `f` while holding an exclusive advisory lock next to `path`.
    /// Guards against a second running instance, not against threads.
    pub fn with_lock<T, F>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = path.with_extension("lock");
        let lock = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)?;
        FileExt::lock_exclusive(&lock)?;
        let result = f();
        let _ = FileExt::unlock(&lock);
        result
    }
}
