use crate::error::Result;
use crate::model::Task;
use crate::storage::LocalStorage;
use std::fs;
use std::path::PathBuf;

/// Storage seam the store persists through. Production uses
/// [`JsonFileBackend`]; tests inject their own.
pub trait StorageBackend: Send {
    /// Full durable snapshot. A missing file is an empty list; an
    /// unreadable or corrupt one is an error.
    fn load(&self) -> Result<Vec<Task>>;

    /// Atomically replace the durable snapshot.
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Tasks as a pretty-printed JSON array in a single file. Array order
/// is the display order.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<Task>> {
        LocalStorage::with_lock(&self.path, || {
            if !self.path.exists() {
                return Ok(vec![]);
            }
            let json = fs::read_to_string(&self.path)?;
            let tasks = serde_json::from_str(&json)?;
            Ok(tasks)
        })
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        LocalStorage::with_lock(&self.path, || {
            let json = serde_json::to_string_pretty(tasks)?;
            LocalStorage::atomic_write(&self.path, json)
        })
    }
}

/// Durable owner of the task collection. Mutations stage in a working
/// copy and only reach disk when [`TaskStore::persist`] flushes them as
/// one atomic snapshot.
pub struct TaskStore {
    backend: Box<dyn StorageBackend>,
    /// Mirror of what is on disk.
    committed: Vec<Task>,
    /// Working copy with pending mutations.
    staged: Vec<Task>,
}

impl TaskStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend,
            committed: vec![],
            staged: vec![],
        }
    }

    /// Loads the durable snapshot, replacing any staged state.
    pub fn fetch_all(&mut self) -> Result<Vec<Task>> {
        let tasks = self.backend.load()?;
        self.committed = tasks.clone();
        self.staged = tasks.clone();
        Ok(tasks)
    }

    /// Stages a new task at the end of the list.
    pub fn create(&mut self, title: &str) -> Task {
        let task = Task::new(title);
        self.staged.push(task.clone());
        task
    }

    /// Stages a title change. `None` if no task has that id.
    pub fn update(&mut self, id: &str, title: &str) -> Option<Task> {
        let task = self.staged.iter_mut().find(|t| t.id == id)?;
        task.title = title.to_string();
        Some(task.clone())
    }

    /// Stages a removal, returning the task. `None` if no task has
    /// that id.
    pub fn delete(&mut self, id: &str) -> Option<Task> {
        let pos = self.staged.iter().position(|t| t.id == id)?;
        Some(self.staged.remove(pos))
    }

    /// Flushes staged state to disk as one atomic snapshot. A clean
    /// store skips the write, so repeated calls are idempotent. On
    /// failure the committed mirror is untouched.
    pub fn persist(&mut self) -> Result<()> {
        if !self.is_dirty() {
            return Ok(());
        }
        self.backend.save(&self.staged)?;
        self.committed = self.staged.clone();
        Ok(())
    }

    /// Discards pending mutations, reverting the working copy to the
    /// last durable state.
    pub fn rollback(&mut self) {
        self.staged = self.committed.clone();
    }

    pub fn is_dirty(&self) -> bool {
        self.staged != self.committed
    }
}
