use crate::error::Result;
use crate::model::Task;
use crate::store::TaskStore;

/// Mediates between the rendered list and the store: applies each user
/// intent to the display projection, persists, and reverts the
/// projection when the write fails so both views keep agreeing.
///
/// `Ok(true)` means the mutation is durable; `Ok(false)` means the
/// intent was a no-op (empty text, stale id); `Err` means durable state
/// is unchanged and the projection was rolled back to match.
pub struct TaskListController {
    store: TaskStore,
    display: Vec<Task>,
}

impl TaskListController {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            display: vec![],
        }
    }

    /// One-time startup load. On failure the projection stays empty
    /// and the error is the caller's to show.
    pub fn load(&mut self) -> Result<()> {
        self.display.clear();
        self.display = self.store.fetch_all()?;
        Ok(())
    }

    /// Display projection, in order.
    pub fn tasks(&self) -> &[Task] {
        &self.display
    }

    /// Appends a task with the given title.
    pub fn add(&mut self, title: &str) -> Result<bool> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(false);
        }
        let task = self.store.create(title);
        self.display.push(task);
        if let Err(e) = self.store.persist() {
            self.display.pop();
            self.store.rollback();
            return Err(e);
        }
        Ok(true)
    }

    /// Retitles the task with `id`.
    pub fn edit(&mut self, id: &str, title: &str) -> Result<bool> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(false);
        }
        let Some(pos) = self.display.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        let previous = std::mem::replace(&mut self.display[pos].title, title.to_string());
        if self.store.update(id, title).is_none() {
            self.display[pos].title = previous;
            return Ok(false);
        }
        if let Err(e) = self.store.persist() {
            self.display[pos].title = previous;
            self.store.rollback();
            return Err(e);
        }
        Ok(true)
    }

    /// Removes the task with `id`.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let Some(pos) = self.display.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        let removed = self.display.remove(pos);
        if self.store.delete(id).is_none() {
            self.display.insert(pos, removed);
            return Ok(false);
        }
        if let Err(e) = self.store.persist() {
            self.display.insert(pos, removed);
            self.store.rollback();
            return Err(e);
        }
        Ok(true)
    }
}
