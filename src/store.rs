// Task collection with validation, derived views and persistence sync

use crate::error::StoreError;
use crate::filter::{SortKey, ViewFilter};
use crate::storage::StorageBackend;
use crate::task::{Priority, Task};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use std::cmp::{Ordering, Reverse};
use tracing::{debug, info, warn};

/// Storage key for the serialized collection
pub const STORAGE_KEY: &str = "todostore.tasks";

/// Longest accepted task text, in characters after trimming
pub const MAX_TEXT_LEN: usize = 200;

/// Aggregate counts over the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Ordered task collection over a persistence backend
///
/// The collection is saved after every mutation; a failed save is logged and
/// the in-memory state stays authoritative. The only transient state beyond
/// the tasks themselves is the id of the task currently being edited.
pub struct TaskStore<B: StorageBackend> {
    backend: B,
    tasks: Vec<Task>,
    editing: Option<String>,
}

impl<B: StorageBackend> TaskStore<B> {
    /// Create an empty store over `backend`; call `load` to pull saved state
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            tasks: Vec::new(),
            editing: None,
        }
    }

    /// Get a reference to the persistence backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a new task from user input
    ///
    /// Text is trimmed and must be non-empty, at most `MAX_TEXT_LEN` chars,
    /// and unique in the collection ignoring case.
    pub fn add(
        &mut self,
        text: &str,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Result<Task, StoreError> {
        let text = self.validate_text(text, None)?;
        let task = Task::new(text, priority, due_date);
        debug!(id = %task.id, "adding task");
        self.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    /// Flip a task's completion state
    ///
    /// Stamps `completed_at` when completing and clears it when the task
    /// goes back to pending.
    pub fn toggle(&mut self, id: &str) -> Result<Task, StoreError> {
        let task = self.task_mut(id)?;
        task.completed = !task.completed;
        task.completed_at = task.completed.then(Utc::now);
        let task = task.clone();
        self.persist();
        Ok(task)
    }

    /// Mark `id` as the active edit target and return a snapshot for the form
    ///
    /// Leaves the collection untouched.
    pub fn begin_edit(&mut self, id: &str) -> Result<Task, StoreError> {
        let task = self
            .tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?
            .clone();
        self.editing = Some(task.id.clone());
        Ok(task)
    }

    /// Apply a pending edit to the active target
    ///
    /// Text is validated exactly as in `add`, except the target itself is
    /// excluded from the duplicate check. On failure the edit session stays
    /// open so the caller can correct the input and retry.
    pub fn commit_edit(
        &mut self,
        text: &str,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Result<Task, StoreError> {
        let Some(id) = self.editing.clone() else {
            return Err(StoreError::NotFound("no edit in progress".to_string()));
        };
        let text = self.validate_text(text, Some(&id))?;
        let task = self.task_mut(&id)?;
        task.text = text;
        task.priority = priority;
        task.due_date = due_date;
        task.updated_at = Some(Utc::now());
        let task = task.clone();
        self.editing = None;
        self.persist();
        Ok(task)
    }

    /// Abandon the active edit, if any, without mutating the collection
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Id of the task currently being edited
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Remove a task by id
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.tasks.remove(idx);
        debug!(id, "deleted task");
        self.persist();
        Ok(())
    }

    /// Remove every task; succeeds as a no-op on an empty collection
    pub fn clear_all(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let count = self.tasks.len();
        self.tasks.clear();
        info!(count, "cleared all tasks");
        self.persist();
    }

    /// Reorder the collection in place and persist the new order
    ///
    /// All orderings are stable, so ties keep their previous relative order.
    pub fn sort(&mut self, key: SortKey) {
        match key {
            SortKey::Date => self.tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Priority => self.tasks.sort_by_key(|t| Reverse(t.priority.rank())),
            SortKey::DueDate => self.tasks.sort_by(|a, b| match (a.due_date, b.due_date) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(&b),
            }),
            SortKey::Alphabetical => self
                .tasks
                .sort_by(|a, b| a.text.to_lowercase().cmp(&b.text.to_lowercase())),
        }
        debug!(key = %key, "sorted tasks");
        self.persist();
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    /// Read-only filtered view over the stored order, recomputed per call
    pub fn view(&self, filter: ViewFilter) -> Vec<&Task> {
        self.view_at(filter, Utc::now())
    }

    /// `view` with an explicit clock, for callers that pin "now"
    pub fn view_at(&self, filter: ViewFilter, now: DateTime<Utc>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| match filter {
                ViewFilter::All => true,
                ViewFilter::Pending => !t.completed,
                ViewFilter::Completed => t.completed,
                ViewFilter::Overdue => t.is_overdue_at(now),
            })
            .collect()
    }

    /// Aggregate counts over the collection
    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Stats {
            total,
            completed,
            pending: total - completed,
        }
    }

    /// All tasks in stored order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Encode the full collection as a JSON array
    pub fn serialize(&self) -> Result<String, StoreError> {
        serde_json::to_string(&self.tasks)
            .map_err(|e| StoreError::Persistence(format!("failed to encode tasks: {e}")))
    }

    /// Replace the collection with the parsed payload
    ///
    /// Entries that fail the integrity check (missing or empty `id` or
    /// `text`, `completed` absent or not a boolean) are dropped with a
    /// warning rather than rejecting the whole load. Unknown fields are
    /// ignored. A payload that does not parse as a task array resets the
    /// collection to empty and reports `CorruptState`.
    ///
    /// Returns the number of tasks restored.
    pub fn restore(&mut self, payload: &str) -> Result<usize, StoreError> {
        self.tasks.clear();
        self.editing = None;

        let entries: Vec<Value> = serde_json::from_str(payload).map_err(|e| {
            warn!(error = %e, "saved payload is not a task array; starting empty");
            StoreError::CorruptState(e.to_string())
        })?;

        for entry in entries {
            if !has_integrity(&entry) {
                warn!("dropping saved entry without id/text/completed");
                continue;
            }
            match serde_json::from_value::<Task>(entry) {
                Ok(task) => self.tasks.push(task),
                Err(e) => warn!(error = %e, "dropping unreadable saved entry"),
            }
        }

        info!(count = self.tasks.len(), "restored tasks");
        Ok(self.tasks.len())
    }

    /// Pull the saved collection from the backend
    ///
    /// An absent key is an empty collection. A backend failure or corrupt
    /// payload leaves an empty, fully usable collection and returns the
    /// error so the caller can surface a warning.
    pub fn load(&mut self) -> Result<usize, StoreError> {
        let payload = match self.backend.get(STORAGE_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                self.tasks.clear();
                self.editing = None;
                return Ok(0);
            }
            Err(e) => {
                self.tasks.clear();
                self.editing = None;
                warn!(error = %e, "failed to read saved tasks; starting empty");
                return Err(e);
            }
        };
        self.restore(&payload)
    }

    /// Push the current collection to the backend
    pub fn save(&mut self) -> Result<(), StoreError> {
        let payload = self.serialize()?;
        self.backend.set(STORAGE_KEY, &payload)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Auto-save after a mutation; the in-memory collection stays
    /// authoritative when the write fails.
    fn persist(&mut self) {
        if let Err(e) = self.save() {
            warn!(error = %e, "failed to persist tasks; collection kept in memory");
        }
    }

    /// Trim and validate task text; `exclude` skips one id in the duplicate
    /// check so a task can be edited into a case variant of itself.
    fn validate_text(&self, text: &str, exclude: Option<&str>) -> Result<String, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let len = text.chars().count();
        if len > MAX_TEXT_LEN {
            return Err(StoreError::TooLong { len, max: MAX_TEXT_LEN });
        }
        let lowered = text.to_lowercase();
        let duplicate = self
            .tasks
            .iter()
            .any(|t| exclude != Some(t.id.as_str()) && t.text.to_lowercase() == lowered);
        if duplicate {
            return Err(StoreError::DuplicateText);
        }
        Ok(text.to_string())
    }

    fn task_mut(&mut self, id: &str) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

/// Integrity check for saved entries: id and text present and non-empty,
/// completed present and boolean.
fn has_integrity(entry: &Value) -> bool {
    entry
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
        && entry
            .get("text")
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
        && entry.get("completed").is_some_and(Value::is_boolean)
}
