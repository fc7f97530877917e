// Todostore - task list management with validated edits and local persistence

pub mod config;
pub mod error;
pub mod filter;
pub mod storage;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use config::Config;
pub use error::StoreError;
pub use filter::{SortKey, ViewFilter};
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
pub use store::{MAX_TEXT_LEN, STORAGE_KEY, Stats, TaskStore};
pub use task::{Priority, Task};
