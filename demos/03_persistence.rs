//! Example 03: Persistence
//!
//! This example demonstrates saving to a file backend, reopening the store
//! in a second instance, and how a corrupt payload degrades to an empty
//! collection instead of failing the load.
//!
//! Run with: cargo run --example 03_persistence

use eyre::Result;
use todostore::{FileBackend, MemoryBackend, Priority, STORAGE_KEY, StorageBackend, TaskStore};

fn main() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let store_path = temp_dir.path().to_path_buf();

    println!("Todostore Persistence Example");
    println!("=============================\n");
    println!("Store path: {}\n", store_path.display());

    // Every mutation persists automatically
    println!("1. SAVE - Mutations persist as they happen...");
    let mut store = TaskStore::new(FileBackend::open(&store_path)?);
    store.add("Buy milk", Priority::Medium, None)?;
    store.add("Walk dog", Priority::Low, None)?;
    println!("   Saved {} tasks\n", store.len());

    // A second store over the same directory sees the saved state
    println!("2. RELOAD - Reopening the store...");
    let mut reopened = TaskStore::new(FileBackend::open(&store_path)?);
    let count = reopened.load()?;
    println!("   Loaded {count} task(s):");
    for task in reopened.tasks() {
        println!("   - {}", task.text);
    }
    println!();

    // Entries failing the integrity check are dropped, not fatal
    println!("3. PARTIAL DAMAGE - Bad entries are dropped on restore...");
    let mut store = TaskStore::new(MemoryBackend::new());
    let payload = r#"[
        {"id":"t1","text":"Survivor","completed":false},
        {"text":"No id here","completed":false}
    ]"#;
    let kept = store.restore(payload)?;
    println!("   Kept {kept} of 2 entries\n");

    // A payload that is not a task array at all degrades to empty
    println!("4. CORRUPTION - An unreadable payload degrades to empty...");
    let mut backend = MemoryBackend::new();
    backend.set(STORAGE_KEY, "{{ not json")?;
    let mut store = TaskStore::new(backend);
    match store.load() {
        Ok(_) => println!("   Unexpectedly loaded!"),
        Err(e) => println!("   Recovered: {e}"),
    }
    println!("   Store is usable and empty: {} task(s)\n", store.len());

    println!("Example complete!");
    Ok(())
}
