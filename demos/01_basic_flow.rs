//! Example 01: Basic Task Flow
//!
//! This example demonstrates the fundamental add, toggle, edit, and delete
//! operations with an in-memory backend.
//!
//! Run with: cargo run --example 01_basic_flow

use eyre::Result;
use todostore::{MemoryBackend, Priority, TaskStore};

fn main() -> Result<()> {
    println!("Todostore Basic Flow Example");
    println!("============================\n");

    let mut store = TaskStore::new(MemoryBackend::new());

    // ADD: Create some tasks
    println!("1. ADD - Creating tasks...");
    let milk = store.add("Buy milk", Priority::Medium, None)?;
    let report = store.add("Write report", Priority::High, None)?;
    println!("   Added \"{}\" ({})", milk.text, milk.priority);
    println!("   Added \"{}\" ({})\n", report.text, report.priority);

    // Validation in action
    println!("2. VALIDATION - Duplicates are rejected...");
    match store.add("buy milk", Priority::Low, None) {
        Ok(_) => println!("   Unexpectedly accepted!"),
        Err(e) => println!("   Rejected: {e}\n"),
    }

    // TOGGLE: Complete a task
    println!("3. TOGGLE - Completing a task...");
    let milk = store.toggle(&milk.id)?;
    println!("   \"{}\" completed at {:?}\n", milk.text, milk.completed_at);

    // EDIT: begin, inspect the snapshot, commit
    println!("4. EDIT - Renaming a task...");
    let snapshot = store.begin_edit(&report.id)?;
    println!("   Editing \"{}\"", snapshot.text);
    let report = store.commit_edit("Write quarterly report", snapshot.priority, None)?;
    println!("   Now \"{}\" (updated at {:?})\n", report.text, report.updated_at);

    // DELETE: Remove a task
    println!("5. DELETE - Removing a task...");
    store.delete(&milk.id)?;
    println!("   {} task(s) remain\n", store.len());

    println!("Example complete!");
    Ok(())
}
