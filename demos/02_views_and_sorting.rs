//! Example 02: Views and Sorting
//!
//! This example demonstrates the derived views (filters), the in-place sort
//! orders, and the aggregate stats.
//!
//! Run with: cargo run --example 02_views_and_sorting

use chrono::NaiveDate;
use eyre::Result;
use todostore::{MemoryBackend, Priority, SortKey, TaskStore, ViewFilter};

fn main() -> Result<()> {
    println!("Todostore Views and Sorting Example");
    println!("===================================\n");

    let mut store = TaskStore::new(MemoryBackend::new());

    // Seed a small list
    let due = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
    store.add("Water plants", Priority::Low, due(2024, 1, 10))?;
    store.add("File taxes", Priority::High, due(2024, 1, 5))?;
    store.add("Read a book", Priority::Medium, None)?;
    let done = store.add("Call dentist", Priority::High, None)?;
    store.toggle(&done.id)?;

    // VIEWS: read-only slices over the stored order
    println!("1. VIEWS");
    for filter in [
        ViewFilter::All,
        ViewFilter::Pending,
        ViewFilter::Completed,
        ViewFilter::Overdue,
    ] {
        let tasks = store.view(filter);
        println!("   {filter}: {} task(s)", tasks.len());
        for task in tasks {
            println!("      - {}", task.text);
        }
    }
    println!();

    // SORT: reorders the collection in place
    println!("2. SORT by priority (stable: equal ranks keep their order)");
    store.sort(SortKey::Priority);
    for task in store.tasks() {
        println!("   {} - {}", task.priority, task.text);
    }
    println!();

    println!("3. SORT by due date (undated tasks go last)");
    store.sort(SortKey::DueDate);
    for task in store.tasks() {
        match task.due_date {
            Some(d) => println!("   {d} - {}", task.text),
            None => println!("   (no due date) - {}", task.text),
        }
    }
    println!();

    // STATS
    println!("4. STATS");
    let stats = store.stats();
    println!(
        "   total={} completed={} pending={}\n",
        stats.total, stats.completed, stats.pending
    );

    println!("Example complete!");
    Ok(())
}
