use chrono::{DateTime, Utc};
use clap::Parser;
use colored::Colorize;
use eyre::{Result, eyre};
use std::io::{self, Write};
use todostore::{Config, FileBackend, Priority, StorageBackend, Task, TaskStore, ViewFilter};

mod cli;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref())?;

    let backend = FileBackend::open(&config.storage_dir)?;
    let mut store = TaskStore::new(backend);
    if let Err(e) = store.load() {
        eprintln!("{} {e}; starting with an empty list", "warning:".yellow().bold());
    }

    match cli.command {
        Command::Add { text, priority, due } => {
            let task = store.add(&text, priority, due)?;
            println!("{} {}", "Added:".green().bold(), render_task(&task, Utc::now()));
        }

        Command::List { filter, sort } => {
            if let Some(key) = sort {
                store.sort(key);
            }
            let now = Utc::now();
            let tasks = store.view_at(filter, now);
            if tasks.is_empty() {
                match filter {
                    ViewFilter::All => {
                        println!("No tasks yet. Add your first task with `todostore add`.")
                    }
                    _ => println!("No tasks match the current filter."),
                }
            } else {
                for task in tasks {
                    println!("{}", render_task(task, now));
                }
            }
        }

        Command::Toggle { id } => {
            let id = resolve_id(&store, &id)?;
            let task = store.toggle(&id)?;
            if task.completed {
                println!("{}", "Task completed".green().bold());
            } else {
                println!("Task marked as pending");
            }
        }

        Command::Edit { id, text, priority, due, no_due } => {
            let id = resolve_id(&store, &id)?;
            let current = store.begin_edit(&id)?;
            if text.is_none() && priority.is_none() && due.is_none() && !no_due {
                store.cancel_edit();
                println!("Nothing to change");
                return Ok(());
            }
            let new_text = text.unwrap_or_else(|| current.text.clone());
            let new_priority = priority.unwrap_or(current.priority);
            let new_due = if no_due { None } else { due.or(current.due_date) };
            let task = store.commit_edit(&new_text, new_priority, new_due)?;
            println!("{} {}", "Updated:".green().bold(), render_task(&task, Utc::now()));
        }

        Command::Delete { id, force } => {
            let id = resolve_id(&store, &id)?;
            let text = store.get(&id).map(|t| t.text.clone()).unwrap_or_default();
            if force || confirm(&format!("Delete \"{text}\"?"))? {
                store.delete(&id)?;
                println!("{}", "Task deleted".green());
            }
        }

        Command::Clear { force } => {
            if store.is_empty() {
                println!("Nothing to clear");
            } else if force
                || confirm(&format!("Delete all {} tasks? This cannot be undone.", store.len()))?
            {
                store.clear_all();
                println!("{}", "All tasks cleared".green());
            }
        }

        Command::Stats => {
            let stats = store.stats();
            println!(
                "{} total / {} / {}",
                stats.total,
                format!("{} completed", stats.completed).green(),
                format!("{} pending", stats.pending).yellow()
            );
        }
    }

    Ok(())
}

/// Resolve a full task id from a user-supplied prefix
fn resolve_id<B: StorageBackend>(store: &TaskStore<B>, prefix: &str) -> Result<String> {
    let matches: Vec<&str> = store
        .tasks()
        .iter()
        .filter(|t| t.id.starts_with(prefix))
        .map(|t| t.id.as_str())
        .collect();
    match matches.as_slice() {
        [id] => Ok((*id).to_string()),
        [] => Err(eyre!("no task with id {prefix}")),
        _ => Err(eyre!("id prefix {prefix} matches {} tasks", matches.len())),
    }
}

/// One rendered list line: checkbox, short id, text, priority, due date
fn render_task(task: &Task, now: DateTime<Utc>) -> String {
    let check = if task.completed { "[x]" } else { "[ ]" };
    let text = if task.completed {
        task.text.strikethrough().dimmed().to_string()
    } else {
        task.text.clone()
    };
    let priority = match task.priority {
        Priority::High => "high".red(),
        Priority::Medium => "medium".yellow(),
        Priority::Low => "low".green(),
    };
    let mut line = format!("{check} {} {text} ({priority})", short_id(&task.id).dimmed());
    if let Some(due) = task.due_date {
        if task.is_overdue_at(now) {
            line.push_str(&format!(" {}", format!("overdue: {due}").red().bold()));
        } else {
            line.push_str(&format!(" due: {due}"));
        }
    }
    line
}

/// Leading segment of the id, enough to address a task from the shell
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
