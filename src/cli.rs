//! CLI argument parsing for todostore

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todostore::{Priority, SortKey, ViewFilter};

#[derive(Parser, Debug)]
#[command(name = "todostore")]
#[command(author, version, about = "Task list manager with validated edits and local persistence", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task description
        #[arg(required = true)]
        text: String,

        /// Task priority
        #[arg(short, long, default_value = "medium")]
        priority: Priority,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<NaiveDate>,
    },

    /// List tasks
    List {
        /// Which tasks to show: all, pending, completed or overdue
        #[arg(short, long, default_value = "all")]
        filter: ViewFilter,

        /// Reorder the stored list first: date, priority, due-date or alphabetical
        #[arg(short, long)]
        sort: Option<SortKey>,
    },

    /// Toggle a task between pending and completed
    Toggle {
        /// Task id (a unique prefix is enough)
        #[arg(required = true)]
        id: String,
    },

    /// Edit a task's text, priority or due date
    Edit {
        /// Task id (a unique prefix is enough)
        #[arg(required = true)]
        id: String,

        /// New task description
        #[arg(short, long)]
        text: Option<String>,

        /// New priority
        #[arg(short, long)]
        priority: Option<Priority>,

        /// New due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<NaiveDate>,

        /// Remove the due date
        #[arg(long, conflicts_with = "due")]
        no_due: bool,
    },

    /// Delete a task
    Delete {
        /// Task id (a unique prefix is enough)
        #[arg(required = true)]
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Delete every task
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show task counts
    Stats,
}
