//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use dashboard_core::config::DashboardConfig;
use dashboard_core::filter::TaskFilter;
use dashboard_core::task::{parse_service_date, TaskPriority, TaskStatus};

#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about = "Single-user kanban task dashboard")]
pub struct Cli {
    /// Directory holding the stored tasks and session token
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Base URL of the login endpoint host
    #[arg(long, global = true, value_name = "URL")]
    pub auth_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Environment configuration with command-line overrides applied
    pub fn config(&self) -> DashboardConfig {
        let mut config = DashboardConfig::from_env();
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir.clone());
        }
        if let Some(url) = &self.auth_url {
            config = config.with_auth_base_url(url.clone());
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in against the remote endpoint
    Login(LoginArgs),
    /// Forget the stored session token
    Logout,
    #[command(flatten)]
    Board(BoardCommand),
}

/// Commands that need a logged-in session
#[derive(Debug, Subcommand)]
pub enum BoardCommand {
    /// Show the board
    #[command(name = "board")]
    Show(FilterArgs),
    /// List the category filter options
    Categories,
    /// Add a task
    Add(AddArgs),
    /// Edit a task
    Edit(EditArgs),
    /// Delete a task
    Delete {
        /// Task id
        id: String,
    },
    /// Move a task to another column
    Move {
        /// Task id
        id: String,
        /// Target column: todo, progress or done
        status: TaskStatus,
    },
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub username: String,

    #[arg(short, long)]
    pub password: String,
}

#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Substring of the title, any case
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Exact priority: Low or High
    #[arg(short, long)]
    pub priority: Option<TaskPriority>,

    /// Exact service date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_service_date)]
    pub date: Option<String>,
}

impl From<FilterArgs> for TaskFilter {
    fn from(args: FilterArgs) -> Self {
        TaskFilter {
            search: args.search.unwrap_or_default(),
            category: args.category.unwrap_or_default(),
            priority: args.priority,
            service_date: args.date.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(short, long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(short, long, default_value = "Low")]
    pub priority: TaskPriority,

    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Service date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_service_date, default_value = "")]
    pub date: String,

    /// Image file to embed in the task
    #[arg(long, value_name = "FILE")]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id
    pub id: String,

    #[arg(short, long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub priority: Option<TaskPriority>,

    #[arg(short, long)]
    pub category: Option<String>,

    /// Service date (YYYY-MM-DD), empty to clear
    #[arg(short, long, value_parser = parse_service_date)]
    pub date: Option<String>,

    /// Replace the image with this file
    #[arg(long, value_name = "FILE", conflicts_with = "clear_image")]
    pub image: Option<PathBuf>,

    /// Remove the image
    #[arg(long)]
    pub clear_image: bool,
}
