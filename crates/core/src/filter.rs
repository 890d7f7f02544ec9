//! Filtering and derived board views
//!
//! Everything here is a pure function of the task collection and the
//! filter criteria.

use crate::task::{Task, TaskPriority, TaskStatus};

/// Board filter criteria; empty criteria impose no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring of the title
    pub search: String,
    /// Exact category
    pub category: String,
    /// Exact priority
    pub priority: Option<TaskPriority>,
    /// Exact service date
    pub service_date: String,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_service_date(mut self, service_date: impl Into<String>) -> Self {
        self.service_date = service_date.into();
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.category.is_empty()
            && self.priority.is_none()
            && self.service_date.is_empty()
    }

    /// Whether a single task passes every set criterion
    pub fn matches(&self, task: &Task) -> bool {
        let search_ok = self.search.is_empty()
            || task
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let category_ok = self.category.is_empty() || task.category == self.category;
        let priority_ok = self.priority.map_or(true, |p| task.priority == p);
        let date_ok = self.service_date.is_empty() || task.service_date == self.service_date;

        search_ok && category_ok && priority_ok && date_ok
    }

    /// The matching subset, in collection order
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Distinct non-empty categories across all tasks, in first-seen order
pub fn category_options(tasks: &[Task]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for task in tasks {
        if !task.category.is_empty() && !options.contains(&task.category) {
            options.push(task.category.clone());
        }
    }
    options
}

/// One rendered column of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    pub status: TaskStatus,
    pub title: &'static str,
    pub tasks: Vec<&'a Task>,
}

impl Column<'_> {
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

/// Column heading for a status
pub fn column_title(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "To Do",
        TaskStatus::Progress => "Progress",
        TaskStatus::Done => "Done",
    }
}

/// A filtered board split into its three columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub columns: Vec<Column<'a>>,
    /// Category choices, drawn from the unfiltered collection
    pub categories: Vec<String>,
    /// Number of tasks that passed the filter
    pub matched: usize,
    pub total: usize,
}

impl<'a> BoardView<'a> {
    /// Filter `tasks` and partition the result by status
    pub fn build(tasks: &'a [Task], filter: &TaskFilter) -> Self {
        let filtered = filter.apply(tasks);
        let columns = TaskStatus::ALL
            .iter()
            .map(|&status| Column {
                status,
                title: column_title(status),
                tasks: filtered
                    .iter()
                    .copied()
                    .filter(|t| t.status == status)
                    .collect(),
            })
            .collect();

        Self {
            columns,
            categories: category_options(tasks),
            matched: filtered.len(),
            total: tasks.len(),
        }
    }

    /// Get the column for a status
    pub fn column(&self, status: TaskStatus) -> Option<&Column<'a>> {
        self.columns.iter().find(|c| c.status == status)
    }
}
