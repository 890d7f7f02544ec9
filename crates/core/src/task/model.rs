//! Task model definitions
//!
//! Field names serialize in camelCase so that a collection written by the
//! browser dashboard loads unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

/// Task status, one per board column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Progress,
    Done,
}

/// Status given to every task created through the Add transition.
///
/// New tasks land in Progress even though the add button sits on the To Do
/// column. Kept as observed until the product owner decides otherwise.
pub const DEFAULT_NEW_STATUS: TaskStatus = TaskStatus::Progress;

impl TaskStatus {
    /// All statuses in column order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::Progress, TaskStatus::Done];

    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Progress => "progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "progress" => Ok(Self::Progress),
            "done" => Ok(Self::Done),
            other => Err(Error::InvalidInput(format!("Unknown status: {}", other))),
        }
    }
}

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    High,
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Low
    }
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::High => "High",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            other => Err(Error::InvalidInput(format!("Unknown priority: {}", other))),
        }
    }
}

/// A task on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub service_date: String,
    pub status: TaskStatus,
    /// Inline `data:` URL of the attached image
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
}

impl Task {
    /// Build a task from a draft with the given identity and status
    pub fn from_draft(id: impl Into<String>, status: TaskStatus, draft: TaskDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            category: draft.category,
            service_date: draft.service_date,
            status,
            image: draft.image,
        }
    }

    /// Copy the editable fields into a draft, as the edit form does
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            category: self.category.clone(),
            service_date: self.service_date.clone(),
            image: self.image.clone(),
        }
    }
}

/// The editable part of a task: everything except `id` and `status`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub category: String,
    pub service_date: String,
    pub image: Option<String>,
}

impl TaskDraft {
    /// Create a new draft with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the service date
    pub fn with_service_date(mut self, service_date: impl Into<String>) -> Self {
        self.service_date = service_date.into();
        self
    }

    /// Attach an image data URL
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Normalize a service date entered by the user
///
/// Empty input means "no date". Anything else must be a `YYYY-MM-DD`
/// calendar date.
pub fn parse_service_date(value: &str) -> Result<String, Error> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(String::new());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|e| Error::InvalidInput(format!("Expected a YYYY-MM-DD date: {}", e)))
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
