//! Board state and its transition function
//!
//! The board is an ordered task collection. Every change goes through
//! [`Transition`], applied by [`reduce`] or [`Board::apply`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::task::{Task, TaskDraft, TaskStatus, DEFAULT_NEW_STATUS};

/// A requested change to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Replace the whole collection
    Load(Vec<Task>),
    /// Append a new task with a fresh id and the default status
    Add(TaskDraft),
    /// Replace the task with the same id
    Update(Task),
    /// Remove the task with this id
    Delete(String),
    /// Set the status of the task with this id
    Move { id: String, status: TaskStatus },
}

/// What applying a transition did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded(usize),
    Added(String),
    Updated,
    Deleted,
    Moved,
    /// The transition named an id that is not on the board
    Unchanged,
}

impl Outcome {
    /// Whether the collection was modified
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// The ordered task collection
///
/// Task ids are unique: loading a collection keeps the first record for any
/// repeated id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Task>", into = "Vec<Task>")]
pub struct Board {
    tasks: Vec<Task>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in board order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get a task by ID
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Apply a transition in place
    pub fn apply(&mut self, transition: Transition) -> Outcome {
        match transition {
            Transition::Load(tasks) => {
                self.tasks = unique_by_id(tasks);
                Outcome::Loaded(self.tasks.len())
            }
            Transition::Add(draft) => Outcome::Added(self.add_task(draft)),
            Transition::Update(task) => {
                if self.update_task(task) {
                    Outcome::Updated
                } else {
                    Outcome::Unchanged
                }
            }
            Transition::Delete(id) => {
                if self.delete_task(&id).is_some() {
                    Outcome::Deleted
                } else {
                    Outcome::Unchanged
                }
            }
            Transition::Move { id, status } => {
                if self.move_task(&id, status) {
                    Outcome::Moved
                } else {
                    Outcome::Unchanged
                }
            }
        }
    }

    /// Append a task built from `draft`, returning its new id
    pub fn add_task(&mut self, draft: TaskDraft) -> String {
        let id = self.fresh_id();
        self.tasks
            .push(Task::from_draft(id.clone(), DEFAULT_NEW_STATUS, draft));
        id
    }

    /// Replace the task with the same id
    pub fn update_task(&mut self, task: Task) -> bool {
        let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) else {
            return false;
        };
        *slot = task;
        true
    }

    /// Delete a task from the board
    pub fn delete_task(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Move a task to a new status
    pub fn move_task(&mut self, id: &str, status: TaskStatus) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.status = status;
        true
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

impl From<Vec<Task>> for Board {
    fn from(tasks: Vec<Task>) -> Self {
        Self {
            tasks: unique_by_id(tasks),
        }
    }
}

impl From<Board> for Vec<Task> {
    fn from(board: Board) -> Self {
        board.tasks
    }
}

fn unique_by_id(tasks: Vec<Task>) -> Vec<Task> {
    let total = tasks.len();
    let mut seen = HashSet::new();
    let tasks: Vec<Task> = tasks
        .into_iter()
        .filter(|t| seen.insert(t.id.clone()))
        .collect();
    if tasks.len() != total {
        warn!("Dropped {} task(s) with duplicate ids", total - tasks.len());
    }
    tasks
}

/// Pure transition function: `(Board, Transition) -> Board`
pub fn reduce(mut board: Board, transition: Transition) -> Board {
    board.apply(transition);
    board
}
