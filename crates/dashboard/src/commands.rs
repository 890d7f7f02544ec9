//! Command handlers
//!
//! Each command consults the session gate, dispatches at most one board
//! transition and renders the resulting board.

use anyhow::Context;

use dashboard_core::board::{Outcome, Transition};
use dashboard_core::filter::{category_options, TaskFilter};
use dashboard_core::image::embed_image;
use dashboard_core::session::{Credentials, LoginOutcome, SessionState};
use dashboard_core::task::{Task, TaskDraft};
use dashboard_core::Error;

use crate::cli::{AddArgs, BoardCommand, Command, EditArgs};
use crate::state::AppState;
use crate::view::{render_board, render_categories};

/// What to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Normal output, exit status 0
    Shown(String),
    /// Inline error such as a login rejection, exit status 1
    Refused(String),
}

const LOGIN_REQUIRED: &str = "Not logged in. Run `dashboard login` first.";

/// Run one command against the application state
pub async fn run(command: Command, state: &AppState) -> anyhow::Result<Reply> {
    match command {
        Command::Login(args) => {
            let credentials = Credentials::new(args.username, args.password);
            match state.gate().login(&credentials).await? {
                LoginOutcome::LoggedIn => {
                    let store = state.open_board().await;
                    Ok(Reply::Shown(format!(
                        "Logged in.\n\n{}",
                        render_board(store.board().tasks(), &TaskFilter::new())
                    )))
                }
                LoginOutcome::Rejected { message } => Ok(Reply::Refused(message)),
            }
        }
        Command::Logout => {
            state.gate().logout().await?;
            Ok(Reply::Shown("Logged out.".to_string()))
        }
        Command::Board(command) => {
            if state.gate().state().await? == SessionState::LoggedOut {
                return Ok(Reply::Refused(LOGIN_REQUIRED.to_string()));
            }
            run_board_command(command, state).await
        }
    }
}

async fn run_board_command(command: BoardCommand, state: &AppState) -> anyhow::Result<Reply> {
    let mut store = state.open_board().await;

    let filter = match command {
        BoardCommand::Show(args) => TaskFilter::from(args),
        BoardCommand::Categories => {
            let categories = category_options(store.board().tasks());
            return Ok(Reply::Shown(render_categories(&categories)));
        }
        BoardCommand::Add(args) => {
            let draft = draft_from_add(args).await?;
            if let Outcome::Added(id) = store.dispatch(Transition::Add(draft)).await? {
                tracing::info!("Added task {}", id);
            }
            TaskFilter::new()
        }
        BoardCommand::Edit(args) => {
            let current = store
                .get(&args.id)
                .cloned()
                .ok_or_else(|| Error::TaskNotFound(args.id.clone()))?;
            let edited = apply_edit(current, args).await?;
            store.dispatch(Transition::Update(edited)).await?;
            TaskFilter::new()
        }
        BoardCommand::Delete { id } => {
            store.dispatch(Transition::Delete(id)).await?;
            TaskFilter::new()
        }
        BoardCommand::Move { id, status } => {
            store.dispatch(Transition::Move { id, status }).await?;
            TaskFilter::new()
        }
    };

    Ok(Reply::Shown(render_board(store.board().tasks(), &filter)))
}

async fn draft_from_add(args: AddArgs) -> anyhow::Result<TaskDraft> {
    let mut draft = TaskDraft::new(args.title)
        .with_description(args.description)
        .with_priority(args.priority)
        .with_category(args.category)
        .with_service_date(args.date);

    if let Some(path) = args.image {
        let image = embed_image(&path)
            .await
            .with_context(|| format!("Failed to attach image {}", path.display()))?;
        draft = draft.with_image(image);
    }

    Ok(draft)
}

/// Overlay the given fields on the task's current draft
async fn apply_edit(current: Task, args: EditArgs) -> anyhow::Result<Task> {
    let mut draft = current.to_draft();

    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(priority) = args.priority {
        draft.priority = priority;
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(date) = args.date {
        draft.service_date = date;
    }
    if args.clear_image {
        draft.image = None;
    }
    if let Some(path) = args.image {
        let image = embed_image(&path)
            .await
            .with_context(|| format!("Failed to attach image {}", path.display()))?;
        draft.image = Some(image);
    }

    Ok(Task::from_draft(current.id, current.status, draft))
}
