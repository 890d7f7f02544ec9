//! Plain-text rendering of the board

use dashboard_core::filter::{BoardView, TaskFilter};
use dashboard_core::task::Task;

/// Render the three columns, the category options and a match summary
pub fn render_board(tasks: &[Task], filter: &TaskFilter) -> String {
    let view = BoardView::build(tasks, filter);
    let mut lines = Vec::new();

    for column in &view.columns {
        lines.push(format!("== {} ({}) ==", column.title, column.count()));
        if column.tasks.is_empty() {
            lines.push("  (empty)".to_string());
        }
        for task in &column.tasks {
            lines.extend(render_card(task));
        }
        lines.push(String::new());
    }

    lines.push(render_categories(&view.categories));
    if !filter.is_empty() {
        lines.push(format!("Showing {} of {} tasks", view.matched, view.total));
    }

    lines.join("\n")
}

/// One task card, two or three lines
pub fn render_card(task: &Task) -> Vec<String> {
    let mut header = format!("  * {} [{}]", task.title, task.priority);
    if !task.category.is_empty() {
        header.push_str(&format!(" #{}", task.category));
    }
    if !task.service_date.is_empty() {
        header.push_str(&format!(" @{}", task.service_date));
    }
    if task.image.is_some() {
        header.push_str(" (image)");
    }

    let mut lines = vec![header];
    if !task.description.is_empty() {
        lines.push(format!("    {}", task.description));
    }
    lines.push(format!("    id: {}", task.id));
    lines
}

pub fn render_categories(categories: &[String]) -> String {
    if categories.is_empty() {
        "Categories: (none)".to_string()
    } else {
        format!("Categories: {}", categories.join(", "))
    }
}
