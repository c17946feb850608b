use crate::model::{Task, TaskList};

/// Error type for task list operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("description, date, and time must all be non-blank")]
    BlankField,
}

/// Format the display label for a task: `<description> at <date> <time>`.
pub fn format_label(description: &str, date: &str, time: &str) -> String {
    format!("{} at {} {}", description, date, time)
}

/// Append a task composed from the three input fields.
///
/// All three must be non-blank, otherwise the list is left untouched.
/// Returns the assigned id.
pub fn add_task(
    list: &mut TaskList,
    description: &str,
    date: &str,
    time: &str,
) -> Result<u64, TaskError> {
    if description.trim().is_empty() || date.trim().is_empty() || time.trim().is_empty() {
        return Err(TaskError::BlankField);
    }
    let label = format_label(description, date, time);
    log::debug!("adding task: {}", label);
    Ok(list.push(label))
}

/// Remove the task with the given id.
///
/// Removal is keyed on the synthetic id alone; a duplicate label elsewhere
/// in the list is left untouched.
pub fn remove_task(list: &mut TaskList, id: u64) -> Option<Task> {
    list.remove_by_id(id)
}

/// Empty the list. Already-scheduled reminders are not affected.
pub fn clear_tasks(list: &mut TaskList) {
    list.clear();
}
