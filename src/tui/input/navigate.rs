use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::{schedule, task_ops};
use crate::tui::app::{App, DatePickerState, Mode, TimePickerState};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        // Help
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }
        // Dismiss the notice
        (_, KeyCode::Esc) => {
            app.notice = None;
        }
        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            if app.cursor + 1 < app.tasks.len() {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.cursor = app.tasks.len().saturating_sub(1);
        }
        // Edit the description field
        (KeyModifiers::NONE, KeyCode::Char('i') | KeyCode::Char('e')) => {
            enter_edit(app);
        }
        // Pickers
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            app.date_picker = Some(DatePickerState::today());
            app.mode = Mode::DatePicker;
        }
        (KeyModifiers::NONE, KeyCode::Char('t')) => {
            app.time_picker = Some(TimePickerState::now());
            app.mode = Mode::TimePicker;
        }
        // Add task
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Enter) => {
            add_task_action(app);
        }
        // Check off the row under the cursor
        (KeyModifiers::NONE, KeyCode::Char('x') | KeyCode::Char(' ')) => {
            check_task_action(app);
        }
        // Delete all tasks
        (KeyModifiers::SHIFT, KeyCode::Char('D')) => {
            task_ops::clear_tasks(&mut app.tasks);
            app.cursor = 0;
            app.scroll_offset = 0;
        }
        _ => {}
    }
}

/// Add a task from the three input fields, then clear them.
///
/// A blank field silently blocks the add. When the due instant resolves and
/// lies in the future, a one-shot reminder is scheduled; a past instant
/// still adds the task but schedules nothing.
pub(super) fn add_task_action(app: &mut App) {
    if task_ops::add_task(
        &mut app.tasks,
        &app.input,
        &app.selected_date,
        &app.selected_time,
    )
    .is_err()
    {
        return;
    }

    if let Some(due) = schedule::due_instant(&app.selected_date, &app.selected_time)
        && let Some(delay) = schedule::delay_until(due, Local::now())
    {
        let message = format!(
            "Reminder: {} at {} {}",
            app.input, app.selected_date, app.selected_time
        );
        app.reminders.schedule(delay, message);
    }

    app.input.clear();
    app.selected_date.clear();
    app.selected_time.clear();
}

/// Check off the row under the cursor: the task is removed outright.
/// Its reminder, if any, keeps its deadline; there is no cancellation path.
pub(super) fn check_task_action(app: &mut App) {
    let id = match app.tasks.get(app.cursor) {
        Some(task) => task.id,
        None => return,
    };
    task_ops::remove_task(&mut app.tasks, id);
    app.clamp_cursor();
}
