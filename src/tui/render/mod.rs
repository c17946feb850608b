pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod input_panel;
pub mod notice;
pub mod picker_popup;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Top-level render: fixed layout, then overlays in stacking order
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | input panel | task list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Length(4), // description/date/time fields + spacer
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    input_panel::render_input_panel(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Picker popups (rendered on top of content)
    match app.mode {
        Mode::DatePicker => picker_popup::render_date_picker(frame, app, frame.area()),
        Mode::TimePicker => picker_popup::render_time_picker(frame, app, frame.area()),
        _ => {}
    }

    // Transient notice, anchored above the status row
    if app.notice.is_some() {
        notice::render_notice(frame, app, frame.area());
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}
