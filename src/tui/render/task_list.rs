use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::pad_to_width;

/// Render the scrollable task list with per-row checkboxes.
///
/// Also keeps `scroll_offset` adjusted so the cursor row stays visible.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let width = area.width as usize;
    let height = area.height as usize;

    if app.tasks.is_empty() {
        let line = Line::from(Span::styled(
            " No tasks yet \u{2014} add one above, check it off when done.",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(bg_style), area);
        return;
    }

    // Keep the cursor row within the viewport
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in app
        .tasks
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let is_selected = i == app.cursor;
        let row_bg = if is_selected { app.theme.selection_bg } else { bg };
        let row_pad = Style::default().bg(row_bg);

        let indicator = if is_selected { " \u{25B6} " } else { "   " };
        let checkbox_style = Style::default().fg(app.theme.green).bg(row_bg);
        let label_style = if is_selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        // indicator (3) + checkbox "[ ] " (4) + 1-cell right margin
        let label_budget = width.saturating_sub(8);
        let label = unicode::truncate_to_width(&task.label, label_budget);

        let mut spans = vec![
            Span::styled(indicator, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled("[ ] ", checkbox_style),
            Span::styled(label, label_style),
        ];
        pad_to_width(&mut spans, width, row_pad);
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(bg_style);
    frame.render_widget(paragraph, area);
}
