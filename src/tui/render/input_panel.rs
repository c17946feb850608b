use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::pad_to_width;

/// Render the three input fields: description, date, time.
pub fn render_input_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let width = area.width as usize;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let hint_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = Vec::new();

    // Description row shows the live edit buffer while editing
    let mut spans = vec![Span::styled(" Task \u{25B8} ", label_style)];
    if app.mode == Mode::Edit {
        push_edit_spans(&mut spans, app);
    } else if app.input.is_empty() {
        spans.push(Span::styled("press i to type", hint_style));
    } else {
        spans.push(Span::styled(app.input.clone(), value_style));
    }
    pad_to_width(&mut spans, width, bg_style);
    lines.push(Line::from(spans));

    // Date row
    let mut spans = vec![Span::styled(" Date \u{25B8} ", label_style)];
    if app.selected_date.is_empty() {
        spans.push(Span::styled("press d to pick", hint_style));
    } else {
        spans.push(Span::styled(app.selected_date.clone(), value_style));
    }
    pad_to_width(&mut spans, width, bg_style);
    lines.push(Line::from(spans));

    // Time row
    let mut spans = vec![Span::styled(" Time \u{25B8} ", label_style)];
    if app.selected_time.is_empty() {
        spans.push(Span::styled("press t to pick", hint_style));
    } else {
        spans.push(Span::styled(app.selected_time.clone(), value_style));
    }
    pad_to_width(&mut spans, width, bg_style);
    lines.push(Line::from(spans));

    let paragraph = Paragraph::new(lines).style(bg_style);
    frame.render_widget(paragraph, area);
}

/// Split the edit buffer at the cursor and render the cursor cell inverted.
fn push_edit_spans<'a>(spans: &mut Vec<Span<'a>>, app: &App) {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor_style = Style::default()
        .fg(bg)
        .bg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    let buffer = &app.edit_buffer;
    let cursor = app.edit_cursor.min(buffer.len());

    if cursor > 0 {
        spans.push(Span::styled(buffer[..cursor].to_string(), text_style));
    }
    let under_cursor = unicode::grapheme_at(buffer, cursor);
    if under_cursor.is_empty() {
        spans.push(Span::styled(" ", cursor_style));
    } else {
        spans.push(Span::styled(under_cursor.to_string(), cursor_style));
        let rest = &buffer[cursor + under_cursor.len()..];
        if !rest.is_empty() {
            spans.push(Span::styled(rest.to_string(), text_style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use crate::tui::app::Mode;

    #[test]
    fn placeholders_shown_when_fields_empty() {
        let app = empty_app();
        let output = render_to_string(TERM_W, 4, |frame, area| {
            super::render_input_panel(frame, &app, area);
        });
        assert!(output.contains("press i to type"));
        assert!(output.contains("press d to pick"));
        assert!(output.contains("press t to pick"));
    }

    #[test]
    fn committed_values_shown() {
        let mut app = empty_app();
        app.input = "buy milk".into();
        app.selected_date = "25/12/2030".into();
        app.selected_time = "09:00".into();
        let output = render_to_string(TERM_W, 4, |frame, area| {
            super::render_input_panel(frame, &app, area);
        });
        assert!(output.contains("buy milk"));
        assert!(output.contains("25/12/2030"));
        assert!(output.contains("09:00"));
    }

    #[test]
    fn edit_buffer_shown_while_editing() {
        let mut app = empty_app();
        app.mode = Mode::Edit;
        app.edit_buffer = "wat".into();
        app.edit_cursor = 3;
        let output = render_to_string(TERM_W, 4, |frame, area| {
            super::render_input_panel(frame, &app, area);
        });
        assert!(output.contains("wat"));
    }
}
