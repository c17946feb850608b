use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, DateField, TimeField};
use crate::tui::theme::Theme;

use super::helpers::pad_to_width;

const HINT: &str = " \u{2190}\u{2192} field  \u{2191}\u{2193} adjust  Enter ok  Esc cancel";

/// Render the date picker popup.
pub fn render_date_picker(frame: &mut Frame, app: &App, area: Rect) {
    let picker = match &app.date_picker {
        Some(p) => p,
        None => return,
    };

    let columns = [
        ("Day", picker.day.to_string(), picker.field == DateField::Day),
        (
            "Month",
            picker.month.to_string(),
            picker.field == DateField::Month,
        ),
        (
            "Year",
            picker.year.to_string(),
            picker.field == DateField::Year,
        ),
    ];
    render_picker(frame, &app.theme, area, " Select Date ", &columns);
}

/// Render the time picker popup.
pub fn render_time_picker(frame: &mut Frame, app: &App, area: Rect) {
    let picker = match &app.time_picker {
        Some(p) => p,
        None => return,
    };

    let columns = [
        (
            "Hour",
            format!("{:02}", picker.hour),
            picker.field == TimeField::Hour,
        ),
        (
            "Minute",
            format!("{:02}", picker.minute),
            picker.field == TimeField::Minute,
        ),
    ];
    render_picker(frame, &app.theme, area, " Select Time ", &columns);
}

/// Shared centered-popup rendering for both pickers: one labelled column per
/// field, the focused value highlighted.
fn render_picker(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    columns: &[(&str, String, bool)],
) {
    let bg = theme.background;
    let bg_style = Style::default().bg(bg);

    let popup_w = (HINT.chars().count() as u16 + 3)
        .max(12 * columns.len() as u16)
        .min(area.width.saturating_sub(2));
    let popup_h: u16 = 7;
    if area.height < popup_h {
        return;
    }
    let x = area.x + area.width.saturating_sub(popup_w) / 2;
    let y = area.y + area.height.saturating_sub(popup_h) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let inner_w = popup_w.saturating_sub(2) as usize;
    let col_w = inner_w / columns.len();

    // Label row, then value row, each padded into equal columns
    let mut label_spans: Vec<Span> = Vec::new();
    let mut value_spans: Vec<Span> = Vec::new();
    for (label, value, focused) in columns {
        let label_style = Style::default().fg(theme.dim).bg(bg);
        let value_style = if *focused {
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(bg)
        };

        label_spans.push(Span::styled(center_in(label, col_w), label_style));
        let cell = if *focused {
            format!("\u{25B4} {} \u{25BE}", value)
        } else {
            value.clone()
        };
        value_spans.push(Span::styled(center_in(&cell, col_w), value_style));
    }
    pad_to_width(&mut label_spans, inner_w, bg_style);
    pad_to_width(&mut value_spans, inner_w, bg_style);

    let lines = vec![
        Line::from(Span::styled(" ".repeat(inner_w), bg_style)),
        Line::from(label_spans),
        Line::from(value_spans),
        Line::from(Span::styled(" ".repeat(inner_w), bg_style)),
        Line::from(Span::styled(
            HINT,
            Style::default().fg(theme.dim).bg(bg),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .style(bg_style);

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

/// Center `text` within `width` cells, truncating from the right if needed.
fn center_in(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use crate::tui::app::{DateField, DatePickerState, Mode, TimeField, TimePickerState};

    #[test]
    fn date_picker_shows_fields_and_values() {
        let mut app = empty_app();
        app.mode = Mode::DatePicker;
        app.date_picker = Some(DatePickerState {
            day: 25,
            month: 12,
            year: 2030,
            field: DateField::Day,
        });
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            super::render_date_picker(frame, &app, area);
        });
        assert!(output.contains("Select Date"));
        assert!(output.contains("Day"));
        assert!(output.contains("Month"));
        assert!(output.contains("Year"));
        assert!(output.contains("2030"));
        // Focused field carries the adjust arrows
        assert!(output.contains("\u{25B4} 25 \u{25BE}"));
    }

    #[test]
    fn time_picker_zero_pads_values() {
        let mut app = empty_app();
        app.mode = Mode::TimePicker;
        app.time_picker = Some(TimePickerState {
            hour: 9,
            minute: 5,
            field: TimeField::Minute,
        });
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            super::render_time_picker(frame, &app, area);
        });
        assert!(output.contains("Select Time"));
        assert!(output.contains("09"));
        assert!(output.contains("\u{25B4} 05 \u{25BE}"));
    }
}
