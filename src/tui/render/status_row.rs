use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): key hints for the current
/// mode, with the pending-reminder count on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hints = match app.mode {
        Mode::Navigate => "i type  d date  t time  a add  Space done  D delete all  ? help  q quit",
        Mode::Edit => "Enter confirm  Esc cancel",
        Mode::DatePicker | Mode::TimePicker => "\u{2190}\u{2192} field  \u{2191}\u{2193} adjust  Enter ok  Esc cancel",
    };

    let mut spans = vec![Span::styled(
        format!(" {}", hints),
        Style::default().fg(app.theme.dim).bg(bg),
    )];

    let pending = app.reminders.pending();
    if pending > 0 && app.mode == Mode::Navigate {
        let right = if pending == 1 {
            "1 reminder pending ".to_string()
        } else {
            format!("{} reminders pending ", pending)
        };
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let right_width = right.chars().count();
        if used + right_width < width {
            spans.push(Span::styled(
                " ".repeat(width - used - right_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(
                right,
                Style::default().fg(app.theme.green).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use crate::tui::app::Mode;
    use std::time::{Duration, Instant};

    #[test]
    fn navigate_hints_present() {
        let app = empty_app();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            super::render_status_row(frame, &app, area);
        });
        assert!(output.contains("a add"));
        assert!(output.contains("D delete all"));
    }

    #[test]
    fn edit_hints_present() {
        let mut app = empty_app();
        app.mode = Mode::Edit;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            super::render_status_row(frame, &app, area);
        });
        assert!(output.contains("Enter confirm"));
        assert!(output.contains("Esc cancel"));
    }

    #[test]
    fn pending_count_shown_on_the_right() {
        let mut app = empty_app();
        app.reminders
            .schedule_at(Instant::now() + Duration::from_secs(60), "x".into());
        let output = render_to_string(TERM_W, 1, |frame, area| {
            super::render_status_row(frame, &app, area);
        });
        assert!(output.contains("1 reminder pending"));
    }
}
