use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{pad_to_width, spans_width};

/// Render the two-row header: title bar and separator
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let bg_style = Style::default().bg(bg);

    let mut spans = vec![Span::styled(
        " [ ] remind",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    // Task count, right-aligned
    let count = app.tasks.len();
    let count_label = match count {
        0 => String::new(),
        1 => "1 task ".to_string(),
        n => format!("{} tasks ", n),
    };
    let used = spans_width(&spans);
    let count_width = count_label.chars().count();
    if !count_label.is_empty() && used + count_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - count_width),
            bg_style,
        ));
        spans.push(Span::styled(
            count_label,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        pad_to_width(&mut spans, width, bg_style);
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![Line::from(spans), separator]).style(bg_style);
    frame.render_widget(paragraph, area);
}
