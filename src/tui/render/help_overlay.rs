use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(50, 70, area);

    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let text_color = app.theme.text;
    let bright = app.theme.text_bright;
    let highlight = app.theme.highlight;
    let dim = app.theme.dim;

    let key_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(text_color).bg(bg);
    let header_style = Style::default()
        .fg(bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Compose", header_style)));
    add_binding(&mut lines, " i/e", "Type the task description", key_style, desc_style);
    add_binding(&mut lines, " d", "Pick a date", key_style, desc_style);
    add_binding(&mut lines, " t", "Pick a time", key_style, desc_style);
    add_binding(&mut lines, " a/Enter", "Add the task", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" List", header_style)));
    add_binding(
        &mut lines,
        " \u{2191}\u{2193}/jk",
        "Move cursor up/down",
        key_style,
        desc_style,
    );
    add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
    add_binding(
        &mut lines,
        " Space/x",
        "Check off (removes the row)",
        key_style,
        desc_style,
    );
    add_binding(&mut lines, " D", "Delete all tasks", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Other", header_style)));
    add_binding(&mut lines, " Esc", "Dismiss the reminder notice", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " press any key to close",
        Style::default().fg(dim).bg(bg),
    )));

    let block = Block::default()
        .title(Span::styled(" Help ", header_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(text_color).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding(lines: &mut Vec<Line>, keys: &str, desc: &str, key_style: Style, desc_style: Style) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<10}", keys), key_style),
        Span::styled(desc.to_string(), desc_style),
    ]));
}

/// A centered rect taking the given percentage of the area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;

    #[test]
    fn bindings_listed() {
        let app = empty_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            super::render_help_overlay(frame, &app, area);
        });
        assert!(output.contains("Key Bindings"));
        assert!(output.contains("Pick a date"));
        assert!(output.contains("Delete all tasks"));
        assert!(output.contains("press any key to close"));
    }
}
