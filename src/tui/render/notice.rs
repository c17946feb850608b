use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

/// Render the transient reminder notice, anchored above the status row.
pub fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let text = match &app.notice {
        Some(t) => t,
        None => return,
    };

    let bg = app.theme.background;
    let hint = "Esc dismiss";

    // message + 1-cell padding each side, clamped to the screen
    let popup_h: u16 = 4;
    if area.height < popup_h + 1 || area.width < 12 {
        return;
    }
    let max_w = area.width.saturating_sub(4);
    let want_w = (unicode::display_width(text).max(hint.len()) + 4) as u16;
    let popup_w = want_w.min(max_w).max(6);

    let x = area.x + area.width.saturating_sub(popup_w) / 2;
    let y = area.y + area.height - popup_h - 1;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let inner_w = popup_w.saturating_sub(2) as usize;
    let message = unicode::truncate_to_width(text, inner_w.saturating_sub(2));
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default()
                .fg(app.theme.yellow)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(
            " Reminder ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.yellow).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;

    #[test]
    fn notice_text_and_hint_visible() {
        let mut app = empty_app();
        app.notice = Some("Reminder: buy milk at 25/12/2030 09:00".into());
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            super::render_notice(frame, &app, area);
        });
        assert!(output.contains("Reminder: buy milk at 25/12/2030 09:00"));
        assert!(output.contains("Esc dismiss"));
    }

    #[test]
    fn no_notice_renders_nothing() {
        let app = empty_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            super::render_notice(frame, &app, area);
        });
        assert_eq!(output.trim(), "");
    }
}
