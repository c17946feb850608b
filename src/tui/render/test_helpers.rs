use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::ops::task_ops;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A fresh App with no tasks and empty input fields.
pub fn empty_app() -> App {
    App::new()
}

/// An App whose list already holds the given labels.
///
/// Labels must be in canonical `<desc> at <date> <time>` form; they are
/// split back into fields and fed through the real add path.
pub fn app_with_tasks(labels: &[&str]) -> App {
    let mut app = App::new();
    for label in labels {
        let mut parts = label.rsplitn(3, ' ');
        let time = parts.next().unwrap().to_string();
        let date = parts.next().unwrap().to_string();
        let desc = parts
            .next()
            .and_then(|d| d.strip_suffix(" at"))
            .unwrap()
            .to_string();
        task_ops::add_task(&mut app.tasks, &desc, &date, &time).unwrap();
    }
    app
}
