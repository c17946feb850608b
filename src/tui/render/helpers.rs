use ratatui::style::Style;
use ratatui::text::Span;

use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Pad spans with background to fill `target_width`.
pub(super) fn pad_to_width<'a>(spans: &mut Vec<Span<'a>>, target_width: usize, pad_style: Style) {
    let used = spans_width(spans);
    if used < target_width {
        spans.push(Span::styled(" ".repeat(target_width - used), pad_style));
    }
}
