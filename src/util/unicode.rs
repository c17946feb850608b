use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` terminal cells, appending `…` when cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(g);
        if used + gw > budget {
            break;
        }
        used += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `offset`, or `None` at the end.
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset >= s.len() {
        return None;
    }
    let g = s[offset..].graphemes(true).next()?;
    Some(offset + g.len())
}

/// Byte offset of the grapheme boundary before `offset`, or `None` at the start.
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    s[..offset].grapheme_indices(true).last().map(|(i, _)| i)
}

/// The grapheme cluster starting at `offset` (empty at the end of the string).
pub fn grapheme_at(s: &str, offset: usize) -> &str {
    if offset >= s.len() {
        return "";
    }
    s[offset..].graphemes(true).next().unwrap_or("")
}

/// Byte offset of the whitespace-delimited word boundary left of `offset`.
pub fn word_boundary_left(s: &str, offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..offset].grapheme_indices(true).collect();
    let mut idx = graphemes.len();
    while idx > 0 && is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(0, |(i, _)| *i)
}

/// Byte offset of the whitespace-delimited word boundary right of `offset`.
pub fn word_boundary_right(s: &str, offset: usize) -> usize {
    let tail = &s[offset.min(s.len())..];
    let mut in_word = !tail
        .graphemes(true)
        .next()
        .is_none_or(is_blank);
    for (i, g) in tail.grapheme_indices(true) {
        if is_blank(g) {
            in_word = false;
        } else if !in_word {
            return offset + i;
        }
    }
    s.len()
}

fn is_blank(g: &str) -> bool {
    g.chars().all(|c| c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ascii_and_cjk() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("hello你好"), 9);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn width_combining_accent() {
        assert_eq!(display_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn truncate_fits() {
        assert_eq!(truncate_to_width("hi", 10), "hi");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_cuts_with_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w\u{2026}");
        assert_eq!(truncate_to_width("你好世界", 5), "你好\u{2026}");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn truncate_never_splits_a_wide_cell() {
        let out = truncate_to_width("你好世界", 4);
        assert!(display_width(&out) <= 4);
        assert!(out.ends_with('\u{2026}'));
    }

    #[test]
    fn grapheme_boundaries_ascii() {
        assert_eq!(next_grapheme_boundary("abc", 0), Some(1));
        assert_eq!(next_grapheme_boundary("abc", 3), None);
        assert_eq!(prev_grapheme_boundary("abc", 3), Some(2));
        assert_eq!(prev_grapheme_boundary("abc", 0), None);
    }

    #[test]
    fn grapheme_boundaries_emoji() {
        let s = "a🎉b";
        assert_eq!(next_grapheme_boundary(s, 1), Some(5));
        assert_eq!(prev_grapheme_boundary(s, 5), Some(1));
    }

    #[test]
    fn grapheme_boundaries_combining() {
        let s = "cafe\u{0301}!";
        assert_eq!(next_grapheme_boundary(s, 3), Some(6)); // é is one cluster
        assert_eq!(prev_grapheme_boundary(s, 6), Some(3));
    }

    #[test]
    fn grapheme_at_clusters() {
        assert_eq!(grapheme_at("a🎉b", 1), "🎉");
        assert_eq!(grapheme_at("abc", 3), "");
    }

    #[test]
    fn word_boundaries() {
        let s = "buy more milk";
        assert_eq!(word_boundary_left(s, 13), 9);
        assert_eq!(word_boundary_left(s, 9), 4);
        assert_eq!(word_boundary_left(s, 0), 0);
        assert_eq!(word_boundary_right(s, 0), 4);
        assert_eq!(word_boundary_right(s, 4), 9);
        assert_eq!(word_boundary_right(s, 9), 13);
    }
}
