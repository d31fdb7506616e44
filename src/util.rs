//! Shared utility functions

use unicode_width::UnicodeWidthChar;

/// Truncate a string to at most `max_cols` terminal columns, appending an
/// ellipsis when anything was cut.
///
/// Widths are measured per character so CJK and emoji cells are counted
/// correctly; a double-width character that would straddle the limit is
/// dropped rather than split.
pub fn truncate_to_width(s: &str, max_cols: usize) -> String {
    if max_cols == 0 {
        return String::new();
    }

    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_cols {
        return s.to_owned();
    }

    // Reserve one column for the ellipsis
    let budget = max_cols.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn ascii_truncation_keeps_one_column_for_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 5), "hell…");
    }

    #[test]
    fn wide_characters_count_two_columns() {
        // Each CJK character occupies two cells
        assert_eq!(truncate_to_width("日本語", 10), "日本語");
        assert_eq!(truncate_to_width("日本語だよ", 5), "日本…");
    }

    #[test]
    fn zero_budget_yields_empty() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }
}
