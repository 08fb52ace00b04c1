use rust_decimal::Decimal;

/// Format a decimal amount with thousand separators and 2 decimal places,
/// e.g. `1234567.89` → `"$1,234,567.89"`.
pub(crate) fn format_amount(val: Decimal) -> String {
    let formatted = format!("{:.2}", val.abs());
    let (int_part, dec_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Truncate a string to `max` visible characters, appending "…" if
/// truncated. Safe for multi-byte UTF-8.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Move a list cursor down by one, adjusting scroll to keep it visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page.saturating_sub(1));
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep it visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
        assert_eq!(format_amount(dec!(0)), "$0.00");
        assert_eq!(format_amount(dec!(45.5)), "$45.50");
        assert_eq!(format_amount(dec!(-900)), "-$900.00");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 5), "hell…");
        assert_eq!(truncate("héllo wörld", 5), "héll…");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn scroll_down_moves_window() {
        let (mut index, mut scroll) = (0, 0);
        for _ in 0..10 {
            scroll_down(&mut index, &mut scroll, 8, 5);
        }
        assert_eq!(index, 7);
        assert_eq!(scroll, 3);
        scroll_to_top(&mut index, &mut scroll);
        assert_eq!((index, scroll), (0, 0));
        scroll_to_bottom(&mut index, &mut scroll, 8, 5);
        assert_eq!((index, scroll), (7, 3));
    }
}
