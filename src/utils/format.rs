use unicode_width::UnicodeWidthStr;

/// Format a mean as "41.2", whole numbers without the decimal
pub fn format_percent(value: f64) -> String {
    if value == value.floor() {
        format!("{}%", value as i64)
    } else {
        format!("{:.1}%", value)
    }
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Left-align `s` in `width` terminal columns. Emoji count as two.
pub fn pad_display(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}

/// "☕☕☕··" for 3 of 5
pub fn cups(count: u8, max: u8) -> String {
    let drunk = count.min(max) as usize;
    format!("{}{}", "☕".repeat(drunk), "·".repeat((max as usize).saturating_sub(drunk)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent() {
        assert_eq!(format_percent(95.0), "95%");
        assert_eq!(format_percent(41.2), "41.2%");
    }

    #[test]
    fn bars() {
        assert_eq!(progress_bar(50, 100, 10), "█████░░░░░");
        assert_eq!(progress_bar(120, 100, 4), "████");
        assert_eq!(progress_bar(3, 0, 3), "░░░");
    }

    #[test]
    fn padding_accounts_for_wide_glyphs() {
        assert_eq!(pad_display("🚀", 4), "🚀  ");
        assert_eq!(pad_display("ab", 4), "ab  ");
        assert_eq!(pad_display("toolong", 3), "toolong");
    }

    #[test]
    fn cup_row() {
        assert_eq!(cups(3, 5), "☕☕☕··");
        assert_eq!(cups(9, 5), "☕☕☕☕☕");
        assert_eq!(cups(0, 2), "··");
    }
}
