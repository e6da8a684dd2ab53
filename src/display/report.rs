//! Text layout helpers for terminal report output

/// Format a header line centered in `width`
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// A `label: value` row with the value right-aligned so rows line up
pub fn label_value_row(label: &str, value: &str, width: usize) -> String {
    let label = format!("{}:", label);
    let used = label.chars().count() + value.chars().count();
    let gap = if used >= width { 1 } else { width - used };
    format!("{}{}{}", label, " ".repeat(gap), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("abc", 7), "  abc");
        assert_eq!(format_header("too long", 3), "too long");
    }

    #[test]
    fn test_label_value_row() {
        assert_eq!(label_value_row("Income", "Rs. 50", 16), "Income:   Rs. 50");
        assert_eq!(label_value_row("Income", "Rs. 5000000", 10), "Income: Rs. 5000000");
    }

    #[test]
    fn test_separators() {
        assert_eq!(separator(3), "───");
        assert_eq!(double_separator(2), "══");
    }
}
