//! Small text helpers shared by the report printers.

/// A horizontal rule of `width` dashes.
pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// A section banner such as `=== Results ===`.
pub fn banner(title: &str) -> String {
    format!("=== {title} ===")
}

/// Formats `value` with two decimals, the default precision of every report.
pub fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}

/// Formats a count with a singular or plural noun.
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed2_rounds() {
        assert_eq!(fixed2(6.0), "6.00");
        assert_eq!(fixed2(3.14159), "3.14");
    }

    #[test]
    fn test_banner_and_rule() {
        assert_eq!(banner("Summary"), "=== Summary ===");
        assert_eq!(rule(3), "---");
    }

    #[test]
    fn test_count_noun() {
        assert_eq!(count_noun(1, "year", "years"), "1 year");
        assert_eq!(count_noun(4, "year", "years"), "4 years");
    }
}
