/// Renders a monetary value with the fixed en-IN style grouping used by the
/// prompt templates: `₹` prefix, last three integer digits grouped, then
/// pairs (`₹12,34,567`). Values with a fractional part keep two decimals.
pub fn format_inr(value: f64) -> String {
    let negative = value < 0.0;
    let abs = value.abs();

    // Two-decimal rounding decides whether a fraction is shown at all, so
    // 99.999 renders as ₹100 rather than ₹100.00.
    let rounded = (abs * 100.0).round() / 100.0;
    let int_part = rounded.trunc() as u64;
    let frac = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let grouped = group_indian(int_part);
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('₹');
    out.push_str(&grouped);
    if frac > 0 {
        out.push_str(&format!(".{:02}", frac));
    }
    out
}

fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<String> = Vec::new();
    let head_chars: Vec<char> = head.chars().collect();
    let mut idx = head_chars.len();
    while idx > 0 {
        let start = idx.saturating_sub(2);
        groups.push(head_chars[start..idx].iter().collect());
        idx = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1_000.0), "₹1,000");
        assert_eq!(format_inr(100_000.0), "₹1,00,000");
        assert_eq!(format_inr(1_000_000.0), "₹10,00,000");
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
    }

    #[test]
    fn test_fractions_and_sign() {
        assert_eq!(format_inr(1234.5), "₹1,234.50");
        assert_eq!(format_inr(99.999), "₹100");
        assert_eq!(format_inr(-250_000.0), "-₹2,50,000");
    }
}
