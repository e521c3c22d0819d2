/// Extracts the amount from a price label such as `Цена: 1 250 000 ₽`.
pub fn parse_price_label(label: &str) -> Option<String> {
    let amount = label
        .trim()
        .trim_start_matches("Цена:")
        .trim_start_matches("Price:")
        .trim_end_matches('₽')
        .trim();

    if amount.is_empty() {
        None
    } else {
        Some(amount.to_string())
    }
}

pub fn format_price(amount: &str) -> String {
    format!("{} ₽", amount)
}

/// The query to search for, or `None` when only whitespace was typed.
pub fn normalize_query(raw: &str) -> Option<&str> {
    let query = raw.trim();
    (!query.is_empty()).then_some(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_label_prefix_and_currency_are_stripped() {
        assert_eq!(parse_price_label("Цена: 1 250 000 ₽").as_deref(), Some("1 250 000"));
        assert_eq!(parse_price_label("Price: 990").as_deref(), Some("990"));
        assert_eq!(parse_price_label("Цена:  ₽"), None);
    }

    #[test]
    fn blank_query_is_ignored() {
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("  yamaha 40 "), Some("yamaha 40"));
    }
}
