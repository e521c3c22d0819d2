use crate::messages;

/// Trimmed field value, `None` if the user left it blank.
pub fn required(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// The order modal needs both a product and its price before it opens.
pub fn validate_order_product(
    product_id: Option<i64>,
    price: Option<&str>,
) -> Result<(i64, String), &'static str> {
    match (product_id, price.and_then(required)) {
        (Some(id), Some(price)) => Ok((id, price)),
        _ => Err(messages::ORDER_PRODUCT_UNKNOWN),
    }
}

pub fn validate_pickup_selection(selected: Option<i64>) -> Result<i64, &'static str> {
    selected.ok_or(messages::ORDER_CHOOSE_PICKUP)
}

pub fn validate_favorite_id(raw: Option<String>) -> Result<String, &'static str> {
    raw.as_deref()
        .and_then(required)
        .ok_or(messages::FAVORITE_ID_MISSING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_product_requires_id_and_price() {
        assert_eq!(
            validate_order_product(Some(7), Some(" 990 ")),
            Ok((7, "990".to_string()))
        );
        assert_eq!(
            validate_order_product(None, Some("990")),
            Err(messages::ORDER_PRODUCT_UNKNOWN)
        );
        assert_eq!(
            validate_order_product(Some(7), Some("  ")),
            Err(messages::ORDER_PRODUCT_UNKNOWN)
        );
    }

    #[test]
    fn favorite_id_must_be_present() {
        assert_eq!(validate_favorite_id(Some("12".into())), Ok("12".to_string()));
        assert_eq!(validate_favorite_id(Some(" ".into())), Err(messages::FAVORITE_ID_MISSING));
        assert_eq!(validate_favorite_id(None), Err(messages::FAVORITE_ID_MISSING));
    }
}
