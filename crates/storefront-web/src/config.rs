//! Page configuration read from hidden inputs rendered by the server.
//!
//! Every key has an element id. A non-blank value on the page wins over the
//! built-in default; keys without a default are required by the widget that
//! uses them and the widget is not mounted when they are missing.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Logout,
    Register,
    RequestVerification,
    VerifyEmail,
    ResetPasswordRequest,
    ResetPassword,
    FavoritesAdd,
    FavoritesDelete,
    Search,
    PickupPoints,
    Orders,
}

impl Endpoint {
    pub fn element_id(self) -> &'static str {
        match self {
            Endpoint::Login => "login-url",
            Endpoint::Logout => "logout-url",
            Endpoint::Register => "register-url",
            Endpoint::RequestVerification => "verify-url",
            Endpoint::VerifyEmail => "verify-email",
            Endpoint::ResetPasswordRequest => "reset-password-url",
            Endpoint::ResetPassword => "password-reset",
            Endpoint::FavoritesAdd => "favorites-add-url",
            Endpoint::FavoritesDelete => "favorites-del-url",
            Endpoint::Search => "search-url",
            Endpoint::PickupPoints => "pickup-points-url",
            Endpoint::Orders => "orders-url",
        }
    }

    pub fn default_url(self) -> Option<&'static str> {
        match self {
            Endpoint::PickupPoints => Some("/api/v1/pickup-points/"),
            Endpoint::Orders => Some("/api/v1/orders/"),
            _ => None,
        }
    }
}

pub const USER_ID: &str = "user-id";
pub const PRODUCT_ID: &str = "product-id";
pub const USER_EMAIL: &str = "user-email";
pub const PRODUCT_PRICE: &str = "product-price";

pub trait ConfigSource {
    fn value(&self, id: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn value(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

pub struct PageConfig<S> {
    source: S,
}

impl<S: ConfigSource> PageConfig<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    fn non_blank(&self, id: &str) -> Option<String> {
        self.source
            .value(id)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> Option<String> {
        self.non_blank(endpoint.element_id())
            .or_else(|| endpoint.default_url().map(str::to_string))
    }

    /// Anonymous pages render an empty or zero id.
    pub fn user_id(&self) -> Option<i64> {
        self.positive_id(USER_ID)
    }

    pub fn product_id(&self) -> Option<i64> {
        self.positive_id(PRODUCT_ID)
    }

    pub fn user_email(&self) -> Option<String> {
        self.non_blank(USER_EMAIL)
    }

    pub fn product_price(&self) -> Option<String> {
        self.non_blank(PRODUCT_PRICE)
    }

    fn positive_id(&self, id: &str) -> Option<i64> {
        self.non_blank(id)?
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
    }
}

pub fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|level| level.trim().parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> PageConfig<HashMap<String, String>> {
        PageConfig::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn page_value_overrides_default() {
        let page = config(&[("orders-url", "/api/v2/orders/")]);
        assert_eq!(page.endpoint(Endpoint::Orders).as_deref(), Some("/api/v2/orders/"));
        assert_eq!(
            page.endpoint(Endpoint::PickupPoints).as_deref(),
            Some("/api/v1/pickup-points/")
        );
    }

    #[test]
    fn blank_required_endpoint_is_missing() {
        let page = config(&[("login-url", "   ")]);
        assert_eq!(page.endpoint(Endpoint::Login), None);
        assert_eq!(page.endpoint(Endpoint::Logout), None);
    }

    #[test]
    fn anonymous_user_has_no_id() {
        assert_eq!(config(&[("user-id", "")]).user_id(), None);
        assert_eq!(config(&[("user-id", "0")]).user_id(), None);
        assert_eq!(config(&[("user-id", "None")]).user_id(), None);
        assert_eq!(config(&[("user-id", " 42 ")]).user_id(), Some(42));
    }

    #[test]
    fn log_level_falls_back_to_info() {
        assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
        assert_eq!(parse_log_level(Some("loud")), log::Level::Info);
        assert_eq!(parse_log_level(None), log::Level::Info);
    }
}
