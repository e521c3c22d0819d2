//! User-facing texts and the rules that pick them from an `ApiError`.

use crate::error::ApiError;

pub const LOGIN_RATE_LIMITED: &str = "Too many attempts. Please try again later.";
pub const LOGIN_BAD_CREDENTIALS: &str = "Invalid username or password.";
pub const LOGIN_FAILED: &str = "Sign-in failed. Please try again.";
pub const NETWORK_ERROR: &str = "Network error. Please try again.";
pub const GENERIC_RETRY: &str = "Something went wrong. Please try again.";

pub const REGISTRATION_FAILED: &str = "Registration failed. Check the entered data.";
pub const REGISTRATION_EMAIL_SENT: &str =
    "A confirmation email has been sent to your address.";

pub const VERIFICATION_SENT: &str = "A verification email has been sent.";
pub const VERIFICATION_REQUEST_FAILED: &str = "Could not send the verification email.";
pub const VERIFICATION_FAILED: &str = "The verification link is invalid or has expired.";
pub const VERIFICATION_TOKEN_MISSING: &str = "The verification link has no token.";

pub const RESET_SENT: &str = "Password reset instructions have been sent to your email.";
pub const RESET_REQUEST_FAILED: &str = "Could not request a password reset.";
pub const RESET_CHECK_EMAIL: &str = "Check your email";
pub const RESET_TOKEN_MISSING: &str = "The reset token is missing. Please try again.";
pub const RESET_FAILED: &str = "Could not reset the password.";

pub const LOGOUT_FAILED: &str = "Sign-out failed. Please try again.";

pub const FAVORITE_SIGN_IN: &str = "Sign in or register to add products to favorites.";
pub const FAVORITE_ALREADY_ADDED: &str = "This product is already in your favorites.";
pub const FAVORITE_ADD_FAILED: &str = "Could not add the product to favorites.";
pub const FAVORITE_ID_MISSING: &str = "Favorite id is missing.";
pub const FAVORITE_REMOVE_FAILED: &str = "Could not remove the product.";
pub const FAVORITE_REMOVE_ERROR: &str = "An error occurred while removing the product.";

pub const ORDER_PRODUCT_UNKNOWN: &str = "Could not read the product data.";
pub const ORDER_CHOOSE_PICKUP: &str = "Choose a pickup point.";
pub const ORDER_FAILED: &str = "Could not place the order.";

/// Login is the one flow that tells rate limiting and bad credentials apart.
pub fn login_failure(err: &ApiError) -> &'static str {
    if err.is_transport() {
        return NETWORK_ERROR;
    }
    match (err.status(), err.detail()) {
        (Some(429), _) => LOGIN_RATE_LIMITED,
        (_, Some("LOGIN_BAD_CREDENTIALS")) => LOGIN_BAD_CREDENTIALS,
        _ => LOGIN_FAILED,
    }
}

/// `Error: <detail>` for rejections, `fallback` when the server gave none,
/// and the generic retry text when the request never completed.
pub fn detail_or(err: &ApiError, fallback: &str) -> String {
    if err.is_transport() {
        return GENERIC_RETRY.to_string();
    }
    format!("Error: {}", err.detail().unwrap_or(fallback))
}

/// Any rejection of an add is reported as a duplicate.
pub fn favorite_add_failure(err: &ApiError) -> &'static str {
    if err.is_transport() {
        FAVORITE_ADD_FAILED
    } else {
        FAVORITE_ALREADY_ADDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_or_prefers_server_detail() {
        let err = ApiError::rejected(400, Some("RESET_PASSWORD_BAD_TOKEN".into()));
        assert_eq!(detail_or(&err, RESET_FAILED), "Error: RESET_PASSWORD_BAD_TOKEN");

        let err = ApiError::rejected(500, None);
        assert_eq!(detail_or(&err, RESET_FAILED), format!("Error: {}", RESET_FAILED));
    }

    #[test]
    fn detail_or_on_transport_is_generic() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(detail_or(&err, RESET_FAILED), GENERIC_RETRY);
    }
}
