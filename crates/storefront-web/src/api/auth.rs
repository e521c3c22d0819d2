use crate::api::client::{post_form, post_json, send, FORM_CONTENT_TYPE};
use crate::error::ApiError;
use crate::models::{
    EmailRequest, LoginCredentials, RegisterRequest, ResetPasswordRequest, TokenRequest,
};
use gloo_net::http::Request;

/// The backend answers a successful login with a cookie and no body.
pub async fn login(url: &str, credentials: &LoginCredentials) -> Result<(), ApiError> {
    post_form(
        url,
        &[
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ],
    )
    .await?;
    Ok(())
}

pub async fn logout(url: &str) -> Result<(), ApiError> {
    let request = Request::post(url)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    send(request).await?;
    Ok(())
}

pub async fn register(url: &str, request: &RegisterRequest) -> Result<(), ApiError> {
    post_json(url, request).await?;
    Ok(())
}

pub async fn request_verification(url: &str, email: &str) -> Result<(), ApiError> {
    post_json(
        url,
        &EmailRequest {
            email: email.to_string(),
        },
    )
    .await?;
    Ok(())
}

pub async fn verify_email(url: &str, token: &str) -> Result<(), ApiError> {
    post_json(
        url,
        &TokenRequest {
            token: token.to_string(),
        },
    )
    .await?;
    Ok(())
}

pub async fn request_password_reset(url: &str, email: &str) -> Result<(), ApiError> {
    post_json(
        url,
        &EmailRequest {
            email: email.to_string(),
        },
    )
    .await?;
    Ok(())
}

pub async fn reset_password(url: &str, token: &str, password: &str) -> Result<(), ApiError> {
    post_json(
        url,
        &ResetPasswordRequest {
            token: token.to_string(),
            password: password.to_string(),
        },
    )
    .await?;
    Ok(())
}
