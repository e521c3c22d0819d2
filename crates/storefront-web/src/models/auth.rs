use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRequest {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// Login goes out form-encoded, so this one is never serialized as JSON.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}
