use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn rejected(status: u16, detail: Option<String>) -> Self {
        ApiError::Rejected { status, detail }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The request never produced a usable response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Decode(_) | ApiError::Encode(_))
    }
}
