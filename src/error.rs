use thiserror::Error;

/// Failures talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, DNS or TLS failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Form input rejected before anything is sent
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please upload the payment screenshot.")]
    MissingProof,

    #[error("{0} is not an image")]
    NotAnImage(String),
}

/// Why an inquiry or lead submission did not go through
#[derive(Debug, Error)]
pub enum InquiryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("form is not open")]
    NotOpen,

    #[error("a submission is already in flight")]
    InFlight,

    #[error("confirm the payment before uploading proof")]
    WrongStep,

    #[error("failed to read proof image: {0}")]
    Io(#[from] std::io::Error),
}
