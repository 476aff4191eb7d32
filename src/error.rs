/// Precondition violated before any network traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingApiKey,
    MissingFrom,
    MissingTo,
    TooManyRecipients,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingApiKey => write!(f, "API key is not set"),
            ValidationError::MissingFrom => write!(f, "From address is not set"),
            ValidationError::MissingTo => write!(f, "To address is not set"),
            ValidationError::TooManyRecipients => write!(f, "Too many email recipients"),
        }
    }
}

/// Everything `send` can fail with. No variant is retried; the first failure
/// aborts the whole operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// A local precondition failed; no request was made.
    Validation(ValidationError),
    /// The HTTP call could not complete (connect/TLS/timeout), or the provider
    /// returned an error body that was not parseable JSON.
    Transport(String),
    /// The provider rejected the message with a non-2xx status.
    Api { status: u16, message: String },
}

impl std::fmt::Display for SendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SendError::Validation(e) => write!(f, "{}", e),
            SendError::Transport(e) => write!(f, "request failed: {}", e),
            SendError::Api { status, message } => {
                write!(f, "provider returned HTTP {} with message \"{}\"", status, message)
            }
        }
    }
}

impl std::error::Error for SendError {}

impl From<ValidationError> for SendError {
    fn from(e: ValidationError) -> Self {
        SendError::Validation(e)
    }
}
