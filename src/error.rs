pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Webhook URL is not configured")]
    MissingWebhook,

    #[error("Invalid webhook URL: {0}")]
    InvalidWebhook(String),

    #[error("Could not build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Could not serialize webhook payload")]
    Serialize(#[from] serde_json::Error),

    #[error("Could not send POST request to webhook")]
    Transport(#[source] reqwest::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Raised before any network activity.
    Configuration,
    Serialization,
    /// The request could not be completed: DNS, connect, TLS or timeout.
    Transport,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingWebhook | Self::InvalidWebhook(_) => ErrorKind::Configuration,
            Self::Serialize(_) => ErrorKind::Serialization,
            Self::Client(_) | Self::Transport(_) => ErrorKind::Transport,
        }
    }
}
