use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Place provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl DomainError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn provider_unavailable(detail: impl Into<String>) -> Self {
        Self::ProviderUnavailable(detail.into())
    }
}
