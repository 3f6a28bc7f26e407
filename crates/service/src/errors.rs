use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} with key '{key}' not found")]
    NotFound { entity: &'static str, key: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, key: &str) -> Self {
        Self::NotFound { entity, key: key.to_string() }
    }

    /// Stable, transport-neutral label of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Internal(_) => "internal",
        }
    }
}
