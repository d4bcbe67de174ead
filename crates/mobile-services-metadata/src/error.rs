use std::io::Error as IoError;

pub type Result<T, E = MobileServiceError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum MobileServiceError {
    #[error("service {0} can not be bound: no bindable custom resource kind")]
    UnbindableService(String),
    #[error("custom resource kind {0} does not support binding")]
    UnsupportedBinding(String),
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("io error: {0}")]
    Io(#[from] IoError),
}

impl MobileServiceError {
    pub fn invalid_payload<M: Into<String>>(reason: M) -> Self {
        Self::InvalidPayload(reason.into())
    }
}
