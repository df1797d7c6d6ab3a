use std::sync::Arc;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("request has no host header")]
    MissingHostHeader,
    #[error("event contains no records")]
    MissingRecord,
    // serde_json::Error is not clonable, so we're wrapping it in an Arc.
    #[error("invalid viewer request event")]
    InvalidEvent(#[source] Arc<serde_json::Error>),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidEvent(Arc::new(value))
    }
}
