use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("remote error {0}: {1}")]
    Remote(i64, String),
    #[error("can't decode response: {0}")]
    Decode(String),
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}
