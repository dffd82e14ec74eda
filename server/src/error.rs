use curve::CryptoError;
use thiserror::Error;

use crate::types::ErrorPayload;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("failed to decode request body: {0}")]
    DecodingFailure(#[from] serde_json::Error),
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl ServiceError {
    /// Machine-readable error kind reported next to the message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DecodingFailure(_) => "decoding_failure",
            Self::Crypto(err) => err.code(),
        }
    }
}

impl From<&ServiceError> for ErrorPayload {
    fn from(err: &ServiceError) -> Self {
        ErrorPayload {
            msg: err.to_string(),
            code: err.code().to_string(),
        }
    }
}
