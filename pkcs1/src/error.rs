use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected key format: expected {expected}")]
    UnexpectedKeyFormat { expected: &'static str },

    #[error("Invalid PEM: {0}")]
    InvalidPem(#[from] pem::error::Error),

    #[error("Invalid DER: {0}")]
    InvalidDer(#[from] der::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
