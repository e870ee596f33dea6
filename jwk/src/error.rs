use thiserror::Error;

use crate::KeyType;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested shape needs private fields the key material does not
    /// carry. Conversion fails instead of emitting a partial key.
    #[error("RSA type mismatch: requested {requested}, given {given}")]
    InsufficientKeyMaterial { requested: KeyType, given: KeyType },

    #[error("Invalid PEM: {0}")]
    InvalidPem(#[from] pem::error::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(#[from] pkcs1::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
