//! Error taxonomy for share-link operations

use sealink_crypto::CryptoError;
use sealink_store::StoreError;
use thiserror::Error;

/// Result type alias using `ShareError`
pub type Result<T> = std::result::Result<T, ShareError>;

/// Errors surfaced by create/receive/update flows.
///
/// There is no partial success: either the full plaintext comes back or
/// one of these is raised.
#[derive(Error, Debug)]
pub enum ShareError {
    /// The URL is missing required fields or carries malformed values
    #[error("invalid share link: {0}")]
    InvalidLink(String),

    /// The link's expiry date is in the past (UTC day granularity)
    #[error("share link expired")]
    ExpiredLink,

    /// The link is password-protected and no password was obtained
    #[error("password required to open this link")]
    PasswordRequired,

    /// Authentication/integrity failure of any ciphertext in the share.
    /// Wrong password, corrupted data, and tampered expiry all land here;
    /// keeping them indistinguishable denies attackers a guessing oracle.
    #[error("decryption failed")]
    DecryptionFailed,

    /// Simple-mode encoded payload exceeds the configured limit
    #[error("encoded payload is {encoded_len} chars, exceeds simple-mode limit of {max}")]
    PayloadTooLarge { encoded_len: usize, max: usize },

    /// A storage collaborator call failed; `op` names the failing operation
    #[error("storage {op} failed: {source}")]
    Store {
        op: &'static str,
        #[source]
        source: StoreError,
    },

    /// A cryptographic primitive failed outside of decryption
    #[error("crypto error: {0}")]
    Crypto(#[source] CryptoError),

    /// Client is missing a collaborator the requested mode needs
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error (simple-mode compression)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CryptoError> for ShareError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::Decryption => Self::DecryptionFailed,
            other => Self::Crypto(other),
        }
    }
}

impl ShareError {
    /// Wrap a store failure with the name of the operation that failed
    pub(crate) fn store(op: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { op, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decryption_error_collapses() {
        let err: ShareError = CryptoError::Decryption.into();
        assert!(matches!(err, ShareError::DecryptionFailed));
    }

    #[test]
    fn test_other_crypto_errors_keep_detail() {
        let err: ShareError = CryptoError::InvalidKey("short".to_string()).into();
        assert!(matches!(err, ShareError::Crypto(_)));
    }

    #[test]
    fn test_store_wrap_names_operation() {
        let err = ShareError::store("create")(StoreError::Backend("down".to_string()));
        assert_eq!(format!("{err}"), "storage create failed: storage backend error: down");
    }
}
