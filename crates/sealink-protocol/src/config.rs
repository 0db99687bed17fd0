//! Client configuration

use sealink_crypto::KdfParams;

/// Default cap on the encoded (base64) payload length in simple mode
pub const DEFAULT_MAX_ENCODED_PAYLOAD: usize = 7_700;

/// Share client configuration
#[derive(Clone, Debug)]
pub struct ShareConfig {
    /// Base URL links are built under (the receiving page)
    pub base_url: String,
    /// Simple-mode cap on the encoded payload length, in characters
    pub max_encoded_payload: usize,
    /// Argon2id cost parameters for password-protected shares
    pub kdf: KdfParams,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/view".to_string(),
            max_encoded_payload: DEFAULT_MAX_ENCODED_PAYLOAD,
            kdf: KdfParams::default(),
        }
    }
}

impl ShareConfig {
    /// Create a config with the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Override the simple-mode encoded-payload cap
    pub fn with_max_encoded_payload(mut self, max: usize) -> Self {
        self.max_encoded_payload = max;
        self
    }

    /// Override the KDF cost parameters
    pub fn with_kdf_params(mut self, kdf: KdfParams) -> Self {
        self.kdf = kdf;
        self
    }
}
