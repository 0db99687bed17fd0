//! Share client
//!
//! Owns the configuration and the collaborators a flow may need. Simple
//! mode works with no collaborators at all; indirect modes need a
//! [`RecordStore`], and password-protected receipt needs a
//! [`PasswordPrompt`].

use crate::handlers::{HistoryScrub, PasswordPrompt, UrlShortener};
use crate::{Result, ShareConfig, ShareError};
use sealink_store::RecordStore;
use std::sync::Arc;

/// Entry point for creating, receiving, and updating share links
pub struct ShareClient {
    pub(crate) config: ShareConfig,
    pub(crate) store: Option<Arc<dyn RecordStore>>,
    pub(crate) password_prompt: Option<Arc<dyn PasswordPrompt>>,
    pub(crate) shortener: Option<Arc<dyn UrlShortener>>,
    pub(crate) history_scrub: Option<Arc<dyn HistoryScrub>>,
}

impl ShareClient {
    /// Create a client with no collaborators (sufficient for simple mode)
    pub fn new(config: ShareConfig) -> Self {
        Self {
            config,
            store: None,
            password_prompt: None,
            shortener: None,
            history_scrub: None,
        }
    }

    /// Attach the storage collaborator required by cloud/dynamic modes
    pub fn with_store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Attach a password prompt for password-protected links
    pub fn with_password_prompt(mut self, prompt: Arc<dyn PasswordPrompt>) -> Self {
        self.password_prompt = Some(prompt);
        self
    }

    /// Attach a URL shortener; failures fall back to the long URL
    pub fn with_shortener(mut self, shortener: Arc<dyn UrlShortener>) -> Self {
        self.shortener = Some(shortener);
        self
    }

    /// Attach a best-effort history scrubber invoked after receipt
    pub fn with_history_scrub(mut self, scrub: Arc<dyn HistoryScrub>) -> Self {
        self.history_scrub = Some(scrub);
        self
    }

    /// The active configuration
    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    pub(crate) fn require_store(&self) -> Result<&Arc<dyn RecordStore>> {
        self.store
            .as_ref()
            .ok_or_else(|| ShareError::Config("this mode requires a record store".to_string()))
    }
}
