//! Collaborator contracts consumed by the protocol
//!
//! These model the thin glue around the core (UI password prompt, TinyURL
//! call, browser history) as narrow async interfaces. The protocol treats
//! shortener and history-scrub failures as best-effort; only storage
//! failures abort a flow.

use async_trait::async_trait;

/// Error type for collaborator implementations
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Obtains a password from the user; `None` signals refusal
#[async_trait]
pub trait PasswordPrompt: Send + Sync {
    async fn prompt(&self) -> Option<String>;
}

/// Collapses a long URL into a short one.
///
/// Failure never aborts a share; the create flow falls back to the
/// unshortened URL.
#[async_trait]
pub trait UrlShortener: Send + Sync {
    async fn shorten(&self, long_url: &str) -> Result<String, HandlerError>;
}

/// Best-effort removal of sensitive URL parameters from browsing history.
///
/// A privacy measure, not a correctness one; failures must not mask the
/// receive flow's primary result.
#[async_trait]
pub trait HistoryScrub: Send + Sync {
    async fn scrub(&self, url: &str) -> Result<(), HandlerError>;
}

/// A prompt that always supplies the same password (tests, CLI flags)
pub struct StaticPassword(pub String);

#[async_trait]
impl PasswordPrompt for StaticPassword {
    async fn prompt(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// A prompt that always refuses
pub struct NoPassword;

#[async_trait]
impl PasswordPrompt for NoPassword {
    async fn prompt(&self) -> Option<String> {
        None
    }
}
