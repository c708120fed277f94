//! Error types for uwdash-core.
//!
//! Missing translations and failed detection are deliberately *not* errors:
//! both recover locally (key fallback, default language) and never surface to
//! the user. The types here cover the cases that genuinely can fail: the
//! persistence store and resource bundle configuration.

use thiserror::Error;

/// Errors that can occur in a locale persistence store.
#[derive(Debug, Clone, Error)]
pub enum LocaleStoreError {
    /// No value persisted under the language key
    #[error("No persisted language")]
    NotFound,
    /// Underlying storage failed
    #[error("IO error: {0}")]
    Io(String),
    /// Stored value could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Web storage API unavailable (private browsing, worker context)
    #[error("Browser storage API unavailable")]
    BrowserApiUnavailable,
}

/// Errors that can occur during locale configuration and explicit language
/// changes.
#[derive(Debug, Clone, Error)]
pub enum LocaleError {
    /// Requested language has no resource bundle
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    /// A resource bundle failed to parse
    #[error("Invalid resource bundle: {0}")]
    InvalidBundle(String),
    /// The persistence store failed
    #[error(transparent)]
    Store(#[from] LocaleStoreError),
}
