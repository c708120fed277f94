//! Locale resolution and translation lookup.
//!
//! [`LocaleResolver`] owns the detection pipeline and the persistence store;
//! [`Localizer`] is the render-side handle that translated surfaces read.
//! The resolver is built with explicit, injectable state (strategies and a
//! store) rather than ambient globals, so resolution is deterministic in unit
//! tests.

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::config;
use crate::error::LocaleError;

use super::detect::DetectionStrategy;
use super::resources::Resources;
use super::store::LocaleStore;

/// Resolves which language's resources are active.
pub struct LocaleResolver {
    resources: Rc<Resources>,
    strategies: Vec<Box<dyn DetectionStrategy>>,
    store: Rc<dyn LocaleStore>,
}

impl LocaleResolver {
    /// A resolver with no strategies. Push strategies in priority order;
    /// without any, [`resolve`](Self::resolve) returns the default language.
    pub fn new(resources: Rc<Resources>, store: Rc<dyn LocaleStore>) -> Self {
        Self {
            resources,
            strategies: Vec::new(),
            store,
        }
    }

    /// Append a detection strategy. Earlier strategies win.
    pub fn push_strategy(&mut self, strategy: Box<dyn DetectionStrategy>) {
        self.strategies.push(strategy);
    }

    /// Resolve the active language.
    ///
    /// Walks the strategies in priority order; the first one yielding a
    /// supported tag (or the inspection pseudo-language) wins. Falls back to
    /// [`config::DEFAULT_LANGUAGE`] when every source comes up empty. The
    /// resolved code is written back to the store, except the inspection
    /// pseudo-language, which is never persisted.
    ///
    /// Idempotent and re-invocable: resolving again re-probes the sources and
    /// yields the same answer for the same source state.
    pub async fn resolve(&self) -> String {
        for strategy in &self.strategies {
            let Some(tag) = strategy.detect().await else {
                continue;
            };
            if tag == config::INSPECTION_LANGUAGE {
                info!("locale resolved to inspection mode via {}", strategy.name());
                return tag;
            }
            match self.resources.supported(&tag) {
                Some(code) => {
                    debug!("locale {code:?} detected via {}", strategy.name());
                    self.persist(&code).await;
                    return code;
                }
                None => {
                    debug!(
                        "ignoring unsupported tag {tag:?} from {}",
                        strategy.name()
                    );
                }
            }
        }

        debug!(
            "no detection source produced a language; using default {:?}",
            config::DEFAULT_LANGUAGE
        );
        let code = config::DEFAULT_LANGUAGE.to_string();
        self.persist(&code).await;
        code
    }

    /// Explicit language override.
    ///
    /// Validates `code` against the registered bundles (the inspection
    /// pseudo-language is always accepted), persists the choice, and returns
    /// the normalized code for the caller to apply to its [`Localizer`].
    pub async fn set_language(&self, code: &str) -> Result<String, LocaleError> {
        if code == config::INSPECTION_LANGUAGE {
            // Inspection mode is explicitly excluded from persistence.
            return Ok(code.to_string());
        }
        let normalized = self
            .resources
            .supported(code)
            .ok_or_else(|| LocaleError::UnsupportedLanguage(code.to_string()))?;
        self.persist(&normalized).await;
        Ok(normalized)
    }

    /// Write the code back to the store. Store failures degrade to a log
    /// line; persistence is best-effort and never breaks the shell.
    async fn persist(&self, code: &str) {
        if let Err(e) = self.store.save(code).await {
            warn!("failed to persist language {code:?}: {e}");
        }
    }
}

/// Render-side translation handle: the active language plus the shared
/// resource bundles.
///
/// Exactly one writer mutates the active language at a time (the detection
/// pipeline or an explicit user action); every translated surface reads it.
#[derive(Clone)]
pub struct Localizer {
    resources: Rc<Resources>,
    active: String,
}

impl Localizer {
    /// A localizer starting on the default language, so the shell can render
    /// before detection completes.
    pub fn new(resources: Rc<Resources>) -> Self {
        Self {
            resources,
            active: config::DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// The active language code.
    pub fn language(&self) -> &str {
        &self.active
    }

    /// Apply a resolved or user-chosen language code.
    pub fn set_active(&mut self, code: &str) {
        self.active = code.to_string();
    }

    /// Language codes with registered bundles, for the language selector.
    pub fn available_languages(&self) -> Vec<String> {
        self.resources.languages()
    }

    /// Look up a translation key.
    ///
    /// Fails soft: tries the active bundle, then the fallback language, then
    /// returns the key itself; a missing translation is never an error.
    /// Under the inspection pseudo-language every key maps to itself.
    pub fn translate(&self, key: &str) -> String {
        if self.active == config::INSPECTION_LANGUAGE {
            return key.to_string();
        }
        if let Some(text) = self.resources.lookup(&self.active, key) {
            return text.to_string();
        }
        if self.active != config::FALLBACK_LANGUAGE {
            if let Some(text) = self.resources.lookup(config::FALLBACK_LANGUAGE, key) {
                debug!(
                    "key {key:?} missing in {:?}; using {:?}",
                    self.active,
                    config::FALLBACK_LANGUAGE
                );
                return text.to_string();
            }
        }
        debug!("no translation for key {key:?}");
        key.to_string()
    }
}
