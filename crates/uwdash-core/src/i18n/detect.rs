//! Locale detection strategies.
//!
//! Detection is an ordered sequence of strategies evaluated in priority
//! order; the first strategy producing a usable result wins. Each strategy is
//! a pure probe of one source (persisted choice, environment preference,
//! root markup), which keeps resolution deterministic under test: hand the
//! resolver fake strategies instead of mocking an environment.

use std::rc::Rc;

use async_trait::async_trait;
use tracing::debug;

use super::store::LocaleStore;

/// One way of inferring the user's preferred language.
#[async_trait(?Send)]
pub trait DetectionStrategy {
    /// Short name for diagnostics ("persisted", "navigator", …).
    fn name(&self) -> &'static str;

    /// Probe this strategy's source. `None` means the source had nothing to
    /// say; resolution moves on to the next strategy.
    async fn detect(&self) -> Option<String>;
}

/// Highest-priority strategy: the previously persisted choice.
pub struct PersistedChoice {
    store: Rc<dyn LocaleStore>,
}

impl PersistedChoice {
    pub fn new(store: Rc<dyn LocaleStore>) -> Self {
        Self { store }
    }
}

#[async_trait(?Send)]
impl DetectionStrategy for PersistedChoice {
    fn name(&self) -> &'static str {
        "persisted"
    }

    async fn detect(&self) -> Option<String> {
        match self.store.load().await {
            Ok(value) => value.and_then(|tag| normalize_tag(&tag)),
            Err(e) => {
                debug!("persisted language unavailable: {e}");
                None
            }
        }
    }
}

/// Trim a raw language tag; empty input is no detection result.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::store::InMemoryLocaleStore;

    #[test]
    fn normalize_tag_rejects_blank_input() {
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag("   "), None);
        assert_eq!(normalize_tag(" en-US "), Some("en-US".to_string()));
    }

    #[tokio::test]
    async fn persisted_choice_reads_the_store() {
        let store = Rc::new(InMemoryLocaleStore::with_value("fr"));
        let strategy = PersistedChoice::new(store.clone());
        assert_eq!(strategy.detect().await, Some("fr".to_string()));

        store.clear().await.unwrap();
        assert_eq!(strategy.detect().await, None);
    }
}
