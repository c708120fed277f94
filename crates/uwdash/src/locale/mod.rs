//! Platform wiring for locale resolution.
//!
//! `uwdash-core` defines the seams (detection strategies, persistence store);
//! this module supplies the platform implementations and assembles the
//! resolver the shell uses:
//!
//! - **Web (WASM)**: localStorage store; `navigator.language` and
//!   `<html lang>` strategies
//! - **Desktop**: file-backed store in the user data directory; `LANG`
//!   environment strategy
//!
//! Resolution is bounded: [`resolve_with_timeout`] races the detection pass
//! against a platform timer and keeps the default language on timeout, so a
//! slow storage read can never stall the first paint indefinitely.

use std::rc::Rc;

use dioxus::logger::tracing::warn;
use uwdash_core::config;
use uwdash_core::i18n::{DetectionStrategy, LocaleResolver, LocaleStore, PersistedChoice, Resources};

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(target_arch = "wasm32")]
pub use browser::{HtmlLangAttribute, LocalStorageStore, NavigatorLanguage};
#[cfg(not(target_arch = "wasm32"))]
pub use native::{EnvLanguage, FileLocaleStore};

/// The platform's persistence store for the chosen language.
#[cfg(target_arch = "wasm32")]
pub fn platform_store() -> Rc<dyn LocaleStore> {
    Rc::new(LocalStorageStore)
}

/// The platform's persistence store for the chosen language.
///
/// Falls back to a non-persisting in-memory store when no user data
/// directory is available.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store() -> Rc<dyn LocaleStore> {
    match FileLocaleStore::at_default_location() {
        Some(store) => Rc::new(store),
        None => {
            warn!("no user data directory; language choice will not persist");
            Rc::new(uwdash_core::i18n::InMemoryLocaleStore::new())
        }
    }
}

/// Platform detection strategies, in priority order after the persisted
/// choice.
#[cfg(target_arch = "wasm32")]
fn platform_strategies() -> Vec<Box<dyn DetectionStrategy>> {
    vec![Box::new(NavigatorLanguage), Box::new(HtmlLangAttribute)]
}

/// Platform detection strategies, in priority order after the persisted
/// choice.
#[cfg(not(target_arch = "wasm32"))]
fn platform_strategies() -> Vec<Box<dyn DetectionStrategy>> {
    vec![Box::new(EnvLanguage)]
}

/// Assemble the shell's resolver: persisted choice first, then the
/// platform's environment sources.
pub fn shell_resolver(resources: Rc<Resources>) -> LocaleResolver {
    let store = platform_store();
    let mut resolver = LocaleResolver::new(resources, store.clone());
    resolver.push_strategy(Box::new(PersistedChoice::new(store)));
    for strategy in platform_strategies() {
        resolver.push_strategy(strategy);
    }
    resolver
}

/// Resolve the active language, bounded by `timeout_ms`.
///
/// On timeout the default language is returned; a later re-resolution can
/// still upgrade it, and applying the same language twice is a no-op.
#[cfg(target_arch = "wasm32")]
pub async fn resolve_with_timeout(resolver: &LocaleResolver, timeout_ms: u64) -> String {
    use futures::future::{select, Either};

    let resolve = Box::pin(resolver.resolve());
    let deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms as u32));
    match select(resolve, deadline).await {
        Either::Left((code, _)) => code,
        Either::Right(_) => {
            warn!("locale detection timed out after {timeout_ms}ms; keeping default");
            config::DEFAULT_LANGUAGE.to_string()
        }
    }
}

/// Resolve the active language, bounded by `timeout_ms`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn resolve_with_timeout(resolver: &LocaleResolver, timeout_ms: u64) -> String {
    match tokio::time::timeout(
        std::time::Duration::from_millis(timeout_ms),
        resolver.resolve(),
    )
    .await
    {
        Ok(code) => code,
        Err(_) => {
            warn!("locale detection timed out after {timeout_ms}ms; keeping default");
            config::DEFAULT_LANGUAGE.to_string()
        }
    }
}
