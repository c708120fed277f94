//! Browser-backed locale store and detection strategies (WASM).
//!
//! The persisted language lives in localStorage: the state is one short
//! string, so the heavier browser stores are not warranted. Detection probes
//! `navigator.language` and the `lang` attribute on the document element.

use async_trait::async_trait;
use uwdash_core::config;
use uwdash_core::error::LocaleStoreError;
use uwdash_core::i18n::{normalize_tag, DetectionStrategy, LocaleStore};
use wasm_bindgen::JsValue;

fn local_storage() -> Result<web_sys::Storage, LocaleStoreError> {
    web_sys::window()
        .ok_or(LocaleStoreError::BrowserApiUnavailable)?
        .local_storage()
        .map_err(|_| LocaleStoreError::BrowserApiUnavailable)?
        .ok_or(LocaleStoreError::BrowserApiUnavailable)
}

fn js_io(e: JsValue) -> LocaleStoreError {
    LocaleStoreError::Io(format!("{e:?}"))
}

/// localStorage-backed store for the chosen language code.
pub struct LocalStorageStore;

#[async_trait(?Send)]
impl LocaleStore for LocalStorageStore {
    async fn load(&self) -> Result<Option<String>, LocaleStoreError> {
        local_storage()?
            .get_item(config::PERSISTENCE_KEY)
            .map_err(js_io)
    }

    async fn save(&self, code: &str) -> Result<(), LocaleStoreError> {
        local_storage()?
            .set_item(config::PERSISTENCE_KEY, code)
            .map_err(js_io)
    }

    async fn clear(&self) -> Result<(), LocaleStoreError> {
        local_storage()?
            .remove_item(config::PERSISTENCE_KEY)
            .map_err(js_io)
    }
}

/// The browser's reported language preference (`navigator.language`).
pub struct NavigatorLanguage;

#[async_trait(?Send)]
impl DetectionStrategy for NavigatorLanguage {
    fn name(&self) -> &'static str {
        "navigator"
    }

    async fn detect(&self) -> Option<String> {
        let language = web_sys::window()?.navigator().language()?;
        normalize_tag(&language)
    }
}

/// The language tag embedded in the page's root markup (`<html lang=…>`).
pub struct HtmlLangAttribute;

#[async_trait(?Send)]
impl DetectionStrategy for HtmlLangAttribute {
    fn name(&self) -> &'static str {
        "html-tag"
    }

    async fn detect(&self) -> Option<String> {
        let lang = web_sys::window()?
            .document()?
            .document_element()?
            .get_attribute("lang")?;
        normalize_tag(&lang)
    }
}
