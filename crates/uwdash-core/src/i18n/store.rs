//! Locale persistence store.
//!
//! One key-value pair survives process restarts: the user's chosen (or
//! detected) language code. The trait is implemented per platform in the
//! frontend crate (browser localStorage on web, a small file on desktop)
//! and by [`InMemoryLocaleStore`] here for tests.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::error::LocaleStoreError;

/// Persistence seam for the chosen language code.
#[async_trait(?Send)]
pub trait LocaleStore {
    /// Read the persisted language code, if any.
    async fn load(&self) -> Result<Option<String>, LocaleStoreError>;

    /// Persist a language code, replacing any previous value.
    async fn save(&self, code: &str) -> Result<(), LocaleStoreError>;

    /// Remove the persisted language code.
    async fn clear(&self) -> Result<(), LocaleStoreError>;
}

/// In-memory store for tests and for environments with no durable storage.
#[derive(Default)]
pub struct InMemoryLocaleStore {
    value: RefCell<Option<String>>,
}

impl InMemoryLocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a persisted choice.
    pub fn with_value(code: &str) -> Self {
        Self {
            value: RefCell::new(Some(code.to_string())),
        }
    }
}

#[async_trait(?Send)]
impl LocaleStore for InMemoryLocaleStore {
    async fn load(&self) -> Result<Option<String>, LocaleStoreError> {
        Ok(self.value.borrow().clone())
    }

    async fn save(&self, code: &str) -> Result<(), LocaleStoreError> {
        *self.value.borrow_mut() = Some(code.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), LocaleStoreError> {
        *self.value.borrow_mut() = None;
        Ok(())
    }
}
