//! Desktop locale store and detection strategy.
//!
//! The chosen language persists as a one-line file in the user data
//! directory. Writes go through a temp file plus rename so a crash mid-write
//! never leaves a torn value. Detection reads the POSIX `LANG` variable, the
//! desktop analog of the browser's reported preference.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uwdash_core::error::LocaleStoreError;
use uwdash_core::i18n::{normalize_tag, DetectionStrategy, LocaleStore};

/// File-backed store for the chosen language code.
pub struct FileLocaleStore {
    path: PathBuf,
}

impl FileLocaleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user data directory, or `None` when the platform
    /// reports no such directory.
    pub fn at_default_location() -> Option<Self> {
        Some(Self::new(dirs::data_dir()?.join("uwdash").join("language")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait(?Send)]
impl LocaleStore for FileLocaleStore {
    async fn load(&self) -> Result<Option<String>, LocaleStoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let code = contents.trim();
                if code.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(code.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LocaleStoreError::Io(e.to_string())),
        }
    }

    async fn save(&self, code: &str) -> Result<(), LocaleStoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LocaleStoreError::Io(e.to_string()))?;
        }
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, code)
            .await
            .map_err(|e| LocaleStoreError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| LocaleStoreError::Io(e.to_string()))
    }

    async fn clear(&self) -> Result<(), LocaleStoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LocaleStoreError::Io(e.to_string())),
        }
    }
}

/// The `LANG` environment variable, e.g. `en_US.UTF-8`.
pub struct EnvLanguage;

/// Turn a POSIX locale value into a plain language tag (`en_US.UTF-8` →
/// `en-US`). The `C` and `POSIX` locales carry no language preference.
fn parse_posix_locale(raw: &str) -> Option<String> {
    let value = raw.split('.').next().unwrap_or(raw).trim();
    if value.is_empty() || value.eq_ignore_ascii_case("c") || value.eq_ignore_ascii_case("posix") {
        return None;
    }
    normalize_tag(&value.replace('_', "-"))
}

#[async_trait(?Send)]
impl DetectionStrategy for EnvLanguage {
    fn name(&self) -> &'static str {
        "env-lang"
    }

    async fn detect(&self) -> Option<String> {
        parse_posix_locale(&std::env::var("LANG").ok()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_locale_values_become_language_tags() {
        assert_eq!(parse_posix_locale("en_US.UTF-8"), Some("en-US".to_string()));
        assert_eq!(parse_posix_locale("fr_CA"), Some("fr-CA".to_string()));
        assert_eq!(parse_posix_locale("de"), Some("de".to_string()));
        assert_eq!(parse_posix_locale("C"), None);
        assert_eq!(parse_posix_locale("C.UTF-8"), None);
        assert_eq!(parse_posix_locale("POSIX"), None);
        assert_eq!(parse_posix_locale(""), None);
    }

    #[tokio::test]
    async fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLocaleStore::new(dir.path().join("language"));

        assert_eq!(store.load().await.unwrap(), None);

        store.save("fr").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("fr".to_string()));

        store.save("en").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("en".to_string()));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
        // Clearing twice is fine.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn file_store_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLocaleStore::new(dir.path().join("nested").join("state").join("language"));
        store.save("en").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("en".to_string()));
    }
}
