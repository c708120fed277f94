//! Translation resource bundles.
//!
//! A language code maps to a flat key→string table. Bundles are authored as
//! (possibly nested) JSON; nesting is flattened into dot-joined keys at load
//! time, so `{"pages": {"admin": {"title": "Admin"}}}` is looked up as
//! `pages.admin.title`. English ships embedded; additional languages are a
//! configuration surface and register through [`Resources::add_bundle`].

use std::collections::HashMap;

use serde::Deserialize;

use crate::config;
use crate::error::LocaleError;

/// Embedded English bundle, the only language shipped with the shell.
const EN_BUNDLE: &str = include_str!("locales/en.json");

/// One node of an authored bundle: either a translation or a nested table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BundleNode {
    Leaf(String),
    Branch(HashMap<String, BundleNode>),
}

/// All registered translation bundles, keyed by lowercase language code.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    bundles: HashMap<String, HashMap<String, String>>,
}

impl Resources {
    /// Resources with no bundles. Every lookup misses; `translate` degrades
    /// to returning keys.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resources with the embedded English bundle registered.
    pub fn builtin() -> Result<Self, LocaleError> {
        let mut resources = Self::empty();
        resources.add_bundle(config::DEFAULT_LANGUAGE, EN_BUNDLE)?;
        Ok(resources)
    }

    /// Register a bundle for `code` from JSON source.
    ///
    /// Replaces any bundle already registered under the same code.
    pub fn add_bundle(&mut self, code: &str, json: &str) -> Result<(), LocaleError> {
        let root: HashMap<String, BundleNode> = serde_json::from_str(json)
            .map_err(|e| LocaleError::InvalidBundle(format!("{code}: {e}")))?;
        let mut table = HashMap::new();
        for (key, node) in &root {
            flatten(key, node, &mut table);
        }
        self.bundles.insert(code.to_ascii_lowercase(), table);
        Ok(())
    }

    /// Normalize a detected language tag against the registered bundles.
    ///
    /// Accepts an exact code match first, then the base subtag (`en-US`
    /// resolves to `en`). Returns `None` for tags with no bundle.
    pub fn supported(&self, tag: &str) -> Option<String> {
        let norm = tag.trim().to_ascii_lowercase().replace('_', "-");
        if norm.is_empty() {
            return None;
        }
        if self.bundles.contains_key(&norm) {
            return Some(norm);
        }
        let base = norm.split('-').next().unwrap_or(&norm);
        if self.bundles.contains_key(base) {
            return Some(base.to_string());
        }
        None
    }

    /// Registered language codes, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.bundles.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Look up `key` in the bundle for `code`.
    pub fn lookup(&self, code: &str, key: &str) -> Option<&str> {
        self.bundles.get(code)?.get(key).map(String::as_str)
    }
}

/// Flatten nested tables into dot-joined keys.
fn flatten(prefix: &str, node: &BundleNode, out: &mut HashMap<String, String>) {
    match node {
        BundleNode::Leaf(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        BundleNode::Branch(map) => {
            for (k, v) in map {
                flatten(&format!("{prefix}.{k}"), v, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_carries_flattened_english_keys() {
        let resources = Resources::builtin().unwrap();
        assert_eq!(resources.lookup("en", "nav.admin"), Some("Admin"));
        assert_eq!(
            resources.lookup("en", "pages.admin.body"),
            Some("Admin page - coming soon")
        );
    }

    #[test]
    fn supported_matches_exact_then_base_subtag() {
        let resources = Resources::builtin().unwrap();
        assert_eq!(resources.supported("en"), Some("en".to_string()));
        assert_eq!(resources.supported("en-US"), Some("en".to_string()));
        assert_eq!(resources.supported("en_GB"), Some("en".to_string()));
        assert_eq!(resources.supported("fr"), None);
        assert_eq!(resources.supported(""), None);
        assert_eq!(resources.supported("   "), None);
    }

    #[test]
    fn add_bundle_registers_new_language() {
        let mut resources = Resources::builtin().unwrap();
        resources
            .add_bundle("fr", r#"{"nav": {"admin": "Administration"}}"#)
            .unwrap();
        assert_eq!(resources.supported("fr-CA"), Some("fr".to_string()));
        assert_eq!(resources.lookup("fr", "nav.admin"), Some("Administration"));
        assert_eq!(resources.languages(), vec!["en", "fr"]);
    }

    #[test]
    fn add_bundle_rejects_malformed_json() {
        let mut resources = Resources::empty();
        assert!(resources.add_bundle("fr", "{not json").is_err());
    }
}
