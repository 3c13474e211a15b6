//! The component source table.

#![allow(clippy::non_std_lazy_statics)] // Using once_cell for broader compatibility

use ahash::AHashMap;
use once_cell::sync::Lazy;
use thiserror::Error;

/// Package name used in import snippets.
pub const PACKAGE_NAME: &str = "@me-ui/react";

/// Built-in sources, in sidebar order.
const BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("BookingBar", include_str!("../sources/BookingBar.jsx")),
    ("ThemeToggle", include_str!("../sources/ThemeToggle.jsx")),
    ("ProductCard", include_str!("../sources/ProductCard.jsx")),
    ("AnimatedCart", include_str!("../sources/AnimatedCart.jsx")),
    ("ModernDropdown", include_str!("../sources/ModernDropdown.jsx")),
];

/// Errors from catalog construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No component matched the requested key.
    #[error("component not found: '{key}' (available: {})", .available.join(", "))]
    NotFound {
        /// The key that was requested.
        key: String,
        /// Keys that do exist.
        available: Vec<String>,
    },

    /// Two entries share a key.
    #[error("duplicate component key: '{0}'")]
    DuplicateKey(String),

    /// An entry has an empty key.
    #[error("component key must not be empty")]
    EmptyKey,
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// One named component source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSource {
    key: String,
    display_name: String,
    source: String,
}

impl ComponentSource {
    /// Creates an entry.
    pub fn new(key: impl Into<String>, source: impl Into<String>) -> Self {
        let key = key.into();
        let display_name = display_name(&key);
        Self {
            key,
            display_name,
            source: source.into(),
        }
    }

    /// The lookup key, e.g. `BookingBar`.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The human-readable name, e.g. `Booking Bar`.
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The exact source text, as it should be copied or exported.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.source.matches('\n').count() + 1
    }

    /// The import statement shown under the live preview.
    pub fn import_snippet(&self) -> String {
        import_snippet(&self.key)
    }

    /// Suggested file name for exports.
    pub fn file_name(&self) -> String {
        format!("{}.jsx", self.key)
    }
}

/// Inserts a space before every capital letter and trims the result.
///
/// `BookingBar` becomes `Booking Bar`.
pub fn display_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}

/// Builds the import statement for a component.
pub fn import_snippet(key: &str) -> String {
    format!("import {{ {key} }} from '{PACKAGE_NAME}'")
}

/// An immutable, ordered table of component sources.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ComponentSource>,
    index: AHashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from `(key, source)` pairs, keeping their order.
    pub fn from_entries<K, S>(entries: impl IntoIterator<Item = (K, S)>) -> Result<Self>
    where
        K: Into<String>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for (key, source) in entries {
            let entry = ComponentSource::new(key, source);
            if entry.key.is_empty() {
                return Err(CatalogError::EmptyKey);
            }
            if catalog.index.contains_key(&entry.key) {
                return Err(CatalogError::DuplicateKey(entry.key));
            }
            catalog
                .index
                .insert(entry.key.clone(), catalog.entries.len());
            catalog.entries.push(entry);
        }
        Ok(catalog)
    }

    /// The built-in showcase components.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_SOURCES.iter().copied())
            .expect("built-in component keys are unique")
    }

    /// Looks up a component.
    ///
    /// Tries the exact key, then the key ignoring case, then the display
    /// name ignoring case (`"booking bar"` finds `BookingBar`).
    pub fn get(&self, key: &str) -> Result<&ComponentSource> {
        let key = key.trim();
        if let Some(&idx) = self.index.get(key) {
            return Ok(&self.entries[idx]);
        }

        let found = self
            .entries
            .iter()
            .find(|e| e.key.eq_ignore_ascii_case(key))
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| e.display_name.eq_ignore_ascii_case(key))
            });

        match found {
            Some(entry) => {
                tracing::debug!(requested = key, resolved = entry.key(), "loose component match");
                Ok(entry)
            }
            None => Err(CatalogError::NotFound {
                key: key.to_string(),
                available: self.keys().map(String::from).collect(),
            }),
        }
    }

    /// Returns true if the exact key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterates entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentSource> {
        self.entries.iter()
    }

    /// Iterates keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ComponentSource::key)
    }

    /// The first entry, selected when nothing else is.
    pub fn first(&self) -> Option<&ComponentSource> {
        self.entries.first()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static GLOBAL_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let catalog = Catalog::builtin();
    tracing::debug!(components = catalog.len(), "loaded component catalog");
    catalog
});

/// Returns the process-wide built-in catalog.
pub fn catalog() -> &'static Catalog {
    &GLOBAL_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_order() {
        let keys: Vec<&str> = catalog().keys().collect();
        assert_eq!(
            keys,
            vec![
                "BookingBar",
                "ThemeToggle",
                "ProductCard",
                "AnimatedCart",
                "ModernDropdown"
            ]
        );
        assert_eq!(catalog().first().map(ComponentSource::key), Some("BookingBar"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("BookingBar"), "Booking Bar");
        assert_eq!(display_name("ModernDropdown"), "Modern Dropdown");
        assert_eq!(display_name("card"), "card");
        assert_eq!(display_name("UI"), "U I");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.get("ThemeToggle").unwrap().key(), "ThemeToggle");
        assert_eq!(catalog.get("themetoggle").unwrap().key(), "ThemeToggle");
        assert_eq!(catalog.get("theme toggle").unwrap().key(), "ThemeToggle");
        assert_eq!(catalog.get(" ProductCard ").unwrap().key(), "ProductCard");
    }

    #[test]
    fn test_not_found_lists_keys() {
        let err = catalog().get("PricingCard").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("PricingCard"));
        assert!(message.contains("BookingBar, ThemeToggle"));
    }

    #[test]
    fn test_import_snippet() {
        let entry = catalog().get("BookingBar").unwrap();
        assert_eq!(
            entry.import_snippet(),
            "import { BookingBar } from '@me-ui/react'"
        );
        assert_eq!(entry.file_name(), "BookingBar.jsx");
    }

    #[test]
    fn test_sources_are_embedded_verbatim() {
        let entry = catalog().get("ThemeToggle").unwrap();
        assert!(entry.source().starts_with("import React, { useState } from \"react\";"));
        assert!(entry.source().ends_with('}'));
        assert_eq!(entry.line_count(), entry.source().lines().count());
    }

    #[test]
    fn test_template_literals_unescaped() {
        let entry = catalog().get("BookingBar").unwrap();
        assert!(entry.source().contains("`.field-${field}`"));
        assert!(!entry.source().contains("\\`"));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = Catalog::from_entries([("A", "a"), ("A", "b")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateKey("A".into()));
        assert_eq!(
            Catalog::from_entries([("", "x")]).unwrap_err(),
            CatalogError::EmptyKey
        );
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::from_entries([("Zeta", "z"), ("Alpha", "a")]).unwrap();
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
        assert!(catalog.contains("Alpha"));
        assert!(!catalog.contains("alpha"));
        assert_eq!(catalog.len(), 2);
        assert!(Catalog::default().is_empty());
    }
}
