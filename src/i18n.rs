// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Locales and the message catalog used to localize validation text.

use std::collections::HashMap;
use std::fmt;

use anyhow::{Context, Result};
use tracing::debug;

const MESSAGES_EN: &str = include_str!("../resources/i18n/messages_en.json");
const MESSAGES_FR: &str = include_str!("../resources/i18n/messages_fr.json");

/// Language tag such as `en`, `fr` or `fr-FR`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Primary language subtag, lowercased (`fr` for `fr_FR`).
    pub fn language(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// Messages per language, with fallback to a default language.
#[derive(Clone, Debug)]
pub struct MessageCatalog {
    default_language: String,
    bundles: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    /// Empty catalog; every lookup falls back to the key itself.
    pub fn empty(default_locale: &Locale) -> Self {
        Self {
            default_language: default_locale.language(),
            bundles: HashMap::new(),
        }
    }

    /// Catalog preloaded with the bundled English and French messages.
    ///
    /// # Errors
    ///
    /// Returns an error if a bundled resource is not a flat JSON object of strings.
    pub fn builtin(default_locale: &Locale) -> Result<Self> {
        let mut catalog = Self::empty(default_locale);
        catalog.merge_json("en", MESSAGES_EN)?;
        catalog.merge_json("fr", MESSAGES_FR)?;
        Ok(catalog)
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Merge a flat `{"key": "text"}` JSON bundle for `language`, overriding existing keys.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a flat object of strings.
    pub fn merge_json(&mut self, language: &str, json: &str) -> Result<()> {
        let messages: HashMap<String, String> = serde_json::from_str(json)
            .with_context(|| format!("Failed to parse message bundle for {language}"))?;
        debug!(language, count = messages.len(), "merged message bundle");
        self.bundles
            .entry(language.to_ascii_lowercase())
            .or_default()
            .extend(messages);
        Ok(())
    }

    /// Resolve `key` for `locale`, substituting `{0}`, `{1}`, ... with `args`.
    ///
    /// Falls back to the default language, then to the key itself.
    pub fn resolve(&self, key: &str, locale: &Locale, args: &[&str]) -> String {
        let template = self
            .lookup(&locale.language(), key)
            .or_else(|| self.lookup(&self.default_language, key))
            .unwrap_or(key);
        format_message(template, args)
    }

    fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.bundles
            .get(language)
            .and_then(|bundle| bundle.get(key))
            .map(String::as_str)
    }
}

/// Replace `{n}` placeholders with the n-th argument in one pass; unknown
/// placeholders stay as-is and substituted text is never rescanned.
fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            let index = after[..close].parse::<usize>().ok()?;
            args.get(index).map(|arg| (*arg, close))
        });
        match arg {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
