//! Results of a generation run.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::GenerationWarning;

/// Message keys each locale lacks, keyed by locale tag.
///
/// Serializes to the JSON written to `untranslated_messages_file`. Locales
/// without gaps are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UntranslatedMessages(BTreeMap<String, Vec<String>>);

impl UntranslatedMessages {
    pub fn record(&mut self, locale: &str, key: &str) {
        self.0
            .entry(locale.to_string())
            .or_default()
            .push(key.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Untranslated keys of `locale`, in template order.
    pub fn for_locale(&self, locale: &str) -> &[String] {
        self.0.get(locale).map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(locale, keys)| (locale.as_str(), keys.as_slice()))
    }

    /// Total number of missing translations.
    pub fn count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Pretty-printed JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Summary of a completed generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Where the generated file was written.
    pub output_path: PathBuf,
    /// Supported locales, in `SUPPORTED_LOCALES` order.
    pub locales: Vec<String>,
    /// Message keys, in template order.
    pub messages: Vec<String>,
    pub warnings: Vec<GenerationWarning>,
    pub untranslated: UntranslatedMessages,
}
