//! The set of ARB bundles found in a directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::bundle::{LoadOptions, ResourceBundle};
use crate::error::GenerateError;
use crate::locale::LocaleId;

/// All bundles of an ARB directory, sorted by path.
///
/// Construction guarantees that no two bundles share a locale and that every
/// language with a regional or script bundle also has a bare-language bundle.
#[derive(Debug, Clone)]
pub struct ResourceBundleCollection {
    bundles: Vec<ResourceBundle>,
}

impl ResourceBundleCollection {
    /// Load every `*.arb` file directly inside `dir`.
    pub fn load(dir: &Path, options: &LoadOptions) -> Result<Self, GenerateError> {
        let entries = fs::read_dir(dir).map_err(|source| GenerateError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| GenerateError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "arb") {
                paths.push(path);
            }
        }
        if paths.is_empty() {
            return Err(GenerateError::NoBundles {
                dir: dir.to_path_buf(),
            });
        }

        let bundles = paths
            .iter()
            .map(|path| ResourceBundle::load(path, options))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_bundles(bundles)
    }

    /// Validate an already-loaded set of bundles.
    pub fn from_bundles(mut bundles: Vec<ResourceBundle>) -> Result<Self, GenerateError> {
        bundles.sort_by(|a, b| a.path().cmp(b.path()));

        let mut seen: BTreeMap<&LocaleId, &ResourceBundle> = BTreeMap::new();
        for bundle in &bundles {
            if let Some(first) = seen.insert(bundle.locale(), bundle) {
                return Err(GenerateError::DuplicateLocale {
                    locale: bundle.locale().to_string(),
                    first: first.path().to_path_buf(),
                    second: bundle.path().to_path_buf(),
                });
            }
        }

        let mut dependents: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for locale in seen.keys().filter(|locale| locale.has_variant()) {
            if !seen.contains_key(&locale.language_only()) {
                dependents
                    .entry(locale.language())
                    .or_default()
                    .push(locale.to_string());
            }
        }
        if let Some((language, dependents)) = dependents.into_iter().next() {
            return Err(GenerateError::MissingFallback {
                language: language.to_string(),
                dependents,
            });
        }

        Ok(Self { bundles })
    }

    /// All locales, in bundle (path) order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleId> {
        self.bundles.iter().map(ResourceBundle::locale)
    }

    /// All bundles, sorted by path.
    pub fn bundles(&self) -> &[ResourceBundle] {
        &self.bundles
    }

    pub fn bundle_for(&self, locale: &LocaleId) -> Option<&ResourceBundle> {
        self.bundles.iter().find(|bundle| bundle.locale() == locale)
    }

    /// The bundle loaded from `path`, if any.
    pub fn bundle_at(&self, path: &Path) -> Option<&ResourceBundle> {
        self.bundles.iter().find(|bundle| bundle.path() == path)
    }

    /// Distinct language subtags, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.locales().map(LocaleId::language).collect();
        languages.sort_unstable();
        languages.dedup();
        languages
    }

    /// Locales whose language subtag is `language`, in bundle order.
    pub fn locales_for_language<'a>(
        &'a self,
        language: &'a str,
    ) -> impl Iterator<Item = &'a LocaleId> + 'a {
        self.locales()
            .filter(move |locale| locale.language() == language)
    }
}
