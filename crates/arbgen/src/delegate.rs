//! Loading localizations by locale tag.

use std::future::Ready;

use thiserror::Error;

/// No generated localizations exist for a requested locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unsupported locale '{locale}': add an ARB file for it or list it among the supported locales"
)]
pub struct UnsupportedLocale {
    pub locale: String,
}

impl UnsupportedLocale {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }
}

/// Resolves a locale tag to a generated localizations implementation.
///
/// Every `localizations!` expansion provides an implementation named
/// `<OutputClass>Delegate`. Loading never blocks: the returned future is
/// already complete, and `Ready::into_inner` extracts the result without an
/// executor.
pub trait LocalizationsDelegate {
    /// The generated localizations trait object.
    type Output: ?Sized + 'static;

    /// Whether `locale` (or its bare language) has translations.
    fn is_supported(&self, locale: &str) -> bool;

    /// Resolve `locale`, falling back to script, region and language.
    fn load(&self, locale: &str) -> Ready<Result<&'static Self::Output, UnsupportedLocale>>;
}
