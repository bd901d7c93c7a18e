//! Parsed locale identifiers.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::GenerateError;

/// A locale tag such as `en`, `en_US`, `zh_Hant` or `zh_Hant_TW`.
///
/// Dashes are normalized to underscores on construction. Equality, ordering
/// and hashing use the normalized tag only: `en` and `en_US` are never equal.
#[derive(Debug, Clone)]
pub struct LocaleId {
    tag: String,
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl LocaleId {
    /// Parse a locale tag, normalizing `-` to `_`.
    pub fn parse(tag: &str) -> Result<Self, GenerateError> {
        let tag = tag.replace('-', "_");
        let invalid = |reason: &str| GenerateError::InvalidLocale {
            tag: tag.clone(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = tag.split('_').collect();
        let (language, script, region) = match parts.as_slice() {
            [language] => (*language, None, None),
            [language, second] if second.len() >= 4 => (*language, Some(*second), None),
            [language, second] => (*language, None, Some(*second)),
            [language, second, third] => {
                if second.len() > third.len() {
                    (*language, Some(*second), Some(*third))
                } else {
                    (*language, Some(*third), Some(*second))
                }
            }
            _ => return Err(invalid("expected language[_script][_region]")),
        };

        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_lowercase())
        {
            return Err(invalid("language must be 2-3 lowercase letters"));
        }
        if let Some(script) = script {
            let mut chars = script.chars();
            let capitalized = chars.next().is_some_and(|c| c.is_ascii_uppercase())
                && chars.all(|c| c.is_ascii_lowercase());
            if script.len() < 4 || !capitalized {
                return Err(invalid("script must be a capitalized subtag of 4+ letters"));
            }
        }
        if let Some(region) = region {
            let letters = region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase());
            let digits = region.len() == 3 && region.chars().all(|c| c.is_ascii_digit());
            let upper3 = region.len() == 3 && region.chars().all(|c| c.is_ascii_uppercase());
            if !(letters || digits || upper3) {
                return Err(invalid("region must be 2-3 uppercase letters or 3 digits"));
            }
        }

        Ok(Self {
            language: language.to_string(),
            script: script.map(str::to_string),
            region: region.map(str::to_string),
            tag,
        })
    }

    /// The normalized tag, e.g. `en_US`.
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// True if the locale carries a script or region subtag.
    pub fn has_variant(&self) -> bool {
        self.script.is_some() || self.region.is_some()
    }

    /// The bare-language locale this one falls back to.
    pub fn language_only(&self) -> LocaleId {
        Self {
            tag: self.language.clone(),
            language: self.language.clone(),
            script: None,
            region: None,
        }
    }

    /// Camel-cased suffix used in generated type names: `en_US` -> `EnUs`.
    pub fn type_suffix(&self) -> String {
        self.tag
            .split('_')
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect()
    }
}

impl FromStr for LocaleId {
    type Err = GenerateError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::parse(tag)
    }
}

impl PartialEq for LocaleId {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for LocaleId {}

impl Hash for LocaleId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
    }
}

impl PartialOrd for LocaleId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocaleId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tag.cmp(&other.tag)
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}
