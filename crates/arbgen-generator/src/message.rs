//! The per-key message model shared by every locale.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::warn;

use crate::collection::ResourceBundleCollection;
use crate::error::{GenerateError, GenerationWarning};
use crate::inference::{infer_placeholders, validate_format};
use crate::locale::LocaleId;
use crate::parser::{Node, ParseOptions, parse_message};
use crate::placeholder::{Placeholder, PlaceholderOverride};

/// One message key with its translations in every locale.
#[derive(Debug, Clone)]
pub struct Message {
    pub key: String,
    /// The template locale's text.
    pub reference_value: String,
    pub description: Option<String>,
    pub context: Option<String>,
    /// Raw text per locale; `None` if the locale has no translation.
    pub translations: BTreeMap<LocaleId, Option<String>>,
    /// Parsed text per locale; `None` if untranslated or unparsable.
    pub parsed: BTreeMap<LocaleId, Option<Node>>,
    /// Finalized placeholders. Parameter order and types come from here.
    pub template_placeholders: IndexMap<String, Placeholder>,
    /// Formatting attributes a locale redeclares in its own `@key` entry.
    pub locale_placeholders: BTreeMap<LocaleId, IndexMap<String, PlaceholderOverride>>,
    /// Recoverable problems found while building the message.
    pub warnings: Vec<GenerationWarning>,
}

impl Message {
    /// Build the message `key` from every bundle of `collection`.
    ///
    /// A parse failure in the template locale is fatal. A parse failure in
    /// any other locale is logged, recorded as a warning, and that locale is
    /// treated as untranslated.
    pub fn new(
        key: &str,
        collection: &ResourceBundleCollection,
        template_locale: &LocaleId,
        options: &ParseOptions,
    ) -> Result<Self, GenerateError> {
        let template = collection.bundle_for(template_locale).ok_or_else(|| {
            GenerateError::TemplateNotFound {
                path: PathBuf::from(template_locale.as_str()),
            }
        })?;

        if !is_valid_key(key) {
            return Err(GenerateError::InvalidMessageKey {
                path: template.path().to_path_buf(),
                key: key.to_string(),
            });
        }

        let reference_value = template.translation_for(key)?.ok_or_else(|| {
            GenerateError::MissingResourceValue {
                path: template.path().to_path_buf(),
                key: key.to_string(),
            }
        })?;
        let metadata = template.metadata_for(key)?;
        let declared = metadata
            .as_ref()
            .map(|metadata| metadata.placeholders.clone())
            .unwrap_or_default();

        let mut parse_options = options.clone();
        if metadata.is_some() && parse_options.placeholders.is_none() {
            parse_options.placeholders = Some(declared.keys().cloned().collect());
        }

        let mut translations = BTreeMap::new();
        let mut parsed = BTreeMap::new();
        let mut locale_placeholders = BTreeMap::new();
        let mut warnings = Vec::new();

        for bundle in collection.bundles() {
            let locale = bundle.locale();
            let text = bundle.translation_for(key)?;

            let ast = match text {
                None => None,
                Some(text) => match parse_message(text, &parse_options) {
                    Ok(ast) => Some(ast),
                    Err(error) if locale == template_locale => {
                        return Err(GenerateError::Parse {
                            path: bundle.path().to_path_buf(),
                            key: key.to_string(),
                            locale: locale.to_string(),
                            error,
                        });
                    }
                    Err(error) => {
                        warn!(
                            path = %bundle.path().display(),
                            %locale,
                            key,
                            %error,
                            "translation failed to parse and is treated as untranslated"
                        );
                        warnings.push(GenerationWarning::TranslationParseFailed {
                            locale: locale.to_string(),
                            key: key.to_string(),
                            message: error.to_string(),
                        });
                        None
                    }
                },
            };

            if locale != template_locale {
                if let Some(local) = bundle.metadata_for(key)? {
                    let overrides: IndexMap<_, _> = local
                        .placeholders
                        .iter()
                        .filter(|(name, _)| declared.contains_key(*name))
                        .map(|(name, placeholder)| (name.clone(), PlaceholderOverride::from(placeholder)))
                        .collect();
                    if !overrides.is_empty() {
                        locale_placeholders.insert(locale.clone(), overrides);
                    }
                }
            }

            translations.insert(locale.clone(), text.map(str::to_string));
            parsed.insert(locale.clone(), ast);
        }

        let asts = parsed.values().flatten();
        let template_placeholders = infer_placeholders(key, &declared, asts)?;

        for overrides in locale_placeholders.values() {
            for (name, local) in overrides {
                if let Some(placeholder) = template_placeholders.get(name) {
                    validate_format(
                        key,
                        name,
                        placeholder.resolved_type,
                        local.format.as_deref(),
                        &local.optional_parameters,
                        local.is_custom_date_format,
                    )?;
                }
            }
        }

        Ok(Self {
            key: key.to_string(),
            reference_value: reference_value.to_string(),
            description: metadata.as_ref().and_then(|m| m.description.clone()),
            context: metadata.as_ref().and_then(|m| m.context.clone()),
            translations,
            parsed,
            template_placeholders,
            locale_placeholders,
            warnings,
        })
    }

    /// The parsed message for `locale`, if it is translated and valid.
    pub fn parsed_for(&self, locale: &LocaleId) -> Option<&Node> {
        self.parsed.get(locale).and_then(Option::as_ref)
    }

    pub fn is_translated(&self, locale: &LocaleId) -> bool {
        self.parsed_for(locale).is_some()
    }

    /// A template placeholder with `locale`'s formatting overrides applied.
    pub fn placeholder_for(&self, locale: &LocaleId, name: &str) -> Option<Cow<'_, Placeholder>> {
        let placeholder = self.template_placeholders.get(name)?;
        let Some(local) = self
            .locale_placeholders
            .get(locale)
            .and_then(|overrides| overrides.get(name))
        else {
            return Some(Cow::Borrowed(placeholder));
        };

        let mut merged = placeholder.clone();
        if local.format.is_some() {
            merged.format = local.format.clone();
            merged.is_custom_date_format = local.is_custom_date_format;
            merged.requires_formatting = merged.is_date() || merged.is_number();
        }
        if !local.optional_parameters.is_empty() {
            merged.optional_parameters = local.optional_parameters.clone();
        }
        Some(Cow::Owned(merged))
    }
}

/// `[A-Za-z][A-Za-z0-9_]*`
fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
