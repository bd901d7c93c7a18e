//! Loading and validating a single ARB resource bundle.

use std::fs;
use std::path::{Path, PathBuf};

use arbgen_semantics::is_iso639_language;
use bon::Builder;
use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

use crate::error::{GenerateError, closest_match};
use crate::locale::LocaleId;
use crate::placeholder::{DeclaredPlaceholder, PlaceholderType};

/// Options applied while loading bundles.
#[derive(Debug, Clone, Default, Builder)]
pub struct LoadOptions {
    /// Every message key `K` must have an `@K` metadata entry.
    #[builder(default)]
    pub require_resource_attributes: bool,
}

/// Metadata attached to a message through its `@key` entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageMetadata {
    pub description: Option<String>,
    pub context: Option<String>,
    /// Declared placeholders, in declaration order.
    pub placeholders: IndexMap<String, DeclaredPlaceholder>,
}

/// One locale's parsed ARB file.
#[derive(Debug, Clone)]
pub struct ResourceBundle {
    path: PathBuf,
    locale: LocaleId,
    content: Map<String, JsonValue>,
}

impl ResourceBundle {
    /// Read and validate an ARB file.
    pub fn load(path: &Path, options: &LoadOptions) -> Result<Self, GenerateError> {
        let content = fs::read_to_string(path).map_err(|source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &content, options)
    }

    /// Validate ARB content that was read from `path`.
    ///
    /// The path is used for locale inference from the file name and for
    /// error messages. Empty content is an empty bundle.
    pub fn from_json(
        path: impl Into<PathBuf>,
        content: &str,
        options: &LoadOptions,
    ) -> Result<Self, GenerateError> {
        let path = path.into();
        let content = if content.trim().is_empty() {
            Map::new()
        } else {
            match serde_json::from_str::<JsonValue>(content) {
                Ok(JsonValue::Object(map)) => map,
                Ok(_) => {
                    return Err(GenerateError::MalformedBundle {
                        path,
                        message: "the top-level value must be a JSON object".to_string(),
                    });
                }
                Err(e) => {
                    return Err(GenerateError::MalformedBundle {
                        path,
                        message: e.to_string(),
                    });
                }
            }
        };

        let explicit = match content.get("@@locale") {
            None => None,
            Some(JsonValue::String(tag)) => Some(LocaleId::parse(tag)?),
            Some(_) => {
                return Err(GenerateError::InvalidValueType {
                    path,
                    key: "@@locale".to_string(),
                    expected: "a string",
                });
            }
        };
        let from_file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(locale_from_file_name);

        let locale = match (explicit, from_file_name) {
            (Some(explicit), Some(filename)) if explicit != filename => {
                return Err(GenerateError::LocaleMismatch {
                    path,
                    explicit: explicit.to_string(),
                    filename: filename.to_string(),
                });
            }
            (Some(locale), _) | (None, Some(locale)) => locale,
            (None, None) => return Err(GenerateError::LocaleUndetermined { path }),
        };

        let bundle = Self {
            path,
            locale,
            content,
        };

        if options.require_resource_attributes {
            if let Some(key) = bundle
                .message_keys()
                .find(|key| !bundle.content.contains_key(&format!("@{key}")))
            {
                return Err(GenerateError::MissingResourceAttribute {
                    path: bundle.path.clone(),
                    key: key.to_string(),
                });
            }
        }

        Ok(bundle)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// Message keys (top-level keys not starting with `@`) in file order.
    pub fn message_keys(&self) -> impl Iterator<Item = &str> {
        self.content
            .keys()
            .map(String::as_str)
            .filter(|key| !key.starts_with('@'))
    }

    pub fn contains(&self, key: &str) -> bool {
        !key.starts_with('@') && self.content.contains_key(key)
    }

    /// The translation for `key`, or `None` if the bundle lacks it.
    pub fn translation_for(&self, key: &str) -> Result<Option<&str>, GenerateError> {
        match self.content.get(key) {
            None => Ok(None),
            Some(JsonValue::String(text)) => Ok(Some(text.as_str())),
            Some(_) => Err(self.invalid_type(key, "a string")),
        }
    }

    /// Raw `@key` metadata value, if present.
    pub fn raw_metadata(&self, key: &str) -> Option<&JsonValue> {
        self.content.get(&format!("@{key}"))
    }

    /// Parsed `@key` metadata, or `None` if absent.
    pub fn metadata_for(&self, key: &str) -> Result<Option<MessageMetadata>, GenerateError> {
        let attribute = format!("@{key}");
        let Some(raw) = self.content.get(&attribute) else {
            return Ok(None);
        };
        let JsonValue::Object(fields) = raw else {
            return Err(self.invalid_type(&attribute, "an object"));
        };

        let mut metadata = MessageMetadata {
            description: self.optional_string(fields, &attribute, "description")?,
            context: self.optional_string(fields, &attribute, "context")?,
            placeholders: IndexMap::new(),
        };

        match fields.get("placeholders") {
            None => {}
            Some(JsonValue::Object(placeholders)) => {
                for (name, declaration) in placeholders {
                    let placeholder = self.declared_placeholder(key, name, declaration)?;
                    metadata.placeholders.insert(name.clone(), placeholder);
                }
            }
            Some(_) => {
                return Err(self.invalid_type(&format!("{attribute}.placeholders"), "an object"));
            }
        }

        Ok(Some(metadata))
    }

    fn declared_placeholder(
        &self,
        key: &str,
        name: &str,
        declaration: &JsonValue,
    ) -> Result<DeclaredPlaceholder, GenerateError> {
        let attribute = format!("@{key}.placeholders.{name}");
        let fields = match declaration {
            JsonValue::Object(fields) => fields.clone(),
            JsonValue::Null => Map::new(),
            _ => return Err(self.invalid_type(&attribute, "an object")),
        };

        let declared_type = match self.optional_string(&fields, &attribute, "type")? {
            None => None,
            Some(found) => match PlaceholderType::from_arb_name(&found) {
                Some(kind) => Some(kind),
                None => {
                    let suggestion = closest_match(
                        &found,
                        PlaceholderType::NAMES.iter().map(|(arb_name, _)| *arb_name),
                    );
                    return Err(GenerateError::InvalidPlaceholderType {
                        path: self.path.clone(),
                        key: key.to_string(),
                        placeholder: name.to_string(),
                        found,
                        suggestion,
                    });
                }
            },
        };

        let optional_parameters = match fields.get("optionalParameters") {
            None => IndexMap::new(),
            Some(JsonValue::Object(parameters)) => parameters
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            Some(_) => {
                return Err(
                    self.invalid_type(&format!("{attribute}.optionalParameters"), "an object")
                );
            }
        };

        let is_custom_date_format = match fields.get("isCustomDateFormat") {
            None => false,
            Some(JsonValue::Bool(flag)) => *flag,
            Some(JsonValue::String(flag)) => flag == "true",
            Some(_) => {
                return Err(self.invalid_type(
                    &format!("{attribute}.isCustomDateFormat"),
                    "\"true\" or \"false\"",
                ));
            }
        };

        Ok(DeclaredPlaceholder {
            name: name.to_string(),
            declared_type,
            format: self.optional_string(&fields, &attribute, "format")?,
            example: self.optional_string(&fields, &attribute, "example")?,
            optional_parameters,
            is_custom_date_format,
        })
    }

    fn optional_string(
        &self,
        fields: &Map<String, JsonValue>,
        attribute: &str,
        field: &str,
    ) -> Result<Option<String>, GenerateError> {
        match fields.get(field) {
            None | Some(JsonValue::Null) => Ok(None),
            Some(JsonValue::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(self.invalid_type(&format!("{attribute}.{field}"), "a string")),
        }
    }

    fn invalid_type(&self, key: &str, expected: &'static str) -> GenerateError {
        GenerateError::InvalidValueType {
            path: self.path.clone(),
            key: key.to_string(),
            expected,
        }
    }
}

/// Infer a locale from a file name such as `app_en_US.arb`.
///
/// Every `_` is tried from left to right; the text after it, minus the
/// extension, is accepted if it parses as a locale whose language is a known
/// ISO-639 code.
pub fn locale_from_file_name(file_name: &str) -> Option<LocaleId> {
    file_name
        .match_indices('_')
        .map(|(index, _)| &file_name[index + 1..])
        .find_map(|candidate| {
            let candidate = candidate
                .rsplit_once('.')
                .map_or(candidate, |(stem, _)| stem);
            LocaleId::parse(candidate)
                .ok()
                .filter(|locale| is_iso639_language(locale.language()))
        })
}
