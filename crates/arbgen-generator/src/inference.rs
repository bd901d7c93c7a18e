//! Placeholder type inference.
//!
//! Declarations from the template's `@key` metadata are combined with every
//! locale's parsed message to produce the finalized placeholder map of a
//! message. Inference is a pure function: it never mutates its inputs.

use std::collections::{BTreeSet, HashSet};

use arbgen_semantics::{NumberFormatKind, date_skeleton_names, date_skeleton_pattern};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::error::{GenerateError, closest_match};
use crate::parser::Node;
use crate::placeholder::{DeclaredPlaceholder, Placeholder, PlaceholderType, PlaceholderUsage};

/// Resolve the placeholders of message `key`.
///
/// `asts` holds the parsed message of every locale that parsed successfully.
/// Declared placeholders keep their declaration order; names that are only
/// referenced from message text follow, sorted alphabetically.
pub fn infer_placeholders<'a>(
    key: &str,
    declared: &IndexMap<String, DeclaredPlaceholder>,
    asts: impl IntoIterator<Item = &'a Node>,
) -> Result<IndexMap<String, Placeholder>, GenerateError> {
    let mut usages: IndexMap<&str, PlaceholderUsage> = IndexMap::new();
    let mut plain: HashSet<&str> = HashSet::new();
    let mut referenced: BTreeSet<&str> = BTreeSet::new();
    let mut argument_formats: Vec<(&str, &str)> = Vec::new();

    for ast in asts {
        let mut conflict = None;
        ast.walk(&mut |node| {
            let (name, usage) = match node {
                Node::Placeholder(name) => {
                    plain.insert(name.as_str());
                    referenced.insert(name.as_str());
                    return;
                }
                Node::Plural { variable, .. } => (variable.as_str(), PlaceholderUsage::Plural),
                Node::Select { variable, .. } => (variable.as_str(), PlaceholderUsage::Select),
                Node::Argument {
                    variable, format, ..
                } => {
                    if let Some(format) = format {
                        argument_formats.push((variable.as_str(), format.as_str()));
                    }
                    (variable.as_str(), PlaceholderUsage::DateTimeArgument)
                }
                Node::Message(_) | Node::Text(_) => return,
            };
            referenced.insert(name);
            match usages.get(name) {
                Some(first) if *first != usage && conflict.is_none() => {
                    conflict = Some((name, *first, usage));
                }
                Some(_) => {}
                None => {
                    usages.insert(name, usage);
                }
            }
        });
        if let Some((name, first, second)) = conflict {
            return Err(GenerateError::ConflictingPlaceholderUsage {
                key: key.to_string(),
                placeholder: name.to_string(),
                first,
                second,
            });
        }
    }

    let synthesized = referenced
        .iter()
        .filter(|name| !declared.contains_key(**name))
        .map(|name| DeclaredPlaceholder::new(*name))
        .collect::<Vec<_>>();

    let mut placeholders = IndexMap::new();
    for declaration in declared.values().chain(synthesized.iter()) {
        let usage = usages.get(declaration.name.as_str()).copied();
        let resolved_type = resolve_type(key, declaration, usage)?;
        let placeholder = Placeholder {
            name: declaration.name.clone(),
            resolved_type,
            format: declaration.format.clone(),
            example: declaration.example.clone(),
            optional_parameters: declaration.optional_parameters.clone(),
            is_custom_date_format: declaration.is_custom_date_format,
            usage,
            requires_formatting: resolved_type == PlaceholderType::DateTime
                || (resolved_type.is_numeric() && declaration.format.is_some()),
            declared: declared.contains_key(&declaration.name),
        };

        if placeholder.is_date()
            && placeholder.format.is_none()
            && plain.contains(placeholder.name.as_str())
        {
            return Err(GenerateError::MissingDateFormat {
                key: key.to_string(),
                placeholder: placeholder.name.clone(),
            });
        }
        validate_format(
            key,
            &placeholder.name,
            resolved_type,
            placeholder.format.as_deref(),
            &placeholder.optional_parameters,
            placeholder.is_custom_date_format,
        )?;
        placeholders.insert(placeholder.name.clone(), placeholder);
    }

    for (name, format) in argument_formats {
        let is_custom = placeholders
            .get(name)
            .is_some_and(|placeholder| placeholder.is_custom_date_format);
        validate_date_format(key, name, format, is_custom)?;
    }

    Ok(placeholders)
}

/// Check a placeholder's `format` and `optionalParameters` against its type.
///
/// Applied to template placeholders during inference and to per-locale
/// overrides when a message is built.
pub fn validate_format(
    key: &str,
    name: &str,
    resolved_type: PlaceholderType,
    format: Option<&str>,
    optional_parameters: &IndexMap<String, JsonValue>,
    is_custom_date_format: bool,
) -> Result<(), GenerateError> {
    let Some(format) = format else {
        return Ok(());
    };
    if resolved_type == PlaceholderType::DateTime {
        return validate_date_format(key, name, format, is_custom_date_format);
    }
    if !resolved_type.is_numeric() {
        return Ok(());
    }

    let Some(kind) = NumberFormatKind::from_name(format) else {
        return Err(GenerateError::InvalidNumberFormat {
            key: key.to_string(),
            placeholder: name.to_string(),
            format: format.to_string(),
            suggestion: closest_match(format, NumberFormatKind::ALL.map(NumberFormatKind::name)),
        });
    };
    if let Some(parameter) = optional_parameters
        .keys()
        .find(|parameter| !kind.accepted_parameters().contains(&parameter.as_str()))
    {
        return Err(GenerateError::InvalidOptionalParameter {
            key: key.to_string(),
            placeholder: name.to_string(),
            format: format.to_string(),
            parameter: parameter.clone(),
        });
    }
    Ok(())
}

fn validate_date_format(
    key: &str,
    name: &str,
    format: &str,
    is_custom_date_format: bool,
) -> Result<(), GenerateError> {
    if is_custom_date_format || date_skeleton_pattern(format).is_some() {
        return Ok(());
    }
    Err(GenerateError::InvalidDateFormat {
        key: key.to_string(),
        placeholder: name.to_string(),
        format: format.to_string(),
        suggestion: closest_match(format, date_skeleton_names()),
    })
}

fn resolve_type(
    key: &str,
    declaration: &DeclaredPlaceholder,
    usage: Option<PlaceholderUsage>,
) -> Result<PlaceholderType, GenerateError> {
    let Some(usage) = usage else {
        return Ok(declaration.declared_type.unwrap_or(PlaceholderType::Object));
    };
    let (default, accepted, expected): (_, &[PlaceholderType], _) = match usage {
        PlaceholderUsage::Plural => (
            PlaceholderType::Num,
            &[PlaceholderType::Num, PlaceholderType::Int],
            "num or int",
        ),
        PlaceholderUsage::Select => {
            (PlaceholderType::String, &[PlaceholderType::String], "String")
        }
        PlaceholderUsage::DateTimeArgument => (
            PlaceholderType::DateTime,
            &[PlaceholderType::DateTime],
            "DateTime",
        ),
    };

    match declaration.declared_type {
        None => Ok(default),
        Some(declared) if accepted.contains(&declared) => Ok(declared),
        Some(declared) => Err(GenerateError::PlaceholderTypeMismatch {
            key: key.to_string(),
            placeholder: declaration.name.clone(),
            usage,
            declared,
            expected,
        }),
    }
}
