//! Placeholder declarations and resolved placeholders.
//!
//! Placeholders are built in two phases. The loader produces immutable
//! [`DeclaredPlaceholder`] records straight from ARB metadata; inference then
//! produces finalized [`Placeholder`] values from the declarations plus every
//! locale's parsed message.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// Semantic type of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderType {
    String,
    Int,
    Num,
    Double,
    DateTime,
    Object,
}

impl PlaceholderType {
    /// Every type with its ARB spelling.
    pub const NAMES: [(&'static str, PlaceholderType); 6] = [
        ("String", PlaceholderType::String),
        ("int", PlaceholderType::Int),
        ("num", PlaceholderType::Num),
        ("double", PlaceholderType::Double),
        ("DateTime", PlaceholderType::DateTime),
        ("Object", PlaceholderType::Object),
    ];

    /// Parse the `type` attribute of a placeholder declaration.
    pub fn from_arb_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(arb_name, _)| *arb_name == name)
            .map(|(_, kind)| *kind)
    }

    pub fn arb_name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("Object", |(name, _)| name)
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PlaceholderType::Int | PlaceholderType::Num | PlaceholderType::Double
        )
    }
}

impl fmt::Display for PlaceholderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arb_name())
    }
}

/// The role a placeholder plays in a message. At most one per placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderUsage {
    Plural,
    Select,
    DateTimeArgument,
}

impl fmt::Display for PlaceholderUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlaceholderUsage::Plural => "plural",
            PlaceholderUsage::Select => "select",
            PlaceholderUsage::DateTimeArgument => "date/time argument",
        })
    }
}

/// A placeholder as declared in `@key.placeholders`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeclaredPlaceholder {
    pub name: String,
    pub declared_type: Option<PlaceholderType>,
    pub format: Option<String>,
    pub example: Option<String>,
    pub optional_parameters: IndexMap<String, JsonValue>,
    pub is_custom_date_format: bool,
}

impl DeclaredPlaceholder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A placeholder after type inference.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub name: String,
    pub resolved_type: PlaceholderType,
    pub format: Option<String>,
    pub example: Option<String>,
    pub optional_parameters: IndexMap<String, JsonValue>,
    pub is_custom_date_format: bool,
    pub usage: Option<PlaceholderUsage>,
    /// Rendered through a generated `DateFormat`/`NumberFormat`.
    pub requires_formatting: bool,
    /// False for placeholders synthesized from message text.
    pub declared: bool,
}

impl Placeholder {
    pub fn is_plural(&self) -> bool {
        self.usage == Some(PlaceholderUsage::Plural)
    }

    pub fn is_select(&self) -> bool {
        self.usage == Some(PlaceholderUsage::Select)
    }

    pub fn is_date_time_argument(&self) -> bool {
        self.usage == Some(PlaceholderUsage::DateTimeArgument)
    }

    pub fn is_date(&self) -> bool {
        self.resolved_type == PlaceholderType::DateTime
    }

    pub fn is_number(&self) -> bool {
        self.resolved_type.is_numeric()
    }
}

/// Per-locale formatting override of a template placeholder.
///
/// Only formatting attributes may vary by locale; name, type and parameter
/// order always come from the template.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaceholderOverride {
    pub format: Option<String>,
    pub optional_parameters: IndexMap<String, JsonValue>,
    pub is_custom_date_format: bool,
}

impl From<&DeclaredPlaceholder> for PlaceholderOverride {
    fn from(declared: &DeclaredPlaceholder) -> Self {
        Self {
            format: declared.format.clone(),
            optional_parameters: declared.optional_parameters.clone(),
            is_custom_date_format: declared.is_custom_date_format,
        }
    }
}
