//! Field definitions: declared types, custom fields, and selection entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared type of a custom field's default value.
///
/// The set is closed; spellings outside it fall back to [`FieldType::Text`],
/// which also means such defaults pass through projection verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Date,
    Formula,
}

impl FieldType {
    /// Parse a user-supplied type name. Unknown names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "number" => Self::Number,
            "date" => Self::Date,
            "formula" => Self::Formula,
            _ => Self::Text,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Formula => "formula",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthetic column definition.
///
/// Immutable once added to a catalog; changing one means removing and
/// re-adding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub name: String,
    #[serde(default)]
    pub default_value: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub description: String,
}

impl CustomField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: String::new(),
            field_type: FieldType::default(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    #[must_use]
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Identifies which table a selection entry refers to.
///
/// `Custom` carries the field's name as a key into the catalog's
/// custom-field table; the `CustomField` itself stays the single source of
/// truth for default value and declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum FieldKind {
    Original(String),
    Custom(String),
}

impl FieldKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Original(name) | Self::Custom(name) => name,
        }
    }
}

/// One entry in the catalog's ordered selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelection {
    pub kind: FieldKind,
    pub selected: bool,
}

impl FieldSelection {
    pub fn original(name: impl Into<String>, selected: bool) -> Self {
        Self {
            kind: FieldKind::Original(name.into()),
            selected,
        }
    }

    pub fn custom(name: impl Into<String>, selected: bool) -> Self {
        Self {
            kind: FieldKind::Custom(name.into()),
            selected,
        }
    }

    pub fn name(&self) -> &str {
        self.kind.name()
    }

    pub fn is_original(&self) -> bool {
        matches!(self.kind, FieldKind::Original(_))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.kind, FieldKind::Custom(_))
    }
}
