//! Constraint records reported by the two metadata sources

use serde::{Deserialize, Serialize};

/// Nullability and length of a persisted column, after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnConstraints {
    pub nullable: bool,
    pub max_length: Option<u32>,
}

/// How the column of a property is mapped by the persistence layer.
/// Needed to correct the nullability the column store reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnMapping {
    /// Plain column with an explicit column declaration
    #[default]
    Column,
    /// Foreign key column carrying its own nullability
    JoinColumn { nullable: bool },
    /// Basic attribute without an explicit column declaration
    Basic,
}

/// Column as reported by the persistence layer (not yet normalized)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default)]
    pub mapping: ColumnMapping,
}

/// Helper function for serde default
fn default_nullable() -> bool {
    true
}

impl ColumnDescriptor {
    pub const fn nullable() -> Self {
        Self {
            nullable: true,
            max_length: None,
            mapping: ColumnMapping::Column,
        }
    }

    pub const fn not_null() -> Self {
        Self {
            nullable: false,
            max_length: None,
            mapping: ColumnMapping::Column,
        }
    }

    pub const fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub const fn with_mapping(mut self, mapping: ColumnMapping) -> Self {
        self.mapping = mapping;
        self
    }
}

/// Explicit property declaration (required flag and label keys)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_i18n_key: Option<String>,
}

impl PropertyDeclaration {
    /// Declaration with a label key only
    pub fn labelled(i18n_key: impl Into<String>) -> Self {
        Self {
            required: false,
            i18n_key: Some(i18n_key.into()),
            additional_i18n_key: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_additional_i18n_key(mut self, key: impl Into<String>) -> Self {
        self.additional_i18n_key = Some(key.into());
        self
    }
}
