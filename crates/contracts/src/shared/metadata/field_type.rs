//! Property type identity for the metadata system

use serde::{Deserialize, Serialize};

/// Type of a property as reported by the metadata sources.
///
/// The set is closed on purpose: everything the layout engine can not
/// render ends up in `Entity` (traversable by nested paths) or `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyType {
    Text,
    Boolean,
    Date,
    Timestamp,
    Integer,
    Decimal,
    Locale,
    UserRef,
    TaskRef,
    Enum(EnumType),
    /// Reference to another catalogued entity (e.g. `task` on a timesheet)
    Entity { name: String },
    Other { name: String },
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Locale => "locale",
            Self::UserRef => "user_ref",
            Self::TaskRef => "task_ref",
            Self::Enum(_) => "enum",
            Self::Entity { .. } => "entity",
            Self::Other { .. } => "other",
        }
    }

    pub fn entity(name: impl Into<String>) -> Self {
        Self::Entity { name: name.into() }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self::Other { name: name.into() }
    }

    /// Name of the referenced entity, if this is an entity reference
    pub fn entity_name(&self) -> Option<&str> {
        match self {
            Self::Entity { name } => Some(name),
            _ => None,
        }
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }
}

/// Capability of Rust enums whose members carry a translation key.
///
/// Only enums implementing this trait can be rendered as a select box.
pub trait LocalizableEnum: Sized + 'static {
    /// All members in display order
    fn all() -> Vec<Self>;

    /// Serialized value of the member
    fn code(&self) -> &'static str;

    /// Translation key of the member label
    fn i18n_key(&self) -> &'static str;
}

/// One localized enum member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub value: String,
    pub i18n_key: String,
}

/// Description of an enum property type.
/// `members` is only present for localizable enums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<EnumMember>>,
}

impl EnumType {
    /// Describe a Rust enum implementing [`LocalizableEnum`]
    pub fn localizable<E: LocalizableEnum>() -> Self {
        let full_name = std::any::type_name::<E>();
        let name = full_name.rsplit("::").next().unwrap_or(full_name);
        Self {
            name: name.to_string(),
            members: Some(
                E::all()
                    .iter()
                    .map(|m| EnumMember {
                        value: m.code().to_string(),
                        i18n_key: m.i18n_key().to_string(),
                    })
                    .collect(),
            ),
        }
    }

    /// Enum without translation keys
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: None,
        }
    }

    pub fn is_localizable(&self) -> bool {
        self.members.is_some()
    }

    pub fn members(&self) -> &[EnumMember] {
        self.members.as_deref().unwrap_or(&[])
    }
}
