//! Entity descriptors consumed by the layout engine
//!
//! A descriptor lists the properties of one entity together with what the
//! persistence layer knows about their columns and what the entity declares
//! about them. Descriptors are written in code or loaded from JSON files.

use super::field_type::PropertyType;
use super::validation::{ColumnDescriptor, PropertyDeclaration};
use serde::{Deserialize, Serialize};

// ============================================================================
// Entity-level descriptor
// ============================================================================

/// Top level of a descriptor file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub entities: Vec<EntityDescriptor>,
}

/// All properties of one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl EntityDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    pub fn find(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }
}

// ============================================================================
// Property-level descriptor
// ============================================================================

/// One property: its type, its column (if persisted) and its declaration
/// (if annotated)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration: Option<PropertyDeclaration>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            column: None,
            declaration: None,
        }
    }

    pub fn column(mut self, column: ColumnDescriptor) -> Self {
        self.column = Some(column);
        self
    }

    pub fn declaration(mut self, declaration: PropertyDeclaration) -> Self {
        self.declaration = Some(declaration);
        self
    }
}
