//! Contracts of the two external metadata sources.
//!
//! The engine never looks at entities directly: the persistence layer
//! answers questions about columns, the entity declarations answer questions
//! about property types, required flags and label keys.

use contracts::shared::metadata::{ColumnConstraints, PropertyDeclaration, PropertyType};

/// Column metadata of the persistence layer
pub trait ColumnMetadataSource: Send + Sync {
    /// Nullability and max length of the column backing `property`, or None
    /// if the property is not persisted in a column of its own
    fn column_constraints(&self, entity: &str, property: &str) -> Option<ColumnConstraints>;
}

/// Declared properties of an entity
pub trait PropertyInfoSource: Send + Sync {
    /// Type of the (possibly nested) property, None if it does not exist
    fn property_type(&self, entity: &str, property: &str) -> Option<PropertyType>;

    /// Explicit declaration of the property, None if it is not annotated
    fn property_declaration(&self, entity: &str, property: &str) -> Option<PropertyDeclaration>;
}

/// Everything the resolver needs
pub trait MetadataSource: ColumnMetadataSource + PropertyInfoSource {}

impl<T> MetadataSource for T where T: ColumnMetadataSource + PropertyInfoSource {}
