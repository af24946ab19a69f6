//! In-memory entity catalog
//!
//! Serves both metadata contracts from entity descriptors written in code or
//! loaded from JSON descriptor files. It also corrects the nullability the
//! persistence layer is known to misreport.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use contracts::shared::metadata::{
    CatalogDocument, ColumnConstraints, ColumnDescriptor, ColumnMapping, EntityDescriptor,
    PropertyDeclaration, PropertyDescriptor, PropertyType,
};
use thiserror::Error;

use super::metadata_source::{ColumnMetadataSource, PropertyInfoSource};
use crate::shared::config::{self, Config};

/// Errors while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read descriptor file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid descriptor document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Entity '{0}' is described twice")]
    DuplicateEntity(String),

    #[error("Property '{entity}.{property}' is described twice")]
    DuplicateProperty { entity: String, property: String },

    #[error("Property '{entity}.{property}' references unknown entity '{target}'")]
    UnknownEntity {
        entity: String,
        property: String,
        target: String,
    },
}

/// Entity descriptors indexed by entity and property name
#[derive(Debug, Default)]
pub struct EntityCatalog {
    entities: HashMap<String, HashMap<String, PropertyDescriptor>>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog and check that all entity references resolve
    pub fn from_entities(
        entities: impl IntoIterator<Item = EntityDescriptor>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for entity in entities {
            catalog.register(entity)?;
        }
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_entities(document.entities)
    }

    /// Load all descriptor files listed in the `[catalog]` section
    pub fn load_configured(config: &Config) -> anyhow::Result<Self> {
        let mut catalog = Self::new();
        for path in &config.catalog.paths {
            let path = config::resolve_path(path);
            catalog
                .extend_from_file(&path)
                .with_context(|| format!("Loading entity catalog {}", path.display()))?;
        }
        catalog.validate()?;
        tracing::info!(
            entities = catalog.entities.len(),
            "Entity catalog loaded"
        );
        Ok(catalog)
    }

    /// Add the entities of one descriptor file. References are checked by
    /// [`EntityCatalog::validate`] once all files are in.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<(), CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: CatalogDocument = serde_json::from_str(&contents)?;
        for entity in document.entities {
            self.register(entity)?;
        }
        Ok(())
    }

    pub fn register(&mut self, entity: EntityDescriptor) -> Result<(), CatalogError> {
        if self.entities.contains_key(&entity.name) {
            return Err(CatalogError::DuplicateEntity(entity.name));
        }
        let mut properties = HashMap::with_capacity(entity.properties.len());
        for property in entity.properties {
            if properties.contains_key(&property.name) {
                return Err(CatalogError::DuplicateProperty {
                    entity: entity.name,
                    property: property.name,
                });
            }
            properties.insert(property.name.clone(), property);
        }
        self.entities.insert(entity.name, properties);
        Ok(())
    }

    /// Every `entity` typed property must point at a registered entity
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (entity, properties) in &self.entities {
            for property in properties.values() {
                if let Some(target) = property.property_type.entity_name() {
                    if !self.entities.contains_key(target) {
                        return Err(CatalogError::UnknownEntity {
                            entity: entity.clone(),
                            property: property.name.clone(),
                            target: target.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn contains_entity(&self, entity: &str) -> bool {
        self.entities.contains_key(entity)
    }

    /// Walk a dotted path through entity references
    fn descriptor(&self, entity: &str, path: &str) -> Option<&PropertyDescriptor> {
        let mut current = entity;
        let mut segments = path.split('.').peekable();
        loop {
            let segment = segments.next()?;
            let descriptor = self.entities.get(current)?.get(segment)?;
            if segments.peek().is_none() {
                return Some(descriptor);
            }
            current = traversal_target(&descriptor.property_type)?;
        }
    }
}

/// Entity a nested path continues in. User and task pickers reference the
/// `User` and `Task` entities when those are catalogued.
fn traversal_target(property_type: &PropertyType) -> Option<&str> {
    match property_type {
        PropertyType::Entity { name } => Some(name),
        PropertyType::UserRef => Some("User"),
        PropertyType::TaskRef => Some("Task"),
        _ => None,
    }
}

/// Correct the nullability reported by the persistence layer.
///
/// The column store reports `nullable == false` for every join column and
/// for basic attributes without a column declaration; both are wrong.
pub fn normalize_column(column: &ColumnDescriptor) -> ColumnConstraints {
    let mut nullable = column.nullable;
    if !nullable {
        match column.mapping {
            ColumnMapping::JoinColumn { nullable: declared } => nullable = declared,
            ColumnMapping::Basic => nullable = true,
            ColumnMapping::Column => {}
        }
    }
    ColumnConstraints {
        nullable,
        max_length: column.max_length.filter(|length| *length > 0),
    }
}

impl ColumnMetadataSource for EntityCatalog {
    fn column_constraints(&self, entity: &str, property: &str) -> Option<ColumnConstraints> {
        // Nested paths have no column of their own
        if property.contains('.') {
            return None;
        }
        let column = self.entities.get(entity)?.get(property)?.column.as_ref()?;
        let constraints = normalize_column(column);
        if constraints.nullable != column.nullable {
            tracing::debug!(entity, property, "Corrected reported column nullability");
        }
        Some(constraints)
    }
}

impl PropertyInfoSource for EntityCatalog {
    fn property_type(&self, entity: &str, property: &str) -> Option<PropertyType> {
        self.descriptor(entity, property)
            .map(|d| d.property_type.clone())
    }

    fn property_declaration(&self, entity: &str, property: &str) -> Option<PropertyDeclaration> {
        self.descriptor(entity, property)?.declaration.clone()
    }
}
