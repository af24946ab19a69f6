//! Resolution of property metadata into cached [`ElementInfo`] records
//!
//! The resolver combines the property type, the explicit declaration and the
//! column constraints of a property. Results are cached per entity and
//! property path; failures are remembered in a separate set so that broken
//! layouts do not hit the metadata sources on every request.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use contracts::shared::metadata::{ColumnConstraints, PropertyDeclaration, PropertyType};

use super::metadata_source::MetadataSource;

/// Resolved description of one property of one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    pub property_type: PropertyType,
    pub max_length: Option<u32>,
    /// Only ever `Some(true)`; absence means not required
    pub required: Option<bool>,
    pub i18n_key: Option<String>,
    pub additional_i18n_key: Option<String>,
    /// For nested properties, the property this one is nested in
    pub parent: Option<Arc<ElementInfo>>,
}

impl ElementInfo {
    pub fn new(property_type: PropertyType) -> Self {
        Self {
            property_type,
            max_length: None,
            required: None,
            i18n_key: None,
            additional_i18n_key: None,
            parent: None,
        }
    }

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// Enclosing properties, innermost first
    pub fn ancestors(&self) -> impl Iterator<Item = &ElementInfo> {
        std::iter::successors(self.parent.as_deref(), |info| info.parent.as_deref())
    }

    fn apply(&mut self, declaration: PropertyDeclaration, column: Option<ColumnConstraints>) {
        if let Some(column) = column {
            self.max_length = column.max_length;
        }
        self.required = merge_required(declaration.required, column);
        self.i18n_key = none_if_empty(declaration.i18n_key);
        self.additional_i18n_key = none_if_empty(declaration.additional_i18n_key);
    }
}

/// Required if the declaration says so or the column is not nullable.
///
/// A nullable column never clears a declared required flag: the column store
/// misreports nullability for some mappings, the declaration is authoritative.
pub fn merge_required(declared: bool, column: Option<ColumnConstraints>) -> Option<bool> {
    let column_required = column.map_or(false, |c| !c.nullable);
    if declared || column_required {
        Some(true)
    } else {
        None
    }
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Key of a property in logs
pub fn map_key(entity: &str, property: &str) -> String {
    format!("{}.{}", entity, property)
}

fn is_valid_path(property: &str) -> bool {
    !property.is_empty() && property.split('.').all(|segment| !segment.is_empty())
}

/// Cached resolver of [`ElementInfo`] records.
///
/// One instance per process, shared by reference (or `Arc`) between all
/// layout builders. Racing resolutions of the same property are allowed: the
/// result is deterministic and the first cached value wins.
pub struct ElementInfoResolver {
    source: Arc<dyn MetadataSource>,
    /// All found properties, by entity and property path
    registry: RwLock<HashMap<String, HashMap<String, Arc<ElementInfo>>>>,
    /// Entity and property path of properties that could not be resolved
    unavailable: RwLock<HashSet<(String, String)>>,
}

impl ElementInfoResolver {
    pub fn new(source: Arc<dyn MetadataSource>) -> Self {
        Self {
            source,
            registry: RwLock::new(HashMap::new()),
            unavailable: RwLock::new(HashSet::new()),
        }
    }

    pub fn from_source(source: impl MetadataSource + 'static) -> Self {
        Self::new(Arc::new(source))
    }

    /// Resolve a property, nested paths like `task.parentTask.id` included.
    /// None if the property type can not be determined.
    pub fn resolve(&self, entity: &str, property: &str) -> Option<Arc<ElementInfo>> {
        if let Some(info) = self.cached(entity, property) {
            return Some(info);
        }
        if self.is_unavailable(entity, property) {
            return None;
        }
        let key = map_key(entity, property);
        if !is_valid_path(property) {
            tracing::warn!("Malformed property path '{}'.", key);
            self.mark_unavailable(entity, property);
            return None;
        }
        let Some(property_type) = self.source.property_type(entity, property) else {
            tracing::info!("Property {} not found. Can't autodetect layout.", key);
            self.mark_unavailable(entity, property);
            return None;
        };

        let mut info = ElementInfo::new(property_type);
        if let Some((parent_property, _)) = property.rsplit_once('.') {
            // A missing parent does not prevent resolving the property itself
            info.parent = self.resolve(entity, parent_property);
        }

        match self.source.property_declaration(entity, property) {
            Some(declaration) => {
                let column = self.source.column_constraints(entity, property);
                info.apply(declaration, column);
            }
            None => {
                tracing::warn!("Declaration of '{}' not found.", key);
            }
        }

        Some(self.insert(entity, property, info))
    }

    /// Snapshot of all properties of `entity` resolved so far
    pub fn properties(&self, entity: &str) -> Option<HashMap<String, Arc<ElementInfo>>> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(entity)
            .cloned()
    }

    /// True if an earlier resolution of the property failed
    pub fn is_unavailable(&self, entity: &str, property: &str) -> bool {
        self.unavailable
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(entity.to_string(), property.to_string()))
    }

    fn cached(&self, entity: &str, property: &str) -> Option<Arc<ElementInfo>> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(entity)?
            .get(property)
            .cloned()
    }

    fn insert(&self, entity: &str, property: &str, info: ElementInfo) -> Arc<ElementInfo> {
        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        registry
            .entry(entity.to_string())
            .or_default()
            .entry(property.to_string())
            .or_insert_with(|| Arc::new(info))
            .clone()
    }

    fn mark_unavailable(&self, entity: &str, property: &str) {
        self.unavailable
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((entity.to_string(), property.to_string()));
    }
}
