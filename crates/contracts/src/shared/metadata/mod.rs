//! Metadata types describing entities for the layout engine
//!
//! These are the records the metadata sources exchange with the engine:
//! property types, column constraints and property declarations.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::{EntityDescriptor, PropertyDescriptor, PropertyType};
//!
//! let book = EntityDescriptor::new("Book")
//!     .property(PropertyDescriptor::new("title", PropertyType::Text));
//! ```

mod types;
mod field_type;
mod validation;

pub use types::{
    CatalogDocument,
    EntityDescriptor,
    PropertyDescriptor,
};
pub use field_type::{EnumMember, EnumType, LocalizableEnum, PropertyType};
pub use validation::{ColumnConstraints, ColumnDescriptor, ColumnMapping, PropertyDeclaration};
