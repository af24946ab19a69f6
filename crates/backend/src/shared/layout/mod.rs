//! Metadata driven layout engine
//!
//! Given an entity and a (possibly nested) property path, the engine derives
//! the UI element editing that property:
//!
//! 1. [`ElementInfoResolver`] asks the [`MetadataSource`] for type, column
//!    constraints and declaration, and caches the result (failures too).
//! 2. [`classify`] maps the property type to a [`WidgetKind`].
//! 3. [`ElementBuilder`] turns both into a `UiElement`, falling back to a
//!    placeholder label when anything is missing.
//!
//! ```rust,ignore
//! let resolver = ElementInfoResolver::from_source(EntityCatalog::load_configured(&config)?);
//! let builder = ElementBuilder::new(&resolver);
//! let context = LayoutContext::new("Book");
//! let layout = UiLayout::new("book.title.edit")
//!     .add(builder.add_properties(UiGroup::new(), &context, &["title", "authors"]));
//! ```

pub mod catalog;
pub mod classifier;
pub mod element_builder;
pub mod element_info;
pub mod metadata_source;

#[cfg(test)]
mod test_support;

pub use catalog::{normalize_column, CatalogError, EntityCatalog};
pub use classifier::{classify, WidgetKind};
pub use element_builder::{ElementBuilder, LayoutContext, TEXTAREA_THRESHOLD};
pub use element_info::{map_key, merge_required, ElementInfo, ElementInfoResolver};
pub use metadata_source::{ColumnMetadataSource, MetadataSource, PropertyInfoSource};
