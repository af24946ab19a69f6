//! Contracts shared between the layout engine and the presentation layer.
//!
//! * [`shared::metadata`] - entity descriptors consumed by the engine
//! * [`shared::layout`] - the layout tree the engine produces

pub mod shared;
