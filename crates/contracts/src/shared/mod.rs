pub mod layout;
pub mod metadata;
