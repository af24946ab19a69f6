//! Server side of the form layout engine: metadata resolution, widget
//! classification and element building, plus configuration and logging setup.

pub mod shared;
