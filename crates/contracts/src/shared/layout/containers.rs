//! Container nodes: group, row and column

use serde::{Deserialize, Serialize};

use super::element::UiElement;

/// Node holding an ordered list of children.
///
/// Children are rendered in insertion order. Nesting rules are not checked.
pub trait UiContainer: Sized {
    fn content(&self) -> &[UiElement];

    fn content_mut(&mut self) -> &mut Vec<UiElement>;

    fn add(mut self, element: impl Into<UiElement>) -> Self {
        self.content_mut().push(element.into());
        self
    }

    fn add_all(mut self, elements: impl IntoIterator<Item = UiElement>) -> Self {
        self.content_mut().extend(elements);
        self
    }
}

macro_rules! impl_container {
    ($($ty:ty),*) => {
        $(
            impl UiContainer for $ty {
                fn content(&self) -> &[UiElement] {
                    &self.content
                }

                fn content_mut(&mut self) -> &mut Vec<UiElement> {
                    &mut self.content
                }
            }
        )*
    };
}

impl_container!(UiGroup, UiRow, UiCol);

/// Vertical group, typically a label together with its input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiGroup {
    #[serde(default)]
    pub content: Vec<UiElement>,
}

impl UiGroup {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiRow {
    #[serde(default)]
    pub content: Vec<UiElement>,
}

impl UiRow {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Column of a row; `length` is the grid width (1..=12)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiCol {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u8>,
    #[serde(default)]
    pub content: Vec<UiElement>,
}

impl UiCol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length(length: u8) -> Self {
        Self {
            length: Some(length),
            content: Vec::new(),
        }
    }
}
