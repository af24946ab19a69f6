use serde::{Deserialize, Serialize};

use super::containers::{UiCol, UiGroup, UiRow};
use super::element_type::UiElementType;
use super::elements::{
    UiButton, UiCheckbox, UiCustomized, UiInput, UiLabel, UiLabelledElement, UiSelect, UiTextArea,
};

/// Node of the layout tree.
///
/// Serialized with a `type` discriminant so the renderer can dispatch on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiElement {
    #[serde(rename = "group")]
    Group(UiGroup),
    #[serde(rename = "row")]
    Row(UiRow),
    #[serde(rename = "col")]
    Col(UiCol),
    #[serde(rename = "label")]
    Label(UiLabel),
    #[serde(rename = "textarea")]
    TextArea(UiTextArea),
    #[serde(rename = "input")]
    Input(UiInput),
    #[serde(rename = "select")]
    Select(UiSelect),
    #[serde(rename = "multi-select")]
    MultiSelect(UiSelect),
    #[serde(rename = "checkbox")]
    Checkbox(UiCheckbox),
    #[serde(rename = "button")]
    Button(UiButton),
    #[serde(rename = "customized")]
    Customized(UiCustomized),
}

impl UiElement {
    pub fn element_type(&self) -> UiElementType {
        match self {
            Self::Group(_) => UiElementType::Group,
            Self::Row(_) => UiElementType::Row,
            Self::Col(_) => UiElementType::Col,
            Self::Label(_) => UiElementType::Label,
            Self::TextArea(_) => UiElementType::TextArea,
            Self::Input(_) => UiElementType::Input,
            Self::Select(_) => UiElementType::Select,
            Self::MultiSelect(_) => UiElementType::MultiSelect,
            Self::Checkbox(_) => UiElementType::Checkbox,
            Self::Button(_) => UiElementType::Button,
            Self::Customized(_) => UiElementType::Customized,
        }
    }

    /// Id of the bound property (None for containers and unbound nodes)
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::TextArea(e) => Some(&e.id),
            Self::Input(e) => Some(&e.id),
            Self::Select(e) | Self::MultiSelect(e) => Some(&e.id),
            Self::Checkbox(e) => Some(&e.id),
            Self::Customized(e) => Some(&e.id),
            Self::Button(e) => e.id.as_deref(),
            Self::Label(e) => e.label_for.as_deref(),
            Self::Group(_) | Self::Row(_) | Self::Col(_) => None,
        }
    }

    pub fn children(&self) -> Option<&[UiElement]> {
        match self {
            Self::Group(c) => Some(&c.content),
            Self::Row(c) => Some(&c.content),
            Self::Col(c) => Some(&c.content),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<UiElement>> {
        match self {
            Self::Group(c) => Some(&mut c.content),
            Self::Row(c) => Some(&mut c.content),
            Self::Col(c) => Some(&mut c.content),
            _ => None,
        }
    }

    /// Labelled view of the node, if it carries labels
    pub fn as_labelled_mut(&mut self) -> Option<&mut dyn UiLabelledElement> {
        match self {
            Self::Input(e) => Some(e),
            Self::TextArea(e) => Some(e),
            Self::Select(e) | Self::MultiSelect(e) => Some(e),
            Self::Checkbox(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_labelled(&self) -> Option<&dyn UiLabelledElement> {
        match self {
            Self::Input(e) => Some(e),
            Self::TextArea(e) => Some(e),
            Self::Select(e) | Self::MultiSelect(e) => Some(e),
            Self::Checkbox(e) => Some(e),
            _ => None,
        }
    }

    /// Depth-first search for a bound node. Labels are skipped, they only
    /// point at the node.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut UiElement> {
        if !matches!(self, Self::Label(_)) && self.id() == Some(id) {
            return Some(self);
        }
        find_in_mut(self.children_mut()?, id)
    }
}

pub(crate) fn find_in_mut<'a>(elements: &'a mut [UiElement], id: &str) -> Option<&'a mut UiElement> {
    elements.iter_mut().find_map(|e| e.find_by_id_mut(id))
}

macro_rules! impl_from_element {
    ($($variant:ident => $ty:ty),*) => {
        $(
            impl From<$ty> for UiElement {
                fn from(element: $ty) -> Self {
                    UiElement::$variant(element)
                }
            }
        )*
    };
}

impl_from_element!(
    Group => UiGroup,
    Row => UiRow,
    Col => UiCol,
    Label => UiLabel,
    TextArea => UiTextArea,
    Input => UiInput,
    Select => UiSelect,
    Checkbox => UiCheckbox,
    Button => UiButton,
    Customized => UiCustomized
);

impl UiSelect {
    /// Wrap as a multi-select node
    pub fn multi(self) -> UiElement {
        UiElement::MultiSelect(self)
    }
}
