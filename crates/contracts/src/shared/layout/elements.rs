//! Leaf nodes of the layout tree

use serde::{Deserialize, Serialize};

use super::element_type::{UiColor, UiDataType};
use crate::shared::metadata::EnumType;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Node carrying a label and an additional label (translation keys)
pub trait UiLabelledElement {
    fn label(&self) -> Option<&str>;
    fn additional_label(&self) -> Option<&str>;
    fn set_label(&mut self, label: Option<String>);
    fn set_additional_label(&mut self, label: Option<String>);
}

macro_rules! impl_labelled {
    ($($ty:ty),*) => {
        $(
            impl UiLabelledElement for $ty {
                fn label(&self) -> Option<&str> {
                    self.label.as_deref()
                }

                fn additional_label(&self) -> Option<&str> {
                    self.additional_label.as_deref()
                }

                fn set_label(&mut self, label: Option<String>) {
                    self.label = label;
                }

                fn set_additional_label(&mut self, label: Option<String>) {
                    self.additional_label = label;
                }
            }
        )*
    };
}

impl_labelled!(UiInput, UiTextArea, UiSelect, UiCheckbox);

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// Static text, optionally bound to the input it describes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_for: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_label: Option<String>,
}

impl UiLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn with_label_for(mut self, id: impl Into<String>) -> Self {
        self.label_for = Some(id.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Input / TextArea
// ---------------------------------------------------------------------------

/// Single line input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiInput {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub focus: bool,
    #[serde(default)]
    pub data_type: UiDataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_label: Option<String>,
}

impl UiInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_max_length(mut self, max_length: Option<u32>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_data_type(mut self, data_type: UiDataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn with_focus(mut self) -> Self {
        self.focus = true;
        self
    }
}

/// Multi line text input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiTextArea {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
}

impl UiTextArea {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_max_length(mut self, max_length: Option<u32>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

// ---------------------------------------------------------------------------
// Select
// ---------------------------------------------------------------------------

/// One option of a select box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSelectValue {
    pub value: String,
    pub label: String,
}

impl UiSelectValue {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Select box; rendered as a multi-select when wrapped in
/// `UiElement::MultiSelect`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSelect {
    pub id: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub values: Vec<UiSelectValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_label: Option<String>,
}

impl UiSelect {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn add(mut self, value: UiSelectValue) -> Self {
        self.values.push(value);
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// One option per enum member; the option label is the member's
    /// translation key
    pub fn with_enum_values(mut self, enum_type: &EnumType) -> Self {
        self.values.extend(
            enum_type
                .members()
                .iter()
                .map(|m| UiSelectValue::new(m.value.clone(), m.i18n_key.clone())),
        );
        self
    }
}

// ---------------------------------------------------------------------------
// Checkbox / Button / Customized
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiCheckbox {
    pub id: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_label: Option<String>,
}

impl UiCheckbox {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiButton {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub color: UiColor,
}

impl UiButton {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            color: UiColor::default(),
        }
    }

    pub fn with_color(mut self, color: UiColor) -> Self {
        self.color = color;
        self
    }
}

/// Placeholder for a widget the renderer implements itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiCustomized {
    pub id: String,
}

impl UiCustomized {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
