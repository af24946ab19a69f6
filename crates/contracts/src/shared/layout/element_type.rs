use serde::{Deserialize, Serialize};

/// Discriminant of a layout node, as sent to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiElementType {
    #[serde(rename = "group")]
    Group,
    #[serde(rename = "row")]
    Row,
    #[serde(rename = "col")]
    Col,
    #[serde(rename = "label")]
    Label,
    #[serde(rename = "textarea")]
    TextArea,
    #[serde(rename = "input")]
    Input,
    #[serde(rename = "select")]
    Select,
    #[serde(rename = "multi-select")]
    MultiSelect,
    #[serde(rename = "checkbox")]
    Checkbox,
    #[serde(rename = "button")]
    Button,
    #[serde(rename = "customized")]
    Customized,
}

impl UiElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Row => "row",
            Self::Col => "col",
            Self::Label => "label",
            Self::TextArea => "textarea",
            Self::Input => "input",
            Self::Select => "select",
            Self::MultiSelect => "multi-select",
            Self::Checkbox => "checkbox",
            Self::Button => "button",
            Self::Customized => "customized",
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::Group | Self::Row | Self::Col)
    }
}

/// Display mode of an input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiDataType {
    #[default]
    String,
    Int,
    Decimal,
    Date,
    Timestamp,
    Locale,
    User,
    Task,
    Customized,
}

/// Colour of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiColor {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Link,
}
