use contracts::shared::layout::UiDataType;
use contracts::shared::metadata::PropertyType;

/// Widget a property type maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Input or text area, decided by the max length
    Text,
    Checkbox,
    /// Input with the given display mode
    Input(UiDataType),
    /// Select box filled from the members of a localizable enum
    Select,
    Unknown,
}

/// Map a property type to its widget. New rows may be added, existing rows
/// must stay as they are.
pub fn classify(property_type: &PropertyType) -> WidgetKind {
    match property_type {
        PropertyType::Text => WidgetKind::Text,
        PropertyType::Boolean => WidgetKind::Checkbox,
        PropertyType::Date => WidgetKind::Input(UiDataType::Date),
        PropertyType::Timestamp => WidgetKind::Input(UiDataType::Timestamp),
        PropertyType::Integer => WidgetKind::Input(UiDataType::Int),
        PropertyType::Decimal => WidgetKind::Input(UiDataType::Decimal),
        PropertyType::Locale => WidgetKind::Input(UiDataType::Locale),
        PropertyType::UserRef => WidgetKind::Input(UiDataType::User),
        PropertyType::TaskRef => WidgetKind::Input(UiDataType::Task),
        PropertyType::Enum(enum_type) if enum_type.is_localizable() => WidgetKind::Select,
        PropertyType::Enum(_) => WidgetKind::Unknown,
        PropertyType::Entity { .. } | PropertyType::Other { .. } => WidgetKind::Unknown,
    }
}
