//! Builds layout elements from resolved property metadata
//!
//! Strings with a max length above [`TEXTAREA_THRESHOLD`] become a
//! [`UiTextArea`] instead of an [`UiInput`]. Properties that can not be
//! resolved or rendered become a [`UiLabel`] placeholder: building a layout
//! never fails because of missing metadata.

use contracts::shared::layout::{
    UiCheckbox, UiContainer, UiElement, UiInput, UiLabel, UiLabelledElement, UiSelect, UiTextArea,
};
use contracts::shared::metadata::PropertyType;

use super::classifier::{classify, WidgetKind};
use super::element_info::{map_key, ElementInfo, ElementInfoResolver};

/// Longest text still edited in a single line input
pub const TEXTAREA_THRESHOLD: u32 = 255;

/// Entity the elements are built for, plus the id prefix of list layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutContext {
    pub entity: String,
    pub id_prefix: String,
}

impl LayoutContext {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            id_prefix: String::new(),
        }
    }

    /// Prefix element ids, e.g. `address.` for `address.name`
    pub fn with_id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.id_prefix = id_prefix.into();
        self
    }

    pub fn element_id(&self, property: &str) -> String {
        format!("{}{}", self.id_prefix, property)
    }
}

/// Request scoped builder on top of the shared resolver
pub struct ElementBuilder<'a> {
    resolver: &'a ElementInfoResolver,
}

impl<'a> ElementBuilder<'a> {
    pub fn new(resolver: &'a ElementInfoResolver) -> Self {
        Self { resolver }
    }

    /// Build the element for one (possibly nested) property
    pub fn build(&self, context: &LayoutContext, property: &str) -> UiElement {
        let key = map_key(&context.entity, property);
        let Some(info) = self.resolver.resolve(&context.entity, property) else {
            tracing::info!("Can't build UiElement from {}.", key);
            return placeholder(&key);
        };

        let id = context.element_id(property);
        let required = info.is_required();
        let mut element: UiElement = match classify(&info.property_type) {
            WidgetKind::Text => match info.max_length {
                Some(max_length) if max_length > TEXTAREA_THRESHOLD => UiTextArea::new(id)
                    .with_max_length(Some(max_length))
                    .with_required(required)
                    .into(),
                max_length => UiInput::new(id)
                    .with_max_length(max_length)
                    .with_required(required)
                    .into(),
            },
            WidgetKind::Checkbox => UiCheckbox::new(id).with_required(required).into(),
            WidgetKind::Input(data_type) => UiInput::new(id)
                .with_data_type(data_type)
                .with_required(required)
                .into(),
            WidgetKind::Select => match &info.property_type {
                PropertyType::Enum(enum_type) => UiSelect::new(id)
                    .with_required(required)
                    .with_enum_values(enum_type)
                    .into(),
                _ => return unsupported(&info, property, &key),
            },
            WidgetKind::Unknown => return unsupported(&info, property, &key),
        };

        if let Some(labelled) = element.as_labelled_mut() {
            set_labels(&info, property, labelled);
        }
        element
    }

    /// Build the elements of several properties, in order
    pub fn build_all(&self, context: &LayoutContext, properties: &[&str]) -> Vec<UiElement> {
        properties
            .iter()
            .map(|property| self.build(context, property))
            .collect()
    }

    /// Append the elements of `properties` to a container
    pub fn add_properties<C: UiContainer>(
        &self,
        container: C,
        context: &LayoutContext,
        properties: &[&str],
    ) -> C {
        container.add_all(self.build_all(context, properties))
    }
}

fn placeholder(key: &str) -> UiElement {
    UiLabel::new(format!("??? {} ???", key)).into()
}

fn unsupported(info: &ElementInfo, property: &str, key: &str) -> UiElement {
    if let PropertyType::Enum(enum_type) = &info.property_type {
        tracing::warn!(
            "Properties of enum '{}' not implementing LocalizableEnum not yet supported: {}.",
            enum_type.name,
            key
        );
        return placeholder(key);
    }
    tracing::warn!(
        "Unsupported property type '{}': {}",
        info.property_type.as_str(),
        key
    );
    UiLabel::new(property).into()
}

/// Label keys of the element; the last path segment if none is declared
fn set_labels(info: &ElementInfo, property: &str, element: &mut dyn UiLabelledElement) {
    if info.i18n_key.is_none() && info.additional_i18n_key.is_none() {
        let name = property.rsplit('.').next().unwrap_or(property);
        element.set_label(Some(name.to_string()));
        return;
    }
    element.set_label(info.i18n_key.clone());
    element.set_additional_label(info.additional_i18n_key.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::layout::test_support::{book_catalog, CapturedLogs};
    use contracts::shared::layout::{UiDataType, UiElementType, UiGroup, UiSelectValue};

    fn resolver() -> ElementInfoResolver {
        ElementInfoResolver::from_source(book_catalog())
    }

    fn book() -> LayoutContext {
        LayoutContext::new("Book")
    }

    #[test]
    fn test_title_is_required_input() {
        let resolver = resolver();
        let element = ElementBuilder::new(&resolver).build(&book(), "title");
        assert_eq!(
            element,
            UiElement::Input(UiInput {
                id: "title".to_string(),
                max_length: Some(255),
                required: true,
                label: Some("book.title".to_string()),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_abstract_is_text_area() {
        let resolver = resolver();
        match ElementBuilder::new(&resolver).build(&book(), "abstract") {
            UiElement::TextArea(text_area) => {
                assert_eq!(text_area.id, "abstract");
                assert_eq!(text_area.max_length, Some(4000));
                assert!(!text_area.required);
                assert_eq!(text_area.label.as_deref(), Some("book.abstract"));
            }
            other => panic!("expected textarea, got {:?}", other),
        }
    }

    #[test]
    fn test_text_threshold() {
        let resolver = resolver();
        let builder = ElementBuilder::new(&resolver);
        // 255
        assert_eq!(builder.build(&book(), "isbn").element_type(), UiElementType::Input);
        // 256
        assert_eq!(
            builder.build(&book(), "signature").element_type(),
            UiElementType::TextArea
        );
        // no column, no max length
        match builder.build(&book(), "keywords") {
            UiElement::Input(input) => assert_eq!(input.max_length, None),
            other => panic!("expected input, got {:?}", other),
        }
    }

    #[test]
    fn test_input_display_modes() {
        let resolver = resolver();
        let builder = ElementBuilder::new(&resolver);
        let cases = [
            ("yearOfPublishing", UiDataType::Int),
            ("price", UiDataType::Decimal),
            ("lendOutDate", UiDataType::Date),
            ("created", UiDataType::Timestamp),
            ("locale", UiDataType::Locale),
            ("lendOutBy", UiDataType::User),
            ("task", UiDataType::Task),
        ];
        for (property, data_type) in cases {
            match builder.build(&book(), property) {
                UiElement::Input(input) => assert_eq!(input.data_type, data_type, "{}", property),
                other => panic!("expected input for {}, got {:?}", property, other),
            }
        }
    }

    #[test]
    fn test_join_column_user_is_not_required() {
        let resolver = resolver();
        match ElementBuilder::new(&resolver).build(&book(), "lendOutBy") {
            UiElement::Input(input) => assert!(!input.required),
            other => panic!("expected input, got {:?}", other),
        }
    }

    #[test]
    fn test_checkbox() {
        let resolver = resolver();
        let element = ElementBuilder::new(&resolver).build(&book(), "favorite");
        assert_eq!(
            element,
            UiElement::Checkbox(UiCheckbox::new("favorite").with_label("book.favorite"))
        );
    }

    #[test]
    fn test_not_null_boolean_is_required_checkbox() {
        let resolver = resolver();
        match ElementBuilder::new(&resolver).build(&book(), "lendable") {
            UiElement::Checkbox(checkbox) => {
                assert!(checkbox.required);
                assert_eq!(checkbox.label.as_deref(), Some("book.lendable"));
            }
            other => panic!("expected checkbox, got {:?}", other),
        }
    }

    #[test]
    fn test_localizable_enum_is_select() {
        let resolver = resolver();
        match ElementBuilder::new(&resolver).build(&book(), "type") {
            UiElement::Select(select) => {
                assert!(select.required);
                assert_eq!(select.label.as_deref(), Some("book.type"));
                assert_eq!(
                    select.values,
                    vec![
                        UiSelectValue::new("BOOK", "book.type.book"),
                        UiSelectValue::new("MAGAZINE", "book.type.magazine"),
                        UiSelectValue::new("ARTICLE", "book.type.article"),
                    ]
                );
            }
            other => panic!("expected select, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_enum_is_placeholder_with_warning() {
        let resolver = resolver();
        let builder = ElementBuilder::new(&resolver);
        let logs = CapturedLogs::new();

        let element = logs.capture(|| builder.build(&book(), "status"));
        assert_eq!(element, UiElement::Label(UiLabel::new("??? Book.status ???")));
        let output = logs.contents();
        assert!(output.contains("WARN"), "{}", output);
        assert!(output.contains("BookStatus"), "{}", output);

        // Not treated as unresolvable, and still a label the next time
        assert!(!resolver.is_unavailable("Book", "status"));
        let again = builder.build(&book(), "status");
        assert_eq!(again.element_type(), UiElementType::Label);
    }

    #[test]
    fn test_unsupported_type_is_label_with_property_name() {
        let resolver = resolver();
        let logs = CapturedLogs::new();
        let element = logs.capture(|| ElementBuilder::new(&resolver).build(&book(), "coverImage"));
        assert_eq!(element, UiElement::Label(UiLabel::new("coverImage")));
        assert!(logs.contents().contains("Unsupported property type 'other'"));
    }

    #[test]
    fn test_unknown_property_is_placeholder() {
        let resolver = resolver();
        let builder = ElementBuilder::new(&resolver);
        let logs = CapturedLogs::new();

        let element = logs.capture(|| builder.build(&book(), "missing"));
        assert_eq!(element, UiElement::Label(UiLabel::new("??? Book.missing ???")));
        assert!(logs.contents().contains("INFO"));
        assert!(resolver.is_unavailable("Book", "missing"));

        let again = builder.build(&book(), "missing");
        assert_eq!(again, element);
    }

    #[test]
    fn test_nested_task_id() {
        let resolver = resolver();
        let context = LayoutContext::new("Timesheet");
        match ElementBuilder::new(&resolver).build(&context, "task.id") {
            UiElement::Input(input) => {
                assert_eq!(input.id, "task.id");
                assert_eq!(input.data_type, UiDataType::Int);
                assert!(!input.required);
                // Nothing declared: label falls back to the property name
                assert_eq!(input.label.as_deref(), Some("id"));
            }
            other => panic!("expected input, got {:?}", other),
        }
        let info = resolver.resolve("Timesheet", "task.id").unwrap();
        assert_eq!(info.ancestors().count(), 1);
        assert_eq!(info.parent.as_ref().unwrap().property_type, PropertyType::TaskRef);
    }

    #[test]
    fn test_labels() {
        let resolver = resolver();
        let builder = ElementBuilder::new(&resolver);

        let authors = builder.build(&book(), "authors");
        let labelled = authors.as_labelled().unwrap();
        assert_eq!(labelled.label(), Some("book.authors"));
        assert_eq!(labelled.additional_label(), Some("book.authors.info"));

        // Empty keys count as missing
        let publisher = builder.build(&book(), "publisher");
        assert_eq!(publisher.as_labelled().unwrap().label(), Some("publisher"));
    }

    #[test]
    fn test_id_prefix() {
        let resolver = resolver();
        let context = book().with_id_prefix("book.");
        match ElementBuilder::new(&resolver).build(&context, "title") {
            UiElement::Input(input) => assert_eq!(input.id, "book.title"),
            other => panic!("expected input, got {:?}", other),
        }
    }

    #[test]
    fn test_add_properties_keeps_order() {
        let resolver = resolver();
        let group = ElementBuilder::new(&resolver).add_properties(
            UiGroup::new().add(UiLabel::new("book")),
            &book(),
            &["title", "favorite", "missing", "abstract"],
        );
        let types: Vec<UiElementType> = group.content().iter().map(|e| e.element_type()).collect();
        assert_eq!(
            types,
            vec![
                UiElementType::Label,
                UiElementType::Input,
                UiElementType::Checkbox,
                UiElementType::Label,
                UiElementType::TextArea,
            ]
        );
    }
}
