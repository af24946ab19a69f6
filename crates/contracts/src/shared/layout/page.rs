use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::containers::UiContainer;
use super::element::{find_in_mut, UiElement};
use super::elements::{UiInput, UiTextArea};

/// Translation lookup provided by the localization system
pub trait Translator {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Root of a page layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiLayout {
    pub title: String,
    #[serde(default)]
    pub layout: Vec<UiElement>,
    /// Texts the renderer needs besides the element labels
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, String>,
}

impl UiContainer for UiLayout {
    fn content(&self) -> &[UiElement] {
        &self.layout
    }

    fn content_mut(&mut self) -> &mut Vec<UiElement> {
        &mut self.layout
    }
}

impl UiLayout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut UiElement> {
        find_in_mut(&mut self.layout, id)
    }

    pub fn input_mut(&mut self, id: &str) -> Option<&mut UiInput> {
        match self.find_by_id_mut(id)? {
            UiElement::Input(input) => Some(input),
            _ => None,
        }
    }

    pub fn text_area_mut(&mut self, id: &str) -> Option<&mut UiTextArea> {
        match self.find_by_id_mut(id)? {
            UiElement::TextArea(text_area) => Some(text_area),
            _ => None,
        }
    }

    pub fn add_translations<'a>(
        &mut self,
        translator: &dyn Translator,
        keys: impl IntoIterator<Item = &'a str>,
    ) -> &mut Self {
        for key in keys {
            self.translations
                .insert(key.to_string(), translator.translate(key));
        }
        self
    }
}
