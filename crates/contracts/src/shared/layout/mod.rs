//! Layout tree sent to the presentation layer
//!
//! Pages are built top-down from containers ([`UiGroup`], [`UiRow`],
//! [`UiCol`]) and leaves. The tree is plain data: the renderer receives it
//! as JSON with a `type` discriminant on every node.
//!
//! ```rust,ignore
//! let layout = UiLayout::new("book.title.edit")
//!     .add(UiGroup::new()
//!         .add(UiLabel::new("book.title").with_label_for("title"))
//!         .add(UiInput::new("title").with_max_length(Some(255))));
//! ```

mod containers;
mod element;
mod element_type;
mod elements;
mod page;

pub use containers::{UiCol, UiContainer, UiGroup, UiRow};
pub use element::UiElement;
pub use element_type::{UiColor, UiDataType, UiElementType};
pub use elements::{
    UiButton, UiCheckbox, UiCustomized, UiInput, UiLabel, UiLabelledElement, UiSelect,
    UiSelectValue, UiTextArea,
};
pub use page::{Translator, UiLayout};
