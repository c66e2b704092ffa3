use crate::{
    traits::ElementHandle,
    ui::style::{ElementStyle, StyleProperty},
};
use std::sync::Mutex;

/// Built-in chrome a map view draws over its canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeKind {
    /// Engine/vendor logo
    Logo,
    /// Copyright / data attribution line
    Attribution,
}

/// In-process styleable element
#[derive(Debug)]
pub struct Element {
    name: String,
    style: Mutex<ElementStyle>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: Mutex::new(ElementStyle::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ElementHandle for Element {
    fn apply_style(&self, property: StyleProperty) {
        log::trace!("{}: {:?}", self.name, property);
        self.style
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .apply(property);
    }

    fn style(&self) -> ElementStyle {
        self.style
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
