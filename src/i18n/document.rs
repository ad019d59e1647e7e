use std::collections::{BTreeMap, BTreeSet};

/// Handle of an element inside a `Document`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

/// The part of the page the language controller reads and mutates.
/// Queries that match nothing return an empty list.
pub trait Document {
    fn set_language(&mut self, lang: &str);
    fn language(&self) -> Option<&str>;

    /// Elements carrying `attribute`, in document order.
    fn elements_with_attribute(&self, attribute: &str) -> Vec<ElementId>;
    fn attribute(&self, id: ElementId, name: &str) -> Option<&str>;
    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str);
    fn remove_attribute(&mut self, id: ElementId, name: &str);

    /// `None` clears the inline display so the stylesheet decides.
    fn set_display(&mut self, id: ElementId, display: Option<&str>);
    fn toggle_class(&mut self, id: ElementId, class: &str, on: bool);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub display: Option<String>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }
}

/// In-memory page, for hosts without a browser DOM.
#[derive(Debug, Clone, Default)]
pub struct Page {
    lang: Option<String>,
    elements: Vec<Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.classes.contains(class))
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        match self.element(id) {
            Some(e) => !e.attributes.contains_key("hidden") && e.display.as_deref() != Some("none"),
            None => false,
        }
    }
}

impl Document for Page {
    fn set_language(&mut self, lang: &str) {
        self.lang = Some(lang.to_string());
    }

    fn language(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    fn elements_with_attribute(&self, attribute: &str) -> Vec<ElementId> {
        self.elements.iter()
            .enumerate()
            .filter(|(_, e)| e.attributes.contains_key(attribute))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id)
            .and_then(|e| e.attributes.get(name))
            .map(|v| v.as_str())
    }

    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(id.0) {
            e.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, id: ElementId, name: &str) {
        if let Some(e) = self.elements.get_mut(id.0) {
            e.attributes.remove(name);
        }
    }

    fn set_display(&mut self, id: ElementId, display: Option<&str>) {
        if let Some(e) = self.elements.get_mut(id.0) {
            e.display = display.map(|d| d.to_string());
        }
    }

    fn toggle_class(&mut self, id: ElementId, class: &str, on: bool) {
        if let Some(e) = self.elements.get_mut(id.0) {
            if on {
                e.classes.insert(class.to_string());
            } else {
                e.classes.remove(class);
            }
        }
    }
}
