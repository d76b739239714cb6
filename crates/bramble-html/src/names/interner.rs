use std::collections::HashMap;
use std::rc::Rc;

use super::attribute::{AttributeName, BUILTIN_ATTRIBUTE_COUNT};
use super::element::{BUILTIN_ELEMENT_COUNT, ElementName};

/// The per-parse name interner.
///
/// Built-in spellings resolve by binary search over the static tables.
/// Anything else gets a fresh id the first time it is seen and the same
/// [`ElementName`] or [`AttributeName`] on every later occurrence, so
/// custom names compare by id too.
#[derive(Debug, Default)]
pub struct NameTable {
    elements: HashMap<Rc<str>, ElementName>,
    attributes: HashMap<Rc<str>, AttributeName>,
}

impl NameTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern an element name. The spelling is expected to be lowercased
    /// already, as the tokenizer does for tag names.
    pub fn element(&mut self, spelling: &str) -> ElementName {
        if let Some(name) = ElementName::lookup_builtin(spelling) {
            return name;
        }
        if let Some(name) = self.elements.get(spelling) {
            return name.clone();
        }
        let id = BUILTIN_ELEMENT_COUNT.saturating_add(Self::next_id(self.elements.len()));
        let key: Rc<str> = Rc::from(spelling);
        let name = ElementName::custom(id, Rc::clone(&key));
        let _ = self.elements.insert(key, name.clone());
        name
    }

    /// Intern an attribute name.
    pub fn attribute(&mut self, spelling: &str) -> AttributeName {
        if let Some(name) = AttributeName::lookup_builtin(spelling) {
            return name;
        }
        if let Some(name) = self.attributes.get(spelling) {
            return name.clone();
        }
        let id = BUILTIN_ATTRIBUTE_COUNT.saturating_add(Self::next_id(self.attributes.len()));
        let key: Rc<str> = Rc::from(spelling);
        let name = AttributeName::custom(id, Rc::clone(&key));
        let _ = self.attributes.insert(key, name.clone());
        name
    }

    /// Number of custom names interned so far.
    #[must_use]
    pub fn custom_count(&self) -> usize {
        self.elements.len() + self.attributes.len()
    }

    /// Forget every custom name.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.attributes.clear();
    }

    fn next_id(len: usize) -> u32 {
        u32::try_from(len).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::element;

    #[test]
    fn test_builtin_names_resolve_to_constants() {
        let mut table = NameTable::new();
        assert_eq!(table.element("table"), element::TABLE);
        assert_eq!(table.custom_count(), 0);
    }

    #[test]
    fn test_custom_names_are_memoized() {
        let mut table = NameTable::new();
        let first = table.element("my-widget");
        let second = table.element("my-widget");
        let other = table.element("other-widget");
        assert_eq!(first, second);
        assert_ne!(first, other);
        assert!(first.is_custom());
        assert_eq!(first.group(), element::Group::Other);
        assert!(!first.is_special());
        assert_eq!(table.custom_count(), 2);
    }

    #[test]
    fn test_custom_attribute_ncname_check() {
        let mut table = NameTable::new();
        let mode = crate::names::AttributeMode::Html;
        assert!(table.attribute("data-x").is_ncname(mode));
        let odd = table.attribute("a$b");
        assert!(odd.is_custom());
        assert!(!odd.is_ncname(mode));
    }
}
