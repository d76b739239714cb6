use bramble_dom::Attribute;

use super::attribute::{AttributeMode, AttributeName, ID};

/// The attributes of one start tag, in source order.
///
/// The list projects its names through a [`AttributeMode`]; the tree
/// builder switches the mode to MathML or SVG before creating a foreign
/// element. The `id` value is cached as it is added.
#[derive(Debug, Clone, Default)]
pub struct HtmlAttributes {
    mode: AttributeMode,
    entries: Vec<(AttributeName, String)>,
    id_value: Option<String>,
}

impl HtmlAttributes {
    /// An empty list projecting through `mode`.
    #[must_use]
    pub const fn new(mode: AttributeMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
            id_value: None,
        }
    }

    /// The projection currently in use.
    #[must_use]
    pub const fn mode(&self) -> AttributeMode {
        self.mode
    }

    /// Append an attribute. Duplicates are the caller's responsibility.
    pub fn add(&mut self, name: AttributeName, value: String) {
        if name == ID {
            self.id_value = Some(value.clone());
        }
        self.entries.push((name, value));
    }

    /// Whether an attribute with this name is present.
    #[must_use]
    pub fn contains(&self, name: &AttributeName) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// The value of the named attribute.
    #[must_use]
    pub fn value_of(&self, name: &AttributeName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The value of the attribute whose qualified name in the current mode
    /// is `qname`.
    #[must_use]
    pub fn value_of_qname(&self, qname: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.qname(self.mode) == qname)
            .map(|(_, v)| v.as_str())
    }

    /// The cached `id` attribute value.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id_value.as_deref()
    }

    /// Remove the named attribute, returning its value.
    pub fn remove(&mut self, name: &AttributeName) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        let (_, value) = self.entries.remove(index);
        if *name == ID {
            self.id_value = None;
        }
        Some(value)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeName, &str)> {
        self.entries.iter().map(|(n, v)| (n, v.as_str()))
    }

    /// Drop every attribute and reset to HTML mode.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.id_value = None;
        self.mode = AttributeMode::Html;
    }

    /// [§ 13.2.6.1 Adjust MathML attributes](https://html.spec.whatwg.org/multipage/parsing.html#adjust-mathml-attributes)
    /// together with "adjust foreign attributes".
    pub const fn adjust_for_math(&mut self) {
        self.mode = AttributeMode::MathMl;
    }

    /// [§ 13.2.6.1 Adjust SVG attributes](https://html.spec.whatwg.org/multipage/parsing.html#adjust-svg-attributes)
    /// together with "adjust foreign attributes".
    pub const fn adjust_for_svg(&mut self) {
        self.mode = AttributeMode::Svg;
    }

    /// Switch the projection directly.
    pub const fn set_mode(&mut self, mode: AttributeMode) {
        self.mode = mode;
    }

    /// Project into owned attributes for a tree sink.
    #[must_use]
    pub fn to_attributes(&self) -> Vec<Attribute> {
        self.entries
            .iter()
            .map(|(name, value)| Attribute {
                namespace: name.namespace(self.mode),
                local_name: name.local(self.mode).to_string(),
                value: value.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::attribute::{CLASS, VIEWBOX, XLINK_HREF};
    use bramble_dom::AttributeNamespace;

    #[test]
    fn test_id_is_cached() {
        let mut attrs = HtmlAttributes::new(AttributeMode::Html);
        attrs.add(CLASS, "a".to_string());
        attrs.add(ID, "main".to_string());
        assert_eq!(attrs.id(), Some("main"));
        assert_eq!(attrs.remove(&ID).as_deref(), Some("main"));
        assert_eq!(attrs.id(), None);
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_svg_projection() {
        let mut attrs = HtmlAttributes::new(AttributeMode::Html);
        attrs.add(VIEWBOX, "0 0 1 1".to_string());
        attrs.add(XLINK_HREF, "#a".to_string());
        attrs.adjust_for_svg();

        let projected = attrs.to_attributes();
        assert_eq!(projected[0].local_name, "viewBox");
        assert_eq!(projected[1].local_name, "href");
        assert_eq!(projected[1].namespace, Some(AttributeNamespace::XLink));
        assert_eq!(attrs.value_of_qname("viewBox"), Some("0 0 1 1"));
    }
}
