//! Entries of the stack of open elements and of the list of active
//! formatting elements.

use bramble_dom::Namespace;

use crate::names::element::{ANNOTATION_XML, DESC, FOREIGNOBJECT, MI, MN, MO, MS, MTEXT, TITLE};
use crate::names::{ElementName, HtmlAttributes};

/// [§ 13.2.4.2 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)
///
/// One open element. The flags are fixed when the entry is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackNode<H> {
    /// The interned tag name.
    pub name: ElementName,
    /// The element's namespace.
    pub namespace: Namespace,
    /// The sink's handle for the element.
    pub node: H,
    /// Bounds "has an element in scope" searches.
    pub scoping: bool,
    /// [§ 13.2.4.2](https://html.spec.whatwg.org/multipage/parsing.html#special)
    pub special: bool,
    /// Misplaced content inserted while this is the current node is foster
    /// parented.
    pub foster_parenting: bool,
    /// Set on a `table` once something was foster parented out of it.
    pub tainted: bool,
    /// [§ 13.2.4.2](https://html.spec.whatwg.org/multipage/parsing.html#html-integration-point)
    ///
    /// Set for SVG `foreignObject`, `desc` and `title`. The tree builder
    /// sets it on `annotation-xml` elements with an HTML `encoding`.
    pub html_integration_point: bool,
}

impl<H> StackNode<H> {
    /// An entry for an element named `name` in `namespace`.
    ///
    /// HTML elements take their flags from the name table. Of the foreign
    /// elements only the MathML text integration points, `annotation-xml`
    /// and the SVG HTML integration points are scoping and special.
    #[must_use]
    pub fn new(name: ElementName, namespace: Namespace, node: H) -> Self {
        let (scoping, special, foster_parenting, html_integration_point) = match namespace {
            Namespace::Html => (
                name.is_scoping(),
                name.is_special(),
                name.is_foster_parenting(),
                false,
            ),
            Namespace::MathMl => {
                let boundary = [MI, MO, MN, MS, MTEXT, ANNOTATION_XML].contains(&name);
                (boundary, boundary, false, false)
            }
            Namespace::Svg => {
                let boundary = [FOREIGNOBJECT, DESC, TITLE].contains(&name);
                (boundary, boundary, false, boundary)
            }
        };
        Self {
            name,
            namespace,
            node,
            scoping,
            special,
            foster_parenting,
            tainted: false,
            html_integration_point,
        }
    }

    /// Whether this is the HTML element `name`.
    #[must_use]
    pub fn is_html(&self, name: &ElementName) -> bool {
        self.namespace == Namespace::Html && self.name == *name
    }
}

/// [§ 13.2.4.3 The list of active formatting elements](https://html.spec.whatwg.org/multipage/parsing.html#the-list-of-active-formatting-elements)
///
/// "This list contains elements in the formatting category, and markers."
#[derive(Debug, Clone)]
pub enum FormattingEntry<H> {
    /// "Markers are inserted when entering applet, object, marquee,
    /// template, td, th, and caption elements"
    Marker,
    /// A formatting element and the attributes of the token that created
    /// it.
    Formatting(StackNode<H>, HtmlAttributes),
}

impl<H> FormattingEntry<H> {
    /// The element entry, unless this is a marker.
    #[must_use]
    pub const fn element(&self) -> Option<&StackNode<H>> {
        match self {
            Self::Marker => None,
            Self::Formatting(entry, _) => Some(entry),
        }
    }

    /// The element's handle, unless this is a marker.
    #[must_use]
    pub fn node(&self) -> Option<&H> {
        self.element().map(|entry| &entry.node)
    }

    /// Whether this is a marker.
    #[must_use]
    pub const fn is_marker(&self) -> bool {
        matches!(self, Self::Marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::element::{DIV, G, TABLE, TD};

    #[test]
    fn test_html_flags_come_from_the_name_table() {
        let table = StackNode::new(TABLE, Namespace::Html, 1);
        assert!(table.scoping && table.foster_parenting && !table.tainted);
        let td = StackNode::new(TD, Namespace::Html, 2);
        assert!(td.scoping && !td.foster_parenting);
        let div = StackNode::new(DIV, Namespace::Html, 3);
        assert!(div.special && !div.scoping);
    }

    #[test]
    fn test_foreign_flags() {
        let title = StackNode::new(TITLE, Namespace::Svg, 1);
        assert!(title.scoping && title.special && title.html_integration_point);
        let g = StackNode::new(G, Namespace::Svg, 2);
        assert!(!g.scoping && !g.special);
        let mi = StackNode::new(MI, Namespace::MathMl, 3);
        assert!(mi.scoping && !mi.html_integration_point);
        let svg_mi = StackNode::new(MI, Namespace::Svg, 4);
        assert!(!svg_mi.scoping);
    }

    #[test]
    fn test_marker() {
        let marker: FormattingEntry<u32> = FormattingEntry::Marker;
        assert!(marker.is_marker() && marker.element().is_none());
        let b = FormattingEntry::Formatting(
            StackNode::new(crate::names::element::B, Namespace::Html, 7u32),
            HtmlAttributes::default(),
        );
        assert_eq!(b.node(), Some(&7));
    }
}
