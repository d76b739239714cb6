//! Foreign content: SVG and MathML subtrees.
//!
//! [§ 13.2.6.5 The rules for parsing tokens in foreign content](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inforeign)
//!
//! Attribute projections ("adjust MathML attributes", "adjust SVG
//! attributes", "adjust foreign attributes") live in the name table, so
//! this module only classifies elements and tags.

use bramble_dom::Namespace;

use crate::names::attribute::{COLOR, ENCODING, FACE, SIZE};
use crate::names::element::{ANNOTATION_XML, MALIGNMARK, MGLYPH, MI, MN, MO, MS, MTEXT};
use crate::names::{AttributeMode, ElementName, Group, HtmlAttributes};

use super::stack::StackNode;

/// Tags that end foreign content outright:
///
/// "A start tag whose tag name is one of: "b", "big", "blockquote", "body",
/// "br", "center", "code", "dd", "div", "dl", "dt", "em", "embed", "h1",
/// "h2", "h3", "h4", "h5", "h6", "head", "hr", "i", "img", "li",
/// "listing", "menu", "meta", "nobr", "ol", "p", "pre", "ruby", "s",
/// "small", "span", "strong", "strike", "sub", "sup", "table", "tt", "u",
/// "ul", "var""
///
/// "A start tag whose tag name is "font", if the token has any attributes
/// named "color", "face", or "size""
#[must_use]
pub fn is_breakout_start_tag(name: &ElementName, attributes: &HtmlAttributes) -> bool {
    match name.group() {
        Group::B => {
            if name.name() == "font" {
                attributes.contains(&COLOR)
                    || attributes.contains(&FACE)
                    || attributes.contains(&SIZE)
            } else {
                true
            }
        }
        Group::Body
        | Group::Br
        | Group::Dd
        | Group::Head
        | Group::Heading
        | Group::Hr
        | Group::Img
        | Group::Li
        | Group::Meta
        | Group::Nobr
        | Group::Ol
        | Group::P
        | Group::Pre
        | Group::Ruby
        | Group::Table => true,
        // "embed" shares the img group; "blockquote", "center", "div" and
        // "menu" are the only breakout members of the div group.
        Group::Div => matches!(name.name(), "blockquote" | "center" | "div" | "menu"),
        _ => false,
    }
}

/// [§ 13.2.4.2](https://html.spec.whatwg.org/multipage/parsing.html#mathml-text-integration-point)
///
/// "A node is a MathML text integration point if it is one of the following
/// elements: A MathML mi element, A MathML mo element, A MathML mn element,
/// A MathML ms element, A MathML mtext element"
#[must_use]
pub fn is_mathml_text_integration_point<H>(node: &StackNode<H>) -> bool {
    node.namespace == Namespace::MathMl && [MI, MO, MN, MS, MTEXT].contains(&node.name)
}

/// Whether an `annotation-xml` start tag makes an HTML integration point.
#[must_use]
pub fn is_html_annotation_xml(name: &ElementName, attributes: &HtmlAttributes) -> bool {
    *name == ANNOTATION_XML
        && attributes.value_of(&ENCODING).is_some_and(|encoding| {
            encoding.eq_ignore_ascii_case("text/html")
                || encoding.eq_ignore_ascii_case("application/xhtml+xml")
        })
}

/// "A start tag whose tag name is neither "mglyph" nor "malignmark""
#[must_use]
pub fn is_mglyph_or_malignmark(name: &ElementName) -> bool {
    *name == MGLYPH || *name == MALIGNMARK
}

/// The local name an element gets in `namespace`.
///
/// "If the adjusted current node is an element in the SVG namespace, and
/// the token's tag name is one of the ones in the first column of the
/// following table, change the tag name to the name given in the
/// corresponding cell in the second column."
#[must_use]
pub fn local_name_in(name: &ElementName, namespace: Namespace) -> &str {
    match namespace {
        Namespace::Svg => name.camel_case_name(),
        Namespace::Html | Namespace::MathMl => name.name(),
    }
}

/// The attribute projection used on elements of `namespace`.
#[must_use]
pub const fn attribute_mode_for(namespace: Namespace) -> AttributeMode {
    match namespace {
        Namespace::Html => AttributeMode::Html,
        Namespace::MathMl => AttributeMode::MathMl,
        Namespace::Svg => AttributeMode::Svg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::NameTable;
    use crate::names::element::{CLIPPATH, DIV, FONT, G, SPAN, SVG};

    #[test]
    fn test_breakout_tags() {
        let empty = HtmlAttributes::new(AttributeMode::Html);
        assert!(is_breakout_start_tag(&DIV, &empty));
        assert!(is_breakout_start_tag(&SPAN, &empty));
        assert!(!is_breakout_start_tag(&G, &empty));
        assert!(!is_breakout_start_tag(&SVG, &empty));
        assert!(!is_breakout_start_tag(&FONT, &empty));

        let mut names = NameTable::new();
        let mut colored = HtmlAttributes::new(AttributeMode::Html);
        colored.add(names.attribute("color"), "red".to_string());
        assert!(is_breakout_start_tag(&FONT, &colored));

        let section = names.element("section");
        assert!(!is_breakout_start_tag(&section, &empty));
    }

    #[test]
    fn test_svg_local_names_are_camel_cased() {
        assert_eq!(local_name_in(&CLIPPATH, Namespace::Svg), "clipPath");
        assert_eq!(local_name_in(&CLIPPATH, Namespace::MathMl), "clippath");
    }

    #[test]
    fn test_annotation_xml_encoding() {
        let mut names = NameTable::new();
        let mut attrs = HtmlAttributes::new(AttributeMode::Html);
        assert!(!is_html_annotation_xml(&ANNOTATION_XML, &attrs));
        attrs.add(names.attribute("encoding"), "Text/HTML".to_string());
        assert!(is_html_annotation_xml(&ANNOTATION_XML, &attrs));
    }

    #[test]
    fn test_integration_points() {
        use crate::names::element::{FOREIGNOBJECT, TITLE};
        assert!(StackNode::new(FOREIGNOBJECT, Namespace::Svg, 0).html_integration_point);
        assert!(!StackNode::new(TITLE, Namespace::Html, 0).html_integration_point);
        assert!(is_mathml_text_integration_point(&StackNode::new(
            MTEXT,
            Namespace::MathMl,
            0
        )));
    }
}
