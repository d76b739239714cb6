//! Attribute names and their per-namespace projections.
//!
//! [§ 13.2.6.1 Creating and inserting nodes](https://html.spec.whatwg.org/multipage/parsing.html#adjust-svg-attributes)
//!
//! The same attribute spelling maps to different local names and namespaces
//! depending on the element it lands on. An SVG element gets `viewBox` for
//! `viewbox`, a MathML element gets `definitionURL`, and foreign elements
//! move `xlink:*`, `xml:*` and `xmlns:*` into their namespaces. Rather
//! than re-parse the spelling, each interned [`AttributeName`] carries all
//! four projections and the attribute list picks one with its
//! [`AttributeMode`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use bramble_dom::AttributeNamespace;

use super::atom::Atom;
pub use super::attribute_table::*;
use super::is_ncname;

/// Which projection of an attribute name to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttributeMode {
    /// Attributes on HTML elements.
    #[default]
    Html = 0,
    /// Attributes on MathML elements.
    MathMl = 1,
    /// Attributes on SVG elements.
    Svg = 2,
    /// HTML elements, with `xml:lang` mapped onto `lang`.
    HtmlLang = 3,
}

impl AttributeMode {
    const fn index(self) -> usize {
        self as usize
    }
}

/// One row of the built-in attribute table.
#[derive(Debug)]
pub(crate) struct AttributeInfo {
    local: [&'static str; 4],
    qname: [&'static str; 4],
    namespace: [Option<AttributeNamespace>; 4],
    ncname: [bool; 4],
    xmlns: bool,
    id: bool,
    boolean: bool,
    case_folded: bool,
}

impl AttributeInfo {
    /// Same spelling and no namespace everywhere.
    pub(crate) const fn plain(name: &'static str) -> Self {
        Self {
            local: [name; 4],
            qname: [name; 4],
            namespace: [None; 4],
            ncname: [true; 4],
            xmlns: false,
            id: false,
            boolean: false,
            case_folded: false,
        }
    }

    /// Camel-cased on SVG elements only.
    pub(crate) const fn svg_camel(name: &'static str, camel: &'static str) -> Self {
        let mut info = Self::plain(name);
        info.local = [name, name, camel, name];
        info.qname = [name, name, camel, name];
        info
    }

    /// Camel-cased on MathML elements only.
    pub(crate) const fn math_camel(name: &'static str, camel: &'static str) -> Self {
        let mut info = Self::plain(name);
        info.local = [name, camel, name, name];
        info.qname = [name, camel, name, name];
        info
    }

    /// A prefixed name that moves into `namespace` on foreign elements.
    pub(crate) const fn colonified(
        namespace: AttributeNamespace,
        name: &'static str,
        suffix: &'static str,
    ) -> Self {
        let mut info = Self::plain(name);
        info.local = [name, suffix, suffix, name];
        info.namespace = [None, Some(namespace), Some(namespace), None];
        info.ncname = [false, true, true, false];
        info
    }

    /// `xmlns` and `xmlns:xlink`. Never NCNames.
    pub(crate) const fn xmlns(name: &'static str, foreign_local: &'static str) -> Self {
        let mut info = Self::plain(name);
        info.local = [name, foreign_local, foreign_local, name];
        info.namespace = [
            None,
            Some(AttributeNamespace::Xmlns),
            Some(AttributeNamespace::Xmlns),
            None,
        ];
        info.ncname = [false; 4];
        info.xmlns = true;
        info
    }

    /// In [`AttributeMode::HtmlLang`], surface as a plain `lang`.
    pub(crate) const fn mapped_to_lang(mut self) -> Self {
        self.local[AttributeMode::HtmlLang.index()] = "lang";
        self.qname[AttributeMode::HtmlLang.index()] = "lang";
        self.ncname[AttributeMode::HtmlLang.index()] = true;
        self
    }

    pub(crate) const fn id(mut self) -> Self {
        self.id = true;
        self
    }

    pub(crate) const fn boolean(mut self) -> Self {
        self.boolean = true;
        self
    }

    pub(crate) const fn case_folded(mut self) -> Self {
        self.case_folded = true;
        self
    }
}

/// An interned attribute name.
///
/// Equality is by interned id. The `ncname` and `xmlns` fields only matter
/// for custom names; built-in names read their flags from the table.
#[derive(Clone)]
pub struct AttributeName {
    id: u32,
    local: Atom,
    ncname: bool,
    xmlns: bool,
}

impl AttributeName {
    pub(crate) const fn builtin(id: u32, name: &'static str) -> Self {
        Self {
            id,
            local: Atom::Static(name),
            ncname: false,
            xmlns: false,
        }
    }

    /// A name first seen in the input. `xmlns:` prefixed custom names are
    /// flagged as xmlns-like and never count as NCNames.
    pub(crate) fn custom(id: u32, name: Rc<str>) -> Self {
        let xmlns = name.starts_with("xmlns:");
        let ncname = !xmlns && is_ncname(&name);
        Self {
            id,
            local: Atom::Dynamic(name),
            ncname,
            xmlns,
        }
    }

    /// Look up a built-in name by its lowercase spelling.
    #[must_use]
    pub fn lookup_builtin(name: &str) -> Option<Self> {
        let index = ATTRIBUTES
            .binary_search_by(|a| a.qname[AttributeMode::Html.index()].cmp(name))
            .ok()?;
        let id = u32::try_from(index).ok()?;
        Some(Self::builtin(id, ATTRIBUTES[index].qname[0]))
    }

    fn info(&self) -> Option<&'static AttributeInfo> {
        ATTRIBUTES.get(self.id as usize)
    }

    /// The interned id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The spelling as it appeared in the (lowercased) input.
    #[must_use]
    pub fn name(&self) -> &str {
        self.local.as_str()
    }

    /// The local name in the given mode.
    #[must_use]
    pub fn local(&self, mode: AttributeMode) -> &str {
        self.info()
            .map_or_else(|| self.local.as_str(), |info| info.local[mode.index()])
    }

    /// The qualified name in the given mode.
    #[must_use]
    pub fn qname(&self, mode: AttributeMode) -> &str {
        self.info()
            .map_or_else(|| self.local.as_str(), |info| info.qname[mode.index()])
    }

    /// The namespace in the given mode. `None` is no namespace.
    #[must_use]
    pub fn namespace(&self, mode: AttributeMode) -> Option<AttributeNamespace> {
        self.info().and_then(|info| info.namespace[mode.index()])
    }

    /// Whether the local name in the given mode is an XML NCName.
    #[must_use]
    pub fn is_ncname(&self, mode: AttributeMode) -> bool {
        self.info()
            .map_or(self.ncname, |info| info.ncname[mode.index()])
    }

    /// Whether this is `xmlns` or an `xmlns:` prefixed name.
    #[must_use]
    pub fn is_xmlns(&self) -> bool {
        self.info().map_or(self.xmlns, |info| info.xmlns)
    }

    /// Whether the attribute has ID type (only `id`).
    #[must_use]
    pub fn is_id(&self) -> bool {
        self.info().is_some_and(|info| info.id)
    }

    /// Whether HTML 4 treats the attribute as boolean (`checked`, `selected`, ...).
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        self.info().is_some_and(|info| info.boolean)
    }

    /// Whether HTML 4 compares the attribute's value case-insensitively.
    #[must_use]
    pub fn is_case_folded(&self) -> bool {
        self.info().is_some_and(|info| info.case_folded)
    }

    /// Whether the name was first seen in the input rather than built in.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.id >= BUILTIN_ATTRIBUTE_COUNT
    }
}

impl PartialEq for AttributeName {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AttributeName {}

impl Hash for AttributeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name())
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(ATTRIBUTES.windows(2).all(|w| w[0].qname[0] < w[1].qname[0]));
    }

    #[test]
    fn test_svg_projection_camel_cases() {
        assert_eq!(VIEWBOX.local(AttributeMode::Html), "viewbox");
        assert_eq!(VIEWBOX.local(AttributeMode::Svg), "viewBox");
        assert_eq!(VIEWBOX.local(AttributeMode::MathMl), "viewbox");
        assert_eq!(DEFINITIONURL.local(AttributeMode::MathMl), "definitionURL");
    }

    #[test]
    fn test_xlink_moves_into_namespace_on_foreign_elements() {
        assert_eq!(XLINK_HREF.namespace(AttributeMode::Html), None);
        assert_eq!(
            XLINK_HREF.namespace(AttributeMode::Svg),
            Some(AttributeNamespace::XLink)
        );
        assert_eq!(XLINK_HREF.local(AttributeMode::Svg), "href");
        assert!(!XLINK_HREF.is_ncname(AttributeMode::Html));
        assert!(XLINK_HREF.is_ncname(AttributeMode::MathMl));
    }

    #[test]
    fn test_xml_lang_in_html_lang_mode() {
        assert_eq!(XML_LANG.local(AttributeMode::Html), "xml:lang");
        assert_eq!(XML_LANG.local(AttributeMode::HtmlLang), "lang");
        assert_eq!(XML_LANG.namespace(AttributeMode::HtmlLang), None);
    }

    #[test]
    fn test_xmlns_flags() {
        assert!(XMLNS.is_xmlns());
        assert!(XMLNS_XLINK.is_xmlns());
        assert!(!XMLNS.is_ncname(AttributeMode::Html));
        let custom = AttributeName::custom(BUILTIN_ATTRIBUTE_COUNT, Rc::from("xmlns:foo"));
        assert!(custom.is_xmlns());
        assert!(!custom.is_ncname(AttributeMode::Html));
        assert!(custom.is_custom());
    }

    #[test]
    fn test_boolean_and_case_folded() {
        assert!(CHECKED.is_boolean());
        assert!(TYPE.is_case_folded());
        assert!(!TYPE.is_boolean());
        assert!(ID.is_id());
    }
}
