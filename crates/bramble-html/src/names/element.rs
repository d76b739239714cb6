//! Element names.
//!
//! [§ 13.2.4.2 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)
//!
//! Every tag name the tokenizer produces is interned into an [`ElementName`].
//! Built-in names carry the metadata the tree builder dispatches on: a
//! [`Group`] and the special, scoping and foster-parenting flags.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use strum_macros::Display;

use super::atom::Atom;
pub use super::element_table::*;

/// The dispatch family of an element name.
///
/// Names in the same group get the same treatment from every insertion
/// mode, so the tree builder matches on the group first and only compares
/// concrete names where a rule singles one out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Group {
    /// `a`
    A,
    /// `area`, `basefont`, `bgsound`, `param`, `spacer`, `wbr`
    Area,
    /// `b`, `big`, `em`, `font`, `i`, `s`, `small`, `strike`, `strong`, `tt`, `u`
    B,
    /// `base`
    Base,
    /// `body`
    Body,
    /// `br`
    Br,
    /// `button`
    Button,
    /// `caption`
    Caption,
    /// `col`
    Col,
    /// `colgroup`
    Colgroup,
    /// `dd`, `dt`
    Dd,
    /// `div`, `blockquote`, `center`, `menu` and the sectioning elements
    Div,
    /// `fieldset`, `address`, `dir`
    Fieldset,
    /// `form`
    Form,
    /// `frame`
    Frame,
    /// `frameset`
    Frameset,
    /// `head`
    Head,
    /// `h1` through `h6`
    Heading,
    /// `hr`
    Hr,
    /// `html`
    Html,
    /// `iframe`, `noembed`
    Iframe,
    /// `image`
    Image,
    /// `img`, `embed`
    Img,
    /// `input`
    Input,
    /// `isindex`
    Isindex,
    /// `li`
    Li,
    /// `link`
    Link,
    /// `math`
    Math,
    /// `meta`
    Meta,
    /// `nobr`
    Nobr,
    /// `noframes`
    Noframes,
    /// `noscript`
    Noscript,
    /// `object`, `marquee`, `applet`
    Object,
    /// `ul`, `ol`, `dl`
    Ol,
    /// `optgroup`
    Optgroup,
    /// `option`
    Option,
    /// Everything without a dedicated rule, custom names included.
    Other,
    /// `p`
    P,
    /// `plaintext`
    Plaintext,
    /// `pre`, `listing`
    Pre,
    /// `code`, `ruby`, `span`, `sub`, `sup`, `var`
    Ruby,
    /// `script`
    Script,
    /// `select`
    Select,
    /// `style`
    Style,
    /// `svg`
    Svg,
    /// `table`
    Table,
    /// `tbody`, `thead`, `tfoot`
    Tbody,
    /// `td`, `th`
    Td,
    /// `textarea`
    Textarea,
    /// `title`
    Title,
    /// `tr`
    Tr,
    /// `xmp`
    Xmp,
}

/// One row of the built-in element table.
#[derive(Debug)]
pub(crate) struct ElementInfo {
    pub(crate) name: &'static str,
    pub(crate) camel_case_name: &'static str,
    pub(crate) group: Group,
    pub(crate) special: bool,
    pub(crate) scoping: bool,
    pub(crate) foster_parenting: bool,
}

impl ElementInfo {
    pub(crate) const fn new(
        name: &'static str,
        camel_case_name: &'static str,
        group: Group,
        special: bool,
        scoping: bool,
        foster_parenting: bool,
    ) -> Self {
        Self {
            name,
            camel_case_name,
            group,
            special,
            scoping,
            foster_parenting,
        }
    }
}

/// An interned element name.
///
/// Two names are equal exactly when they have the same interned id, so
/// comparing against the built-in constants is an integer comparison.
#[derive(Clone)]
pub struct ElementName {
    id: u32,
    local: Atom,
}

impl ElementName {
    pub(crate) const fn builtin(id: u32, name: &'static str) -> Self {
        Self {
            id,
            local: Atom::Static(name),
        }
    }

    pub(crate) const fn custom(id: u32, name: Rc<str>) -> Self {
        Self {
            id,
            local: Atom::Dynamic(name),
        }
    }

    /// Look up a built-in name by its lowercase spelling.
    #[must_use]
    pub fn lookup_builtin(name: &str) -> Option<Self> {
        let index = ELEMENTS.binary_search_by(|e| e.name.cmp(name)).ok()?;
        let id = u32::try_from(index).ok()?;
        Some(Self::builtin(id, ELEMENTS[index].name))
    }

    fn info(&self) -> Option<&'static ElementInfo> {
        ELEMENTS.get(self.id as usize)
    }

    /// The interned id. Built-in ids index the sorted table.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The lowercase spelling, used for HTML and MathML elements.
    #[must_use]
    pub fn name(&self) -> &str {
        self.local.as_str()
    }

    /// The spelling used when the element is created in the SVG namespace
    /// (`foreignObject`, `clipPath`, ...).
    #[must_use]
    pub fn camel_case_name(&self) -> &str {
        self.info()
            .map_or_else(|| self.local.as_str(), |info| info.camel_case_name)
    }

    /// The dispatch group. Custom names are always [`Group::Other`].
    #[must_use]
    pub fn group(&self) -> Group {
        self.info().map_or(Group::Other, |info| info.group)
    }

    /// [§ 13.2.4.2](https://html.spec.whatwg.org/multipage/parsing.html#special)
    /// "The following elements have varying levels of special parsing rules"
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.info().is_some_and(|info| info.special)
    }

    /// Whether the element bounds the "has an element in scope" searches.
    #[must_use]
    pub fn is_scoping(&self) -> bool {
        self.info().is_some_and(|info| info.scoping)
    }

    /// Whether content inserted while this is the current node gets foster
    /// parented (`table`, `tbody`, `tfoot`, `thead`, `tr`).
    #[must_use]
    pub fn is_foster_parenting(&self) -> bool {
        self.info().is_some_and(|info| info.foster_parenting)
    }

    /// Whether the name was first seen in the input rather than built in.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.id >= BUILTIN_ELEMENT_COUNT
    }
}

impl PartialEq for ElementName {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ElementName {}

impl Hash for ElementName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name())
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(ELEMENTS.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn test_constants_match_table() {
        assert_eq!(ElementName::lookup_builtin("table"), Some(TABLE));
        assert_eq!(ElementName::lookup_builtin("html").map(|n| n.id()), Some(HTML.id()));
        assert_eq!(TABLE.name(), "table");
        assert!(TABLE.is_scoping());
        assert!(TABLE.is_foster_parenting());
        assert_eq!(FOREIGNOBJECT.camel_case_name(), "foreignObject");
        assert_eq!(H3.group(), Group::Heading);
        assert!(ElementName::lookup_builtin("frobnicate").is_none());
    }
}
