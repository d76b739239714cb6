//! Name tables and interning.
//!
//! Tag and attribute names are interned once per parse so the tree builder
//! compares small integer ids instead of strings. The built-in tables are
//! generated by `tools/gen_names.py`.

mod atom;
pub mod attribute;
mod attribute_table;
mod attributes;
pub mod element;
mod element_table;
mod interner;

pub use atom::Atom;
pub use attribute::{AttributeMode, AttributeName};
pub use attributes::HtmlAttributes;
pub use element::{ElementName, Group};
pub use interner::NameTable;

/// [Namespaces in XML 1.0 § 3](https://www.w3.org/TR/xml-names/#NT-NCName)
///
/// "NCName ::= Name - (Char* ':' Char*)   /* An XML Name, minus the ":" */"
#[must_use]
pub fn is_ncname(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_ncname_start(first) && chars.all(is_ncname_char)
}

/// [XML 1.0 § 2.3](https://www.w3.org/TR/xml/#NT-NameStartChar), without `:`.
const fn is_ncname_start(c: char) -> bool {
    matches!(c,
        'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}' | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' | '\u{10000}'..='\u{EFFFF}')
}

/// [XML 1.0 § 2.3](https://www.w3.org/TR/xml/#NT-NameChar), without `:`.
const fn is_ncname_char(c: char) -> bool {
    is_ncname_start(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ncname() {
        assert!(is_ncname("data-foo"));
        assert!(is_ncname("_x.y"));
        assert!(!is_ncname("xlink:href"));
        assert!(!is_ncname("1abc"));
        assert!(!is_ncname(""));
        assert!(!is_ncname("a\"b"));
        assert!(is_ncname("caf\u{E9}"));
    }
}
