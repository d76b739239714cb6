//! Interned name storage.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// The spelling behind an interned name.
///
/// Built-in names point at static strings; names discovered while parsing
/// share one reference-counted allocation per spelling.
#[derive(Clone)]
pub enum Atom {
    /// A spelling from the built-in tables.
    Static(&'static str),
    /// A spelling first seen in the input.
    Dynamic(Rc<str>),
}

impl Atom {
    /// The spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Dynamic(s) => s,
        }
    }
}

impl Deref for Atom {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
