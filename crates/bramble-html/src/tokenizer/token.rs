use core::fmt;

use bramble_common::{ErrorSink, FatalError, Location};
use strum_macros::Display;

use crate::names::{ElementName, HtmlAttributes};

/// The content model flag.
///
/// Decides whether `<` starts markup. The tree builder sets it after a start
/// tag whose content is text, and the tokenizer resets it to
/// [`ContentModel::Pcdata`] on every end tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum ContentModel {
    /// Normal markup.
    #[default]
    #[strum(serialize = "PCDATA")]
    Pcdata,
    /// Text with character references (`title`, `textarea`).
    #[strum(serialize = "RCDATA")]
    Rcdata,
    /// Text without character references (`style`, `script`, `xmp`, ...).
    #[strum(serialize = "CDATA")]
    Cdata,
    /// Everything up to end of input is text.
    #[strum(serialize = "PLAINTEXT")]
    Plaintext,
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "Start and end tag tokens have a tag name, a self-closing flag, and a
/// list of attributes, each of which has a name and a value."
#[derive(Debug, Clone)]
pub struct Tag {
    /// "a tag name"
    pub name: ElementName,
    /// "a list of attributes"
    pub attributes: HtmlAttributes,
    /// "a self-closing flag"
    pub self_closing: bool,
}

impl Tag {
    /// A tag with no attributes.
    #[must_use]
    pub const fn new(name: ElementName) -> Self {
        Self {
            name,
            attributes: HtmlAttributes::new(crate::names::AttributeMode::Html),
            self_closing: false,
        }
    }
}

/// "DOCTYPE tokens have a name, a public identifier, a system identifier,
/// and a force-quirks flag. When a DOCTYPE token is created, its name,
/// public identifier, and system identifier must be marked as missing
/// (which is a distinct state from the empty string), and the force-quirks
/// flag must be set to off (its other state is on)."
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doctype {
    /// "a name"
    pub name: Option<String>,
    /// "a public identifier"
    pub public_id: Option<String>,
    /// "a system identifier"
    pub system_id: Option<String>,
    /// "a force-quirks flag"
    pub force_quirks: bool,
}

/// What the token consumer wants the tokenizer to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkDirective {
    /// Keep going.
    #[default]
    Continue,
    /// Switch the content model flag, keyed on the tag just emitted.
    SwitchContentModel(ContentModel),
    /// The doctype was an HTML 4.01 one; report HTML4-only errors from now on.
    EnableHtml4Errors,
}

/// The consumer side of the tokenizer.
///
/// The tree builder implements it. Every method may fail with a
/// [`FatalError`] when a strict policy rejects the input, which unwinds out
/// of [`Tokenizer::feed`](super::Tokenizer::feed).
pub trait TokenSink {
    /// A start tag.
    ///
    /// # Errors
    ///
    /// A fatal policy violation.
    fn start_tag(&mut self, tag: Tag) -> Result<SinkDirective, FatalError>;

    /// An end tag.
    ///
    /// # Errors
    ///
    /// A fatal policy violation.
    fn end_tag(&mut self, tag: Tag) -> Result<(), FatalError>;

    /// A run of character data. Runs are coalesced but may be split at
    /// `feed` boundaries and around character references.
    ///
    /// # Errors
    ///
    /// A fatal policy violation.
    fn characters(&mut self, text: &str) -> Result<(), FatalError>;

    /// A comment. Only called when [`TokenSink::wants_comments`] is true.
    ///
    /// # Errors
    ///
    /// A fatal policy violation.
    fn comment(&mut self, text: &str) -> Result<(), FatalError>;

    /// A doctype.
    ///
    /// # Errors
    ///
    /// A fatal policy violation.
    fn doctype(&mut self, doctype: Doctype) -> Result<SinkDirective, FatalError>;

    /// End of input. Called once.
    ///
    /// # Errors
    ///
    /// A fatal policy violation.
    fn end_of_file(&mut self) -> Result<(), FatalError>;

    /// Whether comment tokens should be built at all.
    fn wants_comments(&self) -> bool {
        true
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// "If there is an adjusted current node and it is not an element in
    /// the HTML namespace"
    fn cdata_sections_allowed(&self) -> bool {
        false
    }

    /// The location of the token about to be delivered.
    fn set_location(&mut self, _location: Location) {}

    /// Where the tokenizer reports its own diagnostics.
    fn errors(&mut self) -> &mut dyn ErrorSink;
}

/// An owned token, as recorded by tests and tools.
#[derive(Debug, Clone)]
pub enum Token {
    /// A doctype.
    Doctype(Doctype),
    /// A start tag.
    StartTag(Tag),
    /// An end tag.
    EndTag(Tag),
    /// A run of characters.
    Characters(String),
    /// A comment.
    Comment(String),
    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype(doctype) => {
                write!(f, "DOCTYPE")?;
                if let Some(n) = &doctype.name {
                    write!(f, " {n}")?;
                }
                if let Some(pub_id) = &doctype.public_id {
                    write!(f, " PUBLIC \"{pub_id}\"")?;
                }
                if let Some(sys_id) = &doctype.system_id {
                    write!(f, " SYSTEM \"{sys_id}\"")?;
                }
                if doctype.force_quirks {
                    write!(f, " (force-quirks)")?;
                }
                Ok(())
            }
            Self::StartTag(tag) => {
                write!(f, "<{}", tag.name)?;
                for (name, value) in tag.attributes.iter() {
                    write!(f, " {name}=\"{value}\"")?;
                }
                if tag.self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag(tag) => write!(f, "</{}>", tag.name),
            Self::Comment(data) => write!(f, "<!--{data}-->"),
            Self::Characters(data) => write!(f, "{data:?}"),
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}
