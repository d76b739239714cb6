//! Tree construction.
//!
//! Implements [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
//! on top of the token stream, writing through a [`TreeSink`].

/// Shared algorithms: scopes, foster parenting, the adoption agency.
mod helpers;
/// End tag rules per insertion mode.
mod end_tag;
/// Start tag rules per insertion mode.
mod start_tag;
/// The tree builder and the tree construction dispatcher.
pub mod core;
/// [`TreeSink`] for [`bramble_dom::DomTree`] and tree dumps.
pub mod dom_sink;
/// SVG and MathML classification.
pub mod foreign;
/// Doctype classification and the document mode.
pub mod quirks;
/// The tree construction interface.
pub mod sink;
/// Stack and formatting list entries.
pub mod stack;

pub use self::core::{InsertionMode, TreeBuilder};
pub use dom_sink::{dump_tree, print_tree, tree_to_json};
pub use quirks::{DoctypeVerdict, classify_doctype};
pub use sink::TreeSink;
pub use stack::{FormattingEntry, StackNode};
