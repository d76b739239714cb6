//! HTML5 tokenizer and tree builder for Bramble.
//!
//! # Scope
//!
//! This crate implements:
//! - **Name tables** - interned element and attribute names with the
//!   dispatch metadata the tree builder needs
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - PCDATA, RCDATA, CDATA and PLAINTEXT content models
//!   - DOCTYPE, comment, CDATA section and character reference handling
//!   - Incremental input: tokens do not depend on how the input is chunked
//! - **HTML Parser / Tree Builder** ([WHATWG § 13.2.6](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction))
//!   - The twenty insertion modes, foster parenting and the adoption agency
//!   - SVG and MathML subtrees
//!   - Fragment parsing ([§ 13.4](https://html.spec.whatwg.org/multipage/parsing.html#parsing-html-fragments))
//!
//! # Example
//!
//! ```
//! use bramble_html::{ParserConfig, parse_document};
//!
//! let output = parse_document("<!DOCTYPE html><p>Hello", &ParserConfig::default()).unwrap();
//! assert!(output.tree.body().is_some());
//! assert_eq!(output.errors().count(), 0);
//! ```

/// Parser options and XML violation policies.
pub mod config;
/// Interned element and attribute names.
pub mod names;
/// The tokenizer and tree builder wired together.
pub mod parse;
/// Tree construction.
pub mod parser;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use config::{DoctypeExpectation, ParserConfig, XmlViolationPolicy};
pub use parse::{HtmlParser, ParseOutput, parse_document, parse_fragment};
pub use parser::{InsertionMode, TreeBuilder, TreeSink, dump_tree, print_tree, tree_to_json};
pub use tokenizer::{Token, Tokenizer};
