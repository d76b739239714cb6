//! HTML tokenizer module.
//!
//! Implements [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard, fed incrementally.

/// Numeric character references per § 13.2.5.75.
pub mod character_reference;
mod entity_table;
/// Helper methods for tokenizer state transitions and token emission.
pub mod helpers;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// Token types and the consumer trait.
pub mod token;
/// HTML tokenizer state machine implementation.
pub mod core;

pub use self::core::{Tokenizer, TokenizerState};
pub use token::{ContentModel, Doctype, SinkDirective, Tag, Token, TokenSink};
