//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input character checks applied before a character reaches a state
//! - Token emission ("Emit the current token")
//! - Diagnostics and the XML violation policies
//! - Attribute completion (duplicates, NCName checks, `xmlns`)

use bramble_common::{Diagnostic, FatalError, Severity};

use super::character_reference::{is_noncharacter, is_private_use};
use super::core::{Tokenizer, TokenizerState};
use super::token::{ContentModel, SinkDirective, Tag, TokenSink};
use crate::config::XmlViolationPolicy;
use crate::names::{self, AttributeMode, HtmlAttributes};

/// Elements whose start tag may end in `/>` without an error.
const VOID_ELEMENTS: [&str; 11] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
];

const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

const NON_XML_CHARACTER: &str = "This document is not mappable to XML 1.0 without data loss due to a character that is not a legal XML 1.0 character.";

const PRIVATE_USE: &str = "Document uses the Unicode Private Use Area(s), which should not be used in publicly exchanged documents. (Charmod C073)";

// =============================================================================
// State Transition Helpers
// =============================================================================

impl Tokenizer {
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Switch to the X state"
    ///
    /// The next character will be consumed on the next iteration of the main
    /// loop.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }

    /// The text state a content model flag selects.
    pub(super) fn text_state_for(&self, model: ContentModel) -> TokenizerState {
        match model {
            ContentModel::Pcdata => TokenizerState::Data,
            ContentModel::Rcdata => TokenizerState::RCDATA,
            ContentModel::Cdata
                if self
                    .content_model_element
                    .as_ref()
                    .is_some_and(|e| *e == names::element::SCRIPT) =>
            {
                TokenizerState::ScriptData
            }
            ContentModel::Cdata => TokenizerState::RAWTEXT,
            ContentModel::Plaintext => TokenizerState::PLAINTEXT,
        }
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    ///
    /// "consumed as part of an attribute"
    pub(super) const fn is_consumed_as_part_of_attribute(&self) -> bool {
        matches!(
            self.return_state,
            TokenizerState::AttributeValueDoubleQuoted
                | TokenizerState::AttributeValueSingleQuoted
                | TokenizerState::AttributeValueUnquoted
        )
    }

    /// Whether the current state reads text or attribute values, where the
    /// XML character checks apply.
    const fn in_content(&self) -> bool {
        use TokenizerState as S;
        matches!(
            self.state,
            S::Data
                | S::RCDATA
                | S::RAWTEXT
                | S::PLAINTEXT
                | S::ScriptData
                | S::ScriptDataEscaped
                | S::ScriptDataEscapedDash
                | S::ScriptDataEscapedDashDash
                | S::ScriptDataDoubleEscaped
                | S::ScriptDataDoubleEscapedDash
                | S::ScriptDataDoubleEscapedDashDash
                | S::AttributeValueDoubleQuoted
                | S::AttributeValueSingleQuoted
                | S::AttributeValueUnquoted
                | S::CharacterReference
                | S::NamedCharacterReference
                | S::CDATASection
        )
    }

    /// [§ 12.1.4 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace),
    /// plus U+000B LINE TABULATION, which tags also treat as a separator.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\x0B' | '\x0C')
    }
}

// =============================================================================
// Input Character Checks
// =============================================================================

impl Tokenizer {
    /// [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
    ///
    /// Checks a normalized input character before the current state sees
    /// it. U+0000 becomes U+FFFD everywhere; control characters and
    /// non-characters in content go through the configured policies.
    pub(super) fn check_input_character(
        &mut self,
        c: char,
        sink: &mut dyn TokenSink,
    ) -> Result<char, FatalError> {
        match c {
            '\0' => {
                self.error(sink, "Found U+0000 in the character stream.");
                Ok('\u{FFFD}')
            }
            '\x0B' | '\x0C' if self.in_content() => {
                let alter =
                    self.xml_violation(sink, self.policies.content_space, NON_XML_CHARACTER)?;
                Ok(if alter { ' ' } else { c })
            }
            _ if u32::from(c) > 0xFFFF => {
                if is_noncharacter(c) {
                    self.warning(sink, "Astral non-character.");
                }
                if is_private_use(c) {
                    self.warn_about_private_use(sink);
                }
                Ok(c)
            }
            _ if self.in_content()
                && ((c < ' ' && c != '\t' && c != '\n') || is_noncharacter(c)) =>
            {
                let alter =
                    self.xml_violation(sink, self.policies.content_non_xml_char, NON_XML_CHARACTER)?;
                Ok(if alter { '\u{FFFD}' } else { c })
            }
            _ => {
                if is_private_use(c) {
                    self.warn_about_private_use(sink);
                }
                Ok(c)
            }
        }
    }

    /// Warns about Private Use Area characters, once per document.
    pub(super) fn warn_about_private_use(&mut self, sink: &mut dyn TokenSink) {
        if !self.warned_about_private_use {
            self.warned_about_private_use = true;
            self.warning(sink, PRIVATE_USE);
        }
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

impl Tokenizer {
    /// Report a recoverable parse error at the current position.
    pub(super) fn error(&self, sink: &mut dyn TokenSink, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(Severity::Error, message, self.location());
        sink.errors().report_error(&diagnostic);
    }

    /// Report a warning at the current position.
    pub(super) fn warning(&self, sink: &mut dyn TokenSink, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(Severity::Warning, message, self.location());
        sink.errors().report_warning(&diagnostic);
    }

    /// Report a fatal error and build the error to return.
    pub(super) fn fatal(&self, sink: &mut dyn TokenSink, message: impl Into<String>) -> FatalError {
        let error = FatalError::new(message, self.location());
        sink.errors().report_fatal(&error.to_diagnostic());
        error
    }

    /// Apply an XML violation policy. Returns whether the caller should
    /// alter the infoset.
    pub(super) fn xml_violation(
        &self,
        sink: &mut dyn TokenSink,
        policy: XmlViolationPolicy,
        message: &str,
    ) -> Result<bool, FatalError> {
        match policy {
            XmlViolationPolicy::Fatal => Err(self.fatal(sink, message)),
            XmlViolationPolicy::AlterInfoset => {
                self.warning(sink, message);
                Ok(true)
            }
            XmlViolationPolicy::Allow => {
                self.warning(sink, message);
                Ok(false)
            }
        }
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl Tokenizer {
    /// "Emit the current input character as a character token."
    ///
    /// Characters are buffered into one run and handed over by
    /// [`Tokenizer::flush_text`].
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.mark_text_start();
        self.text.push(c);
    }

    pub(super) fn emit_characters(&mut self, s: &str) {
        self.mark_text_start();
        self.text.push_str(s);
    }

    /// A run is located at its first character, wherever `feed` happens
    /// to split it.
    fn mark_text_start(&mut self) {
        if self.text.is_empty() {
            self.text_start = self.location();
        }
    }

    /// Deliver the buffered character run, if any.
    pub(super) fn flush_text(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        if self.text.is_empty() {
            return Ok(());
        }
        sink.set_location(self.text_start);
        let text = std::mem::take(&mut self.text);
        sink.characters(&text)
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    ///
    /// "If the character reference was consumed as part of an attribute,
    /// then append each character to the current attribute's value.
    /// Otherwise, emit each character as a character token."
    pub(super) fn emit_or_append(&mut self, s: &str) {
        if self.is_consumed_as_part_of_attribute() {
            self.attribute_value.push_str(s);
        } else {
            self.emit_characters(s);
        }
    }

    /// "Flush code points consumed as a character reference"
    pub(super) fn flush_code_points_consumed_as_character_reference(&mut self) {
        let buffer = std::mem::take(&mut self.temporary_buffer);
        self.emit_or_append(&buffer);
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof_token(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        self.flush_text(sink)?;
        self.eof_emitted = true;
        sink.set_location(self.location());
        sink.end_of_file()
    }

    /// "Create a new start tag token" / "Create a new end tag token"
    pub(super) fn start_new_tag(&mut self, end_tag: bool) {
        self.tag_name.clear();
        self.end_tag = end_tag;
        self.self_closing = false;
        self.attributes = HtmlAttributes::new(AttributeMode::Html);
        self.current_attribute = None;
    }

    /// "Start a new attribute in the current tag token."
    pub(super) fn start_new_attribute(&mut self) {
        self.attribute_name.clear();
        self.attribute_value.clear();
        self.current_attribute = None;
    }

    /// "Emit the current tag token."
    ///
    /// An end tag resets the content model flag. A start tag hands the
    /// tag to the sink, which may switch the content model in reply.
    pub(super) fn emit_current_tag(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        self.switch_to(TokenizerState::Data);
        if self.policies.name != XmlViolationPolicy::Allow && !names::is_ncname(&self.tag_name) {
            let kind = if self.end_tag { "End" } else { "Start" };
            let message = format!(
                "{kind} tag \u{201C}{}\u{201D} has a non-NCName name.",
                self.tag_name
            );
            if self.policies.name == XmlViolationPolicy::Fatal {
                return Err(self.fatal(sink, message));
            }
            self.warning(sink, format!("{message} Ignoring token."));
            return Ok(());
        }

        self.flush_text(sink)?;
        sink.set_location(self.location());
        let name = self.names.element(&self.tag_name);
        let attributes = std::mem::take(&mut self.attributes);

        if self.end_tag {
            self.content_model = ContentModel::Pcdata;
            self.content_model_element = None;
            if !attributes.is_empty() {
                self.error(sink, "End tag had attributes.");
            }
            return sink.end_tag(Tag {
                name,
                attributes: HtmlAttributes::new(AttributeMode::Html),
                self_closing: false,
            });
        }

        let directive = sink.start_tag(Tag {
            name: name.clone(),
            attributes,
            self_closing: self.self_closing,
        })?;
        match directive {
            SinkDirective::Continue => {}
            SinkDirective::SwitchContentModel(model) => {
                self.set_content_model(model, Some(name));
            }
            SinkDirective::EnableHtml4Errors => self.html4 = true,
        }
        Ok(())
    }

    /// "Emit the current DOCTYPE token."
    pub(super) fn emit_doctype(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        self.flush_text(sink)?;
        sink.set_location(self.location());
        let doctype = std::mem::take(&mut self.doctype);
        if sink.doctype(doctype)? == SinkDirective::EnableHtml4Errors {
            self.html4 = true;
        }
        Ok(())
    }

    /// "Emit the comment token."
    pub(super) fn emit_comment(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        if self.comment_pending_hyphen {
            self.comment_pending_hyphen = false;
            self.comment.push('-');
        }
        let comment = std::mem::take(&mut self.comment);
        if !self.wants_comments {
            return Ok(());
        }
        self.flush_text(sink)?;
        sink.set_location(self.location());
        sink.comment(&comment)
    }

    /// "Append the current input character to the comment token's data."
    ///
    /// Two adjacent hyphens cannot appear in an XML comment, so a hyphen is
    /// held back until the next character shows whether it starts a `--`.
    pub(super) fn append_to_comment(
        &mut self,
        c: char,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        if self.comment_pending_hyphen && c == '-' {
            let alter = self.xml_violation(
                sink,
                self.policies.comment,
                "This document is not mappable to XML 1.0 without data loss due to \u{201C}--\u{201D} in a comment.",
            )?;
            if self.wants_comments {
                self.comment.push('-');
                if alter {
                    self.comment.push(' ');
                }
            }
            return Ok(());
        }
        if self.comment_pending_hyphen {
            self.comment_pending_hyphen = false;
            if self.wants_comments {
                self.comment.push('-');
            }
        }
        if c == '-' {
            self.comment_pending_hyphen = true;
        } else if self.wants_comments {
            self.comment.push(c);
        }
        Ok(())
    }

    pub(super) fn append_str_to_comment(
        &mut self,
        s: &str,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        for c in s.chars() {
            self.append_to_comment(c, sink)?;
        }
        Ok(())
    }
}

// =============================================================================
// RCDATA/RAWTEXT/Script Data Helpers
// =============================================================================

impl Tokenizer {
    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    ///
    /// "An appropriate end tag token is an end tag token whose tag name
    /// matches the tag name of the last start tag to have been emitted from
    /// this tokenizer, if any."
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        self.content_model_element
            .as_ref()
            .is_some_and(|element| element.name() == self.tag_name)
    }

    /// Reports an `</` in raw text that turned out not to be the closing tag.
    pub(super) fn report_unclosed_text_end_tag(&self, sink: &mut dyn TokenSink) {
        let Some(element) = &self.content_model_element else {
            return;
        };
        let kind = if self.content_model == ContentModel::Rcdata {
            "RCDATA"
        } else {
            "CDATA"
        };
        if self.html4 {
            if element.name() != "iframe" {
                self.error(
                    sink,
                    format!(
                        "{kind} element \u{201C}{element}\u{201D} contained the string \u{201C}</\u{201D}, but it was not the start of the end tag. (HTML4-only error)"
                    ),
                );
            }
        } else {
            self.warning(
                sink,
                format!(
                    "{kind} element \u{201C}{element}\u{201D} contained the string \u{201C}</\u{201D}, but this did not close the element."
                ),
            );
        }
    }
}

// =============================================================================
// Attribute Helpers
// =============================================================================

impl Tokenizer {
    /// Whether the current tag is one of the void elements.
    pub(super) fn current_is_void(&self) -> bool {
        VOID_ELEMENTS.binary_search(&self.tag_name.as_str()).is_ok()
    }

    /// Foreign elements may close themselves, and so may the `svg` and
    /// `math` tags that open foreign content.
    fn may_self_close_foreign(&self, sink: &dyn TokenSink) -> bool {
        sink.cdata_sections_allowed() || matches!(self.tag_name.as_str(), "svg" | "math")
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    ///
    /// Reports a `/` inside a tag unless it closes a void start tag.
    /// `closes_tag` is whether the `/` is followed by `>`.
    pub(super) fn parse_error_unless_permitted_slash(
        &self,
        sink: &mut dyn TokenSink,
        closes_tag: bool,
    ) {
        if self.end_tag {
            self.error(sink, "Stray \u{201C}/\u{201D} in an end tag.");
        } else if !closes_tag {
            self.error(sink, "Stray \u{201C}/\u{201D} in tag.");
        } else if self.html4 {
            self.error(
                sink,
                "Stray \u{201C}/\u{201D} in tag. The \u{201C}/>\u{201D} syntax is not permitted in HTML4. (HTML4-only error)",
            );
        } else if !self.current_is_void() && !self.may_self_close_foreign(sink) {
            self.error(
                sink,
                "Stray \u{201C}/\u{201D} in tag. The \u{201C}/>\u{201D} syntax is only permitted on void elements.",
            );
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "When the user agent leaves the attribute name state (and before
    /// emitting the tag token, if appropriate), the complete attribute's
    /// name must be compared to the other attributes on the same token; if
    /// there is already an attribute on the token with the exact same name,
    /// then this is a duplicate-attribute parse error and the new attribute
    /// must be removed from the token."
    pub(super) fn attribute_name_complete(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        let name = self.names.attribute(&self.attribute_name);
        self.current_attribute = None;
        if self.attributes.contains(&name) {
            self.error(
                sink,
                format!("Duplicate attribute \u{201C}{}\u{201D}.", self.attribute_name),
            );
            return Ok(());
        }
        if self.policies.name != XmlViolationPolicy::Allow && !names::is_ncname(&self.attribute_name)
        {
            let message = format!(
                "Attribute name \u{201C}{}\u{201D} is not an NCName.",
                self.attribute_name
            );
            if self.policies.name == XmlViolationPolicy::Fatal {
                return Err(self.fatal(sink, message));
            }
            self.warning(sink, format!("{message} Ignoring the attribute."));
            return Ok(());
        }
        self.current_attribute = Some(name);
        Ok(())
    }

    fn check_meta_charset(&self, sink: &mut dyn TokenSink) {
        if self.meta_boundary_passed()
            && self.attribute_name == "charset"
            && self.tag_name == "meta"
        {
            self.error(
                sink,
                "A \u{201C}charset\u{201D} attribute on a \u{201C}meta\u{201D} element found after the first 512 bytes.",
            );
        }
    }

    /// Add the current attribute with no value (`<input disabled>`).
    pub(super) fn add_attribute_without_value(&mut self, sink: &mut dyn TokenSink) {
        self.check_meta_charset(sink);
        let Some(name) = self.current_attribute.take() else {
            return;
        };
        let value = if self.html4 {
            if name.is_boolean() {
                if self.policies.html4_xhtml1_compat {
                    self.attribute_name.clone()
                } else {
                    String::new()
                }
            } else {
                self.error(
                    sink,
                    "Attribute value omitted for a non-boolean attribute. (HTML4-only error.)",
                );
                String::new()
            }
        } else {
            if self.attribute_name == "src" || self.attribute_name == "href" {
                self.warning(
                    sink,
                    format!(
                        "Attribute \u{201C}{}\u{201D} without an explicit value seen. The attribute may be dropped by IE7.",
                        self.attribute_name
                    ),
                );
            }
            String::new()
        };
        self.attributes.add(name, value);
    }

    /// Add the current attribute with the value collected so far.
    pub(super) fn add_attribute_with_value(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        self.check_meta_charset(sink);
        let mut value = std::mem::take(&mut self.attribute_value);
        let Some(name) = self.current_attribute.take() else {
            return Ok(());
        };
        if !self.end_tag {
            if self.attribute_name == "xmlns" {
                if self.tag_name == "html" && value == XHTML_NAMESPACE {
                    if self.policies.xmlns == XmlViolationPolicy::AlterInfoset {
                        return Ok(());
                    }
                } else if self.bogus_xmlns(sink)? {
                    return Ok(());
                }
            } else if self.attribute_name.starts_with("xmlns:") {
                if self.bogus_xmlns(sink)? {
                    return Ok(());
                }
            } else if self.html4 && self.policies.html4_xhtml1_compat && name.is_case_folded() {
                value.make_ascii_lowercase();
            }
        }
        self.attributes.add(name, value);
        Ok(())
    }

    /// Returns whether the attribute should be dropped.
    fn bogus_xmlns(&self, sink: &mut dyn TokenSink) -> Result<bool, FatalError> {
        let message = format!(
            "Forbidden attribute \u{201C}{}\u{201D} is not mappable to namespace-aware XML 1.0.",
            self.attribute_name
        );
        self.xml_violation(sink, self.policies.bogus_xmlns, &message)
    }

    /// HTML4 only allows name characters in unquoted attribute values.
    pub(super) fn check_html4_unquoted_character(&self, c: char, sink: &mut dyn TokenSink) {
        if self.html4 && !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':')) {
            self.error(
                sink,
                "Non-name character in an unquoted attribute value. (This is an HTML4-only error.)",
            );
        }
    }
}
