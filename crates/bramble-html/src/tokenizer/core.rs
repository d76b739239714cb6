use bramble_common::{FatalError, Location};
use strum_macros::Display;

use super::character_reference::{
    NumericOutcome, NumericReference, is_noncharacter, is_private_use, resolve_numeric,
};
use super::named_character_references::EntityMatcher;
use super::token::{ContentModel, Doctype, TokenSink};
use crate::config::{ParserConfig, XmlViolationPolicy};
use crate::names::{AttributeMode, AttributeName, ElementName, HtmlAttributes, NameTable};

/// Characters after which a `meta charset` no longer counts as an early
/// encoding declaration.
const META_BOUNDARY: u64 = 512;

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokenizer state machine. Each state corresponds to a section in § 13.2.5.
/// The input arrives in chunks of arbitrary size, so keywords (`DOCTYPE`,
/// `PUBLIC`, `SYSTEM`, `[CDATA[`) are matched one character at a time by
/// dedicated states instead of by looking ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    Data,
    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    RCDATA,
    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    RAWTEXT,
    /// [§ 13.2.5.4 Script data state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-state)
    ScriptData,
    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    PLAINTEXT,
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    TagOpen,
    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    EndTagOpen,
    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    TagName,
    /// [§ 13.2.5.9 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    RCDATALessThanSign,
    /// [§ 13.2.5.10 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    RCDATAEndTagOpen,
    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    RCDATAEndTagName,
    /// [§ 13.2.5.12 RAWTEXT less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state)
    RAWTEXTLessThanSign,
    /// [§ 13.2.5.13 RAWTEXT end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state)
    RAWTEXTEndTagOpen,
    /// [§ 13.2.5.14 RAWTEXT end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state)
    RAWTEXTEndTagName,
    /// [§ 13.2.5.15 Script data less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-less-than-sign-state)
    ScriptDataLessThanSign,
    /// [§ 13.2.5.16 Script data end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-open-state)
    ScriptDataEndTagOpen,
    /// [§ 13.2.5.17 Script data end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-name-state)
    ScriptDataEndTagName,
    /// [§ 13.2.5.18 Script data escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-state)
    ScriptDataEscapeStart,
    /// [§ 13.2.5.19 Script data escape start dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-dash-state)
    ScriptDataEscapeStartDash,
    /// [§ 13.2.5.20 Script data escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-state)
    ScriptDataEscaped,
    /// [§ 13.2.5.21 Script data escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-state)
    ScriptDataEscapedDash,
    /// [§ 13.2.5.22 Script data escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-dash-state)
    ScriptDataEscapedDashDash,
    /// [§ 13.2.5.23 Script data escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-less-than-sign-state)
    ScriptDataEscapedLessThanSign,
    /// [§ 13.2.5.24 Script data escaped end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-open-state)
    ScriptDataEscapedEndTagOpen,
    /// [§ 13.2.5.25 Script data escaped end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-name-state)
    ScriptDataEscapedEndTagName,
    /// [§ 13.2.5.26 Script data double escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-start-state)
    ScriptDataDoubleEscapeStart,
    /// [§ 13.2.5.27 Script data double escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-state)
    ScriptDataDoubleEscaped,
    /// [§ 13.2.5.28 Script data double escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-state)
    ScriptDataDoubleEscapedDash,
    /// [§ 13.2.5.29 Script data double escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-dash-state)
    ScriptDataDoubleEscapedDashDash,
    /// [§ 13.2.5.30 Script data double escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-less-than-sign-state)
    ScriptDataDoubleEscapedLessThanSign,
    /// [§ 13.2.5.31 Script data double escape end state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-end-state)
    ScriptDataDoubleEscapeEnd,
    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    BeforeAttributeName,
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    AttributeName,
    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    AfterAttributeName,
    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    BeforeAttributeValue,
    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    AttributeValueDoubleQuoted,
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    AttributeValueSingleQuoted,
    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    AttributeValueUnquoted,
    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    AfterAttributeValueQuoted,
    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    SelfClosingStartTag,
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    BogusComment,
    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    MarkupDeclarationOpen,
    /// After `<!-`, waiting for the second hyphen.
    MarkupDeclarationHyphen,
    /// After `<!D`, matching the rest of `DOCTYPE`.
    MarkupDeclarationOctype,
    /// After `<![`, matching the rest of `[CDATA[`.
    CDATAStart,
    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    CommentStart,
    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    CommentStartDash,
    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    Comment,
    /// [§ 13.2.5.46 Comment less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state)
    CommentLessThanSign,
    /// [§ 13.2.5.47 Comment less-than sign bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state)
    CommentLessThanSignBang,
    /// [§ 13.2.5.48 Comment less-than sign bang dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state)
    CommentLessThanSignBangDash,
    /// [§ 13.2.5.49 Comment less-than sign bang dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state)
    CommentLessThanSignBangDashDash,
    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    CommentEndDash,
    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    CommentEnd,
    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    CommentEndBang,
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    DOCTYPE,
    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    BeforeDOCTYPEName,
    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    DOCTYPEName,
    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    AfterDOCTYPEName,
    /// After `P` in the after DOCTYPE name state, matching `UBLIC`.
    DOCTYPEPublicKeywordMatch,
    /// After `S` in the after DOCTYPE name state, matching `YSTEM`.
    DOCTYPESystemKeywordMatch,
    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    AfterDOCTYPEPublicKeyword,
    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    BeforeDOCTYPEPublicIdentifier,
    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    DOCTYPEPublicIdentifierDoubleQuoted,
    /// [§ 13.2.5.60 DOCTYPE public identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(single-quoted)-state)
    DOCTYPEPublicIdentifierSingleQuoted,
    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    AfterDOCTYPEPublicIdentifier,
    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    BetweenDOCTYPEPublicAndSystemIdentifiers,
    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    AfterDOCTYPESystemKeyword,
    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    BeforeDOCTYPESystemIdentifier,
    /// [§ 13.2.5.65 DOCTYPE system identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state)
    DOCTYPESystemIdentifierDoubleQuoted,
    /// [§ 13.2.5.66 DOCTYPE system identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state)
    DOCTYPESystemIdentifierSingleQuoted,
    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    AfterDOCTYPESystemIdentifier,
    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    BogusDOCTYPE,
    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    CDATASection,
    /// [§ 13.2.5.70 CDATA section bracket state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-bracket-state)
    CDATASectionBracket,
    /// [§ 13.2.5.71 CDATA section end state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-end-state)
    CDATASectionEnd,
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    CharacterReference,
    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    NamedCharacterReference,
    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    NumericCharacterReference,
    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    HexadecimalCharacterReference,
    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    DecimalCharacterReference,
}

/// The XML policies the tokenizer enforces itself.
#[derive(Debug, Clone, Copy)]
pub(super) struct Policies {
    pub(super) comment: XmlViolationPolicy,
    pub(super) content_non_xml_char: XmlViolationPolicy,
    pub(super) content_space: XmlViolationPolicy,
    pub(super) xmlns: XmlViolationPolicy,
    pub(super) bogus_xmlns: XmlViolationPolicy,
    pub(super) name: XmlViolationPolicy,
    pub(super) html4_xhtml1_compat: bool,
}

impl Policies {
    const fn from_config(config: &ParserConfig) -> Self {
        Self {
            comment: config.comment_policy,
            content_non_xml_char: config.content_non_xml_char_policy,
            content_space: config.content_space_policy,
            xmlns: config.xmlns_policy,
            bogus_xmlns: config.bogus_xmlns_policy,
            name: config.name_policy,
            html4_xhtml1_compat: config.html4_mode_compatible_with_xhtml1_schemata,
        }
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "Implementations must act as if they used the following state machine to tokenize HTML."
///
/// The tokenizer is push-driven: [`Tokenizer::feed`] accepts chunks of any
/// size, split anywhere, and hands tokens to a [`TokenSink`] as soon as they
/// are complete. All lexical state survives between chunks, so the tokens
/// do not depend on how the input was split (except that a run of
/// characters may be delivered in several pieces).
pub struct Tokenizer {
    pub(super) state: TokenizerState,
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    /// "Set the return state to the ... state."
    pub(super) return_state: TokenizerState,
    pub(super) current_input_character: Option<char>,
    // When true, the current character is processed again in the new state.
    // "Reconsume in the X state" sets this flag.
    pub(super) reconsume: bool,

    pub(super) content_model: ContentModel,
    /// The element whose end tag leaves RCDATA/CDATA.
    pub(super) content_model_element: Option<ElementName>,
    pub(super) names: NameTable,
    pub(super) policies: Policies,
    /// HTML4-only errors are reported once an HTML 4.01 doctype was seen.
    pub(super) html4: bool,
    pub(super) wants_comments: bool,

    // Input stream normalization.
    last_was_cr: bool,
    seen_first_char: bool,
    line: u32,
    column: u32,
    next_char_on_new_line: bool,
    chars_read: u64,
    pub(super) warned_about_private_use: bool,

    /// Coalesced character tokens waiting to be delivered.
    pub(super) text: String,
    /// Where the first character of `text` was consumed.
    pub(super) text_start: Location,

    // Current tag token.
    pub(super) tag_name: String,
    pub(super) end_tag: bool,
    pub(super) self_closing: bool,
    pub(super) attributes: HtmlAttributes,
    pub(super) attribute_name: String,
    pub(super) attribute_value: String,
    /// `None` while no attribute is open or after the current one was dropped.
    pub(super) current_attribute: Option<AttributeName>,

    pub(super) comment: String,
    pub(super) comment_pending_hyphen: bool,
    pub(super) doctype: Doctype,
    /// Characters of a keyword matched so far.
    keyword_index: usize,

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#temporary-buffer)
    /// "The temporary buffer is used to temporarily store characters during certain
    /// tokenization operations, particularly for end tag detection in RCDATA/RAWTEXT states."
    pub(super) temporary_buffer: String,
    entity_matcher: EntityMatcher,
    numeric_reference: NumericReference,

    pub(super) eof_emitted: bool,
    poisoned: Option<FatalError>,
}

impl Tokenizer {
    /// Create a tokenizer for one document.
    ///
    /// "The initial state is the data state."
    #[must_use]
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            state: TokenizerState::Data,
            return_state: TokenizerState::Data,
            current_input_character: None,
            reconsume: false,
            content_model: ContentModel::Pcdata,
            content_model_element: None,
            names: NameTable::new(),
            policies: Policies::from_config(config),
            html4: false,
            wants_comments: true,
            last_was_cr: false,
            seen_first_char: false,
            line: 1,
            column: 0,
            next_char_on_new_line: false,
            chars_read: 0,
            warned_about_private_use: false,
            text: String::new(),
            text_start: Location::START,
            tag_name: String::new(),
            end_tag: false,
            self_closing: false,
            attributes: HtmlAttributes::new(AttributeMode::Html),
            attribute_name: String::new(),
            attribute_value: String::new(),
            current_attribute: None,
            comment: String::new(),
            comment_pending_hyphen: false,
            doctype: Doctype::default(),
            keyword_index: 0,
            temporary_buffer: String::new(),
            entity_matcher: EntityMatcher::new(),
            numeric_reference: NumericReference::new(false),
            eof_emitted: false,
            poisoned: None,
        }
    }

    /// Reset every piece of lexical state for a new document. The policies
    /// are kept.
    pub fn start(&mut self) {
        let policies = self.policies;
        let mut names = std::mem::take(&mut self.names);
        names.clear();
        *self = Self {
            policies,
            names,
            ..Self::new(&ParserConfig::default())
        };
    }

    /// The current position: the line and column of the last consumed
    /// character.
    #[must_use]
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column.max(1))
    }

    /// The interner used for tag and attribute names.
    #[must_use]
    pub const fn names(&self) -> &NameTable {
        &self.names
    }

    /// Mutable access to the interner, for callers that intern names the
    /// tokenizer will produce later (a fragment context, for example).
    pub const fn names_mut(&mut self) -> &mut NameTable {
        &mut self.names
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Whether HTML4-only errors are being reported.
    #[must_use]
    pub const fn is_html4(&self) -> bool {
        self.html4
    }

    /// Set the content model flag.
    ///
    /// `element` is the element whose end tag returns to PCDATA. It is
    /// required for RCDATA and CDATA; without it no end tag is appropriate
    /// and the rest of the input is text.
    pub fn set_content_model(&mut self, model: ContentModel, element: Option<ElementName>) {
        self.content_model = model;
        self.content_model_element = element;
        self.state = self.text_state_for(model);
    }

    pub(super) const fn meta_boundary_passed(&self) -> bool {
        self.chars_read > META_BOUNDARY
    }

    /// Tokenize the next chunk of input.
    ///
    /// Tokens that are complete are delivered to `sink` before this
    /// returns; a trailing partial token waits for the next chunk.
    ///
    /// # Errors
    ///
    /// Returns the [`FatalError`] raised by a `Fatal` policy, either here or
    /// in the sink. The tokenizer is poisoned afterwards and every later
    /// call returns the same error.
    pub fn feed(&mut self, chunk: &str, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        if let Some(error) = &self.poisoned {
            return Err(error.clone());
        }
        self.wants_comments = sink.wants_comments();
        let result = self.feed_chars(chunk, sink);
        self.record(result)
    }

    /// Signal the end of input: pending tokens are completed the way each
    /// state handles EOF and the sink receives `end_of_file`.
    ///
    /// # Errors
    ///
    /// As for [`Tokenizer::feed`].
    pub fn end_of_input(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        if let Some(error) = &self.poisoned {
            return Err(error.clone());
        }
        self.wants_comments = sink.wants_comments();
        let result = self.finish_input(sink);
        self.record(result)
    }

    fn record(&mut self, result: Result<(), FatalError>) -> Result<(), FatalError> {
        if let Err(error) = &result {
            self.poisoned = Some(error.clone());
        }
        result
    }

    /// [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
    ///
    /// "Before the tokenization stage, the input stream must be preprocessed
    /// by normalizing newlines. Thus, newlines in HTML DOMs are represented
    /// by U+000A LF characters, and there are never any U+000D CR characters
    /// in the input to the tokenization stage."
    fn feed_chars(&mut self, chunk: &str, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        for c in chunk.chars() {
            if !self.seen_first_char {
                self.seen_first_char = true;
                if c == '\u{FEFF}' {
                    continue;
                }
            }
            let c = match c {
                '\r' => {
                    self.last_was_cr = true;
                    '\n'
                }
                '\n' if self.last_was_cr => {
                    self.last_was_cr = false;
                    continue;
                }
                c => {
                    self.last_was_cr = false;
                    c
                }
            };
            self.advance_position(c);
            self.process(Some(c), sink)?;
            if self.eof_emitted {
                break;
            }
        }
        self.flush_text(sink)
    }

    fn finish_input(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        while !self.eof_emitted {
            self.process(None, sink)?;
        }
        Ok(())
    }

    const fn advance_position(&mut self, c: char) {
        if self.next_char_on_new_line {
            self.line = self.line.saturating_add(1);
            self.column = 0;
            self.next_char_on_new_line = false;
        }
        self.column = self.column.saturating_add(1);
        self.chars_read = self.chars_read.saturating_add(1);
        if c == '\n' {
            self.next_char_on_new_line = true;
        }
    }

    /// Run one input character (or EOF) through the state machine.
    fn process(&mut self, input: Option<char>, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        self.current_input_character = match input {
            Some(c) => Some(self.check_input_character(c, sink)?),
            None => None,
        };
        loop {
            self.reconsume = false;
            self.step(sink)?;
            if !self.reconsume || self.eof_emitted {
                return Ok(());
            }
        }
    }

    fn step(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        use TokenizerState as S;
        match self.state {
            S::Data => self.handle_data_state(sink)?,
            S::RCDATA => self.handle_rcdata_state(sink)?,
            S::RAWTEXT => self.handle_rawtext_state(sink)?,
            S::ScriptData => self.handle_script_data_state(sink)?,
            S::PLAINTEXT => self.handle_plaintext_state(sink)?,
            S::TagOpen => self.handle_tag_open_state(sink)?,
            S::EndTagOpen => self.handle_end_tag_open_state(sink)?,
            S::TagName => self.handle_tag_name_state(sink)?,
            S::RCDATALessThanSign => {
                self.handle_text_less_than_sign_state(S::RCDATA, S::RCDATAEndTagOpen);
            }
            S::RCDATAEndTagOpen => {
                self.handle_text_end_tag_open_state(S::RCDATA, S::RCDATAEndTagName);
            }
            S::RCDATAEndTagName => self.handle_text_end_tag_name_state(S::RCDATA, sink)?,
            S::RAWTEXTLessThanSign => {
                self.handle_text_less_than_sign_state(S::RAWTEXT, S::RAWTEXTEndTagOpen);
            }
            S::RAWTEXTEndTagOpen => {
                self.handle_text_end_tag_open_state(S::RAWTEXT, S::RAWTEXTEndTagName);
            }
            S::RAWTEXTEndTagName => self.handle_text_end_tag_name_state(S::RAWTEXT, sink)?,
            S::ScriptDataLessThanSign => self.handle_script_data_less_than_sign_state(),
            S::ScriptDataEndTagOpen => {
                self.handle_text_end_tag_open_state(S::ScriptData, S::ScriptDataEndTagName);
            }
            S::ScriptDataEndTagName => {
                self.handle_text_end_tag_name_state(S::ScriptData, sink)?;
            }
            S::ScriptDataEscapeStart => self.handle_script_data_escape_start_state(),
            S::ScriptDataEscapeStartDash => self.handle_script_data_escape_start_dash_state(),
            S::ScriptDataEscaped => self.handle_script_data_escaped_state(sink)?,
            S::ScriptDataEscapedDash => self.handle_script_data_escaped_dash_state(sink)?,
            S::ScriptDataEscapedDashDash => {
                self.handle_script_data_escaped_dash_dash_state(sink)?;
            }
            S::ScriptDataEscapedLessThanSign => {
                self.handle_script_data_escaped_less_than_sign_state();
            }
            S::ScriptDataEscapedEndTagOpen => self.handle_text_end_tag_open_state(
                S::ScriptDataEscaped,
                S::ScriptDataEscapedEndTagName,
            ),
            S::ScriptDataEscapedEndTagName => {
                self.handle_text_end_tag_name_state(S::ScriptDataEscaped, sink)?;
            }
            S::ScriptDataDoubleEscapeStart => self.handle_script_data_double_escape_start_state(),
            S::ScriptDataDoubleEscaped => self.handle_script_data_double_escaped_state(sink)?,
            S::ScriptDataDoubleEscapedDash => {
                self.handle_script_data_double_escaped_dash_state(sink)?;
            }
            S::ScriptDataDoubleEscapedDashDash => {
                self.handle_script_data_double_escaped_dash_dash_state(sink)?;
            }
            S::ScriptDataDoubleEscapedLessThanSign => {
                self.handle_script_data_double_escaped_less_than_sign_state();
            }
            S::ScriptDataDoubleEscapeEnd => self.handle_script_data_double_escape_end_state(),
            S::BeforeAttributeName => self.handle_before_attribute_name_state(sink)?,
            S::AttributeName => self.handle_attribute_name_state(sink)?,
            S::AfterAttributeName => self.handle_after_attribute_name_state(sink)?,
            S::BeforeAttributeValue => self.handle_before_attribute_value_state(sink)?,
            S::AttributeValueDoubleQuoted => self.handle_attribute_value_quoted_state('"', sink)?,
            S::AttributeValueSingleQuoted => self.handle_attribute_value_quoted_state('\'', sink)?,
            S::AttributeValueUnquoted => self.handle_attribute_value_unquoted_state(sink)?,
            S::AfterAttributeValueQuoted => self.handle_after_attribute_value_quoted_state(sink)?,
            S::SelfClosingStartTag => self.handle_self_closing_start_tag_state(sink)?,
            S::BogusComment => self.handle_bogus_comment_state(sink)?,
            S::MarkupDeclarationOpen => self.handle_markup_declaration_open_state(sink)?,
            S::MarkupDeclarationHyphen => self.handle_markup_declaration_hyphen_state(sink)?,
            S::MarkupDeclarationOctype => self.handle_markup_declaration_octype_state(sink)?,
            S::CDATAStart => self.handle_cdata_start_state(sink)?,
            S::CommentStart => self.handle_comment_start_state(sink)?,
            S::CommentStartDash => self.handle_comment_start_dash_state(sink)?,
            S::Comment => self.handle_comment_state(sink)?,
            S::CommentLessThanSign => self.handle_comment_less_than_sign_state(sink)?,
            S::CommentLessThanSignBang => self.handle_comment_less_than_sign_bang_state(),
            S::CommentLessThanSignBangDash => self.handle_comment_less_than_sign_bang_dash_state(),
            S::CommentLessThanSignBangDashDash => {
                self.handle_comment_less_than_sign_bang_dash_dash_state(sink);
            }
            S::CommentEndDash => self.handle_comment_end_dash_state(sink)?,
            S::CommentEnd => self.handle_comment_end_state(sink)?,
            S::CommentEndBang => self.handle_comment_end_bang_state(sink)?,
            S::DOCTYPE => self.handle_doctype_state(sink)?,
            S::BeforeDOCTYPEName => self.handle_before_doctype_name_state(sink)?,
            S::DOCTYPEName => self.handle_doctype_name_state(sink)?,
            S::AfterDOCTYPEName => self.handle_after_doctype_name_state(sink)?,
            S::DOCTYPEPublicKeywordMatch => self.handle_doctype_keyword_state(
                "public",
                S::AfterDOCTYPEPublicKeyword,
                sink,
            )?,
            S::DOCTYPESystemKeywordMatch => self.handle_doctype_keyword_state(
                "system",
                S::AfterDOCTYPESystemKeyword,
                sink,
            )?,
            S::AfterDOCTYPEPublicKeyword => self.handle_after_doctype_keyword_state(true, sink)?,
            S::BeforeDOCTYPEPublicIdentifier => {
                self.handle_before_doctype_identifier_state(true, sink)?;
            }
            S::DOCTYPEPublicIdentifierDoubleQuoted => {
                self.handle_doctype_identifier_state(true, '"', sink)?;
            }
            S::DOCTYPEPublicIdentifierSingleQuoted => {
                self.handle_doctype_identifier_state(true, '\'', sink)?;
            }
            S::AfterDOCTYPEPublicIdentifier => {
                self.handle_after_doctype_public_identifier_state(true, sink)?;
            }
            S::BetweenDOCTYPEPublicAndSystemIdentifiers => {
                self.handle_after_doctype_public_identifier_state(false, sink)?;
            }
            S::AfterDOCTYPESystemKeyword => self.handle_after_doctype_keyword_state(false, sink)?,
            S::BeforeDOCTYPESystemIdentifier => {
                self.handle_before_doctype_identifier_state(false, sink)?;
            }
            S::DOCTYPESystemIdentifierDoubleQuoted => {
                self.handle_doctype_identifier_state(false, '"', sink)?;
            }
            S::DOCTYPESystemIdentifierSingleQuoted => {
                self.handle_doctype_identifier_state(false, '\'', sink)?;
            }
            S::AfterDOCTYPESystemIdentifier => {
                self.handle_after_doctype_system_identifier_state(sink)?;
            }
            S::BogusDOCTYPE => self.handle_bogus_doctype_state(sink)?,
            S::CDATASection => self.handle_cdata_section_state(sink)?,
            S::CDATASectionBracket => self.handle_cdata_section_bracket_state(),
            S::CDATASectionEnd => self.handle_cdata_section_end_state(),
            S::CharacterReference => self.handle_character_reference_state(),
            S::NamedCharacterReference => self.handle_named_character_reference_state(sink),
            S::NumericCharacterReference => self.handle_numeric_character_reference_state(),
            S::HexadecimalCharacterReference | S::DecimalCharacterReference => {
                self.handle_numeric_digits_state(sink)?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Text States
// =============================================================================

impl Tokenizer {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    fn handle_data_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            // "U+0026 AMPERSAND (&) - Set the return state to the data state.
            // Switch to the character reference state."
            Some('&') => {
                self.return_state = TokenizerState::Data;
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the tag open state."
            Some('<') => self.switch_to(TokenizerState::TagOpen),
            // "EOF - Emit an end-of-file token."
            None => self.emit_eof_token(sink)?,
            // "Anything else - Emit the current input character as a character token."
            Some(c) => self.emit_character_token(c),
        }
        Ok(())
    }

    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    fn handle_rcdata_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            // "Set the return state to the RCDATA state. Switch to the character reference state."
            Some('&') => {
                self.return_state = TokenizerState::RCDATA;
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('<') => self.switch_to(TokenizerState::RCDATALessThanSign),
            None => self.emit_eof_token(sink)?,
            Some(c) => self.emit_character_token(c),
        }
        Ok(())
    }

    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    fn handle_rawtext_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('<') => self.switch_to(TokenizerState::RAWTEXTLessThanSign),
            None => self.emit_eof_token(sink)?,
            Some(c) => self.emit_character_token(c),
        }
        Ok(())
    }

    /// [§ 13.2.5.4 Script data state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-state)
    fn handle_script_data_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('<') => self.switch_to(TokenizerState::ScriptDataLessThanSign),
            None => self.emit_eof_token(sink)?,
            Some(c) => self.emit_character_token(c),
        }
        Ok(())
    }

    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    fn handle_plaintext_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            None => self.emit_eof_token(sink)?,
            Some(c) => self.emit_character_token(c),
        }
        Ok(())
    }

    /// [§ 13.2.5.9 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    /// and [§ 13.2.5.12 RAWTEXT less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state)
    fn handle_text_less_than_sign_state(
        &mut self,
        text_state: TokenizerState,
        end_tag_open_state: TokenizerState,
    ) {
        match self.current_input_character {
            // "Set the temporary buffer to the empty string. Switch to the
            // RCDATA end tag open state."
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(end_tag_open_state);
            }
            // "Emit a U+003C LESS-THAN SIGN character token. Reconsume in the RCDATA state."
            _ => {
                self.emit_character_token('<');
                self.reconsume_in(text_state);
            }
        }
    }

    /// The end tag open states of RCDATA, RAWTEXT, script data and escaped
    /// script data, which differ only in where they return to.
    fn handle_text_end_tag_open_state(
        &mut self,
        text_state: TokenizerState,
        end_tag_name_state: TokenizerState,
    ) {
        match self.current_input_character {
            // "ASCII alpha"
            // "Create a new end tag token, set its tag name to the empty string. Reconsume in
            // the RCDATA end tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.start_new_tag(true);
                self.reconsume_in(end_tag_name_state);
            }
            // "Emit a U+003C LESS-THAN SIGN character token and a U+002F SOLIDUS character token.
            // Reconsume in the RCDATA state."
            _ => {
                self.emit_characters("</");
                self.reconsume_in(text_state);
            }
        }
    }

    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    fn handle_text_end_tag_name_state(
        &mut self,
        text_state: TokenizerState,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        let appropriate = self.is_appropriate_end_tag_token();
        match self.current_input_character {
            // "If the current end tag token is an appropriate end tag token, then switch to
            // the before attribute name state."
            Some(c) if Self::is_whitespace_char(c) && appropriate => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') if appropriate => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') if appropriate => self.emit_current_tag(sink)?,
            // "Append the lowercase version of the current input character to the current tag
            // token's tag name. Append the current input character to the temporary buffer."
            Some(c) if c.is_ascii_alphabetic() => {
                self.tag_name.push(c.to_ascii_lowercase());
                self.temporary_buffer.push(c);
            }
            // "Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS character
            // token, and a character token for each of the characters in the temporary
            // buffer (in the order they were added to the buffer). Reconsume in the
            // RCDATA state."
            _ => {
                if text_state != TokenizerState::ScriptDataEscaped
                    && !self.temporary_buffer.is_empty()
                {
                    self.report_unclosed_text_end_tag(sink);
                }
                let buffer = std::mem::take(&mut self.temporary_buffer);
                self.emit_characters("</");
                self.emit_characters(&buffer);
                self.reconsume_in(text_state);
            }
        }
        Ok(())
    }
}

// =============================================================================
// Script Data Escape States
// =============================================================================

impl Tokenizer {
    /// [§ 13.2.5.15 Script data less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-less-than-sign-state)
    fn handle_script_data_less_than_sign_state(&mut self) {
        match self.current_input_character {
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(TokenizerState::ScriptDataEndTagOpen);
            }
            // "Switch to the script data escape start state. Emit a U+003C LESS-THAN SIGN
            // character token and a U+0021 EXCLAMATION MARK character token."
            Some('!') => {
                self.switch_to(TokenizerState::ScriptDataEscapeStart);
                self.emit_characters("<!");
            }
            _ => {
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::ScriptData);
            }
        }
    }

    /// [§ 13.2.5.18 Script data escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-state)
    fn handle_script_data_escape_start_state(&mut self) {
        if self.current_input_character == Some('-') {
            self.switch_to(TokenizerState::ScriptDataEscapeStartDash);
            self.emit_character_token('-');
        } else {
            self.reconsume_in(TokenizerState::ScriptData);
        }
    }

    /// [§ 13.2.5.19 Script data escape start dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-dash-state)
    fn handle_script_data_escape_start_dash_state(&mut self) {
        if self.current_input_character == Some('-') {
            self.switch_to(TokenizerState::ScriptDataEscapedDashDash);
            self.emit_character_token('-');
        } else {
            self.reconsume_in(TokenizerState::ScriptData);
        }
    }

    fn eof_in_script_comment(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        // "This is an eof-in-script-html-comment-like-text parse error. Emit an
        // end-of-file token."
        self.error(sink, "End of file inside a script comment.");
        self.emit_eof_token(sink)
    }

    /// [§ 13.2.5.20 Script data escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-state)
    fn handle_script_data_escaped_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataEscapedDash);
                self.emit_character_token('-');
            }
            Some('<') => self.switch_to(TokenizerState::ScriptDataEscapedLessThanSign),
            None => self.eof_in_script_comment(sink)?,
            Some(c) => self.emit_character_token(c),
        }
        Ok(())
    }

    /// [§ 13.2.5.21 Script data escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-state)
    fn handle_script_data_escaped_dash_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataEscapedDashDash);
                self.emit_character_token('-');
            }
            Some('<') => self.switch_to(TokenizerState::ScriptDataEscapedLessThanSign),
            None => self.eof_in_script_comment(sink)?,
            Some(c) => {
                self.switch_to(TokenizerState::ScriptDataEscaped);
                self.emit_character_token(c);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.22 Script data escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-dash-state)
    fn handle_script_data_escaped_dash_dash_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('-') => self.emit_character_token('-'),
            Some('<') => self.switch_to(TokenizerState::ScriptDataEscapedLessThanSign),
            // "Switch to the script data state. Emit a U+003E GREATER-THAN SIGN character token."
            Some('>') => {
                self.switch_to(TokenizerState::ScriptData);
                self.emit_character_token('>');
            }
            None => self.eof_in_script_comment(sink)?,
            Some(c) => {
                self.switch_to(TokenizerState::ScriptDataEscaped);
                self.emit_character_token(c);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.23 Script data escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-less-than-sign-state)
    fn handle_script_data_escaped_less_than_sign_state(&mut self) {
        match self.current_input_character {
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(TokenizerState::ScriptDataEscapedEndTagOpen);
            }
            // "Set the temporary buffer to the empty string. Emit a U+003C LESS-THAN SIGN
            // character token. Reconsume in the script data double escape start state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.temporary_buffer.clear();
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::ScriptDataDoubleEscapeStart);
            }
            _ => {
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::ScriptDataEscaped);
            }
        }
    }

    /// [§ 13.2.5.26 Script data double escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-start-state)
    fn handle_script_data_double_escape_start_state(&mut self) {
        match self.current_input_character {
            // "If the temporary buffer is the string "script", then switch to the script
            // data double escaped state. Otherwise, switch to the script data escaped
            // state. Emit the current input character as a character token."
            Some(c) if Self::is_whitespace_char(c) || c == '/' || c == '>' => {
                if self.temporary_buffer == "script" {
                    self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                } else {
                    self.switch_to(TokenizerState::ScriptDataEscaped);
                }
                self.emit_character_token(c);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.temporary_buffer.push(c.to_ascii_lowercase());
                self.emit_character_token(c);
            }
            _ => self.reconsume_in(TokenizerState::ScriptDataEscaped),
        }
    }

    /// [§ 13.2.5.27 Script data double escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-state)
    fn handle_script_data_double_escaped_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedDash);
                self.emit_character_token('-');
            }
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
                self.emit_character_token('<');
            }
            None => self.eof_in_script_comment(sink)?,
            Some(c) => self.emit_character_token(c),
        }
        Ok(())
    }

    /// [§ 13.2.5.28 Script data double escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-state)
    fn handle_script_data_double_escaped_dash_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedDashDash);
                self.emit_character_token('-');
            }
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
                self.emit_character_token('<');
            }
            None => self.eof_in_script_comment(sink)?,
            Some(c) => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                self.emit_character_token(c);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.29 Script data double escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-dash-state)
    fn handle_script_data_double_escaped_dash_dash_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('-') => self.emit_character_token('-'),
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
                self.emit_character_token('<');
            }
            Some('>') => {
                self.switch_to(TokenizerState::ScriptData);
                self.emit_character_token('>');
            }
            None => self.eof_in_script_comment(sink)?,
            Some(c) => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                self.emit_character_token(c);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.30 Script data double escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-less-than-sign-state)
    fn handle_script_data_double_escaped_less_than_sign_state(&mut self) {
        if self.current_input_character == Some('/') {
            self.temporary_buffer.clear();
            self.switch_to(TokenizerState::ScriptDataDoubleEscapeEnd);
            self.emit_character_token('/');
        } else {
            self.reconsume_in(TokenizerState::ScriptDataDoubleEscaped);
        }
    }

    /// [§ 13.2.5.31 Script data double escape end state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-end-state)
    fn handle_script_data_double_escape_end_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) || c == '/' || c == '>' => {
                if self.temporary_buffer == "script" {
                    self.switch_to(TokenizerState::ScriptDataEscaped);
                } else {
                    self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                }
                self.emit_character_token(c);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.temporary_buffer.push(c.to_ascii_lowercase());
                self.emit_character_token(c);
            }
            _ => self.reconsume_in(TokenizerState::ScriptDataDoubleEscaped),
        }
    }
}

// =============================================================================
// Tag States
// =============================================================================

impl Tokenizer {
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    fn handle_tag_open_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            // "U+0021 EXCLAMATION MARK (!) - Switch to the markup declaration open state."
            Some('!') => self.switch_to(TokenizerState::MarkupDeclarationOpen),
            // "U+002F SOLIDUS (/) - Switch to the end tag open state."
            Some('/') => self.switch_to(TokenizerState::EndTagOpen),
            // "ASCII alpha - Create a new start tag token, set its tag name to the
            // empty string. Reconsume in the tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.start_new_tag(false);
                self.reconsume_in(TokenizerState::TagName);
            }
            // "U+003F QUESTION MARK (?) - This is an
            // unexpected-question-mark-instead-of-tag-name parse error. Create a
            // comment token whose data is the empty string. Reconsume in the bogus
            // comment state."
            Some('?') => {
                self.error(sink, "Bad character \u{201C}?\u{201D} in the tag open state.");
                self.comment.clear();
                self.comment_pending_hyphen = false;
                self.reconsume_in(TokenizerState::BogusComment);
            }
            // "EOF - This is an eof-before-tag-name parse error. Emit a U+003C
            // LESS-THAN SIGN character token and an end-of-file token."
            None => {
                self.error(sink, "Saw \u{201C}<\u{201D} immediately before end of file.");
                self.emit_character_token('<');
                self.emit_eof_token(sink)?;
            }
            // "Anything else - This is an invalid-first-character-of-tag-name parse
            // error. Emit a U+003C LESS-THAN SIGN character token. Reconsume in the
            // data state."
            Some(c) => {
                self.error(
                    sink,
                    format!("Bad character \u{201C}{c}\u{201D} in the tag open state."),
                );
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::Data);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    fn handle_end_tag_open_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphabetic() => {
                self.start_new_tag(true);
                self.reconsume_in(TokenizerState::TagName);
            }
            // "This is a missing-end-tag-name parse error. Switch to the data state."
            Some('>') => {
                self.error(sink, "Saw \u{201C}</>\u{201D}.");
                self.switch_to(TokenizerState::Data);
            }
            None => {
                self.error(sink, "Saw \u{201C}</\u{201D} immediately before end of file.");
                self.emit_characters("</");
                self.emit_eof_token(sink)?;
            }
            // "This is an invalid-first-character-of-tag-name parse error. Create a
            // comment token whose data is the empty string. Reconsume in the bogus
            // comment state."
            Some(_) => {
                self.error(sink, "Garbage after \u{201C}</\u{201D}.");
                self.comment.clear();
                self.comment_pending_hyphen = false;
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
        Ok(())
    }

    /// Ends a tag at end of input. The tag is still emitted, then EOF.
    fn eof_in_tag(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        self.error(
            sink,
            "Saw end of file without the previous tag ending with \u{201C}>\u{201D}.",
        );
        self.emit_current_tag(sink)?;
        self.emit_eof_token(sink)
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    fn handle_tag_name_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            // "Switch to the before attribute name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            // "Switch to the self-closing start tag state."
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            // "Switch to the data state. Emit the current tag token."
            Some('>') => self.emit_current_tag(sink)?,
            // "Append the lowercase version of the current input character
            // (add 0x0020 to the character's code point) to the current tag token's tag name."
            Some(c) => self.tag_name.push(c.to_ascii_lowercase()),
            None => {
                self.error(sink, "End of file seen when looking for tag name");
                self.emit_current_tag(sink)?;
                self.emit_eof_token(sink)?;
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    fn handle_before_attribute_name_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            // "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => self.emit_current_tag(sink)?,
            None => self.eof_in_tag(sink)?,
            // "This is an unexpected-equals-sign-before-attribute-name parse error.
            // Start a new attribute in the current tag token. Set that attribute's
            // name to the current input character, and its value to the empty
            // string. Switch to the attribute name state."
            Some('=') => {
                self.error(
                    sink,
                    "Saw \u{201C}=\u{201D} when expecting an attribute name. Probable cause: Missing attribute name.",
                );
                self.start_new_attribute();
                self.attribute_name.push('=');
                self.switch_to(TokenizerState::AttributeName);
            }
            // "Start a new attribute in the current tag token. Set that attribute name and
            // value to the empty string. Reconsume in the attribute name state."
            Some(_) => {
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    fn handle_attribute_name_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.attribute_name_complete(sink)?;
                self.switch_to(TokenizerState::AfterAttributeName);
            }
            Some('/') => {
                self.attribute_name_complete(sink)?;
                self.add_attribute_without_value(sink);
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            // "Switch to the before attribute value state."
            Some('=') => {
                self.attribute_name_complete(sink)?;
                self.switch_to(TokenizerState::BeforeAttributeValue);
            }
            Some('>') => {
                self.attribute_name_complete(sink)?;
                self.add_attribute_without_value(sink);
                self.emit_current_tag(sink)?;
            }
            None => {
                self.error(sink, "End of file occurred in an attribute name.");
                self.attribute_name_complete(sink)?;
                self.add_attribute_without_value(sink);
                self.emit_current_tag(sink)?;
                self.emit_eof_token(sink)?;
            }
            // "This is an unexpected-character-in-attribute-name parse error. Treat it as
            // per the "anything else" entry below."
            Some(c @ ('"' | '\'' | '<')) => {
                self.error(
                    sink,
                    format!(
                        "Quote or \u{201C}<\u{201D} in attribute name. Probable cause: \u{201C}{c}\u{201D} missing somewhere earlier."
                    ),
                );
                self.attribute_name.push(c);
            }
            Some(c) => self.attribute_name.push(c.to_ascii_lowercase()),
        }
        Ok(())
    }

    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    fn handle_after_attribute_name_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/') => {
                self.add_attribute_without_value(sink);
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            Some('>') => {
                self.add_attribute_without_value(sink);
                self.emit_current_tag(sink)?;
            }
            None => {
                self.add_attribute_without_value(sink);
                self.eof_in_tag(sink)?;
            }
            // "Start a new attribute in the current tag token. Set that attribute name and
            // value to the empty string. Reconsume in the attribute name state."
            Some(_) => {
                self.add_attribute_without_value(sink);
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    fn handle_before_attribute_value_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('"') => self.switch_to(TokenizerState::AttributeValueDoubleQuoted),
            Some('\'') => self.switch_to(TokenizerState::AttributeValueSingleQuoted),
            // "This is a missing-attribute-value parse error. Switch to the data state.
            // Emit the current tag token."
            Some('>') => {
                self.add_attribute_without_value(sink);
                self.emit_current_tag(sink)?;
            }
            None => {
                self.add_attribute_without_value(sink);
                self.eof_in_tag(sink)?;
            }
            Some(_) => self.reconsume_in(TokenizerState::AttributeValueUnquoted),
        }
        Ok(())
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    /// and [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    fn handle_attribute_value_quoted_state(
        &mut self,
        quote: char,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            // "Switch to the after attribute value (quoted) state."
            Some(c) if c == quote => {
                self.add_attribute_with_value(sink)?;
                self.switch_to(TokenizerState::AfterAttributeValueQuoted);
            }
            // "Set the return state to the attribute value (double-quoted) state.
            // Switch to the character reference state."
            Some('&') => {
                self.return_state = self.state;
                self.switch_to(TokenizerState::CharacterReference);
            }
            None => {
                self.error(sink, "End of file reached when inside a quoted attribute value.");
                self.add_attribute_with_value(sink)?;
                self.emit_current_tag(sink)?;
                self.emit_eof_token(sink)?;
            }
            // "Append the current input character to the current attribute's value."
            Some(c) => self.attribute_value.push(c),
        }
        Ok(())
    }

    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    fn handle_attribute_value_unquoted_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.add_attribute_with_value(sink)?;
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('&') => {
                self.return_state = TokenizerState::AttributeValueUnquoted;
                self.switch_to(TokenizerState::CharacterReference);
            }
            Some('>') => {
                self.add_attribute_with_value(sink)?;
                self.emit_current_tag(sink)?;
            }
            None => {
                self.add_attribute_with_value(sink)?;
                self.eof_in_tag(sink)?;
            }
            Some('<') => {
                self.warning(
                    sink,
                    "\u{201C}<\u{201D} in an unquoted attribute value. This does not end the tag.",
                );
                self.check_html4_unquoted_character('<', sink);
                self.attribute_value.push('<');
            }
            // "This is an unexpected-character-in-unquoted-attribute-value parse error.
            // Treat it as per the "anything else" entry below."
            Some(c @ ('"' | '\'' | '=' | '`')) => {
                self.error(
                    sink,
                    format!(
                        "\u{201C}{c}\u{201D} in an unquoted attribute value. Probable causes: Attributes running together or a URL query string in an unquoted attribute value."
                    ),
                );
                self.check_html4_unquoted_character(c, sink);
                self.attribute_value.push(c);
            }
            Some(c) => {
                self.check_html4_unquoted_character(c, sink);
                self.attribute_value.push(c);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    fn handle_after_attribute_value_quoted_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => self.emit_current_tag(sink)?,
            None => self.eof_in_tag(sink)?,
            // "This is a missing-whitespace-between-attributes parse error. Reconsume in
            // the before attribute name state."
            Some(_) => {
                self.error(sink, "No space between attributes.");
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    fn handle_self_closing_start_tag_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            // "Set the self-closing flag of the current tag token. Switch to the data
            // state. Emit the current tag token."
            Some('>') => {
                self.parse_error_unless_permitted_slash(sink, true);
                if !self.end_tag {
                    self.self_closing = true;
                }
                self.emit_current_tag(sink)?;
            }
            None => self.eof_in_tag(sink)?,
            // "This is an unexpected-solidus-in-tag parse error. Reconsume in the before
            // attribute name state."
            Some(_) => {
                self.parse_error_unless_permitted_slash(sink, false);
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
        Ok(())
    }
}

// =============================================================================
// Markup Declaration And Comment States
// =============================================================================

impl Tokenizer {
    fn start_bogus_comment(&mut self, sink: &mut dyn TokenSink) {
        self.error(sink, "Bogus comment.");
        self.comment.clear();
        self.comment_pending_hyphen = false;
    }

    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    fn handle_bogus_comment_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            // "Switch to the data state. Emit the current comment token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_comment(sink)?;
            }
            // "Emit the comment. Emit an end-of-file token."
            None => {
                self.emit_comment(sink)?;
                self.emit_eof_token(sink)?;
            }
            Some(c) => self.append_to_comment(c, sink)?,
        }
        Ok(())
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// "If the next few characters are:
    ///  - Two U+002D HYPHEN-MINUS characters (-)
    ///  - ASCII case-insensitive match for the word "DOCTYPE"
    ///  - The string "[CDATA[" (the five uppercase letters "CDATA" with a
    ///    U+005B LEFT SQUARE BRACKET character before and after)"
    ///
    /// Only the first character is looked at here; the rest of each keyword
    /// is matched by its own state.
    fn handle_markup_declaration_open_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::MarkupDeclarationHyphen),
            Some(c @ ('d' | 'D')) => {
                self.temporary_buffer.clear();
                self.temporary_buffer.push(c);
                self.keyword_index = 1;
                self.switch_to(TokenizerState::MarkupDeclarationOctype);
            }
            // "If there is an adjusted current node and it is not an element in the
            // HTML namespace, then switch to the CDATA section state."
            Some('[') if sink.cdata_sections_allowed() => {
                self.keyword_index = 1;
                self.switch_to(TokenizerState::CDATAStart);
            }
            // "Otherwise, this is an incorrectly-opened-comment parse error. Create a
            // comment token whose data is the empty string. Switch to the bogus comment
            // state (don't consume anything in the current state)."
            _ => {
                self.start_bogus_comment(sink);
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
        Ok(())
    }

    fn handle_markup_declaration_hyphen_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        if self.current_input_character == Some('-') {
            // "Consume those two characters, create a comment token whose data is the
            // empty string, and switch to the comment start state."
            self.comment.clear();
            self.comment_pending_hyphen = false;
            self.switch_to(TokenizerState::CommentStart);
        } else {
            self.start_bogus_comment(sink);
            self.append_to_comment('-', sink)?;
            self.reconsume_in(TokenizerState::BogusComment);
        }
        Ok(())
    }

    fn handle_markup_declaration_octype_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        const KEYWORD: &[u8] = b"doctype";
        match self.current_input_character {
            Some(c) if c.to_ascii_lowercase() == char::from(KEYWORD[self.keyword_index]) => {
                self.temporary_buffer.push(c);
                self.keyword_index += 1;
                if self.keyword_index == KEYWORD.len() {
                    self.temporary_buffer.clear();
                    self.switch_to(TokenizerState::DOCTYPE);
                }
            }
            _ => {
                let consumed = std::mem::take(&mut self.temporary_buffer);
                self.start_bogus_comment(sink);
                self.append_str_to_comment(&consumed, sink)?;
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
        Ok(())
    }

    fn handle_cdata_start_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        const KEYWORD: &str = "[CDATA[";
        match self.current_input_character {
            Some(c) if u32::from(c) == u32::from(KEYWORD.as_bytes()[self.keyword_index]) => {
                self.keyword_index += 1;
                if self.keyword_index == KEYWORD.len() {
                    self.switch_to(TokenizerState::CDATASection);
                }
            }
            _ => {
                self.start_bogus_comment(sink);
                self.append_str_to_comment(&KEYWORD[..self.keyword_index], sink)?;
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
        Ok(())
    }

    fn eof_in_comment(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        // "This is an eof-in-comment parse error. Emit the current comment token.
        // Emit an end-of-file token."
        self.error(sink, "End of file inside comment.");
        self.emit_comment(sink)?;
        self.emit_eof_token(sink)
    }

    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    fn handle_comment_start_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentStartDash),
            // "This is an abrupt-closing-of-empty-comment parse error. Switch to the data
            // state. Emit the current comment token."
            Some('>') => {
                self.error(sink, "Premature end of comment. Use \u{201C}-->\u{201D} to end a comment properly.");
                self.switch_to(TokenizerState::Data);
                self.emit_comment(sink)?;
            }
            _ => self.reconsume_in(TokenizerState::Comment),
        }
        Ok(())
    }

    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    fn handle_comment_start_dash_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEnd),
            Some('>') => {
                self.error(sink, "Premature end of comment. Use \u{201C}-->\u{201D} to end a comment properly.");
                self.switch_to(TokenizerState::Data);
                self.emit_comment(sink)?;
            }
            None => self.eof_in_comment(sink)?,
            // "Append a U+002D HYPHEN-MINUS character (-) to the comment token's data.
            // Reconsume in the comment state."
            Some(_) => {
                self.append_to_comment('-', sink)?;
                self.reconsume_in(TokenizerState::Comment);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    fn handle_comment_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            // "Append the current input character to the comment token's data. Switch to
            // the comment less-than sign state."
            Some('<') => {
                self.append_to_comment('<', sink)?;
                self.switch_to(TokenizerState::CommentLessThanSign);
            }
            Some('-') => self.switch_to(TokenizerState::CommentEndDash),
            None => self.eof_in_comment(sink)?,
            Some(c) => self.append_to_comment(c, sink)?,
        }
        Ok(())
    }

    /// [§ 13.2.5.46 Comment less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state)
    fn handle_comment_less_than_sign_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('!') => {
                self.append_to_comment('!', sink)?;
                self.switch_to(TokenizerState::CommentLessThanSignBang);
            }
            Some('<') => self.append_to_comment('<', sink)?,
            _ => self.reconsume_in(TokenizerState::Comment),
        }
        Ok(())
    }

    /// [§ 13.2.5.47 Comment less-than sign bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state)
    fn handle_comment_less_than_sign_bang_state(&mut self) {
        if self.current_input_character == Some('-') {
            self.switch_to(TokenizerState::CommentLessThanSignBangDash);
        } else {
            self.reconsume_in(TokenizerState::Comment);
        }
    }

    /// [§ 13.2.5.48 Comment less-than sign bang dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state)
    fn handle_comment_less_than_sign_bang_dash_state(&mut self) {
        if self.current_input_character == Some('-') {
            self.switch_to(TokenizerState::CommentLessThanSignBangDashDash);
        } else {
            self.reconsume_in(TokenizerState::CommentEndDash);
        }
    }

    /// [§ 13.2.5.49 Comment less-than sign bang dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state)
    fn handle_comment_less_than_sign_bang_dash_dash_state(&mut self, sink: &mut dyn TokenSink) {
        // "U+003E GREATER-THAN SIGN (>), EOF - Reconsume in the comment end state."
        // "Anything else - This is a nested-comment parse error. Reconsume in the
        // comment end state."
        if !matches!(self.current_input_character, Some('>') | None) {
            self.error(
                sink,
                "Saw \u{201C}<!--\u{201D} within a comment. Probable cause: Nested comment (not allowed).",
            );
        }
        self.reconsume_in(TokenizerState::CommentEnd);
    }

    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    fn handle_comment_end_dash_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEnd),
            None => self.eof_in_comment(sink)?,
            Some(_) => {
                self.append_to_comment('-', sink)?;
                self.reconsume_in(TokenizerState::Comment);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    ///
    /// A `--` that does not end the comment is an error here even though
    /// current HTML allows it: it cannot be carried into XML.
    fn handle_comment_end_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            // "Switch to the data state. Emit the current comment token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_comment(sink)?;
            }
            Some('!') => self.switch_to(TokenizerState::CommentEndBang),
            // "Append a U+002D HYPHEN-MINUS character (-) to the comment token's data."
            Some('-') => {
                self.error(sink, "Consecutive hyphens did not terminate a comment.");
                self.append_to_comment('-', sink)?;
            }
            None => self.eof_in_comment(sink)?,
            // "Append two U+002D HYPHEN-MINUS characters (-) to the comment token's data.
            // Reconsume in the comment state."
            Some(_) => {
                self.error(sink, "Consecutive hyphens did not terminate a comment.");
                self.append_str_to_comment("--", sink)?;
                self.reconsume_in(TokenizerState::Comment);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    fn handle_comment_end_bang_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            // "Append two U+002D HYPHEN-MINUS characters (-) and a U+0021 EXCLAMATION MARK
            // character (!) to the comment token's data. Switch to the comment end dash
            // state."
            Some('-') => {
                self.append_str_to_comment("--!", sink)?;
                self.switch_to(TokenizerState::CommentEndDash);
            }
            // "This is an incorrectly-closed-comment parse error. Switch to the data state.
            // Emit the current comment token."
            Some('>') => {
                self.error(sink, "Comment ended with \u{201C}--!>\u{201D}.");
                self.switch_to(TokenizerState::Data);
                self.emit_comment(sink)?;
            }
            None => self.eof_in_comment(sink)?,
            Some(_) => {
                self.append_str_to_comment("--!", sink)?;
                self.reconsume_in(TokenizerState::Comment);
            }
        }
        Ok(())
    }
}

// =============================================================================
// DOCTYPE States
// =============================================================================

impl Tokenizer {
    fn eof_in_doctype(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        // "This is an eof-in-doctype parse error. Set the current DOCTYPE token's
        // force-quirks flag to on. Emit the current DOCTYPE token. Emit an
        // end-of-file token."
        self.error(sink, "End of file inside doctype.");
        self.doctype.force_quirks = true;
        self.emit_doctype(sink)?;
        self.emit_eof_token(sink)
    }

    /// Switch to the data state and emit the DOCTYPE.
    fn finish_doctype(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        self.switch_to(TokenizerState::Data);
        self.emit_doctype(sink)
    }

    fn bogus_doctype(&mut self, sink: &mut dyn TokenSink, force_quirks: bool) {
        self.error(sink, "Bogus doctype.");
        if force_quirks {
            self.doctype.force_quirks = true;
        }
        self.reconsume_in(TokenizerState::BogusDOCTYPE);
    }

    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    fn handle_doctype_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        self.doctype = Doctype::default();
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDOCTYPEName);
            }
            Some('>') => self.reconsume_in(TokenizerState::BeforeDOCTYPEName),
            None => self.eof_in_doctype(sink)?,
            // "This is a missing-whitespace-before-doctype-name parse error. Reconsume
            // in the before DOCTYPE name state."
            Some(_) => {
                self.error(sink, "Missing space before doctype name.");
                self.reconsume_in(TokenizerState::BeforeDOCTYPEName);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    fn handle_before_doctype_name_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            // "This is a missing-doctype-name parse error. Create a new DOCTYPE token. Set
            // its force-quirks flag to on. Switch to the data state. Emit the current token."
            Some('>') => {
                self.error(sink, "Nameless doctype.");
                self.doctype.force_quirks = true;
                self.finish_doctype(sink)?;
            }
            None => self.eof_in_doctype(sink)?,
            // "Create a new DOCTYPE token. Set the token's name to the lowercase version of
            // the current input character. Switch to the DOCTYPE name state."
            Some(c) => {
                self.doctype.name = Some(c.to_ascii_lowercase().to_string());
                self.switch_to(TokenizerState::DOCTYPEName);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    fn handle_doctype_name_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterDOCTYPEName);
            }
            Some('>') => self.finish_doctype(sink)?,
            None => self.eof_in_doctype(sink)?,
            Some(c) => {
                if let Some(name) = &mut self.doctype.name {
                    name.push(c.to_ascii_lowercase());
                }
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    fn handle_after_doctype_name_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => self.finish_doctype(sink)?,
            None => self.eof_in_doctype(sink)?,
            // "If the six characters starting from the current input character are an
            // ASCII case-insensitive match for the word "PUBLIC", then consume those
            // characters and switch to the after DOCTYPE public keyword state."
            Some('p' | 'P') => {
                self.keyword_index = 1;
                self.switch_to(TokenizerState::DOCTYPEPublicKeywordMatch);
            }
            Some('s' | 'S') => {
                self.keyword_index = 1;
                self.switch_to(TokenizerState::DOCTYPESystemKeywordMatch);
            }
            // "Otherwise, this is an invalid-character-sequence-after-doctype-name parse
            // error. Set the current DOCTYPE token's force-quirks flag to on. Reconsume
            // in the bogus DOCTYPE state."
            Some(_) => self.bogus_doctype(sink, true),
        }
        Ok(())
    }

    /// Matches the rest of `PUBLIC` or `SYSTEM` after its first letter.
    fn handle_doctype_keyword_state(
        &mut self,
        keyword: &'static str,
        next_state: TokenizerState,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        let expected = keyword.as_bytes()[self.keyword_index];
        match self.current_input_character {
            Some(c) if u32::from(c.to_ascii_lowercase()) == u32::from(expected) => {
                self.keyword_index += 1;
                if self.keyword_index == keyword.len() {
                    self.switch_to(next_state);
                }
            }
            None => self.eof_in_doctype(sink)?,
            Some(_) => self.bogus_doctype(sink, true),
        }
        Ok(())
    }

    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    /// and [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    fn handle_after_doctype_keyword_state(
        &mut self,
        public: bool,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        let keyword = if public { "PUBLIC" } else { "SYSTEM" };
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(if public {
                    TokenizerState::BeforeDOCTYPEPublicIdentifier
                } else {
                    TokenizerState::BeforeDOCTYPESystemIdentifier
                });
            }
            // "This is a missing-whitespace-after-doctype-public-keyword parse error. Set
            // the current DOCTYPE token's public identifier to the empty string (not
            // missing), then switch to the DOCTYPE public identifier (double-quoted)
            // state."
            Some(quote @ ('"' | '\'')) => {
                self.error(
                    sink,
                    format!(
                        "No space between the doctype \u{201C}{keyword}\u{201D} keyword and the quote."
                    ),
                );
                self.open_doctype_identifier(public, quote);
            }
            Some('>') => self.doctype_identifier_missing(public, sink)?,
            None => self.eof_in_doctype(sink)?,
            Some(_) => self.bogus_doctype(sink, true),
        }
        Ok(())
    }

    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    /// and [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    fn handle_before_doctype_identifier_state(
        &mut self,
        public: bool,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some(quote @ ('"' | '\'')) => self.open_doctype_identifier(public, quote),
            Some('>') => self.doctype_identifier_missing(public, sink)?,
            None => self.eof_in_doctype(sink)?,
            Some(_) => self.bogus_doctype(sink, true),
        }
        Ok(())
    }

    fn open_doctype_identifier(&mut self, public: bool, quote: char) {
        use TokenizerState as S;
        let state = if public {
            self.doctype.public_id = Some(String::new());
            if quote == '"' {
                S::DOCTYPEPublicIdentifierDoubleQuoted
            } else {
                S::DOCTYPEPublicIdentifierSingleQuoted
            }
        } else {
            self.doctype.system_id = Some(String::new());
            if quote == '"' {
                S::DOCTYPESystemIdentifierDoubleQuoted
            } else {
                S::DOCTYPESystemIdentifierSingleQuoted
            }
        };
        self.switch_to(state);
    }

    /// "This is a missing-doctype-public-identifier parse error. Set the
    /// current DOCTYPE token's force-quirks flag to on. Switch to the data
    /// state. Emit the current DOCTYPE token."
    fn doctype_identifier_missing(
        &mut self,
        public: bool,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        if public {
            self.error(sink, "Expected a public identifier but the doctype ended.");
        } else {
            self.error(sink, "Expected a system identifier but the doctype ended.");
        }
        self.doctype.force_quirks = true;
        self.finish_doctype(sink)
    }

    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    /// and the single-quoted and system identifier variants.
    fn handle_doctype_identifier_state(
        &mut self,
        public: bool,
        quote: char,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        let kind = if public { "public" } else { "system" };
        match self.current_input_character {
            Some(c) if c == quote => {
                self.switch_to(if public {
                    TokenizerState::AfterDOCTYPEPublicIdentifier
                } else {
                    TokenizerState::AfterDOCTYPESystemIdentifier
                });
            }
            // "This is an abrupt-doctype-public-identifier parse error. Set the current
            // DOCTYPE token's force-quirks flag to on. Switch to the data state. Emit
            // the current DOCTYPE token."
            Some('>') => {
                self.error(sink, format!("\u{201C}>\u{201D} in {kind} identifier."));
                self.doctype.force_quirks = true;
                self.finish_doctype(sink)?;
            }
            None => {
                self.error(sink, format!("End of file inside {kind} identifier."));
                self.doctype.force_quirks = true;
                self.emit_doctype(sink)?;
                self.emit_eof_token(sink)?;
            }
            Some(c) => {
                let identifier = if public {
                    &mut self.doctype.public_id
                } else {
                    &mut self.doctype.system_id
                };
                identifier.get_or_insert_with(String::new).push(c);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    /// and [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    fn handle_after_doctype_public_identifier_state(
        &mut self,
        directly_after: bool,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                if directly_after {
                    self.switch_to(TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers);
                }
            }
            Some('>') => self.finish_doctype(sink)?,
            Some(quote @ ('"' | '\'')) => {
                if directly_after {
                    self.error(
                        sink,
                        "No space between the doctype public and system identifiers.",
                    );
                }
                self.open_doctype_identifier(false, quote);
            }
            None => self.eof_in_doctype(sink)?,
            Some(_) => self.bogus_doctype(sink, true),
        }
        Ok(())
    }

    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    fn handle_after_doctype_system_identifier_state(
        &mut self,
        sink: &mut dyn TokenSink,
    ) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => self.finish_doctype(sink)?,
            None => self.eof_in_doctype(sink)?,
            // "This is an unexpected-character-after-doctype-system-identifier parse
            // error. Reconsume in the bogus DOCTYPE state. (This does not set the
            // current DOCTYPE token's force-quirks flag to on.)"
            Some(_) => self.bogus_doctype(sink, false),
        }
        Ok(())
    }

    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    fn handle_bogus_doctype_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            Some('>') => self.finish_doctype(sink)?,
            None => {
                self.emit_doctype(sink)?;
                self.emit_eof_token(sink)?;
            }
            Some(_) => {}
        }
        Ok(())
    }
}

// =============================================================================
// CDATA Section States
// =============================================================================

impl Tokenizer {
    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    fn handle_cdata_section_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        match self.current_input_character {
            Some(']') => self.switch_to(TokenizerState::CDATASectionBracket),
            // "This is an eof-in-cdata parse error. Emit an end-of-file token."
            None => {
                self.error(sink, "End of file inside CDATA section.");
                self.emit_eof_token(sink)?;
            }
            Some(c) => self.emit_character_token(c),
        }
        Ok(())
    }

    /// [§ 13.2.5.70 CDATA section bracket state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-bracket-state)
    fn handle_cdata_section_bracket_state(&mut self) {
        if self.current_input_character == Some(']') {
            self.switch_to(TokenizerState::CDATASectionEnd);
        } else {
            self.emit_character_token(']');
            self.reconsume_in(TokenizerState::CDATASection);
        }
    }

    /// [§ 13.2.5.71 CDATA section end state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-end-state)
    fn handle_cdata_section_end_state(&mut self) {
        match self.current_input_character {
            Some(']') => self.emit_character_token(']'),
            Some('>') => self.switch_to(TokenizerState::Data),
            _ => {
                self.emit_characters("]]");
                self.reconsume_in(TokenizerState::CDATASection);
            }
        }
    }
}

// =============================================================================
// Character Reference States
// =============================================================================

impl Tokenizer {
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    ///
    /// "Set the temporary buffer to the empty string. Append a U+0026
    /// AMPERSAND (&) character to the temporary buffer."
    fn handle_character_reference_state(&mut self) {
        self.temporary_buffer.clear();
        self.temporary_buffer.push('&');
        match self.current_input_character {
            // Not a character reference. No characters are consumed, and
            // nothing is reported.
            None | Some(' ' | '\t' | '\n' | '\x0B' | '\x0C' | '<' | '&') => {
                self.flush_code_points_consumed_as_character_reference();
                self.reconsume_in(self.return_state);
            }
            // "Append the current input character to the temporary buffer. Switch to the
            // numeric character reference state."
            Some('#') => {
                self.temporary_buffer.push('#');
                self.switch_to(TokenizerState::NumericCharacterReference);
            }
            Some(_) => {
                self.entity_matcher.reset();
                self.reconsume_in(TokenizerState::NamedCharacterReference);
            }
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    fn handle_named_character_reference_state(&mut self, sink: &mut dyn TokenSink) {
        match self.current_input_character {
            Some(c) => {
                if self.entity_matcher.feed(c) {
                    self.temporary_buffer.push(c);
                    return;
                }
            }
            None => self.entity_matcher.finish(),
        }

        // "Otherwise: Flush code points consumed as a character reference. Switch
        // to the ambiguous ampersand state."
        let Some(found) = self.entity_matcher.candidate() else {
            self.error(sink, "Text after \u{201C}&\u{201D} did not match an entity name.");
            self.flush_code_points_consumed_as_character_reference();
            self.reconsume_in(self.return_state);
            return;
        };

        // The buffer holds `&` followed by ASCII name characters.
        let mark = found.length + 1;
        if !found.ends_with_semicolon() {
            self.error(sink, "Entity reference was not terminated by a semicolon.");
            // "If the character reference was consumed as part of an attribute, and
            // the last character matched is not a U+003B SEMICOLON character (;),
            // and the next input character is either a U+003D EQUALS SIGN character
            // (=) or an ASCII alphanumeric, then, for historical reasons, flush code
            // points consumed as a character reference and switch to the return
            // state."
            if self.is_consumed_as_part_of_attribute() {
                let next = self.temporary_buffer[mark..]
                    .chars()
                    .next()
                    .or(self.current_input_character);
                if next.is_some_and(|n| n.is_ascii_alphanumeric() || n == '=') {
                    self.flush_code_points_consumed_as_character_reference();
                    self.reconsume_in(self.return_state);
                    return;
                }
            }
        }

        let unmatched = self.temporary_buffer.split_off(mark);
        self.temporary_buffer.clear();
        self.emit_or_append(found.value());
        self.emit_or_append(&unmatched);
        self.reconsume_in(self.return_state);
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    fn handle_numeric_character_reference_state(&mut self) {
        match self.current_input_character {
            // "Append the current input character to the temporary buffer. Switch to the
            // hexadecimal character reference start state."
            Some(c @ ('x' | 'X')) => {
                self.temporary_buffer.push(c);
                self.numeric_reference = NumericReference::new(true);
                self.switch_to(TokenizerState::HexadecimalCharacterReference);
            }
            _ => {
                self.numeric_reference = NumericReference::new(false);
                self.reconsume_in(TokenizerState::DecimalCharacterReference);
            }
        }
    }

    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    /// and [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    fn handle_numeric_digits_state(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        if let Some(c) = self.current_input_character
            && self.numeric_reference.push(c)
        {
            return Ok(());
        }

        if !self.numeric_reference.has_digits() {
            // "This is an absence-of-digits-in-numeric-character-reference parse
            // error. Flush code points consumed as a character reference. Reconsume
            // in the return state."
            self.error(
                sink,
                format!("No digits after \u{201C}{}\u{201D}.", self.temporary_buffer),
            );
            self.flush_code_points_consumed_as_character_reference();
            self.reconsume_in(self.return_state);
            return Ok(());
        }

        if self.current_input_character == Some(';') {
            self.handle_ncr_value(sink)?;
            self.switch_to(self.return_state);
        } else {
            // "This is a missing-semicolon-after-character-reference parse error.
            // Reconsume in the numeric character reference end state."
            self.error(sink, "Character reference was not terminated by a semicolon.");
            self.handle_ncr_value(sink)?;
            self.reconsume_in(self.return_state);
        }
        Ok(())
    }

    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    fn handle_ncr_value(&mut self, sink: &mut dyn TokenSink) -> Result<(), FatalError> {
        self.temporary_buffer.clear();
        let value = self.numeric_reference.value();

        if (value == 0x0B || value == 0x0C)
            && self.policies.content_space != XmlViolationPolicy::Allow
        {
            if self.policies.content_space == XmlViolationPolicy::Fatal {
                return Err(self.fatal(
                    sink,
                    "A character reference expanded to a space character that is not legal XML 1.0 white space.",
                ));
            }
            self.warning(
                sink,
                "A character reference expanded to a space character that is not legal XML 1.0 white space.",
            );
            self.emit_or_append(" ");
            return Ok(());
        }

        let c = match resolve_numeric(value) {
            NumericOutcome::Replaced { ch, error } => {
                self.error(sink, error);
                ch
            }
            NumericOutcome::Char(c) if value <= 0xFFFF => {
                if c < '\t' || ('\r' < c && c < ' ') || is_noncharacter(c) {
                    let alter = self.xml_violation(
                        sink,
                        self.policies.content_non_xml_char,
                        "Character reference expanded to a character that is not a legal XML 1.0 character.",
                    )?;
                    if alter { '\u{FFFD}' } else { c }
                } else {
                    if is_private_use(c) {
                        self.warn_about_private_use(sink);
                    }
                    c
                }
            }
            NumericOutcome::Char(c) => {
                if is_noncharacter(c) {
                    self.warning(sink, "Character reference expands to an astral non-character.");
                }
                if is_private_use(c) {
                    self.warn_about_private_use(sink);
                }
                c
            }
        };
        let mut encoded = [0; 4];
        self.emit_or_append(c.encode_utf8(&mut encoded));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{SinkDirective, Tag, Token};
    use bramble_common::{CollectingSink, ErrorSink};

    struct Recorder {
        tokens: Vec<Token>,
        errors: CollectingSink,
    }

    impl Recorder {
        const fn new() -> Self {
            Self {
                tokens: Vec::new(),
                errors: CollectingSink::quiet(),
            }
        }
    }

    impl TokenSink for Recorder {
        fn start_tag(&mut self, tag: Tag) -> Result<SinkDirective, FatalError> {
            let directive = match tag.name.name() {
                "title" => SinkDirective::SwitchContentModel(ContentModel::Rcdata),
                "script" | "style" => SinkDirective::SwitchContentModel(ContentModel::Cdata),
                _ => SinkDirective::Continue,
            };
            self.tokens.push(Token::StartTag(tag));
            Ok(directive)
        }

        fn end_tag(&mut self, tag: Tag) -> Result<(), FatalError> {
            self.tokens.push(Token::EndTag(tag));
            Ok(())
        }

        fn characters(&mut self, text: &str) -> Result<(), FatalError> {
            if let Some(Token::Characters(run)) = self.tokens.last_mut() {
                run.push_str(text);
            } else {
                self.tokens.push(Token::Characters(text.to_string()));
            }
            Ok(())
        }

        fn comment(&mut self, text: &str) -> Result<(), FatalError> {
            self.tokens.push(Token::Comment(text.to_string()));
            Ok(())
        }

        fn doctype(&mut self, doctype: Doctype) -> Result<SinkDirective, FatalError> {
            self.tokens.push(Token::Doctype(doctype));
            Ok(SinkDirective::Continue)
        }

        fn end_of_file(&mut self) -> Result<(), FatalError> {
            self.tokens.push(Token::EndOfFile);
            Ok(())
        }

        fn errors(&mut self) -> &mut dyn ErrorSink {
            &mut self.errors
        }
    }

    fn tokenize_chunks(chunks: &[&str]) -> Recorder {
        let mut tokenizer = Tokenizer::new(&ParserConfig::default());
        let mut recorder = Recorder::new();
        for chunk in chunks {
            tokenizer.feed(chunk, &mut recorder).unwrap();
        }
        tokenizer.end_of_input(&mut recorder).unwrap();
        recorder
    }

    fn rendered(recorder: &Recorder) -> Vec<String> {
        recorder.tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_simple_document() {
        let recorder = tokenize_chunks(&["<p class=x>Hi</p>"]);
        assert_eq!(
            rendered(&recorder),
            vec!["<p class=\"x\">", "\"Hi\"", "</p>", "EOF"]
        );
    }

    #[test]
    fn test_split_anywhere_gives_same_tokens() {
        let input = "<!DOCTYPE html><title>a &amp; b</title><!-- c --><a href='x'>&notin;</a>";
        let whole = rendered(&tokenize_chunks(&[input]));
        let chars: Vec<String> = input.chars().map(String::from).collect();
        let pieces: Vec<&str> = chars.iter().map(String::as_str).collect();
        assert_eq!(rendered(&tokenize_chunks(&pieces)), whole);
    }

    #[test]
    fn test_crlf_is_normalized_across_chunks() {
        let recorder = tokenize_chunks(&["a\r", "\nb\rc"]);
        assert_eq!(rendered(&recorder), vec!["\"a\\nb\\nc\"", "EOF"]);
    }

    #[test]
    fn test_bom_is_dropped() {
        let recorder = tokenize_chunks(&["\u{FEFF}x"]);
        assert_eq!(rendered(&recorder), vec!["\"x\"", "EOF"]);
    }

    #[test]
    fn test_rcdata_ends_only_at_matching_end_tag() {
        let recorder = tokenize_chunks(&["<title><b></b></title>"]);
        assert_eq!(
            rendered(&recorder),
            vec!["<title>", "\"<b></b>\"", "</title>", "EOF"]
        );
        assert!(
            recorder
                .errors
                .diagnostics()
                .iter()
                .any(|d| d.message.contains("did not close the element"))
        );
    }

    #[test]
    fn test_script_keeps_markup_as_text() {
        let recorder = tokenize_chunks(&["<script>if (a<b) {}</script>"]);
        assert_eq!(
            rendered(&recorder),
            vec!["<script>", "\"if (a<b) {}\"", "</script>", "EOF"]
        );
    }

    #[test]
    fn test_nul_becomes_replacement_character() {
        let recorder = tokenize_chunks(&["a\0b"]);
        assert_eq!(rendered(&recorder), vec!["\"a\u{FFFD}b\"", "EOF"]);
        assert_eq!(recorder.errors.error_count(), 1);
    }

    #[test]
    fn test_missing_semicolon_in_attribute_is_literal() {
        let recorder = tokenize_chunks(&["<a href='?a=1&copy=2'>"]);
        let Some(Token::StartTag(tag)) = recorder.tokens.first() else {
            panic!("expected a start tag");
        };
        assert_eq!(tag.attributes.value_of_qname("href"), Some("?a=1&copy=2"));
    }

    #[test]
    fn test_location_counts_lines() {
        let mut tokenizer = Tokenizer::new(&ParserConfig::default());
        let mut recorder = Recorder::new();
        tokenizer.feed("ab\ncd", &mut recorder).unwrap();
        assert_eq!(tokenizer.location(), Location::new(2, 2));
    }
}
