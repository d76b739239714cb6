//! The tree builder.
//!
//! [`TreeBuilder`] consumes tokens through [`TokenSink`] and drives a
//! [`TreeSink`]. Tag rules for each insertion mode live in `start_tag` and
//! `end_tag`; the shared algorithms (scopes, foster parenting, the adoption
//! agency) live in `helpers`.

use bramble_common::{ErrorSink, FatalError, Location};
use bramble_dom::{DocumentMode, Namespace};
use strum_macros::Display;

use crate::config::{DoctypeExpectation, ParserConfig};
use crate::names::element::{
    ANNOTATION_XML, BR, IFRAME, NOEMBED, NOFRAMES, NOSCRIPT, P, PLAINTEXT, SCRIPT, STYLE, SVG,
    TEXTAREA, TITLE, XMP,
};
use crate::names::{ElementName, Group, HtmlAttributes};
use crate::tokenizer::{ContentModel, Doctype, SinkDirective, Tag, TokenSink};

use super::foreign::{
    attribute_mode_for, is_breakout_start_tag, is_mathml_text_integration_point,
    is_mglyph_or_malignmark,
};
use super::quirks::classify_doctype;
use super::sink::TreeSink;
use super::stack::{FormattingEntry, StackNode};

/// [§ 13.2.4.1 The insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-insertion-mode)
///
/// "The insertion mode is a state variable that controls the primary operation
/// of the tree construction stage."
///
/// Text-only elements do not get a mode of their own: the tokenizer's
/// content model keeps markup out of them and the builder counts how many
/// elements the matching end tag closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InsertionMode {
    /// [§ 13.2.6.4.1 The "initial" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
    Initial,
    /// [§ 13.2.6.4.2 The "before html" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-html-insertion-mode)
    BeforeHtml,
    /// [§ 13.2.6.4.3 The "before head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-head-insertion-mode)
    BeforeHead,
    /// [§ 13.2.6.4.4 The "in head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead)
    InHead,
    /// [§ 13.2.6.4.5 The "in head noscript" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inheadnoscript)
    InHeadNoscript,
    /// [§ 13.2.6.4.6 The "after head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-head-insertion-mode)
    AfterHead,
    /// [§ 13.2.6.4.7 The "in body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    InBody,
    /// [§ 13.2.6.4.9 The "in table" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-intable)
    InTable,
    /// [§ 13.2.6.4.11 The "in caption" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incaption)
    InCaption,
    /// [§ 13.2.6.4.12 The "in column group" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incolumngroup)
    InColumnGroup,
    /// [§ 13.2.6.4.13 The "in table body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-intablebody)
    InTableBody,
    /// [§ 13.2.6.4.14 The "in row" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inrow)
    InRow,
    /// [§ 13.2.6.4.15 The "in cell" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incell)
    InCell,
    /// [§ 13.2.6.4.16 The "in select" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inselect)
    InSelect,
    /// [§ 13.2.6.4.17 The "in select in table" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inselectintable)
    InSelectInTable,
    /// [§ 13.2.6.4.19 The "after body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-afterbody)
    AfterBody,
    /// [§ 13.2.6.4.20 The "in frameset" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inframeset)
    InFrameset,
    /// [§ 13.2.6.4.21 The "after frameset" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-afterframeset)
    AfterFrameset,
    /// [§ 13.2.6.4.22 The "after after body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-after-body-insertion-mode)
    AfterAfterBody,
    /// [§ 13.2.6.4.23 The "after after frameset" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-after-frameset-insertion-mode)
    AfterAfterFrameset,
}

impl InsertionMode {
    /// The modes whose misplaced content is foster parented.
    #[must_use]
    pub const fn is_table_mode(self) -> bool {
        matches!(self, Self::InTable | Self::InTableBody | Self::InRow)
    }

    /// The modes a `select` inside a table is opened from.
    #[must_use]
    pub const fn is_in_table_context(self) -> bool {
        matches!(
            self,
            Self::InTable | Self::InCaption | Self::InTableBody | Self::InRow | Self::InCell
        )
    }
}

/// What a tag rule did with its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    /// The token was consumed. The directive goes back to the tokenizer.
    Done(SinkDirective),
    /// "reprocess the token" in the (possibly new) insertion mode.
    Reprocess,
    /// Reprocess by the insertion mode even though the current node is
    /// foreign.
    ReprocessAsHtml,
}

impl Step {
    pub(super) const DONE: Self = Self::Done(SinkDirective::Continue);
}

/// Where a new node goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Placement {
    /// Always the current node.
    Current,
    /// The current node, or the foster parent when the current node is a
    /// table part.
    MayFoster,
}

/// [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
///
/// "As each token is emitted from the tokenizer, the user agent must follow
/// the appropriate steps from the following list, known as the tree
/// construction dispatcher"
pub struct TreeBuilder<S: TreeSink> {
    pub(super) sink: S,

    pub(super) errors: Box<dyn ErrorSink>,

    /// [§ 13.2.4.1 The insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-insertion-mode)
    pub(super) mode: InsertionMode,

    /// [§ 13.2.4.2 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)
    ///
    /// The first entry is the `html` element.
    pub(super) stack: Vec<StackNode<S::Handle>>,

    /// [§ 13.2.4.3 The list of active formatting elements](https://html.spec.whatwg.org/multipage/parsing.html#the-list-of-active-formatting-elements)
    pub(super) formatting: Vec<FormattingEntry<S::Handle>>,

    /// [§ 13.2.4.4 The element pointers](https://html.spec.whatwg.org/multipage/parsing.html#the-element-pointers)
    pub(super) head_pointer: Option<S::Handle>,

    /// [§ 13.2.4.4 The element pointers](https://html.spec.whatwg.org/multipage/parsing.html#form-element-pointer)
    pub(super) form_pointer: Option<S::Handle>,

    /// [§ 13.4 Parsing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#concept-frag-parse-context)
    pub(super) context: Option<ElementName>,

    /// Elements the next end tag closes while the tokenizer is in RCDATA or
    /// CDATA. Two when a `title` or `script` after the head reopened it.
    pub(super) raw_text_pops: usize,

    /// "If the next token is a U+000A LINE FEED (LF) character token, then
    /// ignore that token and move on to the next one."
    pub(super) need_to_drop_lf: bool,

    /// [§ 13.2.4.5 Other parsing state flags](https://html.spec.whatwg.org/multipage/parsing.html#frameset-ok-flag)
    pub(super) frameset_ok: bool,

    pub(super) document_mode: DocumentMode,
    pub(super) doctype_expectation: DoctypeExpectation,

    /// [§ 13.2.4.5](https://html.spec.whatwg.org/multipage/parsing.html#scripting-flag)
    pub(super) scripting_enabled: bool,
    pub(super) report_comments: bool,
    pub(super) report_doctype: bool,

    /// Where the token being processed started.
    pub(super) location: Location,
}

impl<S: TreeSink> TreeBuilder<S> {
    /// A builder that reports to `errors` and builds into `sink`.
    #[must_use]
    pub fn new(sink: S, config: &ParserConfig, errors: Box<dyn ErrorSink>) -> Self {
        Self {
            sink,
            errors,
            mode: InsertionMode::Initial,
            stack: Vec::new(),
            formatting: Vec::new(),
            head_pointer: None,
            form_pointer: None,
            context: None,
            raw_text_pops: 0,
            need_to_drop_lf: false,
            frameset_ok: true,
            document_mode: DocumentMode::Standards,
            doctype_expectation: config.doctype_expectation,
            scripting_enabled: config.scripting_enabled,
            report_comments: config.report_comments,
            report_doctype: config.report_doctype,
            location: Location::new(1, 1),
        }
    }

    /// Begin parsing a whole document.
    pub fn start_document(&mut self) {
        self.sink.on_start(false);
        self.mode = InsertionMode::Initial;
    }

    /// [§ 13.4 Parsing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#parsing-html-fragments)
    ///
    /// Begin parsing the children of a `context` element. Returns the
    /// content model the tokenizer has to start in.
    pub fn start_fragment(&mut self, context: ElementName) -> ContentModel {
        self.sink.on_start(true);

        // STEP 4: "Let root be a new html element with no attributes."
        // STEP 5: "Append the element root to the Document node created above."
        // STEP 6: "Set up the parser's stack of open elements so that it
        //          contains just the single element root."
        self.append_html_root(&HtmlAttributes::default());

        // "Set the state of the HTML parser's tokenization stage as follows"
        let model = if context == TITLE || context == TEXTAREA {
            ContentModel::Rcdata
        } else if context == STYLE
            || context == SCRIPT
            || context == XMP
            || context == IFRAME
            || context == NOEMBED
            || context == NOFRAMES
            || (context == NOSCRIPT && self.scripting_enabled)
        {
            ContentModel::Cdata
        } else if context == PLAINTEXT {
            ContentModel::Plaintext
        } else {
            ContentModel::Pcdata
        };

        // STEP 9: "Reset the parser's insertion mode appropriately."
        self.context = Some(context);
        self.reset_insertion_mode();
        model
    }

    /// The document mode the doctype settled on.
    #[must_use]
    pub const fn document_mode(&self) -> DocumentMode {
        self.document_mode
    }

    /// The current insertion mode.
    #[must_use]
    pub const fn insertion_mode(&self) -> InsertionMode {
        self.mode
    }

    /// The tree being built.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// The error sink shared with the tokenizer.
    pub fn errors_mut(&mut self) -> &mut dyn ErrorSink {
        self.errors.as_mut()
    }

    /// Stop building and hand back the tree.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Where markup like `<svg>` leaves the tree builder's HTML rules.
    ///
    /// [§ 13.2.6 Tree construction dispatcher](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction-dispatcher)
    fn start_tag_is_foreign(&self, tag: &Tag) -> bool {
        let Some(current) = self.stack.last() else {
            return false;
        };
        if current.namespace == Namespace::Html {
            return false;
        }
        // "If the adjusted current node is a MathML text integration point
        // and the token is a start tag whose tag name is neither "mglyph"
        // nor "malignmark""
        if is_mathml_text_integration_point(current) && !is_mglyph_or_malignmark(&tag.name) {
            return false;
        }
        // "If the adjusted current node is a MathML annotation-xml element
        // and the token is a start tag whose tag name is "svg""
        if current.namespace == Namespace::MathMl
            && current.name == ANNOTATION_XML
            && tag.name == SVG
        {
            return false;
        }
        !current.html_integration_point
    }

    fn characters_are_foreign(&self) -> bool {
        self.stack.last().is_some_and(|current| {
            current.namespace != Namespace::Html
                && !current.html_integration_point
                && !is_mathml_text_integration_point(current)
        })
    }

    /// [§ 13.2.6.5 The rules for parsing tokens in foreign content](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inforeign)
    fn start_tag_in_foreign_content(&mut self, tag: &mut Tag) -> Step {
        if is_breakout_start_tag(&tag.name, &tag.attributes) {
            self.err(format!(
                "HTML start tag \u{201C}{}\u{201D} in a foreign namespace context.",
                tag.name
            ));
            self.pop_to_html_or_integration_point();
            return Step::Reprocess;
        }
        let Some(namespace) = self.stack.last().map(|current| current.namespace) else {
            return Step::DONE;
        };
        // "Adjust MathML attributes" / "adjust SVG attributes" and "adjust
        // foreign attributes" are projections of the attribute list.
        tag.attributes.set_mode(attribute_mode_for(namespace));
        self.insert_foreign_element(tag, namespace, Placement::Current);
        Step::DONE
    }

    fn end_tag_in_foreign_content(&mut self, tag: &Tag) -> Step {
        if tag.name == BR || tag.name == P {
            self.err(format!(
                "HTML end tag \u{201C}{}\u{201D} in a foreign namespace context.",
                tag.name
            ));
            // "Pop elements until the current node is an HTML element or an
            // integration point, then reprocess the token according to the
            // rules for the current insertion mode in HTML content."
            self.pop_to_html_or_integration_point();
            return Step::ReprocessAsHtml;
        }

        // STEP 1: "Initialize node to be the current node (the bottommost
        //          node of the stack)."
        let Some(mut index) = self.stack.len().checked_sub(1) else {
            return Step::DONE;
        };

        // STEP 2: "If node's tag name, converted to ASCII lowercase, is not
        //          the same as the tag name of the token, then this is a
        //          parse error."
        if self.stack[index].name != tag.name {
            self.err(format!(
                "End tag \u{201C}{}\u{201D} did not match the name of the current open element (\u{201C}{}\u{201D}).",
                tag.name, self.stack[index].name
            ));
        }

        loop {
            // STEP 3: "Loop: If node is the topmost element in the stack of
            //          open elements, then return. (fragment case)"
            if index == 0 {
                return Step::DONE;
            }
            // STEP 4: "If node's tag name, converted to ASCII lowercase, is
            //          the same as the tag name of the token, pop elements
            //          from the stack of open elements until node has been
            //          popped from the stack, and then return."
            if self.stack[index].name == tag.name {
                self.pop_until(index);
                return Step::DONE;
            }
            // STEP 5: "Set node to the previous entry in the stack of open
            //          elements."
            index -= 1;
            // STEP 6: "If node is not an element in the HTML namespace,
            //          return to the step labeled loop."
            // STEP 7: "Otherwise, process the token according to the rules
            //          given in the section corresponding to the current
            //          insertion mode in HTML content."
            if self.stack[index].namespace == Namespace::Html {
                return Step::ReprocessAsHtml;
            }
        }
    }

    fn process_doctype(&mut self, doctype: &Doctype) -> SinkDirective {
        if self.mode != InsertionMode::Initial {
            self.err("Stray doctype.");
            return SinkDirective::Continue;
        }

        // [§ 13.2.6.4.1 The "initial" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
        let verdict = classify_doctype(
            doctype.name.as_deref(),
            doctype.public_id.as_deref(),
            doctype.system_id.as_deref(),
            doctype.force_quirks,
            self.doctype_expectation,
        );

        // "Append a DocumentType node to the Document node, with its name
        // set to the name given in the DOCTYPE token, or the empty string if
        // the name was missing"
        if self.report_doctype {
            self.sink.append_doctype_to_document(
                doctype.name.as_deref().unwrap_or(""),
                doctype.public_id.as_deref().unwrap_or(""),
                doctype.system_id.as_deref().unwrap_or(""),
            );
        }
        for message in &verdict.errors {
            self.err(*message);
        }
        for message in &verdict.warnings {
            self.warn(*message);
        }
        self.set_document_mode(
            verdict.mode,
            doctype.public_id.as_deref(),
            doctype.system_id.as_deref(),
            verdict.html4,
        );

        // "Then, switch the insertion mode to "before html"."
        self.mode = InsertionMode::BeforeHtml;
        if verdict.html4 {
            SinkDirective::EnableHtml4Errors
        } else {
            SinkDirective::Continue
        }
    }

    /// [§ 13.2.6.4 A comment token](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    fn process_comment(&mut self, text: &str) {
        match self.mode {
            // "Insert a comment as the last child of the Document object."
            InsertionMode::Initial
            | InsertionMode::BeforeHtml
            | InsertionMode::AfterAfterBody
            | InsertionMode::AfterAfterFrameset => self.sink.append_comment_to_document(text),
            // "Insert a comment as the last child of the first element in
            // the stack of open elements (the html element)."
            InsertionMode::AfterBody => match self.stack.first() {
                Some(root) => {
                    let root = root.node.clone();
                    self.sink.append_comment(&root, text);
                }
                None => self.sink.append_comment_to_document(text),
            },
            // "Insert a comment."
            _ => match self.current_handle() {
                Some(current) => self.sink.append_comment(&current, text),
                None => self.sink.append_comment_to_document(text),
            },
        }
    }

    /// Character tokens, one run at a time.
    ///
    /// Runs are split only where a mode treats whitespace and other
    /// characters differently.
    fn process_characters(&mut self, mut text: &str) {
        if self.need_to_drop_lf {
            self.need_to_drop_lf = false;
            if let Some(rest) = text.strip_prefix('\n') {
                text = rest;
            }
        }
        if text.is_empty() {
            return;
        }

        if self.raw_text_pops > 0 {
            self.append_text_to_current(text);
            return;
        }
        if self.characters_are_foreign() {
            // "Insert the token's character." Non-whitespace also sets the
            // frameset-ok flag to "not ok".
            if text.chars().any(|c| !is_space(c)) {
                self.frameset_ok = false;
            }
            self.append_text_to_current(text);
            return;
        }

        match self.mode {
            InsertionMode::InBody | InsertionMode::InCell | InsertionMode::InCaption => {
                // "Reconstruct the active formatting elements, if any."
                self.reconstruct_active_formatting_elements();
                // "Insert the token's character."
                self.append_text_to_current(text);
                // "Set the frameset-ok flag to "not ok"."
                if text.chars().any(|c| !is_space(c)) {
                    self.frameset_ok = false;
                }
                return;
            }
            InsertionMode::InSelect | InsertionMode::InSelectInTable => {
                self.append_text_to_current(text);
                return;
            }
            _ => {}
        }

        let mut start = 0;
        let mut i = 0;
        while i < text.len() {
            let Some(c) = text[i..].chars().next() else {
                break;
            };
            let next = i + c.len_utf8();
            if is_space(c) {
                match self.mode {
                    // "Ignore the token."
                    InsertionMode::Initial
                    | InsertionMode::BeforeHtml
                    | InsertionMode::BeforeHead => start = next,
                    InsertionMode::InTable | InsertionMode::InTableBody | InsertionMode::InRow => {
                        if self.is_tainted() {
                            self.append_text_to_current(&text[start..i]);
                            self.reconstruct_active_formatting_elements();
                            self.append_text_may_foster(&text[i..next]);
                            start = next;
                        }
                    }
                    InsertionMode::InBody
                    | InsertionMode::InCell
                    | InsertionMode::InCaption
                    | InsertionMode::InSelect
                    | InsertionMode::InSelectInTable => {
                        self.append_text_to_current(&text[start..i]);
                        self.process_characters(&text[i..]);
                        return;
                    }
                    InsertionMode::AfterBody
                    | InsertionMode::AfterAfterBody
                    | InsertionMode::AfterAfterFrameset => {
                        self.append_text_to_current(&text[start..i]);
                        start = i;
                        self.reconstruct_active_formatting_elements();
                    }
                    // "Insert the character."
                    InsertionMode::InHead
                    | InsertionMode::InHeadNoscript
                    | InsertionMode::AfterHead
                    | InsertionMode::InColumnGroup
                    | InsertionMode::InFrameset
                    | InsertionMode::AfterFrameset => {}
                }
            } else {
                match self.mode {
                    InsertionMode::Initial => {
                        self.missing_doctype("Non-space characters found without seeing a doctype first.");
                        continue;
                    }
                    InsertionMode::BeforeHtml => {
                        self.append_html_root(&HtmlAttributes::default());
                        self.mode = InsertionMode::BeforeHead;
                        continue;
                    }
                    InsertionMode::BeforeHead => {
                        self.append_text_to_current(&text[start..i]);
                        start = i;
                        self.insert_head(&HtmlAttributes::default());
                        self.mode = InsertionMode::InHead;
                        continue;
                    }
                    InsertionMode::InHead => {
                        self.append_text_to_current(&text[start..i]);
                        start = i;
                        self.pop();
                        self.mode = InsertionMode::AfterHead;
                        continue;
                    }
                    InsertionMode::InHeadNoscript => {
                        self.append_text_to_current(&text[start..i]);
                        start = i;
                        self.err("Non-space character inside \u{201C}noscript\u{201D} inside \u{201C}head\u{201D}.");
                        self.pop();
                        self.mode = InsertionMode::InHead;
                        continue;
                    }
                    InsertionMode::AfterHead => {
                        self.append_text_to_current(&text[start..i]);
                        start = i;
                        self.insert_body(&HtmlAttributes::default());
                        self.mode = InsertionMode::InBody;
                        continue;
                    }
                    InsertionMode::InBody
                    | InsertionMode::InCell
                    | InsertionMode::InCaption
                    | InsertionMode::InSelect
                    | InsertionMode::InSelectInTable => {
                        self.append_text_to_current(&text[start..i]);
                        self.process_characters(&text[i..]);
                        return;
                    }
                    InsertionMode::InTable | InsertionMode::InTableBody | InsertionMode::InRow => {
                        self.append_text_to_current(&text[start..i]);
                        self.reconstruct_active_formatting_elements();
                        self.err("Misplaced non-space characters inside a table.");
                        self.append_text_may_foster(&text[i..next]);
                        self.frameset_ok = false;
                        start = next;
                    }
                    InsertionMode::InColumnGroup => {
                        self.append_text_to_current(&text[start..i]);
                        if self.stack.len() == 1 {
                            self.err("Non-space in \u{201C}colgroup\u{201D} when parsing fragment.");
                            start = next;
                        } else {
                            start = i;
                            self.pop();
                            self.mode = InsertionMode::InTable;
                            continue;
                        }
                    }
                    InsertionMode::AfterBody => {
                        self.err("Non-space character after body.");
                        self.mode = InsertionMode::InBody;
                        continue;
                    }
                    InsertionMode::InFrameset => {
                        self.append_text_to_current(&text[start..i]);
                        self.err("Non-space in \u{201C}frameset\u{201D}.");
                        start = next;
                    }
                    InsertionMode::AfterFrameset => {
                        self.append_text_to_current(&text[start..i]);
                        self.err("Non-space after \u{201C}frameset\u{201D}.");
                        start = next;
                    }
                    InsertionMode::AfterAfterBody => {
                        self.err("Non-space character in page trailer.");
                        self.mode = InsertionMode::InBody;
                        continue;
                    }
                    InsertionMode::AfterAfterFrameset => {
                        self.append_text_to_current(&text[start..i]);
                        self.err("Non-space character in page trailer.");
                        start = next;
                    }
                }
            }
            i = next;
        }
        if start < text.len() {
            self.append_text_to_current(&text[start..]);
        }
    }

    /// [§ 13.2.6.4 An end-of-file token](https://html.spec.whatwg.org/multipage/parsing.html#stop-parsing)
    fn process_end_of_file(&mut self) {
        if self.raw_text_pops > 0 {
            self.err("End of file seen when expecting text or an end tag.");
            while self.raw_text_pops > 0 {
                self.pop();
                self.raw_text_pops -= 1;
            }
        }

        loop {
            match self.mode {
                InsertionMode::Initial => {
                    self.missing_doctype("End of file seen without seeing a doctype first.");
                }
                InsertionMode::BeforeHtml => {
                    self.append_html_root(&HtmlAttributes::default());
                    self.mode = InsertionMode::BeforeHead;
                }
                InsertionMode::BeforeHead => {
                    self.insert_head(&HtmlAttributes::default());
                    self.mode = InsertionMode::InHead;
                }
                InsertionMode::InHead => {
                    if self.stack.len() > 2 {
                        self.err("End of file seen and there were open elements.");
                    }
                    self.pop_until(1);
                    self.mode = InsertionMode::AfterHead;
                }
                InsertionMode::InHeadNoscript => {
                    self.err("End of file seen and there were open elements.");
                    self.pop_until(2);
                    self.mode = InsertionMode::InHead;
                }
                InsertionMode::AfterHead => {
                    self.insert_body(&HtmlAttributes::default());
                    self.mode = InsertionMode::InBody;
                }
                InsertionMode::InBody
                | InsertionMode::InTable
                | InsertionMode::InCaption
                | InsertionMode::InColumnGroup
                | InsertionMode::InTableBody
                | InsertionMode::InRow
                | InsertionMode::InCell
                | InsertionMode::InSelect
                | InsertionMode::InSelectInTable => {
                    // "If there is a node in the stack of open elements that
                    // is not either a dd element, a dt element, an li
                    // element, ... or the html element, then this is a parse
                    // error."
                    if self.stack.iter().any(|node| !closes_silently(node)) {
                        self.err("End of file seen and there were open elements.");
                    }
                    if self.context.is_none() {
                        self.body_closed();
                        self.html_closed();
                    }
                    break;
                }
                InsertionMode::InFrameset => {
                    if self.stack.len() > 1 {
                        self.err("End of file seen and there were open elements.");
                    }
                    break;
                }
                InsertionMode::AfterBody | InsertionMode::AfterFrameset => {
                    if self.context.is_none() {
                        self.html_closed();
                    }
                    break;
                }
                InsertionMode::AfterAfterBody | InsertionMode::AfterAfterFrameset => break,
            }
        }

        // "Pop all the nodes off the stack of open elements."
        self.pop_until(0);
        self.formatting.clear();
        self.sink.on_end();
    }
}

/// Whether an open element may be left open at the end of input or at
/// `</body>` without an error.
pub(super) fn closes_silently<H>(node: &StackNode<H>) -> bool {
    node.namespace == Namespace::Html
        && matches!(
            node.name.group(),
            Group::Dd
                | Group::Li
                | Group::Optgroup
                | Group::Option
                | Group::P
                | Group::Tbody
                | Group::Td
                | Group::Tr
                | Group::Body
                | Group::Html
        )
}

/// "U+0009 CHARACTER TABULATION, U+000A LINE FEED (LF), U+000B LINE
/// TABULATION, U+000C FORM FEED (FF), or U+0020 SPACE"
pub(super) const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}')
}

impl<S: TreeSink> TokenSink for TreeBuilder<S> {
    fn start_tag(&mut self, mut tag: Tag) -> Result<SinkDirective, FatalError> {
        self.need_to_drop_lf = false;
        let mut as_html = false;
        loop {
            let step = if !as_html && self.start_tag_is_foreign(&tag) {
                self.start_tag_in_foreign_content(&mut tag)
            } else {
                self.start_tag_in_mode(&mut tag)
            };
            match step {
                Step::Done(directive) => return Ok(directive),
                Step::Reprocess => as_html = false,
                Step::ReprocessAsHtml => as_html = true,
            }
        }
    }

    fn end_tag(&mut self, tag: Tag) -> Result<(), FatalError> {
        self.need_to_drop_lf = false;
        if self.raw_text_pops > 0 {
            while self.raw_text_pops > 0 {
                self.pop();
                self.raw_text_pops -= 1;
            }
            return Ok(());
        }
        let mut as_html = false;
        loop {
            let foreign = !as_html
                && self
                    .stack
                    .last()
                    .is_some_and(|current| current.namespace != Namespace::Html);
            let step = if foreign {
                self.end_tag_in_foreign_content(&tag)
            } else {
                self.end_tag_in_mode(&tag)
            };
            match step {
                Step::Done(_) => return Ok(()),
                Step::Reprocess => as_html = false,
                Step::ReprocessAsHtml => as_html = true,
            }
        }
    }

    fn characters(&mut self, text: &str) -> Result<(), FatalError> {
        self.process_characters(text);
        Ok(())
    }

    fn comment(&mut self, text: &str) -> Result<(), FatalError> {
        self.need_to_drop_lf = false;
        self.process_comment(text);
        Ok(())
    }

    fn doctype(&mut self, doctype: Doctype) -> Result<SinkDirective, FatalError> {
        self.need_to_drop_lf = false;
        Ok(self.process_doctype(&doctype))
    }

    fn end_of_file(&mut self) -> Result<(), FatalError> {
        self.process_end_of_file();
        Ok(())
    }

    fn wants_comments(&self) -> bool {
        self.report_comments
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// "If there is an adjusted current node and it is not an element in
    /// the HTML namespace, then switch to the CDATA section start state."
    fn cdata_sections_allowed(&self) -> bool {
        self.stack
            .last()
            .is_some_and(|current| current.namespace != Namespace::Html)
    }

    fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    fn errors(&mut self) -> &mut dyn ErrorSink {
        self.errors.as_mut()
    }
}
