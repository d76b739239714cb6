//! Start tag rules for every insertion mode.

use bramble_dom::{DocumentMode, Namespace};

use crate::names::attribute::{ACTION, NAME, PROMPT, TYPE};
use crate::names::element::{
    A, ADDRESS, BASEFONT, BGSOUND, BODY, BUTTON, CAPTION, COLGROUP, DIV, FORM, FRAMESET, HR,
    HTML, IFRAME, IMG, INPUT, LABEL, NOBR, OPTGROUP, OPTION, P, TABLE, TBODY, TR,
};
use crate::names::{Group, HtmlAttributes};
use crate::tokenizer::{ContentModel, SinkDirective, Tag};

use super::core::{InsertionMode, Placement, Step, TreeBuilder};
use super::helpers::Scope;
use super::sink::TreeSink;
use super::stack::FormattingEntry;

/// The label text an `isindex` expands to when it has no `prompt`.
const DEFAULT_ISINDEX_PROMPT: &str = "This is a searchable index. Insert your search keywords here: ";

impl<S: TreeSink> TreeBuilder<S> {
    /// Process a start tag by the rules of the current insertion mode.
    pub(super) fn start_tag_in_mode(&mut self, tag: &mut Tag) -> Step {
        match self.mode {
            InsertionMode::Initial => {
                self.missing_doctype("Start tag seen without seeing a doctype first.");
                Step::Reprocess
            }
            InsertionMode::BeforeHtml => self.start_tag_before_html(tag),
            InsertionMode::BeforeHead => self.start_tag_before_head(tag),
            InsertionMode::InHead => self.start_tag_in_head(tag),
            InsertionMode::InHeadNoscript => self.start_tag_in_head_noscript(tag),
            InsertionMode::AfterHead => self.start_tag_after_head(tag),
            InsertionMode::InBody => self.start_tag_in_body(tag),
            InsertionMode::InTable => self.start_tag_in_table(tag),
            InsertionMode::InCaption => self.start_tag_in_caption(tag),
            InsertionMode::InColumnGroup => self.start_tag_in_column_group(tag),
            InsertionMode::InTableBody => self.start_tag_in_table_body(tag),
            InsertionMode::InRow => self.start_tag_in_row(tag),
            InsertionMode::InCell => self.start_tag_in_cell(tag),
            InsertionMode::InSelect => self.start_tag_in_select(tag),
            InsertionMode::InSelectInTable => self.start_tag_in_select_in_table(tag),
            InsertionMode::AfterBody => self.start_tag_after_body(tag),
            InsertionMode::InFrameset => self.start_tag_in_frameset(tag),
            InsertionMode::AfterFrameset => self.start_tag_after_frameset(tag),
            InsertionMode::AfterAfterBody => {
                self.stray_start_tag(&tag.name);
                self.mode = InsertionMode::InBody;
                Step::Reprocess
            }
            InsertionMode::AfterAfterFrameset => self.start_tag_after_after_frameset(tag),
        }
    }

    /// [§ 13.2.6.4.2 The "before html" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-html-insertion-mode)
    fn start_tag_before_html(&mut self, tag: &Tag) -> Step {
        if tag.name == HTML {
            // "Create an element for the token in the HTML namespace, with
            // the Document as the intended parent."
            self.append_html_root(&tag.attributes);
            self.mode = InsertionMode::BeforeHead;
            return Step::DONE;
        }
        // "Create an html element whose node document is the Document
        // object. Append it to the Document object. Put this element in the
        // stack of open elements."
        self.append_html_root(&HtmlAttributes::default());
        self.mode = InsertionMode::BeforeHead;
        Step::Reprocess
    }

    /// [§ 13.2.6.4.3 The "before head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-head-insertion-mode)
    fn start_tag_before_head(&mut self, tag: &Tag) -> Step {
        match tag.name.group() {
            // "Process the token using the rules for the "in body" insertion
            // mode."
            Group::Html => self.start_tag_stray_html(tag),
            Group::Head => {
                self.insert_head(&tag.attributes);
                self.mode = InsertionMode::InHead;
                Step::DONE
            }
            _ => {
                self.insert_head(&HtmlAttributes::default());
                self.mode = InsertionMode::InHead;
                Step::Reprocess
            }
        }
    }

    /// [§ 13.2.6.4.4 The "in head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead)
    fn start_tag_in_head(&mut self, tag: &Tag) -> Step {
        if let Some(step) = self.insert_head_content(tag) {
            return step;
        }
        match tag.name.group() {
            Group::Html => self.start_tag_stray_html(tag),
            Group::Noscript => {
                // "A start tag whose tag name is "noscript", if the
                // scripting flag is enabled"
                if self.scripting_enabled {
                    return self.insert_raw_text_element(tag, ContentModel::Cdata, Placement::Current);
                }
                // "Insert an HTML element for the token. Switch the insertion
                // mode to "in head noscript"."
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::Current);
                self.mode = InsertionMode::InHeadNoscript;
                Step::DONE
            }
            Group::Head => {
                self.err("Start tag for \u{201C}head\u{201D} seen when \u{201C}head\u{201D} was already open.");
                Step::DONE
            }
            _ => {
                // "Pop the current node (which will be the head element) off
                // the stack of open elements."
                self.pop();
                self.mode = InsertionMode::AfterHead;
                Step::Reprocess
            }
        }
    }

    /// [§ 13.2.6.4.5 The "in head noscript" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inheadnoscript)
    fn start_tag_in_head_noscript(&mut self, tag: &Tag) -> Step {
        match tag.name.group() {
            Group::Html => self.start_tag_stray_html(tag),
            Group::Link | Group::Meta | Group::Style | Group::Noframes => {
                self.insert_head_content(tag).unwrap_or(Step::DONE)
            }
            Group::Area if is_head_content(tag) => {
                self.insert_head_content(tag).unwrap_or(Step::DONE)
            }
            Group::Head => {
                self.err("Start tag for \u{201C}head\u{201D} seen when \u{201C}head\u{201D} was already open.");
                Step::DONE
            }
            Group::Noscript => {
                self.err("Start tag for \u{201C}noscript\u{201D} seen when \u{201C}noscript\u{201D} was already open.");
                Step::DONE
            }
            _ => {
                self.err("Bad start tag in \u{201C}noscript\u{201D} in \u{201C}head\u{201D}.");
                self.pop();
                self.mode = InsertionMode::InHead;
                Step::Reprocess
            }
        }
    }

    /// [§ 13.2.6.4.6 The "after head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-head-insertion-mode)
    fn start_tag_after_head(&mut self, tag: &Tag) -> Step {
        match tag.name.group() {
            Group::Html => self.start_tag_stray_html(tag),
            Group::Body => {
                self.insert_body(&tag.attributes);
                self.frameset_ok = false;
                self.mode = InsertionMode::InBody;
                Step::DONE
            }
            Group::Frameset => {
                let _ = self.insert_html_element(&FRAMESET, &tag.attributes, Placement::Current);
                self.mode = InsertionMode::InFrameset;
                Step::DONE
            }
            Group::Base
            | Group::Link
            | Group::Meta
            | Group::Script
            | Group::Style
            | Group::Title
            | Group::Noframes
            | Group::Area => {
                // basefont and bgsound share the area group but not its
                // rule here.
                if !is_head_content(tag) {
                    return self.implied_body();
                }
                if matches!(tag.name.group(), Group::Script | Group::Style) {
                    self.err(format!(
                        "\u{201C}{}\u{201D} element between \u{201C}head\u{201D} and \u{201C}body\u{201D}.",
                        tag.name
                    ));
                } else {
                    self.err(format!(
                        "\u{201C}{}\u{201D} element outside \u{201C}head\u{201D}.",
                        tag.name
                    ));
                }
                // "Push the node pointed to by the head element pointer onto
                // the stack of open elements. Process the token using the
                // rules for the "in head" insertion mode. Remove the node
                // pointed to by the head element pointer from the stack of
                // open elements."
                if !self.push_head_pointer_onto_stack() {
                    return self.implied_body();
                }
                match self.insert_head_content(tag) {
                    Some(Step::Done(SinkDirective::SwitchContentModel(model))) => {
                        // The end tag pops the raw text element and the head.
                        self.raw_text_pops = 2;
                        Step::Done(SinkDirective::SwitchContentModel(model))
                    }
                    step => {
                        self.pop();
                        step.unwrap_or(Step::DONE)
                    }
                }
            }
            Group::Head => {
                self.err("Start tag for \u{201C}head\u{201D} seen when \u{201C}head\u{201D} was already open.");
                Step::DONE
            }
            _ => self.implied_body(),
        }
    }

    /// "Insert an HTML element for a "body" start tag token with no
    /// attributes. Switch the insertion mode to "in body". Reprocess the
    /// current token."
    fn implied_body(&mut self) -> Step {
        self.insert_body(&HtmlAttributes::default());
        self.mode = InsertionMode::InBody;
        Step::Reprocess
    }

    /// [§ 13.2.6.4.7 The "in body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    ///
    /// Also the fallback for the table modes, where `Placement::MayFoster`
    /// takes care of foster parenting.
    #[allow(clippy::too_many_lines)]
    fn start_tag_in_body(&mut self, tag: &mut Tag) -> Step {
        if is_head_content(tag) {
            return self.insert_head_content(tag).unwrap_or(Step::DONE);
        }
        match tag.name.group() {
            Group::Html => self.start_tag_stray_html(tag),
            Group::Body => {
                self.err("\u{201C}body\u{201D} start tag found but the \u{201C}body\u{201D} element is already open.");
                // "If the second element on the stack of open elements is not
                // a body element, if the stack of open elements has only one
                // node on it, ... ignore the token. (fragment case)"
                if let Some(body) = self.stack.get(1).filter(|node| node.is_html(&BODY)) {
                    let body = body.node.clone();
                    self.frameset_ok = false;
                    self.sink.add_attributes_to_element(&body, &tag.attributes);
                }
                Step::DONE
            }
            Group::Frameset => {
                self.stray_start_tag(&tag.name);
                // "If the stack of open elements has only one node on it, or
                // if the second element on the stack of open elements is not
                // a body element, then ignore the token. (fragment case)"
                // "If the frameset-ok flag is set to "not ok", ignore the
                // token."
                let body = match self.stack.get(1) {
                    Some(node) if node.is_html(&BODY) && self.frameset_ok => node.node.clone(),
                    _ => return Step::DONE,
                };
                // STEP 1: "Remove the second element on the stack of open
                //          elements from its parent node, if it has one."
                self.sink.detach_from_parent(&body);
                // STEP 2: "Pop all the nodes from the bottom of the stack of
                //          open elements, from the current node up to, but
                //          not including, the root html element."
                self.pop_until(1);
                // STEP 3: "Insert an HTML element for the token."
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::Current);
                // STEP 4: "Switch the insertion mode to "in frameset"."
                self.mode = InsertionMode::InFrameset;
                Step::DONE
            }
            Group::P | Group::Div | Group::Fieldset | Group::Ol => {
                self.implicitly_close_p();
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::MayFoster);
                Step::DONE
            }
            Group::Heading => {
                self.implicitly_close_p();
                // "If the current node is an HTML element whose tag name is
                // one of "h1", "h2", "h3", "h4", "h5", or "h6", then this is
                // a parse error; pop the current node off the stack of open
                // elements."
                if self.stack.last().is_some_and(|current| {
                    current.namespace == Namespace::Html && current.name.group() == Group::Heading
                }) {
                    self.err("Heading cannot be a child of another heading.");
                    self.pop();
                }
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::MayFoster);
                Step::DONE
            }
            Group::Pre => {
                self.implicitly_close_p();
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::MayFoster);
                // "If the next token is a U+000A LINE FEED (LF) character
                // token, then ignore that token and move on to the next one.
                // (Newlines at the start of pre blocks are ignored as an
                // authoring convenience.)"
                self.need_to_drop_lf = true;
                self.frameset_ok = false;
                Step::DONE
            }
            Group::Form => {
                if self.form_pointer.is_some() {
                    self.err("Saw a \u{201C}form\u{201D} start tag, but there was already an active \u{201C}form\u{201D} element. Nested forms are not allowed. Ignoring the tag.");
                    return Step::DONE;
                }
                self.implicitly_close_p();
                let form = self.insert_html_element(&tag.name, &tag.attributes, Placement::MayFoster);
                self.form_pointer = Some(form);
                Step::DONE
            }
            Group::Li | Group::Dd => {
                self.close_previous_list_item(tag.name.group());
                self.implicitly_close_p();
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::MayFoster);
                Step::DONE
            }
            Group::Plaintext => {
                self.implicitly_close_p();
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::MayFoster);
                // "Switch the tokenizer to the PLAINTEXT state."
                Step::Done(SinkDirective::SwitchContentModel(ContentModel::Plaintext))
            }
            Group::A => {
                // "If the list of active formatting elements contains an a
                // element between the end of the list and the last marker on
                // the list (or the start of the list if there is no marker on
                // the list), then this is a parse error; run the adoption
                // agency algorithm for the token, then remove that element
                // from the list of active formatting elements and the stack
                // of open elements if the adoption agency algorithm didn't
                // already remove it"
                if let Some(index) = self.active_formatting_element(&A) {
                    self.err("An \u{201C}a\u{201D} start tag seen with already an active \u{201C}a\u{201D} element.");
                    let previous = self.formatting[index].node().cloned();
                    let _ = self.adoption_agency(&A);
                    if let Some(previous) = previous {
                        self.remove_from_formatting(&previous);
                        self.remove_from_stack(&previous);
                    }
                }
                self.reconstruct_active_formatting_elements();
                self.insert_formatting_element(tag);
                Step::DONE
            }
            Group::B => {
                self.reconstruct_active_formatting_elements();
                self.insert_formatting_element(tag);
                Step::DONE
            }
            Group::Nobr => {
                self.reconstruct_active_formatting_elements();
                if self.find_in_scope(&NOBR, Scope::Default).is_some() {
                    self.err("\u{201C}nobr\u{201D} start tag seen when there was an open \u{201C}nobr\u{201D} element in scope.");
                    let _ = self.adoption_agency(&NOBR);
                    self.reconstruct_active_formatting_elements();
                }
                self.insert_formatting_element(tag);
                Step::DONE
            }
            Group::Button => {
                if let Some(index) = self.find_in_scope(&BUTTON, Scope::Default) {
                    self.err("\u{201C}button\u{201D} start tag seen when there was an open \u{201C}button\u{201D} element in scope.");
                    self.generate_implied_end_tags();
                    self.pop_until(index);
                }
                self.reconstruct_active_formatting_elements();
                let _ = self.insert_form_associated_element(
                    &tag.name,
                    &tag.attributes,
                    Placement::MayFoster,
                );
                self.frameset_ok = false;
                Step::DONE
            }
            Group::Object => {
                self.reconstruct_active_formatting_elements();
                let _ = self.insert_form_associated_element(
                    &tag.name,
                    &tag.attributes,
                    Placement::MayFoster,
                );
                // "Insert a marker at the end of the list of active
                // formatting elements."
                self.formatting.push(FormattingEntry::Marker);
                self.frameset_ok = false;
                Step::DONE
            }
            Group::Xmp => {
                self.implicitly_close_p();
                self.reconstruct_active_formatting_elements();
                self.frameset_ok = false;
                self.insert_raw_text_element(tag, ContentModel::Cdata, Placement::MayFoster)
            }
            Group::Table => {
                // "If the Document is not set to quirks mode, and the stack
                // of open elements has a p element in button scope, then
                // close a p element."
                if self.document_mode != DocumentMode::Quirks {
                    self.implicitly_close_p();
                }
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::MayFoster);
                self.frameset_ok = false;
                self.mode = InsertionMode::InTable;
                Step::DONE
            }
            Group::Area | Group::Br | Group::Img => {
                self.reconstruct_active_formatting_elements();
                self.insert_void_element(&tag.name, &tag.attributes, Placement::MayFoster);
                self.frameset_ok = false;
                Step::DONE
            }
            Group::Hr => {
                self.implicitly_close_p();
                self.insert_void_element(&tag.name, &tag.attributes, Placement::MayFoster);
                self.frameset_ok = false;
                Step::DONE
            }
            Group::Image => {
                // "Parse error. Change the token's tag name to "img" and
                // reprocess it. (Don't ask.)"
                self.err("Saw a start tag \u{201C}image\u{201D}.");
                tag.name = IMG;
                Step::Reprocess
            }
            Group::Input => {
                self.reconstruct_active_formatting_elements();
                let _ = self.insert_form_associated_element(
                    &tag.name,
                    &tag.attributes,
                    Placement::MayFoster,
                );
                self.pop();
                // "If the token does not have an attribute with the name
                // "type", or if it does, but that attribute's value is not an
                // ASCII case-insensitive match for the string "hidden", then:
                // set the frameset-ok flag to "not ok"."
                if !is_hidden_input(tag) {
                    self.frameset_ok = false;
                }
                Step::DONE
            }
            Group::Isindex => self.start_tag_isindex(tag),
            Group::Textarea => {
                let _ = self.insert_form_associated_element(
                    &tag.name,
                    &tag.attributes,
                    Placement::MayFoster,
                );
                self.raw_text_pops = 1;
                self.need_to_drop_lf = true;
                self.frameset_ok = false;
                Step::Done(SinkDirective::SwitchContentModel(ContentModel::Rcdata))
            }
            Group::Iframe => {
                if tag.name == IFRAME {
                    self.frameset_ok = false;
                }
                self.insert_raw_text_element(tag, ContentModel::Cdata, Placement::MayFoster)
            }
            Group::Noscript if self.scripting_enabled => {
                self.insert_raw_text_element(tag, ContentModel::Cdata, Placement::MayFoster)
            }
            Group::Select => {
                self.reconstruct_active_formatting_elements();
                let _ = self.insert_form_associated_element(
                    &tag.name,
                    &tag.attributes,
                    Placement::MayFoster,
                );
                self.frameset_ok = false;
                // "If the insertion mode is one of "in table", "in caption",
                // "in table body", "in row", or "in cell", then switch the
                // insertion mode to "in select in table". Otherwise, switch
                // the insertion mode to "in select"."
                self.mode = if self.mode.is_in_table_context() {
                    InsertionMode::InSelectInTable
                } else {
                    InsertionMode::InSelect
                };
                Step::DONE
            }
            Group::Optgroup | Group::Option => {
                // "If the current node is an option element, then pop the
                // current node off the stack of open elements."
                if self.current_is(&OPTION) {
                    self.pop();
                }
                self.reconstruct_active_formatting_elements();
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::MayFoster);
                Step::DONE
            }
            Group::Math => {
                self.reconstruct_active_formatting_elements();
                tag.attributes.adjust_for_math();
                self.insert_foreign_element(tag, Namespace::MathMl, Placement::MayFoster);
                Step::DONE
            }
            Group::Svg => {
                self.reconstruct_active_formatting_elements();
                tag.attributes.adjust_for_svg();
                self.insert_foreign_element(tag, Namespace::Svg, Placement::MayFoster);
                Step::DONE
            }
            Group::Caption
            | Group::Col
            | Group::Colgroup
            | Group::Frame
            | Group::Head
            | Group::Tbody
            | Group::Td
            | Group::Tr => {
                self.stray_start_tag(&tag.name);
                Step::DONE
            }
            Group::Noscript
            | Group::Ruby
            | Group::Other
            | Group::Base
            | Group::Link
            | Group::Meta
            | Group::Script
            | Group::Style
            | Group::Title
            | Group::Noframes => {
                self.reconstruct_active_formatting_elements();
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::MayFoster);
                Step::DONE
            }
        }
    }

    /// The `li`, `dd` and `dt` start tag loop: close the open list item
    /// unless something special sits above it.
    fn close_previous_list_item(&mut self, group: Group) {
        // STEP 1: "Set the frameset-ok flag to "not ok"."
        self.frameset_ok = false;
        // STEP 2: "Initialize node to be the current node (the bottommost
        //          node of the stack)."
        for index in (1..self.stack.len()).rev() {
            let node = &self.stack[index];
            // STEP 3: "Loop: If node is an li element, then run these
            //          substeps"
            if node.namespace == Namespace::Html && node.name.group() == group {
                let name = node.name.clone();
                self.generate_implied_end_tags_except(&name);
                if index + 1 != self.stack.len() {
                    if group == Group::Li {
                        self.err("A \u{201C}li\u{201D} start tag was seen but the previous \u{201C}li\u{201D} element had open children.");
                    } else {
                        self.err("A definition list item start tag was seen but the previous definition list item element had open children.");
                    }
                }
                self.pop_until(index);
                return;
            }
            // STEP 4: "If node is in the special category, but is not an
            //          address, div, or p element, then jump to the step
            //          labeled done below."
            if node.scoping
                || (node.special
                    && !node.is_html(&ADDRESS)
                    && !node.is_html(&DIV)
                    && !node.is_html(&P))
            {
                return;
            }
        }
    }

    /// `isindex` expands into a small search form.
    fn start_tag_isindex(&mut self, tag: &Tag) -> Step {
        self.err("\u{201C}isindex\u{201D} seen.");
        if self.form_pointer.is_some() {
            return Step::DONE;
        }
        self.frameset_ok = false;
        self.implicitly_close_p();

        let mut form_attributes = HtmlAttributes::default();
        if let Some(action) = tag.attributes.value_of(&ACTION) {
            form_attributes.add(ACTION, action.to_owned());
        }
        let form = self.insert_html_element(&FORM, &form_attributes, Placement::MayFoster);
        self.form_pointer = Some(form);

        self.insert_void_element(&HR, &HtmlAttributes::default(), Placement::Current);
        self.reconstruct_active_formatting_elements();
        let _ = self.insert_html_element(&LABEL, &HtmlAttributes::default(), Placement::Current);

        let prompt = tag
            .attributes
            .value_of(&PROMPT)
            .unwrap_or(DEFAULT_ISINDEX_PROMPT)
            .to_owned();
        self.append_text_to_current(&prompt);

        let mut input_attributes = HtmlAttributes::default();
        for (name, value) in tag.attributes.iter() {
            if *name != NAME && *name != ACTION && *name != PROMPT {
                input_attributes.add(name.clone(), value.to_owned());
            }
        }
        input_attributes.add(NAME, "isindex".to_owned());
        let _ = self.insert_form_associated_element(&INPUT, &input_attributes, Placement::Current);
        self.pop();

        // label
        self.pop();
        self.insert_void_element(&HR, &HtmlAttributes::default(), Placement::Current);
        // form
        self.pop();
        self.form_pointer = None;
        Step::DONE
    }

    /// [§ 13.2.6.4.9 The "in table" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-intable)
    fn start_tag_in_table(&mut self, tag: &mut Tag) -> Step {
        match tag.name.group() {
            Group::Caption => {
                let table = self.find_last_or_root(&TABLE);
                self.clear_stack_back_to(table);
                self.formatting.push(FormattingEntry::Marker);
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::Current);
                self.mode = InsertionMode::InCaption;
                Step::DONE
            }
            Group::Colgroup => {
                let table = self.find_last_or_root(&TABLE);
                self.clear_stack_back_to(table);
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::Current);
                self.mode = InsertionMode::InColumnGroup;
                Step::DONE
            }
            Group::Col => {
                let table = self.find_last_or_root(&TABLE);
                self.clear_stack_back_to(table);
                let _ = self.insert_html_element(&COLGROUP, &HtmlAttributes::default(), Placement::Current);
                self.mode = InsertionMode::InColumnGroup;
                Step::Reprocess
            }
            Group::Tbody => {
                let table = self.find_last_or_root(&TABLE);
                self.clear_stack_back_to(table);
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::Current);
                self.mode = InsertionMode::InTableBody;
                Step::DONE
            }
            Group::Td | Group::Tr => {
                let table = self.find_last_or_root(&TABLE);
                self.clear_stack_back_to(table);
                let _ = self.insert_html_element(&TBODY, &HtmlAttributes::default(), Placement::Current);
                self.mode = InsertionMode::InTableBody;
                Step::Reprocess
            }
            Group::Table => {
                self.err("Start tag for \u{201C}table\u{201D} seen but the previous \u{201C}table\u{201D} is still open.");
                // "If the stack of open elements does not have a table
                // element in table scope, ignore the token."
                let Some(index) = self.find_in_scope(&TABLE, Scope::Table) else {
                    return Step::DONE;
                };
                self.generate_implied_end_tags();
                if index + 1 != self.stack.len() {
                    self.err("Unclosed elements on stack.");
                }
                self.pop_until(index);
                self.reset_insertion_mode();
                Step::Reprocess
            }
            Group::Script | Group::Style if !self.is_tainted() => {
                let model = ContentModel::Cdata;
                self.insert_raw_text_element(tag, model, Placement::Current)
            }
            Group::Input if !self.is_tainted() && is_hidden_input(tag) => {
                self.err("Start tag \u{201C}input\u{201D} seen in \u{201C}table\u{201D}.");
                self.insert_void_element(&tag.name, &tag.attributes, Placement::Current);
                Step::DONE
            }
            Group::Form => {
                self.err("Start tag \u{201C}form\u{201D} seen in \u{201C}table\u{201D}.");
                if self.form_pointer.is_some() {
                    return Step::DONE;
                }
                let form = self.insert_html_element(&tag.name, &tag.attributes, Placement::Current);
                self.form_pointer = Some(form);
                self.pop();
                Step::DONE
            }
            _ => {
                // "Parse error. Enable foster parenting, process the token
                // using the rules for the "in body" insertion mode, and then
                // disable foster parenting."
                self.err(format!(
                    "Start tag \u{201C}{}\u{201D} seen in \u{201C}table\u{201D}.",
                    tag.name
                ));
                self.start_tag_in_body(tag)
            }
        }
    }

    /// [§ 13.2.6.4.11 The "in caption" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incaption)
    fn start_tag_in_caption(&mut self, tag: &mut Tag) -> Step {
        if !is_table_structure(tag.name.group()) {
            return self.start_tag_in_body(tag);
        }
        self.err(format!(
            "Stray \u{201C}{}\u{201D} start tag in \u{201C}caption\u{201D}.",
            tag.name
        ));
        // "If the stack of open elements does not have a caption element in
        // table scope, this is a parse error; ignore the token. (fragment
        // case)"
        let Some(index) = self.find_in_scope(&CAPTION, Scope::Table) else {
            return Step::DONE;
        };
        self.generate_implied_end_tags();
        self.pop_until(index);
        self.clear_formatting_to_last_marker();
        self.mode = InsertionMode::InTable;
        Step::Reprocess
    }

    /// [§ 13.2.6.4.12 The "in column group" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incolumngroup)
    fn start_tag_in_column_group(&mut self, tag: &Tag) -> Step {
        match tag.name.group() {
            Group::Html => self.start_tag_stray_html(tag),
            Group::Col => {
                self.insert_void_element(&tag.name, &tag.attributes, Placement::Current);
                Step::DONE
            }
            _ => {
                // "If the current node is not a colgroup element, then this
                // is a parse error; ignore the token."
                if self.stack.len() == 1 || !self.current_is(&COLGROUP) {
                    self.err("Garbage in \u{201C}colgroup\u{201D} fragment.");
                    return Step::DONE;
                }
                self.pop();
                self.mode = InsertionMode::InTable;
                Step::Reprocess
            }
        }
    }

    /// [§ 13.2.6.4.13 The "in table body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-intablebody)
    fn start_tag_in_table_body(&mut self, tag: &mut Tag) -> Step {
        match tag.name.group() {
            Group::Tr => {
                let body = self.find_last_in_table_scope_or_root_tbody();
                self.clear_stack_back_to(body);
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::Current);
                self.mode = InsertionMode::InRow;
                Step::DONE
            }
            Group::Td => {
                self.err(format!(
                    "\u{201C}{}\u{201D} start tag in table body.",
                    tag.name
                ));
                let body = self.find_last_in_table_scope_or_root_tbody();
                self.clear_stack_back_to(body);
                let _ = self.insert_html_element(&TR, &HtmlAttributes::default(), Placement::Current);
                self.mode = InsertionMode::InRow;
                Step::Reprocess
            }
            Group::Caption | Group::Col | Group::Colgroup | Group::Tbody => {
                let body = self.find_last_in_table_scope_or_root_tbody();
                if body == 0 {
                    self.err(format!("Stray \u{201C}{}\u{201D} start tag.", tag.name));
                    return Step::DONE;
                }
                self.clear_stack_back_to(body);
                self.pop();
                self.mode = InsertionMode::InTable;
                Step::Reprocess
            }
            _ => self.start_tag_in_table(tag),
        }
    }

    /// [§ 13.2.6.4.14 The "in row" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inrow)
    fn start_tag_in_row(&mut self, tag: &mut Tag) -> Step {
        match tag.name.group() {
            Group::Td => {
                let row = self.find_last_or_root(&TR);
                self.clear_stack_back_to(row);
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::Current);
                self.mode = InsertionMode::InCell;
                self.formatting.push(FormattingEntry::Marker);
                Step::DONE
            }
            Group::Caption | Group::Col | Group::Colgroup | Group::Tbody | Group::Tr => {
                let row = self.find_last_or_root(&TR);
                if row == 0 {
                    self.err("No table row to close.");
                    return Step::DONE;
                }
                self.clear_stack_back_to(row);
                self.pop();
                self.mode = InsertionMode::InTableBody;
                Step::Reprocess
            }
            _ => self.start_tag_in_table(tag),
        }
    }

    /// [§ 13.2.6.4.15 The "in cell" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-intd)
    fn start_tag_in_cell(&mut self, tag: &mut Tag) -> Step {
        if !is_table_structure(tag.name.group()) {
            return self.start_tag_in_body(tag);
        }
        // "If the stack of open elements does not have a td or th element in
        // table scope, then this is a parse error; ignore the token.
        // (fragment case)"
        let Some(cell) = self.find_last_in_table_scope_td_th() else {
            self.err("No cell to close.");
            return Step::DONE;
        };
        // "Otherwise, close the cell and reprocess the token."
        self.close_the_cell(cell);
        Step::Reprocess
    }

    /// [§ 13.2.6.4.16 The "in select" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inselect)
    fn start_tag_in_select(&mut self, tag: &Tag) -> Step {
        match tag.name.group() {
            Group::Html => self.start_tag_stray_html(tag),
            Group::Option => {
                if self.current_is(&OPTION) {
                    self.pop();
                }
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::Current);
                Step::DONE
            }
            Group::Optgroup => {
                if self.current_is(&OPTION) {
                    self.pop();
                }
                if self.current_is(&OPTGROUP) {
                    self.pop();
                }
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::Current);
                Step::DONE
            }
            Group::Select => {
                self.err("\u{201C}select\u{201D} start tag where end tag expected.");
                if !self.end_select() {
                    self.err("No \u{201C}select\u{201D} in table scope.");
                }
                Step::DONE
            }
            Group::Input | Group::Textarea => {
                self.err(format!(
                    "\u{201C}{}\u{201D} start tag seen in \u{201C}select\u{201D}.",
                    tag.name
                ));
                if self.end_select() {
                    Step::Reprocess
                } else {
                    Step::DONE
                }
            }
            Group::Script => {
                self.insert_raw_text_element(tag, ContentModel::Cdata, Placement::Current)
            }
            _ => {
                self.err(format!("Stray \u{201C}{}\u{201D} start tag.", tag.name));
                Step::DONE
            }
        }
    }

    /// [§ 13.2.6.4.17 The "in select in table" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inselectintable)
    fn start_tag_in_select_in_table(&mut self, tag: &Tag) -> Step {
        match tag.name.group() {
            Group::Caption | Group::Table | Group::Tbody | Group::Tr | Group::Td => {
                self.err(format!(
                    "\u{201C}{}\u{201D} start tag with \u{201C}select\u{201D} open.",
                    tag.name
                ));
                if self.end_select() {
                    Step::Reprocess
                } else {
                    Step::DONE
                }
            }
            _ => self.start_tag_in_select(tag),
        }
    }

    /// [§ 13.2.6.4.19 The "after body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-afterbody)
    fn start_tag_after_body(&mut self, tag: &Tag) -> Step {
        if tag.name == HTML {
            return self.start_tag_stray_html(tag);
        }
        self.stray_start_tag(&tag.name);
        self.mode = InsertionMode::InBody;
        Step::Reprocess
    }

    /// [§ 13.2.6.4.20 The "in frameset" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inframeset)
    fn start_tag_in_frameset(&mut self, tag: &Tag) -> Step {
        match tag.name.group() {
            Group::Frameset => {
                let _ = self.insert_html_element(&tag.name, &tag.attributes, Placement::Current);
                Step::DONE
            }
            Group::Frame => {
                self.insert_void_element(&tag.name, &tag.attributes, Placement::Current);
                Step::DONE
            }
            _ => self.start_tag_after_frameset(tag),
        }
    }

    /// [§ 13.2.6.4.21 The "after frameset" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-afterframeset)
    fn start_tag_after_frameset(&mut self, tag: &Tag) -> Step {
        match tag.name.group() {
            Group::Html => self.start_tag_stray_html(tag),
            Group::Noframes => {
                self.insert_raw_text_element(tag, ContentModel::Cdata, Placement::Current)
            }
            _ => {
                self.stray_start_tag(&tag.name);
                Step::DONE
            }
        }
    }

    /// [§ 13.2.6.4.23 The "after after frameset" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-after-frameset-insertion-mode)
    fn start_tag_after_after_frameset(&mut self, tag: &Tag) -> Step {
        match tag.name.group() {
            Group::Html => self.start_tag_stray_html(tag),
            Group::Noframes => {
                self.insert_raw_text_element(tag, ContentModel::Cdata, Placement::Current)
            }
            _ => {
                self.stray_start_tag(&tag.name);
                Step::DONE
            }
        }
    }
}

/// The elements `insert_head_content` handles.
fn is_head_content(tag: &Tag) -> bool {
    match tag.name.group() {
        Group::Base
        | Group::Link
        | Group::Meta
        | Group::Title
        | Group::Script
        | Group::Style
        | Group::Noframes => true,
        Group::Area => tag.name == BASEFONT || tag.name == BGSOUND,
        _ => false,
    }
}

/// "A start tag whose tag name is one of: "caption", "col", "colgroup",
/// "tbody", "td", "tfoot", "th", "thead", "tr""
const fn is_table_structure(group: Group) -> bool {
    matches!(
        group,
        Group::Caption | Group::Col | Group::Colgroup | Group::Tbody | Group::Td | Group::Tr
    )
}

/// An `input` whose `type` is an ASCII case-insensitive match for
/// `hidden`.
fn is_hidden_input(tag: &Tag) -> bool {
    tag.attributes
        .value_of(&TYPE)
        .is_some_and(|value| value.eq_ignore_ascii_case("hidden"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::NameTable;

    #[test]
    fn test_table_structure_groups() {
        assert!(is_table_structure(Group::Td));
        assert!(is_table_structure(Group::Colgroup));
        assert!(!is_table_structure(Group::Table));
        assert!(!is_table_structure(Group::Div));
    }

    #[test]
    fn test_hidden_input_is_case_insensitive() {
        let mut names = NameTable::new();
        let mut tag = Tag::new(INPUT);
        assert!(!is_hidden_input(&tag));
        tag.attributes.add(names.attribute("type"), "HiDdEn".to_string());
        assert!(is_hidden_input(&tag));
    }

    #[test]
    fn test_head_content() {
        let mut names = NameTable::new();
        assert!(is_head_content(&Tag::new(names.element("basefont"))));
        assert!(is_head_content(&Tag::new(names.element("title"))));
        assert!(!is_head_content(&Tag::new(names.element("wbr"))));
        assert!(!is_head_content(&Tag::new(names.element("noscript"))));
    }
}
