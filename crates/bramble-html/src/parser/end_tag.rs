//! End tag rules for every insertion mode.

use bramble_dom::Namespace;

use crate::names::element::{BODY, BR, CAPTION, COLGROUP, FORM, HTML, OPTGROUP, OPTION, P, TABLE, TR};
use crate::names::{ElementName, Group, HtmlAttributes};
use crate::tokenizer::Tag;

use super::core::{InsertionMode, Placement, Step, TreeBuilder, closes_silently};
use super::helpers::Scope;
use super::sink::TreeSink;

impl<S: TreeSink> TreeBuilder<S> {
    /// Process an end tag by the rules of the current insertion mode.
    pub(super) fn end_tag_in_mode(&mut self, tag: &Tag) -> Step {
        let name = &tag.name;
        match self.mode {
            InsertionMode::Initial => {
                self.missing_doctype("End tag seen without seeing a doctype first.");
                Step::Reprocess
            }
            InsertionMode::BeforeHtml => {
                self.append_html_root(&HtmlAttributes::default());
                self.mode = InsertionMode::BeforeHead;
                Step::Reprocess
            }
            InsertionMode::BeforeHead => self.end_tag_before_head(name),
            InsertionMode::InHead => self.end_tag_in_head(name),
            InsertionMode::InHeadNoscript => self.end_tag_in_head_noscript(name),
            InsertionMode::AfterHead => self.end_tag_after_head(name),
            InsertionMode::InBody => self.end_tag_in_body(name),
            InsertionMode::InTable => self.end_tag_in_table(name),
            InsertionMode::InCaption => self.end_tag_in_caption(name),
            InsertionMode::InColumnGroup => self.end_tag_in_column_group(name),
            InsertionMode::InTableBody => self.end_tag_in_table_body(name),
            InsertionMode::InRow => self.end_tag_in_row(name),
            InsertionMode::InCell => self.end_tag_in_cell(name),
            InsertionMode::InSelect => self.end_tag_in_select(name),
            InsertionMode::InSelectInTable => self.end_tag_in_select_in_table(name),
            InsertionMode::AfterBody => self.end_tag_after_body(name),
            InsertionMode::InFrameset => self.end_tag_in_frameset(name),
            InsertionMode::AfterFrameset => {
                if *name == HTML {
                    self.html_closed();
                    self.mode = InsertionMode::AfterAfterFrameset;
                } else {
                    self.stray_end_tag(name);
                }
                Step::DONE
            }
            InsertionMode::AfterAfterBody => {
                self.err(format!("Stray \u{201C}{name}\u{201D} end tag."));
                self.mode = InsertionMode::InBody;
                Step::Reprocess
            }
            InsertionMode::AfterAfterFrameset => {
                self.stray_end_tag(name);
                Step::DONE
            }
        }
    }

    /// [§ 13.2.6.4.3 The "before head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-head-insertion-mode)
    fn end_tag_before_head(&mut self, name: &ElementName) -> Step {
        // "An end tag whose tag name is one of: "head", "body", "html", "br""
        if matches!(name.group(), Group::Head | Group::Body | Group::Html | Group::Br | Group::P) {
            self.insert_head(&HtmlAttributes::default());
            self.mode = InsertionMode::InHead;
            return Step::Reprocess;
        }
        self.stray_end_tag(name);
        Step::DONE
    }

    /// [§ 13.2.6.4.4 The "in head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead)
    fn end_tag_in_head(&mut self, name: &ElementName) -> Step {
        match name.group() {
            Group::Head => {
                self.pop();
                self.mode = InsertionMode::AfterHead;
                Step::DONE
            }
            Group::Body | Group::Html | Group::Br | Group::P => {
                self.pop();
                self.mode = InsertionMode::AfterHead;
                Step::Reprocess
            }
            _ => {
                self.stray_end_tag(name);
                Step::DONE
            }
        }
    }

    /// [§ 13.2.6.4.5 The "in head noscript" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inheadnoscript)
    fn end_tag_in_head_noscript(&mut self, name: &ElementName) -> Step {
        match name.group() {
            Group::Noscript => {
                self.pop();
                self.mode = InsertionMode::InHead;
                Step::DONE
            }
            Group::Br | Group::P => {
                self.stray_end_tag(name);
                self.pop();
                self.mode = InsertionMode::InHead;
                Step::Reprocess
            }
            _ => {
                self.stray_end_tag(name);
                Step::DONE
            }
        }
    }

    /// [§ 13.2.6.4.6 The "after head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-head-insertion-mode)
    fn end_tag_after_head(&mut self, name: &ElementName) -> Step {
        if matches!(name.group(), Group::Body | Group::Html | Group::Br | Group::P) {
            self.insert_body(&HtmlAttributes::default());
            self.mode = InsertionMode::InBody;
            return Step::Reprocess;
        }
        self.stray_end_tag(name);
        Step::DONE
    }

    /// Whether `</body>` or `</html>` may close the body here. Reports the
    /// elements it would leave open.
    fn check_body_close(&mut self, name: &ElementName) -> bool {
        // "If the stack of open elements does not have a body element in
        // scope, this is a parse error; ignore the token."
        if !self.stack.get(1).is_some_and(|node| node.is_html(&BODY)) {
            self.stray_end_tag(name);
            return false;
        }
        // "Otherwise, if there is a node in the stack of open elements that
        // is not either a dd element, a dt element, an li element, ... the
        // body element, or the html element, then this is a parse error."
        if self.stack[2..].iter().any(|node| !closes_silently(node)) {
            self.err(format!(
                "End tag for \u{201C}{name}\u{201D} seen but there were unclosed elements."
            ));
        }
        true
    }

    /// [§ 13.2.6.4.7 The "in body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    fn end_tag_in_body(&mut self, name: &ElementName) -> Step {
        match name.group() {
            Group::Body => {
                if self.check_body_close(name) {
                    if self.context.is_none() {
                        self.body_closed();
                    }
                    // "Switch the insertion mode to "after body"."
                    self.mode = InsertionMode::AfterBody;
                }
                Step::DONE
            }
            Group::Html => {
                if !self.check_body_close(name) {
                    return Step::DONE;
                }
                if self.context.is_none() {
                    self.body_closed();
                }
                self.mode = InsertionMode::AfterBody;
                Step::Reprocess
            }
            Group::Div | Group::Fieldset | Group::Ol | Group::Pre | Group::Button => {
                let _ = self.close_block(name);
                Step::DONE
            }
            Group::Object => {
                if self.close_block(name) {
                    self.clear_formatting_to_last_marker();
                }
                Step::DONE
            }
            Group::Form => {
                // "Let node be the element that the form element pointer is
                // set to, or null if it is not set to an element. Set the
                // form element pointer to null."
                let Some(form) = self.form_pointer.take() else {
                    self.stray_end_tag(name);
                    return Step::DONE;
                };
                let Some(index) = self.find_in_scope(&FORM, Scope::Default) else {
                    self.stray_end_tag(name);
                    return Step::DONE;
                };
                self.generate_implied_end_tags();
                // "If the current node is not node, then this is a parse
                // error. Remove node from the stack of open elements."
                if self.stack[index].node != form || index + 1 != self.stack.len() {
                    self.err(format!(
                        "End tag \u{201C}{name}\u{201D} seen but there were unclosed elements."
                    ));
                }
                self.remove_from_stack(&form);
                Step::DONE
            }
            Group::P => {
                match self.find_in_scope(&P, Scope::Button) {
                    Some(index) => {
                        self.generate_implied_end_tags_except(&P);
                        if index + 1 != self.stack.len() {
                            self.err(format!(
                                "End tag \u{201C}{name}\u{201D} seen but there were unclosed elements."
                            ));
                        }
                        self.pop_until(index);
                    }
                    None => {
                        // "If the stack of open elements does not have a p
                        // element in button scope, then this is a parse error;
                        // insert an HTML element for a "p" start tag token with
                        // no attributes."
                        self.err("No \u{201C}p\u{201D} element in scope but a \u{201C}p\u{201D} end tag seen.");
                        self.insert_void_element(&P, &HtmlAttributes::default(), Placement::MayFoster);
                    }
                }
                Step::DONE
            }
            Group::Li | Group::Dd => {
                let scope = if name.group() == Group::Li {
                    Scope::ListItem
                } else {
                    Scope::Default
                };
                let Some(index) = self.find_in_scope(name, scope) else {
                    self.err(format!(
                        "No \u{201C}{name}\u{201D} element in scope but a \u{201C}{name}\u{201D} end tag seen."
                    ));
                    return Step::DONE;
                };
                self.generate_implied_end_tags_except(name);
                if index + 1 != self.stack.len() {
                    self.err(format!(
                        "End tag \u{201C}{name}\u{201D} seen but there were unclosed elements."
                    ));
                }
                self.pop_until(index);
                Step::DONE
            }
            Group::Heading => {
                // "If the stack of open elements does not have an element in
                // scope that is an HTML element and whose tag name is one of
                // "h1", "h2", "h3", "h4", "h5", or "h6", then this is a parse
                // error; ignore the token."
                let Some(index) = self.find_last_heading_in_scope() else {
                    self.stray_end_tag(name);
                    return Step::DONE;
                };
                self.generate_implied_end_tags();
                if index + 1 != self.stack.len() {
                    self.err(format!(
                        "End tag \u{201C}{name}\u{201D} seen but there were unclosed elements."
                    ));
                }
                self.pop_until(index);
                Step::DONE
            }
            Group::A | Group::B | Group::Nobr => {
                if !self.adoption_agency(name) {
                    self.any_other_end_tag(name);
                }
                Step::DONE
            }
            Group::Br => {
                // "Parse error. Drop the attributes from the token, and act as
                // described in the next entry; i.e. act as if this was a "br"
                // start tag token with no attributes, rather than the end tag
                // token that it actually is."
                self.err("End tag \u{201C}br\u{201D}.");
                self.reconstruct_active_formatting_elements();
                self.insert_void_element(&BR, &HtmlAttributes::default(), Placement::MayFoster);
                self.frameset_ok = false;
                Step::DONE
            }
            Group::Area
            | Group::Hr
            | Group::Iframe
            | Group::Image
            | Group::Img
            | Group::Input
            | Group::Isindex
            | Group::Noframes
            | Group::Select
            | Group::Table
            | Group::Textarea => {
                self.stray_end_tag(name);
                Step::DONE
            }
            Group::Noscript if self.scripting_enabled => {
                self.stray_end_tag(name);
                Step::DONE
            }
            _ => {
                self.any_other_end_tag(name);
                Step::DONE
            }
        }
    }

    /// The shared rule for `</div>`, `</ul>`, `</pre>` and the other block
    /// end tags. Returns whether an element was closed.
    ///
    /// "If the stack of open elements does not have an element in scope that
    /// is an HTML element with the same tag name as that of the token, then
    /// this is a parse error; ignore the token."
    fn close_block(&mut self, name: &ElementName) -> bool {
        let Some(index) = self.find_in_scope(name, Scope::Default) else {
            self.stray_end_tag(name);
            return false;
        };
        // STEP 1: "Generate implied end tags."
        self.generate_implied_end_tags();
        // STEP 2: "If the current node is not an HTML element with the same
        //          tag name as that of the token, then this is a parse error."
        if index + 1 != self.stack.len() {
            self.err(format!(
                "End tag \u{201C}{name}\u{201D} seen but there were unclosed elements."
            ));
        }
        // STEP 3: "Pop elements from the stack of open elements until an HTML
        //          element with the same tag name as the token has been popped
        //          from the stack."
        self.pop_until(index);
        true
    }

    /// [§ 13.2.6.4.7](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    /// "Any other end tag"
    pub(super) fn any_other_end_tag(&mut self, name: &ElementName) {
        // STEP 1: "Initialize node to be the current node (the bottommost
        //          node of the stack)."
        for index in (1..self.stack.len()).rev() {
            let node = &self.stack[index];
            // STEP 2: "Loop: If node is an HTML element with the same tag
            //          name as the token, then"
            if node.is_html(name) {
                // STEP 2.1: "Generate implied end tags, except for HTML
                //            elements with the same tag name as the token."
                self.generate_implied_end_tags_except(name);
                // STEP 2.2: "If node is not the current node, then this is a
                //            parse error."
                if index + 1 != self.stack.len() {
                    self.err(format!(
                        "End tag \u{201C}{name}\u{201D} seen but there were unclosed elements."
                    ));
                }
                // STEP 2.3: "Pop all the nodes from the current node up to
                //            node, including node, then stop these steps."
                self.pop_until(index);
                return;
            }
            // STEP 3: "Otherwise, if node is in the special category, then
            //          this is a parse error; ignore the token, and return."
            if node.special || node.scoping {
                self.stray_end_tag(name);
                return;
            }
            // STEP 4: "Set node to the previous entry in the stack of open
            //          elements."
        }
        self.stray_end_tag(name);
    }

    /// [§ 13.2.6.4.9 The "in table" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-intable)
    fn end_tag_in_table(&mut self, name: &ElementName) -> Step {
        match name.group() {
            Group::Table => {
                // "If the stack of open elements does not have a table element
                // in table scope, this is a parse error; ignore the token."
                let Some(index) = self.find_in_scope(&TABLE, Scope::Table) else {
                    self.stray_end_tag(name);
                    return Step::DONE;
                };
                self.pop_until(index);
                self.reset_insertion_mode();
                Step::DONE
            }
            Group::Body
            | Group::Caption
            | Group::Col
            | Group::Colgroup
            | Group::Html
            | Group::Tbody
            | Group::Td
            | Group::Tr => {
                self.stray_end_tag(name);
                Step::DONE
            }
            _ => {
                // "Parse error. Enable foster parenting, process the token
                // using the rules for the "in body" insertion mode, and then
                // disable foster parenting."
                self.stray_end_tag(name);
                self.end_tag_in_body(name)
            }
        }
    }

    /// [§ 13.2.6.4.11 The "in caption" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incaption)
    fn end_tag_in_caption(&mut self, name: &ElementName) -> Step {
        match name.group() {
            Group::Caption => {
                let _ = self.close_caption();
                Step::DONE
            }
            Group::Table => {
                self.err("\u{201C}table\u{201D} closed but \u{201C}caption\u{201D} was still open.");
                if self.close_caption() {
                    Step::Reprocess
                } else {
                    Step::DONE
                }
            }
            Group::Body
            | Group::Col
            | Group::Colgroup
            | Group::Html
            | Group::Tbody
            | Group::Td
            | Group::Tr => {
                self.stray_end_tag(name);
                Step::DONE
            }
            _ => self.end_tag_in_body(name),
        }
    }

    /// Close the open `caption` and go back to "in table". Returns false
    /// when there is no caption in table scope (fragment case).
    fn close_caption(&mut self) -> bool {
        let Some(index) = self.find_in_scope(&CAPTION, Scope::Table) else {
            self.stray_end_tag(&CAPTION);
            return false;
        };
        // STEP 1: "Generate implied end tags."
        self.generate_implied_end_tags();
        // STEP 2: "Now, if the current node is not a caption element, then
        //          this is a parse error."
        if index + 1 != self.stack.len() {
            self.err("Unclosed elements.");
        }
        // STEP 3: "Pop elements from this stack until a caption element has
        //          been popped from the stack."
        self.pop_until(index);
        // STEP 4: "Clear the list of active formatting elements up to the
        //          last marker."
        self.clear_formatting_to_last_marker();
        // STEP 5: "Switch the insertion mode to "in table"."
        self.mode = InsertionMode::InTable;
        true
    }

    /// [§ 13.2.6.4.12 The "in column group" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incolumngroup)
    fn end_tag_in_column_group(&mut self, name: &ElementName) -> Step {
        match name.group() {
            Group::Colgroup => {
                if self.stack.len() == 1 || !self.current_is(&COLGROUP) {
                    self.err("Garbage in \u{201C}colgroup\u{201D} fragment.");
                    return Step::DONE;
                }
                self.pop();
                self.mode = InsertionMode::InTable;
                Step::DONE
            }
            Group::Col => {
                self.err("Stray end tag \u{201C}col\u{201D}.");
                Step::DONE
            }
            _ => {
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
    fn end_tag_in_table_body(&mut self, name: &ElementName) -> Step {
        match name.group() {
            Group::Tbody => {
                // "If the stack of open elements does not have an element in
                // table scope that is an HTML element with the same tag name
                // as the token, this is a parse error; ignore the token."
                let Some(index) = self.find_in_scope(name, Scope::Table) else {
                    self.stray_end_tag(name);
                    return Step::DONE;
                };
                self.clear_stack_back_to(index);
                self.pop();
                self.mode = InsertionMode::InTable;
                Step::DONE
            }
            Group::Table => {
                let body = self.find_last_in_table_scope_or_root_tbody();
                if body == 0 {
                    self.err("Stray end tag \u{201C}table\u{201D}.");
                    return Step::DONE;
                }
                self.clear_stack_back_to(body);
                self.pop();
                self.mode = InsertionMode::InTable;
                Step::Reprocess
            }
            Group::Body
            | Group::Caption
            | Group::Col
            | Group::Colgroup
            | Group::Html
            | Group::Td
            | Group::Tr => {
                self.stray_end_tag(name);
                Step::DONE
            }
            _ => self.end_tag_in_table(name),
        }
    }

    /// [§ 13.2.6.4.14 The "in row" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inrow)
    fn end_tag_in_row(&mut self, name: &ElementName) -> Step {
        match name.group() {
            Group::Tr => {
                let _ = self.close_row();
                Step::DONE
            }
            Group::Table => {
                if self.close_row() {
                    Step::Reprocess
                } else {
                    Step::DONE
                }
            }
            Group::Tbody => {
                // "If the stack of open elements does not have an element in
                // table scope that is an HTML element with the same tag name
                // as the token, this is a parse error; ignore the token."
                if self.find_in_scope(name, Scope::Table).is_none() {
                    self.stray_end_tag(name);
                    return Step::DONE;
                }
                if self.close_row() {
                    Step::Reprocess
                } else {
                    Step::DONE
                }
            }
            Group::Body | Group::Caption | Group::Col | Group::Colgroup | Group::Html | Group::Td => {
                self.stray_end_tag(name);
                Step::DONE
            }
            _ => self.end_tag_in_table(name),
        }
    }

    /// Pop the open `tr` and go back to "in table body".
    fn close_row(&mut self) -> bool {
        let row = self.find_last_or_root(&TR);
        if row == 0 {
            self.err("No table row to close.");
            return false;
        }
        self.clear_stack_back_to(row);
        self.pop();
        self.mode = InsertionMode::InTableBody;
        true
    }

    /// [§ 13.2.6.4.15 The "in cell" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-intd)
    fn end_tag_in_cell(&mut self, name: &ElementName) -> Step {
        match name.group() {
            Group::Td => {
                let Some(index) = self.find_in_scope(name, Scope::Table) else {
                    self.stray_end_tag(name);
                    return Step::DONE;
                };
                // STEP 1: "Generate implied end tags."
                self.generate_implied_end_tags();
                // STEP 2: "Now, if the current node is not an HTML element
                //          with the same tag name as the token, then this is a
                //          parse error."
                if index + 1 != self.stack.len() {
                    self.err("Unclosed elements.");
                }
                self.pop_until(index);
                self.clear_formatting_to_last_marker();
                self.mode = InsertionMode::InRow;
                Step::DONE
            }
            Group::Table | Group::Tbody | Group::Tr => {
                // "If the stack of open elements does not have an element in
                // table scope that is an HTML element with the same tag name
                // as that of the token, then this is a parse error; ignore the
                // token."
                if self.find_in_scope(name, Scope::Table).is_none() {
                    self.stray_end_tag(name);
                    return Step::DONE;
                }
                match self.find_last_in_table_scope_td_th() {
                    Some(cell) => {
                        self.close_the_cell(cell);
                        Step::Reprocess
                    }
                    None => {
                        self.err("No cell to close.");
                        Step::DONE
                    }
                }
            }
            Group::Body | Group::Caption | Group::Col | Group::Colgroup | Group::Html => {
                self.stray_end_tag(name);
                Step::DONE
            }
            _ => self.end_tag_in_body(name),
        }
    }

    /// [§ 13.2.6.4.16 The "in select" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inselect)
    fn end_tag_in_select(&mut self, name: &ElementName) -> Step {
        match name.group() {
            Group::Optgroup => {
                // "First, if the current node is an option element, and the
                // node immediately before it in the stack of open elements is
                // an optgroup element, then pop the current node from the
                // stack of open elements."
                let len = self.stack.len();
                if len >= 2
                    && self.stack[len - 1].is_html(&OPTION)
                    && self.stack[len - 2].is_html(&OPTGROUP)
                {
                    self.pop();
                }
                if self.current_is(&OPTGROUP) {
                    self.pop();
                } else {
                    self.err("Stray end tag \u{201C}optgroup\u{201D}");
                }
                Step::DONE
            }
            Group::Option => {
                if self.current_is(&OPTION) {
                    self.pop();
                } else {
                    self.err("Stray end tag \u{201C}option\u{201D}");
                }
                Step::DONE
            }
            Group::Select => {
                if !self.end_select() {
                    self.err("Stray end tag \u{201C}select\u{201D}");
                }
                Step::DONE
            }
            _ => {
                self.stray_end_tag(name);
                Step::DONE
            }
        }
    }

    /// [§ 13.2.6.4.17 The "in select in table" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inselectintable)
    fn end_tag_in_select_in_table(&mut self, name: &ElementName) -> Step {
        match name.group() {
            Group::Caption | Group::Table | Group::Tbody | Group::Tr | Group::Td => {
                self.err(format!(
                    "\u{201C}{name}\u{201D} end tag with \u{201C}select\u{201D} open."
                ));
                // "If the stack of open elements does not have an element in
                // table scope that is an HTML element with the same tag name
                // as that of the token, then ignore the token."
                if self.find_in_scope(name, Scope::Table).is_some() && self.end_select() {
                    Step::Reprocess
                } else {
                    Step::DONE
                }
            }
            _ => self.end_tag_in_select(name),
        }
    }

    /// [§ 13.2.6.4.19 The "after body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-afterbody)
    fn end_tag_after_body(&mut self, name: &ElementName) -> Step {
        if *name == HTML {
            // "If the parser was created as part of the HTML fragment parsing
            // algorithm, this is a parse error; ignore the token. (fragment
            // case)"
            if self.context.is_some() {
                self.err("Stray end tag \u{201C}html\u{201D}");
            } else {
                self.html_closed();
                self.mode = InsertionMode::AfterAfterBody;
            }
            return Step::DONE;
        }
        self.err("Saw an end tag after \u{201C}body\u{201D} had been closed.");
        self.mode = InsertionMode::InBody;
        Step::Reprocess
    }

    /// [§ 13.2.6.4.20 The "in frameset" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inframeset)
    fn end_tag_in_frameset(&mut self, name: &ElementName) -> Step {
        if name.group() != Group::Frameset {
            self.stray_end_tag(name);
            return Step::DONE;
        }
        // "If the current node is the root html element, then this is a
        // parse error; ignore the token. (fragment case)"
        if self.stack.len() == 1 {
            self.stray_end_tag(name);
            return Step::DONE;
        }
        self.pop();
        // "If the parser was not created as part of the HTML fragment
        // parsing algorithm (fragment case), and the current node is no
        // longer a frameset element, then switch the insertion mode to
        // "after frameset"."
        let still_frameset = self
            .stack
            .last()
            .is_some_and(|current| current.namespace == Namespace::Html && current.name.group() == Group::Frameset);
        if self.context.is_none() && !still_frameset {
            self.mode = InsertionMode::AfterFrameset;
        }
        Step::DONE
    }
}
