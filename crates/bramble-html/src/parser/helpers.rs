//! Algorithms shared by the insertion modes.

use bramble_common::{Diagnostic, Severity};
use bramble_dom::{DocumentMode, Namespace};

use crate::config::DoctypeExpectation;
use crate::names::element::{
    BASEFONT, BGSOUND, BODY, BUTTON, HEAD, HTML, OL, P, SELECT, TABLE, UL,
};
use crate::names::{ElementName, Group, HtmlAttributes};
use crate::tokenizer::{ContentModel, SinkDirective, Tag};

use super::core::{InsertionMode, Placement, Step, TreeBuilder};
use super::foreign::{is_html_annotation_xml, is_mathml_text_integration_point, local_name_in};
use super::sink::TreeSink;
use super::stack::{FormattingEntry, StackNode};

/// [§ 13.2.4.2 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-the-specific-scope)
///
/// The element types that end a "has an element in scope" search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scope {
    /// [§ 13.2.4.2](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-scope)
    Default,
    /// [§ 13.2.4.2](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-list-item-scope)
    ListItem,
    /// [§ 13.2.4.2](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-button-scope)
    Button,
    /// [§ 13.2.4.2](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-table-scope)
    Table,
}

impl Scope {
    fn is_boundary<H>(self, node: &StackNode<H>) -> bool {
        match self {
            Self::Default => node.scoping,
            Self::ListItem => node.scoping || node.is_html(&OL) || node.is_html(&UL),
            Self::Button => node.scoping || node.is_html(&BUTTON),
            Self::Table => node.is_html(&TABLE) || node.is_html(&HTML),
        }
    }
}

/// Whether both attribute lists hold the same names with the same values.
fn same_attributes(a: &HtmlAttributes, b: &HtmlAttributes) -> bool {
    a.len() == b.len() && a.iter().all(|(name, value)| b.value_of(name) == Some(value))
}

impl<S: TreeSink> TreeBuilder<S> {
    // ---------------------------------------------------------------------
    // Diagnostics
    // ---------------------------------------------------------------------

    pub(super) fn err(&mut self, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(Severity::Error, message, self.location);
        self.errors.report_error(&diagnostic);
    }

    pub(super) fn warn(&mut self, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(Severity::Warning, message, self.location);
        self.errors.report_warning(&diagnostic);
    }

    pub(super) fn stray_end_tag(&mut self, name: &ElementName) {
        self.err(format!("Stray end tag \u{201C}{name}\u{201D}."));
    }

    pub(super) fn stray_start_tag(&mut self, name: &ElementName) {
        self.err(format!("Stray start tag \u{201C}{name}\u{201D}."));
    }

    /// Anything but a doctype in the "initial" insertion mode.
    ///
    /// "If the document is not an iframe srcdoc document, then this is a
    /// parse error; if the parser cannot change the mode flag is false, set
    /// the Document to quirks mode."
    pub(super) fn missing_doctype(&mut self, message: &str) {
        if self.doctype_expectation != DoctypeExpectation::NoDoctypeErrors {
            self.err(message);
        }
        self.set_document_mode(DocumentMode::Quirks, None, None, false);
        self.mode = InsertionMode::BeforeHtml;
    }

    pub(super) fn set_document_mode(
        &mut self,
        mode: DocumentMode,
        public_id: Option<&str>,
        system_id: Option<&str>,
        html4: bool,
    ) {
        self.document_mode = mode;
        self.sink
            .on_document_mode_decided(mode, public_id, system_id, html4);
    }

    // ---------------------------------------------------------------------
    // The stack of open elements
    // ---------------------------------------------------------------------

    pub(super) fn current_handle(&self) -> Option<S::Handle> {
        self.stack.last().map(|current| current.node.clone())
    }

    /// Whether the current node is the HTML element `name`.
    pub(super) fn current_is(&self, name: &ElementName) -> bool {
        self.stack.last().is_some_and(|current| current.is_html(name))
    }

    pub(super) fn push(&mut self, entry: StackNode<S::Handle>) {
        self.sink
            .on_element_pushed(entry.namespace, &entry.name, &entry.node);
        self.stack.push(entry);
    }

    pub(super) fn pop(&mut self) {
        if let Some(entry) = self.stack.pop() {
            self.sink
                .on_element_popped(entry.namespace, &entry.name, &entry.node);
        }
    }

    /// Pop until only `len` entries are left.
    pub(super) fn pop_until(&mut self, len: usize) {
        while self.stack.len() > len {
            self.pop();
        }
    }

    /// Remove an entry that is not necessarily the current node.
    fn remove_from_stack_at(&mut self, index: usize) {
        if index + 1 == self.stack.len() {
            self.pop();
        } else if index < self.stack.len() {
            let _ = self.stack.remove(index);
        }
    }

    pub(super) fn remove_from_stack(&mut self, node: &S::Handle) {
        if let Some(index) = self.stack_position(node) {
            self.remove_from_stack_at(index);
        }
    }

    fn stack_position(&self, node: &S::Handle) -> Option<usize> {
        self.stack.iter().rposition(|entry| entry.node == *node)
    }

    /// Pop foreign elements until the current node is an HTML element or an
    /// integration point.
    pub(super) fn pop_to_html_or_integration_point(&mut self) {
        while let Some(current) = self.stack.last() {
            if current.namespace == Namespace::Html
                || current.html_integration_point
                || is_mathml_text_integration_point(current)
            {
                break;
            }
            self.pop();
        }
    }

    /// [§ 13.2.4.2](https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-the-specific-scope)
    ///
    /// STEP 1: "Initialize node to be the current node (the bottommost node
    ///          of the stack)."
    /// STEP 2: "If node is the target node, terminate in a match state."
    /// STEP 3: "Otherwise, if node is one of the element types in list,
    ///          terminate in a failure state."
    /// STEP 4: "Otherwise, set node to the previous entry in the stack of
    ///          open elements and return to step 2."
    pub(super) fn find_in_scope(&self, name: &ElementName, scope: Scope) -> Option<usize> {
        for index in (1..self.stack.len()).rev() {
            let node = &self.stack[index];
            if node.is_html(name) {
                return Some(index);
            }
            if scope.is_boundary(node) {
                return None;
            }
        }
        None
    }

    /// The topmost HTML `name`, or the root when there is none.
    pub(super) fn find_last_or_root(&self, name: &ElementName) -> usize {
        (1..self.stack.len())
            .rev()
            .find(|&index| self.stack[index].is_html(name))
            .unwrap_or(0)
    }

    pub(super) fn find_last_in_table_scope_td_th(&self) -> Option<usize> {
        for index in (1..self.stack.len()).rev() {
            let node = &self.stack[index];
            if node.namespace == Namespace::Html && node.name.group() == Group::Td {
                return Some(index);
            }
            if node.is_html(&TABLE) {
                return None;
            }
        }
        None
    }

    /// "If the stack of open elements does not have an element in scope
    /// that is an HTML element and whose tag name is one of "h1", "h2",
    /// "h3", "h4", "h5", or "h6""
    pub(super) fn find_last_heading_in_scope(&self) -> Option<usize> {
        for index in (1..self.stack.len()).rev() {
            let node = &self.stack[index];
            if node.namespace == Namespace::Html && node.name.group() == Group::Heading {
                return Some(index);
            }
            if node.scoping {
                return None;
            }
        }
        None
    }

    /// The topmost `tbody`, `thead` or `tfoot` in table scope, or the root.
    pub(super) fn find_last_in_table_scope_or_root_tbody(&self) -> usize {
        for index in (1..self.stack.len()).rev() {
            let node = &self.stack[index];
            if node.namespace == Namespace::Html && node.name.group() == Group::Tbody {
                return index;
            }
            if node.is_html(&TABLE) {
                return 0;
            }
        }
        0
    }

    /// [§ 13.2.6.3 Closing elements that have implied end tags](https://html.spec.whatwg.org/multipage/parsing.html#generate-implied-end-tags)
    ///
    /// "while the current node is a dd element, a dt element, an li
    /// element, an optgroup element, an option element, a p element, ... the
    /// UA must pop the current node off the stack of open elements."
    pub(super) fn generate_implied_end_tags(&mut self) {
        while self.stack.last().is_some_and(has_implied_end_tag) {
            self.pop();
        }
    }

    /// "If a step requires the UA to generate implied end tags but lists an
    /// element to exclude from the process, then the UA must perform the
    /// above steps as if that element was not in the above list."
    pub(super) fn generate_implied_end_tags_except(&mut self, excluded: &ElementName) {
        while self
            .stack
            .last()
            .is_some_and(|current| has_implied_end_tag(current) && current.name != *excluded)
        {
            self.pop();
        }
    }

    /// [§ 13.2.6.4.9](https://html.spec.whatwg.org/multipage/parsing.html#clear-the-stack-back-to-a-table-context)
    ///
    /// Pop until the entry at `index` is the current node. The callers pass
    /// the topmost `table`, `tbody` group or `tr`, or the root in the
    /// fragment case.
    pub(super) fn clear_stack_back_to(&mut self, index: usize) {
        self.pop_until(index + 1);
    }

    /// "If the stack of open elements has a p element in button scope, then
    /// close a p element."
    pub(super) fn implicitly_close_p(&mut self) {
        let Some(index) = self.find_in_scope(&P, Scope::Button) else {
            return;
        };
        // STEP 1: "Generate implied end tags, except for p elements."
        self.generate_implied_end_tags_except(&P);
        // STEP 2: "If the current node is not a p element, then this is a
        //          parse error."
        if index + 1 != self.stack.len() {
            self.err("Unclosed elements.");
        }
        // STEP 3: "Pop elements from the stack of open elements until a p
        //          element has been popped from the stack."
        self.pop_until(index);
    }

    /// [§ 13.2.6.4.15](https://html.spec.whatwg.org/multipage/parsing.html#close-the-cell)
    pub(super) fn close_the_cell(&mut self, index: usize) {
        // STEP 1: "Generate implied end tags."
        self.generate_implied_end_tags();
        // STEP 2: "If the current node is not now a td element or a th
        //          element, then this is a parse error."
        if index + 1 != self.stack.len() {
            self.err("Unclosed elements.");
        }
        // STEP 3: "Pop elements from the stack of open elements stack until
        //          a td element or a th element has been popped from the
        //          stack."
        self.pop_until(index);
        // STEP 4: "Clear the list of active formatting elements up to the
        //          last marker."
        self.clear_formatting_to_last_marker();
        // STEP 5: "Switch the insertion mode to "in row"."
        self.mode = InsertionMode::InRow;
    }

    /// Close the open `select`. Returns false when there is none in table
    /// scope (fragment case).
    pub(super) fn end_select(&mut self) -> bool {
        let Some(index) = self.find_in_scope(&SELECT, Scope::Table) else {
            return false;
        };
        self.pop_until(index);
        self.reset_insertion_mode();
        true
    }

    /// [§ 13.2.4.1 Reset the insertion mode appropriately](https://html.spec.whatwg.org/multipage/parsing.html#reset-the-insertion-mode-appropriately)
    pub(super) fn reset_insertion_mode(&mut self) {
        // STEP 1: "Let last be false."
        // STEP 2: "Let node be the last node in the stack of open elements."
        for index in (0..self.stack.len()).rev() {
            // STEP 3: "Loop: If node is the first node in the stack of open
            //          elements, then set last to true, and, if the parser
            //          was created as part of the HTML fragment parsing
            //          algorithm (fragment case), set node to the context
            //          element passed to that algorithm."
            let last = index == 0;
            let node = &self.stack[index];
            let (name, namespace) = match &self.context {
                Some(context) if last => (context.clone(), Namespace::Html),
                _ => (node.name.clone(), node.namespace),
            };
            if namespace != Namespace::Html {
                continue;
            }
            let mode = match name.group() {
                // STEP 4: "If node is a select element, run these substeps"
                Group::Select => {
                    if self.stack[..index].iter().any(|n| n.is_html(&TABLE)) {
                        Some(InsertionMode::InSelectInTable)
                    } else {
                        Some(InsertionMode::InSelect)
                    }
                }
                // STEP 5: "If node is a td or th element and last is false"
                Group::Td if !last => Some(InsertionMode::InCell),
                Group::Tr => Some(InsertionMode::InRow),
                Group::Tbody => Some(InsertionMode::InTableBody),
                Group::Caption => Some(InsertionMode::InCaption),
                Group::Colgroup => Some(InsertionMode::InColumnGroup),
                Group::Table => Some(InsertionMode::InTable),
                Group::Head if !last => Some(InsertionMode::InHead),
                Group::Body => Some(InsertionMode::InBody),
                Group::Frameset => Some(InsertionMode::InFrameset),
                // STEP 15: "If node is an html element, run these substeps"
                Group::Html => Some(if self.head_pointer.is_none() {
                    InsertionMode::BeforeHead
                } else {
                    InsertionMode::AfterHead
                }),
                // STEP 16: "If last is true, then switch the insertion mode
                //           to "in body" and return. (fragment case)"
                _ if last => Some(InsertionMode::InBody),
                _ => None,
            };
            if let Some(mode) = mode {
                self.mode = mode;
                return;
            }
        }
        self.mode = InsertionMode::InBody;
    }

    pub(super) fn body_closed(&mut self) {
        if let Some(body) = self.stack.get(1).filter(|node| node.is_html(&BODY)) {
            let body = body.node.clone();
            self.sink.on_body_closed(&body);
        }
    }

    pub(super) fn html_closed(&mut self) {
        if let Some(root) = self.stack.first() {
            let root = root.node.clone();
            self.sink.on_html_closed(&root);
        }
    }

    /// Whether the `table` new content would be foster parented out of has
    /// already had content foster parented out of it.
    pub(super) fn is_tainted(&self) -> bool {
        self.stack
            .get(self.find_last_or_root(&TABLE))
            .is_some_and(|node| node.tainted)
    }

    // ---------------------------------------------------------------------
    // Inserting nodes
    // ---------------------------------------------------------------------

    /// [§ 13.2.6.1 Creating and inserting nodes](https://html.spec.whatwg.org/multipage/parsing.html#appropriate-place-for-inserting-a-node)
    fn place(&mut self, node: &S::Handle, placement: Placement) {
        let Some(current) = self.stack.last() else {
            return;
        };
        if placement == Placement::MayFoster && current.foster_parenting {
            self.insert_into_foster_parent(node);
        } else {
            let parent = current.node.clone();
            self.sink.detach_and_append_to_new_parent(node, &parent);
        }
    }

    /// [§ 13.2.6.1](https://html.spec.whatwg.org/multipage/parsing.html#foster-parent)
    ///
    /// "If foster parenting is enabled and target is a table, tbody, tfoot,
    /// thead, or tr element"
    pub(super) fn insert_into_foster_parent(&mut self, child: &S::Handle) {
        // STEP 2.1: "Let last table be the last table element in the stack
        //            of open elements, if any."
        let index = self.find_last_or_root(&TABLE);
        let Some(entry) = self.stack.get_mut(index) else {
            return;
        };
        entry.tainted = true;
        let table = entry.node.clone();

        // STEP 2.3: "If there is no last table, then let adjusted insertion
        //            location be inside the first element in the stack of
        //            open elements (the html element), after its last child
        //            (if any), and abort these steps. (fragment case)"
        if index == 0 {
            self.sink.detach_and_append_to_new_parent(child, &table);
            return;
        }

        // STEP 2.4: "If last table has a parent node, then let adjusted
        //            insertion location be inside last table's parent node,
        //            immediately before last table, and abort these steps."
        // STEP 2.5: "Let previous element be the element immediately above
        //            last table in the stack of open elements."
        match self.sink.parent_element_of(&table) {
            Some(parent) => self.sink.insert_before(child, &table, &parent),
            None => {
                let previous = self.stack[index - 1].node.clone();
                self.sink.detach_and_append_to_new_parent(child, &previous);
            }
        }
    }

    pub(super) fn append_text_to_current(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(current) = self.current_handle() {
            self.sink.append_characters(&current, text);
        }
    }

    /// Text that lands in a table part goes to the foster parent.
    pub(super) fn append_text_may_foster(&mut self, text: &str) {
        let fosters = self
            .stack
            .last()
            .is_some_and(|current| current.foster_parenting);
        if !fosters {
            self.append_text_to_current(text);
            return;
        }
        let index = self.find_last_or_root(&TABLE);
        let Some(entry) = self.stack.get_mut(index) else {
            return;
        };
        entry.tainted = true;
        let table = entry.node.clone();
        if index == 0 {
            self.sink.append_characters(&table, text);
            return;
        }
        match self.sink.parent_element_of(&table) {
            Some(parent) => self.sink.insert_characters_before(text, &table, &parent),
            None => {
                let previous = self.stack[index - 1].node.clone();
                self.sink.append_characters(&previous, text);
            }
        }
    }

    fn create_html_element(
        &mut self,
        name: &ElementName,
        attributes: &HtmlAttributes,
        form_associated: bool,
    ) -> S::Handle {
        let form = if form_associated {
            self.form_pointer.as_ref()
        } else {
            None
        };
        self.sink
            .create_element(Namespace::Html, name.name(), attributes, form)
    }

    /// [§ 13.2.6.1 Insert an HTML element](https://html.spec.whatwg.org/multipage/parsing.html#insert-an-html-element)
    pub(super) fn insert_html_element(
        &mut self,
        name: &ElementName,
        attributes: &HtmlAttributes,
        placement: Placement,
    ) -> S::Handle {
        let node = self.create_html_element(name, attributes, false);
        self.place(&node, placement);
        self.push(StackNode::new(name.clone(), Namespace::Html, node.clone()));
        node
    }

    /// An element the form element pointer associates with.
    pub(super) fn insert_form_associated_element(
        &mut self,
        name: &ElementName,
        attributes: &HtmlAttributes,
        placement: Placement,
    ) -> S::Handle {
        let node = self.create_html_element(name, attributes, true);
        self.place(&node, placement);
        self.push(StackNode::new(name.clone(), Namespace::Html, node.clone()));
        node
    }

    /// "Insert an HTML element for the token. Immediately pop the current
    /// node off the stack of open elements."
    pub(super) fn insert_void_element(
        &mut self,
        name: &ElementName,
        attributes: &HtmlAttributes,
        placement: Placement,
    ) {
        let _ = self.insert_html_element(name, attributes, placement);
        self.pop();
    }

    /// An element whose content the tokenizer reads as text.
    ///
    /// [§ 13.2.6.2 Parsing elements that contain only text](https://html.spec.whatwg.org/multipage/parsing.html#generic-raw-text-element-parsing-algorithm)
    pub(super) fn insert_raw_text_element(
        &mut self,
        tag: &Tag,
        model: ContentModel,
        placement: Placement,
    ) -> Step {
        let _ = self.insert_html_element(&tag.name, &tag.attributes, placement);
        self.raw_text_pops = 1;
        Step::Done(SinkDirective::SwitchContentModel(model))
    }

    /// [§ 13.2.6.1 Insert a foreign element](https://html.spec.whatwg.org/multipage/parsing.html#insert-a-foreign-element)
    ///
    /// `tag.attributes` must already project through `namespace`.
    pub(super) fn insert_foreign_element(
        &mut self,
        tag: &Tag,
        namespace: Namespace,
        placement: Placement,
    ) {
        let node = self.sink.create_element(
            namespace,
            local_name_in(&tag.name, namespace),
            &tag.attributes,
            None,
        );
        self.place(&node, placement);
        let mut entry = StackNode::new(tag.name.clone(), namespace, node);
        if namespace == Namespace::MathMl && is_html_annotation_xml(&tag.name, &tag.attributes) {
            entry.html_integration_point = true;
        }
        self.push(entry);
        // "If the token has its self-closing flag set, pop the current
        // node off the stack of open elements and acknowledge the token's
        // self-closing flag."
        if tag.self_closing {
            self.pop();
        }
    }

    /// "Create an element for the token in the HTML namespace, with the
    /// Document as the intended parent. Append it to the Document object.
    /// Put this element in the stack of open elements."
    pub(super) fn append_html_root(&mut self, attributes: &HtmlAttributes) {
        let node = self.sink.create_html_root(attributes);
        self.push(StackNode::new(HTML, Namespace::Html, node));
    }

    /// "Insert an HTML element for the token. Set the head element pointer
    /// to the newly created head element."
    pub(super) fn insert_head(&mut self, attributes: &HtmlAttributes) {
        let node = self.insert_html_element(&HEAD, attributes, Placement::Current);
        self.head_pointer = Some(node);
    }

    pub(super) fn insert_body(&mut self, attributes: &HtmlAttributes) {
        let _ = self.insert_html_element(&BODY, attributes, Placement::Current);
    }

    /// "Push the node pointed to by the head element pointer onto the
    /// stack of open elements." Returns whether there was a head.
    pub(super) fn push_head_pointer_onto_stack(&mut self) -> bool {
        let Some(head) = self.head_pointer.clone() else {
            return false;
        };
        self.push(StackNode::new(HEAD, Namespace::Html, head));
        true
    }

    // ---------------------------------------------------------------------
    // The list of active formatting elements
    // ---------------------------------------------------------------------

    fn formatting_position(&self, node: &S::Handle) -> Option<usize> {
        self.formatting
            .iter()
            .rposition(|entry| entry.node() == Some(node))
    }

    pub(super) fn remove_from_formatting(&mut self, node: &S::Handle) {
        if let Some(index) = self.formatting_position(node) {
            let _ = self.formatting.remove(index);
        }
    }

    /// The last `name` entry after the last marker.
    pub(super) fn active_formatting_element(&self, name: &ElementName) -> Option<usize> {
        for (index, entry) in self.formatting.iter().enumerate().rev() {
            match entry.element() {
                None => return None,
                Some(element) if element.is_html(name) => return Some(index),
                Some(_) => {}
            }
        }
        None
    }

    /// [§ 13.2.4.3 Push onto the list of active formatting elements](https://html.spec.whatwg.org/multipage/parsing.html#push-onto-the-list-of-active-formatting-elements)
    ///
    /// Includes the Noah's Ark clause: "If there are already three elements
    /// in the list of active formatting elements after the last marker, if
    /// any, or anywhere in the list if there are no markers, that have the
    /// same tag name, namespace, and attributes as element, then remove the
    /// earliest such element from the list of active formatting elements."
    fn push_formatting(&mut self, entry: StackNode<S::Handle>, attributes: HtmlAttributes) {
        // STEP 1: Count matching elements after the last marker.
        let mut count = 0;
        let mut earliest = None;
        for (index, existing) in self.formatting.iter().enumerate().rev() {
            let FormattingEntry::Formatting(element, existing_attributes) = existing else {
                break;
            };
            if element.name == entry.name
                && element.namespace == entry.namespace
                && same_attributes(existing_attributes, &attributes)
            {
                count += 1;
                earliest = Some(index);
            }
        }
        // STEP 2: If 3 or more matches, remove the earliest.
        if count >= 3
            && let Some(index) = earliest
        {
            let _ = self.formatting.remove(index);
        }
        // STEP 3: Push the new entry.
        self.formatting
            .push(FormattingEntry::Formatting(entry, attributes));
    }

    /// Insert a formatting element and remember it in the list.
    pub(super) fn insert_formatting_element(&mut self, tag: &Tag) {
        let node = self.insert_html_element(&tag.name, &tag.attributes, Placement::MayFoster);
        let entry = StackNode::new(tag.name.clone(), Namespace::Html, node);
        self.push_formatting(entry, tag.attributes.clone());
    }

    /// [§ 13.2.4.3 Clear the list of active formatting elements up to the last marker](https://html.spec.whatwg.org/multipage/parsing.html#clear-the-list-of-active-formatting-elements-up-to-the-last-marker)
    pub(super) fn clear_formatting_to_last_marker(&mut self) {
        while let Some(entry) = self.formatting.pop() {
            if entry.is_marker() {
                break;
            }
        }
    }

    /// [§ 13.2.4.3 Reconstruct the active formatting elements](https://html.spec.whatwg.org/multipage/parsing.html#reconstruct-the-active-formatting-elements)
    pub(super) fn reconstruct_active_formatting_elements(&mut self) {
        // STEP 1: "If there are no entries in the list of active formatting
        //          elements, then there is nothing to reconstruct; stop this
        //          algorithm."
        // STEP 2: "If the last (most recently added) entry in the list of
        //          active formatting elements is a marker, or if it is an
        //          element that is in the stack of open elements, then there
        //          is nothing to reconstruct; stop this algorithm."
        match self.formatting.last().map(FormattingEntry::node) {
            None | Some(None) => return,
            Some(Some(node)) if self.stack_position(node).is_some() => return,
            Some(Some(_)) => {}
        }

        // STEP 3-6: Rewind to the entry after the last marker or open
        //           element.
        let mut index = self.formatting.len() - 1;
        while index > 0 {
            match self.formatting[index - 1].node() {
                None => break,
                Some(node) if self.stack_position(node).is_some() => break,
                Some(_) => index -= 1,
            }
        }

        // STEP 7-10: "Create: Insert an HTML element for the token for
        //             which the element entry was created, to obtain new
        //             element." "Replace the entry for entry in the list
        //             with an entry for new element."
        for entry_index in index..self.formatting.len() {
            let FormattingEntry::Formatting(entry, attributes) = &self.formatting[entry_index]
            else {
                continue;
            };
            let name = entry.name.clone();
            let original = entry.node.clone();
            let attributes = attributes.clone();
            let clone = self.sink.shallow_clone(&original);
            self.place(&clone, Placement::MayFoster);
            let new_entry = StackNode::new(name, Namespace::Html, clone);
            self.push(new_entry.clone());
            self.formatting[entry_index] = FormattingEntry::Formatting(new_entry, attributes);
        }
    }

    /// [§ 13.2.6.4.7 Adoption agency algorithm](https://html.spec.whatwg.org/multipage/parsing.html#adoption-agency-algorithm)
    ///
    /// Returns false when the caller has to "act as described in the "any
    /// other end tag" entry" instead.
    pub(super) fn adoption_agency(&mut self, subject: &ElementName) -> bool {
        // STEP 2: "If the current node is an HTML element whose tag name is
        //          subject, and the current node is not in the list of
        //          active formatting elements, then pop the current node off
        //          the stack of open elements and return."
        if let Some(current) = self.stack.last()
            && current.is_html(subject)
            && self.formatting_position(&current.node).is_none()
        {
            self.pop();
            return true;
        }

        // STEP 3-6: "Let outer loop counter be 0." ... "If outer loop
        //           counter is greater than or equal to 8, then return."
        for _ in 0..8 {
            // STEP 7: "Let formatting element be the last element in the
            //          list of active formatting elements that: is between
            //          the end of the list and the last marker in the list,
            //          if any, or the start of the list otherwise, and has
            //          the tag name subject."
            // STEP 8: "If there is no such element, then return and instead
            //          act as described in the "any other end tag" entry
            //          above."
            let Some(list_index) = self.active_formatting_element(subject) else {
                return false;
            };
            let Some(formatting_node) = self.formatting[list_index].node().cloned() else {
                return false;
            };

            // STEP 9: "If formatting element is not in the stack of open
            //          elements, then this is a parse error; remove the
            //          element from the list, and return."
            let Some(formatting_index) = self.stack_position(&formatting_node) else {
                self.err(format!("No element \u{201C}{subject}\u{201D} to close."));
                let _ = self.formatting.remove(list_index);
                return true;
            };

            // STEP 10: "If formatting element is in the stack of open
            //           elements, but the element is not in scope, then this
            //           is a parse error; return."
            if self.stack[formatting_index + 1..]
                .iter()
                .any(|node| node.scoping)
            {
                self.err(format!("No element \u{201C}{subject}\u{201D} to close."));
                return true;
            }

            // STEP 11: "If formatting element is not the current node, this
            //           is a parse error. (But do not return.)"
            if formatting_index + 1 != self.stack.len() {
                self.err(format!(
                    "End tag \u{201C}{subject}\u{201D} violates nesting rules."
                ));
            }

            // STEP 12: "Let furthest block be the topmost node in the stack
            //           of open elements that is lower in the stack than
            //           formatting element, and is an element in the special
            //           category."
            let furthest = (formatting_index + 1..self.stack.len()).find(|&index| {
                let node = &self.stack[index];
                node.special || node.scoping
            });

            // STEP 13: "If there is no furthest block, then the UA must first
            //           pop all the nodes from the bottom of the stack of open
            //           elements, from the current node up to and including
            //           formatting element, then remove formatting element
            //           from the list of active formatting elements, and
            //           finally return."
            let Some(mut furthest_index) = furthest else {
                self.pop_until(formatting_index);
                let _ = self.formatting.remove(list_index);
                return true;
            };
            let Some(common_ancestor_index) = formatting_index.checked_sub(1) else {
                return true;
            };
            let furthest_block = self.stack[furthest_index].node.clone();

            // STEP 15: "Let a bookmark note the position of formatting
            //           element in the list of active formatting elements
            //           relative to the elements on either side of it in the
            //           list."
            let mut bookmark = list_index;

            // STEP 16: "Let node and last node be furthest block."
            let mut node_index = furthest_index;
            let mut last_node = furthest_block.clone();

            // STEP 17-18: "Inner loop"
            let mut inner_loop_counter = 0;
            loop {
                inner_loop_counter += 1;

                // STEP 18.2: "Let node be the element immediately above node
                //             in the stack of open elements"
                node_index -= 1;

                // STEP 18.3: "If node is formatting element, then break."
                if node_index == formatting_index {
                    break;
                }
                let node = self.stack[node_index].node.clone();

                // STEP 18.4: "If inner loop counter is greater than 3 and
                //             node is in the list of active formatting
                //             elements, then remove node from the list of
                //             active formatting elements."
                let mut node_list_index = self.formatting_position(&node);
                if inner_loop_counter > 3
                    && let Some(index) = node_list_index
                {
                    let _ = self.formatting.remove(index);
                    if bookmark > index {
                        bookmark -= 1;
                    }
                    node_list_index = None;
                }

                // STEP 18.5: "If node is not in the list of active formatting
                //             elements, then remove node from the stack of
                //             open elements and continue."
                let Some(node_list_index) = node_list_index else {
                    self.remove_from_stack_at(node_index);
                    furthest_index -= 1;
                    continue;
                };

                // STEP 18.6: "Create an element for the token for which the
                //             element node was created ... replace the entry
                //             for node in the list of active formatting
                //             elements with an entry for the new element,
                //             replace the entry for node in the stack of open
                //             elements with an entry for the new element, and
                //             let node be the new element."
                let FormattingEntry::Formatting(old_entry, attributes) =
                    &self.formatting[node_list_index]
                else {
                    break;
                };
                let name = old_entry.name.clone();
                let attributes = attributes.clone();
                let clone = self.sink.shallow_clone(&node);
                let new_entry = StackNode::new(name, Namespace::Html, clone.clone());
                self.formatting[node_list_index] =
                    FormattingEntry::Formatting(new_entry.clone(), attributes);
                self.stack[node_index] = new_entry;

                // STEP 18.7: "If last node is furthest block, then move the
                //             aforementioned bookmark to be immediately after
                //             the new node in the list of active formatting
                //             elements."
                if last_node == furthest_block {
                    bookmark = node_list_index + 1;
                }

                // STEP 18.8: "Append last node to node."
                self.sink.detach_and_append_to_new_parent(&last_node, &clone);

                // STEP 18.9: "Set last node to node."
                last_node = clone;
            }

            // STEP 19: "Insert whatever last node ended up being in the
            //           previous step at the appropriate place for inserting
            //           a node, but using common ancestor as the override
            //           target."
            let common_ancestor = &self.stack[common_ancestor_index];
            if common_ancestor.foster_parenting {
                self.insert_into_foster_parent(&last_node);
            } else {
                let parent = common_ancestor.node.clone();
                self.sink.detach_and_append_to_new_parent(&last_node, &parent);
            }

            // STEP 20: "Create an element for the token for which formatting
            //           element was created"
            let Some(list_index) = self.formatting_position(&formatting_node) else {
                return true;
            };
            let FormattingEntry::Formatting(formatting_entry, formatting_attributes) =
                &self.formatting[list_index]
            else {
                return true;
            };
            let formatting_name = formatting_entry.name.clone();
            let formatting_attributes = formatting_attributes.clone();
            let new_element = self.sink.shallow_clone(&formatting_node);

            // STEP 21: "Take all of the child nodes of furthest block and
            //           append them to the element created in the last step."
            self.sink
                .append_children_to_new_parent(&furthest_block, &new_element);

            // STEP 22: "Append that new element to furthest block."
            self.sink
                .detach_and_append_to_new_parent(&new_element, &furthest_block);

            // STEP 23: "Remove formatting element from the list of active
            //           formatting elements, and insert the new element into
            //           the list of active formatting elements at the
            //           position of the aforementioned bookmark."
            let new_entry = StackNode::new(formatting_name, Namespace::Html, new_element);
            let _ = self.formatting.remove(list_index);
            if bookmark > list_index {
                bookmark -= 1;
            }
            let bookmark = bookmark.min(self.formatting.len());
            self.formatting.insert(
                bookmark,
                FormattingEntry::Formatting(new_entry.clone(), formatting_attributes),
            );

            // STEP 24: "Remove formatting element from the stack of open
            //           elements, and insert the new element into the stack
            //           of open elements immediately below the position of
            //           furthest block in that stack."
            let _ = self.stack.remove(formatting_index);
            furthest_index -= 1;
            self.stack.insert(furthest_index + 1, new_entry);
        }
        true
    }

    // ---------------------------------------------------------------------
    // Shared tag rules
    // ---------------------------------------------------------------------

    /// "Parse error. ... For each attribute on the token, check to see if
    /// the attribute is already present on the top element of the stack of
    /// open elements. If it is not, add the attribute and its corresponding
    /// value to that element."
    pub(super) fn start_tag_stray_html(&mut self, tag: &Tag) -> Step {
        self.err("Stray \u{201C}html\u{201D} start tag.");
        if let Some(root) = self.stack.first() {
            let root = root.node.clone();
            self.sink.add_attributes_to_element(&root, &tag.attributes);
        }
        Step::DONE
    }

    /// The elements "in head" and "in body" both accept: `base`,
    /// `basefont`, `bgsound`, `link`, `meta`, `title`, `script`, `style` and
    /// `noframes`. Returns `None` for any other tag.
    pub(super) fn insert_head_content(&mut self, tag: &Tag) -> Option<Step> {
        let model = match tag.name.group() {
            Group::Base | Group::Link | Group::Meta => {
                self.insert_void_element(&tag.name, &tag.attributes, Placement::MayFoster);
                return Some(Step::DONE);
            }
            Group::Area if tag.name == BASEFONT || tag.name == BGSOUND => {
                self.insert_void_element(&tag.name, &tag.attributes, Placement::MayFoster);
                return Some(Step::DONE);
            }
            Group::Title => ContentModel::Rcdata,
            Group::Script | Group::Style | Group::Noframes => ContentModel::Cdata,
            _ => return None,
        };
        Some(self.insert_raw_text_element(tag, model, Placement::MayFoster))
    }
}

/// "a dd element, a dt element, an li element, an optgroup element, an
/// option element, a p element"
fn has_implied_end_tag<H>(node: &StackNode<H>) -> bool {
    node.namespace == Namespace::Html
        && matches!(
            node.name.group(),
            Group::Dd | Group::Li | Group::Optgroup | Group::Option | Group::P
        )
}
