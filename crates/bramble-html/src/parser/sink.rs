//! The tree construction interface.
//!
//! The tree builder never touches a document directly. It asks a
//! [`TreeSink`] to create and move nodes, so the same parser can build a
//! [`bramble_dom::DomTree`], stream events, or drive some other tree.

use std::fmt::Debug;

use bramble_dom::{DocumentMode, Namespace};

use crate::names::{ElementName, HtmlAttributes};

/// The output side of the tree builder.
///
/// Handles are cheap references into the sink's own storage. Every
/// operation is infallible: a sink that cannot honour a request (say, a
/// handle it no longer knows) ignores it.
pub trait TreeSink {
    /// A reference to a node owned by the sink.
    type Handle: Clone + PartialEq + Debug;

    /// [§ 13.2.6.1 Create an element for a token](https://html.spec.whatwg.org/multipage/parsing.html#create-an-element-for-the-token)
    ///
    /// `attributes` already projects through the mode matching `namespace`.
    /// `form` is the form element pointer for form-associated elements.
    fn create_element(
        &mut self,
        namespace: Namespace,
        local_name: &str,
        attributes: &HtmlAttributes,
        form: Option<&Self::Handle>,
    ) -> Self::Handle;

    /// Create the `html` element and append it to the document.
    fn create_html_root(&mut self, attributes: &HtmlAttributes) -> Self::Handle;

    /// Remove `node` from its parent, if it has one.
    fn detach_from_parent(&mut self, node: &Self::Handle);

    /// Move `child` to the end of `new_parent`'s children.
    fn detach_and_append_to_new_parent(&mut self, child: &Self::Handle, new_parent: &Self::Handle);

    /// Move every child of `old_parent` to the end of `new_parent`.
    fn append_children_to_new_parent(
        &mut self,
        old_parent: &Self::Handle,
        new_parent: &Self::Handle,
    );

    /// Whether `node` has any children.
    fn has_children(&self, node: &Self::Handle) -> bool;

    /// A detached copy of `node` with the same name and attributes and no
    /// children.
    fn shallow_clone(&mut self, node: &Self::Handle) -> Self::Handle;

    /// The parent of `node`, when it is an element. A document parent
    /// counts as no parent.
    fn parent_element_of(&self, node: &Self::Handle) -> Option<Self::Handle>;

    /// Insert `child` into `parent` right before `sibling`.
    fn insert_before(&mut self, child: &Self::Handle, sibling: &Self::Handle, parent: &Self::Handle);

    /// Insert text into `parent` right before `sibling`.
    fn insert_characters_before(
        &mut self,
        text: &str,
        sibling: &Self::Handle,
        parent: &Self::Handle,
    );

    /// Append text to `parent`.
    fn append_characters(&mut self, parent: &Self::Handle, text: &str);

    /// Append a comment to `parent`.
    fn append_comment(&mut self, parent: &Self::Handle, text: &str);

    /// Append a comment to the document itself.
    fn append_comment_to_document(&mut self, text: &str);

    /// Append a doctype to the document. Missing identifiers arrive as `""`.
    fn append_doctype_to_document(&mut self, name: &str, public_id: &str, system_id: &str);

    /// [§ 13.2.6.4.7](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    ///
    /// "add the attribute and its corresponding value to that element"
    /// for each attribute the element does not already have.
    fn add_attributes_to_element(&mut self, node: &Self::Handle, attributes: &HtmlAttributes);

    /// Parsing started. `fragment` is true for fragment parsing.
    fn on_start(&mut self, _fragment: bool) {}

    /// Parsing finished.
    fn on_end(&mut self) {}

    /// An element was pushed onto the stack of open elements.
    fn on_element_pushed(&mut self, _namespace: Namespace, _name: &ElementName, _node: &Self::Handle) {
    }

    /// An element was popped off the stack of open elements.
    fn on_element_popped(&mut self, _namespace: Namespace, _name: &ElementName, _node: &Self::Handle) {
    }

    /// The `body` element was closed by an end tag or end of input.
    fn on_body_closed(&mut self, _body: &Self::Handle) {}

    /// The `html` element was closed by an end tag or end of input.
    fn on_html_closed(&mut self, _html: &Self::Handle) {}

    /// The doctype (or its absence) settled the document mode. `html4` is
    /// true when the doctype was an HTML 4 one.
    fn on_document_mode_decided(
        &mut self,
        _mode: DocumentMode,
        _public_id: Option<&str>,
        _system_id: Option<&str>,
        _html4: bool,
    ) {
    }
}
