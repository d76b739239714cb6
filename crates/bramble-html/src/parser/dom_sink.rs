//! [`DomTree`] as a [`TreeSink`], plus the tree dumps used by the CLI and
//! tests.

use std::fmt::Write as _;

use bramble_dom::{
    Attribute, DoctypeData, DocumentMode, DomTree, ElementData, Namespace, NodeId, NodeType,
};
use serde_json::{Value, json};

use crate::names::HtmlAttributes;

use super::sink::TreeSink;

impl TreeSink for DomTree {
    type Handle = NodeId;

    fn create_element(
        &mut self,
        namespace: Namespace,
        local_name: &str,
        attributes: &HtmlAttributes,
        _form: Option<&NodeId>,
    ) -> NodeId {
        self.alloc(NodeType::Element(ElementData {
            local_name: local_name.to_string(),
            namespace,
            attrs: attributes.to_attributes(),
        }))
    }

    fn create_html_root(&mut self, attributes: &HtmlAttributes) -> NodeId {
        let html = self.create_element(Namespace::Html, "html", attributes, None);
        self.append_child(NodeId::ROOT, html);
        html
    }

    fn detach_from_parent(&mut self, node: &NodeId) {
        self.detach(*node);
    }

    fn detach_and_append_to_new_parent(&mut self, child: &NodeId, new_parent: &NodeId) {
        self.append_child(*new_parent, *child);
    }

    fn append_children_to_new_parent(&mut self, old_parent: &NodeId, new_parent: &NodeId) {
        self.move_children(*old_parent, *new_parent);
    }

    fn has_children(&self, node: &NodeId) -> bool {
        !self.children(*node).is_empty()
    }

    fn shallow_clone(&mut self, node: &NodeId) -> NodeId {
        Self::shallow_clone(self, *node).unwrap_or(*node)
    }

    fn parent_element_of(&self, node: &NodeId) -> Option<NodeId> {
        self.parent(*node)
            .filter(|&parent| self.as_element(parent).is_some())
    }

    fn insert_before(&mut self, child: &NodeId, sibling: &NodeId, parent: &NodeId) {
        Self::insert_before(self, *parent, *child, *sibling);
    }

    fn insert_characters_before(&mut self, text: &str, sibling: &NodeId, parent: &NodeId) {
        self.insert_text_before(*parent, text, *sibling);
    }

    fn append_characters(&mut self, parent: &NodeId, text: &str) {
        self.append_text(*parent, text);
    }

    fn append_comment(&mut self, parent: &NodeId, text: &str) {
        let comment = self.alloc(NodeType::Comment(text.to_string()));
        self.append_child(*parent, comment);
    }

    fn append_comment_to_document(&mut self, text: &str) {
        self.append_comment(&NodeId::ROOT, text);
    }

    fn append_doctype_to_document(&mut self, name: &str, public_id: &str, system_id: &str) {
        let doctype = self.alloc(NodeType::Doctype(DoctypeData {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        }));
        self.append_child(NodeId::ROOT, doctype);
    }

    fn add_attributes_to_element(&mut self, node: &NodeId, attributes: &HtmlAttributes) {
        self.add_missing_attributes(*node, attributes.to_attributes());
    }

    fn on_document_mode_decided(
        &mut self,
        mode: DocumentMode,
        _public_id: Option<&str>,
        _system_id: Option<&str>,
        _html4: bool,
    ) {
        self.set_document_mode(mode);
    }
}

/// Render the subtree under `id` in the html5lib tree-construction test
/// format: one `| ` line per node, two spaces of indent per level.
#[must_use]
pub fn dump_tree(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    for &child in tree.children(id) {
        dump_node(tree, child, 0, &mut out);
    }
    out
}

fn dump_node(tree: &DomTree, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let prefix = "  ".repeat(depth);
    match &node.node_type {
        NodeType::Document => {}
        NodeType::Doctype(doctype) => {
            if doctype.public_id.is_empty() && doctype.system_id.is_empty() {
                let _ = writeln!(out, "| {prefix}<!DOCTYPE {}>", doctype.name);
            } else {
                let _ = writeln!(
                    out,
                    "| {prefix}<!DOCTYPE {} \"{}\" \"{}\">",
                    doctype.name, doctype.public_id, doctype.system_id
                );
            }
        }
        NodeType::Element(element) => {
            match element.namespace {
                Namespace::Html => {
                    let _ = writeln!(out, "| {prefix}<{}>", element.local_name);
                }
                foreign => {
                    let _ = writeln!(out, "| {prefix}<{foreign} {}>", element.local_name);
                }
            }
            let mut attrs: Vec<&Attribute> = element.attrs.iter().collect();
            attrs.sort_by_key(|attr| attr_sort_key(attr));
            for attr in attrs {
                let _ = writeln!(
                    out,
                    "| {prefix}  {}=\"{}\"",
                    attr_sort_key(attr),
                    attr.value
                );
            }
        }
        NodeType::Text(text) => {
            let _ = writeln!(out, "| {prefix}\"{text}\"");
        }
        NodeType::Comment(text) => {
            let _ = writeln!(out, "| {prefix}<!-- {text} -->");
        }
    }
    for &child in tree.children(id) {
        dump_node(tree, child, depth + 1, out);
    }
}

/// Namespaced attributes print as `xlink href`.
fn attr_sort_key(attr: &Attribute) -> String {
    attr.namespace.map_or_else(
        || attr.local_name.clone(),
        |ns| format!("{ns} {}", attr.local_name),
    )
}

/// Print a DOM tree to stdout with indentation.
pub fn print_tree(tree: &DomTree, id: NodeId, indent: usize) {
    let prefix = "  ".repeat(indent);
    if let Some(node) = tree.get(id) {
        match &node.node_type {
            NodeType::Document => {
                println!("{prefix}#document ({})", tree.document_mode());
            }
            NodeType::Doctype(doctype) => {
                println!("{prefix}<!DOCTYPE {}>", doctype.name);
            }
            NodeType::Element(data) => {
                let name = match data.namespace {
                    Namespace::Html => data.local_name.clone(),
                    foreign => format!("{foreign} {}", data.local_name),
                };
                if data.attrs.is_empty() {
                    println!("{prefix}<{name}>");
                } else {
                    let attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|attr| {
                            if attr.value.is_empty() {
                                attr.qualified_name()
                            } else {
                                format!("{}=\"{}\"", attr.qualified_name(), attr.value)
                            }
                        })
                        .collect();
                    println!("{prefix}<{name} {}>", attrs.join(" "));
                }
            }
            NodeType::Text(data) => {
                let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
                println!("{prefix}\"{display}\"");
            }
            NodeType::Comment(data) => {
                println!("{prefix}<!-- {data} -->");
            }
        }
        for &child_id in tree.children(id) {
            print_tree(tree, child_id, indent + 1);
        }
    }
}

/// The subtree under `id` as JSON: `{"type": ..., "children": [...]}`.
#[must_use]
pub fn tree_to_json(tree: &DomTree, id: NodeId) -> Value {
    let children: Vec<Value> = tree
        .children(id)
        .iter()
        .map(|&child| tree_to_json(tree, child))
        .collect();
    let Some(node) = tree.get(id) else {
        return Value::Null;
    };
    match &node.node_type {
        NodeType::Document => json!({
            "type": "document",
            "mode": tree.document_mode().to_string(),
            "children": children,
        }),
        NodeType::Doctype(doctype) => json!({
            "type": "doctype",
            "name": doctype.name,
            "public_id": doctype.public_id,
            "system_id": doctype.system_id,
        }),
        NodeType::Element(element) => {
            let attributes: serde_json::Map<String, Value> = element
                .attrs
                .iter()
                .map(|attr| (attr.qualified_name(), Value::String(attr.value.clone())))
                .collect();
            json!({
                "type": "element",
                "namespace": element.namespace.to_string(),
                "name": element.local_name,
                "attributes": attributes,
                "children": children,
            })
        }
        NodeType::Text(text) => json!({ "type": "text", "data": text }),
        NodeType::Comment(text) => json!({ "type": "comment", "data": text }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_element_of_skips_the_document() {
        let mut tree = DomTree::new();
        let html = tree.create_html_root(&HtmlAttributes::default());
        let body = tree.create_element(Namespace::Html, "body", &HtmlAttributes::default(), None);
        TreeSink::detach_and_append_to_new_parent(&mut tree, &body, &html);
        assert_eq!(tree.parent_element_of(&body), Some(html));
        assert_eq!(tree.parent_element_of(&html), None);
    }

    #[test]
    fn test_dump_format() {
        let mut tree = DomTree::new();
        tree.append_doctype_to_document("html", "", "");
        let html = tree.create_html_root(&HtmlAttributes::default());
        let svg = tree.create_element(Namespace::Svg, "svg", &HtmlAttributes::default(), None);
        TreeSink::detach_and_append_to_new_parent(&mut tree, &svg, &html);
        tree.append_characters(&html, "hi");
        tree.append_comment(&html, "c");
        assert_eq!(
            dump_tree(&tree, NodeId::ROOT),
            "| <!DOCTYPE html>\n| <html>\n|   <svg svg>\n|   \"hi\"\n|   <!-- c -->\n"
        );
    }

    #[test]
    fn test_json_shape() {
        let mut tree = DomTree::new();
        let html = tree.create_html_root(&HtmlAttributes::default());
        tree.append_characters(&html, "x");
        let value = tree_to_json(&tree, NodeId::ROOT);
        assert_eq!(value["type"], "document");
        assert_eq!(value["children"][0]["name"], "html");
        assert_eq!(value["children"][0]["children"][0]["data"], "x");
    }
}
