//! Tests for the tree mutations the parser relies on: reparenting,
//! insertion before a sibling, removal, child moves and text merging.

use bramble_dom::{Attribute, AttributeNamespace, DomTree, ElementData, NodeId, NodeType};

/// Helper to create a detached HTML element and return its `NodeId`.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::html(tag)))
}

/// Helper: a `div` attached to the document with three children a, b, c.
fn three_children(tree: &mut DomTree) -> (NodeId, NodeId, NodeId, NodeId) {
    let parent = alloc_element(tree, "div");
    tree.append_child(NodeId::ROOT, parent);
    let a = alloc_element(tree, "a");
    let b = alloc_element(tree, "b");
    let c = alloc_element(tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);
    (parent, a, b, c)
}

// ========== remove_child / detach ==========

#[test]
fn test_remove_child_first_of_three() {
    let mut tree = DomTree::new();
    let (parent, a, b, c) = three_children(&mut tree);

    tree.remove_child(parent, a);

    assert_eq!(tree.children(parent), &[b, c]);
    assert_eq!(tree.prev_sibling(b), None);
    assert_eq!(tree.parent(a), None);
    assert_eq!(tree.next_sibling(a), None);
}

#[test]
fn test_remove_child_middle_relinks_siblings() {
    let mut tree = DomTree::new();
    let (parent, a, b, c) = three_children(&mut tree);

    tree.remove_child(parent, b);

    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.next_sibling(a), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(a));
}

#[test]
fn test_remove_child_of_wrong_parent_is_noop() {
    let mut tree = DomTree::new();
    let (parent, a, _, _) = three_children(&mut tree);
    let other = alloc_element(&mut tree, "span");

    tree.remove_child(other, a);

    assert_eq!(tree.parent(a), Some(parent));
    assert_eq!(tree.children(parent).len(), 3);
}

#[test]
fn test_append_child_reparents() {
    let mut tree = DomTree::new();
    let (parent, a, b, c) = three_children(&mut tree);
    let target = alloc_element(&mut tree, "section");
    tree.append_child(NodeId::ROOT, target);

    tree.append_child(target, b);

    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.children(target), &[b]);
    assert_eq!(tree.parent(b), Some(target));
    assert_eq!(tree.prev_sibling(b), None);
}

// ========== traversal ==========

#[test]
fn test_ancestors_run_from_parent_to_root() {
    let mut tree = DomTree::new();
    let (parent, a, b, c) = three_children(&mut tree);
    let leaf = alloc_element(&mut tree, "i");
    tree.append_child(b, leaf);

    assert_eq!(
        tree.ancestors(leaf).collect::<Vec<_>>(),
        vec![b, parent, NodeId::ROOT]
    );
    assert_eq!(tree.ancestors(NodeId::ROOT).next(), None);

    tree.detach(b);
    assert_eq!(tree.ancestors(leaf).collect::<Vec<_>>(), vec![b]);
    assert_eq!(tree.next_sibling(a), Some(c));
}

// ========== insert_before ==========

#[test]
fn test_insert_before_first_child() {
    let mut tree = DomTree::new();
    let (parent, a, _, _) = three_children(&mut tree);
    let new_child = alloc_element(&mut tree, "z");

    tree.insert_before(parent, new_child, a);

    assert_eq!(tree.children(parent)[0], new_child);
    assert_eq!(tree.parent(new_child), Some(parent));
    assert_eq!(tree.prev_sibling(new_child), None);
    assert_eq!(tree.next_sibling(new_child), Some(a));
    assert_eq!(tree.prev_sibling(a), Some(new_child));
}

#[test]
fn test_insert_before_middle() {
    let mut tree = DomTree::new();
    let (parent, a, b, c) = three_children(&mut tree);
    let z = alloc_element(&mut tree, "z");

    tree.insert_before(parent, z, c);

    assert_eq!(tree.children(parent), &[a, b, z, c]);
    assert_eq!(tree.next_sibling(b), Some(z));
    assert_eq!(tree.prev_sibling(c), Some(z));
}

#[test]
fn test_insert_before_unrelated_reference_appends() {
    let mut tree = DomTree::new();
    let (parent, _, _, c) = three_children(&mut tree);
    let stray = alloc_element(&mut tree, "stray");
    let z = alloc_element(&mut tree, "z");

    tree.insert_before(parent, z, stray);

    assert_eq!(tree.last_child(parent), Some(z));
    assert_eq!(tree.prev_sibling(z), Some(c));
}

// ========== move_children ==========

#[test]
fn test_move_children_appends_to_existing() {
    let mut tree = DomTree::new();
    let (from, a, b, c) = three_children(&mut tree);
    let to = alloc_element(&mut tree, "span");
    tree.append_child(NodeId::ROOT, to);
    let existing = alloc_element(&mut tree, "x");
    tree.append_child(to, existing);

    tree.move_children(from, to);

    assert!(tree.children(from).is_empty());
    assert_eq!(tree.children(to), &[existing, a, b, c]);
    assert_eq!(tree.next_sibling(existing), Some(a));
    assert_eq!(tree.parent(c), Some(to));
}

#[test]
fn test_move_children_empty_source() {
    let mut tree = DomTree::new();
    let from = alloc_element(&mut tree, "div");
    let to = alloc_element(&mut tree, "span");

    tree.move_children(from, to);

    assert!(tree.children(to).is_empty());
}

// ========== text ==========

#[test]
fn test_append_text_merges_adjacent() {
    let mut tree = DomTree::new();
    let p = alloc_element(&mut tree, "p");
    tree.append_child(NodeId::ROOT, p);

    tree.append_text(p, "Hel");
    tree.append_text(p, "lo");

    assert_eq!(tree.children(p).len(), 1);
    assert_eq!(tree.as_text(tree.children(p)[0]), Some("Hello"));
}

#[test]
fn test_insert_text_before_merges_with_previous_text() {
    let mut tree = DomTree::new();
    let body = alloc_element(&mut tree, "body");
    tree.append_child(NodeId::ROOT, body);
    let table = alloc_element(&mut tree, "table");
    tree.append_child(body, table);

    tree.insert_text_before(body, "X", table);
    tree.insert_text_before(body, "Y", table);

    assert_eq!(tree.children(body).len(), 2);
    assert_eq!(tree.as_text(tree.children(body)[0]), Some("XY"));
    assert_eq!(tree.children(body)[1], table);
}

// ========== clone / attributes ==========

#[test]
fn test_shallow_clone_copies_data_not_children() {
    let mut tree = DomTree::new();
    let (parent, _, _, _) = three_children(&mut tree);

    let Some(copy) = tree.shallow_clone(parent) else {
        panic!("clone of an existing node");
    };

    assert_ne!(copy, parent);
    assert!(tree.children(copy).is_empty());
    assert_eq!(tree.parent(copy), None);
    assert_eq!(tree.as_element(copy).map(|e| e.local_name.as_str()), Some("div"));
}

#[test]
fn test_add_missing_attributes_keeps_existing_values() {
    let mut tree = DomTree::new();
    let mut data = ElementData::html("html");
    data.attrs.push(Attribute::new("lang", "en"));
    let html = tree.alloc(NodeType::Element(data));

    tree.add_missing_attributes(
        html,
        vec![
            Attribute::new("lang", "fr"),
            Attribute::new("class", "x"),
            Attribute {
                namespace: Some(AttributeNamespace::Xml),
                local_name: "lang".to_string(),
                value: "de".to_string(),
            },
        ],
    );

    let Some(element) = tree.as_element(html) else {
        panic!("html is an element");
    };
    assert_eq!(element.get_attribute("lang"), Some("en"));
    assert_eq!(element.get_attribute("class"), Some("x"));
    assert_eq!(element.attrs.len(), 3);
    assert_eq!(element.attrs[2].qualified_name(), "xml:lang");
}
