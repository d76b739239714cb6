//! Integration tests for the tree builder.
//!
//! Expected trees use the html5lib tree-construction format produced by
//! `dump_tree`.

use bramble_common::warning::warn_once;
use bramble_common::{CollectingSink, Diagnostic, Severity};
use bramble_dom::{DocumentMode, DomTree, Namespace, NodeId, NodeType};
use bramble_html::{
    DoctypeExpectation, HtmlParser, ParseOutput, ParserConfig, dump_tree, parse_document,
    parse_fragment, tree_to_json,
};

/// Helper to parse a document with the default configuration
fn parse(html: &str) -> ParseOutput {
    parse_document(html, &ParserConfig::default()).expect("default policies never abort")
}

/// Helper to parse and return the tree dump
fn dump(html: &str) -> String {
    let output = parse(html);
    dump_tree(&output.tree, NodeId::ROOT)
}

/// Helper to parse and return the error messages
fn parse_with_errors(html: &str) -> (DomTree, Vec<String>) {
    let output = parse(html);
    let errors = output.errors().map(|e| e.message.clone()).collect();
    (output.tree, errors)
}

/// Helper to build an incremental parser that does not echo to stderr
fn quiet_parser(config: &ParserConfig) -> HtmlParser<DomTree> {
    HtmlParser::with_error_sink(DomTree::new(), config, Box::new(CollectingSink::quiet()))
}

/// Helper to feed `input` one character at a time
fn diagnostics_fed_per_char(input: &str) -> Vec<Diagnostic> {
    let mut parser = quiet_parser(&ParserConfig::default());
    let mut buf = [0u8; 4];
    for c in input.chars() {
        parser.feed(c.encode_utf8(&mut buf)).unwrap();
    }
    parser.end_with_diagnostics().unwrap().1
}

/// Helper to get element by tag name (first match, depth-first)
fn find_element(tree: &DomTree, from: NodeId, tag: &str) -> Option<NodeId> {
    if let Some(data) = tree.as_element(from)
        && data.local_name == tag
    {
        return Some(from);
    }
    for &child_id in tree.children(from) {
        if let Some(found) = find_element(tree, child_id, tag) {
            return Some(found);
        }
    }
    None
}

/// Helper to get text content of a node (concatenated)
fn text_content(tree: &DomTree, id: NodeId) -> String {
    let mut result = String::new();
    if let Some(node) = tree.get(id) {
        match &node.node_type {
            NodeType::Text(data) => result.push_str(data),
            _ => {
                for &child_id in tree.children(id) {
                    result.push_str(&text_content(tree, child_id));
                }
            }
        }
    }
    result
}

#[test]
fn test_minimal_document_has_no_errors() {
    let (tree, errors) = parse_with_errors("<!DOCTYPE html><p>Hello");
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(
        dump_tree(&tree, NodeId::ROOT),
        "| <!DOCTYPE html>\n| <html>\n|   <head>\n|   <body>\n|     <p>\n|       \"Hello\"\n"
    );
    assert_eq!(tree.document_mode(), DocumentMode::Standards);
}

#[test]
fn test_missing_doctype_is_quirks_and_an_error() {
    let (tree, errors) = parse_with_errors("<p>x");
    assert_eq!(tree.document_mode(), DocumentMode::Quirks);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("doctype"));
}

#[test]
fn test_missing_doctype_silenced_by_expectation() {
    let config =
        ParserConfig::default().with_doctype_expectation(DoctypeExpectation::NoDoctypeErrors);
    let output = parse_document("<p>x", &config).unwrap();
    assert_eq!(output.errors().count(), 0);
    assert_eq!(output.tree.document_mode(), DocumentMode::Quirks);
}

#[test]
fn test_block_closes_open_paragraph() {
    assert_eq!(
        dump("<!DOCTYPE html><p>A<div>B"),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       \"A\"\n\
         |     <div>\n\
         |       \"B\"\n"
    );
}

#[test]
fn test_misnested_formatting_elements() {
    let (tree, errors) = parse_with_errors("<!DOCTYPE html><p>1<b>2<i>3</b>4</i>5");
    assert_eq!(
        dump_tree(&tree, NodeId::ROOT),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       \"1\"\n\
         |       <b>\n\
         |         \"2\"\n\
         |         <i>\n\
         |           \"3\"\n\
         |       <i>\n\
         |         \"4\"\n\
         |       \"5\"\n"
    );
    assert!(errors.iter().any(|e| e.contains("violates nesting rules")));
}

#[test]
fn test_formatting_element_split_around_block() {
    assert_eq!(
        dump("<!DOCTYPE html><b>1<p>2</b>3</p>"),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <b>\n\
         |       \"1\"\n\
         |     <p>\n\
         |       <b>\n\
         |         \"2\"\n\
         |       \"3\"\n"
    );
}

#[test]
fn test_text_in_table_is_foster_parented() {
    let (tree, errors) = parse_with_errors("<!DOCTYPE html><table>X<tr><td>Y</td></tr></table>");
    assert_eq!(
        dump_tree(&tree, NodeId::ROOT),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     \"X\"\n\
         |     <table>\n\
         |       <tbody>\n\
         |         <tr>\n\
         |           <td>\n\
         |             \"Y\"\n"
    );
    assert_eq!(errors, vec!["Misplaced non-space characters inside a table."]);
}

#[test]
fn test_whitespace_in_table_stays_put() {
    let output = parse("<!DOCTYPE html><table> <tr> <td>x</td> </tr> </table>");
    let table = find_element(&output.tree, NodeId::ROOT, "table").unwrap();
    assert_eq!(output.tree.as_text(output.tree.children(table)[0]), Some(" "));
    assert_eq!(output.errors().count(), 0);
}

#[test]
fn test_head_elements_and_title_text() {
    let output = parse(
        "<!DOCTYPE html><html><head><title>a<b>c</b></title>\
         <meta charset=utf-8><script>if (a < b) {}</script></head><body></body></html>",
    );
    let tree = &output.tree;
    let head = find_element(tree, NodeId::ROOT, "head").unwrap();
    let title = find_element(tree, head, "title").unwrap();
    assert_eq!(text_content(tree, title), "a<b>c</b>");
    let script = find_element(tree, head, "script").unwrap();
    assert_eq!(text_content(tree, script), "if (a < b) {}");
    assert!(find_element(tree, head, "meta").is_some());
    assert_eq!(output.errors().count(), 0);
}

#[test]
fn test_textarea_drops_leading_newline() {
    let output = parse("<!DOCTYPE html><textarea>\nline</textarea>");
    let textarea = find_element(&output.tree, NodeId::ROOT, "textarea").unwrap();
    assert_eq!(text_content(&output.tree, textarea), "line");
}

#[test]
fn test_implied_list_items() {
    assert_eq!(
        dump("<!DOCTYPE html><ul><li>one<li>two</ul>"),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <ul>\n\
         |       <li>\n\
         |         \"one\"\n\
         |       <li>\n\
         |         \"two\"\n"
    );
}

#[test]
fn test_stray_end_tag_is_reported_and_ignored() {
    let (tree, errors) = parse_with_errors("<!DOCTYPE html><div>x</span></div>");
    let div = find_element(&tree, NodeId::ROOT, "div").unwrap();
    assert_eq!(text_content(&tree, div), "x");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("span"));
}

#[test]
fn test_select_content() {
    assert_eq!(
        dump("<!DOCTYPE html><select><option>a<option>b</select>"),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <select>\n\
         |       <option>\n\
         |         \"a\"\n\
         |       <option>\n\
         |         \"b\"\n"
    );
}

#[test]
fn test_comments_go_where_they_appear() {
    assert_eq!(
        dump("<!-- a --><!DOCTYPE html><p>x<!-- b --></p></body></html><!-- c -->"),
        "| <!--  a  -->\n\
         | <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       \"x\"\n\
         |       <!--  b  -->\n\
         | <!--  c  -->\n"
    );
}

#[test]
fn test_comments_can_be_suppressed() {
    let config = ParserConfig::default().with_report_comments(false);
    let output = parse_document("<!DOCTYPE html><!-- gone --><p>x", &config).unwrap();
    assert!(!dump_tree(&output.tree, NodeId::ROOT).contains("gone"));
}

#[test]
fn test_frameset_replaces_body() {
    assert_eq!(
        dump("<!DOCTYPE html><frameset><frame></frameset>"),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <frameset>\n\
         |     <frame>\n"
    );
}

#[test]
fn test_second_body_merges_attributes() {
    let output = parse("<!DOCTYPE html><body class=a><body id=b class=c>");
    let body = output.tree.body().unwrap();
    let element = output.tree.as_element(body).unwrap();
    assert_eq!(element.get_attribute("class"), Some("a"));
    assert_eq!(element.get_attribute("id"), Some("b"));
    assert!(output.errors().any(|e| e.message.contains("body")));
}

#[test]
fn test_foreign_content() {
    assert_eq!(
        dump(
            "<!DOCTYPE html><svg viewbox=\"0 0 1 1\"><lineargradient/>\
             <foreignobject><p>x</p></foreignobject></svg><math><mi>y</mi></math>"
        ),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <svg svg>\n\
         |       viewBox=\"0 0 1 1\"\n\
         |       <svg linearGradient>\n\
         |       <svg foreignObject>\n\
         |         <p>\n\
         |           \"x\"\n\
         |     <math math>\n\
         |       <math mi>\n\
         |         \"y\"\n"
    );
}

#[test]
fn test_self_closing_svg_is_not_an_error() {
    let (tree, errors) = parse_with_errors("<!DOCTYPE html><p><svg><circle/></svg>");
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    let circle = find_element(&tree, NodeId::ROOT, "circle").unwrap();
    assert_eq!(tree.as_element(circle).unwrap().namespace, Namespace::Svg);
}

#[test]
fn test_html_breaks_out_of_svg() {
    let (tree, errors) = parse_with_errors("<!DOCTYPE html><svg><g><div>x</div>");
    let div = find_element(&tree, NodeId::ROOT, "div").unwrap();
    assert_eq!(tree.as_element(div).unwrap().namespace, Namespace::Html);
    assert_eq!(tree.parent(div), tree.body());
    assert!(errors.iter().any(|e| e.contains("foreign namespace")));
}

#[test]
fn test_fragment_in_table_row() {
    let output = parse_fragment("<td>cell", "tr", &ParserConfig::default()).unwrap();
    assert!(output.fragment);
    assert_eq!(
        dump_tree(&output.tree, output.content_root()),
        "| <td>\n|   \"cell\"\n"
    );
}

#[test]
fn test_fragment_in_textarea_is_text() {
    let output = parse_fragment("<b>&amp;</b>", "textarea", &ParserConfig::default()).unwrap();
    assert_eq!(
        dump_tree(&output.tree, output.content_root()),
        "| \"<b>&</b>\"\n"
    );
}

#[test]
fn test_fragment_in_body() {
    let output = parse_fragment("<p>a<p>b", "DIV", &ParserConfig::default()).unwrap();
    assert_eq!(
        dump_tree(&output.tree, output.content_root()),
        "| <p>\n|   \"a\"\n| <p>\n|   \"b\"\n"
    );
    assert_eq!(output.errors().count(), 0);
}

#[test]
fn test_html401_doctypes() {
    let strict = "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \
                  \"http://www.w3.org/TR/html4/strict.dtd\"><p>x";
    let config = ParserConfig::default().with_doctype_expectation(DoctypeExpectation::Auto);
    let output = parse_document(strict, &config).unwrap();
    assert_eq!(output.tree.document_mode(), DocumentMode::Standards);
    assert_eq!(output.errors().count(), 0);

    let loose = "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \
                 \"http://www.w3.org/TR/html4/loose.dtd\"><p>x";
    let output = parse_document(loose, &config).unwrap();
    assert_eq!(output.tree.document_mode(), DocumentMode::AlmostStandards);

    let quirky = "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\"><p>x";
    let output = parse_document(quirky, &config).unwrap();
    assert_eq!(output.tree.document_mode(), DocumentMode::Quirks);
    assert!(output.errors().any(|e| e.message == "Quirky doctype."));
}

#[test]
fn test_legacy_doctype_under_html5_expectation() {
    let (tree, errors) = parse_with_errors(
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \
         \"http://www.w3.org/TR/html4/strict.dtd\"><p>x",
    );
    assert_eq!(tree.document_mode(), DocumentMode::Standards);
    assert_eq!(errors, vec!["Legacy doctype."]);
}

#[test]
fn test_chunked_input_builds_the_same_tree() {
    let input = "<!DOCTYPE html><title>T &amp; U</title><table><tr><td>a&notin;b\
                 <b>c<p>d</b></table><svg><path d=\"M0\"/></svg><!-- e -->";
    let whole = dump(input);

    let mut parser = quiet_parser(&ParserConfig::default());
    let mut buf = [0u8; 4];
    for c in input.chars() {
        parser.feed(c.encode_utf8(&mut buf)).unwrap();
    }
    let tree = parser.end().unwrap();
    assert_eq!(dump_tree(&tree, NodeId::ROOT), whole);
}

#[test]
fn test_strict_xml_comment_is_fatal() {
    let result = parse_document("<!DOCTYPE html><!-- a -- b -->", &ParserConfig::strict_xml());
    let error = result.unwrap_err();
    assert!(error.message.contains("--"));
}

#[test]
fn test_alter_infoset_comment() {
    let output =
        parse_document("<!DOCTYPE html><!-- a -- b -->", &ParserConfig::alter_infoset()).unwrap();
    assert!(dump_tree(&output.tree, NodeId::ROOT).contains("<!--  a - - b  -->"));
    assert!(
        output
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    );
}

#[test]
fn test_end_with_diagnostics_reports_locations() {
    let mut parser = quiet_parser(&ParserConfig::default());
    parser.feed("<!DOCTYPE html>\n<p>x</span>").unwrap();
    let (_, diagnostics) = parser.end_with_diagnostics().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].location.line, 2);
}

#[test]
fn test_json_output() {
    let output = parse("<!DOCTYPE html><a href=x>y</a>");
    let json = tree_to_json(&output.tree, NodeId::ROOT);
    assert_eq!(json["mode"], "no-quirks");
    let body = &json["children"][1]["children"][1];
    assert_eq!(body["name"], "body");
    assert_eq!(body["children"][0]["attributes"]["href"], "x");
    assert_eq!(body["children"][0]["children"][0]["data"], "y");
}

#[test]
fn test_end_tags_in_integration_points() {
    let (tree, errors) = parse_with_errors("<!DOCTYPE html><svg><desc></br>y");
    let desc = find_element(&tree, NodeId::ROOT, "desc").unwrap();
    let br = find_element(&tree, NodeId::ROOT, "br").unwrap();
    assert_eq!(tree.as_element(br).unwrap().namespace, Namespace::Html);
    assert_eq!(tree.parent(br), Some(desc));
    assert_eq!(text_content(&tree, desc), "y");
    assert!(errors.iter().any(|e| e.contains("foreign namespace")));

    let (tree, errors) = parse_with_errors("<!DOCTYPE html><math><mi></p>z");
    let mi = find_element(&tree, NodeId::ROOT, "mi").unwrap();
    let p = find_element(&tree, NodeId::ROOT, "p").unwrap();
    assert_eq!(tree.as_element(p).unwrap().namespace, Namespace::Html);
    assert_eq!(tree.parent(p), Some(mi));
    assert_eq!(text_content(&tree, mi), "z");
    assert!(errors.iter().any(|e| e.contains("foreign namespace")));

    assert_eq!(
        dump("<!DOCTYPE html><svg><foreignObject><p>a</p></br></foreignObject></svg>"),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <svg svg>\n\
         |       <svg foreignObject>\n\
         |         <p>\n\
         |           \"a\"\n\
         |         <br>\n"
    );
}

#[test]
fn test_noahs_ark_keeps_three_identical_formatting_elements() {
    assert_eq!(
        dump("<!DOCTYPE html><p><b><b><b><b><p>x"),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       <b>\n\
         |         <b>\n\
         |           <b>\n\
         |             <b>\n\
         |     <p>\n\
         |       <b>\n\
         |         <b>\n\
         |           <b>\n\
         |             \"x\"\n"
    );
}

#[test]
fn test_noahs_ark_compares_attributes() {
    // The fourth plain b evicts the first plain one; the b with a class
    // does not count towards the limit.
    assert_eq!(
        dump("<!DOCTYPE html><p><b class=a><b><b><b><b><p>x"),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       <b>\n\
         |         class=\"a\"\n\
         |         <b>\n\
         |           <b>\n\
         |             <b>\n\
         |               <b>\n\
         |     <p>\n\
         |       <b>\n\
         |         class=\"a\"\n\
         |         <b>\n\
         |           <b>\n\
         |             <b>\n\
         |               \"x\"\n"
    );
}

#[test]
fn test_list_item_scope() {
    assert_eq!(
        dump("<!DOCTYPE html><ul><li>a<div><li>b"),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <ul>\n\
         |       <li>\n\
         |         \"a\"\n\
         |         <div>\n\
         |       <li>\n\
         |         \"b\"\n"
    );
    // A special element other than address, div and p stops the search.
    assert_eq!(
        dump("<!DOCTYPE html><ul><li>a<section><li>b"),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <ul>\n\
         |       <li>\n\
         |         \"a\"\n\
         |         <section>\n\
         |           <li>\n\
         |             \"b\"\n"
    );
}

#[test]
fn test_button_scope() {
    let (tree, errors) = parse_with_errors("<!DOCTYPE html><button><p>x</button>y");
    assert_eq!(
        dump_tree(&tree, NodeId::ROOT),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <button>\n\
         |       <p>\n\
         |         \"x\"\n\
         |     \"y\"\n"
    );
    // Implied end tags close the p silently.
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    // The open p is outside button scope, so `</p>` opens an empty one.
    let (tree, errors) = parse_with_errors("<!DOCTYPE html><p><button></p>");
    assert_eq!(
        dump_tree(&tree, NodeId::ROOT),
        "| <!DOCTYPE html>\n\
         | <html>\n\
         |   <head>\n\
         |   <body>\n\
         |     <p>\n\
         |       <button>\n\
         |         <p>\n"
    );
    assert!(errors.iter().any(|e| e.contains("No \u{201C}p\u{201D} element in scope")));
}

#[test]
fn test_void_elements_never_have_children() {
    let (tree, _) = parse_with_errors("<!DOCTYPE html><p>a<br>b<img src=x>c<input>d</input>e<hr>f");
    for tag in ["br", "img", "input", "hr"] {
        let id = find_element(&tree, NodeId::ROOT, tag).unwrap();
        assert!(tree.children(id).is_empty(), "<{tag}> has children");
    }
    let body = tree.body().unwrap();
    assert_eq!(text_content(&tree, body), "abcdef");
}

#[test]
fn test_character_run_location_ignores_chunking() {
    let input = "<div><table><b>x</b></table></div>";
    let mut whole = quiet_parser(&ParserConfig::default());
    whole.feed(input).unwrap();
    let (_, whole) = whole.end_with_diagnostics().unwrap();

    let misplaced = whole
        .iter()
        .find(|d| d.message.starts_with("Misplaced non-space characters"))
        .unwrap();
    assert_eq!((misplaced.location.line, misplaced.location.column), (1, 16));
    assert_eq!(diagnostics_fed_per_char(input), whole);
}

#[test]
fn test_new_parser_echoes_diagnostics() {
    let mut parser = HtmlParser::new(DomTree::new(), &ParserConfig::default());
    parser.feed("<!DOCTYPE html><p>x</span>").unwrap();
    let (_, diagnostics) = parser.end_with_diagnostics().unwrap();
    assert_eq!(diagnostics.len(), 1);
    // Already printed while parsing.
    assert!(!warn_once("HTML Parser", &diagnostics[0]));
}
