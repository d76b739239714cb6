//! Integration tests for the HTML tokenizer.

use bramble_common::{CollectingSink, ErrorSink, FatalError};
use bramble_html::tokenizer::{
    ContentModel, Doctype, SinkDirective, Tag, Token, TokenSink, Tokenizer, TokenizerState,
};
use bramble_html::{ParserConfig, XmlViolationPolicy};

/// Records every token, merging adjacent character runs.
struct RecordingSink {
    tokens: Vec<Token>,
    errors: CollectingSink,
    foreign: bool,
}

impl RecordingSink {
    const fn new() -> Self {
        Self {
            tokens: Vec::new(),
            errors: CollectingSink::quiet(),
            foreign: false,
        }
    }

    fn error_messages(&self) -> Vec<String> {
        self.errors
            .diagnostics()
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }
}

impl TokenSink for RecordingSink {
    fn start_tag(&mut self, tag: Tag) -> Result<SinkDirective, FatalError> {
        let directive = match tag.name.name() {
            "title" | "textarea" => SinkDirective::SwitchContentModel(ContentModel::Rcdata),
            "script" | "style" => SinkDirective::SwitchContentModel(ContentModel::Cdata),
            "plaintext" => SinkDirective::SwitchContentModel(ContentModel::Plaintext),
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

    fn cdata_sections_allowed(&self) -> bool {
        self.foreign
    }

    fn errors(&mut self) -> &mut dyn ErrorSink {
        &mut self.errors
    }
}

/// Helper to tokenize a string and return the sink
fn tokenize(input: &str) -> RecordingSink {
    tokenize_with(input, RecordingSink::new())
}

fn tokenize_with(input: &str, mut sink: RecordingSink) -> RecordingSink {
    let mut tokenizer = Tokenizer::new(&ParserConfig::default());
    tokenizer.feed(input, &mut sink).unwrap();
    tokenizer.end_of_input(&mut sink).unwrap();
    sink
}

/// Helper to tokenize under a configuration whose policies may abort
fn tokenize_under(input: &str, config: &ParserConfig) -> (RecordingSink, Result<(), FatalError>) {
    let mut sink = RecordingSink::new();
    let mut tokenizer = Tokenizer::new(config);
    let result = tokenizer
        .feed(input, &mut sink)
        .and_then(|()| tokenizer.end_of_input(&mut sink));
    (sink, result)
}

/// Helper to render the tokens the way `Token` displays them
fn rendered(sink: &RecordingSink) -> Vec<String> {
    sink.tokens.iter().map(ToString::to_string).collect()
}

/// Helper to get the text of the only character token
fn text_of(input: &str) -> (String, Vec<String>) {
    let sink = tokenize(input);
    let text = sink
        .tokens
        .iter()
        .find_map(|token| match token {
            Token::Characters(run) => Some(run.clone()),
            _ => None,
        })
        .unwrap_or_default();
    (text, sink.error_messages())
}

#[test]
fn test_doctype_with_identifiers() {
    let sink = tokenize(
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \
         'http://www.w3.org/TR/html4/strict.dtd'>",
    );
    match &sink.tokens[0] {
        Token::Doctype(doctype) => {
            assert_eq!(doctype.name.as_deref(), Some("html"));
            assert_eq!(doctype.public_id.as_deref(), Some("-//W3C//DTD HTML 4.01//EN"));
            assert_eq!(
                doctype.system_id.as_deref(),
                Some("http://www.w3.org/TR/html4/strict.dtd")
            );
            assert!(!doctype.force_quirks);
        }
        other => panic!("Expected DOCTYPE token, got {other}"),
    }
    assert!(sink.error_messages().is_empty());
}

#[test]
fn test_nameless_doctype_forces_quirks() {
    let sink = tokenize("<!DOCTYPE>");
    match &sink.tokens[0] {
        Token::Doctype(doctype) => {
            assert_eq!(doctype.name, None);
            assert!(doctype.force_quirks);
        }
        other => panic!("Expected DOCTYPE token, got {other}"),
    }
    assert_eq!(sink.error_messages(), vec!["Nameless doctype."]);
}

#[test]
fn test_attributes_are_lowercased() {
    let sink = tokenize("<A HREF='x' Title=y checked>");
    match &sink.tokens[0] {
        Token::StartTag(tag) => {
            assert_eq!(tag.name.name(), "a");
            assert_eq!(tag.attributes.len(), 3);
            assert_eq!(tag.attributes.value_of_qname("href"), Some("x"));
            assert_eq!(tag.attributes.value_of_qname("title"), Some("y"));
            assert_eq!(tag.attributes.value_of_qname("checked"), Some(""));
            assert!(!tag.self_closing);
        }
        other => panic!("Expected StartTag token, got {other}"),
    }
}

#[test]
fn test_duplicate_attribute_keeps_the_first() {
    let sink = tokenize("<p id=a id=b>");
    match &sink.tokens[0] {
        Token::StartTag(tag) => {
            assert_eq!(tag.attributes.len(), 1);
            assert_eq!(tag.attributes.value_of_qname("id"), Some("a"));
        }
        other => panic!("Expected StartTag token, got {other}"),
    }
    assert_eq!(
        sink.error_messages(),
        vec!["Duplicate attribute \u{201C}id\u{201D}."]
    );
}

#[test]
fn test_void_element_may_self_close() {
    let sink = tokenize("<br/><div/>");
    assert_eq!(rendered(&sink), vec!["<br />", "<div />", "EOF"]);
    let errors = sink.error_messages();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("void elements"));
}

#[test]
fn test_foreign_content_may_self_close() {
    let mut sink = RecordingSink::new();
    sink.foreign = true;
    let sink = tokenize_with("<path/>", sink);
    assert_eq!(rendered(&sink), vec!["<path />", "EOF"]);
    assert!(sink.error_messages().is_empty());
}

#[test]
fn test_end_tag_with_attributes() {
    let sink = tokenize("</p class=x>");
    assert_eq!(rendered(&sink), vec!["</p>", "EOF"]);
    assert_eq!(sink.error_messages(), vec!["End tag had attributes."]);
}

#[test]
fn test_empty_end_tag_is_dropped() {
    let sink = tokenize("a</>b");
    assert_eq!(rendered(&sink), vec!["\"ab\"", "EOF"]);
    assert_eq!(sink.error_messages(), vec!["Saw \u{201C}</>\u{201D}."]);
}

#[test]
fn test_processing_instruction_is_a_bogus_comment() {
    let sink = tokenize("<?xml version=\"1.0\"?>");
    assert_eq!(
        rendered(&sink),
        vec!["<!--?xml version=\"1.0\"?-->", "EOF"]
    );
    assert_eq!(sink.error_messages().len(), 1);
}

#[test]
fn test_comment_at_end_of_file() {
    let sink = tokenize("<!-- abc");
    assert_eq!(rendered(&sink), vec!["<!-- abc-->", "EOF"]);
    assert_eq!(sink.error_messages(), vec!["End of file inside comment."]);
}

#[test]
fn test_rcdata_decodes_references_but_not_tags() {
    let sink = tokenize("<title><b>&amp;</b></title>");
    assert_eq!(
        rendered(&sink),
        vec!["<title>", "\"<b>&</b>\"", "</title>", "EOF"]
    );
}

#[test]
fn test_cdata_content_model_keeps_references() {
    let sink = tokenize("<style>a &amp; b</style>");
    assert_eq!(
        rendered(&sink),
        vec!["<style>", "\"a &amp; b\"", "</style>", "EOF"]
    );
}

#[test]
fn test_plaintext_runs_to_end_of_input() {
    let sink = tokenize("<plaintext></plaintext>&amp;");
    assert_eq!(
        rendered(&sink),
        vec!["<plaintext>", "\"</plaintext>&amp;\"", "EOF"]
    );
}

#[test]
fn test_cdata_section_in_foreign_content() {
    let mut sink = RecordingSink::new();
    sink.foreign = true;
    let sink = tokenize_with("<![CDATA[a<b]]>", sink);
    assert_eq!(rendered(&sink), vec!["\"a<b\"", "EOF"]);
    assert!(sink.error_messages().is_empty());
}

#[test]
fn test_cdata_section_in_html_is_a_bogus_comment() {
    let sink = tokenize("<![CDATA[a]]>");
    assert_eq!(rendered(&sink), vec!["<!--[CDATA[a]]-->", "EOF"]);
    assert_eq!(sink.error_messages(), vec!["Bogus comment."]);
}

#[test]
fn test_numeric_reference_out_of_range() {
    let (text, errors) = text_of("&#99999999999;");
    assert_eq!(text, "\u{FFFD}");
    assert_eq!(
        errors,
        vec!["Character reference outside the permissible Unicode range."]
    );
}

#[test]
fn test_numeric_references() {
    assert_eq!(text_of("&#65;&#x42;&#X43;").0, "ABC");
    // Windows-1252 remapping of the C1 range.
    let (text, errors) = text_of("&#x80;");
    assert_eq!(text, "\u{20AC}");
    assert_eq!(errors.len(), 1);
    assert_eq!(text_of("&#0;").0, "\u{FFFD}");
}

#[test]
fn test_numeric_reference_without_digits() {
    let (text, errors) = text_of("&#;");
    assert_eq!(text, "&#;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("No digits"));
}

#[test]
fn test_longest_named_reference_wins() {
    let (text, errors) = text_of("&notit;abc");
    assert_eq!(text, "\u{00AC}it;abc");
    assert_eq!(
        errors,
        vec!["Entity reference was not terminated by a semicolon."]
    );
    assert_eq!(text_of("&notin;").0, "\u{2209}");
}

#[test]
fn test_bare_ampersand_is_text() {
    let (text, errors) = text_of("fish & chips");
    assert_eq!(text, "fish & chips");
    assert!(errors.is_empty());
}

#[test]
fn test_unknown_named_reference() {
    let (text, errors) = text_of("&zzzz;");
    assert_eq!(text, "&zzzz;");
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_references_in_attribute_values() {
    let sink = tokenize("<a title=\"&amp;&lt\" href=\"?a=1&copy=2\">");
    match &sink.tokens[0] {
        Token::StartTag(tag) => {
            assert_eq!(tag.attributes.value_of_qname("title"), Some("&<"));
            assert_eq!(tag.attributes.value_of_qname("href"), Some("?a=1&copy=2"));
        }
        other => panic!("Expected StartTag token, got {other}"),
    }
}

#[test]
fn test_reference_split_across_chunks() {
    let mut tokenizer = Tokenizer::new(&ParserConfig::default());
    let mut sink = RecordingSink::new();
    for chunk in ["&no", "ti", "n; x"] {
        tokenizer.feed(chunk, &mut sink).unwrap();
    }
    tokenizer.end_of_input(&mut sink).unwrap();
    assert_eq!(rendered(&sink), vec!["\"\u{2209} x\"", "EOF"]);
}

#[test]
fn test_errors_carry_locations() {
    let sink = tokenize("one\ntwo <p id=a id=b>");
    let diagnostics = sink.errors.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].location.line, 2);
}

#[test]
fn test_non_ncname_tag_is_dropped_when_altering_the_infoset() {
    let config = ParserConfig::default().with_name_policy(XmlViolationPolicy::AlterInfoset);
    let (sink, result) = tokenize_under("<a:b>x</a:b>", &config);
    assert!(result.is_ok());
    assert_eq!(rendered(&sink), vec!["\"x\"", "EOF"]);
    assert_eq!(
        sink.error_messages(),
        vec![
            "Start tag \u{201C}a:b\u{201D} has a non-NCName name. Ignoring token.",
            "End tag \u{201C}a:b\u{201D} has a non-NCName name. Ignoring token.",
        ]
    );
}

#[test]
fn test_non_ncname_attribute_is_dropped_when_altering_the_infoset() {
    let config = ParserConfig::default().with_name_policy(XmlViolationPolicy::AlterInfoset);
    let (sink, result) = tokenize_under("<p foo:bar=1 id=a>", &config);
    assert!(result.is_ok());
    match &sink.tokens[0] {
        Token::StartTag(tag) => {
            assert_eq!(tag.attributes.len(), 1);
            assert_eq!(tag.attributes.value_of_qname("id"), Some("a"));
        }
        other => panic!("Expected StartTag token, got {other}"),
    }
    assert_eq!(
        sink.error_messages(),
        vec!["Attribute name \u{201C}foo:bar\u{201D} is not an NCName. Ignoring the attribute."]
    );
}

#[test]
fn test_non_ncname_names_are_fatal() {
    let config = ParserConfig::default().with_name_policy(XmlViolationPolicy::Fatal);
    let (sink, result) = tokenize_under("x<a:b>y", &config);
    let error = result.unwrap_err();
    assert!(error.message.contains("non-NCName"));
    assert!(sink.tokens.iter().all(|t| !matches!(t, Token::StartTag(_))));

    let (_, result) = tokenize_under("<p foo:bar=1>", &config);
    assert!(result.unwrap_err().message.contains("not an NCName"));

    let (sink, result) = tokenize_under("<a:b>", &ParserConfig::default());
    assert!(result.is_ok());
    assert_eq!(rendered(&sink), vec!["<a:b>", "EOF"]);
}

#[test]
fn test_xhtml_xmlns_on_html() {
    let input = "<html xmlns='http://www.w3.org/1999/xhtml'>";
    let xmlns_of = |sink: &RecordingSink| match &sink.tokens[0] {
        Token::StartTag(tag) => tag.attributes.value_of_qname("xmlns").map(str::to_string),
        other => panic!("Expected StartTag token, got {other}"),
    };

    let config = ParserConfig::default().with_xmlns_policy(XmlViolationPolicy::AlterInfoset);
    let (sink, result) = tokenize_under(input, &config);
    assert!(result.is_ok());
    assert_eq!(xmlns_of(&sink), None);

    let (sink, result) = tokenize_under(input, &ParserConfig::default());
    assert!(result.is_ok());
    assert_eq!(xmlns_of(&sink).as_deref(), Some("http://www.w3.org/1999/xhtml"));

    // The XHTML namespace on `html` is mappable, so even `Fatal` keeps it.
    let config = ParserConfig::default().with_xmlns_policy(XmlViolationPolicy::Fatal);
    let (sink, result) = tokenize_under(input, &config);
    assert!(result.is_ok());
    assert!(xmlns_of(&sink).is_some());
}

#[test]
fn test_bogus_xmlns_attributes() {
    let config = ParserConfig::default().with_bogus_xmlns_policy(XmlViolationPolicy::AlterInfoset);
    let (sink, result) = tokenize_under("<p xmlns='urn:x' xmlns:svg='urn:y' id=a>", &config);
    assert!(result.is_ok());
    match &sink.tokens[0] {
        Token::StartTag(tag) => {
            assert_eq!(tag.attributes.len(), 1);
            assert_eq!(tag.attributes.value_of_qname("id"), Some("a"));
        }
        other => panic!("Expected StartTag token, got {other}"),
    }
    assert_eq!(
        sink.error_messages(),
        vec![
            "Forbidden attribute \u{201C}xmlns\u{201D} is not mappable to namespace-aware XML 1.0.",
            "Forbidden attribute \u{201C}xmlns:svg\u{201D} is not mappable to namespace-aware XML 1.0.",
        ]
    );

    let config = ParserConfig::default().with_bogus_xmlns_policy(XmlViolationPolicy::Fatal);
    let (_, result) = tokenize_under("<p xmlns='urn:x'>", &config);
    assert!(result.unwrap_err().message.contains("Forbidden attribute"));
}

#[test]
fn test_control_characters_in_content() {
    let config = ParserConfig::alter_infoset();
    let (sink, result) = tokenize_under("a\u{1}b\u{C}c&#x1;d&#xB;e", &config);
    assert!(result.is_ok());
    assert_eq!(rendered(&sink), vec!["\"a\u{FFFD}b c\u{FFFD}d e\"", "EOF"]);
    assert_eq!(sink.errors.warning_count(), 4);

    let (sink, result) = tokenize_under("a\u{1}b", &ParserConfig::default());
    assert!(result.is_ok());
    assert_eq!(rendered(&sink), vec!["\"a\u{1}b\"", "EOF"]);

    let config = ParserConfig::default().with_content_non_xml_char_policy(XmlViolationPolicy::Fatal);
    let (_, result) = tokenize_under("a\u{1}b", &config);
    assert!(result.unwrap_err().message.contains("not a legal XML 1.0 character"));

    let config = ParserConfig::default().with_content_space_policy(XmlViolationPolicy::Fatal);
    let (_, result) = tokenize_under("a&#xC;b", &config);
    assert!(result.unwrap_err().message.contains("legal XML 1.0 white space"));
}

#[test]
fn test_fatal_error_poisons_the_tokenizer() {
    let mut tokenizer = Tokenizer::new(&ParserConfig::strict_xml());
    let mut sink = RecordingSink::new();
    let first = tokenizer.feed("<!-- a -- b -->", &mut sink).unwrap_err();
    let seen = sink.tokens.len();

    assert_eq!(tokenizer.feed("<p>more</p>", &mut sink), Err(first.clone()));
    assert_eq!(tokenizer.end_of_input(&mut sink), Err(first));
    assert_eq!(sink.tokens.len(), seen);
}

#[test]
fn test_start_resets_for_a_new_document() {
    let mut tokenizer = Tokenizer::new(&ParserConfig::strict_xml());
    let mut sink = RecordingSink::new();
    tokenizer.feed("one\ntwo <p data-x=", &mut sink).unwrap();
    assert_eq!(tokenizer.state(), TokenizerState::BeforeAttributeValue);
    assert!(tokenizer.names().custom_count() > 0);

    tokenizer.start();
    assert_eq!(tokenizer.state(), TokenizerState::Data);
    assert_eq!(tokenizer.names().custom_count(), 0);

    let mut sink = RecordingSink::new();
    tokenizer.feed("x</p id=a>", &mut sink).unwrap();
    tokenizer.end_of_input(&mut sink).unwrap();
    assert_eq!(rendered(&sink), vec!["\"x\"", "</p>", "EOF"]);
    assert_eq!(sink.errors.diagnostics()[0].location.line, 1);

    // A poisoned tokenizer recovers on `start`, and keeps its policies.
    let mut sink = RecordingSink::new();
    assert!(tokenizer.feed("<!-- a -- b -->", &mut sink).is_err());
    tokenizer.start();
    let mut sink = RecordingSink::new();
    tokenizer.feed("ok", &mut sink).unwrap();
    tokenizer.end_of_input(&mut sink).unwrap();
    assert_eq!(rendered(&sink), vec!["\"ok\"", "EOF"]);
}
