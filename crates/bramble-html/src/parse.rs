//! The tokenizer and tree builder wired together.
//!
//! [`HtmlParser`] is the incremental entry point: feed it chunks as they
//! arrive and call [`HtmlParser::end`]. [`parse_document`] and
//! [`parse_fragment`] are one-shot helpers that build a [`DomTree`].

use bramble_common::warning::clear_warnings;
use bramble_common::{CollectingSink, Diagnostic, ErrorSink, FatalError, Severity};
use bramble_dom::{DocumentMode, DomTree, NodeId};

use crate::config::ParserConfig;
use crate::parser::{TreeBuilder, TreeSink};
use crate::tokenizer::{ContentModel, Tokenizer};

/// An incremental HTML parser writing into a [`TreeSink`].
pub struct HtmlParser<S: TreeSink> {
    tokenizer: Tokenizer,
    builder: TreeBuilder<S>,
}

impl<S: TreeSink> HtmlParser<S> {
    /// A document parser that collects diagnostics in a [`CollectingSink`]
    /// and echoes each distinct one to stderr.
    ///
    /// Starting a parser forgets the lines echoed for earlier documents.
    /// When `config.fragment_context` is set the input is parsed as the
    /// children of that element instead.
    #[must_use]
    pub fn new(sink: S, config: &ParserConfig) -> Self {
        clear_warnings();
        Self::with_error_sink(sink, config, Box::new(CollectingSink::new()))
    }

    /// A parser that reports to `errors`.
    #[must_use]
    pub fn with_error_sink(sink: S, config: &ParserConfig, errors: Box<dyn ErrorSink>) -> Self {
        let mut tokenizer = Tokenizer::new(config);
        let mut builder = TreeBuilder::new(sink, config, errors);
        match &config.fragment_context {
            Some(context) => {
                // [§ 13.4 Parsing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#parsing-html-fragments)
                let context = tokenizer
                    .names_mut()
                    .element(&context.to_ascii_lowercase());
                let model = builder.start_fragment(context.clone());
                if model != ContentModel::Pcdata {
                    tokenizer.set_content_model(model, Some(context));
                }
            }
            None => builder.start_document(),
        }
        Self { tokenizer, builder }
    }

    /// Parse the next chunk of input.
    ///
    /// # Errors
    ///
    /// Returns the [`FatalError`] raised by a `Fatal` XML policy. The parser
    /// is unusable afterwards.
    pub fn feed(&mut self, chunk: &str) -> Result<(), FatalError> {
        self.tokenizer.feed(chunk, &mut self.builder)
    }

    /// Finish the parse and hand back the sink.
    ///
    /// # Errors
    ///
    /// As for [`HtmlParser::feed`].
    pub fn end(mut self) -> Result<S, FatalError> {
        self.tokenizer.end_of_input(&mut self.builder)?;
        Ok(self.builder.into_sink())
    }

    /// End the parse and also return the diagnostics the error sink kept.
    ///
    /// # Errors
    ///
    /// As for [`HtmlParser::feed`].
    pub fn end_with_diagnostics(mut self) -> Result<(S, Vec<Diagnostic>), FatalError> {
        self.tokenizer.end_of_input(&mut self.builder)?;
        let diagnostics = self.builder.errors_mut().take_diagnostics();
        Ok((self.builder.into_sink(), diagnostics))
    }

    /// The document mode settled so far.
    #[must_use]
    pub const fn document_mode(&self) -> DocumentMode {
        self.builder.document_mode()
    }

    /// The tree builder, for inspecting its state between chunks.
    #[must_use]
    pub const fn tree_builder(&self) -> &TreeBuilder<S> {
        &self.builder
    }
}

/// A parsed tree and everything reported while building it.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    /// The document. For fragments this holds the `html` root whose
    /// children are the fragment.
    pub tree: DomTree,
    /// Errors and warnings, in input order.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether the input was parsed as a fragment.
    pub fragment: bool,
}

impl ParseOutput {
    /// The node whose children are the parse result: the document, or the
    /// `html` root of a fragment.
    #[must_use]
    pub fn content_root(&self) -> NodeId {
        if self.fragment {
            self.tree.document_element().unwrap_or(NodeId::ROOT)
        } else {
            NodeId::ROOT
        }
    }

    /// Diagnostics of error severity.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Error)
    }
}

/// Parse a whole document into a [`DomTree`].
///
/// Diagnostics are collected into [`ParseOutput::diagnostics`] without
/// being echoed.
///
/// # Errors
///
/// Returns the [`FatalError`] raised by a `Fatal` XML policy.
pub fn parse_document(input: &str, config: &ParserConfig) -> Result<ParseOutput, FatalError> {
    let mut config = config.clone();
    config.fragment_context = None;
    run(input, &config, false)
}

/// Parse `input` as the children of a `context` element.
///
/// # Errors
///
/// Returns the [`FatalError`] raised by a `Fatal` XML policy.
pub fn parse_fragment(
    input: &str,
    context: &str,
    config: &ParserConfig,
) -> Result<ParseOutput, FatalError> {
    let config = config.clone().with_fragment_context(context);
    run(input, &config, true)
}

fn run(input: &str, config: &ParserConfig, fragment: bool) -> Result<ParseOutput, FatalError> {
    let mut parser =
        HtmlParser::with_error_sink(DomTree::new(), config, Box::new(CollectingSink::quiet()));
    parser.feed(input)?;
    let (tree, diagnostics) = parser.end_with_diagnostics()?;
    Ok(ParseOutput {
        tree,
        diagnostics,
        fragment,
    })
}
