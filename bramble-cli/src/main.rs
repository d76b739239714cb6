//! Bramble command-line parser
//!
//! Parses an HTML document or fragment and prints the resulting tree and
//! the parse errors reported on the way.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bramble_common::{CollectingSink, Diagnostic, FatalError, Severity};
use bramble_dom::{DomTree, NodeId};
use bramble_html::{
    DoctypeExpectation, HtmlParser, ParserConfig, XmlViolationPolicy, print_tree, tree_to_json,
};
use clap::Parser;
use owo_colors::OwoColorize;

/// Bramble: an HTML5 parser that reports conformance errors
#[derive(Parser, Debug)]
#[command(name = "bramble")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # Parse a file and print the tree
    bramble ./index.html

    # Parse inline HTML
    bramble --html '<p>One<p>Two'

    # Parse a fragment as the content of a table row
    bramble --fragment tr --html '<td>cell'

    # Emit JSON and stop at the first XML 1.0 violation
    bramble --json --strict-xml ./page.html

    # Feed the input three characters at a time
    bramble --chunk-size 3 ./index.html
")]
struct Cli {
    /// Path to an HTML file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse HTML string directly instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Print the tree as JSON
    #[arg(long)]
    json: bool,

    /// Load parser options from a JSON file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Expected doctype: html, html401-strict, html401-transitional, auto or none
    #[arg(long, value_name = "DOCTYPE")]
    doctype: Option<DoctypeExpectation>,

    /// Parse the input as the content of this element
    #[arg(long, value_name = "CONTEXT")]
    fragment: Option<String>,

    /// Parse as if scripting were enabled
    #[arg(long)]
    scripting: bool,

    /// Abort on the first construct XML 1.0 cannot represent
    #[arg(long)]
    strict_xml: bool,

    /// Feed the parser this many characters at a time
    #[arg(long, value_name = "N")]
    chunk_size: Option<usize>,

    /// Do not print diagnostics
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Parse and print. Returns `false` when the parse was aborted.
fn run(cli: &Cli) -> Result<bool> {
    let input = load_input(cli)?;
    let config = build_config(cli)?;
    let fragment = config.fragment_context.is_some();

    // The report below prints the diagnostics, so the sink stays quiet.
    let mut parser =
        HtmlParser::with_error_sink(DomTree::new(), &config, Box::new(CollectingSink::quiet()));
    let result = feed_all(&mut parser, &input, cli.chunk_size)
        .and_then(|()| parser.end_with_diagnostics());
    let (tree, diagnostics) = match result {
        Ok(parsed) => parsed,
        Err(fatal) => {
            eprintln!("{} {fatal}", "fatal:".red().bold());
            return Ok(false);
        }
    };

    let root = if fragment {
        tree.document_element().unwrap_or(NodeId::ROOT)
    } else {
        NodeId::ROOT
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&tree_to_json(&tree, root))
            .context("failed to serialize the tree")?;
        println!("{json}");
    } else if fragment {
        for &child in tree.children(root) {
            print_tree(&tree, child, 0);
        }
    } else {
        print_tree(&tree, root, 0);
    }

    if !cli.quiet {
        report(&diagnostics);
    }
    Ok(true)
}

/// Read the document from `--html` or the file argument.
fn load_input(cli: &Cli) -> Result<String> {
    if let Some(ref html) = cli.html {
        Ok(html.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    } else {
        anyhow::bail!("no input: pass a file path or --html")
    }
}

/// Start from `--config` (or the defaults) and apply the command-line flags
/// on top.
fn build_config(cli: &Cli) -> Result<ParserConfig> {
    let mut config = match cli.config {
        Some(ref path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<ParserConfig>(&text)
                .with_context(|| format!("invalid parser config in {}", path.display()))?
        }
        None => ParserConfig::default(),
    };
    if cli.strict_xml {
        config = config.with_xml_policies(XmlViolationPolicy::Fatal);
    }
    if let Some(doctype) = cli.doctype {
        config = config.with_doctype_expectation(doctype);
    }
    if cli.scripting {
        config = config.with_scripting(true);
    }
    if let Some(ref context) = cli.fragment {
        config = config.with_fragment_context(context.clone());
    }
    Ok(config)
}

/// Feed `input` whole, or in pieces of `chunk_size` characters.
fn feed_all(
    parser: &mut HtmlParser<DomTree>,
    input: &str,
    chunk_size: Option<usize>,
) -> Result<(), FatalError> {
    let Some(size) = chunk_size.filter(|&size| size > 0) else {
        return parser.feed(input);
    };
    let mut start = 0;
    for (count, (offset, _)) in input.char_indices().enumerate() {
        if count > 0 && count % size == 0 {
            parser.feed(&input[start..offset])?;
            start = offset;
        }
    }
    parser.feed(&input[start..])
}

fn report(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    eprintln!();
    for diagnostic in diagnostics {
        let label = match diagnostic.severity {
            Severity::Error => "error".red().bold().to_string(),
            Severity::Warning => "warning".yellow().bold().to_string(),
            Severity::Fatal => "fatal".magenta().bold().to_string(),
        };
        eprintln!(
            "{}: {label}: {}",
            diagnostic.location.dimmed(),
            diagnostic.message
        );
    }
    let errors = diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.severity == Severity::Error)
        .count();
    let warnings = diagnostics.len() - errors;
    eprintln!("{errors} error(s), {warnings} warning(s)");
}
