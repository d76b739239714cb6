//! Parse diagnostics and the error-reporting seam shared by the tokenizer
//! and the tree builder.
//!
//! [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
//!
//! "This specification defines the parsing rules for HTML documents, whether
//! they are syntactically correct or not. Certain points in the parsing
//! algorithm are said to be parse errors. The error handling for parse errors
//! is well-defined: user agents must either act as described below when
//! encountering such problems, or must terminate processing at the first
//! error that they encounter for which they do not wish to apply the rules
//! described below."

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use thiserror::Error;

use crate::warning::warn_once;

/// A position in the input stream.
///
/// Both fields are 1-based and count Unicode code points, not bytes.
/// CR LF pairs count as a single line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
}

impl Location {
    /// The location before any input has been consumed.
    pub const START: Self = Self { line: 1, column: 1 };

    /// Create a new location.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A conformance error. Parsing continues with the recovery behavior.
    Error,
    /// Something legal but dubious, or an infoset change made by a policy.
    Warning,
    /// An error under a `Fatal` policy. Parsing stops after it is reported.
    Fatal,
}

/// A single message produced while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// How serious the problem is.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Where in the input the problem was detected.
    pub location: Location,
}

impl Diagnostic {
    /// Create a diagnostic.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>, location: Location) -> Self {
        Self {
            severity,
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.location, self.severity, self.message)
    }
}

/// The error returned when a parse is aborted by a `Fatal` policy.
///
/// Once a parser has returned this error it is poisoned: every later call
/// returns the same error without consuming more input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fatal parse error at {location}: {message}")]
pub struct FatalError {
    /// Description of the violation that stopped the parse.
    pub message: String,
    /// Location of the violation.
    pub location: Location,
}

impl FatalError {
    /// Create a fatal error.
    #[must_use]
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    /// The diagnostic form of this error, as delivered to an [`ErrorSink`].
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(Severity::Fatal, self.message.clone(), self.location)
    }
}

/// Receiver for parse errors and warnings.
///
/// The sink only observes. Reporting a fatal diagnostic does not stop the
/// parse by itself; the reporter returns a [`FatalError`] right after.
pub trait ErrorSink {
    /// A conformance error that the parser recovers from.
    fn report_error(&mut self, diagnostic: &Diagnostic);

    /// A warning, including infoset coercions made by a policy.
    fn report_warning(&mut self, diagnostic: &Diagnostic);

    /// A fatal error. The parser aborts after this call returns.
    fn report_fatal(&mut self, diagnostic: &Diagnostic);

    /// Hand over whatever the sink kept. Sinks that keep nothing return an
    /// empty list.
    fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// An [`ErrorSink`] that keeps every diagnostic in order.
///
/// Unless made quiet, each diagnostic is also echoed once to the terminal
/// through [`warn_once`].
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
    quiet: bool,
    component: &'static str,
}

impl CollectingSink {
    /// Create a sink that echoes diagnostics under the `"HTML Parser"` label.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
            quiet: false,
            component: "HTML Parser",
        }
    }

    /// Create a sink that only collects.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            diagnostics: Vec::new(),
            quiet: true,
            component: "HTML Parser",
        }
    }

    /// Change the component label used when echoing.
    #[must_use]
    pub const fn with_component(mut self, component: &'static str) -> Self {
        self.component = component;
        self
    }

    /// Every diagnostic received so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics of the given severity.
    pub fn of_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    /// Number of errors (fatal ones included).
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity != Severity::Warning)
            .count()
    }

    /// Number of warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.of_severity(Severity::Warning).count()
    }

    /// Take ownership of the collected diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn record(&mut self, diagnostic: &Diagnostic) {
        if !self.quiet {
            let _ = warn_once(self.component, diagnostic);
        }
        self.diagnostics.push(diagnostic.clone());
    }
}

impl ErrorSink for CollectingSink {
    fn report_error(&mut self, diagnostic: &Diagnostic) {
        self.record(diagnostic);
    }

    fn report_warning(&mut self, diagnostic: &Diagnostic) {
        self.record(diagnostic);
    }

    fn report_fatal(&mut self, diagnostic: &Diagnostic) {
        self.record(diagnostic);
    }

    fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

/// An [`ErrorSink`] that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ErrorSink for NullSink {
    fn report_error(&mut self, _diagnostic: &Diagnostic) {}
    fn report_warning(&mut self, _diagnostic: &Diagnostic) {}
    fn report_fatal(&mut self, _diagnostic: &Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_counts_by_severity() {
        let mut sink = CollectingSink::quiet();
        sink.report_error(&Diagnostic::new(Severity::Error, "a", Location::START));
        sink.report_warning(&Diagnostic::new(Severity::Warning, "b", Location::new(2, 3)));
        sink.report_fatal(&Diagnostic::new(Severity::Fatal, "c", Location::new(4, 1)));

        assert_eq!(sink.diagnostics().len(), 3);
        assert_eq!(sink.error_count(), 2);
        assert_eq!(sink.warning_count(), 1);
    }

    #[test]
    fn test_fatal_error_display() {
        let err = FatalError::new("Comment contained \u{201C}--\u{201D}.", Location::new(3, 7));
        assert_eq!(
            err.to_string(),
            "fatal parse error at 3:7: Comment contained \u{201C}--\u{201D}."
        );
        assert_eq!(err.to_diagnostic().severity, Severity::Fatal);
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new(Severity::Warning, "Legacy doctype.", Location::new(1, 16));
        assert_eq!(diagnostic.to_string(), "1:16 warning: Legacy doctype.");
        assert_eq!(Severity::Fatal.to_string(), "fatal");
    }
}
